use todoboard::exclude::is_excluded;
use todoboard::extract::extract;

#[test]
fn extracts_unchecked_items_only() {
    let content = "- [ ] Buy milk\n-[ ]  Call Bob  \n- [x] Done already\n- [ ] \n";
    let items = extract(content, "notes.md");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].text, "- [ ] Buy milk");
    assert_eq!(items[1].text, "- [ ] Call Bob");
    assert!(items.iter().all(|i| i.source == "notes.md"));
}

#[test]
fn preserves_line_order() {
    let content = "intro text\n- [ ] first\nsome prose\n- [ ] second\n- [ ] third\n";
    let items = extract(content, "a.md");
    let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(texts, ["- [ ] first", "- [ ] second", "- [ ] third"]);
}

#[test]
fn tolerates_indentation_and_loose_brackets() {
    // Leading whitespace and extra whitespace inside the brackets are fine.
    let items = extract("   - [  ] indented task\n", "a.md");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "- [ ] indented task");

    // Empty brackets still count as an unchecked box.
    let items = extract("- [] terse\n", "a.md");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "- [ ] terse");
}

#[test]
fn rejects_near_misses() {
    assert!(extract("* [ ] star bullet\n", "a.md").is_empty());
    assert!(extract("- [x] checked\n", "a.md").is_empty());
    assert!(extract("- [X] checked\n", "a.md").is_empty());
    assert!(extract("[ ] no dash\n", "a.md").is_empty());
    assert!(extract("- [ ]no gap after box\n", "a.md").is_empty());
    assert!(extract("just text\n", "a.md").is_empty());
}

#[test]
fn excludes_the_dashboard_itself() {
    assert!(is_excluded("Todo Dashboard.md", "Todo Dashboard.md", &[]));
    assert!(!is_excluded("other.md", "Todo Dashboard.md", &[]));
}

#[test]
fn prefix_exclusion_is_directory_scoped() {
    let prefixes = vec!["archive".to_string()];
    assert!(is_excluded("archive/notes.md", "t.md", &prefixes));
    assert!(is_excluded("archive/deep/notes.md", "t.md", &prefixes));
    // A prefix names a directory, not a string prefix of the filename.
    assert!(!is_excluded("archived-notes.md", "t.md", &prefixes));
    assert!(!is_excluded("archive.md", "t.md", &prefixes));
}

#[test]
fn prefix_entries_are_trimmed_and_blank_ones_ignored() {
    let prefixes = vec!["  archive  ".to_string(), "".to_string(), "   ".to_string()];
    assert!(is_excluded("archive/notes.md", "t.md", &prefixes));
    assert!(!is_excluded("notes.md", "t.md", &prefixes));

    let with_slash = vec!["archive/".to_string()];
    assert!(is_excluded("archive/notes.md", "t.md", &with_slash));
}
