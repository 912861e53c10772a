// File: ./src/writer.rs
// Renders the dashboard body and performs the minimal diffed write
use crate::model::{CHECKBOX_PREFIX, ChecklistItem, HEADING_MARKER};
use crate::store::{DocumentStore, StoreError};
use std::collections::HashSet;
use tracing::debug;

/// Result of one dashboard write attempt. `added` / `removed` count item
/// lines, compared by exact string value across the whole body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    pub content_changed: bool,
    pub added: usize,
    pub removed: usize,
}

/// Builds the full dashboard body: one `## 📄 [[path]]` heading per source
/// document (first-seen order), its item lines beneath it, a blank line
/// between groups, exactly one trailing newline and no leading blank line.
pub fn render(items: &[ChecklistItem]) -> String {
    let mut order: Vec<&str> = Vec::new();
    for item in items {
        if !order.contains(&item.source.as_str()) {
            order.push(&item.source);
        }
    }

    let mut body = String::new();
    for source in order {
        body.push_str(&format!("## {} [[{}]]\n", HEADING_MARKER, source));
        for item in items.iter().filter(|i| i.source == source) {
            body.push_str(&item.text);
            body.push('\n');
        }
        body.push('\n');
    }
    normalize(&body)
}

/// Trims surrounding whitespace and ensures exactly one trailing newline.
fn normalize(body: &str) -> String {
    format!("{}\n", body.trim())
}

fn item_lines(body: &str) -> Vec<&str> {
    body.lines()
        .filter(|l| l.starts_with(CHECKBOX_PREFIX))
        .collect()
}

/// Writes the rendered dashboard to `target` through the store, but only
/// when the normalized body actually differs from what is already there.
/// At most one create-or-modify call is issued per invocation.
pub async fn write_dashboard<S: DocumentStore>(
    store: &S,
    target: &str,
    items: &[ChecklistItem],
) -> Result<WriteOutcome, StoreError> {
    let new_body = render(items);
    let new_lines = item_lines(&new_body);

    if store.exists(target).await?.is_none() {
        debug!(target_path = target, "dashboard does not exist, creating");
        store.create(target, &new_body).await?;
        return Ok(WriteOutcome {
            content_changed: true,
            added: new_lines.len(),
            removed: 0,
        });
    }

    let old_body = normalize(&store.read(target).await?);
    if old_body == new_body {
        return Ok(WriteOutcome {
            content_changed: false,
            added: 0,
            removed: 0,
        });
    }

    let old_lines = item_lines(&old_body);
    let old_set: HashSet<&str> = old_lines.iter().copied().collect();
    let new_set: HashSet<&str> = new_lines.iter().copied().collect();
    let added = new_lines.iter().filter(|l| !old_set.contains(**l)).count();
    let removed = old_lines.iter().filter(|l| !new_set.contains(**l)).count();

    store.modify(target, &new_body).await?;
    Ok(WriteOutcome {
        content_changed: true,
        added,
        removed,
    })
}
