// File: ./src/storage.rs
// Local-file helpers shared by settings persistence
use anyhow::Result;
use fs2::FileExt;
use std::fs;
use std::path::Path;

/// Atomic write: Write to .tmp file then rename
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

/// Runs `f` while holding an exclusive lock on a .lock sibling of `path`,
/// so two todoboard processes never interleave a settings read-modify-write.
pub fn with_lock<P: AsRef<Path>, T, F: FnOnce() -> Result<T>>(path: P, f: F) -> Result<T> {
    let lock_path = path.as_ref().with_extension("lock");
    let lock_file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(&lock_path)?;
    lock_file.lock_exclusive()?;
    let result = f();
    let _ = fs2::FileExt::unlock(&lock_file);
    result
}
