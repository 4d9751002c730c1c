//! Enumeration of pids and lwpids under a proc root.
//!
//! Discovery only looks at directory names; whether a pid is still alive
//! when its records are read is decided by the read itself, since a process
//! can exit between enumeration and read.

use std::fs;
use std::path::Path;

/// Ids of the numerically-named entries in a directory.
fn numeric_entries(dir: &Path) -> Option<Vec<i32>> {
    let entries = fs::read_dir(dir).ok()?;
    let mut out = Vec::new();
    for entry in entries.flatten() {
        let p = entry.path();
        let name = match p.file_name().and_then(|s| s.to_str()) {
            Some(v) => v,
            None => continue,
        };
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        if let Ok(id) = name.parse() {
            out.push(id);
        }
    }
    Some(out)
}

/// Pids of all processes currently visible under `root`.
pub fn processes(root: &Path) -> Vec<i32> {
    numeric_entries(root).unwrap_or_default()
}

/// Lwpids of the process `pid`, from `<root>/<pid>/lwp`.
///
/// Returns `None` (not an empty set) when the process does not exist.
pub fn lwps(root: &Path, pid: i32) -> Option<Vec<i32>> {
    numeric_entries(&root.join(pid.to_string()).join("lwp"))
}
