//! One-shot reads of fixed-size accounting records from the proc root.
//!
//! Every call is self-contained: build the path, open read-only, issue one
//! read of the record size, validate the length, decode, close. Nothing is
//! shared between calls, so concurrent reads for the same or different
//! subjects are independent. A read that fails cannot be distinguished
//! beyond [`NotFound`]; callers wanting fresher data simply read again.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::decode;
use crate::error::{NotFound, Subject};
use crate::record::{LwpInfo, LwpStatus, ProcInfo, ProcStatus, ResourceUsage};
use crate::scan;
use crate::schema::RecordKind;

/// Reader over one proc filesystem root, `/proc` by default.
///
/// The root is injectable so tests can point the reader at a fixture tree.
#[derive(Debug, Clone)]
pub struct SnapshotReader {
    root: PathBuf,
}

impl Default for SnapshotReader {
    fn default() -> Self {
        SnapshotReader::with_root("/proc")
    }
}

impl SnapshotReader {
    /// Creates a reader for the standard `/proc` mount.
    pub fn new() -> Self {
        SnapshotReader::default()
    }

    /// Creates a reader over an alternate proc root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        SnapshotReader { root: root.into() }
    }

    /// The proc root this reader addresses.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Cpu times of a process, from `<root>/<pid>/status`.
    pub fn process_status(&self, pid: i32) -> Result<ProcStatus, NotFound> {
        let subject = Subject::process(pid);
        let raw = self.read_raw(RecordKind::Status, subject)?;
        decode::decode_status(&raw).ok_or(NotFound {
            kind: RecordKind::Status,
            subject,
        })
    }

    /// Identity and sizing of a process, from `<root>/<pid>/psinfo`.
    pub fn process_info(&self, pid: i32) -> Result<ProcInfo, NotFound> {
        let subject = Subject::process(pid);
        let raw = self.read_raw(RecordKind::Info, subject)?;
        decode::decode_info(&raw).ok_or(NotFound {
            kind: RecordKind::Info,
            subject,
        })
    }

    /// Resource usage of a whole process, from `<root>/<pid>/usage`.
    pub fn process_usage(&self, pid: i32) -> Result<ResourceUsage, NotFound> {
        let subject = Subject::process(pid);
        let raw = self.read_raw(RecordKind::Usage, subject)?;
        decode::decode_usage(&raw).ok_or(NotFound {
            kind: RecordKind::Usage,
            subject,
        })
    }

    /// Cpu times of one lwp, from `<root>/<pid>/lwp/<lwpid>/lwpstatus`.
    pub fn lwp_status(&self, pid: i32, lwpid: i32) -> Result<LwpStatus, NotFound> {
        let subject = Subject::lwp(pid, lwpid);
        let raw = self.read_raw(RecordKind::LwpStatus, subject)?;
        decode::decode_lwp_status(&raw, pid).ok_or(NotFound {
            kind: RecordKind::LwpStatus,
            subject,
        })
    }

    /// Identity of one lwp, from `<root>/<pid>/lwp/<lwpid>/lwpsinfo`.
    pub fn lwp_info(&self, pid: i32, lwpid: i32) -> Result<LwpInfo, NotFound> {
        let subject = Subject::lwp(pid, lwpid);
        let raw = self.read_raw(RecordKind::LwpInfo, subject)?;
        decode::decode_lwp_info(&raw, pid).ok_or(NotFound {
            kind: RecordKind::LwpInfo,
            subject,
        })
    }

    /// Resource usage of one lwp, from `<root>/<pid>/lwp/<lwpid>/lwpusage`.
    pub fn lwp_usage(&self, pid: i32, lwpid: i32) -> Result<ResourceUsage, NotFound> {
        let subject = Subject::lwp(pid, lwpid);
        let raw = self.read_raw(RecordKind::LwpUsage, subject)?;
        decode::decode_usage(&raw).ok_or(NotFound {
            kind: RecordKind::LwpUsage,
            subject,
        })
    }

    /// Pids of all processes currently visible under the root.
    pub fn processes(&self) -> Vec<i32> {
        scan::processes(&self.root)
    }

    /// Lwpids of the given process, or `None` if the process is gone.
    pub fn lwps(&self, pid: i32) -> Option<Vec<i32>> {
        scan::lwps(&self.root, pid)
    }

    /// Reads the raw bytes of one record.
    ///
    /// Exactly one read call is issued; anything other than the full record
    /// size coming back (short read, empty file, error) is a total failure.
    /// A per-lwp kind must be addressed with an lwp subject and a
    /// process-level kind without one; a mismatched pair names no file and
    /// reports `NotFound`.
    pub fn read_raw(&self, kind: RecordKind, subject: Subject) -> Result<Vec<u8>, NotFound> {
        let not_found = NotFound { kind, subject };
        if kind.per_lwp() != subject.lwpid.is_some() {
            debug!("{} does not address a {} record", subject, kind);
            return Err(not_found);
        }
        let path = self.record_path(kind, subject);

        let mut file = match File::open(&path) {
            Ok(f) => f,
            Err(e) => {
                debug!("open {} failed: {}", path.display(), e);
                return Err(not_found);
            }
        };

        let want = kind.size();
        let mut raw = vec![0u8; want];
        // Single read; the file closes on every return path when it drops.
        match file.read(&mut raw) {
            Ok(n) if n == want => Ok(raw),
            Ok(n) => {
                debug!("short read of {}: {} of {} bytes", path.display(), n, want);
                Err(not_found)
            }
            Err(e) => {
                debug!("read {} failed: {}", path.display(), e);
                Err(not_found)
            }
        }
    }

    /// Builds the pseudo-file path for a kind/subject pair. Ids are
    /// formatted as unpadded decimal; the path grows with the id width
    /// rather than assuming a fixed byte budget.
    fn record_path(&self, kind: RecordKind, subject: Subject) -> PathBuf {
        let mut path = self.root.join(subject.pid.to_string());
        if let Some(lwpid) = subject.lwpid {
            path.push("lwp");
            path.push(lwpid.to_string());
        }
        path.push(kind.file_name());
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_path_process_scope() {
        let r = SnapshotReader::with_root("/proc");
        assert_eq!(
            r.record_path(RecordKind::Info, Subject::process(1234)),
            PathBuf::from("/proc/1234/psinfo")
        );
        assert_eq!(
            r.record_path(RecordKind::Status, Subject::process(1)),
            PathBuf::from("/proc/1/status")
        );
    }

    #[test]
    fn test_record_path_lwp_scope() {
        let r = SnapshotReader::with_root("/proc");
        assert_eq!(
            r.record_path(RecordKind::LwpUsage, Subject::lwp(2147483647, 65535)),
            PathBuf::from("/proc/2147483647/lwp/65535/lwpusage")
        );
    }

    #[test]
    fn test_mismatched_subject_is_not_found() {
        let r = SnapshotReader::new();
        // Per-lwp kind with a process subject and vice versa name no file.
        assert!(r.read_raw(RecordKind::LwpStatus, Subject::process(1)).is_err());
        assert!(r.read_raw(RecordKind::Status, Subject::lwp(1, 1)).is_err());
    }
}
