//! Error and subject types for snapshot reads.
//!
//! A read either yields a whole record or [`NotFound`]; the error is
//! deliberately undifferentiated. An absent pid, a permission failure and a
//! truncated record all look the same to callers, who can only re-issue the
//! read.

use std::fmt;

use thiserror::Error;

use crate::schema::RecordKind;

/// The process (and optionally the lwp) addressed by a read request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subject {
    /// Process id.
    pub pid: i32,
    /// Lwp id, for per-thread record kinds.
    pub lwpid: Option<i32>,
}

impl Subject {
    /// Addresses a process-level record.
    pub fn process(pid: i32) -> Self {
        Subject { pid, lwpid: None }
    }

    /// Addresses a record of one lwp within a process.
    pub fn lwp(pid: i32, lwpid: i32) -> Self {
        Subject {
            pid,
            lwpid: Some(lwpid),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lwpid {
            Some(lwpid) => write!(f, "pid {} lwp {}", self.pid, lwpid),
            None => write!(f, "pid {}", self.pid),
        }
    }
}

/// The subject's record could not be produced.
///
/// Covers "no such process", "no such lwp", "permission denied" and
/// "record shorter than expected" alike. A record is whole or absent;
/// no partially decoded value is ever returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no {kind} record for {subject}")]
pub struct NotFound {
    /// The record kind that was requested.
    pub kind: RecordKind,
    /// The subject that was addressed.
    pub subject: Subject,
}
