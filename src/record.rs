//! Owned, point-in-time snapshot values decoded from accounting records.
//!
//! Each value is constructed fresh per read and owned by the caller; the
//! reader keeps no reference after returning it. Field order within each
//! struct mirrors the record's published field list and is part of the
//! stable contract with downstream consumers.
//!
//! Durations are raw kernel `(sec, nsec)` pairs. A conformant kernel keeps
//! the nanosecond component in `0..1_000_000_000`; this layer passes the
//! values through without validation, clamping or unit conversion.

use serde::Serialize;

/// One kernel `timestruc_t`: seconds and nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Timespec {
    pub sec: i64,
    pub nsec: i64,
}

/// Process cpu times, from `/proc/<pid>/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcStatus {
    pub pid: i32,
    /// User cpu time.
    pub utime: Timespec,
    /// System cpu time.
    pub stime: Timespec,
    /// Sum of reaped children's user cpu time.
    pub cutime: Timespec,
    /// Sum of reaped children's system cpu time.
    pub cstime: Timespec,
}

/// Process identity and sizing, from `/proc/<pid>/psinfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcInfo {
    pub pid: i32,
    pub ppid: i32,
    /// Real user id.
    pub uid: u32,
    /// Effective user id.
    pub euid: u32,
    /// Real group id.
    pub gid: u32,
    /// Effective group id.
    pub egid: u32,
    /// Number of active lwps in the process.
    pub nlwp: i32,
    /// Process image size, in kilobytes.
    pub size: u64,
    /// Resident set size, in kilobytes.
    pub rssize: u64,
    /// Start time, seconds since the epoch.
    pub start: i64,
    /// Total (user + system) cpu time.
    pub time: Timespec,
    /// Reaped children's cpu time.
    pub ctime: Timespec,
    pub taskid: i32,
    pub projid: i32,
    pub zoneid: i32,
    pub contract: i32,
    /// Executable basename, kernel-truncated to 15 characters.
    pub fname: String,
}

/// Lwp cpu times, from `/proc/<pid>/lwp/<lwpid>/lwpstatus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LwpStatus {
    pub pid: i32,
    pub lwpid: i32,
    pub utime: Timespec,
    pub stime: Timespec,
}

/// Lwp identity, from `/proc/<pid>/lwp/<lwpid>/lwpsinfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LwpInfo {
    pub pid: i32,
    pub lwpid: i32,
    /// Lwp start time, seconds since the epoch.
    pub start: i64,
    /// Cpu time consumed by this lwp.
    pub time: Timespec,
}

/// Resource usage, from `/proc/<pid>/usage` or
/// `/proc/<pid>/lwp/<lwpid>/lwpusage` (same record shape for both).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceUsage {
    /// Lwp id; 0 when the record aggregates the whole process.
    pub lwpid: i32,
    /// Number of contributing lwps.
    pub count: i32,
    /// Real (elapsed) time.
    pub rtime: Timespec,
    /// User cpu time.
    pub utime: Timespec,
    /// System cpu time.
    pub stime: Timespec,
    /// Minor page faults.
    pub minf: u64,
    /// Major page faults.
    pub majf: u64,
    /// Swaps.
    pub nswap: u64,
    /// Input blocks.
    pub inblk: u64,
    /// Output blocks.
    pub oublk: u64,
    /// Messages sent.
    pub msnd: u64,
    /// Messages received.
    pub mrcv: u64,
    /// Signals received.
    pub sigs: u64,
    /// Voluntary context switches.
    pub vctx: u64,
    /// Involuntary context switches.
    pub ictx: u64,
    /// System calls.
    pub sysc: u64,
    /// Characters read and written.
    pub ioch: u64,
}
