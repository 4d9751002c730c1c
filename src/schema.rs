//! Record kinds and the fixed binary layout of each accounting record.
//!
//! The kernel publishes each record as a fixed-size native struct. Instead of
//! casting raw bytes to a struct, the layout is written out as explicit
//! offset constants so the decoders in [`crate::decode`] can be exercised on
//! synthetic buffers without a live proc filesystem.
//!
//! Offsets and sizes describe the illumos amd64 layout (LP64, little-endian,
//! `timestruc_t` = two `i64`). Multi-byte fields are decoded in native byte
//! order, so the reader is only correct on a host whose native layout matches
//! these definitions. That ABI dependency is inherent in the record format;
//! it is documented here rather than papered over.

use std::fmt;

/// The six pseudo-files this crate knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `/proc/<pid>/status` — process cpu times (`pstatus_t`).
    Status,
    /// `/proc/<pid>/psinfo` — process identity and sizing (`psinfo_t`).
    Info,
    /// `/proc/<pid>/usage` — process resource usage (`prusage_t`).
    Usage,
    /// `/proc/<pid>/lwp/<lwpid>/lwpstatus` — lwp cpu times (`lwpstatus_t`).
    LwpStatus,
    /// `/proc/<pid>/lwp/<lwpid>/lwpsinfo` — lwp identity (`lwpsinfo_t`).
    LwpInfo,
    /// `/proc/<pid>/lwp/<lwpid>/lwpusage` — lwp resource usage (`prusage_t`).
    LwpUsage,
}

impl RecordKind {
    /// File name of the backing pseudo-file.
    pub fn file_name(self) -> &'static str {
        match self {
            RecordKind::Status => "status",
            RecordKind::Info => "psinfo",
            RecordKind::Usage => "usage",
            RecordKind::LwpStatus => "lwpstatus",
            RecordKind::LwpInfo => "lwpsinfo",
            RecordKind::LwpUsage => "lwpusage",
        }
    }

    /// Whether the record lives under the per-lwp directory.
    pub fn per_lwp(self) -> bool {
        matches!(
            self,
            RecordKind::LwpStatus | RecordKind::LwpInfo | RecordKind::LwpUsage
        )
    }

    /// Expected size of one record in bytes. A read returning any other
    /// length is a total failure, never a partial record.
    pub fn size(self) -> usize {
        match self {
            RecordKind::Status => pstatus::SIZE,
            RecordKind::Info => psinfo::SIZE,
            RecordKind::Usage | RecordKind::LwpUsage => prusage::SIZE,
            RecordKind::LwpStatus => lwpstatus::SIZE,
            RecordKind::LwpInfo => lwpsinfo::SIZE,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// `pstatus_t` layout.
pub mod pstatus {
    pub const SIZE: usize = 1504;

    pub const PR_PID: usize = 8;
    pub const PR_UTIME: usize = 80;
    pub const PR_STIME: usize = 96;
    pub const PR_CUTIME: usize = 112;
    pub const PR_CSTIME: usize = 128;
}

/// `psinfo_t` layout.
pub mod psinfo {
    pub const SIZE: usize = 416;

    pub const PR_NLWP: usize = 4;
    pub const PR_PID: usize = 8;
    pub const PR_PPID: usize = 12;
    pub const PR_UID: usize = 24;
    pub const PR_EUID: usize = 28;
    pub const PR_GID: usize = 32;
    pub const PR_EGID: usize = 36;
    pub const PR_SIZE: usize = 48;
    pub const PR_RSSIZE: usize = 56;
    pub const PR_START: usize = 88;
    pub const PR_TIME: usize = 104;
    pub const PR_CTIME: usize = 120;
    pub const PR_FNAME: usize = 136;
    /// Width of the kernel-truncated executable basename (`PRFNSZ`).
    pub const PR_FNAME_LEN: usize = 16;
    pub const PR_TASKID: usize = 260;
    pub const PR_PROJID: usize = 264;
    pub const PR_ZONEID: usize = 276;
    pub const PR_CONTRACT: usize = 280;
}

/// `lwpstatus_t` layout.
pub mod lwpstatus {
    pub const SIZE: usize = 1120;

    pub const PR_LWPID: usize = 4;
    pub const PR_UTIME: usize = 480;
    pub const PR_STIME: usize = 496;
}

/// `lwpsinfo_t` layout.
pub mod lwpsinfo {
    pub const SIZE: usize = 128;

    pub const PR_LWPID: usize = 4;
    pub const PR_START: usize = 40;
    pub const PR_TIME: usize = 56;
}

/// `prusage_t` layout, shared by the process- and lwp-level usage files.
pub mod prusage {
    pub const SIZE: usize = 504;

    /// 0 for the process-level aggregate record.
    pub const PR_LWPID: usize = 0;
    pub const PR_COUNT: usize = 4;
    pub const PR_RTIME: usize = 56;
    pub const PR_UTIME: usize = 72;
    pub const PR_STIME: usize = 88;

    pub const PR_MINF: usize = 328;
    pub const PR_MAJF: usize = 336;
    pub const PR_NSWAP: usize = 344;
    pub const PR_INBLK: usize = 352;
    pub const PR_OUBLK: usize = 360;
    pub const PR_MSND: usize = 368;
    pub const PR_MRCV: usize = 376;
    pub const PR_SIGS: usize = 384;
    pub const PR_VCTX: usize = 392;
    pub const PR_ICTX: usize = 400;
    pub const PR_SYSC: usize = 408;
    pub const PR_IOCH: usize = 416;
}
