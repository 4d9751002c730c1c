//! Pure decoders from raw record bytes to owned snapshot values.
//!
//! Each decoder takes the full fixed-size record and copies the named fields
//! out at the offsets published in [`crate::schema`]. A buffer of any other
//! length yields `None`; a partially decoded value is never produced. The
//! decoders touch no filesystem, so they can be tested against synthetic
//! buffers directly.
//!
//! Only representation-narrowing copies happen here (e.g. a native `size_t`
//! read as `u64`); no unit conversion and no validation of the
//! kernel-supplied values.

use crate::record::{LwpInfo, LwpStatus, ProcInfo, ProcStatus, ResourceUsage, Timespec};
use crate::schema::{lwpsinfo, lwpstatus, prusage, psinfo, pstatus};

fn read_i32(buf: &[u8], off: usize) -> i32 {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[off..off + 4]);
    i32::from_ne_bytes(b)
}

fn read_u32(buf: &[u8], off: usize) -> u32 {
    let mut b = [0u8; 4];
    b.copy_from_slice(&buf[off..off + 4]);
    u32::from_ne_bytes(b)
}

fn read_i64(buf: &[u8], off: usize) -> i64 {
    let mut b = [0u8; 8];
    b.copy_from_slice(&buf[off..off + 8]);
    i64::from_ne_bytes(b)
}

fn read_u64(buf: &[u8], off: usize) -> u64 {
    let mut b = [0u8; 8];
    b.copy_from_slice(&buf[off..off + 8]);
    u64::from_ne_bytes(b)
}

fn read_timespec(buf: &[u8], off: usize) -> Timespec {
    Timespec {
        sec: read_i64(buf, off),
        nsec: read_i64(buf, off + 8),
    }
}

/// Reads a fixed-width, NUL-terminated string field.
fn read_cstr(buf: &[u8], off: usize, len: usize) -> String {
    let field = &buf[off..off + len];
    let end = field.iter().position(|&b| b == 0).unwrap_or(len);
    String::from_utf8_lossy(&field[..end]).into_owned()
}

/// Decodes a `pstatus_t` record.
pub fn decode_status(raw: &[u8]) -> Option<ProcStatus> {
    if raw.len() != pstatus::SIZE {
        return None;
    }
    Some(ProcStatus {
        pid: read_i32(raw, pstatus::PR_PID),
        utime: read_timespec(raw, pstatus::PR_UTIME),
        stime: read_timespec(raw, pstatus::PR_STIME),
        cutime: read_timespec(raw, pstatus::PR_CUTIME),
        cstime: read_timespec(raw, pstatus::PR_CSTIME),
    })
}

/// Decodes a `psinfo_t` record.
pub fn decode_info(raw: &[u8]) -> Option<ProcInfo> {
    if raw.len() != psinfo::SIZE {
        return None;
    }
    Some(ProcInfo {
        pid: read_i32(raw, psinfo::PR_PID),
        ppid: read_i32(raw, psinfo::PR_PPID),
        uid: read_u32(raw, psinfo::PR_UID),
        euid: read_u32(raw, psinfo::PR_EUID),
        gid: read_u32(raw, psinfo::PR_GID),
        egid: read_u32(raw, psinfo::PR_EGID),
        nlwp: read_i32(raw, psinfo::PR_NLWP),
        size: read_u64(raw, psinfo::PR_SIZE),
        rssize: read_u64(raw, psinfo::PR_RSSIZE),
        start: read_i64(raw, psinfo::PR_START),
        time: read_timespec(raw, psinfo::PR_TIME),
        ctime: read_timespec(raw, psinfo::PR_CTIME),
        taskid: read_i32(raw, psinfo::PR_TASKID),
        projid: read_i32(raw, psinfo::PR_PROJID),
        zoneid: read_i32(raw, psinfo::PR_ZONEID),
        contract: read_i32(raw, psinfo::PR_CONTRACT),
        fname: read_cstr(raw, psinfo::PR_FNAME, psinfo::PR_FNAME_LEN),
    })
}

/// Decodes an `lwpstatus_t` record. The record itself does not carry the
/// pid, so the caller supplies it, as the kernel file is already addressed
/// by pid.
pub fn decode_lwp_status(raw: &[u8], pid: i32) -> Option<LwpStatus> {
    if raw.len() != lwpstatus::SIZE {
        return None;
    }
    Some(LwpStatus {
        pid,
        lwpid: read_i32(raw, lwpstatus::PR_LWPID),
        utime: read_timespec(raw, lwpstatus::PR_UTIME),
        stime: read_timespec(raw, lwpstatus::PR_STIME),
    })
}

/// Decodes an `lwpsinfo_t` record. The pid is caller-supplied, as for
/// [`decode_lwp_status`].
pub fn decode_lwp_info(raw: &[u8], pid: i32) -> Option<LwpInfo> {
    if raw.len() != lwpsinfo::SIZE {
        return None;
    }
    Some(LwpInfo {
        pid,
        lwpid: read_i32(raw, lwpsinfo::PR_LWPID),
        start: read_i64(raw, lwpsinfo::PR_START),
        time: read_timespec(raw, lwpsinfo::PR_TIME),
    })
}

/// Decodes a `prusage_t` record (process- or lwp-level).
pub fn decode_usage(raw: &[u8]) -> Option<ResourceUsage> {
    if raw.len() != prusage::SIZE {
        return None;
    }
    Some(ResourceUsage {
        lwpid: read_i32(raw, prusage::PR_LWPID),
        count: read_i32(raw, prusage::PR_COUNT),
        rtime: read_timespec(raw, prusage::PR_RTIME),
        utime: read_timespec(raw, prusage::PR_UTIME),
        stime: read_timespec(raw, prusage::PR_STIME),
        minf: read_u64(raw, prusage::PR_MINF),
        majf: read_u64(raw, prusage::PR_MAJF),
        nswap: read_u64(raw, prusage::PR_NSWAP),
        inblk: read_u64(raw, prusage::PR_INBLK),
        oublk: read_u64(raw, prusage::PR_OUBLK),
        msnd: read_u64(raw, prusage::PR_MSND),
        mrcv: read_u64(raw, prusage::PR_MRCV),
        sigs: read_u64(raw, prusage::PR_SIGS),
        vctx: read_u64(raw, prusage::PR_VCTX),
        ictx: read_u64(raw, prusage::PR_ICTX),
        sysc: read_u64(raw, prusage::PR_SYSC),
        ioch: read_u64(raw, prusage::PR_IOCH),
    })
}
