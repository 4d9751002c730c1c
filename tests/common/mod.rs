//! Fixture helpers: synthetic accounting records and proc-root trees.
//!
//! Builders write field values at the published schema offsets, producing
//! byte-exact stand-ins for the kernel's records inside a tempdir tree.

use std::fs;
use std::path::Path;

use procsnap::schema::{lwpsinfo, lwpstatus, prusage, psinfo, pstatus};

pub fn put_i32(buf: &mut [u8], off: usize, v: i32) {
    buf[off..off + 4].copy_from_slice(&v.to_ne_bytes());
}

pub fn put_u32(buf: &mut [u8], off: usize, v: u32) {
    buf[off..off + 4].copy_from_slice(&v.to_ne_bytes());
}

pub fn put_i64(buf: &mut [u8], off: usize, v: i64) {
    buf[off..off + 8].copy_from_slice(&v.to_ne_bytes());
}

pub fn put_u64(buf: &mut [u8], off: usize, v: u64) {
    buf[off..off + 8].copy_from_slice(&v.to_ne_bytes());
}

pub fn put_timespec(buf: &mut [u8], off: usize, sec: i64, nsec: i64) {
    put_i64(buf, off, sec);
    put_i64(buf, off + 8, nsec);
}

/// A pstatus record with recognizable cpu times derived from the pid.
pub fn status_record(pid: i32) -> Vec<u8> {
    let mut raw = vec![0u8; pstatus::SIZE];
    put_i32(&mut raw, pstatus::PR_PID, pid);
    put_timespec(&mut raw, pstatus::PR_UTIME, pid as i64 * 10, 100);
    put_timespec(&mut raw, pstatus::PR_STIME, pid as i64 * 3, 200);
    put_timespec(&mut raw, pstatus::PR_CUTIME, 1, 300);
    put_timespec(&mut raw, pstatus::PR_CSTIME, 2, 400);
    raw
}

/// A psinfo record owned by uid/gid 0 with the given executable name.
pub fn info_record(pid: i32, fname: &str) -> Vec<u8> {
    let mut raw = vec![0u8; psinfo::SIZE];
    put_i32(&mut raw, psinfo::PR_NLWP, 2);
    put_i32(&mut raw, psinfo::PR_PID, pid);
    put_i32(&mut raw, psinfo::PR_PPID, 1);
    put_u32(&mut raw, psinfo::PR_UID, 0);
    put_u32(&mut raw, psinfo::PR_EUID, 0);
    put_u32(&mut raw, psinfo::PR_GID, 0);
    put_u32(&mut raw, psinfo::PR_EGID, 0);
    put_u64(&mut raw, psinfo::PR_SIZE, 1024);
    put_u64(&mut raw, psinfo::PR_RSSIZE, 512);
    put_i64(&mut raw, psinfo::PR_START, 1_700_000_000);
    put_timespec(&mut raw, psinfo::PR_TIME, 5, 50);
    put_timespec(&mut raw, psinfo::PR_CTIME, 6, 60);
    put_i32(&mut raw, psinfo::PR_TASKID, 10);
    put_i32(&mut raw, psinfo::PR_PROJID, 11);
    put_i32(&mut raw, psinfo::PR_ZONEID, 0);
    put_i32(&mut raw, psinfo::PR_CONTRACT, 12);
    let name = fname.as_bytes();
    let n = name.len().min(psinfo::PR_FNAME_LEN - 1);
    raw[psinfo::PR_FNAME..psinfo::PR_FNAME + n].copy_from_slice(&name[..n]);
    raw
}

/// A prusage record; `lwpid` 0 marks the process-level aggregate.
pub fn usage_record(lwpid: i32, count: i32) -> Vec<u8> {
    let mut raw = vec![0u8; prusage::SIZE];
    put_i32(&mut raw, prusage::PR_LWPID, lwpid);
    put_i32(&mut raw, prusage::PR_COUNT, count);
    put_timespec(&mut raw, prusage::PR_RTIME, 100, 1);
    put_timespec(&mut raw, prusage::PR_UTIME, 60, 2);
    put_timespec(&mut raw, prusage::PR_STIME, 40, 3);
    put_u64(&mut raw, prusage::PR_MINF, 1);
    put_u64(&mut raw, prusage::PR_MAJF, 2);
    put_u64(&mut raw, prusage::PR_NSWAP, 3);
    put_u64(&mut raw, prusage::PR_INBLK, 4);
    put_u64(&mut raw, prusage::PR_OUBLK, 5);
    put_u64(&mut raw, prusage::PR_MSND, 6);
    put_u64(&mut raw, prusage::PR_MRCV, 7);
    put_u64(&mut raw, prusage::PR_SIGS, 8);
    put_u64(&mut raw, prusage::PR_VCTX, 9);
    put_u64(&mut raw, prusage::PR_ICTX, 10);
    put_u64(&mut raw, prusage::PR_SYSC, 11);
    put_u64(&mut raw, prusage::PR_IOCH, 12);
    raw
}

pub fn lwp_status_record(lwpid: i32) -> Vec<u8> {
    let mut raw = vec![0u8; lwpstatus::SIZE];
    put_i32(&mut raw, lwpstatus::PR_LWPID, lwpid);
    put_timespec(&mut raw, lwpstatus::PR_UTIME, lwpid as i64, 500);
    put_timespec(&mut raw, lwpstatus::PR_STIME, lwpid as i64 * 2, 600);
    raw
}

pub fn lwp_info_record(lwpid: i32) -> Vec<u8> {
    let mut raw = vec![0u8; lwpsinfo::SIZE];
    put_i32(&mut raw, lwpsinfo::PR_LWPID, lwpid);
    put_i64(&mut raw, lwpsinfo::PR_START, 1_700_000_100);
    put_timespec(&mut raw, lwpsinfo::PR_TIME, 7, 70);
    raw
}

/// Writes the three process-level record files for `pid` under `root`.
pub fn write_process(root: &Path, pid: i32, fname: &str) {
    let dir = root.join(pid.to_string());
    fs::create_dir_all(&dir).expect("Failed to create process dir");
    fs::write(dir.join("status"), status_record(pid)).expect("Failed to write status");
    fs::write(dir.join("psinfo"), info_record(pid, fname)).expect("Failed to write psinfo");
    fs::write(dir.join("usage"), usage_record(0, 2)).expect("Failed to write usage");
}

/// Writes the three lwp-level record files for `pid`/`lwpid` under `root`.
pub fn write_lwp(root: &Path, pid: i32, lwpid: i32) {
    let dir = root.join(pid.to_string()).join("lwp").join(lwpid.to_string());
    fs::create_dir_all(&dir).expect("Failed to create lwp dir");
    fs::write(dir.join("lwpstatus"), lwp_status_record(lwpid)).expect("Failed to write lwpstatus");
    fs::write(dir.join("lwpsinfo"), lwp_info_record(lwpid)).expect("Failed to write lwpsinfo");
    fs::write(dir.join("lwpusage"), usage_record(lwpid, 1)).expect("Failed to write lwpusage");
}
