//! Numeric id to name resolution (and back) for the four namespaces a
//! record can reference: users, groups, projects and zones.
//!
//! The two directions are deliberately asymmetric: name lookups return
//! `Option<String>` (an unknown id is absent, not an error), while id
//! lookups return the sentinel `-1` for any name without a match. The
//! sentinel form suits callers that store or index by id; the option form
//! suits display paths. Inputs are handed to the underlying namespace
//! service as-is, with no validation first — an empty name is simply a name
//! that matches nothing.
//!
//! Users and groups come from the host passwd/group databases. Projects and
//! zones only exist on illumos and Solaris; on other hosts those lookups
//! uniformly report unknown.

use nix::unistd::{Gid, Group, Uid, User};

/// Name of the user with id `uid`, if the passwd database knows it.
pub fn user_name(uid: u32) -> Option<String> {
    User::from_uid(Uid::from_raw(uid)).ok().flatten().map(|u| u.name)
}

/// Id of the named user, or -1 if there is no such user.
pub fn user_id(name: &str) -> i32 {
    match User::from_name(name) {
        Ok(Some(user)) => user.uid.as_raw() as i32,
        _ => -1,
    }
}

/// Name of the group with id `gid`, if the group database knows it.
pub fn group_name(gid: u32) -> Option<String> {
    Group::from_gid(Gid::from_raw(gid)).ok().flatten().map(|g| g.name)
}

/// Id of the named group, or -1 if there is no such group.
pub fn group_id(name: &str) -> i32 {
    match Group::from_name(name) {
        Ok(Some(group)) => group.gid.as_raw() as i32,
        _ => -1,
    }
}

/// Name of the project with id `projid`, if the project database knows it.
pub fn project_name(projid: i32) -> Option<String> {
    #[cfg(any(target_os = "illumos", target_os = "solaris"))]
    {
        native::project_name(projid)
    }
    #[cfg(not(any(target_os = "illumos", target_os = "solaris")))]
    {
        let _ = projid;
        None
    }
}

/// Id of the named project, or -1 if there is no such project.
///
/// The underlying service already encodes failure as -1, so its result is
/// returned directly.
pub fn project_id(name: &str) -> i32 {
    #[cfg(any(target_os = "illumos", target_os = "solaris"))]
    {
        native::project_id(name)
    }
    #[cfg(not(any(target_os = "illumos", target_os = "solaris")))]
    {
        let _ = name;
        -1
    }
}

/// Name of the zone with id `zoneid`, if such a zone exists.
pub fn zone_name(zoneid: i32) -> Option<String> {
    #[cfg(any(target_os = "illumos", target_os = "solaris"))]
    {
        native::zone_name(zoneid)
    }
    #[cfg(not(any(target_os = "illumos", target_os = "solaris")))]
    {
        let _ = zoneid;
        None
    }
}

/// Id of the named zone, or -1 if there is no such zone.
///
/// As with [`project_id`], the underlying service's -1 is passed through.
pub fn zone_id(name: &str) -> i32 {
    #[cfg(any(target_os = "illumos", target_os = "solaris"))]
    {
        native::zone_id(name)
    }
    #[cfg(not(any(target_os = "illumos", target_os = "solaris")))]
    {
        let _ = name;
        -1
    }
}

#[cfg(any(target_os = "illumos", target_os = "solaris"))]
mod native {
    use std::ffi::{CStr, CString};
    use std::mem::MaybeUninit;

    use libc::{c_char, c_int, c_void, size_t, ssize_t};

    /// ZONENAME_MAX from zone.h.
    const ZONENAME_MAX: usize = 64;
    /// PROJECT_BUFSZ from project.h, sized for the largest project entry.
    const PROJECT_BUFSZ: usize = 4096;

    /// struct project from project.h.
    #[repr(C)]
    struct Project {
        pj_name: *mut c_char,
        pj_projid: c_int,
        pj_comment: *mut c_char,
        pj_users: *mut *mut c_char,
        pj_groups: *mut *mut c_char,
        pj_attr: *mut c_char,
    }

    #[link(name = "project")]
    extern "C" {
        fn getprojbyid(
            projid: c_int,
            proj: *mut Project,
            buffer: *mut c_void,
            bufsize: size_t,
        ) -> *mut Project;
        fn getprojidbyname(name: *const c_char) -> c_int;
    }

    extern "C" {
        fn getzonenamebyid(id: c_int, buf: *mut c_char, buflen: size_t) -> ssize_t;
        fn getzoneidbyname(name: *const c_char) -> c_int;
    }

    pub fn project_name(projid: i32) -> Option<String> {
        let mut proj = MaybeUninit::<Project>::uninit();
        let mut buf = [0u8; PROJECT_BUFSZ];
        // SAFETY: proj and buf outlive the call; getprojbyid fills proj with
        // pointers into buf and returns null on failure.
        let found = unsafe {
            getprojbyid(
                projid,
                proj.as_mut_ptr(),
                buf.as_mut_ptr() as *mut c_void,
                buf.len(),
            )
        };
        if found.is_null() {
            return None;
        }
        // SAFETY: a non-null return means proj is initialized and pj_name
        // points at a NUL-terminated string inside buf.
        let name = unsafe { CStr::from_ptr(proj.assume_init().pj_name) };
        Some(name.to_string_lossy().into_owned())
    }

    pub fn project_id(name: &str) -> i32 {
        let cname = match CString::new(name) {
            Ok(v) => v,
            // A name with an interior NUL matches nothing.
            Err(_) => return -1,
        };
        // SAFETY: cname is a valid NUL-terminated string for the duration
        // of the call; getprojidbyname returns -1 on failure.
        unsafe { getprojidbyname(cname.as_ptr()) }
    }

    pub fn zone_name(zoneid: i32) -> Option<String> {
        let mut buf = [0 as c_char; ZONENAME_MAX];
        // SAFETY: buf holds ZONENAME_MAX bytes; getzonenamebyid writes a
        // NUL-terminated name and returns a negative value on failure.
        let ret = unsafe { getzonenamebyid(zoneid, buf.as_mut_ptr(), buf.len()) };
        if ret < 0 {
            return None;
        }
        // SAFETY: on success buf contains a NUL within ZONENAME_MAX bytes.
        let name = unsafe { CStr::from_ptr(buf.as_ptr()) };
        Some(name.to_string_lossy().into_owned())
    }

    pub fn zone_id(name: &str) -> i32 {
        let cname = match CString::new(name) {
            Ok(v) => v,
            Err(_) => return -1,
        };
        // SAFETY: cname is valid for the call; getzoneidbyname returns -1
        // on failure.
        unsafe { getzoneidbyname(cname.as_ptr()) }
    }
}
