//! POSIX attribute handling for fixture files
//!
//! Ownership and permission changes usually require elevated privileges, so
//! the fixture layer only touches them when the caller asked for a value
//! different from the "not applicable" sentinels below. The sentinel is -1,
//! which is also the value chown(2) treats as "leave unchanged".

use std::io;
use std::path::Path;

/// Sentinel uid/gid meaning "no value supplied"
pub const NA_ID: i64 = -1;

/// Sentinel mode meaning "no value supplied"
pub const NA_MODE: i64 = -1;

/// POSIX attributes to apply to a fixture file
///
/// Defaults to the sentinels, in which case applying it is a no-op and no
/// privileges are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PosixAttrs {
    /// Owning user ID, or [`NA_ID`]
    pub uid: i64,
    /// Owning group ID, or [`NA_ID`]
    pub gid: i64,
    /// Permission bits, or [`NA_MODE`]
    pub mode: i64,
}

impl Default for PosixAttrs {
    fn default() -> Self {
        Self {
            uid: NA_ID,
            gid: NA_ID,
            mode: NA_MODE,
        }
    }
}

impl PosixAttrs {
    /// Set the permission mode from a base-8 string such as "644"
    pub fn with_mode_str(mut self, mode: &str) -> Result<Self, std::num::ParseIntError> {
        self.mode = i64::from_str_radix(mode, 8)?;
        Ok(self)
    }

    /// Set the owning user ID
    pub fn with_uid(mut self, uid: u32) -> Self {
        self.uid = i64::from(uid);
        self
    }

    /// Set the owning group ID
    pub fn with_gid(mut self, gid: u32) -> Self {
        self.gid = i64::from(gid);
        self
    }

    /// True if neither ownership nor mode was supplied
    pub fn is_na(&self) -> bool {
        self.uid == NA_ID && self.gid == NA_ID && self.mode == NA_MODE
    }

    /// Apply the requested attributes to `path`
    ///
    /// Fields still at their sentinel values are left untouched. Underlying
    /// filesystem errors are propagated unmodified.
    #[cfg(unix)]
    pub fn apply(&self, path: &Path) -> io::Result<()> {
        if self.uid != NA_ID || self.gid != NA_ID {
            let owner = (self.uid != NA_ID).then(|| nix::unistd::Uid::from_raw(self.uid as u32));
            let group = (self.gid != NA_ID).then(|| nix::unistd::Gid::from_raw(self.gid as u32));
            nix::unistd::chown(path, owner, group)
                .map_err(|e| io::Error::from_raw_os_error(e as i32))?;
        }
        if self.mode != NA_MODE {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(self.mode as u32);
            std::fs::set_permissions(path, permissions)?;
        }
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn apply(&self, _path: &Path) -> io::Result<()> {
        if self.is_na() {
            return Ok(());
        }
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "POSIX ownership and mode are not supported on this platform",
        ))
    }
}

/// Set both the access and modification time of `path` to `mtime`
/// (seconds since the Unix epoch).
#[cfg(unix)]
pub fn set_file_times(path: &Path, mtime: i64) -> io::Result<()> {
    use nix::sys::time::TimeValLike;

    let time = nix::sys::time::TimeVal::seconds(mtime);
    nix::sys::stat::utimes(path, &time, &time)
        .map_err(|e| io::Error::from_raw_os_error(e as i32))
}

#[cfg(not(unix))]
pub fn set_file_times(_path: &Path, _mtime: i64) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "setting file times is not supported on this platform",
    ))
}
