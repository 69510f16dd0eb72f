//! Install layout
//!
//! Locates the running executable and derives the install root from it.
//! The executable is expected at `<root>/bin/<exe>`.

use std::borrow::Cow;
use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

/// Source of the running executable's path.
pub trait ExecutableLocator {
    fn current_exe(&self) -> io::Result<PathBuf>;
}

/// Asks the operating system for the path of this process's executable.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentExe;

impl ExecutableLocator for CurrentExe {
    fn current_exe(&self) -> io::Result<PathBuf> {
        std::env::current_exe()
    }
}

/// Strip the executable name and its directory.
///
/// No check is made that the layout matches; a shallower path just yields a
/// shorter (possibly empty) root.
pub fn install_root(exe: &Path) -> PathBuf {
    let mut root = exe.to_path_buf();
    root.pop();
    root.pop();
    root
}

/// Bytes of an OS string as handed to Lua.
///
/// Unix strings go through untouched; Windows strings are converted to UTF-8.
pub fn os_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        Cow::Borrowed(s.as_bytes())
    }

    #[cfg(not(unix))]
    {
        match s.to_string_lossy() {
            Cow::Borrowed(text) => Cow::Borrowed(text.as_bytes()),
            Cow::Owned(text) => Cow::Owned(text.into_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_root_two_levels_up() {
        let exe = Path::new("/opt/oneluapro/bin/ldoc");
        assert_eq!(install_root(exe), PathBuf::from("/opt/oneluapro"));
    }

    #[test]
    fn test_install_root_shallow_path_does_not_panic() {
        assert_eq!(install_root(Path::new("/ldoc")), PathBuf::from("/"));
        assert_eq!(install_root(Path::new("ldoc")), PathBuf::new());
    }

    #[test]
    fn test_current_exe_resolves() {
        let exe = CurrentExe.current_exe().unwrap();
        assert!(exe.is_absolute());
    }

    #[cfg(unix)]
    #[test]
    fn test_os_bytes_keeps_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"caf\xe9");
        assert_eq!(os_bytes(raw).as_ref(), b"caf\xe9");
    }
}
