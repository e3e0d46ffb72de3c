//! Platform helpers: effective uid and PATH lookup.

use std::process::Command;

/// Check whether the effective user is root.
#[cfg(unix)]
pub fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
pub fn is_root() -> bool {
    false
}

/// Check whether `name` resolves to an executable on the current PATH.
///
/// Shells out to `which`; a missing `which` binary counts as "not found".
pub fn command_on_path(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
