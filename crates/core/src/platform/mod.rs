//! Platform-specific handlers for opening files and URLs

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "macos")]
pub mod macos;

use std::io;
use std::path::Path;
use std::process::Command;
use std::thread;
use thiserror::Error;

/// Failure to hand a file or URL to the operating system
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Could not open {target}: {source}")]
    Spawn {
        target: String,
        #[source]
        source: io::Error,
    },
}

/// Platform-agnostic interface to the desktop's default handlers
pub trait Desktop {
    /// Open a file with its associated application
    fn open_path(&self, path: &Path) -> Result<(), LaunchError>;

    /// Open a URL in the default browser
    fn open_url(&self, url: &str) -> Result<(), LaunchError>;
}

/// Spawn `command` without blocking the caller.
///
/// The child is reaped on a background thread so it never lingers as a
/// zombie; a failing exit status is logged.
pub(crate) fn spawn_detached(mut command: Command, target: &str) -> Result<(), LaunchError> {
    let mut child = command.spawn().map_err(|source| LaunchError::Spawn {
        target: target.to_string(),
        source,
    })?;

    let target = target.to_string();
    thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => {
            log::warn!("Handler for {} exited with {}", target, status)
        }
        Ok(_) => {}
        Err(e) => log::warn!("Failed to wait for handler of {}: {}", target, e),
    });

    Ok(())
}

/// Get the desktop handler for the current platform
#[cfg(target_os = "linux")]
pub fn system() -> impl Desktop {
    linux::LinuxDesktop
}

#[cfg(target_os = "windows")]
pub fn system() -> impl Desktop {
    windows::WindowsDesktop
}

#[cfg(target_os = "macos")]
pub fn system() -> impl Desktop {
    macos::MacOSDesktop
}
