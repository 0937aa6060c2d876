//! Windows desktop handler using the shell's file protocol handler

use crate::platform::{spawn_detached, Desktop, LaunchError};
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

pub struct WindowsDesktop;

impl WindowsDesktop {
    // rundll32 receives the target as a plain argument, so cmd metacharacters
    // such as `&` or `%` in file names and URLs are never interpreted.
    fn shell_open(target: &OsStr) -> Command {
        let mut command = Command::new("rundll32");
        command.arg("url.dll,FileProtocolHandler").arg(target);
        command
    }
}

impl Desktop for WindowsDesktop {
    fn open_path(&self, path: &Path) -> Result<(), LaunchError> {
        log::info!("Opening {:?}", path);
        spawn_detached(Self::shell_open(path.as_os_str()), &path.display().to_string())
    }

    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        log::info!("Opening {}", url);
        spawn_detached(Self::shell_open(OsStr::new(url)), url)
    }
}
