//! Linux desktop handler using xdg-open

use crate::platform::{spawn_detached, Desktop, LaunchError};
use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

pub struct LinuxDesktop;

impl LinuxDesktop {
    fn xdg_open(target: &OsStr) -> Command {
        let mut command = Command::new("xdg-open");
        command.arg(target);
        command
    }
}

impl Desktop for LinuxDesktop {
    fn open_path(&self, path: &Path) -> Result<(), LaunchError> {
        log::info!("Opening {:?}", path);
        spawn_detached(Self::xdg_open(path.as_os_str()), &path.display().to_string())
    }

    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        log::info!("Opening {}", url);
        spawn_detached(Self::xdg_open(OsStr::new(url)), url)
    }
}
