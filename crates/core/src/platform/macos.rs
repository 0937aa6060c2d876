//! macOS desktop handler using `open`

use crate::platform::{spawn_detached, Desktop, LaunchError};
use std::path::Path;
use std::process::Command;

pub struct MacOSDesktop;

impl Desktop for MacOSDesktop {
    fn open_path(&self, path: &Path) -> Result<(), LaunchError> {
        log::info!("Opening {:?}", path);
        let mut command = Command::new("open");
        command.arg(path);
        spawn_detached(command, &path.display().to_string())
    }

    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        log::info!("Opening {}", url);
        let mut command = Command::new("open");
        command.arg(url);
        spawn_detached(command, url)
    }
}
