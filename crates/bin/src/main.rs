//! Quick Launcher
//!
//! Floating search box that opens files from one folder or searches the web.

use anyhow::{Context, Result};
use quicklaunch_core::{Settings, SettingsStore};
use quicklaunch_ui::run_launcher;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_secs()
    .init();

    log::info!("Starting Quick Launcher");

    let path = Settings::default_path()?;
    let mut settings = SettingsStore::open(path);
    log::info!("Settings loaded from {:?}", settings.path());

    // First run: a search folder is required
    if settings.current().folder.is_none() {
        match rfd::FileDialog::new()
            .set_title("Choose the folder to search")
            .pick_folder()
        {
            Some(folder) => {
                log::info!("Search folder set to {:?}", folder);
                settings.update(|s| s.with_folder(folder));
            }
            None => {
                log::info!("No folder selected, exiting");
                return Ok(());
            }
        }
    }

    run_launcher(settings)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Launcher window failed")?;

    log::info!("Exiting");
    Ok(())
}
