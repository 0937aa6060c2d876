//! egui front end for the quick-launcher

mod app;
pub mod theme;

pub use app::{run_launcher, LauncherApp};
