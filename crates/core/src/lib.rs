//! Core library for the quick-launcher
//!
//! Provides settings persistence, folder matching, the search session and platform open handlers.

pub mod matcher;
pub mod platform;
pub mod session;
pub mod settings;

pub use matcher::{MatchResult, MAX_PARTIAL_MATCHES, SENTINEL};
pub use platform::{Desktop, LaunchError};
pub use session::{Event, Flow, SearchSession, UiAction};
pub use settings::{Settings, SettingsStore};
