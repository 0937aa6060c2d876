//! Search box state and the handlers that drive it
//!
//! Handlers are pure functions of the query and settings that return a
//! [`UiAction`]. [`SearchSession::handle`] applies the action and performs
//! its side effect through a [`Desktop`].

use crate::matcher::{self, MatchResult, SENTINEL};
use crate::platform::{Desktop, LaunchError};
use crate::settings::Settings;
use std::path::PathBuf;

const WEB_SEARCH_URL: &str = "https://www.google.com/search?q=";

/// What the UI should do in response to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Nothing,
    ShowResults(Vec<String>),
    HideResults,
    /// Clear the text box and hide the list
    Reset,
    /// Open a file, then reset the search box
    OpenPath(PathBuf),
    /// Search the web for the query, then reset the search box
    WebSearch(String),
    Exit,
}

/// Input events from the search window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    TextChanged(String),
    Enter,
    Escape,
    /// Double-click on a displayed list item
    DoubleClick(String),
}

/// Whether the application keeps running after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Build the browser URL for a web search
pub fn web_search_url(query: &str) -> String {
    format!("{}{}", WEB_SEARCH_URL, urlencoding::encode(query))
}

/// Match the new query against the search folder
pub fn on_text_changed(query: &str, settings: &Settings) -> UiAction {
    match matcher::search(query, settings.folder.as_deref()) {
        MatchResult::Open(path) => UiAction::OpenPath(path),
        MatchResult::ShowList(items) => UiAction::ShowResults(items),
        MatchResult::Hidden => UiAction::HideResults,
    }
}

/// Enter only acts when the sentinel is the sole item shown
pub fn on_enter(query: &str, shown: &[String]) -> UiAction {
    match shown {
        [only] if only == SENTINEL => UiAction::WebSearch(query.trim().to_string()),
        _ => UiAction::Nothing,
    }
}

/// Open the clicked file, or search the web when the sentinel is clicked.
///
/// The name is looked up again because the list only holds file names.
pub fn on_double_click(query: &str, item: &str, settings: &Settings) -> UiAction {
    if item == SENTINEL {
        return UiAction::WebSearch(query.trim().to_string());
    }

    let resolved = settings
        .folder
        .as_deref()
        .and_then(|root| matcher::resolve_name(item, root));

    match resolved {
        Some(path) => UiAction::OpenPath(path),
        None => {
            log::warn!("{:?} is no longer in the search folder", item);
            UiAction::Reset
        }
    }
}

/// Escape quits immediately
pub fn on_escape() -> UiAction {
    UiAction::Exit
}

/// Text box contents and the visible result list
#[derive(Debug, Default)]
pub struct SearchSession {
    text: String,
    results: Vec<String>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mutable text for the input widget; follow edits with [`Event::TextChanged`]
    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn list_visible(&self) -> bool {
        !self.results.is_empty()
    }

    /// Clear the text box and hide the list
    pub fn reset(&mut self) {
        self.text.clear();
        self.results.clear();
    }

    /// Compute the action for `event` without touching the session
    pub fn action_for(&self, event: Event, settings: &Settings) -> UiAction {
        match event {
            Event::TextChanged(text) => on_text_changed(&text, settings),
            Event::Enter => on_enter(&self.text, &self.results),
            Event::Escape => on_escape(),
            Event::DoubleClick(item) => on_double_click(&self.text, &item, settings),
        }
    }

    /// Handle an event and run its side effect.
    ///
    /// The box is reset before any open so a launch error still leaves it clean.
    pub fn handle(
        &mut self,
        event: Event,
        settings: &Settings,
        desktop: &dyn Desktop,
    ) -> Result<Flow, LaunchError> {
        if let Event::TextChanged(text) = &event {
            self.text.clone_from(text);
        }

        match self.action_for(event, settings) {
            UiAction::Nothing => {}
            UiAction::ShowResults(items) => self.results = items,
            UiAction::HideResults => self.results.clear(),
            UiAction::Reset => self.reset(),
            UiAction::OpenPath(path) => {
                self.reset();
                desktop.open_path(&path)?;
            }
            UiAction::WebSearch(query) => {
                self.reset();
                desktop.open_url(&web_search_url(&query))?;
            }
            UiAction::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }
}
