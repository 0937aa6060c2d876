//! Main UI application logic using egui

use crate::theme::{theme_for, Palette};
use eframe::egui::{
    self, CentralPanel, Context, Key, PointerButton, RichText, ScrollArea, Sense, Vec2,
    ViewportCommand,
};
use quicklaunch_core::{
    platform::{system, Desktop},
    Event, Flow, SearchSession, SettingsStore, SENTINEL,
};

const WINDOW_WIDTH: f32 = 420.0;
const COLLAPSED_HEIGHT: f32 = 52.0;
const ROW_HEIGHT: f32 = 24.0;
const APP_TITLE: &str = "Quick Launcher";

/// The floating search window
pub struct LauncherApp {
    settings: SettingsStore,
    desktop: Box<dyn Desktop>,
    session: SearchSession,

    // UI state
    should_close: bool,
    shown_rows: Option<usize>,
    frame_count: u32,

    // Pending actions (to avoid borrow issues)
    pending_events: Vec<Event>,
    pending_change_folder: bool,
}

impl LauncherApp {
    pub fn new(settings: SettingsStore) -> Self {
        Self::with_desktop(settings, Box::new(system()))
    }

    pub fn with_desktop(settings: SettingsStore, desktop: Box<dyn Desktop>) -> Self {
        Self {
            settings,
            desktop,
            session: SearchSession::new(),
            should_close: false,
            shown_rows: None,
            frame_count: 0,
            pending_events: Vec::new(),
            pending_change_folder: false,
        }
    }

    /// Run one event through the session, surfacing launch errors in a modal
    fn dispatch(&mut self, event: Event) {
        let settings = self.settings.current().clone();
        match self.session.handle(event, &settings, self.desktop.as_ref()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => self.should_close = true,
            Err(e) => {
                log::error!("{}", e);
                show_error(&e.to_string());
            }
        }
    }

    /// Ask for a new search folder; cancelling keeps the current one
    fn change_folder(&mut self) {
        let mut dialog = rfd::FileDialog::new().set_title("Choose the folder to search");
        if let Some(current) = self.settings.current().folder.as_deref() {
            dialog = dialog.set_directory(current);
        }

        match dialog.pick_folder() {
            Some(folder) => {
                log::info!("Search folder changed to {:?}", folder);
                self.settings.update(|s| s.with_folder(folder));
                self.session.reset();
            }
            None => log::debug!("Folder change cancelled"),
        }
    }

    /// Process pending actions
    fn process_pending_actions(&mut self) {
        for event in std::mem::take(&mut self.pending_events) {
            self.dispatch(event);
            if self.should_close {
                return;
            }
        }

        if std::mem::take(&mut self.pending_change_folder) {
            self.change_folder();
        }
    }

    /// Right-click menu on the window background
    fn context_menu(&mut self, ui: &mut egui::Ui) {
        if ui.button("Change folder…").clicked() {
            self.pending_change_folder = true;
            ui.close_menu();
        }

        ui.separator();

        let mut dark_theme = self.settings.current().dark_theme;
        if ui.checkbox(&mut dark_theme, "Dark theme").changed() {
            self.settings.update(|s| s.with_dark_theme(dark_theme));
        }

        let mut show_in_taskbar = self.settings.current().show_in_taskbar;
        if ui
            .checkbox(&mut show_in_taskbar, "Show in taskbar")
            .on_hover_text("Applies on next start")
            .changed()
        {
            self.settings.update(|s| s.with_show_in_taskbar(show_in_taskbar));
        }

        ui.separator();

        if ui.button("Exit").clicked() {
            self.should_close = true;
            ui.close_menu();
        }
    }

    /// Resize the window whenever the number of result rows changes
    fn fit_window(&mut self, ctx: &Context) {
        let rows = self.session.results().len();
        if self.shown_rows == Some(rows) {
            return;
        }
        self.shown_rows = Some(rows);
        ctx.send_viewport_cmd(ViewportCommand::InnerSize(Vec2::new(
            WINDOW_WIDTH,
            window_height(rows),
        )));
    }
}

/// Window height for a list of `rows` results
fn window_height(rows: usize) -> f32 {
    if rows == 0 {
        COLLAPSED_HEIGHT
    } else {
        COLLAPSED_HEIGHT + rows as f32 * (ROW_HEIGHT + 4.0) + 8.0
    }
}

impl eframe::App for LauncherApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.frame_count += 1;

        ctx.input(|i| {
            if i.key_pressed(Key::Escape) {
                self.pending_events.push(Event::Escape);
            } else if i.key_pressed(Key::Enter) {
                self.pending_events.push(Event::Enter);
            }
        });

        let dark = self.settings.current().dark_theme;
        let palette = Palette::for_dark_theme(dark);
        ctx.set_style(theme_for(dark));

        let frame = egui::Frame::default()
            .fill(palette.window_fill())
            .stroke(egui::Stroke::new(1.0, palette.border))
            .corner_radius(8.0)
            .inner_margin(10.0);

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            // Background: drag moves the window, right-click opens the menu
            let background = ui.interact(
                ui.max_rect(),
                egui::Id::new("window_background"),
                Sense::click_and_drag(),
            );
            if background.drag_started_by(PointerButton::Primary) {
                ctx.send_viewport_cmd(ViewportCommand::StartDrag);
            }
            background.context_menu(|ui| self.context_menu(ui));

            let input = ui.add(
                egui::TextEdit::singleline(self.session.text_mut())
                    .hint_text("Search files…")
                    .desired_width(f32::INFINITY),
            );
            if input.changed() {
                self.pending_events
                    .push(Event::TextChanged(self.session.text().to_string()));
            }
            // Enter drops focus from a single-line edit; keep typing possible
            if self.frame_count == 1 || input.lost_focus() {
                input.request_focus();
            }

            if self.session.list_visible() {
                ui.add_space(4.0);
                let results = self.session.results().to_vec();
                ScrollArea::vertical().show(ui, |ui| {
                    for item in &results {
                        let text = if item == SENTINEL {
                            RichText::new(item).italics().color(palette.dim_text)
                        } else {
                            RichText::new(item).color(palette.text)
                        };

                        let response = ui.add_sized(
                            [ui.available_width(), ROW_HEIGHT],
                            egui::SelectableLabel::new(false, text),
                        );
                        if response.double_clicked() {
                            self.pending_events.push(Event::DoubleClick(item.clone()));
                        }
                    }
                });
            }
        });

        self.process_pending_actions();

        if self.should_close {
            ctx.send_viewport_cmd(ViewportCommand::Close);
            return;
        }

        self.fit_window(ctx);
    }
}

/// Show a blocking error dialog
fn show_error(message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(APP_TITLE)
        .set_description(message)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Create and run the launcher window
pub fn run_launcher(settings: SettingsStore) -> Result<(), eframe::Error> {
    let show_in_taskbar = settings.current().show_in_taskbar;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_WIDTH, COLLAPSED_HEIGHT])
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_resizable(false)
            .with_taskbar(show_in_taskbar),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(LauncherApp::new(settings)))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_height_tracks_row_count() {
        assert_eq!(window_height(0), COLLAPSED_HEIGHT);
        assert!(window_height(1) > COLLAPSED_HEIGHT);
        assert!(window_height(10) > window_height(1));
        assert!(window_height(1) < window_height(2));
    }
}
