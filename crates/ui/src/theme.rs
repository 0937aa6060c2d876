//! Dark and light themes for the search window

use egui::{Color32, CornerRadius, FontFamily, FontId, Stroke, Style, TextStyle, Vec2, Visuals};

/// Opacity of the window background
pub const WINDOW_OPACITY: f32 = 0.9;

/// Colors used throughout the UI
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color32,
    pub input: Color32,
    pub accent: Color32,
    pub text: Color32,
    pub dim_text: Color32,
    pub hover: Color32,
    pub border: Color32,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color32::from_rgb(30, 30, 35),
        input: Color32::from_rgb(20, 20, 25),
        accent: Color32::from_rgb(100, 149, 237), // Cornflower blue
        text: Color32::from_rgb(230, 230, 230),
        dim_text: Color32::from_rgb(150, 150, 160),
        hover: Color32::from_rgb(60, 60, 75),
        border: Color32::from_rgb(60, 60, 70),
    };

    pub const LIGHT: Palette = Palette {
        background: Color32::from_rgb(245, 245, 248),
        input: Color32::from_rgb(255, 255, 255),
        accent: Color32::from_rgb(45, 110, 215),
        text: Color32::from_rgb(30, 30, 35),
        dim_text: Color32::from_rgb(110, 110, 120),
        hover: Color32::from_rgb(220, 225, 235),
        border: Color32::from_rgb(200, 200, 210),
    };

    pub fn for_dark_theme(dark: bool) -> Palette {
        if dark {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }

    /// Translucent window fill
    pub fn window_fill(&self) -> Color32 {
        self.background.gamma_multiply(WINDOW_OPACITY)
    }
}

/// Create the dark theme
pub fn dark_theme() -> Style {
    build_style(Visuals::dark(), &Palette::DARK)
}

/// Create the light theme
pub fn light_theme() -> Style {
    build_style(Visuals::light(), &Palette::LIGHT)
}

pub fn theme_for(dark: bool) -> Style {
    if dark {
        dark_theme()
    } else {
        light_theme()
    }
}

fn build_style(visuals: Visuals, palette: &Palette) -> Style {
    let mut style = Style {
        visuals,
        ..Style::default()
    };

    style.visuals.window_fill = palette.window_fill();
    style.visuals.panel_fill = Color32::TRANSPARENT;
    style.visuals.extreme_bg_color = palette.input;

    // Selection colors
    style.visuals.selection.bg_fill = palette.accent.gamma_multiply(0.5);
    style.visuals.selection.stroke = Stroke::new(1.0, palette.accent);

    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text);
    style.visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, palette.border);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, palette.text);
    style.visuals.widgets.hovered.bg_fill = palette.hover;
    style.visuals.widgets.hovered.weak_bg_fill = palette.hover;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, palette.text);
    style.visuals.widgets.active.bg_fill = palette.accent.gamma_multiply(0.7);
    style.visuals.widgets.active.fg_stroke = Stroke::new(2.0, palette.text);

    let corner_radius = CornerRadius::same(4);
    style.visuals.widgets.noninteractive.corner_radius = corner_radius;
    style.visuals.widgets.inactive.corner_radius = corner_radius;
    style.visuals.widgets.hovered.corner_radius = corner_radius;
    style.visuals.widgets.active.corner_radius = corner_radius;
    style.visuals.window_corner_radius = CornerRadius::same(8);

    style.spacing.item_spacing = Vec2::new(4.0, 4.0);
    style.spacing.button_padding = Vec2::new(8.0, 4.0);

    let font_size = 15.0;
    style.text_styles.insert(
        TextStyle::Body,
        FontId::new(font_size, FontFamily::Proportional),
    );
    style.text_styles.insert(
        TextStyle::Button,
        FontId::new(font_size, FontFamily::Proportional),
    );
    style.text_styles.insert(
        TextStyle::Small,
        FontId::new(11.0, FontFamily::Proportional),
    );

    style
}
