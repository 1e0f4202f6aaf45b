use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub metric_value: Color32,
    pub status_file: Color32,
    pub status_fallback: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::from_rgb(102, 126, 234), // Periwinkle, matches the close line
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(20, 22, 30),
        side_panel: Color32::from_rgb(25, 25, 25),
        metric_value: Color32::from_rgb(100, 200, 255),
        status_file: Color32::from_rgb(100, 200, 100),
        status_fallback: Color32::from_rgb(255, 215, 0),
    },
    side_panel_min_width: 220.0,
};
