//! Palette and tone colors for the console.

use eframe::egui::{Color32, Stroke, Visuals, epaint::CornerRadius, style::WidgetVisuals};

use crate::egui_app::state::StatusTone;

#[derive(Clone, Copy)]
pub(super) struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub destructive: Color32,
}

pub(super) fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(12, 13, 16),
        bg_secondary: Color32::from_rgb(24, 26, 30),
        bg_tertiary: Color32::from_rgb(38, 41, 46),
        panel_outline: Color32::from_rgb(52, 56, 62),
        text_primary: Color32::from_rgb(190, 196, 204),
        text_muted: Color32::from_rgb(134, 140, 150),
        accent: Color32::from_rgb(150, 205, 255),
        success: Color32::from_rgb(104, 186, 140),
        warning: Color32::from_rgb(214, 168, 90),
        destructive: Color32::from_rgb(210, 108, 98),
    }
}

pub(super) fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.bg_tertiary;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rectilinear(&mut visuals.widgets.inactive, palette);
    set_rectilinear(&mut visuals.widgets.hovered, palette);
    set_rectilinear(&mut visuals.widgets.active, palette);
    set_rectilinear(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_secondary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

/// Color for a footer notice tone.
pub(super) fn status_tone_color(tone: StatusTone) -> Color32 {
    let palette = palette();
    match tone {
        StatusTone::Idle => palette.text_muted,
        StatusTone::Info => palette.accent,
        StatusTone::Warning => palette.warning,
        StatusTone::Error => palette.destructive,
    }
}

/// Badge color for a verdict status.
///
/// The status set is open: known tones get dedicated colors, anything else
/// (including the pre-answer empty status) falls back to the neutral tone.
pub(super) fn badge_color(status: &str) -> Color32 {
    let palette = palette();
    match status {
        "valid" => palette.success,
        "warning" => palette.warning,
        "invalid" => palette.destructive,
        _ => palette.text_muted,
    }
}
