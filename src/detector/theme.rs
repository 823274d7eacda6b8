use eframe::egui::{self, Color32, Visuals};

pub const COLOR_PRIMARY: Color32 = Color32::from_rgb(37, 99, 235);
pub const COLOR_POSITIVE: Color32 = Color32::from_rgb(239, 68, 68);
pub const COLOR_NEGATIVE: Color32 = Color32::from_rgb(16, 185, 129);
pub const COLOR_WARNING: Color32 = Color32::from_rgb(217, 119, 6);
pub const COLOR_MUTED: Color32 = Color32::from_rgb(107, 114, 128);

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::light();
    visuals.panel_fill = Color32::from_rgb(240, 244, 248);
    visuals.override_text_color = Some(Color32::from_rgb(31, 41, 55));
    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(16.0, 8.0);
    ctx.set_style(style);
}
