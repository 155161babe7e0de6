use eframe::egui::{self, Color32, FontId, Pos2};

use crate::theme::Theme;

/// Layout and paint wrapped text, returning the height used.
pub fn draw_text(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font: FontId,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font, color, max_width);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Paint text horizontally centred on `center_x`. Returns height used.
pub fn draw_centered(
    ui: &egui::Ui,
    text: &str,
    center_x: f32,
    y: f32,
    font: FontId,
    color: Color32,
    max_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font, color, max_width);
    let height = galley.rect.height();
    let pos = Pos2::new(center_x - galley.rect.width() / 2.0, y);
    ui.painter().galley(pos, galley, color);
    height
}

/// Draw a heading. Returns height used.
#[allow(clippy::too_many_arguments)]
pub fn draw_heading(
    ui: &egui::Ui,
    text: &str,
    level: u8,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let size = heading_size(theme, level) * scale;
    let color = Theme::with_opacity(theme.heading_color, opacity);
    draw_text(ui, text, pos, FontId::proportional(size), color, max_width)
}

/// Small uppercase section label, e.g. "03 / Architecture". Returns height used.
pub fn draw_section_label(
    ui: &egui::Ui,
    label: &str,
    theme: &Theme,
    pos: Pos2,
    opacity: f32,
    scale: f32,
) -> f32 {
    if label.is_empty() {
        return 0.0;
    }
    let color = Theme::with_opacity(theme.accent, opacity * 0.9);
    let galley = ui.painter().layout_no_wrap(
        label.to_uppercase(),
        FontId::monospace(theme.label_size * scale),
        color,
    );
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Draw a bulleted list. Returns height used.
#[allow(clippy::too_many_arguments)]
pub fn draw_list(
    ui: &egui::Ui,
    items: &[String],
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let color = Theme::with_opacity(theme.foreground, opacity);
    let marker_color = Theme::with_opacity(theme.accent, opacity);
    let marker_width = 45.0 * scale;
    let item_spacing = 14.0 * scale;
    let font_size = theme.body_size * scale;
    let mut y_offset = 0.0;

    for item in items {
        let marker_pos = Pos2::new(pos.x, pos.y + y_offset);
        let marker_galley = ui.painter().layout_no_wrap(
            "\u{2022}".to_string(),
            FontId::proportional(font_size),
            marker_color,
        );
        ui.painter().galley(marker_pos, marker_galley, marker_color);

        let text_pos = Pos2::new(pos.x + marker_width, pos.y + y_offset);
        let text_height = draw_text(
            ui,
            item,
            text_pos,
            FontId::proportional(font_size),
            color,
            max_width - marker_width,
        );
        y_offset += text_height + item_spacing;
    }

    y_offset
}

fn heading_size(theme: &Theme, level: u8) -> f32 {
    match level {
        1 => theme.h1_size,
        2 => theme.h2_size,
        3 => theme.h3_size,
        _ => theme.body_size,
    }
}
