use eframe::egui::{self, Pos2};

use crate::deck::RenderedSlide;
use crate::render::text;
use crate::theme::Theme;

pub fn render(
    ui: &egui::Ui,
    slide: &RenderedSlide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let padding = 100.0 * scale;
    let content_width = (rect.width() - padding * 2.0).min(1400.0 * scale);
    let left = rect.left() + padding;
    let mut y = rect.top() + padding;

    if let Some(section) = &slide.section {
        y += text::draw_section_label(ui, section, theme, Pos2::new(left, y), opacity, scale);
        y += 16.0 * scale;
    }

    y += text::draw_heading(
        ui,
        &slide.heading,
        2,
        theme,
        Pos2::new(left, y),
        content_width,
        opacity,
        scale,
    );
    y += 50.0 * scale;

    text::draw_list(
        ui,
        &slide.lines,
        theme,
        Pos2::new(left, y),
        content_width,
        opacity,
        scale,
    );
}
