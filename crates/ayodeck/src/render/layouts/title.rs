use eframe::egui::{self, FontId, Pos2};

use crate::deck::RenderedSlide;
use crate::render::text;
use crate::theme::Theme;

/// Title layout: large centred heading, subtitle, and a tagline set off by an accent bar.
pub fn render(
    ui: &egui::Ui,
    slide: &RenderedSlide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let padding = 80.0 * scale;
    let content_rect = rect.shrink(padding);
    let center_x = content_rect.center().x;
    let width = content_rect.width();

    let tagline = slide.lines.first().filter(|t| !t.is_empty());

    // Estimate total height for vertical centering
    let mut total_height = theme.h1_size * scale * 1.2;
    if slide.subheading.is_some() {
        total_height += theme.h3_size * scale + 30.0 * scale;
    }
    if tagline.is_some() {
        total_height += theme.body_size * scale + 60.0 * scale;
    }

    let mut y =
        (content_rect.center().y - total_height / 2.0).max(content_rect.top() + 20.0 * scale);

    let heading_color = Theme::with_opacity(theme.heading_color, opacity);
    y += text::draw_centered(
        ui,
        &slide.heading,
        center_x,
        y,
        FontId::proportional(theme.h1_size * scale),
        heading_color,
        width,
    );
    y += 30.0 * scale;

    if let Some(subtitle) = &slide.subheading {
        let color = Theme::with_opacity(theme.accent_glow, opacity);
        y += text::draw_centered(
            ui,
            subtitle,
            center_x,
            y,
            FontId::proportional(theme.h3_size * scale),
            color,
            width,
        );
        y += 60.0 * scale;
    }

    if let Some(tagline) = tagline {
        let color = Theme::with_opacity(theme.foreground, opacity * 0.8);
        let accent = Theme::with_opacity(theme.accent, opacity);
        let tagline_width = width * 0.7;
        let galley = ui.painter().layout(
            tagline.clone(),
            FontId::proportional(theme.body_size * scale),
            color,
            tagline_width,
        );
        let text_height = galley.rect.height();
        let text_x = center_x - galley.rect.width() / 2.0;
        ui.painter().galley(Pos2::new(text_x, y), galley, color);

        // Left accent bar spanning the tagline
        let bar_rect = egui::Rect::from_min_size(
            Pos2::new(text_x - 20.0 * scale, y),
            egui::vec2(4.0 * scale, text_height),
        );
        ui.painter().rect_filled(bar_rect, 2.0, accent);
    }
}
