use eframe::egui::{self, FontId, Pos2};

use crate::deck::RenderedSlide;
use crate::theme::Theme;

/// Screen areas of the mock desktop window.
#[derive(Debug, Clone, Copy)]
pub struct DemoFrame {
    pub window: egui::Rect,
    pub header: egui::Rect,
    pub sidebar: egui::Rect,
    pub main: egui::Rect,
}

impl DemoFrame {
    pub fn new(rect: egui::Rect, scale: f32) -> Self {
        let window = rect.shrink(40.0 * scale);
        let header_h = 56.0 * scale;
        let sidebar_w = 240.0 * scale;
        let header = egui::Rect::from_min_size(window.min, egui::vec2(window.width(), header_h));
        let sidebar = egui::Rect::from_min_max(
            Pos2::new(window.left(), header.bottom()),
            Pos2::new(window.left() + sidebar_w, window.bottom()),
        );
        let main = egui::Rect::from_min_max(
            Pos2::new(sidebar.right(), header.bottom()),
            window.max,
        );
        Self {
            window,
            header,
            sidebar,
            main,
        }
    }

    /// Sidebar entry `index` of the page list.
    pub fn page_rect(&self, index: usize, scale: f32) -> egui::Rect {
        let h = 44.0 * scale;
        let top = self.sidebar.top() + 20.0 * scale + index as f32 * (h + 6.0 * scale);
        egui::Rect::from_min_size(
            Pos2::new(self.sidebar.left() + 14.0 * scale, top),
            egui::vec2(self.sidebar.width() - 28.0 * scale, h),
        )
    }
}

/// Static rendition of the mock application window. The live widgets are
/// layered on top by the demo module once the slide has settled.
pub fn render(
    ui: &egui::Ui,
    slide: &RenderedSlide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let frame = DemoFrame::new(rect, scale);
    let painter = ui.painter();
    let rounding = 14.0 * scale;

    painter.rect_filled(frame.window, rounding, Theme::with_opacity(theme.surface, opacity));
    painter.rect_filled(
        frame.sidebar,
        0.0,
        Theme::with_opacity(theme.background, opacity * 0.6),
    );

    // Header: product name and status dot
    let title_color = Theme::with_opacity(theme.heading_color, opacity);
    let galley = painter.layout_no_wrap(
        slide.heading.clone(),
        FontId::proportional(22.0 * scale),
        title_color,
    );
    let text_pos = Pos2::new(
        frame.header.left() + 24.0 * scale,
        frame.header.center().y - galley.rect.height() / 2.0,
    );
    painter.galley(text_pos, galley, title_color);
    painter.circle_filled(
        Pos2::new(frame.header.right() - 28.0 * scale, frame.header.center().y),
        6.0 * scale,
        Theme::with_opacity(theme.success, opacity),
    );

    let label_color = Theme::with_opacity(theme.foreground, opacity * 0.8);
    for (i, page) in slide.lines.iter().enumerate() {
        let entry = frame.page_rect(i, scale);
        let galley = painter.layout_no_wrap(
            page.clone(),
            FontId::proportional(18.0 * scale),
            label_color,
        );
        let pos = Pos2::new(
            entry.left() + 14.0 * scale,
            entry.center().y - galley.rect.height() / 2.0,
        );
        painter.galley(pos, galley, label_color);
    }
}
