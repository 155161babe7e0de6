use eframe::egui::{self, FontId, Pos2, Stroke};

use crate::deck::{DiagramNode, RenderedLayout, RenderedSlide, StepIndicator};
use crate::render::{Painted, text};
use crate::theme::Theme;

/// Diagram slide layout: heading at top, node grid filling the remaining space.
/// Walkthroughs get a side panel with the current step's text and progress dots.
#[allow(clippy::too_many_arguments)]
pub fn render(
    ui: &egui::Ui,
    slide: &RenderedSlide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    step_opacity: f32,
    scale: f32,
) -> Painted {
    let padding = 60.0 * scale;
    let content_width = rect.width() - padding * 2.0;
    let content_left = rect.left() + padding;
    let mut y = rect.top() + padding;

    if let Some(section) = &slide.section {
        y += text::draw_section_label(ui, section, theme, Pos2::new(content_left, y), opacity, scale);
        y += 12.0 * scale;
    }
    y += text::draw_heading(
        ui,
        &slide.heading,
        3,
        theme,
        Pos2::new(content_left, y),
        content_width,
        opacity,
        scale,
    );
    y += 30.0 * scale;

    let walkthrough = slide.layout == RenderedLayout::Walkthrough;
    let panel_width = if walkthrough { content_width * 0.32 } else { 0.0 };
    let gap = if walkthrough { 40.0 * scale } else { 0.0 };
    let caption_height = if walkthrough { 0.0 } else { 70.0 * scale };

    let diagram_rect = egui::Rect::from_min_max(
        Pos2::new(content_left, y),
        Pos2::new(
            content_left + content_width - panel_width - gap,
            rect.bottom() - padding - caption_height,
        ),
    );
    if diagram_rect.height() < 50.0 * scale {
        return Painted::default();
    }

    let frame_color = Theme::with_opacity(theme.surface, opacity * 0.6);
    ui.painter().rect_filled(diagram_rect, 12.0 * scale, frame_color);
    draw_nodes(ui, &slide.nodes, theme, diagram_rect.shrink(24.0 * scale), opacity, scale);
    let expand = draw_expand_marker(ui, theme, diagram_rect, opacity, scale);

    if walkthrough {
        let panel = egui::Rect::from_min_max(
            Pos2::new(diagram_rect.right() + gap, y),
            Pos2::new(content_left + content_width, diagram_rect.bottom()),
        );
        draw_step_panel(ui, slide, theme, panel, opacity, step_opacity, scale);
    } else if let Some(caption) = slide.lines.first() {
        let color = Theme::with_opacity(theme.foreground, opacity * 0.8);
        text::draw_text(
            ui,
            caption,
            Pos2::new(content_left, diagram_rect.bottom() + 20.0 * scale),
            FontId::proportional(theme.body_size * 0.8 * scale),
            color,
            content_width,
        );
    }

    Painted {
        expand: Some(expand),
    }
}

/// Paint `nodes` as a centred grid of labelled boxes inside `area`.
pub fn draw_nodes(
    ui: &egui::Ui,
    nodes: &[DiagramNode],
    theme: &Theme,
    area: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let gap = 24.0 * scale;
    let cells = compute_grid(nodes.len(), area.width(), area.height(), gap);
    let font_size = theme.body_size * 0.75 * scale;

    for (node, cell) in nodes.iter().zip(&cells) {
        let box_h = cell.h.min(110.0 * scale);
        let node_rect = egui::Rect::from_min_size(
            Pos2::new(area.left() + cell.x, area.top() + cell.y + (cell.h - box_h) / 2.0),
            egui::vec2(cell.w, box_h),
        );

        let (fill, stroke, label) = if node.active {
            (
                Theme::with_opacity(theme.accent, opacity * 0.18),
                Theme::with_opacity(theme.accent, opacity),
                Theme::with_opacity(theme.heading_color, opacity),
            )
        } else {
            (
                Theme::with_opacity(theme.surface, opacity * 0.8),
                Theme::with_opacity(theme.border, opacity),
                Theme::with_opacity(theme.muted, opacity),
            )
        };
        let rounding = 10.0 * scale;
        ui.painter().rect_filled(node_rect, rounding, fill);
        ui.painter().rect_stroke(
            node_rect,
            rounding,
            Stroke::new(2.0 * scale, stroke),
            egui::StrokeKind::Inside,
        );

        let galley = ui.painter().layout(
            node.label.clone(),
            FontId::proportional(font_size),
            label,
            node_rect.width() - 16.0 * scale,
        );
        let pos = node_rect.center() - galley.rect.size() / 2.0;
        ui.painter().galley(pos, galley, label);
    }
}

fn draw_expand_marker(
    ui: &egui::Ui,
    theme: &Theme,
    diagram_rect: egui::Rect,
    opacity: f32,
    scale: f32,
) -> egui::Rect {
    let size = 40.0 * scale;
    let marker = egui::Rect::from_min_size(
        Pos2::new(
            diagram_rect.right() - size - 12.0 * scale,
            diagram_rect.top() + 12.0 * scale,
        ),
        egui::vec2(size, size),
    );
    let color = Theme::with_opacity(theme.accent, opacity * 0.8);
    ui.painter()
        .rect_filled(marker, 8.0 * scale, Theme::with_opacity(theme.background, opacity * 0.7));
    let galley = ui.painter().layout_no_wrap(
        "\u{2922}".to_string(),
        FontId::proportional(22.0 * scale),
        color,
    );
    ui.painter()
        .galley(marker.center() - galley.rect.size() / 2.0, galley, color);
    marker
}

fn draw_step_panel(
    ui: &egui::Ui,
    slide: &RenderedSlide,
    theme: &Theme,
    panel: egui::Rect,
    opacity: f32,
    step_opacity: f32,
    scale: f32,
) {
    let text_opacity = opacity * step_opacity;
    let mut y = panel.top();

    if let Some(StepIndicator { current, total }) = slide.step {
        let label = format!("Step {} of {}", current + 1, total);
        y += text::draw_section_label(ui, &label, theme, Pos2::new(panel.left(), y), opacity, scale);
        y += 20.0 * scale;
    }

    if let Some(title) = &slide.subheading {
        let color = Theme::with_opacity(theme.heading_color, text_opacity);
        y += text::draw_text(
            ui,
            title,
            Pos2::new(panel.left(), y),
            FontId::proportional(theme.h3_size * 0.8 * scale),
            color,
            panel.width(),
        );
        y += 16.0 * scale;
    }

    let color = Theme::with_opacity(theme.foreground, text_opacity);
    for line in &slide.lines {
        y += text::draw_text(
            ui,
            line,
            Pos2::new(panel.left(), y),
            FontId::proportional(theme.body_size * 0.75 * scale),
            color,
            panel.width(),
        );
        y += 10.0 * scale;
    }

    if let Some(StepIndicator { current, total }) = slide.step {
        let radius = 5.0 * scale;
        let spacing = 18.0 * scale;
        let dots_y = panel.bottom() - radius;
        for i in 0..total {
            let center = Pos2::new(panel.left() + radius + i as f32 * spacing, dots_y);
            let color = if i == current {
                Theme::with_opacity(theme.accent, opacity)
            } else {
                Theme::with_opacity(theme.border, opacity)
            };
            ui.painter().circle_filled(center, radius, color);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

/// Grid cells for `count` nodes. Rows are filled left to right and a short
/// last row is centred.
fn compute_grid(count: usize, width: f32, height: f32, gap: f32) -> Vec<Cell> {
    if count == 0 {
        return Vec::new();
    }
    let cols = match count {
        1..=3 => count,
        4 => 2,
        5 | 6 => 3,
        _ => 4,
    };
    let rows = count.div_ceil(cols);
    let cell_w = (width - (cols - 1) as f32 * gap) / cols as f32;
    let cell_h = (height - (rows - 1) as f32 * gap) / rows as f32;

    (0..count)
        .map(|i| {
            let col = i % cols;
            let row = i / cols;
            let items_in_row = if row == rows - 1 {
                count - row * cols
            } else {
                cols
            };
            let row_width = items_in_row as f32 * cell_w + (items_in_row - 1) as f32 * gap;
            let row_offset = (width - row_width) / 2.0;

            Cell {
                x: row_offset + col as f32 * (cell_w + gap),
                y: row as f32 * (cell_h + gap),
                w: cell_w,
                h: cell_h,
            }
        })
        .collect()
}
