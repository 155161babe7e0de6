pub mod layouts;
pub mod text;
pub mod transition;

use eframe::egui;

use crate::deck::{RenderedLayout, RenderedSlide};
use crate::input::{Region, Target};
use crate::theme::Theme;

/// Interactive areas a layout painted, in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Painted {
    /// The "expand diagram" marker, when the slide has a diagram.
    pub expand: Option<egui::Rect>,
}

pub fn compute_scale(rect: egui::Rect) -> f32 {
    let ref_w = 1920.0;
    let ref_h = 1080.0;
    (rect.width() / ref_w).min(rect.height() / ref_h)
}

/// Render a single slide using its layout.
///
/// `step_opacity` fades the per-step text of walkthroughs after a step change.
pub fn render_slide(
    ui: &egui::Ui,
    slide: &RenderedSlide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    step_opacity: f32,
    scale: f32,
) -> Painted {
    match slide.layout {
        RenderedLayout::Title => {
            layouts::title::render(ui, slide, theme, rect, opacity, scale);
            Painted::default()
        }
        RenderedLayout::Bullets => {
            layouts::bullets::render(ui, slide, theme, rect, opacity, scale);
            Painted::default()
        }
        RenderedLayout::Diagram | RenderedLayout::Walkthrough => {
            layouts::diagram::render(ui, slide, theme, rect, opacity, step_opacity, scale)
        }
        RenderedLayout::Demo => {
            layouts::demo::render(ui, slide, theme, rect, opacity, scale);
            Painted::default()
        }
    }
}

/// Hit-map entry for a painted rectangle.
pub fn region(rect: egui::Rect, target: Target) -> Region {
    Region::new((rect.min.x, rect.min.y), (rect.max.x, rect.max.y), target)
}
