use eframe::egui;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::autoadvance::AutoAdvance;
use crate::config::AutoAdvancePolicy;
use crate::controller::{Controller, Navigation};
use crate::deck::{self, RenderedLayout, RenderedSlide, SlideKind};
use crate::demo::DemoMock;
use crate::input::{self, Focus, HitMap, InputEvent, Key, Outcome, Target};
use crate::intro::{INTRO_DURATION, IntroSequence};
use crate::modal::DiagramModal;
use crate::render;
use crate::render::layouts::diagram::draw_nodes;
use crate::render::transition::{ActiveTransition, TransitionKind};
use crate::theme::Theme;

/// How long per-step text takes to fade in after a step change.
const STEP_FADE: f32 = 0.35;

/// Start-up settings resolved from the CLI and the config file.
#[derive(Debug, Clone)]
pub struct Options {
    pub windowed: bool,
    /// Slide reference: 1-indexed number or slide id.
    pub start_slide: Option<String>,
    pub skip_intro: bool,
    pub theme: String,
    pub transition: TransitionKind,
    pub auto_advance: AutoAdvancePolicy,
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = 1.5;
        let fade_start = 1.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= 1.5
    }
}

struct PresentationApp {
    controller: Controller,
    /// The branding animation; `None` once it has finished.
    intro: Option<IntroSequence>,
    auto_advance: AutoAdvance,
    auto_advance_policy: AutoAdvancePolicy,
    modal: DiagramModal,
    demo: DemoMock,
    /// Chrome painted last frame, used to classify this frame's taps.
    hits: HitMap,
    theme: Theme,
    transition_kind: TransitionKind,
    transition: Option<ActiveTransition>,
    step_changed_at: Option<Instant>,
    toast: Option<Toast>,
    show_hud: bool,
    /// Expand-diagram marker painted last frame
    expand_marker: Option<egui::Rect>,
    last_rect: egui::Rect,
}

impl PresentationApp {
    fn new(controller: Controller, options: &Options, now: Instant) -> Self {
        let intro = if controller.state().intro_shown() {
            None
        } else {
            Some(IntroSequence::new(now, INTRO_DURATION))
        };

        let mut app = Self {
            controller,
            intro,
            auto_advance: AutoAdvance::new(),
            auto_advance_policy: options.auto_advance,
            modal: DiagramModal::new(),
            demo: DemoMock::new(),
            hits: HitMap::new(),
            theme: Theme::from_name(&options.theme),
            transition_kind: options.transition,
            transition: None,
            step_changed_at: None,
            toast: None,
            show_hud: false,
            expand_marker: None,
            last_rect: egui::Rect::ZERO,
        };
        app.sync_auto_advance(now);
        app
    }

    /// Arm the auto-advance timer for the current slide, or drop it.
    fn sync_auto_advance(&mut self, now: Instant) {
        if !self.controller.state().intro_shown() {
            return;
        }
        let delay = self
            .auto_advance_policy
            .delay_for(self.controller.current_slide().auto_advance());
        self.auto_advance
            .retarget(self.controller.position(), delay, now);
    }

    fn finish_intro(&mut self, now: Instant) {
        self.intro = None;
        self.controller.complete_intro();
        self.sync_auto_advance(now);
    }

    /// Follow-up work after the controller moved.
    fn on_navigated(&mut self, nav: Navigation, outgoing: RenderedSlide, now: Instant) {
        match nav {
            Navigation::Slide { .. } => {
                self.step_changed_at = None;
                if self.transition_kind != TransitionKind::None {
                    self.transition = Some(ActiveTransition::new(
                        outgoing,
                        self.transition_kind,
                        self.controller.state().direction(),
                        now,
                    ));
                }
            }
            Navigation::Step { .. } => {
                self.step_changed_at = Some(now);
            }
            Navigation::Boundary | Navigation::Gated => return,
        }
        self.sync_auto_advance(now);
    }

    fn handle_event(&mut self, event: InputEvent, now: Instant) {
        let outgoing = self.controller.render_current(false);
        match input::dispatch(&mut self.controller, &mut self.modal, event) {
            Outcome::Navigated(nav) => self.on_navigated(nav, outgoing, now),
            Outcome::ModalClosed | Outcome::Ignored => {}
        }
    }

    /// Fire a due auto-advance. Returns how long until the next one, if armed.
    ///
    /// Nothing fires while the diagram modal is open; a due advance waits for
    /// it to close.
    fn poll_auto_advance(&mut self, now: Instant) -> Option<Duration> {
        if self.modal.is_open() {
            return None;
        }
        if self.auto_advance.poll(now, self.controller.position()) {
            let outgoing = self.controller.render_current(false);
            let nav = self.controller.advance();
            debug!(?nav, "auto-advance");
            self.on_navigated(nav, outgoing, now);
        }
        self.auto_advance.remaining(now)
    }

    fn open_modal(&mut self) {
        let rendered = self.controller.render_current(false);
        if matches!(
            rendered.layout,
            RenderedLayout::Diagram | RenderedLayout::Walkthrough
        ) {
            self.modal.open(&rendered.heading);
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    fn cycle_transition(&mut self) {
        self.transition_kind = self.transition_kind.cycled();
        self.toast = Some(Toast::new(format!(
            "Transition: {}",
            self.transition_kind.name()
        )));
    }

    fn step_opacity(&self, slide: &RenderedSlide, now: Instant) -> f32 {
        match self.step_changed_at {
            Some(changed) if slide.animate => {
                (now.saturating_duration_since(changed).as_secs_f32() / STEP_FADE).clamp(0.0, 1.0)
            }
            _ => 1.0,
        }
    }
}

impl eframe::App for PresentationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        let intro_done = self.intro.as_mut().is_some_and(|intro| intro.poll(now));
        if intro_done {
            self.finish_intro(now);
        }

        // Read before ctx.input(): querying the context inside the closure deadlocks.
        let focus = if ctx.wants_keyboard_input() {
            Focus::TextEntry
        } else {
            Focus::Surface
        };
        let intro_running = self.intro.is_some();
        let modal_open = self.modal.is_open();
        let viewport = self.last_rect;

        // Collect viewport commands to send AFTER the input closure
        // (sending inside ctx.input() causes RwLock deadlock)
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();
        let mut events: Vec<InputEvent> = Vec::new();
        let mut open_modal = false;
        let mut zoom: i32 = 0;
        let mut toggle_theme = false;
        let mut cycle_transition = false;

        ctx.input(|i| {
            let typing = focus == Focus::TextEntry;

            // Quit: Q
            if !typing && i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }

            // Fullscreen toggle: F
            if !typing && i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
            }

            for event in &i.events {
                if let egui::Event::Key {
                    key,
                    pressed: true,
                    repeat,
                    ..
                } = event
                {
                    if let Some(key) = presentation_key(*key, *repeat) {
                        events.push(InputEvent::Key { key, focus });
                    }
                }
            }

            if i.pointer.primary_clicked() {
                if let Some(pos) = i.pointer.interact_pos() {
                    let on_marker = self.expand_marker.is_some_and(|m| m.contains(pos));
                    if on_marker && !modal_open && !intro_running {
                        open_modal = true;
                    } else {
                        events.push(InputEvent::Tap {
                            x: pos.x - viewport.left(),
                            viewport_width: viewport.width(),
                            target: self.hits.target_at(pos.x, pos.y),
                        });
                    }
                }
            }

            if typing || intro_running {
                return;
            }

            if i.key_pressed(egui::Key::Z) && !modal_open {
                open_modal = true;
            }
            if modal_open {
                if i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals) {
                    zoom += 1;
                }
                if i.key_pressed(egui::Key::Minus) {
                    zoom -= 1;
                }
            }
            if i.key_pressed(egui::Key::D) {
                toggle_theme = true;
            }
            if i.key_pressed(egui::Key::T) {
                cycle_transition = true;
            }
            if i.key_pressed(egui::Key::H) {
                self.show_hud = !self.show_hud;
            }
        });

        // Send collected viewport commands outside the input closure
        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        for event in events {
            self.handle_event(event, now);
        }
        if open_modal {
            self.open_modal();
        }
        for _ in 0..zoom.max(0) {
            self.modal.zoom_in();
        }
        for _ in 0..(-zoom).max(0) {
            self.modal.zoom_out();
        }
        if toggle_theme {
            self.toggle_theme();
        }
        if cycle_transition {
            self.cycle_transition();
        }

        if let Some(remaining) = self.poll_auto_advance(now) {
            ctx.request_repaint_after(remaining);
        }

        if self.transition.as_ref().is_some_and(|t| t.is_complete(now)) {
            self.transition = None;
        }

        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        let bg = self.theme.background;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);
                let scale = render::compute_scale(rect);

                self.last_rect = rect;
                self.hits.clear();
                self.expand_marker = None;

                if let Some(intro) = &self.intro {
                    draw_intro(ui, &self.theme, rect, intro.progress(now), scale);
                    ctx.request_repaint();
                    return;
                }

                self.draw_presentation(ui, ctx, rect, scale, now);

                if self.modal.is_open() {
                    self.draw_modal(ui, rect, scale);
                }

                if let Some(ref toast) = self.toast {
                    draw_toast(ui, &self.theme, rect, toast, scale);
                    ctx.request_repaint();
                }

                if self.show_hud {
                    draw_hud(ui, &self.theme, rect, scale);
                }
            });
    }
}

impl PresentationApp {
    fn draw_presentation(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        rect: egui::Rect,
        scale: f32,
        now: Instant,
    ) {
        let current = self.controller.render_current(true);
        let step_opacity = self.step_opacity(&current, now);
        if step_opacity < 1.0 {
            ctx.request_repaint();
        }

        let painted = if let Some(ref t) = self.transition {
            let progress = t.progress(now);
            ctx.request_repaint();
            match t.kind {
                TransitionKind::Fade => {
                    render::render_slide(ui, &t.outgoing, &self.theme, rect, 1.0 - progress, 1.0, scale);
                    render::render_slide(ui, &current, &self.theme, rect, progress, step_opacity, scale)
                }
                TransitionKind::SlideHorizontal => {
                    let w = rect.width();
                    let sign = t.sign();
                    let from_offset = sign * progress * w;
                    let to_offset = from_offset - sign * w;

                    let from_rect = rect.translate(egui::vec2(from_offset, 0.0));
                    let to_rect = rect.translate(egui::vec2(to_offset, 0.0));

                    render::render_slide(ui, &t.outgoing, &self.theme, from_rect, 1.0, 1.0, scale);
                    render::render_slide(ui, &current, &self.theme, to_rect, 1.0, step_opacity, scale)
                }
                TransitionKind::None => {
                    render::render_slide(ui, &current, &self.theme, rect, 1.0, step_opacity, scale)
                }
            }
        } else {
            render::render_slide(ui, &current, &self.theme, rect, 1.0, step_opacity, scale)
        };

        // Markers are only live once the slide has settled.
        if self.transition.is_none() {
            if let Some(marker) = painted.expand {
                self.expand_marker = Some(marker);
                self.hits
                    .push(render::region(marker, Target::NoNavigation));
            }
            if current.layout == RenderedLayout::Demo {
                self.demo
                    .show(ui, &current.lines, &self.theme, rect, scale, &mut self.hits);
            }
        }

        let kind = self.controller.current_slide().kind();
        if kind.shows_chrome() {
            self.draw_chrome(ui, rect, scale, kind);
        }
    }

    /// Progress bar, slide counter, navigation hint and corner logo.
    fn draw_chrome(&self, ui: &egui::Ui, rect: egui::Rect, scale: f32, kind: SlideKind) {
        let painter = ui.painter();

        // Progress bar
        let bar_h = 4.0 * scale;
        let track = egui::Rect::from_min_size(rect.left_top(), egui::vec2(rect.width(), bar_h));
        painter.rect_filled(track, 0.0, Theme::with_opacity(self.theme.border, 0.5));
        let filled = egui::Rect::from_min_size(
            rect.left_top(),
            egui::vec2(rect.width() * self.controller.progress(), bar_h),
        );
        painter.rect_filled(filled, 0.0, self.theme.accent);

        // Corner logo
        let logo_color = Theme::with_opacity(self.theme.accent, 0.8);
        let logo = painter.layout_no_wrap(
            "AYO".to_string(),
            egui::FontId::monospace(20.0 * scale),
            logo_color,
        );
        painter.galley(
            egui::pos2(rect.left() + 24.0 * scale, rect.top() + 20.0 * scale),
            logo,
            logo_color,
        );

        // Slide counter
        let counter_color = Theme::with_opacity(self.theme.foreground, 0.4);
        let counter = painter.layout_no_wrap(
            self.controller.counter(),
            egui::FontId::monospace(14.0 * scale),
            counter_color,
        );
        let counter_pos = egui::pos2(
            rect.right() - counter.rect.width() - 24.0 * scale,
            rect.bottom() - 36.0 * scale,
        );
        painter.galley(counter_pos, counter, counter_color);

        // Navigation hint
        let hint = match kind {
            SlideKind::Interactive => "\u{2190} \u{2192} step through  \u{00b7}  Z expand",
            SlideKind::Normal | SlideKind::Demo => "Space / \u{2192} next  \u{00b7}  \u{2190} back",
        };
        let hint_color = Theme::with_opacity(self.theme.muted, 0.6);
        let hint = painter.layout_no_wrap(
            hint.to_string(),
            egui::FontId::proportional(14.0 * scale),
            hint_color,
        );
        let hint_pos = egui::pos2(
            rect.center().x - hint.rect.width() / 2.0,
            rect.bottom() - 36.0 * scale,
        );
        painter.galley(hint_pos, hint, hint_color);
    }

    fn draw_modal(&mut self, ui: &mut egui::Ui, rect: egui::Rect, scale: f32) {
        let backdrop = Theme::with_opacity(egui::Color32::BLACK, 0.75);
        ui.painter().rect_filled(rect, 0.0, backdrop);

        let zoom = self.modal.zoom();
        let size = egui::vec2(rect.width() * 0.8, rect.height() * 0.75) * zoom;
        let panel = egui::Rect::from_center_size(rect.center(), size);
        ui.painter()
            .rect_filled(panel, 16.0 * scale, self.theme.surface);
        self.hits
            .push(render::region(panel, Target::NoNavigation));

        let title = self.modal.title().unwrap_or_default().to_string();
        let title_color = self.theme.heading_color;
        let galley = ui.painter().layout_no_wrap(
            title,
            egui::FontId::proportional(self.theme.h3_size * scale),
            title_color,
        );
        ui.painter().galley(
            panel.min + egui::vec2(28.0, 20.0) * scale,
            galley,
            title_color,
        );

        let nodes = self.controller.render_current(false).nodes;
        let area = egui::Rect::from_min_max(
            panel.min + egui::vec2(28.0, 90.0) * scale,
            panel.max - egui::vec2(28.0, 28.0) * scale,
        );
        draw_nodes(ui, &nodes, &self.theme, area, 1.0, scale * zoom);

        // Controls: zoom out, zoom in, close
        let button = egui::vec2(44.0, 44.0) * scale;
        let mut x = panel.right() - 20.0 * scale;
        let y = panel.top() + 20.0 * scale;
        let mut next_slot = || {
            x -= button.x;
            let r = egui::Rect::from_min_size(egui::pos2(x, y), button);
            x -= 8.0 * scale;
            r
        };
        let close_rect = next_slot();
        let in_rect = next_slot();
        let out_rect = next_slot();

        if ui.put(close_rect, egui::Button::new("\u{2715}")).clicked() {
            self.modal.close();
        }
        if ui.put(in_rect, egui::Button::new("+")).clicked() {
            self.modal.zoom_in();
        }
        if ui.put(out_rect, egui::Button::new("\u{2212}")).clicked() {
            self.modal.zoom_out();
        }
        for r in [close_rect, in_rect, out_rect] {
            self.hits.push(render::region(r, Target::Button));
        }
    }
}

/// Held navigation keys keep stepping; other keys count once per press.
fn presentation_key(key: egui::Key, repeat: bool) -> Option<Key> {
    let key = match key {
        egui::Key::Space => Key::Space,
        egui::Key::ArrowRight => Key::ArrowRight,
        egui::Key::ArrowLeft => Key::ArrowLeft,
        egui::Key::Escape => Key::Escape,
        _ => Key::Other,
    };
    match key {
        Key::Space | Key::ArrowRight | Key::ArrowLeft => Some(key),
        Key::Escape | Key::Other if repeat => None,
        Key::Escape | Key::Other => Some(key),
    }
}

fn draw_intro(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, progress: f32, scale: f32) {
    // Fade in over the first 40%, hold, fade out over the last 20%.
    let opacity = if progress < 0.4 {
        progress / 0.4
    } else if progress > 0.8 {
        (1.0 - progress) / 0.2
    } else {
        1.0
    };
    let grow = 0.9 + 0.1 * progress;

    let logo_color = Theme::with_opacity(theme.accent, opacity);
    let logo = ui.painter().layout_no_wrap(
        "AYO".to_string(),
        egui::FontId::proportional(theme.h1_size * 2.0 * grow * scale),
        logo_color,
    );
    let logo_pos = rect.center() - logo.rect.size() / 2.0 - egui::vec2(0.0, 40.0 * scale);
    let logo_bottom = logo_pos.y + logo.rect.height();
    ui.painter().galley(logo_pos, logo, logo_color);

    let tagline_color = Theme::with_opacity(theme.foreground, opacity * 0.8);
    let tagline = ui.painter().layout_no_wrap(
        "Your AI copilot".to_string(),
        egui::FontId::proportional(theme.h3_size * scale),
        tagline_color,
    );
    let tagline_pos = egui::pos2(
        rect.center().x - tagline.rect.width() / 2.0,
        logo_bottom + 20.0 * scale,
    );
    ui.painter().galley(tagline_pos, tagline, tagline_color);

    let line_w = 240.0 * scale;
    let line = egui::Rect::from_min_size(
        egui::pos2(rect.center().x - line_w / 2.0, tagline_pos.y + 80.0 * scale),
        egui::vec2(line_w * progress, 2.0 * scale),
    );
    ui.painter()
        .rect_filled(line, 0.0, Theme::with_opacity(theme.accent_glow, opacity));
}

fn draw_toast(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, toast: &Toast, scale: f32) {
    let opacity = toast.opacity();
    if opacity <= 0.0 {
        return;
    }
    let toast_color = Theme::with_opacity(theme.foreground, opacity * 0.9);
    let toast_bg = Theme::with_opacity(theme.surface, opacity * 0.9);
    let galley = ui.painter().layout_no_wrap(
        toast.message.clone(),
        egui::FontId::proportional(20.0 * scale),
        toast_color,
    );
    let padding = 16.0 * scale;
    let toast_rect = egui::Rect::from_min_size(
        egui::pos2(
            rect.center().x - galley.rect.width() / 2.0 - padding,
            rect.bottom() - 110.0 * scale,
        ),
        egui::vec2(
            galley.rect.width() + padding * 2.0,
            galley.rect.height() + padding * 2.0,
        ),
    );
    ui.painter().rect_filled(toast_rect, 8.0 * scale, toast_bg);
    let text_pos = egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
    ui.painter().galley(text_pos, galley, toast_color);
}

fn draw_hud(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) {
    let shortcuts = [
        ("Space / \u{2192}", "Next step / slide"),
        ("\u{2190}", "Previous step / slide"),
        ("Tap right 75%", "Next"),
        ("Tap left 25%", "Previous"),
        ("Z", "Expand diagram"),
        ("+ / \u{2212}", "Zoom diagram"),
        ("Esc", "Close diagram"),
        ("T", "Cycle transition"),
        ("D", "Toggle theme"),
        ("F", "Toggle fullscreen"),
        ("H", "Toggle this HUD"),
        ("Q", "Quit"),
    ];

    let bg = Theme::with_opacity(theme.surface, 0.92);
    let text_color = Theme::with_opacity(theme.foreground, 0.9);
    let key_color = Theme::with_opacity(theme.accent, 0.9);

    let padding = 24.0 * scale;
    let line_height = 32.0 * scale;
    let hud_height = shortcuts.len() as f32 * line_height + padding * 2.0 + 40.0 * scale;
    let hud_width = 380.0 * scale;

    let hud_rect = egui::Rect::from_center_size(rect.center(), egui::vec2(hud_width, hud_height));
    ui.painter().rect_filled(hud_rect, 12.0 * scale, bg);

    let title_galley = ui.painter().layout_no_wrap(
        "Keyboard Shortcuts".to_string(),
        egui::FontId::proportional(20.0 * scale),
        Theme::with_opacity(theme.heading_color, 0.9),
    );
    let title_pos = egui::pos2(hud_rect.left() + padding, hud_rect.top() + padding);
    ui.painter().galley(title_pos, title_galley, text_color);

    let mut y = hud_rect.top() + padding + 40.0 * scale;
    for (key, desc) in &shortcuts {
        let key_galley = ui.painter().layout_no_wrap(
            key.to_string(),
            egui::FontId::monospace(15.0 * scale),
            key_color,
        );
        ui.painter()
            .galley(egui::pos2(hud_rect.left() + padding, y), key_galley, key_color);

        let desc_galley = ui.painter().layout_no_wrap(
            desc.to_string(),
            egui::FontId::proportional(15.0 * scale),
            text_color,
        );
        ui.painter().galley(
            egui::pos2(hud_rect.left() + padding + 170.0 * scale, y),
            desc_galley,
            text_color,
        );
        y += line_height;
    }
}

pub fn run(options: Options) -> anyhow::Result<()> {
    let registry = deck::ayo::deck()?;

    let start = match options.start_slide.as_deref() {
        Some(reference) => registry
            .resolve(reference)
            .ok_or_else(|| anyhow::anyhow!("Unknown slide: {reference}. Run `ayodeck list` to see slide ids."))?,
        None => 0,
    };

    let mut controller = Controller::starting_at(registry, start);
    if options.skip_intro {
        controller.complete_intro();
    }
    info!(
        slides = controller.registry().count(),
        start = start + 1,
        skip_intro = options.skip_intro,
        "starting presentation"
    );

    let title = "AYO \u{00b7} Pitch Deck";
    let viewport = if options.windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title(title)
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title(title)
    };

    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        title,
        native,
        Box::new(move |_cc| {
            Ok(Box::new(PresentationApp::new(
                controller,
                &options,
                Instant::now(),
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Position;

    fn options(policy: AutoAdvancePolicy, transition: TransitionKind) -> Options {
        Options {
            windowed: true,
            start_slide: None,
            skip_intro: true,
            theme: "dark".to_string(),
            transition,
            auto_advance: policy,
        }
    }

    fn app_at(id: &str, policy: AutoAdvancePolicy, now: Instant) -> PresentationApp {
        let registry = deck::ayo::deck().unwrap();
        let start = registry.position_of(id).unwrap();
        let mut controller = Controller::starting_at(registry, start);
        controller.complete_intro();
        PresentationApp::new(controller, &options(policy, TransitionKind::Fade), now)
    }

    #[test]
    fn test_intro_plays_unless_skipped() {
        let now = Instant::now();
        let controller = Controller::new(deck::ayo::deck().unwrap());
        let mut app = PresentationApp::new(controller, &options(AutoAdvancePolicy::PerSlide, TransitionKind::Fade), now);
        assert!(app.intro.is_some());

        app.handle_event(InputEvent::key(Key::Space), now);
        assert_eq!(app.controller.position(), Position::new(0, 0));

        app.finish_intro(now + INTRO_DURATION);
        assert!(app.intro.is_none());
        app.handle_event(InputEvent::key(Key::Space), now + INTRO_DURATION);
        assert_eq!(app.controller.position(), Position::new(1, 0));
        assert!(app.transition.is_some());
    }

    #[test]
    fn test_auto_advance_armed_on_overview_diagram() {
        let now = Instant::now();
        let app = app_at("use-case", AutoAdvancePolicy::PerSlide, now);
        assert_eq!(app.auto_advance.armed_for(), Some(app.controller.position()));
        assert_eq!(
            app.auto_advance.remaining(now),
            Some(deck::ayo::DIAGRAM_DWELL)
        );
    }

    #[test]
    fn test_manual_navigation_retargets_auto_advance() {
        let now = Instant::now();
        let mut app = app_at("use-case", AutoAdvancePolicy::PerSlide, now);
        app.handle_event(InputEvent::key(Key::ArrowLeft), now);
        // Walked back onto the last step of an interactive slide
        assert!(app.auto_advance.armed_for().is_none());
    }

    #[test]
    fn test_disabled_policy_never_arms() {
        let now = Instant::now();
        let app = app_at("use-case", AutoAdvancePolicy::Disabled, now);
        assert!(app.auto_advance.armed_for().is_none());
    }

    #[test]
    fn test_fixed_policy_overrides_delay() {
        let now = Instant::now();
        let app = app_at(
            "erd",
            AutoAdvancePolicy::Fixed(Duration::from_secs(2)),
            now,
        );
        assert_eq!(app.auto_advance.remaining(now), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_step_change_starts_fade() {
        let now = Instant::now();
        let mut app = app_at("actors-roles", AutoAdvancePolicy::PerSlide, now);
        app.handle_event(InputEvent::key(Key::Space), now);
        assert_eq!(app.step_changed_at, Some(now));
        assert!(app.transition.is_none());
        let current = app.controller.render_current(true);
        assert_eq!(app.step_opacity(&current, now), 0.0);
        let later = now + Duration::from_secs(1);
        assert_eq!(app.step_opacity(&current, later), 1.0);
    }

    #[test]
    fn test_open_modal_absorbs_then_escape_closes() {
        let now = Instant::now();
        let mut app = app_at("architecture", AutoAdvancePolicy::PerSlide, now);
        app.open_modal();
        assert!(app.modal.is_open());
        // Navigation is absorbed while open
        app.handle_event(InputEvent::key(Key::Space), now);
        assert!(app.modal.is_open());
        app.handle_event(InputEvent::key(Key::Escape), now);
        assert!(!app.modal.is_open());
        app.handle_event(InputEvent::key(Key::Space), now);
        assert_eq!(app.controller.current_slide().id(), "subsystem");
    }

    #[test]
    fn test_auto_advance_fires_and_rearms_on_next_diagram() {
        let now = Instant::now();
        let mut app = app_at("use-case", AutoAdvancePolicy::PerSlide, now);
        let dwell = deck::ayo::DIAGRAM_DWELL;

        assert_eq!(app.poll_auto_advance(now), Some(dwell));
        assert_eq!(app.controller.current_slide().id(), "use-case");

        let due = now + dwell;
        assert_eq!(app.poll_auto_advance(due), Some(dwell));
        assert_eq!(app.controller.current_slide().id(), "class-diagram");
        assert_eq!(app.auto_advance.armed_for(), Some(app.controller.position()));
        assert!(app.transition.is_some());
    }

    #[test]
    fn test_auto_advance_cancels_on_slide_without_delay() {
        let now = Instant::now();
        let mut app = app_at("erd", AutoAdvancePolicy::PerSlide, now);
        let due = now + deck::ayo::DIAGRAM_DWELL;

        assert_eq!(app.poll_auto_advance(due), None);
        assert_eq!(app.controller.current_slide().id(), "state-machine");
        assert!(app.auto_advance.armed_for().is_none());

        let later = due + Duration::from_secs(60);
        assert_eq!(app.poll_auto_advance(later), None);
        assert_eq!(app.controller.current_slide().id(), "state-machine");
    }

    #[test]
    fn test_open_modal_holds_due_auto_advance() {
        let now = Instant::now();
        let mut app = app_at("use-case", AutoAdvancePolicy::PerSlide, now);
        app.open_modal();
        assert!(app.modal.is_open());

        let due = now + deck::ayo::DIAGRAM_DWELL + Duration::from_secs(1);
        assert_eq!(app.poll_auto_advance(due), None);
        assert_eq!(app.controller.current_slide().id(), "use-case");

        app.handle_event(InputEvent::key(Key::Escape), due);
        assert!(!app.modal.is_open());
        app.poll_auto_advance(due);
        assert_eq!(app.controller.current_slide().id(), "class-diagram");
    }

    #[test]
    fn test_held_navigation_keys_repeat() {
        assert_eq!(presentation_key(egui::Key::ArrowRight, true), Some(Key::ArrowRight));
        assert_eq!(presentation_key(egui::Key::ArrowLeft, true), Some(Key::ArrowLeft));
        assert_eq!(presentation_key(egui::Key::Space, true), Some(Key::Space));
        assert_eq!(presentation_key(egui::Key::Escape, true), None);
        assert_eq!(presentation_key(egui::Key::Escape, false), Some(Key::Escape));
        assert_eq!(presentation_key(egui::Key::A, true), None);
        assert_eq!(presentation_key(egui::Key::A, false), Some(Key::Other));
    }

    #[test]
    fn test_modal_only_opens_on_diagrams() {
        let now = Instant::now();
        let mut app = app_at("problems", AutoAdvancePolicy::PerSlide, now);
        app.open_modal();
        assert!(!app.modal.is_open());
    }
}
