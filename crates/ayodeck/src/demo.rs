//! The decorative product mock shown on the demo slide.
//!
//! Nothing here talks to a backend: the chat answers from a fixed list of
//! canned replies.

use eframe::egui::{self, FontId, Pos2};
use tracing::debug;

use crate::input::{HitMap, Target};
use crate::render;
use crate::render::layouts::demo::DemoFrame;
use crate::theme::Theme;

const REPLIES: [&str; 5] = [
    "I understand. Let me help you with that.",
    "Interesting question. Based on my analysis...",
    "I've processed your request. Here's what I found:",
    "Let me break this down for you.",
    "Based on the context available, I suggest...",
];

const GREETING: &str = "Hello! I'm Ayo, your AI copilot assistant. How can I help you today?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub from_user: bool,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct DemoMock {
    page: usize,
    draft: String,
    messages: Vec<ChatMessage>,
    next_reply: usize,
}

impl Default for DemoMock {
    fn default() -> Self {
        Self {
            page: 0,
            draft: String::new(),
            messages: vec![ChatMessage {
                from_user: false,
                text: GREETING.to_string(),
            }],
            next_reply: 0,
        }
    }
}

impl DemoMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn select(&mut self, page: usize) {
        self.page = page;
        debug!(page, "demo page selected");
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[cfg(test)]
    pub fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }

    /// Post the draft and the next canned reply. Blank drafts are dropped.
    pub fn send(&mut self) -> bool {
        let text = self.draft.trim().to_string();
        self.draft.clear();
        if text.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            from_user: true,
            text,
        });
        let reply = REPLIES[self.next_reply % REPLIES.len()];
        self.next_reply += 1;
        self.messages.push(ChatMessage {
            from_user: false,
            text: reply.to_string(),
        });
        debug!(count = self.messages.len(), "demo chat message sent");
        true
    }

    /// Layer the live widgets over the static window painted by the demo layout.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        pages: &[String],
        theme: &Theme,
        rect: egui::Rect,
        scale: f32,
        hits: &mut HitMap,
    ) {
        let frame = DemoFrame::new(rect, scale);
        register_chrome(&frame, hits);

        for (i, page) in pages.iter().enumerate() {
            let entry = frame.page_rect(i, scale);
            let button = egui::Button::new(egui::RichText::new(page).size(18.0 * scale))
                .selected(i == self.page)
                .frame(i == self.page);
            if ui.put(entry, button).clicked() {
                self.select(i);
            }
            hits.push(render::region(entry, Target::Button));
        }

        let main = frame.main.shrink(28.0 * scale);
        match pages.get(self.page).map(String::as_str) {
            Some("Chat") => self.show_chat(ui, theme, main, scale, hits),
            Some("Dashboard") => {
                draw_dashboard(ui, theme, main, scale);
                self.show_chat_link(ui, pages, theme, main, scale, hits);
            }
            Some(other) => draw_placeholder(ui, other, theme, main, scale),
            None => {}
        }
    }

    fn show_chat_link(
        &mut self,
        ui: &mut egui::Ui,
        pages: &[String],
        theme: &Theme,
        area: egui::Rect,
        scale: f32,
        hits: &mut HitMap,
    ) {
        let Some(chat) = pages.iter().position(|p| p == "Chat") else {
            return;
        };
        let rect = egui::Rect::from_min_size(
            Pos2::new(area.left(), area.bottom() - 32.0 * scale),
            egui::vec2(220.0 * scale, 32.0 * scale),
        );
        let link = egui::Link::new(
            egui::RichText::new("Open chat \u{2192}")
                .size(18.0 * scale)
                .color(theme.accent),
        );
        if ui.put(rect, link).clicked() {
            self.select(chat);
        }
        hits.push(render::region(rect, Target::Link));
    }

    fn show_chat(
        &mut self,
        ui: &mut egui::Ui,
        theme: &Theme,
        area: egui::Rect,
        scale: f32,
        hits: &mut HitMap,
    ) {
        let input_h = 48.0 * scale;
        let send_w = 110.0 * scale;
        let log_rect = egui::Rect::from_min_max(
            area.min,
            Pos2::new(area.right(), area.bottom() - input_h - 16.0 * scale),
        );

        // Newest messages at the bottom; older ones drop off the top.
        let bubble_w = log_rect.width() * 0.7;
        let mut y = log_rect.bottom();
        for message in self.messages.iter().rev() {
            let color = if message.from_user {
                theme.heading_color
            } else {
                theme.foreground
            };
            let galley = ui.painter().layout(
                message.text.clone(),
                FontId::proportional(18.0 * scale),
                color,
                bubble_w - 28.0 * scale,
            );
            let bubble_h = galley.rect.height() + 24.0 * scale;
            y -= bubble_h;
            if y < log_rect.top() {
                break;
            }
            let x = if message.from_user {
                log_rect.right() - galley.rect.width() - 28.0 * scale
            } else {
                log_rect.left()
            };
            let bubble = egui::Rect::from_min_size(
                Pos2::new(x, y),
                egui::vec2(galley.rect.width() + 28.0 * scale, bubble_h),
            );
            let fill = if message.from_user {
                Theme::with_opacity(theme.accent, 0.2)
            } else {
                Theme::with_opacity(theme.background, 0.8)
            };
            ui.painter().rect_filled(bubble, 14.0 * scale, fill);
            ui.painter()
                .galley(bubble.min + egui::vec2(14.0, 12.0) * scale, galley, color);
            y -= 12.0 * scale;
        }

        let input_rect = egui::Rect::from_min_size(
            Pos2::new(area.left(), area.bottom() - input_h),
            egui::vec2(area.width() - send_w - 12.0 * scale, input_h),
        );
        let send_rect = egui::Rect::from_min_size(
            Pos2::new(input_rect.right() + 12.0 * scale, input_rect.top()),
            egui::vec2(send_w, input_h),
        );

        let edit = egui::TextEdit::singleline(&mut self.draft)
            .hint_text("Ask Ayo anything...")
            .font(FontId::proportional(18.0 * scale))
            .vertical_align(egui::Align::Center);
        let response = ui.put(input_rect, edit);
        hits.push(render::region(input_rect, Target::TextEntry));

        let submitted =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui
            .put(send_rect, egui::Button::new("Send"))
            .clicked();
        hits.push(render::region(send_rect, Target::Button));

        if (submitted || clicked) && self.send() {
            response.request_focus();
        }
    }
}

/// Header and sidebar swallow taps; the page body navigates like any slide
/// except where a widget sits.
fn register_chrome(frame: &DemoFrame, hits: &mut HitMap) {
    hits.push(render::region(frame.header, Target::NoNavigation));
    hits.push(render::region(frame.sidebar, Target::NoNavigation));
}

fn draw_dashboard(ui: &egui::Ui, theme: &Theme, area: egui::Rect, scale: f32) {
    let cards = [
        ("Assistant", "Online", theme.success),
        ("Context capture", "Enabled", theme.accent),
        ("Privacy mode", "Off", theme.warning),
        ("Requests today", "128", theme.accent_glow),
    ];
    let gap = 20.0 * scale;
    let card_w = (area.width() - gap) / 2.0;
    let card_h = 120.0 * scale;

    for (i, (label, value, color)) in cards.iter().enumerate() {
        let col = (i % 2) as f32;
        let row = (i / 2) as f32;
        let card = egui::Rect::from_min_size(
            Pos2::new(area.left() + col * (card_w + gap), area.top() + row * (card_h + gap)),
            egui::vec2(card_w, card_h),
        );
        ui.painter()
            .rect_filled(card, 12.0 * scale, Theme::with_opacity(theme.background, 0.8));
        let label_galley = ui.painter().layout_no_wrap(
            label.to_string(),
            FontId::proportional(16.0 * scale),
            theme.muted,
        );
        ui.painter().galley(
            card.min + egui::vec2(20.0, 20.0) * scale,
            label_galley,
            theme.muted,
        );
        let value_galley = ui.painter().layout_no_wrap(
            value.to_string(),
            FontId::proportional(34.0 * scale),
            *color,
        );
        ui.painter().galley(
            card.min + egui::vec2(20.0, 54.0) * scale,
            value_galley,
            *color,
        );
    }
}

fn draw_placeholder(ui: &egui::Ui, page: &str, theme: &Theme, area: egui::Rect, scale: f32) {
    let color = Theme::with_opacity(theme.foreground, 0.6);
    let galley = ui.painter().layout_no_wrap(
        format!("{page} (preview)"),
        FontId::proportional(26.0 * scale),
        color,
    );
    ui.painter()
        .galley(area.center() - galley.rect.size() / 2.0, galley, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let demo = DemoMock::new();
        assert_eq!(demo.messages().len(), 1);
        assert!(!demo.messages()[0].from_user);
        assert_eq!(demo.page(), 0);
    }

    #[test]
    fn test_send_appends_user_message_and_reply() {
        let mut demo = DemoMock::new();
        demo.set_draft("  hi there ");
        assert!(demo.send());
        let messages = demo.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(
            messages[1],
            ChatMessage {
                from_user: true,
                text: "hi there".to_string()
            }
        );
        assert_eq!(messages[2].text, REPLIES[0]);
    }

    #[test]
    fn test_blank_draft_is_dropped() {
        let mut demo = DemoMock::new();
        demo.set_draft("   ");
        assert!(!demo.send());
        assert_eq!(demo.messages().len(), 1);
    }

    #[test]
    fn test_page_body_taps_navigate() {
        let rect = egui::Rect::from_min_size(Pos2::ZERO, egui::vec2(1920.0, 1080.0));
        let frame = DemoFrame::new(rect, 1.0);
        let mut hits = HitMap::new();
        register_chrome(&frame, &mut hits);

        let body = frame.main.center();
        assert_eq!(hits.target_at(body.x, body.y), Target::Surface);
        let header = frame.header.center();
        assert_eq!(hits.target_at(header.x, header.y), Target::NoNavigation);
        let sidebar = frame.sidebar.center();
        assert_eq!(hits.target_at(sidebar.x, sidebar.y), Target::NoNavigation);
    }

    #[test]
    fn test_replies_cycle() {
        let mut demo = DemoMock::new();
        for i in 0..REPLIES.len() + 1 {
            demo.set_draft(&format!("question {i}"));
            demo.send();
        }
        let last = demo.messages().last().unwrap();
        assert_eq!(last.text, REPLIES[0]);
    }

    #[test]
    fn test_select_page() {
        let mut demo = DemoMock::new();
        demo.select(1);
        assert_eq!(demo.page(), 1);
    }
}
