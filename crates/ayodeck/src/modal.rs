use tracing::debug;

/// Zoom limits, in tenths.
const ZOOM_MIN: u8 = 5;
const ZOOM_MAX: u8 = 18;
const ZOOM_RESET: u8 = 10;

/// Enlarged-diagram overlay. Closed unless a diagram has been opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramModal {
    title: Option<String>,
    zoom_tenths: u8,
}

impl Default for DiagramModal {
    fn default() -> Self {
        Self {
            title: None,
            zoom_tenths: ZOOM_RESET,
        }
    }
}

impl DiagramModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on the diagram named `title`, resetting zoom.
    pub fn open(&mut self, title: &str) {
        debug!(title, "diagram modal opened");
        self.title = Some(title.to_string());
        self.zoom_tenths = ZOOM_RESET;
    }

    /// Returns true if the modal was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.title.take().is_some();
        if was_open {
            debug!("diagram modal closed");
        }
        was_open
    }

    pub fn is_open(&self) -> bool {
        self.title.is_some()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn zoom(&self) -> f32 {
        f32::from(self.zoom_tenths) / 10.0
    }

    pub fn zoom_in(&mut self) {
        self.zoom_tenths = (self.zoom_tenths + 1).min(ZOOM_MAX);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_tenths = self.zoom_tenths.saturating_sub(1).max(ZOOM_MIN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close() {
        let mut modal = DiagramModal::new();
        assert!(!modal.is_open());
        assert!(!modal.close());
        modal.open("Architecture");
        assert!(modal.is_open());
        assert_eq!(modal.title(), Some("Architecture"));
        assert!(modal.close());
        assert!(!modal.is_open());
        assert_eq!(modal.title(), None);
    }

    #[test]
    fn test_zoom_clamps() {
        let mut modal = DiagramModal::new();
        modal.open("Erd");
        for _ in 0..20 {
            modal.zoom_in();
        }
        assert_eq!(modal.zoom(), 1.8);
        for _ in 0..30 {
            modal.zoom_out();
        }
        assert_eq!(modal.zoom(), 0.5);
    }

    #[test]
    fn test_zoom_steps_by_tenths() {
        let mut modal = DiagramModal::new();
        modal.zoom_in();
        modal.zoom_in();
        modal.zoom_in();
        modal.zoom_out();
        assert_eq!(modal.zoom(), 1.2);
    }

    #[test]
    fn test_open_resets_zoom() {
        let mut modal = DiagramModal::new();
        modal.open("A");
        modal.zoom_in();
        modal.close();
        modal.open("B");
        assert_eq!(modal.zoom(), 1.0);
    }
}
