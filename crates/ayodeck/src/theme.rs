use eframe::egui::Color32;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub background: Color32,
    pub surface: Color32,
    pub border: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub accent_glow: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub h1_size: f32,
    pub h2_size: f32,
    pub h3_size: f32,
    pub body_size: f32,
    pub label_size: f32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            background: Color32::from_rgb(0x11, 0x10, 0x17),
            surface: Color32::from_rgb(0x1F, 0x1D, 0x29),
            border: Color32::from_rgb(0x2A, 0x24, 0x38),
            foreground: Color32::from_rgb(0xC5, 0xC5, 0xD2),
            heading_color: Color32::from_rgb(0xF5, 0xF5, 0xF7),
            muted: Color32::from_rgb(0x6B, 0x68, 0x80),
            accent: Color32::from_rgb(0x9D, 0x8C, 0xFF),
            accent_glow: Color32::from_rgb(0xB8, 0xA9, 0xFF),
            success: Color32::from_rgb(0x7D, 0xD3, 0xA8),
            warning: Color32::from_rgb(0xE4, 0xC0, 0x7A),
            h1_size: 88.0,
            h2_size: 60.0,
            h3_size: 40.0,
            body_size: 30.0,
            label_size: 18.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            background: Color32::from_rgb(0xF5, 0xF5, 0xF7),
            surface: Color32::WHITE,
            border: Color32::from_rgb(0xD6, 0xD2, 0xE4),
            foreground: Color32::from_rgb(0x2A, 0x24, 0x38),
            heading_color: Color32::from_rgb(0x13, 0x10, 0x1C),
            muted: Color32::from_rgb(0x6B, 0x68, 0x80),
            accent: Color32::from_rgb(0x7C, 0x6B, 0xC4),
            accent_glow: Color32::from_rgb(0x4A, 0x3F, 0x6B),
            success: Color32::from_rgb(0x1E, 0x8A, 0x5A),
            warning: Color32::from_rgb(0xB8, 0x7B, 0x0A),
            h1_size: 88.0,
            h2_size: 60.0,
            h3_size: 40.0,
            body_size: 30.0,
            label_size: 18.0,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn toggled(&self) -> Self {
        if self.name == "dark" {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Apply opacity to a color
    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        Color32::from_rgba_unmultiplied(
            color.r(),
            color.g(),
            color.b(),
            (opacity.clamp(0.0, 1.0) * 255.0) as u8,
        )
    }
}
