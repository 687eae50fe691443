use glam::Vec2;

use crate::layout::RectOffset;

/// Visual configuration of an [`AlignedButton`](crate::AlignedButton).
///
/// Plain data with builder-style setters; every field has a usable default.
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// base colour (will be tinted when hovered/pressed)
    pub color: [f32; 4],
    pub hovered_color: [f32; 4],
    pub pressed_color: [f32; 4],
    pub text_color: [f32; 4],
    /// radii for each corner ([top-left, top-right, bottom-left, bottom-right]).
    pub radii: [f32; 4],
    pub font_size: f32,
    /// average glyph width as a fraction of `font_size`
    pub glyph_advance: f32,
    pub icon_size: Vec2,
    /// Box the bare button frame asks for, added to the content in size hints.
    pub frame: RectOffset,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            color: [0.2, 0.2, 0.8, 1.0],
            hovered_color: [0.2, 0.8, 0.2, 1.0],
            pressed_color: [0.8, 0.2, 0.2, 1.0],
            text_color: [1.0, 1.0, 1.0, 1.0],
            radii: [0.0; 4],
            font_size: 13.0,
            glyph_advance: 0.55,
            icon_size: Vec2::splat(16.0),
            frame: RectOffset {
                left: 6.0,
                right: 6.0,
                top: 4.0,
                bottom: 4.0,
            },
        }
    }
}

impl ButtonStyle {
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn with_text_color(mut self, color: [f32; 4]) -> Self {
        self.text_color = color;
        self
    }

    /// Set a uniform radius for all four corners.
    pub fn with_radius(mut self, r: f32) -> Self {
        self.radii = [r; 4];
        self
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_glyph_advance(mut self, advance: f32) -> Self {
        self.glyph_advance = advance;
        self
    }

    pub fn with_icon_size(mut self, size: Vec2) -> Self {
        self.icon_size = size;
        self
    }

    pub fn with_frame(mut self, frame: RectOffset) -> Self {
        self.frame = frame;
        self
    }
}
