use glam::Vec2;

use crate::alignment::{TextAlignment, VerticalAlignment};
use crate::icon::Pixmap;
use crate::layout::{Rect, RenderCommand};
use crate::widget::Widget;

/// What a label shows.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelContent {
    Text(String),
    Pixmap(Pixmap),
}

/// Passive display widget holding either a string or a pixmap.
///
/// Labels never take part in hit-testing, so the widget that owns them keeps
/// receiving the pointer. Text is measured with a fixed average advance per
/// glyph, as a fraction of the font size, since no font is loaded here.
#[derive(Debug, Clone)]
pub struct Label {
    pub rect: Rect,
    pub content: LabelContent,
    pub h_align: TextAlignment,
    pub v_align: VerticalAlignment,
    pub color: [f32; 4],
    pub font_size: f32,
    pub glyph_advance: f32,
}

impl Label {
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_content(LabelContent::Text(text.into()))
    }

    pub fn pixmap(pixmap: Pixmap) -> Self {
        Self::with_content(LabelContent::Pixmap(pixmap))
    }

    fn with_content(content: LabelContent) -> Self {
        Self {
            rect: Rect::default(),
            content,
            h_align: TextAlignment::Left,
            v_align: VerticalAlignment::Center,
            color: [1.0, 1.0, 1.0, 1.0],
            font_size: 16.0,
            glyph_advance: 0.5,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = LabelContent::Text(text.into());
    }

    pub fn set_pixmap(&mut self, pixmap: Pixmap) {
        self.content = LabelContent::Pixmap(pixmap);
    }

    /// The label's text, or an empty string when it shows a pixmap.
    pub fn as_text(&self) -> &str {
        match &self.content {
            LabelContent::Text(t) => t,
            LabelContent::Pixmap(_) => "",
        }
    }

    pub fn set_alignment(&mut self, h: TextAlignment, v: VerticalAlignment) {
        self.h_align = h;
        self.v_align = v;
    }

    /// Content size the label asks for.
    pub fn measure(&self) -> Vec2 {
        match &self.content {
            LabelContent::Text(t) if t.is_empty() => Vec2::ZERO,
            LabelContent::Text(t) => Vec2::new(
                t.chars().count() as f32 * self.font_size * self.glyph_advance,
                self.font_size,
            ),
            LabelContent::Pixmap(pm) => pm.size,
        }
    }

    /// Where the content box lands inside the label rect.
    pub fn content_rect(&self) -> Rect {
        let size = self.measure();
        let free_w = self.rect.width - size.x;
        let free_h = self.rect.height - size.y;
        let dx = match self.h_align {
            TextAlignment::Left => 0.0,
            TextAlignment::Center => free_w / 2.0,
            TextAlignment::Right => free_w,
        };
        let dy = match self.v_align {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::Center => free_h / 2.0,
            VerticalAlignment::Bottom => free_h,
        };
        Rect::new(self.rect.x + dx, self.rect.y + dy, size.x, size.y)
    }
}

impl Widget for Label {
    fn collect(&self, cmds: &mut Vec<RenderCommand>) {
        match &self.content {
            LabelContent::Text(t) if t.is_empty() => {}
            LabelContent::Text(t) => cmds.push(RenderCommand::Text {
                rect: self.content_rect(),
                text: t.clone(),
                color: self.color,
                font_size: self.font_size,
            }),
            LabelContent::Pixmap(pm) if pm.is_null() => {}
            LabelContent::Pixmap(pm) => cmds.push(RenderCommand::Quad {
                rect: self.content_rect(),
                color: pm.color,
                radii: [0.0; 4],
            }),
        }
    }

    fn bounding_rect(&self) -> Option<Rect> {
        Some(self.rect)
    }
}
