use glam::Vec2;

/// Resolution-independent image identified by name.
///
/// Rendering is left to the backend that consumes the draw commands; at this
/// level an icon only knows its tint and can be rasterised to a [`Pixmap`]
/// of a requested size. The default icon is null and renders to nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Icon {
    name: Option<String>,
    color: [f32; 4],
}

impl Icon {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            color: [1.0, 1.0, 1.0, 1.0],
        }
    }

    /// The null icon.
    pub fn none() -> Self {
        Self::default()
    }

    /// Stock right-pointing arrow.
    pub fn arrow_right() -> Self {
        Icon::new("arrow-right")
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    pub fn is_null(&self) -> bool {
        self.name.is_none()
    }

    /// Renders the icon at `size`. Null icons and degenerate sizes produce
    /// an empty pixmap.
    pub fn pixmap(&self, size: Vec2) -> Pixmap {
        if self.is_null() || size.x <= 0.0 || size.y <= 0.0 {
            return Pixmap::default();
        }
        Pixmap {
            size,
            color: self.color,
        }
    }
}

/// An icon rendered at a concrete size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pixmap {
    pub size: Vec2,
    pub color: [f32; 4],
}

impl Pixmap {
    pub fn is_null(&self) -> bool {
        self.size == Vec2::ZERO
    }
}
