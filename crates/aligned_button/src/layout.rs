use glam::Vec2;

use crate::arrangement::{Slot, SlotOrder};
use crate::renderer::{GuiBatch, GuiQuad, TextBatch, TextRun};

/// Espacio rectilíneo con origen en (x,y) y dimensiones (w,h).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Shrinks the rect by the given offsets, never below zero size.
    pub fn inset(&self, offset: &RectOffset) -> Rect {
        Rect {
            x: self.x + offset.left,
            y: self.y + offset.top,
            width: (self.width - offset.horizontal()).max(0.0),
            height: (self.height - offset.vertical()).max(0.0),
        }
    }
}

/// Margen o padding con valores por cada lado.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RectOffset {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl RectOffset {
    pub fn all(v: f32) -> Self {
        RectOffset {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Returns a copy where every side present in `patch` is replaced and
    /// the absent ones keep their current value.
    pub fn with_override(&self, patch: &MarginOverride) -> RectOffset {
        RectOffset {
            left: patch.left.unwrap_or(self.left),
            top: patch.top.unwrap_or(self.top),
            right: patch.right.unwrap_or(self.right),
            bottom: patch.bottom.unwrap_or(self.bottom),
        }
    }
}

/// Partial margin update: `None` leaves that side untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarginOverride {
    pub left: Option<f32>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
}

impl MarginOverride {
    pub fn left(v: Option<f32>) -> Self {
        Self {
            left: v,
            ..Self::default()
        }
    }

    pub fn right(v: Option<f32>) -> Self {
        Self {
            right: v,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none() && self.right.is_none() && self.bottom.is_none()
    }
}

/// Unidad de medida para ancho/alto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Units {
    /// Fixed size in pixels.
    Px(f32),
    /// Share of the space left once fixed and content-sized children are placed.
    Flex(f32),
    /// Size of the node's own content.
    Auto,
}

impl Default for Units {
    fn default() -> Self {
        Units::Auto
    }
}

/// Cómo alinear elementos hijos dentro de un contenedor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Alignment {
    Start,
    Center,
    End,
    Stretch,
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Start
    }
}

/// Reglas de estilo de un nodo.
#[derive(Debug, Clone, Default)]
pub struct Style {
    pub margin: RectOffset,
    pub padding: RectOffset,
    pub size: (Units, Units), // (width, height)
    /// cross-axis (vertical) placement of the children of a row
    pub alignment: Alignment,
}

/// Nodo en el árbol de layout.
///
/// Every node lays its children out as a horizontal row. Leaves report their
/// content size through `intrinsic`; the slot tag lets the owner of a row
/// find and reorder specific children.
#[derive(Debug, Clone, Default)]
pub struct Node {
    pub style: Style,
    pub children: Vec<Node>,
    pub rect: Rect,
    /// tamaño del contenido propio (texto, pixmap)
    pub intrinsic: Vec2,
    pub slot: Option<Slot>,
    /// contenido calculado durante la pasada inferior
    desired_size: Vec2,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// A stretchable empty element that soaks up free space.
    pub fn spacer() -> Self {
        Node::new()
            .with_size(Units::Flex(1.0), Units::Auto)
            .with_slot(Slot::Spacer)
    }

    pub fn with_margin(mut self, v: f32) -> Self {
        self.style.margin = RectOffset::all(v);
        self
    }

    pub fn with_padding(mut self, v: f32) -> Self {
        self.style.padding = RectOffset::all(v);
        self
    }

    pub fn with_size(mut self, width: Units, height: Units) -> Self {
        self.style.size = (width, height);
        self
    }

    pub fn with_alignment(mut self, a: Alignment) -> Self {
        self.style.alignment = a;
        self
    }

    pub fn with_intrinsic(mut self, size: Vec2) -> Self {
        self.intrinsic = size;
        self
    }

    pub fn with_slot(mut self, slot: Slot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn add_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Current left-to-right order of the tagged children.
    pub fn slot_order(&self) -> SlotOrder {
        self.children.iter().filter_map(|c| c.slot).collect()
    }

    /// First child carrying the given tag.
    pub fn child(&self, slot: Slot) -> Option<&Node> {
        self.children.iter().find(|c| c.slot == Some(slot))
    }

    pub fn child_mut(&mut self, slot: Slot) -> Option<&mut Node> {
        self.children.iter_mut().find(|c| c.slot == Some(slot))
    }

    /// Permutes the tagged children so that they follow `order`.
    ///
    /// Children sharing a tag (the two spacers) keep their relative order.
    /// Slots named in `order` without a matching child are skipped, and
    /// untagged children are appended at the end.
    pub fn reorder_children(&mut self, order: &[Slot]) {
        let mut pool: Vec<Option<Node>> = std::mem::take(&mut self.children)
            .into_iter()
            .map(Some)
            .collect();
        let mut sorted = Vec::with_capacity(pool.len());
        for slot in order {
            let found = pool
                .iter_mut()
                .find(|n| matches!(n, Some(node) if node.slot == Some(*slot)));
            if let Some(node) = found.and_then(Option::take) {
                sorted.push(node);
            }
        }
        sorted.extend(pool.into_iter().flatten());
        self.children = sorted;
    }

    /// Size the node wants, margins excluded. Valid after `compute_layout`
    /// or `measure`.
    pub fn desired_size(&self) -> Vec2 {
        self.desired_size
    }

    /// Bottom-up pass only: computes and returns the desired size.
    pub fn measure(&mut self) -> Vec2 {
        self.compute_desired_size()
    }

    /// Realiza ambas pasadas de layout dentro del rect dado.
    pub fn compute_layout(&mut self, rect: Rect) {
        // primera pasada, bottom-up: tamaños deseados
        self.compute_desired_size();
        // segunda pasada, top-down: asignar rects
        self.layout(rect);
    }

    fn compute_desired_size(&mut self) -> Vec2 {
        let mut content = self.intrinsic;
        if !self.children.is_empty() {
            let mut totalw: f32 = 0.0;
            let mut maxh: f32 = 0.0;
            for child in &mut self.children {
                let d = child.compute_desired_size();
                let cw = match child.style.size.0 {
                    Units::Flex(_) => 0.0,
                    _ => d.x,
                } + child.style.margin.horizontal();
                let ch = d.y + child.style.margin.vertical();
                totalw += cw;
                maxh = maxh.max(ch);
            }
            content = Vec2::new(content.x.max(totalw), content.y.max(maxh));
        }

        // si el size está fijado en px reemplazamos
        if let Units::Px(v) = self.style.size.0 {
            content.x = v;
        }
        if let Units::Px(v) = self.style.size.1 {
            content.y = v;
        }

        self.desired_size = Vec2::new(
            content.x + self.style.padding.horizontal(),
            content.y + self.style.padding.vertical(),
        );
        self.desired_size
    }

    fn layout(&mut self, rect: Rect) {
        self.rect = rect;
        let inner = rect.inset(&self.style.padding);

        // espacio ocupado por hijos no flexibles
        let mut total_fixed = 0.0;
        let mut total_flex = 0.0;
        for child in &self.children {
            total_fixed += child.style.margin.horizontal();
            match child.style.size.0 {
                Units::Flex(f) => total_flex += f,
                _ => total_fixed += child.desired_size.x,
            }
        }
        let free = (inner.width - total_fixed).max(0.0);

        let align = self.style.alignment;
        let mut cx = inner.x;
        for child in &mut self.children {
            let cw = match child.style.size.0 {
                Units::Flex(f) if total_flex > 0.0 => free * (f / total_flex),
                Units::Flex(_) => 0.0,
                _ => child.desired_size.x,
            };
            let avail_h = (inner.height - child.style.margin.vertical()).max(0.0);
            let ch = match (child.style.size.1, align) {
                (Units::Flex(_), _) | (_, Alignment::Stretch) => avail_h,
                _ => child.desired_size.y.min(avail_h),
            };
            let cy = inner.y
                + child.style.margin.top
                + match align {
                    Alignment::Start | Alignment::Stretch => 0.0,
                    Alignment::Center => (avail_h - ch) / 2.0,
                    Alignment::End => avail_h - ch,
                };
            cx += child.style.margin.left;
            child.layout(Rect::new(cx, cy, cw, ch));
            cx += cw + child.style.margin.right;
        }
    }
}

/// Representación simplificada de lo que el renderer consume; se puede
/// traducir a GuiBatch / TextBatch con facilidad.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Quad {
        rect: Rect,
        color: [f32; 4],
        /// per-corner radii in pixels: [top-left, top-right, bottom-left, bottom-right]
        radii: [f32; 4],
    },
    Text {
        rect: Rect,
        text: String,
        color: [f32; 4],
        font_size: f32,
    },
}

impl RenderCommand {
    /// Convierte el comando a los lotes que entiende el renderer.
    pub fn to_batches(&self, quad_batch: &mut GuiBatch, text_batch: &mut TextBatch) {
        match self {
            RenderCommand::Quad { rect, color, radii } => {
                quad_batch.push(GuiQuad {
                    pos: [rect.x, rect.y],
                    size: [rect.width, rect.height],
                    color: *color,
                    radii: *radii,
                });
            }
            RenderCommand::Text {
                rect,
                text,
                color,
                font_size,
            } => {
                text_batch.push(TextRun {
                    pos: [rect.x, rect.y],
                    text: text.clone(),
                    size: *font_size,
                    color: *color,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Node {
        Node::new()
            .add_child(Node::spacer())
            .add_child(
                Node::new()
                    .with_size(Units::Px(16.0), Units::Px(16.0))
                    .with_slot(Slot::Icon),
            )
            .add_child(
                Node::new()
                    .with_intrinsic(Vec2::new(40.0, 10.0))
                    .with_slot(Slot::Text),
            )
            .add_child(Node::spacer())
    }

    #[test]
    fn spacers_share_free_space() {
        let mut root = row().with_alignment(Alignment::Center);
        root.compute_layout(Rect::new(0.0, 0.0, 156.0, 20.0));
        // 156 - 16 - 40 = 100 free, split in two
        assert_eq!(root.children[0].rect.width, 50.0);
        assert_eq!(root.children[1].rect.x, 50.0);
        assert_eq!(root.children[2].rect.x, 66.0);
        assert_eq!(root.children[3].rect.x, 106.0);
        // icon centred vertically
        assert_eq!(root.children[1].rect.y, 2.0);
    }

    #[test]
    fn padding_offsets_children_and_desired_size() {
        let mut root = row();
        root.style.padding = RectOffset {
            left: 15.0,
            ..RectOffset::default()
        };
        root.compute_layout(Rect::new(0.0, 0.0, 200.0, 20.0));
        assert_eq!(root.desired_size(), Vec2::new(15.0 + 16.0 + 40.0, 16.0));
        assert_eq!(root.children[0].rect.x, 15.0);
    }

    #[test]
    fn uniform_margin_and_padding() {
        let mut root = Node::new()
            .with_alignment(Alignment::Start)
            .with_padding(2.0)
            .add_child(
                Node::new()
                    .with_intrinsic(Vec2::new(10.0, 4.0))
                    .with_margin(3.0),
            );
        root.compute_layout(Rect::new(0.0, 0.0, 100.0, 30.0));
        // 10x4 content, 3 of margin and 2 of padding on every side
        assert_eq!(root.desired_size(), Vec2::new(20.0, 14.0));
        assert_eq!(root.children[0].rect, Rect::new(5.0, 5.0, 10.0, 4.0));
    }

    #[test]
    fn reorder_keeps_spacers_and_unknown_children() {
        let mut root = row().add_child(Node::new());
        root.reorder_children(&[Slot::Icon, Slot::Text, Slot::Spacer, Slot::Spacer]);
        assert_eq!(root.slot_order().to_string(), "[i][t][<>][<>]");
        assert_eq!(root.children.len(), 5);
        assert!(root.children[4].slot.is_none());
    }

    #[test]
    fn override_replaces_only_present_sides() {
        let current = RectOffset {
            left: 1.0,
            right: 2.0,
            top: 3.0,
            bottom: 4.0,
        };
        let patched = current.with_override(&MarginOverride::right(Some(15.0)));
        assert_eq!(patched.right, 15.0);
        assert_eq!(patched.left, 1.0);
        assert_eq!(patched.top, 3.0);
        assert_eq!(patched.bottom, 4.0);
        let patched = current.with_override(&MarginOverride::left(Some(7.0)));
        assert_eq!((patched.left, patched.right), (7.0, 2.0));
        assert_eq!(current.with_override(&MarginOverride::left(None)), current);
        assert_eq!(current.with_override(&MarginOverride::default()), current);
    }

    #[test]
    fn render_command_conversion() {
        let cmd = RenderCommand::Quad {
            rect: Rect::new(1.0, 2.0, 3.0, 4.0),
            color: [0.1, 0.2, 0.3, 0.4],
            radii: [0.0; 4],
        };
        let mut qb = GuiBatch::new();
        let mut tb = TextBatch::new();
        cmd.to_batches(&mut qb, &mut tb);
        assert_eq!(qb.len(), 1);
        assert!(tb.is_empty());
    }
}
