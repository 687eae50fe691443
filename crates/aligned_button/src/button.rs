use glam::Vec2;

use crate::alignment::{
    AlignError, IconPlacement, IconSide, TextAlignment, VerticalAlignment,
};
use crate::arrangement::{place_icon, place_text, Slot, SlotOrder};
use crate::diagnostics::{DiagnosticSink, Stage};
use crate::icon::Icon;
use crate::label::Label;
use crate::layout::{Alignment, MarginOverride, Node, Rect, RectOffset, RenderCommand, Units};
use crate::style::ButtonStyle;
use crate::widget::Widget;

/// A push button on which the text and the icon are aligned independently.
///
/// The `pin_icon_*` methods attach the icon to a border of the button while
/// the `align_icon_*` methods place it next to the text.
///
/// ```text
/// pin_icon_left, align_text_left
/// | [icon] text          |
///
/// pin_icon_left, align_text_right
/// | [icon]          text |
///
/// pin_icon_right, align_text_right
/// |          text [icon] |
///
/// align_icon_right
/// |     text [icon]      |
/// ```
///
/// Content lives in a horizontal row of four tagged nodes (two spacers, the
/// icon and the text). Every alignment change recomputes the order of that
/// row from scratch; see [`arrange`](crate::arrangement::arrange).
pub struct AlignedButton {
    pub rect: Rect,
    pub hovered: bool,
    pub pressed: bool,
    clicked: bool,
    style: ButtonStyle,
    row: Node,
    icon: Icon,
    icon_size: Vec2,
    icon_label: Label,
    text_label: Label,
    text_alignment: TextAlignment,
    text_v_alignment: VerticalAlignment,
    icon_side: IconSide,
    icon_pinned: bool,
    name: String,
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl AlignedButton {
    /// Button with text centred and the icon right before it.
    pub fn new(icon: Icon, text: impl Into<String>) -> Self {
        let style = ButtonStyle::default();
        let row = Node::new()
            .with_alignment(Alignment::Center)
            .add_child(Node::spacer())
            .add_child(Node::new().with_slot(Slot::Icon))
            .add_child(
                Node::new()
                    .with_size(Units::Auto, Units::Flex(1.0))
                    .with_slot(Slot::Text),
            )
            .add_child(Node::spacer());

        let mut button = Self {
            rect: Rect::default(),
            hovered: false,
            pressed: false,
            clicked: false,
            icon_size: style.icon_size,
            style,
            row,
            icon: Icon::none(),
            icon_label: Label::pixmap(Default::default()),
            text_label: Label::text(text),
            text_alignment: TextAlignment::Center,
            text_v_alignment: VerticalAlignment::Center,
            icon_side: IconSide::Left,
            icon_pinned: false,
            name: "AlignedButton".to_string(),
            sink: None,
        };
        button.apply_style();
        button.set_icon(icon);
        button.update_layout();
        button
    }

    /// Attach a sink receiving this button's layout reports. The arrangement
    /// made while constructing the button is reported right away.
    pub fn with_sink(mut self, sink: impl DiagnosticSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self.update_layout();
        self
    }

    /// Name used to identify this button in diagnostics.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.icon_size = style.icon_size;
        self.style = style;
        self.apply_style();
        self.set_icon(self.icon.clone());
        self
    }

    /// Place the button and lay out its content.
    pub fn with_rect(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.set_rect(x, y, w, h);
        self
    }

    pub fn set_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.rect = Rect::new(x, y, w, h);
        self.relayout();
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    // ── content ────────────────────────────────────────────────────────────

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = icon;
        self.icon_label.set_pixmap(self.icon.pixmap(self.icon_size));
        self.relayout();
    }

    pub fn icon_size(&self) -> Vec2 {
        self.icon_size
    }

    /// Change the icon size; the icon is rendered again at the new size.
    pub fn set_icon_size(&mut self, size: Vec2) {
        self.icon_size = size;
        self.set_icon(self.icon.clone());
    }

    pub fn text(&self) -> &str {
        self.text_label.as_text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text_label.set_text(text);
        self.relayout();
    }

    // ── alignment ──────────────────────────────────────────────────────────

    pub fn text_alignment(&self) -> TextAlignment {
        self.text_alignment
    }

    pub fn text_vertical_alignment(&self) -> VerticalAlignment {
        self.text_v_alignment
    }

    pub fn icon_placement(&self) -> IconPlacement {
        IconPlacement::new(self.icon_side, self.icon_pinned)
    }

    pub fn is_icon_pinned(&self) -> bool {
        self.icon_pinned
    }

    /// Current left-to-right order of the content row.
    pub fn layout_order(&self) -> SlotOrder {
        self.row.slot_order()
    }

    /// Place the icon right before the text.
    pub fn align_icon_left(&mut self) {
        self.icon_side = IconSide::Left;
        self.update_layout();
    }

    /// Place the icon right after the text.
    pub fn align_icon_right(&mut self) {
        self.icon_side = IconSide::Right;
        self.update_layout();
    }

    pub fn align_text_left(&mut self, margin: Option<f32>) {
        self.set_text_alignment_to(TextAlignment::Left, VerticalAlignment::Center);
        self.set_content_margins(margin, None, None, None);
    }

    pub fn align_text_right(&mut self, margin: Option<f32>) {
        self.set_text_alignment_to(TextAlignment::Right, VerticalAlignment::Center);
        self.set_content_margins(None, None, margin, None);
    }

    pub fn align_text_center(&mut self) {
        self.set_text_alignment_to(TextAlignment::Center, VerticalAlignment::Center);
    }

    /// Attach the icon to the left border of the button.
    pub fn pin_icon_left(&mut self, margin: Option<f32>) {
        self.icon_pinned = true;
        self.icon_side = IconSide::Left;
        self.update_layout();
        self.set_content_margins(margin, None, None, None);
    }

    /// Attach the icon to the right border of the button.
    pub fn pin_icon_right(&mut self, margin: Option<f32>) {
        self.icon_pinned = true;
        self.icon_side = IconSide::Right;
        self.update_layout();
        self.set_content_margins(None, None, margin, None);
    }

    /// Go back to placing the icon next to the text, on the side it was
    /// last given. Margins set while pinned are kept.
    pub fn unpin_icon(&mut self) {
        self.icon_pinned = false;
        self.update_layout();
    }

    /// Set the text alignment from generic layout values. A missing vertical
    /// value means centred. Nothing changes when either value is rejected.
    pub fn set_text_alignment(
        &mut self,
        horizontal: Alignment,
        vertical: Option<Alignment>,
    ) -> Result<(), AlignError> {
        let h = TextAlignment::try_from(horizontal)?;
        let v = match vertical {
            Some(v) => VerticalAlignment::try_from(v)?,
            None => VerticalAlignment::Center,
        };
        self.set_text_alignment_to(h, v);
        Ok(())
    }

    /// Infallible form of [`set_text_alignment`](Self::set_text_alignment).
    pub fn set_text_alignment_to(&mut self, h: TextAlignment, v: VerticalAlignment) {
        self.text_alignment = h;
        self.text_v_alignment = v;
        self.update_layout();
    }

    // ── geometry ───────────────────────────────────────────────────────────

    pub fn content_margins(&self) -> RectOffset {
        self.row.style.padding
    }

    /// Override the given content margins, keeping the current value of
    /// every side passed as `None`.
    pub fn set_content_margins(
        &mut self,
        left: Option<f32>,
        top: Option<f32>,
        right: Option<f32>,
        bottom: Option<f32>,
    ) {
        self.apply_margins(&MarginOverride {
            left,
            top,
            right,
            bottom,
        });
    }

    pub fn apply_margins(&mut self, patch: &MarginOverride) {
        if patch.is_empty() {
            return;
        }
        self.row.style.padding = self.row.style.padding.with_override(patch);
        self.relayout();
    }

    /// Size the bare button frame plus its content row ask for.
    pub fn size_hint(&self) -> Vec2 {
        let base = Vec2::new(self.style.frame.horizontal(), self.style.frame.vertical());
        let mut row = self.row.clone();
        let target = row.measure();
        Vec2::new(base.x + target.x, base.y.max(target.y))
    }

    pub fn icon_rect(&self) -> Rect {
        self.icon_label.rect
    }

    pub fn text_rect(&self) -> Rect {
        self.text_label.rect
    }

    /// Returns `true` once per completed click (press and release inside).
    pub fn take_clicked(&mut self) -> bool {
        std::mem::take(&mut self.clicked)
    }

    // ── internals ──────────────────────────────────────────────────────────

    /// Recompute the order of the content row from the current flags.
    fn update_layout(&mut self) {
        let current = self.row.slot_order();

        let after_text = place_text(current.as_slice(), self.text_alignment);
        self.report(Stage::Text, &after_text);
        self.text_label
            .set_alignment(self.text_alignment, self.text_v_alignment);

        let order = place_icon(after_text, self.icon_placement());
        self.row.reorder_children(order.as_slice());
        self.report(Stage::Icon, &self.row.slot_order());

        self.relayout();
    }

    fn report(&self, stage: Stage, order: &SlotOrder) {
        if let Some(sink) = &self.sink {
            sink.layout_changed(&self.name, stage, order);
        }
    }

    fn apply_style(&mut self) {
        for label in [&mut self.icon_label, &mut self.text_label] {
            label.color = self.style.text_color;
            label.font_size = self.style.font_size;
            label.glyph_advance = self.style.glyph_advance;
        }
        self.relayout();
    }

    /// Push label sizes into the row and, once the button has a size, place
    /// the labels.
    fn relayout(&mut self) {
        let icon_size = self.icon_label.measure();
        if let Some(node) = self.row.child_mut(Slot::Icon) {
            node.style.size = (Units::Px(icon_size.x), Units::Px(icon_size.y));
        }
        let text_size = self.text_label.measure();
        if let Some(node) = self.row.child_mut(Slot::Text) {
            node.intrinsic = text_size;
        }

        if self.rect.width <= 0.0 || self.rect.height <= 0.0 {
            return;
        }
        self.row.compute_layout(self.rect);
        if let Some(node) = self.row.child(Slot::Icon) {
            self.icon_label.rect = node.rect;
        }
        if let Some(node) = self.row.child(Slot::Text) {
            self.text_label.rect = node.rect;
        }
    }
}

impl Widget for AlignedButton {
    fn collect(&self, cmds: &mut Vec<RenderCommand>) {
        let color = if self.pressed {
            self.style.pressed_color
        } else if self.hovered {
            self.style.hovered_color
        } else {
            self.style.color
        };
        cmds.push(RenderCommand::Quad {
            rect: self.rect,
            color,
            radii: self.style.radii,
        });
        self.icon_label.collect(cmds);
        self.text_label.collect(cmds);
    }

    fn hit(&self, mx: f64, my: f64) -> bool {
        self.rect.contains(mx as f32, my as f32)
    }

    fn mouse_move(&mut self, mx: f64, my: f64) {
        self.hovered = self.hit(mx, my);
    }

    fn mouse_input(&mut self, mx: f64, my: f64, pressed: bool) {
        if pressed {
            // press only when the cursor is over us
            self.pressed = self.hit(mx, my);
        } else {
            // release on any mouse-up; it only counts when still inside
            if self.pressed && self.hit(mx, my) {
                self.clicked = true;
            }
            self.pressed = false;
        }
    }

    fn bounding_rect(&self) -> Option<Rect> {
        Some(self.rect)
    }
}
