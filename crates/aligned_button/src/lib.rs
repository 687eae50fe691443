//! Push button whose text and icon are aligned independently.
//!
//! The crate carries the small retained-mode toolkit the button is built
//! from (layout nodes, labels, a widget trait and draw batches) together
//! with [`AlignedButton`] itself.
//!
//! ```rust
//! use aligned_button::{AlignedButton, Icon};
//!
//! let mut button = AlignedButton::new(Icon::arrow_right(), "This is a test button")
//!     .with_rect(0.0, 0.0, 300.0, 24.0);
//! button.pin_icon_left(Some(15.0));
//! button.align_text_right(Some(15.0));
//!
//! assert_eq!(button.layout_order().to_string(), "[i][<>][<>][t]");
//! assert_eq!(button.icon_rect().x, 15.0);
//! ```

pub mod alignment;
pub mod arrangement;
pub mod button;
pub mod canvas;
pub mod diagnostics;
pub mod icon;
pub mod label;
pub mod layout;
pub mod renderer;
pub mod style;
pub mod widget;

pub use alignment::{AlignError, IconPlacement, IconSide, TextAlignment, VerticalAlignment};
pub use arrangement::{arrange, Slot, SlotOrder};
pub use button::AlignedButton;
pub use canvas::Canvas;
pub use diagnostics::{DiagnosticSink, LogSink, Stage};
pub use icon::{Icon, Pixmap};
pub use label::{Label, LabelContent};
pub use layout::{Alignment, MarginOverride, Node, Rect, RectOffset, RenderCommand, Units};
pub use renderer::{GuiBatch, GuiQuad, TextBatch, TextRun};
pub use style::ButtonStyle;
pub use widget::Widget;
