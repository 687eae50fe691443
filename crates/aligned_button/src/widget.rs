use std::cell::RefCell;
use std::rc::Rc;

use crate::layout::{Rect, RenderCommand};

/// Cualquier elemento de la interfaz que pueda "dibujarse".
///
/// En lugar de acoplarse al renderer, la abstracción devuelve una lista de
/// `RenderCommand` genéricos. Input hooks default to no-ops so passive
/// widgets (labels) only implement `collect`.
pub trait Widget {
    fn collect(&self, cmds: &mut Vec<RenderCommand>);

    /// Whether the pointer at `(mx, my)` lands on this widget.
    fn hit(&self, _mx: f64, _my: f64) -> bool {
        false
    }

    fn mouse_move(&mut self, _mx: f64, _my: f64) {}

    fn mouse_input(&mut self, _mx: f64, _my: f64, _pressed: bool) {}

    /// Screen-space bounds, when the widget has any.
    fn bounding_rect(&self) -> Option<Rect> {
        None
    }
}

// shared handles let the application keep a reference to a widget that also
// lives inside a canvas
impl<W: Widget> Widget for Rc<RefCell<W>> {
    fn collect(&self, cmds: &mut Vec<RenderCommand>) {
        self.borrow().collect(cmds);
    }

    fn hit(&self, mx: f64, my: f64) -> bool {
        self.borrow().hit(mx, my)
    }

    fn mouse_move(&mut self, mx: f64, my: f64) {
        self.borrow_mut().mouse_move(mx, my);
    }

    fn mouse_input(&mut self, mx: f64, my: f64, pressed: bool) {
        self.borrow_mut().mouse_input(mx, my, pressed);
    }

    fn bounding_rect(&self) -> Option<Rect> {
        self.borrow().bounding_rect()
    }
}
