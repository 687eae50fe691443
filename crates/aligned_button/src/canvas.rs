use crate::layout::RenderCommand;
use crate::renderer::{GuiBatch, TextBatch};
use crate::widget::Widget;

/// Generic container that holds a heterogeneous collection of widgets and
/// draws them in order. Pointer events are forwarded to every child so that
/// buttons can track hover and release outside their bounds.
#[derive(Default)]
pub struct Canvas {
    children: Vec<Box<dyn Widget>>,
    /// last pointer position seen by `handle_window_event`
    cursor: (f64, f64),
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, widget: impl Widget + 'static) {
        self.children.push(Box::new(widget));
    }

    pub fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    pub fn collect(&self, cmds: &mut Vec<RenderCommand>) {
        for child in &self.children {
            child.collect(cmds);
        }
    }

    /// Collect draw commands and convert them into the given batches.
    pub fn draw(&self, quad_batch: &mut GuiBatch, text_batch: &mut TextBatch) {
        let mut cmds = Vec::new();
        self.collect(&mut cmds);
        for cmd in &cmds {
            cmd.to_batches(quad_batch, text_batch);
        }
    }

    /// Index of the topmost child under the pointer.
    pub fn hit_test(&self, mx: f64, my: f64) -> Option<usize> {
        self.children.iter().rposition(|c| c.hit(mx, my))
    }

    pub fn mouse_move(&mut self, mx: f64, my: f64) {
        self.cursor = (mx, my);
        for child in &mut self.children {
            child.mouse_move(mx, my);
        }
    }

    pub fn mouse_input(&mut self, mx: f64, my: f64, pressed: bool) {
        for child in &mut self.children {
            child.mouse_input(mx, my, pressed);
        }
    }

    /// Route a winit window event to the children. Only cursor movement and
    /// the left mouse button are of interest to the widgets here.
    #[cfg(feature = "winit-backend")]
    pub fn handle_window_event(&mut self, event: &winit::event::WindowEvent) {
        use winit::event::{ElementState, MouseButton, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_move(position.x, position.y);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let (mx, my) = self.cursor;
                self.mouse_input(mx, my, *state == ElementState::Pressed);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Dummy {
        rect: Rect,
        moves: Cell<u32>,
    }

    impl Widget for Dummy {
        fn collect(&self, cmds: &mut Vec<RenderCommand>) {
            cmds.push(RenderCommand::Quad {
                rect: self.rect,
                color: [1.0, 1.0, 1.0, 1.0],
                radii: [0.0; 4],
            });
        }

        fn hit(&self, mx: f64, my: f64) -> bool {
            self.rect.contains(mx as f32, my as f32)
        }

        fn mouse_move(&mut self, _mx: f64, _my: f64) {
            self.moves.set(self.moves.get() + 1);
        }
    }

    fn dummy(x: f32) -> Dummy {
        Dummy {
            rect: Rect::new(x, 0.0, 10.0, 10.0),
            moves: Cell::new(0),
        }
    }

    #[test]
    fn canvas_draws_in_order() {
        let mut canvas = Canvas::new();
        canvas.add(dummy(0.0));
        canvas.add(dummy(20.0));
        assert_eq!(canvas.children().len(), 2);
        let mut qb = GuiBatch::new();
        let mut tb = TextBatch::new();
        canvas.draw(&mut qb, &mut tb);
        assert_eq!(qb.len(), 2);
        assert_eq!(qb.quads()[1].pos, [20.0, 0.0]);
    }

    #[test]
    fn shared_widgets_receive_events() {
        let shared = Rc::new(RefCell::new(dummy(0.0)));
        let mut canvas = Canvas::new();
        canvas.add(shared.clone());
        canvas.add(dummy(5.0));
        canvas.mouse_move(1.0, 1.0);
        assert_eq!(shared.borrow().moves.get(), 1);
        // overlapping children: the last one added wins
        assert_eq!(canvas.hit_test(7.0, 5.0), Some(1));
        assert_eq!(canvas.hit_test(2.0, 5.0), Some(0));
        assert_eq!(canvas.hit_test(50.0, 5.0), None);
    }

    #[cfg(feature = "winit-backend")]
    #[test]
    fn window_events_click_a_shared_button() {
        use crate::{AlignedButton, Icon};
        use winit::dpi::PhysicalPosition;
        use winit::event::{DeviceId, ElementState, MouseButton, WindowEvent};

        let device_id = unsafe { DeviceId::dummy() };
        let moved = |x: f64, y: f64| WindowEvent::CursorMoved {
            device_id,
            position: PhysicalPosition::new(x, y),
        };
        let input = |state, button| WindowEvent::MouseInput {
            device_id,
            state,
            button,
        };

        let shared = Rc::new(RefCell::new(
            AlignedButton::new(Icon::arrow_right(), "OK").with_rect(0.0, 0.0, 100.0, 24.0),
        ));
        let mut canvas = Canvas::new();
        canvas.add(shared.clone());

        canvas.handle_window_event(&moved(10.0, 10.0));
        assert!(shared.borrow().hovered);
        canvas.handle_window_event(&input(ElementState::Pressed, MouseButton::Left));
        assert!(shared.borrow().pressed);
        canvas.handle_window_event(&input(ElementState::Released, MouseButton::Left));
        assert!(shared.borrow_mut().take_clicked());

        // other buttons are ignored
        canvas.handle_window_event(&input(ElementState::Pressed, MouseButton::Right));
        assert!(!shared.borrow().pressed);

        // released outside: no click
        canvas.handle_window_event(&input(ElementState::Pressed, MouseButton::Left));
        canvas.handle_window_event(&moved(500.0, 10.0));
        assert!(!shared.borrow().hovered);
        canvas.handle_window_event(&input(ElementState::Released, MouseButton::Left));
        assert!(!shared.borrow().pressed);
        assert!(!shared.borrow_mut().take_clicked());
    }
}
