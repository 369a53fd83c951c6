//! Widget arena: owns every widget and runs tree-wide operations
//! over frames, which observe their children through [`WidgetId`]s.

use slotmap::{new_key_type, SlotMap};

use crate::{
    event::Event,
    render::RenderSink,
    style::StyleMap,
    widget::{
        frame::{self, Child, Spacer},
        Frame, Widget,
    },
    Error,
};

new_key_type! {
    /// Stable handle to a widget in a [`Gui`].
    pub struct WidgetId;
}

/// Owns the widgets; frames hold child ids only, so a widget has a
/// single owner no matter how many frames observe it. Callers keep a
/// child in at most one frame.
#[derive(Debug, Default)]
pub struct Gui {
    widgets: SlotMap<WidgetId, Widget>,
}

impl Gui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, widget: impl Into<Widget>) -> WidgetId {
        self.widgets.insert(widget.into())
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.get_mut(id)
    }

    /// Removes a widget. Any frame still listing the id skips it from
    /// then on.
    pub fn remove(&mut self, id: WidgetId) -> Option<Widget> {
        self.widgets.remove(id)
    }

    pub fn frame(&self, id: WidgetId) -> Result<&Frame, Error> {
        self.widgets
            .get(id)
            .ok_or(Error::DanglingWidget)?
            .as_frame()
            .ok_or(Error::NotAFrame)
    }

    pub fn frame_mut(&mut self, id: WidgetId) -> Result<&mut Frame, Error> {
        self.widgets
            .get_mut(id)
            .ok_or(Error::DanglingWidget)?
            .as_frame_mut()
            .ok_or(Error::NotAFrame)
    }

    /// Appends a live widget to a frame's child sequence.
    pub fn add_child(&mut self, frame: WidgetId, child: WidgetId) -> Result<(), Error> {
        if !self.widgets.contains_key(child) {
            return Err(Error::DanglingWidget);
        }
        self.frame_mut(frame)?.push_child(Child::Widget(child));
        Ok(())
    }

    /// Appends a hard line break to a frame's child sequence.
    pub fn add_line_break(&mut self, frame: WidgetId) -> Result<(), Error> {
        self.frame_mut(frame)?.push_child(Child::LineBreak);
        Ok(())
    }

    /// Appends a flexible spacer to a frame's child sequence.
    pub fn add_spacer(&mut self, frame: WidgetId) -> Result<(), Error> {
        self.frame_mut(frame)?.push_child(Child::Spacer(Spacer::default()));
        Ok(())
    }

    /// Empties a frame's child sequence; the children stay alive in
    /// the arena.
    pub fn clear_children(&mut self, frame: WidgetId) -> Result<(), Error> {
        self.frame_mut(frame)?.clear_children();
        Ok(())
    }

    /// Runs the layout passes over the frame rooted at `root`.
    /// Explicitly invoked rather than automatic, so a batch of
    /// mutations pays for one pass.
    pub fn update_geometry(&mut self, root: WidgetId) -> Result<(), Error> {
        self.frame(root)?;
        frame::with_child_frame(&mut self.widgets, root, |frame, widgets| {
            frame.update_geometry(widgets)
        });
        Ok(())
    }

    /// Dispatches one input event through the subtree rooted at
    /// `root`.
    pub fn process_event(&mut self, root: WidgetId, event: &Event) -> Result<(), Error> {
        self.frame(root)?;
        frame::with_child_frame(&mut self.widgets, root, |frame, widgets| {
            frame.process_event(widgets, event)
        });
        Ok(())
    }

    pub fn draw(&self, root: WidgetId, sink: &mut dyn RenderSink) -> Result<(), Error> {
        self.frame(root)?.draw(&self.widgets, sink);
        Ok(())
    }

    /// Applies a style table to every widget in the arena.
    pub fn apply_style(&mut self, styles: &StyleMap) {
        for (_, widget) in &mut self.widgets {
            widget.apply_style(styles);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::vec2;

    use super::*;
    use crate::style;
    use crate::widget::{frame, Button};
    use crate::Rect;

    fn layout_styles() -> StyleMap {
        let mut styles = StyleMap::new();
        styles.insert(style::GLOBAL_PADDING, 5.);
        styles.insert(frame::BORDER_SIZE, 0.);
        styles
    }

    fn button(gui: &mut Gui, w: f32, h: f32) -> WidgetId {
        let mut button = Button::new();
        button.set_size(w, h).unwrap();
        gui.add(button)
    }

    #[test]
    fn spacer_absorbs_leftover_line_width() {
        let mut gui = Gui::new();
        let root = gui.add(Frame::new());
        let a = button(&mut gui, 50., 20.);
        let b = button(&mut gui, 50., 20.);
        let c = button(&mut gui, 50., 20.);

        gui.add_child(root, a).unwrap();
        gui.add_spacer(root).unwrap();
        gui.add_child(root, b).unwrap();
        gui.add_child(root, c).unwrap();

        gui.apply_style(&layout_styles());
        {
            let frame = gui.frame_mut(root).unwrap();
            frame.set_title_visible(false);
            frame.set_size(300., 100.).unwrap();
        }
        gui.update_geometry(root).unwrap();

        let children = gui.frame(root).unwrap().children().to_vec();
        let spacer = match children[1] {
            Child::Spacer(s) => s,
            other => panic!("expected a spacer, got {:?}", other),
        };
        // leftover is 300 - 3*(50+5) + 5 = 140; the spacer keeps
        // 140 - padding of it
        assert_eq!(spacer.width, 135.);
        // the last widget ends flush with the body's right edge
        assert_eq!(gui.get(c).unwrap().location(), vec2(245., 5.));
        assert_eq!(gui.get(a).unwrap().location(), vec2(5., 5.));
    }

    #[test]
    fn leftover_splits_evenly_across_spacers() {
        let mut gui = Gui::new();
        let root = gui.add(Frame::new());
        let a = button(&mut gui, 50., 20.);
        let b = button(&mut gui, 50., 20.);

        gui.add_child(root, a).unwrap();
        gui.add_spacer(root).unwrap();
        gui.add_child(root, b).unwrap();
        gui.add_spacer(root).unwrap();

        gui.apply_style(&layout_styles());
        {
            let frame = gui.frame_mut(root).unwrap();
            frame.set_title_visible(false);
            frame.set_size(300., 100.).unwrap();
        }
        gui.update_geometry(root).unwrap();

        let widths: Vec<f32> = gui
            .frame(root)
            .unwrap()
            .children()
            .iter()
            .filter_map(|child| match child {
                Child::Spacer(s) => Some(s.width),
                _ => None,
            })
            .collect();
        // the line advances to 100 after the padding-overlap fix, so
        // 200 is left over; each spacer gets half minus its padding
        assert_eq!(widths, vec![95., 95.]);
        assert_eq!(widths.iter().sum::<f32>() + 2. * 5., 200.);
    }

    #[test]
    fn line_breaks_stack_flow_lines() {
        let mut gui = Gui::new();
        let root = gui.add(Frame::new());
        let a = button(&mut gui, 50., 20.);
        let b = button(&mut gui, 50., 30.);

        gui.add_child(root, a).unwrap();
        gui.add_line_break(root).unwrap();
        gui.add_child(root, b).unwrap();

        gui.apply_style(&layout_styles());
        {
            let frame = gui.frame_mut(root).unwrap();
            frame.set_title_visible(false);
            frame.set_size(200., 200.).unwrap();
        }
        gui.update_geometry(root).unwrap();

        assert_eq!(gui.get(a).unwrap().location(), vec2(5., 5.));
        // second line starts below the first line's height plus padding
        assert_eq!(gui.get(b).unwrap().location(), vec2(5., 30.));
    }

    #[test]
    fn overflowing_widget_wraps_to_a_new_line() {
        let mut gui = Gui::new();
        let root = gui.add(Frame::new());
        let a = button(&mut gui, 80., 20.);
        let b = button(&mut gui, 80., 20.);

        gui.add_child(root, a).unwrap();
        gui.add_child(root, b).unwrap();

        gui.apply_style(&layout_styles());
        {
            let frame = gui.frame_mut(root).unwrap();
            frame.set_title_visible(false);
            frame.set_size(100., 200.).unwrap();
        }
        gui.update_geometry(root).unwrap();

        assert_eq!(gui.get(a).unwrap().location(), vec2(5., 5.));
        assert_eq!(gui.get(b).unwrap().location(), vec2(5., 30.));
    }

    #[test]
    fn nested_zero_size_frame_takes_its_own_fit_first() {
        let mut gui = Gui::new();
        let outer = gui.add(Frame::new());
        let inner = gui.add(Frame::new());
        let leaf = button(&mut gui, 50., 20.);

        gui.add_child(inner, leaf).unwrap();
        gui.add_child(outer, inner).unwrap();
        gui.apply_style(&layout_styles());
        gui.update_geometry(outer).unwrap();

        // inner fit: child line 50+5, title band 5, margins 15 each way
        let inner_frame = gui.frame(inner).unwrap();
        assert_eq!(inner_frame.width(), 70.);
        assert_eq!(inner_frame.height(), 45.);
        // outer fit wraps the already-sized inner frame
        let outer_frame = gui.frame(outer).unwrap();
        assert_eq!(outer_frame.width(), 90.);
        assert_eq!(outer_frame.height(), 70.);
    }

    #[test]
    fn child_bookkeeping_is_validated() {
        let mut gui = Gui::new();
        let root = gui.add(Frame::new());
        let leaf = button(&mut gui, 10., 10.);

        gui.remove(leaf);
        assert_eq!(gui.add_child(root, leaf), Err(Error::DanglingWidget));

        let not_frame = button(&mut gui, 10., 10.);
        assert_eq!(
            gui.add_child(not_frame, root),
            Err(Error::NotAFrame)
        );
        assert_eq!(gui.update_geometry(not_frame), Err(Error::NotAFrame));

        gui.add_child(root, not_frame).unwrap();
        gui.clear_children(root).unwrap();
        assert!(gui.frame(root).unwrap().children().is_empty());
    }

    #[test]
    fn removed_children_are_skipped_by_layout() {
        let mut gui = Gui::new();
        let root = gui.add(Frame::new());
        let a = button(&mut gui, 50., 20.);
        let b = button(&mut gui, 50., 20.);
        gui.add_child(root, a).unwrap();
        gui.add_child(root, b).unwrap();
        gui.remove(a);

        gui.apply_style(&layout_styles());
        {
            let frame = gui.frame_mut(root).unwrap();
            frame.set_title_visible(false);
            frame.set_size(300., 100.).unwrap();
        }
        gui.update_geometry(root).unwrap();
        // b takes the first slot since a no longer exists
        assert_eq!(gui.get(b).unwrap().location(), vec2(5., 5.));
    }

    #[test]
    fn dragging_the_title_bar_moves_the_frame() {
        let mut styles = layout_styles();
        styles.insert(frame::TITLE_SIZE, 20.);

        let mut gui = Gui::new();
        let root = gui.add(Frame::new());
        let leaf = button(&mut gui, 50., 20.);
        gui.add_child(root, leaf).unwrap();
        gui.apply_style(&styles);
        {
            let frame = gui.frame_mut(root).unwrap();
            frame.set_size(200., 100.).unwrap();
            frame.set_draggable(true);
        }
        gui.update_geometry(root).unwrap();

        // title bar spans y in [0, 40] at border size zero
        gui.process_event(
            root,
            &Event::PointerButtonPressed {
                button: crate::event::MouseButton::Left,
                x: 100,
                y: 10,
            },
        )
        .unwrap();
        gui.process_event(root, &Event::PointerMoved { x: 130, y: 25 })
            .unwrap();

        let frame_loc = gui.frame(root).unwrap().location();
        assert_eq!(frame_loc, vec2(30., 15.));
        // children follow; the layout reran during the drag
        assert_eq!(gui.get(leaf).unwrap().location().x, 35.);

        gui.process_event(
            root,
            &Event::PointerButtonReleased {
                button: crate::event::MouseButton::Left,
                x: 130,
                y: 25,
            },
        )
        .unwrap();
        gui.process_event(root, &Event::PointerMoved { x: 300, y: 300 })
            .unwrap();
        assert_eq!(gui.frame(root).unwrap().location(), frame_loc);
    }

    #[test]
    fn drag_constraints_clamp_the_position() {
        let mut styles = layout_styles();
        styles.insert(frame::TITLE_SIZE, 20.);

        let mut gui = Gui::new();
        let root = gui.add(Frame::new());
        gui.apply_style(&styles);
        {
            let frame = gui.frame_mut(root).unwrap();
            frame.set_size(200., 100.).unwrap();
            frame.set_draggable(true);
            assert_eq!(
                frame.set_drag_constraints(Rect::new(vec2(0., 0.), vec2(0., 50.))),
                Err(Error::EmptyConstraintArea)
            );
            frame
                .set_drag_constraints(Rect::new(vec2(0., 0.), vec2(50., 50.)))
                .unwrap();
        }
        gui.update_geometry(root).unwrap();

        gui.process_event(
            root,
            &Event::PointerButtonPressed {
                button: crate::event::MouseButton::Left,
                x: 100,
                y: 10,
            },
        )
        .unwrap();
        gui.process_event(root, &Event::PointerMoved { x: 500, y: 500 })
            .unwrap();
        assert_eq!(gui.frame(root).unwrap().location(), vec2(50., 50.));
    }

    #[test]
    fn click_callback_can_suppress_child_dispatch() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut gui = Gui::new();
        let root = gui.add(Frame::new());
        let leaf = button(&mut gui, 50., 20.);
        gui.add_child(root, leaf).unwrap();
        gui.apply_style(&layout_styles());
        {
            let frame = gui.frame_mut(root).unwrap();
            frame.set_title_visible(false);
            frame.set_size(200., 100.).unwrap();
        }
        gui.update_geometry(root).unwrap();

        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        gui.frame_mut(root).unwrap().register_click_event(Box::new(move || {
            counter.set(counter.get() + 1);
            crate::widget::ClickResponse::SkipOtherEvents
        }));

        gui.process_event(
            root,
            &Event::PointerButtonPressed {
                button: crate::event::MouseButton::Left,
                x: 10,
                y: 10,
            },
        )
        .unwrap();
        assert_eq!(clicks.get(), 1);
        // a press outside the frame leaves the callback untouched
        gui.process_event(
            root,
            &Event::PointerButtonPressed {
                button: crate::event::MouseButton::Left,
                x: 500,
                y: 500,
            },
        )
        .unwrap();
        assert_eq!(clicks.get(), 1);
    }
}
