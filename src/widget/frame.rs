//! Container laying out children in left-to-right, top-to-bottom flow
//! lines, with flexible spacers absorbing leftover line width.

use std::fmt;
use std::mem;

use glam::{vec2, Vec2};
use palette::Srgba;
use slotmap::SlotMap;

use crate::{
    event::Event,
    gui::WidgetId,
    render::RenderSink,
    style::{self, StyleMap},
    text::Text,
    widget::Widget,
    Error, Rect,
};

pub const BACKGROUND_COLOR: &str = "frame-background";
pub const BODY_COLOR: &str = "frame-body";
pub const TITLE_BAR_COLOR: &str = "frame-title-bar-color";
pub const TITLE_COLOR: &str = "frame-title-color";
pub const TITLE_SIZE: &str = "frame-title-size";
pub const BORDER_SIZE: &str = "frame-border-size";

const DEFAULT_PADDING: f32 = 2.;

/// One entry of a frame's child sequence. The two flow markers are
/// plain list entries rather than widget kinds, so the layout passes
/// match on them directly instead of probing widget identity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Child {
    Widget(WidgetId),
    /// Hard line break: the next child starts a new flow line.
    LineBreak,
    /// Flexible spacer: zero height, width assigned during the
    /// distribution pass.
    Spacer(Spacer),
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Spacer {
    pub pos: Vec2,
    pub width: f32,
}

/// What a frame's click callback tells the event dispatcher.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickResponse {
    SkipOtherEvents,
    ContinueOtherEvents,
}

pub type ClickCallback = Box<dyn FnMut() -> ClickResponse>;

pub struct Frame {
    children: Vec<Child>,
    back: Rect,
    title_bar: Rect,
    body: Rect,
    back_color: Srgba<u8>,
    title_bar_color: Srgba<u8>,
    body_color: Srgba<u8>,
    title: Text,
    title_visible: bool,
    padding: f32,
    outer_padding: f32,
    draggable: bool,
    /// Pointer offset from the frame origin while a drag is active.
    drag_offset: Option<Vec2>,
    drag_constraints: Option<Rect>,
    on_click: Option<ClickCallback>,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            back: Rect::default(),
            title_bar: Rect::default(),
            body: Rect::default(),
            back_color: style::white(),
            title_bar_color: style::white(),
            body_color: style::white(),
            title: Text::new(),
            title_visible: true,
            padding: DEFAULT_PADDING,
            outer_padding: DEFAULT_PADDING,
            draggable: false,
            drag_offset: None,
            drag_constraints: None,
            on_click: None,
        }
    }
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Vec2 {
        self.back.pos
    }

    pub fn width(&self) -> f32 {
        self.back.size.x
    }

    pub fn height(&self) -> f32 {
        self.back.size.y
    }

    pub fn set_location(&mut self, x: f32, y: f32) {
        self.back.pos = vec2(x, y);
        self.check_invariants();
    }

    pub fn set_size(&mut self, w: f32, h: f32) -> Result<(), Error> {
        if !(w > 0.) || !(h > 0.) || !w.is_finite() || !h.is_finite() {
            return Err(Error::InvalidSize);
        }
        self.back.size = vec2(w, h);
        self.check_invariants();
        Ok(())
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// An empty title also hides the title bar.
    pub fn set_title(&mut self, title: &str) {
        self.title.set_string(title);
        if title.is_empty() {
            self.set_title_visible(false);
        }
        self.check_invariants();
    }

    pub fn title(&self) -> String {
        self.title.string()
    }

    /// Dragging follows title visibility: a frame without a visible
    /// title bar has nothing to grab.
    pub fn set_title_visible(&mut self, visible: bool) {
        self.title_visible = visible;
        self.draggable = visible;
    }

    pub fn title_visible(&self) -> bool {
        self.title_visible
    }

    pub fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
        if !draggable {
            self.drag_offset = None;
        }
    }

    pub fn set_drag_constraints(&mut self, area: Rect) -> Result<(), Error> {
        if area.size.x == 0. || area.size.y == 0. {
            return Err(Error::EmptyConstraintArea);
        }
        self.drag_constraints = Some(area);
        Ok(())
    }

    pub fn remove_drag_constraints(&mut self) {
        self.drag_constraints = None;
    }

    pub fn register_click_event(&mut self, func: ClickCallback) {
        self.on_click = Some(func);
    }

    pub fn reset_click_event(&mut self) {
        self.on_click = None;
    }

    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child: Child) {
        self.children.push(child);
    }

    pub(crate) fn clear_children(&mut self) {
        self.children.clear();
    }

    pub fn apply_style(&mut self, styles: &StyleMap) {
        if let Some(c) = styles.color(BACKGROUND_COLOR) {
            self.back_color = c;
        }
        style::style_text(&mut self.title, styles, TITLE_COLOR, TITLE_SIZE);
        if let Some(c) = styles.color(TITLE_BAR_COLOR) {
            self.title_bar_color = c;
        }
        if let Some(c) = styles.color(BODY_COLOR) {
            self.body_color = c;
        }
        if let Some(padding) = styles.number(style::GLOBAL_PADDING) {
            self.padding = padding;
        }
        match styles.number(BORDER_SIZE) {
            Some(border) => self.outer_padding = border,
            None => {
                if let Some(padding) = styles.number(style::GLOBAL_PADDING) {
                    self.outer_padding = padding;
                }
            }
        }
        self.check_invariants();
    }

    /// Runs the full layout over this frame and its subtree:
    /// auto-resize, chrome geometry, spacer distribution, flow
    /// placement, then recursion into child frames.
    pub(crate) fn update_geometry(&mut self, widgets: &mut SlotMap<WidgetId, Widget>) {
        self.issue_auto_resize(widgets);
        self.update_chrome_geometry();
        self.update_spacer_widths(widgets);
        self.place_children(widgets);

        for i in 0..self.children.len() {
            if let Child::Widget(id) = self.children[i] {
                with_child_frame(widgets, id, |frame, widgets| {
                    frame.update_geometry(widgets)
                });
            }
        }
        self.check_invariants();
    }

    /// Dispatches one event through the frame: click callback, child
    /// widgets, then the frame's own drag handling.
    pub(crate) fn process_event(
        &mut self,
        widgets: &mut SlotMap<WidgetId, Widget>,
        event: &Event,
    ) {
        let mut do_sub_events = true;
        if let Event::PointerButtonPressed { x, y, .. } = *event {
            if self.back.contains_pixel(x, y) {
                if let Some(func) = &mut self.on_click {
                    do_sub_events = func() == ClickResponse::ContinueOtherEvents;
                }
            }
        }
        if do_sub_events {
            for i in 0..self.children.len() {
                if let Child::Widget(id) = self.children[i] {
                    if matches!(widgets.get(id), Some(Widget::Frame(_))) {
                        with_child_frame(widgets, id, |frame, widgets| {
                            frame.process_event(widgets, event)
                        });
                    } else if let Some(widget) = widgets.get_mut(id) {
                        widget.process_event(event);
                    }
                }
            }
        }

        match *event {
            Event::PointerButtonPressed { x, y, .. } => {
                if self.draggable && self.title_bar.contains_pixel(x, y) {
                    self.drag_offset = Some(vec2(x as f32, y as f32) - self.location());
                }
            }
            Event::PointerButtonReleased { .. } => self.drag_offset = None,
            Event::PointerMoved { x, y } => {
                if let Some(offset) = self.drag_offset {
                    let mut target = vec2(x as f32, y as f32) - offset;
                    if let Some(area) = self.drag_constraints {
                        target = target.clamp(area.pos, area.pos + area.size);
                    }
                    self.set_location(target.x, target.y);
                    self.update_geometry(widgets);
                }
            }
            _ => {}
        }
        self.check_invariants();
    }

    pub(crate) fn draw(&self, widgets: &SlotMap<WidgetId, Widget>, sink: &mut dyn RenderSink) {
        sink.fill_rect(self.back, self.back_color);
        if self.title_visible {
            sink.fill_rect(self.title_bar, self.title_bar_color);
            self.title.draw(sink);
        }
        sink.fill_rect(self.body, self.body_color);
        for child in &self.children {
            if let Child::Widget(id) = child {
                match widgets.get(*id) {
                    Some(Widget::Frame(frame)) => frame.draw(widgets, sink),
                    Some(widget) => widget.draw(sink),
                    None => {}
                }
            }
        }
    }

    /// Pass 1: children take their natural sizes bottom-up, then a
    /// frame without an explicit size takes its size-to-fit.
    fn issue_auto_resize(&mut self, widgets: &mut SlotMap<WidgetId, Widget>) {
        for i in 0..self.children.len() {
            if let Child::Widget(id) = self.children[i] {
                if matches!(widgets.get(id), Some(Widget::Frame(_))) {
                    with_child_frame(widgets, id, |frame, widgets| {
                        frame.issue_auto_resize(widgets)
                    });
                } else if let Some(widget) = widgets.get_mut(id) {
                    widget.issue_auto_resize();
                }
            }
        }
        if self.back.size.x == 0. || self.back.size.y == 0. {
            let size = self.compute_size_to_fit(widgets);
            log::debug!("auto-sizing frame to {}x{}", size.x, size.y);
            self.back.size = size;
        }
        self.check_invariants();
    }

    /// Simulates the flow without placing anything, yielding the
    /// smallest size that fits every line plus chrome.
    fn compute_size_to_fit(&self, widgets: &SlotMap<WidgetId, Widget>) -> Vec2 {
        let mut total_width = 0.0f32;
        let mut line_width = 0.0f32;
        let mut total_height = 0.0f32;
        let mut line_height = 0.0f32;
        // cancels one padding when a spacer separates two widgets
        let mut pad_fix = 0.0f32;

        for child in &self.children {
            match child {
                Child::Spacer(_) => {
                    pad_fix = -self.padding;
                }
                Child::LineBreak => {
                    total_width = total_width.max(line_width);
                    line_width = 0.;
                    total_height += line_height + self.padding;
                    line_height = 0.;
                    pad_fix = 0.;
                }
                Child::Widget(id) => {
                    let widget = match widgets.get(*id) {
                        Some(widget) => widget,
                        None => continue,
                    };
                    let (mut w, mut h) = (widget.width(), widget.height());
                    if w == 0. && h == 0. {
                        if let Widget::Frame(frame) = widget {
                            let fit = frame.compute_size_to_fit(widgets);
                            w = fit.x;
                            h = fit.y;
                        }
                    }
                    line_width += w + self.padding + pad_fix;
                    line_height = line_height.max(h);
                    pad_fix = 0.;
                }
            }
        }

        if line_width != 0. {
            total_width = total_width.max(line_width);
            total_height += line_height + self.padding;
        }
        if self.title_visible {
            total_height += self.title_height() + self.padding;
            total_width = total_width.max(self.title.width() + self.padding * 2.);
        }
        if !self.children.is_empty() {
            // borders plus the trailing padding the flow never adds
            total_width += self.padding * 3.;
            total_height += self.padding * 3.;
        }
        vec2(total_width, total_height)
    }

    /// Pass 2: title bar and body rects from the frame's outer rect.
    fn update_chrome_geometry(&mut self) {
        let loc = self.location();
        let (w, h) = (self.back.size.x, self.back.size.y);
        let title_bar_height = if self.title_visible {
            self.title_height()
        } else {
            0.
        };
        let title_bar_pad = if self.title_visible {
            self.outer_padding
        } else {
            0.
        };
        if self.title_visible {
            self.title_bar.pos = loc + Vec2::splat(self.outer_padding);
            self.title_bar.size = vec2(
                (w - self.outer_padding * 2.).max(0.),
                title_bar_height,
            );
            self.center_title();
        }
        self.body.pos = vec2(
            loc.x + self.outer_padding,
            loc.y + title_bar_height + self.outer_padding + title_bar_pad,
        );
        self.body.size = vec2(
            (w - self.outer_padding * 2.).max(0.),
            (h - (title_bar_height + self.outer_padding * 2. + title_bar_pad)).max(0.),
        );
    }

    fn center_title(&mut self) {
        if self.title_bar.size.x > 0. && self.title_bar.size.y > 0. {
            // limits guarded positive, cannot fail
            let _ = self
                .title
                .set_limiting_dimensions(self.title_bar.size.x, self.title_bar.size.y);
        }
        let offset = vec2(
            (self.title_bar.size.x - self.title.width()) / 2.,
            (self.title_bar.size.y - self.title.height()) / 2.,
        );
        self.title.set_location(
            self.title_bar.pos.x + offset.x,
            self.title_bar.pos.y + offset.y,
        );
    }

    /// Pass 3: walk the flow lines and split each line's leftover
    /// width evenly among its spacers.
    fn update_spacer_widths(&mut self, widgets: &SlotMap<WidgetId, Widget>) {
        for child in &mut self.children {
            if let Child::Spacer(spacer) = child {
                spacer.width = 0.;
            }
        }

        let body_width = self.body.size.x;
        let mut x = 0.0f32;
        let mut pad_fix = 0.0f32;
        let mut line_begin = 0;
        for i in 0..self.children.len() {
            let child = self.children[i];
            if let Child::Spacer(_) = child {
                x += pad_fix;
                pad_fix = 0.;
                continue;
            }
            pad_fix = -self.padding;
            let step = self.child_advance(&child, widgets);

            if x + step > body_width || child == Child::LineBreak {
                let leftover = (body_width - x).max(0.);
                self.distribute_to_spacers(line_begin..i, leftover);
                line_begin = i;
                x = 0.;
                pad_fix = 0.;
            }
            x += step;
        }
        let leftover = (body_width - x).max(0.);
        self.distribute_to_spacers(line_begin..self.children.len(), leftover);
    }

    fn distribute_to_spacers(&mut self, range: std::ops::Range<usize>, leftover: f32) {
        debug_assert!(leftover >= 0.);
        let count = self.children[range.clone()]
            .iter()
            .filter(|c| matches!(c, Child::Spacer(_)))
            .count();
        if count == 0 {
            return;
        }
        let width_per_spacer = (leftover / count as f32 - self.padding).max(0.);
        for child in &mut self.children[range] {
            if let Child::Spacer(spacer) = child {
                spacer.width = width_per_spacer;
            }
        }
    }

    /// Pass 4: place every child along the flow lines.
    fn place_children(&mut self, widgets: &mut SlotMap<WidgetId, Widget>) {
        let start_x = self.body.pos.x + self.padding;
        let mut x = start_x;
        let mut y = self.body.pos.y + self.padding;
        let mut line_height = 0.0f32;
        let mut pad_fix = 0.0f32;
        let right_limit = self.location().x + self.width();

        let mut children = mem::take(&mut self.children);
        for child in &mut children {
            if *child == Child::LineBreak {
                y += line_height + self.padding;
                x = start_x;
                line_height = 0.;
                pad_fix = 0.;
                continue;
            }
            if x + self.child_advance(child, widgets) > right_limit {
                y += line_height + self.padding;
                x = start_x;
                line_height = 0.;
                pad_fix = 0.;
            }
            match child {
                Child::Spacer(spacer) => {
                    x += pad_fix;
                    spacer.pos = vec2(x, y);
                    x += spacer.width;
                }
                Child::Widget(id) => {
                    if let Some(widget) = widgets.get_mut(*id) {
                        widget.set_location(x, y);
                        line_height = line_height.max(widget.height());
                        x += widget.width() + self.padding;
                    }
                }
                Child::LineBreak => unreachable!(),
            }
            pad_fix = -self.padding;
        }
        self.children = children;
    }

    /// Horizontal advance a child contributes to its flow line.
    /// Regular widgets carry one trailing padding; markers do not.
    fn child_advance(&self, child: &Child, widgets: &SlotMap<WidgetId, Widget>) -> f32 {
        match child {
            Child::Widget(id) => {
                widgets.get(*id).map(Widget::width).unwrap_or(0.) + self.padding
            }
            Child::Spacer(spacer) => spacer.width,
            Child::LineBreak => 0.,
        }
    }

    fn title_height(&self) -> f32 {
        (self.title.character_size() * 2) as f32
    }

    fn check_invariants(&self) {
        debug_assert!(!self.back.size.x.is_nan() && self.back.size.x >= 0.);
        debug_assert!(!self.back.size.y.is_nan() && self.back.size.y >= 0.);
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("back", &self.back)
            .field("children", &self.children)
            .field("title_visible", &self.title_visible)
            .finish_non_exhaustive()
    }
}

/// Temporarily lifts a child frame out of the arena so it can be
/// mutated together with the rest of the widgets.
pub(crate) fn with_child_frame(
    widgets: &mut SlotMap<WidgetId, Widget>,
    id: WidgetId,
    f: impl FnOnce(&mut Frame, &mut SlotMap<WidgetId, Widget>),
) {
    let mut frame = match widgets.get_mut(id) {
        Some(Widget::Frame(frame)) => mem::take(frame),
        _ => return,
    };
    f(&mut frame, widgets);
    if let Some(Widget::Frame(slot)) = widgets.get_mut(id) {
        *slot = frame;
    }
}
