//! The picker overlay: header, horizontal cell list and cancel control.

use std::rc::{Rc, Weak};
use std::time::Instant;

use crate::log::{self, PickerLog};

use super::cell::{CellPool, DEFAULT_FOCUSED_SCALE, DEFAULT_PRESSED_SCALE, PickerCell};
use super::focus::{Direction, FocusModel, FocusTarget};
use super::host::{HostContext, Presentation, dismiss_on, present_on};
use super::layout::{CellFrame, CellMetrics, ListLayout, ScrollMode, Size, TextMeasure};
use super::sink::{PickerResultSink, SelectHandler};
use super::traits::Picker;

pub const CANCEL_TITLE: &str = "Cancel";

/// Discrete input from the remote, already routed to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerInput {
    Move(Direction),
    /// Select button went down
    SelectBegin,
    /// Select button came back up
    SelectEnd,
    /// Primary action on the focused control
    Confirm,
    /// Menu/back button
    Back,
}

/// Outcome of one presentation. Exactly one is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Selected { item: String, index: usize },
    Cancelled,
}

/// Request to scroll the list so the cell at `index` is centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub index: usize,
}

#[derive(Debug)]
pub struct PickerController {
    title: String,
    subtitle: Option<String>,
    items: Vec<String>,
    metrics: CellMetrics,
    cancel_title: String,
    focus: FocusModel,
    cells: CellPool,
    layout: Option<ListLayout>,
    scroll_offset: f64,
    last_scroll_request: Option<ScrollRequest>,
    cancel_pressed: bool,
    delegate: Option<Weak<dyn PickerResultSink>>,
    presentation: Option<Presentation>,
    finished: bool,
}

impl PickerController {
    pub fn new(
        title: impl Into<String>,
        subtitle: Option<String>,
        items: Vec<String>,
        initial_selection: usize,
    ) -> Self {
        let focus = FocusModel::new(items.len(), initial_selection);
        Self {
            title: title.into(),
            subtitle,
            items,
            metrics: CellMetrics::default(),
            cancel_title: CANCEL_TITLE.to_string(),
            focus,
            cells: CellPool::new(DEFAULT_FOCUSED_SCALE, DEFAULT_PRESSED_SCALE),
            layout: None,
            scroll_offset: 0.0,
            last_scroll_request: None,
            cancel_pressed: false,
            delegate: None,
            presentation: None,
            finished: false,
        }
    }

    pub fn with_metrics(mut self, metrics: CellMetrics) -> Self {
        self.metrics = metrics;
        self.layout = None;
        self
    }

    pub fn with_scales(mut self, focused: f64, pressed: f64) -> Self {
        self.cells = CellPool::new(focused, pressed);
        self.layout = None;
        self
    }

    pub fn with_cancel_title(mut self, title: impl Into<String>) -> Self {
        self.cancel_title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn cancel_title(&self) -> &str {
        &self.cancel_title
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus.current()
    }

    pub fn preferred_focus(&self) -> Option<usize> {
        self.focus.preferred_focus()
    }

    pub fn list_layout(&self) -> Option<&ListLayout> {
        self.layout.as_ref()
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn last_scroll_request(&self) -> Option<ScrollRequest> {
        self.last_scroll_request
    }

    pub fn is_cancel_pressed(&self) -> bool {
        self.cancel_pressed
    }

    pub fn presentation(&self) -> Option<Presentation> {
        self.presentation
    }

    /// True once an event has been delivered and the overlay torn down.
    pub fn is_dismissed(&self) -> bool {
        self.finished
    }

    pub fn cell(&self, index: usize) -> Option<&PickerCell> {
        self.cells.cell(index)
    }

    /// Bound cells with their frames, in display order.
    pub fn visible_cells(&self) -> Vec<(usize, CellFrame, &PickerCell)> {
        let Some(layout) = &self.layout else {
            return vec![];
        };
        self.cells
            .bound()
            .filter_map(|(index, cell)| layout.frame(index).map(|frame| (index, *frame, cell)))
            .collect()
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.cells.bound().any(|(_, cell)| cell.is_animating(now))
    }

    /// Show the overlay on `host`, delivering the outcome to `delegate`.
    pub fn present(
        &mut self,
        host: &mut dyn HostContext,
        delegate: Weak<dyn PickerResultSink>,
    ) -> Presentation {
        if let Some(presentation) = self.presentation {
            return presentation;
        }

        self.delegate = Some(delegate);
        let presentation = present_on(host, &self.title);
        self.presentation = Some(presentation);

        log::log_picker(
            &self.title,
            &PickerLog::Presented {
                presentation,
                items: self.items.len(),
                focus: self.focus.current(),
            },
        );

        presentation
    }

    /// Resolve geometry for a list container of the given size.
    ///
    /// Recomputed only when the container changes.
    pub fn layout(&mut self, width: f64, height: f64, measure: &dyn TextMeasure) {
        let container = Size { width, height };
        if self.layout.as_ref().is_some_and(|l| l.container() == container) {
            return;
        }

        let layout = ListLayout::compute(&self.items, container, &self.metrics, measure);
        self.scroll_offset = match self.focus.current() {
            FocusTarget::Cell(index) => layout.centered_offset(index),
            FocusTarget::Cancel => self.scroll_offset.clamp(0.0, layout.max_offset()),
        };
        self.layout = Some(layout);

        let now = Instant::now();
        self.reload_visible();
        if let FocusTarget::Cell(index) = self.focus.current() {
            self.bound_cell_mut(index).focus(now);
        }
    }

    /// Feed one input event. Returns the event delivered, if this input
    /// ended the presentation.
    pub fn handle_input(
        &mut self,
        host: &mut dyn HostContext,
        input: PickerInput,
    ) -> Option<PickerEvent> {
        if self.finished || self.presentation.is_none() {
            return None;
        }

        let now = Instant::now();
        match (input, self.focus.current()) {
            (PickerInput::Move(direction), _) => {
                if let Some(target) = self.focus.resolve(direction) {
                    self.move_focus(target, now);
                }
                None
            }
            (PickerInput::SelectBegin, FocusTarget::Cell(index)) => {
                if let Some(cell) = self.cells.cell_mut(index) {
                    cell.press_begin(now);
                }
                None
            }
            (PickerInput::SelectBegin, FocusTarget::Cancel) => {
                self.cancel_pressed = true;
                None
            }
            (PickerInput::SelectEnd, FocusTarget::Cell(index)) => {
                if let Some(cell) = self.cells.cell_mut(index) {
                    cell.press_end(now);
                }
                None
            }
            (PickerInput::SelectEnd, FocusTarget::Cancel) => {
                self.cancel_pressed = false;
                None
            }
            (PickerInput::Confirm, FocusTarget::Cell(index)) => {
                let item = self.items[index].clone();
                Some(self.finish(host, PickerEvent::Selected { item, index }))
            }
            (PickerInput::Confirm, FocusTarget::Cancel) | (PickerInput::Back, _) => {
                Some(self.finish(host, PickerEvent::Cancelled))
            }
        }
    }

    fn move_focus(&mut self, target: FocusTarget, now: Instant) {
        let previous = self.focus.set(target);
        if previous == target {
            return;
        }
        log::log_picker(
            &self.title,
            &PickerLog::FocusMoved {
                from: previous,
                to: target,
            },
        );

        if let FocusTarget::Cell(index) = previous {
            if let Some(cell) = self.cells.cell_mut(index) {
                cell.unfocus(now);
            }
        }
        if previous == FocusTarget::Cancel {
            self.cancel_pressed = false;
        }

        let FocusTarget::Cell(index) = target else {
            return;
        };
        let Some(layout) = &self.layout else {
            return;
        };
        if layout.mode() == ScrollMode::Scrolling {
            self.scroll_offset = layout.centered_offset(index);
            self.last_scroll_request = Some(ScrollRequest { index });
        }
        self.reload_visible();
        self.bound_cell_mut(index).focus(now);
    }

    /// Bind cells for the visible items and recycle the rest.
    fn reload_visible(&mut self) {
        let Some(layout) = &self.layout else {
            return;
        };
        let mut visible = match layout.mode() {
            ScrollMode::Centered => 0..self.items.len(),
            ScrollMode::Scrolling => layout.visible_range(self.scroll_offset),
        };
        // Zero-width cells never intersect the viewport but can hold focus
        if let FocusTarget::Cell(index) = self.focus.current() {
            visible = visible.start.min(index)..visible.end.max(index + 1);
        }

        self.cells.retain_visible(&visible);
        for index in visible {
            self.cells.dequeue(index, &self.items[index]);
        }
    }

    fn bound_cell_mut(&mut self, index: usize) -> &mut PickerCell {
        match self.cells.cell_mut(index) {
            Some(cell) => cell,
            None => unreachable!("focused cell {} is not bound after reload", index),
        }
    }

    fn finish(&mut self, host: &mut dyn HostContext, event: PickerEvent) -> PickerEvent {
        self.finished = true;

        match self.delegate.as_ref().and_then(Weak::upgrade) {
            Some(sink) => match &event {
                PickerEvent::Selected { item, index } => sink.on_select(item, *index),
                PickerEvent::Cancelled => sink.on_cancel(),
            },
            None => log::log_picker(&self.title, &PickerLog::Undelivered(&event)),
        }

        if let Some(presentation) = self.presentation {
            dismiss_on(host, presentation);
        }
        log::log_picker(&self.title, &PickerLog::Dismissed(&event));

        event
    }
}

impl Picker for PickerController {
    type Item = String;

    fn items(&self) -> &[Self::Item] {
        &self.items
    }

    fn focused_index(&self) -> Option<usize> {
        match self.focus.current() {
            FocusTarget::Cell(index) => Some(index),
            FocusTarget::Cancel => None,
        }
    }

    fn focus_index(&mut self, index: usize) {
        if !self.finished && index < self.items.len() {
            self.move_focus(FocusTarget::Cell(index), Instant::now());
        }
    }
}

/// A presented picker together with the handler it reports to.
///
/// The controller only holds the handler weakly; keeping this value alive
/// keeps the handler alive.
pub struct PresentedPicker {
    pub controller: PickerController,
    handler: Rc<dyn PickerResultSink>,
}

impl PresentedPicker {
    pub fn into_parts(self) -> (PickerController, Rc<dyn PickerResultSink>) {
        (self.controller, self.handler)
    }
}

/// Build a picker and present it on `host`, calling `on_select` with the
/// chosen item and its index. Cancellation just dismisses.
pub fn present_picker<F>(
    host: &mut dyn HostContext,
    title: &str,
    subtitle: Option<&str>,
    items: Vec<String>,
    initial_selection: usize,
    on_select: F,
) -> PresentedPicker
where
    F: Fn(&str, usize) + 'static,
{
    let handler: Rc<dyn PickerResultSink> = Rc::new(SelectHandler::new(on_select));
    let mut controller = PickerController::new(
        title,
        subtitle.map(str::to_string),
        items,
        initial_selection,
    );
    controller.present(host, Rc::downgrade(&handler));
    PresentedPicker {
        controller,
        handler,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::cell::CellVisualState;
    use crate::picker::host::Navigator;
    use crate::picker::layout::ColumnWidth;
    use std::cell::RefCell;

    fn fixed(text: &str) -> f64 {
        text.chars().count() as f64 * 10.0
    }

    /// The demo data set: ten items plus two long ones.
    fn demo_items() -> Vec<String> {
        let mut items: Vec<String> = (0..10).map(|i| format!("Item {}", i)).collect();
        items.insert(1, "Some big item".to_string());
        items.insert(4, "Some other big item".to_string());
        items
    }

    #[derive(Default)]
    struct Recorder {
        events: RefCell<Vec<PickerEvent>>,
    }

    impl PickerResultSink for Recorder {
        fn on_select(&self, item: &str, index: usize) {
            self.events.borrow_mut().push(PickerEvent::Selected {
                item: item.to_string(),
                index,
            });
        }

        fn on_cancel(&self) {
            self.events.borrow_mut().push(PickerEvent::Cancelled);
        }
    }

    fn presented(
        items: Vec<String>,
        initial: usize,
        nav: &mut Navigator,
    ) -> (PickerController, Rc<Recorder>) {
        let recorder = Rc::new(Recorder::default());
        let sink: Rc<dyn PickerResultSink> = recorder.clone();
        let mut picker = PickerController::new("Example Picker", None, items, initial);
        picker.present(nav, Rc::downgrade(&sink));
        (picker, recorder)
    }

    #[test]
    fn test_confirm_first_cell_selects_item_zero() {
        let mut nav = Navigator::with_stack("Home");
        let (mut picker, recorder) = presented(demo_items(), 0, &mut nav);
        picker.layout(1720.0, 125.0, &fixed);
        assert_eq!(nav.top(), Some("Example Picker"));

        let event = picker.handle_input(&mut nav, PickerInput::Confirm);
        assert_eq!(
            event,
            Some(PickerEvent::Selected {
                item: "Item 0".to_string(),
                index: 0
            })
        );
        assert_eq!(*recorder.events.borrow(), vec![event.unwrap()]);
        assert!(picker.is_dismissed());
        assert_eq!(nav.top(), Some("Home"));
    }

    #[test]
    fn test_confirm_cancel_delivers_only_cancel() {
        let mut nav = Navigator::modal_only();
        let (mut picker, recorder) = presented(demo_items(), 0, &mut nav);
        assert_eq!(nav.modal(), Some("Example Picker"));

        picker.handle_input(&mut nav, PickerInput::Move(Direction::Down));
        assert_eq!(picker.focus(), FocusTarget::Cancel);

        let event = picker.handle_input(&mut nav, PickerInput::Confirm);
        assert_eq!(event, Some(PickerEvent::Cancelled));
        assert_eq!(*recorder.events.borrow(), vec![PickerEvent::Cancelled]);
        assert_eq!(nav.modal(), None);
    }

    #[test]
    fn test_exactly_one_event_per_presentation() {
        let mut nav = Navigator::with_stack("Home");
        let (mut picker, recorder) = presented(demo_items(), 0, &mut nav);

        picker.handle_input(&mut nav, PickerInput::Back);
        assert!(picker.handle_input(&mut nav, PickerInput::Confirm).is_none());
        assert!(picker.handle_input(&mut nav, PickerInput::Back).is_none());
        picker.handle_input(&mut nav, PickerInput::Move(Direction::Right));

        assert_eq!(recorder.events.borrow().len(), 1);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_input_before_present_is_ignored() {
        let mut nav = Navigator::with_stack("Home");
        let mut picker = PickerController::new("Title", None, demo_items(), 0);
        assert!(picker.handle_input(&mut nav, PickerInput::Confirm).is_none());
        assert!(!picker.is_dismissed());
    }

    #[test]
    fn test_selected_index_matches_source_position() {
        // Mixed lengths so frames are uneven
        let items: Vec<String> = ["zz", "a", "a much longer label", "mid size", "b"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        for target in 0..items.len() {
            let mut nav = Navigator::with_stack("Home");
            let (mut picker, recorder) = presented(items.clone(), 0, &mut nav);
            picker.layout(300.0, 125.0, &fixed);
            for _ in 0..target {
                picker.handle_input(&mut nav, PickerInput::Move(Direction::Right));
            }
            picker.handle_input(&mut nav, PickerInput::Confirm);

            assert_eq!(
                *recorder.events.borrow(),
                vec![PickerEvent::Selected {
                    item: items[target].clone(),
                    index: target
                }]
            );
        }
    }

    #[test]
    fn test_dropped_delegate_is_silent() {
        let mut nav = Navigator::with_stack("Home");
        let (mut picker, recorder) = presented(demo_items(), 0, &mut nav);
        drop(recorder);

        let event = picker.handle_input(&mut nav, PickerInput::Confirm);
        assert!(matches!(event, Some(PickerEvent::Selected { index: 0, .. })));
        assert!(picker.is_dismissed());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_centered_layout_has_leading_inset_and_no_scroll() {
        let mut nav = Navigator::with_stack("Home");
        let items: Vec<String> = vec!["Item 0".into(), "Item 1".into()];
        let (mut picker, _recorder) = presented(items, 0, &mut nav);
        picker.layout(1000.0, 125.0, &fixed);

        let layout = picker.list_layout().unwrap();
        assert_eq!(layout.content_width(), 280.0);
        assert_eq!(layout.insets().leading, 360.0);
        assert_eq!(layout.insets().trailing, 0.0);

        picker.handle_input(&mut nav, PickerInput::Move(Direction::Right));
        assert_eq!(picker.scroll_offset(), 0.0);
        assert_eq!(picker.last_scroll_request(), None);
    }

    #[test]
    fn test_overflowing_layout_scrolls_focused_cell_to_center() {
        let mut nav = Navigator::with_stack("Home");
        let (mut picker, _recorder) = presented(demo_items(), 0, &mut nav);
        picker.layout(500.0, 125.0, &fixed);

        let layout = picker.list_layout().unwrap();
        assert_eq!(layout.mode(), ScrollMode::Scrolling);
        assert_eq!(layout.insets().leading, 0.0);
        assert_eq!(layout.insets().trailing, 0.0);

        for index in 1..12 {
            picker.handle_input(&mut nav, PickerInput::Move(Direction::Right));
            assert_eq!(picker.last_scroll_request(), Some(ScrollRequest { index }));
            let expected = picker.list_layout().unwrap().centered_offset(index);
            assert_eq!(picker.scroll_offset(), expected);
            assert_eq!(
                picker.cell(index).map(PickerCell::current_visual_state),
                Some(CellVisualState::Focused)
            );
        }
    }

    #[test]
    fn test_centered_quirk_overflow_focus_stays_bound() {
        let mut nav = Navigator::with_stack("Home");
        let items: Vec<String> = vec!["a".into(), "a".into(), "a".into()];
        let (picker, recorder) = presented(items, 0, &mut nav);
        let mut picker = picker.with_metrics(CellMetrics {
            horizontal_padding: 90.0,
            ..CellMetrics::default()
        });
        // Content 300 fits in 310, but the last cell is drawn at 225..325
        picker.layout(310.0, 125.0, &fixed);

        let layout = picker.list_layout().unwrap();
        assert_eq!(layout.mode(), ScrollMode::Centered);
        assert!(layout.frame(2).is_some_and(|f| f.x + f.width > 310.0));

        picker.handle_input(&mut nav, PickerInput::Move(Direction::Right));
        picker.handle_input(&mut nav, PickerInput::Move(Direction::Right));
        assert_eq!(picker.focus(), FocusTarget::Cell(2));
        assert_eq!(
            picker.cell(2).map(PickerCell::current_visual_state),
            Some(CellVisualState::Focused)
        );
        assert_eq!(picker.scroll_offset(), 0.0);
        assert_eq!(picker.last_scroll_request(), None);

        picker.handle_input(&mut nav, PickerInput::Confirm);
        assert_eq!(
            *recorder.events.borrow(),
            vec![PickerEvent::Selected {
                item: "a".to_string(),
                index: 2
            }]
        );
    }

    #[test]
    fn test_negative_padding_keeps_focused_cell_bound() {
        for padding in [-7.0, -6.5] {
            for width in [1.0, 3.0, 5.0, 8.0] {
                let mut nav = Navigator::with_stack("Home");
                let (picker, _recorder) = presented(demo_items(), 0, &mut nav);
                let mut picker = picker.with_metrics(CellMetrics {
                    horizontal_padding: padding,
                    ..CellMetrics::terminal()
                });
                picker.layout(width, 5.0, &ColumnWidth);

                for index in 0..12 {
                    if index > 0 {
                        picker.handle_input(&mut nav, PickerInput::Move(Direction::Right));
                    }
                    assert!(picker.cell(index).is_some_and(PickerCell::is_highlighted));
                }
            }
        }
    }

    #[test]
    fn test_scrolling_recycles_cells_without_stale_labels() {
        let mut nav = Navigator::with_stack("Home");
        let (mut picker, _recorder) = presented(demo_items(), 0, &mut nav);
        picker.layout(500.0, 125.0, &fixed);

        for _ in 0..11 {
            picker.handle_input(&mut nav, PickerInput::Move(Direction::Right));
            for (index, _, cell) in picker.visible_cells() {
                assert_eq!(cell.label(), Some(demo_items()[index].as_str()));
            }
        }
        assert!(picker.cell(0).is_none());
        assert!(picker.cells.allocated() < 12);
    }

    #[test]
    fn test_focus_feedback_follows_moves() {
        let mut nav = Navigator::with_stack("Home");
        let (mut picker, _recorder) = presented(demo_items(), 2, &mut nav);
        picker.layout(5000.0, 125.0, &fixed);
        assert_eq!(
            picker.cell(2).map(PickerCell::current_visual_state),
            Some(CellVisualState::Focused)
        );

        picker.handle_input(&mut nav, PickerInput::SelectBegin);
        assert_eq!(
            picker.cell(2).map(PickerCell::current_visual_state),
            Some(CellVisualState::Pressed)
        );
        picker.handle_input(&mut nav, PickerInput::SelectEnd);
        picker.handle_input(&mut nav, PickerInput::Move(Direction::Left));

        assert_eq!(
            picker.cell(2).map(PickerCell::current_visual_state),
            Some(CellVisualState::Idle)
        );
        assert_eq!(
            picker.cell(1).map(PickerCell::current_visual_state),
            Some(CellVisualState::Focused)
        );
    }

    #[test]
    fn test_cancel_press_feedback() {
        let mut nav = Navigator::with_stack("Home");
        let (mut picker, _recorder) = presented(demo_items(), 0, &mut nav);
        picker.handle_input(&mut nav, PickerInput::Move(Direction::Down));

        picker.handle_input(&mut nav, PickerInput::SelectBegin);
        assert!(picker.is_cancel_pressed());
        picker.handle_input(&mut nav, PickerInput::SelectEnd);
        assert!(!picker.is_cancel_pressed());

        picker.handle_input(&mut nav, PickerInput::Move(Direction::Up));
        assert_eq!(picker.focus(), FocusTarget::Cell(0));
    }

    #[test]
    fn test_out_of_range_initial_selection_falls_back() {
        let mut nav = Navigator::with_stack("Home");
        let (mut picker, recorder) = presented(demo_items(), 40, &mut nav);
        assert_eq!(picker.preferred_focus(), None);
        assert_eq!(picker.focus(), FocusTarget::Cell(0));

        picker.handle_input(&mut nav, PickerInput::Confirm);
        assert_eq!(
            *recorder.events.borrow(),
            vec![PickerEvent::Selected {
                item: "Item 0".to_string(),
                index: 0
            }]
        );
    }

    #[test]
    fn test_picker_trait_navigation() {
        let mut nav = Navigator::with_stack("Home");
        let (mut picker, _recorder) = presented(demo_items(), 0, &mut nav);
        picker.layout(5000.0, 125.0, &fixed);

        picker.focus_prev();
        assert_eq!(picker.focused_index(), Some(0));
        picker.focus_next();
        assert_eq!(picker.focused_item().map(String::as_str), Some("Some big item"));
    }

    #[test]
    fn test_present_picker_calls_closure() {
        let mut nav = Navigator::modal_only();
        let chosen = Rc::new(RefCell::new(None));
        let sink = chosen.clone();
        let mut presented = present_picker(
            &mut nav,
            "Example Picker",
            Some("Some optional explanation"),
            demo_items(),
            0,
            move |item, index| {
                *sink.borrow_mut() = Some((item.to_string(), index));
            },
        );
        assert_eq!(presented.controller.subtitle(), Some("Some optional explanation"));

        presented
            .controller
            .handle_input(&mut nav, PickerInput::Move(Direction::Right));
        presented.controller.handle_input(&mut nav, PickerInput::Confirm);

        assert_eq!(*chosen.borrow(), Some(("Some big item".to_string(), 1)));
        assert_eq!(nav.modal(), None);
    }

    #[test]
    fn test_dropping_handler_drops_event() {
        let mut nav = Navigator::modal_only();
        let chosen = Rc::new(RefCell::new(None));
        let sink = chosen.clone();
        let presented = present_picker(&mut nav, "Picker", None, demo_items(), 0, move |item, index| {
            *sink.borrow_mut() = Some((item.to_string(), index));
        });

        let (mut controller, handler) = presented.into_parts();
        drop(handler);
        controller.handle_input(&mut nav, PickerInput::Confirm);
        assert_eq!(*chosen.borrow(), None);
        assert!(controller.is_dismissed());
        assert_eq!(nav.modal(), None);
    }
}
