//! Demo application state: a home screen that presents the picker.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use tvpicker::config::Config;
use tvpicker::log;
use tvpicker::picker::{
    ColumnWidth, Navigator, PickerController, PickerResultSink, present_picker,
};
use tvpicker::tui::components::render_picker_overlay;
use tvpicker::tui::input::map_key;
use tvpicker::tui::theme::*;

const HOME: &str = "Home";

/// Ten items plus two long ones, so the row overflows narrow terminals.
pub fn demo_items() -> Vec<String> {
    let mut items: Vec<String> = (0..10).map(|i| format!("Item {}", i)).collect();
    items.insert(1, "Some big item".to_string());
    items.insert(4, "Some other big item".to_string());
    items
}

pub struct App {
    pub config: Config,
    pub navigator: Navigator,
    pub picker: Option<PickerController>,
    handler: Option<Rc<dyn PickerResultSink>>,
    pub last_selection: Rc<RefCell<Option<(String, usize)>>>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let navigator = if config.modal {
            Navigator::modal_only()
        } else {
            Navigator::with_stack(HOME)
        };
        Self {
            config,
            navigator,
            picker: None,
            handler: None,
            last_selection: Rc::new(RefCell::new(None)),
            should_quit: false,
        }
    }

    pub fn open_picker(&mut self) {
        let selection = self.last_selection.clone();
        let presented = present_picker(
            &mut self.navigator,
            "Example Picker",
            Some("Some optional explanation message about what this picker picks"),
            demo_items(),
            0,
            move |item, index| {
                log::log(&format!("{} selected at index {}", item, index));
                *selection.borrow_mut() = Some((item.to_string(), index));
            },
        );

        let (controller, handler) = presented.into_parts();
        let controller = controller
            .with_metrics(self.config.cell_metrics())
            .with_scales(self.config.focused_scale, self.config.pressed_scale)
            .with_cancel_title(self.config.cancel_title.clone());
        self.picker = Some(controller);
        self.handler = Some(handler);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(picker) = &mut self.picker {
            for input in map_key(key) {
                if picker.handle_input(&mut self.navigator, input).is_some() {
                    break;
                }
            }
            let dismissed = picker.is_dismissed();
            if dismissed {
                self.picker = None;
                self.handler = None;
            }
            return;
        }

        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.open_picker(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    pub fn is_animating(&self) -> bool {
        self.picker
            .as_ref()
            .is_some_and(|p| p.is_animating(Instant::now()))
    }
}

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let list_height = app.config.list_height;

    // A pushed picker replaces the home screen entirely
    let pushed = app.navigator.top().is_some_and(|top| top != HOME);
    if !pushed {
        render_home(frame, app);
    }

    if let Some(picker) = &mut app.picker {
        render_picker_overlay(frame, area, picker, &ColumnWidth, list_height);
    }
}

fn render_home(frame: &mut Frame, app: &App) {
    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1), // Status
        Constraint::Length(1), // Gap
        Constraint::Length(1), // Hotkeys
        Constraint::Fill(1),
    ])
    .split(frame.area());

    let status = match &*app.last_selection.borrow() {
        Some((item, index)) => format!("{} selected at index {}", item, index),
        None => "Nothing selected yet".to_string(),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(status, Style::new().fg(TITLE_WHITE))).centered()),
        rows[1],
    );

    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("[Enter]", Style::new().fg(TITLE_WHITE)),
                Span::styled(" open picker · ", Style::new().fg(SUBTITLE_DIM)),
                Span::styled("[q]", Style::new().fg(TITLE_WHITE)),
                Span::styled(" quit", Style::new().fg(SUBTITLE_DIM)),
            ])
            .centered(),
        ),
        rows[3],
    );
}
