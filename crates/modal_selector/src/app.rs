use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crossterm::event::{self, Event, KeyEventKind};
use modal_selector_core::{DEFAULT_CANCEL_TEXT, DEFAULT_INIT_VALUE, Item, Selector, SelectorConfig};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
};

use crate::components::{SelectorEvent, SelectorView, Trigger, render_trigger};
use crate::data::items::{Payload, default_items};
use crate::event::{AppKeyEvent, KeyCode};
use crate::util::screen::ScreenSize;
use crate::util::styles::{HELP_COLOR, SelectorStyles, centered_rect};

/// Trigger box size on the demo screen
const TRIGGER_WIDTH: u16 = 32;
const TRIGGER_HEIGHT: u16 = 3;

/// Host-side inputs for the demo.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub items: Vec<Item<Payload>>,
    /// Initial-value inputs; `i` cycles through them.
    pub init_values: Vec<String>,
    pub cancel_text: String,
    /// Replaces the label trigger when set.
    pub trigger_text: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            items: default_items(),
            init_values: vec![DEFAULT_INIT_VALUE.to_string()],
            cancel_text: DEFAULT_CANCEL_TEXT.to_string(),
            trigger_text: None,
        }
    }
}

/// Demo host: one trigger, a status line, and the selector overlay.
pub struct App {
    selector: Selector<Payload>,
    view: SelectorView,
    items: Vec<Item<Payload>>,
    styles: SelectorStyles,
    trigger: Trigger<'static>,
    init_values: Vec<String>,
    init_index: usize,
    last_payload: Rc<RefCell<Option<Payload>>>,
    exit: bool,
}

impl App {
    pub fn new(config: AppConfig, screen: ScreenSize) -> Self {
        let init_values = if config.init_values.is_empty() {
            vec![DEFAULT_INIT_VALUE.to_string()]
        } else {
            config.init_values
        };

        let last_payload = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&last_payload);
        let selector_config = SelectorConfig::new()
            .init_value(init_values[0].clone())
            .cancel_text(config.cancel_text)
            .on_change(move |payload: &Payload| {
                *sink.borrow_mut() = Some(payload.clone());
            });

        let trigger = match config.trigger_text {
            Some(text) => Trigger::Custom(Text::from(text)),
            None => Trigger::Label,
        };

        Self {
            selector: Selector::mount(selector_config, &screen),
            view: SelectorView::new(),
            items: config.items,
            styles: SelectorStyles::default(),
            trigger,
            init_values,
            init_index: 0,
            last_payload,
            exit: false,
        }
    }

    pub fn selector(&self) -> &Selector<Payload> {
        &self.selector
    }

    /// Payload of the most recent confirmed selection.
    pub fn last_payload(&self) -> Option<Payload> {
        self.last_payload.borrow().clone()
    }

    pub fn should_exit(&self) -> bool {
        self.exit
    }
}

impl App {
    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.exit {
            let mut settling = false;
            terminal.draw(|frame| settling = self.draw(frame))?;
            if settling {
                // Redraw right away so the measured height takes effect
                continue;
            }
            self.handle_events()?;
        }
        Ok(())
    }

    /// Draw one frame. Returns `true` when another frame is needed to settle.
    pub fn draw(&mut self, frame: &mut Frame) -> bool {
        let area = frame.area();
        let [title_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(TRIGGER_HEIGHT),
            Constraint::Length(2),
        ])
        .areas(area);

        let title = Paragraph::new(Span::styled(
            "Modal Selector",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        let trigger_area = centered_rect(TRIGGER_WIDTH, TRIGGER_HEIGHT, body_area);
        render_trigger(
            frame,
            trigger_area,
            &self.selector,
            &self.trigger,
            &self.styles,
        );

        let last = match self.last_payload.borrow().as_deref() {
            Some(payload) => format!("Last payload: {payload}"),
            None => "Last payload: none".to_string(),
        };
        let status = Paragraph::new(vec![
            Line::from(last),
            Line::from(Span::styled(
                "[Enter] Open  [i] Next initial value  [q] Quit",
                Style::default().fg(HELP_COLOR),
            )),
        ]);
        frame.render_widget(status, status_area);

        self.view
            .render_overlay(frame, &mut self.selector, &self.items, &self.styles)
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event.into());
            }
            Event::Resize(width, height) => {
                // Display height is only read at mount
                tracing::debug!(width, height, "terminal resized");
            }
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: AppKeyEvent) {
        if key.ctrl && key.code == KeyCode::Char('c') {
            self.exit = true;
            return;
        }

        if !self.selector.is_open() {
            match key.code {
                KeyCode::Char('q') if key.no_modifiers() => {
                    self.exit = true;
                    return;
                }
                KeyCode::Char('i') if key.no_modifiers() => {
                    self.cycle_initial_value();
                    return;
                }
                _ => {}
            }
        }

        let event = self.view.handle_key(&key, &mut self.selector, &self.items);
        if event == SelectorEvent::Selected {
            tracing::info!(payload = ?self.last_payload.borrow(), "selection confirmed");
        }
    }

    fn cycle_initial_value(&mut self) {
        self.init_index = (self.init_index + 1) % self.init_values.len();
        let value = self.init_values[self.init_index].clone();
        self.selector.set_initial_value(value);
    }
}
