//! Terminal rendering of the selector: trigger, overlay, and key mapping.
//!
//! The view lays out every row at its natural height on each render and
//! reports the first option's height back to the [`Selector`]. Until that
//! report lands the list container is zero-height, so an overlay takes two
//! renders to settle; [`SelectorView::render_overlay`] returns `true` when a
//! follow-up render is needed.

use modal_selector_core::{Item, Row, Selector, resolve_rows};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Clear, Padding, Paragraph},
};

use super::list_nav::{calculate_centered_scroll, handle_list_navigation};
use crate::event::{AppKeyEvent, KeyCode};
use crate::util::styles::{HELP_COLOR, SelectorStyles, centered_rect};

/// What the always-visible trigger shows.
#[derive(Debug, Clone, Default)]
pub enum Trigger<'a> {
    /// The selector's current label.
    #[default]
    Label,
    /// Host content, drawn verbatim in place of the label.
    Custom(Text<'a>),
}

/// Which part of the open overlay receives Enter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    List,
    Cancel,
}

/// Outcome of a key press routed through the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEvent {
    Ignored,
    Opened,
    Moved,
    Selected,
    Closed,
}

/// View-local state: the cursor over options (headers are skipped) and focus.
#[derive(Debug, Default)]
pub struct SelectorView {
    cursor: usize,
    focus: Focus,
}

impl SelectorView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordinal of the highlighted option among options only.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Map a key press onto selector operations.
    ///
    /// Closed: Enter or Space opens. Open: j/k/Up/Down/Home/End move, Tab
    /// switches between list and cancel, Enter confirms, Esc dismisses.
    pub fn handle_key<P>(
        &mut self,
        key: &AppKeyEvent,
        selector: &mut Selector<P>,
        items: &[Item<P>],
    ) -> SelectorEvent {
        let option_count = items.iter().filter(|item| !item.section).count();

        if !selector.is_open() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') if key.no_modifiers() => {
                    selector.open();
                    self.cursor = 0;
                    self.focus = if option_count == 0 {
                        Focus::Cancel
                    } else {
                        Focus::List
                    };
                    SelectorEvent::Opened
                }
                _ => SelectorEvent::Ignored,
            };
        }

        match key.code {
            KeyCode::Esc => {
                selector.dismiss();
                SelectorEvent::Closed
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::List => Focus::Cancel,
                    Focus::Cancel if option_count > 0 => Focus::List,
                    Focus::Cancel => Focus::Cancel,
                };
                SelectorEvent::Moved
            }
            KeyCode::Enter => match self.focus {
                Focus::Cancel => {
                    selector.close();
                    SelectorEvent::Closed
                }
                Focus::List => {
                    let rows = resolve_rows(items);
                    match rows.iter().filter_map(Row::as_option).nth(self.cursor) {
                        Some(option) => {
                            selector.select(option);
                            SelectorEvent::Selected
                        }
                        None => SelectorEvent::Ignored,
                    }
                }
            },
            _ if self.focus == Focus::List
                && handle_list_navigation(key, &mut self.cursor, option_count) =>
            {
                SelectorEvent::Moved
            }
            _ => SelectorEvent::Ignored,
        }
    }

    /// Draw the overlay if the selector is open.
    ///
    /// Returns `true` when this render recorded the item height, meaning the
    /// list was drawn at zero height and should be rendered again.
    pub fn render_overlay<P>(
        &mut self,
        frame: &mut Frame,
        selector: &mut Selector<P>,
        items: &[Item<P>],
        styles: &SelectorStyles,
    ) -> bool {
        if !selector.is_open() {
            return false;
        }

        let overlay = selector.compose(items);
        let heights: Vec<u16> = overlay
            .rows
            .iter()
            .map(|row| {
                if row.is_header() {
                    styles.section_height()
                } else {
                    styles.option_height()
                }
            })
            .collect();

        let settled_now = overlay
            .first_option_index()
            .is_some_and(|idx| selector.report_item_height(heights[idx]));

        let option_count = overlay.option_count();
        self.cursor = self.cursor.min(option_count.saturating_sub(1));
        let cursor_row = overlay
            .options()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(0);

        let area = frame.area();
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(styles.overlay), area);

        let cancel_height = styles.option_height();
        let width = area.width.saturating_sub(area.width / 5);
        let column = centered_rect(width, overlay.max_height + 1 + cancel_height, area);
        let [list_area, _, cancel_area] = Layout::vertical([
            Constraint::Length(overlay.max_height),
            Constraint::Length(1),
            Constraint::Length(cancel_height),
        ])
        .areas(column);

        frame.render_widget(Block::default().style(styles.option_container), list_area);

        let visible = overlay.visible_rows(selector.measured_item_height());
        let offset = calculate_centered_scroll(cursor_row, overlay.rows.len(), visible);
        let mut y = list_area.y;
        for (idx, row) in overlay.rows.iter().enumerate().skip(offset) {
            let height = heights[idx];
            if y + height > list_area.bottom() {
                break;
            }
            let rect = Rect::new(list_area.x, y, list_area.width, height);
            match row {
                Row::Header { label, .. } => {
                    let header = Paragraph::new(Span::styled(*label, styles.section_text))
                        .style(styles.section);
                    frame.render_widget(header, rect);
                }
                Row::Option(option) => {
                    let highlighted = self.focus == Focus::List && idx == cursor_row;
                    render_option_cell(frame, rect, option.label, highlighted, styles, Cell::Option);
                }
            }
            y += height;
        }

        frame.render_widget(Block::default().style(styles.cancel_container), cancel_area);
        render_option_cell(
            frame,
            cancel_area,
            &overlay.cancel_label,
            self.focus == Focus::Cancel,
            styles,
            Cell::Cancel,
        );

        let help = Paragraph::new(Line::from(vec![
            Span::styled("[j/k/↑/↓]", Style::default().fg(HELP_COLOR)),
            Span::raw(" Navigate  "),
            Span::styled("[Tab]", Style::default().fg(HELP_COLOR)),
            Span::raw(" Cancel button  "),
            Span::styled("[Enter]", Style::default().fg(HELP_COLOR)),
            Span::raw(" Select  "),
            Span::styled("[Esc]", Style::default().fg(HELP_COLOR)),
            Span::raw(" Close"),
        ]))
        .alignment(Alignment::Center);
        let help_area = Rect::new(area.x, area.bottom().saturating_sub(1), area.width, 1);
        frame.render_widget(help, help_area);

        if settled_now {
            tracing::debug!(
                overlay = %overlay.id,
                item_height = selector.measured_item_height(),
                "overlay needs a settling render"
            );
        }
        settled_now
    }
}

#[derive(Clone, Copy)]
enum Cell {
    Option,
    Cancel,
}

fn render_option_cell(
    frame: &mut Frame,
    rect: Rect,
    label: &str,
    highlighted: bool,
    styles: &SelectorStyles,
    cell: Cell,
) {
    let (block_style, text_style) = match cell {
        Cell::Option => (styles.option, styles.option_text),
        Cell::Cancel => (styles.cancel, styles.cancel_text),
    };
    let text_style = if highlighted {
        text_style.patch(styles.option_highlight)
    } else {
        text_style
    };

    let block = Block::default()
        .style(block_style)
        .padding(Padding::vertical(styles.option_padding));
    let paragraph = Paragraph::new(Span::styled(label, text_style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, rect);
}

/// Draw the trigger: the current label in a bordered box, or the host's
/// custom content as-is.
pub fn render_trigger<P>(
    frame: &mut Frame,
    area: Rect,
    selector: &Selector<P>,
    trigger: &Trigger<'_>,
    styles: &SelectorStyles,
) {
    match trigger {
        Trigger::Label => {
            let paragraph = Paragraph::new(Span::styled(
                selector.selected_label(),
                styles.trigger_text,
            ))
            .alignment(Alignment::Center)
            .block(Block::bordered().style(styles.trigger));
            frame.render_widget(paragraph, area);
        }
        Trigger::Custom(text) => {
            frame.render_widget(Paragraph::new(text.clone()), area);
        }
    }
}
