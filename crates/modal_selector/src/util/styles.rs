//! Styling for the selector's visual regions

use ratatui::prelude::*;

/// Standard color for the highlighted option
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Standard color for help text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Standard color for section headers
pub const HEADER_COLOR: Color = Color::Cyan;

/// Standard color for the cancel action
pub const CANCEL_COLOR: Color = Color::Red;

/// Style overrides for each region of the selector.
///
/// The state machine never reads these; they are applied as-is to the
/// matching region when drawing. Override by struct update:
///
/// ```ignore
/// let styles = SelectorStyles {
///     option_text: Style::default().fg(Color::Green),
///     ..SelectorStyles::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorStyles {
    pub trigger: Style,
    pub trigger_text: Style,
    pub overlay: Style,
    pub option: Style,
    pub option_text: Style,
    /// Applied on top of `option_text` for the cursor row
    pub option_highlight: Style,
    pub section: Style,
    pub section_text: Style,
    pub option_container: Style,
    pub cancel: Style,
    pub cancel_text: Style,
    pub cancel_container: Style,
    /// Blank lines above and below each option's text
    pub option_padding: u16,
}

impl Default for SelectorStyles {
    fn default() -> Self {
        Self {
            trigger: Style::default(),
            trigger_text: Style::default(),
            overlay: Style::default().bg(Color::Black),
            option: Style::default(),
            option_text: Style::default().fg(Color::White),
            option_highlight: Style::default()
                .fg(FOCUS_COLOR)
                .add_modifier(Modifier::BOLD),
            section: Style::default(),
            section_text: Style::default()
                .fg(HEADER_COLOR)
                .add_modifier(Modifier::BOLD),
            option_container: Style::default().bg(Color::DarkGray),
            cancel: Style::default(),
            cancel_text: Style::default().fg(CANCEL_COLOR),
            cancel_container: Style::default().bg(Color::DarkGray),
            option_padding: 0,
        }
    }
}

impl SelectorStyles {
    /// Natural height of one option row.
    pub fn option_height(&self) -> u16 {
        1 + 2 * self.option_padding
    }

    /// Natural height of one section header row.
    pub fn section_height(&self) -> u16 {
        1
    }
}

/// Create a centered rectangle within the given area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_height_includes_padding() {
        let mut styles = SelectorStyles::default();
        assert_eq!(styles.option_height(), 1);
        styles.option_padding = 1;
        assert_eq!(styles.option_height(), 3);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect(40, 10, area), Rect::new(30, 20, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 20, 10);
        let rect = centered_rect(40, 30, area);
        assert_eq!(rect, Rect::new(5, 5, 20, 10));
    }
}
