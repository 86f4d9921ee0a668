//! Scroll and cursor helpers for the option list.

use crate::event::{AppKeyEvent, KeyCode};

/// Calculate centered scroll offset for a list.
///
/// Returns the offset that keeps the selected row centered when possible,
/// pinned to the top or bottom near the ends of the list.
pub fn calculate_centered_scroll(
    selected_idx: usize,
    total_items: usize,
    visible_count: usize,
) -> usize {
    if total_items <= visible_count {
        return 0;
    }

    let center = visible_count / 2;

    if selected_idx <= center {
        0
    } else if selected_idx >= total_items.saturating_sub(visible_count.saturating_sub(center)) {
        total_items.saturating_sub(visible_count)
    } else {
        selected_idx.saturating_sub(center)
    }
}

/// Move the cursor with j/k, Up/Down (wrapping), Home and End.
///
/// Returns `true` if the key was handled.
pub fn handle_list_navigation(key: &AppKeyEvent, selected: &mut usize, total: usize) -> bool {
    if total == 0 || key.ctrl || key.alt {
        return false;
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            *selected = (*selected + 1) % total;
            true
        }
        KeyCode::Char('k') | KeyCode::Up => {
            *selected = if *selected == 0 {
                total - 1
            } else {
                *selected - 1
            };
            true
        }
        KeyCode::Home => {
            *selected = 0;
            true
        }
        KeyCode::End => {
            *selected = total - 1;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_centered_scroll_few_items() {
        assert_eq!(calculate_centered_scroll(0, 5, 10), 0);
        assert_eq!(calculate_centered_scroll(4, 5, 10), 0);
    }

    #[test]
    fn test_calculate_centered_scroll_middle() {
        assert_eq!(calculate_centered_scroll(10, 20, 10), 5);
    }

    #[test]
    fn test_calculate_centered_scroll_end() {
        assert_eq!(calculate_centered_scroll(19, 20, 10), 10);
        assert_eq!(calculate_centered_scroll(29, 30, 5), 25);
    }

    #[test]
    fn test_navigation_wraps() {
        let down = AppKeyEvent::plain(KeyCode::Char('j'));
        let up = AppKeyEvent::plain(KeyCode::Up);
        let mut selected = 4usize;

        assert!(handle_list_navigation(&down, &mut selected, 5));
        assert_eq!(selected, 0);
        assert!(handle_list_navigation(&up, &mut selected, 5));
        assert_eq!(selected, 4);
    }

    #[test]
    fn test_navigation_home_end() {
        let mut selected = 2usize;
        assert!(handle_list_navigation(&AppKeyEvent::plain(KeyCode::End), &mut selected, 5));
        assert_eq!(selected, 4);
        assert!(handle_list_navigation(&AppKeyEvent::plain(KeyCode::Home), &mut selected, 5));
        assert_eq!(selected, 0);
    }

    #[test]
    fn test_navigation_empty_and_ctrl() {
        let mut selected = 0usize;
        assert!(!handle_list_navigation(&AppKeyEvent::plain(KeyCode::Down), &mut selected, 0));

        let ctrl_j = AppKeyEvent {
            ctrl: true,
            ..AppKeyEvent::plain(KeyCode::Char('j'))
        };
        assert!(!handle_list_navigation(&ctrl_j, &mut selected, 5));
        assert_eq!(selected, 0);
    }
}
