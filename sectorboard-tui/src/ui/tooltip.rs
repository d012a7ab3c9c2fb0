//! Hover overlay for the row summary.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use sectorboard_core::tooltip::TooltipState;

use crate::theme;

/// Widest the overlay gets, borders included.
pub const MAX_WIDTH: u16 = 48;

/// Greedy word wrap to `width` columns. Words longer than a line are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();
        if word.is_empty() {
            continue;
        }
        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Overlay rectangle for `tip`, clipped to `screen`.
pub fn overlay_rect(tip: &TooltipState, lines: usize, text_width: usize, screen: Rect) -> Rect {
    let width = (text_width as u16).saturating_add(2);
    let height = (lines as u16).saturating_add(2);
    let top_left = tip.placement().top_left(f64::from(height));
    let x = top_left.x.max(0.0).round() as u16;
    let y = top_left.y.max(0.0).round() as u16;
    Rect::new(x, y, width, height).intersection(screen)
}

pub fn render(f: &mut Frame, tip: &TooltipState) {
    let inner_width = usize::from(MAX_WIDTH - 2);
    let lines = wrap(&tip.content, inner_width);
    let text_width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let area = overlay_rect(tip, lines.len(), text_width, f.area());
    if area.width < 3 || area.height < 3 {
        return;
    }

    f.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent());
    let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
    f.render_widget(Paragraph::new(text).style(theme::text()).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sectorboard_core::tooltip::{Point, TooltipPositioner};

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap("oil prices rally on supply cuts", 12), vec![
            "oil prices",
            "rally on",
            "supply cuts"
        ]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn lower_half_opens_upward() {
        let screen = Rect::new(0, 0, 100, 40);
        let placement = TooltipPositioner::new(2.0).position(Point::new(10.0, 30.0), 40.0);
        let tip = TooltipState::new("x", placement);
        let rect = overlay_rect(&tip, 2, 10, screen);
        // Anchor y = 28, overlay height 4: the bottom edge sits at the anchor.
        assert_eq!(rect, Rect::new(12, 24, 12, 4));
    }

    #[test]
    fn upper_half_opens_downward() {
        let screen = Rect::new(0, 0, 100, 40);
        let placement = TooltipPositioner::new(2.0).position(Point::new(10.0, 5.0), 40.0);
        let tip = TooltipState::new("x", placement);
        assert_eq!(overlay_rect(&tip, 1, 5, screen), Rect::new(12, 7, 7, 3));
    }

    #[test]
    fn overlay_is_clipped_not_moved() {
        let screen = Rect::new(0, 0, 20, 40);
        let placement = TooltipPositioner::new(2.0).position(Point::new(15.0, 5.0), 40.0);
        let tip = TooltipState::new("x", placement);
        let rect = overlay_rect(&tip, 1, 10, screen);
        assert_eq!(rect.x, 17);
        assert_eq!(rect.width, 3);
    }
}
