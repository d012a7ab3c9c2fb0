//! One-line P/E range bar: `10.00 ──●──── 20.00 15.00`.

use ratatui::text::Span;

use sectorboard_core::format::NOT_AVAILABLE;
use sectorboard_core::range::RangeVisual;

use crate::theme;

const TRACK: char = '─';
const MARKER: char = '●';
const MIN_TRACK: usize = 5;

/// Cell index of the marker on a track `width` cells wide.
pub fn marker_cell(percent: f64, width: usize) -> usize {
    if width <= 1 {
        return 0;
    }
    let cell = (percent.clamp(0.0, 100.0) / 100.0 * (width - 1) as f64).round() as usize;
    cell.min(width - 1)
}

/// Track string with the marker placed.
pub fn track(percent: f64, width: usize) -> String {
    let marker = marker_cell(percent, width);
    (0..width)
        .map(|i| if i == marker { MARKER } else { TRACK })
        .collect()
}

/// Spans for a range bar filling `width` cells.
pub fn spans(visual: &RangeVisual, width: u16) -> Vec<Span<'static>> {
    let width = width as usize;
    match visual {
        RangeVisual::NotApplicable => {
            vec![Span::styled(format!("{NOT_AVAILABLE:^width$}"), theme::muted())]
        }
        RangeVisual::Band {
            clamped_percent,
            low_label,
            high_label,
            current_label,
        } => {
            // low, space, track, space, high, space, current, trailing pad
            let labels = low_label.len() + high_label.len() + current_label.len() + 4;
            if width >= labels + MIN_TRACK {
                let track_width = width - labels;
                vec![
                    Span::styled(format!("{low_label} "), theme::muted()),
                    Span::styled(track(*clamped_percent, track_width), theme::accent()),
                    Span::styled(format!(" {high_label} "), theme::muted()),
                    Span::styled(format!("{current_label} "), theme::accent_bold()),
                ]
            } else {
                let track_width = width.saturating_sub(1).max(1);
                vec![
                    Span::styled(track(*clamped_percent, track_width), theme::accent()),
                    Span::raw(" "),
                ]
            }
        }
    }
}
