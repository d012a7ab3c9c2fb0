//! Tooltip placement relative to the pointer.
//!
//! The tooltip opens away from the nearer vertical edge: below the pointer in
//! the top half of the viewport, above it in the bottom half. There is no
//! horizontal edge avoidance.

/// Device coordinates (pixels in a browser, cells in a terminal).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Which way the overlay opens from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// The overlay's bottom edge sits at the anchor.
    Up,
    /// The overlay's top edge sits at the anchor.
    Down,
}

/// Where to put an overlay for a given pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    pub anchor: Point,
    pub vertical: VerticalAnchor,
}

impl TooltipPlacement {
    /// Top-left corner of an overlay `overlay_height` tall.
    ///
    /// Upward placements are shifted by the full overlay height.
    pub fn top_left(&self, overlay_height: f64) -> Point {
        match self.vertical {
            VerticalAnchor::Up => Point::new(self.anchor.x, self.anchor.y - overlay_height),
            VerticalAnchor::Down => self.anchor,
        }
    }
}

/// A live tooltip: exists only while the pointer is over a row.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub content: String,
    pub anchor: Point,
    pub vertical: VerticalAnchor,
}

impl TooltipState {
    pub fn new(content: impl Into<String>, placement: TooltipPlacement) -> Self {
        Self {
            content: content.into(),
            anchor: placement.anchor,
            vertical: placement.vertical,
        }
    }

    pub fn placement(&self) -> TooltipPlacement {
        TooltipPlacement {
            anchor: self.anchor,
            vertical: self.vertical,
        }
    }
}

/// Stateless positioner parameterized by the pointer margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPositioner {
    pub margin: f64,
}

impl Default for TooltipPositioner {
    fn default() -> Self {
        Self {
            margin: Self::DEFAULT_MARGIN,
        }
    }
}

impl TooltipPositioner {
    pub const DEFAULT_MARGIN: f64 = 10.0;

    pub fn new(margin: f64) -> Self {
        Self { margin }
    }

    pub fn position(&self, pointer: Point, viewport_height: f64) -> TooltipPlacement {
        let x = pointer.x + self.margin;
        if pointer.y > viewport_height / 2.0 {
            TooltipPlacement {
                anchor: Point::new(x, pointer.y - self.margin),
                vertical: VerticalAnchor::Up,
            }
        } else {
            TooltipPlacement {
                anchor: Point::new(x, pointer.y + self.margin),
                vertical: VerticalAnchor::Down,
            }
        }
    }
}

/// Place with the default margin.
pub fn position(pointer: Point, viewport_height: f64) -> TooltipPlacement {
    TooltipPositioner::default().position(pointer, viewport_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_half_opens_upward() {
        let p = position(Point::new(100.0, 900.0), 1000.0);
        assert_eq!(p.vertical, VerticalAnchor::Up);
        assert_eq!(p.anchor, Point::new(110.0, 890.0));
    }

    #[test]
    fn top_half_opens_downward() {
        let p = position(Point::new(100.0, 100.0), 1000.0);
        assert_eq!(p.vertical, VerticalAnchor::Down);
        assert_eq!(p.anchor, Point::new(110.0, 110.0));
    }

    #[test]
    fn exact_midline_opens_downward() {
        let p = position(Point::new(0.0, 500.0), 1000.0);
        assert_eq!(p.vertical, VerticalAnchor::Down);
    }

    #[test]
    fn horizontal_offset_is_the_same_both_ways() {
        let pos = TooltipPositioner::new(2.0);
        let up = pos.position(Point::new(40.0, 30.0), 40.0);
        let down = pos.position(Point::new(40.0, 5.0), 40.0);
        assert_eq!(up.anchor.x, 42.0);
        assert_eq!(down.anchor.x, 42.0);
    }

    #[test]
    fn upward_overlay_is_shifted_by_its_height() {
        let p = TooltipPlacement {
            anchor: Point::new(10.0, 50.0),
            vertical: VerticalAnchor::Up,
        };
        assert_eq!(p.top_left(8.0), Point::new(10.0, 42.0));

        let p = TooltipPlacement {
            vertical: VerticalAnchor::Down,
            ..p
        };
        assert_eq!(p.top_left(8.0), Point::new(10.0, 50.0));
    }
}
