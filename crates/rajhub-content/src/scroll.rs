//! Scroll Helpers
//!
//! Pure calculations behind the video carousel arrows, the blog reading
//! progress bar and the sticky header.

/// Default horizontal step of the carousel arrows
pub const CAROUSEL_STEP_PX: f64 = 380.0;
/// Slack at the right edge before the "next" arrow is disabled
pub const EDGE_TOLERANCE_PX: f64 = 10.0;
/// Vertical offset after which the header switches to its compact style
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Snapshot of a horizontally scrollable element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    pub fn can_scroll_left(&self) -> bool {
        self.scroll_left > 0.0
    }

    pub fn can_scroll_right(&self) -> bool {
        self.can_scroll_right_with(EDGE_TOLERANCE_PX)
    }

    pub fn can_scroll_right_with(&self, tolerance: f64) -> bool {
        self.scroll_left < self.scroll_width - self.client_width - tolerance
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    /// Signed offset to pass to `scrollBy`
    pub fn offset(self, amount: f64) -> f64 {
        match self {
            ScrollDirection::Left => -amount,
            ScrollDirection::Right => amount,
        }
    }
}

/// Fraction of the document scrolled past, in `[0, 1]`
pub fn reading_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_edges() {
        let start = ScrollMetrics { scroll_left: 0.0, scroll_width: 2000.0, client_width: 800.0 };
        assert!(!start.can_scroll_left());
        assert!(start.can_scroll_right());

        let middle = ScrollMetrics { scroll_left: 400.0, ..start };
        assert!(middle.can_scroll_left());
        assert!(middle.can_scroll_right());

        // within the 10px tolerance of the end
        let end = ScrollMetrics { scroll_left: 1195.0, ..start };
        assert!(end.can_scroll_left());
        assert!(!end.can_scroll_right());
    }

    #[test]
    fn test_content_narrower_than_viewport() {
        let m = ScrollMetrics { scroll_left: 0.0, scroll_width: 500.0, client_width: 800.0 };
        assert!(!m.can_scroll_left());
        assert!(!m.can_scroll_right());
    }

    #[test]
    fn test_direction_offset() {
        assert_eq!(ScrollDirection::Left.offset(CAROUSEL_STEP_PX), -380.0);
        assert_eq!(ScrollDirection::Right.offset(CAROUSEL_STEP_PX), 380.0);
    }

    #[test]
    fn test_reading_progress() {
        assert_eq!(reading_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(reading_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(reading_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(reading_progress(-20.0, 3000.0, 1000.0), 0.0);
        // page fits the viewport
        assert_eq!(reading_progress(10.0, 800.0, 1000.0), 0.0);
    }

    #[test]
    fn test_header_threshold() {
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
    }
}
