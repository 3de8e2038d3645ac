pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
pub const PARALLAX_RATE: f64 = -0.3;
pub const DEFAULT_HEADER_HEIGHT: f64 = 80.0;
pub const SCROLL_TARGET_MARGIN: f64 = 20.0;

/// Look of the sticky page header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Top,
    Scrolled,
}

impl HeaderStyle {
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > HEADER_SCROLL_THRESHOLD {
            Self::Scrolled
        } else {
            Self::Top
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Top => "rgba(255, 255, 255, 0.95)",
            Self::Scrolled => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            Self::Top => "0 2px 10px rgba(0, 0, 0, 0.1)",
            Self::Scrolled => "0 2px 20px rgba(0, 0, 0, 0.15)",
        }
    }
}

/// Vertical translation of the hero section for a parallax effect.
pub fn parallax_offset(scroll_y: f64) -> f64 {
    scroll_y * PARALLAX_RATE
}

/// Scroll position that puts an anchor target just below the sticky header.
pub fn smooth_scroll_target(target_top: f64, header_height: Option<f64>) -> f64 {
    target_top - header_height.unwrap_or(DEFAULT_HEADER_HEIGHT) - SCROLL_TARGET_MARGIN
}
