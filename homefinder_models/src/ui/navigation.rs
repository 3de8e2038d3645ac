use std::time::{Duration, Instant};

use homefinder_utils::gate::Throttle;

/// Distance below the top of the viewport at which a section counts as
/// current.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(100);

/// The collapsible mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    focus_requested: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The page body must not scroll while the menu covers it.
    pub fn body_scroll_locked(&self) -> bool {
        self.open
    }

    /// Hamburger button click. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.focus_requested = self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
        self.focus_requested = false;
    }

    pub fn link_clicked(&mut self) {
        self.close();
    }

    /// Click anywhere outside both the menu and its toggle.
    pub fn outside_clicked(&mut self) {
        self.close();
    }

    pub fn escape_pressed(&mut self) {
        self.close();
    }

    /// Returns `true` once after the menu opened, telling the presentation
    /// layer to focus the first link.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: Option<String>,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: Some(id.into()),
            top,
            height,
        }
    }

    fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Tracks which section the navigation highlights while scrolling.
#[derive(Debug, Clone)]
pub struct ActiveSectionTracker {
    throttle: Throttle,
    active: Option<String>,
}

impl Default for ActiveSectionTracker {
    fn default() -> Self {
        Self::new(SCROLL_THROTTLE)
    }
}

impl ActiveSectionTracker {
    pub fn new(throttle: Duration) -> Self {
        Self {
            throttle: Throttle::new(throttle),
            active: None,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Handles a scroll event. Events arriving faster than the throttle limit
    /// are ignored. When no section contains the scroll position the previous
    /// highlight stays.
    ///
    /// Returns `true` if the scroll event was handled.
    pub fn on_scroll(&mut self, now: Instant, scroll_y: f64, sections: &[Section]) -> bool {
        if !self.throttle.try_pass(now) {
            return false;
        }

        let position = scroll_y + ACTIVE_SECTION_OFFSET;
        if let Some(section) = sections.iter().rev().find(|s| s.contains(position)) {
            self.active = section.id.clone();
        }
        true
    }

    /// Whether the navigation link pointing at `href` is highlighted.
    pub fn is_link_active(&self, href: &str) -> bool {
        self.active.as_deref().is_some_and(|id| href.contains(id))
    }
}
