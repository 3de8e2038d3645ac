use std::time::Duration;

/// Visible share of an element at which scroll animations start.
pub const ANIMATE_ON_SCROLL_THRESHOLD: f64 = 0.1;
pub const SKILL_BAR_THRESHOLD: f64 = 0.5;
pub const SKILL_BAR_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    /// Seen by the observer, waiting for its delay to pass.
    Scheduled,
    Visible,
}

/// One-shot "appear when scrolled into view" state.
///
/// An element is observed until it first intersects; after that it is never
/// scheduled again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    threshold: f64,
    delay: Duration,
    phase: RevealPhase,
}

impl Reveal {
    pub fn new(threshold: f64, delay: Duration) -> Self {
        Self {
            threshold,
            delay,
            phase: RevealPhase::Hidden,
        }
    }

    /// Element carrying an animate-on-scroll attribute with an optional delay.
    pub fn animate_on_scroll(delay: Option<Duration>) -> Self {
        Self::new(ANIMATE_ON_SCROLL_THRESHOLD, delay.unwrap_or_default())
    }

    pub fn skill_bar() -> Self {
        Self::new(SKILL_BAR_THRESHOLD, SKILL_BAR_DELAY)
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Visible
    }

    /// Reports the element's visible ratio. Returns the delay after which
    /// [`fire`](Self::fire) should be called, the first time the threshold is
    /// reached.
    pub fn on_intersect(&mut self, ratio: f64) -> Option<Duration> {
        if self.phase != RevealPhase::Hidden || ratio <= 0.0 || ratio < self.threshold {
            return None;
        }
        self.phase = RevealPhase::Scheduled;
        Some(self.delay)
    }

    /// Completes a scheduled reveal. Returns `false` if nothing was scheduled.
    pub fn fire(&mut self) -> bool {
        if self.phase != RevealPhase::Scheduled {
            return false;
        }
        self.phase = RevealPhase::Visible;
        true
    }
}

/// Element that fades in with a named CSS animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedElement {
    pub animation: String,
    pub reveal: Reveal,
}

impl AnimatedElement {
    pub fn new(animation: impl Into<String>, delay: Option<Duration>) -> Self {
        Self {
            animation: animation.into(),
            reveal: Reveal::animate_on_scroll(delay),
        }
    }

    pub fn opacity(&self) -> &'static str {
        if self.reveal.is_visible() {
            "1"
        } else {
            "0"
        }
    }

    pub fn animation_style(&self) -> Option<String> {
        self.reveal
            .is_visible()
            .then(|| format!("{} 0.6s ease forwards", self.animation))
    }
}

/// Progress bar that grows to its target width once visible.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillBar {
    pub target_width: String,
    pub reveal: Reveal,
}

impl SkillBar {
    pub fn new(target_width: impl Into<String>) -> Self {
        Self {
            target_width: target_width.into(),
            reveal: Reveal::skill_bar(),
        }
    }

    pub fn width(&self) -> Option<&str> {
        self.reveal
            .is_visible()
            .then_some(self.target_width.as_str())
    }
}
