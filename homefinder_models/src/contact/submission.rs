use std::fmt;

use serde::Serialize;

/// Where a contact form is in its submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Whether the lifecycle may move from `self` to `next`.
    ///
    /// Returning to [`Idle`](Self::Idle) is always allowed (explicit reset).
    pub fn can_transition_to(self, next: Self) -> bool {
        use SubmissionState::*;

        matches!(
            (self, next),
            (_, Idle)
                | (Idle, Validating)
                | (Validating, Submitting)
                | (Submitting, Succeeded)
                | (Submitting, Failed)
        )
    }

    /// A new submit attempt is only taken while the form is idle.
    pub fn accepts_submit(self) -> bool {
        self == Self::Idle
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Submitting => "submitting",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubmissionTransition {
    pub from: SubmissionState,
    pub to: SubmissionState,
}

impl fmt::Display for SubmissionTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitButton {
    pub label: String,
    pub enabled: bool,
}

impl SubmitButton {
    pub fn ready(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: true,
        }
    }

    pub fn busy(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            enabled: false,
        }
    }
}
