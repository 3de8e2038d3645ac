use std::{
    collections::BTreeMap,
    convert::Infallible,
    str::FromStr,
    time::{Duration, Instant},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::SubmitButton;

pub const DEFAULT_SEARCH_LABEL: &str = "Search Properties";
pub const DEFAULT_SEARCH_BUSY_LABEL: &str = "Searching...";
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyCard {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub favorite: bool,
}

/// Value of a filter button; `all` shows every card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PropertyFilter {
    #[default]
    All,
    Category(String),
}

impl PropertyFilter {
    pub fn matches(&self, card: &PropertyCard) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => card.category == *category,
        }
    }
}

impl FromStr for PropertyFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => Self::All,
            category => Self::Category(category.into()),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// Derives the mode from a view toggle button label ("List View",
    /// "Grid View", ...).
    pub fn from_button_label(label: &str) -> Self {
        if label.contains("List") {
            Self::List
        } else {
            Self::Grid
        }
    }
}

/// The property cards on a page together with the active filter and layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyListing {
    cards: Vec<PropertyCard>,
    filter: PropertyFilter,
    view_mode: ViewMode,
}

impl PropertyListing {
    pub fn new(cards: Vec<PropertyCard>) -> Self {
        Self {
            cards,
            ..Default::default()
        }
    }

    pub fn cards(&self) -> &[PropertyCard] {
        &self.cards
    }

    pub fn filter(&self) -> &PropertyFilter {
        &self.filter
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_filter(&mut self, filter: PropertyFilter) {
        self.filter = filter;
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.cards
            .get(index)
            .is_some_and(|card| self.filter.matches(card))
    }

    pub fn visible(&self) -> impl Iterator<Item = &PropertyCard> {
        self.cards.iter().filter(|card| self.filter.matches(card))
    }

    /// Flips the favourite flag of the card at `index` and returns the new
    /// value, or `None` if there is no such card.
    pub fn toggle_favorite(&mut self, index: usize) -> Option<bool> {
        let card = self.cards.get_mut(index)?;
        card.favorite = !card.favorite;
        Some(card.favorite)
    }
}

/// Named values of the search form fields.
pub type SearchCriteria = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("A property search is already running")]
pub struct PropertySearchBusyError;

/// Search form whose button shows a busy label while a search runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySearch {
    submit_label: String,
    busy_label: String,
    delay: Duration,
    pending: Option<(SearchCriteria, Instant)>,
}

impl Default for PropertySearch {
    fn default() -> Self {
        Self::new(
            DEFAULT_SEARCH_LABEL,
            DEFAULT_SEARCH_BUSY_LABEL,
            DEFAULT_SEARCH_DELAY,
        )
    }
}

impl PropertySearch {
    pub fn new(
        submit_label: impl Into<String>,
        busy_label: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            submit_label: submit_label.into(),
            busy_label: busy_label.into(),
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn button(&self) -> SubmitButton {
        if self.is_busy() {
            SubmitButton::busy(&self.busy_label)
        } else {
            SubmitButton::ready(&self.submit_label)
        }
    }

    /// Starts a search. Refused while the previous one is still running.
    pub fn submit(
        &mut self,
        now: Instant,
        criteria: SearchCriteria,
    ) -> Result<(), PropertySearchBusyError> {
        if self.is_busy() {
            return Err(PropertySearchBusyError);
        }
        self.pending = Some((criteria, now));
        Ok(())
    }

    /// Returns the criteria of the running search once its delay has passed
    /// and restores the button.
    pub fn poll(&mut self, now: Instant) -> Option<SearchCriteria> {
        let (_, started_at) = self.pending.as_ref()?;
        if now.saturating_duration_since(*started_at) < self.delay {
            return None;
        }
        self.pending.take().map(|(criteria, _)| criteria)
    }
}
