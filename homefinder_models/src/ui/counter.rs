use std::fmt;

pub const DEFAULT_MAX_CHARS: usize = 1000;

/// Live "n/max characters" hint under a text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterCounter {
    max: usize,
}

impl Default for CharacterCounter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHARS)
    }
}

impl CharacterCounter {
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn render(&self, text: &str) -> CounterView {
        let length = text.chars().count();
        CounterView {
            length,
            max: self.max,
            // more than 90% of the limit
            warning: length * 10 > self.max * 9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterView {
    pub length: usize,
    pub max: usize,
    pub warning: bool,
}

impl fmt::Display for CounterView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} characters", self.length, self.max)
    }
}
