/// FAQ list where at most one answer is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    len: usize,
    active: Option<usize>,
}

impl FaqAccordion {
    pub fn new(len: usize) -> Self {
        Self { len, active: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Click (or Enter) on the question at `index`: opens it and closes all
    /// others, or closes it if it was already open. Out of range indices are
    /// ignored.
    pub fn click(&mut self, index: usize) -> Option<usize> {
        if index < self.len {
            self.active = (!self.is_open(index)).then_some(index);
        }
        self.active
    }

    pub fn escape_pressed(&mut self) {
        self.active = None;
    }
}
