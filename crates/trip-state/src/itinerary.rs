//! Itinerary Expansion State
//!
//! One independent expanded flag per day. Days are numbered from 1.

#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryState {
    expanded: Vec<bool>,
}

impl ItineraryState {
    /// All days collapsed
    pub fn new(day_count: usize) -> Self {
        Self { expanded: vec![false; day_count] }
    }

    pub fn day_count(&self) -> usize {
        self.expanded.len()
    }

    fn slot(day: u8) -> Option<usize> {
        usize::from(day).checked_sub(1)
    }

    /// Flip a day's expansion. Returns the new flag, or `None` when the day
    /// does not exist.
    pub fn toggle_day(&mut self, day: u8) -> Option<bool> {
        let flag = self.expanded.get_mut(Self::slot(day)?)?;
        *flag = !*flag;
        Some(*flag)
    }

    pub fn is_expanded(&self, day: u8) -> bool {
        Self::slot(day)
            .and_then(|i| self.expanded.get(i))
            .copied()
            .unwrap_or(false)
    }

    /// Day numbers currently expanded, ascending
    pub fn expanded_days(&self) -> Vec<u8> {
        self.expanded
            .iter()
            .enumerate()
            .filter(|(_, open)| **open)
            .filter_map(|(i, _)| u8::try_from(i + 1).ok())
            .collect()
    }
}
