//! Packing Checklist State
//!
//! Tracks checked items and the one-way completion banner.

use crate::config::CHECKED_LABEL_OPACITY;

/// Checked count over total count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub checked: usize,
    pub total: usize,
}

impl Progress {
    /// Completion fraction in `0.0..=1.0`. An empty list counts as 0.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.checked as f64 / self.total as f64
    }

    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }
}

/// Result of a single checkbox change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckChange {
    pub progress: Progress,
    /// True only on the change that first shows the banner
    pub banner_inserted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistState {
    checked: Vec<bool>,
    banner_shown: bool,
}

impl ChecklistState {
    pub fn new(item_count: usize) -> Self {
        Self { checked: vec![false; item_count], banner_shown: false }
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    pub fn banner_shown(&self) -> bool {
        self.banner_shown
    }

    pub fn progress(&self) -> Progress {
        Progress {
            checked: self.checked.iter().filter(|c| **c).count(),
            total: self.checked.len(),
        }
    }

    /// Record a checkbox change and recompute progress.
    /// Returns `None` for an unknown item.
    pub fn set_checked(&mut self, index: usize, checked: bool) -> Option<CheckChange> {
        *self.checked.get_mut(index)? = checked;

        let progress = self.progress();
        let banner_inserted = progress.is_complete() && !self.banner_shown;
        if banner_inserted {
            self.banner_shown = true;
        }
        Some(CheckChange { progress, banner_inserted })
    }

    /// Label opacity for an item
    pub fn label_opacity(&self, index: usize) -> f64 {
        if self.is_checked(index) { CHECKED_LABEL_OPACITY } else { 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_progress() {
        let mut list = ChecklistState::new(4);
        list.set_checked(0, true);
        let change = list.set_checked(2, true).unwrap();
        assert_eq!(change.progress, Progress { checked: 2, total: 4 });
        assert_eq!(change.progress.fraction(), 0.5);
        assert_eq!(change.progress.percent(), 50.0);
        assert!(!change.banner_inserted);
        assert!(!list.banner_shown());
    }

    #[test]
    fn test_banner_iff_all_checked() {
        for n in 1..6usize {
            for k in 0..=n {
                let mut list = ChecklistState::new(n);
                let mut last = None;
                for i in 0..k {
                    last = list.set_checked(i, true);
                }
                assert_eq!(list.progress().fraction(), k as f64 / n as f64);
                assert_eq!(list.banner_shown(), k == n, "k={} n={}", k, n);
                if let Some(change) = last {
                    assert_eq!(change.banner_inserted, k == n);
                }
            }
        }
    }

    #[test]
    fn test_banner_inserted_once() {
        let mut list = ChecklistState::new(2);
        list.set_checked(0, true);
        assert!(list.set_checked(1, true).unwrap().banner_inserted);

        // banner stays after uncheck and is not re-inserted on recheck
        let change = list.set_checked(1, false).unwrap();
        assert!(!change.banner_inserted);
        assert!(list.banner_shown());
        let change = list.set_checked(1, true).unwrap();
        assert!(change.progress.is_complete());
        assert!(!change.banner_inserted);
    }

    #[test]
    fn test_unknown_item() {
        let mut list = ChecklistState::new(2);
        assert_eq!(list.set_checked(5, true), None);
        assert_eq!(list.progress().checked, 0);
    }

    #[test]
    fn test_empty_list_never_complete() {
        let list = ChecklistState::new(0);
        assert!(list.is_empty());
        assert_eq!(list.progress().fraction(), 0.0);
        assert!(!list.progress().is_complete());
    }

    #[test]
    fn test_label_opacity() {
        let mut list = ChecklistState::new(1);
        assert_eq!(list.label_opacity(0), 1.0);
        list.set_checked(0, true);
        assert_eq!(list.label_opacity(0), 0.6);
    }
}
