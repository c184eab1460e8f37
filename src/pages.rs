//! Dashboard pages and their panel indicators
//!
//! Every page owns exactly one indicator button on the panel bar. Pages and
//! indicators are created together from the configured page names and share
//! the same index, so the two lists can never drift apart.

use serde::Serialize;

use crate::config::ConfigError;
use crate::slide::Visibility;

/// Panel button bound to a dashboard page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub label: String,
    /// Index of the page this indicator switches to
    pub index: usize,
}

/// A dashboard page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub name: String,
    pub indicator: Indicator,
    /// Activity happened on this page while it was out of view
    pub notified: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("page index {index} out of range ({len} pages)")]
    OutOfRange { index: usize, len: usize },
}

/// Ordered pages with exactly one current page
#[derive(Debug, Clone)]
pub struct PageStack {
    pages: Vec<Page>,
    current: usize,
}

impl PageStack {
    /// Build one page and indicator per name; the first page is current
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::NoPages);
        }

        let pages = names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let name = name.as_ref().to_string();
                Page {
                    indicator: Indicator {
                        label: name.clone(),
                        index,
                    },
                    name,
                    notified: false,
                }
            })
            .collect();

        Ok(Self { pages, current: 0 })
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn indicators(&self) -> impl Iterator<Item = &Indicator> {
        self.pages.iter().map(|p| &p.indicator)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &Page {
        &self.pages[self.current]
    }

    /// Make the page at `index` current
    ///
    /// An out-of-range index means the indicator and page lists diverged,
    /// which is a bug: debug builds panic, release builds keep the current
    /// page and report the error.
    pub fn select(&mut self, index: usize) -> Result<(), PageError> {
        debug_assert!(
            index < self.pages.len(),
            "page index {} out of range ({} pages)",
            index,
            self.pages.len()
        );

        if index >= self.pages.len() {
            return Err(PageError::OutOfRange {
                index,
                len: self.pages.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Flag activity on a page so its indicator can draw attention
    pub fn notify(&mut self, index: usize) -> Result<(), PageError> {
        let len = self.pages.len();
        let page = self
            .pages
            .get_mut(index)
            .ok_or(PageError::OutOfRange { index, len })?;
        page.notified = true;
        Ok(())
    }

    /// Clear the activity flag of the current page (it is now being looked at)
    pub fn acknowledge_current(&mut self) {
        self.pages[self.current].notified = false;
    }
}

/// What an indicator click should do to the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorAction {
    /// Clicked the current page while it is in view
    Hide,
    /// Clicked the current page while it is out of view
    Show,
    /// Clicked another page while the dashboard is hidden
    SwitchAndShow(usize),
    /// Clicked another page while the dashboard is shown
    Switch(usize),
}

/// Resolve an indicator click against the current page and visibility
///
/// Switching pages while hidden also brings the dashboard into view;
/// switching while shown never hides it.
pub fn resolve_click(clicked: usize, current: usize, visibility: Visibility) -> IndicatorAction {
    match (clicked == current, visibility) {
        (true, Visibility::Shown) => IndicatorAction::Hide,
        (true, Visibility::Hidden) => IndicatorAction::Show,
        (false, Visibility::Hidden) => IndicatorAction::SwitchAndShow(clicked),
        (false, Visibility::Shown) => IndicatorAction::Switch(clicked),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_names_pairs_indicators() {
        let stack = PageStack::from_names(&["Home", "System", "Network"]).unwrap();
        assert_eq!(stack.len(), 3);
        assert!(!stack.is_empty());
        assert_eq!(stack.current_index(), 0);
        for (i, indicator) in stack.indicators().enumerate() {
            assert_eq!(indicator.index, i);
            assert_eq!(indicator.label, stack.pages()[i].name);
        }
    }

    #[test]
    fn test_empty_names_rejected() {
        let names: [&str; 0] = [];
        assert!(matches!(
            PageStack::from_names(&names),
            Err(ConfigError::NoPages)
        ));
    }

    #[test]
    fn test_notify_and_acknowledge() {
        let mut stack = PageStack::from_names(&["A", "B"]).unwrap();
        stack.notify(1).unwrap();
        assert!(stack.pages()[1].notified);

        stack.select(1).unwrap();
        stack.acknowledge_current();
        assert!(!stack.pages()[1].notified);
    }

    #[test]
    fn test_notify_out_of_range() {
        let mut stack = PageStack::from_names(&["A"]).unwrap();
        assert_eq!(
            stack.notify(4),
            Err(PageError::OutOfRange { index: 4, len: 1 })
        );
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn test_select_out_of_range_keeps_current_in_release() {
        let mut stack = PageStack::from_names(&["A", "B"]).unwrap();
        stack.select(1).unwrap();
        assert!(stack.select(7).is_err());
        assert_eq!(stack.current_index(), 1);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "out of range")]
    fn test_select_out_of_range_panics_in_debug() {
        let mut stack = PageStack::from_names(&["A", "B"]).unwrap();
        let _ = stack.select(7);
    }
}
