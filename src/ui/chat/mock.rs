//! Recording fetcher for stories and tests.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use crate::ui::form::FormData;
use crate::ui::markup::{Element, Markup};

use super::fetcher::{ChatFetcher, FetcherState};

/// Fetcher with a fixed status that logs and records every submission.
///
/// Wraps the form in a plain `<div>`.
#[derive(Debug, Default)]
pub struct MockFetcher {
    state: FetcherState,
    submissions: Mutex<Vec<FormData>>,
}

impl MockFetcher {
    /// Mock reporting `state` on every render.
    #[must_use]
    pub fn new(state: FetcherState) -> Self {
        Self {
            state,
            submissions: Mutex::new(Vec::new()),
        }
    }

    /// Payloads received so far, oldest first.
    #[must_use]
    pub fn submissions(&self) -> Vec<FormData> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ChatFetcher for MockFetcher {
    fn submit(&self, data: FormData) {
        info!(
            name: "chat.fetcher.submitted",
            state = %self.state,
            fields = data.len(),
            "submitted"
        );
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(data);
    }

    fn wrap(&self, children: Markup) -> Markup {
        Element::new("div").child(children).into()
    }

    fn state(&self) -> FetcherState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_submissions_in_order() {
        let fetcher = MockFetcher::new(FetcherState::Loading);
        assert_eq!(fetcher.state(), FetcherState::Loading);

        let mut first = FormData::new();
        first.append("message", "one");
        let mut second = FormData::new();
        second.append("message", "two");
        fetcher.submit(first);
        fetcher.submit(second);

        let seen = fetcher.submissions();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].get("message"), Some("one"));
        assert_eq!(seen[1].get("message"), Some("two"));
    }

    #[test]
    fn test_wrap_in_div() {
        let fetcher = MockFetcher::default();
        assert_eq!(fetcher.wrap("x".into()).to_html(), "<div>x</div>");
    }
}
