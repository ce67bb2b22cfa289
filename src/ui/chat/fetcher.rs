//! The fetcher capability a chat form submits through.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ui::form::FormData;
use crate::ui::markup::Markup;

/// In-flight status reported by a fetcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetcherState {
    /// Nothing in flight.
    #[default]
    Idle,
    /// A submission is in flight.
    Loading,
}

impl FetcherState {
    /// Lowercase name, as used in markup and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
        }
    }
}

impl fmt::Display for FetcherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied submission plumbing for a chat form.
///
/// Implementations own the transport. The form only calls [`submit`],
/// encloses its markup with [`wrap`], and reads [`state`] once per render.
///
/// [`submit`]: ChatFetcher::submit
/// [`wrap`]: ChatFetcher::wrap
/// [`state`]: ChatFetcher::state
pub trait ChatFetcher: Send + Sync {
    /// Fire-and-forget submission of the form's fields.
    fn submit(&self, data: FormData);

    /// Enclose the form markup.
    fn wrap(&self, children: Markup) -> Markup;

    /// Current status.
    fn state(&self) -> FetcherState;
}
