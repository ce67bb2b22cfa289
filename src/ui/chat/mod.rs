//! Chat-specific UI components.
//!
//! [`ChatForm`] renders a message input and a send button and hands every
//! submission to a caller-supplied [`ChatFetcher`].

mod fetcher;
mod form;
mod mock;

pub use fetcher::{ChatFetcher, FetcherState};
pub use form::{ChatForm, DEFAULT_PLACEHOLDER, MESSAGE_FIELD, MESSAGE_LABEL, handle_submit};
pub use mock::MockFetcher;
