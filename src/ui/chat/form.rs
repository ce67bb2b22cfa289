//! Chat input form.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::ui::components::{Button, TextInput};
use crate::ui::form::{FormData, SubmitEvent};
use crate::ui::markup::{Element, Markup, NodeRef};

use super::fetcher::{ChatFetcher, FetcherState};

/// Placeholder used when the caller does not supply one.
pub const DEFAULT_PLACEHOLDER: &str = "Type a message...";

/// Name of the text field holding the typed message.
pub const MESSAGE_FIELD: &str = "message";

/// Accessible label of the message field.
pub const MESSAGE_LABEL: &str = "Message";

/// Chat message form.
///
/// Stateless: every render reads the fetcher's status afresh and the
/// submit handler forwards straight to [`ChatFetcher::submit`].
///
/// # Example
///
/// ```rust,ignore
/// let markup = ChatForm::new(fetcher)
///     .form_ref(Some(form_ref))
///     .placeholder("Ask anything...")
///     .render();
/// ```
#[derive(Clone)]
pub struct ChatForm {
    fetcher: Arc<dyn ChatFetcher>,
    form_ref: Option<NodeRef>,
    placeholder: Option<String>,
}

impl fmt::Debug for ChatForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatForm")
            .field("state", &self.fetcher.state())
            .field("form_ref", &self.form_ref)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

impl ChatForm {
    /// Form submitting through `fetcher`.
    #[must_use]
    pub fn new(fetcher: Arc<dyn ChatFetcher>) -> Self {
        Self {
            fetcher,
            form_ref: None,
            placeholder: None,
        }
    }

    /// Reference attached to the `<form>` element.
    #[must_use]
    pub fn form_ref(mut self, form_ref: Option<NodeRef>) -> Self {
        self.form_ref = form_ref;
        self
    }

    /// Input placeholder; `None` keeps [`DEFAULT_PLACEHOLDER`].
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<Option<String>>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Render the form enclosed in the fetcher's wrapper.
    #[must_use]
    pub fn render(self) -> Markup {
        let loading = self.fetcher.state() == FetcherState::Loading;
        let placeholder = self
            .placeholder
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

        let fetcher = Arc::clone(&self.fetcher);
        let form = Element::new("form")
            .attr("class", "flex gap-2")
            .node_ref(self.form_ref)
            .on_submit(Arc::new(move |event: &mut SubmitEvent| {
                handle_submit(fetcher.as_ref(), event);
            }))
            .child(
                TextInput::new(MESSAGE_FIELD)
                    .placeholder(placeholder)
                    .label(MESSAGE_LABEL)
                    .class("flex-1")
                    .render(),
            )
            .child(
                Button::new()
                    .button_type("submit")
                    .disabled(loading)
                    .class("shrink-0")
                    .render("Send"),
            );

        self.fetcher.wrap(form.into())
    }
}

/// Submit handler installed on the rendered form.
///
/// Suppresses navigation, snapshots the form fields, and submits them once.
pub fn handle_submit(fetcher: &dyn ChatFetcher, event: &mut SubmitEvent) {
    event.prevent_default();
    let data = FormData::from(&*event);
    debug!(
        name: "chat.form.submit",
        fields = data.len(),
        "Forwarding chat form submission"
    );
    fetcher.submit(data);
}
