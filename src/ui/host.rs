//! In-process host document.
//!
//! Mounts a [`Markup`] tree and plays the part of the browser: it resolves
//! node references, lets callers type into fields, and dispatches submit
//! events to the handlers components attached.

use tracing::debug;

use crate::error::{Error, Result};

use super::form::SubmitEvent;
use super::markup::{Element, Markup, NodeRef};

/// A mounted markup tree.
#[derive(Debug, Clone)]
pub struct Document {
    root: Markup,
}

impl Document {
    /// Mount a rendered tree.
    #[must_use]
    pub fn mount(root: Markup) -> Self {
        Self { root }
    }

    /// Root of the mounted tree.
    #[must_use]
    pub fn root(&self) -> &Markup {
        &self.root
    }

    /// Serialize the current tree to HTML.
    #[must_use]
    pub fn html(&self) -> String {
        self.root.to_html()
    }

    /// Element carrying `node_ref`, if it was attached anywhere in the tree.
    #[must_use]
    pub fn resolve(&self, node_ref: NodeRef) -> Option<&Element> {
        self.root.find(&|el| el.attached_ref() == Some(node_ref))
    }

    /// Type `value` into the first field named `name`.
    pub fn fill(&mut self, name: &str, value: &str) -> Result<()> {
        let field = self
            .root
            .find_mut(&|el| {
                matches!(el.tag(), "input" | "textarea") && el.get_attr("name") == Some(name)
            })
            .ok_or_else(|| Error::ElementNotFound(format!("field '{name}'")))?;

        if field.tag() == "textarea" {
            field.set_text(value);
        } else {
            field.set_attr("value", value);
        }
        Ok(())
    }

    /// Dispatch a submit event on the first form and return it.
    ///
    /// Submission goes through regardless of any disabled submit control.
    pub fn submit(&self) -> Result<SubmitEvent> {
        let form = self
            .root
            .find(&|el| el.tag() == "form")
            .ok_or_else(|| Error::ElementNotFound("form".to_string()))?;
        Ok(dispatch_submit(form))
    }

    /// Click the first submit button.
    ///
    /// Returns `None` when the button is disabled: the click never reaches
    /// the form.
    pub fn click_submit(&self) -> Result<Option<SubmitEvent>> {
        let form = self
            .root
            .find(&|el| el.tag() == "form" && find_submit_button(el).is_some())
            .ok_or_else(|| Error::ElementNotFound("submit button".to_string()))?;
        let disabled = find_submit_button(form).is_some_and(|button| button.has_flag("disabled"));

        if disabled {
            debug!(name: "host.click.ignored", "Submit button is disabled");
            return Ok(None);
        }
        Ok(Some(dispatch_submit(form)))
    }
}

fn find_submit_button(form: &Element) -> Option<&Element> {
    form.child_nodes().iter().find_map(|child| {
        child.find(&|el| {
            (el.tag() == "button" && el.get_attr("type").unwrap_or("submit") == "submit")
                || (el.tag() == "input" && el.get_attr("type") == Some("submit"))
        })
    })
}

fn dispatch_submit(form: &Element) -> SubmitEvent {
    let mut event = SubmitEvent::new(form.clone());
    if let Some(handler) = form.submit_handler() {
        handler(&mut event);
    }
    debug!(
        name: "host.submit.dispatched",
        default_prevented = event.default_prevented(),
        "Submit event dispatched"
    );
    event
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::ui::form::FormData;

    fn form_with_counter(counter: &Arc<AtomicUsize>, disabled: bool) -> Markup {
        let counter = Arc::clone(counter);
        Element::new("form")
            .on_submit(Arc::new(move |event: &mut SubmitEvent| {
                event.prevent_default();
                counter.fetch_add(1, Ordering::SeqCst);
            }))
            .child(Element::new("input").attr("name", "message"))
            .child(Element::new("textarea").attr("name", "notes"))
            .child(
                Element::new("button")
                    .attr("type", "submit")
                    .flag("disabled", disabled)
                    .child("Send"),
            )
            .into()
    }

    #[test]
    fn test_fill_and_submit() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut doc = Document::mount(form_with_counter(&counter, false));

        doc.fill("message", "hello").unwrap();
        doc.fill("notes", "more").unwrap();
        let event = doc.submit().unwrap();

        assert!(event.default_prevented());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        let data = FormData::from(&event);
        assert_eq!(data.get("message"), Some("hello"));
        assert_eq!(data.get("notes"), Some("more"));
    }

    #[test]
    fn test_click_disabled_button_is_noop() {
        let counter = Arc::new(AtomicUsize::new(0));
        let doc = Document::mount(form_with_counter(&counter, true));

        assert!(doc.click_submit().unwrap().is_none());
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        // Enter-key style submission bypasses the button.
        assert!(doc.submit().unwrap().default_prevented());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_submit_without_handler_keeps_default() {
        let doc = Document::mount(Element::new("form").into());
        assert!(!doc.submit().unwrap().default_prevented());
    }

    #[test]
    fn test_missing_targets() {
        let mut doc = Document::mount(Element::new("div").into());
        assert!(matches!(doc.submit(), Err(Error::ElementNotFound(_))));
        assert!(matches!(doc.click_submit(), Err(Error::ElementNotFound(_))));
        assert!(matches!(
            doc.fill("message", "x"),
            Err(Error::ElementNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_node_ref() {
        let node_ref = NodeRef::new();
        let doc = Document::mount(
            Element::new("div")
                .child(Element::new("form").node_ref(Some(node_ref)))
                .into(),
        );

        assert_eq!(doc.resolve(node_ref).map(Element::tag), Some("form"));
        assert!(doc.resolve(NodeRef::new()).is_none());
    }
}
