//! Stories for the chat form.

use std::sync::Arc;

use crate::ui::chat::{ChatFetcher, ChatForm, DEFAULT_PLACEHOLDER, FetcherState, MockFetcher};
use crate::ui::markup::{Markup, NodeRef};

use super::{Catalog, ChatArgs, Story};

/// Catalog title.
pub const TITLE: &str = "Bug/Chat";

/// Fresh recording fetcher reporting `state`.
#[must_use]
pub fn create_mock_fetcher(state: FetcherState) -> Arc<dyn ChatFetcher> {
    Arc::new(MockFetcher::new(state))
}

/// The chat form catalog.
///
/// - `default`: inherits every default arg.
/// - `loading`: a loading fetcher and a "Sending..." placeholder.
/// - `working-with-render`: only the placeholder comes from args; the
///   fetcher and form reference are created inside the render call.
#[must_use]
pub fn catalog() -> Catalog {
    let defaults = ChatArgs::default()
        .with_fetcher(create_mock_fetcher(FetcherState::Idle))
        .with_form_ref(NodeRef::new())
        .with_placeholder(DEFAULT_PLACEHOLDER);

    Catalog::new(TITLE, defaults)
        .story(Story::new("default", "Default"))
        .story(
            Story::new("loading", "Loading").args(
                ChatArgs::default()
                    .with_fetcher(create_mock_fetcher(FetcherState::Loading))
                    .with_placeholder("Sending..."),
            ),
        )
        .story(
            Story::new("working-with-render", "WorkingWithRender")
                .args(ChatArgs::default().with_placeholder("Type here..."))
                .render_with(render_with_fresh_dependencies),
        )
}

fn render_with_fresh_dependencies(args: ChatArgs) -> Markup {
    ChatForm::new(create_mock_fetcher(FetcherState::Idle))
        .form_ref(Some(NodeRef::new()))
        .placeholder(args.placeholder)
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::chat::MESSAGE_FIELD;
    use crate::ui::form::FormData;
    use crate::ui::host::Document;

    fn placeholder_of(markup: &Markup) -> Option<String> {
        markup
            .find(&|el| el.get_attr("name") == Some(MESSAGE_FIELD))
            .and_then(|el| el.get_attr("placeholder"))
            .map(str::to_string)
    }

    fn submit_disabled(markup: &Markup) -> bool {
        markup
            .find(&|el| el.tag() == "button")
            .is_some_and(|el| el.has_flag("disabled"))
    }

    #[test]
    fn test_story_ids_in_order() {
        let ids: Vec<_> = catalog().stories().iter().map(Story::id).collect();
        assert_eq!(ids, vec!["default", "loading", "working-with-render"]);
    }

    #[test]
    fn test_default_story() {
        let markup = catalog().render("default").unwrap();
        assert_eq!(placeholder_of(&markup).as_deref(), Some("Type a message..."));
        assert!(!submit_disabled(&markup));
    }

    #[test]
    fn test_loading_story() {
        let catalog = catalog();
        let markup = catalog.render("loading").unwrap();
        assert_eq!(placeholder_of(&markup).as_deref(), Some("Sending..."));
        assert!(submit_disabled(&markup));

        let doc = Document::mount(markup);
        assert!(doc.click_submit().unwrap().is_none());
    }

    #[test]
    fn test_working_with_render_story() {
        let catalog = catalog();
        let mut doc = Document::mount(catalog.render("working-with-render").unwrap());

        assert_eq!(placeholder_of(doc.root()).as_deref(), Some("Type here..."));
        assert!(!submit_disabled(doc.root()));

        doc.fill(MESSAGE_FIELD, "hello").unwrap();
        assert!(doc.click_submit().unwrap().unwrap().default_prevented());
    }

    #[test]
    fn test_working_with_render_accepts_submissions() {
        let catalog = catalog();
        let mut data = FormData::new();
        data.append(MESSAGE_FIELD, "hello");

        catalog.submit("working-with-render", &data).unwrap();
    }

    #[test]
    fn test_default_story_attaches_shared_form_ref() {
        let catalog = catalog();
        let form_ref = catalog.args("default").unwrap().form_ref.unwrap();
        let doc = Document::mount(catalog.render("default").unwrap());
        assert_eq!(doc.resolve(form_ref).map(|el| el.tag()), Some("form"));
    }

    #[test]
    fn test_controls_only_carry_placeholder() {
        let controls = catalog().controls("loading").unwrap();
        assert_eq!(controls["title"], "Bug/Chat");
        assert_eq!(controls["name"], "Loading");
        assert_eq!(
            controls["args"],
            serde_json::json!({ "placeholder": "Sending..." })
        );
    }
}
