//! Story catalog.
//!
//! A [`Catalog`] holds component-level default args plus named stories.
//! Each story's args are merged over the defaults field by field. Stories
//! render either straight from their merged args or through a custom render
//! function that may build its own dependencies.
//!
//! Only serializable args are exported as controls. The fetcher and the form
//! reference are skipped, so exporting controls never has to walk a
//! function or a live handle.
//!
//! # Example
//!
//! ```rust
//! use chat_stories::stories;
//!
//! let catalog = stories::chat::catalog();
//! let markup = catalog.render("default").unwrap();
//! assert!(markup.to_html().contains(r#"placeholder="Type a message...""#));
//! ```

pub mod chat;

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::ui::chat::{ChatFetcher, ChatForm};
use crate::ui::form::FormData;
use crate::ui::host::Document;
use crate::ui::markup::{Markup, NodeRef};

/// Inputs a story passes to the chat form.
#[derive(Clone, Default, Serialize)]
pub struct ChatArgs {
    /// Submission plumbing. Never serialized.
    #[serde(skip)]
    pub fetcher: Option<Arc<dyn ChatFetcher>>,
    /// Reference attached to the rendered form. Never serialized.
    #[serde(skip)]
    pub form_ref: Option<NodeRef>,
    /// Input placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl fmt::Debug for ChatArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatArgs")
            .field("fetcher", &self.fetcher.as_ref().map(|fetcher| fetcher.state()))
            .field("form_ref", &self.form_ref)
            .field("placeholder", &self.placeholder)
            .finish()
    }
}

impl ChatArgs {
    /// Set the fetcher.
    #[must_use]
    pub fn with_fetcher(mut self, fetcher: Arc<dyn ChatFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Set the form reference.
    #[must_use]
    pub fn with_form_ref(mut self, form_ref: NodeRef) -> Self {
        self.form_ref = Some(form_ref);
        self
    }

    /// Set the placeholder.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Fields set here win; unset fields fall back to `base`.
    #[must_use]
    pub fn merged_over(self, base: &ChatArgs) -> ChatArgs {
        ChatArgs {
            fetcher: self.fetcher.or_else(|| base.fetcher.as_ref().map(Arc::clone)),
            form_ref: self.form_ref.or(base.form_ref),
            placeholder: self.placeholder.or_else(|| base.placeholder.clone()),
        }
    }
}

/// Custom story render function.
pub type RenderFn = fn(ChatArgs) -> Markup;

/// How a story turns its args into markup.
#[derive(Debug, Clone, Copy)]
pub enum StoryRender {
    /// Render the chat form from the merged args.
    FromArgs,
    /// Hand the merged args to a custom function.
    Custom(RenderFn),
}

/// A single named story.
#[derive(Debug, Clone)]
pub struct Story {
    id: &'static str,
    name: &'static str,
    args: ChatArgs,
    render: StoryRender,
}

impl Story {
    /// Story with no args of its own, rendered from args.
    #[must_use]
    pub fn new(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            args: ChatArgs::default(),
            render: StoryRender::FromArgs,
        }
    }

    /// Story-level args, merged over the catalog defaults.
    #[must_use]
    pub fn args(mut self, args: ChatArgs) -> Self {
        self.args = args;
        self
    }

    /// Use a custom render function.
    #[must_use]
    pub fn render_with(mut self, render: RenderFn) -> Self {
        self.render = StoryRender::Custom(render);
        self
    }

    /// URL-safe identifier.
    #[must_use]
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Serializable view of a story's args.
#[derive(Debug, Serialize)]
pub struct StoryControls<'a> {
    /// Catalog title.
    pub title: &'static str,
    /// Story id.
    pub id: &'static str,
    /// Story display name.
    pub name: &'static str,
    /// Merged args (serializable fields only).
    pub args: &'a ChatArgs,
}

/// Component metadata and its stories.
#[derive(Debug, Clone)]
pub struct Catalog {
    title: &'static str,
    args: ChatArgs,
    stories: Vec<Story>,
}

impl Catalog {
    /// Empty catalog with default args.
    #[must_use]
    pub fn new(title: &'static str, args: ChatArgs) -> Self {
        Self {
            title,
            args,
            stories: Vec::new(),
        }
    }

    /// Register a story.
    #[must_use]
    pub fn story(mut self, story: Story) -> Self {
        self.stories.push(story);
        self
    }

    /// Catalog title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Stories in registration order.
    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Look up a story by id.
    pub fn get(&self, id: &str) -> Result<&Story> {
        self.stories
            .iter()
            .find(|story| story.id == id)
            .ok_or_else(|| Error::UnknownStory(id.to_string()))
    }

    /// Story args merged over the catalog defaults.
    pub fn args(&self, id: &str) -> Result<ChatArgs> {
        let story = self.get(id)?;
        Ok(story.args.clone().merged_over(&self.args))
    }

    /// JSON controls for a story.
    pub fn controls(&self, id: &str) -> Result<serde_json::Value> {
        let story = self.get(id)?;
        let args = self.args(id)?;
        let controls = StoryControls {
            title: self.title,
            id: story.id,
            name: story.name,
            args: &args,
        };
        Ok(serde_json::to_value(&controls)?)
    }

    /// Render a story.
    pub fn render(&self, id: &str) -> Result<Markup> {
        let story = self.get(id)?;
        let args = self.args(id)?;
        debug!(
            name: "story.render",
            title = self.title,
            story = story.id,
            "Rendering story"
        );

        match story.render {
            StoryRender::FromArgs => {
                let fetcher = args.fetcher.ok_or(Error::MissingArg("fetcher"))?;
                Ok(ChatForm::new(fetcher)
                    .form_ref(args.form_ref)
                    .placeholder(args.placeholder)
                    .render())
            }
            StoryRender::Custom(render) => Ok(render(args)),
        }
    }

    /// Replay a posted form against a freshly rendered story.
    ///
    /// Each field is typed into the rendered form and the form's own submit
    /// handler runs, so the submission reaches whatever fetcher the render
    /// wired up. Fields the form does not have are rejected.
    pub fn submit(&self, id: &str, data: &FormData) -> Result<()> {
        let mut doc = Document::mount(self.render(id)?);
        for (name, value) in data.iter() {
            doc.fill(name, value).inspect_err(|_| {
                warn!(name: "story.submit.rejected", story = id, field = name, "Unknown form field");
            })?;
        }
        let event = doc.submit()?;
        debug!(
            name: "story.submit.dispatched",
            story = id,
            default_prevented = event.default_prevented(),
            "Story form submitted"
        );
        Ok(())
    }
}
