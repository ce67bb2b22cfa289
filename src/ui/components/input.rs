//! Input component for text fields.

use crate::ui::markup::{Element, Markup};

/// Text input.
///
/// # Example
///
/// ```rust
/// use chat_stories::ui::components::TextInput;
///
/// let html = TextInput::new("message")
///     .placeholder("Enter your message...")
///     .label("Message")
///     .render()
///     .to_html();
/// assert!(html.contains(r#"aria-label="Message""#));
/// ```
#[derive(Debug, Clone)]
pub struct TextInput {
    name: String,
    placeholder: String,
    label: Option<String>,
    class: &'static str,
}

impl TextInput {
    /// Text input named `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            placeholder: String::new(),
            label: None,
            class: "",
        }
    }

    /// Placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Accessible label, rendered as `aria-label`.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Additional CSS classes.
    #[must_use]
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    /// Render the `<input>` element.
    #[must_use]
    pub fn render(self) -> Markup {
        let base_classes = "flex h-10 w-full rounded-lg border border-panelBorder bg-background \
                            px-3 py-2 text-sm text-textPrimary placeholder:text-textMuted \
                            focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary \
                            focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

        let classes = format!("{} {}", base_classes, self.class);

        let mut input = Element::new("input")
            .attr("type", "text")
            .attr("class", classes.trim_end())
            .attr("name", self.name)
            .attr("placeholder", self.placeholder)
            .attr("autocomplete", "off");
        if let Some(label) = self.label {
            input = input.attr("aria-label", label);
        }
        input.into()
    }
}
