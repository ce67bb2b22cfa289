//! Button component.

use crate::ui::markup::{Element, Markup};

/// ShadCN-style primary button.
///
/// # Example
///
/// ```rust
/// use chat_stories::ui::components::Button;
///
/// let html = Button::new()
///     .button_type("submit")
///     .render("Send")
///     .to_html();
/// assert!(html.contains(r#"type="submit""#));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Button {
    disabled: bool,
    button_type: &'static str,
    class: &'static str,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            disabled: false,
            button_type: "button",
            class: "",
        }
    }
}

impl Button {
    /// Enabled `type="button"`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `disabled` attribute.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the `type` attribute.
    #[must_use]
    pub fn button_type(mut self, button_type: &'static str) -> Self {
        self.button_type = button_type;
        self
    }

    /// Additional CSS classes.
    #[must_use]
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    /// Render with the given content.
    #[must_use]
    pub fn render(self, children: impl Into<Markup>) -> Markup {
        let base_classes = "inline-flex items-center justify-center rounded-lg font-medium \
                            transition-colors focus-visible:outline-none focus-visible:ring-2 \
                            focus-visible:ring-primary focus-visible:ring-offset-2 \
                            disabled:pointer-events-none disabled:opacity-50 \
                            h-10 px-4 text-sm bg-primary text-white hover:bg-primaryMuted";

        let classes = format!("{} {}", base_classes, self.class);

        Element::new("button")
            .attr("type", self.button_type)
            .attr("class", classes.trim_end())
            .flag("disabled", self.disabled)
            .child(children)
            .into()
    }
}
