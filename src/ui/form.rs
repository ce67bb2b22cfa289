//! Form data snapshots and native submit events.

use serde::Serialize;

use super::markup::Element;

/// Input types that never contribute a value to the form data set.
const NON_DATA_INPUT_TYPES: &[&str] = &["submit", "button", "reset", "image"];

/// Ordered name/value pairs taken from a form, in document order.
///
/// Duplicate names are preserved; [`FormData::get`] returns the first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    /// Create an empty form data set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the named fields of a form element.
    ///
    /// Named `input` elements contribute their `value` attribute (empty when
    /// absent) unless they are disabled or button-like. Checkboxes and radios
    /// contribute only when `checked`, defaulting to `"on"`. Named `textarea`
    /// elements contribute their text content.
    #[must_use]
    pub fn from_form(form: &Element) -> Self {
        let mut data = Self::new();
        for child in form.child_nodes() {
            for el in child.elements() {
                if el.has_flag("disabled") {
                    continue;
                }
                let Some(name) = el.get_attr("name").filter(|n| !n.is_empty()) else {
                    continue;
                };
                match el.tag() {
                    "input" => {
                        let input_type = el.get_attr("type").unwrap_or("text");
                        if NON_DATA_INPUT_TYPES.iter().any(|t| *t == input_type) {
                            continue;
                        }
                        if matches!(input_type, "checkbox" | "radio") {
                            if el.has_flag("checked") {
                                data.append(name, el.get_attr("value").unwrap_or("on"));
                            }
                            continue;
                        }
                        data.append(name, el.get_attr("value").unwrap_or_default());
                    }
                    "textarea" => data.append(name, el.text_content()),
                    _ => {}
                }
            }
        }
        data
    }

    /// Append a pair.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for FormData {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A native form submission dispatched by the host.
#[derive(Debug)]
pub struct SubmitEvent {
    target: Element,
    default_prevented: bool,
}

impl SubmitEvent {
    /// Create an event targeting `form`.
    #[must_use]
    pub fn new(target: Element) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    /// The submitted form element.
    #[must_use]
    pub fn target(&self) -> &Element {
        &self.target
    }

    /// Suppress the host's default navigation for this submission.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a handler suppressed default navigation.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl From<&SubmitEvent> for FormData {
    fn from(event: &SubmitEvent) -> Self {
        Self::from_form(event.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> Element {
        Element::new("form")
            .child(Element::new("input").attr("name", "message").attr("value", "hi"))
            .child(Element::new("input").attr("name", "tag").attr("value", "a"))
            .child(Element::new("input").attr("name", "tag").attr("value", "b"))
            .child(Element::new("input").attr("name", "empty"))
            .child(Element::new("input").attr("value", "unnamed"))
            .child(
                Element::new("input")
                    .attr("name", "off")
                    .attr("value", "x")
                    .flag("disabled", true),
            )
            .child(
                Element::new("input")
                    .attr("type", "submit")
                    .attr("name", "go")
                    .attr("value", "Go"),
            )
            .child(Element::new("textarea").attr("name", "notes").child("long text"))
            .child(Element::new("button").attr("name", "send").child("Send"))
    }

    #[test]
    fn test_from_form_collects_named_fields() {
        let data = FormData::from_form(&sample_form());

        assert_eq!(data.get("message"), Some("hi"));
        let tags: Vec<_> = data.iter().filter(|(n, _)| *n == "tag").map(|(_, v)| v).collect();
        assert_eq!(tags, vec!["a", "b"]);
        assert_eq!(data.get("empty"), Some(""));
        assert_eq!(data.get("notes"), Some("long text"));
        assert_eq!(data.get("off"), None);
        assert_eq!(data.get("go"), None);
        assert_eq!(data.get("send"), None);
        assert_eq!(data.len(), 5);
    }

    #[test]
    fn test_checkable_inputs_only_when_checked() {
        let form = Element::new("form")
            .child(
                Element::new("input")
                    .attr("type", "checkbox")
                    .attr("name", "subscribe")
                    .attr("value", "yes"),
            )
            .child(
                Element::new("input")
                    .attr("type", "checkbox")
                    .attr("name", "notify")
                    .flag("checked", true),
            )
            .child(
                Element::new("input")
                    .attr("type", "radio")
                    .attr("name", "tone")
                    .attr("value", "casual"),
            )
            .child(
                Element::new("input")
                    .attr("type", "radio")
                    .attr("name", "tone")
                    .attr("value", "formal")
                    .flag("checked", true),
            );

        let data = FormData::from_form(&form);
        assert_eq!(data.get("subscribe"), None);
        assert_eq!(data.get("notify"), Some("on"));
        assert_eq!(data.get("tone"), Some("formal"));
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_empty_form_yields_empty_payload() {
        let data = FormData::from_form(&Element::new("form"));
        assert!(data.is_empty());
    }

    #[test]
    fn test_submit_event_prevent_default() {
        let mut event = SubmitEvent::new(sample_form());
        assert!(!event.default_prevented());
        event.prevent_default();
        assert!(event.default_prevented());
        assert_eq!(FormData::from(&event).get("message"), Some("hi"));
    }

    #[test]
    fn test_serializes_as_pairs() {
        let data: FormData = vec![("message".to_string(), "hello".to_string())]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json, serde_json::json!([["message", "hello"]]));
    }
}
