//! Composing one resolved alert into markup.
//!
//! An alert is an outer `div` holding up to two sections, each on its own
//! line:
//!
//! ```text
//! <div id="{id}" class="{type class} {classes}" role="alert">
//! {header section}     expanded layout_header, only when there is a header
//! {body section}       expanded layout_body
//! </div>
//! ```
//!
//! Sections are optionally wrapped in their block's container `div`. Body,
//! header and button label are trusted markup and are emitted as-is; icon
//! text and attribute values are escaped.

use tailflash_html::{Attributes, Tag};

use crate::layout::{expand, Placeholder};
use crate::resolve::AlertSpec;

const DEFAULT_HEADER_LAYOUT: &str = "{header}";
const DEFAULT_BODY_LAYOUT: &str = "{body}";

/// Renders one alert. `id` becomes the outer element's id unless the
/// alert's own attributes set one.
///
/// Returns an empty string when the alert has no body.
pub fn compose(spec: &AlertSpec, id: &str) -> String {
    if !spec.is_renderable() {
        return String::new();
    }

    let mut sections = Vec::with_capacity(2);

    if !spec.header.is_empty() {
        let layout = layout_or(&spec.layout_header, DEFAULT_HEADER_LAYOUT);
        let section = expand(layout, |placeholder| fragment(spec, placeholder));
        sections.push(spec.header_block.wrap(section));
    }

    let layout = layout_or(&spec.layout_body, DEFAULT_BODY_LAYOUT);
    let section = expand(layout, |placeholder| fragment(spec, placeholder));
    sections.push(spec.body_block.wrap(section));

    sections.retain(|section| !section.is_empty());

    Tag::new("div")
        .attributes(outer_attributes(spec, id))
        .content(sections.join("\n"))
        .block()
        .render()
}

fn layout_or<'a>(layout: &'a str, default: &'a str) -> &'a str {
    if layout.is_empty() {
        default
    } else {
        layout
    }
}

/// `id`, `class` and `role` come first; caller values replace the computed
/// `id` and `role` and extend the class list.
fn outer_attributes(spec: &AlertSpec, id: &str) -> Attributes {
    let mut attributes = Attributes::new()
        .with("id", id)
        .with_class(&spec.type_class)
        .with("role", "alert");
    attributes.merge(&spec.attributes);
    attributes.add_class(&spec.class);
    attributes
}

fn fragment(spec: &AlertSpec, placeholder: Placeholder) -> String {
    match placeholder {
        Placeholder::Icon => icon(spec),
        Placeholder::Body => spec.body_block.element(&spec.body),
        Placeholder::Header => {
            if spec.header.is_empty() {
                String::new()
            } else {
                spec.header_block.element(&spec.header)
            }
        }
        Placeholder::Button => button(spec),
    }
}

fn icon(spec: &AlertSpec) -> String {
    if spec.icon_class.is_empty() && spec.icon_text.is_empty() {
        return String::new();
    }
    let glyph = Tag::new("i")
        .attributes(spec.icon_attributes.clone())
        .class(&spec.icon_class)
        .text(&spec.icon_text);
    Tag::new("div").content(glyph.render()).render()
}

/// The button is emitted whenever the layout asks for it, even unlabelled.
fn button(spec: &AlertSpec) -> String {
    let mut attributes = Attributes::new()
        .with("type", "button")
        .merged(&spec.button_attributes);
    if !spec.button_on_click.is_empty() {
        attributes.insert("onclick", spec.button_on_click.as_str());
    }
    Tag::new("button")
        .attributes(attributes)
        .content(spec.button_label.as_str())
        .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flash::FlashRecord;
    use crate::resolve::resolve;
    use crate::widget::AlertFlash;

    fn spec_for(config: &AlertFlash, record: FlashRecord) -> AlertSpec {
        resolve(&[record], config).remove(0)
    }

    #[test]
    fn test_empty_body_renders_nothing() {
        let spec = spec_for(
            &AlertFlash::new().layout_body("{icon}{body}{button}"),
            FlashRecord::new("danger", "").with_header("Ignored"),
        );
        assert_eq!(compose(&spec, "w0-alert"), "");
    }

    #[test]
    fn test_minimal_alert() {
        let spec = spec_for(&AlertFlash::new(), FlashRecord::new("danger", "This is a test."));
        assert_eq!(
            compose(&spec, "w0-alert"),
            "<div id=\"w0-alert\" class=\"bg-red-600\" role=\"alert\">\n\
             <span>This is a test.</span>\n\
             </div>"
        );
    }

    #[test]
    fn test_compose_is_deterministic() {
        let spec = spec_for(
            &AlertFlash::new().layout_body("{icon}{body}{button}").button_label("x"),
            FlashRecord::new("warning", "Careful."),
        );
        assert_eq!(compose(&spec, "a"), compose(&spec, "a"));
    }

    #[test]
    fn test_caller_attributes_merge_into_outer() {
        let config = AlertFlash::new()
            .attributes(
                Attributes::new()
                    .with("class", "shadow")
                    .with("data-flash", "1")
                    .with("role", "status"),
            )
            .class("text-white");
        let spec = spec_for(&config, FlashRecord::new("info", "b"));
        assert_eq!(
            compose(&spec, "w0-alert"),
            "<div id=\"w0-alert\" class=\"bg-indigo-600 shadow text-white\" role=\"status\" data-flash=\"1\">\n\
             <span>b</span>\n\
             </div>"
        );
    }

    #[test]
    fn test_caller_id_wins() {
        let config = AlertFlash::new().attributes(Attributes::new().with("id", "custom"));
        let spec = spec_for(&config, FlashRecord::new("info", "b"));
        assert!(compose(&spec, "w0-alert").starts_with("<div id=\"custom\" class=\"bg-indigo-600\""));
    }

    #[test]
    fn test_icon_not_rendered_without_class_or_text() {
        let spec = spec_for(
            &AlertFlash::new().layout_body("{icon}{body}"),
            FlashRecord::new("dark", "b"),
        );
        assert_eq!(
            compose(&spec, "w0-alert"),
            "<div id=\"w0-alert\" class=\"bg-gray-600\" role=\"alert\">\n<span>b</span>\n</div>"
        );
    }

    #[test]
    fn test_icon_text_is_escaped() {
        let spec = spec_for(
            &AlertFlash::new().layout_body("{icon}{body}"),
            FlashRecord::new("dark", "b").with_icon_text("<!>"),
        );
        assert!(compose(&spec, "w0-alert").contains("<div><i>&lt;!&gt;</i></div>\n<span>b</span>"));
    }

    #[test]
    fn test_unlabelled_button_still_renders() {
        let spec = spec_for(
            &AlertFlash::new().layout_body("{body}{button}"),
            FlashRecord::new("info", "b"),
        );
        assert!(compose(&spec, "w0-alert")
            .contains("<span>b</span>\n<button type=\"button\" class=\"float-right px-4 py-3\"></button>"));
    }

    #[test]
    fn test_button_absent_from_layout() {
        let spec = spec_for(
            &AlertFlash::new().button_label("&times;"),
            FlashRecord::new("info", "b"),
        );
        assert!(!compose(&spec, "w0-alert").contains("<button"));
    }

    #[test]
    fn test_header_layout_ignored_without_header() {
        let spec = spec_for(
            &AlertFlash::new().layout_header("{header}").header_container(true),
            FlashRecord::new("info", "b"),
        );
        assert_eq!(
            compose(&spec, "w0-alert"),
            "<div id=\"w0-alert\" class=\"bg-indigo-600\" role=\"alert\">\n<span>b</span>\n</div>"
        );
    }

    #[test]
    fn test_default_layouts_render_header_then_body() {
        let spec = spec_for(
            &AlertFlash::new(),
            FlashRecord::new("info", "Body.").with_header("Title"),
        );
        assert_eq!(
            compose(&spec, "w0-alert"),
            "<div id=\"w0-alert\" class=\"bg-indigo-600\" role=\"alert\">\n\
             <h4>Title</h4>\n\
             <span>Body.</span>\n\
             </div>"
        );
    }

    #[test]
    fn test_header_token_in_body_layout() {
        let spec = spec_for(
            &AlertFlash::new().layout_header("{icon}").layout_body("{header}{body}"),
            FlashRecord::new("dark", "Body.").with_header("Title"),
        );
        assert_eq!(
            compose(&spec, "w0-alert"),
            "<div id=\"w0-alert\" class=\"bg-gray-600\" role=\"alert\">\n\
             <h4>Title</h4>\n\
             <span>Body.</span>\n\
             </div>"
        );
    }
}
