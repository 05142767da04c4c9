//! Header and body block settings.

use tailflash_html::{Attributes, Tag};

use crate::error::{AlertError, Result};

/// How one text section (header or body) of an alert is rendered.
///
/// The text itself is wrapped in an element named by `tag`. When `container`
/// is set, the whole expanded section is additionally wrapped in a `div`
/// carrying the container attributes and class.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub(crate) tag: String,
    pub(crate) class: String,
    pub(crate) attributes: Attributes,
    pub(crate) container: bool,
    pub(crate) container_class: String,
    pub(crate) container_attributes: Attributes,
}

impl TextBlock {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            class: String::new(),
            attributes: Attributes::new(),
            container: false,
            container_class: String::new(),
            container_attributes: Attributes::new(),
        }
    }

    pub(crate) fn set_tag(&mut self, tag: String, element: &'static str) -> Result<()> {
        if tag.is_empty() {
            return Err(AlertError::EmptyTag { element });
        }
        self.tag = tag;
        Ok(())
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn has_container(&self) -> bool {
        self.container
    }

    pub fn container_class(&self) -> &str {
        &self.container_class
    }

    pub fn container_attributes(&self) -> &Attributes {
        &self.container_attributes
    }

    /// Renders `content` inside this block's element.
    pub(crate) fn element(&self, content: &str) -> String {
        Tag::new(self.tag.as_str())
            .attributes(self.attributes.clone())
            .class(&self.class)
            .content(content)
            .render()
    }

    /// Wraps an expanded section in the container, when enabled. An empty
    /// section stays empty.
    pub(crate) fn wrap(&self, section: String) -> String {
        if !self.container || section.is_empty() {
            return section;
        }
        Tag::new("div")
            .attributes(self.container_attributes.clone())
            .class(&self.container_class)
            .content(section)
            .block()
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_merges_class() {
        let mut block = TextBlock::new("p");
        block.class = "mr-8".into();
        block.attributes = Attributes::new().with("class", "text-sm");
        assert_eq!(block.element("Hi"), r#"<p class="text-sm mr-8">Hi</p>"#);
    }

    #[test]
    fn test_wrap_without_container_is_identity() {
        let block = TextBlock::new("span");
        assert_eq!(block.wrap("<span>x</span>".into()), "<span>x</span>");
    }

    #[test]
    fn test_wrap_with_container() {
        let mut block = TextBlock::new("span");
        block.container = true;
        block.container_attributes = Attributes::new().with("class", "a");
        block.container_class = "b".into();
        assert_eq!(
            block.wrap("<span>x</span>".into()),
            "<div class=\"a b\">\n<span>x</span>\n</div>"
        );
    }

    #[test]
    fn test_wrap_empty_section_emits_nothing() {
        let mut block = TextBlock::new("h4");
        block.container = true;
        block.container_class = "rounded-t".into();
        assert_eq!(block.wrap(String::new()), "");
    }

    #[test]
    fn test_set_tag_rejects_empty() {
        let mut block = TextBlock::new("h4");
        let err = block.set_tag(String::new(), "header").unwrap_err();
        assert!(matches!(err, AlertError::EmptyTag { element: "header" }));
        assert_eq!(block.tag(), "h4");
    }
}
