use crate::{model::section::HtmlSectionDto, server::model::section::LayoutParams};

/// Raw HTML block with optional scoped CSS and script.
///
/// Content is passed through verbatim; sanitization is the rendering surface's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlSection {
    pub id: i32,
    pub name: String,
    pub html: Option<String>,
    pub css: Option<String>,
    pub script: Option<String>,
    /// Where the script is injected, e.g. `head` or `body_end`.
    pub script_placement: String,
}

impl HtmlSection {
    pub fn from_entity(entity: entity::html_section::Model) -> (Self, LayoutParams) {
        let layout = LayoutParams {
            spacing: entity.spacing,
            ..Default::default()
        };

        let section = Self {
            id: entity.id,
            name: entity.name,
            html: entity.html_content,
            css: entity.css_content,
            script: entity.script_content,
            script_placement: entity.script_placement,
        };

        (section, layout)
    }

    pub fn into_dto(self) -> HtmlSectionDto {
        HtmlSectionDto {
            name: self.name,
            html: self.html,
            css: self.css,
            script: self.script,
            script_placement: self.script_placement,
        }
    }
}
