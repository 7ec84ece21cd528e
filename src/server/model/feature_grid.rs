use crate::{
    model::section::{FeatureGridDto, FeatureGridItemDto},
    server::model::section::LayoutParams,
};

/// Grid of feature cards with a configurable column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGridSection {
    pub id: i32,
    pub heading: String,
    pub subheading: Option<String>,
    pub columns: i32,
    pub items: Vec<FeatureGridItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureGridItem {
    pub icon: Option<String>,
    pub title: String,
    pub description: Option<String>,
}

impl FeatureGridSection {
    pub fn from_entity(
        entity: entity::feature_grid_section::Model,
        items: Vec<entity::feature_grid_item::Model>,
    ) -> (Self, LayoutParams) {
        let layout = LayoutParams {
            alignment: entity.alignment,
            media_position: None,
            background_style: entity.background_style,
            spacing: entity.spacing,
        };

        let section = Self {
            id: entity.id,
            heading: entity.heading,
            subheading: entity.subheading,
            columns: entity.columns,
            items: items
                .into_iter()
                .map(|item| FeatureGridItem {
                    icon: item.icon,
                    title: item.title,
                    description: item.description,
                })
                .collect(),
        };

        (section, layout)
    }

    pub fn into_dto(self) -> FeatureGridDto {
        FeatureGridDto {
            heading: self.heading,
            subheading: self.subheading,
            columns: self.columns,
            items: self
                .items
                .into_iter()
                .map(|item| FeatureGridItemDto {
                    icon: item.icon,
                    title: item.title,
                    description: item.description,
                })
                .collect(),
        }
    }
}
