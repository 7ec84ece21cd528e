//! Page and navigation domain models.

use crate::model::page::{NavLinkDto, NavigationDto};

/// An active, addressable page of the marketing site.
///
/// Only active pages are ever converted into this model; inactive rows are filtered out
/// at the repository boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub show_in_header: bool,
    pub show_in_footer: bool,
    pub sort_order: i32,
}

impl Page {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The page entity from the database
    ///
    /// # Returns
    /// - `Page` - The converted page domain model
    pub fn from_entity(entity: entity::page::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            title: entity.title,
            meta_title: entity.meta_title,
            meta_description: entity.meta_description,
            show_in_header: entity.show_in_header,
            show_in_footer: entity.show_in_footer,
            sort_order: entity.sort_order,
        }
    }
}

/// Link to a page as shown in site navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub slug: String,
    pub title: String,
}

impl NavLink {
    pub fn from_entity(entity: &entity::page::Model) -> Self {
        Self {
            slug: entity.slug.clone(),
            title: entity.title.clone(),
        }
    }

    pub fn into_dto(self) -> NavLinkDto {
        NavLinkDto {
            slug: self.slug,
            title: self.title,
        }
    }
}

/// Header and footer navigation, each in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigation {
    pub header: Vec<NavLink>,
    pub footer: Vec<NavLink>,
}

impl Navigation {
    /// Converts the navigation domain model to a DTO for API responses.
    ///
    /// # Returns
    /// - `NavigationDto` - Header and footer link lists with order preserved
    pub fn into_dto(self) -> NavigationDto {
        NavigationDto {
            header: self.header.into_iter().map(NavLink::into_dto).collect(),
            footer: self.footer.into_iter().map(NavLink::into_dto).collect(),
        }
    }
}
