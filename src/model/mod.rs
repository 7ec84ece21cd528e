//! API models shared with consumers of the HTTP surface.
//!
//! These DTOs define the JSON shapes the rendering surface receives. Server-side domain
//! models convert into them at the controller boundary.

pub mod api;
pub mod faq;
pub mod form;
pub mod page;
pub mod pricing;
pub mod section;
