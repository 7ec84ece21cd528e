mod faq;
mod feature_grid;
mod form;
mod html;
mod media;
mod page;
mod pricing;
mod section;
