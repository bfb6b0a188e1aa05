//! UI Components
//!
//! Leptos components for the exhibition pages.

mod accordion;
mod filter_bar;
mod project_card;
mod project_gallery;
mod rating_widget;
mod upload_form;

pub use accordion::Accordion;
pub use filter_bar::FilterBar;
pub use project_card::ProjectCard;
pub use project_gallery::ProjectGallery;
pub use rating_widget::{RatingConfig, RatingWidget};
pub use upload_form::UploadForm;
