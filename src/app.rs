//! Exhibition Frontend App
//!
//! Mounts the page-specific wiring for the URL being viewed, mirroring the
//! server's one-template-per-page structure. Server-side page flags (auth
//! state, rating permissions, endpoint overrides) arrive through the body
//! dataset.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::FormMethod;
use crate::components::{Accordion, ProjectGallery, RatingConfig, RatingWidget, UploadForm};
use crate::dom;
use crate::store::GalleryState;

/// Page kind derived from `location.pathname`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Gallery,
    ProjectDetail,
    Upload,
}

fn page_for_path(path: &str) -> Page {
    if path.starts_with("/portfolio/add") || path.contains("/edit/") {
        Page::Upload
    } else if path
        .strip_prefix("/projects/")
        .is_some_and(|rest| !rest.trim_end_matches('/').is_empty())
    {
        Page::ProjectDetail
    } else {
        Page::Gallery
    }
}

#[component]
pub fn App() -> impl IntoView {
    let path = dom::location_pathname();

    match page_for_path(&path) {
        Page::Gallery => {
            provide_context(Store::new(GalleryState::default()));
            let endpoint =
                dom::dataset_value("feedUrl").unwrap_or_else(|| "/projects/".to_string());
            let filter_method =
                FormMethod::parse(&dom::dataset_value("filterMethod").unwrap_or_default());
            view! { <ProjectGallery endpoint=endpoint filter_method=filter_method /> }.into_any()
        }
        Page::ProjectDetail => {
            let config = RatingConfig {
                action: dom::dataset_value("rateUrl").unwrap_or_else(|| format!("{path}rate/")),
                authenticated: dom::dataset_flag("userAuthenticated"),
                can_rate: dom::dataset_flag("userCanRate"),
                is_jury: dom::dataset_flag("isJury"),
                show_rating: dom::dataset_flag("showRating"),
                initial_score: dom::dataset_value("userScore").and_then(|s| s.parse().ok()),
                average: dom::dataset_value("scoreAvg").and_then(|s| s.parse().ok()),
            };
            view! {
                <aside class="project-rating">
                    <RatingWidget config=config />
                    <Accordion id="rating-rules" header="Правила голосования">
                        <p>
                            "Оценки принимаются до окончания выставки. "
                            "Работы победителей отмечаются годом награды."
                        </p>
                    </Accordion>
                </aside>
            }
            .into_any()
        }
        Page::Upload => view! { <UploadForm /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_paths_mount_the_gallery() {
        assert_eq!(page_for_path("/"), Page::Gallery);
        assert_eq!(page_for_path("/projects/"), Page::Gallery);
        assert_eq!(page_for_path("/projects"), Page::Gallery);
    }

    #[test]
    fn project_pages_mount_the_rating_widget() {
        assert_eq!(page_for_path("/projects/studio-a/project-17/"), Page::ProjectDetail);
    }

    #[test]
    fn upload_and_edit_paths_mount_the_form() {
        assert_eq!(page_for_path("/portfolio/add/"), Page::Upload);
        assert_eq!(page_for_path("/portfolio/edit/42"), Page::Upload);
    }
}
