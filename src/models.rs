//! Frontend Models
//!
//! Data structures matching the server JSON payloads. Field renames follow
//! the Django ORM `values()` keys the endpoints emit verbatim.

use serde::{Deserialize, Serialize};

/// One project card in the paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "owner__name", default)]
    pub owner_name: Option<String>,
    #[serde(rename = "owner__slug")]
    pub owner_slug: String,
    pub project_id: u32,
    /// Average rating, absent until the first vote.
    #[serde(default)]
    pub average: Option<f64>,
    /// Award year for exhibition winners.
    #[serde(default)]
    pub win_year: Option<u32>,
    #[serde(default)]
    pub thumb_mini: Option<String>,
    #[serde(default)]
    pub thumb_xs: Option<String>,
    #[serde(default)]
    pub thumb_sm: Option<String>,
    #[serde(default = "default_thumb_xs_w")]
    pub thumb_xs_w: u32,
    #[serde(default = "default_thumb_sm_w")]
    pub thumb_sm_w: u32,
}

fn default_thumb_xs_w() -> u32 {
    320
}

fn default_thumb_sm_w() -> u32 {
    576
}

/// One page of the projects listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectsPage {
    #[serde(rename = "projects_list")]
    pub projects: Vec<Project>,
    pub current_page: u32,
    pub next_page: bool,
    pub media_url: String,
    pub default_placeholder: String,
}

/// Response to a rating submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub is_jury: bool,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub score_avg: Option<f64>,
}

/// Response to a portfolio upload/edit submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub portfolio_id: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_page_deserializes_wire_keys() {
        let json = r#"{
            "projects_list": [{
                "id": 5,
                "title": "Лофт на Остоженке",
                "owner__name": "Студия А",
                "owner__slug": "studio-a",
                "project_id": 17,
                "average": 4.55,
                "thumb_mini": "projects/17/mini.jpg",
                "thumb_xs": "projects/17/xs.jpg",
                "thumb_sm": "projects/17/sm.jpg"
            }],
            "current_page": 2,
            "next_page": false,
            "media_url": "/media/",
            "default_placeholder": "/static/img/placeholder.svg"
        }"#;
        let page: ProjectsPage = serde_json::from_str(json).expect("valid payload");
        assert_eq!(page.current_page, 2);
        assert!(!page.next_page);
        assert_eq!(page.projects.len(), 1);
        let project = &page.projects[0];
        assert_eq!(project.owner_slug, "studio-a");
        assert_eq!(project.owner_name.as_deref(), Some("Студия А"));
        assert_eq!(project.win_year, None);
        // Widths fall back to the markup defaults when the server omits them.
        assert_eq!(project.thumb_xs_w, 320);
        assert_eq!(project.thumb_sm_w, 576);
    }

    #[test]
    fn rating_response_tolerates_sparse_payload() {
        let resp: RatingResponse = serde_json::from_str(r#"{"score_avg": 4.2}"#).unwrap();
        assert!(!resp.is_jury);
        assert_eq!(resp.score_avg, Some(4.2));
        assert_eq!(resp.message, None);
    }
}
