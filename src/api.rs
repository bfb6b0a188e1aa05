//! AJAX Helpers
//!
//! Thin wrappers over the JSON endpoints. Requests mark themselves as AJAX
//! with the `X-Requested-With` header the server checks; errors are
//! stringified at this boundary and logged or toasted by the caller.

use serde::de::DeserializeOwned;

use crate::models::{ProjectsPage, RatingResponse};

/// Declared method of the filter form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMethod {
    #[default]
    Get,
    Post,
}

impl FormMethod {
    pub fn parse(method: &str) -> Self {
        if method.eq_ignore_ascii_case("post") {
            FormMethod::Post
        } else {
            FormMethod::Get
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FormMethod::Get => "get",
            FormMethod::Post => "post",
        }
    }
}

async fn send_form<T: DeserializeOwned>(
    url: &str,
    params: &str,
    method: FormMethod,
) -> Result<T, String> {
    let client = reqwest::Client::new();
    let builder = match method {
        FormMethod::Get => client.get(format!("{url}?{params}")),
        FormMethod::Post => client
            .post(url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(params.to_string()),
    };
    let response = builder
        .header("X-Requested-With", "XMLHttpRequest")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.status().is_success() {
        return Err(format!("HTTP error: status {}", response.status()));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch one page of the projects listing. Scroll loads are always GET;
/// filter submissions pass the filter form's declared method through.
pub async fn fetch_projects(
    url: &str,
    params: &str,
    method: FormMethod,
) -> Result<ProjectsPage, String> {
    send_form(url, params, method).await
}

/// Submit a rating. On an HTTP error the server still answers with a JSON
/// body carrying a user-facing message; surface that instead of the bare
/// status line when possible.
pub async fn post_rating(url: &str, params: &str) -> Result<RatingResponse, String> {
    let client = reqwest::Client::new();
    let response = client
        .post(url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("X-Requested-With", "XMLHttpRequest")
        .body(params.to_string())
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        if let Ok(err) = serde_json::from_str::<RatingResponse>(&body) {
            if let Some(message) = err.message {
                return Err(message);
            }
        }
        return Err(format!("HTTP error: status {status}"));
    }
    response.json::<RatingResponse>().await.map_err(|e| e.to_string())
}
