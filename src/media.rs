//! Card View-Models
//!
//! Pure mapping from wire [`Project`] records to render-ready strings. DOM
//! insertion stays in the components; everything here is testable on the
//! host.

use crate::models::Project;

/// Media settings the listing endpoint sends along with every page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaConfig {
    pub media_url: String,
    pub default_placeholder: String,
}

/// Resolve a stored image path against the media root. Empty paths fall back
/// to the placeholder; absolute URLs and root-relative paths pass through.
pub fn normalize_image_url(url: Option<&str>, media: &MediaConfig) -> String {
    match url {
        None | Some("") => media.default_placeholder.clone(),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url.to_string(),
        Some(url) if url.starts_with('/') => url.to_string(),
        Some(url) => format!("{}{}", media.media_url, url),
    }
}

/// Everything a project card renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCardVm {
    pub anchor_id: String,
    pub href: String,
    pub title: Option<String>,
    pub author: Option<String>,
    /// `title` attribute of the anchor, empty when the project is untitled.
    pub title_attr: String,
    pub alt: String,
    pub src: String,
    pub data_src: String,
    pub data_srcset: String,
    pub win_year: Option<u32>,
    /// Average rating already formatted to one decimal.
    pub average: Option<String>,
}

fn width_descriptor(width: u32) -> String {
    if width > 0 {
        format!("{width}w")
    } else {
        String::new()
    }
}

pub fn card_view_model(project: &Project, media: &MediaConfig) -> ProjectCardVm {
    let image = |url: &Option<String>| normalize_image_url(url.as_deref(), media);
    let title = project.title.clone().filter(|t| !t.is_empty());
    let author = project.owner_name.clone().filter(|a| !a.is_empty());

    let alt = format!(
        "{}Автор проекта: {}",
        title.as_deref().map(|t| format!("{t}. ")).unwrap_or_default(),
        author.as_deref().unwrap_or("")
    );

    ProjectCardVm {
        anchor_id: format!("project-{}", project.id),
        href: format!(
            "/projects/{}/project-{}/",
            project.owner_slug, project.project_id
        ),
        title_attr: title.clone().unwrap_or_default(),
        alt,
        src: image(&project.thumb_mini),
        data_src: image(&project.thumb_sm),
        data_srcset: format!(
            "{} {}, {} {}",
            image(&project.thumb_xs),
            width_descriptor(project.thumb_xs_w),
            image(&project.thumb_sm),
            width_descriptor(project.thumb_sm_w),
        ),
        win_year: project.win_year,
        average: project.average.map(|avg| format!("{avg:.1}")),
        title,
        author,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media() -> MediaConfig {
        MediaConfig {
            media_url: "/media/".to_string(),
            default_placeholder: "/static/img/placeholder.svg".to_string(),
        }
    }

    fn project() -> Project {
        Project {
            id: 5,
            title: Some("Лофт".to_string()),
            owner_name: Some("Студия А".to_string()),
            owner_slug: "studio-a".to_string(),
            project_id: 17,
            average: Some(4.55),
            win_year: Some(2024),
            thumb_mini: Some("projects/17/mini.jpg".to_string()),
            thumb_xs: Some("projects/17/xs.jpg".to_string()),
            thumb_sm: Some("projects/17/sm.jpg".to_string()),
            thumb_xs_w: 320,
            thumb_sm_w: 576,
        }
    }

    #[test]
    fn relative_paths_get_media_prefix() {
        assert_eq!(
            normalize_image_url(Some("projects/1/a.jpg"), &media()),
            "/media/projects/1/a.jpg"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            normalize_image_url(Some("https://cdn.example.com/a.jpg"), &media()),
            "https://cdn.example.com/a.jpg"
        );
        assert_eq!(normalize_image_url(Some("/media/a.jpg"), &media()), "/media/a.jpg");
    }

    #[test]
    fn missing_image_falls_back_to_placeholder() {
        assert_eq!(normalize_image_url(None, &media()), "/static/img/placeholder.svg");
        assert_eq!(normalize_image_url(Some(""), &media()), "/static/img/placeholder.svg");
    }

    #[test]
    fn card_links_and_anchor() {
        let vm = card_view_model(&project(), &media());
        assert_eq!(vm.anchor_id, "project-5");
        assert_eq!(vm.href, "/projects/studio-a/project-17/");
        assert_eq!(vm.title_attr, "Лофт");
    }

    #[test]
    fn card_image_variants() {
        let vm = card_view_model(&project(), &media());
        assert_eq!(vm.src, "/media/projects/17/mini.jpg");
        assert_eq!(vm.data_src, "/media/projects/17/sm.jpg");
        assert_eq!(
            vm.data_srcset,
            "/media/projects/17/xs.jpg 320w, /media/projects/17/sm.jpg 576w"
        );
    }

    #[test]
    fn alt_text_from_title_and_author() {
        let vm = card_view_model(&project(), &media());
        assert_eq!(vm.alt, "Лофт. Автор проекта: Студия А");

        let mut untitled = project();
        untitled.title = None;
        let vm = card_view_model(&untitled, &media());
        assert_eq!(vm.alt, "Автор проекта: Студия А");
    }

    #[test]
    fn average_formats_to_one_decimal() {
        let vm = card_view_model(&project(), &media());
        assert_eq!(vm.average.as_deref(), Some("4.5"));
        assert_eq!(vm.win_year, Some(2024));

        let mut unrated = project();
        unrated.average = None;
        unrated.win_year = None;
        let vm = card_view_model(&unrated, &media());
        assert_eq!(vm.average, None);
        assert_eq!(vm.win_year, None);
    }
}
