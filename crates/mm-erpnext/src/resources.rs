//! Wire shapes of the ERPNext resources the site consumes, and their
//! mapping onto the site-facing records.

use mm_core::GalleryProject;

use chrono::{Locale, NaiveDate};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Title shown when the remote project carries no project name.
pub(crate) const FALLBACK_TITLE: &str = "Unbenanntes Projekt";
/// Category shown when the remote project carries no status.
pub(crate) const FALLBACK_CATEGORY: &str = "Event";
/// The gallery never sources a location from remote data; every project
/// shows this placeholder.
pub(crate) const PLACEHOLDER_LOCATION: &str = "In Planung";
/// Date label when the remote project carries no expected end date.
pub(crate) const FALLBACK_DATE: &str = "Demnächst";
/// Description shown when the remote project carries no notes.
pub(crate) const FALLBACK_DESCRIPTION: &str =
    "Ein exklusives MM EVENT Projekt in der Realisierungsphase.";
/// First two gallery bullet points; the third is the project's category.
pub(crate) const FIXED_HIGHLIGHTS: [&str; 2] =
    ["Individuelle Planung", "Professionelle Begleitung"];

/// Notification text when a lead submission fails and the server supplied
/// no message of its own.
pub const SUBMIT_FALLBACK_NOTIFICATION: &str = "Fehler beim Senden des Formulars.";

/// `GET /api/resource/Project` response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ProjectListResponse {
    pub data: Vec<ProjectResource>,
}

/// One element of the Project listing, restricted to the requested field
/// set.
///
/// Every field is optional on the wire, and the mapping treats an empty
/// string like an absent value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ProjectResource {
    pub name: Option<String>,
    pub project_name: Option<String>,
    pub expected_end_date: Option<String>,
    pub status: Option<String>,
    pub image: Option<String>,
    pub notes: Option<String>,
}

impl ProjectResource {
    /// Map onto the gallery record.
    ///
    /// # Arguments
    /// * `index` - zero-based position of the element in the listing
    /// * `base_url` - normalized instance URL (no trailing slash)
    pub(crate) fn into_gallery(self, index: usize, base_url: &str) -> GalleryProject {
        let category = present(self.status).unwrap_or_else(|| FALLBACK_CATEGORY.to_string());

        GalleryProject {
            id: present(self.name).unwrap_or_else(|| index.to_string()),
            image_url: image_url(present(self.image), index, base_url),
            title: present(self.project_name).unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            category: category.clone(),
            location: PLACEHOLDER_LOCATION.to_string(),
            date: present(self.expected_end_date)
                .and_then(|date| format_long_date(&date))
                .unwrap_or_else(|| FALLBACK_DATE.to_string()),
            description: present(self.notes).unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
            highlights: vec![
                FIXED_HIGHLIGHTS[0].to_string(),
                FIXED_HIGHLIGHTS[1].to_string(),
                category,
            ],
            additional_images: Vec::new(),
        }
    }
}

/// Treat empty strings like absent values.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Resolve the gallery image URL: absolute URLs pass through, instance
/// paths get the base URL prefix, and a missing image falls back to a
/// deterministic stock photo keyed by the listing position.
fn image_url(image: Option<String>, index: usize, base_url: &str) -> String {
    match image {
        Some(image) if image.starts_with("http") => image,
        Some(image) => format!("{}{}", base_url, image),
        None => format!("https://picsum.photos/1600/900?random={}", index + 100),
    }
}

/// Render an ERPNext date (`%Y-%m-%d`) as the German long form used in the
/// gallery, e.g. `05. März 2026`. Unparseable input maps to `None`, and the
/// caller falls back to the date placeholder.
fn format_long_date(value: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    Some(date.format_localized("%d. %B %Y", Locale::de_DE).to_string())
}

/// Decode a JSON error body, substituting an empty object when the body is
/// not JSON. Keeps the rejection path going so the caller still sees the
/// HTTP status even when the server sent garbage.
pub(crate) async fn json_or_empty(response: reqwest::Response) -> Value {
    response
        .json()
        .await
        .unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Extract ERPNext's `_server_messages` from an error body.
///
/// The field arrives either as a plain string or as an array of strings;
/// anything else - including an empty string or empty array - counts as
/// absent.
pub(crate) fn server_messages(body: &Value) -> Option<String> {
    match body.get("_server_messages")? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Array(items) => {
            let lines: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            if lines.is_empty() {
                None
            } else {
                Some(lines.join("\n"))
            }
        }
        _ => None,
    }
}
