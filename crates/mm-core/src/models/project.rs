//! Gallery project record - the site-facing shape of a remote project.

use serde::{Deserialize, Serialize};

/// A project as the site's gallery renders it.
///
/// Produced by mapping the business system's project resource; every field
/// is a display-ready string. Projects are transient - rebuilt on every
/// fetch, never persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryProject {
    /// Remote document name, or the zero-based listing index when the
    /// remote omits one.
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub category: String,
    pub location: String,
    /// Localized long date, e.g. `05. März 2026`.
    pub date: String,
    pub description: String,
    /// Ordered marketing bullet points.
    pub highlights: Vec<String>,
    /// Always empty from the remote mapping; kept so the gallery can merge
    /// in curated extras.
    pub additional_images: Vec<String>,
}
