use crate::resources::{self, ProjectListResponse};
use crate::{ErpNextError, ErpNextResult};

use mm_config::{ApiCredentials, Config};
use mm_core::{GalleryProject, Lead};

use log::{error, warn};
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// Field set requested from the Project listing, as ERPNext expects it:
/// a JSON array serialized into a single query parameter.
const PROJECT_FIELDS: &str = r#"["name","project_name","expected_end_date","status","image","notes"]"#;

/// Fixed lead source recorded with every contact-form submission.
const LEAD_SOURCE: &str = "Webseite";

/// HTTP client for the ERPNext REST API
pub struct ErpNextClient {
    base_url: String,
    credentials: Option<ApiCredentials>,
    client: ReqwestClient,
}

impl ErpNextClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `config` - loaded site configuration; its URL is normalized by
    ///   trimming any trailing slash
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_url.trim_end_matches('/').to_string(),
            credentials: config.credentials(),
            client: ReqwestClient::new(),
        }
    }

    /// The normalized instance URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a credential pair is configured.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Build a request with the token auth header attached
    fn request(
        &self,
        method: Method,
        path: &str,
        credentials: &ApiCredentials,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);

        self.client
            .request(method, &url)
            .header(
                "Authorization",
                format!("token {}:{}", credentials.key(), credentials.secret()),
            )
            .header("Content-Type", "application/json")
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List the projects shown in the site gallery.
    ///
    /// Without configured credentials this returns an empty list instead of
    /// an error; the gallery renders empty rather than broken.
    pub async fn fetch_projects(&self) -> ErpNextResult<Vec<GalleryProject>> {
        let Some(credentials) = &self.credentials else {
            warn!("ERPNext API credentials missing, serving an empty project list");
            return Ok(Vec::new());
        };

        self.load_projects(credentials).await.map_err(|err| {
            error!("Failed to load ERPNext projects: {err}");
            err
        })
    }

    async fn load_projects(
        &self,
        credentials: &ApiCredentials,
    ) -> ErpNextResult<Vec<GalleryProject>> {
        let response = self
            .request(
                Method::GET,
                &format!("/api/resource/Project?fields={}", PROJECT_FIELDS),
                credentials,
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ErpNextError::status(status));
        }

        let body = response.text().await?;
        let listing: ProjectListResponse = serde_json::from_str(&body)?;

        Ok(listing
            .data
            .into_iter()
            .enumerate()
            .map(|(index, resource)| resource.into_gallery(index, &self.base_url))
            .collect())
    }

    // =========================================================================
    // Lead Operations
    // =========================================================================

    /// Create a lead from a contact-form submission.
    ///
    /// Unlike the read path, missing credentials are an error here; a
    /// submission must never be silently dropped.
    pub async fn create_lead(&self, lead: &Lead) -> ErpNextResult<Value> {
        let Some(credentials) = &self.credentials else {
            error!("Lead submission attempted without ERPNext API credentials");
            return Err(ErpNextError::missing_credentials());
        };

        #[derive(Serialize)]
        struct CreateLeadRequest<'a> {
            first_name: &'a str,
            email_id: &'a str,
            message: &'a str,
            source: &'a str,
        }

        let body = CreateLeadRequest {
            first_name: &lead.name,
            email_id: &lead.email,
            message: &lead.message,
            source: LEAD_SOURCE,
        };
        let response = self
            .request(Method::POST, "/api/resource/Lead", credentials)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = resources::json_or_empty(response).await;
            let message = resources::server_messages(&error_body)
                .unwrap_or_else(|| resources::SUBMIT_FALLBACK_NOTIFICATION.to_string());
            error!("ERPNext rejected the lead (HTTP {status}): {message}");
            return Err(ErpNextError::rejected(message, status));
        }

        Ok(response.json().await?)
    }
}
