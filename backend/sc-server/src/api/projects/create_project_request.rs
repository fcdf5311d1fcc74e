use sc_core::ContributorsField;

use serde::Deserialize;

/// JSON body of an authenticated submission
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub google_form_link: Option<String>,

    /// JSON array, or its text encoding
    #[serde(default)]
    pub contributors: Option<ContributorsField>,

    /// Pre-encoded images (URLs or data URIs); exactly two are required
    #[serde(default)]
    pub images: Option<Vec<String>>,
}
