//! Multipart form of an anonymous submission.
//!
//! Raw image parts are named `images` and are held in memory only. Text
//! parts carry the project fields plus free-text identity of the submitter.
//! Parts with any other name are drained and ignored.

use crate::ApiResult;

use sc_media::ImagePayload;

use axum::extract::Multipart;

const FIELD_IMAGES: &str = "images";

#[derive(Debug, Default)]
pub struct SubmissionForm {
    pub title: String,
    pub description: String,
    pub google_form_link: Option<String>,
    /// Text encoding of the contributors array, decoded later
    pub contributors: Option<String>,
    pub uploaded_by: Option<String>,
    pub uploaded_by_name: Option<String>,
    pub uploaded_by_email: Option<String>,
    pub images: Vec<ImagePayload>,
}

impl SubmissionForm {
    /// Read every part of the form. Empty file parts (an unfilled file input) are skipped.
    pub async fn read(multipart: &mut Multipart) -> ApiResult<Self> {
        let mut form = SubmissionForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();

            if name == FIELD_IMAGES {
                let file_name = field.file_name().map(String::from);
                let content_type = field.content_type().map(String::from);
                let bytes = field.bytes().await?;

                if bytes.is_empty() {
                    log::debug!("Skipping empty image part");
                    continue;
                }

                form.images.push(ImagePayload {
                    file_name,
                    content_type,
                    bytes,
                });
                continue;
            }

            let target = match name.as_str() {
                "title" => &mut form.title,
                "description" => &mut form.description,
                "googleFormLink" => form.google_form_link.get_or_insert_default(),
                "contributors" => form.contributors.get_or_insert_default(),
                "uploadedBy" => form.uploaded_by.get_or_insert_default(),
                "uploadedByName" => form.uploaded_by_name.get_or_insert_default(),
                "uploadedByEmail" => form.uploaded_by_email.get_or_insert_default(),
                other => {
                    log::debug!("Ignoring unknown form field '{}'", other);
                    field.bytes().await?;
                    continue;
                }
            };
            *target = field.text().await?;
        }

        Ok(form)
    }
}
