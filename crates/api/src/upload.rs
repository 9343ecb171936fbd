//! Create-request bodies and image upload storage.
//!
//! Create endpoints accept either a JSON body or a `multipart/form-data`
//! form. In the form, the optional file part is named `image` and every
//! other part is a text field.

use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::Json;
use filmoteca_core::error::CoreError;
use filmoteca_core::images::{sanitize_file_name, ImageFormat};
use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Name of the multipart part carrying the image file.
pub const IMAGE_FIELD: &str = "image";

/// Public URL prefix under which the upload directory is served.
pub const PUBLIC_PREFIX: &str = "/static/img";

// ---------------------------------------------------------------------------
// Request body
// ---------------------------------------------------------------------------

/// An image part received in a multipart form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Text fields and the optional image collected from a multipart form.
#[derive(Debug, Default)]
pub struct FormFields {
    fields: HashMap<String, String>,
    pub image: Option<ImageUpload>,
}

impl FormFields {
    /// Drain a multipart stream into text fields and at most one image.
    ///
    /// An empty file part (a form submitted without choosing a file) is
    /// treated as no image.
    pub async fn collect(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = FormFields::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            if name == IMAGE_FIELD {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }
                form.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }

    /// A text field that must be present.
    pub fn required(&self, name: &str) -> AppResult<String> {
        self.optional(name).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Missing required field '{name}'"
            )))
        })
    }

    /// A text field that may be absent; an empty value counts as absent.
    pub fn optional(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .filter(|v| !v.is_empty())
            .cloned()
    }

    /// A required field parsed into `T`.
    pub fn parse_required<T: FromStr>(&self, name: &str) -> AppResult<T> {
        let raw = self.required(name)?;
        parse_field(name, &raw)
    }

    /// An optional field parsed into `T`.
    pub fn parse_optional<T: FromStr>(&self, name: &str) -> AppResult<Option<T>> {
        self.optional(name)
            .map(|raw| parse_field(name, &raw))
            .transpose()
    }
}

fn parse_field<T: FromStr>(name: &str, raw: &str) -> AppResult<T> {
    raw.trim().parse::<T>().map_err(|_| {
        AppError::Core(CoreError::Validation(format!(
            "Field '{name}' has an invalid value '{raw}'"
        )))
    })
}

/// Body of a create request: typed JSON, or a multipart form still to be
/// mapped onto the DTO by the handler.
#[derive(Debug)]
pub enum CreateBody<T> {
    Json(T),
    Form(FormFields),
}

impl<S, T> FromRequest<S> for CreateBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            return Ok(CreateBody::Form(FormFields::collect(multipart).await?));
        }

        match Json::<T>::from_request(req, state).await {
            Ok(Json(input)) => Ok(CreateBody::Json(input)),
            Err(rejection) if rejection.status() == StatusCode::UNPROCESSABLE_ENTITY => Err(
                AppError::Core(CoreError::Validation(rejection.body_text())),
            ),
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// Which entity an image belongs to; decides the sub-directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Director,
    Film,
    Character,
}

impl ImageKind {
    pub fn subdir(self) -> &'static str {
        match self {
            Self::Director => "directors",
            Self::Film => "films",
            Self::Character => "characters",
        }
    }
}

/// A file written by [`ImageStore::save`].
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub path: PathBuf,
    pub url: String,
}

/// Writes uploaded images beneath a root directory.
///
/// Files land at `{root}/{subdir}/{uuid}_{name}` and are referenced by
/// `{PUBLIC_PREFIX}/{subdir}/{uuid}_{name}`. The write is not part of the
/// database transaction.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Check the upload's content type against the allow-list.
    pub fn validate(upload: &ImageUpload) -> Result<ImageFormat, CoreError> {
        ImageFormat::from_content_type(&upload.content_type)
    }

    /// Validate and write an image, returning its path and public URL.
    pub async fn save(&self, kind: ImageKind, upload: &ImageUpload) -> AppResult<StoredImage> {
        let format = Self::validate(upload)?;

        let dir = self.root.join(kind.subdir());
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let file_name = format!(
            "{}_{}",
            uuid::Uuid::new_v4(),
            sanitize_file_name(&upload.file_name, format)
        );
        let path = dir.join(&file_name);
        tokio::fs::write(&path, &upload.bytes)
            .await
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        tracing::debug!(path = %path.display(), bytes = upload.bytes.len(), "Image stored");

        Ok(StoredImage {
            path,
            url: format!("{PUBLIC_PREFIX}/{}/{file_name}", kind.subdir()),
        })
    }

    /// Validate and write the image if there is one.
    pub async fn save_optional(
        &self,
        kind: ImageKind,
        upload: Option<&ImageUpload>,
    ) -> AppResult<Option<StoredImage>> {
        match upload {
            Some(upload) => Ok(Some(self.save(kind, upload).await?)),
            None => Ok(None),
        }
    }

    /// Pass `result` through, deleting `stored` first when it is an error so
    /// a failed insert does not leave an orphaned file behind.
    pub async fn discard_on_err<T>(
        &self,
        stored: Option<&StoredImage>,
        result: Result<T, sqlx::Error>,
    ) -> AppResult<T> {
        if result.is_err() {
            if let Some(stored) = stored {
                if let Err(e) = tokio::fs::remove_file(&stored.path).await {
                    tracing::warn!(path = %stored.path.display(), error = %e, "Failed to remove orphaned image");
                }
            }
        }
        result.map_err(AppError::from)
    }
}
