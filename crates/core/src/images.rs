//! Image upload rules: the content-type allow-list and stored file naming.

use crate::error::CoreError;

/// Accepted image content types.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpeg", "image/webp"];

/// An accepted image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Webp,
}

impl ImageFormat {
    /// Resolve a `Content-Type` value against the allow-list.
    ///
    /// Parameters such as `; charset=...` are ignored and the comparison is
    /// case-insensitive. `image/jpg` is not a registered type and is rejected.
    pub fn from_content_type(content_type: &str) -> Result<Self, CoreError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "image/png" => Ok(Self::Png),
            "image/jpeg" => Ok(Self::Jpeg),
            "image/webp" => Ok(Self::Webp),
            _ => Err(CoreError::Validation(format!(
                "Unsupported image format '{content_type}'. Supported: {}",
                ALLOWED_IMAGE_TYPES.join(", ")
            ))),
        }
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
        }
    }
}

/// Reduce a client-supplied file name to a safe single path component.
///
/// Directory parts are dropped, anything outside `[A-Za-z0-9._-]` becomes `_`,
/// and leading dots are stripped. Falls back to `image.{ext}` when nothing
/// usable remains.
pub fn sanitize_file_name(original: &str, format: ImageFormat) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("");
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '_') {
        format!("image.{}", format.extension())
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_types_resolve() {
        assert_eq!(ImageFormat::from_content_type("image/png").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_content_type("image/jpeg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_content_type("image/webp").unwrap(), ImageFormat::Webp);
    }

    #[test]
    fn content_type_parameters_and_case_ignored() {
        assert_eq!(
            ImageFormat::from_content_type("IMAGE/PNG; foo=bar").unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn other_types_rejected() {
        assert!(ImageFormat::from_content_type("application/pdf").is_err());
        assert!(ImageFormat::from_content_type("image/gif").is_err());
        assert!(ImageFormat::from_content_type("").is_err());
    }

    #[test]
    fn sanitize_strips_directories_and_odd_characters() {
        assert_eq!(
            sanitize_file_name("../../etc/pass wd.png", ImageFormat::Png),
            "pass_wd.png"
        );
        assert_eq!(
            sanitize_file_name("C:\\Users\\me\\poster.jpg", ImageFormat::Jpeg),
            "poster.jpg"
        );
    }

    #[test]
    fn sanitize_falls_back_when_empty() {
        assert_eq!(sanitize_file_name("", ImageFormat::Webp), "image.webp");
        assert_eq!(sanitize_file_name("...", ImageFormat::Png), "image.png");
        assert_eq!(sanitize_file_name("日本", ImageFormat::Jpeg), "image.jpg");
    }
}
