use crate::error::ValidationError;

fn ext_from_mime(ct: &str) -> Option<&'static str> {
    match ct {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "image/webp" => Some("webp"),
        "image/heic" => Some("heic"),
        _ => None,
    }
}

/// Checks an uploaded image before it is handed to a catalog.
/// Returns the file extension for the content type.
pub fn check_upload(body: &[u8], content_type: &str) -> Result<&'static str, ValidationError> {
    if body.is_empty() {
        return Err(ValidationError::EmptyImage);
    }
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    ext_from_mime(&mime).ok_or_else(|| ValidationError::UnsupportedImage(content_type.to_string()))
}
