use base64::Engine;
use image::ImageFormat;

use crate::models::FileMeta;

/// True for MIME types the form accepts as photos
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// MIME type from the file name, for browsers that report none
fn guess_mime_from_name(name: &str) -> Option<&'static str> {
    ImageFormat::from_path(name).ok().map(|f| f.to_mime_type())
}

/// Resolves the MIME type of a selected file
///
/// Uses the browser-reported type when present, otherwise guesses from the
/// extension. Returns `None` for anything that is not an image.
pub fn resolve_image_mime(meta: &FileMeta) -> Option<String> {
    let reported = meta
        .content_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let mime = match reported {
        Some(t) => t.to_string(),
        None => guess_mime_from_name(&meta.name)?.to_string(),
    };

    is_image_mime(&mime).then_some(mime)
}

/// Encodes raw bytes as a `data:` URL
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime, b64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_type_wins() {
        let meta = FileMeta::new("photo.bin", Some("image/png".to_string()));
        assert_eq!(resolve_image_mime(&meta).as_deref(), Some("image/png"));
    }

    #[test]
    fn test_non_image_is_skipped() {
        let meta = FileMeta::new("notes.pdf", Some("application/pdf".to_string()));
        assert_eq!(resolve_image_mime(&meta), None);

        let meta = FileMeta::new("notes.txt", None);
        assert_eq!(resolve_image_mime(&meta), None);
    }

    #[test]
    fn test_guess_from_extension() {
        let meta = FileMeta::new("IMG_0001.JPG", Some(String::new()));
        assert_eq!(resolve_image_mime(&meta).as_deref(), Some("image/jpeg"));

        let meta = FileMeta::new("sketch.webp", None);
        assert_eq!(resolve_image_mime(&meta).as_deref(), Some("image/webp"));
    }

    #[test]
    fn test_data_url() {
        assert_eq!(to_data_url("image/png", b"abc"), "data:image/png;base64,YWJj");
    }
}
