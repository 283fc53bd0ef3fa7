//! Validated image payloads
//!
//! [`EncodedImage`] is the only way image data enters the scan lifecycle. It
//! can only be built from bytes that the `image` crate fully decodes, so every
//! later stage (preview, analysis request, export) can rely on the MIME type
//! and dimensions being real.

use std::io::Cursor;
use std::path::Path;

use base64::Engine as _;
use image::ImageFormat;

use crate::error::{Error, Result};

/// File extensions offered by the file-selection prompt
pub const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp", "tif", "tiff"];

/// Image bytes that are known to decode
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedImage {
    bytes: Vec<u8>,
    mime_type: &'static str,
    width: u32,
    height: u32,
}

impl EncodedImage {
    /// Validate raw file bytes.
    ///
    /// Fails with [`Error::InvalidImage`] when the input is empty, in a format
    /// outside the supported set, or cannot be decoded.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::invalid_image("file is empty"));
        }

        let format = image::guess_format(&bytes)
            .map_err(|e| Error::invalid_image(format!("unrecognized format ({})", e)))?;
        let mime_type = mime_for_format(format).ok_or_else(|| {
            Error::invalid_image(format!("unsupported format {:?}", format))
        })?;

        let decoded = image::ImageReader::with_format(Cursor::new(&bytes), format)
            .decode()
            .map_err(|e| Error::invalid_image(e.to_string()))?;

        Ok(Self {
            mime_type,
            width: decoded.width(),
            height: decoded.height(),
            bytes,
        })
    }

    pub fn mime_type(&self) -> &'static str {
        self.mime_type
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Standard base64 of the raw bytes
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Short human-readable size, e.g. `"1.4 MB"`
    pub fn size_label(&self) -> String {
        let len = self.bytes.len() as f64;
        if len >= 1024.0 * 1024.0 {
            format!("{:.1} MB", len / (1024.0 * 1024.0))
        } else if len >= 1024.0 {
            format!("{:.1} KB", len / 1024.0)
        } else {
            format!("{} B", self.bytes.len())
        }
    }
}

// Payloads can be megabytes; keep debug output to the metadata.
impl std::fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedImage")
            .field("mime_type", &self.mime_type)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

fn mime_for_format(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::WebP => Some("image/webp"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::Bmp => Some("image/bmp"),
        ImageFormat::Tiff => Some("image/tiff"),
        _ => None,
    }
}

/// Whether a path names a file the selection prompt accepts (by extension)
pub fn has_accepted_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ACCEPTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Fixtures shared with downstream crates' tests
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_support {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, RgbImage};

    /// Encode a solid-colour image of the given size in `format`
    pub fn encoded(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 84, 60]),
        ));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, format)
            .expect("encoding an in-memory test image");
        out.into_inner()
    }

    /// A small valid PNG
    pub fn png(width: u32, height: u32) -> Vec<u8> {
        encoded(width, height, ImageFormat::Png)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support;
    use super::*;

    #[test]
    fn test_accepts_png() {
        let image = EncodedImage::from_bytes(test_support::png(8, 6)).unwrap();
        assert_eq!(image.mime_type(), "image/png");
        assert_eq!((image.width(), image.height()), (8, 6));
    }

    #[test]
    fn test_accepts_jpeg() {
        let bytes = test_support::encoded(16, 16, ImageFormat::Jpeg);
        let image = EncodedImage::from_bytes(bytes).unwrap();
        assert_eq!(image.mime_type(), "image/jpeg");
    }

    #[test]
    fn test_rejects_empty() {
        let err = EncodedImage::from_bytes(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::InvalidImage { .. }));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_rejects_text() {
        let err = EncodedImage::from_bytes(b"definitely not an image".to_vec()).unwrap_err();
        assert!(matches!(err, Error::InvalidImage { .. }));
    }

    #[test]
    fn test_rejects_truncated_png() {
        let mut bytes = test_support::png(32, 32);
        bytes.truncate(40);
        assert!(EncodedImage::from_bytes(bytes).is_err());
    }

    #[test]
    fn test_base64_round_trips_bytes() {
        use base64::Engine as _;

        let bytes = test_support::png(2, 2);
        let image = EncodedImage::from_bytes(bytes.clone()).unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(image.to_base64())
            .unwrap();
        assert_eq!(decoded, bytes);
        assert_eq!(image.byte_len(), bytes.len());
    }

    #[test]
    fn test_debug_omits_payload() {
        let image = EncodedImage::from_bytes(test_support::png(2, 2)).unwrap();
        let debug = format!("{:?}", image);
        assert!(debug.contains("image/png"));
        assert!(!debug.contains("base64"));
    }

    #[test]
    fn test_size_label() {
        let image = EncodedImage::from_bytes(test_support::png(2, 2)).unwrap();
        assert!(image.size_label().ends_with(" B"));
    }

    #[test]
    fn test_accepted_extensions() {
        assert!(has_accepted_extension(Path::new("/tmp/scalp.JPG")));
        assert!(has_accepted_extension(Path::new("macro.webp")));
        assert!(!has_accepted_extension(Path::new("notes.txt")));
        assert!(!has_accepted_extension(Path::new("no_extension")));
    }
}
