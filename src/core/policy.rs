//! Which released files can be previewed, and how.
//!
//! Classification is by file name suffix only; size ceilings come from
//! [`crate::config`].

use crate::config::{MAX_CSV_PREVIEW_BYTES, MAX_PREVIEW_BYTES};

/// Renderable categories of released files.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Csv,
    Html,
    Image,
    Txt,
    Json,
    Unsupported,
}

impl FileKind {
    /// Classify a file name by its (case-insensitive) extension.
    pub fn classify(file_name: &str) -> Self {
        let Some((_, ext)) = file_name.rsplit_once('.') else {
            return Self::Unsupported;
        };
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Self::Csv,
            "html" => Self::Html,
            "gif" | "jpg" | "jpeg" | "png" | "svg" => Self::Image,
            "txt" => Self::Txt,
            "json" => Self::Json,
            _ => Self::Unsupported,
        }
    }

    /// Size ceiling in bytes for this kind.
    pub fn max_bytes(self) -> u64 {
        match self {
            Self::Csv => MAX_CSV_PREVIEW_BYTES,
            _ => MAX_PREVIEW_BYTES,
        }
    }

    /// Whether the body is read as a binary blob rather than text.
    pub fn is_binary(self) -> bool {
        self == Self::Image
    }
}

/// True iff the file name has a previewable extension.
pub fn can_display(file_name: &str) -> bool {
    FileKind::classify(file_name) != FileKind::Unsupported
}

/// Why a file is never fetched for preview.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    UnsupportedType,
    TooLarge,
}

/// Apply the type and size gates. `Ok` means the file may be fetched.
pub fn check(file_name: &str, size: u64) -> Result<FileKind, Rejection> {
    let kind = FileKind::classify(file_name);
    if kind == FileKind::Unsupported {
        return Err(Rejection::UnsupportedType);
    }
    if size > kind.max_bytes() {
        return Err(Rejection::TooLarge);
    }
    Ok(kind)
}

/// MIME type for an image blob, from the file extension.
pub fn image_mime(file_name: &str) -> &'static str {
    match file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("gif") => "image/gif",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(FileKind::classify("output/table.csv"), FileKind::Csv);
        assert_eq!(FileKind::classify("report.HTML"), FileKind::Html);
        assert_eq!(FileKind::classify("plot.png"), FileKind::Image);
        assert_eq!(FileKind::classify("plot.JPEG"), FileKind::Image);
        assert_eq!(FileKind::classify("logo.svg"), FileKind::Image);
        assert_eq!(FileKind::classify("anim.gif"), FileKind::Image);
        assert_eq!(FileKind::classify("notes.txt"), FileKind::Txt);
        assert_eq!(FileKind::classify("meta.json"), FileKind::Json);
        assert_eq!(FileKind::classify("report.xyz"), FileKind::Unsupported);
        assert_eq!(FileKind::classify("Makefile"), FileKind::Unsupported);
        assert_eq!(FileKind::classify("archive.csv.gz"), FileKind::Unsupported);
    }

    #[test]
    fn test_can_display() {
        assert!(can_display("a/b/c.csv"));
        assert!(!can_display("report.xyz"));
        assert!(!can_display("htm.l"));
    }

    #[test]
    fn test_csv_ceiling() {
        assert_eq!(check("t.csv", 5_000_000), Ok(FileKind::Csv));
        assert_eq!(check("t.csv", 5_000_001), Err(Rejection::TooLarge));
    }

    #[test]
    fn test_global_ceiling() {
        assert_eq!(check("t.txt", 20_000_000), Ok(FileKind::Txt));
        assert_eq!(check("t.png", 20_000_001), Err(Rejection::TooLarge));
    }

    #[test]
    fn test_type_checked_before_size() {
        assert_eq!(check("t.xyz", 0), Err(Rejection::UnsupportedType));
        assert_eq!(check("t.xyz", u64::MAX), Err(Rejection::UnsupportedType));
    }

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime("a.SVG"), "image/svg+xml");
        assert_eq!(image_mime("a.jpg"), "image/jpeg");
        assert_eq!(image_mime("noext"), "application/octet-stream");
    }
}
