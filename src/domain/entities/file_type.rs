use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Coarse classification of a file, derived from its extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Image,
    Video,
    Audio,
    Document,
    Archive,
    Code,
    Unknown,
}

const CATEGORY_TABLE: [(FileCategory, &[&str]); 6] = [
    (
        FileCategory::Image,
        &["jpg", "jpeg", "png", "gif", "bmp", "webp"],
    ),
    (
        FileCategory::Video,
        &["mp4", "avi", "mov", "wmv", "flv", "webm"],
    ),
    (FileCategory::Audio, &["mp3", "wav", "aac", "ogg", "wma"]),
    (FileCategory::Document, &["pdf", "doc", "docx", "txt", "rtf"]),
    (FileCategory::Archive, &["zip", "rar", "7z", "tar", "gz"]),
    (
        FileCategory::Code,
        &["js", "ts", "jsx", "tsx", "html", "css", "py", "java"],
    ),
];

const TEXT_EXTENSIONS: [&str; 2] = ["txt", "md"];

impl FileCategory {
    #[must_use]
    pub fn from_extension(extension: &str) -> Self {
        let extension = extension.to_lowercase();
        CATEGORY_TABLE
            .iter()
            .find(|(_, extensions)| extensions.contains(&extension.as_str()))
            .map_or(FileCategory::Unknown, |(category, _)| *category)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            FileCategory::Image => "image",
            FileCategory::Video => "video",
            FileCategory::Audio => "audio",
            FileCategory::Document => "document",
            FileCategory::Archive => "archive",
            FileCategory::Code => "code",
            FileCategory::Unknown => "unknown",
        }
    }
}

impl Display for FileCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.label())
    }
}

/// Which viewer the presentation layer should open for a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviewKind {
    Image,
    Video,
    Audio,
    Text,
    Other,
}

/// Lower-cased suffix after the last `.` of `filename`, if any.
#[must_use]
pub fn file_extension(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, extension)| extension)
        .filter(|extension| !extension.is_empty())
        .map(str::to_lowercase)
}

#[must_use]
pub fn classify(filename: &str) -> FileCategory {
    file_extension(filename).map_or(FileCategory::Unknown, |extension| {
        FileCategory::from_extension(&extension)
    })
}

#[must_use]
pub fn is_image_file(filename: &str) -> bool {
    classify(filename) == FileCategory::Image
}

#[must_use]
pub fn is_video_file(filename: &str) -> bool {
    classify(filename) == FileCategory::Video
}

#[must_use]
pub fn preview_kind(filename: &str) -> PreviewKind {
    let extension = file_extension(filename).unwrap_or_default();
    if TEXT_EXTENSIONS.contains(&extension.as_str()) {
        return PreviewKind::Text;
    }
    match FileCategory::from_extension(&extension) {
        FileCategory::Image => PreviewKind::Image,
        FileCategory::Video => PreviewKind::Video,
        FileCategory::Audio => PreviewKind::Audio,
        _ => PreviewKind::Other,
    }
}
