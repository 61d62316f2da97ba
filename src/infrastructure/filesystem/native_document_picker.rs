use crate::domain::entities::file_type::{FileCategory, file_extension};
use crate::domain::entities::media::{DocumentFilter, PickedDocument};
use crate::domain::ports::secondary::document_picker::DocumentPicker;

/// System file dialog. Blocks the calling thread until the user answers,
/// so callers on an async runtime should hand it to a blocking task.
pub struct NativeDocumentPicker;

impl DocumentPicker for NativeDocumentPicker {
    fn pick_document(&self, filter: &DocumentFilter) -> Option<PickedDocument> {
        let mut dialog = rfd::FileDialog::new();
        if let DocumentFilter::Extensions(extensions) = filter {
            dialog = dialog.add_filter("Documents", extensions);
        }

        let uri = dialog.pick_file()?;
        let name = uri.file_name()?.to_string_lossy().into_owned();
        let mime_type = file_extension(&name)
            .map(|extension| FileCategory::from_extension(&extension).label().to_owned());
        Some(PickedDocument {
            uri,
            name,
            mime_type,
        })
    }
}
