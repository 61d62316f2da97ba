use crate::domain::entities::media::{DocumentFilter, PickedDocument};

pub trait DocumentPicker: Send + Sync {
    /// Lets the user choose a file; `None` when the dialog is cancelled.
    fn pick_document(&self, filter: &DocumentFilter) -> Option<PickedDocument>;
}
