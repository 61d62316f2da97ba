use crate::domain::errors::domain_error::DomainError;
use std::path::Path;

pub trait MediaLibrary: Send + Sync {
    fn save_to_gallery(&self, uri: &Path) -> Result<(), DomainError>;
}
