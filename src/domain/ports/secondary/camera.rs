use crate::domain::entities::media::CapturedPhoto;
use crate::domain::errors::domain_error::DomainError;

pub trait Camera: Send + Sync {
    fn capture_photo(&self) -> Result<CapturedPhoto, DomainError>;
}
