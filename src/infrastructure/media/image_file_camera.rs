use crate::domain::entities::media::CapturedPhoto;
use crate::domain::errors::domain_error::DomainError;
use crate::domain::ports::secondary::camera::Camera;

/// Desktop stand-in for the device camera: the "captured" photo is an image
/// the user picks from disk. Blocks until the dialog is answered.
pub struct ImageFileCamera;

impl Camera for ImageFileCamera {
    fn capture_photo(&self) -> Result<CapturedPhoto, DomainError> {
        rfd::FileDialog::new()
            .set_title("Take photo")
            .add_filter("Images", &["jpg", "jpeg", "png"])
            .pick_file()
            .map(|uri| CapturedPhoto { uri })
            .ok_or_else(|| DomainError::Capture("no photo was taken".to_string()))
    }
}
