//! Item image upload
//!
//! The backend accepts a multipart form with a single `image` part. The
//! size and MIME preconditions are enforced here, before any bytes leave
//! the client.

use crate::{BackendApi, ClientError, ClientResult};
use serde::Deserialize;

/// Client-side upload size limit
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A validated image ready for upload
#[derive(Debug, Clone)]
pub struct ImageUpload {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadedImage {
    image_url: String,
}

impl ImageUpload {
    /// Validate a file before upload: image MIME type (from the file name)
    /// and the 5MB size limit
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> ClientResult<Self> {
        let file_name = file_name.into();
        let content_type = mime_guess::from_path(&file_name).first_or_octet_stream();
        if content_type.type_() != mime_guess::mime::IMAGE {
            return Err(ClientError::Validation(
                "Please select an image file".to_string(),
            ));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(ClientError::Validation(
                "File size must be less than 5MB".to_string(),
            ));
        }
        Ok(Self {
            file_name,
            content_type: content_type.to_string(),
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// POST /upload/image — returns the hosted image URL
    pub async fn send(self, api: &BackendApi) -> ClientResult<String> {
        let part = reqwest::multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.content_type)?;
        let form = reqwest::multipart::Form::new().part("image", part);
        let uploaded: UploadedImage = api.http().post_multipart("upload/image", form).await?;
        Ok(uploaded.image_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_small_images() {
        let upload = ImageUpload::new("dish.jpg", vec![0xff; 1024]).unwrap();
        assert_eq!(upload.content_type(), "image/jpeg");
        assert_eq!(upload.file_name(), "dish.jpg");
    }

    #[test]
    fn rejects_non_image_files() {
        let err = ImageUpload::new("menu.pdf", vec![0; 16]).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("image file"));
    }

    #[test]
    fn rejects_oversized_images() {
        let err = ImageUpload::new("huge.png", vec![0; MAX_IMAGE_BYTES + 1]).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("5MB"));
    }

    #[test]
    fn boundary_size_is_accepted() {
        assert!(ImageUpload::new("edge.png", vec![0; MAX_IMAGE_BYTES]).is_ok());
    }
}
