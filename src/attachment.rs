use std::str::FromStr;

use crate::{
    mime::{self, Mime},
    ProbeError,
};

/// A binary part of a multipart/form-data request. The content is held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    /// The name of the form field.
    pub field_name: String,
    /// The filename declared in `Content-Disposition`.
    pub file_name:  String,
    /// The declared MIME type. Defaults to `application/octet-stream`.
    pub content_type: Mime,
    pub content: Vec<u8>,
}

impl Attachment {
    /// Create an attachment of type `application/octet-stream`.
    pub fn new<N: Into<String>, F: Into<String>, C: Into<Vec<u8>>>(
        field_name: N,
        file_name: F,
        content: C,
    ) -> Attachment {
        Attachment {
            field_name:   field_name.into(),
            file_name:    file_name.into(),
            content_type: mime::APPLICATION_OCTET_STREAM,
            content:      content.into(),
        }
    }

    /// The dummy photo of the sample registration.
    pub fn dummy_photo() -> Attachment {
        Attachment::new("photo", "photo.jpg", &b"dummy photo content"[..])
            .content_type(mime::IMAGE_JPEG)
    }

    /// The dummy identity document of the sample registration.
    pub fn dummy_id_document() -> Attachment {
        Attachment::new("id_document", "document.jpg", &b"dummy id document content"[..])
            .content_type(mime::IMAGE_JPEG)
    }

    /// Both dummy attachments of the sample registration.
    pub fn sample_worker() -> Vec<Attachment> {
        vec![Attachment::dummy_photo(), Attachment::dummy_id_document()]
    }

    /// Set the declared MIME type.
    pub fn content_type(mut self, content_type: Mime) -> Attachment {
        self.content_type = content_type;
        self
    }

    /// Set the declared MIME type by parsing a string.
    pub fn content_type_by_string<S: AsRef<str>>(
        mut self,
        content_type: S,
    ) -> Result<Attachment, ProbeError> {
        self.content_type = Mime::from_str(content_type.as_ref())?;
        Ok(self)
    }
}
