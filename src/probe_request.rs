use std::{io::Read, time::Duration};

use reqwest::blocking::multipart::{Form, Part};
use url::{form_urlencoded, Url};

use crate::{Attachment, ProbeEncoding, ProbeError, ProbeOptions, ProfileFields};

pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const ACCEPT_JSON: &str = "application/json";

/// A fully built POST request. Building does no I/O.
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    pub encoding:    ProbeEncoding,
    pub url:         Url,
    /// Headers in the order they were added, `Content-Type` first.
    pub headers:     Vec<(String, String)>,
    pub fields:      ProfileFields,
    pub attachments: Vec<Attachment>,
    pub body:        Vec<u8>,
    pub timeout:     Duration,
}

impl ProbeRequest {
    /// Build an `application/x-www-form-urlencoded` request carrying `Accept` and `Origin`.
    pub fn form(options: &ProbeOptions, fields: ProfileFields) -> Result<ProbeRequest, ProbeError> {
        if fields.is_empty() {
            return Err(ProbeError::EmptyFieldsError);
        }

        let url = Url::parse(&options.url)?;

        let body = encode_form(&fields).into_bytes();

        let headers = vec![
            ("Content-Type".to_string(), FORM_URLENCODED.to_string()),
            ("Accept".to_string(), ACCEPT_JSON.to_string()),
            ("Origin".to_string(), options.origin.clone()),
        ];

        Ok(ProbeRequest {
            encoding: ProbeEncoding::Form,
            url,
            headers,
            fields,
            attachments: Vec::new(),
            body,
            timeout: options.timeout,
        })
    }

    /// Build a `multipart/form-data` request. The fields come first as text parts, then one file part per attachment.
    pub fn multipart(
        options: &ProbeOptions,
        fields: ProfileFields,
        attachments: Vec<Attachment>,
    ) -> Result<ProbeRequest, ProbeError> {
        if fields.is_empty() {
            return Err(ProbeError::EmptyFieldsError);
        }

        let url = Url::parse(&options.url)?;

        let form = multipart_form(&fields, &attachments)?;

        let headers = vec![(
            "Content-Type".to_string(),
            format!("multipart/form-data; boundary={}", form.boundary()),
        )];

        // every part is in memory, the reader only concatenates them
        let mut body = Vec::new();
        form.into_reader().read_to_end(&mut body)?;

        Ok(ProbeRequest {
            encoding: ProbeEncoding::Multipart,
            url,
            headers,
            fields,
            attachments,
            body,
            timeout: options.timeout,
        })
    }

    /// Look up a header, ignoring the case of its name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }
}

/// Encode the fields as `key=value` pairs joined by `&`.
pub fn encode_form(fields: &ProfileFields) -> String {
    form_urlencoded::Serializer::new(String::new()).extend_pairs(fields.iter()).finish()
}

/// Decode a form-encoded body. Later duplicates replace earlier values.
pub fn decode_form(body: &[u8]) -> ProfileFields {
    form_urlencoded::parse(body).into_owned().collect()
}

fn multipart_form(fields: &ProfileFields, attachments: &[Attachment]) -> Result<Form, ProbeError> {
    let mut form = Form::new();

    for (name, value) in fields.iter() {
        form = form.text(name.to_string(), value.to_string());
    }

    for attachment in attachments {
        let part = Part::bytes(attachment.content.clone())
            .file_name(attachment.file_name.clone())
            .mime_str(attachment.content_type.as_ref())
            .map_err(|_| ProbeError::InvalidHeaderError("Content-Type".to_string()))?;

        form = form.part(attachment.field_name.clone(), part);
    }

    Ok(form)
}
