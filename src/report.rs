use std::{
    error::Error,
    io::{self, Write},
};

use serde_json::{json, Map, Value};

use crate::{ProbeEncoding, ProbeRequest, ProbeResult, ResponseBody};

/// Echo what is about to be sent.
pub fn write_request<W: Write>(out: &mut W, request: &ProbeRequest) -> io::Result<()> {
    writeln!(out, "Sending {} request to {}", request.encoding, request.url)?;
    writeln!(out, "Headers: {}", pretty(&string_map(request.headers.iter().map(|(k, v)| (k, v)))))?;
    writeln!(out, "Form data: {}", pretty(&string_map(request.fields.iter())))?;

    if request.encoding == ProbeEncoding::Multipart {
        let mut files = Map::new();

        for attachment in request.attachments.iter() {
            files.insert(
                attachment.field_name.clone(),
                json!({
                    "filename": attachment.file_name,
                    "content_type": attachment.content_type.as_ref(),
                    "size": attachment.content.len(),
                }),
            );
        }

        writeln!(out, "Files: {}", pretty(&Value::Object(files)))?;
    }

    Ok(())
}

/// Print the status, the headers and the body. JSON bodies are pretty-printed, anything else is printed verbatim.
pub fn write_report<W: Write>(out: &mut W, result: &ProbeResult) -> io::Result<()> {
    writeln!(out, "Status code: {}", result.status)?;
    writeln!(out, "Response headers: {}", pretty(&string_map(result.headers.iter())))?;

    match &result.body {
        ResponseBody::Json(value) => writeln!(out, "Response body: {}", pretty(value)),
        ResponseBody::Text(text) => writeln!(out, "Response body (text): {}", text),
    }
}

/// Print an error together with its chain of causes.
pub fn write_failure<W: Write>(out: &mut W, err: &dyn Error) -> io::Result<()> {
    write!(out, "Error: {}", err)?;

    let mut source = err.source();

    while let Some(cause) = source {
        write!(out, ": {}", cause)?;
        source = cause.source();
    }

    writeln!(out)
}

/// `write_report` to stdout. A closed stdout is ignored.
pub fn report(result: &ProbeResult) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if write_report(&mut out, result).is_err() {}
}

fn string_map<I, K, V>(pairs: I) -> Value
where
    I: Iterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>, {
    Value::Object(
        pairs.map(|(k, v)| (k.as_ref().to_string(), Value::String(v.as_ref().to_string()))).collect(),
    )
}

#[inline]
fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attachment, ProbeError, ProbeOptions, ProfileFields};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn json_body_is_pretty_printed() {
        let result = ProbeResult::new(
            201,
            vec![("content-type", "application/json")],
            br#"{"success":true,"id":"w123"}"#,
        );

        let output = render(|out| write_report(out, &result));

        assert!(output.starts_with("Status code: 201\n"));
        assert!(output.contains("\"content-type\": \"application/json\""));
        assert!(output.contains("Response body: {\n  \"success\": true,\n  \"id\": \"w123\"\n}\n"));
    }

    #[test]
    fn text_body_is_printed_raw() {
        let result = ProbeResult::new(
            500,
            vec![("content-type", "text/plain")],
            b"Internal Server Error",
        );

        let output = render(|out| write_report(out, &result));

        assert!(output.starts_with("Status code: 500\n"));
        assert!(output.ends_with("Response body (text): Internal Server Error\n"));
    }

    #[test]
    fn form_request_echo() {
        let request = ProbeRequest::form(
            &ProbeOptions::new(),
            ProfileFields::sample_worker_with_placeholders(),
        )
        .unwrap();

        let output = render(|out| write_request(out, &request));

        assert!(output.starts_with(
            "Sending form request to https://meri-biwi-1.onrender.com/api/register-worker\n"
        ));
        assert!(output.contains("\"Origin\": \"http://localhost:5001\""));
        assert!(output.contains("\"photo\": \"photo.jpg\""));
        assert!(!output.contains("Files:"));
    }

    #[test]
    fn multipart_request_echo_lists_files() {
        let request = ProbeRequest::multipart(
            &ProbeOptions::new(),
            ProfileFields::sample_worker(),
            Attachment::sample_worker(),
        )
        .unwrap();

        let output = render(|out| write_request(out, &request));

        assert!(output.starts_with("Sending multipart request to "));
        assert!(output.contains("\"filename\": \"document.jpg\""));
        assert!(output.contains("\"content_type\": \"image/jpeg\""));
    }

    #[test]
    fn failure_includes_causes() {
        let err = ProbeError::IOError(io::Error::new(io::ErrorKind::ConnectionRefused, "refused"));

        assert_eq!(render(|out| write_failure(out, &err)), "Error: refused\n");

        let err = ProbeError::EmptyFieldsError;

        assert_eq!(render(|out| write_failure(out, &err)), "Error: The request has no fields to send.\n");
    }
}
