use std::io::{self, Write};

use crate::{
    report::{write_failure, write_report, write_request},
    Attachment, HttpTransport, ProbeEncoding, ProbeError, ProbeOptions, ProbeRequest, ProbeResult,
    ProfileFields, Transport,
};

/// Sends one registration to the endpoint and hands back what it answered.
#[derive(Debug)]
pub struct Probe<T: Transport> {
    transport: T,
    options:   ProbeOptions,
}

impl Probe<HttpTransport> {
    /// Create a probe which talks to the real endpoint.
    pub fn http(options: ProbeOptions) -> Result<Probe<HttpTransport>, ProbeError> {
        Ok(Probe::new(HttpTransport::new()?, options))
    }
}

impl<T: Transport> Probe<T> {
    #[inline]
    pub fn new(transport: T, options: ProbeOptions) -> Probe<T> {
        Probe {
            transport,
            options,
        }
    }

    #[inline]
    pub fn options(&self) -> &ProbeOptions {
        &self.options
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send every field, placeholders included, as `application/x-www-form-urlencoded`.
    pub fn send_form_encoded(&self, fields: ProfileFields) -> Result<ProbeResult, ProbeError> {
        let request = ProbeRequest::form(&self.options, fields)?;

        self.send(&request)
    }

    /// Send the fields and the attachments as `multipart/form-data`.
    pub fn send_multipart(
        &self,
        fields: ProfileFields,
        attachments: Vec<Attachment>,
    ) -> Result<ProbeResult, ProbeError> {
        let request = ProbeRequest::multipart(&self.options, fields, attachments)?;

        self.send(&request)
    }

    /// Send a built request once.
    pub fn send(&self, request: &ProbeRequest) -> Result<ProbeResult, ProbeError> {
        log::debug!(
            "POST {} ({}, {} bytes, timeout {:?})",
            request.url,
            request.encoding,
            request.body.len(),
            request.timeout
        );

        self.transport.send(request).inspect_err(|err| {
            log::warn!("{} request to {} failed: {}", request.encoding, request.url, err);
        })
    }

    /// Build the sample registration for `encoding`.
    pub fn sample_request(&self, encoding: ProbeEncoding) -> Result<ProbeRequest, ProbeError> {
        match encoding {
            ProbeEncoding::Form => {
                ProbeRequest::form(&self.options, ProfileFields::sample_worker_with_placeholders())
            },
            ProbeEncoding::Multipart => ProbeRequest::multipart(
                &self.options,
                ProfileFields::sample_worker(),
                Attachment::sample_worker(),
            ),
        }
    }

    /// Build, echo, send and report the sample registration.
    ///
    /// A failed probe is written to `out` and yields `None`. Only a failure of `out` itself is an error.
    pub fn run<W: Write>(
        &self,
        out: &mut W,
        encoding: ProbeEncoding,
    ) -> io::Result<Option<ProbeResult>> {
        let request = match self.sample_request(encoding) {
            Ok(request) => request,
            Err(err) => {
                write_failure(out, &err)?;

                return Ok(None);
            },
        };

        self.run_request(out, &request)
    }

    /// Echo, send and report a built request.
    pub fn run_request<W: Write>(
        &self,
        out: &mut W,
        request: &ProbeRequest,
    ) -> io::Result<Option<ProbeResult>> {
        write_request(out, request)?;

        match self.send(request) {
            Ok(result) => {
                write_report(out, &result)?;

                Ok(Some(result))
            },
            Err(err) => {
                write_failure(out, &err)?;

                Ok(None)
            },
        }
    }
}
