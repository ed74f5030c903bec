use reqwest::{
    blocking::Client,
    header::{HeaderMap, HeaderName, HeaderValue},
};

use crate::{ProbeError, ProbeRequest, ProbeResult};

/// Sends a built request and collects the response.
pub trait Transport {
    fn send(&self, request: &ProbeRequest) -> Result<ProbeResult, ProbeError>;
}

/// Sends requests over the network with a blocking HTTP client. One attempt, no retries.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<HttpTransport, ProbeError> {
        let client = Client::builder().build()?;

        Ok(HttpTransport {
            client,
        })
    }

    /// Use a preconfigured client, e.g. one that ignores the system proxy.
    #[inline]
    pub fn with_client(client: Client) -> HttpTransport {
        HttpTransport {
            client,
        }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ProbeRequest) -> Result<ProbeResult, ProbeError> {
        let mut headers = HeaderMap::with_capacity(request.headers.len());

        for (name, value) in request.headers.iter() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ProbeError::InvalidHeaderError(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| ProbeError::InvalidHeaderError(name.clone()))?;

            headers.append(header_name, header_value);
        }

        let response = self
            .client
            .post(request.url.clone())
            .headers(headers)
            .timeout(request.timeout)
            .body(request.body.clone())
            .send()?;

        let status = response.status().as_u16();

        let headers: Vec<(String, String)> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (name.as_str().to_string(), String::from_utf8_lossy(value.as_bytes()).into_owned())
            })
            .collect();

        log::debug!("{} answered {} with {} headers", request.url, status, headers.len());

        // the whole body is read before the result is built
        let body = response.bytes()?;

        Ok(ProbeResult::new(status, headers, &body))
    }
}
