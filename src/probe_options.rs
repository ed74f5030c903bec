use std::time::Duration;

/// The registration endpoint the probe targets by default.
pub const DEFAULT_URL: &str = "https://meri-biwi-1.onrender.com/api/register-worker";
/// The `Origin` header the form variant sends to simulate a cross-origin browser.
pub const DEFAULT_ORIGIN: &str = "http://localhost:5001";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Options for sending a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOptions {
    /// The absolute URL of the registration endpoint.
    pub url:     String,
    /// The value of the `Origin` header of form-encoded requests.
    pub origin:  String,
    /// The time allowed for the whole exchange.
    pub timeout: Duration,
}

impl ProbeOptions {
    /// Create a default `ProbeOptions` instance.
    #[inline]
    pub fn new() -> ProbeOptions {
        ProbeOptions {
            url:     DEFAULT_URL.to_string(),
            origin:  DEFAULT_ORIGIN.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[inline]
    pub fn url<S: Into<String>>(mut self, url: S) -> ProbeOptions {
        self.url = url.into();
        self
    }

    #[inline]
    pub fn origin<S: Into<String>>(mut self, origin: S) -> ProbeOptions {
        self.origin = origin.into();
        self
    }

    #[inline]
    pub fn timeout(mut self, timeout: Duration) -> ProbeOptions {
        self.timeout = timeout;
        self
    }
}

impl Default for ProbeOptions {
    #[inline]
    fn default() -> Self {
        ProbeOptions::new()
    }
}
