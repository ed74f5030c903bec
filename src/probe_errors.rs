use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io,
};

#[derive(Debug)]
pub enum ProbeError {
    /// The request carries no fields at all.
    EmptyFieldsError,
    InvalidUrlError(url::ParseError),
    InvalidMimeError(mime::FromStrError),
    /// A header name or value cannot be put on the wire.
    InvalidHeaderError(String),
    /// Connection refused, DNS failure or timeout.
    NetworkError(reqwest::Error),
    /// The response could not be read.
    ProtocolError(reqwest::Error),
    IOError(io::Error),
}

impl From<reqwest::Error> for ProbeError {
    /// Connect failures, timeouts and I/O failures while exchanging the request are network errors.
    /// Anything else, e.g. a response head which is not HTTP or a cut body, is a protocol error.
    #[inline]
    fn from(err: reqwest::Error) -> ProbeError {
        if err.is_connect() || err.is_timeout() || (err.is_request() && has_io_cause(&err)) {
            ProbeError::NetworkError(err)
        } else {
            ProbeError::ProtocolError(err)
        }
    }
}

fn has_io_cause(err: &reqwest::Error) -> bool {
    let mut source = err.source();

    while let Some(cause) = source {
        if cause.is::<io::Error>() {
            return true;
        }

        source = cause.source();
    }

    false
}

impl From<url::ParseError> for ProbeError {
    #[inline]
    fn from(err: url::ParseError) -> ProbeError {
        ProbeError::InvalidUrlError(err)
    }
}

impl From<mime::FromStrError> for ProbeError {
    #[inline]
    fn from(err: mime::FromStrError) -> ProbeError {
        ProbeError::InvalidMimeError(err)
    }
}

impl From<io::Error> for ProbeError {
    #[inline]
    fn from(err: io::Error) -> ProbeError {
        ProbeError::IOError(err)
    }
}

impl Display for ProbeError {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            ProbeError::EmptyFieldsError => f.write_str("The request has no fields to send."),
            ProbeError::InvalidUrlError(err) => {
                f.write_fmt(format_args!("The endpoint URL is invalid: {}", err))
            },
            ProbeError::InvalidMimeError(err) => {
                f.write_fmt(format_args!("The MIME type is invalid: {}", err))
            },
            ProbeError::InvalidHeaderError(name) => {
                f.write_fmt(format_args!("The header `{}` is invalid.", name))
            },
            ProbeError::NetworkError(err) => Display::fmt(err, f),
            ProbeError::ProtocolError(err) => Display::fmt(err, f),
            ProbeError::IOError(err) => Display::fmt(err, f),
        }
    }
}

impl Error for ProbeError {
    // The wrapped errors are displayed as they are, so their causes come next.
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ProbeError::NetworkError(err) | ProbeError::ProtocolError(err) => err.source(),
            ProbeError::IOError(err) => err.source(),
            _ => None,
        }
    }
}
