use std::fmt::{self, Display, Formatter};

/// How the fields are put into the request body.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProbeEncoding {
    /// `application/x-www-form-urlencoded`, every value is a string.
    Form,
    /// `multipart/form-data`, binary attachments travel as file parts.
    Multipart,
}

impl Display for ProbeEncoding {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            ProbeEncoding::Form => f.write_str("form"),
            ProbeEncoding::Multipart => f.write_str("multipart"),
        }
    }
}
