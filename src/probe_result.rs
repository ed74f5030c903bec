use indexmap::IndexMap;
use serde_json::Value;

/// The body of a response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// The body parsed as JSON.
    Json(Value),
    /// The body as (lossily decoded) text.
    Text(String),
}

impl ResponseBody {
    /// Try JSON first and fall back to text. A body which is not JSON is not an error.
    pub fn from_bytes(bytes: &[u8]) -> ResponseBody {
        match serde_json::from_slice(bytes) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(String::from_utf8_lossy(bytes).into_owned()),
        }
    }

    #[inline]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Json(_) => None,
            ResponseBody::Text(text) => Some(text),
        }
    }
}

/// What came back from the endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub status:  u16,
    /// Header names are lower-cased. Repeated headers are joined with `, `.
    pub headers: IndexMap<String, String>,
    pub body:    ResponseBody,
}

impl ProbeResult {
    pub fn new<I, N, V>(status: u16, headers: I, body: &[u8]) -> ProbeResult
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: AsRef<str>, {
        let mut map: IndexMap<String, String> = IndexMap::new();

        for (name, value) in headers {
            let name = name.as_ref().to_ascii_lowercase();
            let value = value.as_ref();

            match map.get_mut(&name) {
                Some(existing) => {
                    existing.push_str(", ");
                    existing.push_str(value);
                },
                None => {
                    map.insert(name, value.to_string());
                },
            }
        }

        ProbeResult {
            status,
            headers: map,
            body: ResponseBody::from_bytes(body),
        }
    }

    #[inline]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_body_is_parsed() {
        let result = ProbeResult::new(
            201,
            vec![("Content-Type", "application/json")],
            br#"{"success": true, "id": "w123"}"#,
        );

        assert_eq!(result.status, 201);
        assert_eq!(result.body.as_json(), Some(&json!({"success": true, "id": "w123"})));
    }

    #[test]
    fn text_body_falls_back() {
        let result = ProbeResult::new(500, Vec::<(&str, &str)>::new(), b"Internal Server Error");

        assert_eq!(result.body, ResponseBody::Text("Internal Server Error".to_string()));
    }

    #[test]
    fn json_content_type_with_broken_body_is_text() {
        let result =
            ProbeResult::new(200, vec![("content-type", "application/json")], b"{\"success\": tr");

        assert_eq!(result.body.as_text(), Some("{\"success\": tr"));
    }

    #[test]
    fn empty_and_binary_bodies_are_text() {
        assert_eq!(ResponseBody::from_bytes(b""), ResponseBody::Text(String::new()));
        assert_eq!(ResponseBody::from_bytes(&[0xff, b'a']), ResponseBody::Text("\u{fffd}a".to_string()));
    }

    #[test]
    fn repeated_headers_are_joined() {
        let result = ProbeResult::new(
            200,
            vec![("Set-Cookie", "a=1"), ("X-Id", "7"), ("set-cookie", "b=2")],
            b"",
        );

        assert_eq!(result.header("Set-Cookie"), Some("a=1, b=2"));
        assert_eq!(result.headers.keys().collect::<Vec<_>>(), vec!["set-cookie", "x-id"]);
    }
}
