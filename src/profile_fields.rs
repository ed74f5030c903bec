use indexmap::IndexMap;

/// The placeholder filename sent as the `photo` field by the form variant.
pub const PHOTO_PLACEHOLDER: &str = "photo.jpg";
/// The placeholder filename sent as the `id_document` field by the form variant.
pub const ID_DOCUMENT_PLACEHOLDER: &str = "document.jpg";

/// Ordered worker registration fields. Insertion order is the order on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    fields: IndexMap<String, String>,
}

impl ProfileFields {
    /// Create an empty `ProfileFields` instance.
    #[inline]
    pub fn new() -> ProfileFields {
        ProfileFields {
            fields: IndexMap::new(),
        }
    }

    /// The scalar fields of the sample worker registration.
    pub fn sample_worker() -> ProfileFields {
        ProfileFields::new()
            .field("name", "Test Worker")
            .field("email", "test@example.com")
            .field("phone", "1234567890")
            .field("address", "123 Test Street")
            .field("city", "delhi")
            .field("gender", "female")
            .field("service", "cleaning")
            .field("exp", "2")
            .field("availability", "part-time")
            .field("id_proof", "aadhar")
            .field("id_proof_number", "123456789012")
            .field("dob", "1990-01-01T00:00:00.000Z")
            .field(
                "about",
                "I am an experienced cleaner with great attention to detail and reliable service.",
            )
    }

    /// The sample worker registration with `photo` and `id_document` as literal filenames, as the form variant sends it.
    pub fn sample_worker_with_placeholders() -> ProfileFields {
        ProfileFields::sample_worker()
            .field("photo", PHOTO_PLACEHOLDER)
            .field("id_document", ID_DOCUMENT_PLACEHOLDER)
    }

    /// Set a field. Setting an existing name replaces the value and keeps its position.
    pub fn field<N: Into<String>, V: Into<String>>(mut self, name: N, value: V) -> ProfileFields {
        self.insert(name, value);
        self
    }

    #[inline]
    pub fn insert<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        self.fields.insert(name.into(), value.into());
    }

    /// Remove a field, keeping the order of the rest.
    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.shift_remove(name)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for ProfileFields {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut fields = ProfileFields::new();

        for (name, value) in iter {
            fields.insert(name, value);
        }

        fields
    }
}
