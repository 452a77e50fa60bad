//! Schemaless task record type.

use mongodb::bson::{Bson, Document};

/// A schemaless task record.
///
/// The store enforces no schema and neither does this type: any mapping of
/// string keys to BSON values is accepted, including one missing every
/// conventional field. The conventional fields (`title`, `tags`, `owner`,
/// `custom_fields`) have builder-style helpers, but none is required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskRecord(Document);

impl TaskRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing document as a record.
    #[must_use]
    pub const fn from_document(document: Document) -> Self {
        Self(document)
    }

    /// Returns the underlying document.
    #[must_use]
    pub const fn as_document(&self) -> &Document {
        &self.0
    }

    /// Consumes the record, returning the underlying document.
    #[must_use]
    pub fn into_document(self) -> Document {
        self.0
    }

    /// Sets an arbitrary field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.0.insert(key, value);
        self
    }

    /// Sets the conventional `title` field.
    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with_field("title", title.into())
    }

    /// Sets the conventional `tags` field.
    ///
    /// Tags are an ordered sequence; duplicates are kept.
    #[must_use]
    pub fn with_tags<I, S>(self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<Bson> = tags.into_iter().map(|tag| Bson::String(tag.into())).collect();
        self.with_field("tags", values)
    }

    /// Sets the conventional `owner` field.
    #[must_use]
    pub fn with_owner(self, owner: impl Into<String>) -> Self {
        self.with_field("owner", owner.into())
    }

    /// Sets the conventional `custom_fields` nested mapping.
    #[must_use]
    pub fn with_custom_fields(self, fields: Document) -> Self {
        self.with_field("custom_fields", fields)
    }

    /// Returns the string values of the `tags` field, in order.
    ///
    /// Records without a `tags` array yield an empty iterator; non-string
    /// elements are skipped.
    #[must_use]
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.0
            .get_array("tags")
            .into_iter()
            .flatten()
            .filter_map(Bson::as_str)
    }

    /// Returns a copy of the record with the store-assigned identifier
    /// removed.
    ///
    /// Useful for identifier-independent equality between a record as
    /// supplied and the same record as read back.
    #[must_use]
    pub fn without_id(&self) -> Self {
        let mut fields = self.0.clone();
        fields.remove("_id");
        Self(fields)
    }
}

impl From<Document> for TaskRecord {
    fn from(document: Document) -> Self {
        Self(document)
    }
}
