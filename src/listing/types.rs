use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a listing.
///
/// Remote services hand out either integer or string ids. Both forms are
/// kept as received so they round-trip unchanged, but equality and hashing
/// go through the textual form: `7` and `"7"` name the same listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    pub fn as_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(value) => write!(f, "{}", value),
            RecordId::Text(value) => f.write_str(value),
        }
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RecordId::Int(a), RecordId::Int(b)) => a == b,
            (RecordId::Text(a), RecordId::Text(b)) => a == b,
            _ => self.as_text() == other.as_text(),
        }
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_text().hash(state);
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Int(value)
    }
}

/// A listing that passed validation but has not been stored yet.
///
/// Only [`ListingForm::validate`](super::ListingForm::validate) builds one,
/// so every `Draft` satisfies the field rules.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub name: String,
    pub color: String,
    pub price: f64,
    pub description: String,
    pub image_url: String,
}

impl Draft {
    /// Attach a server id, producing the body sent by a full update.
    pub fn with_id(self, id: RecordId) -> Record {
        Record {
            id,
            name: self.name,
            color: self.color,
            price: self.price,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

/// A motorcycle listing as stored by the remote resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub color: String,
    pub price: f64,
    pub description: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn integer_and_text_ids_compare_by_text() {
        assert_eq!(RecordId::Int(7), RecordId::from("7"));
        assert_ne!(RecordId::Int(7), RecordId::from("07"));

        let mut set = HashSet::new();
        set.insert(RecordId::Int(7));
        assert!(set.contains(&RecordId::from("7")));
    }

    #[test]
    fn record_reads_either_id_shape() {
        let numeric: Record = serde_json::from_str(
            r#"{"id":3,"name":"Wave","color":"Red","price":18500000,"description":"d","imageUrl":"https://x/y.jpg"}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, RecordId::Int(3));
        assert_eq!(numeric.price, 18_500_000.0);

        let text: Record = serde_json::from_str(
            r#"{"id":"a1b2","name":"Wave","color":"Red","price":1.5,"description":"d","imageUrl":"https://x/y.jpg","extra":true}"#,
        )
        .unwrap();
        assert_eq!(text.id, RecordId::from("a1b2"));
        assert_eq!(text.image_url, "https://x/y.jpg");
    }

    #[test]
    fn draft_serializes_without_id() {
        let draft = Draft {
            name: "Wave".into(),
            color: "Red".into(),
            price: 2.0,
            description: "d".into(),
            image_url: "https://x/y.jpg".into(),
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["imageUrl"], "https://x/y.jpg");
    }
}
