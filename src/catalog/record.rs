use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::normalization::platform::tokenize;

/// One movie release row as served by the catalog backend.
///
/// The backend is curated by hand, so every field is optional and scalar
/// fields are accepted as strings, numbers or booleans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    /// Raw platform label, possibly multi-valued ("Netflix, Prime Video").
    #[serde(default, deserialize_with = "lenient_text")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub available_on: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient_text")]
    pub kind: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub imdb_rating: Option<String>,
}

impl MovieRecord {
    pub fn new(name: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            platform: Some(platform.into()),
            ..Self::default()
        }
    }

    pub fn with_available_on(mut self, available_on: impl Into<String>) -> Self {
        self.available_on = Some(available_on.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_imdb_rating(mut self, rating: impl Into<String>) -> Self {
        self.imdb_rating = Some(rating.into());
        self
    }

    /// Title or empty string.
    pub fn title(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Canonical platform names for this record, in field order.
    pub fn platforms(&self) -> Vec<String> {
        tokenize(self.platform.as_deref())
    }

    /// Rating cell text; missing or empty ratings render as "N/A".
    pub fn imdb_rating_display(&self) -> &str {
        match self.imdb_rating.as_deref() {
            Some(r) if !r.is_empty() => r,
            _ => "N/A",
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_full_row() {
        let rec: MovieRecord = serde_json::from_value(json!({
            "name": "Devara",
            "platform": "Netflix",
            "available_on": "Nov 8",
            "type": "Movie",
            "imdb_rating": "6.9"
        }))
        .unwrap();
        assert_eq!(rec.title(), "Devara");
        assert_eq!(rec.kind.as_deref(), Some("Movie"));
        assert_eq!(rec.imdb_rating_display(), "6.9");
    }

    #[test]
    fn tolerates_missing_and_numeric_fields() {
        let rec: MovieRecord = serde_json::from_value(json!({
            "name": null,
            "imdb_rating": 7.5,
            "poster": "ignored.jpg"
        }))
        .unwrap();
        assert_eq!(rec.name, None);
        assert_eq!(rec.title(), "");
        assert_eq!(rec.platform, None);
        assert_eq!(rec.imdb_rating.as_deref(), Some("7.5"));
        assert!(rec.platforms().is_empty());
    }

    #[test]
    fn blank_rating_shows_placeholder() {
        let rec = MovieRecord::new("Pushpa 2", "Netflix").with_imdb_rating("");
        assert_eq!(rec.imdb_rating_display(), "N/A");
        assert_eq!(MovieRecord::default().imdb_rating_display(), "N/A");
    }

    #[test]
    fn platforms_are_canonical() {
        let rec = MovieRecord::new("Kalki", "Amazon Prime Video, Netflix");
        assert_eq!(rec.platforms(), vec!["Prime Video", "Netflix"]);
    }
}
