//! Card Entity
//!
//! A labeled note card. Records coming from storage or from an import file
//! may carry fields this version does not know about; those are kept in
//! `extra` and written back untouched.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::entity::{DomainError, DomainResult, Entity, MissingFields};

/// Card identifier (milliseconds since the Unix epoch at creation time)
pub type CardId = i64;

/// Color tag shown as the card's background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "ColorRepr")]
pub enum CardColor {
    Red,
    #[default]
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Indigo,
    Gray,
}

impl CardColor {
    /// Every color in picker order
    pub const ALL: [CardColor; 8] = [
        CardColor::Red,
        CardColor::Blue,
        CardColor::Green,
        CardColor::Yellow,
        CardColor::Purple,
        CardColor::Pink,
        CardColor::Indigo,
        CardColor::Gray,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardColor::Red => "red",
            CardColor::Blue => "blue",
            CardColor::Green => "green",
            CardColor::Yellow => "yellow",
            CardColor::Purple => "purple",
            CardColor::Pink => "pink",
            CardColor::Indigo => "indigo",
            CardColor::Gray => "gray",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardColor::Red => "Red",
            CardColor::Blue => "Blue",
            CardColor::Green => "Green",
            CardColor::Yellow => "Yellow",
            CardColor::Purple => "Purple",
            CardColor::Pink => "Pink",
            CardColor::Indigo => "Indigo",
            CardColor::Gray => "Gray",
        }
    }

    /// Unrecognized names fall back to blue
    pub fn from_name(name: &str) -> Self {
        CardColor::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .unwrap_or_default()
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Name(String),
    Other(serde::de::IgnoredAny),
}

impl From<ColorRepr> for CardColor {
    fn from(repr: ColorRepr) -> Self {
        match repr {
            ColorRepr::Name(name) => CardColor::from_name(&name),
            ColorRepr::Other(_) => CardColor::default(),
        }
    }
}

/// A note card
///
/// Decoding is lenient: only `id` has to be an integer. Non-string text
/// fields are stringified, and a `createdAt` that is not an ISO timestamp
/// stays in `extra` so it is written back as it came.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    /// Unique identifier, never reassigned
    pub id: CardId,
    pub title: String,
    pub summary: String,
    pub description: String,
    pub color: CardColor,
    /// Creation time, preserved across edits
    #[serde(
        rename = "createdAt",
        skip_serializing_if = "Option::is_none",
        serialize_with = "iso_millis::serialize"
    )]
    pub created_at: Option<DateTime<Utc>>,
    /// Unknown fields, passed through uninterpreted
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Card {
    /// Build a card from a validated draft
    pub fn from_draft(id: CardId, draft: ValidDraft, created_at: DateTime<Utc>) -> Self {
        let ValidDraft(draft) = draft;
        Self {
            id,
            title: draft.title,
            summary: draft.summary,
            description: draft.description,
            color: draft.color,
            created_at: Some(created_at),
            extra: Map::new(),
        }
    }

    /// Plain constructor used for built-in cards and tests
    pub fn new(
        id: CardId,
        title: &str,
        summary: &str,
        description: &str,
        color: CardColor,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            summary: summary.to_string(),
            description: description.to_string(),
            color,
            created_at: Some(created_at),
            extra: Map::new(),
        }
    }

    /// Replace the editable fields, keeping id, creation time and extras
    pub fn apply(&mut self, draft: ValidDraft) {
        let ValidDraft(draft) = draft;
        self.title = draft.title;
        self.summary = draft.summary;
        self.description = draft.description;
        self.color = draft.color;
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = Map::<String, Value>::deserialize(deserializer)?;
        Card::from_record(record).map_err(serde::de::Error::custom)
    }
}

impl Card {
    fn from_record(mut record: Map<String, Value>) -> Result<Self, String> {
        let id = match record.remove("id") {
            Some(value) => value
                .as_i64()
                .ok_or_else(|| format!("id {} is not an integer", value))?,
            None => return Err("missing field `id`".to_string()),
        };
        let created_at = match record.remove(CREATED_AT) {
            Some(value) => match iso_millis::parse(&value) {
                Some(dt) => Some(dt),
                None => {
                    record.insert(CREATED_AT.to_string(), value);
                    None
                }
            },
            None => None,
        };
        let color = record
            .remove("color")
            .and_then(|value| CardColor::deserialize(value).ok())
            .unwrap_or_default();

        Ok(Self {
            id,
            title: take_text(&mut record, "title"),
            summary: take_text(&mut record, "summary"),
            description: take_text(&mut record, "description"),
            color,
            created_at,
            extra: record,
        })
    }
}

const CREATED_AT: &str = "createdAt";

fn take_text(record: &mut Map<String, Value>, key: &str) -> String {
    match record.remove(key) {
        Some(Value::String(text)) => text,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

impl Entity for Card {
    type Id = CardId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Required text fields of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Summary,
    Description,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Summary => "summary",
            DraftField::Description => "description",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unsaved form values
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardDraft {
    pub title: String,
    pub summary: String,
    pub description: String,
    pub color: CardColor,
}

impl CardDraft {
    pub fn new(title: &str, summary: &str, description: &str, color: CardColor) -> Self {
        Self {
            title: title.to_string(),
            summary: summary.to_string(),
            description: description.to_string(),
            color,
        }
    }

    /// Seed a draft from an existing card for editing
    pub fn from_card(card: &Card) -> Self {
        Self {
            title: card.title.clone(),
            summary: card.summary.clone(),
            description: card.description.clone(),
            color: card.color,
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Summary => &self.summary,
            DraftField::Description => &self.description,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Title => self.title = value,
            DraftField::Summary => self.summary = value,
            DraftField::Description => self.description = value,
        }
    }

    pub fn missing_fields(&self) -> Vec<DraftField> {
        [DraftField::Title, DraftField::Summary, DraftField::Description]
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    /// Trim all text fields, failing if any required one ends up empty
    pub fn validate(&self) -> DomainResult<ValidDraft> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DomainError::Validation(MissingFields(missing)));
        }
        Ok(ValidDraft(CardDraft {
            title: self.title.trim().to_string(),
            summary: self.summary.trim().to_string(),
            description: self.description.trim().to_string(),
            color: self.color,
        }))
    }
}

/// A trimmed draft with every required field present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft(CardDraft);

/// `createdAt` in the `toISOString` shape: millisecond precision, `Z` suffix
mod iso_millis {
    use chrono::{DateTime, Utc};
    use serde::Serializer;
    use serde_json::Value;

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.collect_str(&dt.format(FORMAT)),
            None => serializer.serialize_none(),
        }
    }

    /// Any RFC 3339 string; everything else is left to the caller
    pub fn parse(value: &Value) -> Option<DateTime<Utc>> {
        let text = value.as_str()?;
        DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn test_card_creation_from_draft() {
        let draft = CardDraft::new("  Fireball ", "8d6 fire", " boom ", CardColor::Red);
        let card = Card::from_draft(42, draft.validate().unwrap(), at(1_000));
        assert_eq!(card.id(), 42);
        assert_eq!(card.title, "Fireball");
        assert_eq!(card.description, "boom");
        assert_eq!(card.created_at, Some(at(1_000)));
    }

    #[rstest]
    #[case("", "s", "d", vec![DraftField::Title])]
    #[case("t", "   ", "d", vec![DraftField::Summary])]
    #[case("t", "s", "\n\t", vec![DraftField::Description])]
    #[case(" ", "", "", vec![DraftField::Title, DraftField::Summary, DraftField::Description])]
    fn test_blank_fields_fail_validation(
        #[case] title: &str,
        #[case] summary: &str,
        #[case] description: &str,
        #[case] expected: Vec<DraftField>,
    ) {
        let draft = CardDraft::new(title, summary, description, CardColor::Blue);
        assert_eq!(
            draft.validate(),
            Err(DomainError::Validation(MissingFields(expected)))
        );
    }

    #[rstest]
    #[case("\"purple\"", CardColor::Purple)]
    #[case("\"teal\"", CardColor::Blue)]
    #[case("7", CardColor::Blue)]
    #[case("null", CardColor::Blue)]
    fn test_color_deserialization(#[case] raw: &str, #[case] expected: CardColor) {
        let color: CardColor = serde_json::from_str(raw).unwrap();
        assert_eq!(color, expected);
    }

    #[test]
    fn test_card_wire_shape() {
        let card = Card::new(1, "Rage", "+2", "text", CardColor::Red, at(1_700_000_000_123));
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["createdAt"], "2023-11-14T22:13:20.123Z");
        assert_eq!(json["color"], "red");
        assert!(json.get("extra").is_none());
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let raw = r#"{"id":5,"title":"a","summary":"b","description":"c","color":"green","pinned":true}"#;
        let card: Card = serde_json::from_str(raw).unwrap();
        assert_eq!(card.extra.get("pinned"), Some(&Value::Bool(true)));
        assert!(card.created_at.is_none());

        let back = serde_json::to_value(&card).unwrap();
        assert_eq!(back["pinned"], true);
        assert!(back.get("createdAt").is_none());
    }

    #[test]
    fn test_loose_fields_are_kept() {
        let raw = r#"{"id":501,"title":42,"summary":null,"description":["a"],"createdAt":"May 1st"}"#;
        let card: Card = serde_json::from_str(raw).unwrap();
        assert_eq!(card.id, 501);
        assert_eq!(card.title, "42");
        assert_eq!(card.summary, "");
        assert_eq!(card.description, r#"["a"]"#);
        assert_eq!(card.created_at, None);
        assert_eq!(card.extra.get("createdAt"), Some(&Value::String("May 1st".into())));

        let back = serde_json::to_value(&card).unwrap();
        assert_eq!(back["createdAt"], "May 1st");
        assert_eq!(back["color"], "blue");
    }

    #[test]
    fn test_numeric_created_at_passes_through() {
        let card: Card = serde_json::from_str(r#"{"id":1,"createdAt":1714557600000}"#).unwrap();
        assert_eq!(card.created_at, None);
        let back = serde_json::to_value(&card).unwrap();
        assert_eq!(back["createdAt"], 1_714_557_600_000_i64);
    }

    #[rstest]
    #[case(r#"{"title":"no id"}"#)]
    #[case(r#"{"id":"7"}"#)]
    #[case(r#"{"id":7.5}"#)]
    #[case(r#"{"id":null}"#)]
    #[case("[1, 2]")]
    fn test_id_must_be_an_integer(#[case] raw: &str) {
        assert!(serde_json::from_str::<Card>(raw).is_err());
    }

    #[test]
    fn test_apply_keeps_identity() {
        let mut card = Card::new(9, "old", "old", "old", CardColor::Gray, at(5));
        card.extra.insert("deck".into(), Value::String("b".into()));
        card.apply(CardDraft::new("new", "n", "n", CardColor::Pink).validate().unwrap());
        assert_eq!(card.id, 9);
        assert_eq!(card.created_at, Some(at(5)));
        assert_eq!(card.title, "new");
        assert_eq!(card.color, CardColor::Pink);
        assert_eq!(card.extra.len(), 1);
    }
}
