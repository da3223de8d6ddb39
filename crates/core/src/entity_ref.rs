//! Identity classification for nested program entities.
//!
//! Clients send workouts, exercises and sets with an optional `id`. Rows
//! they read back carry the server-assigned integer; rows they just added in
//! the UI carry nothing, `null`, or a client-side placeholder such as
//! `"tmp-3"`. [`EntityRef`] turns that untyped field into an explicit tag
//! once, at deserialization, so the reconcilers never look at raw JSON.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::types::DbId;

/// Whether an incoming entity refers to a persisted row or is new.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EntityRef {
    /// Refers to the persisted row with this identifier.
    Existing(DbId),
    /// Not persisted yet; the server assigns an identifier on insert.
    #[default]
    New,
}

impl EntityRef {
    /// Classify a raw identifier value.
    ///
    /// `Existing` only for a positive whole number that fits in a [`DbId`]:
    /// a JSON integer, an integer-valued float, or a string made of ASCII
    /// digits only. Every other shape is `New`.
    pub fn classify(value: &Value) -> Self {
        let id = match value {
            Value::Number(n) if n.is_f64() => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f < i64::MAX as f64)
                .map(|f| f as i64),
            Value::Number(n) => n.as_i64(),
            Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                s.parse::<DbId>().ok()
            }
            _ => None,
        };

        match id {
            Some(id) if id > 0 => EntityRef::Existing(id),
            _ => EntityRef::New,
        }
    }

    /// The persisted identifier, if any.
    pub fn id(&self) -> Option<DbId> {
        match self {
            EntityRef::Existing(id) => Some(*id),
            EntityRef::New => None,
        }
    }

    pub fn is_existing(&self) -> bool {
        matches!(self, EntityRef::Existing(_))
    }
}

impl<'de> Deserialize<'de> for EntityRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(EntityRef::classify(&value))
    }
}

impl Serialize for EntityRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            EntityRef::Existing(id) => serializer.serialize_i64(*id),
            EntityRef::New => serializer.serialize_none(),
        }
    }
}
