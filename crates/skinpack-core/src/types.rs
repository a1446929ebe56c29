//! Core data types for the launcher custom skin document.
//!
//! These types are serialized verbatim into `launcher_custom_skins.json`, so
//! field names follow the launcher's camelCase schema.

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// The only document schema version the launcher understands.
pub const SKIN_DOCUMENT_VERSION: u32 = 1;

/// One processed skin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinRecord {
    /// ISO 8601 creation time, millisecond precision
    pub created: String,

    /// ISO 8601 update time, always equal to `created`
    pub updated: String,

    /// Sequential id, `skin_<n>` starting at 1
    pub id: String,

    /// File name up to the first `.`
    pub name: String,

    /// Data URI of the original file bytes
    pub skin_image: String,

    /// Data URI of the 128x128 head preview
    pub model_image: String,

    /// Whether the skin uses the slim arm model
    pub slim: bool,

    /// SHA-256 of the hex-encoded file bytes
    pub texture_id: String,
}

/// Ordered mapping from record id to record.
///
/// Serialized as a JSON object whose key order is the insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomSkins {
    records: Vec<SkinRecord>,
    ids: HashSet<String>,
}

impl CustomSkins {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, keyed by its id.
    ///
    /// Returns the record back if its id is already present.
    pub fn insert(&mut self, record: SkinRecord) -> Result<(), SkinRecord> {
        if self.ids.contains(&record.id) {
            return Err(record);
        }
        self.ids.insert(record.id.clone());
        self.records.push(record);
        Ok(())
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&SkinRecord> {
        if !self.ids.contains(id) {
            return None;
        }
        self.records.iter().find(|r| r.id == id)
    }

    /// Whether a record with this id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SkinRecord> {
        self.records.iter()
    }

    /// Ids in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a CustomSkins {
    type Item = &'a SkinRecord;
    type IntoIter = std::slice::Iter<'a, SkinRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl Serialize for CustomSkins {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.records.len()))?;
        for record in &self.records {
            map.serialize_entry(&record.id, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CustomSkins {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CustomSkinsVisitor;

        impl<'de> Visitor<'de> for CustomSkinsVisitor {
            type Value = CustomSkins;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of skin id to skin record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut skins = CustomSkins::new();
                while let Some((key, record)) = access.next_entry::<String, SkinRecord>()? {
                    if key != record.id {
                        return Err(de::Error::custom(format!(
                            "key {key:?} does not match record id {:?}",
                            record.id
                        )));
                    }
                    skins.insert(record).map_err(|r| {
                        de::Error::custom(format!("duplicate skin id {:?}", r.id))
                    })?;
                }
                Ok(skins)
            }
        }

        deserializer.deserialize_map(CustomSkinsVisitor)
    }
}

/// The complete launcher document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinDocument {
    /// Skins keyed by id, in processing order
    pub custom_skins: CustomSkins,

    /// Schema version, always [`SKIN_DOCUMENT_VERSION`]
    #[serde(deserialize_with = "deserialize_version")]
    pub version: u32,
}

impl SkinDocument {
    /// Create a document at the current schema version.
    pub fn new(custom_skins: CustomSkins) -> Self {
        Self {
            custom_skins,
            version: SKIN_DOCUMENT_VERSION,
        }
    }
}

fn deserialize_version<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let version = u32::deserialize(deserializer)?;
    if version != SKIN_DOCUMENT_VERSION {
        return Err(de::Error::custom(format!(
            "unsupported skin document version {version}"
        )));
    }
    Ok(version)
}
