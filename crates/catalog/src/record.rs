//! Record shapes: canonical front-end model and tolerant wire decoding.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Canonical front-end shape of a catalog record.
///
/// Constructed fresh per response and handed to the UI; nothing here is
/// cached or persisted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub price: f64,
    pub stock: i64,
    pub discontinued: bool,
    pub group_id: i64,
    /// Denormalized by the by-group listing; absent elsewhere.
    pub group_name: Option<String>,
    pub image: Option<String>,
}

/// Server-side record shape.
///
/// The backend is inconsistent about casing (notably `Stock` vs `stock`),
/// so every field accepts both spellings; lowercase is canonical internally.
/// Price and stock decode defensively: numbers, numeric strings, or absent
/// all normalize to a plain numeric value (0 on anything malformed).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordWire {
    #[serde(default, rename = "IdRecord", alias = "idRecord", alias = "id")]
    pub id: i64,
    #[serde(
        default,
        rename = "TitleRecord",
        alias = "titleRecord",
        alias = "title"
    )]
    pub title: String,
    #[serde(default, rename = "YearRecord", alias = "yearRecord", alias = "year")]
    pub year: i32,
    #[serde(
        default,
        rename = "Price",
        alias = "price",
        deserialize_with = "lenient_f64"
    )]
    pub price: f64,
    #[serde(
        default,
        rename = "Stock",
        alias = "stock",
        deserialize_with = "lenient_i64"
    )]
    pub stock: i64,
    #[serde(default, rename = "Discontinued", alias = "discontinued")]
    pub discontinued: bool,
    #[serde(
        default,
        rename = "IdGroup",
        alias = "idGroup",
        alias = "GroupId",
        alias = "groupId"
    )]
    pub group_id: i64,
    #[serde(default, rename = "NameGroup", alias = "nameGroup")]
    pub group_name: Option<String>,
    #[serde(
        default,
        rename = "ImageRecord",
        alias = "imageRecord",
        alias = "photoName"
    )]
    pub image: Option<String>,
}

impl From<RecordWire> for Record {
    fn from(wire: RecordWire) -> Self {
        Self {
            id: wire.id,
            title: wire.title,
            year: wire.year,
            price: wire.price,
            stock: wire.stock,
            discontinued: wire.discontinued,
            group_id: wire.group_id,
            group_name: wire.group_name,
            image: wire.image,
        }
    }
}

/// Allow-listed create/update body.
///
/// Server field names diverge from the front-end ones, so this is an
/// explicit remap rather than a passthrough of [`Record`]. Fields the server
/// owns (the record id, the denormalized group name) are deliberately not
/// serializable here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordPayload {
    #[serde(rename = "TitleRecord")]
    pub title: String,
    #[serde(rename = "YearRecord")]
    pub year: i32,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Stock")]
    pub stock: i64,
    #[serde(rename = "Discontinued")]
    pub discontinued: bool,
    #[serde(rename = "GroupId")]
    pub group_id: i64,
    #[serde(rename = "ImageRecord", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl RecordPayload {
    pub fn from_record(record: &Record) -> Self {
        Self {
            title: record.title.clone(),
            year: record.year,
            price: record.price,
            stock: record.stock,
            discontinued: record.discontinued,
            group_id: record.group_id,
            image: record.image.clone(),
        }
    }

    /// Echo of the submitted payload as a canonical record, used when the
    /// server acknowledges a write without returning the entity.
    pub(crate) fn echo(&self, id: i64) -> Record {
        Record {
            id,
            title: self.title.clone(),
            year: self.year,
            price: self.price,
            stock: self.stock,
            discontinued: self.discontinued,
            group_id: self.group_id,
            group_name: None,
            image: self.image.clone(),
        }
    }
}

/// `data` shape of the by-group listing: the group's records plus the group
/// metadata to denormalize onto each of them.
#[derive(Debug, Deserialize)]
pub(crate) struct GroupRecordsWire {
    #[serde(rename = "Records", alias = "records")]
    pub records: Vec<RecordWire>,
    #[serde(rename = "NameGroup", alias = "nameGroup")]
    pub group_name: String,
    #[serde(default, rename = "IdGroup", alias = "idGroup")]
    pub group_id: i64,
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().unwrap_or_else(|| n.as_f64().unwrap_or(0.0) as i64),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
