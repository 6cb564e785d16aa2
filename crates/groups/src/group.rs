//! Group shapes: canonical front-end model, wire decoding and image-URL
//! resolution.

use serde::{Deserialize, Serialize};

/// Base path the UI serves category artwork from.
pub const ASSET_BASE: &str = "assets/img/";

/// Placeholder shown when the backend omits the genre name.
pub const UNKNOWN_GENRE: &str = "Unknown genre";

/// Canonical front-end shape of a record group (category).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
    /// Browsable URL resolved from the raw server value.
    pub image_url: String,
    /// Image reference exactly as the server sent it.
    pub image_file: Option<String>,
    pub genre_id: i64,
    pub genre_name: String,
    pub total_records: i64,
}

/// Server-side group shape; accepts both casings per field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroupWire {
    #[serde(default, rename = "IdGroup", alias = "idGroup", alias = "id")]
    pub id: i64,
    #[serde(default, rename = "NameGroup", alias = "nameGroup")]
    pub name: String,
    #[serde(default, rename = "ImageGroup", alias = "imageGroup")]
    pub image: Option<String>,
    #[serde(default, rename = "MusicGenreId", alias = "musicGenreId")]
    pub genre_id: i64,
    #[serde(default, rename = "NameMusicGenre", alias = "nameMusicGenre")]
    pub genre_name: Option<String>,
    #[serde(default, rename = "TotalRecords", alias = "totalRecords")]
    pub total_records: i64,
}

impl From<GroupWire> for Group {
    fn from(wire: GroupWire) -> Self {
        let image_url = wire
            .image
            .as_deref()
            .map(resolve_image_url)
            .unwrap_or_default();
        Self {
            id: wire.id,
            name: wire.name,
            image_url,
            image_file: wire.image,
            genre_id: wire.genre_id,
            genre_name: wire
                .genre_name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_GENRE.to_string()),
            total_records: wire.total_records,
        }
    }
}

/// Allow-listed create/update body; server names differ from ours.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupPayload {
    /// Required for updates only.
    #[serde(rename = "IdGroup", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "NameGroup")]
    pub name: String,
    #[serde(rename = "ImageGroup", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "MusicGenreId")]
    pub genre_id: Option<i64>,
}

impl GroupPayload {
    /// Names of the fields a create is missing, in display form.
    pub(crate) fn missing_for_create(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("Group name is required");
        }
        if self.genre_id.is_none() {
            missing.push("Music genre is required");
        }
        missing
    }

    pub(crate) fn missing_for_update(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.id.is_none() {
            missing.push("Group id is required");
        }
        missing.extend(self.missing_for_create());
        missing
    }

    /// Echo of the submitted entity as a canonical group, used when the
    /// server acknowledges a write without returning one.
    pub(crate) fn echo(&self) -> Group {
        let image_url = self
            .image
            .as_deref()
            .map(resolve_image_url)
            .unwrap_or_default();
        Group {
            id: self.id.unwrap_or(0),
            name: self.name.clone(),
            image_url,
            image_file: self.image.clone(),
            genre_id: self.genre_id.unwrap_or(0),
            genre_name: UNKNOWN_GENRE.to_string(),
            total_records: 0,
        }
    }
}

/// Resolve a raw image reference into a browsable URL.
///
/// Absolute URLs pass through; relative paths lose any leading separator and
/// gain the asset base prefix unless already rooted under it.
pub fn resolve_image_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_string();
    }
    let trimmed = raw.trim_start_matches('/');
    if trimmed.starts_with(ASSET_BASE) {
        trimmed.to_string()
    } else {
        format!("{ASSET_BASE}{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn relative_image_gains_asset_base() {
        assert_eq!(resolve_image_url("rock.png"), "assets/img/rock.png");
        assert_eq!(resolve_image_url("/rock.png"), "assets/img/rock.png");
    }

    #[test]
    fn rooted_image_is_not_double_prefixed() {
        assert_eq!(resolve_image_url("assets/img/rock.png"), "assets/img/rock.png");
        assert_eq!(resolve_image_url("/assets/img/rock.png"), "assets/img/rock.png");
    }

    #[test]
    fn absolute_url_passes_through() {
        assert_eq!(
            resolve_image_url("https://cdn.example.com/rock.png"),
            "https://cdn.example.com/rock.png"
        );
    }

    #[test]
    fn absent_genre_name_gets_placeholder() {
        let wire: GroupWire =
            serde_json::from_value(json!({"IdGroup": 1, "NameGroup": "Rock"})).unwrap();
        assert_eq!(Group::from(wire).genre_name, UNKNOWN_GENRE);
    }

    #[test]
    fn wire_decodes_both_casings() {
        let wire: GroupWire = serde_json::from_value(json!({
            "idGroup": 2,
            "nameGroup": "Jazz",
            "nameMusicGenre": "Jazz",
            "totalRecords": 9
        }))
        .unwrap();
        let group = Group::from(wire);
        assert_eq!(group.id, 2);
        assert_eq!(group.genre_name, "Jazz");
        assert_eq!(group.total_records, 9);
    }

    proptest! {
        #[test]
        fn resolved_urls_are_browsable(raw in "[a-z0-9./_-]{0,24}") {
            let resolved = resolve_image_url(&raw);
            prop_assert!(!resolved.starts_with('/'));
            prop_assert!(
                resolved.starts_with("http://")
                    || resolved.starts_with("https://")
                    || resolved.starts_with(ASSET_BASE)
            );
        }
    }
}
