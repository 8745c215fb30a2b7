//! Wire-level data transfer objects.
//!
//! These are the JSON shapes exchanged with API clients, kept separate from
//! the persisted entity records. Create/update payloads reference related
//! dimensions by id; responses embed the referenced entity.

pub mod api;
pub mod date;
pub mod discipline;
pub mod material;
pub mod tool;
pub mod transaction;

use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field from an explicit `null` in partial-update
/// payloads: `None` = leave unchanged, `Some(None)` = clear the value.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use crate::model::material::UpdateMaterialDto;

    #[test]
    fn update_payload_distinguishes_absent_from_null() {
        let absent: UpdateMaterialDto = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(absent.discipline_id, None);

        let cleared: UpdateMaterialDto =
            serde_json::from_str(r#"{"discipline_id": null}"#).unwrap();
        assert_eq!(cleared.discipline_id, Some(None));

        let set: UpdateMaterialDto = serde_json::from_str(r#"{"discipline_id": 3}"#).unwrap();
        assert_eq!(set.discipline_id, Some(Some(3)));
    }
}
