//! Lenient field decoders for stored records.
//!
//! The dashboard writes form values as-is: ids from select boxes come
//! through as strings, an empty select as `""`, and untouched text
//! fields as `null`. These helpers accept all of those so a single odd
//! field never drops the whole record.
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

fn id_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// A number, a numeric string, or `""`/`null` for none
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(id_from_value))
}

/// Like [`optional_id`], zero when nothing usable was stored
pub fn id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_id(deserializer)?.unwrap_or_default())
}

/// Free text, `null` reads as empty and numbers are kept as written
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// Free text where blank means absent
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = text(deserializer)?;
    Ok(Some(text).filter(|t| !t.trim().is_empty()))
}

/// Decode `T`, falling back to its default on anything it rejects
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "id")]
        id: i64,
        #[serde(default, deserialize_with = "optional_id")]
        owner: Option<i64>,
        #[serde(default, deserialize_with = "text")]
        note: String,
        #[serde(default, deserialize_with = "optional_text")]
        name: Option<String>,
    }

    fn record(value: Value) -> Record {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn it_reads_ids_from_numbers_and_strings() {
        assert_eq!(record(json!({"id": 4})).id, 4);
        assert_eq!(record(json!({"id": "12"})).id, 12);
        assert_eq!(record(json!({"id": 1736899200000.0})).id, 1736899200000);
        assert_eq!(record(json!({"id": "abc"})).id, 0);
        assert_eq!(record(json!({})).id, 0);
    }

    #[test]
    fn it_reads_empty_refs_as_none() {
        assert_eq!(record(json!({"owner": " 3 "})).owner, Some(3));
        assert_eq!(record(json!({"owner": ""})).owner, None);
        assert_eq!(record(json!({"owner": null})).owner, None);
        assert_eq!(record(json!({"owner": [1]})).owner, None);
    }

    #[test]
    fn it_reads_null_text_as_empty() {
        assert_eq!(record(json!({"note": null})).note, "");
        assert_eq!(record(json!({"note": 42})).note, "42");
        assert_eq!(record(json!({"name": "  "})).name, None);
        assert_eq!(record(json!({"name": "Cabinet"})).name.as_deref(), Some("Cabinet"));
    }
}
