//! Serde helpers for collections whose documents are written by loosely
//! typed clients.
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct Listing {
//!     #[serde(default, deserialize_with = "database::mongodb::lenient::number")]
//!     price: f64,
//!     #[serde(default, deserialize_with = "database::mongodb::lenient::text")]
//!     title: String,
//! }
//! ```

use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

/// Accepts any BSON/JSON number, a numeric string, or null (as `0`).
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawNumber>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(RawNumber::Number(n)) => Ok(n),
        Some(RawNumber::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            trimmed.parse().map_err(|_| {
                D::Error::invalid_value(Unexpected::Str(&text), &"a number or numeric string")
            })
        }
    }
}

/// Accepts a string or null (as the empty string).
///
/// A partial `$set` from an older client stores `null` for every field it
/// did not send.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, Bson, doc};

    #[derive(Debug, Deserialize)]
    struct Priced {
        #[serde(default, deserialize_with = "number")]
        price: f64,
    }

    #[derive(Debug, Deserialize)]
    struct Titled {
        #[serde(default, deserialize_with = "text")]
        title: String,
    }

    #[test]
    fn test_accepts_bson_integer_and_double() {
        let from_int: Priced = bson::from_document(doc! { "price": 7 }).unwrap();
        let from_long: Priced = bson::from_document(doc! { "price": 7_i64 }).unwrap();
        let from_double: Priced = bson::from_document(doc! { "price": 7.25 }).unwrap();

        assert_eq!(from_int.price, 7.0);
        assert_eq!(from_long.price, 7.0);
        assert_eq!(from_double.price, 7.25);
    }

    #[test]
    fn test_accepts_numeric_string_null_and_missing() {
        let from_text: Priced = bson::from_document(doc! { "price": " 12.5 " }).unwrap();
        let from_null: Priced = bson::from_document(doc! { "price": Bson::Null }).unwrap();
        let missing: Priced = bson::from_document(doc! {}).unwrap();

        assert_eq!(from_text.price, 12.5);
        assert_eq!(from_null.price, 0.0);
        assert_eq!(missing.price, 0.0);
    }

    #[test]
    fn test_rejects_non_numeric_string() {
        let result = serde_json::from_str::<Priced>(r#"{"price":"cheap"}"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_text_maps_null_and_missing_to_empty() {
        let from_null: Titled = bson::from_document(doc! { "title": Bson::Null }).unwrap();
        let missing: Titled = bson::from_document(doc! {}).unwrap();
        let present: Titled = bson::from_document(doc! { "title": "Red Car" }).unwrap();

        assert_eq!(from_null.title, "");
        assert_eq!(missing.title, "");
        assert_eq!(present.title, "Red Car");
    }

    #[test]
    fn test_text_rejects_non_string() {
        let result = bson::from_document::<Titled>(doc! { "title": 42 });

        assert!(result.is_err());
    }
}
