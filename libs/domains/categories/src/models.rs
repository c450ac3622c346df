use database::mongodb::lenient;
use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category card stored in `toyCategories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String, example = "64b7f0c2a1b2c3d4e5f60718")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    /// Image URL
    #[serde(default, deserialize_with = "lenient::text")]
    pub img: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub ratings: f64,
    #[serde(default, deserialize_with = "lenient::text")]
    #[schema(example = "Marvel")]
    pub sub_category: String,
}

/// Projection returned when listing one sub-category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategorySummary {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String, example = "64b7f0c2a1b2c3d4e5f60718")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub img: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub ratings: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn test_category_json_shape() {
        let id = ObjectId::parse_str("64b7f0c2a1b2c3d4e5f60718").unwrap();
        let category: Category = bson::from_document(doc! {
            "_id": id,
            "title": "Iron Man",
            "price": 25,
            "subCategory": "Marvel",
        })
        .unwrap();

        let value = serde_json::to_value(&category).unwrap();

        assert_eq!(value["_id"], "64b7f0c2a1b2c3d4e5f60718");
        assert_eq!(value["subCategory"], "Marvel");
        assert_eq!(value["price"], 25.0);
        assert_eq!(value["img"], "");
    }

    #[test]
    fn test_null_text_fields_decode_as_empty() {
        let document = doc! {
            "_id": ObjectId::new(),
            "title": bson::Bson::Null,
            "img": bson::Bson::Null,
            "subCategory": "Marvel",
        };

        let category: Category = bson::from_document(document.clone()).unwrap();
        let summary: CategorySummary = bson::from_document(document).unwrap();

        assert_eq!(category.title, "");
        assert_eq!(category.sub_category, "Marvel");
        assert_eq!(summary.img, "");
    }
}
