use database::mongodb::lenient;
use mongodb::bson::{oid::ObjectId, serde_helpers::serialize_object_id_as_hex_string};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};

/// Toy listing stored in the `allToys` collection.
///
/// Every field except `_id` decodes leniently: documents seeded by hand or by
/// older clients may be missing fields or carry prices as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Toy {
    /// Store-assigned identifier, rendered as a 24-character hex string
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String, example = "64b7f0c2a1b2c3d4e5f60718")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub available_quantity: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub ratings: f64,
    /// Image URL
    #[serde(default, deserialize_with = "lenient::text")]
    pub img: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub seller_name: String,
    /// Owner of the listing
    #[serde(default, deserialize_with = "lenient::text")]
    pub seller_email: String,
    /// Links the toy to `toyCategories` documents by value
    #[serde(default, deserialize_with = "lenient::text")]
    pub sub_category: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
}

/// Projection returned by the catalogue listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToySummary {
    #[serde(rename = "_id", serialize_with = "serialize_object_id_as_hex_string")]
    #[schema(value_type = String, example = "64b7f0c2a1b2c3d4e5f60718")]
    pub id: ObjectId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub seller_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub sub_category: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub available_quantity: f64,
}

/// Body of create and replace requests: the nine mutable toy fields.
///
/// Serialized as-is into the inserted document and into the `$set` of a
/// replace, so the field names here are the stored field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToyInput {
    #[schema(example = "Red Car")]
    pub title: String,
    #[serde(deserialize_with = "lenient::number")]
    #[schema(example = 12.5)]
    pub price: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub available_quantity: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub ratings: f64,
    pub img: String,
    pub seller_name: String,
    pub seller_email: String,
    pub sub_category: String,
    pub description: String,
}

/// Price ordering accepted by the "my toys" listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum PriceSort {
    Increasing,
    Decreasing,
}

impl PriceSort {
    /// MongoDB sort direction for the `price` key.
    pub fn direction(self) -> i32 {
        match self {
            PriceSort::Increasing => 1,
            PriceSort::Decreasing => -1,
        }
    }
}

/// Query string of `GET /myToys`.
///
/// Both parameters are kept as raw strings: an empty `email` means "all
/// sellers" and an unrecognised `sort` means "unordered", neither is an error.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MyToysQuery {
    /// Only toys whose `sellerEmail` equals this value
    pub email: Option<String>,
    /// `increasing` or `decreasing` by price
    pub sort: Option<String>,
}

impl MyToysQuery {
    pub fn seller_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|email| !email.is_empty())
    }

    pub fn price_sort(&self) -> Option<PriceSort> {
        self.sort.as_deref().and_then(|sort| sort.parse().ok())
    }
}

/// Result of an insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    /// Hex id of the new document
    pub inserted_id: String,
}

/// Result of a replace-by-id with upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    /// 1 when no document matched and one was created
    pub upserted_count: u64,
    pub upserted_id: Option<String>,
}

/// Result of a delete-by-id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    /// 0 or 1
    pub deleted_count: u64,
}
