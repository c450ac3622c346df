//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! #[ignore = "requires a Docker daemon"]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let db = mongo.database(&builder.database_name());
//!     let toy = builder.toy("Red Car", 12.5);
//! }
//! ```

use serde_json::{Value, json};

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic values
///
/// The same seed always produces the same names, emails and payloads, so a
/// failing test can be reproduced exactly.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (seed is the hash of the name)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_toy");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Database name unique to this builder's seed.
    pub fn database_name(&self) -> String {
        format!("test_{}", self.seed)
    }

    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("toy", "main"), "test-toy-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Seller email unique to this seed and `who`.
    pub fn seller_email(&self, who: &str) -> String {
        format!("{}.{}@toys.test", who, self.seed)
    }

    /// A full toy payload in the wire format accepted by `POST /allToys`.
    pub fn toy(&self, title: &str, price: f64) -> Value {
        self.toy_for(title, price, &self.seller_email("seller"))
    }

    /// Same as [`toy`](Self::toy) but owned by `seller_email`.
    pub fn toy_for(&self, title: &str, price: f64, seller_email: &str) -> Value {
        json!({
            "title": title,
            "price": price,
            "availableQuantity": 10,
            "ratings": 4.5,
            "img": format!("https://img.toys.test/{}.png", self.seed),
            "sellerName": "Test Seller",
            "sellerEmail": seller_email,
            "subCategory": "Marvel",
            "description": format!("{} fixture", title),
        })
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `values` never decreases.
    pub fn assert_non_decreasing(values: &[f64], context: &str) {
        for pair in values.windows(2) {
            assert!(pair[0] <= pair[1], "{}: {:?} is not ascending", context, values);
        }
    }

    /// Assert that `values` never increases.
    pub fn assert_non_increasing(values: &[f64], context: &str) {
        for pair in values.windows(2) {
            assert!(pair[0] >= pair[1], "{}: {:?} is not descending", context, values);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.seller_email("a"), builder2.seller_email("a"));
        assert_eq!(builder1.toy("Robot", 9.0), builder2.toy("Robot", 9.0));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.database_name(), builder2.database_name());
    }

    #[test]
    fn test_toy_payload_uses_wire_field_names() {
        let toy = TestDataBuilder::new(1).toy("Red Car", 12.5);

        assert_eq!(toy["title"], "Red Car");
        assert_eq!(toy["price"], 12.5);
        assert_eq!(toy["sellerEmail"], "seller.1@toys.test");
        assert!(toy.get("_id").is_none());
    }

    #[test]
    fn test_ordering_assertions() {
        assertions::assert_non_decreasing(&[1.0, 1.0, 3.5], "asc");
        assertions::assert_non_increasing(&[9.0, 2.0, 2.0], "desc");
    }

    #[test]
    #[should_panic(expected = "not ascending")]
    fn test_non_decreasing_detects_violation() {
        assertions::assert_non_decreasing(&[2.0, 1.0], "asc");
    }
}
