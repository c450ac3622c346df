//! Categories Domain
//!
//! Read-only access to the `toyCategories` collection, which is seeded
//! outside this service. Toys link to categories by the `subCategory` value.
//!
//! ```rust,no_run
//! use domain_categories::{handlers, MongoCategoryRepository, CategoryService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoCategoryRepository::new(client.database("toyParadise"));
//! let router = handlers::router(CategoryService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{CategoryError, CategoryResult};
pub use handlers::ApiDoc;
pub use models::{Category, CategorySummary};
pub use mongodb::MongoCategoryRepository;
pub use repository::CategoryRepository;
pub use service::CategoryService;
