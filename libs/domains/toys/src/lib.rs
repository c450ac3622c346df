//! Toys Domain
//!
//! Toy listings backed by the `allToys` MongoDB collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Listing limit, query parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Documents, request bodies, write acknowledgements
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_toys::{handlers, mongodb::MongoToyRepository, service::ToyService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("toyParadise");
//!
//! let repository = MongoToyRepository::new(db);
//! repository.create_indexes().await?;
//!
//! let router = handlers::router(ToyService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ToyError, ToyResult};
pub use handlers::ApiDoc;
pub use models::{
    DeleteAck, InsertAck, MyToysQuery, PriceSort, Toy, ToyInput, ToySummary, UpdateAck,
};
pub use mongodb::MongoToyRepository;
pub use repository::ToyRepository;
pub use service::ToyService;
