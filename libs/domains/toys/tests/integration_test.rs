//! Integration tests for the Toys domain
//!
//! These run against a real MongoDB via testcontainers and need a Docker
//! daemon, so they are ignored by default:
//!
//! ```text
//! cargo test -p domain_toys -- --ignored
//! ```

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_toys::*;
use http_body_util::BodyExt;
use ::mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};
use test_utils::{TestDataBuilder, TestMongo, assertions::*};
use tower::ServiceExt;

fn toy_input(value: Value) -> ToyInput {
    serde_json::from_value(value).unwrap()
}

/// The nine caller-supplied fields of a stored toy.
fn stored_fields(toy: Toy) -> ToyInput {
    ToyInput {
        title: toy.title,
        price: toy.price,
        available_quantity: toy.available_quantity,
        ratings: toy.ratings,
        img: toy.img,
        seller_name: toy.seller_name,
        seller_email: toy.seller_email,
        sub_category: toy.sub_category,
        description: toy.description,
    }
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn repository(mongo: &TestMongo, builder: &TestDataBuilder) -> MongoToyRepository {
    let repo = MongoToyRepository::new(mongo.database(&builder.database_name()));
    repo.create_indexes().await.unwrap();
    repo
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_insert_then_get_returns_posted_fields() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("insert_then_get");
    let repo = repository(&mongo, &builder).await;

    let input = toy_input(builder.toy("Space Rocket", 30.0));
    let ack = repo.insert(input.clone()).await.unwrap();
    assert!(ack.acknowledged);

    let id = ObjectId::parse_str(&ack.inserted_id).unwrap();
    let toy = assert_some(repo.get_by_id(id).await.unwrap(), "inserted toy");

    assert_eq!(toy.id, id);
    assert_eq!(stored_fields(toy), input);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_search_is_case_insensitive_substring() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("search_substring");
    let repo = repository(&mongo, &builder).await;

    for title in ["Red Car", "BORED Bear", "Blue Truck", "Car (v2)"] {
        repo.insert(toy_input(builder.toy(title, 10.0))).await.unwrap();
    }

    let mut titles: Vec<String> = repo
        .search_by_title("red")
        .await
        .unwrap()
        .into_iter()
        .map(|toy| toy.title)
        .collect();
    titles.sort();
    assert_eq!(titles, vec!["BORED Bear", "Red Car"]);

    let literal = repo.search_by_title("(v2)").await.unwrap();
    assert_eq!(literal.len(), 1);

    assert!(repo.search_by_title("zeppelin").await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_list_summaries_is_capped() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("list_capped");
    let repo = repository(&mongo, &builder).await;

    for i in 0..25 {
        repo.insert(toy_input(builder.toy(&format!("Toy {}", i), i as f64)))
            .await
            .unwrap();
    }

    let service = ToyService::new(repo);
    let summaries = service.list_toys().await.unwrap();

    assert_eq!(summaries.len(), 20);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_my_toys_filters_and_sorts() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("my_toys");
    let repo = repository(&mongo, &builder).await;

    let alice = builder.seller_email("alice");
    let bob = builder.seller_email("bob");
    for (price, seller) in [(5.0, &alice), (1.0, &alice), (3.0, &bob), (9.0, &alice)] {
        repo.insert(toy_input(builder.toy_for("Toy", price, seller)))
            .await
            .unwrap();
    }

    let service = ToyService::new(repo);
    let query = |sort: &str| MyToysQuery {
        email: Some(alice.clone()),
        sort: Some(sort.to_string()),
    };

    let ascending = service.my_toys(query("increasing")).await.unwrap();
    assert_eq!(ascending.len(), 3);
    assert!(ascending.iter().all(|toy| toy.seller_email == alice));
    let prices: Vec<f64> = ascending.iter().map(|toy| toy.price).collect();
    assert_non_decreasing(&prices, "increasing sort");

    let descending = service.my_toys(query("decreasing")).await.unwrap();
    let prices: Vec<f64> = descending.iter().map(|toy| toy.price).collect();
    assert_non_increasing(&prices, "decreasing sort");

    let everyone = service.my_toys(MyToysQuery::default()).await.unwrap();
    assert_eq!(everyone.len(), 4);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_replace_missing_id_upserts() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("replace_upsert");
    let repo = repository(&mongo, &builder).await;

    let id = ObjectId::new();
    let ack = repo
        .replace(id, toy_input(builder.toy("Ghost Ship", 8.0)))
        .await
        .unwrap();

    assert_eq!(ack.matched_count, 0);
    assert_eq!(ack.upserted_count, 1);
    assert_eq!(ack.upserted_id, Some(id.to_hex()));
    assert!(repo.get_by_id(id).await.unwrap().is_some());
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_delete_twice_reports_zero_second_time() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("delete_twice");
    let repo = repository(&mongo, &builder).await;

    let ack = repo.insert(toy_input(builder.toy("Kite", 4.0))).await.unwrap();
    let id = ObjectId::parse_str(&ack.inserted_id).unwrap();

    assert_eq!(repo.delete(id).await.unwrap().deleted_count, 1);
    assert_eq!(repo.delete(id).await.unwrap().deleted_count, 0);
    assert!(repo.get_by_id(id).await.unwrap().is_none());
}

// ============================================================================
// HTTP Scenario
// ============================================================================

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_red_car_lifecycle_over_http() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("red_car_lifecycle");
    let app = handlers::router(ToyService::new(repository(&mongo, &builder).await));

    let created = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/allToys")
                .header("content-type", "application/json")
                .body(Body::from(builder.toy("Red Car", 12.5).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);
    let id = json_body(created.into_body()).await["insertedId"]
        .as_str()
        .unwrap()
        .to_string();

    let found = app
        .clone()
        .oneshot(Request::builder().uri("/searchByToy/red").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let found = json_body(found.into_body()).await;
    assert!(found.as_array().unwrap().iter().any(|toy| toy["_id"] == id.as_str()));

    let mut updated = builder.toy("Red Car", 15.0);
    updated["price"] = json!(15);
    let replaced = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(format!("/allToys/{}", id))
                .header("content-type", "application/json")
                .body(Body::from(updated.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let replaced = json_body(replaced.into_body()).await;
    assert_eq!(replaced["matchedCount"], 1);
    assert_eq!(replaced["modifiedCount"], 1);

    let fetched = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/allToys/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(json_body(fetched.into_body()).await["price"], 15.0);

    let deleted = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/allToys/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(json_body(deleted.into_body()).await["deletedCount"], 1);

    let gone = app
        .oneshot(
            Request::builder()
                .uri(format!("/allToys/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(gone.status(), StatusCode::OK);
    assert_eq!(json_body(gone.into_body()).await, Value::Null);
}
