use actix_web::test::TestRequest;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
  db::{self, models::NewUser, users},
  service::{jwt::encode_jwt, AppState},
};


const TEST_SECRET: &str = "test-secret";

#[derive(Deserialize)]
struct LoginResponse {
  token: String,
  user_id: i32,
}

/// Fresh in-memory database per test. A single pooled connection keeps every
/// request on the same database.
pub fn init() -> AppState {
  let pool = db::connect(":memory:", 1).expect("Failed to initialize database");
  AppState::new(pool, TEST_SECRET)
}

/// Inserts a user directly and returns their id with a valid token.
pub fn signed_in(data: &AppState, name: &str) -> (i32, String) {
  let conn = data.pool.get().expect("Failed to get db connection");
  let email = format!("{}@example.com", name.to_lowercase());
  let user = users::insert(
    &conn,
    &NewUser {
      name,
      email: &email,
      password: "unused",
    },
  )
  .expect("Failed to create user");
  let token = encode_jwt(user.id, 1, TEST_SECRET).expect("Failed to issue token");
  (user.id, token)
}

pub fn graphql_request(query: &str, variables: Value, token: Option<&str>) -> TestRequest {
  let req = TestRequest::post()
    .uri("/graphql")
    .set_json(&json!({ "query": query, "variables": variables }));
  match token {
    Some(token) => req.insert_header(("Authorization", format!("Bearer {}", token))),
    None => req,
  }
}

pub const FEED: &str = "query Feed($filter: String, $skip: Int, $take: Int, $orderBy: [FlashcardOrderByInput!]) {
  flashcards(filter: $filter, skip: $skip, take: $take, orderBy: $orderBy) {
    id
    count
    flashcards { id question answer isDone }
  }
}";

pub const CREATE: &str = "mutation Create($question: String!, $answer: String!) {
  createFlashcard(question: $question, answer: $answer) { id question answer isDone }
}";

pub const UPDATE: &str = "mutation Update($id: Int!, $question: String, $answer: String, $isDone: Boolean) {
  updateFlashcard(id: $id, question: $question, answer: $answer, isDone: $isDone) { id question answer isDone }
}";

pub const DELETE: &str = "mutation Delete($id: Int!) {
  deleteFlashcard(id: $id) { id question }
}";
