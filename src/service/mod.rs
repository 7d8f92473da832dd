use actix_web::web::{get, post, ServiceConfig};
use std::sync::Arc;

use super::{
  db::DbPool,
  graphql::{create_schema, Schema},
};

pub mod endpoints;
pub mod jwt;

#[derive(Clone)]
pub struct AppState {
  pub schema: Arc<Schema>,
  pub pool: DbPool,
  pub jwt_secret: Arc<str>,
}

impl AppState {
  pub fn new(pool: DbPool, jwt_secret: &str) -> Self {
    AppState {
      schema: Arc::new(create_schema()),
      pool,
      jwt_secret: Arc::from(jwt_secret),
    }
  }
}

pub fn routes(cfg: &mut ServiceConfig) {
  cfg
    .route("/login", post().to(endpoints::login))
    .route("/graphql", post().to(endpoints::graphql))
    .route("/graphiql", get().to(endpoints::graphiql));
}
