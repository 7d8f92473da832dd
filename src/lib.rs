#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;
#[macro_use]
extern crate failure;
#[macro_use]
extern crate juniper;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod db;
pub mod graphql;
pub mod service;

#[cfg(test)]
mod test;

use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};
use juniper::FieldError;
use serde_json::json;

#[derive(Debug, Fail)]
pub enum ApiError {
  #[fail(display = "{}", _0)]
  Unauthenticated(&'static str),
  #[fail(display = "Record not found")]
  NotFound,
  #[fail(display = "Invalid argument: {}", _0)]
  InvalidArgument(String),
  #[fail(display = "Store error: {}", _0)]
  Store(#[cause] diesel::result::Error),
  #[fail(display = "Connection pool error: {}", _0)]
  Pool(#[cause] diesel::r2d2::PoolError),
  #[fail(display = "Password hashing error: {}", _0)]
  Hash(bcrypt::BcryptError),
  #[fail(display = "Token error: {}", _0)]
  Token(jsonwebtoken::errors::Error),
  #[fail(display = "Serialization error: {}", _0)]
  Json(serde_json::Error),
  #[fail(display = "Blocking task was cancelled")]
  Blocking,
}

impl ApiError {
  /// Tags the error with a `type` extension so clients can tell an
  /// authentication failure from a missing record or a broken store.
  pub fn into_field_error(self) -> FieldError {
    let extensions = match &self {
      ApiError::Unauthenticated(_) => graphql_value!({ "type": "UNAUTHENTICATED" }),
      ApiError::NotFound => graphql_value!({ "type": "NOT_FOUND" }),
      ApiError::InvalidArgument(_) => graphql_value!({ "type": "BAD_REQUEST" }),
      _ => graphql_value!({ "type": "INTERNAL" }),
    };
    FieldError::new(self.to_string(), extensions)
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
      ApiError::NotFound => StatusCode::NOT_FOUND,
      ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
      _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    if self.status_code().is_server_error() {
      error!("{}", self);
    }
    HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
  }
}

impl From<diesel::result::Error> for ApiError {
  fn from(err: diesel::result::Error) -> ApiError {
    match err {
      diesel::result::Error::NotFound => ApiError::NotFound,
      err => ApiError::Store(err),
    }
  }
}

impl From<diesel::r2d2::PoolError> for ApiError {
  fn from(err: diesel::r2d2::PoolError) -> ApiError {
    ApiError::Pool(err)
  }
}

impl From<bcrypt::BcryptError> for ApiError {
  fn from(err: bcrypt::BcryptError) -> ApiError {
    ApiError::Hash(err)
  }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
  fn from(err: jsonwebtoken::errors::Error) -> ApiError {
    ApiError::Token(err)
  }
}

impl From<serde_json::Error> for ApiError {
  fn from(err: serde_json::Error) -> ApiError {
    ApiError::Json(err)
  }
}

impl From<BlockingError> for ApiError {
  fn from(_: BlockingError) -> ApiError {
    ApiError::Blocking
  }
}
