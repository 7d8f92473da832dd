use juniper::{EmptySubscription, RootNode};

use crate::{
  db::{DbPool, PooledConn},
  ApiError,
};

pub mod mutations;
pub mod query;

use mutations::Mutation;
use query::Query;

/// Per-request state: the process-wide pool handle and, when the caller
/// presented a valid token, their user id.
#[derive(Clone)]
pub struct GQLContext {
  pool: DbPool,
  pub user_id: Option<i32>,
}

impl GQLContext {
  pub fn new(pool: DbPool, user_id: Option<i32>) -> Self {
    Self { pool, user_id }
  }

  /// Checks a connection out of the pool. Callers hold it only for their
  /// own store work.
  pub fn conn(&self) -> Result<PooledConn, ApiError> {
    Ok(self.pool.get()?)
  }

  pub fn require_user(&self, action: &'static str) -> Result<i32, ApiError> {
    self.user_id.ok_or(ApiError::Unauthenticated(action))
  }
}

impl juniper::Context for GQLContext {}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GQLContext>>;

pub fn create_schema() -> Schema {
  Schema::new(Query, Mutation, EmptySubscription::new())
}

pub(crate) fn field_error<E: Into<ApiError>>(err: E) -> juniper::FieldError {
  err.into().into_field_error()
}
