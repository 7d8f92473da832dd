use bcrypt::{hash, DEFAULT_COST};

use crate::{
  db::{
    models::{NewUser, User},
    users,
  },
  graphql::GQLContext,
  ApiError,
};

pub fn signup(ctx: &GQLContext, name: &str, email: &str, password: &str) -> Result<User, ApiError> {
  for (field, value) in &[("name", name), ("email", email), ("password", password)] {
    if value.is_empty() {
      return Err(ApiError::InvalidArgument(format!("{} must not be empty", field)));
    }
  }

  let hashed = hash(password, DEFAULT_COST)?;
  let conn = ctx.conn()?;
  let user = users::insert(
    &conn,
    &NewUser {
      name,
      email,
      password: &hashed,
    },
  )?;
  info!("Signed up user {}", user.id);
  Ok(user)
}
