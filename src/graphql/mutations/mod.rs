use juniper::{graphql_object, FieldResult};

use super::{field_error, GQLContext};
use crate::db::models::{Flashcard, User};

mod flashcard;
mod user;

use flashcard::changeset;

pub struct Mutation;

#[graphql_object(context = GQLContext)]
impl Mutation {
  fn create_flashcard(
    &self,
    context: &GQLContext,
    question: String,
    answer: String,
  ) -> FieldResult<Flashcard> {
    flashcard::create(context, &question, &answer).map_err(field_error)
  }

  /// Applies only the supplied fields. Empty question or answer strings
  /// leave the stored value as it is.
  fn update_flashcard(
    &self,
    context: &GQLContext,
    id: i32,
    question: Option<String>,
    answer: Option<String>,
    is_done: Option<bool>,
  ) -> FieldResult<Flashcard> {
    flashcard::update(context, id, changeset(question, answer, is_done)).map_err(field_error)
  }

  fn delete_flashcard(&self, context: &GQLContext, id: i32) -> FieldResult<Flashcard> {
    flashcard::delete(context, id).map_err(field_error)
  }

  fn signup(
    &self,
    context: &GQLContext,
    name: String,
    email: String,
    password: String,
  ) -> FieldResult<User> {
    user::signup(context, &name, &email, &password).map_err(field_error)
  }
}
