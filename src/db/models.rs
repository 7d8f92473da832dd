use chrono::NaiveDateTime;

use super::schema::{flashcards, users};

#[derive(Clone, Debug, Identifiable, Queryable, PartialEq)]
#[table_name = "users"]
pub struct User {
  pub id: i32,
  pub name: String,
  pub email: String,
  pub(crate) password: String,
}

#[derive(Clone, Debug, Identifiable, Queryable, Associations, PartialEq)]
#[belongs_to(User, foreign_key = "posted_by_id")]
#[table_name = "flashcards"]
pub struct Flashcard {
  pub id: i32,
  pub question: String,
  pub answer: String,
  pub is_done: bool,
  pub created_at: NaiveDateTime,
  pub posted_by_id: i32,
}

#[derive(Debug, Insertable)]
#[table_name = "users"]
pub struct NewUser<'a> {
  pub name: &'a str,
  pub email: &'a str,
  pub password: &'a str,
}

#[derive(Debug, Insertable)]
#[table_name = "flashcards"]
pub struct NewFlashcard<'a> {
  pub question: &'a str,
  pub answer: &'a str,
  pub created_at: NaiveDateTime,
  pub posted_by_id: i32,
}

/// Columns left as `None` are not touched by the update.
#[derive(Debug, Default, AsChangeset, PartialEq)]
#[table_name = "flashcards"]
pub struct FlashcardChangeset {
  pub question: Option<String>,
  pub answer: Option<String>,
  pub is_done: Option<bool>,
}

impl FlashcardChangeset {
  pub fn is_empty(&self) -> bool {
    self.question.is_none() && self.answer.is_none() && self.is_done.is_none()
  }
}
