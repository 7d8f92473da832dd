use chrono::Utc;

use crate::{
  db::{
    flashcards,
    models::{Flashcard, FlashcardChangeset, NewFlashcard},
  },
  graphql::GQLContext,
  ApiError,
};

/// Question and answer count as supplied only when non-empty; `is_done`
/// counts whenever it is present, so `false` is a real update.
pub fn changeset(
  question: Option<String>,
  answer: Option<String>,
  is_done: Option<bool>,
) -> FlashcardChangeset {
  FlashcardChangeset {
    question: question.filter(|q| !q.is_empty()),
    answer: answer.filter(|a| !a.is_empty()),
    is_done,
  }
}

pub fn create(ctx: &GQLContext, question: &str, answer: &str) -> Result<Flashcard, ApiError> {
  let user_id = ctx.require_user("You must be logged in to create a flashcard.")?;
  let conn = ctx.conn()?;
  let flashcard = flashcards::insert(
    &conn,
    &NewFlashcard {
      question,
      answer,
      created_at: Utc::now().naive_utc(),
      posted_by_id: user_id,
    },
  )?;
  info!("User {} created flashcard {}", user_id, flashcard.id);
  Ok(flashcard)
}

// Any signed-in user may update or delete any flashcard; ownership is not
// checked here.
pub fn update(ctx: &GQLContext, id: i32, changes: FlashcardChangeset) -> Result<Flashcard, ApiError> {
  let user_id = ctx.require_user("You must be logged in to update a flashcard.")?;
  let conn = ctx.conn()?;
  let flashcard = flashcards::update(&conn, id, &changes)?;
  info!("User {} updated flashcard {}", user_id, id);
  Ok(flashcard)
}

pub fn delete(ctx: &GQLContext, id: i32) -> Result<Flashcard, ApiError> {
  let user_id = ctx.require_user("You must be logged in to delete a flashcard.")?;
  let conn = ctx.conn()?;
  let flashcard = flashcards::delete(&conn, id)?;
  info!("User {} deleted flashcard {}", user_id, id);
  Ok(flashcard)
}
