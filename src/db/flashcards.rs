use diesel::prelude::*;

use super::{
  last_insert_rowid,
  models::{Flashcard, FlashcardChangeset, NewFlashcard, User},
  schema::flashcards,
  DBConnection,
};

pub fn find(conn: &DBConnection, id: i32) -> QueryResult<Flashcard> {
  flashcards::table.find(id).first(conn)
}

pub fn insert(conn: &DBConnection, new_flashcard: &NewFlashcard) -> QueryResult<Flashcard> {
  conn.transaction(|| {
    diesel::insert_into(flashcards::table)
      .values(new_flashcard)
      .execute(conn)?;
    let id = diesel::select(last_insert_rowid).get_result::<i32>(conn)?;
    find(conn, id)
  })
}

/// Writes the supplied columns and returns the row as stored afterwards.
pub fn update(conn: &DBConnection, id: i32, changes: &FlashcardChangeset) -> QueryResult<Flashcard> {
  if changes.is_empty() {
    return find(conn, id);
  }

  conn.transaction(|| {
    let updated = diesel::update(flashcards::table.find(id))
      .set(changes)
      .execute(conn)?;
    if updated == 0 {
      return Err(diesel::result::Error::NotFound);
    }
    find(conn, id)
  })
}

/// Removes the row, handing back what was deleted.
pub fn delete(conn: &DBConnection, id: i32) -> QueryResult<Flashcard> {
  conn.transaction(|| {
    let flashcard = find(conn, id)?;
    diesel::delete(flashcards::table.find(id)).execute(conn)?;
    Ok(flashcard)
  })
}

pub fn posted_by(conn: &DBConnection, user: &User) -> QueryResult<Vec<Flashcard>> {
  Flashcard::belonging_to(user)
    .order(flashcards::id.asc())
    .load(conn)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::db::{run_migrations, users};
  use chrono::Utc;

  fn setup() -> (DBConnection, User) {
    let conn = DBConnection::establish(":memory:").unwrap();
    run_migrations(&conn).unwrap();
    let user = users::insert(
      &conn,
      &crate::db::models::NewUser {
        name: "Ada",
        email: "ada@example.com",
        password: "not-a-real-hash",
      },
    )
    .unwrap();
    (conn, user)
  }

  fn new_flashcard<'a>(user: &User, question: &'a str, answer: &'a str) -> NewFlashcard<'a> {
    NewFlashcard {
      question,
      answer,
      created_at: Utc::now().naive_utc(),
      posted_by_id: user.id,
    }
  }

  #[test]
  fn insert_defaults_to_not_done() {
    let (conn, user) = setup();
    let flashcard = insert(&conn, &new_flashcard(&user, "Q1", "A1")).unwrap();

    assert_eq!(flashcard.question, "Q1");
    assert_eq!(flashcard.answer, "A1");
    assert!(!flashcard.is_done);
    assert_eq!(flashcard.posted_by_id, user.id);
    assert_eq!(find(&conn, flashcard.id).unwrap(), flashcard);
  }

  #[test]
  fn update_only_touches_supplied_columns() {
    let (conn, user) = setup();
    let flashcard = insert(&conn, &new_flashcard(&user, "Q1", "A1")).unwrap();

    let updated = update(
      &conn,
      flashcard.id,
      &FlashcardChangeset {
        answer: Some("A2".into()),
        ..Default::default()
      },
    )
    .unwrap();
    assert_eq!(updated.question, "Q1");
    assert_eq!(updated.answer, "A2");

    let unchanged = update(&conn, flashcard.id, &FlashcardChangeset::default()).unwrap();
    assert_eq!(unchanged, updated);
  }

  #[test]
  fn update_and_delete_report_missing_rows() {
    let (conn, _) = setup();
    let changes = FlashcardChangeset {
      is_done: Some(true),
      ..Default::default()
    };

    assert!(matches!(
      update(&conn, 42, &changes),
      Err(diesel::result::Error::NotFound)
    ));
    assert!(matches!(
      update(&conn, 42, &FlashcardChangeset::default()),
      Err(diesel::result::Error::NotFound)
    ));
    assert!(matches!(
      delete(&conn, 42),
      Err(diesel::result::Error::NotFound)
    ));
  }

  #[test]
  fn delete_returns_removed_row() {
    let (conn, user) = setup();
    let first = insert(&conn, &new_flashcard(&user, "Q1", "A1")).unwrap();
    let second = insert(&conn, &new_flashcard(&user, "Q2", "A2")).unwrap();

    assert_eq!(delete(&conn, first.id).unwrap(), first);
    assert_eq!(posted_by(&conn, &user).unwrap(), vec![second]);
  }
}
