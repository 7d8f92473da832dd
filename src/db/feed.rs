//! Filtering, sorting and paging of the flashcard list.
//!
//! The same filter feeds both the page query and the count query, so
//! `count` always reflects every matching row regardless of `skip`/`take`.

use diesel::{
  prelude::*,
  sql_types::{Integer, Text},
  sqlite::Sqlite,
};

use super::{models::Flashcard, schema::flashcards, DBConnection};

sql_function!(fn instr(haystack: Text, needle: Text) -> Integer);

#[derive(Clone, Debug, PartialEq)]
pub enum FeedFilter {
  All,
  Done(bool),
  Contains(String),
}

impl Default for FeedFilter {
  fn default() -> Self {
    FeedFilter::All
  }
}

impl FeedFilter {
  /// `"true"` and `"false"` select on completion status; any other
  /// non-empty text is a substring search over question and answer.
  pub fn parse(filter: Option<&str>) -> Self {
    match filter {
      Some("true") => FeedFilter::Done(true),
      Some("false") => FeedFilter::Done(false),
      Some(text) if !text.is_empty() => FeedFilter::Contains(text.to_owned()),
      _ => FeedFilter::All,
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SortColumn {
  Question,
  Answer,
  CreatedAt,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Direction {
  Asc,
  Desc,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ordering {
  pub column: SortColumn,
  pub direction: Direction,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedQuery {
  pub filter: FeedFilter,
  pub skip: Option<i64>,
  pub take: Option<i64>,
  pub orderings: Vec<Ordering>,
}

fn filtered<'a>(filter: &FeedFilter) -> flashcards::BoxedQuery<'a, Sqlite> {
  let query = flashcards::table.into_boxed();
  match filter {
    FeedFilter::All => query,
    FeedFilter::Done(done) => query.filter(flashcards::is_done.eq(*done)),
    // instr() rather than LIKE: case-sensitive, and no wildcard characters.
    FeedFilter::Contains(text) => query.filter(
      instr(flashcards::question, text.clone())
        .gt(0)
        .or(instr(flashcards::answer, text.clone()).gt(0)),
    ),
  }
}

fn ordered<'a>(
  query: flashcards::BoxedQuery<'a, Sqlite>,
  ordering: Ordering,
) -> flashcards::BoxedQuery<'a, Sqlite> {
  use self::{Direction::*, SortColumn::*};

  match (ordering.column, ordering.direction) {
    (Question, Asc) => query.then_order_by(flashcards::question.asc()),
    (Question, Desc) => query.then_order_by(flashcards::question.desc()),
    (Answer, Asc) => query.then_order_by(flashcards::answer.asc()),
    (Answer, Desc) => query.then_order_by(flashcards::answer.desc()),
    (CreatedAt, Asc) => query.then_order_by(flashcards::created_at.asc()),
    (CreatedAt, Desc) => query.then_order_by(flashcards::created_at.desc()),
  }
}

/// Loads one page of the feed together with the total number of matches.
pub fn load(conn: &DBConnection, feed: &FeedQuery) -> QueryResult<(Vec<Flashcard>, i64)> {
  let mut query = feed
    .orderings
    .iter()
    .fold(filtered(&feed.filter), |query, ordering| {
      ordered(query, *ordering)
    });

  // SQLite only accepts OFFSET after a LIMIT; -1 means no limit.
  query = match (feed.skip, feed.take) {
    (_, Some(take)) => query.limit(take),
    (Some(_), None) => query.limit(-1),
    (None, None) => query,
  };
  if let Some(skip) = feed.skip {
    query = query.offset(skip);
  }

  let page = query.load::<Flashcard>(conn)?;
  let count = filtered(&feed.filter).count().get_result::<i64>(conn)?;
  debug!(
    "feed {:?} returned {} of {} flashcards",
    feed.filter,
    page.len(),
    count
  );
  Ok((page, count))
}
