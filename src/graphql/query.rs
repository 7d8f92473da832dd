use chrono::{DateTime, TimeZone, Utc};
use juniper::{graphql_object, FieldResult, GraphQLEnum, GraphQLInputObject};

use super::{field_error, GQLContext};
use crate::{
  db::{
    feed::{self, Direction, FeedFilter, FeedQuery, Ordering, SortColumn},
    flashcards,
    models::{Flashcard, User},
    users,
  },
  ApiError,
};

#[derive(GraphQLEnum, Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
  #[graphql(name = "asc")]
  Asc,
  #[graphql(name = "desc")]
  Desc,
}

impl From<Sort> for Direction {
  fn from(sort: Sort) -> Direction {
    match sort {
      Sort::Asc => Direction::Asc,
      Sort::Desc => Direction::Desc,
    }
  }
}

/// One sort directive. Fields set on the same object apply in the order
/// question, answer, createdAt.
#[derive(GraphQLInputObject, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardOrderByInput {
  pub question: Option<Sort>,
  pub answer: Option<Sort>,
  pub created_at: Option<Sort>,
}

impl FlashcardOrderByInput {
  fn orderings(&self) -> impl Iterator<Item = Ordering> {
    let directives = [
      (SortColumn::Question, self.question),
      (SortColumn::Answer, self.answer),
      (SortColumn::CreatedAt, self.created_at),
    ];
    directives
      .to_vec()
      .into_iter()
      .filter_map(|(column, sort)| {
        sort.map(|sort| Ordering {
          column,
          direction: sort.into(),
        })
      })
  }
}

/// Arguments of the `flashcards` query, exactly as the client sent them.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedArgs {
  pub filter: Option<String>,
  pub skip: Option<i32>,
  pub take: Option<i32>,
  pub order_by: Option<Vec<FlashcardOrderByInput>>,
}

fn non_negative(name: &str, value: Option<i32>) -> Result<Option<i64>, ApiError> {
  match value {
    Some(v) if v < 0 => Err(ApiError::InvalidArgument(format!(
      "{} must not be negative",
      name
    ))),
    v => Ok(v.map(i64::from)),
  }
}

impl FeedArgs {
  /// Cache hint for clients: equal argument sets give equal ids.
  pub fn id(&self) -> Result<String, ApiError> {
    Ok(format!("main-feed:{}", serde_json::to_string(self)?))
  }

  pub fn to_query(&self) -> Result<FeedQuery, ApiError> {
    Ok(FeedQuery {
      filter: FeedFilter::parse(self.filter.as_deref()),
      skip: non_negative("skip", self.skip)?,
      take: non_negative("take", self.take)?,
      orderings: self
        .order_by
        .iter()
        .flatten()
        .flat_map(FlashcardOrderByInput::orderings)
        .collect(),
    })
  }

  pub fn resolve(&self, context: &GQLContext) -> Result<Feed, ApiError> {
    let query = self.to_query()?;
    let id = self.id()?;
    let conn = context.conn()?;
    let (flashcards, count) = feed::load(&conn, &query)?;
    Ok(Feed {
      id,
      flashcards,
      count: count as i32,
    })
  }
}

pub struct Feed {
  id: String,
  flashcards: Vec<Flashcard>,
  count: i32,
}

#[graphql_object(context = GQLContext)]
impl Feed {
  fn id(&self) -> &str {
    &self.id
  }

  fn flashcards(&self) -> Vec<&Flashcard> {
    self.flashcards.iter().collect()
  }

  /// Number of matching flashcards, ignoring skip and take.
  fn count(&self) -> i32 {
    self.count
  }
}

#[graphql_object(context = GQLContext)]
impl Flashcard {
  fn id(&self) -> i32 {
    self.id
  }

  fn question(&self) -> &str {
    &self.question
  }

  fn answer(&self) -> &str {
    &self.answer
  }

  fn is_done(&self) -> bool {
    self.is_done
  }

  fn created_at(&self) -> DateTime<Utc> {
    Utc.from_utc_datetime(&self.created_at)
  }

  fn posted_by(&self, context: &GQLContext) -> FieldResult<Option<User>> {
    let conn = context.conn().map_err(field_error)?;
    users::find(&conn, self.posted_by_id).map_err(field_error)
  }
}

#[graphql_object(context = GQLContext)]
impl User {
  fn id(&self) -> i32 {
    self.id
  }

  fn name(&self) -> &str {
    &self.name
  }

  fn email(&self) -> &str {
    &self.email
  }

  fn flashcards(&self, context: &GQLContext) -> FieldResult<Vec<Flashcard>> {
    let conn = context.conn().map_err(field_error)?;
    flashcards::posted_by(&conn, self).map_err(field_error)
  }
}

pub struct Query;

#[graphql_object(context = GQLContext)]
impl Query {
  fn flashcards(
    &self,
    context: &GQLContext,
    filter: Option<String>,
    skip: Option<i32>,
    take: Option<i32>,
    order_by: Option<Vec<FlashcardOrderByInput>>,
  ) -> FieldResult<Feed> {
    let args = FeedArgs {
      filter,
      skip,
      take,
      order_by,
    };
    args.resolve(context).map_err(field_error)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn feed_id_follows_arguments() {
    let args = FeedArgs {
      filter: Some("Q1".into()),
      take: Some(10),
      ..Default::default()
    };

    assert_eq!(args.id().unwrap(), args.clone().id().unwrap());
    assert_eq!(
      args.id().unwrap(),
      r#"main-feed:{"filter":"Q1","skip":null,"take":10,"orderBy":null}"#
    );

    let skipped = FeedArgs {
      skip: Some(1),
      ..args.clone()
    };
    assert_ne!(args.id().unwrap(), skipped.id().unwrap());

    let sorted = FeedArgs {
      order_by: Some(vec![FlashcardOrderByInput {
        created_at: Some(Sort::Desc),
        ..Default::default()
      }]),
      ..args.clone()
    };
    assert_ne!(args.id().unwrap(), sorted.id().unwrap());
  }

  #[test]
  fn builds_store_query() {
    let args = FeedArgs {
      filter: Some("false".into()),
      skip: Some(2),
      order_by: Some(vec![
        FlashcardOrderByInput {
          answer: Some(Sort::Desc),
          question: Some(Sort::Asc),
          ..Default::default()
        },
        FlashcardOrderByInput {
          created_at: Some(Sort::Asc),
          ..Default::default()
        },
      ]),
      ..Default::default()
    };

    assert_eq!(
      args.to_query().unwrap(),
      FeedQuery {
        filter: FeedFilter::Done(false),
        skip: Some(2),
        take: None,
        orderings: vec![
          Ordering {
            column: SortColumn::Question,
            direction: Direction::Asc,
          },
          Ordering {
            column: SortColumn::Answer,
            direction: Direction::Desc,
          },
          Ordering {
            column: SortColumn::CreatedAt,
            direction: Direction::Asc,
          },
        ],
      }
    );
  }

  #[test]
  fn rejects_negative_paging() {
    let args = FeedArgs {
      take: Some(-1),
      ..Default::default()
    };
    assert!(matches!(
      args.to_query(),
      Err(ApiError::InvalidArgument(_))
    ));
  }
}
