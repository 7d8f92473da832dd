use diesel::prelude::*;

use super::{
  last_insert_rowid,
  models::{NewUser, User},
  schema::users,
  DBConnection,
};

pub fn find(conn: &DBConnection, id: i32) -> QueryResult<Option<User>> {
  users::table.find(id).first(conn).optional()
}

pub fn find_by_email(conn: &DBConnection, email: &str) -> QueryResult<Option<User>> {
  users::table
    .filter(users::email.eq(email))
    .first(conn)
    .optional()
}

pub fn insert(conn: &DBConnection, new_user: &NewUser) -> QueryResult<User> {
  conn.transaction(|| {
    diesel::insert_into(users::table)
      .values(new_user)
      .execute(conn)?;
    let id = diesel::select(last_insert_rowid).get_result::<i32>(conn)?;
    users::table.find(id).first(conn)
  })
}
