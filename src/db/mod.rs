use diesel::{
  connection::SimpleConnection,
  r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PooledConnection},
  SqliteConnection,
};
use failure::Error;
use std::time::Duration;

pub mod feed;
pub mod flashcards;
pub mod models;
pub mod schema;
pub mod users;

pub type DBConnection = SqliteConnection;
pub type DbPool = Pool<ConnectionManager<DBConnection>>;
pub type PooledConn = PooledConnection<ConnectionManager<DBConnection>>;

embed_migrations!("migrations");

no_arg_sql_function!(last_insert_rowid, diesel::sql_types::Integer);

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Applied to every connection the pool hands out; SQLite resets these
/// per connection.
#[derive(Debug)]
struct ConnectionOptions {
  busy_timeout: Duration,
}

impl CustomizeConnection<DBConnection, r2d2::Error> for ConnectionOptions {
  fn on_acquire(&self, conn: &mut DBConnection) -> Result<(), r2d2::Error> {
    conn
      .batch_execute(&format!(
        "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
        self.busy_timeout.as_millis()
      ))
      .map_err(r2d2::Error::QueryError)
  }
}

/// Opens the pool for `database_url` and brings the schema up to date.
pub fn connect(database_url: &str, max_size: u32) -> Result<DbPool, Error> {
  let manager = ConnectionManager::<DBConnection>::new(database_url);
  let pool = Pool::builder()
    .max_size(max_size)
    .connection_customizer(Box::new(ConnectionOptions {
      busy_timeout: BUSY_TIMEOUT,
    }))
    .build(manager)?;

  let conn = pool.get()?;
  run_migrations(&conn)?;
  info!("Database ready at {}", database_url);
  Ok(pool)
}

pub fn run_migrations(conn: &DBConnection) -> Result<(), Error> {
  embedded_migrations::run(conn)?;
  Ok(())
}
