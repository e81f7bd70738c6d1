use deadpool::Runtime;
use diesel::result::Error as DieselError;
use diesel_async::{
  pooled_connection::{
    deadpool::{Object as PooledConnection, Pool},
    AsyncDieselConnectionManager,
  },
  AsyncPgConnection,
};
use internport_utils::{
  error::{PortalErrorExt, PortalErrorType, PortalResult},
  settings::SETTINGS,
};
use std::ops::{Deref, DerefMut};

pub type ActualDbPool = Pool<AsyncPgConnection>;

/// Reference to a pool or a connection. Functions must take `&mut DbPool<'_>`
/// so they can be called from either a pool or an open transaction.
pub enum DbPool<'a> {
  Pool(&'a ActualDbPool),
  Conn(&'a mut AsyncPgConnection),
}

pub enum DbConn<'a> {
  Pool(PooledConnection<AsyncPgConnection>),
  Conn(&'a mut AsyncPgConnection),
}

pub async fn get_conn<'a, 'b: 'a>(pool: &'a mut DbPool<'b>) -> Result<DbConn<'a>, DieselError> {
  Ok(match pool {
    DbPool::Pool(pool) => DbConn::Pool(
      pool
        .get()
        .await
        .map_err(|e| DieselError::QueryBuilderError(e.into()))?,
    ),
    DbPool::Conn(conn) => DbConn::Conn(conn),
  })
}

impl Deref for DbConn<'_> {
  type Target = AsyncPgConnection;

  fn deref(&self) -> &Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref(),
      DbConn::Conn(conn) => conn,
    }
  }
}

impl DerefMut for DbConn<'_> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    match self {
      DbConn::Pool(conn) => conn.deref_mut(),
      DbConn::Conn(conn) => conn,
    }
  }
}

impl<'a> From<&'a ActualDbPool> for DbPool<'a> {
  fn from(pool: &'a ActualDbPool) -> Self {
    DbPool::Pool(pool)
  }
}

impl<'a, 'b: 'a> From<&'a mut DbConn<'b>> for DbPool<'a> {
  fn from(conn: &'a mut DbConn<'b>) -> Self {
    DbPool::Conn(conn.deref_mut())
  }
}

impl<'a> From<&'a mut AsyncPgConnection> for DbPool<'a> {
  fn from(conn: &'a mut AsyncPgConnection) -> Self {
    DbPool::Conn(conn)
  }
}

pub fn build_db_pool() -> PortalResult<ActualDbPool> {
  let db_url = SETTINGS.get_database_url();
  let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(&db_url);
  let pool = Pool::builder(manager)
    .max_size(SETTINGS.database.pool_size)
    .runtime(Runtime::Tokio1)
    .build()
    .with_portal_type(PortalErrorType::CouldntConnectDatabase)?;
  tracing::info!(
    "Built database connection pool with size {}",
    SETTINGS.database.pool_size
  );
  Ok(pool)
}

/// Sets a Nullable<Text> column from an optional update field: `None` leaves
/// the column untouched, `Some("")` clears it, any other value replaces it.
pub fn diesel_string_update(opt: Option<&str>) -> Option<Option<String>> {
  match opt {
    Some("") => Some(None),
    Some(str) => Some(Some(str.into())),
    None => None,
  }
}

/// Max rows per page for list queries.
const FETCH_LIMIT_MAX: i64 = 50;

pub fn limit_fetch(limit: Option<i64>) -> PortalResult<i64> {
  let limit = limit.unwrap_or(FETCH_LIMIT_MAX);
  if (1..=FETCH_LIMIT_MAX).contains(&limit) {
    Ok(limit)
  } else {
    Err(PortalErrorType::InvalidField("limit".into()).into())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_diesel_string_update() {
    assert_eq!(None, diesel_string_update(None));
    assert_eq!(Some(None), diesel_string_update(Some("")));
    assert_eq!(
      Some(Some("reviewed".to_string())),
      diesel_string_update(Some("reviewed"))
    );
  }

  #[test]
  fn test_limit_fetch() {
    assert_eq!(FETCH_LIMIT_MAX, limit_fetch(None).unwrap_or_default());
    assert_eq!(10, limit_fetch(Some(10)).unwrap_or_default());
    assert!(limit_fetch(Some(0)).is_err());
    assert!(limit_fetch(Some(FETCH_LIMIT_MAX + 1)).is_err());
  }
}
