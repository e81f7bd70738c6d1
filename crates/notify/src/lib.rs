use internport_db_schema::{
  newtypes::PersonId,
  source::notification::{Notification, NotificationInsertForm},
  traits::Crud,
  utils::{ActualDbPool, DbPool},
};
use internport_utils::error::PortalResult;

/// Best-effort delivery of human-readable status-change messages.
///
/// Callers treat delivery as fire-and-forget: a failed `notify` is logged and
/// never rolls back the action that produced it.
#[allow(async_fn_in_trait)]
pub trait NotificationSink {
  async fn notify(&self, recipient_id: PersonId, body: &str) -> PortalResult<()>;
}

/// Writes notifications as rows the recipient's dashboard reads.
#[derive(Clone)]
pub struct DbNotificationSink {
  pool: ActualDbPool,
}

impl DbNotificationSink {
  pub fn new(pool: ActualDbPool) -> Self {
    DbNotificationSink { pool }
  }
}

impl NotificationSink for DbNotificationSink {
  async fn notify(&self, recipient_id: PersonId, body: &str) -> PortalResult<()> {
    let pool = &mut DbPool::Pool(&self.pool);
    let form = NotificationInsertForm::new(recipient_id, body.to_string());
    Notification::create(pool, &form).await?;
    Ok(())
  }
}

/// Discards every message. Used where delivery is not configured.
#[derive(Clone, Default)]
pub struct NoopNotificationSink;

impl NotificationSink for NoopNotificationSink {
  async fn notify(&self, _recipient_id: PersonId, _body: &str) -> PortalResult<()> {
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn noop_sink_accepts_everything() {
    let sink = NoopNotificationSink;
    assert!(sink.notify(PersonId(1), "status changed").await.is_ok());
  }
}
