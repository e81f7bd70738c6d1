use crate::utils::DbPool;
use internport_utils::error::PortalResult;

/// Row-level create/read/update shared by every portal entity.
///
/// Deletion is deliberately not part of the trait: entities that support it
/// expose a soft delete as an inherent method.
#[allow(async_fn_in_trait)]
pub trait Crud: Sized {
  type InsertForm;
  type UpdateForm;
  type IdType;

  async fn create(pool: &mut DbPool<'_>, form: &Self::InsertForm) -> PortalResult<Self>;

  async fn read(pool: &mut DbPool<'_>, id: Self::IdType) -> PortalResult<Self>;

  async fn update(
    pool: &mut DbPool<'_>,
    id: Self::IdType,
    form: &Self::UpdateForm,
  ) -> PortalResult<Self>;
}
