use async_trait::async_trait;
use labtrack_api::{
    ApiError, ApiResult, AuditAction, AuditEntity, AuditEntry, AuditService, CallerContext, Page,
    PageRequest,
};
use labtrack_db::{AuditLogModel, Create, FindByEntity, UnitOfWork, UnitOfWorkSession};
use tracing::{debug, error};

use crate::session_ext::{abort, database_error};

/// Appends audit entries and reads them back.
pub struct AuditRecorder<U> {
    uow: U,
}

/// Appends one entry inside an existing unit of work.
///
/// The entry becomes visible only when `session` commits. A store failure is
/// reported as [`ApiError::AuditWriteFailure`]; the caller must then roll the
/// session back.
pub async fn record_in<S: UnitOfWorkSession>(
    session: &S,
    caller: &CallerContext,
    action: AuditAction,
    entity: AuditEntity,
    entity_id: i64,
) -> ApiResult<AuditEntry> {
    let entry = AuditLogModel::new(caller, action, entity, entity_id);
    match session.audit_logs().create(entry).await {
        Ok(saved) => {
            debug!(audit_id = saved.id, %action, %entity, entity_id, "audit entry appended");
            Ok(saved.into())
        }
        Err(err) => {
            error!(error = %err, %action, %entity, entity_id, "audit append failed");
            Err(ApiError::AuditWriteFailure(err.to_string()))
        }
    }
}

impl<U: UnitOfWork> AuditRecorder<U> {
    pub fn new(uow: U) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuditService for AuditRecorder<U> {
    async fn record(
        &self,
        caller: &CallerContext,
        action: AuditAction,
        entity: AuditEntity,
        entity_id: i64,
    ) -> ApiResult<AuditEntry> {
        let session = self
            .uow
            .begin()
            .await
            .map_err(|err| ApiError::AuditWriteFailure(err.to_string()))?;
        let entry = match record_in(&session, caller, action, entity, entity_id).await {
            Ok(entry) => entry,
            Err(err) => return Err(abort(session, err).await),
        };
        session
            .commit()
            .await
            .map_err(|err| ApiError::AuditWriteFailure(err.to_string()))?;
        Ok(entry)
    }

    async fn query_by_entity(
        &self,
        entity: AuditEntity,
        entity_id: i64,
        page: PageRequest,
    ) -> ApiResult<Page<AuditEntry>> {
        let session = self.uow.begin().await.map_err(database_error)?;
        let found = session
            .audit_logs()
            .find_by_entity(entity, entity_id, page)
            .await;
        let found = match found {
            Ok(found) => found,
            Err(err) => return Err(abort(session, database_error(err)).await),
        };
        // Read-only; nothing to keep.
        session.rollback().await.map_err(database_error)?;
        Ok(found.map(AuditEntry::from))
    }
}

#[cfg(test)]
mod tests {
    use labtrack_api::{ApiError, AuditAction, AuditEntity, AuditService, CallerContext, PageRequest, Role};
    use labtrack_db::MemoryStore;
    use tokio_test::assert_ok;

    use super::AuditRecorder;

    fn caller(user_id: i64) -> CallerContext {
        CallerContext::new(user_id, Role::Admin)
    }

    #[tokio::test]
    async fn test_record_persists_caller_verbatim() {
        let store = MemoryStore::new();
        let recorder = AuditRecorder::new(store.clone());

        let entry = assert_ok!(
            recorder
                .record(&caller(42), AuditAction::Create, AuditEntity::Asset, 5)
                .await
        );
        assert_eq!(entry.user_id, 42);
        assert_eq!(entry.entity, AuditEntity::Asset);
        assert_eq!(store.committed_audit_logs().len(), 1);
    }

    #[tokio::test]
    async fn test_record_reports_store_outage() {
        let store = MemoryStore::new();
        store.set_audit_available(false);
        let recorder = AuditRecorder::new(store.clone());

        let result = recorder
            .record(&caller(1), AuditAction::Create, AuditEntity::User, 9)
            .await;
        assert!(matches!(result, Err(ApiError::AuditWriteFailure(_))));
        assert!(store.committed_audit_logs().is_empty());
    }

    #[tokio::test]
    async fn test_query_by_entity_is_ordered_and_restartable() {
        let store = MemoryStore::new();
        let recorder = AuditRecorder::new(store);
        for user_id in 1..=5 {
            recorder
                .record(&caller(user_id), AuditAction::StatusChange, AuditEntity::Ticket, 1)
                .await
                .unwrap();
        }
        recorder
            .record(&caller(99), AuditAction::Create, AuditEntity::Comment, 1)
            .await
            .unwrap();

        let first = recorder
            .query_by_entity(AuditEntity::Ticket, 1, PageRequest::new(3, 0))
            .await
            .unwrap();
        let again = recorder
            .query_by_entity(AuditEntity::Ticket, 1, PageRequest::new(3, 0))
            .await
            .unwrap();
        assert_eq!(first, again);
        assert_eq!(first.total, 5);

        let mut all = first.items.clone();
        let second = recorder
            .query_by_entity(AuditEntity::Ticket, 1, PageRequest::new(3, 0).next())
            .await
            .unwrap();
        all.extend(second.items);
        assert_eq!(all.iter().map(|e| e.user_id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert!(all.windows(2).all(|w| w[0].created_at <= w[1].created_at));
    }
}
