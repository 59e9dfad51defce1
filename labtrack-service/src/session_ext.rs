use labtrack_api::ApiError;
use labtrack_db::{RepositoryError, UnitOfWorkSession};

pub(crate) fn database_error(err: RepositoryError) -> ApiError {
    ApiError::DatabaseError(err.to_string())
}

/// Rolls `session` back and hands `err` through.
///
/// A failed rollback is only logged; the store discards the transaction anyway
/// once the session is gone.
pub(crate) async fn abort<S: UnitOfWorkSession>(session: S, err: ApiError) -> ApiError {
    if let Err(rollback_err) = session.rollback().await {
        tracing::error!(error = %rollback_err, "rollback failed");
    }
    err
}
