use std::sync::Arc;

use async_trait::async_trait;
use labtrack_api::TicketStatus;

use super::session::SessionState;
use crate::models::{Identifiable, TicketModel};
use crate::repository::{Create, FindByStatus, Load, LoadForUpdate, RepositoryResult, Update};

pub struct MemoryTicketRepository {
    state: Arc<SessionState>,
}

impl MemoryTicketRepository {
    pub(crate) fn new(state: Arc<SessionState>) -> Self {
        Self { state }
    }

    fn current(&self, id: i64) -> Option<TicketModel> {
        let staged = self.state.staged.lock().tickets.get(&id).cloned();
        staged.or_else(|| self.state.store.tickets.read().get(&id).cloned())
    }
}

#[async_trait]
impl Load<TicketModel> for MemoryTicketRepository {
    async fn load(&self, id: i64) -> RepositoryResult<Option<TicketModel>> {
        Ok(self.current(id))
    }
}

#[async_trait]
impl LoadForUpdate<TicketModel> for MemoryTicketRepository {
    async fn load_for_update(&self, id: i64) -> RepositoryResult<Option<TicketModel>> {
        if self.current(id).is_none() {
            return Ok(None);
        }
        self.state.lock_ticket(id).await;
        // Re-read: the previous holder may have committed a change.
        Ok(self.current(id))
    }
}

#[async_trait]
impl Create<TicketModel> for MemoryTicketRepository {
    async fn create(&self, mut item: TicketModel) -> RepositoryResult<TicketModel> {
        item.id = self.state.store.next_ticket_id();
        self.state.staged.lock().tickets.insert(item.id, item.clone());
        Ok(item)
    }
}

#[async_trait]
impl Update<TicketModel> for MemoryTicketRepository {
    async fn update(&self, item: TicketModel) -> RepositoryResult<TicketModel> {
        let id = item.get_id();
        if self.current(id).is_none() {
            return Err(format!("Ticket {id} not found").into());
        }
        self.state.staged.lock().tickets.insert(id, item.clone());
        Ok(item)
    }
}

#[async_trait]
impl FindByStatus for MemoryTicketRepository {
    async fn find_by_status(&self, status: Option<TicketStatus>) -> RepositoryResult<Vec<TicketModel>> {
        let mut all = self.state.store.tickets.read().clone();
        all.extend(self.state.staged.lock().tickets.clone());
        Ok(all
            .into_values()
            .filter(|ticket| status.map_or(true, |wanted| ticket.status == wanted))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use labtrack_api::TicketStatus;
    use tokio_test::assert_err;

    use crate::memory::MemoryStore;
    use crate::models::TicketModel;
    use crate::repository::{Create, FindByStatus, LoadForUpdate, UnitOfWork, UnitOfWorkSession, Update};

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let session = store.begin().await.unwrap();
        let first = session.tickets().create(TicketModel::new_open("a", 1)).await.unwrap();
        let second = session.tickets().create(TicketModel::new_open("b", 1)).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(first.status, TicketStatus::Open);
    }

    #[tokio::test]
    async fn test_update_unknown_ticket_fails() {
        let store = MemoryStore::new();
        let session = store.begin().await.unwrap();
        let mut ghost = TicketModel::new_open("ghost", 1);
        ghost.id = 999;
        assert_err!(session.tickets().update(ghost).await);
    }

    #[tokio::test]
    async fn test_load_for_update_missing_ticket() {
        let store = MemoryStore::new();
        let session = store.begin().await.unwrap();
        assert!(session.tickets().load_for_update(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_status_merges_staged_and_committed() {
        let store = MemoryStore::new();
        let session = store.begin().await.unwrap();
        session.tickets().create(TicketModel::new_open("a", 1)).await.unwrap();
        let mut b = session.tickets().create(TicketModel::new_open("b", 2)).await.unwrap();
        session.commit().await.unwrap();

        let session = store.begin().await.unwrap();
        b.status = TicketStatus::InProgress;
        session.tickets().update(b).await.unwrap();
        session.tickets().create(TicketModel::new_open("c", 3)).await.unwrap();

        let open = session.tickets().find_by_status(Some(TicketStatus::Open)).await.unwrap();
        let titles: Vec<_> = open.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);

        let all = session.tickets().find_by_status(None).await.unwrap();
        assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
