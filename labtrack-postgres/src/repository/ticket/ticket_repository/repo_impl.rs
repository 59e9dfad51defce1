use crate::unit_of_work::Executor;
use crate::utils::TryFromRow;
use labtrack_db::TicketModel;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

pub(crate) const TICKET_COLUMNS: &str = "id, title, status, asset_id";

pub struct TicketRepositoryImpl {
    pub executor: Executor,
}

impl TicketRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for TicketModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(TicketModel {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            status: row.try_get("status")?,
            asset_id: row.try_get("asset_id")?,
        })
    }
}
