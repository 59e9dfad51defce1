use labtrack_db::TicketModel;

pub fn create_test_ticket(title: &str, asset_id: i64) -> TicketModel {
    TicketModel::new_open(title, asset_id)
}
