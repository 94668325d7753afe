use crate::model::{history::HistoryRecord, id::UserId, role::Role, vehicle::Vehicle};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: Role,
    pub vehicle: Vehicle,
    // 新しい順
    pub history: Vec<HistoryRecord>,
}
