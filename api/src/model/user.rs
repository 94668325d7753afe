use kernel::model::{
    id::UserId,
    role::Role,
    user::User,
    vehicle::Vehicle,
};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

use super::{history::HistoryRecordResponse, slot::SlotResponse};

#[derive(Debug, Serialize, Deserialize, VariantNames, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RoleName {
    Resident,
    Staff,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Resident => Self::Resident,
            Role::Staff => Self::Staff,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Resident => Self::Resident,
            RoleName::Staff => Self::Staff,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub reg_no: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
}

impl From<Vehicle> for VehicleResponse {
    fn from(value: Vehicle) -> Self {
        let Vehicle {
            reg_no,
            vehicle_type,
        } = value;
        Self {
            reg_no,
            vehicle_type: vehicle_type.as_ref().to_string(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: RoleName,
    pub vehicle: VehicleResponse,
    pub history: Vec<HistoryRecordResponse>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            role,
            vehicle,
            history,
        } = value;
        Self {
            user_id,
            user_name,
            email,
            role: RoleName::from(role),
            vehicle: vehicle.into(),
            history: history.into_iter().map(HistoryRecordResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub available_slots: usize,
    pub total_visits: usize,
    pub hourly_rate: f64,
    pub active_parking: Option<SlotResponse>,
}
