use garde::Validate;
use serde::{Deserialize, Serialize};

use super::user::{RoleName, UserResponse};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(skip)]
    pub role: RoleName,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserResponse,
}
