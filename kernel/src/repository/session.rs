use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    auth::{AccessToken, Session},
    history::HistoryRecord,
    id::UserId,
    role::Role,
    user::User,
};

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn login(&self, role: Role) -> AppResult<Session>;
    async fn logout(&self, access_token: &AccessToken) -> AppResult<()>;
    async fn find_user(&self, access_token: &AccessToken) -> AppResult<Option<User>>;
    // ログイン中でなければ記録は捨てられる
    async fn prepend_history(&self, user_id: &UserId, record: HistoryRecord) -> AppResult<()>;
}
