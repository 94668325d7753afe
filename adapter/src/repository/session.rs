use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{AccessToken, Session},
    history::HistoryRecord,
    id::UserId,
    role::Role,
    user::User,
};
use kernel::repository::session::SessionRepository;
use shared::error::AppResult;

use crate::database::{seed::mock_user, InMemoryDatabase};

#[derive(new)]
pub struct SessionRepositoryImpl {
    db: InMemoryDatabase,
}

#[async_trait]
impl SessionRepository for SessionRepositoryImpl {
    async fn login(&self, role: Role) -> AppResult<Session> {
        let user = mock_user(role);
        let access_token = AccessToken::issue();

        let mut sessions = self.db.sessions().write().await;
        // 同じユーザーの古いセッションは破棄する
        sessions.retain(|_, active| active.user_id != user.user_id);
        sessions.insert(access_token.clone(), user.clone());

        tracing::info!(user_id = %user.user_id, role = role.as_ref(), "Logged in");
        Ok(Session::new(access_token, user))
    }

    async fn logout(&self, access_token: &AccessToken) -> AppResult<()> {
        if let Some(user) = self.db.sessions().write().await.remove(access_token) {
            tracing::info!(user_id = %user.user_id, "Logged out");
        }
        Ok(())
    }

    async fn find_user(&self, access_token: &AccessToken) -> AppResult<Option<User>> {
        Ok(self.db.sessions().read().await.get(access_token).cloned())
    }

    async fn prepend_history(&self, user_id: &UserId, record: HistoryRecord) -> AppResult<()> {
        let mut sessions = self.db.sessions().write().await;
        match sessions.values_mut().find(|user| &user.user_id == user_id) {
            Some(user) => user.history.insert(0, record),
            None => tracing::debug!(%user_id, "No active session, history record dropped"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use kernel::model::{
        history::HistoryStatus,
        id::{HistoryId, SlotId},
    };

    fn repo() -> SessionRepositoryImpl {
        SessionRepositoryImpl::new(InMemoryDatabase::new(vec![]))
    }

    fn record(user_id: &str, slot_id: &str) -> HistoryRecord {
        let exit = Utc::now();
        HistoryRecord {
            history_id: HistoryId::new(),
            user_id: UserId::new(user_id),
            slot_id: SlotId::from(slot_id),
            location: "Lot A".into(),
            entry_time: exit - Duration::hours(2),
            exit_time: Some(exit),
            charges: 4.0,
            status: HistoryStatus::Completed,
        }
    }

    #[tokio::test]
    async fn login_then_logout() -> anyhow::Result<()> {
        let repo = repo();
        let session = repo.login(Role::Resident).await?;
        assert_eq!(session.user.role, Role::Resident);

        let user = repo.find_user(&session.access_token).await?.unwrap();
        assert_eq!(user, session.user);

        repo.logout(&session.access_token).await?;
        assert!(repo.find_user(&session.access_token).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn second_login_replaces_the_first() -> anyhow::Result<()> {
        let repo = repo();
        let first = repo.login(Role::Staff).await?;
        let second = repo.login(Role::Staff).await?;

        assert_ne!(first.access_token, second.access_token);
        assert!(repo.find_user(&first.access_token).await?.is_none());
        assert!(repo.find_user(&second.access_token).await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn history_is_most_recent_first() -> anyhow::Result<()> {
        let repo = repo();
        let session = repo.login(Role::Resident).await?;
        let older = record("user-001", "A1");
        let newer = record("user-001", "B2");

        repo.prepend_history(&session.user.user_id, older.clone())
            .await?;
        repo.prepend_history(&session.user.user_id, newer.clone())
            .await?;

        let user = repo.find_user(&session.access_token).await?.unwrap();
        assert_eq!(user.history, vec![newer, older]);
        Ok(())
    }

    #[tokio::test]
    async fn history_for_absent_user_is_dropped() -> anyhow::Result<()> {
        let repo = repo();
        let session = repo.login(Role::Resident).await?;

        repo.prepend_history(&UserId::new("guest-1"), record("guest-1", "A3"))
            .await?;

        let user = repo.find_user(&session.access_token).await?.unwrap();
        assert!(user.history.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn logout_discards_history() -> anyhow::Result<()> {
        let repo = repo();
        let session = repo.login(Role::Resident).await?;
        repo.prepend_history(&session.user.user_id, record("user-001", "A1"))
            .await?;
        repo.logout(&session.access_token).await?;

        let again = repo.login(Role::Resident).await?;
        assert!(again.user.history.is_empty());
        Ok(())
    }
}
