use async_trait::async_trait;
use derive_new::new;
use kernel::repository::health::HealthCheckRepository;

use crate::database::InMemoryDatabase;

#[derive(new)]
pub struct HealthCheckRepositoryImpl {
    db: InMemoryDatabase,
}

#[async_trait]
impl HealthCheckRepository for HealthCheckRepositoryImpl {
    async fn check_ledger(&self) -> bool {
        !self.db.slots().read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_ledger_is_unhealthy() {
        assert!(!HealthCheckRepositoryImpl::new(InMemoryDatabase::new(vec![]))
            .check_ledger()
            .await);
        assert!(
            HealthCheckRepositoryImpl::new(crate::database::connect_in_memory())
                .check_ledger()
                .await
        );
    }
}
