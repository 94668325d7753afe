use std::sync::Arc;

use adapter::database::{connect_in_memory, InMemoryDatabase};
use adapter::gemini::GeminiClient;
use adapter::repository::{
    health::HealthCheckRepositoryImpl, insight::InsightRepositoryImpl,
    ledger::LedgerRepositoryImpl, session::SessionRepositoryImpl,
};
use kernel::repository::{
    health::HealthCheckRepository, insight::InsightRepository, ledger::LedgerRepository,
    session::SessionRepository,
};
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    ledger_repository: Arc<dyn LedgerRepository>,
    session_repository: Arc<dyn SessionRepository>,
    insight_repository: Arc<dyn InsightRepository>,
}

impl AppRegistry {
    pub fn new(app_config: AppConfig) -> Self {
        Self::with_database(connect_in_memory(), app_config)
    }

    pub fn with_database(db: InMemoryDatabase, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(db.clone()));
        let ledger_repository = Arc::new(LedgerRepositoryImpl::new(db.clone()));
        let session_repository = Arc::new(SessionRepositoryImpl::new(db.clone()));
        let insight_repository = Arc::new(InsightRepositoryImpl::new(GeminiClient::new(
            &app_config.insight,
        )));
        Self {
            health_check_repository,
            ledger_repository,
            session_repository,
            insight_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn ledger_repository(&self) -> Arc<dyn LedgerRepository> {
        self.ledger_repository.clone()
    }

    pub fn session_repository(&self) -> Arc<dyn SessionRepository> {
        self.session_repository.clone()
    }

    pub fn insight_repository(&self) -> Arc<dyn InsightRepository> {
        self.insight_repository.clone()
    }
}
