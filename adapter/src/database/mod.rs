use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use kernel::model::{auth::AccessToken, slot::Slot, user::User};
use tokio::sync::RwLock;

pub mod seed;

// 全リポジトリで共有するプロセス内ストア。再起動で初期状態に戻る
#[derive(Clone)]
pub struct InMemoryDatabase {
    slots: Arc<RwLock<Vec<Slot>>>,
    sessions: Arc<RwLock<HashMap<AccessToken, User>>>,
}

impl InMemoryDatabase {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self {
            slots: Arc::new(RwLock::new(slots)),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn slots(&self) -> &RwLock<Vec<Slot>> {
        &self.slots
    }

    pub fn sessions(&self) -> &RwLock<HashMap<AccessToken, User>> {
        &self.sessions
    }
}

pub fn connect_in_memory() -> InMemoryDatabase {
    InMemoryDatabase::new(seed::initial_slots(Utc::now()))
}
