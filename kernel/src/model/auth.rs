use derive_new::new;
use uuid::Uuid;

use super::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessToken(pub String);

impl AccessToken {
    // セッションごとに推測されにくいトークンを発行する
    pub fn issue() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

#[derive(new)]
pub struct Session {
    pub access_token: AccessToken,
    pub user: User,
}
