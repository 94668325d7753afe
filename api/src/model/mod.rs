pub mod auth;
pub mod history;
pub mod insight;
pub mod slot;
pub mod user;
