pub mod auth;
pub mod health;
pub mod insight;
pub mod slot;
pub mod user;
