pub mod auth;
pub mod billing;
pub mod history;
pub mod id;
pub mod insight;
pub mod role;
pub mod slot;
pub mod user;
pub mod vehicle;
