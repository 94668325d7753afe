pub mod health;
pub mod insight;
pub mod ledger;
pub mod session;
