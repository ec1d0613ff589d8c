pub mod balances;
pub mod health;
pub mod metrics;
pub mod networks;
pub mod oasis;
pub mod prices;
pub mod transactions;
pub mod version;
