pub mod balances;
pub mod docs;
pub mod networks;
pub mod oasis;
pub mod prices;
pub mod registry;
pub mod root;
pub mod system;
pub mod transactions;

pub use registry::{API_VERSION, RegisterRoute, RouteRegistry};
