pub mod get_balances;

pub use get_balances::{BalancesQueryParams, BalancesResponse, GetBalancesError, get_balances};
