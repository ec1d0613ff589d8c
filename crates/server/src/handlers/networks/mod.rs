pub mod get_networks;

pub use get_networks::{NetworkSummary, NetworksQueryParams, get_networks};
