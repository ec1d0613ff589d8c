pub mod get_price;

pub use get_price::{GetPriceError, PriceQueryParams, PriceResponse, get_price};
