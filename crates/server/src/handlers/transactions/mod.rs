pub mod get_transaction;

pub use get_transaction::{GetTransactionError, TransactionResponse, get_transaction};
