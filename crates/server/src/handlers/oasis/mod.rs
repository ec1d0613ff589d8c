pub mod get_oasis_transactions;

pub use get_oasis_transactions::{
    GetOasisTransactionsError, OasisTransaction, OasisTransactionsResponse,
    get_oasis_transactions,
};
