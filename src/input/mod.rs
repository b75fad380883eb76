//! User input handling
//!
//! - `amount_field`: amount text field state
//! - `transaction_form`: the entry form that feeds the ledger
//! - `validation`: amount and date rules shared by the form and the ledger

pub mod amount_field;
pub mod transaction_form;
pub mod validation;

pub use amount_field::AmountFieldState;
pub use transaction_form::TransactionForm;
pub use validation::{validate_amount, validate_date};
