pub mod add_transaction_form;
pub mod transaction_list;

pub use add_transaction_form::AddTransactionForm;
pub use transaction_list::TransactionList;
