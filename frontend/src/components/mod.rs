pub mod auth_form;
pub mod charts;
pub mod chat;
pub mod dashboard;
pub mod goals;
pub mod header;
pub mod transactions;
