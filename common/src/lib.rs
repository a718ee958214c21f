pub mod err_context;
pub mod login;
pub mod offline;
pub mod routes;
pub mod ui;
