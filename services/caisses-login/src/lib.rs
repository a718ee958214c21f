pub mod app;
pub mod components;
pub mod csrf;
pub mod flow;
pub mod notify;
pub mod pwa;
