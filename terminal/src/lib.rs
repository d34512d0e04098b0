pub mod api;
pub mod app;
pub mod reconcile;
pub mod render;
pub mod session;
pub mod share;
pub mod stream;
pub mod ui;
pub mod victory;
