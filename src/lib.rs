pub mod actions;
pub mod api;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod state;
pub mod views;
