pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod quiz;
pub mod session;
pub mod source;
pub mod ui;
