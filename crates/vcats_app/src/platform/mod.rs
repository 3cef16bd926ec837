//! Terminal front end: config, logging, effect execution and the input loop.
mod app;
mod config;
mod effects;
mod ui;

pub use app::run_app;
