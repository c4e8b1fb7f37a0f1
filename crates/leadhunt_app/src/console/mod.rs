//! Terminal front end: reads operator commands, drives the job controller and
//! re-renders the dashboard whenever the view changes.
mod app;
mod commands;
mod logging;
mod render;

pub use app::run;
