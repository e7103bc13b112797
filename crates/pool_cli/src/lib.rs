//! Console front end for the ride-pooling registry.

pub mod cli;
pub mod command;
pub mod config;
pub mod logging;
pub mod repl;
