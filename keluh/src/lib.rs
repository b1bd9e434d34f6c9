//! The `keluh` command-line client: manages the categories of the
//! Keluh Provinsi complaint dashboard from a terminal.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod terminal;
