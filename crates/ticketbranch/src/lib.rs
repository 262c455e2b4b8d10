//! ticketbranch library
//!
//! This module exports the command line configuration, command dispatch and
//! output rendering of the `ticketbranch` binary for use in integration tests.

pub mod app;
pub mod config;
pub mod output;
