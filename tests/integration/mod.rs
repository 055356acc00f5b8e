//! Integration test suite for the FKvim demo.
//!
//! These tests drive the public API the way the binary does: keys go in
//! through the modal core or the TEA `update` function, time comes from a
//! manual clock, and configuration and panel art are read from temp dirs.
//!
//! # Test Categories
//!
//! - `modal_flows`: mode transitions, pending sequences and deadlines
//! - `tea_flows`: the same flows through `update`, plus palette and blink
//! - `config_loading`: config files and panel overrides on disk

mod fixtures;

mod config_loading;
mod modal_flows;
mod tea_flows;
