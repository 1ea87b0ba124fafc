//! Core types for the roster membership backend.
//!
//! This crate holds the domain model (record collections and their sheet
//! mappings) and the [`storage::TabularStore`] trait that backends implement.
//! It contains no I/O of its own.

pub mod records;
pub mod storage;
