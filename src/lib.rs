//! Plannable project hours for German federal states
//!
//! This crate derives how many hours of a year are realistically available
//! for project work: it resolves the workdays of a year for one of the 16
//! federal states, then deducts vacation, sick leave, internal meetings,
//! user-defined deductions and an unplanned-work buffer. Results come with
//! a breakdown for display or CSV export and a trace of every intermediate
//! value.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
#[cfg(feature = "cli")]
pub mod logging;
pub mod models;
pub mod report;
