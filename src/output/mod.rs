//! Output formatting for zone layouts.
//!
//! This module handles formatting and outputting a plan:
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON report
//! - [`terminal`] - Field formatting and usage summary

mod csv;
mod json;
mod terminal;

pub use csv::{format_row, plan_print};
pub use json::{plan_print_json, plan_to_json, PlanReport};
pub use terminal::{address_usage, format_field, AddressUsage};
