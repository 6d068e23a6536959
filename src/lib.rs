#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod model;
pub mod tui;
