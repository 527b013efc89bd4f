//! Format and registry tests

mod document;
mod registry;
