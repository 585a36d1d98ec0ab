//! Funfacts library exports for testing

pub mod core;
pub mod facts;
pub mod plain;
pub mod tui;

#[cfg(test)]
pub mod test_support;
