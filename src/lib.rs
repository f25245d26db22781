//! Nutriguide library exports for testing

pub mod core;
pub mod menu;
pub mod present;

#[cfg(test)]
pub mod test_support;
