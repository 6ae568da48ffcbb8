pub mod keys;
pub mod metrics;
