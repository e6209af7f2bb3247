pub mod config;
pub mod conversion;
pub mod error;
pub mod info;
pub mod infrastructure_config;
pub mod ports;
pub mod sizing;
pub mod vectorize;

#[cfg(test)]
mod test_support;
