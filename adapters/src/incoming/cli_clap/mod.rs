pub mod args;
pub mod handlers;
pub mod legacy;
pub mod report;
