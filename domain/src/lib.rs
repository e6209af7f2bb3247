pub mod bitmap;
pub mod color;
pub mod error;
pub mod runs;
pub mod size;
