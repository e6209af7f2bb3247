pub mod path;
pub mod scanner;
