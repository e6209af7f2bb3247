pub mod fs_sink;
pub mod ico_reader;
pub mod image_rs;
pub mod svg_markup;
