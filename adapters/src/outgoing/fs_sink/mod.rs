pub mod svg_file_sink;
