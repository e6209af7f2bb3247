pub mod ico_file_decoder;
