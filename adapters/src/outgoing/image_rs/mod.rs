pub mod png_codec_image;
pub mod resample_image;
