mod escape;
pub mod raster_svg;
pub mod vector_svg;
