pub mod color_map;
pub mod color_map_data;
pub mod error;
pub mod file_io;
pub mod header_writer;
pub mod interpolation;
pub mod lookup_table;
pub mod packed_color;
pub mod sample_table;
