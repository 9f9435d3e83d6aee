pub mod geoalg;
pub mod error;
pub mod parameters;
pub mod config;
pub mod input_matrix_reader;
pub mod output_matrix_writer;
pub mod pipeline;
pub mod case_generator;
pub mod output_comparator;
