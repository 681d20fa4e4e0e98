//! Readers for simulation arrays and the CSV table writer.
pub mod csv_writer;
pub mod npy;

pub use csv_writer::{format_value, format_value_as, write_indexed_csv, Precision};
pub use npy::{load_array, load_array_with_precision, NpyArray};
