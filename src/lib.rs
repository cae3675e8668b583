pub mod cli;
pub mod demo;

// Re-exported so the binary and tests reach the container through one crate.
pub use dynamic_array;
