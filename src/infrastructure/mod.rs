//! Platform utilities for the Zellij sandbox.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, trace_file_path};
