pub mod cors;
pub mod static_files;
