mod raw_listfile_config;

pub use raw_listfile_config::*;
