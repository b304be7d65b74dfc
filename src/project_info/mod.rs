pub mod build_config;
pub mod ming_project;
pub mod path_manipulation;
pub mod raw_data_in;
pub mod validators;
