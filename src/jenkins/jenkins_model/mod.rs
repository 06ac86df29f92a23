pub mod build_info;
pub mod last_build;
pub mod run_status;
