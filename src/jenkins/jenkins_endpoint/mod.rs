pub mod console_text;
pub mod job_api;
pub mod last_build;
pub mod ping;
