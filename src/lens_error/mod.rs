use crate::config::ConfigError;
use crate::constant::log::*;
use crate::locator::LocatorError;
use crate::pretty_log::{colored_println, ThemeColor};
use jenkins_sdk::JenkinsError;
use std::io::Stdout;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LensError {
    #[error(transparent)]
    Locator(#[from] LocatorError),

    #[error("{msg} {0}", msg = ERR_NO_BUILDS_FOUND)]
    NoBuildsFound(String),

    #[error("{msg} {status} {message}: {url}", msg = ERR_HTTP_STATUS)]
    HttpStatus {
        status: u16,
        message: String,
        url: String,
    },

    #[error(transparent)]
    Network(#[from] reqwest::Error),

    #[error("{0}")]
    Connect(String),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error("{msg}: {0}", msg = ERR_INVALID_METHOD)]
    InvalidMethod(String),

    #[error(transparent)]
    Jenkins(#[from] JenkinsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LensError {
    pub fn colored_println(&self, stdout: &mut Stdout) {
        colored_println(stdout, ThemeColor::Error, self.to_string().as_str());
    }

    /// Status code of a failed jenkins response, if the failure got that far.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            LensError::HttpStatus { status, .. } => Some(*status),
            LensError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
