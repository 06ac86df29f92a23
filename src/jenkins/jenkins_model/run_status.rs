use serde::Deserialize;
use std::fmt::Display;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub enum RunStatus {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "FAILURE")]
    Failure,
    #[serde(rename = "UNSTABLE")]
    Unstable,
    #[serde(rename = "ABORTED")]
    Aborted,
    #[serde(rename = "NOT_BUILT")]
    NotBuilt,
    #[serde(other)]
    #[default]
    Processing,
}

impl RunStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, RunStatus::Failure | RunStatus::Unstable)
    }
}

impl Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let str = match self {
            RunStatus::Success => "SUCCESS",
            RunStatus::Failure => "FAILURE",
            RunStatus::Unstable => "UNSTABLE",
            RunStatus::Aborted => "ABORTED",
            RunStatus::NotBuilt => "NOT_BUILT",
            RunStatus::Processing => "IN PROGRESS",
        };
        write!(f, "{}", str)
    }
}
