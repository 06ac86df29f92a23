use crate::jenkins::jenkins_model::run_status::RunStatus;
use chrono::{DateTime, Local};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct BuildInfo {
    pub number: u32,

    #[serde(default, deserialize_with = "deserialize_run_status")]
    pub result: RunStatus,

    #[serde(default)]
    pub building: bool,

    /// milliseconds
    #[serde(default)]
    pub duration: u64,

    /// epoch milliseconds
    #[serde(default)]
    pub timestamp: i64,

    #[serde(default)]
    pub url: String,

    #[serde(rename = "fullDisplayName", default)]
    pub full_display_name: String,
}

fn deserialize_run_status<'de, D>(deserializer: D) -> Result<RunStatus, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<RunStatus>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

impl BuildInfo {
    pub fn started_at(&self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp_millis(self.timestamp).map(|t| t.with_timezone(&Local))
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration / 1000
    }
}
