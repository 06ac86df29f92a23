use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct BuildRef {
    pub number: u32,
}

/// `lastBuild` is null for a job that never ran.
#[derive(Deserialize, Debug)]
pub struct LastBuildInfo {
    #[serde(rename = "lastBuild", default)]
    pub last_build: Option<BuildRef>,
}
