use serde::Deserialize;

/// Credential check against the jenkins root.
///
/// `tree=ping` names no real field, so jenkins answers `{}` after auth and skips
/// serializing the root object.
pub struct Ping;

impl jenkins_sdk::Endpoint for Ping {
    fn method(&self) -> &str {
        "GET"
    }

    fn endpoint(&self) -> String {
        "api/json?tree=ping".to_string()
    }
}

/// Body of a successful [`Ping`], always empty.
#[derive(Deserialize, Debug)]
pub struct PingResult {}
