/// Endpoint for the number of the latest build of a job.
pub struct LastBuild {
    pub job_path: String,
}

impl jenkins_sdk::Endpoint for LastBuild {
    /// HTTP method used (GET).
    fn method(&self) -> &str {
        "GET"
    }

    fn endpoint(&self) -> String {
        format!("{}/api/json?tree=lastBuild[number]", self.job_path)
    }
}
