/// Endpoint for the full json description of a Jenkins job.
pub struct JobApi {
    /// Canonical path of the Jenkins job.
    pub job_path: String,
}

impl jenkins_sdk::Endpoint for JobApi {
    /// HTTP method used (GET).
    fn method(&self) -> &str {
        "GET"
    }

    fn endpoint(&self) -> String {
        format!("{}/api/json", self.job_path)
    }
}

/// Endpoint for the full json description of one build.
pub struct BuildApi {
    pub job_path: String,

    pub build_number: u32,
}

impl jenkins_sdk::Endpoint for BuildApi {
    /// HTTP method used (GET).
    fn method(&self) -> &str {
        "GET"
    }

    fn endpoint(&self) -> String {
        format!("{}/{}/api/json", self.job_path, self.build_number)
    }
}
