/// Endpoint for the plain text console output of a build.
pub struct ConsoleText {
    /// Canonical path of the Jenkins job.
    pub job_path: String,

    /// Build number of the Jenkins run.
    pub build_number: u32,
}

impl jenkins_sdk::Endpoint for ConsoleText {
    /// HTTP method used (GET).
    fn method(&self) -> &str {
        "GET"
    }

    /// API path for retrieving the console text.
    fn endpoint(&self) -> String {
        format!("{}/{}/consoleText", self.job_path, self.build_number)
    }
}
