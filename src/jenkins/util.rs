/// Browser url of a build's console page.
pub fn get_jenkins_console_url(jenkins_url: &str, job_path: &str, build_number: u32) -> String {
    format!("{}/{}/{}/console", jenkins_url, job_path, build_number)
}
