pub mod client;
pub mod jenkins_endpoint;
pub mod jenkins_model;
pub mod query;
pub mod util;

#[cfg(test)]
pub(crate) mod fake_client;

#[cfg(test)]
mod tests {
    use crate::config::JenkinsConfig;
    use crate::jenkins::client::JenkinsHttpClient;
    use crate::jenkins::query::*;
    use crate::extractor::ExtractOptions;

    const URL: &str = "";
    const USERNAME: &str = "";
    const API_TOKEN: &str = "";
    const JOB_URL: &str = "";

    fn lab_client() -> Option<JenkinsHttpClient> {
        if URL.is_empty() {
            return None;
        }
        JenkinsHttpClient::new(&JenkinsConfig::new(URL, USERNAME, API_TOKEN)).ok()
    }

    #[tokio::test]
    async fn test_ping_jenkins_lab() {
        if let Some(client) = lab_client() {
            assert!(ping_jenkins(&client).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_query_console_log_lab() {
        if let Some(client) = lab_client() {
            match query_console_log(&client, JOB_URL, None, true, &ExtractOptions::default()).await
            {
                Ok(log) => println!("log of #{}: \n{}", log.build_number, log.content),
                Err(e) => println!("Error: {:#?}", e),
            }
        }
    }

    #[tokio::test]
    async fn test_query_job_info_lab() {
        if let Some(client) = lab_client() {
            match query_job_info(&client, JOB_URL).await {
                Ok((_, info)) => println!("{:#}", info),
                Err(e) => println!("Error: {:#?}", e),
            }
        }
    }
}
