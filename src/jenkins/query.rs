use crate::constant::log::RESULT_LOG_PARSED;
use crate::extractor::{extract, ExtractOptions};
use crate::jenkins::client::{JenkinsFetch, JenkinsHttpClient};
use crate::jenkins::jenkins_endpoint::console_text::ConsoleText;
use crate::jenkins::jenkins_endpoint::job_api::{BuildApi, JobApi};
use crate::jenkins::jenkins_endpoint::last_build::LastBuild;
use crate::jenkins::jenkins_endpoint::ping::{Ping, PingResult};
use crate::jenkins::jenkins_model::last_build::LastBuildInfo;
use crate::lens_error::LensError;
use crate::locator::{locate, JobLocator};
use formatx::formatx;
use jenkins_sdk::{AsyncQuery, Endpoint, JenkinsError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info};

/// Send an endpoint and hand back the body untouched.
pub async fn raw_query<C, E>(client: &C, endpoint: &E) -> Result<String, LensError>
where
    C: JenkinsFetch + ?Sized,
    E: Endpoint + Sync,
{
    client.fetch(endpoint.method(), &endpoint.endpoint()).await
}

pub async fn json_query<T, C, E>(client: &C, endpoint: &E) -> Result<T, LensError>
where
    T: DeserializeOwned,
    C: JenkinsFetch + ?Sized,
    E: Endpoint + Sync,
{
    let body = raw_query(client, endpoint).await?;
    Ok(serde_json::from_str(&body)?)
}

pub async fn ping_jenkins(client: &JenkinsHttpClient) -> Result<(), JenkinsError> {
    AsyncQuery::<PingResult>::query(&Ping, client)
        .await
        .map(|_| ())
}

pub async fn query_latest_build_number<C>(client: &C, job_path: &str) -> Result<u32, LensError>
where
    C: JenkinsFetch + ?Sized,
{
    let info: LastBuildInfo = json_query(
        client,
        &LastBuild {
            job_path: job_path.into(),
        },
    )
    .await?;

    info.last_build
        .map(|b| b.number)
        .ok_or_else(|| LensError::NoBuildsFound(job_path.to_string()))
}

/// # Console Log
///
/// A fetched console log, full or reduced to its error sections.
#[derive(Debug)]
pub struct ConsoleLog {
    pub locator: JobLocator,

    /// build the log belongs to, resolved to the latest build when none was given.
    pub build_number: u32,

    pub content: String,

    /// `content` went through the extractor.
    pub parsed: bool,

    /// char count of the log before extraction.
    pub original_chars: usize,
}

/// # query console log
///
/// Fetch the console text of a build.
///
/// ### Arguments
///
/// * `client`: fetch capability
/// * `job_url`: jenkins url or bare job path
/// * `build_number`: wins over a build number in `job_url`. if both are missing the latest build is used.
/// * `parse_errors`: reduce the log with [`extract`]
/// * `options`: extractor options, only used with `parse_errors`
pub async fn query_console_log<C>(
    client: &C,
    job_url: &str,
    build_number: Option<u32>,
    parse_errors: bool,
    options: &ExtractOptions,
) -> Result<ConsoleLog, LensError>
where
    C: JenkinsFetch + ?Sized,
{
    let result = fetch_console_log(client, job_url, build_number, parse_errors, options).await;
    if let Err(ref e) = result {
        error!("Error fetching console log: {}", e);
    }
    result
}

async fn fetch_console_log<C>(
    client: &C,
    job_url: &str,
    build_number: Option<u32>,
    parse_errors: bool,
    options: &ExtractOptions,
) -> Result<ConsoleLog, LensError>
where
    C: JenkinsFetch + ?Sized,
{
    let locator = locate(job_url)?.with_build_number(build_number);

    let build_number = match locator.build_number {
        Some(n) => n,
        None => query_latest_build_number(client, &locator.job_path).await?,
    };

    let text = raw_query(
        client,
        &ConsoleText {
            job_path: locator.job_path.clone(),
            build_number,
        },
    )
    .await?;

    let original_chars = text.chars().count();
    let content = if parse_errors {
        let parsed = extract(&text, options);
        info!(
            "{}",
            formatx!(RESULT_LOG_PARSED, original_chars, parsed.chars().count())
                .unwrap_or_default()
        );
        parsed
    } else {
        text
    };

    Ok(ConsoleLog {
        locator,
        build_number,
        content,
        parsed: parse_errors,
        original_chars,
    })
}

/// # query job info
///
/// Raw json of the build when `job_url` names one, of the job otherwise.
pub async fn query_job_info<C>(client: &C, job_url: &str) -> Result<(JobLocator, Value), LensError>
where
    C: JenkinsFetch + ?Sized,
{
    let result = fetch_job_info(client, job_url).await;
    if let Err(ref e) = result {
        error!("Error fetching job info: {}", e);
    }
    result
}

async fn fetch_job_info<C>(client: &C, job_url: &str) -> Result<(JobLocator, Value), LensError>
where
    C: JenkinsFetch + ?Sized,
{
    let locator = locate(job_url)?;
    let job_path = locator.job_path.clone();

    let value = match locator.build_number {
        Some(build_number) => {
            json_query(
                client,
                &BuildApi {
                    job_path,
                    build_number,
                },
            )
            .await?
        }
        None => json_query(client, &JobApi { job_path }).await?,
    };

    Ok((locator, value))
}
