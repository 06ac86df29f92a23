use jenkins_log_lens::config::{default_config_path, ConfigFile, JenkinsConfig};
use jenkins_log_lens::constant::log::*;
use jenkins_log_lens::extractor::{extract, ExtractOptions};
use jenkins_log_lens::jenkins::client::JenkinsHttpClient;
use jenkins_log_lens::jenkins::jenkins_model::build_info::BuildInfo;
use jenkins_log_lens::jenkins::query::{ping_jenkins, query_console_log, query_job_info};
use jenkins_log_lens::jenkins::util::get_jenkins_console_url;
use jenkins_log_lens::lens_error::LensError;
use jenkins_log_lens::locator::locate;
use jenkins_log_lens::mcp::McpServer;
use jenkins_log_lens::pretty_log::{colored_println, ThemeColor};
use formatx::formatx;
use std::io::{Read, Stdout};
use std::path::{Path, PathBuf};
use tracing::info;

fn config_path_or_default(config_path: Option<&Path>) -> Result<PathBuf, LensError> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(default_config_path()?),
    }
}

/// # resolve config
///
/// Merge flags and environment variables with the config file.
pub fn resolve_config(
    overrides: ConfigFile,
    config_path: Option<&Path>,
) -> Result<JenkinsConfig, LensError> {
    let path = config_path_or_default(config_path)?;
    let file = ConfigFile::get_from_path(&path)?;

    let config = JenkinsConfig::resolve(overrides, file)?;
    info!("Using {:?}", config);
    Ok(config)
}

pub fn cli_do_locate(stdout: &mut Stdout, input: &str) -> Result<(), LensError> {
    let locator = locate(input)?;

    colored_println(
        stdout,
        ThemeColor::Main,
        &formatx!(RESULT_LOCATE_JOB_PATH, &locator.job_path).unwrap_or_default(),
    );
    colored_println(
        stdout,
        ThemeColor::Main,
        &formatx!(RESULT_LOCATE_JOB_NAME, &locator.job_name).unwrap_or_default(),
    );
    colored_println(
        stdout,
        ThemeColor::Second,
        &formatx!(
            RESULT_LOCATE_BUILD_NUMBER,
            locator
                .build_number
                .map(|n| n.to_string())
                .unwrap_or_else(|| HINT_LATEST_BUILD.to_string())
        )
        .unwrap_or_default(),
    );

    Ok(())
}

/// # cli do extract
///
/// Reads `file`, or stdin without one, and prints the error sections.
pub fn cli_do_extract(
    stdout: &mut Stdout,
    file: Option<&Path>,
    max_lines: usize,
    keywords: Vec<String>,
) -> Result<(), LensError> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut options = ExtractOptions::default().with_max_lines(max_lines);
    if !keywords.is_empty() {
        options = options.with_keywords(keywords);
    }

    print_excerpt(stdout, &extract(&text, &options));
    Ok(())
}

fn print_excerpt(stdout: &mut Stdout, excerpt: &str) {
    if excerpt.is_empty() {
        colored_println(stdout, ThemeColor::Warn, HINT_NO_ERROR_LINES);
    } else {
        println!("{}", excerpt);
    }
}

pub async fn cli_do_log(
    stdout: &mut Stdout,
    config: &JenkinsConfig,
    job_url: &str,
    build_number: Option<u32>,
    parse_errors: bool,
    max_lines: usize,
) -> Result<(), LensError> {
    let client = JenkinsHttpClient::new(config)?;
    let options = ExtractOptions::default().with_max_lines(max_lines);

    let log = query_console_log(&client, job_url, build_number, parse_errors, &options).await?;

    if parse_errors {
        print_excerpt(stdout, &log.content);
    } else {
        println!("{}", log.content);
    }

    colored_println(
        stdout,
        ThemeColor::Second,
        &formatx!(
            RESULT_CONSOLE_URL,
            get_jenkins_console_url(client.url(), &log.locator.job_path, log.build_number)
        )
        .unwrap_or_default(),
    );

    Ok(())
}

pub async fn cli_do_info(
    stdout: &mut Stdout,
    config: &JenkinsConfig,
    job_url: &str,
) -> Result<(), LensError> {
    let client = JenkinsHttpClient::new(config)?;
    let (locator, info) = query_job_info(&client, job_url).await?;

    println!("{}", serde_json::to_string_pretty(&info)?);

    if let Some(build_number) = locator.build_number {
        let build: BuildInfo = serde_json::from_value(info)?;
        let color = if build.result.is_failed() {
            ThemeColor::Error
        } else if build.building {
            ThemeColor::Warn
        } else {
            ThemeColor::Success
        };

        colored_println(
            stdout,
            color,
            &formatx!(
                RESULT_BUILD_SUMMARY,
                &locator.job_name,
                build.number,
                build.result.to_string(),
                build
                    .started_at()
                    .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_default(),
                build.duration_secs()
            )
            .unwrap_or_default(),
        );
        colored_println(
            stdout,
            ThemeColor::Second,
            &formatx!(
                RESULT_CONSOLE_URL,
                get_jenkins_console_url(client.url(), &locator.job_path, build_number)
            )
            .unwrap_or_default(),
        );
    }

    Ok(())
}

async fn connect(config: &JenkinsConfig) -> Result<JenkinsHttpClient, LensError> {
    let client = JenkinsHttpClient::new(config)?;

    ping_jenkins(&client).await.map_err(|e| {
        LensError::Connect(
            formatx!(
                ERR_JENKINS_CLIENT_INVALID,
                &config.url,
                &config.username,
                config.masked_api_token(),
                e.to_string()
            )
            .unwrap_or_default(),
        )
    })?;

    Ok(client)
}

pub async fn cli_do_ping(stdout: &mut Stdout, config: &JenkinsConfig) -> Result<(), LensError> {
    let client = connect(config).await?;

    colored_println(
        stdout,
        ThemeColor::Success,
        &formatx!(JENKINS_PING_RESULT, client.url(), &config.username).unwrap_or_default(),
    );
    Ok(())
}

/// # cli do login
///
/// Verify the merged connection settings, then write them to the config file.
pub async fn cli_do_login(
    stdout: &mut Stdout,
    overrides: ConfigFile,
    config_path: Option<&Path>,
) -> Result<(), LensError> {
    let path = config_path_or_default(config_path)?;
    let config = JenkinsConfig::resolve(overrides, ConfigFile::get_from_path(&path)?)?;

    connect(&config).await?;
    config.to_config_file().save(&path)?;

    colored_println(
        stdout,
        ThemeColor::Success,
        &formatx!(JENKINS_LOGIN_RESULT, path.display().to_string()).unwrap_or_default(),
    );
    Ok(())
}

pub async fn cli_do_serve(config: &JenkinsConfig) -> Result<(), LensError> {
    let client = JenkinsHttpClient::new(config)?;
    info!(
        "{}",
        formatx!(SERVER_STARTING, client.url()).unwrap_or_default()
    );

    McpServer::new(client, ExtractOptions::default())
        .run_stdio()
        .await
}
