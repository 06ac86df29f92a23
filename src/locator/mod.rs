use crate::constant::log::{ERR_EMPTY_JOB_PATH, ERR_MALFORMED_URL, ERR_NO_JOB_MARKER};
use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;
use thiserror::Error;
use url::Url;

/// Segment Jenkins puts in front of every folder or job name.
pub const JOB_MARKER: &str = "job";

static URL_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").unwrap());

/// # Job Locator
///
/// A job (and maybe one of its builds) resolved from a jenkins url like:
///
/// - "https://example.jenkins.com/job/Some.Long-JOB_NAME/1234/"
/// - "https://example.jenkins.com/job/folder/job/sub-folder/job/project/"
/// - "https://example.jenkins.com/team-mount/job/folder/job/project/42/consoleText"
///
/// or from a bare job path like "folder/job/project".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobLocator {
    /// canonical path, marker kept before every name and mount prefix kept in front.
    /// this is the form jenkins api and log urls are built from.
    pub job_path: String,

    /// names only, joined by "/".
    pub job_name: String,

    pub build_number: Option<u32>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocatorError {
    #[error("{msg}: {input} ({reason})", msg = ERR_MALFORMED_URL)]
    MalformedUrl { input: String, reason: String },

    #[error("{msg}: {0}", msg = ERR_NO_JOB_MARKER)]
    NoJobMarker(String),

    #[error("{msg}: {0:?}", msg = ERR_EMPTY_JOB_PATH)]
    EmptyPath(String),
}

/// # locate
///
/// Resolve a jenkins url or a bare job path into a [`JobLocator`].
///
/// Surrounding whitespace is never part of the input.
/// Bare paths (no `scheme://`) are trusted as canonical and only lose their outer slashes,
/// a bare path made of slashes alone is [`LocatorError::EmptyPath`].
/// A numeric tail segment of a url is taken as the build number. Whatever sits in front of the
/// first `job/<name>` pair is a mount prefix and is kept. Segments after the last pair
/// (`consoleText`, `lastBuild`, ...) are dropped.
pub fn locate(input: &str) -> Result<JobLocator, LocatorError> {
    let input = input.trim();

    if !URL_SCHEME.is_match(input) {
        let job_path = input.trim_matches('/').to_string();
        if job_path.is_empty() {
            return Err(LocatorError::EmptyPath(input.to_string()));
        }
        return Ok(JobLocator {
            job_name: job_path.clone(),
            job_path,
            build_number: None,
        });
    }

    let url = Url::parse(input).map_err(|e| LocatorError::MalformedUrl {
        input: input.to_string(),
        reason: e.to_string(),
    })?;

    let mut segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();

    let build_number = segments.last().and_then(|s| parse_build_number(s));
    if build_number.is_some() {
        segments.pop();
    }

    let marker_idx = segments
        .windows(2)
        .position(|pair| pair[0] == JOB_MARKER)
        .ok_or_else(|| LocatorError::NoJobMarker(input.to_string()))?;

    let mut names = Vec::new();
    let mut rest = &segments[marker_idx..];
    while let [marker, name, tail @ ..] = rest {
        if *marker != JOB_MARKER {
            break;
        }
        names.push(*name);
        rest = tail;
    }

    let prefix = &segments[..marker_idx];
    let job_path = prefix
        .iter()
        .map(|s| s.to_string())
        .chain(names.iter().map(|name| format!("{}/{}", JOB_MARKER, name)))
        .collect::<Vec<_>>()
        .join("/");

    Ok(JobLocator {
        job_path,
        job_name: names.join("/"),
        build_number,
    })
}

fn parse_build_number(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    segment.parse::<u32>().ok().filter(|n| *n > 0)
}

impl JobLocator {
    /// A build number given by the caller wins over the one found in the url.
    pub fn with_build_number(mut self, build_number: Option<u32>) -> Self {
        if build_number.is_some() {
            self.build_number = build_number;
        }
        self
    }
}

impl Display for JobLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.build_number {
            Some(n) => write!(f, "{} #{}", self.job_name, n),
            None => write!(f, "{}", self.job_name),
        }
    }
}
