pub const ERR_MALFORMED_URL: &str = "Malformed Jenkins url";
pub const ERR_NO_JOB_MARKER: &str = "Url does not contain a job path";
pub const ERR_EMPTY_JOB_PATH: &str = "Job path is empty";
pub const ERR_NO_BUILDS_FOUND: &str = "No builds found for job";
pub const ERR_INVALID_METHOD: &str = "Invalid http method";
pub const ERR_HTTP_STATUS: &str = "Jenkins responded with HTTP";
pub const ERR_NEED_A_JENKINS_URL: &str = "Need a jenkins url. Use --url or JENKINS_URL.";
pub const ERR_NEED_A_JENKINS_USERNAME: &str =
    "Need your jenkins username. Use --username or JENKINS_USERNAME.";
pub const ERR_NEED_A_JENKINS_API_TOKEN: &str =
    "Need your jenkins api token. Use --api-token or JENKINS_API_TOKEN.";
pub const ERR_CONFIG_READ: &str = "Cannot read config file";
pub const ERR_CONFIG_PARSE: &str = "Invalid config file";
pub const ERR_CONFIG_SAVE: &str = "Cannot save config file";
pub const ERR_NO_HOME_DIR: &str = "Cannot find home directory for the config file.";
pub const ERR_JENKINS_CLIENT_INVALID: &str =
    "Cannot connect to jenkins. Url: {}\nUsername: {}\nApi-Token: {}\nErr: {}";
pub const ERR_FETCH_CONSOLE_LOG: &str = "Error fetching console log: {}";
pub const ERR_FETCH_JOB_INFO: &str = "Error fetching job info: {}";
pub const ERR_INVALID_BUILD_NUMBER: &str = "build_number must be a positive integer, got {}";
pub const ERR_MISSING_ARGUMENT: &str = "Missing required argument: {}";
pub const ERR_UNKNOWN_TOOL: &str = "Unknown tool: {}";

pub const HINT_NO_ERROR_LINES: &str = "No error lines found in the console log.";
pub const HINT_LATEST_BUILD: &str = "(latest)";

pub const RESULT_LOCATE_JOB_PATH: &str = "job path:     {}";
pub const RESULT_LOCATE_JOB_NAME: &str = "job name:     {}";
pub const RESULT_LOCATE_BUILD_NUMBER: &str = "build number: {}";
pub const RESULT_CONSOLE_LOG: &str = "Console log ({}) for job {} (build {}):\n\n{}";
pub const RESULT_JOB_INFO: &str = "Job information for {}:\n\n{}";
pub const RESULT_BUILD_SUMMARY: &str = "{} #{} {} | started {} | took {}s";
pub const RESULT_LOG_PARSED: &str = "Console log parsed: {} chars -> {} chars";
pub const RESULT_CONSOLE_URL: &str = "Console: {}";
pub const LOG_TYPE_PARSED: &str = "parsed error sections";
pub const LOG_TYPE_FULL: &str = "full log";

pub const JENKINS_LOGIN_RESULT: &str = "Jenkins login success! Saved to {}";
pub const JENKINS_PING_RESULT: &str = "Jenkins at {} is reachable as {}.";
pub const SERVER_STARTING: &str = "Starting Jenkins tool server for {}";
