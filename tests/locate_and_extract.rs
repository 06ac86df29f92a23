use jenkins_log_lens::{extract, extract_error_block, locate, ExtractOptions, LocatorError};

fn numbered_log(count: usize, hits: &[(usize, &str)]) -> String {
    (0..count)
        .map(|i| {
            hits.iter()
                .find(|(at, _)| *at == i)
                .map(|(_, line)| line.to_string())
                .unwrap_or_else(|| format!("line {}", i))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn nested_job_url_with_build() {
    let locator = locate("https://ci.example.com/job/a/job/b/42/").unwrap();
    assert_eq!(locator.job_path, "job/a/job/b");
    assert_eq!(locator.job_name, "a/b");
    assert_eq!(locator.build_number, Some(42));
}

#[test]
fn mount_prefix_is_kept() {
    let locator = locate("https://ci.example.com/team/job/a/").unwrap();
    assert_eq!(locator.job_path, "team/job/a");
    assert_eq!(locator.build_number, None);
}

#[test]
fn bare_paths_are_trusted() {
    for path in ["folder/job/project", "/simple-job/", "job/a/job/b"] {
        let locator = locate(path).unwrap();
        assert_eq!(locator.job_path, path.trim_matches('/'));
        assert_eq!(locator.build_number, None);
    }
}

#[test]
fn url_without_marker_is_rejected() {
    assert!(matches!(
        locate("https://ci.example.com/no-job-marker/"),
        Err(LocatorError::NoJobMarker(_))
    ));
}

#[test]
fn canonical_path_rebuilds_the_same_url() {
    let locator = locate("https://ci.example.com/team/job/a/job/b/42").unwrap();
    let again = locate(&format!(
        "https://ci.example.com/{}/{}/",
        locator.job_path,
        locator.build_number.unwrap()
    ))
    .unwrap();
    assert_eq!(again, locator);
}

#[test]
fn no_keyword_hit_yields_nothing() {
    let log = numbered_log(30, &[]);
    assert_eq!(extract_error_block(&log), "");
}

#[test]
fn single_hit_window() {
    let log = numbered_log(50, &[(25, "java.lang.Exception: boom")]);
    let excerpt = extract_error_block(&log);
    let lines: Vec<&str> = excerpt.lines().collect();

    assert_eq!(lines.len(), 30);
    assert_eq!(lines.first(), Some(&"line 15"));
    assert_eq!(lines[10], "java.lang.Exception: boom");
    assert_eq!(lines.last(), Some(&"line 44"));
}

#[test]
fn overflow_keeps_the_tail() {
    let log = numbered_log(50, &[(25, "ERROR one")]);
    let excerpt = extract(&log, &ExtractOptions::default().with_max_lines(5));
    assert_eq!(excerpt, "line 40\nline 41\nline 42\nline 43\nline 44");
}

#[test]
fn overlapping_windows_keep_each_line_once() {
    let log = numbered_log(60, &[(12, "FAILED a"), (18, "FAILED b")]);
    let excerpt = extract_error_block(&log);
    let lines: Vec<&str> = excerpt.lines().collect();

    assert_eq!(lines.len(), 36);
    assert_eq!(lines.first(), Some(&"line 2"));
    assert_eq!(lines.last(), Some(&"line 37"));
}

#[test]
fn extracting_an_excerpt_again_changes_nothing() {
    let log = numbered_log(50, &[(10, "Traceback (most recent call last):")]);
    let excerpt = extract_error_block(&log);
    assert_eq!(extract_error_block(&excerpt), excerpt);
}
