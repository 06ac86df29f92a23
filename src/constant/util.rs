pub enum SensitiveMode {
    /// mask every char
    Full,
    /// keep at most this many chars visible, split between head and tail.
    /// strings not longer than this are fully masked so something always stays hidden.
    Partial(usize),
}

/// # mask secret
///
/// turn an api token like "11aa22bb33cc" into "11********cc" before it reaches a log line.
///
/// ### Arguments
///
/// * `secret`: original secret
/// * `mode`: how much of the secret may stay visible
pub fn mask_secret(secret: &str, mode: SensitiveMode) -> String {
    let char_count = secret.chars().count();
    let visible = match mode {
        SensitiveMode::Full => 0,
        SensitiveMode::Partial(visible) if char_count > visible => visible,
        SensitiveMode::Partial(_) => 0,
    };

    let head = visible / 2;
    let tail = visible - head;

    secret
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if i < head || i >= char_count - tail {
                c
            } else {
                '*'
            }
        })
        .collect()
}

/// # trim base url
///
/// "https://jenkins.example.com/team/" -> "https://jenkins.example.com/team"
pub fn trim_base_url(url: &str) -> &str {
    url.trim().trim_end_matches('/')
}
