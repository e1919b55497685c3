//! Conversions between the editable text and the env sequence.

/// Splits edited text into env entries, one per line. Empty lines are kept.
pub fn parse_env_text(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

pub fn env_text(env: &[String]) -> String {
    env.join("\n")
}

/// Variable name of a `KEY=VALUE` entry; the whole entry if it has no `=`.
pub fn env_key(entry: &str) -> &str {
    entry.split_once('=').map_or(entry, |(key, _)| key)
}

/// Replaces the first entry with the same key as `assignment`, or appends it.
pub fn set_var(env: &[String], assignment: &str) -> Vec<String> {
    let key = env_key(assignment);
    let mut env = env.to_vec();
    match env.iter_mut().find(|entry| env_key(entry) == key) {
        Some(entry) => *entry = assignment.to_string(),
        None => env.push(assignment.to_string()),
    }
    env
}

/// Removes every entry whose key is `key`.
pub fn unset_var(env: &[String], key: &str) -> Vec<String> {
    env.iter()
        .filter(|entry| env_key(entry) != key)
        .cloned()
        .collect()
}
