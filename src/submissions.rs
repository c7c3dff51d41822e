//! Accepted signups and their persistence in `localStorage`.

use gloo_storage::errors::StorageError as BackendError;
use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config;

/// One accepted form entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "lenient_millis")]
    pub time: i64,
    // Only present in entries written by older page versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Submission {
    pub fn new(name: impl Into<String>, time: i64) -> Self {
        Self {
            name: name.into(),
            time,
            email: None,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// `Date.now()` is integral, but hand-edited or foreign entries may carry floats or null.
fn lenient_millis<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(number
        .and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)))
        .unwrap_or_default())
}

/// Why a candidate name was turned away. The display text is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Please enter a name.")]
    EmptyName,
    #[error("Duplicate consecutive name not allowed.")]
    DuplicateConsecutive,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Saved signups could not be read, so nothing was changed.")]
    Corrupt(#[source] serde_json::Error),
    #[error("Your signup could not be saved in this browser.")]
    Backend(#[from] BackendError),
}

/// Removes leading `"<digits>."` ordinals (plus trailing whitespace) so list
/// numbering is never doubled. Stops only once no ordinal is left, which makes
/// the operation idempotent.
pub fn strip_ordinal_prefix(name: &str) -> &str {
    let mut rest = name;
    loop {
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 || !rest[digits..].starts_with('.') {
            return rest;
        }
        rest = rest[digits + 1..].trim_start();
    }
}

/// Normalises a raw form value and checks it against the most recent entry.
///
/// Only the immediately preceding submission is compared, so a name can come
/// back once something else was accepted in between.
pub fn check_candidate(entries: &[Submission], raw: &str) -> Result<String, SubmissionError> {
    let name = strip_ordinal_prefix(raw.trim());
    if name.is_empty() {
        return Err(SubmissionError::EmptyName);
    }
    if entries.last().map_or(false, |last| last.name == name) {
        return Err(SubmissionError::DuplicateConsecutive);
    }
    Ok(name.to_string())
}

/// The history after accepting `raw` at `now`: the old entries plus one new one.
pub fn record(history: &[Submission], raw: &str, now: i64) -> Result<Vec<Submission>, SubmissionError> {
    let name = check_candidate(history, raw)?;
    let mut next = Vec::with_capacity(history.len() + 1);
    next.extend_from_slice(history);
    next.push(Submission::new(name, now));
    Ok(next)
}

/// Label used in the dashboard list, without the leading number.
pub fn display_name(entry: &Submission) -> String {
    let name = entry.name.trim();
    let label = if !name.is_empty() {
        name
    } else if let Some(email) = entry.email.as_deref() {
        email.split('@').next().unwrap_or_default()
    } else {
        "Unnamed"
    };
    strip_ordinal_prefix(label).to_string()
}

/// Keeps every stored entry that still reads as a submission; the rest are skipped one by one.
pub fn decode_entries(values: Vec<Value>) -> Vec<Submission> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(idx, value)| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable stored signup #{}: {}", idx + 1, e);
                None
            }
        })
        .collect()
}

/// Maps a storage read onto the history. A missing key is an empty history;
/// content that is not a JSON list is an error so callers never write over it.
pub fn from_stored(read: Result<Vec<Value>, BackendError>) -> Result<Vec<Submission>, StorageError> {
    match read {
        Ok(values) => Ok(decode_entries(values)),
        Err(BackendError::KeyNotFound(_)) => Ok(Vec::new()),
        Err(BackendError::SerdeError(e)) => Err(StorageError::Corrupt(e)),
        Err(e) => Err(StorageError::Backend(e)),
    }
}

pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Reads the history for an update. Fails instead of pretending the list is empty.
pub fn read() -> Result<Vec<Submission>, StorageError> {
    from_stored(LocalStorage::get::<Vec<Value>>(config::STORAGE_KEY))
}

/// Reads the history for display. Unreadable content shows as an empty list.
pub fn load() -> Vec<Submission> {
    read().unwrap_or_else(|e| {
        log::warn!("Ignoring stored signups: {:?}", e);
        Vec::new()
    })
}

pub fn save(entries: &[Submission]) -> Result<(), StorageError> {
    LocalStorage::set(config::STORAGE_KEY, entries)?;
    Ok(())
}

/// Writes `history` and hands it back only once it is stored, so the page
/// never shows an entry storage does not hold.
pub fn commit<F>(history: Vec<Submission>, write: F) -> Result<Vec<Submission>, StorageError>
where
    F: FnOnce(&[Submission]) -> Result<(), StorageError>,
{
    write(&history)?;
    Ok(history)
}

pub fn clear() {
    LocalStorage::delete(config::STORAGE_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(names: &[&str]) -> Vec<Submission> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Submission::new(*n, 1_700_000_000_000 + i as i64))
            .collect()
    }

    fn stored(raw: &str) -> Vec<Submission> {
        let values: Vec<Value> = serde_json::from_str(raw).unwrap();
        decode_entries(values)
    }

    #[test]
    fn fresh_name_is_accepted() {
        assert_eq!(check_candidate(&[], "Ada Lovelace"), Ok("Ada Lovelace".to_string()));
        assert_eq!(check_candidate(&history(&["Grace"]), "  Ada "), Ok("Ada".to_string()));
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(check_candidate(&[], ""), Err(SubmissionError::EmptyName));
        assert_eq!(check_candidate(&[], "   "), Err(SubmissionError::EmptyName));
        assert_eq!(check_candidate(&[], "3."), Err(SubmissionError::EmptyName));
    }

    #[test]
    fn only_adjacent_duplicates_are_rejected() {
        let mut entries = history(&["Ada"]);
        assert_eq!(
            check_candidate(&entries, "Ada"),
            Err(SubmissionError::DuplicateConsecutive)
        );

        entries.push(Submission::new("Grace", 1));
        assert_eq!(check_candidate(&entries, "Ada"), Ok("Ada".to_string()));
    }

    #[test]
    fn duplicate_check_runs_after_prefix_stripping() {
        let entries = history(&["Ada"]);
        assert_eq!(
            check_candidate(&entries, "2. Ada"),
            Err(SubmissionError::DuplicateConsecutive)
        );
        // Case matters.
        assert!(check_candidate(&entries, "ada").is_ok());
    }

    #[test]
    fn record_appends_exactly_one_entry() {
        let before = history(&["Ada", "Grace"]);
        let after = record(&before, " 3. Linus ", 1_700_000_123_456).unwrap();

        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..2], &before[..]);
        assert_eq!(after[2], Submission::new("Linus", 1_700_000_123_456));
    }

    #[test]
    fn record_leaves_history_alone_on_rejection() {
        let before = history(&["Ada"]);
        assert_eq!(record(&before, "Ada", 9), Err(SubmissionError::DuplicateConsecutive));
        assert_eq!(record(&before, "  ", 9), Err(SubmissionError::EmptyName));
        assert_eq!(before, history(&["Ada"]));
    }

    #[test]
    fn same_name_again_after_another_is_recorded() {
        let first = record(&[], "Ada", 1).unwrap();
        assert!(record(&first, "Ada", 2).is_err());
        let second = record(&first, "Grace", 3).unwrap();
        let third = record(&second, "Ada", 4).unwrap();
        let names: Vec<&str> = third.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Grace", "Ada"]);
    }

    #[test]
    fn commit_publishes_only_what_was_written() {
        let history = record(&[], "Ada", 1).unwrap();

        let mut written = Vec::new();
        let stored = commit(history.clone(), |entries| {
            written = entries.to_vec();
            Ok(())
        })
        .unwrap();
        assert_eq!(stored, history);
        assert_eq!(written, history);

        let failed = commit(history, |_| {
            let quota = serde_json::from_str::<Vec<Value>>("quota").unwrap_err();
            Err(StorageError::Corrupt(quota))
        });
        assert!(failed.is_err());
    }

    #[test]
    fn ordinal_prefix_is_removed() {
        assert_eq!(strip_ordinal_prefix("3. Alice"), "Alice");
        assert_eq!(strip_ordinal_prefix("12.Bob"), "Bob");
        assert_eq!(strip_ordinal_prefix("1. 2. Carol"), "Carol");
        assert_eq!(strip_ordinal_prefix("Agent 47"), "Agent 47");
        assert_eq!(strip_ordinal_prefix("3 Musketeers"), "3 Musketeers");
        assert_eq!(strip_ordinal_prefix("3.14 Pi"), "14 Pi");
    }

    #[test]
    fn stripping_is_idempotent() {
        for raw in ["3. Alice", "1. 2. Carol", "Dave", "7.", "42 Things", "3.14 Pi"] {
            let once = strip_ordinal_prefix(raw);
            assert_eq!(strip_ordinal_prefix(once), once, "input {:?}", raw);
        }
    }

    #[test]
    fn display_name_falls_back_to_email_then_placeholder() {
        let mut entry = Submission::new("  ", 0);
        assert_eq!(display_name(&entry), "Unnamed");

        entry.email = Some("grace@example.com".to_string());
        assert_eq!(display_name(&entry), "grace");

        entry.name = "4. Grace Hopper".to_string();
        assert_eq!(display_name(&entry), "Grace Hopper");
    }

    #[test]
    fn stored_shape_is_read_back() {
        let entries = stored(r#"[{"name":"Ada","time":1700000000000},{"name":"","email":"g@x.io","time":1}]"#);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], Submission::new("Ada", 1_700_000_000_000));
        assert_eq!(entries[1].email.as_deref(), Some("g@x.io"));
    }

    #[test]
    fn off_shape_entries_do_not_empty_the_history() {
        let entries = stored(r#"[{"name":"Ada","time":1},{"name":"Grace"}]"#);
        assert_eq!(entries, vec![Submission::new("Ada", 1), Submission::new("Grace", 0)]);

        let entries = stored(r#"[{"name":"Ada","time":1700000000000.0}]"#);
        assert_eq!(entries, vec![Submission::new("Ada", 1_700_000_000_000)]);

        let entries = stored(r#"[{"name":null,"email":"a@b.c","time":1}]"#);
        assert_eq!(entries.len(), 1);
        assert_eq!(display_name(&entries[0]), "a");
    }

    #[test]
    fn unreadable_entries_are_skipped_one_by_one() {
        let entries = stored(r#"[{"name":"Ada","time":1},"oops",42,{"name":"Grace","time":"soon"},{"name":"Linus","time":3}]"#);
        let names: Vec<&str> = entries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Linus"]);
    }

    #[test]
    fn missing_key_reads_as_empty_history() {
        let read = from_stored(Err(BackendError::KeyNotFound(config::STORAGE_KEY.to_string())));
        assert!(read.unwrap().is_empty());
    }

    #[test]
    fn non_list_content_is_an_error_not_an_empty_list() {
        for raw in ["not json", r#"{"name":"Ada"}"#] {
            let parse = serde_json::from_str::<Vec<Value>>(raw).unwrap_err();
            let read = from_stored(Err(BackendError::SerdeError(parse)));
            assert!(matches!(read, Err(StorageError::Corrupt(_))), "input {:?}", raw);
        }
    }

    #[test]
    fn empty_list_reads_as_empty_history() {
        assert!(from_stored(Ok(Vec::new())).unwrap().is_empty());
    }

    #[test]
    fn serialized_entries_omit_absent_email() {
        let json = serde_json::to_string(&[Submission::new("Ada", 5)]).unwrap();
        assert_eq!(json, r#"[{"name":"Ada","time":5}]"#);
    }
}
