//! Commit record as retrieved from Git.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The identity a commit is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name.
    pub name: String,

    /// Contact handle (usually an email address).
    pub email: String,
}

impl Author {
    /// Creates a new author.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A commit as retrieved from Git, before any filtering or classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// The commit hash (SHA).
    pub id: String,

    /// The full commit message (subject + body).
    pub message: String,

    /// The commit author, when the commit can be attributed.
    pub author: Option<Author>,

    /// The commit date.
    pub date: DateTime<Utc>,
}

impl CommitRecord {
    /// Creates a new, unattributed commit record.
    #[must_use]
    pub fn new(id: impl Into<String>, message: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            author: None,
            date,
        }
    }

    /// Attributes the commit to an author.
    #[must_use]
    pub fn with_author(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.author = Some(Author::new(name, email));
        self
    }

    /// Returns the first line of the commit message (the subject).
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Returns the short id (first 7 characters).
    #[must_use]
    pub fn short_id(&self) -> &str {
        self.id.get(..7).unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_commit(id: &str, message: &str) -> CommitRecord {
        CommitRecord::new(id, message, Utc::now())
    }

    #[test]
    fn test_new_is_unattributed() {
        let now = Utc::now();
        let commit = CommitRecord::new("abc1234567890", "Fix crash", now);

        assert_eq!(commit.id, "abc1234567890");
        assert_eq!(commit.message, "Fix crash");
        assert!(commit.author.is_none());
        assert_eq!(commit.date, now);
    }

    #[test]
    fn test_with_author() {
        let commit = make_commit("abc123", "message").with_author("Jane Doe", "jane@example.com");

        let author = commit.author.unwrap();
        assert_eq!(author.name, "Jane Doe");
        assert_eq!(author.email, "jane@example.com");
    }

    #[test]
    fn test_subject() {
        let commit = make_commit(
            "abc1234567890",
            "Fix scroll jank\n\nSummary:\n[iOS] [Fixed] - Fix scroll jank",
        );

        assert_eq!(commit.subject(), "Fix scroll jank");
    }

    #[test]
    fn test_subject_crlf() {
        let commit = make_commit("abc123", "Fix thing\r\nbody");
        assert_eq!(commit.subject(), "Fix thing");
    }

    #[test]
    fn test_subject_empty() {
        let commit = make_commit("abc123", "");
        assert_eq!(commit.subject(), "");
    }

    #[test]
    fn test_subject_only_newlines() {
        let commit = make_commit("abc123", "\n\n\n");
        assert_eq!(commit.subject(), "");
    }

    #[test]
    fn test_short_id() {
        let commit = make_commit("abc1234567890", "message");
        assert_eq!(commit.short_id(), "abc1234");
    }

    #[test]
    fn test_short_id_less_than_7() {
        let commit = make_commit("abc", "message");
        assert_eq!(commit.short_id(), "abc");
    }

    #[test]
    fn test_short_id_empty() {
        let commit = make_commit("", "message");
        assert_eq!(commit.short_id(), "");
    }

    #[test]
    fn test_serialize_deserialize() {
        let commit = make_commit("abc123", "test message").with_author("A", "a@example.com");
        let json = serde_json::to_string(&commit).unwrap();
        let deserialized: CommitRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(commit, deserialized);
    }
}
