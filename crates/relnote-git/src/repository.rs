//! Git repository wrapper.

use std::path::Path;

use chrono::{TimeZone, Utc};
use git2::{BranchType, Oid, Repository as Git2Repo};
use relnote_commit::CommitRecord;
use tracing::debug;

use crate::{GitError, GitResult};

/// A Git repository wrapper.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Opens a repository at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is not a valid Git repository.
    pub fn open(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner = Git2Repo::open(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Discovers the repository from the given directory or its parents.
    ///
    /// # Errors
    ///
    /// Returns an error if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> GitResult<Self> {
        let path = path.as_ref();
        let inner =
            Git2Repo::discover(path).map_err(|_| GitError::NotARepo(path.to_path_buf()))?;
        Ok(Self { inner })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.inner.workdir().unwrap_or_else(|| self.inner.path())
    }

    /// Resolves a revision (branch, tag, hash) to a commit id.
    fn resolve(&self, revision: &str) -> GitResult<Oid> {
        let object = self
            .inner
            .revparse_single(revision)
            .map_err(|_| GitError::RevisionNotFound(revision.to_string()))?;
        let commit = object
            .peel_to_commit()
            .map_err(|_| GitError::RevisionNotFound(revision.to_string()))?;
        Ok(commit.id())
    }

    /// Returns the commits reachable from `compare` but not from `base`.
    ///
    /// Commits are ordered newest first, like `git log base..compare`.
    ///
    /// # Errors
    ///
    /// Returns an error if either revision cannot be resolved or the history
    /// cannot be read.
    pub fn commits_between(&self, base: &str, compare: &str) -> GitResult<Vec<CommitRecord>> {
        let base_oid = self.resolve(base)?;
        let compare_oid = self.resolve(compare)?;

        let mut revwalk = self.inner.revwalk()?;
        revwalk.push(compare_oid)?;
        revwalk.hide(base_oid)?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.inner.find_commit(oid)?;

            let message = String::from_utf8_lossy(commit.message_bytes()).into_owned();
            let time = commit.time();
            let date = Utc
                .timestamp_opt(time.seconds(), 0)
                .single()
                .unwrap_or_else(Utc::now);

            let mut record = CommitRecord::new(oid.to_string(), message, date);

            let author = commit.author();
            let name = author.name().unwrap_or("");
            let email = author.email().unwrap_or("");
            if !name.is_empty() || !email.is_empty() {
                record = record.with_author(name, email);
            }

            commits.push(record);
        }

        debug!(%base, %compare, count = commits.len(), "read commit range");
        Ok(commits)
    }

    /// Returns the names of all local branches.
    ///
    /// # Errors
    ///
    /// Returns an error if branches cannot be read.
    pub fn local_branches(&self) -> GitResult<Vec<String>> {
        let mut names = Vec::new();
        for branch in self.inner.branches(Some(BranchType::Local))? {
            let (branch, _) = branch?;
            if let Some(name) = branch.name()? {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    /// Returns the URL of the named remote, if configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository configuration cannot be read.
    pub fn remote_url(&self, name: &str) -> GitResult<Option<String>> {
        match self.inner.find_remote(name) {
            Ok(remote) => Ok(remote.url().map(String::from)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
