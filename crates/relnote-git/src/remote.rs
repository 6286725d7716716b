//! Remote URL handling.

/// Converts a git remote URL into the repository's web URL.
///
/// Handles both HTTPS and SSH formats:
/// - `https://github.com/owner/repo.git`
/// - `git@github.com:owner/repo.git`
/// - `ssh://git@github.com/owner/repo.git`
///
/// Returns `None` if the URL cannot be parsed.
pub fn web_url(remote: &str) -> Option<String> {
    let remote = remote.trim();
    let (host, path) = if let Some(rest) = remote.strip_prefix("git@") {
        rest.split_once(':')?
    } else {
        let after_scheme = remote.split_once("://")?.1;
        let after_user = after_scheme
            .split_once('@')
            .map_or(after_scheme, |(_, rest)| rest);
        after_user.split_once('/')?
    };

    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    let (owner, repo) = path.split_once('/')?;

    if host.is_empty() || owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }

    Some(format!("https://{host}/{owner}/{repo}"))
}
