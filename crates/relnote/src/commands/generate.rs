//! Generate command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use relnote_config::{Config, load_with_root};
use relnote_core::{
    ChangelogRenderer, CoreError, JsonRenderer, MarkdownRenderer, Pipeline, highest_stable_branch,
    latest_release_in_changelog, validate_range, version_label,
};
use relnote_git::{Repository, web_url};
use tracing::{debug, info, warn};

/// Document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Keep a Changelog markdown
    #[default]
    Markdown,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    fn renderer(self) -> Box<dyn ChangelogRenderer> {
        match self {
            Self::Markdown => Box::new(MarkdownRenderer),
            Self::Json => Box::new(JsonRenderer),
        }
    }
}

/// Arguments for the generate command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Base revision (default: the latest release in the existing changelog)
    #[arg(short, long)]
    pub base: Option<String>,

    /// Revision to compare (default: the highest stable branch)
    #[arg(short, long)]
    pub compare: Option<String>,

    /// Output file (default: standard output)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Path inside the repository (default: current directory)
    #[arg(long, env = "RELNOTE_REPO")]
    pub repo: Option<PathBuf>,
}

/// Runs the generate command.
///
/// Relative paths from `relnote.toml` are resolved against the directory
/// holding it. Without a configuration file the changelog paths are relative
/// to the repository root.
pub fn run(args: GenerateArgs) -> Result<()> {
    let start_dir = match &args.repo {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("failed to read current directory")?,
    };
    let (config, config_root) =
        load_with_root(&start_dir).context("failed to load configuration")?;

    let repo_dir = match &args.repo {
        Some(path) => path.clone(),
        None => config_root
            .as_deref()
            .unwrap_or(start_dir.as_path())
            .join(&config.repository.path),
    };
    let repo = Repository::discover(&repo_dir).context("failed to open repository")?;
    let root = config_root.unwrap_or_else(|| repo.path().to_path_buf());

    let base = match args.base {
        Some(base) => base,
        None => presume_base(&root.join(&config.changelog.path), &config)?,
    };
    let compare = match args.compare {
        Some(compare) => compare,
        None => presume_compare(&repo, &config)?,
    };
    validate_range(&base, &compare)?;

    info!(%base, %compare, "generating changelog");

    let commits = repo
        .commits_between(&base, &compare)
        .with_context(|| format!("failed to read commits between {base} and {compare}"))?;

    let pipeline = Pipeline::from_config(&config.filter, repository_url(&repo, &config)?);
    let output = pipeline.run(commits);

    let document = args
        .format
        .renderer()
        .render(&version_label(&compare), &output.bundle)?;

    let out = args
        .out
        .or_else(|| config.changelog.output.as_ref().map(|path| root.join(path)));
    match out {
        Some(path) => {
            fs::write(&path, document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "wrote changelog");
        }
        None => print!("{document}"),
    }

    Ok(())
}

/// Presumes the base from the newest release in the existing changelog.
fn presume_base(path: &Path, config: &Config) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}; pass --base instead", path.display()))?;
    let version = latest_release_in_changelog(&content)
        .ok_or(CoreError::NoBaseVersion)
        .with_context(|| format!("pass --base or add a release to {}", path.display()))?;

    let base = format!("{}{version}", config.version.tag_prefix);
    warn!(%base, "no base given, presuming the latest release in {}", path.display());
    Ok(base)
}

/// Presumes the compare revision from the highest stable branch.
fn presume_compare(repo: &Repository, config: &Config) -> Result<String> {
    let suffix = &config.version.stable_suffix;
    let branches = repo.local_branches()?;
    let compare = highest_stable_branch(&branches, suffix)
        .ok_or_else(|| CoreError::NoStableBranch(suffix.clone()))
        .context("pass --compare or create a release branch")?;

    warn!(%compare, "no compare given, presuming the highest stable branch");
    Ok(compare)
}

/// Returns the web URL commits are linked to, if any.
fn repository_url(repo: &Repository, config: &Config) -> Result<Option<String>> {
    if let Some(url) = &config.repository.url {
        return Ok(Some(url.clone()));
    }

    let remote = &config.repository.remote;
    let url = repo.remote_url(remote)?.as_deref().and_then(web_url);
    if url.is_none() {
        debug!(%remote, "no web URL for remote, commit ids will not be linked");
    }
    Ok(url)
}
