//! Pipeline event metadata.

/// The kind of pipeline run being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventKind {
    #[default]
    Build,
    Deploy,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Build => write!(f, "BUILD"),
            EventKind::Deploy => write!(f, "DEPLOY"),
        }
    }
}

impl std::str::FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUILD" => Ok(EventKind::Build),
            "DEPLOY" => Ok(EventKind::Deploy),
            _ => Err(format!("Unknown message type: {}", s)),
        }
    }
}

/// Repository the pipeline ran for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoInfo {
    pub name: String,
    pub link: String,
}

/// Build-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInfo {
    pub number: String,
    /// Raw status reported by the CI server; only `success` counts as success.
    pub status: String,
    pub link: String,
    pub failed_steps: String,
}

impl BuildInfo {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Commit-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitInfo {
    pub sha: String,
    pub link: String,
    pub message: String,
    /// Author login / identifier.
    pub author: String,
    /// Author display name.
    pub author_name: String,
    pub author_email: String,
    pub branch: String,
    pub tag: String,
}

impl CommitInfo {
    /// Short SHA of at most `len` characters.
    ///
    /// SHAs shorter than `len` are returned whole.
    pub fn short_sha(&self, len: usize) -> &str {
        match self.sha.char_indices().nth(len) {
            Some((idx, _)) => &self.sha[..idx],
            None => &self.sha,
        }
    }

    /// Author as shown on the card, if any author information is present.
    ///
    /// With both an identifier and a different display name the result is
    /// `name@identifier`; otherwise whichever one is set.
    pub fn author_display(&self) -> Option<String> {
        match (self.author.as_str(), self.author_name.as_str()) {
            ("", "") => None,
            ("", name) => Some(name.to_string()),
            (author, "") => Some(author.to_string()),
            (author, name) if author == name => Some(author.to_string()),
            (author, name) => Some(format!("{}@{}", name, author)),
        }
    }
}

/// One CI run's metadata. Built once at startup and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineEvent {
    pub kind: EventKind,
    pub repo: RepoInfo,
    pub build: BuildInfo,
    pub commit: CommitInfo,
    /// Registry namespace used to render the DEPLOY image reference.
    pub docker_group: String,
}

impl PipelineEvent {
    /// Image reference pushed for this commit, e.g. `group/repo:abcdef0`.
    pub fn image_ref(&self) -> Option<String> {
        if self.commit.sha.is_empty() {
            return None;
        }
        Some(format!(
            "{}/{}:{}",
            self.docker_group,
            self.repo.name,
            self.commit.short_sha(7)
        ))
    }
}
