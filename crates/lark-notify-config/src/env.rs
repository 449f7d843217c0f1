//! Loading configuration from environment variables.

use lark_notify_core::{BuildInfo, CommitInfo, EventKind, PipelineEvent, RepoInfo};

use crate::vars::*;
use crate::{ConfigError, ConfigResult};

/// Everything a single notification run needs.
#[derive(Clone)]
pub struct NotifyConfig {
    /// Bot webhook URL.
    pub webhook: String,
    /// Shared signing secret.
    pub secret: String,
    /// Log request and response bodies.
    pub debug: bool,
    pub event: PipelineEvent,
}

impl std::fmt::Debug for NotifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifyConfig")
            .field("webhook", &self.webhook)
            .field("secret", &"***")
            .field("debug", &self.debug)
            .field("event", &self.event)
            .finish()
    }
}

/// Lookup over the process environment, for use with [`load`].
///
/// Unset and non-UTF-8 values both read as `None`.
pub fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Load configuration through `lookup`.
///
/// Empty values are treated the same as unset ones. Required settings are
/// checked in a fixed order and the first missing one is reported.
pub fn load<F>(lookup: F) -> ConfigResult<NotifyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.is_empty());
    let get_or_default = |name: &str| get(name).unwrap_or_default();

    let webhook = get(PLUGIN_WEBHOOK).ok_or(ConfigError::MissingField("webhook"))?;

    let kind = match get(PLUGIN_MESSAGETYPE) {
        Some(value) => value
            .parse::<EventKind>()
            .map_err(|message| ConfigError::InvalidValue {
                field: PLUGIN_MESSAGETYPE,
                message,
            })?,
        None => EventKind::Build,
    };

    let docker_group = get(PLUGIN_DOCKERGROUP).ok_or(ConfigError::MissingField("dockergroup"))?;
    let secret = get(PLUGIN_SECRET).ok_or(ConfigError::MissingField("secret"))?;
    let debug = get(PLUGIN_DEBUG).as_deref() == Some("true");

    let event = PipelineEvent {
        kind,
        repo: RepoInfo {
            name: get_or_default(DRONE_REPO_NAME),
            link: get_or_default(DRONE_REPO_LINK),
        },
        build: BuildInfo {
            number: get_or_default(DRONE_BUILD_NUMBER),
            status: get_or_default(DRONE_BUILD_STATUS),
            link: get_or_default(DRONE_BUILD_LINK),
            failed_steps: get_or_default(DRONE_FAILED_STEPS),
        },
        commit: CommitInfo {
            sha: get_or_default(DRONE_COMMIT_SHA),
            link: get_or_default(DRONE_COMMIT_LINK),
            message: get_or_default(DRONE_COMMIT_MESSAGE),
            author: get_or_default(DRONE_COMMIT_AUTHOR),
            author_name: get_or_default(DRONE_COMMIT_AUTHOR_NAME),
            author_email: get_or_default(DRONE_COMMIT_AUTHOR_EMAIL),
            branch: get_or_default(DRONE_REPO_BRANCH),
            tag: get_or_default(DRONE_TAG),
        },
        docker_group,
    };

    Ok(NotifyConfig {
        webhook,
        secret,
        debug,
        event,
    })
}
