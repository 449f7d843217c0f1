//! Environment variable names.

// Plugin settings
pub const PLUGIN_WEBHOOK: &str = "PLUGIN_WEBHOOK";
pub const PLUGIN_SECRET: &str = "PLUGIN_SECRET";
pub const PLUGIN_DOCKERGROUP: &str = "PLUGIN_DOCKERGROUP";
pub const PLUGIN_MESSAGETYPE: &str = "PLUGIN_MESSAGETYPE";
pub const PLUGIN_DEBUG: &str = "PLUGIN_DEBUG";

// Build metadata
pub const DRONE_REPO_NAME: &str = "DRONE_REPO_NAME";
pub const DRONE_REPO_LINK: &str = "DRONE_REPO_LINK";
pub const DRONE_REPO_BRANCH: &str = "DRONE_REPO_BRANCH";
pub const DRONE_BUILD_NUMBER: &str = "DRONE_BUILD_NUMBER";
pub const DRONE_BUILD_STATUS: &str = "DRONE_BUILD_STATUS";
pub const DRONE_BUILD_LINK: &str = "DRONE_BUILD_LINK";
pub const DRONE_FAILED_STEPS: &str = "DRONE_FAILED_STEPS";
pub const DRONE_TAG: &str = "DRONE_TAG";
pub const DRONE_COMMIT_SHA: &str = "DRONE_COMMIT_SHA";
pub const DRONE_COMMIT_LINK: &str = "DRONE_COMMIT_LINK";
pub const DRONE_COMMIT_MESSAGE: &str = "DRONE_COMMIT_MESSAGE";
pub const DRONE_COMMIT_AUTHOR: &str = "DRONE_COMMIT_AUTHOR";
pub const DRONE_COMMIT_AUTHOR_NAME: &str = "DRONE_COMMIT_AUTHOR_NAME";
pub const DRONE_COMMIT_AUTHOR_EMAIL: &str = "DRONE_COMMIT_AUTHOR_EMAIL";
