//! Site configuration.
//!
//! Everything configurable about the site lives here: the title shown
//! in the header, the contact recipient, the profile card content, and
//! where persisted state goes. Defaults are the static site; the
//! builder exists mostly for tests and the `FOYER_DATA_DIR` override.

use crate::profile::ProfileInfo;
use std::path::PathBuf;

/// Configuration for a run of the site.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Title in the header bar
    pub title: String,
    /// Recipient for the contact form's mailto hand-off
    pub contact_recipient: String,
    /// Profile card content
    pub profile: ProfileInfo,
    /// Override for the persisted-state directory (default: `~/.foyer`)
    pub data_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "henry's corner".to_string(),
            contact_recipient: "henrychao553@gmail.com".to_string(),
            profile: ProfileInfo::default(),
            data_dir: None,
        }
    }
}

impl SiteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the contact form recipient.
    pub fn with_contact_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.contact_recipient = recipient.into();
        self
    }

    /// Set the persisted-state directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Defaults plus environment overrides (`FOYER_DATA_DIR`).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = std::env::var("FOYER_DATA_DIR") {
            if !dir.is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }
        config
    }
}
