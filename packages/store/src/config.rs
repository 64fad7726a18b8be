//! # Dashboard configuration (`dashboard.toml`)
//!
//! Defines the TOML configuration the dashboard reads at start-up. The web app
//! embeds its copy at build time; native hosts may read it from disk.
//!
//! ## Structure
//!
//! ```toml
//! [session]
//! storage_key = "currentUser"   # durable key holding the signed-in identity
//! login_latency_ms = 800        # simulated directory latency
//!
//! [guard]
//! enforce_role_areas = false    # keep marketers out of /user/* and vice versa
//!
//! [[identities]]                # optional; replaces the built-in demo accounts
//! id = "1"
//! name = "John Marketer"
//! email = "marketer@example.com"
//! role = "marketer"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DashboardConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`SessionConfig`] | Storage key and sign-in latency. |
//! | [`GuardConfig`] | Route guard policy switches. |
//!
//! Every section is `#[serde(default)]`, so a missing or empty file is
//! equivalent to [`DashboardConfig::default`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{Identity, Role};

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub guard: GuardConfig,
    /// Known identities. Empty means the built-in demo accounts.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identities: Vec<Identity>,
}

/// Session persistence and sign-in settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default = "default_login_latency_ms")]
    pub login_latency_ms: u64,
}

fn default_storage_key() -> String {
    "currentUser".to_string()
}

fn default_login_latency_ms() -> u64 {
    800
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            login_latency_ms: default_login_latency_ms(),
        }
    }
}

impl SessionConfig {
    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }
}

/// Route guard settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GuardConfig {
    #[serde(default)]
    pub enforce_role_areas: bool,
}

/// The demo accounts the dashboard ships with.
pub fn default_identities() -> Vec<Identity> {
    vec![
        Identity::new("1", "John Marketer", "marketer@example.com", Role::Marketer)
            .with_avatar("https://i.pravatar.cc/150?u=marketer"),
        Identity::new("2", "Jane User", "user@example.com", Role::User)
            .with_avatar("https://i.pravatar.cc/150?u=user"),
    ]
}

impl DashboardConfig {
    /// The configured identities, or the demo accounts when none are listed.
    pub fn known_identities(&self) -> Vec<Identity> {
        if self.identities.is_empty() {
            default_identities()
        } else {
            self.identities.clone()
        }
    }

    /// Builder method to set the sign-in latency.
    pub fn with_login_latency_ms(mut self, ms: u64) -> Self {
        self.session.login_latency_ms = ms;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
