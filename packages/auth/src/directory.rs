//! # Identity directory
//!
//! The session store resolves an address to an [`Identity`] through the
//! [`IdentityDirectory`] trait. Swapping in a real credential service means
//! implementing this one method; the session control flow does not change.
//!
//! [`StaticDirectory`] is the implementation the dashboard ships with: a fixed
//! list of identities (the demo accounts, or the `[[identities]]` from
//! `dashboard.toml`) answered after a simulated round-trip delay.

use std::future::Future;
use std::time::Duration;

use store::{DashboardConfig, Identity};

/// Async lookup of a known identity by contact address.
pub trait IdentityDirectory {
    fn find_by_address(
        &self,
        address: &str,
    ) -> impl Future<Output = Option<Identity>>;
}

/// Fixed identity list with simulated lookup latency.
#[derive(Clone, Debug)]
pub struct StaticDirectory {
    identities: Vec<Identity>,
    latency: Duration,
}

impl StaticDirectory {
    pub fn new(identities: Vec<Identity>, latency: Duration) -> Self {
        Self { identities, latency }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(config.known_identities(), config.session.login_latency())
    }

    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

impl IdentityDirectory for StaticDirectory {
    async fn find_by_address(&self, address: &str) -> Option<Identity> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        let address = address.trim();
        self.identities
            .iter()
            .find(|identity| identity.email == address)
            .cloned()
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_demo_accounts_resolve_after_latency() {
        let directory = StaticDirectory::default();
        assert_eq!(directory.latency(), Duration::from_millis(800));

        let started = Instant::now();
        let found = directory.find_by_address("marketer@example.com").await.unwrap();
        assert_eq!(found.role, Role::Marketer);
        assert_eq!(found.name, "John Marketer");
        assert!(started.elapsed() >= Duration::from_millis(800));

        let found = directory.find_by_address("user@example.com").await.unwrap();
        assert_eq!(found.role, Role::User);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_address_is_none() {
        let directory = StaticDirectory::default();
        assert!(directory.find_by_address("nobody@example.com").await.is_none());
        // Exact match only
        assert!(directory.find_by_address("Marketer@Example.com").await.is_none());
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_ignored() {
        let directory = StaticDirectory::new(store::config::default_identities(), Duration::ZERO);
        let found = directory.find_by_address("  user@example.com ").await;
        assert_eq!(found.map(|i| i.id), Some("2".to_string()));
    }

    #[tokio::test]
    async fn test_from_config_uses_configured_identities() {
        let config = DashboardConfig {
            identities: vec![Identity::new("7", "Solo", "solo@example.com", Role::User)],
            ..DashboardConfig::default()
        }
        .with_login_latency_ms(0);
        let directory = StaticDirectory::from_config(&config);

        assert_eq!(directory.identities().len(), 1);
        assert!(directory.find_by_address("solo@example.com").await.is_some());
        assert!(directory.find_by_address("marketer@example.com").await.is_none());
    }
}
