//! # Session store
//!
//! [`SessionStore`] owns the process-wide [`Session`]: the current identity (if
//! any) and the loading flag. It is the only writer; everything else reads a
//! cloned snapshot or watches changes through a `tokio::sync::watch` receiver.
//!
//! ## Lifecycle
//!
//! 1. [`SessionStore::new`] starts with `loading = true` and no identity.
//! 2. [`SessionStore::rehydrate`] runs once, restoring a previously persisted
//!    identity from durable storage. Unreadable data is logged and treated as
//!    "signed out". Loading ends here whatever the outcome.
//! 3. [`SessionStore::authenticate`] resolves an address through the
//!    [`IdentityDirectory`]. Loading is true for the whole lookup; a second
//!    call while loading is rejected with [`AuthError::LoginInFlight`].
//! 4. [`SessionStore::sign_out`] clears memory and durable storage, and
//!    cancels a sign-in that is still in flight ([`AuthError::Cancelled`]).
//!
//! Only `authenticate` and `sign_out` write to storage; `rehydrate` only reads.
//! The secret passed to `authenticate` must be non-empty but is not verified:
//! the directory is looked up by address alone.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use store::{DashboardConfig, Identity, KeyValueStore, Role, StoredIdentity};
use tokio::sync::watch;

use crate::directory::{IdentityDirectory, StaticDirectory};
use crate::error::AuthError;

/// Read-only view of the session state.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub identity: Option<Identity>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            identity: None,
            loading: true,
        }
    }
}

impl Session {
    pub fn signed_out() -> Self {
        Self {
            identity: None,
            loading: false,
        }
    }

    pub fn signed_in(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
            loading: false,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }

    pub fn is_marketer(&self) -> bool {
        self.role() == Some(Role::Marketer)
    }

    pub fn is_user(&self) -> bool {
        self.role() == Some(Role::User)
    }
}

/// Owner of the current identity and its durable copy.
pub struct SessionStore<S, D> {
    storage: S,
    directory: D,
    storage_key: String,
    state: watch::Sender<Session>,
    rehydrated: AtomicBool,
    /// Bumped by every `sign_out`; a sign-in only lands if it is unchanged.
    sign_outs: AtomicU64,
}

impl<S: KeyValueStore> SessionStore<S, StaticDirectory> {
    /// Build a store with the configured storage key and identity set.
    pub fn from_config(storage: S, config: &DashboardConfig) -> Self {
        Self::new(
            storage,
            StaticDirectory::from_config(config),
            config.session.storage_key.clone(),
        )
    }
}

impl<S: KeyValueStore, D: IdentityDirectory> SessionStore<S, D> {
    pub fn new(storage: S, directory: D, storage_key: impl Into<String>) -> Self {
        let (state, _) = watch::channel(Session::default());
        Self {
            storage,
            directory,
            storage_key: storage_key.into(),
            state,
            rehydrated: AtomicBool::new(false),
            sign_outs: AtomicU64::new(0),
        }
    }

    /// Restore a persisted identity. Runs once; later calls return the current identity.
    pub fn rehydrate(&self) -> Option<Identity> {
        if self.rehydrated.swap(true, Ordering::SeqCst) {
            return self.current_identity();
        }

        let restored = match self.storage.get(&self.storage_key) {
            None => None,
            Some(raw) => {
                let decoded = StoredIdentity::decode(&raw);
                if decoded.is_none() {
                    tracing::warn!(key = %self.storage_key, "discarding unreadable stored session");
                }
                decoded
            }
        };

        if let Some(ref identity) = restored {
            tracing::info!(id = %identity.id, role = %identity.role, "restored session");
        }

        self.state.send_modify(|session| {
            session.identity = restored.clone();
            session.loading = false;
        });
        restored
    }

    /// Resolve `address` to a known identity and make it the current one.
    ///
    /// On failure the current identity is left exactly as it was.
    #[tracing::instrument(skip(self, secret))]
    pub async fn authenticate(&self, address: &str, secret: &str) -> Result<Identity, AuthError> {
        if address.trim().is_empty() || secret.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let claimed = self.state.send_if_modified(|session| {
            if session.loading {
                false
            } else {
                session.loading = true;
                true
            }
        });
        if !claimed {
            tracing::debug!("rejecting sign-in while session is loading");
            return Err(AuthError::LoginInFlight);
        }
        let _pending = PendingLogin { state: &self.state };
        let epoch = self.sign_outs.load(Ordering::SeqCst);

        let Some(identity) = self.directory.find_by_address(address).await else {
            tracing::info!("sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        };

        if self.sign_outs.load(Ordering::SeqCst) != epoch {
            tracing::info!("sign-in superseded by sign-out");
            return Err(AuthError::Cancelled);
        }

        self.persist(&identity);
        self.state.send_modify(|session| {
            session.identity = Some(identity.clone());
            session.loading = false;
        });
        tracing::info!(id = %identity.id, role = %identity.role, "signed in");
        Ok(identity)
    }

    /// Forget the current identity, in memory and in storage. Idempotent.
    ///
    /// A sign-in still waiting on the directory is cancelled and will not
    /// install or persist its identity.
    pub fn sign_out(&self) {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        let cleared = self
            .state
            .send_if_modified(|session| session.identity.take().is_some());
        if let Err(e) = self.storage.remove(&self.storage_key) {
            tracing::warn!(key = %self.storage_key, "failed to erase stored session: {e}");
        }
        if cleared {
            tracing::info!("signed out");
        }
    }

    fn persist(&self, identity: &Identity) {
        let encoded = match StoredIdentity::new(identity.clone()).encode() {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!("failed to encode session: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.storage_key, &encoded) {
            tracing::warn!(key = %self.storage_key, "failed to persist session: {e}");
        }
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.state.borrow().identity.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn is_marketer(&self) -> bool {
        self.state.borrow().is_marketer()
    }

    pub fn is_user(&self) -> bool {
        self.state.borrow().is_user()
    }

    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    /// Watch session changes. The receiver starts with the current state marked seen.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }
}

/// Clears the loading flag when a sign-in attempt ends, including when its
/// future is dropped before completing.
struct PendingLogin<'a> {
    state: &'a watch::Sender<Session>,
}

impl Drop for PendingLogin<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|session| {
            let was_loading = session.loading;
            session.loading = false;
            was_loading
        });
    }
}
