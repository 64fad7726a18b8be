//! Session context and hooks for the UI.

use std::rc::Rc;

use auth::{GuardPolicy, Session, SessionStore, StaticDirectory};
use dioxus::prelude::*;
use store::DashboardConfig;

use crate::storage::{make_storage, PlatformStore};

/// The concrete session store every platform runs.
pub type AppSession = SessionStore<PlatformStore, StaticDirectory>;

/// Shared handle to the session store plus the configured guard policy.
#[derive(Clone)]
pub struct SessionHandle {
    store: Rc<AppSession>,
    policy: GuardPolicy,
}

impl SessionHandle {
    pub fn store(&self) -> &AppSession {
        &self.store
    }

    pub fn policy(&self) -> GuardPolicy {
        self.policy
    }
}

/// Get the current session state.
/// Returns a signal that updates when the identity or loading flag changes.
pub fn use_auth() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Get the session store, for signing in and out.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Provider component that owns the session for the lifetime of the app.
/// Wrap your router with this component.
#[component]
pub fn AuthProvider(#[props(default)] config: DashboardConfig, children: Element) -> Element {
    let handle = use_hook(|| {
        let store = Rc::new(AppSession::from_config(make_storage(), &config));
        store.rehydrate();
        SessionHandle {
            store,
            policy: GuardPolicy::from(&config.guard),
        }
    });

    let mut auth_state = use_signal(|| handle.store().snapshot());

    // Mirror store changes into the signal
    use_hook(|| {
        let mut changes = handle.store().subscribe();
        spawn(async move {
            while changes.changed().await.is_ok() {
                let session = changes.borrow_and_update().clone();
                auth_state.set(session);
            }
        })
    });

    use_context_provider(|| handle.clone());
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}
