//! # Auth crate: session and route protection for the dashboard
//!
//! Everything the views need to know about who is signed in lives here. The
//! crate has no UI dependency, so the whole contract is unit-tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`directory`] | `IdentityDirectory` lookup by address; `StaticDirectory` with simulated latency |
//! | [`session`] | `SessionStore`: rehydrate, authenticate, sign out, role predicates, change notifications |
//! | [`guard`] | `AppRoute` table and the pure `evaluate` navigation decision |
//! | [`nav`] | Sidebar links and portal title per role |
//! | [`error`] | `AuthError` |
//!
//! ## Upward interface
//!
//! - `current_identity()`, `is_loading()`, `is_marketer()`, `is_user()`
//! - `authenticate(address, secret).await -> Result<Identity, AuthError>`
//! - `sign_out()`
//! - `subscribe()` for reactive front-ends

pub mod directory;
pub mod error;
pub mod guard;
pub mod nav;
pub mod session;

pub use directory::{IdentityDirectory, StaticDirectory};
pub use error::AuthError;
pub use guard::{evaluate, evaluate_with, AppRoute, GuardDecision, GuardPolicy};
pub use nav::{links_for, portal_title, NavLink};
pub use session::{Session, SessionStore};

pub use store::{Identity, Role};
