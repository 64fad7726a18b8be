//! This crate contains all shared UI for the workspace.

mod storage;
pub use storage::{make_storage, PlatformStore};

mod provider;
pub use provider::{use_auth, use_session, AppSession, AuthProvider, SessionHandle};

mod login_form;
pub use login_form::{LoginForm, LogoutButton};

mod sidebar;
pub use sidebar::AppSidebar;

pub mod views;

/// Base stylesheet for the dashboard shell.
pub const APP_CSS: &str = r#"
body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif; color: #1f2937; }
.app-layout { display: flex; min-height: 100vh; }
.app-main { flex: 1; padding: 2rem; background: #f9fafb; }
.sidebar { width: 16rem; display: flex; flex-direction: column; gap: 1.5rem; padding: 1.5rem 1rem; border-right: 1px solid #e5e7eb; background: #ffffff; }
.sidebar-title { font-size: 1.25rem; font-weight: 700; color: #1d4ed8; }
.sidebar-links { display: flex; flex-direction: column; gap: 0.25rem; flex: 1; }
.sidebar-link { text-align: left; padding: 0.5rem 0.75rem; border: none; border-radius: 6px; background: none; color: #374151; cursor: pointer; }
.sidebar-link:hover { background: #f3f4f6; }
.sidebar-link.active { background: #dbeafe; color: #1d4ed8; }
.sidebar-user { display: flex; align-items: center; gap: 0.75rem; border-top: 1px solid #e5e7eb; padding-top: 1rem; }
.sidebar-user-avatar { width: 2.5rem; height: 2.5rem; border-radius: 9999px; }
.sidebar-user-name { margin: 0; font-size: 0.875rem; font-weight: 500; }
.sidebar-user-email { margin: 0; font-size: 0.75rem; color: #6b7280; }
.login-container { display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem; }
.login-form { display: flex; flex-direction: column; gap: 0.5rem; width: 100%; max-width: 320px; }
.login-form input { padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 4px; }
.login-error { padding: 0.625rem; background: #fef2f2; border: 1px solid #fecaca; border-radius: 4px; color: #dc2626; font-size: 0.8125rem; }
.login-submit { margin-top: 0.5rem; padding: 0.625rem; border: none; border-radius: 4px; background: #2563eb; color: white; cursor: pointer; }
.login-submit:disabled { opacity: 0.5; cursor: not-allowed; }
.pending-view { display: flex; align-items: center; justify-content: center; min-height: 100vh; color: #6b7280; }
.page-title { margin: 0 0 0.5rem; }
.page-summary, .page-greeting { color: #6b7280; }
"#;
