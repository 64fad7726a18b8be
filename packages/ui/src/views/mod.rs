mod pending;
pub use pending::PendingView;

mod page;
pub use page::PageView;

mod sidebar_layout;
pub use sidebar_layout::SidebarLayoutView;
