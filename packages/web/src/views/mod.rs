mod login;
pub use login::Login;

mod guarded_layout;
pub use guarded_layout::GuardedLayout;

mod redirect;
pub use redirect::{NotFound, Root};

mod marketer;
pub use marketer::{MarketerDashboard, MarketerOffers, MarketerSchedule};

mod user;
pub use user::{UserCalendar, UserDashboard, UserOffers, UserProfile, UserTimesheet};
