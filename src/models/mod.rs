pub mod attendance;
pub mod cohort;
pub mod event;
pub mod meeting;
pub mod policy;
pub mod raw;
pub mod window;

pub use attendance::{AttendanceIndex, AttendanceRecord};
pub use cohort::Cohort;
pub use event::Event;
pub use meeting::Meeting;
pub use policy::{ConfirmationPolicy, DeadlineAnchor};
pub use window::Window;
