mod actor;
mod handle;
pub mod notifications;
pub mod scheduler;

pub use actor::Navigation;
pub use handle::{CalendarHandle, ALL_DAY};
pub use notifications::{ChannelSink, DueEvent, LogSink, Notification, NotificationSink};
pub use scheduler::{run_tick, ReminderScheduler};
