//! Presentation-independent calendar logic.

pub mod grid;
pub mod labels;
pub mod models;
pub mod month;
pub mod store;
pub mod time;
pub mod view;

pub use grid::{build_grid, CellDescriptor, DayCell, MonthGrid};
pub use models::{Event, EventId, NotificationState};
pub use month::YearMonth;
pub use store::{ordered_events, EventStore};
pub use time::{parse_start_time, StartTime};
pub use view::CalendarView;
