// Export components
pub mod calendar;

// Re-export calendar handle
pub use calendar::CalendarHandle;
