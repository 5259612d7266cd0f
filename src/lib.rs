//! Printable one-page wall calendars.
//!
//! A year is laid out as a table of week rows by weekday columns, every day
//! shaded with its month's color and public holidays in a distinct text color.
//! The table is written as a Word document.

pub mod calendar;
pub mod config;
pub mod error;
pub mod generate;
pub mod grid;
pub mod locale;
pub mod palette;
pub mod render;

pub use calendar::{HolidayCalendar, HolidaySource, NoHolidays};
pub use error::CalendarError;
pub use grid::{build_grid, GridStyle, GridSummary};
pub use locale::NorwayCalendar;
