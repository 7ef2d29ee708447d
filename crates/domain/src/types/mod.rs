//! Domain types and models
//!
//! Raw records come in, normalized items and keys go out. Everything here is
//! plain data; the aggregation rules live in `campuscal-core`.

pub mod category;
pub mod filter;
pub mod indicator;
pub mod item;
pub mod keys;
pub mod records;

pub use category::Category;
pub use filter::CategoryFilter;
pub use indicator::{IndicatorColor, Indicators};
pub use item::{ItemSource, NormalizedItem, PlaceholderGranularity, PlaceholderItem, RangeBounds};
pub use keys::{DayKey, MonthKey};
pub use records::{CalendarEventRecord, EventSchedule, RawCalendarEvent, RawPost};
