//! Category colors and per-day indicator resolution

pub mod mapping;
pub mod resolver;

pub use mapping::{color_for, indicator_style, priority_for, IndicatorStyle};
pub use resolver::{indicators_for, CategorySetKey, IndicatorMemo};
