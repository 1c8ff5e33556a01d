//! Data model shared by the collector, the history and the views.

mod pressure;

pub use pressure::{AllPressures, PressureSnapshot, Resource, ResourcePressure, resource_series};
