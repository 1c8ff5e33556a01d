//! Pressure Stall Information collector for Linux.
//!
//! Reads `/proc/pressure/{cpu,memory,io}` through the [`FileSystem`] trait,
//! so tests can run against an in-memory [`MockFs`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │        Collector  (impl Sampler)         │
//! │  - /proc/pressure/cpu    (some)          │
//! │  - /proc/pressure/memory (some + full)   │
//! │  - /proc/pressure/io     (some + full)   │
//! │                 │                        │
//! │          ┌──────▼──────┐                 │
//! │          │  FileSystem │ (trait)         │
//! │          └──────┬──────┘                 │
//! └─────────────────┼────────────────────────┘
//!          ┌────────┴────────┐
//!   ┌──────▼──────┐   ┌──────▼──────┐
//!   │   RealFs    │   │   MockFs    │
//!   │  (Linux)    │   │  (Testing)  │
//!   └─────────────┘   └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use psitop::collector::{Collector, MockFs};
//!
//! let collector = Collector::new(MockFs::typical_system(), "/proc");
//! let sample = collector.collect().unwrap();
//! assert_eq!(sample.cpu.some.avg10, 0.0);
//! ```

#[allow(clippy::module_inception)]
mod collector;
pub mod mock;
pub mod procfs;
pub mod traits;

pub use collector::{Collector, SampleError, Sampler};
pub use mock::MockFs;
pub use procfs::ParseError;
pub use traits::{FileSystem, RealFs};
