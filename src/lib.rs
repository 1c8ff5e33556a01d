//! psitop - live Linux pressure stall information (PSI) dashboard.
//!
//! The library samples `/proc/pressure/{cpu,memory,io}` on a background
//! thread, keeps a bounded history of samples and renders it as tables and a
//! graph in the terminal. The `psitop` binary wires these together.

pub mod collector;
pub mod models;
pub mod provider;
pub mod storage;
pub mod tui;
pub mod view;
