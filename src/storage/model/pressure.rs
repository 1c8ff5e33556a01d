//! Pressure Stall Information samples.
//!
//! One [`AllPressures`] is a single instant-in-time reading of
//! `/proc/pressure/{cpu,memory,io}`. Samples are immutable once built:
//! the history only ever appends and evicts them.

/// One "some" or "full" line of a pressure file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PressureSnapshot {
    /// Share of wall time stalled, averaged over the last 10 seconds.
    pub avg10: f64,
    /// Share of wall time stalled, averaged over the last 60 seconds.
    pub avg60: f64,
    /// Share of wall time stalled, averaged over the last 300 seconds.
    pub avg300: f64,
    /// Monotonic stall counter in microseconds.
    pub total: i64,
}

/// "some" and "full" pressure for one resource.
///
/// For CPU `full` is all-zero: the kernel does not report it meaningfully.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResourcePressure {
    pub some: PressureSnapshot,
    pub full: PressureSnapshot,
}

/// Pressure kinds exposed under `/proc/pressure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Cpu,
    Memory,
    Io,
}

impl Resource {
    pub fn all() -> &'static [Resource] {
        &[Resource::Cpu, Resource::Memory, Resource::Io]
    }

    /// File name under `/proc/pressure`.
    pub fn file_name(&self) -> &'static str {
        match self {
            Resource::Cpu => "cpu",
            Resource::Memory => "memory",
            Resource::Io => "io",
        }
    }

    /// Title used for tables.
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Cpu => "CPU",
            Resource::Memory => "Memory",
            Resource::Io => "IO",
        }
    }

    /// Whether the kernel reports a meaningful "full" line.
    pub fn has_full(&self) -> bool {
        !matches!(self, Resource::Cpu)
    }
}

/// One multi-resource sample.
///
/// Built atomically by the collector: if any of the three files cannot be
/// read or parsed, no `AllPressures` is produced at all.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AllPressures {
    /// Capture time, unix seconds.
    pub timestamp: i64,
    pub cpu: ResourcePressure,
    pub memory: ResourcePressure,
    pub io: ResourcePressure,
}

impl AllPressures {
    /// Returns the pressure of a single resource.
    pub fn resource(&self, resource: Resource) -> &ResourcePressure {
        match resource {
            Resource::Cpu => &self.cpu,
            Resource::Memory => &self.memory,
            Resource::Io => &self.io,
        }
    }
}

/// Projects a history tail onto one resource, keeping sample order.
pub fn resource_series(samples: &[AllPressures], resource: Resource) -> Vec<ResourcePressure> {
    samples.iter().map(|s| *s.resource(resource)).collect()
}
