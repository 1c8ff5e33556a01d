//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc/pressure` states.

use super::filesystem::MockFs;

/// Formats one pressure line the way the kernel does.
pub fn pressure_line(tag: &str, avg10: f64, avg60: f64, avg300: f64, total: i64) -> String {
    format!(
        "{} avg10={:.2} avg60={:.2} avg300={:.2} total={}",
        tag, avg10, avg60, avg300, total
    )
}

impl MockFs {
    /// Creates an idle system: every average is zero.
    pub fn typical_system() -> Self {
        let fs = Self::new();
        fs.add_file(
            "/proc/pressure/cpu",
            "\
some avg10=0.00 avg60=0.00 avg300=0.00 total=1234567
full avg10=0.00 avg60=0.00 avg300=0.00 total=0
",
        );
        fs.add_file(
            "/proc/pressure/memory",
            "\
some avg10=0.00 avg60=0.00 avg300=0.00 total=4567
full avg10=0.00 avg60=0.00 avg300=0.00 total=1234
",
        );
        fs.add_file(
            "/proc/pressure/io",
            "\
some avg10=0.00 avg60=0.00 avg300=0.00 total=98765
full avg10=0.00 avg60=0.00 avg300=0.00 total=54321
",
        );
        fs
    }

    /// Creates a system under memory pressure and heavy I/O stalls.
    pub fn memory_pressure() -> Self {
        let fs = Self::typical_system();
        fs.add_file(
            "/proc/pressure/memory",
            format!(
                "{}\n{}\n",
                pressure_line("some", 35.12, 20.50, 8.75, 987_654_321),
                pressure_line("full", 12.30, 6.40, 2.10, 123_456_789),
            ),
        );
        fs.add_file(
            "/proc/pressure/io",
            format!(
                "{}\n{}\n",
                pressure_line("some", 48.00, 30.25, 15.00, 2_000_000_000),
                pressure_line("full", 40.10, 25.00, 12.50, 1_500_000_000),
            ),
        );
        fs
    }

    /// Creates a kernel that omits the "full" line from `/proc/pressure/cpu`.
    pub fn cpu_without_full() -> Self {
        let fs = Self::typical_system();
        fs.add_file(
            "/proc/pressure/cpu",
            format!("{}\n", pressure_line("some", 2.50, 1.25, 0.60, 5_000_000)),
        );
        fs
    }

    /// Creates a kernel without PSI support (no `/proc/pressure`).
    pub fn without_psi() -> Self {
        let fs = Self::new();
        fs.add_file("/proc/loadavg", "0.15 0.10 0.05 1/150 1234\n");
        fs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::traits::FileSystem;
    use std::path::Path;

    #[test]
    fn test_typical_system_has_all_pressure_files() {
        let fs = MockFs::typical_system();
        for name in ["cpu", "memory", "io"] {
            assert!(fs.exists(&Path::new("/proc/pressure").join(name)));
        }
    }

    #[test]
    fn test_without_psi_has_no_pressure_dir() {
        let fs = MockFs::without_psi();
        assert!(!fs.exists(Path::new("/proc/pressure")));
    }

    #[test]
    fn test_pressure_line_format() {
        assert_eq!(
            pressure_line("some", 1.5, 0.0, 12.346, 42),
            "some avg10=1.50 avg60=0.00 avg300=12.35 total=42"
        );
    }
}
