//! Collector that reads the three pressure files into one sample.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::debug;

use crate::collector::procfs::{ParseError, parse_cpu_record, parse_resource_record};
use crate::collector::traits::FileSystem;
use crate::storage::model::{AllPressures, Resource, ResourcePressure};

/// Error type for a failed sample.
///
/// Any failure fails the whole sample; no partially populated
/// `AllPressures` is ever produced.
#[derive(Debug)]
pub enum SampleError {
    /// A pressure file could not be read.
    Read { path: PathBuf, source: io::Error },
    /// A pressure file did not match the expected format.
    Parse { path: PathBuf, source: ParseError },
}

impl SampleError {
    /// Path of the file that failed.
    pub fn path(&self) -> &Path {
        match self {
            SampleError::Read { path, .. } | SampleError::Parse { path, .. } => path,
        }
    }
}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            SampleError::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for SampleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SampleError::Read { source, .. } => Some(source),
            SampleError::Parse { source, .. } => Some(source),
        }
    }
}

/// Produces one [`AllPressures`] on demand.
///
/// Implemented by [`Collector`]; tests plug in scripted samplers.
pub trait Sampler: Send {
    fn sample(&mut self) -> Result<AllPressures, SampleError>;
}

/// Reads `<proc_path>/pressure/{cpu,memory,io}`.
pub struct Collector<F: FileSystem> {
    fs: F,
    pressure_dir: PathBuf,
}

impl<F: FileSystem> Collector<F> {
    /// Creates a new collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            pressure_dir: proc_path.as_ref().join("pressure"),
        }
    }

    /// Directory the pressure files are read from.
    pub fn pressure_dir(&self) -> &Path {
        &self.pressure_dir
    }

    /// Whether the kernel exposes PSI at all.
    pub fn is_supported(&self) -> bool {
        self.fs.exists(&self.pressure_dir)
    }

    /// Reads and parses all three resources.
    pub fn collect(&self) -> Result<AllPressures, SampleError> {
        let started = Instant::now();

        let sample = AllPressures {
            timestamp: chrono::Utc::now().timestamp(),
            cpu: self.read_resource(Resource::Cpu)?,
            memory: self.read_resource(Resource::Memory)?,
            io: self.read_resource(Resource::Io)?,
        };

        debug!(
            elapsed_us = started.elapsed().as_micros() as u64,
            cpu_some_avg10 = sample.cpu.some.avg10,
            memory_some_avg10 = sample.memory.some.avg10,
            io_some_avg10 = sample.io.some.avg10,
            "collected pressure sample"
        );
        Ok(sample)
    }

    fn read_resource(&self, resource: Resource) -> Result<ResourcePressure, SampleError> {
        let path = self.pressure_dir.join(resource.file_name());
        let content = match self.fs.read_to_string(&path) {
            Ok(content) => content,
            Err(source) => return Err(SampleError::Read { path, source }),
        };

        let parsed = if resource.has_full() {
            parse_resource_record(&content)
        } else {
            parse_cpu_record(&content)
        };

        match parsed {
            Ok((some, full)) => Ok(ResourcePressure { some, full }),
            Err(source) => Err(SampleError::Parse { path, source }),
        }
    }
}

impl<F: FileSystem> Sampler for Collector<F> {
    fn sample(&mut self) -> Result<AllPressures, SampleError> {
        self.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::{MockFs, pressure_line};
    use crate::storage::model::PressureSnapshot;

    #[test]
    fn test_collect_typical_system() {
        let collector = Collector::new(MockFs::typical_system(), "/proc");
        let sample = collector.collect().unwrap();

        assert_eq!(sample.cpu.some.total, 1234567);
        assert_eq!(sample.cpu.full, PressureSnapshot::default());
        assert_eq!(sample.memory.full.total, 1234);
        assert_eq!(sample.io.some.total, 98765);
        assert!(sample.timestamp > 0);
    }

    #[test]
    fn test_collect_reflects_file_changes_between_calls() {
        let fs = MockFs::typical_system();
        let collector = Collector::new(fs.clone(), "/proc");
        let first = collector.collect().unwrap();

        fs.add_file(
            "/proc/pressure/cpu",
            format!("{}\n", pressure_line("some", 4.0, 2.0, 1.0, 1234999)),
        );
        let second = collector.collect().unwrap();

        assert_eq!(first.cpu.some.total, 1234567);
        assert_eq!(second.cpu.some.avg10, 4.0);
        assert_eq!(second.cpu.some.total, 1234999);
        assert_eq!(second.memory, first.memory);
    }

    #[test]
    fn test_collect_memory_pressure() {
        let collector = Collector::new(MockFs::memory_pressure(), "/proc");
        let sample = collector.collect().unwrap();

        assert_eq!(sample.memory.some.avg10, 35.12);
        assert_eq!(sample.memory.full.avg60, 6.40);
        assert_eq!(sample.io.full.avg300, 12.50);
        assert_eq!(sample.io.some.total, 2_000_000_000);
    }

    #[test]
    fn test_cpu_full_line_may_be_missing() {
        let collector = Collector::new(MockFs::cpu_without_full(), "/proc");
        let sample = collector.collect().unwrap();

        assert_eq!(sample.cpu.some.avg10, 2.50);
        assert_eq!(sample.cpu.full, PressureSnapshot::default());
    }

    #[test]
    fn test_missing_file_fails_whole_sample() {
        let fs = MockFs::typical_system();
        fs.remove_file("/proc/pressure/io");
        let collector = Collector::new(fs, "/proc");

        match collector.collect() {
            Err(SampleError::Read { path, source }) => {
                assert_eq!(path, PathBuf::from("/proc/pressure/io"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_file_reports_path_and_field() {
        let fs = MockFs::typical_system();
        fs.add_file(
            "/proc/pressure/memory",
            format!(
                "{}\nfull avg10=0.00 avg60=0.00 avg300=0.00\n",
                pressure_line("some", 0.0, 0.0, 0.0, 1)
            ),
        );
        let collector = Collector::new(fs, "/proc");

        let err = collector.collect().unwrap_err();
        assert_eq!(err.path(), Path::new("/proc/pressure/memory"));
        match err {
            SampleError::Parse { source, .. } => assert_eq!(
                source,
                ParseError::MissingField {
                    line: 1,
                    field: "total"
                }
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_custom_proc_path() {
        let fs = MockFs::new();
        fs.add_file(
            "/host/proc/pressure/cpu",
            format!("{}\n", pressure_line("some", 1.0, 1.0, 1.0, 1)),
        );
        for name in ["memory", "io"] {
            fs.add_file(
                format!("/host/proc/pressure/{}", name),
                format!(
                    "{}\n{}\n",
                    pressure_line("some", 0.0, 0.0, 0.0, 0),
                    pressure_line("full", 0.0, 0.0, 0.0, 0)
                ),
            );
        }

        let mut collector = Collector::new(fs, "/host/proc");
        assert!(collector.is_supported());
        assert_eq!(collector.sample().unwrap().cpu.some.avg10, 1.0);
    }

    #[test]
    fn test_is_supported_without_psi() {
        let collector = Collector::new(MockFs::without_psi(), "/proc");
        assert!(!collector.is_supported());
    }

    #[test]
    fn test_real_fs_reads_pressure_dir() {
        use crate::collector::traits::RealFs;

        let dir = tempfile::tempdir().unwrap();
        let pressure = dir.path().join("pressure");
        std::fs::create_dir(&pressure).unwrap();
        std::fs::write(
            pressure.join("cpu"),
            format!("{}\n", pressure_line("some", 3.0, 2.0, 1.0, 77)),
        )
        .unwrap();
        for name in ["memory", "io"] {
            std::fs::write(
                pressure.join(name),
                format!(
                    "{}\n{}\n",
                    pressure_line("some", 0.5, 0.0, 0.0, 5),
                    pressure_line("full", 0.25, 0.0, 0.0, 2)
                ),
            )
            .unwrap();
        }

        let collector = Collector::new(RealFs::new(), dir.path());
        let sample = collector.collect().unwrap();
        assert_eq!(sample.cpu.some.total, 77);
        assert_eq!(sample.io.full.avg10, 0.25);
    }

    #[test]
    fn test_sample_error_display_and_source() {
        use std::error::Error;

        let err = SampleError::Read {
            path: PathBuf::from("/proc/pressure/cpu"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("/proc/pressure/cpu"));
        assert!(err.source().is_some());
    }
}
