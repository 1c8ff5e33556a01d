//! Pressure comparison table.

use crate::models::PressureMode;
use crate::storage::model::{PressureSnapshot, Resource, ResourcePressure};

use super::common::{CpuThresholds, ViewCell, format_cell};

/// Column headers; the first column holds the row label.
pub const TABLE_HEADERS: [&str; 4] = ["", "avg10", "avg60", "avg300"];

/// One "some" or "full" row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub label: &'static str,
    /// avg10, avg60, avg300.
    pub cells: [ViewCell; 3],
}

/// Complete table ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub resource: Resource,
    pub title: &'static str,
    pub headers: [&'static str; 4],
    pub rows: Vec<TableRow>,
}

/// Builds the table for one resource from its series, oldest first.
///
/// The newest sample is compared against the one before it, but only once
/// the series holds at least three samples; with fewer, an all-zero
/// snapshot stands in for the previous value.
///
/// Returns `None` for an empty series.
pub fn render_table(
    resource: Resource,
    series: &[ResourcePressure],
    mode: PressureMode,
    thresholds: CpuThresholds,
) -> Option<TableSpec> {
    let current = series.last()?;
    let previous = if series.len() >= 3 {
        series[series.len() - 2]
    } else {
        ResourcePressure::default()
    };

    let mut rows = Vec::with_capacity(2);
    if mode.includes_some() {
        rows.push(pressure_row(
            "some",
            &current.some,
            &previous.some,
            thresholds,
        ));
    }
    if mode.includes_full() {
        rows.push(pressure_row(
            "full",
            &current.full,
            &previous.full,
            thresholds,
        ));
    }

    Some(TableSpec {
        resource,
        title: resource.label(),
        headers: TABLE_HEADERS,
        rows,
    })
}

fn pressure_row(
    label: &'static str,
    current: &PressureSnapshot,
    previous: &PressureSnapshot,
    thresholds: CpuThresholds,
) -> TableRow {
    TableRow {
        label,
        cells: [
            format_cell(current.avg10, previous.avg10, thresholds),
            format_cell(current.avg60, previous.avg60, thresholds),
            format_cell(current.avg300, previous.avg300, thresholds),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::common::PressureLevel;

    fn pressure(some_avg10: f64, full_avg10: f64) -> ResourcePressure {
        ResourcePressure {
            some: PressureSnapshot {
                avg10: some_avg10,
                ..PressureSnapshot::default()
            },
            full: PressureSnapshot {
                avg10: full_avg10,
                ..PressureSnapshot::default()
            },
        }
    }

    #[test]
    fn test_empty_series_has_no_table() {
        assert!(render_table(Resource::Io, &[], PressureMode::Both, CpuThresholds::new(4)).is_none());
    }

    #[test]
    fn test_rows_follow_mode() {
        let series = [pressure(1.0, 0.5)];
        let thresholds = CpuThresholds::new(4);

        let labels = |mode| -> Vec<&'static str> {
            render_table(Resource::Memory, &series, mode, thresholds)
                .unwrap()
                .rows
                .iter()
                .map(|r| r.label)
                .collect()
        };
        assert_eq!(labels(PressureMode::Some), vec!["some"]);
        assert_eq!(labels(PressureMode::Full), vec!["full"]);
        assert_eq!(labels(PressureMode::Both), vec!["some", "full"]);
    }

    #[test]
    fn test_header_and_title() {
        let table = render_table(
            Resource::Memory,
            &[pressure(0.0, 0.0)],
            PressureMode::Some,
            CpuThresholds::new(1),
        )
        .unwrap();
        assert_eq!(table.title, "Memory");
        assert_eq!(table.headers, ["", "avg10", "avg60", "avg300"]);
    }

    #[test]
    fn test_delta_highlighting() {
        let thresholds = CpuThresholds::new(4);

        let same = [pressure(1.0, 0.0), pressure(5.0, 0.0), pressure(5.0, 0.0)];
        let table = render_table(Resource::Io, &same, PressureMode::Some, thresholds).unwrap();
        assert!(!table.rows[0].cells[0].emphasized);

        let changed = [pressure(1.0, 0.0), pressure(3.0, 0.0), pressure(5.0, 0.0)];
        let table = render_table(Resource::Io, &changed, PressureMode::Some, thresholds).unwrap();
        assert!(table.rows[0].cells[0].emphasized);
        assert_eq!(table.rows[0].cells[0].level, PressureLevel::Elevated);
    }

    #[test]
    fn test_two_samples_compare_against_zero() {
        // With only two samples the previous value is treated as absent,
        // so an unchanged non-zero value is still highlighted.
        let series = [pressure(2.0, 0.0), pressure(2.0, 0.0)];
        let table = render_table(
            Resource::Memory,
            &series,
            PressureMode::Some,
            CpuThresholds::new(4),
        )
        .unwrap();
        assert!(table.rows[0].cells[0].emphasized);

        // Zero against the synthetic zero is not.
        assert!(!table.rows[0].cells[1].emphasized);
    }

    #[test]
    fn test_single_sample_zero_values_not_emphasized() {
        let table = render_table(
            Resource::Io,
            &[pressure(0.0, 0.0)],
            PressureMode::Both,
            CpuThresholds::new(2),
        )
        .unwrap();
        for row in &table.rows {
            for cell in &row.cells {
                assert!(!cell.emphasized);
                assert_eq!(cell.level, PressureLevel::Idle);
                assert_eq!(cell.text, "0.00");
            }
        }
    }

    #[test]
    fn test_cpu_zero_full_row_renders() {
        let table = render_table(
            Resource::Cpu,
            &[pressure(1.5, 0.0), pressure(1.5, 0.0), pressure(1.5, 0.0)],
            PressureMode::Both,
            CpuThresholds::new(4),
        )
        .unwrap();
        assert_eq!(table.rows[1].label, "full");
        assert_eq!(table.rows[1].cells[0].text, "0.00");
    }
}
