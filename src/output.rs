//! Text renderings of a trajectory table for the command-line tool.

use std::fmt::Write;

use crate::trajectory_sampling::TrajectorySample;
use crate::units::{DisplayRow, UnitSystem};

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

struct ColumnLabels {
    distance: &'static str,
    velocity: &'static str,
    energy: &'static str,
    offset: &'static str,
}

fn labels(units: UnitSystem) -> ColumnLabels {
    match units {
        UnitSystem::Metric => ColumnLabels {
            distance: "m",
            velocity: "m/s",
            energy: "J",
            offset: "mm",
        },
        UnitSystem::Imperial => ColumnLabels {
            distance: "yd",
            velocity: "fps",
            energy: "ftlb",
            offset: "in",
        },
    }
}

pub fn render(
    samples: &[TrajectorySample],
    format: OutputFormat,
    units: UnitSystem,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(samples, units)),
        OutputFormat::Json => render_json(samples, units),
        OutputFormat::Csv => Ok(render_csv(samples, units)),
    }
}

/// Metric output is the exact API payload; imperial output is converted.
pub fn render_json(samples: &[TrajectorySample], units: UnitSystem) -> Result<String, serde_json::Error> {
    match units {
        UnitSystem::Metric => serde_json::to_string_pretty(samples),
        UnitSystem::Imperial => {
            let rows: Vec<DisplayRow> = samples
                .iter()
                .map(|s| DisplayRow::from_sample(s, units))
                .collect();
            serde_json::to_string_pretty(&rows)
        }
    }
}

pub fn render_csv(samples: &[TrajectorySample], units: UnitSystem) -> String {
    let l = labels(units);
    let mut out = format!(
        "distance_{},velocity_{},energy_{},drop_{},wind_drift_{},time_s,moa,mil\n",
        l.distance,
        l.velocity.replace('/', "_"),
        l.energy,
        l.offset,
        l.offset
    );
    let decimals = offset_decimals(units);
    for sample in samples {
        let row = DisplayRow::from_sample(sample, units);
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{:.0},{:.0},{:.0},{:.*},{:.*},{:.3},{:.1},{:.1}",
            row.distance,
            row.velocity,
            row.energy,
            decimals,
            row.drop,
            decimals,
            row.wind_drift,
            row.time_of_flight,
            row.moa,
            row.mil
        );
    }
    out
}

pub fn render_table(samples: &[TrajectorySample], units: UnitSystem) -> String {
    let l = labels(units);
    let decimals = offset_decimals(units);
    let mut out = String::new();

    let _ = writeln!(out, "┌────────┬────────┬────────┬─────────┬─────────┬─────────┬───────┬───────┐");
    let _ = writeln!(
        out,
        "│ {:>6} │ {:>6} │ {:>6} │ {:>7} │ {:>7} │ {:>7} │ {:>5} │ {:>5} │",
        format!("({})", l.distance),
        format!("({})", l.velocity),
        format!("({})", l.energy),
        format!("Drop({})", l.offset),
        format!("Wind({})", l.offset),
        "ToF(s)",
        "MOA",
        "MIL"
    );
    let _ = writeln!(out, "├────────┼────────┼────────┼─────────┼─────────┼─────────┼───────┼───────┤");
    for sample in samples {
        let row = DisplayRow::from_sample(sample, units);
        let _ = writeln!(
            out,
            "│ {:>6.0} │ {:>6.0} │ {:>6.0} │ {:>7.*} │ {:>7.*} │ {:>7.3} │ {:>5.1} │ {:>5.1} │",
            row.distance,
            row.velocity,
            row.energy,
            decimals,
            row.drop,
            decimals,
            row.wind_drift,
            row.time_of_flight,
            row.moa,
            row.mil
        );
    }
    let _ = writeln!(out, "└────────┴────────┴────────┴─────────┴─────────┴─────────┴───────┴───────┘");
    out
}

fn offset_decimals(units: UnitSystem) -> usize {
    match units {
        UnitSystem::Metric => 0,
        UnitSystem::Imperial => 1,
    }
}
