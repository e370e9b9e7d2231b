//! Console report over the computed statistics.
//!
//! Each grouping is dumped in ascending key order, followed by the streak
//! summary and the chart datasets rendered as plain tables.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::analysis::aggregate::UsageStats;
use crate::analysis::streak::StreakReport;

pub mod charts;

use self::charts::{monthly_line_series, pie_slices, stacked_half_year, CALENDAR_YEARS};

fn write_section<W: Write>(
    writer: &mut W,
    title: &str,
    counts: &BTreeMap<String, usize>,
) -> io::Result<()> {
    writeln!(writer, "------ {title} ------")?;
    let line: Vec<String> = counts.iter().map(|(k, v)| format!("{k:?}: {v}")).collect();
    writeln!(writer, "{}", line.join(", "))
}

/// Write the full report to the given writer.
pub fn write_report<W: Write>(
    writer: &mut W,
    stats: &UsageStats,
    streaks: &StreakReport,
    min_streak: u32,
) -> io::Result<()> {
    writeln!(writer, "Total check-ins: {}", stats.total)?;

    write_section(writer, "Seats", &stats.by_seat)?;
    write_section(writer, "Areas", &stats.by_block)?;
    write_section(writer, "Libraries", &stats.by_library)?;
    write_section(writer, "Months", &stats.by_month)?;
    write_section(writer, "Hours", &stats.by_hour)?;
    write_section(writer, "Check-in days per month", &stats.check_in_days_by_month)?;

    writeln!(writer, "------ Longest streak ------")?;
    match streaks.longest_end {
        Some(end) => writeln!(
            writer,
            "{} consecutive days, ending {end}",
            streaks.longest_len
        )?,
        None => writeln!(writer, "no check-ins recorded")?,
    }
    if streaks.qualifying.is_empty() {
        writeln!(writer, "no streaks of {min_streak}+ days")?;
    } else {
        for streak in &streaks.qualifying {
            writeln!(writer, "{} days ending {}", streak.len, streak.end)?;
        }
    }

    writeln!(writer, "------ Area shares ------")?;
    let total = stats.total.max(1);
    for slice in pie_slices(&stats.by_block) {
        writeln!(
            writer,
            "{}: {} ({:.1}%)",
            slice.label,
            slice.value,
            slice.value as f64 * 100.0 / total as f64
        )?;
    }

    writeln!(writer, "------ Check-in days by month ({}..{}) ------",
        CALENDAR_YEARS.start(), CALENDAR_YEARS.end())?;
    for (month, days) in monthly_line_series(&stats.check_in_days_by_month, CALENDAR_YEARS) {
        writeln!(writer, "{month}: {days}")?;
    }

    let matrix = stacked_half_year(&stats.half_year_by_library);
    writeln!(writer, "------ Library distribution by half-year ------")?;
    writeln!(writer, "{}", matrix.libraries.join(" | "))?;
    for (bucket, row) in matrix.buckets.iter().zip(&matrix.values) {
        let cells: Vec<String> = row.iter().map(usize::to_string).collect();
        writeln!(writer, "{bucket}: {}", cells.join(" | "))?;
    }

    Ok(())
}

/// Write the full report to standard output.
pub fn print_report(
    stats: &UsageStats,
    streaks: &StreakReport,
    min_streak: u32,
) -> io::Result<()> {
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), stats, streaks, min_streak)
}
