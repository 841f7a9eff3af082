use anyhow::Result;
use fuel_protocol::{AnalyticsCharts, AnalyticsSummary};
use fuel_session::SessionManager;
use serde::Serialize;

use crate::app::{finish, require_session};
use crate::output::{format_minutes, format_number, print_json};

#[derive(Serialize)]
struct AnalyticsOutput {
    days: u32,
    summary: Option<AnalyticsSummary>,
    charts: Option<AnalyticsCharts>,
}

pub async fn execute(manager: &SessionManager, json: bool) -> Result<()> {
    require_session(manager)?;
    let loaded = manager.load_analytics().await;
    finish(manager, loaded)?;

    let state = manager.snapshot();
    let days = manager.settings().analytics_days;
    if json {
        return print_json(&AnalyticsOutput {
            days,
            summary: state.analytics_summary,
            charts: state.analytics_charts,
        });
    }

    println!("\nLast {} days\n", days);
    if let Some(summary) = &state.analytics_summary {
        for line in summary_lines(summary) {
            println!("{}", line);
        }
    }
    if let Some(charts) = &state.analytics_charts {
        if !charts.labels.is_empty() {
            println!("\n{:12} {:>9} {:>9} {:>8} {:>8}", "day", "time", "carbs", "avg hr", "km");
            for row in chart_rows(charts) {
                println!("{}", row);
            }
        }
    }
    println!();
    Ok(())
}

fn summary_lines(summary: &AnalyticsSummary) -> Vec<String> {
    if summary.sessions == 0 {
        return vec!["No completed workouts in this window".to_string()];
    }
    vec![
        format!("Sessions: {}", summary.sessions),
        format!("Average duration: {}", format_minutes(summary.avg_duration_minutes)),
        format!("Average heart rate: {} bpm", format_number(summary.avg_heart_rate_bpm)),
        format!("Average power: {} W", format_number(summary.avg_power_watts)),
        format!("Average RPE: {}", format_number(summary.avg_rpe)),
        format!("Total distance: {} km", format_number(summary.total_distance_km)),
        format!("Total carbs: {} g", format_number(summary.total_carbs_g)),
    ]
}

/// One row per label. Series shorter than `labels` leave their cells empty.
fn chart_rows(charts: &AnalyticsCharts) -> Vec<String> {
    let cell = |series: &[f64], index: usize| {
        series
            .get(index)
            .map(|value| format_number(*value))
            .unwrap_or_default()
    };

    charts
        .labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let minutes = charts
                .total_minutes
                .get(index)
                .map(|value| format_minutes(*value))
                .unwrap_or_default();
            format!(
                "{:12} {:>9} {:>9} {:>8} {:>8}",
                label,
                minutes,
                cell(&charts.carbs_g, index),
                cell(&charts.avg_hr, index),
                cell(&charts.distance_km, index)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_window_has_a_single_line() {
        let lines = summary_lines(&AnalyticsSummary::default());

        assert_eq!(lines, vec!["No completed workouts in this window".to_string()]);
    }

    #[test]
    fn summary_lines_format_units() {
        let summary = AnalyticsSummary {
            sessions: 4,
            avg_duration_minutes: 75.0,
            total_carbs_g: 310.0,
            ..AnalyticsSummary::default()
        };

        let lines = summary_lines(&summary);

        assert_eq!(lines[1], "Average duration: 1h 15min");
        assert_eq!(lines[6], "Total carbs: 310 g");
    }

    #[test]
    fn chart_rows_tolerate_short_series() {
        let charts = AnalyticsCharts {
            labels: vec!["2026-03-01".to_string(), "2026-03-02".to_string()],
            total_minutes: vec![60.0, 95.0],
            carbs_g: vec![40.0],
            ..AnalyticsCharts::default()
        };

        let rows = chart_rows(&charts);

        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("2026-03-01"));
        assert!(rows[1].contains("1h 35min"));
        assert!(!rows[1].contains("40"));
    }
}
