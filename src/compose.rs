//! The report composer.
//!
//! Turns a [`ReportRequest`] into an ordered sequence of paragraphs, tables,
//! spacers and page breaks, and renders the result as a paginated PDF.  Each
//! section is built independently and tolerates missing data; an empty `{}`
//! payload still produces a complete document where every section shows its
//! placeholder.

use std::path::{Path, PathBuf};

use chrono::Local;
use genpdf::elements::{Break, PageBreak, Paragraph};
use genpdf::error::Error;
use genpdf::{Alignment, Document, Element};
use log::debug;

use crate::builder::DocumentBuilder;
use crate::elements::{data_table, key_value_table};
use crate::model::{Decision, Incident, Performance, ReportRequest, Unit};
use crate::styles::StyleSheet;

const DOCUMENT_TITLE: &str = "Post-Mission Analysis Report";
const REPORT_TITLE: &str = "DIRECTORATE GENERAL OF CIVIL PROTECTION ALGERIA";
const REPORT_SUBTITLE: &str = "POST-MISSION ANALYSIS REPORT";

const NO_INCIDENTS: &str = "No incidents recorded during this period.";
const NO_UNITS: &str = "No unit data available for this period.";
const NO_DECISIONS: &str = "No decisions recorded during this period.";
const NO_PERFORMANCE: &str = "No performance metrics available.";

const TITLE_MAX_CHARS: usize = 50;
const ADDRESS_MAX_CHARS: usize = 30;
const DATE_MAX_CHARS: usize = 10;
const TIME_MAX_CHARS: usize = 16;
const ACTION_MAX_CHARS: usize = 50;
const REASON_MAX_CHARS: usize = 50;

/// Only the first 20 decisions are rendered.
const DECISION_LIMIT: usize = 20;

const INCIDENT_HEADERS: &[&str] = &[
    "Incident ID",
    "Title",
    "Severity",
    "Status",
    "Location",
    "Date",
];
const DECISION_HEADERS: &[&str] = &["Time", "Action", "Reason"];

/// Composes the report described by `request` and writes it to
/// `destination`, returning the destination path on success.
///
/// Fails when no font family can be resolved, when the document cannot be
/// laid out, or when the destination cannot be written.
pub fn compose(request: &ReportRequest, destination: impl AsRef<Path>) -> Result<PathBuf, Error> {
    let destination = destination.as_ref().to_path_buf();
    let sheet = StyleSheet::default();

    debug!(
        "composing report with {} incidents, {} units, {} decisions",
        request.incidents().len(),
        request.units().len(),
        request.decisions().len()
    );

    let mut document = DocumentBuilder::new().with_title(DOCUMENT_TITLE).build()?;

    push_header(&mut document, &sheet, request)?;
    push_summary(&mut document, &sheet, request);
    push_incidents(&mut document, &sheet, request.incidents())?;
    push_units(&mut document, &sheet, request.units())?;
    push_decisions(&mut document, &sheet, request.decisions())?;
    push_performance(&mut document, &sheet, request.performance())?;
    push_footer(&mut document, &sheet, request);

    debug!("rendering report to {}", destination.display());
    document.render_to_file(&destination)?;
    Ok(destination)
}

fn push_header(
    document: &mut Document,
    sheet: &StyleSheet,
    request: &ReportRequest,
) -> Result<(), Error> {
    document.push(
        Paragraph::new(REPORT_TITLE)
            .aligned(Alignment::Center)
            .styled(sheet.title.clone()),
    );
    document.push(Break::new(0.5));
    document.push(Paragraph::new(REPORT_SUBTITLE).styled(sheet.section.clone()));
    document.push(Break::new(0.75));

    let table = key_value_table(sheet, vec![2, 5], metadata_rows(request))?;
    document.push(table);
    document.push(Break::new(1.0));
    Ok(())
}

fn push_summary(document: &mut Document, sheet: &StyleSheet, request: &ReportRequest) {
    push_heading(document, sheet, "EXECUTIVE SUMMARY");
    push_paragraphs(document, sheet, request.summary());
    document.push(Break::new(0.75));
}

fn push_incidents(
    document: &mut Document,
    sheet: &StyleSheet,
    incidents: &[Incident],
) -> Result<(), Error> {
    push_heading(document, sheet, "INCIDENTS OVERVIEW");

    if incidents.is_empty() {
        document.push(Paragraph::new(NO_INCIDENTS).styled(sheet.body.clone()));
    } else {
        let stats = IncidentStats::collect(incidents);
        document.push(key_value_table(sheet, vec![1, 1], stats.rows())?);
        document.push(Break::new(0.75));
        document.push(data_table(
            sheet,
            vec![5, 6, 3, 3, 6, 5],
            INCIDENT_HEADERS,
            incident_rows(incidents),
        )?);
    }
    document.push(Break::new(1.0));
    Ok(())
}

fn push_units(document: &mut Document, sheet: &StyleSheet, units: &[Unit]) -> Result<(), Error> {
    push_heading(document, sheet, "UNIT OPERATIONS");

    if units.is_empty() {
        document.push(Paragraph::new(NO_UNITS).styled(sheet.body.clone()));
    } else {
        let stats = UnitStats::collect(units);
        document.push(key_value_table(sheet, vec![1, 1], stats.rows())?);
    }
    document.push(Break::new(1.0));
    Ok(())
}

fn push_decisions(
    document: &mut Document,
    sheet: &StyleSheet,
    decisions: &[Decision],
) -> Result<(), Error> {
    push_heading(document, sheet, "DECISION TIMELINE");

    if decisions.is_empty() {
        document.push(Paragraph::new(NO_DECISIONS).styled(sheet.body.clone()));
    } else {
        document.push(data_table(
            sheet,
            vec![4, 4, 5],
            DECISION_HEADERS,
            decision_rows(decisions),
        )?);
    }
    document.push(Break::new(1.0));
    Ok(())
}

fn push_performance(
    document: &mut Document,
    sheet: &StyleSheet,
    performance: Option<&Performance>,
) -> Result<(), Error> {
    push_heading(document, sheet, "PERFORMANCE ANALYSIS");

    // A `performance` object without any metric or recommendation counts as
    // absent and falls through to the placeholder.
    match performance {
        Some(metrics) if !metrics.is_empty() => {
            document.push(key_value_table(sheet, vec![1, 1], performance_rows(metrics))?);
            if !metrics.recommendations().is_empty() {
                document.push(Break::new(0.75));
                document.push(Paragraph::new("Recommendations").styled(sheet.subheader.clone()));
                for recommendation in metrics.recommendations() {
                    document.push(
                        Paragraph::new(format!("\u{2022} {}", recommendation))
                            .styled(sheet.body.clone()),
                    );
                }
            }
        }
        _ => document.push(Paragraph::new(NO_PERFORMANCE).styled(sheet.body.clone())),
    }
    document.push(Break::new(1.0));
    Ok(())
}

fn push_footer(document: &mut Document, sheet: &StyleSheet, request: &ReportRequest) {
    document.push(PageBreak::new());
    push_paragraphs(document, sheet, request.footer());
}

fn push_heading(document: &mut Document, sheet: &StyleSheet, text: &str) {
    document.push(Paragraph::new(text).styled(sheet.section.clone()));
    document.push(Break::new(0.5));
}

fn push_paragraphs(document: &mut Document, sheet: &StyleSheet, text: &str) {
    for line in text.split('\n') {
        document.push(Paragraph::new(line).styled(sheet.body.clone()));
    }
}

fn metadata_rows(request: &ReportRequest) -> Vec<(String, String)> {
    vec![
        ("Report ID:".to_owned(), request.report_id()),
        (
            "Generated:".to_owned(),
            Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        ),
        (
            "Operation Code:".to_owned(),
            request.operation_code().to_owned(),
        ),
        ("Report Period:".to_owned(), request.period()),
        ("Center:".to_owned(), request.center().to_owned()),
        ("Prepared By:".to_owned(), request.prepared_by().to_owned()),
    ]
}

fn performance_rows(metrics: &Performance) -> Vec<(String, String)> {
    vec![
        (
            "Average Response Time:".to_owned(),
            metrics.avg_response_time(),
        ),
        ("Total Units Deployed:".to_owned(), metrics.units_deployed()),
        (
            "Incidents Resolved:".to_owned(),
            metrics.incidents_resolved(),
        ),
        (
            "Critical Escalations:".to_owned(),
            metrics.critical_escalations(),
        ),
        (
            "Resource Utilization:".to_owned(),
            metrics.resource_utilization(),
        ),
        (
            "Communication Sessions:".to_owned(),
            metrics.communication_sessions(),
        ),
    ]
}

/// Aggregated incident counts for the overview section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IncidentStats {
    total: usize,
    critical: usize,
    resolved: usize,
}

impl IncidentStats {
    pub(crate) fn collect(incidents: &[Incident]) -> Self {
        Self {
            total: incidents.len(),
            critical: incidents.iter().filter(|i| i.is_critical()).count(),
            resolved: incidents.iter().filter(|i| i.is_resolved()).count(),
        }
    }

    /// Resolved incidents as a percentage of the total, to one decimal
    /// place.  The literal `0%` is reported for an empty list.
    pub(crate) fn resolution_rate(&self) -> String {
        if self.total == 0 {
            "0%".to_owned()
        } else {
            format!(
                "{:.1}%",
                self.resolved as f64 / self.total as f64 * 100.0
            )
        }
    }

    fn rows(&self) -> Vec<(String, String)> {
        vec![
            ("Total Incidents:".to_owned(), self.total.to_string()),
            ("Critical/Extreme:".to_owned(), self.critical.to_string()),
            ("Resolved:".to_owned(), self.resolved.to_string()),
            ("Response Rate:".to_owned(), self.resolution_rate()),
        ]
    }
}

/// Unit counts by operational status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct UnitStats {
    total: usize,
    on_duty: usize,
    engaged: usize,
    maintenance: usize,
}

impl UnitStats {
    pub(crate) fn collect(units: &[Unit]) -> Self {
        Self {
            total: units.len(),
            on_duty: units.iter().filter(|u| u.has_status("ON_DUTY")).count(),
            engaged: units.iter().filter(|u| u.has_status("ENGAGED")).count(),
            maintenance: units
                .iter()
                .filter(|u| u.has_status("MAINTENANCE"))
                .count(),
        }
    }

    fn rows(&self) -> Vec<(String, String)> {
        vec![
            ("Total Units:".to_owned(), self.total.to_string()),
            ("On Duty:".to_owned(), self.on_duty.to_string()),
            ("Engaged:".to_owned(), self.engaged.to_string()),
            ("In Maintenance:".to_owned(), self.maintenance.to_string()),
        ]
    }
}

/// Clips `value` to at most `max_chars` characters.
///
/// Deliberately a plain prefix slice: date and time columns rely on the ISO
/// `YYYY-MM-DD` ordering of their inputs, and any other format is clipped
/// the same deterministic way.
pub(crate) fn clip(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((index, _)) => &value[..index],
        None => value,
    }
}

pub(crate) fn incident_rows(incidents: &[Incident]) -> Vec<Vec<String>> {
    incidents
        .iter()
        .map(|incident| {
            vec![
                incident.incident_id().to_owned(),
                clip(incident.title(), TITLE_MAX_CHARS).to_owned(),
                incident.severity().to_owned(),
                incident.status().to_owned(),
                clip(incident.address(), ADDRESS_MAX_CHARS).to_owned(),
                clip(incident.created_at(), DATE_MAX_CHARS).to_owned(),
            ]
        })
        .collect()
}

pub(crate) fn decision_rows(decisions: &[Decision]) -> Vec<Vec<String>> {
    decisions
        .iter()
        .take(DECISION_LIMIT)
        .map(|decision| {
            vec![
                clip(decision.created_at(), TIME_MAX_CHARS).to_owned(),
                clip(decision.action(), ACTION_MAX_CHARS).to_owned(),
                clip(decision.reason(), REASON_MAX_CHARS).to_owned(),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn incident(severity: Option<&str>, status: Option<&str>) -> Incident {
        let mut fields = Vec::new();
        if let Some(severity) = severity {
            fields.push(format!(r#""severity": "{}""#, severity));
        }
        if let Some(status) = status {
            fields.push(format!(r#""status": "{}""#, status));
        }
        serde_json::from_str(&format!("{{{}}}", fields.join(", "))).expect("build incident")
    }

    #[test]
    fn resolution_rate_is_zero_literal_for_empty_list() {
        let stats = IncidentStats::collect(&[]);
        assert_eq!(stats.resolution_rate(), "0%");
    }

    #[test]
    fn resolution_rate_has_one_decimal() {
        let incidents = vec![
            incident(None, Some("CLOSED")),
            incident(None, Some("CLOSED")),
            incident(None, Some("OPEN")),
        ];
        let stats = IncidentStats::collect(&incidents);
        assert_eq!(stats.resolution_rate(), "66.7%");
    }

    #[test]
    fn resolution_rate_covers_full_resolution() {
        let incidents = vec![incident(None, Some("CLOSED"))];
        let stats = IncidentStats::collect(&incidents);
        assert_eq!(stats.resolution_rate(), "100.0%");
    }

    #[test]
    fn incident_stats_count_critical_and_extreme() {
        let incidents = vec![
            incident(Some("CRITICAL"), None),
            incident(Some("EXTREME"), None),
            incident(Some("MODERATE"), None),
            incident(None, None),
        ];
        let stats = IncidentStats::collect(&incidents);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.critical, 2);
        assert_eq!(stats.resolved, 0);
    }

    #[test]
    fn unit_stats_count_by_status() {
        let units: Vec<Unit> = serde_json::from_str(
            r#"[
                {"status": "ON_DUTY"},
                {"status": "ON_DUTY"},
                {"status": "ENGAGED"},
                {"status": "MAINTENANCE"},
                {"status": "OFFLINE"},
                {}
            ]"#,
        )
        .expect("build units");
        let stats = UnitStats::collect(&units);
        assert_eq!(stats.total, 6);
        assert_eq!(stats.on_duty, 2);
        assert_eq!(stats.engaged, 1);
        assert_eq!(stats.maintenance, 1);
    }

    #[test]
    fn clip_limits_by_character_count() {
        assert_eq!(clip("short", 50), "short");
        let long = "x".repeat(80);
        assert_eq!(clip(&long, 50).chars().count(), 50);
        // Multi-byte characters count as single characters.
        assert_eq!(clip("éééé", 2), "éé");
    }

    #[test]
    fn incident_row_clips_date_to_iso_day() {
        let incidents: Vec<Incident> =
            serde_json::from_str(r#"[{"createdAt": "2024-03-15T10:30:00Z"}]"#)
                .expect("build incidents");
        let rows = incident_rows(&incidents);
        assert_eq!(rows[0][5], "2024-03-15");
    }

    #[test]
    fn incident_row_defaults_missing_fields() {
        let incidents: Vec<Incident> = serde_json::from_str("[{}]").expect("build incidents");
        let rows = incident_rows(&incidents);
        assert_eq!(rows[0], vec!["N/A"; 6]);
    }

    #[test]
    fn incident_row_clips_title_and_address() {
        let incidents: Vec<Incident> = serde_json::from_str(&format!(
            r#"[{{"title": "{}", "address": "{}"}}]"#,
            "t".repeat(60),
            "a".repeat(40)
        ))
        .expect("build incidents");
        let rows = incident_rows(&incidents);
        assert_eq!(rows[0][1].chars().count(), 50);
        assert_eq!(rows[0][4].chars().count(), 30);
    }

    #[test]
    fn decision_rows_keep_first_twenty_in_order() {
        let payload: Vec<String> = (0..25)
            .map(|i| format!(r#"{{"action": "action-{:02}"}}"#, i))
            .collect();
        let decisions: Vec<Decision> =
            serde_json::from_str(&format!("[{}]", payload.join(","))).expect("build decisions");
        let rows = decision_rows(&decisions);
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0][1], "action-00");
        assert_eq!(rows[19][1], "action-19");
    }

    #[test]
    fn decision_rows_clip_time_prefix() {
        let decisions: Vec<Decision> =
            serde_json::from_str(r#"[{"createdAt": "2024-03-15T10:30:00Z"}]"#)
                .expect("build decisions");
        let rows = decision_rows(&decisions);
        assert_eq!(rows[0][0], "2024-03-15T10:30");
    }

    #[test]
    fn metadata_rows_have_fixed_order() {
        let request: ReportRequest = serde_json::from_str("{}").expect("parse payload");
        let rows = metadata_rows(&request);
        let labels: Vec<&str> = rows.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Report ID:",
                "Generated:",
                "Operation Code:",
                "Report Period:",
                "Center:",
                "Prepared By:"
            ]
        );
    }

    #[test]
    fn performance_rows_default_numbers_and_text() {
        let metrics: Performance = serde_json::from_str("{}").expect("parse performance");
        let rows = performance_rows(&metrics);
        assert_eq!(rows[0].1, "N/A");
        assert_eq!(rows[1].1, "0");
        assert_eq!(rows[4].1, "N/A");
        assert_eq!(rows[5].1, "0");
    }
}
