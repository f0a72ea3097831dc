//! Data structures describing one reporting period's operational data.
//!
//! The types in this module form the deserialization-friendly model of a
//! report request.  Every field is optional on the wire: a missing key is
//! masked by a documented default at the accessor level, never surfaced as a
//! deserialization error.  The composer relies on this contract so that a
//! minimal `{}` payload still produces a complete document.

use std::fmt;

use chrono::Local;
use serde::Deserialize;

/// Placeholder used whenever an optional text field is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Default attribution shown in the report metadata.
pub const DEFAULT_PREPARED_BY: &str = "DGPC Operations Center";

/// Default executive summary shown when the payload carries none.
pub const DEFAULT_SUMMARY: &str = "No summary provided.";

/// Default footer disclaimer shown when the payload carries none.
pub const DEFAULT_FOOTER: &str = "This report is classified for official use by the Directorate General of Civil Protection Algeria.\nAll data presented in this report is based on operational records and analysis.\nReport generated automatically by DGPC Mission Control System.";

/// The complete input record for one report.
///
/// Field names follow the camelCase convention of the upstream JSON payload.
/// Unknown keys are ignored; wrong-typed nested fields are deserialization
/// errors and surface as malformed input.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReportRequest {
    report_id: Option<String>,
    operation_code: Option<String>,
    period: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    center: Option<String>,
    prepared_by: Option<String>,
    summary: Option<String>,
    footer: Option<String>,
    incidents: Vec<Incident>,
    units: Vec<Unit>,
    decisions: Vec<Decision>,
    performance: Option<Performance>,
}

impl ReportRequest {
    /// Returns the report identifier, deriving a timestamped one when absent.
    pub fn report_id(&self) -> String {
        self.report_id
            .clone()
            .unwrap_or_else(|| format!("RPT-{}", Local::now().format("%Y%m%d-%H%M%S")))
    }

    /// Returns the operation code or the placeholder.
    pub fn operation_code(&self) -> &str {
        self.operation_code.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Returns the report period, assembling it from the start and end dates
    /// when no explicit period string is provided.
    pub fn period(&self) -> String {
        match &self.period {
            Some(period) => period.clone(),
            None => format!(
                "{} - {}",
                self.start_date.as_deref().unwrap_or(NOT_AVAILABLE),
                self.end_date.as_deref().unwrap_or(NOT_AVAILABLE)
            ),
        }
    }

    /// Returns the operations center name or the placeholder.
    pub fn center(&self) -> &str {
        self.center.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Returns the preparing entity, defaulting to the operations center.
    pub fn prepared_by(&self) -> &str {
        self.prepared_by.as_deref().unwrap_or(DEFAULT_PREPARED_BY)
    }

    /// Returns the executive summary text or the default placeholder.
    pub fn summary(&self) -> &str {
        self.summary.as_deref().unwrap_or(DEFAULT_SUMMARY)
    }

    /// Returns the footer text or the default disclaimer.
    pub fn footer(&self) -> &str {
        self.footer.as_deref().unwrap_or(DEFAULT_FOOTER)
    }

    /// Returns the recorded incidents in input order.
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// Returns the recorded units in input order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Returns the recorded decisions in input order.
    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// Returns the performance record, if one is present in the payload.
    pub fn performance(&self) -> Option<&Performance> {
        self.performance.as_ref()
    }
}

/// A single incident entry.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Incident {
    incident_id: Option<String>,
    title: Option<String>,
    severity: Option<String>,
    status: Option<String>,
    address: Option<String>,
    created_at: Option<String>,
}

impl Incident {
    pub fn incident_id(&self) -> &str {
        self.incident_id.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn severity(&self) -> &str {
        self.severity.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn created_at(&self) -> &str {
        self.created_at.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Whether the incident counts towards the critical/extreme tally.
    pub fn is_critical(&self) -> bool {
        matches!(self.severity.as_deref(), Some("CRITICAL") | Some("EXTREME"))
    }

    /// Whether the incident counts as resolved.
    pub fn is_resolved(&self) -> bool {
        self.status.as_deref() == Some("CLOSED")
    }
}

/// A single unit entry; only the status is reported on.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Unit {
    status: Option<String>,
}

impl Unit {
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn has_status(&self, status: &str) -> bool {
        self.status.as_deref() == Some(status)
    }
}

/// A single entry in the decision log.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Decision {
    created_at: Option<String>,
    action: Option<String>,
    reason: Option<String>,
}

impl Decision {
    pub fn created_at(&self) -> &str {
        self.created_at.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn action(&self) -> &str {
        self.action.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn reason(&self) -> &str {
        self.reason.as_deref().unwrap_or(NOT_AVAILABLE)
    }
}

/// Performance metrics for the reporting period.
///
/// Metric values arrive either as JSON numbers or as free-text strings, so
/// each field is modelled as an optional [`Metric`].  Numeric metrics default
/// to `0` and textual metrics to the placeholder when absent.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Performance {
    avg_response_time: Option<Metric>,
    units_deployed: Option<Metric>,
    incidents_resolved: Option<Metric>,
    critical_escalations: Option<Metric>,
    resource_utilization: Option<Metric>,
    communication_sessions: Option<Metric>,
    recommendations: Vec<String>,
}

impl Performance {
    pub fn avg_response_time(&self) -> String {
        text_metric(&self.avg_response_time)
    }

    pub fn units_deployed(&self) -> String {
        numeric_metric(&self.units_deployed)
    }

    pub fn incidents_resolved(&self) -> String {
        numeric_metric(&self.incidents_resolved)
    }

    pub fn critical_escalations(&self) -> String {
        numeric_metric(&self.critical_escalations)
    }

    pub fn resource_utilization(&self) -> String {
        text_metric(&self.resource_utilization)
    }

    pub fn communication_sessions(&self) -> String {
        numeric_metric(&self.communication_sessions)
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    /// Whether the record carries no metric and no recommendation.
    ///
    /// An empty `performance` object on the wire is treated the same as a
    /// missing one.
    pub fn is_empty(&self) -> bool {
        self.avg_response_time.is_none()
            && self.units_deployed.is_none()
            && self.incidents_resolved.is_none()
            && self.critical_escalations.is_none()
            && self.resource_utilization.is_none()
            && self.communication_sessions.is_none()
            && self.recommendations.is_empty()
    }
}

fn text_metric(metric: &Option<Metric>) -> String {
    metric
        .as_ref()
        .map(Metric::to_string)
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned())
}

fn numeric_metric(metric: &Option<Metric>) -> String {
    metric
        .as_ref()
        .map(Metric::to_string)
        .unwrap_or_else(|| "0".to_owned())
}

/// A metric value that may be numeric or free text on the wire.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Metric {
    Number(f64),
    Text(String),
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Plain formatting; whole numbers render without a fraction.
            Metric::Number(value) => write!(f, "{}", value),
            Metric::Text(value) => f.write_str(value),
        }
    }
}
