use crate::types::report::ScorecardReport;

pub fn to_json(report: &ScorecardReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
