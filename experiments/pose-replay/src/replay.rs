use analytics::{AnalyticsError, AnalyticsResult, Frame};

/// Parse one JSON-lines record. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Frame>, AnalyticsError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    Frame::from_json(line).map(Some)
}

/// One-line report for a published result.
pub fn summarize(result: &AnalyticsResult) -> String {
    let confidence = match result.latest_confidence() {
        Some(value) => format!("{:.0}%", value * 100.0),
        None => "-".to_string(),
    };
    let movement = match result.mean_displacement {
        Some(value) => format!("{value:.2}px"),
        None => "-".to_string(),
    };
    format!(
        "{} | {result} | confidence {confidence} | movement {movement} | history {}",
        result.last_updated, result.history_len
    )
}
