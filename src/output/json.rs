use crate::error::Result;

use super::{OutputFormatter, PrefsReport};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &PrefsReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
