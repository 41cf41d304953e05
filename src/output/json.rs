use crate::errors::Result;
use crate::summary::CoverageSummary;

/// Render the summary as pretty-printed JSON.
pub fn format_summary_json(summary: &CoverageSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcov::parse_lcov;
    use crate::summary::summarize;
    use serde_json::Value;

    #[test]
    fn test_format_summary_json_structure() {
        let summary = summarize(&parse_lcov(
            "SF:src/a.rs\nLF:4\nLH:2\nend_of_record\nSF:src/b.rs\nLF:4\nLH:4\nend_of_record\n",
        ));

        let json: Value = serde_json::from_str(&format_summary_json(&summary).unwrap()).unwrap();

        assert_eq!(json["total"]["lines"]["total"], 8);
        assert_eq!(json["total"]["lines"]["covered"], 6);
        assert_eq!(json["total"]["lines"]["percentage"], 75.0);
        assert_eq!(json["total"]["branches"]["percentage"], 100.0);
        assert_eq!(json["files"][0]["file"], "src/a.rs");
        assert_eq!(json["files"][0]["lines"]["percentage"], 50.0);
        assert_eq!(json["files"][1]["file"], "src/b.rs");
    }
}
