use std::io::{self, Write};

use serde::Serialize;

use crate::check::FileCheckResult;

const TITLE: &str = "JSON Configuration Files Validation Results:";
const PASS_GLYPH: &str = "✅";
const FAIL_GLYPH: &str = "❌";
const SUCCESS_BANNER: &str = "🎉 All tests passed!";
const FAILURE_BANNER: &str = "❌ Some tests failed!";
const SEPARATOR_WIDTH: usize = 50;

/// The collected results of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    passed: bool,
    results: Vec<FileCheckResult>,
}

impl Report {
    pub fn new(results: Vec<FileCheckResult>) -> Self {
        let passed = results.iter().all(FileCheckResult::passed);
        Self { passed, results }
    }

    pub fn results(&self) -> &[FileCheckResult] {
        &self.results
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    /// 0 when every file passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.passed {
            0
        } else {
            1
        }
    }

    /// Writes the human-readable report.
    pub fn write_text(&self, out: &mut impl Write) -> io::Result<()> {
        let separator = "=".repeat(SEPARATOR_WIDTH);
        writeln!(out, "{TITLE}")?;
        writeln!(out, "{separator}")?;
        for result in &self.results {
            let glyph = if result.passed() {
                PASS_GLYPH
            } else {
                FAIL_GLYPH
            };
            writeln!(out, "{glyph} {}: {}", result.file_name(), result.message())?;
        }
        writeln!(out)?;
        writeln!(out, "{separator}")?;
        let banner = if self.passed {
            SUCCESS_BANNER
        } else {
            FAILURE_BANNER
        };
        writeln!(out, "{banner}")
    }

    /// Writes the report as a pretty-printed JSON document.
    pub fn write_json(&self, out: &mut impl Write) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::check::CheckFailure;

    fn render(report: &Report) -> String {
        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_all_passed() {
        let report = Report::new(vec![
            FileCheckResult::pass("agent_repos.json"),
            FileCheckResult::pass("plugin_repos.json"),
        ]);
        assert_eq!(report.exit_code(), 0);
        assert_eq!(
            render(&report),
            "JSON Configuration Files Validation Results:\n\
             ==================================================\n\
             ✅ agent_repos.json: Valid JSON, no duplicates\n\
             ✅ plugin_repos.json: Valid JSON, no duplicates\n\
             \n\
             ==================================================\n\
             🎉 All tests passed!\n"
        );
    }

    #[test]
    fn test_one_failure() {
        let report = Report::new(vec![
            FileCheckResult::pass("agent_repos.json"),
            FileCheckResult::fail("plugin_repos.json", &CheckFailure::NotFound),
        ]);
        assert_eq!(report.exit_code(), 1);
        let text = render(&report);
        assert!(text.contains("\n❌ plugin_repos.json: File not found\n"));
        assert!(text.ends_with("\n❌ Some tests failed!\n"));
    }

    #[test]
    fn test_json() {
        let report = Report::new(vec![FileCheckResult::fail(
            "skill_repos.json",
            &CheckFailure::RootNotObject,
        )]);
        let mut out = Vec::new();
        report.write_json(&mut out).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            doc,
            serde_json::json!({
                "passed": false,
                "results": [{
                    "file": "skill_repos.json",
                    "status": "fail",
                    "message": "Root element must be a JSON object",
                }],
            })
        );
    }
}
