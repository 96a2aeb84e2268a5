//! Report renderer - turns an analysis report into JSON, YAML or Markdown.
//!
//! JSON and YAML carry the full report. Markdown is a human-readable summary
//! of the matrix, the per-criterion verdicts, the frequency table and the
//! final recommendation.

use crate::application::AnalysisReport;
use crate::domain::aggregation::{FinalRecommendation, RecommendationDetails};
use crate::ports::{ExportError, ExportedReport, ReportFormat};

/// Renders analysis reports to the supported formats.
///
/// # Example
///
/// ```rust,ignore
/// let renderer = ReportRenderer::new();
/// let exported = renderer.render(&report, ReportFormat::Markdown)?;
/// println!("{}", exported.content);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportRenderer;

impl ReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders `report`, naming the output `analysis-{short id}.{ext}`.
    pub fn render(
        &self,
        report: &AnalysisReport,
        format: ReportFormat,
    ) -> Result<ExportedReport, ExportError> {
        let content = match format {
            ReportFormat::Json => serde_json::to_string_pretty(report)
                .map_err(|e| ExportError::serialization(e.to_string()))?,
            ReportFormat::Yaml => serde_yaml::to_string(report)
                .map_err(|e| ExportError::serialization(e.to_string()))?,
            ReportFormat::Markdown => Self::to_markdown(report),
        };

        let base_filename = format!("analysis-{}", report.analysis_id.short());
        Ok(ExportedReport::new(content, format, &base_filename))
    }

    fn to_markdown(report: &AnalysisReport) -> String {
        let stats = &report.statistics;
        let mut doc = format!("# Decision Analysis {}\n\n", report.analysis_id.short());

        if let Some(mode) = stats.analysis_type {
            doc.push_str(&format!("- **Analysis type:** {}\n", mode));
        }
        if let Some(timestamp) = stats.timestamp {
            doc.push_str(&format!("- **Generated:** {}\n", timestamp.to_rfc3339()));
        }
        doc.push_str(&format!(
            "- **Criteria evaluated:** {} ({} with a recommendation)\n\n",
            stats.total_criteria, stats.valid_recommendations
        ));

        doc.push_str(&Self::matrix_section(report));
        doc.push_str(&Self::criteria_section(report));
        doc.push_str(&Self::frequency_section(report));
        doc.push_str(&Self::final_section(&stats.most_frequent));
        doc
    }

    fn matrix_section(report: &AnalysisReport) -> String {
        let matrix = &report.matrix;
        let mut section = String::from("## Payoff Matrix\n\n");
        if matrix.is_empty() {
            section.push_str("_Empty matrix._\n\n");
            return section;
        }

        section.push_str("| Strategy |");
        for state in &matrix.states {
            section.push_str(&format!(" {} |", cell(state)));
        }
        section.push_str("\n|---|");
        section.push_str(&"---|".repeat(matrix.states.len()));
        section.push('\n');

        for (strategy, row) in matrix.strategies.iter().zip(&matrix.data) {
            section.push_str(&format!("| {} |", cell(strategy)));
            for payoff in row {
                section.push_str(&format!(" {} |", payoff));
            }
            section.push('\n');
        }
        section.push('\n');
        section
    }

    fn criteria_section(report: &AnalysisReport) -> String {
        let mut section = String::from(
            "## Criteria\n\n| Criterion | Recommended strategy | Score |\n|---|---|---|\n",
        );
        for rec in &report.recommendations {
            let score = match &rec.details {
                RecommendationDetails::Result(result) => result
                    .optimal_value
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                RecommendationDetails::Failed { error } => format!("failed: {}", cell(error)),
            };
            section.push_str(&format!(
                "| {} | {} | {} |\n",
                cell(&rec.criterion_name),
                cell(&rec.strategy),
                score
            ));
        }
        section.push('\n');
        section
    }

    fn frequency_section(report: &AnalysisReport) -> String {
        let mut section = String::from("## Strategy Frequency\n\n");
        let distribution = &report.statistics.distribution;
        if distribution.is_empty() {
            section.push_str("_No criterion produced a recommendation._\n\n");
            return section;
        }

        section.push_str("| Strategy | Count |\n|---|---|\n");
        for (strategy, count) in distribution.ranked() {
            section.push_str(&format!("| {} | {} |\n", cell(strategy), count));
        }
        section.push('\n');
        section
    }

    fn final_section(rec: &FinalRecommendation) -> String {
        let mut section = String::from("## Final Recommendation\n\n");
        let Some(strategy) = &rec.strategy else {
            section.push_str("No strategy could be determined.\n");
            return section;
        };

        section.push_str(&format!(
            "**{}** is recommended by {} of {} criteria ({}), confidence: {}.\n",
            strategy,
            rec.frequency,
            rec.total,
            rec.percentage,
            rec.confidence.label()
        ));
        if rec.has_tie {
            section.push_str(&format!(
                "\nTied strategies: {}.\n",
                rec.alternatives.join(", ")
            ));
        }
        section
    }
}

/// Escapes pipes so names cannot break table layout.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}
