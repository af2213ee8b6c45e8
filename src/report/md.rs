use super::RenderOptions;
use crate::catalog;
use crate::types::report::ScorecardReport;

pub fn to_markdown(report: &ScorecardReport, options: &RenderOptions) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", catalog::TITLE));

    output.push_str("## Section Scores\n\n");
    for section in &report.sections {
        output.push_str(&format!(
            "- Section {}, {}: {} / {}\n",
            section.number, section.title, section.total, section.max
        ));
    }
    output.push('\n');

    output.push_str("## Total\n\n");
    output.push_str(&format!(
        "Total: {} / {}\n",
        report.total, report.max_total
    ));
    output.push_str(&format!(
        "Progress: {} {:.0}%\n",
        progress_bar(report.progress, options.progress_width),
        report.progress * 100.0
    ));
    output.push_str(&format!(
        "Answered: {} / {}\n",
        report.answered,
        report.answered + report.unanswered.len()
    ));
    if !report.is_complete() {
        let keys = report
            .unanswered
            .iter()
            .map(|criterion| criterion.key())
            .collect::<Vec<_>>();
        output.push_str(&format!("Unanswered: {}\n", keys.join(", ")));
    }
    output.push('\n');

    let recommendation = &report.recommendation;
    output.push_str("## Recommendation\n\n");
    output.push_str(&format!(
        "{} ({})\n\n",
        recommendation.label, recommendation.color
    ));
    if options.show_observations {
        output.push_str("Key points to watch:\n");
        for point in &recommendation.observations {
            output.push_str(&format!("- {point}\n"));
        }
        output.push('\n');
    }
    output.push_str(&format!("Recommended action: {}\n\n", recommendation.action));
    output.push_str(&format!("_{}_\n", report.note));

    output
}

pub(crate) fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
