//! Fixed questionnaire copy: section headings, criterion titles and the
//! explanation shown next to each answer choice.

use crate::types::rating::{Criterion, RatingValue, Section};

pub const TITLE: &str = "CRO Scorecard - Organizational Assessment";
pub const CLOSING_NOTE: &str = "Strong executive alignment is essential for a CRO to succeed.";

#[derive(Debug, Clone, Copy)]
pub struct SectionCopy {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CriterionCopy {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
    /// Explanations for Low, Medium and High, in that order.
    pub choices: [&'static str; 3],
}

impl CriterionCopy {
    pub fn explain(&self, value: RatingValue) -> &'static str {
        match value {
            RatingValue::Low => self.choices[0],
            RatingValue::Medium => self.choices[1],
            RatingValue::High => self.choices[2],
        }
    }
}

pub fn section(section: Section) -> SectionCopy {
    match section {
        Section::GrowthComplexity => SectionCopy {
            title: "Growth & Complexity",
            description: "Assess the growth and complexity of your organization",
        },
        Section::ProcessMaturity => SectionCopy {
            title: "Process Maturity",
            description: "Assess the maturity of your processes and systems",
        },
        Section::OrganizationalAlignment => SectionCopy {
            title: "Organizational Alignment",
            description: "Assess alignment across your organization",
        },
    }
}

pub fn criterion(criterion: Criterion) -> CriterionCopy {
    match criterion {
        Criterion::TeamSize => CriterionCopy {
            title: "GTM team size",
            subtitle: Some("Sales, Marketing, CS"),
            choices: ["< 15 people", "15 - 50 people", "> 50 people"],
        },
        Criterion::MarketComplexity => CriterionCopy {
            title: "Target market complexity",
            subtitle: None,
            choices: [
                "1 product, 1 segment, 1 country",
                "2 - 3 products / segments / countries",
                "> 3 products / segments / countries",
            ],
        },
        Criterion::RevenueStage => CriterionCopy {
            title: "Revenue stage (ARR)",
            subtitle: None,
            choices: ["< EUR 5M", "EUR 5M - 20M", "> EUR 20M"],
        },
        Criterion::GrowthVelocity => CriterionCopy {
            title: "Growth velocity",
            subtitle: None,
            choices: [
                "Low or unpredictable",
                "Steady growth but hard to accelerate",
                "Rapid growth that needs structuring",
            ],
        },
        Criterion::DataReliability => CriterionCopy {
            title: "Data reliability",
            subtitle: None,
            choices: [
                "Scattered data (spreadsheets), no single source",
                "CRM in use but data incomplete / inconsistent",
                "Well-kept CRM, single source of truth",
            ],
        },
        Criterion::ProcessDefinition => CriterionCopy {
            title: "Process definition",
            subtitle: None,
            choices: [
                "Ad-hoc, undocumented processes",
                "Partially documented processes, loosely followed",
                "Clear, documented and followed processes",
            ],
        },
        Criterion::ForecastAccuracy => CriterionCopy {
            title: "Forecast accuracy",
            subtitle: None,
            choices: [
                "Variance above 20%",
                "Variance of 10 - 20%",
                "Consistently below 10% variance",
            ],
        },
        Criterion::InterTeamFriction => CriterionCopy {
            title: "Friction between silos",
            subtitle: None,
            choices: [
                "Sales / Marketing / CS blame each other",
                "Occasional collaboration",
                "Smooth collaboration",
            ],
        },
        Criterion::SharedKpis => CriterionCopy {
            title: "Shared KPIs",
            subtitle: None,
            choices: [
                "No shared KPIs",
                "A few common metrics",
                "Revenue-focused KPIs",
            ],
        },
        Criterion::ExecutiveCommitment => CriterionCopy {
            title: "Executive leadership",
            subtitle: None,
            choices: [
                "Not ready to delegate",
                "Willing but hesitant",
                "Clear commitment",
            ],
        },
    }
}

/// Plain-text listing of every question, used by `scorecard questions`.
pub fn render_questions() -> String {
    let mut output = String::new();
    output.push_str(&format!("{TITLE}\n\n"));
    output.push_str("Rate each criterion 1 (low), 3 (medium) or 5 (high).\n");
    for section_id in Section::ALL {
        let copy = section(section_id);
        output.push_str(&format!(
            "\nSection {}: {} (max {})\n  {}\n",
            section_id.number(),
            copy.title,
            section_id.max_points(),
            copy.description
        ));
        for criterion_id in section_id.criteria() {
            output.push_str(&question_block(*criterion_id));
        }
    }
    output
}

pub(crate) fn question_block(criterion_id: Criterion) -> String {
    let copy = criterion(criterion_id);
    let mut block = match copy.subtitle {
        Some(subtitle) => format!("\n  {} ({}) [{}]\n", copy.title, subtitle, criterion_id),
        None => format!("\n  {} [{}]\n", copy.title, criterion_id),
    };
    for value in RatingValue::ALL {
        block.push_str(&format!(
            "    {} ({}): {}\n",
            value,
            value.label(),
            copy.explain(value)
        ));
    }
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_list_every_criterion_key() {
        let rendered = render_questions();
        for criterion_id in Criterion::ALL {
            assert!(rendered.contains(criterion_id.key()), "{criterion_id}");
        }
        assert!(rendered.contains("Section 2: Process Maturity (max 15)"));
    }

    #[test]
    fn question_block_shows_three_choices() {
        let block = question_block(Criterion::TeamSize);
        assert!(block.contains("GTM team size (Sales, Marketing, CS)"));
        assert!(block.contains("1 (Low): < 15 people"));
        assert!(block.contains("5 (High): > 50 people"));
    }
}
