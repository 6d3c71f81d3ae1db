//! Rule-cascade plan generation.
//!
//! Generation is a pure function of the answer set and the generation time:
//! no randomness, no clock reads, no I/O. The cascade instantiates action
//! bundles in a fixed order (baseline, gap remediation, classification,
//! brackets, universal filler, differentiator fallback) and finishes with a
//! stable sort, so the same diagnostic always yields the same plan apart
//! from the synthetic action ids.

mod bundles;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::plan::ActionItem;
use crate::domain::questionnaire::Answer;

use bundles::ActionTemplate;

/// Answer label that marks a gap question as negative.
const GAP_NEGATIVE: &str = "Não";

/// Question id of the free-text differentiator answer.
const DIFFERENTIATOR_QUESTION: &str = "competitive_differentiator";

/// Tunable generation limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Upper bound the universal filler tops the plan up to. Rule-matched
    /// actions are never dropped to honor it, and the differentiator
    /// fallback is appended regardless.
    pub universal_cap: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { universal_cap: 35 }
    }
}

/// Deterministic action-plan generator.
#[derive(Debug, Clone, Default)]
pub struct PlanGenerator {
    config: GeneratorConfig,
}

impl PlanGenerator {
    /// Creates a generator with the given limits.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Runs the full cascade over a finalized answer set.
    ///
    /// Answers for unknown question ids are ignored. Bracket labels must
    /// match a bundle exactly; an unrecognized label contributes nothing.
    pub fn generate(&self, answers: &[Answer], generated_at: Timestamp) -> Vec<ActionItem> {
        let mut actions: Vec<ActionItem> = Vec::new();

        push_bundle(&mut actions, bundles::BASELINE, generated_at);

        // Gap remediation: table order, not answer order, so plans stay
        // deterministic regardless of how the answer set was assembled.
        for (question_id, bundle) in bundles::GAP_BUNDLES {
            if let Some(answer) = find_answer(answers, question_id) {
                if answer.text() == Some(GAP_NEGATIVE) {
                    push_bundle(&mut actions, bundle, generated_at);
                }
            }
        }

        for (question_id, tag, bundle) in bundles::SWOT_BUNDLES {
            if let Some(answer) = find_answer(answers, question_id) {
                if answer.tag == Some(*tag) {
                    push_bundle(&mut actions, bundle, generated_at);
                }
            }
        }

        for (question_id, table) in [
            ("team_size", bundles::TEAM_SIZE_BUNDLES),
            ("time_in_market", bundles::TIME_IN_MARKET_BUNDLES),
            ("growth_trend", bundles::GROWTH_BUNDLES),
        ] {
            if let Some(label) = find_answer(answers, question_id).and_then(Answer::text) {
                if let Some((_, bundle)) = table.iter().find(|(l, _)| *l == label) {
                    push_bundle(&mut actions, bundle, generated_at);
                }
            }
        }

        for template in bundles::UNIVERSAL {
            if actions.len() >= self.config.universal_cap {
                break;
            }
            actions.push(instantiate(template, generated_at));
        }

        let differentiator_missing = find_answer(answers, DIFFERENTIATOR_QUESTION)
            .map(|answer| answer.value.is_empty())
            .unwrap_or(true);
        if differentiator_missing {
            actions.push(instantiate(&bundles::VALUE_PROPOSITION, generated_at));
        }

        // Stable: equal-priority actions keep cascade order.
        actions.sort_by_key(|a| (a.priority.rank(), a.deadline_months));
        actions
    }
}

fn find_answer<'a>(answers: &'a [Answer], question_id: &str) -> Option<&'a Answer> {
    answers.iter().find(|a| a.question_id.as_str() == question_id)
}

fn push_bundle(actions: &mut Vec<ActionItem>, bundle: &[ActionTemplate], generated_at: Timestamp) {
    for template in bundle {
        actions.push(instantiate(template, generated_at));
    }
}

fn instantiate(template: &ActionTemplate, generated_at: Timestamp) -> ActionItem {
    ActionItem::new(
        template.description,
        template.category,
        template.priority,
        template.months,
        generated_at,
        template.owner,
        template.resources,
        template.metric,
        template.benefit,
    )
}
