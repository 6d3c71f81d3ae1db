//! Question definitions for the diagnostic questionnaire.
//!
//! Questions are static configuration data: they are defined once in the
//! catalog and never mutated at runtime.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

/// The input widget a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Free text field.
    FreeText,
    /// Fixed Sim/Nao pair.
    YesNo,
    /// Exactly one choice from a list.
    SingleChoice,
    /// Zero or more choices from a list.
    MultiChoice,
    /// Single choice where each label maps to a strategic-analysis tag.
    GuidedClassification,
}

impl InputKind {
    /// Returns true if answers to this kind are lists rather than strings.
    pub fn is_multi(&self) -> bool {
        matches!(self, InputKind::MultiChoice)
    }
}

/// One of the four strategic-analysis tags a guided question can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwotTag {
    Strength,
    Weakness,
    Opportunity,
    Threat,
}

/// One prompt in the fixed questionnaire sequence.
///
/// # Invariants
///
/// - `choices` is non-empty for choice-based kinds
/// - `classification` is only populated for [`InputKind::GuidedClassification`]
///   and maps a subset of `choices` to tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable key used to look up the answer later.
    pub id: QuestionId,
    /// Prompt shown to the user.
    pub prompt: String,
    /// Grouping label for display.
    pub category: String,
    /// Input kind.
    pub kind: InputKind,
    /// Ordered choice labels (empty for free text).
    #[serde(default)]
    pub choices: Vec<String>,
    /// Label-to-tag mapping for guided classification questions.
    #[serde(default)]
    pub classification: Vec<(String, SwotTag)>,
    /// Whether an answer is mandatory before advancing.
    pub required: bool,
}

impl Question {
    /// Creates a required free-text question.
    pub fn free_text(id: &str, prompt: &str, category: &str) -> Self {
        Self {
            id: QuestionId::new(id),
            prompt: prompt.to_string(),
            category: category.to_string(),
            kind: InputKind::FreeText,
            choices: Vec::new(),
            classification: Vec::new(),
            required: true,
        }
    }

    /// Creates a required Sim/Nao question.
    pub fn yes_no(id: &str, prompt: &str, category: &str) -> Self {
        Self {
            id: QuestionId::new(id),
            prompt: prompt.to_string(),
            category: category.to_string(),
            kind: InputKind::YesNo,
            choices: vec!["Sim".to_string(), "Não".to_string()],
            classification: Vec::new(),
            required: true,
        }
    }

    /// Creates a required single-choice question.
    pub fn single_choice(id: &str, prompt: &str, category: &str, choices: &[&str]) -> Self {
        Self {
            id: QuestionId::new(id),
            prompt: prompt.to_string(),
            category: category.to_string(),
            kind: InputKind::SingleChoice,
            choices: choices.iter().map(|c| c.to_string()).collect(),
            classification: Vec::new(),
            required: true,
        }
    }

    /// Creates a multi-choice question.
    pub fn multi_choice(id: &str, prompt: &str, category: &str, choices: &[&str]) -> Self {
        Self {
            id: QuestionId::new(id),
            prompt: prompt.to_string(),
            category: category.to_string(),
            kind: InputKind::MultiChoice,
            choices: choices.iter().map(|c| c.to_string()).collect(),
            classification: Vec::new(),
            required: true,
        }
    }

    /// Creates a guided-classification question from (label, tag) pairs.
    pub fn guided(id: &str, prompt: &str, category: &str, mapping: &[(&str, SwotTag)]) -> Self {
        Self {
            id: QuestionId::new(id),
            prompt: prompt.to_string(),
            category: category.to_string(),
            kind: InputKind::GuidedClassification,
            choices: mapping.iter().map(|(label, _)| label.to_string()).collect(),
            classification: mapping
                .iter()
                .map(|(label, tag)| (label.to_string(), *tag))
                .collect(),
            required: true,
        }
    }

    /// Marks the question as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Resolves a chosen label to its classification tag.
    ///
    /// Returns `None` for labels absent from the mapping and for questions
    /// that are not guided-classification.
    pub fn resolve_tag(&self, label: &str) -> Option<SwotTag> {
        self.classification
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, tag)| *tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_no_question_has_fixed_choices() {
        let q = Question::yes_no("processes_documented", "Processos documentados?", "Gestão");
        assert_eq!(q.kind, InputKind::YesNo);
        assert_eq!(q.choices, vec!["Sim", "Não"]);
        assert!(q.required);
    }

    #[test]
    fn guided_question_resolves_mapped_label() {
        let q = Question::guided(
            "marketing_plan",
            "Como está o plano de marketing?",
            "Marketing",
            &[
                ("Bem estruturado", SwotTag::Strength),
                ("Inexistente", SwotTag::Weakness),
            ],
        );
        assert_eq!(q.resolve_tag("Inexistente"), Some(SwotTag::Weakness));
        assert_eq!(q.resolve_tag("Bem estruturado"), Some(SwotTag::Strength));
    }

    #[test]
    fn guided_question_returns_none_for_unmapped_label() {
        let q = Question::guided(
            "marketing_plan",
            "Como está o plano de marketing?",
            "Marketing",
            &[("Inexistente", SwotTag::Weakness)],
        );
        assert_eq!(q.resolve_tag("Outra coisa"), None);
    }

    #[test]
    fn free_text_question_resolves_no_tag() {
        let q = Question::free_text("company_name", "Nome da empresa?", "Empresa");
        assert_eq!(q.resolve_tag("qualquer"), None);
    }

    #[test]
    fn optional_clears_required_flag() {
        let q = Question::free_text("notes", "Observações?", "Empresa").optional();
        assert!(!q.required);
    }

    #[test]
    fn multi_kind_is_multi() {
        assert!(InputKind::MultiChoice.is_multi());
        assert!(!InputKind::FreeText.is_multi());
    }
}
