//! Answer records produced by the wizard.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

use super::question::{InputKind, SwotTag};

/// The value of a single answer: free text / single choice, or a list of
/// choices for multi-choice questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    List(Vec<String>),
}

impl AnswerValue {
    /// Returns an empty value suitable for the given input kind.
    pub fn empty_for(kind: InputKind) -> Self {
        if kind.is_multi() {
            AnswerValue::List(Vec::new())
        } else {
            AnswerValue::Text(String::new())
        }
    }

    /// Returns true if the value carries no user input.
    pub fn is_empty(&self) -> bool {
        match self {
            AnswerValue::Text(s) => s.trim().is_empty(),
            AnswerValue::List(items) => items.is_empty(),
        }
    }

    /// Returns the text content for single-valued answers.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            AnswerValue::List(_) => None,
        }
    }

    /// Returns the selected labels for multi-choice answers.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AnswerValue::List(items) => Some(items),
            AnswerValue::Text(_) => None,
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::Text(s.to_string())
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(items: Vec<String>) -> Self {
        AnswerValue::List(items)
    }
}

/// A record binding a question id to the user's response.
///
/// At most one answer exists per question id in a finalized answer set;
/// re-answering during navigation overwrites the prior record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// The question this answers.
    pub question_id: QuestionId,
    /// The captured value.
    pub value: AnswerValue,
    /// Resolved classification tag, when the question was guided.
    pub tag: Option<SwotTag>,
}

impl Answer {
    /// Creates an answer with no classification tag.
    pub fn new(question_id: impl Into<QuestionId>, value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
            tag: None,
        }
    }

    /// Creates an answer carrying a resolved classification tag.
    pub fn classified(
        question_id: impl Into<QuestionId>,
        value: impl Into<AnswerValue>,
        tag: Option<SwotTag>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
            tag,
        }
    }

    /// Returns the text content, if single-valued.
    pub fn text(&self) -> Option<&str> {
        self.value.as_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_for_matches_input_kind() {
        assert_eq!(
            AnswerValue::empty_for(InputKind::FreeText),
            AnswerValue::Text(String::new())
        );
        assert_eq!(
            AnswerValue::empty_for(InputKind::MultiChoice),
            AnswerValue::List(Vec::new())
        );
    }

    #[test]
    fn blank_text_is_empty() {
        assert!(AnswerValue::Text("   ".to_string()).is_empty());
        assert!(!AnswerValue::Text("Não".to_string()).is_empty());
    }

    #[test]
    fn empty_list_is_empty() {
        assert!(AnswerValue::List(vec![]).is_empty());
        assert!(!AnswerValue::List(vec!["Vendas".to_string()]).is_empty());
    }

    #[test]
    fn answer_serializes_text_value_untagged() {
        let answer = Answer::new(QuestionId::new("team_size"), "1-5");
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["value"], "1-5");
        assert_eq!(json["question_id"], "team_size");
    }

    #[test]
    fn answer_serializes_list_value_untagged() {
        let answer = Answer::new(
            QuestionId::new("main_challenges"),
            vec!["Vendas".to_string(), "Equipe".to_string()],
        );
        let json = serde_json::to_value(&answer).unwrap();
        assert_eq!(json["value"][0], "Vendas");
    }

    #[test]
    fn classified_answer_keeps_tag() {
        let answer = Answer::classified(
            QuestionId::new("marketing_plan"),
            "Inexistente",
            Some(SwotTag::Weakness),
        );
        assert_eq!(answer.tag, Some(SwotTag::Weakness));
    }
}
