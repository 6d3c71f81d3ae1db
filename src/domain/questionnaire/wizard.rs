//! Linear questionnaire wizard.
//!
//! Walks the fixed question list one prompt at a time, collecting typed
//! answers with backward/forward navigation. The wizard performs no I/O;
//! required-field validation is its only failure mode.

use crate::domain::foundation::ValidationError;

use super::answer::{Answer, AnswerValue};
use super::question::Question;

/// Outcome of recording the current answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the next question.
    Next,
    /// The last question was answered; the finalized answer list is ready.
    Finished(Vec<Answer>),
}

/// Wizard state: current position, accumulated answers, and the transient
/// value for the question on screen.
///
/// # Invariants
///
/// - `index` stays within `[0, questions.len() - 1]`
/// - `answers` holds at most one entry per question id
#[derive(Debug, Clone)]
pub struct Wizard {
    questions: &'static [Question],
    index: usize,
    answers: Vec<Answer>,
    draft: AnswerValue,
}

impl Wizard {
    /// Creates a wizard positioned at the first question.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the question list is empty
    pub fn new(questions: &'static [Question]) -> Result<Self, ValidationError> {
        let first = questions
            .first()
            .ok_or_else(|| ValidationError::empty_field("questions"))?;
        Ok(Self {
            questions,
            index: 0,
            answers: Vec::new(),
            draft: AnswerValue::empty_for(first.kind),
        })
    }

    /// Returns the question currently on screen.
    pub fn current_question(&self) -> &'static Question {
        &self.questions[self.index]
    }

    /// Returns the 0-based index of the current question.
    pub fn current_index(&self) -> usize {
        self.index
    }

    /// Returns the transient value for the current question.
    pub fn draft(&self) -> &AnswerValue {
        &self.draft
    }

    /// Replaces the transient value for the current question.
    pub fn set_draft(&mut self, value: impl Into<AnswerValue>) {
        self.draft = value.into();
    }

    /// Returns true if the wizard is on the last question.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.questions.len()
    }

    /// Validates and records the transient value, then advances.
    ///
    /// On the last question this finalizes instead, returning the full
    /// ordered answer list. Validation failure leaves all state untouched.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the question is required and the value is empty
    pub fn record_and_advance(&mut self) -> Result<Advance, ValidationError> {
        let question = self.current_question();
        if question.required && self.draft.is_empty() {
            return Err(ValidationError::empty_field(question.id.as_str()));
        }

        self.upsert_draft();

        if self.is_last() {
            return Ok(Advance::Finished(self.finalized_answers()));
        }

        self.index += 1;
        self.load_draft();
        Ok(Advance::Next)
    }

    /// Moves back one question, persisting the current transient value first.
    ///
    /// Returns false (and does nothing) when already at the first question.
    pub fn go_back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.upsert_draft();
        self.index -= 1;
        self.load_draft();
        true
    }

    /// Returns the answers collected so far, in questionnaire order.
    pub fn answers(&self) -> Vec<Answer> {
        self.finalized_answers()
    }

    /// Upserts the current draft into the accumulated set, keyed by question
    /// id. Empty drafts are not recorded; unanswered questions are simply
    /// absent from the final list.
    fn upsert_draft(&mut self) {
        if self.draft.is_empty() {
            return;
        }
        let question = self.current_question();
        let tag = self
            .draft
            .as_text()
            .and_then(|label| question.resolve_tag(label));
        let answer = Answer::classified(question.id.clone(), self.draft.clone(), tag);

        match self
            .answers
            .iter_mut()
            .find(|a| a.question_id == question.id)
        {
            Some(existing) => *existing = answer,
            None => self.answers.push(answer),
        }
    }

    /// Pre-populates the draft from a prior answer, or resets it to empty.
    fn load_draft(&mut self) {
        let question = self.current_question();
        self.draft = self
            .answers
            .iter()
            .find(|a| a.question_id == question.id)
            .map(|a| a.value.clone())
            .unwrap_or_else(|| AnswerValue::empty_for(question.kind));
    }

    /// Assembles the answer list ordered by questionnaire position.
    fn finalized_answers(&self) -> Vec<Answer> {
        self.questions
            .iter()
            .filter_map(|q| self.answers.iter().find(|a| a.question_id == q.id))
            .cloned()
            .collect()
    }
}
