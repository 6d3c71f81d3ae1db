//! Diagnostic questionnaire: questions, answers, and the wizard walk.

mod answer;
mod catalog;
mod question;
mod wizard;

pub use answer::{Answer, AnswerValue};
pub use catalog::{diagnostic_questions, question_by_id};
pub use question::{InputKind, Question, SwotTag};
pub use wizard::{Advance, Wizard};
