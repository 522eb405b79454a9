//! Paper assembly
//!
//! Builds an exam paper from a course's template and active question pool.
//! Selection is deterministic: sections are filled in template order, every
//! pick takes a question from the course outcome with the fewest marks
//! allocated so far (ties broken by outcome code, then question id), so the
//! same inputs always yield the same paper and outcome coverage stays as
//! even as the pool allows.
//!
//! A section that cannot be filled aborts the whole assembly; the caller
//! persists nothing in that case.

use crate::contract::{AcademicsError, CourseOutcome, PaperQuestion, Question, SectionSpec, Topic};
use std::collections::{BTreeMap, HashMap};

/// Assembled paper content, ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperPlan {
    /// Placements numbered 1..n across all sections
    pub placements: Vec<PaperQuestion>,
    /// Marks attributed per outcome code
    pub co_weightages: BTreeMap<String, i32>,
}

/// Assemble a paper from the template sections and the question pool
pub fn assemble(
    sections: &[SectionSpec],
    questions: &[Question],
    topics: &[Topic],
    outcomes: &[CourseOutcome],
) -> Result<PaperPlan, AcademicsError> {
    let outcome_codes: HashMap<i32, &str> = outcomes
        .iter()
        .map(|co| (co.id, co.code.as_str()))
        .collect();
    let topic_outcomes: HashMap<i32, i32> = topics.iter().map(|t| (t.id, t.co_id)).collect();

    // Resolve each question to its outcome code once; questions whose topic
    // or outcome cannot be resolved stay out of the pool
    let mut pool: Vec<(&Question, &str)> = questions
        .iter()
        .filter(|q| q.active)
        .filter_map(|q| {
            let co_id = topic_outcomes.get(&q.topic_id)?;
            let code = outcome_codes.get(co_id)?;
            Some((q, *code))
        })
        .collect();
    pool.sort_by_key(|(q, _)| q.id);

    let mut used: std::collections::HashSet<i32> = std::collections::HashSet::new();
    let mut allocated: BTreeMap<String, i32> = BTreeMap::new();
    let mut placements = Vec::new();
    let mut order = 0_i32;

    for section in sections {
        // Candidates for this section, grouped per outcome in code order
        let mut by_outcome: BTreeMap<&str, Vec<i32>> = BTreeMap::new();
        for (question, code) in &pool {
            if question.mark_value == section.mark_per_question && !used.contains(&question.id) {
                by_outcome.entry(code).or_default().push(question.id);
            }
        }

        for picked in 0..section.number_of_questions {
            let candidate = by_outcome
                .iter()
                .filter(|(_, ids)| !ids.is_empty())
                .min_by_key(|(code, _)| (allocated.get(**code).copied().unwrap_or(0), **code))
                .map(|(code, _)| code.to_string());

            let Some(code) = candidate else {
                return Err(AcademicsError::QuestionPoolExhausted {
                    section_label: section.label.clone(),
                    missing: section.number_of_questions - picked,
                });
            };

            let question_id = match by_outcome.get_mut(code.as_str()) {
                Some(ids) if !ids.is_empty() => ids.remove(0),
                _ => {
                    return Err(AcademicsError::QuestionPoolExhausted {
                        section_label: section.label.clone(),
                        missing: section.number_of_questions - picked,
                    })
                }
            };

            used.insert(question_id);
            order += 1;
            *allocated.entry(code.clone()).or_insert(0) += section.mark_per_question;
            placements.push(PaperQuestion {
                order,
                question_id,
                mark_value: section.mark_per_question,
                section_label: Some(section.label.clone()),
                co_satisfied: Some(code),
            });
        }
    }

    Ok(PaperPlan {
        placements,
        co_weightages: allocated,
    })
}
