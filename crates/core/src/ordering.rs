//! Display ordering for a question's answers.
//!
//! Answers rank by vote count (highest first). Equal vote counts fall back
//! to recency of the last edit (most recent first). Anything still tied
//! keeps its relative position, since the sort is stable.
//!
//! The order is only guaranteed right after [`rank_answers`] runs, which the
//! repository layer does immediately before every write.

use std::cmp::Ordering;

use crate::question::Answer;

/// Compare two answers for display.
///
/// `Ordering::Less` means `a` is shown before `b`.
pub fn compare_answers(a: &Answer, b: &Answer) -> Ordering {
    if a.votes == b.votes {
        b.updated_at.cmp(&a.updated_at)
    } else {
        b.votes.cmp(&a.votes)
    }
}

/// Sort answers in place into display order.
pub fn rank_answers(answers: &mut [Answer]) {
    answers.sort_by(compare_answers);
}

/// Whether `answers` is already in display order.
#[cfg(test)]
pub(crate) fn is_ranked(answers: &[Answer]) -> bool {
    answers
        .windows(2)
        .all(|pair| compare_answers(&pair[0], &pair[1]) != Ordering::Greater)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
