//! Study partner matching.
//!
//! Compatibility is a coarse score out of 100: half for sharing a grade,
//! half for sharing at least one interest.

use serde::Serialize;

use crate::student::StudentRecord;

/// Points awarded when both students are in the same grade.
pub const SAME_GRADE_POINTS: u32 = 50;

/// Points awarded when the students share at least one interest.
pub const SHARED_INTEREST_POINTS: u32 = 50;

/// Compatibility score between two students: 0, 50 or 100.
///
/// Symmetric in its arguments. Comparing a student with itself is not
/// meaningful; [`find_best_partner`] never does.
pub fn score(a: &StudentRecord, b: &StudentRecord) -> u32 {
    let mut score = 0;
    if a.grade() == b.grade() {
        score += SAME_GRADE_POINTS;
    }
    if !a.interests().is_disjoint(b.interests()) {
        score += SHARED_INTEREST_POINTS;
    }
    score
}

/// Result of a partner search.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PartnerMatch<'a> {
    pub partner: Option<&'a StudentRecord>,
    pub score: u32,
}

/// Find the highest scoring partner for `subject` among `candidates`.
///
/// `subject` itself is skipped by identity, so it may appear in the list.
/// Ties keep the earliest candidate, and a candidate must score above 0 to be
/// chosen at all.
pub fn find_best_partner<'a>(
    subject: &StudentRecord,
    candidates: &'a [StudentRecord],
) -> PartnerMatch<'a> {
    let mut best = PartnerMatch {
        partner: None,
        score: 0,
    };
    for candidate in candidates {
        if std::ptr::eq(candidate, subject) {
            continue;
        }
        let candidate_score = score(subject, candidate);
        if candidate_score > best.score {
            best = PartnerMatch {
                partner: Some(candidate),
                score: candidate_score,
            };
        }
    }
    tracing::debug!(
        student = subject.name(),
        partner = best.partner.map(StudentRecord::name),
        score = best.score,
        "partner search finished"
    );
    best
}
