use crate::student::StudentRecord;

/// Days on which both students list availability, formatted `"{day}: {range}"`.
///
/// Follows `a`'s day order and uses `a`'s time range. Only the day keys are
/// compared; the ranges themselves are not checked for overlap.
pub fn common_times(a: &StudentRecord, b: &StudentRecord) -> Vec<String> {
    a.availability()
        .iter()
        .filter(|(day, _)| b.availability().contains_key(day.as_str()))
        .map(|(day, range)| format!("{day}: {range}"))
        .collect()
}
