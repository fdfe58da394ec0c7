//! Marks arithmetic for student result sheets.
//!
//! Totals and the percentage are always derived from the per-subject list
//! at commit time; whatever the form carried in its total/percentage
//! fields is discarded.

use crate::model::SubjectMark;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarksSummary {
    pub total_obtained: u64,
    pub total_max: u64,
}

impl MarksSummary {
    /// "425/500"
    pub fn total_label(&self) -> String {
        format!("{}/{}", self.total_obtained, self.total_max)
    }

    /// Percentage rounded to two decimals, "85.00%". A zero max total
    /// yields "0.00%" rather than dividing by zero.
    pub fn percentage_label(&self) -> String {
        if self.total_max == 0 {
            return "0.00%".to_string();
        }
        let pct = (self.total_obtained as f64) * 100.0 / (self.total_max as f64);
        format!("{pct:.2}%")
    }
}

pub fn summarize(subjects: &[SubjectMark]) -> MarksSummary {
    let mut total_obtained: u64 = 0;
    let mut total_max: u64 = 0;
    for subject in subjects {
        total_obtained += u64::from(subject.marks);
        total_max += u64::from(subject.max_marks);
    }
    MarksSummary {
        total_obtained,
        total_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(marks: u32, max_marks: u32) -> SubjectMark {
        SubjectMark {
            name: "Subject".to_string(),
            marks,
            max_marks,
        }
    }

    #[test]
    fn five_subjects_out_of_100_each() {
        let subjects: Vec<_> = [95, 90, 85, 80, 75]
            .into_iter()
            .map(|m| subject(m, 100))
            .collect();
        let summary = summarize(&subjects);
        assert_eq!(summary.total_obtained, 425);
        assert_eq!(summary.total_max, 500);
        assert_eq!(summary.total_label(), "425/500");
        assert_eq!(summary.percentage_label(), "85.00%");
    }

    #[test]
    fn percentage_keeps_two_decimals() {
        let summary = summarize(&[subject(2, 3)]);
        assert_eq!(summary.percentage_label(), "66.67%");

        let summary = summarize(&[subject(1, 8)]);
        assert_eq!(summary.percentage_label(), "12.50%");
    }

    #[test]
    fn empty_subject_list_is_zero_over_zero() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_label(), "0/0");
        assert_eq!(summary.percentage_label(), "0.00%");
    }
}
