//! Filter state for the attendance views.
//!
//! One tagged union covers the two query shapes of the portal: the
//! dashboard/history date range and the per-class manual journal. Updates
//! are pure (return a new criteria value) and nothing here touches the
//! network; the controller decides when a criteria is worth fetching.

use chrono::NaiveDate;

/// The active query shape of a view. Fields still being typed in by the
/// user are `None` / empty; `is_complete` gates the fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCriteria {
    /// Dashboard and history report: an inclusive date range, optionally
    /// narrowed to one class.
    DateRange {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        class_label: Option<String>,
    },
    /// Teacher journal: one class, one subject, one day.
    ClassSubject {
        class_label: String,
        subject_label: String,
        date: Option<NaiveDate>,
    },
}

/// Canonical request shape handed to the API client, with ISO dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryPayload {
    History {
        start: String,
        end: String,
        class_label: Option<String>,
    },
    ByClass {
        class_label: String,
        subject_label: String,
        date: String,
    },
}

impl FilterCriteria {
    /// Dashboard default: today only, all classes.
    pub fn today(today: NaiveDate) -> Self {
        FilterCriteria::DateRange {
            start: Some(today),
            end: Some(today),
            class_label: None,
        }
    }

    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        FilterCriteria::DateRange {
            start: Some(start),
            end: Some(end),
            class_label: None,
        }
    }

    pub fn journal(class_label: &str, subject_label: &str, date: NaiveDate) -> Self {
        FilterCriteria::ClassSubject {
            class_label: class_label.to_string(),
            subject_label: subject_label.to_string(),
            date: Some(date),
        }
    }

    // Pure field updates. Each returns the new criteria and leaves the
    // variant untouched when the field does not apply to it.

    pub fn with_start(mut self, value: Option<NaiveDate>) -> Self {
        if let FilterCriteria::DateRange { start, .. } = &mut self {
            *start = value;
        }
        self
    }

    pub fn with_end(mut self, value: Option<NaiveDate>) -> Self {
        if let FilterCriteria::DateRange { end, .. } = &mut self {
            *end = value;
        }
        self
    }

    pub fn with_date(mut self, value: Option<NaiveDate>) -> Self {
        if let FilterCriteria::ClassSubject { date, .. } = &mut self {
            *date = value;
        }
        self
    }

    pub fn with_class(mut self, value: &str) -> Self {
        match &mut self {
            FilterCriteria::DateRange { class_label, .. } => {
                *class_label = non_empty(value);
            }
            FilterCriteria::ClassSubject { class_label, .. } => {
                *class_label = value.trim().to_string();
            }
        }
        self
    }

    pub fn with_subject(mut self, value: &str) -> Self {
        if let FilterCriteria::ClassSubject { subject_label, .. } = &mut self {
            *subject_label = value.trim().to_string();
        }
        self
    }

    /// True iff every required field of the active variant is populated.
    /// An incomplete criteria must never produce a network call.
    pub fn is_complete(&self) -> bool {
        match self {
            FilterCriteria::DateRange { start, end, .. } => match (start, end) {
                (Some(s), Some(e)) => s <= e,
                _ => false,
            },
            FilterCriteria::ClassSubject {
                class_label,
                subject_label,
                date,
            } => !class_label.trim().is_empty()
                && !subject_label.trim().is_empty()
                && date.is_some(),
        }
    }

    /// Canonical payload for the API client, or `None` while incomplete.
    pub fn to_payload(&self) -> Option<QueryPayload> {
        if !self.is_complete() {
            return None;
        }
        Some(match self {
            FilterCriteria::DateRange {
                start,
                end,
                class_label,
            } => QueryPayload::History {
                start: iso(start.as_ref()?),
                end: iso(end.as_ref()?),
                class_label: class_label.clone(),
            },
            FilterCriteria::ClassSubject {
                class_label,
                subject_label,
                date,
            } => QueryPayload::ByClass {
                class_label: class_label.trim().to_string(),
                subject_label: subject_label.trim().to_string(),
                date: iso(date.as_ref()?),
            },
        })
    }

    /// Short tag used in export filenames so repeated exports of
    /// different filters never collide.
    pub fn filename_tag(&self) -> String {
        match self {
            FilterCriteria::DateRange {
                start,
                end,
                class_label,
            } => {
                let s = start.map(|d| iso(&d)).unwrap_or_default();
                let e = end.map(|d| iso(&d)).unwrap_or_default();
                match class_label {
                    Some(k) => format!("{}_{}_{}", slug(k), s, e),
                    None => format!("{s}_{e}"),
                }
            }
            FilterCriteria::ClassSubject {
                class_label,
                subject_label,
                date,
            } => format!(
                "{}_{}_{}",
                slug(class_label),
                slug(subject_label),
                date.map(|d| iso(&d)).unwrap_or_default()
            ),
        }
    }
}

fn iso(d: &NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

fn slug(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Lenient date parsing for form inputs: invalid text is treated as
/// "not filled in yet", never an error.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
