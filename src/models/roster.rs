/// Ordered list of selectable class labels.
///
/// The roster is the source of truth for class dropdowns. From the core's
/// point of view it is append-only: new classes are created through the
/// API client and picked up on the next fetch, never edited locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassRoster {
    labels: Vec<String>,
}

impl ClassRoster {
    pub fn from_labels(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// The class the portal pre-selects when none is chosen yet:
    /// the first entry in server order.
    pub fn default_selection(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}
