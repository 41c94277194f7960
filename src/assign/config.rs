//! Allocation configuration.
//!
//! [`AssignConfig`] holds the parameters that control the greedy
//! assignment loop.

/// Configuration for the load-balanced allocator.
///
/// # Defaults
///
/// ```
/// use review_match::assign::AssignConfig;
///
/// let config = AssignConfig::default();
/// assert_eq!(config.reviews_per_paper, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use review_match::assign::AssignConfig;
///
/// let config = AssignConfig::default().with_reviews_per_paper(2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AssignConfig {
    /// Target number of reviewers per paper.
    ///
    /// The allocator picks up to this many reviewers for each paper; a
    /// paper receives fewer when not enough conflict-free, under-capacity
    /// reviewers remain. Typical conference setting: 3.
    pub reviews_per_paper: usize,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            reviews_per_paper: 3,
        }
    }
}

impl AssignConfig {
    /// Sets the target number of reviewers per paper.
    pub fn with_reviews_per_paper(mut self, n: usize) -> Self {
        self.reviews_per_paper = n;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.reviews_per_paper == 0 {
            return Err("reviews_per_paper must be at least 1".into());
        }
        Ok(())
    }
}
