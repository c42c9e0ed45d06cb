//! Blocking user notification (the page's modal alert).

#[cfg_attr(test, mockall::automock)]
pub trait NotifierPort: Send + Sync {
    /// Show `message` in a blocking modal
    fn alert(&self, message: &str);
}
