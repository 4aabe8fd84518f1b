use thiserror::Error;

use crate::widgets::ButtonId;

/// Internal consistency failures of a page view.
///
/// None of these are fatal to the host: the event path logs them and drops
/// the offending interaction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageViewError {
    /// A tap named a button that is not in the current button list
    #[error("{0} is not part of the button bar")]
    UnknownButton(ButtonId),

    /// A page index outside `0..count`
    #[error("page index {index} out of range for {count} page(s)")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of pages built
        count: usize,
    },
}
