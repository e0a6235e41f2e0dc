/// Errors raised by the form state when user input is rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Date input is not `DD.MM.YYYY` or not a real calendar day
    InvalidDate(String),
    /// A photo batch would exceed the attachment limit
    PhotoLimit {
        max: usize,
        current: usize,
        requested: usize,
    },
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::InvalidDate(input) => write!(f, "Invalid date: '{}'", input),
            FormError::PhotoLimit {
                max,
                current,
                requested,
            } => write!(
                f,
                "Photo limit exceeded: {} selected, {} requested, max {}",
                current, requested, max
            ),
        }
    }
}

impl std::error::Error for FormError {}
