#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("site ({row}, {col}) out of range for a {size}x{size} grid")]
    SiteOutOfRange { row: usize, col: usize, size: usize },
}

impl Error {
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Error::IndexOutOfRange { .. } | Error::SiteOutOfRange { .. }
        )
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_kinds() {
        assert!(Error::IndexOutOfRange { index: 4, len: 4 }.is_out_of_range());
        assert!(Error::SiteOutOfRange {
            row: 0,
            col: 3,
            size: 3
        }
        .is_out_of_range());
        assert!(!Error::invalid("n", "must be positive").is_out_of_range());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::SiteOutOfRange {
                row: 5,
                col: 1,
                size: 3
            }
            .to_string(),
            "site (5, 1) out of range for a 3x3 grid"
        );
        assert_eq!(
            Error::invalid("p", "must lie in [0, 1]").to_string(),
            "invalid argument `p`: must lie in [0, 1]"
        );
    }
}
