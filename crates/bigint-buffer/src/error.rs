/// All errors that can occur while converting between buffers and integers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value outside the unsigned domain was passed to an encoder.
    InvalidArgument(&'static str),
    /// The accelerated conversion path could not be loaded.
    BackendUnavailable(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidArgument(why) => write!(f, "invalid argument: {why}"),
            Error::BackendUnavailable(why) => write!(f, "backend unavailable: {why}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
