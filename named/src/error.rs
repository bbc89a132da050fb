use core::fmt::{Debug, Display};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum ArgumentError<E> {
    /// The payload of the argument `name` could not be converted.
    Conversion { name: &'static str, error: E },
}

impl<E> ArgumentError<E> {
    pub fn name(&self) -> &'static str {
        match self {
            ArgumentError::Conversion { name, .. } => *name,
        }
    }
}

impl<E: Debug> Display for ArgumentError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(feature = "std")]
impl<E: Debug> std::error::Error for ArgumentError<E> {}
