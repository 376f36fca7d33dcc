//! Error types for collection operations.
//!
//! This module provides the error surface shared by every container:
//! operations that require a non-empty container (`head`, `tail`, `reduce`)
//! report [`EmptyContainerError`], and dynamic argument boundaries are
//! documented by [`MissingArgumentError`]. Both kinds are unified under
//! [`CollectionError`].
//!
//! Errors are returned synchronously via `Result`; the library never logs,
//! retries, or recovers internally, and no operation partially builds a
//! container before failing.

/// Represents an access to an element of an empty container.
///
/// Raised by `head()` and `tail()` on an empty list, map, or stream, and by
/// `reduce()` on any empty container (a seedless reduction has no value to
/// start from).
///
/// # Examples
///
/// ```rust
/// use immutars::error::EmptyContainerError;
///
/// let error = EmptyContainerError {
///     operation: "head",
///     container: "list",
/// };
/// assert_eq!(format!("{error}"), "head of empty list");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyContainerError {
    /// The operation that required a non-empty container.
    pub operation: &'static str,
    /// The container kind the operation was invoked on.
    pub container: &'static str,
}

impl std::fmt::Display for EmptyContainerError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} of empty {}", self.operation, self.container)
    }
}

impl std::error::Error for EmptyContainerError {}

/// Represents an operation invoked without a required argument.
///
/// In this crate the lookup signatures make the omission unrepresentable
/// (calling `Map::get` without a key does not compile), so no library code
/// path constructs this kind at runtime. It remains part of the taxonomy as
/// the documented contract of that boundary for dynamic callers layered on
/// top of the containers.
///
/// # Examples
///
/// ```rust
/// use immutars::error::MissingArgumentError;
///
/// let error = MissingArgumentError {
///     operation: "get",
///     argument: "key",
/// };
/// assert_eq!(format!("{error}"), "get requires a key argument");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingArgumentError {
    /// The operation that was invoked.
    pub operation: &'static str,
    /// The name of the absent argument.
    pub argument: &'static str,
}

impl std::fmt::Display for MissingArgumentError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{} requires a {} argument",
            self.operation, self.argument
        )
    }
}

impl std::error::Error for MissingArgumentError {}

/// Represents errors that can occur when operating on a container.
///
/// This enum provides a unified error type for the whole collection surface.
///
/// # Examples
///
/// ```rust
/// use immutars::error::CollectionError;
///
/// let error = CollectionError::empty_container("reduce", "set");
/// assert_eq!(format!("{error}"), "reduce of empty set");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// An element of an empty container was requested.
    EmptyContainer(EmptyContainerError),
    /// A required argument was absent at a dynamic boundary.
    MissingArgument(MissingArgumentError),
}

impl CollectionError {
    /// Creates an [`EmptyContainerError`] wrapped in the unified type.
    #[inline]
    #[must_use]
    pub const fn empty_container(operation: &'static str, container: &'static str) -> Self {
        Self::EmptyContainer(EmptyContainerError {
            operation,
            container,
        })
    }

    /// Creates a [`MissingArgumentError`] wrapped in the unified type.
    #[inline]
    #[must_use]
    pub const fn missing_argument(operation: &'static str, argument: &'static str) -> Self {
        Self::MissingArgument(MissingArgumentError {
            operation,
            argument,
        })
    }
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContainer(error) => write!(formatter, "{error}"),
            Self::MissingArgument(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for CollectionError {}

impl From<EmptyContainerError> for CollectionError {
    fn from(error: EmptyContainerError) -> Self {
        Self::EmptyContainer(error)
    }
}

impl From<MissingArgumentError> for CollectionError {
    fn from(error: MissingArgumentError) -> Self {
        Self::MissingArgument(error)
    }
}
