use std::error::Error;

/// Bridges the `try_` methods of the collections to their panicking counterparts.
pub(crate) trait ResultExtension<T, E: Error> {
    /// Returns the [`Ok`] value, or panics with the [`Display`](std::fmt::Display) message of the
    /// error so that the panic reads the same as the [`Err`] the `try_` method would return. The
    /// panic location is attributed to the caller of the collection method.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        self.unwrap_or_else(|error| panic!("{error}"))
    }
}
