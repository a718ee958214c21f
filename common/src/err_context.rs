/// A module for providing error context

/// An error (source), and some human readable context.
pub struct ErrorContext<E> {
    pub context: String,
    pub source: E,
}

/// Creating a trait to extend an API by adding a context method.
pub trait ErrorContextExt<T, E> {
    fn context<C: AsRef<str>>(self, c: C) -> Result<T, ErrorContext<E>>;
}

impl<T, E> ErrorContextExt<T, E> for Result<T, E> {
    fn context<C: AsRef<str>>(self, c: C) -> Result<T, ErrorContext<E>> {
        self.map_err(|source| ErrorContext {
            context: c.as_ref().to_string(),
            source,
        })
    }
}
