//! Miscellaneous utilities that make our lives easier.

use crate::ExceptionKind;
use crate::Runtime;
use std::fmt::Display;

pub trait Raise<T, E> {
    /// Raises `kind` on `runtime` with the text of the error, if any.
    ///
    /// Returns the value in `Ok(x)`, which native functions usually turn into their return value,
    /// or [None] after having raised the exception.
    fn or_raise<R: Runtime + ?Sized>(self, runtime: &R, kind: ExceptionKind) -> Option<T>;
}

impl<T, E: Display> Raise<T, E> for Result<T, E> {
    fn or_raise<R: Runtime + ?Sized>(self, runtime: &R, kind: ExceptionKind) -> Option<T> {
        match self {
            Ok(it) => Some(it),
            Err(err) => {
                crate::raise(runtime, kind, &err.to_string());
                None
            }
        }
    }
}

pub trait RaiseIo<T> {
    /// Same as [Raise::or_raise] but picks the kind with [ExceptionKind::for_io_error].
    fn or_raise_io<R: Runtime + ?Sized>(self, runtime: &R) -> Option<T>;
}

impl<T> RaiseIo<T> for std::io::Result<T> {
    fn or_raise_io<R: Runtime + ?Sized>(self, runtime: &R) -> Option<T> {
        self.map_err(|err| crate::raise_io_error(runtime, &err)).ok()
    }
}
