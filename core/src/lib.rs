//! Raising Java exceptions from native code.
//!
//! Native functions called through JNI report failures by leaving an exception pending on their
//! `JNIEnv` right before returning. The JVM checks for it once control is back and starts
//! unwinding on the Java side. This crate does the "leave an exception pending" part for the
//! handful of exception classes Zimbra's native code uses.

mod kind;
mod runtime;
pub mod util;

#[cfg(test)]
mod mock_runtime;

pub use kind::ExceptionKind;
pub use runtime::Runtime;

use std::error::Error;

/// Makes a new exception of `kind` carrying `message` pending on `runtime`.
///
/// If the exception class cannot be found, nothing happens. A failed lookup of such a basic class
/// means the runtime is already broken and has most likely recorded a class-loading error of its
/// own, which must stay the one the caller sees. An exception already pending before the call is
/// kept in that case, and replaced otherwise.
pub fn raise<R: Runtime + ?Sized>(runtime: &R, kind: ExceptionKind, message: &str) {
    let earlier = match runtime.take_exception() {
        Ok(earlier) => earlier,
        Err(err) => {
            log::debug!("Not raising {}, pending exception unreadable: {}", kind, err);
            return;
        }
    };
    let class = match runtime.find_class(kind.class_name()) {
        Ok(class) => class,
        Err(err) => {
            log::debug!("Not raising {}, class lookup failed: {}", kind, err);
            restore(runtime, earlier);
            return;
        }
    };
    if let Err(err) = runtime.throw_new(class, message) {
        log::debug!("Failed to raise {}: {}", kind, err);
        restore(runtime, earlier);
    }
}

/// Puts back an exception that was pending before [raise] started.
fn restore<R: Runtime + ?Sized>(runtime: &R, earlier: Option<R::Throwable>) {
    if let Some(earlier) = earlier {
        let result = runtime
            .clear_exception()
            .and_then(|_| runtime.rethrow(earlier));
        if let Err(err) = result {
            log::debug!("Failed to restore the earlier exception: {}", err);
        }
    }
}

/// Raises a `NullPointerException`.
pub fn throw_null_argument<R: Runtime + ?Sized>(runtime: &R, message: &str) {
    raise(runtime, ExceptionKind::NullArgument, message)
}

/// Raises an `IllegalArgumentException`.
pub fn throw_illegal_argument<R: Runtime + ?Sized>(runtime: &R, message: &str) {
    raise(runtime, ExceptionKind::IllegalArgument, message)
}

/// Raises an `IOException`.
pub fn throw_io_failure<R: Runtime + ?Sized>(runtime: &R, message: &str) {
    raise(runtime, ExceptionKind::IOFailure, message)
}

/// Raises a `FileNotFoundException`.
pub fn throw_file_not_found<R: Runtime + ?Sized>(runtime: &R, message: &str) {
    raise(runtime, ExceptionKind::FileNotFound, message)
}

/// Raises Zimbra's `OperationFailedException`.
pub fn throw_operation_failed<R: Runtime + ?Sized>(runtime: &R, message: &str) {
    raise(runtime, ExceptionKind::OperationFailed, message)
}

/// Raises the exception matching a failed I/O operation, see [ExceptionKind::for_io_error].
pub fn raise_io_error<R: Runtime + ?Sized>(runtime: &R, err: &std::io::Error) {
    raise(runtime, ExceptionKind::for_io_error(err), &err.to_string())
}

/// Raises an `OperationFailedException` describing a Rust error.
pub fn raise_error<R: Runtime + ?Sized>(runtime: &R, err: &impl Error) {
    throw_operation_failed(runtime, &err.to_string())
}
