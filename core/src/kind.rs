//! Kinds of exceptions the bridge knows how to raise.

use std::fmt::Display;
use std::fmt::Formatter;
use std::io::ErrorKind;

/// Category of a Java exception raised from native code.
///
/// Every kind maps to exactly one class that is expected to be loadable by the JVM hosting this
/// library.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ExceptionKind {
    NullArgument,
    IllegalArgument,
    IOFailure,
    FileNotFound,

    /// Generic failure of a native operation, defined by the Java side of Zimbra.
    OperationFailed,
}

impl ExceptionKind {
    pub const ALL: [ExceptionKind; 5] = [
        ExceptionKind::NullArgument,
        ExceptionKind::IllegalArgument,
        ExceptionKind::IOFailure,
        ExceptionKind::FileNotFound,
        ExceptionKind::OperationFailed,
    ];

    /// Binary name of the exception class, in the slash-separated form `FindClass` expects.
    pub fn class_name(self) -> &'static str {
        match self {
            ExceptionKind::NullArgument => "java/lang/NullPointerException",
            ExceptionKind::IllegalArgument => "java/lang/IllegalArgumentException",
            ExceptionKind::IOFailure => "java/io/IOException",
            ExceptionKind::FileNotFound => "java/io/FileNotFoundException",
            ExceptionKind::OperationFailed => "com/zimbra/znative/OperationFailedException",
        }
    }

    /// Picks the kind a failed file system or OS call should surface as.
    pub fn for_io_error(err: &std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => ExceptionKind::FileNotFound,
            ErrorKind::InvalidInput => ExceptionKind::IllegalArgument,
            _ => ExceptionKind::IOFailure,
        }
    }
}

/// Renders the class name the way Java prints it, e.g. `java.io.IOException`.
impl Display for ExceptionKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.write_str(&self.class_name().replace('/', "."))
    }
}
