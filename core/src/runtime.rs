//! The host side of the bridge.

use jni::objects::JClass;
use jni::objects::JThrowable;
use jni::JNIEnv;
use std::fmt::Display;

/// Facilities of a managed runtime needed to raise an exception in it.
///
/// [JNIEnv] is the real implementation. The trait exists so the bridge can be driven by anything
/// that keeps a class registry and a pending-exception slot.
///
/// As with JNI, class lookups must not be made while an exception is pending.
pub trait Runtime {
    /// Resolved class, only meaningful to the runtime that produced it.
    type Class;

    /// Exception instance taken out of the pending slot.
    type Throwable;

    type Error: Display;

    /// Takes the pending exception out of the slot, leaving it empty.
    fn take_exception(&self) -> Result<Option<Self::Throwable>, Self::Error>;

    /// Empties the pending slot.
    fn clear_exception(&self) -> Result<(), Self::Error>;

    /// Makes `throwable` the pending exception again.
    fn rethrow(&self, throwable: Self::Throwable) -> Result<(), Self::Error>;

    /// Resolves a slash-separated binary class name.
    ///
    /// A failed lookup leaves the runtime's own class-loading error pending.
    fn find_class(&self, name: &str) -> Result<Self::Class, Self::Error>;

    /// Constructs an instance of `class` with `message` and makes it the pending exception.
    fn throw_new(&self, class: Self::Class, message: &str) -> Result<(), Self::Error>;
}

impl<'a> Runtime for JNIEnv<'a> {
    type Class = JClass<'a>;
    type Throwable = JThrowable<'a>;
    type Error = jni::errors::Error;

    fn take_exception(&self) -> jni::errors::Result<Option<JThrowable<'a>>> {
        if !self.exception_check()? {
            return Ok(None);
        }
        let throwable = self.exception_occurred()?;
        self.exception_clear()?;
        Ok(Some(throwable))
    }

    fn clear_exception(&self) -> jni::errors::Result<()> {
        self.exception_clear()
    }

    fn rethrow(&self, throwable: JThrowable<'a>) -> jni::errors::Result<()> {
        self.throw(throwable)
    }

    fn find_class(&self, name: &str) -> jni::errors::Result<JClass<'a>> {
        JNIEnv::find_class(self, name)
    }

    fn throw_new(&self, class: JClass<'a>, message: &str) -> jni::errors::Result<()> {
        JNIEnv::throw_new(self, class, message)
    }
}
