//! In-memory [Runtime] for unit tests.

use crate::ExceptionKind;
use crate::Runtime;
use std::cell::RefCell;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pending {
    pub class: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum MockError {
    #[error("Class {0} not found")]
    ClassNotFound(String),

    #[error("Class lookup while an exception is pending")]
    ExceptionPending,
}

/// Class registry plus a single pending-exception slot, behaving like a JVM does through JNI.
pub struct MockRuntime {
    classes: HashSet<String>,
    pending: RefCell<Option<Pending>>,
}

impl MockRuntime {
    /// Every class the bridge can ask for is loadable.
    pub fn new() -> Self {
        let classes = ExceptionKind::ALL
            .iter()
            .map(|kind| kind.class_name().to_string())
            .collect();
        Self {
            classes,
            pending: Default::default(),
        }
    }

    pub fn without(kind: ExceptionKind) -> Self {
        let mut runtime = Self::new();
        runtime.classes.remove(kind.class_name());
        runtime
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending.borrow().clone()
    }

    pub fn set_pending(&self, class: &str, message: &str) {
        self.pending.replace(Some(Pending {
            class: class.into(),
            message: message.into(),
        }));
    }
}

impl Runtime for MockRuntime {
    type Class = String;
    type Throwable = Pending;
    type Error = MockError;

    fn take_exception(&self) -> Result<Option<Pending>, MockError> {
        Ok(self.pending.replace(None))
    }

    fn clear_exception(&self) -> Result<(), MockError> {
        self.pending.replace(None);
        Ok(())
    }

    fn rethrow(&self, throwable: Pending) -> Result<(), MockError> {
        self.pending.replace(Some(throwable));
        Ok(())
    }

    fn find_class(&self, name: &str) -> Result<String, MockError> {
        if self.pending.borrow().is_some() {
            return Err(MockError::ExceptionPending);
        }
        match self.classes.get(name) {
            Some(class) => Ok(class.clone()),
            None => {
                self.set_pending("java/lang/NoClassDefFoundError", name);
                Err(MockError::ClassNotFound(name.into()))
            }
        }
    }

    fn throw_new(&self, class: String, message: &str) -> Result<(), MockError> {
        self.set_pending(&class, message);
        Ok(())
    }
}
