//! C and JNI entry points of the native library.
//!
//! Other native code gets a `JNIEnv*` and a C string and wants an exception pending on return,
//! which is what the `znative_throw_*` functions do.

use jni::sys;
use jni::JNIEnv;
use std::borrow::Cow;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::os::raw::c_void;
use thiserror::Error;

/// Error when a raw pointer handed over by native code is unusable.
#[derive(Error, Debug)]
#[error("Invalid JNI environment")]
pub enum BoundaryError {
    Environment(#[from] jni::errors::Error),
}

unsafe fn enter<'a>(env: *mut sys::JNIEnv) -> Result<JNIEnv<'a>, BoundaryError> {
    Ok(JNIEnv::from_raw(env)?)
}

/// Reads a NUL-terminated message. A null pointer reads as an empty message.
unsafe fn message<'a>(raw: *const c_char) -> Cow<'a, str> {
    if raw.is_null() {
        Cow::Borrowed("")
    } else {
        CStr::from_ptr(raw).to_string_lossy()
    }
}

unsafe fn throw(env: *mut sys::JNIEnv, msg: *const c_char, action: impl FnOnce(&JNIEnv, &str)) {
    match enter(env) {
        Ok(env) => action(&env, &*message(msg)),
        Err(err) => log::error!("Dropping an exception to raise: {}", err),
    }
}

#[no_mangle]
pub unsafe extern "C" fn znative_throw_npe(env: *mut sys::JNIEnv, msg: *const c_char) {
    throw(env, msg, |env, msg| znative::throw_null_argument(env, msg))
}

#[no_mangle]
pub unsafe extern "C" fn znative_throw_iae(env: *mut sys::JNIEnv, msg: *const c_char) {
    throw(env, msg, |env, msg| znative::throw_illegal_argument(env, msg))
}

#[no_mangle]
pub unsafe extern "C" fn znative_throw_ioe(env: *mut sys::JNIEnv, msg: *const c_char) {
    throw(env, msg, |env, msg| znative::throw_io_failure(env, msg))
}

#[no_mangle]
pub unsafe extern "C" fn znative_throw_fnfe(env: *mut sys::JNIEnv, msg: *const c_char) {
    throw(env, msg, |env, msg| znative::throw_file_not_found(env, msg))
}

#[no_mangle]
pub unsafe extern "C" fn znative_throw_ofe(env: *mut sys::JNIEnv, msg: *const c_char) {
    throw(env, msg, |env, msg| znative::throw_operation_failed(env, msg))
}

/// Initializes the whole library when the JVM loads it through `System.loadLibrary`.
#[no_mangle]
pub unsafe extern "system" fn JNI_OnLoad(_vm: *mut sys::JavaVM, _: *mut c_void) -> sys::jint {
    init_logging();
    log::debug!("Native library loaded");
    sys::JNI_VERSION_1_6
}

#[cfg(target_os = "android")]
fn init_logging() {
    use android_logger::Config;
    use log::Level;

    let config = Config::default().with_min_level(Level::max());
    android_logger::init_once(config);
}

#[cfg(not(target_os = "android"))]
fn init_logging() {
    // Another logger may already be installed by the embedding process.
    let _ = env_logger::try_init();
}
