//! # HealthHub Native Library
//!
//! JNI entry points for the HealthHub Android application, loaded with
//! `System.loadLibrary("healthhub_native")`.
//!
//! Each `extern "system"` function is a thin shim: it makes sure logging is
//! initialized, delegates to [`crate::core`], and marshals the result into JNI types.

pub mod core;
pub mod diagnostics;

use jni::objects::JObject;
use jni::sys::{jint, jstring, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use std::os::raw::c_void;

use crate::diagnostics::logging::{self, FacadeSink, LOG_TAG};

/// Called by the runtime when the library is loaded.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    logging::init();
    JNI_VERSION_1_6
}

/// `org.hwu.care.healthub.NativeLib.getVersion(): String`
#[no_mangle]
pub extern "system" fn Java_org_hwu_care_healthub_NativeLib_getVersion<'local>(
    env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    logging::init();
    let version = crate::core::version::native_version(&FacadeSink);

    match env.new_string(version) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            // The JVM has an exception pending; it is raised once we return.
            log::error!(target: LOG_TAG, "Failed to allocate version string: {:?}", e);
            std::ptr::null_mut()
        }
    }
}
