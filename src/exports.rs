//! Symbols the JVM binds to.
//!
//! `cc.squirreljme.jvm.Assembly` declares two `arrayLength` natives, one
//! taking an `Object` and one taking the object packed into a `long`. The
//! JVM finds them by their mangled names, so no `RegisterNatives` call is
//! needed. Both return the element count, or `-1`.
//!
//! A panic inside a native would unwind into the JVM; each body, the load
//! hook included, runs under `catch_unwind` and reports a fallback instead.

use std::ffi::c_void;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use jni::sys::{jclass, jint, jlong, jobject, JavaVM, JNIEnv, JNI_VERSION_1_6};
use tracing::info;

use crate::config::HookConfig;
use crate::env::JniEnv;
use crate::host::JniHost;
use crate::logging;
use crate::resolver::{self, LengthResult};

/// Printed on stderr when the library is loaded.
pub const BANNER: &str = "SquirrelJME Hook Loaded";

/// JNI version the library requires.
///
/// The hosted VM is a Java ME (Java 7 class) system, so nothing newer than
/// 1.6 is relied upon.
pub const REQUIRED_JNI_VERSION: jint = JNI_VERSION_1_6;

/// Runs the load-time side effects: configuration, tracing and the banner.
pub fn on_load() -> jint {
    let config = match HookConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = writeln!(io::stderr(), "squirreljme-hook: {e}; using defaults");
            HookConfig::default()
        }
    };

    logging::init_tracing(&config);

    if config.banner {
        let _ = writeln!(io::stderr(), "{BANNER}");
    }
    info!("hook loaded, requires JNI {REQUIRED_JNI_VERSION:#x}");

    REQUIRED_JNI_VERSION
}

/// Runs `f`, returning `fallback` instead of unwinding into the JVM.
fn guarded<T, F>(fallback: jint, f: F) -> jint
where
    T: Into<jint>,
    F: FnOnce() -> T,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result.into(),
        Err(_) => {
            let _ = writeln!(io::stderr(), "squirreljme-hook: panic in native call");
            fallback
        }
    }
}

/// Called by the JVM when the library is loaded.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "system" fn JNI_OnLoad(_vm: *mut JavaVM, _reserved: *mut c_void) -> jint {
    guarded(REQUIRED_JNI_VERSION, on_load)
}

/// `static native int arrayLength(Object)`
///
/// # Safety
///
/// Must be called by the JVM (or with a valid environment for the current
/// thread and a valid local or global reference).
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "system" fn Java_cc_squirreljme_jvm_Assembly_arrayLength__Ljava_lang_Object_2(
    env: *mut JNIEnv,
    _class: jclass,
    object: jobject,
) -> jint {
    guarded(LengthResult::INVALID, || {
        let Some(env) = (unsafe { JniEnv::from_raw(env) }) else {
            return LengthResult::Invalid;
        };
        resolver::resolve(&JniHost::new(&env), JniHost::value(object))
    })
}

/// `static native int arrayLength(long)`
///
/// # Safety
///
/// As for the `Object` overload; a non-zero `object` must be the encoding
/// of a valid reference.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "system" fn Java_cc_squirreljme_jvm_Assembly_arrayLength__J(
    env: *mut JNIEnv,
    _class: jclass,
    object: jlong,
) -> jint {
    guarded(LengthResult::INVALID, || {
        let Some(env) = (unsafe { JniEnv::from_raw(env) }) else {
            return LengthResult::Invalid;
        };
        resolver::resolve_address(&JniHost::new(&env), object, JniHost::value_at)
    })
}
