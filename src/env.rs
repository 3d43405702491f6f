//! Safe wrapper around the raw JNI environment.
//!
//! Only the handful of JNI functions the resolver needs are wrapped. Each
//! method reads the function pointer out of the `JNINativeInterface_`
//! table and calls it with the environment pointer, turning null returns
//! and missing table entries into `None`/`false`.
//!
//! # Example
//!
//! ```rust,ignore
//! use squirreljme_hook::env::{JniEnv, LocalRef};
//!
//! fn is_int_array(raw: *mut jni::sys::JNIEnv, obj: jni::sys::jobject) -> bool {
//!     let Some(env) = (unsafe { JniEnv::from_raw(raw) }) else { return false };
//!     match env.find_class("[I") {
//!         Some(cls) => {
//!             let cls = LocalRef::new(&env, cls);
//!             env.is_instance_of(obj, cls.get())
//!         }
//!         None => false,
//!     }
//! }
//! ```

use std::ffi::CString;

use jni::sys;

/// Safe wrapper around a JNI environment pointer.
///
/// # Thread Safety
///
/// A `JniEnv` is tied to the thread that received it from the JVM and
/// cannot be sent across threads.
pub struct JniEnv {
    env: *mut sys::JNIEnv,
}

impl JniEnv {
    /// Creates a wrapper from a raw pointer. Returns `None` for null.
    ///
    /// # Safety
    ///
    /// A non-null pointer must be a valid JNI environment belonging to the
    /// current thread, and must stay valid for the life of the wrapper.
    pub unsafe fn from_raw(env: *mut sys::JNIEnv) -> Option<Self> {
        if env.is_null() || (*env).is_null() {
            None
        } else {
            Some(JniEnv { env })
        }
    }

    fn table(&self) -> &sys::JNINativeInterface_ {
        // Checked non-null in from_raw.
        unsafe { &**self.env }
    }

    // =========================================================================
    // Classes
    // =========================================================================

    /// Finds a class by internal name or array signature (`java/lang/String`,
    /// `[I`, `[Ljava/lang/Object;`).
    ///
    /// A failed lookup leaves `NoClassDefFoundError` pending in the JVM; it is
    /// cleared here so the caller can keep making JNI calls.
    pub fn find_class(&self, name: &str) -> Option<sys::jclass> {
        let c_name = CString::new(name).ok()?;
        let find_class = self.table().FindClass?;
        let cls = unsafe { find_class(self.env, c_name.as_ptr()) };
        if cls.is_null() {
            if self.exception_check() {
                self.exception_clear();
            }
            None
        } else {
            Some(cls)
        }
    }

    /// Checks if an object is an instance of a class.
    pub fn is_instance_of(&self, obj: sys::jobject, cls: sys::jclass) -> bool {
        match self.table().IsInstanceOf {
            Some(is_instance_of) => unsafe { is_instance_of(self.env, obj, cls) != sys::JNI_FALSE },
            None => false,
        }
    }

    // =========================================================================
    // Arrays
    // =========================================================================

    /// Gets the length of an array.
    ///
    /// The reference must be an array; the JVM does not check this.
    pub fn get_array_length(&self, array: sys::jarray) -> Option<sys::jsize> {
        let get_array_length = self.table().GetArrayLength?;
        Some(unsafe { get_array_length(self.env, array) })
    }

    // =========================================================================
    // Exceptions
    // =========================================================================

    /// Checks if an exception is pending.
    pub fn exception_check(&self) -> bool {
        match self.table().ExceptionCheck {
            Some(exception_check) => unsafe { exception_check(self.env) != sys::JNI_FALSE },
            None => false,
        }
    }

    /// Clears any pending exception.
    pub fn exception_clear(&self) {
        if let Some(exception_clear) = self.table().ExceptionClear {
            unsafe { exception_clear(self.env) };
        }
    }

    // =========================================================================
    // References
    // =========================================================================

    /// Deletes a local reference.
    pub fn delete_local_ref(&self, obj: sys::jobject) {
        if let Some(delete_local_ref) = self.table().DeleteLocalRef {
            unsafe { delete_local_ref(self.env, obj) };
        }
    }
}

/// A guard that deletes a local reference when dropped.
///
/// Native methods that probe many classes would otherwise pile up local
/// references until the native frame returns.
pub struct LocalRef<'a> {
    env: &'a JniEnv,
    obj: sys::jobject,
}

impl<'a> LocalRef<'a> {
    /// Creates a new LocalRef guard.
    pub fn new(env: &'a JniEnv, obj: sys::jobject) -> Self {
        LocalRef { env, obj }
    }

    /// Returns the underlying reference.
    pub fn get(&self) -> sys::jobject {
        self.obj
    }
}

impl Drop for LocalRef<'_> {
    fn drop(&mut self) {
        if !self.obj.is_null() {
            self.env.delete_local_ref(self.obj);
        }
    }
}
