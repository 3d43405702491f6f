//! The capabilities the resolver borrows from the host runtime.
//!
//! [`Host`] is the seam between the classification logic and whatever
//! actually owns the values. [`JniHost`] implements it on top of a JNI
//! environment; tests substitute a mock.

use jni::sys::{jlong, jobject, jsize};
use tracing::trace;

use crate::env::{JniEnv, LocalRef};
use crate::handle;

/// Type lookup, instance check and array length, as provided by the host.
pub trait Host {
    /// A non-null handle to a host value. Absence is expressed as `None` at
    /// the resolver level, never as a special `Value`.
    type Value: Copy;

    /// A resolved runtime type. Dropped once the check against it is done.
    type Type;

    /// Resolves a type signature to a loaded type, or `None` if the host
    /// cannot resolve it.
    fn lookup_type(&self, signature: &str) -> Option<Self::Type>;

    /// Runtime instance-of check.
    fn is_instance(&self, value: Self::Value, ty: &Self::Type) -> bool;

    /// Element count of a value already known to be an array, or `None` if
    /// the host failed to read it.
    fn array_element_count(&self, value: Self::Value) -> Option<jsize>;
}

/// [`Host`] backed by the JNI environment of the calling thread.
pub struct JniHost<'env> {
    env: &'env JniEnv,
}

impl<'env> JniHost<'env> {
    pub fn new(env: &'env JniEnv) -> Self {
        JniHost { env }
    }

    /// Wraps a raw object reference, mapping null to `None`.
    pub fn value(obj: jobject) -> Option<jobject> {
        if obj.is_null() {
            None
        } else {
            Some(obj)
        }
    }

    /// Decodes a `long`-encoded reference, mapping `0` to `None`.
    pub fn value_at(address: jlong) -> Option<jobject> {
        JniHost::value(handle::address_to_object(address))
    }
}

impl<'env> Host for JniHost<'env> {
    type Value = jobject;
    type Type = LocalRef<'env>;

    fn lookup_type(&self, signature: &str) -> Option<LocalRef<'env>> {
        let cls = self.env.find_class(signature);
        if cls.is_none() {
            trace!(signature, "FindClass failed");
        }
        cls.map(|cls| LocalRef::new(self.env, cls))
    }

    fn is_instance(&self, value: jobject, ty: &LocalRef<'env>) -> bool {
        self.env.is_instance_of(value, ty.get())
    }

    fn array_element_count(&self, value: jobject) -> Option<jsize> {
        let len = self.env.get_array_length(value);
        if self.env.exception_check() {
            self.env.exception_clear();
            return None;
        }
        len
    }
}
