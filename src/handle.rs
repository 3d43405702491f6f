//! Conversion between object references and their `long` encoding.
//!
//! The `arrayLength(J)` native receives a reference that Java code packed
//! into a `long`. The pointer travels through `usize`, so on 32-bit
//! targets the upper half of the `long` is dropped.

use jni::sys::{jlong, jobject};

/// Decodes a `long`-encoded reference. `0` decodes to null.
pub fn address_to_object(address: jlong) -> jobject {
    address as usize as jobject
}

/// Encodes a reference as a `long`. Null encodes to `0`.
pub fn object_to_address(obj: jobject) -> jlong {
    obj as usize as jlong
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_null() {
        assert!(address_to_object(0).is_null());
        assert_eq!(object_to_address(std::ptr::null_mut()), 0);
    }

    #[test]
    fn encoding_preserves_the_pointer() {
        let mut slot = 0u64;
        let obj = &mut slot as *mut u64 as jobject;
        assert_eq!(address_to_object(object_to_address(obj)), obj);
    }
}
