use std::cell::Cell;

use squirreljme_hook::{
    classify, resolve, resolve_address, ArrayKind, Host, LengthResult, ResolveError,
};

/// A tiny object heap: values are indices into `objects`.
struct Heap {
    objects: Vec<Object>,
    /// Signatures whose classes "failed to load".
    unloadable: Vec<&'static str>,
    queries: Cell<usize>,
}

enum Object {
    Array { kind: ArrayKind, len: i32 },
    Instance { class: &'static str },
}

impl Heap {
    fn new() -> Self {
        Heap { objects: Vec::new(), unloadable: Vec::new(), queries: Cell::new(0) }
    }

    fn alloc(&mut self, object: Object) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    fn array(&mut self, kind: ArrayKind, len: i32) -> usize {
        self.alloc(Object::Array { kind, len })
    }

    /// Addresses are heap index plus one; `0` is null.
    fn address_of(handle: Option<usize>) -> i64 {
        handle.map_or(0, |index| index as i64 + 1)
    }

    fn decode(&self, address: i64) -> Option<usize> {
        let index = usize::try_from(address).ok()?.checked_sub(1)?;
        (index < self.objects.len()).then_some(index)
    }
}

impl Host for Heap {
    type Value = usize;
    type Type = &'static str;

    fn lookup_type(&self, signature: &str) -> Option<&'static str> {
        let kind = ArrayKind::from_signature(signature)?;
        if self.unloadable.contains(&kind.signature()) {
            None
        } else {
            Some(kind.signature())
        }
    }

    fn is_instance(&self, value: usize, ty: &&'static str) -> bool {
        self.queries.set(self.queries.get() + 1);
        match &self.objects[value] {
            Object::Array { kind, .. } => kind.signature() == *ty,
            Object::Instance { .. } => false,
        }
    }

    fn array_element_count(&self, value: usize) -> Option<i32> {
        match &self.objects[value] {
            Object::Array { len, .. } => Some(*len),
            Object::Instance { class } => panic!("{class} is not an array"),
        }
    }
}

#[test]
fn lengths_of_all_kinds() {
    let mut heap = Heap::new();
    let mut cases = Vec::new();
    for kind in ArrayKind::ALL {
        for len in [0, 1, i32::MAX] {
            cases.push((heap.array(kind, len), len));
        }
    }

    for (handle, len) in cases {
        assert_eq!(resolve(&heap, Some(handle)), LengthResult::Length(len));
    }
}

#[test]
fn scenarios() {
    let mut heap = Heap::new();
    let ints = heap.array(ArrayKind::Int, 5);
    let objects = heap.array(ArrayKind::Object, 0);
    let plain = heap.alloc(Object::Instance { class: "java/lang/Object" });

    assert_eq!(i32::from(resolve(&heap, Some(ints))), 5);
    assert_eq!(i32::from(resolve(&heap, Some(objects))), 0);
    assert_eq!(i32::from(resolve(&heap, None)), -1);
    assert_eq!(i32::from(resolve(&heap, Some(plain))), -1);
}

#[test]
fn scalar_wrappers_and_strings_are_not_arrays() {
    let mut heap = Heap::new();
    for class in ["java/lang/String", "java/lang/Integer", "java/util/ArrayList"] {
        let handle = heap.alloc(Object::Instance { class });
        assert_eq!(classify(&heap, Some(handle)), Err(ResolveError::NotAnArray));
    }
}

#[test]
fn absent_handle_queries_nothing() {
    let heap = Heap::new();
    assert_eq!(classify(&heap, None), Err(ResolveError::AbsentHandle));
    assert_eq!(heap.queries.get(), 0);
}

#[test]
fn at_most_nine_queries() {
    let mut heap = Heap::new();
    let plain = heap.alloc(Object::Instance { class: "java/lang/Object" });
    resolve(&heap, Some(plain));
    assert_eq!(heap.queries.get(), 9);
}

#[test]
fn unloadable_primitive_classes_are_skipped() {
    let mut heap = Heap::new();
    heap.unloadable = vec!["[Z", "[B", "[S", "[C", "[I", "[J", "[F", "[D"];
    let objects = heap.array(ArrayKind::Object, 12);
    let floats = heap.array(ArrayKind::Float, 3);

    assert_eq!(classify(&heap, Some(objects)), Ok((ArrayKind::Object, 12)));
    assert!(resolve(&heap, Some(floats)).is_invalid());
}

#[test]
fn repeated_resolution_is_idempotent() {
    let mut heap = Heap::new();
    let chars = heap.array(ArrayKind::Char, 17);
    let first = resolve(&heap, Some(chars));
    let second = resolve(&heap, Some(chars));
    assert_eq!(first, second);
    assert_eq!(first.length(), Some(17));
}

#[test]
fn address_overload_matches_direct_overload() {
    let mut heap = Heap::new();
    let mut handles = vec![None];
    handles.push(Some(heap.array(ArrayKind::Int, 5)));
    handles.push(Some(heap.array(ArrayKind::Object, 0)));
    handles.push(Some(heap.array(ArrayKind::Double, 1024)));
    handles.push(Some(heap.alloc(Object::Instance { class: "java/lang/Object" })));

    for handle in handles {
        let address = Heap::address_of(handle);
        let packed = resolve_address(&heap, address, |a| heap.decode(a));
        assert_eq!(packed, resolve(&heap, handle), "address {address}");
    }
}
