use criterion::{black_box, criterion_group, criterion_main, Criterion};
use squirreljme_hook::{resolve, ArrayKind, Host};

/// Host where a value is just the kind it is an array of, if any.
struct KindHost;

impl Host for KindHost {
    type Value = Option<ArrayKind>;
    type Type = ArrayKind;

    fn lookup_type(&self, signature: &str) -> Option<ArrayKind> {
        ArrayKind::from_signature(signature)
    }

    fn is_instance(&self, value: Option<ArrayKind>, ty: &ArrayKind) -> bool {
        value == Some(*ty)
    }

    fn array_element_count(&self, _value: Option<ArrayKind>) -> Option<i32> {
        Some(64)
    }
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_first_kind", |b| {
        b.iter(|| resolve(&KindHost, black_box(Some(Some(ArrayKind::Boolean)))))
    });
    c.bench_function("resolve_last_kind", |b| {
        b.iter(|| resolve(&KindHost, black_box(Some(Some(ArrayKind::Object)))))
    });
    c.bench_function("resolve_not_an_array", |b| {
        b.iter(|| resolve(&KindHost, black_box(Some(None))))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
