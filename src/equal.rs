/// Domain-level equality that may be coarser than `==`.
///
/// The default method body is structural equality. Types whose domain
/// equality identifies values that `==` distinguishes (different
/// representations of the same instant, case-insensitive tokens, …)
/// override [`semantic_eq`](Self::semantic_eq) to express that.
///
/// [`Nullable::equal`](crate::nullable::Nullable::equal) consults this
/// capability after its structural check.
pub trait SemanticEq: PartialEq {
    fn semantic_eq(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! structural_semantic_eq {
    ($($t:ty),* $(,)?) => {
        $(
            impl SemanticEq for $t {}
        )*
    };
}

structural_semantic_eq!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &str,
    std::time::Duration,
);

impl<T: PartialEq> SemanticEq for Vec<T> {}

impl<T: PartialEq, const N: usize> SemanticEq for [T; N] {}

impl<T: SemanticEq> SemanticEq for Option<T> {
    fn semantic_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.semantic_eq(b),
            _ => false,
        }
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::SemanticEq;
    use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

    // chrono's `==` already compares instants across time zones, so the
    // structural default is the right body for all of these.
    impl<Tz: TimeZone> SemanticEq for DateTime<Tz> {}
    impl SemanticEq for Duration {}
    impl SemanticEq for NaiveDate {}
    impl SemanticEq for NaiveDateTime {}
    impl SemanticEq for NaiveTime {}
}
