/// The type of a sequence: `HList![A, B]` is `Cons<A, Cons<B, Nil>>`.
#[macro_export]
macro_rules! HList {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::HList![$($tail),*]>
    };
}

/// A sequence value: `hlist![a, b]`.
#[macro_export]
macro_rules! hlist {
    () => { $crate::Nil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::Cons::new($head, $crate::hlist![$($tail),*])
    };
}
