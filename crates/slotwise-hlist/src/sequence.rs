use crate::list::{At, Cons, ElementAt, HList, Here, Nil, There};

/// A compile-time sequence of element types.
///
/// Implemented by the hlists themselves and by tuples of arity up to twelve, each mapped onto the
/// equivalent [`Cons`]-list through [`Sequence::List`]. The element count is the list's
/// [`HList::LEN`]; [`len`] reads it for any sequence.
pub trait Sequence {
    type List: HList;
}

/// The type of the element that the sequence `S` holds at position `P`.
pub type ElementOf<S, P> = <<S as Sequence>::List as ElementAt<P>>::Element;

/// The number of elements in the sequence `S`.
pub const fn len<S: Sequence>() -> usize {
    <S::List as HList>::LEN
}

impl Sequence for Nil {
    type List = Self;
}

impl<H, T> Sequence for Cons<H, T>
where
    T: HList,
{
    type List = Self;
}

impl Sequence for () {
    type List = Nil;
}

/// Asserts at compile time that the sequence `S` has exactly `N` elements.
///
/// ```
/// slotwise_hlist::assert_len::<(u8, u16, u32), 3>();
/// ```
///
/// ```compile_fail
/// slotwise_hlist::assert_len::<(u8, u16, u32), 2>();
/// ```
pub const fn assert_len<S, const N: usize>()
where
    S: Sequence,
{
    const { assert!(len::<S>() == N, "declared length does not match the sequence") }
}

macro_rules! tuple_sequence {
    ($( ($( $T:ident $n:tt $I:ty ),+) );+ $(;)?) => {$(
        impl<$($T),+> Sequence for ($($T,)+) {
            type List = crate::HList![$($T),+];
        }
        tuple_sequence!(@at [$($T),+] $( $T $n $I ),+);
    )+};

    (@at [$($All:ident),+]) => {};
    (@at [$($All:ident),+] $T:ident $n:tt $I:ty $(, $($rest:tt)*)?) => {
        impl<$($All),+> ElementAt<$I> for ($($All,)+) {
            type Element = $T;
        }
        impl<$($All),+> At<$I> for ($($All,)+) {
            fn at(&self) -> &$T {
                &self.$n
            }
            fn at_mut(&mut self) -> &mut $T {
                &mut self.$n
            }
        }
        tuple_sequence!(@at [$($All),+] $($($rest)*)?);
    };
}

type I0 = Here;
type I1 = There<I0>;
type I2 = There<I1>;
type I3 = There<I2>;
type I4 = There<I3>;
type I5 = There<I4>;
type I6 = There<I5>;
type I7 = There<I6>;
type I8 = There<I7>;
type I9 = There<I8>;
type I10 = There<I9>;
type I11 = There<I10>;

tuple_sequence! {
    (A 0 I0);
    (A 0 I0, B 1 I1);
    (A 0 I0, B 1 I1, C 2 I2);
    (A 0 I0, B 1 I1, C 2 I2, D 3 I3);
    (A 0 I0, B 1 I1, C 2 I2, D 3 I3, E 4 I4);
    (A 0 I0, B 1 I1, C 2 I2, D 3 I3, E 4 I4, F 5 I5);
    (A 0 I0, B 1 I1, C 2 I2, D 3 I3, E 4 I4, F 5 I5, G 6 I6);
    (A 0 I0, B 1 I1, C 2 I2, D 3 I3, E 4 I4, F 5 I5, G 6 I6, H 7 I7);
    (A 0 I0, B 1 I1, C 2 I2, D 3 I3, E 4 I4, F 5 I5, G 6 I6, H 7 I7, J 8 I8);
    (A 0 I0, B 1 I1, C 2 I2, D 3 I3, E 4 I4, F 5 I5, G 6 I6, H 7 I7, J 8 I8, K 9 I9);
    (A 0 I0, B 1 I1, C 2 I2, D 3 I3, E 4 I4, F 5 I5, G 6 I6, H 7 I7, J 8 I8, K 9 I9, L 10 I10);
    (A 0 I0, B 1 I1, C 2 I2, D 3 I3, E 4 I4, F 5 I5, G 6 I6, H 7 I7, J 8 I8, K 9 I9, L 10 I10, M 11 I11);
}
