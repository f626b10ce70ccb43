use std::marker::PhantomData;

use crate::list::Cons;

/// A position within a sequence, known at compile time.
pub trait Position {
    const INDEX: usize;
}

/// Position `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Here;

/// The position right after `P`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct There<P>(PhantomData<P>);

impl Position for Here {
    const INDEX: usize = 0;
}
impl<P: Position> Position for There<P> {
    const INDEX: usize = P::INDEX + 1;
}

/// The type of the element a sequence holds at position `P`.
///
/// Not implemented past the last element, so naming an out-of-range position does not compile:
///
/// ```compile_fail
/// use slotwise_hlist::{ElementAt, Here, There};
///
/// fn element<S: ElementAt<P>, P>() {}
/// element::<slotwise_hlist::HList![u8, u16], There<There<Here>>>();
/// ```
pub trait ElementAt<P> {
    type Element;
}

/// Borrowing the element at position `P` of a sequence value.
pub trait At<P>: ElementAt<P> {
    fn at(&self) -> &Self::Element;
    fn at_mut(&mut self) -> &mut Self::Element;
}

impl<H, T> ElementAt<Here> for Cons<H, T> {
    type Element = H;
}
impl<H, T, P> ElementAt<There<P>> for Cons<H, T>
where
    T: ElementAt<P>,
{
    type Element = T::Element;
}

impl<H, T> At<Here> for Cons<H, T> {
    fn at(&self) -> &H {
        let Cons(head, _) = self;
        head
    }
    fn at_mut(&mut self) -> &mut H {
        let Cons(head, _) = self;
        head
    }
}
impl<H, T, P> At<There<P>> for Cons<H, T>
where
    T: At<P>,
{
    fn at(&self) -> &T::Element {
        let Cons(_, tail) = self;
        tail.at()
    }
    fn at_mut(&mut self) -> &mut T::Element {
        let Cons(_, tail) = self;
        tail.at_mut()
    }
}
