mod index;
pub use index::{At, ElementAt, Here, Position, There};

/// A type-level list whose length is counted from its type.
pub trait HList {
    const LEN: usize;
}

/// The empty sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// An element of type `H` in front of the sequence `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cons<H, T>(H, T);

impl HList for Nil {
    const LEN: usize = 0;
}

impl<H, T> HList for Cons<H, T>
where
    T: HList,
{
    const LEN: usize = 1 + T::LEN;
}

impl<H, T> Cons<H, T>
where
    T: HList,
{
    /// Puts `head` at position `0` of `tail`; used by [`hlist!`](crate::hlist).
    pub fn new(head: H, tail: T) -> Self {
        Self(head, tail)
    }
}

#[cfg(test)]
mod tests;
