//! The capabilities a caller provides to the [`Worker`](crate::Worker).
//!
//! Each trait is parameterised by the position `I` (a [`slotwise_hlist::Position`]) and the element
//! type `E` found there, so an implementation may be written once for every position, or
//! constrained to the elements it knows how to handle. The caller's runtime arguments travel as a
//! single `&mut A`.

/// Decides whether the walk stops at position `I`.
pub trait StopPredicate<I, E, A> {
    fn should_stop(&mut self, args: &mut A) -> bool;
}

/// The caller's action at position `I`, performed with the element type `E` in hand.
pub trait PositionOperator<I, E, A> {
    type Output;
    fn operate(&mut self, args: &mut A) -> Self::Output;
}

/// The caller's action once the walk has run past the last element.
///
/// `len` is the sentinel position, i.e. the length of the sequence.
pub trait TerminalOperator<A> {
    type Output;
    fn terminal(&mut self, len: usize, args: &mut A) -> Self::Output;
}

impl<'a, I, E, A, P> StopPredicate<I, E, A> for &'a mut P
where
    P: StopPredicate<I, E, A>,
{
    fn should_stop(&mut self, args: &mut A) -> bool {
        <P as StopPredicate<I, E, A>>::should_stop(&mut **self, args)
    }
}

impl<'a, I, E, A, O> PositionOperator<I, E, A> for &'a mut O
where
    O: PositionOperator<I, E, A>,
{
    type Output = <O as PositionOperator<I, E, A>>::Output;

    fn operate(&mut self, args: &mut A) -> Self::Output {
        <O as PositionOperator<I, E, A>>::operate(&mut **self, args)
    }
}

impl<'a, A, O> TerminalOperator<A> for &'a mut O
where
    O: TerminalOperator<A>,
{
    type Output = <O as TerminalOperator<A>>::Output;

    fn terminal(&mut self, len: usize, args: &mut A) -> Self::Output {
        <O as TerminalOperator<A>>::terminal(&mut **self, len, args)
    }
}
