use slotwise_hlist::Position;

use crate::family::{PositionOperator, StopPredicate, TerminalOperator};

/// A stop predicate that never stops.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverStop;

impl<I, E, A> StopPredicate<I, E, A> for NeverStop {
    fn should_stop(&mut self, _args: &mut A) -> bool {
        false
    }
}

/// Reports the position the walk stopped at, or the sequence length if it stopped nowhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportIndex;

impl<I, E, A> PositionOperator<I, E, A> for ReportIndex
where
    I: Position,
{
    type Output = usize;

    fn operate(&mut self, _args: &mut A) -> Self::Output {
        I::INDEX
    }
}

impl<A> TerminalOperator<A> for ReportIndex {
    type Output = usize;

    fn terminal(&mut self, len: usize, _args: &mut A) -> Self::Output {
        len
    }
}

/// Does nothing, wherever invoked.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl<I, E, A> PositionOperator<I, E, A> for Discard {
    type Output = ();

    fn operate(&mut self, _args: &mut A) {}
}

impl<A> TerminalOperator<A> for Discard {
    type Output = ();

    fn terminal(&mut self, _len: usize, _args: &mut A) {}
}

/// Runs the wrapped operator at every position it is asked about, then says "continue".
#[derive(Debug, Clone, Default)]
pub struct Visit<O>(pub O);

impl<I, E, A, O> StopPredicate<I, E, A> for Visit<O>
where
    O: PositionOperator<I, E, A>,
{
    fn should_stop(&mut self, args: &mut A) -> bool {
        let _ = <O as PositionOperator<I, E, A>>::operate(&mut self.0, args);
        false
    }
}

/// Lets a closure over the numeric position serve as a predicate or an operator at every position.
///
/// As a predicate the closure returns `bool`; as an operator, whatever it returns is the output,
/// and the terminal invocation receives the sequence length as the position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByPosition<F>(pub F);

impl<I, E, A, F> StopPredicate<I, E, A> for ByPosition<F>
where
    I: Position,
    F: FnMut(usize, &mut A) -> bool,
{
    fn should_stop(&mut self, args: &mut A) -> bool {
        (self.0)(I::INDEX, args)
    }
}

impl<I, E, A, F, R> PositionOperator<I, E, A> for ByPosition<F>
where
    I: Position,
    F: FnMut(usize, &mut A) -> R,
{
    type Output = R;

    fn operate(&mut self, args: &mut A) -> Self::Output {
        (self.0)(I::INDEX, args)
    }
}

impl<A, F, R> TerminalOperator<A> for ByPosition<F>
where
    F: FnMut(usize, &mut A) -> R,
{
    type Output = R;

    fn terminal(&mut self, len: usize, args: &mut A) -> Self::Output {
        (self.0)(len, args)
    }
}
