use std::marker::PhantomData;

use slotwise_hlist::{len, Cons, Here, Nil, Position, Sequence, There};

use crate::family::{PositionOperator, StopPredicate, TerminalOperator};
use crate::policy::{defaults, OnNoMatch};


/// The dispatch engine.
///
/// Walks the positions of a [`Sequence`] in ascending order. At every position it asks the
/// stop-predicate `F`; if the predicate says "stop", or the position equals the target, the
/// operator `O` is invoked there and its output is returned. Past the last element the outcome
/// is decided by the [`OnNoMatch`] policy.
///
/// The walk is unrolled at compile time: every position is type-checked, exactly one of them is
/// selected at runtime.
#[derive(Debug, Clone)]
pub struct Worker<F, O> {
    target: Option<usize>,
    on_no_match: OnNoMatch,
    find_if: F,
    operator: O,
}

impl<F, O> Worker<F, O> {
    pub fn new(find_if: F, operator: O) -> Self {
        Self { target: None, on_no_match: defaults::WORKER_ON_NO_MATCH, find_if, operator }
    }

    pub fn with_target(self, target: usize) -> Self {
        Self { target: Some(target), ..self }
    }

    pub fn with_on_no_match(self, on_no_match: OnNoMatch) -> Self {
        Self { on_no_match, ..self }
    }

    pub fn set_target(&mut self, target: Option<usize>) {
        self.target = target;
    }

    pub fn set_on_no_match(&mut self, on_no_match: OnNoMatch) {
        self.on_no_match = on_no_match;
    }

    pub fn target(&self) -> Option<usize> {
        self.target
    }

    pub fn on_no_match(&self) -> OnNoMatch {
        self.on_no_match
    }

    pub fn find_if(&self) -> &F {
        &self.find_if
    }

    pub fn operator(&self) -> &O {
        &self.operator
    }

    pub fn into_parts(self) -> (F, O) {
        (self.find_if, self.operator)
    }

    pub fn run<S, A>(&mut self, args: &mut A) -> <S::List as Walk<Here, Start, F, O, A>>::Output
    where
        S: Sequence,
        S::List: Walk<Here, Start, F, O, A>,
    {
        log::trace!(
            "worker run [len: {}; target: {:?}; on-no-match: {}]",
            len::<S>(),
            self.target,
            self.on_no_match
        );
        <S::List as Walk<Here, Start, F, O, A>>::walk(self, args)
    }
}

/// One step of the walk: `Self` is the remainder of the sequence, `I` the position of its head,
/// `Prev` the position visited just before it.
pub trait Walk<I, Prev, F, O, A> {
    type Output;

    fn walk(worker: &mut Worker<F, O>, args: &mut A) -> Self::Output;
}

/// Marks the start of the walk: no position has been visited yet.
#[derive(Debug, Clone, Copy)]
pub struct Start;

/// Marks a visited position `I` holding an element of type `E`.
#[derive(Debug, Clone, Copy)]
pub struct Slot<I, E>(PhantomData<(I, E)>);

/// Invokes the operator at the last visited position, for [`OnNoMatch::ClampToLast`].
pub trait LastSlot<O, A> {
    type Output;

    fn clamp(operator: &mut O, len: usize, args: &mut A) -> Self::Output;
}

impl<O, A> LastSlot<O, A> for Start
where
    O: TerminalOperator<A>,
{
    type Output = <O as TerminalOperator<A>>::Output;

    fn clamp(operator: &mut O, len: usize, args: &mut A) -> Self::Output {
        <O as TerminalOperator<A>>::terminal(operator, len, args)
    }
}

impl<I, E, O, A> LastSlot<O, A> for Slot<I, E>
where
    O: PositionOperator<I, E, A>,
{
    type Output = <O as PositionOperator<I, E, A>>::Output;

    fn clamp(operator: &mut O, _len: usize, args: &mut A) -> Self::Output {
        <O as PositionOperator<I, E, A>>::operate(operator, args)
    }
}

impl<I, Prev, F, O, A, H, T> Walk<I, Prev, F, O, A> for Cons<H, T>
where
    I: Position,
    F: StopPredicate<I, H, A>,
    O: PositionOperator<I, H, A>,
    T: Walk<There<I>, Slot<I, H>, F, O, A, Output = <O as PositionOperator<I, H, A>>::Output>,
{
    type Output = <O as PositionOperator<I, H, A>>::Output;

    fn walk(worker: &mut Worker<F, O>, args: &mut A) -> Self::Output {
        let stop = <F as StopPredicate<I, H, A>>::should_stop(&mut worker.find_if, args);

        if stop || worker.target == Some(I::INDEX) {
            log::trace!("worker stop [position: {}; by-predicate: {}]", I::INDEX, stop);
            <O as PositionOperator<I, H, A>>::operate(&mut worker.operator, args)
        } else {
            <T as Walk<There<I>, Slot<I, H>, F, O, A>>::walk(worker, args)
        }
    }
}

impl<I, Prev, F, O, A> Walk<I, Prev, F, O, A> for Nil
where
    I: Position,
    O: TerminalOperator<A>,
    Prev: LastSlot<O, A, Output = <O as TerminalOperator<A>>::Output>,
{
    type Output = <O as TerminalOperator<A>>::Output;

    fn walk(worker: &mut Worker<F, O>, args: &mut A) -> Self::Output {
        log::trace!("worker terminal [position: {}; on-no-match: {}]", I::INDEX, worker.on_no_match);

        match worker.on_no_match {
            OnNoMatch::ReturnSentinel => {
                <O as TerminalOperator<A>>::terminal(&mut worker.operator, I::INDEX, args)
            },
            OnNoMatch::ClampToLast => {
                <Prev as LastSlot<O, A>>::clamp(&mut worker.operator, I::INDEX, args)
            },
        }
    }
}
