use std::fmt;
use std::marker::PhantomData;

use slotwise_hlist::{len, Here, Sequence};

use crate::builtin::ReportIndex;
use crate::policy::{defaults, OnNoMatch};
use crate::worker::{Start, Walk, Worker};

/// Finds the first position whose stop-predicate holds.
///
/// By default the result is that position, the length of the sequence meaning "not found".
/// With an action attached ([`then`](Self::then)) the action runs at the found position instead
/// and its output is the result.
///
/// Positions are asked in ascending order; none is asked after the first match.
pub struct FindIfOperator<S, F, O = ReportIndex> {
    worker: Worker<F, O>,
    _seq: PhantomData<fn() -> S>,
}

impl<S, F> FindIfOperator<S, F, ReportIndex>
where
    S: Sequence,
{
    pub fn new(find_if: F) -> Self {
        let worker =
            Worker::new(find_if, ReportIndex).with_on_no_match(defaults::FIND_IF_ON_NO_MATCH);
        Self { worker, _seq: PhantomData }
    }

    /// Runs `action` at the found position.
    ///
    /// When nothing is found, the action runs at the last element, unless the policy is changed
    /// to [`OnNoMatch::ReturnSentinel`].
    pub fn then<O>(self, action: O) -> FindIfOperator<S, F, O> {
        let (find_if, _) = self.worker.into_parts();
        let worker =
            Worker::new(find_if, action).with_on_no_match(defaults::FIND_IF_ACTION_ON_NO_MATCH);
        FindIfOperator { worker, _seq: PhantomData }
    }

    /// The found position, if any.
    pub fn position<A>(&mut self, args: &mut A) -> Option<usize>
    where
        S::List: Walk<Here, Start, F, ReportIndex, A, Output = usize>,
    {
        let on_no_match = self.worker.on_no_match();
        let mut guard = PolicyGuard { worker: &mut self.worker, on_no_match };
        guard.worker.set_on_no_match(OnNoMatch::ReturnSentinel);
        let position = guard.worker.run::<S, A>(args);
        drop(guard);

        Some(position).filter(|position| *position < len::<S>())
    }
}

/// Restores the worker's policy when dropped, also when the walk unwinds.
struct PolicyGuard<'a, F, O> {
    worker: &'a mut Worker<F, O>,
    on_no_match: OnNoMatch,
}

impl<F, O> Drop for PolicyGuard<'_, F, O> {
    fn drop(&mut self) {
        self.worker.set_on_no_match(self.on_no_match);
    }
}

impl<S, F, O> FindIfOperator<S, F, O>
where
    S: Sequence,
{
    pub fn with_on_no_match(self, on_no_match: OnNoMatch) -> Self {
        Self { worker: self.worker.with_on_no_match(on_no_match), ..self }
    }

    pub fn on_no_match(&self) -> OnNoMatch {
        self.worker.on_no_match()
    }

    pub fn find_if(&self) -> &F {
        self.worker.find_if()
    }

    pub fn action(&self) -> &O {
        self.worker.operator()
    }

    pub fn into_parts(self) -> (F, O) {
        self.worker.into_parts()
    }

    pub fn call<A>(&mut self, args: &mut A) -> <S::List as Walk<Here, Start, F, O, A>>::Output
    where
        S::List: Walk<Here, Start, F, O, A>,
    {
        self.worker.run::<S, A>(args)
    }
}

impl<S, F, O> fmt::Debug for FindIfOperator<S, F, O>
where
    F: fmt::Debug,
    O: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindIfOperator")
            .field("sequence", &std::any::type_name::<S>())
            .field("worker", &self.worker)
            .finish()
    }
}
