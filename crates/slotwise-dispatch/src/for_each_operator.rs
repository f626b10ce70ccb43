use std::fmt;
use std::marker::PhantomData;

use slotwise_hlist::{Here, Sequence};

use crate::builtin::{Discard, Visit};
use crate::policy::defaults;
use crate::worker::{Start, Walk, Worker};

/// Invokes the operator at every position, in ascending order, discarding the outputs.
///
/// Each position is visited exactly once: reaching the end of the sequence does not visit the
/// last element again.
pub struct ForEachOperator<S, O> {
    worker: Worker<Visit<O>, Discard>,
    _seq: PhantomData<fn() -> S>,
}

impl<S, O> ForEachOperator<S, O>
where
    S: Sequence,
{
    pub fn new(operator: O) -> Self {
        let worker =
            Worker::new(Visit(operator), Discard).with_on_no_match(defaults::FOR_EACH_ON_NO_MATCH);
        Self { worker, _seq: PhantomData }
    }

    pub fn operator(&self) -> &O {
        &self.worker.find_if().0
    }

    pub fn into_inner(self) -> O {
        let (Visit(operator), _) = self.worker.into_parts();
        operator
    }

    pub fn call<A>(&mut self, args: &mut A)
    where
        S::List: Walk<Here, Start, Visit<O>, Discard, A, Output = ()>,
    {
        self.worker.run::<S, A>(args)
    }
}

impl<S, O> fmt::Debug for ForEachOperator<S, O>
where
    O: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForEachOperator")
            .field("sequence", &std::any::type_name::<S>())
            .field("operator", &self.worker.find_if().0)
            .finish()
    }
}
