use std::fmt;
use std::marker::PhantomData;

use slotwise_hlist::{len, Here, Sequence};

use crate::builtin::NeverStop;
use crate::error::DispatchError;
use crate::policy::{defaults, OnNoMatch};
use crate::worker::{Start, Walk, Worker};

/// Invokes the operator at a position chosen at runtime.
///
/// ```
/// use slotwise_dispatch::{IndexOperator, PositionOperator, TerminalOperator};
/// use slotwise_hlist::Position;
///
/// struct Describe;
///
/// impl<I: Position, E> PositionOperator<I, E, ()> for Describe {
///     type Output = String;
///     fn operate(&mut self, _args: &mut ()) -> String {
///         format!("#{}: {}", I::INDEX, std::any::type_name::<E>())
///     }
/// }
/// impl TerminalOperator<()> for Describe {
///     type Output = String;
///     fn terminal(&mut self, len: usize, _args: &mut ()) -> String {
///         format!("#{}: -", len)
///     }
/// }
///
/// let mut describe = IndexOperator::<(u8, bool), _>::new(Describe);
/// assert_eq!(describe.call(1, &mut ()), "#1: bool");
/// assert!(describe.try_call(2, &mut ()).is_err());
/// ```
pub struct IndexOperator<S, O> {
    worker: Worker<NeverStop, O>,
    _seq: PhantomData<fn() -> S>,
}

impl<S, O> IndexOperator<S, O>
where
    S: Sequence,
{
    pub fn new(operator: O) -> Self {
        let worker =
            Worker::new(NeverStop, operator).with_on_no_match(defaults::INDEX_ON_NO_MATCH);
        Self { worker, _seq: PhantomData }
    }

    /// What an index past the end resolves to.
    pub fn with_on_no_match(self, on_no_match: OnNoMatch) -> Self {
        Self { worker: self.worker.with_on_no_match(on_no_match), ..self }
    }

    pub fn on_no_match(&self) -> OnNoMatch {
        self.worker.on_no_match()
    }

    pub fn operator(&self) -> &O {
        self.worker.operator()
    }

    pub fn into_inner(self) -> O {
        self.worker.into_parts().1
    }

    /// Invokes the operator bound at `index`.
    ///
    /// An `index` past the end is not an error: it resolves according to the
    /// [`OnNoMatch`]-policy.
    pub fn call<A>(
        &mut self,
        index: usize,
        args: &mut A,
    ) -> <S::List as Walk<Here, Start, NeverStop, O, A>>::Output
    where
        S::List: Walk<Here, Start, NeverStop, O, A>,
    {
        self.worker.set_target(Some(index));
        self.worker.run::<S, A>(args)
    }

    /// Same as [`call`](Self::call), but rejects an `index` past the end.
    pub fn try_call<A>(
        &mut self,
        index: usize,
        args: &mut A,
    ) -> Result<<S::List as Walk<Here, Start, NeverStop, O, A>>::Output, DispatchError>
    where
        S::List: Walk<Here, Start, NeverStop, O, A>,
    {
        let count = len::<S>();
        if index >= count {
            log::debug!("index out of range [index: {}; len: {}]", index, count);
            return Err(DispatchError::IndexOutOfRange { index, len: count });
        }
        Ok(self.call(index, args))
    }
}

impl<S, O> fmt::Debug for IndexOperator<S, O>
where
    O: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexOperator")
            .field("sequence", &std::any::type_name::<S>())
            .field("worker", &self.worker)
            .finish()
    }
}
