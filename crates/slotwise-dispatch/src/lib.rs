//! Runtime selection of one element of a compile-time heterogeneous sequence.
//!
//! A [`Worker`] walks the positions of a [`Sequence`](slotwise_hlist::Sequence) in ascending
//! order, asking a [`StopPredicate`] at each of them, and invokes a [`PositionOperator`] at the
//! position where it stops. Every position is handled with its element's concrete type; the only
//! runtime value involved is the position itself.
//!
//! Three access patterns are built on it:
//! - [`IndexOperator`] — invoke the operator at a position given at runtime;
//! - [`FindIfOperator`] — find the first position satisfying a predicate (and optionally act on
//!   it);
//! - [`ForEachOperator`] — invoke the operator at every position.
//!
//! ```
//! use slotwise_dispatch::{ByPosition, FindIfOperator, ForEachOperator};
//!
//! type Slots = (u8, &'static str, f64);
//!
//! let mut order = vec![];
//! ForEachOperator::<Slots, _>::new(ByPosition(|idx: usize, order: &mut Vec<usize>| {
//!     order.push(idx)
//! }))
//! .call(&mut order);
//! assert_eq!(order, [0, 1, 2]);
//!
//! let mut find_two = FindIfOperator::<Slots, _>::new(ByPosition(|idx: usize, _: &mut ()| idx == 2));
//! assert_eq!(find_two.call(&mut ()), 2);
//! ```

mod builtin;
mod error;
mod family;
mod find_if_operator;
mod for_each_operator;
mod index_operator;
mod policy;
mod worker;

pub use builtin::{ByPosition, Discard, NeverStop, ReportIndex, Visit};
pub use error::DispatchError;
pub use family::{PositionOperator, StopPredicate, TerminalOperator};
pub use find_if_operator::FindIfOperator;
pub use for_each_operator::ForEachOperator;
pub use index_operator::IndexOperator;
pub use policy::OnNoMatch;
pub use worker::{LastSlot, Slot, Start, Walk, Worker};
