//! slotwise — addressing one element of a compile-time heterogeneous sequence with a value known
//! only at runtime.
//!
//! # [Sequences](crate::hlist)
//!
//! A sequence is a list of distinct element types, fixed at compile time: either an hlist
//! (`HList![A, B, C]`) or a tuple (`(A, B, C)`). Nothing about it is stored at runtime; a value of
//! the sequence type may still be passed around as an argument and accessed by position
//! ([`At`](crate::hlist::At), [`ElementAt`](crate::hlist::ElementAt)).
//!
//! # [Dispatch](crate::dispatch)
//!
//! The caller describes what to do at each position by implementing
//! - [`StopPredicate<I, E, A>`](crate::dispatch::StopPredicate) — whether to stop at position `I`;
//! - [`PositionOperator<I, E, A>`](crate::dispatch::PositionOperator) — what to do at position `I`;
//! - [`TerminalOperator<A>`](crate::dispatch::TerminalOperator) — what to do when no position was
//!   selected.
//!
//! `E` is the element type at position `I`, `A` the type of the caller's runtime arguments.
//!
//! ```
//! use slotwise::dispatch::{IndexOperator, PositionOperator, TerminalOperator};
//!
//! trait Handler {
//!     const NAME: &'static str;
//! }
//! struct Get;
//! struct Put;
//! impl Handler for Get {
//!     const NAME: &'static str = "GET";
//! }
//! impl Handler for Put {
//!     const NAME: &'static str = "PUT";
//! }
//!
//! struct Name;
//! impl<I, E: Handler> PositionOperator<I, E, ()> for Name {
//!     type Output = Option<&'static str>;
//!     fn operate(&mut self, _args: &mut ()) -> Self::Output {
//!         Some(E::NAME)
//!     }
//! }
//! impl TerminalOperator<()> for Name {
//!     type Output = Option<&'static str>;
//!     fn terminal(&mut self, _len: usize, _args: &mut ()) -> Self::Output {
//!         None
//!     }
//! }
//!
//! let mut name = IndexOperator::<(Get, Put), _>::new(Name);
//! assert_eq!(name.call(0, &mut ()), Some("GET"));
//! assert_eq!(name.call(1, &mut ()), Some("PUT"));
//! ```

pub mod hlist {
    pub use slotwise_hlist::*;
}

pub mod dispatch {
    pub use slotwise_dispatch::*;
}

pub use slotwise_hlist::{hlist, HList};
