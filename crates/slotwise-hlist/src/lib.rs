//! Type-level heterogeneous sequences.
//!
//! A sequence is a list of element types fixed at compile time: [`Nil`] is the empty list,
//! [`Cons<H, T>`](Cons) prepends an element of type `H` to the list `T`. Positions within a
//! sequence are types as well ([`Here`], [`There<I>`](There)), so that an element can be reached
//! with its concrete type intact ([`ElementAt`], [`At`]).
//!
//! Tuples of up to twelve elements are sequences too (see [`Sequence`]).
//!
//! ```
//! use slotwise_hlist::{hlist, len, At, Here, There};
//!
//! let mut list = hlist![1u8, "two", 3.0f64];
//! assert_eq!(len::<slotwise_hlist::HList![u8, &str, f64]>(), 3);
//!
//! *At::<There<Here>>::at_mut(&mut list) = "deux";
//! assert_eq!(*At::<There<Here>>::at(&list), "deux");
//! ```

mod list;
pub use list::*;

mod sequence;
pub use sequence::{assert_len, len, ElementOf, Sequence};

mod macros;
