//! A binary-heap priority queue whose elements are ordered by a caller-supplied
//! priority relation rather than by the [`Ord`] trait.
//!
//! The relation is any [`Priority`] implementation: a zero-sized stock order from
//! [`default`], or simply a closure `|a, b| -> bool` answering "does `a` have
//! strictly higher priority than `b`?".  Value-based search and removal use a
//! separate, optional [`Equivalence`] relation which may be installed after the
//! queue has been built.
//!
//! ```
//! use grove::{default::default_equals, PriorityQueue};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Job {
//!     name: &'static str,
//!     deadline: u32,
//! }
//!
//! // earliest deadline first
//! let mut jobs = PriorityQueue::new(|a: &Job, b: &Job| a.deadline < b.deadline);
//! jobs.enqueue(Job { name: "backup", deadline: 30 });
//! jobs.enqueue(Job { name: "deploy", deadline: 10 });
//! jobs.enqueue(Job { name: "report", deadline: 20 });
//!
//! assert_eq!(jobs.peek().name, "deploy");
//!
//! jobs.set_equality_comparer(default_equals);
//! assert!(jobs.remove(&Job { name: "report", deadline: 20 }));
//!
//! assert_eq!(jobs.dequeue().name, "deploy");
//! assert_eq!(jobs.dequeue().name, "backup");
//! assert!(jobs.is_empty());
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(feature = "error_in_core", feature(error_in_core))]
#![cfg_attr(feature = "exact_size_is_empty", feature(exact_size_is_empty))]
#![cfg_attr(feature = "extend_one", feature(extend_one))]
#![cfg_attr(feature = "trusted_len", feature(trusted_len))]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![deny(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::bool_assert_comparison,
        clippy::redundant_clone,
        clippy::uninlined_format_args,
        clippy::useless_vec,
    )
)]

extern crate alloc;

pub mod collection;
pub mod default;
pub mod error;
mod heap;
pub mod order;
pub mod priority_queue;

pub use collection::{Collection, Container, Queue};
pub use error::{Operation, QueueError, QueueErrorKind};
pub use order::{EqualityFn, Equivalence, Priority};
pub use priority_queue::PriorityQueue;

#[cfg(test)]
mod testing;

#[cfg(test)]
#[allow(dead_code)] // Not used in all configurations
pub(crate) mod test_helpers {
    /// Seeds an RNG from the caller's location, so that every call site draws a
    /// different but reproducible-per-run sequence.
    #[track_caller]
    pub(crate) fn test_rng() -> rand_xorshift::XorShiftRng {
        use std::hash::{BuildHasher, Hash, Hasher};
        let mut hasher = std::collections::hash_map::RandomState::new().build_hasher();
        std::panic::Location::caller().hash(&mut hasher);
        let hc64 = hasher.finish();
        let seed_vec =
            hc64.to_le_bytes().into_iter().chain(0u8..8).collect::<alloc::vec::Vec<u8>>();
        let seed: [u8; 16] = seed_vec.as_slice().try_into().unwrap();
        rand::SeedableRng::from_seed(seed)
    }
}
