//! Wire contracts shared between the CIDSON console and its REST backend.
//!
//! Nothing in this crate performs I/O: it holds entity shapes, create/update
//! payloads, pagination envelopes and the small enums the console needs.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
