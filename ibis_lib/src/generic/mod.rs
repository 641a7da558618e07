//! Structures with no commitment to their use elsewhere in the library.

pub mod index_heap;
pub mod luby;
