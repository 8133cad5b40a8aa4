//! VLSM allocation
//!
//! Provides:
//! - Largest-first packing of host requirements into a base block
//! - Range validation of each allocated block against the base

mod range_check;
mod vlsm_allocator;

pub use range_check::validate;
pub use vlsm_allocator::{allocate, VlsmAllocator};
