//! Stack growth for deep trees
//!
//! IR trees nest as deep as the source they came from. Every recursive step
//! over them (building, encoding, decoding, dropping) goes through [`grow`],
//! which moves onto a fresh heap-allocated stack segment when the current one
//! runs low.

/// Remaining stack below which a new segment is allocated
pub const RED_ZONE: usize = 256 * 1024;

/// Size of each new stack segment
pub const GROW_SIZE: usize = 8 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if less than [`RED_ZONE`]
/// bytes remain
#[inline]
pub fn grow<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROW_SIZE, f)
}
