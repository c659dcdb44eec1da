//! Integer arithmetic used by the report

/// Add two 32-bit integers.
///
/// Overflow wraps around in two's complement, in debug and release builds alike.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
