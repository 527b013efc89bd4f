//! Library half of the `summa` binary.
//!
//! Only the pieces worth testing without spawning the binary live here.

pub mod stages;
