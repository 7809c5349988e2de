//! Items used by the code of `#[derive(Bean)]`, not part of the public API.

pub use alloc::boxed::Box;
