#![doc = include_str!("../README.md")]

// -----------------------------------------------------------------------------
// Extern Self

// Derived code refers to `::vc_bean`, inside this crate as well as outside.
extern crate self as vc_bean;

// -----------------------------------------------------------------------------
// Alloc

// Storage types are named through `alloc`, locks and std maps through `std`.
extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod hash;
mod reflection;

pub mod access;
pub mod error;
pub mod impls;
pub mod info;
pub mod ops;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use access::{BeanWrapper, WrapOptions};
pub use error::{BeanError, BeanErrorKind};
pub use reflection::{Reflect, Value};
pub use vc_bean_derive as derive;
