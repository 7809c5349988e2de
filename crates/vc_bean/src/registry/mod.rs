//! The type descriptor cache.
//!
//! - [`PropertyDescriptor`]: one property of one type, with its capability
//!   [`PropertyFlags`].
//! - [`TypeDescriptor`]: every property of one type, by name and in order.
//! - [`DescriptorCache`]: a shared store building each [`TypeDescriptor`] once.

mod cache;
mod descriptor;
mod property;

pub use cache::DescriptorCache;
pub use descriptor::TypeDescriptor;
pub use property::{PropertyDescriptor, PropertyFlags};
