//! Path-based access to bean graphs.
//!
//! - [`PropertyPath`]: a parsed path expression, a sequence of [`Segment`]s.
//! - [`BeanWrapper`]: reads and writes values of a wrapped object by path,
//!   by property name, or by [`PropertyDescriptor`](crate::registry::PropertyDescriptor).
//! - [`WrapOptions`]: the policies applied to absent values and indices.
//!
//! # Syntax
//!
//! - Plain: `name`, segments joined by `.`, e.g. `address.city`
//! - Indexed: `name[3]`, on a list, array or iterable property
//! - Mapped: `name[key]`, on a map property; the key is taken verbatim
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use vc_bean::derive::Bean;
//! use vc_bean::{BeanWrapper, registry::DescriptorCache};
//!
//! #[derive(Bean, Default)]
//! #[bean(default)]
//! struct Settings {
//!     labels: Option<HashMap<String, String>>,
//! }
//!
//! let cache = DescriptorCache::new();
//! let mut settings = Settings::default();
//! let mut wrapper = BeanWrapper::new(&cache, &mut settings);
//!
//! wrapper.set_value("labels[app.name]", "demo").unwrap();
//!
//! let labels = settings.labels.unwrap();
//! assert_eq!(labels["app.name"], "demo");
//! ```

mod options;
mod path;
mod traverse;
mod wrapper;

pub use options::WrapOptions;
pub use path::{PropertyPath, Qualifier, Segment, parse_index};
pub use wrapper::{BeanWrapper, PropertyRef};
