/// The policies of a [`BeanWrapper`](crate::access::BeanWrapper).
///
/// With the `serde` feature, options can be loaded from any serde format;
/// missing fields keep their default.
///
/// # Examples
///
/// ```
/// use vc_bean::access::WrapOptions;
///
/// let options = WrapOptions::default();
///
/// assert!(options.auto_grow);
/// assert!(options.auto_instantiate);
/// assert!(!options.out_of_bounds_safe);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WrapOptions {
    /// Grow a list or an array to hold an out-of-range write.
    pub auto_grow: bool,
    /// Create absent intermediate values and containers on write.
    pub auto_instantiate: bool,
    /// Read an out-of-range index as absent instead of failing.
    pub out_of_bounds_safe: bool,
}

impl WrapOptions {
    /// The default options.
    pub const DEFAULT: Self = Self {
        auto_grow: true,
        auto_instantiate: true,
        out_of_bounds_safe: false,
    };

    /// Options with every policy disabled.
    pub const STRICT: Self = Self {
        auto_grow: false,
        auto_instantiate: false,
        out_of_bounds_safe: false,
    };
}

impl Default for WrapOptions {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::WrapOptions;

    #[test]
    fn load_from_json() {
        let options: WrapOptions = serde_json::from_str(r#"{ "out_of_bounds_safe": true }"#).unwrap();
        assert_eq!(
            options,
            WrapOptions {
                out_of_bounds_safe: true,
                ..WrapOptions::DEFAULT
            }
        );

        let options: WrapOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, WrapOptions::default());
    }

    #[test]
    fn save_to_json() {
        let text = serde_json::to_string(&WrapOptions::STRICT).unwrap();
        assert_eq!(
            text,
            r#"{"auto_grow":false,"auto_instantiate":false,"out_of_bounds_safe":false}"#
        );
    }
}
