/// Switches that tune a copy operation.
///
/// All options are off by default.
///
/// ```
/// use vc_copy::CopyOptions;
///
/// let opts = CopyOptions::new().with_deep_copy(true);
/// assert!(opts.deep_copy);
/// assert!(!opts.ignore_empty);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CopyOptions {
    /// Skip source values that are the zero value of their type.
    pub ignore_empty: bool,
    /// Copy nested structs, maps and lists member by member instead of
    /// assigning them whole, and never share `Arc` allocations.
    pub deep_copy: bool,
    /// Skip fields that are not `pub`.
    pub ignore_private_fields: bool,
}

impl CopyOptions {
    /// Creates options with every switch turned off.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ignore_empty: false,
            deep_copy: false,
            ignore_private_fields: false,
        }
    }

    #[inline]
    pub const fn with_ignore_empty(mut self, value: bool) -> Self {
        self.ignore_empty = value;
        self
    }

    #[inline]
    pub const fn with_deep_copy(mut self, value: bool) -> Self {
        self.deep_copy = value;
        self
    }

    #[inline]
    pub const fn with_ignore_private_fields(mut self, value: bool) -> Self {
        self.ignore_private_fields = value;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::CopyOptions;

    #[test]
    fn missing_keys_default_to_false() {
        let opts: CopyOptions = serde_json::from_str(r#"{ "deep_copy": true }"#).unwrap();
        assert_eq!(opts, CopyOptions::new().with_deep_copy(true));

        let text = serde_json::to_string(&opts).unwrap();
        assert!(text.contains(r#""ignore_empty":false"#));
    }
}
