//! Value categories as a set of flags.

use bitflags::bitflags;

bitflags! {
    /// The category of a [`Value`], one bit per variant.
    ///
    /// A single value always reports exactly one bit from [`Value::kind`].
    /// Links that cover several categories hold a union, and test membership
    /// with [`Kind::intersects`].
    ///
    /// [`Value`]: crate::Value
    /// [`Value::kind`]: crate::Value::kind
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct Kind: u8 {
        /// No value at all.
        const UNDEFINED = 1 << 0;
        /// An explicit null.
        const NULL = 1 << 1;
        /// `true` or `false`.
        const BOOLEAN = 1 << 2;
        /// Any number, including NaN and the infinities.
        const NUMBER = 1 << 3;
        /// A UTF-8 string.
        const STRING = 1 << 4;
        /// An ordered list of values.
        const ARRAY = 1 << 5;
        /// A string-keyed map of values.
        const OBJECT = 1 << 6;
        /// An opaque byte buffer.
        const BYTES = 1 << 7;

        /// Arrays and objects.
        const STRUCTURAL = Self::ARRAY.bits() | Self::OBJECT.bits();
        /// Every scalar kind that carries data.
        const SCALAR = Self::BOOLEAN.bits() | Self::NUMBER.bits() | Self::STRING.bits();
        /// Undefined and null.
        const NOTHING = Self::UNDEFINED.bits() | Self::NULL.bits();
    }
}

const LABELS: [(Kind, &str); 8] = [
    (Kind::UNDEFINED, "undefined"),
    (Kind::NULL, "null"),
    (Kind::BOOLEAN, "boolean"),
    (Kind::NUMBER, "number"),
    (Kind::STRING, "string"),
    (Kind::ARRAY, "array"),
    (Kind::OBJECT, "object"),
    (Kind::BYTES, "bytes"),
];

impl Kind {
    /// Lower-case label of a single-bit kind, `"mixed"` for unions.
    pub fn label(self) -> &'static str {
        LABELS
            .iter()
            .find(|(kind, _)| *kind == self)
            .map_or("mixed", |(_, label)| *label)
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
