//! Kind-set link and the seven built-in category links.

use typechain_core::{Kind, Link, Value};

/// A link matching any value whose [`Kind`] is in a configured set.
///
/// # Example
///
/// ```rust,ignore
/// use typechain_std::links::KindLink;
/// use typechain_core::Kind;
///
/// // One link for every scalar.
/// let scalars = KindLink::new(Kind::SCALAR, false).named("scalar");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KindLink {
    kinds: Kind,
    forward_on_success: bool,
    name: &'static str,
}

impl KindLink {
    /// Create a link for `kinds`.
    pub const fn new(kinds: Kind, forward_on_success: bool) -> Self {
        Self {
            kinds,
            forward_on_success,
            name: "kind",
        }
    }

    /// Set the name reported in diagnostics.
    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// The kinds this link accepts.
    pub const fn kinds(&self) -> Kind {
        self.kinds
    }
}

impl Link for KindLink {
    fn is_type_of(&self, value: &Value) -> bool {
        self.kinds.intersects(value.kind())
    }

    fn forward_on_match(&self) -> bool {
        self.forward_on_success
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

macro_rules! category_link {
    ($(#[$meta:meta])* $link:ident, $kinds:expr, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $link(KindLink);

        impl $link {
            #[doc = concat!("Create a ", $name, " link.")]
            pub const fn new(forward_on_success: bool) -> Self {
                Self(KindLink::new($kinds, forward_on_success).named($name))
            }
        }

        impl Default for $link {
            fn default() -> Self {
                Self::new(false)
            }
        }

        impl Link for $link {
            fn is_type_of(&self, value: &Value) -> bool {
                self.0.is_type_of(value)
            }

            fn forward_on_match(&self) -> bool {
                self.0.forward_on_match()
            }

            fn name(&self) -> &'static str {
                self.0.name()
            }
        }
    };
}

category_link!(
    /// Matches [`Value::Undefined`].
    UndefinedLink,
    Kind::UNDEFINED,
    "undefined"
);

category_link!(
    /// Matches [`Value::Null`].
    NullLink,
    Kind::NULL,
    "null"
);

category_link!(
    /// Matches [`Value::Bool`].
    BooleanLink,
    Kind::BOOLEAN,
    "boolean"
);

category_link!(
    /// Matches [`Value::Number`], NaN and infinities included.
    NumberLink,
    Kind::NUMBER,
    "number"
);

category_link!(
    /// Matches [`Value::String`].
    StringLink,
    Kind::STRING,
    "string"
);

category_link!(
    /// Matches [`Value::Array`].
    ArrayLink,
    Kind::ARRAY,
    "array"
);

category_link!(
    /// Matches any structural value: [`Value::Object`] and [`Value::Array`].
    ///
    /// Arrays are objects too, so this link must sit after [`ArrayLink`] when
    /// arrays should be routed separately.
    ObjectLink,
    Kind::STRUCTURAL,
    "object"
);
