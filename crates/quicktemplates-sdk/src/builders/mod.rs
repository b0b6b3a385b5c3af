//! Declarative C# source builders.
//!
//! [`MemberBuilder`] renders a single method, [`TypeBuilder`] assembles members
//! and `using` directives into a full compilation unit. Both accumulate into a
//! plain struct and hand back a frozen descriptor from `build()`; rendering is
//! deterministic (`Display`), so two renders of equal descriptors are
//! byte-identical.
//!
//! ```
//! use quicktemplates_sdk::builders::{MemberBuilder, TypeBuilder};
//!
//! let method = MemberBuilder::new()
//!     .with_name("Hello")
//!     .with_body("Debug.Log(\"hi\")")
//!     .as_private()
//!     .as_static()
//!     .build()
//!     .unwrap();
//!
//! let script = TypeBuilder::new()
//!     .with_name("Greeter")
//!     .with_member(method.to_string(), true)
//!     .as_static()
//!     .build()
//!     .unwrap();
//!
//! assert!(script.to_string().contains("private static void Hello()"));
//! ```

pub mod member;
pub mod script;

use std::fmt;

pub use member::{MemberBuilder, MemberDescriptor, MemberModifier};
pub use script::{TypeBuilder, TypeDescriptor, TypeModifier};

/// Symbol guarding editor-only regions in generated code.
pub const DEFAULT_EDITOR_SYMBOL: &str = "UNITY_EDITOR";

/// Access modifier shared by members and types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
    Internal,
}

impl Visibility {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Wrap `content` in an `#if <symbol>` / `#endif` region.
pub(crate) fn conditional_region(symbol: &str, content: &str) -> String {
    format!("#if {symbol}\n{content}\n#endif")
}
