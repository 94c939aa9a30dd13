//! Control kinds for field descriptors.
//!
//! Control kinds travel on the wire under their `PascalCase` names (`"Text"`,
//! `"Select"`, ...). Parsing never fails: an unknown or absent kind is a
//! plain text input.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The form control a field descriptor asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ControlKind {
    #[default]
    Text,
    Textarea,
    Select,
    DataList,
    Date,
    Image,
    Group,
    Hidden,
    /// Link out to the schema.org (or search-engine) documentation page.
    DocsLink,
}

impl ControlKind {
    /// Every control kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Text,
        Self::Textarea,
        Self::Select,
        Self::DataList,
        Self::Date,
        Self::Image,
        Self::Group,
        Self::Hidden,
        Self::DocsLink,
    ];

    /// Return the wire name of this control kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Textarea => "Textarea",
            Self::Select => "Select",
            Self::DataList => "DataList",
            Self::Date => "Date",
            Self::Image => "Image",
            Self::Group => "Group",
            Self::Hidden => "Hidden",
            Self::DocsLink => "DocsLink",
        }
    }

    /// Parse a wire name. Unknown names fall back to [`ControlKind::Text`].
    ///
    /// `SchemaDocs` and `GoogleDocs` are accepted as aliases of `DocsLink`.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "Textarea" => Self::Textarea,
            "Select" => Self::Select,
            "DataList" => Self::DataList,
            "Date" => Self::Date,
            "Image" => Self::Image,
            "Group" => Self::Group,
            "Hidden" => Self::Hidden,
            "DocsLink" | "SchemaDocs" | "GoogleDocs" => Self::DocsLink,
            _ => Self::Text,
        }
    }

    /// Whether this control consumes the descriptor's `options`.
    #[must_use]
    pub const fn takes_options(self) -> bool {
        matches!(self, Self::Select | Self::DataList)
    }
}

impl From<String> for ControlKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ControlKind> for String {
    fn from(value: ControlKind) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
