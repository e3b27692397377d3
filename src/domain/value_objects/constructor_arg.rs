//! Constructor argument value object

use std::fmt;

use serde::Serialize;

use super::Address;

/// A positional constructor argument.
///
/// Constructors are order-sensitive, so arguments always travel as an
/// ordered `Vec<ConstructorArg>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConstructorArg {
    /// An on-chain address (owner or previously deployed module)
    Address(Address),
    /// A UTF-8 string argument
    Text(String),
}

impl ConstructorArg {
    pub fn address(value: impl Into<Address>) -> Self {
        ConstructorArg::Address(value.into())
    }

    pub fn text(value: impl Into<String>) -> Self {
        ConstructorArg::Text(value.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConstructorArg::Address(addr) => addr.as_str(),
            ConstructorArg::Text(text) => text,
        }
    }

    /// Solidity type this argument is encoded as
    pub fn solidity_type(&self) -> &'static str {
        match self {
            ConstructorArg::Address(_) => "address",
            ConstructorArg::Text(_) => "string",
        }
    }
}

impl fmt::Display for ConstructorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructorArg::Address(addr) => write!(f, "{}", addr),
            ConstructorArg::Text(text) => write!(f, "{:?}", text),
        }
    }
}
