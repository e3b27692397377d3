//! Constructor arguments as Solidity ABI
//!
//! Addresses become `address` tokens and text becomes `string` tokens; the
//! tuple encoding itself is `ethers::abi::encode`.

use std::str::FromStr;

use ethers::abi::{encode, Token};
use ethers::types::Address as EvmAddress;

use super::error::AbiError;
use crate::domain::value_objects::ConstructorArg;

/// Parse a `0x`-prefixed, 40-hex-digit address. Checksum casing is not verified.
pub fn parse_address(value: &str) -> Result<EvmAddress, AbiError> {
    let invalid = || AbiError::InvalidAddress {
        value: value.to_string(),
    };

    let digits = value
        .trim()
        .strip_prefix("0x")
        .or_else(|| value.trim().strip_prefix("0X"))
        .ok_or_else(invalid)?;
    if digits.len() != 40 {
        return Err(invalid());
    }
    EvmAddress::from_str(digits).map_err(|_| invalid())
}

pub fn to_token(arg: &ConstructorArg) -> Result<Token, AbiError> {
    match arg {
        ConstructorArg::Address(address) => parse_address(address.as_str()).map(Token::Address),
        ConstructorArg::Text(text) => Ok(Token::String(text.clone())),
    }
}

/// Encode `args` as the tuple appended to creation bytecode.
pub fn encode_constructor_args(args: &[ConstructorArg]) -> Result<Vec<u8>, AbiError> {
    let tokens = args.iter().map(to_token).collect::<Result<Vec<_>, _>>()?;
    Ok(encode(&tokens))
}
