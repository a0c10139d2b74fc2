//! Byte-or-hex input coercion for the facade functions

use kcrypt_api::{Error, Result};
use zeroize::Zeroizing;

/// A byte parameter given either as raw bytes or as a hex string
///
/// String inputs are always hex-decoded; use the byte forms to pass text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input<'a> {
    /// Raw bytes
    Bytes(&'a [u8]),
    /// Hex-encoded bytes (either case, even length)
    Hex(&'a str),
}

impl<'a> Input<'a> {
    /// Decode into an owned buffer, zeroized on drop
    pub fn to_bytes(self) -> Result<Zeroizing<Vec<u8>>> {
        match self {
            Input::Bytes(bytes) => Ok(Zeroizing::new(bytes.to_vec())),
            Input::Hex(s) => decode_hex(s).map(Zeroizing::new),
        }
    }

    /// Decode and require exactly `N` bytes
    pub(crate) fn to_array<const N: usize>(self, context: &'static str) -> Result<[u8; N]> {
        let bytes = self.to_bytes()?;
        bytes.as_slice().try_into().map_err(|_| Error::InvalidLength {
            context,
            expected: N,
            actual: bytes.len(),
        })
    }

    /// Decode a 32-byte private key; any other length is an invalid key
    pub(crate) fn to_private_key(self, context: &'static str) -> Result<Zeroizing<[u8; 32]>> {
        match self.to_array::<32>(context) {
            Ok(key) => Ok(Zeroizing::new(key)),
            Err(Error::InvalidLength { .. }) => Err(Error::InvalidPrivateKey { context }),
            Err(e) => Err(e),
        }
    }
}

pub(crate) fn decode_hex(s: &str) -> Result<Vec<u8>> {
    hex::decode(s).map_err(|e| Error::InvalidHex {
        message: e.to_string(),
    })
}

impl<'a> From<&'a [u8]> for Input<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Input<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Input<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::Hex(s)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Input::Hex(s)
    }
}
