//! Public key derivation and ECDH

use kcrypt_algorithms::PointFormat;
use kcrypt_api::Result;
use kcrypt_sign::Schnorr;

use crate::input::Input;

/// Public key of `private_key`: 33 bytes when `compressed`, else 65
pub fn get_public_key<'a>(private_key: impl Into<Input<'a>>, compressed: bool) -> Result<Vec<u8>> {
    let format = if compressed {
        PointFormat::Compressed
    } else {
        PointFormat::Uncompressed
    };
    get_public_key_with_format(private_key, format)
}

/// Public key of `private_key` in any supported encoding
pub fn get_public_key_with_format<'a>(
    private_key: impl Into<Input<'a>>,
    format: PointFormat,
) -> Result<Vec<u8>> {
    let sk = private_key.into().to_private_key("get_public_key")?;
    kcrypt_ecdh::derive_public_key(&sk, format)
}

/// 32-byte x-only public key, as used by [`crate::schnorr::verify`]
pub fn get_x_only_public_key<'a>(private_key: impl Into<Input<'a>>) -> Result<[u8; 32]> {
    let sk = private_key.into().to_private_key("get_x_only_public_key")?;
    Schnorr::x_only_public_key(&sk)
}

/// x-coordinate of `private_key · public_key`
///
/// The public key may be compressed, uncompressed or x-only.
pub fn get_shared_secret<'a, 'b>(
    private_key: impl Into<Input<'a>>,
    public_key: impl Into<Input<'b>>,
) -> Result<[u8; 32]> {
    let sk = private_key.into().to_private_key("get_shared_secret")?;
    let pk = public_key.into().to_bytes()?;
    kcrypt_ecdh::compute_shared_secret(&sk, &pk)
}
