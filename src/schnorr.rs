//! Schnorr signatures over 32-byte message digests

use kcrypt_api::Result;
use kcrypt_sign::Schnorr;
use tracing::debug;

use crate::input::Input;

/// Sign a 32-byte digest with fresh auxiliary randomness
pub fn sign<'a, 'b>(
    message_hash: impl Into<Input<'a>>,
    private_key: impl Into<Input<'b>>,
) -> Result<[u8; 64]> {
    let msg = message_hash.into().to_array::<32>("schnorr::sign message hash")?;
    let sk = private_key.into().to_private_key("schnorr::sign")?;
    Ok(Schnorr::sign(&msg, &sk)?.0)
}

/// Sign with caller-supplied auxiliary bytes; deterministic
pub fn sign_with_aux<'a, 'b, 'c>(
    message_hash: impl Into<Input<'a>>,
    private_key: impl Into<Input<'b>>,
    aux: impl Into<Input<'c>>,
) -> Result<[u8; 64]> {
    let msg = message_hash.into().to_array::<32>("schnorr::sign message hash")?;
    let sk = private_key.into().to_private_key("schnorr::sign_with_aux")?;
    let aux = aux.into().to_array::<32>("schnorr::sign aux")?;
    Ok(Schnorr::sign_with_aux(&msg, &sk, &aux)?.0)
}

/// Verify a signature against a digest and an x-only public key
///
/// Never fails: malformed hex or wrong lengths give `false`.
pub fn verify<'a, 'b, 'c>(
    signature: impl Into<Input<'a>>,
    message_hash: impl Into<Input<'b>>,
    public_key: impl Into<Input<'c>>,
) -> bool {
    let signature = signature.into().to_bytes();
    let message_hash = message_hash.into().to_bytes();
    let public_key = public_key.into().to_bytes();

    match (signature, message_hash, public_key) {
        (Ok(sig), Ok(msg), Ok(pk)) => Schnorr::verify(&sig, &msg, &pk),
        _ => {
            debug!("Schnorr verify input is not valid hex");
            false
        }
    }
}
