//! Test vector tables

/// AES-256 single-block known answer
pub struct AesBlockVector {
    pub key: &'static str,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
}

/// AES-256-CBC known answer over whole blocks (no padding)
pub struct CbcVector {
    pub key: &'static str,
    pub iv: &'static str,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
}

/// Deterministic Schnorr signature with fixed aux bytes
pub struct SchnorrVector {
    pub secret_key: &'static str,
    pub public_key: &'static str,
    pub aux: &'static str,
    pub message: &'static str,
    pub signature: &'static str,
}

/// FIPS-197 appendix C.3 and SP 800-38A F.1.5 (ECB-AES256)
pub const AES256_BLOCK: &[AesBlockVector] = &[
    AesBlockVector {
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
    },
    AesBlockVector {
        key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "f3eed1bdb5d2a03c064b5a7e3db181f8",
    },
    AesBlockVector {
        key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        plaintext: "ae2d8a571e03ac9c9eb76fac45af8e51",
        ciphertext: "591ccb10d410ed26dc5ba74a31362870",
    },
    AesBlockVector {
        key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        plaintext: "30c81c46a35ce411e5fbc1191a0a52ef",
        ciphertext: "b6ed21b99ca6f4f9f153e7b1beafed1d",
    },
    AesBlockVector {
        key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        plaintext: "f69f2445df4f9b17ad2b417be66c3710",
        ciphertext: "23304b7a39f9f3ff067d8d8f9e24ecc7",
    },
    AesBlockVector {
        key: "0000000000000000000000000000000000000000000000000000000000000000",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "dc95c078a2408989ad48a21492842087",
    },
];

/// SP 800-38A F.2.5 (CBC-AES256.Encrypt)
pub const AES256_CBC: &[CbcVector] = &[CbcVector {
    key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
    iv: "000102030405060708090a0b0c0d0e0f",
    plaintext: "6bc1bee22e409f96e93d7e117393172a\
                ae2d8a571e03ac9c9eb76fac45af8e51\
                30c81c46a35ce411e5fbc1191a0a52ef\
                f69f2445df4f9b17ad2b417be66c3710",
    ciphertext: "f58c4c04d6e5f1ba779eabfb5f7bfbd6\
                 9cfc4e967edb808d679f777bc6702c7d\
                 39f23369a9d9bacfa530e26304231461\
                 b2eb05e2c39be9fcda6c19078c6a9d1b",
}];

/// Padded CBC encryptions: (key, iv, plaintext, ciphertext)
pub const AES256_CBC_PADDED: &[(&str, &str, &str, &str)] = &[
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        "00000000000000000000000000000000",
        "",
        "1f788fe6d86c317549697fbf0c07fa43",
    ),
    (
        "0000000000000000000000000000000000000000000000000000000000000000",
        "00000000000000000000000000000000",
        "00000000000000000000000000000000",
        "dc95c078a2408989ad48a21492842087f3c003ddc4a7b8a94baedffc3d214c38",
    ),
    (
        "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        "000102030405060708090a0b0c0d0e0f",
        "6bc1bee22e409f96e93d7e117393172a\
         ae2d8a571e03ac9c9eb76fac45af8e51\
         30c81c46a35ce411e5fbc1191a0a52ef\
         f69f2445df4f9b17ad2b417be66c3710",
        "f58c4c04d6e5f1ba779eabfb5f7bfbd6\
         9cfc4e967edb808d679f777bc6702c7d\
         39f23369a9d9bacfa530e26304231461\
         b2eb05e2c39be9fcda6c19078c6a9d1b\
         3f461796d6b0d6b2e0c2a72b4d80e644",
    ),
];

/// Schnorr signatures under the "aux"/"nonce"/"challenge" tags
pub const SCHNORR: &[SchnorrVector] = &[
    SchnorrVector {
        secret_key: "0000000000000000000000000000000000000000000000000000000000000001",
        public_key: "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        aux: "0000000000000000000000000000000000000000000000000000000000000000",
        message: "0000000000000000000000000000000000000000000000000000000000000000",
        signature: "fbdad993f3d599cf1b01dfa3142faae0d80de389dcc66a420fae47b5c3f13e1d\
                    0f1ea76c60fb83d492087f1c9367935d442da6de0c83db23a643f670c97c7305",
    },
    SchnorrVector {
        secret_key: "0000000000000000000000000000000000000000000000000000000000000003",
        public_key: "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
        aux: "0000000000000000000000000000000000000000000000000000000000000000",
        message: "0000000000000000000000000000000000000000000000000000000000000000",
        signature: "55a01cd4b430aaf7b856ecdfb0b39fe0d0508082582516384552e9a6c0e459b6\
                    4582d57303cb4bb8e8b5a529bc7f661fa1f4b5487b63fc0c025d1e5621f5c582",
    },
    SchnorrVector {
        secret_key: "b7e151628aed2a6abf7158809cf4f3c762e7160f38b4da56a784d9045190cfef",
        public_key: "dff1d77f2a671c5f36183726db2341be58feae1da2deced843240f7b502ba659",
        aux: "0000000000000000000000000000000000000000000000000000000000000001",
        message: "243f6a8885a308d313198a2e03707344a4093822299f31d0082efa98ec4e6c89",
        signature: "90757b474ba6307086b7b859d009701ba0943e9c598448a1d603de9ad656183e\
                    c75d60d6e8b2a89e593cb105adf3b979aaace78f0ce8c8105f99373d00de9034",
    },
];
