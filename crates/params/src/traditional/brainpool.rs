//! Brainpool P256r1 domain parameters (RFC 5639, section 3.4)

/// Structure containing the parameters of a short Weierstrass curve
/// y^2 = x^3 + a*x + b over a prime field
pub struct CurveParams {
    /// Field prime, big-endian
    pub p: [u8; 32],

    /// Curve coefficient a, big-endian
    pub a: [u8; 32],

    /// Curve coefficient b, big-endian
    pub b: [u8; 32],

    /// Generator x coordinate, big-endian
    pub g_x: [u8; 32],

    /// Generator y coordinate, big-endian
    pub g_y: [u8; 32],

    /// Order of the generator, big-endian
    pub n: [u8; 32],

    /// Cofactor
    pub h: u32,

    /// Width in bytes of a field element
    pub field_byte_width: usize,
}

/// brainpoolP256r1
pub const BRAINPOOL_P256R1: CurveParams = CurveParams {
    p: [
        0xA9, 0xFB, 0x57, 0xDB, 0xA1, 0xEE, 0xA9, 0xBC, 0x3E, 0x66, 0x0A, 0x90, 0x9D, 0x83, 0x8D,
        0x72, 0x6E, 0x3B, 0xF6, 0x23, 0xD5, 0x26, 0x20, 0x28, 0x20, 0x13, 0x48, 0x1D, 0x1F, 0x6E,
        0x53, 0x77,
    ],
    a: [
        0x7D, 0x5A, 0x09, 0x75, 0xFC, 0x2C, 0x30, 0x57, 0xEE, 0xF6, 0x75, 0x30, 0x41, 0x7A, 0xFF,
        0xE7, 0xFB, 0x80, 0x55, 0xC1, 0x26, 0xDC, 0x5C, 0x6C, 0xE9, 0x4A, 0x4B, 0x44, 0xF3, 0x30,
        0xB5, 0xD9,
    ],
    b: [
        0x26, 0xDC, 0x5C, 0x6C, 0xE9, 0x4A, 0x4B, 0x44, 0xF3, 0x30, 0xB5, 0xD9, 0xBB, 0xD7, 0x7C,
        0xBF, 0x95, 0x84, 0x16, 0x29, 0x5C, 0xF7, 0xE1, 0xCE, 0x6B, 0xCC, 0xDC, 0x18, 0xFF, 0x8C,
        0x07, 0xB6,
    ],
    g_x: [
        0x8B, 0xD2, 0xAE, 0xB9, 0xCB, 0x7E, 0x57, 0xCB, 0x2C, 0x4B, 0x48, 0x2F, 0xFC, 0x81, 0xB7,
        0xAF, 0xB9, 0xDE, 0x27, 0xE1, 0xE3, 0xBD, 0x23, 0xC2, 0x3A, 0x44, 0x53, 0xBD, 0x9A, 0xCE,
        0x32, 0x62,
    ],
    g_y: [
        0x54, 0x7E, 0xF8, 0x35, 0xC3, 0xDA, 0xC4, 0xFD, 0x97, 0xF8, 0x46, 0x1A, 0x14, 0x61, 0x1D,
        0xC9, 0xC2, 0x77, 0x45, 0x13, 0x2D, 0xED, 0x8E, 0x54, 0x5C, 0x1D, 0x54, 0xC7, 0x2F, 0x04,
        0x69, 0x97,
    ],
    n: [
        0xA9, 0xFB, 0x57, 0xDB, 0xA1, 0xEE, 0xA9, 0xBC, 0x3E, 0x66, 0x0A, 0x90, 0x9D, 0x83, 0x8D,
        0x71, 0x8C, 0x39, 0x7A, 0xA3, 0xB5, 0x61, 0xA6, 0xF7, 0x90, 0x1E, 0x0E, 0x82, 0x97, 0x48,
        0x56, 0xA7,
    ],
    h: 1,
    field_byte_width: 32,
};

/// DER encoding of the brainpoolP256r1 object identifier 1.3.36.3.3.2.8.1.1.7
pub const BRAINPOOL_P256R1_OID: [u8; 9] = [0x2B, 0x24, 0x03, 0x03, 0x02, 0x08, 0x01, 0x01, 0x07];

/// DER encoding of id-ecPublicKey 1.2.840.10045.2.1
pub const EC_PUBLIC_KEY_OID: [u8; 7] = [0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x02, 0x01];
