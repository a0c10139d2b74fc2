//! secp256k1 elliptic curve point operations

use alloc::vec::Vec;

use crate::ec::k256::{
    constants::{
        CURVE_B, GENERATOR_X, GENERATOR_Y, K256_FIELD_ELEMENT_SIZE, K256_POINT_COMPRESSED_SIZE,
        K256_POINT_UNCOMPRESSED_SIZE, K256_POINT_XONLY_SIZE,
    },
    field::FieldElement,
    scalar::Scalar,
};
use crate::error::{Error, Result};

/// Format of a serialized elliptic curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointFormat {
    /// Compressed format: 0x02/0x03 || x
    #[default]
    Compressed,
    /// Uncompressed format: 0x04 || x || y
    Uncompressed,
    /// X-only format: x, with an even y implied
    XOnly,
}

impl PointFormat {
    /// Encoded size in bytes
    pub const fn size(&self) -> usize {
        match self {
            PointFormat::Compressed => K256_POINT_COMPRESSED_SIZE,
            PointFormat::Uncompressed => K256_POINT_UNCOMPRESSED_SIZE,
            PointFormat::XOnly => K256_POINT_XONLY_SIZE,
        }
    }
}

/// A point on the secp256k1 elliptic curve in affine coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Point {
    /// The point at infinity (identity element)
    Identity,
    /// A finite point
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

fn curve_rhs(x: &FieldElement) -> FieldElement {
    x.square().mul(x).add(&FieldElement::from_u256_unchecked(CURVE_B))
}

impl Point {
    /// The standard base point G
    pub fn generator() -> Self {
        Point::Affine {
            x: FieldElement::from_u256_unchecked(GENERATOR_X),
            y: FieldElement::from_u256_unchecked(GENERATOR_Y),
        }
    }

    /// Create a point from field coordinates.
    ///
    /// Returns an error if the coordinates don't satisfy the curve equation.
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Result<Self> {
        let point = Point::Affine { x, y };
        if !point.is_on_curve() {
            return Err(Error::NotOnCurve {
                context: "Point::from_affine",
            });
        }
        Ok(point)
    }

    /// Create a new point from uncompressed coordinates.
    ///
    /// Returns an error if a coordinate is not below p or the coordinates
    /// don't satisfy the curve equation.
    pub fn new_uncompressed(
        x: &[u8; K256_FIELD_ELEMENT_SIZE],
        y: &[u8; K256_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let not_on_curve = |_| Error::NotOnCurve {
            context: "Point::new_uncompressed",
        };
        let x = FieldElement::from_bytes(x).map_err(not_on_curve)?;
        let y = FieldElement::from_bytes(y).map_err(not_on_curve)?;
        Self::from_affine(x, y)
    }

    /// The identity element
    pub fn identity() -> Self {
        Point::Identity
    }

    /// Check if this is the identity element
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// Check whether the point satisfies y² = x³ + 7. The identity is valid.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Point::Identity => true,
            Point::Affine { x, y } => y.square() == curve_rhs(x),
        }
    }

    /// Affine coordinates, or `None` for the identity
    pub fn coordinates(&self) -> Option<(&FieldElement, &FieldElement)> {
        match self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// Check whether the y-coordinate is even. False for the identity.
    pub fn has_even_y(&self) -> bool {
        match self {
            Point::Identity => false,
            Point::Affine { y, .. } => !y.is_odd(),
        }
    }

    /// The point with the even-y convention whose x-coordinate is `x`.
    ///
    /// Returns `None` if x³ + 7 is not a square.
    pub fn lift_x(x: &FieldElement) -> Option<Self> {
        let y = curve_rhs(x).sqrt()?;
        let y = if y.is_odd() { y.negate() } else { y };
        Some(Point::Affine { x: *x, y })
    }

    /// [`Point::lift_x`] on a big-endian x-coordinate; `None` if `x >= p`
    pub fn lift_x_bytes(x: &[u8; K256_FIELD_ELEMENT_SIZE]) -> Option<Self> {
        let x = FieldElement::from_bytes(x).ok()?;
        Self::lift_x(&x)
    }

    /// Decode a public point from its compressed, uncompressed or x-only form.
    ///
    /// | length | first byte  | meaning                         |
    /// |--------|-------------|---------------------------------|
    /// | 33     | 0x02 / 0x03 | x with even / odd y             |
    /// | 65     | 0x04        | x then y                        |
    /// | 32     | any         | x only, even y                  |
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let not_on_curve = Error::NotOnCurve {
            context: "Point::decode",
        };
        let point = match (bytes.len(), bytes.first()) {
            (K256_POINT_COMPRESSED_SIZE, Some(&tag @ (0x02 | 0x03))) => {
                let x = field_bytes(&bytes[1..]);
                let lifted = Self::lift_x_bytes(&x).ok_or(not_on_curve.clone())?;
                if tag == 0x03 {
                    lifted.negate()
                } else {
                    lifted
                }
            }
            (K256_POINT_UNCOMPRESSED_SIZE, Some(&0x04)) => {
                let x = field_bytes(&bytes[1..1 + K256_FIELD_ELEMENT_SIZE]);
                let y = field_bytes(&bytes[1 + K256_FIELD_ELEMENT_SIZE..]);
                Self::new_uncompressed(&x, &y)?
            }
            (K256_POINT_XONLY_SIZE, _) => {
                Self::lift_x_bytes(&field_bytes(bytes)).ok_or(not_on_curve.clone())?
            }
            (length, _) => {
                return Err(Error::Encoding {
                    context: "Point::decode",
                    length,
                })
            }
        };

        if !point.is_on_curve() {
            return Err(not_on_curve);
        }
        Ok(point)
    }

    /// Serialize as 0x02/0x03 || x
    pub fn serialize_compressed(&self) -> Result<[u8; K256_POINT_COMPRESSED_SIZE]> {
        let (x, y) = self.affine_or_err("Point::serialize_compressed")?;
        let mut out = [0u8; K256_POINT_COMPRESSED_SIZE];
        out[0] = if y.is_odd() { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&x.to_bytes());
        Ok(out)
    }

    /// Serialize as 0x04 || x || y
    pub fn serialize_uncompressed(&self) -> Result<[u8; K256_POINT_UNCOMPRESSED_SIZE]> {
        let (x, y) = self.affine_or_err("Point::serialize_uncompressed")?;
        let mut out = [0u8; K256_POINT_UNCOMPRESSED_SIZE];
        out[0] = 0x04;
        out[1..1 + K256_FIELD_ELEMENT_SIZE].copy_from_slice(&x.to_bytes());
        out[1 + K256_FIELD_ELEMENT_SIZE..].copy_from_slice(&y.to_bytes());
        Ok(out)
    }

    /// Serialize the x-coordinate alone
    pub fn serialize_x_only(&self) -> Result<[u8; K256_POINT_XONLY_SIZE]> {
        let (x, _) = self.affine_or_err("Point::serialize_x_only")?;
        Ok(x.to_bytes())
    }

    /// Serialize in the requested format
    pub fn to_encoded(&self, format: PointFormat) -> Result<Vec<u8>> {
        Ok(match format {
            PointFormat::Compressed => self.serialize_compressed()?.to_vec(),
            PointFormat::Uncompressed => self.serialize_uncompressed()?.to_vec(),
            PointFormat::XOnly => self.serialize_x_only()?.to_vec(),
        })
    }

    /// Point negation
    pub fn negate(&self) -> Self {
        match self {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: *x,
                y: y.negate(),
            },
        }
    }

    /// Point doubling
    pub fn double(&self) -> Result<Self> {
        let (x, y) = match self {
            Point::Identity => return Ok(Point::Identity),
            Point::Affine { x, y } => (x, y),
        };
        if y.is_zero() {
            return Ok(Point::Identity);
        }

        // λ = 3x² / 2y
        let numerator = x.square().mul(&FieldElement::from_u32(3));
        let lambda = numerator.mul(&y.double().invert()?);

        let x3 = lambda.square().sub(&x.double());
        let y3 = lambda.mul(&x.sub(&x3)).sub(y);
        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// Point addition
    pub fn add(&self, other: &Self) -> Result<Self> {
        let ((x1, y1), (x2, y2)) = match (self, other) {
            (Point::Identity, _) => return Ok(*other),
            (_, Point::Identity) => return Ok(*self),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        if x1 == x2 {
            return if y1 == y2 {
                self.double()
            } else {
                Ok(Point::Identity)
            };
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = y2.sub(y1).mul(&x2.sub(x1).invert()?);

        let x3 = lambda.square().sub(x1).sub(x2);
        let y3 = lambda.mul(&x1.sub(&x3)).sub(y1);
        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// Scalar multiplication by double-and-add from the least significant bit
    pub fn mul(&self, scalar: &Scalar) -> Result<Self> {
        let k = scalar.as_u256();
        let mut result = Point::Identity;
        let mut addend = *self;

        for i in 0..k.bits() {
            if k.bit(i) {
                result = result.add(&addend)?;
            }
            addend = addend.double()?;
        }
        Ok(result)
    }

    fn affine_or_err(&self, context: &'static str) -> Result<(&FieldElement, &FieldElement)> {
        self.coordinates().ok_or(Error::Identity { context })
    }
}

fn field_bytes(slice: &[u8]) -> [u8; K256_FIELD_ELEMENT_SIZE] {
    let mut out = [0u8; K256_FIELD_ELEMENT_SIZE];
    out.copy_from_slice(slice);
    out
}
