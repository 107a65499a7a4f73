//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] is a 64-bit hash that identifies user-declared types as well as
//! the operator and conversion methods declared on them. Hashes are computed
//! from names and signatures, so the same declaration always produces the same
//! identity regardless of registration order.
//!
//! # Examples
//!
//! ```
//! use opsel_core::TypeHash;
//!
//! let a = TypeHash::from_name("Vector2");
//! let b = TypeHash::from_name("Vector2");
//! assert_eq!(a, b);
//!
//! let neg = TypeHash::from_operator(a, "op_UnaryNegation", &[a]);
//! let add = TypeHash::from_operator(a, "op_Addition", &[a, a]);
//! assert_ne!(neg, add);
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
///
/// These keep types, operator methods and conversion methods apart even when
/// they share a name.
pub mod hash_constants {
    /// Separator constant for path components
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for type hashes
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for nullable wrappers
    pub const NULLABLE: u64 = 0x6c8e9cf570932bd5;

    /// Domain marker for operator method hashes
    pub const OPERATOR: u64 = 0x3e9f5d2a8c7b1403;

    /// Domain marker for conversion method hashes
    pub const CONVERSION: u64 = 0x51ab37d9e04c8f26;

    /// Parameter position mixing constants.
    pub const PARAM_MARKERS: [u64; 4] = [
        0x9e3779b97f4a7c15,
        0xbf58476d1ce4e5b9,
        0x94d049bb133111eb,
        0xd6e8feb86659fd93,
    ];
}

/// A deterministic 64-bit hash identifying a type or a declared method.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a type name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create the hash of the nullable wrapper around `inner`.
    #[inline]
    pub fn from_nullable(inner: TypeHash) -> Self {
        TypeHash(
            inner
                .0
                .wrapping_mul(hash_constants::SEP)
                .wrapping_add(hash_constants::NULLABLE),
        )
    }

    /// Create an operator method hash from the declaring type, the operator's
    /// metadata name and its parameter type hashes.
    ///
    /// Parameter order matters: `(Money, int)` and `(int, Money)` hash differently.
    #[inline]
    pub fn from_operator(owner: TypeHash, operator_name: &str, param_hashes: &[TypeHash]) -> Self {
        let seed = hash_constants::OPERATOR ^ owner.0 ^ xxh64(operator_name.as_bytes(), 0);
        TypeHash(mix_params(seed, param_hashes))
    }

    /// Create a conversion method hash from the declaring type and the
    /// source and target type hashes.
    #[inline]
    pub fn from_conversion(owner: TypeHash, from: TypeHash, to: TypeHash, is_implicit: bool) -> Self {
        let seed = hash_constants::CONVERSION ^ owner.0 ^ u64::from(is_implicit);
        TypeHash(mix_params(seed, &[from, to]))
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

fn mix_params(seed: u64, params: &[TypeHash]) -> u64 {
    let mut hash = seed;
    for (i, param) in params.iter().enumerate() {
        let marker = hash_constants::PARAM_MARKERS
            .get(i)
            .copied()
            .unwrap_or_else(|| hash_constants::PARAM_MARKERS[0].wrapping_add(i as u64));
        // wrapping_mul keeps parameter order significant
        hash = hash.wrapping_mul(hash_constants::SEP).wrapping_add(marker ^ param.0);
    }
    hash
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}
