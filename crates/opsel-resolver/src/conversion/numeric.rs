//! Numeric conversions between built-in types.
//!
//! Widening conversions are implicit. Any other conversion between two
//! numeric types (`char` and `decimal` included) is explicit. `bool`, `string`
//! and `object` take no part.

use opsel_core::{BuiltinType, ConversionKind};

/// Find the numeric conversion from `from` to `to`.
///
/// Returns `None` for identical types and for pairs that are not both numeric.
pub fn find_numeric_conversion(from: BuiltinType, to: BuiltinType) -> Option<ConversionKind> {
    if from == to || !from.is_numeric() || !to.is_numeric() {
        return None;
    }
    if is_implicit_numeric(from, to) {
        Some(ConversionKind::ImplicitNumeric)
    } else {
        Some(ConversionKind::ExplicitNumeric)
    }
}

/// The implicit numeric conversion table.
pub fn is_implicit_numeric(from: BuiltinType, to: BuiltinType) -> bool {
    use BuiltinType::*;

    match from {
        SByte => matches!(to, Short | Int | Long | Float | Double | Decimal),
        Byte => matches!(
            to,
            Short | UShort | Int | UInt | Long | ULong | Float | Double | Decimal
        ),
        Short => matches!(to, Int | Long | Float | Double | Decimal),
        UShort => matches!(to, Int | UInt | Long | ULong | Float | Double | Decimal),
        Int => matches!(to, Long | Float | Double | Decimal),
        UInt => matches!(to, Long | ULong | Float | Double | Decimal),
        Long | ULong => matches!(to, Float | Double | Decimal),
        Char => matches!(
            to,
            UShort | Int | UInt | Long | ULong | Float | Double | Decimal
        ),
        Float => matches!(to, Double),
        Double | Decimal | Bool | Object | String => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BuiltinType::*;

    #[test]
    fn widening_is_implicit() {
        assert_eq!(find_numeric_conversion(Int, Long), Some(ConversionKind::ImplicitNumeric));
        assert_eq!(find_numeric_conversion(Byte, Int), Some(ConversionKind::ImplicitNumeric));
        assert_eq!(find_numeric_conversion(UInt, Long), Some(ConversionKind::ImplicitNumeric));
        assert_eq!(find_numeric_conversion(Char, UShort), Some(ConversionKind::ImplicitNumeric));
        assert_eq!(find_numeric_conversion(Float, Double), Some(ConversionKind::ImplicitNumeric));
        assert_eq!(find_numeric_conversion(ULong, Decimal), Some(ConversionKind::ImplicitNumeric));
    }

    #[test]
    fn narrowing_and_sign_changes_are_explicit() {
        assert_eq!(find_numeric_conversion(Long, Int), Some(ConversionKind::ExplicitNumeric));
        assert_eq!(find_numeric_conversion(Int, UInt), Some(ConversionKind::ExplicitNumeric));
        assert_eq!(find_numeric_conversion(ULong, Long), Some(ConversionKind::ExplicitNumeric));
        assert_eq!(find_numeric_conversion(SByte, Byte), Some(ConversionKind::ExplicitNumeric));
        assert_eq!(find_numeric_conversion(Int, Char), Some(ConversionKind::ExplicitNumeric));
    }

    #[test]
    fn floating_and_decimal_do_not_mix_implicitly() {
        assert_eq!(find_numeric_conversion(Float, Decimal), Some(ConversionKind::ExplicitNumeric));
        assert_eq!(find_numeric_conversion(Decimal, Double), Some(ConversionKind::ExplicitNumeric));
        assert_eq!(find_numeric_conversion(Double, Float), Some(ConversionKind::ExplicitNumeric));
    }

    #[test]
    fn signed_types_do_not_reach_unsigned() {
        for signed in [SByte, Short, Int, Long] {
            for unsigned in [Byte, UShort, UInt, ULong] {
                assert!(!is_implicit_numeric(signed, unsigned), "{signed} -> {unsigned}");
            }
        }
    }

    #[test]
    fn non_numeric_pairs_have_no_conversion() {
        assert_eq!(find_numeric_conversion(Bool, Int), None);
        assert_eq!(find_numeric_conversion(Int, Object), None);
        assert_eq!(find_numeric_conversion(Int, Int), None);
    }
}
