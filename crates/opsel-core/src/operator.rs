//! Operators and their composite kinds.
//!
//! An operator kind is the triple (operator, operand types, lifted). It is
//! kept as a plain struct rather than a packed integer; the fast-path tables
//! produce `OperandTypes` values directly.

use std::fmt;

use crate::BuiltinType;

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `x++`
    PostfixIncrement,
    /// `x--`
    PostfixDecrement,
    /// `++x`
    PrefixIncrement,
    /// `--x`
    PrefixDecrement,
    /// `+x`
    UnaryPlus,
    /// `-x`
    UnaryMinus,
    /// `!x`
    LogicalNegation,
    /// `~x`
    BitwiseComplement,
}

impl UnaryOperator {
    pub const ALL: [UnaryOperator; 8] = [
        UnaryOperator::PostfixIncrement,
        UnaryOperator::PostfixDecrement,
        UnaryOperator::PrefixIncrement,
        UnaryOperator::PrefixDecrement,
        UnaryOperator::UnaryPlus,
        UnaryOperator::UnaryMinus,
        UnaryOperator::LogicalNegation,
        UnaryOperator::BitwiseComplement,
    ];

    /// Source-level symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::PostfixIncrement | UnaryOperator::PrefixIncrement => "++",
            UnaryOperator::PostfixDecrement | UnaryOperator::PrefixDecrement => "--",
            UnaryOperator::UnaryPlus => "+",
            UnaryOperator::UnaryMinus => "-",
            UnaryOperator::LogicalNegation => "!",
            UnaryOperator::BitwiseComplement => "~",
        }
    }

    /// Name of the method that implements this operator on a user type.
    ///
    /// Prefix and postfix forms share one method.
    pub const fn method_name(self) -> &'static str {
        match self {
            UnaryOperator::PostfixIncrement | UnaryOperator::PrefixIncrement => "op_Increment",
            UnaryOperator::PostfixDecrement | UnaryOperator::PrefixDecrement => "op_Decrement",
            UnaryOperator::UnaryPlus => "op_UnaryPlus",
            UnaryOperator::UnaryMinus => "op_UnaryNegation",
            UnaryOperator::LogicalNegation => "op_LogicalNot",
            UnaryOperator::BitwiseComplement => "op_OnesComplement",
        }
    }

    pub const fn is_increment_or_decrement(self) -> bool {
        matches!(
            self,
            UnaryOperator::PostfixIncrement
                | UnaryOperator::PostfixDecrement
                | UnaryOperator::PrefixIncrement
                | UnaryOperator::PrefixDecrement
        )
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Multiplication,
    Addition,
    Subtraction,
    Division,
    Remainder,
    LeftShift,
    RightShift,
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 18] = [
        BinaryOperator::Multiplication,
        BinaryOperator::Addition,
        BinaryOperator::Subtraction,
        BinaryOperator::Division,
        BinaryOperator::Remainder,
        BinaryOperator::LeftShift,
        BinaryOperator::RightShift,
        BinaryOperator::Equal,
        BinaryOperator::NotEqual,
        BinaryOperator::GreaterThan,
        BinaryOperator::LessThan,
        BinaryOperator::GreaterThanOrEqual,
        BinaryOperator::LessThanOrEqual,
        BinaryOperator::And,
        BinaryOperator::Or,
        BinaryOperator::Xor,
        BinaryOperator::LogicalAnd,
        BinaryOperator::LogicalOr,
    ];

    /// Source-level symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Multiplication => "*",
            BinaryOperator::Addition => "+",
            BinaryOperator::Subtraction => "-",
            BinaryOperator::Division => "/",
            BinaryOperator::Remainder => "%",
            BinaryOperator::LeftShift => "<<",
            BinaryOperator::RightShift => ">>",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::And => "&",
            BinaryOperator::Or => "|",
            BinaryOperator::Xor => "^",
            BinaryOperator::LogicalAnd => "&&",
            BinaryOperator::LogicalOr => "||",
        }
    }

    /// Name of the method that implements this operator on a user type.
    ///
    /// `None` for `&&` and `||`, which cannot be declared directly.
    pub const fn method_name(self) -> Option<&'static str> {
        let name = match self {
            BinaryOperator::Multiplication => "op_Multiply",
            BinaryOperator::Addition => "op_Addition",
            BinaryOperator::Subtraction => "op_Subtraction",
            BinaryOperator::Division => "op_Division",
            BinaryOperator::Remainder => "op_Modulus",
            BinaryOperator::LeftShift => "op_LeftShift",
            BinaryOperator::RightShift => "op_RightShift",
            BinaryOperator::Equal => "op_Equality",
            BinaryOperator::NotEqual => "op_Inequality",
            BinaryOperator::GreaterThan => "op_GreaterThan",
            BinaryOperator::LessThan => "op_LessThan",
            BinaryOperator::GreaterThanOrEqual => "op_GreaterThanOrEqual",
            BinaryOperator::LessThanOrEqual => "op_LessThanOrEqual",
            BinaryOperator::And => "op_BitwiseAnd",
            BinaryOperator::Or => "op_BitwiseOr",
            BinaryOperator::Xor => "op_ExclusiveOr",
            BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr => return None,
        };
        Some(name)
    }

    /// Equality and relational operators. Their lifted forms keep a `bool` result.
    pub const fn is_comparison(self) -> bool {
        matches!(
            self,
            BinaryOperator::Equal
                | BinaryOperator::NotEqual
                | BinaryOperator::GreaterThan
                | BinaryOperator::LessThan
                | BinaryOperator::GreaterThanOrEqual
                | BinaryOperator::LessThanOrEqual
        )
    }

    pub const fn is_shift(self) -> bool {
        matches!(self, BinaryOperator::LeftShift | BinaryOperator::RightShift)
    }

    /// `&&` and `||` have no lifted forms.
    pub const fn is_conditional(self) -> bool {
        matches!(self, BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The operand-type component of an operator kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandTypes {
    /// Every operand has this built-in type (shift: the left operand).
    Builtin(BuiltinType),
    /// `object + string`
    ObjectAndString,
    /// `string + object`
    StringAndObject,
    /// A user-declared operator method.
    UserDefined,
}

impl OperandTypes {
    /// Only value-type built-ins and user-defined operators have lifted forms.
    pub const fn can_lift(self) -> bool {
        match self {
            OperandTypes::Builtin(ty) => ty.is_value_type(),
            OperandTypes::UserDefined => true,
            OperandTypes::ObjectAndString | OperandTypes::StringAndObject => false,
        }
    }
}

/// Unary operator kind: (operator, operand types, lifted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnaryOperatorKind {
    operator: UnaryOperator,
    operands: OperandTypes,
    lifted: bool,
}

impl UnaryOperatorKind {
    pub fn new(operator: UnaryOperator, operands: OperandTypes, lifted: bool) -> Self {
        debug_assert!(
            !lifted || operands.can_lift(),
            "{operands:?} has no lifted form"
        );
        Self {
            operator,
            operands,
            lifted,
        }
    }

    pub fn builtin(operator: UnaryOperator, ty: BuiltinType) -> Self {
        Self::new(operator, OperandTypes::Builtin(ty), false)
    }

    pub fn user_defined(operator: UnaryOperator) -> Self {
        Self::new(operator, OperandTypes::UserDefined, false)
    }

    pub fn operator(self) -> UnaryOperator {
        self.operator
    }

    pub fn operands(self) -> OperandTypes {
        self.operands
    }

    pub fn is_lifted(self) -> bool {
        self.lifted
    }

    /// The lifted counterpart of this kind.
    pub fn to_lifted(self) -> Self {
        Self::new(self.operator, self.operands, true)
    }

    /// The same kind applied to a different operator with the same method name.
    pub fn with_operator(self, operator: UnaryOperator) -> Self {
        Self { operator, ..self }
    }
}

/// Binary operator kind: (operator, operand types, lifted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryOperatorKind {
    operator: BinaryOperator,
    operands: OperandTypes,
    lifted: bool,
}

impl BinaryOperatorKind {
    pub fn new(operator: BinaryOperator, operands: OperandTypes, lifted: bool) -> Self {
        debug_assert!(
            !lifted || (operands.can_lift() && !operator.is_conditional()),
            "{operator:?} over {operands:?} has no lifted form"
        );
        Self {
            operator,
            operands,
            lifted,
        }
    }

    pub fn builtin(operator: BinaryOperator, ty: BuiltinType) -> Self {
        Self::new(operator, OperandTypes::Builtin(ty), false)
    }

    pub fn user_defined(operator: BinaryOperator) -> Self {
        Self::new(operator, OperandTypes::UserDefined, false)
    }

    pub fn operator(self) -> BinaryOperator {
        self.operator
    }

    pub fn operands(self) -> OperandTypes {
        self.operands
    }

    pub fn is_lifted(self) -> bool {
        self.lifted
    }

    /// The lifted counterpart of this kind.
    pub fn to_lifted(self) -> Self {
        Self::new(self.operator, self.operands, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_forms_share_method_name() {
        assert_eq!(
            UnaryOperator::PrefixIncrement.method_name(),
            UnaryOperator::PostfixIncrement.method_name()
        );
        assert_ne!(
            UnaryOperator::PrefixIncrement.method_name(),
            UnaryOperator::PrefixDecrement.method_name()
        );
    }

    #[test]
    fn conditional_operators_have_no_method() {
        assert_eq!(BinaryOperator::LogicalAnd.method_name(), None);
        assert_eq!(BinaryOperator::And.method_name(), Some("op_BitwiseAnd"));
    }

    #[test]
    fn comparison_classification() {
        let comparisons: Vec<_> = BinaryOperator::ALL
            .iter()
            .filter(|op| op.is_comparison())
            .collect();
        assert_eq!(comparisons.len(), 6);
        assert!(!BinaryOperator::Addition.is_comparison());
    }

    #[test]
    fn lifting_kinds() {
        let kind = UnaryOperatorKind::builtin(UnaryOperator::UnaryMinus, BuiltinType::Int);
        let lifted = kind.to_lifted();
        assert!(lifted.is_lifted());
        assert_eq!(lifted.operands(), kind.operands());
        assert_ne!(kind, lifted);
    }

    #[test]
    fn string_operands_cannot_lift() {
        assert!(!OperandTypes::Builtin(BuiltinType::String).can_lift());
        assert!(!OperandTypes::StringAndObject.can_lift());
        assert!(OperandTypes::Builtin(BuiltinType::Bool).can_lift());
        assert!(OperandTypes::UserDefined.can_lift());
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn lifted_object_kind_is_rejected() {
        let _ = BinaryOperatorKind::new(
            BinaryOperator::Equal,
            OperandTypes::Builtin(BuiltinType::Object),
            true,
        );
    }

    #[test]
    fn symbols() {
        assert_eq!(UnaryOperator::BitwiseComplement.to_string(), "~");
        assert_eq!(BinaryOperator::GreaterThanOrEqual.to_string(), ">=");
    }
}
