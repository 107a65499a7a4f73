//! Fast-path operator tables.
//!
//! One literal table per operator family, indexed by the classifier's
//! category of each operand (see [`TypeCategory`]). An entry is either `ERR`
//! (miss: fall back to full resolution) or the operand types and lifted flag
//! of the built-in operator that full resolution would select. The tables are
//! pure data so they can be checked cell by cell against the language rules.
//!
//! Promotion follows the usual numeric rules: narrow integers and `char`
//! widen to `int`; `uint` paired with a signed type widens to `long`; `ulong`
//! has no signed supertype, so mixing it with a signed type misses. Lifted
//! categories mirror the non-lifted ones with lifted results.

use opsel_core::{
    BinaryOperator, BinaryOperatorKind, BuiltinType, DataType, OperandTypes, UnaryOperator,
    UnaryOperatorKind,
};

use crate::classify::{TypeCategory, classify};

/// Operand types and lifted flag of a table hit.
type Entry = Option<(OperandTypes, bool)>;

const fn hit(ty: BuiltinType, lifted: bool) -> Entry {
    Some((OperandTypes::Builtin(ty), lifted))
}

const ERR: Entry = None;
const OBJ: Entry = hit(BuiltinType::Object, false);
const STR: Entry = hit(BuiltinType::String, false);
const OSC: Entry = Some((OperandTypes::ObjectAndString, false));
const SOC: Entry = Some((OperandTypes::StringAndObject, false));
const BOL: Entry = hit(BuiltinType::Bool, false);
const CHR: Entry = hit(BuiltinType::Char, false);
const I08: Entry = hit(BuiltinType::SByte, false);
const I16: Entry = hit(BuiltinType::Short, false);
const I32: Entry = hit(BuiltinType::Int, false);
const I64: Entry = hit(BuiltinType::Long, false);
const U08: Entry = hit(BuiltinType::Byte, false);
const U16: Entry = hit(BuiltinType::UShort, false);
const U32: Entry = hit(BuiltinType::UInt, false);
const U64: Entry = hit(BuiltinType::ULong, false);
const R32: Entry = hit(BuiltinType::Float, false);
const R64: Entry = hit(BuiltinType::Double, false);
const DEC: Entry = hit(BuiltinType::Decimal, false);
const LBOL: Entry = hit(BuiltinType::Bool, true);
const LCHR: Entry = hit(BuiltinType::Char, true);
const LI08: Entry = hit(BuiltinType::SByte, true);
const LI16: Entry = hit(BuiltinType::Short, true);
const LI32: Entry = hit(BuiltinType::Int, true);
const LI64: Entry = hit(BuiltinType::Long, true);
const LU08: Entry = hit(BuiltinType::Byte, true);
const LU16: Entry = hit(BuiltinType::UShort, true);
const LU32: Entry = hit(BuiltinType::UInt, true);
const LU64: Entry = hit(BuiltinType::ULong, true);
const LR32: Entry = hit(BuiltinType::Float, true);
const LR64: Entry = hit(BuiltinType::Double, true);
const LDEC: Entry = hit(BuiltinType::Decimal, true);

// ============================================================================
// Unary tables
// ============================================================================

/// `++` and `--`, prefix and postfix.
#[rustfmt::skip]
static INCREMENT: [Entry; 28] = [
    ERR,  ERR,  ERR,  CHR,  I08,  I16,  I32,  I64,  U08,  U16,  U32,  U64,  R32,  R64,  DEC, // obj..dec
    ERR,  LCHR, LI08, LI16, LI32, LI64, LU08, LU16, LU32, LU64, LR32, LR64, LDEC,       // bool?..dec?
];

/// Unary `+`.
#[rustfmt::skip]
static PLUS: [Entry; 28] = [
    ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  R32,  R64,  DEC, // obj..dec
    ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC,       // bool?..dec?
];

/// Unary `-`.
#[rustfmt::skip]
static MINUS: [Entry; 28] = [
    ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  I64,  ERR,  R32,  R64,  DEC, // obj..dec
    ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC,       // bool?..dec?
];

/// `!`
#[rustfmt::skip]
static LOGICAL_NEGATION: [Entry; 28] = [
    ERR,  ERR,  BOL,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR, // obj..dec
    LBOL, ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,       // bool?..dec?
];

/// `~`
#[rustfmt::skip]
static BITWISE_COMPLEMENT: [Entry; 28] = [
    ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  ERR,  ERR,  ERR, // obj..dec
    ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, ERR,  ERR,  ERR,       // bool?..dec?
];

// ============================================================================
// Binary tables (row: left operand, column: right operand)
// ============================================================================

/// `*`, `-`, `/`, `%` and the relational operators.
#[rustfmt::skip]
static ARITHMETIC: [[Entry; 28]; 28] = [
    //           obj   str   bool  chr   i08   i16   i32   i64   u08   u16   u32   u64   r32   r64   dec   bool? chr?  i08?  i16?  i32?  i64?  u08?  u16?  u32?  u64?  r32?  r64?  dec?
    /* obj   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* str   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* bool  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* chr   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  R32,  R64,  DEC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* i08   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  I64,  ERR,  R32,  R64,  DEC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i16   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  I64,  ERR,  R32,  R64,  DEC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i32   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  I64,  ERR,  R32,  R64,  DEC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i64   */ [ERR,  ERR,  ERR,  I64,  I64,  I64,  I64,  I64,  I64,  I64,  I64,  ERR,  R32,  R64,  DEC,  ERR,  LI64, LI64, LI64, LI64, LI64, LI64, LI64, LI64, ERR,  LR32, LR64, LDEC],
    /* u08   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  R32,  R64,  DEC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* u16   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  R32,  R64,  DEC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* u32   */ [ERR,  ERR,  ERR,  U32,  I64,  I64,  I64,  I64,  U32,  U32,  U32,  U64,  R32,  R64,  DEC,  ERR,  LU32, LI64, LI64, LI64, LI64, LU32, LU32, LU32, LU64, LR32, LR64, LDEC],
    /* u64   */ [ERR,  ERR,  ERR,  U64,  ERR,  ERR,  ERR,  ERR,  U64,  U64,  U64,  U64,  R32,  R64,  DEC,  ERR,  LU64, ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, LR32, LR64, LDEC],
    /* r32   */ [ERR,  ERR,  ERR,  R32,  R32,  R32,  R32,  R32,  R32,  R32,  R32,  R32,  R32,  R64,  ERR,  ERR,  LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR64, ERR],
    /* r64   */ [ERR,  ERR,  ERR,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  ERR,  ERR,  LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, ERR],
    /* dec   */ [ERR,  ERR,  ERR,  DEC,  DEC,  DEC,  DEC,  DEC,  DEC,  DEC,  DEC,  DEC,  ERR,  ERR,  DEC,  ERR,  LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, ERR,  ERR,  LDEC],
    /* bool? */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* chr?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC, ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* i08?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC, ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i16?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC, ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i32?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC, ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i64?  */ [ERR,  ERR,  ERR,  LI64, LI64, LI64, LI64, LI64, LI64, LI64, LI64, ERR,  LR32, LR64, LDEC, ERR,  LI64, LI64, LI64, LI64, LI64, LI64, LI64, LI64, ERR,  LR32, LR64, LDEC],
    /* u08?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC, ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* u16?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC, ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* u32?  */ [ERR,  ERR,  ERR,  LU32, LI64, LI64, LI64, LI64, LU32, LU32, LU32, LU64, LR32, LR64, LDEC, ERR,  LU32, LI64, LI64, LI64, LI64, LU32, LU32, LU32, LU64, LR32, LR64, LDEC],
    /* u64?  */ [ERR,  ERR,  ERR,  LU64, ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, LR32, LR64, LDEC, ERR,  LU64, ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, LR32, LR64, LDEC],
    /* r32?  */ [ERR,  ERR,  ERR,  LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR64, ERR,  ERR,  LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR64, ERR],
    /* r64?  */ [ERR,  ERR,  ERR,  LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, ERR,  ERR,  LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, ERR],
    /* dec?  */ [ERR,  ERR,  ERR,  LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, ERR,  ERR,  LDEC, ERR,  LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, ERR,  ERR,  LDEC],
];

/// `+`, including string concatenation.
#[rustfmt::skip]
static ADDITION: [[Entry; 28]; 28] = [
    //           obj   str   bool  chr   i08   i16   i32   i64   u08   u16   u32   u64   r32   r64   dec   bool? chr?  i08?  i16?  i32?  i64?  u08?  u16?  u32?  u64?  r32?  r64?  dec?
    /* obj   */ [ERR,  OSC,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* str   */ [SOC,  STR,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC,  SOC],
    /* bool  */ [ERR,  OSC,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* chr   */ [ERR,  OSC,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  R32,  R64,  DEC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* i08   */ [ERR,  OSC,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  I64,  ERR,  R32,  R64,  DEC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i16   */ [ERR,  OSC,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  I64,  ERR,  R32,  R64,  DEC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i32   */ [ERR,  OSC,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  I64,  ERR,  R32,  R64,  DEC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i64   */ [ERR,  OSC,  ERR,  I64,  I64,  I64,  I64,  I64,  I64,  I64,  I64,  ERR,  R32,  R64,  DEC,  ERR,  LI64, LI64, LI64, LI64, LI64, LI64, LI64, LI64, ERR,  LR32, LR64, LDEC],
    /* u08   */ [ERR,  OSC,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  R32,  R64,  DEC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* u16   */ [ERR,  OSC,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  R32,  R64,  DEC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* u32   */ [ERR,  OSC,  ERR,  U32,  I64,  I64,  I64,  I64,  U32,  U32,  U32,  U64,  R32,  R64,  DEC,  ERR,  LU32, LI64, LI64, LI64, LI64, LU32, LU32, LU32, LU64, LR32, LR64, LDEC],
    /* u64   */ [ERR,  OSC,  ERR,  U64,  ERR,  ERR,  ERR,  ERR,  U64,  U64,  U64,  U64,  R32,  R64,  DEC,  ERR,  LU64, ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, LR32, LR64, LDEC],
    /* r32   */ [ERR,  OSC,  ERR,  R32,  R32,  R32,  R32,  R32,  R32,  R32,  R32,  R32,  R32,  R64,  ERR,  ERR,  LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR64, ERR],
    /* r64   */ [ERR,  OSC,  ERR,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  ERR,  ERR,  LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, ERR],
    /* dec   */ [ERR,  OSC,  ERR,  DEC,  DEC,  DEC,  DEC,  DEC,  DEC,  DEC,  DEC,  DEC,  ERR,  ERR,  DEC,  ERR,  LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, ERR,  ERR,  LDEC],
    /* bool? */ [ERR,  OSC,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* chr?  */ [ERR,  OSC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC, ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* i08?  */ [ERR,  OSC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC, ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i16?  */ [ERR,  OSC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC, ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i32?  */ [ERR,  OSC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC, ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i64?  */ [ERR,  OSC,  ERR,  LI64, LI64, LI64, LI64, LI64, LI64, LI64, LI64, ERR,  LR32, LR64, LDEC, ERR,  LI64, LI64, LI64, LI64, LI64, LI64, LI64, LI64, ERR,  LR32, LR64, LDEC],
    /* u08?  */ [ERR,  OSC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC, ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* u16?  */ [ERR,  OSC,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC, ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* u32?  */ [ERR,  OSC,  ERR,  LU32, LI64, LI64, LI64, LI64, LU32, LU32, LU32, LU64, LR32, LR64, LDEC, ERR,  LU32, LI64, LI64, LI64, LI64, LU32, LU32, LU32, LU64, LR32, LR64, LDEC],
    /* u64?  */ [ERR,  OSC,  ERR,  LU64, ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, LR32, LR64, LDEC, ERR,  LU64, ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, LR32, LR64, LDEC],
    /* r32?  */ [ERR,  OSC,  ERR,  LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR64, ERR,  ERR,  LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR64, ERR],
    /* r64?  */ [ERR,  OSC,  ERR,  LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, ERR,  ERR,  LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, ERR],
    /* dec?  */ [ERR,  OSC,  ERR,  LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, ERR,  ERR,  LDEC, ERR,  LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, ERR,  ERR,  LDEC],
];

/// `<<` and `>>`. The right operand always converts to `int`.
#[rustfmt::skip]
static SHIFT: [[Entry; 28]; 28] = [
    //           obj   str   bool  chr   i08   i16   i32   i64   u08   u16   u32   u64   r32   r64   dec   bool? chr?  i08?  i16?  i32?  i64?  u08?  u16?  u32?  u64?  r32?  r64?  dec?
    /* obj   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* str   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* bool  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* chr   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  ERR,  I32,  I32,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* i08   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  ERR,  I32,  I32,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* i16   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  ERR,  I32,  I32,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* i32   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  ERR,  I32,  I32,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* i64   */ [ERR,  ERR,  ERR,  I64,  I64,  I64,  I64,  ERR,  I64,  I64,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI64, LI64, LI64, LI64, ERR,  LI64, LI64, ERR,  ERR,  ERR,  ERR,  ERR],
    /* u08   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  ERR,  I32,  I32,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* u16   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  ERR,  I32,  I32,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* u32   */ [ERR,  ERR,  ERR,  U32,  U32,  U32,  U32,  ERR,  U32,  U32,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LU32, LU32, LU32, LU32, ERR,  LU32, LU32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* u64   */ [ERR,  ERR,  ERR,  U64,  U64,  U64,  U64,  ERR,  U64,  U64,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, ERR,  LU64, LU64, ERR,  ERR,  ERR,  ERR,  ERR],
    /* r32   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* r64   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* dec   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* bool? */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* chr?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* i08?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* i16?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* i32?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* i64?  */ [ERR,  ERR,  ERR,  LI64, LI64, LI64, LI64, ERR,  LI64, LI64, ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI64, LI64, LI64, LI64, ERR,  LI64, LI64, ERR,  ERR,  ERR,  ERR,  ERR],
    /* u08?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* u16?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, ERR,  LI32, LI32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* u32?  */ [ERR,  ERR,  ERR,  LU32, LU32, LU32, LU32, ERR,  LU32, LU32, ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LU32, LU32, LU32, LU32, ERR,  LU32, LU32, ERR,  ERR,  ERR,  ERR,  ERR],
    /* u64?  */ [ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, ERR,  LU64, LU64, ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, ERR,  LU64, LU64, ERR,  ERR,  ERR,  ERR,  ERR],
    /* r32?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* r64?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* dec?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
];

/// `==` and `!=`.
#[rustfmt::skip]
static EQUALITY: [[Entry; 28]; 28] = [
    //           obj   str   bool  chr   i08   i16   i32   i64   u08   u16   u32   u64   r32   r64   dec   bool? chr?  i08?  i16?  i32?  i64?  u08?  u16?  u32?  u64?  r32?  r64?  dec?
    /* obj   */ [OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ],
    /* str   */ [OBJ,  STR,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ],
    /* bool  */ [OBJ,  OBJ,  BOL,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  LBOL, OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ],
    /* chr   */ [OBJ,  OBJ,  OBJ,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  R32,  R64,  DEC,  OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* i08   */ [OBJ,  OBJ,  OBJ,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  I64,  ERR,  R32,  R64,  DEC,  OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i16   */ [OBJ,  OBJ,  OBJ,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  I64,  ERR,  R32,  R64,  DEC,  OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i32   */ [OBJ,  OBJ,  OBJ,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  I64,  ERR,  R32,  R64,  DEC,  OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i64   */ [OBJ,  OBJ,  OBJ,  I64,  I64,  I64,  I64,  I64,  I64,  I64,  I64,  ERR,  R32,  R64,  DEC,  OBJ,  LI64, LI64, LI64, LI64, LI64, LI64, LI64, LI64, ERR,  LR32, LR64, LDEC],
    /* u08   */ [OBJ,  OBJ,  OBJ,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  R32,  R64,  DEC,  OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* u16   */ [OBJ,  OBJ,  OBJ,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  R32,  R64,  DEC,  OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* u32   */ [OBJ,  OBJ,  OBJ,  U32,  I64,  I64,  I64,  I64,  U32,  U32,  U32,  U64,  R32,  R64,  DEC,  OBJ,  LU32, LI64, LI64, LI64, LI64, LU32, LU32, LU32, LU64, LR32, LR64, LDEC],
    /* u64   */ [OBJ,  OBJ,  OBJ,  U64,  ERR,  ERR,  ERR,  ERR,  U64,  U64,  U64,  U64,  R32,  R64,  DEC,  OBJ,  LU64, ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, LR32, LR64, LDEC],
    /* r32   */ [OBJ,  OBJ,  OBJ,  R32,  R32,  R32,  R32,  R32,  R32,  R32,  R32,  R32,  R32,  R64,  OBJ,  OBJ,  LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR64, OBJ],
    /* r64   */ [OBJ,  OBJ,  OBJ,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  R64,  OBJ,  OBJ,  LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, OBJ],
    /* dec   */ [OBJ,  OBJ,  OBJ,  DEC,  DEC,  DEC,  DEC,  DEC,  DEC,  DEC,  DEC,  DEC,  OBJ,  OBJ,  DEC,  OBJ,  LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, OBJ,  OBJ,  LDEC],
    /* bool? */ [OBJ,  OBJ,  LBOL, OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  LBOL, OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ,  OBJ],
    /* chr?  */ [OBJ,  OBJ,  OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC, OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* i08?  */ [OBJ,  OBJ,  OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC, OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i16?  */ [OBJ,  OBJ,  OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC, OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i32?  */ [OBJ,  OBJ,  OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC, OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  LR32, LR64, LDEC],
    /* i64?  */ [OBJ,  OBJ,  OBJ,  LI64, LI64, LI64, LI64, LI64, LI64, LI64, LI64, ERR,  LR32, LR64, LDEC, OBJ,  LI64, LI64, LI64, LI64, LI64, LI64, LI64, LI64, ERR,  LR32, LR64, LDEC],
    /* u08?  */ [OBJ,  OBJ,  OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC, OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* u16?  */ [OBJ,  OBJ,  OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC, OBJ,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, LR32, LR64, LDEC],
    /* u32?  */ [OBJ,  OBJ,  OBJ,  LU32, LI64, LI64, LI64, LI64, LU32, LU32, LU32, LU64, LR32, LR64, LDEC, OBJ,  LU32, LI64, LI64, LI64, LI64, LU32, LU32, LU32, LU64, LR32, LR64, LDEC],
    /* u64?  */ [OBJ,  OBJ,  OBJ,  LU64, ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, LR32, LR64, LDEC, OBJ,  LU64, ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, LR32, LR64, LDEC],
    /* r32?  */ [OBJ,  OBJ,  OBJ,  LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR64, OBJ,  OBJ,  LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR32, LR64, OBJ],
    /* r64?  */ [OBJ,  OBJ,  OBJ,  LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, OBJ,  OBJ,  LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, LR64, OBJ],
    /* dec?  */ [OBJ,  OBJ,  OBJ,  LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, OBJ,  OBJ,  LDEC, OBJ,  LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, LDEC, OBJ,  OBJ,  LDEC],
];

/// `&`, `|` and `^`.
#[rustfmt::skip]
static LOGICAL: [[Entry; 28]; 28] = [
    //           obj   str   bool  chr   i08   i16   i32   i64   u08   u16   u32   u64   r32   r64   dec   bool? chr?  i08?  i16?  i32?  i64?  u08?  u16?  u32?  u64?  r32?  r64?  dec?
    /* obj   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* str   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* bool  */ [ERR,  ERR,  BOL,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LBOL, ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* chr   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, ERR,  ERR,  ERR],
    /* i08   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  I64,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  ERR,  ERR,  ERR],
    /* i16   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  I64,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  ERR,  ERR,  ERR],
    /* i32   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  I64,  ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  ERR,  ERR,  ERR],
    /* i64   */ [ERR,  ERR,  ERR,  I64,  I64,  I64,  I64,  I64,  I64,  I64,  I64,  ERR,  ERR,  ERR,  ERR,  ERR,  LI64, LI64, LI64, LI64, LI64, LI64, LI64, LI64, ERR,  ERR,  ERR,  ERR],
    /* u08   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, ERR,  ERR,  ERR],
    /* u16   */ [ERR,  ERR,  ERR,  I32,  I32,  I32,  I32,  I64,  I32,  I32,  U32,  U64,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, ERR,  ERR,  ERR],
    /* u32   */ [ERR,  ERR,  ERR,  U32,  I64,  I64,  I64,  I64,  U32,  U32,  U32,  U64,  ERR,  ERR,  ERR,  ERR,  LU32, LI64, LI64, LI64, LI64, LU32, LU32, LU32, LU64, ERR,  ERR,  ERR],
    /* u64   */ [ERR,  ERR,  ERR,  U64,  ERR,  ERR,  ERR,  ERR,  U64,  U64,  U64,  U64,  ERR,  ERR,  ERR,  ERR,  LU64, ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, ERR,  ERR,  ERR],
    /* r32   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* r64   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* dec   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* bool? */ [ERR,  ERR,  LBOL, ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  LBOL, ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* chr?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, ERR,  ERR,  ERR],
    /* i08?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  ERR,  ERR,  ERR],
    /* i16?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  ERR,  ERR,  ERR],
    /* i32?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LI64, ERR,  ERR,  ERR,  ERR],
    /* i64?  */ [ERR,  ERR,  ERR,  LI64, LI64, LI64, LI64, LI64, LI64, LI64, LI64, ERR,  ERR,  ERR,  ERR,  ERR,  LI64, LI64, LI64, LI64, LI64, LI64, LI64, LI64, ERR,  ERR,  ERR,  ERR],
    /* u08?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, ERR,  ERR,  ERR],
    /* u16?  */ [ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, ERR,  ERR,  ERR,  ERR,  LI32, LI32, LI32, LI32, LI64, LI32, LI32, LU32, LU64, ERR,  ERR,  ERR],
    /* u32?  */ [ERR,  ERR,  ERR,  LU32, LI64, LI64, LI64, LI64, LU32, LU32, LU32, LU64, ERR,  ERR,  ERR,  ERR,  LU32, LI64, LI64, LI64, LI64, LU32, LU32, LU32, LU64, ERR,  ERR,  ERR],
    /* u64?  */ [ERR,  ERR,  ERR,  LU64, ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, ERR,  ERR,  ERR,  ERR,  LU64, ERR,  ERR,  ERR,  ERR,  LU64, LU64, LU64, LU64, ERR,  ERR,  ERR],
    /* r32?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* r64?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* dec?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
];

/// `&&` and `||`. Only two non-nullable `bool` operands qualify.
#[rustfmt::skip]
static CONDITIONAL: [[Entry; 28]; 28] = [
    //           obj   str   bool  chr   i08   i16   i32   i64   u08   u16   u32   u64   r32   r64   dec   bool? chr?  i08?  i16?  i32?  i64?  u08?  u16?  u32?  u64?  r32?  r64?  dec?
    /* obj   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* str   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* bool  */ [ERR,  ERR,  BOL,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* chr   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* i08   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* i16   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* i32   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* i64   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* u08   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* u16   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* u32   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* u64   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* r32   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* r64   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* dec   */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* bool? */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* chr?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* i08?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* i16?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* i32?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* i64?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* u08?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* u16?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* u32?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* u64?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* r32?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* r64?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
    /* dec?  */ [ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR,  ERR],
];

// ============================================================================
// Lookup
// ============================================================================

/// Fast-path lookup for a unary operator.
///
/// Returns the fully qualified kind of the built-in operator that applies, or
/// `None` when the operand is not classifiable or the table has no entry.
pub fn unary_easy_out(op: UnaryOperator, operand: &DataType) -> Option<UnaryOperatorKind> {
    let category = classify(operand)?;
    let table = match op {
        UnaryOperator::PostfixIncrement
        | UnaryOperator::PostfixDecrement
        | UnaryOperator::PrefixIncrement
        | UnaryOperator::PrefixDecrement => &INCREMENT,
        UnaryOperator::UnaryPlus => &PLUS,
        UnaryOperator::UnaryMinus => &MINUS,
        UnaryOperator::LogicalNegation => &LOGICAL_NEGATION,
        UnaryOperator::BitwiseComplement => &BITWISE_COMPLEMENT,
    };
    let (operands, lifted) = table[category.index()]?;
    Some(UnaryOperatorKind::new(op, operands, lifted))
}

/// Fast-path lookup for a binary operator.
///
/// Both operands are classified independently; shift operators use the same
/// lookup with the right operand's category as the column.
pub fn binary_easy_out(
    op: BinaryOperator,
    left: &DataType,
    right: &DataType,
) -> Option<BinaryOperatorKind> {
    let left = classify(left)?;
    let right = classify(right)?;
    let (operands, lifted) = binary_table(op)[left.index()][right.index()]?;
    Some(BinaryOperatorKind::new(op, operands, lifted))
}

fn binary_table(op: BinaryOperator) -> &'static [[Entry; TypeCategory::COUNT]; TypeCategory::COUNT] {
    match op {
        BinaryOperator::Multiplication
        | BinaryOperator::Subtraction
        | BinaryOperator::Division
        | BinaryOperator::Remainder
        | BinaryOperator::GreaterThan
        | BinaryOperator::LessThan
        | BinaryOperator::GreaterThanOrEqual
        | BinaryOperator::LessThanOrEqual => &ARITHMETIC,
        BinaryOperator::Addition => &ADDITION,
        BinaryOperator::LeftShift | BinaryOperator::RightShift => &SHIFT,
        BinaryOperator::Equal | BinaryOperator::NotEqual => &EQUALITY,
        BinaryOperator::And | BinaryOperator::Or | BinaryOperator::Xor => &LOGICAL,
        BinaryOperator::LogicalAnd | BinaryOperator::LogicalOr => &CONDITIONAL,
    }
}
