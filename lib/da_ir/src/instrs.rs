//! Dalvik bytecode instructions definitions.
//!
//! This is the normalized instruction set the register allocator works on:
//! constant pool references are resolved inline ([`Type`], [`FieldRef`],
//! [`MethodRef`]), branch targets are relative code unit offsets, and the
//! synthetic `load-param` pseudo-instructions bind incoming parameters to
//! registers at method entry. Switch and array payload pseudo-instructions
//! are kept out of line by the normalization pipeline and have no variant
//! here.

use crate::fields::FieldRef;
use crate::methods::MethodRef;
use crate::registers::{Reg, RegList, RegRange};
use crate::types::Type;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;

pub trait Instruction {
    fn mnemonic(&self) -> &str;
    fn size(&self) -> usize;
}

/// A single operand of an instruction, borrowed for rendering purposes.
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    Reg(Reg),
    Regs(&'a RegList),
    Range(&'a RegRange),
    Literal(i64),
    Offset(i32),
    String(&'a str),
    Type(&'a Type),
    Field(&'a FieldRef),
    Method(&'a MethodRef),
}

impl<'a> fmt::Display for Operand<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Reg(r) => write!(f, "{r}"),
            Self::Regs(list) => write!(f, "{list}"),
            Self::Range(range) => write!(f, "{range}"),
            Self::Literal(lit) => write!(f, "#+{lit:x}"),
            Self::Offset(off) => write!(f, "+{off}"),
            Self::String(s) => write!(f, "\"{}\"", s.replace('\n', "\\n")),
            Self::Type(t) => write!(f, "{t}"),
            Self::Field(fld) => write!(f, "{fld}"),
            Self::Method(m) => write!(f, "{m}"),
        }
    }
}

impl<'a> Serialize for Operand<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Reg(r) => r.serialize(serializer),
            Self::Regs(list) => list.serialize(serializer),
            Self::Range(range) => range.serialize(serializer),
            Self::Literal(lit) => serializer.serialize_i64(*lit),
            Self::Offset(off) => serializer.serialize_i32(*off),
            Self::String(s) => serializer.serialize_str(s),
            Self::Type(t) => serializer.collect_str(t),
            Self::Field(fld) => serializer.collect_str(fld),
            Self::Method(m) => serializer.collect_str(m),
        }
    }
}

/// The normalized Dalvik instruction type.
///
/// The enum is closed on purpose: downstream classification matches on it
/// without wildcard arms, so a new variant cannot be added without extending
/// every classification table.
#[derive(Debug, Clone, PartialEq)]
pub enum Instr {
    /// Waste cycles.
    Nop,

    /// Move the contents of one non-object register to another.
    Move(Reg, Reg),
    /// Move the contents of one non-object register to another.
    MoveFrom16(Reg, Reg),
    /// Move the contents of one non-object register to another.
    Move16(Reg, Reg),
    /// Move the contents of one register-pair to another.
    MoveWide(Reg, Reg),
    /// Move the contents of one register-pair to another.
    MoveWideFrom16(Reg, Reg),
    /// Move the contents of one register-pair to another.
    MoveWide16(Reg, Reg),
    /// Move the contents of one object-bearing register to another.
    MoveObject(Reg, Reg),
    /// Move the contents of one object-bearing register to another.
    MoveObjectFrom16(Reg, Reg),
    /// Move the contents of one object-bearing register to another.
    MoveObject16(Reg, Reg),

    /// Move the single-word non-object result of the most recent invoke into
    /// the indicated register.
    MoveResult(Reg),
    /// Move the double-word result of the most recent invoke into the
    /// indicated register pair.
    MoveResultWide(Reg),
    /// Move the object result of the most recent invoke or filled-new-array
    /// into the indicated register.
    MoveResultObject(Reg),
    /// Save a just-caught exception into the given register.
    MoveException(Reg),

    /// Return from a void method.
    ReturnVoid,
    /// Return from a single-width (32-bit) non-object value-returning method.
    Return(Reg),
    /// Return from a double-width (64-bit) value-returning method.
    ReturnWide(Reg),
    /// Return from an object-returning method.
    ReturnObject(Reg),

    /// Move the given literal value (sign-extended to 32 bits) into the
    /// specified register.
    Const4(Reg, i8),
    /// Move the given literal value (sign-extended to 32 bits) into the
    /// specified register.
    Const16(Reg, i16),
    /// Move the given literal value into the specified register.
    Const(Reg, i32),
    /// Move the given literal value (right-zero-extended to 32 bits) into the
    /// specified register.
    ConstHigh16(Reg, i16),
    /// Move the given literal value (sign-extended to 64 bits) into the
    /// specified register-pair.
    ConstWide16(Reg, i16),
    /// Move the given literal value (sign-extended to 64 bits) into the
    /// specified register-pair.
    ConstWide32(Reg, i32),
    /// Move the given literal value into the specified register-pair.
    ConstWide(Reg, i64),
    /// Move the given literal value (right-zero-extended to 64 bits) into the
    /// specified register-pair.
    ConstWideHigh16(Reg, i16),
    /// Move a reference to the given string into the specified register.
    ConstString(Reg, String),
    /// Move a reference to the given string into the specified register.
    ConstStringJumbo(Reg, String),
    /// Move a reference to the class of the given type into the specified
    /// register.
    ConstClass(Reg, Type),

    /// Acquire the monitor for the indicated object.
    MonitorEnter(Reg),
    /// Release the monitor for the indicated object.
    MonitorExit(Reg),

    /// Throw a `ClassCastException` if the reference in the given register
    /// cannot be cast to the indicated type.
    CheckCast(Reg, Type),
    /// Store in the given destination register 1 if the indicated reference
    /// is an instance of the given type, or 0 if not.
    InstanceOf(Reg, Reg, Type),
    /// Store in the given destination register the length of the indicated
    /// array, in entries.
    ArrayLength(Reg, Reg),

    /// Construct a new instance of the indicated type, storing a reference to
    /// it in the destination.
    NewInstance(Reg, Type),
    /// Construct a new array of the indicated type and size.
    NewArray(Reg, Reg, Type),
    /// Construct an array of the given type, filling it with the supplied
    /// contents. The constructed instance is stored as a result and must be
    /// moved with an immediately subsequent `move-result-object`.
    FilledNewArray(RegList, Type),
    /// Range-encoded variant of `filled-new-array`.
    FilledNewArrayRange(RegRange, Type),
    /// Fill the given array with the data of the payload at the given offset.
    FillArrayData(Reg, i32),

    /// Throw the indicated exception.
    Throw(Reg),

    /// Unconditionally jump to the indicated instruction.
    Goto(i8),
    /// Unconditionally jump to the indicated instruction.
    Goto16(i16),
    /// Unconditionally jump to the indicated instruction.
    Goto32(i32),

    /// Jump through the packed jump table at the given payload offset, based
    /// on the value in the given register.
    PackedSwitch(Reg, i32),
    /// Jump through the sparse jump table at the given payload offset, based
    /// on the value in the given register.
    SparseSwitch(Reg, i32),

    CmplFloat(Reg, Reg, Reg),
    CmpgFloat(Reg, Reg, Reg),
    CmplDouble(Reg, Reg, Reg),
    CmpgDouble(Reg, Reg, Reg),
    CmpLong(Reg, Reg, Reg),

    /// Branch to the given destination if the given two registers' values
    /// compare as specified.
    IfEq(Reg, Reg, i16),
    IfNe(Reg, Reg, i16),
    IfLt(Reg, Reg, i16),
    IfGe(Reg, Reg, i16),
    IfGt(Reg, Reg, i16),
    IfLe(Reg, Reg, i16),
    /// Branch to the given destination if the given register's value compares
    /// with 0 as specified.
    IfEqz(Reg, i16),
    IfNez(Reg, i16),
    IfLtz(Reg, i16),
    IfGez(Reg, i16),
    IfGtz(Reg, i16),
    IfLez(Reg, i16),

    /// Load from the identified index of the given array into the value
    /// register.
    Aget(Reg, Reg, Reg),
    AgetWide(Reg, Reg, Reg),
    AgetObject(Reg, Reg, Reg),
    AgetBoolean(Reg, Reg, Reg),
    AgetByte(Reg, Reg, Reg),
    AgetChar(Reg, Reg, Reg),
    AgetShort(Reg, Reg, Reg),
    /// Store the value register at the identified index of the given array.
    Aput(Reg, Reg, Reg),
    AputWide(Reg, Reg, Reg),
    AputObject(Reg, Reg, Reg),
    AputBoolean(Reg, Reg, Reg),
    AputByte(Reg, Reg, Reg),
    AputChar(Reg, Reg, Reg),
    AputShort(Reg, Reg, Reg),

    /// Load the identified instance field of the given object into the value
    /// register.
    Iget(Reg, Reg, FieldRef),
    IgetWide(Reg, Reg, FieldRef),
    IgetObject(Reg, Reg, FieldRef),
    IgetBoolean(Reg, Reg, FieldRef),
    IgetByte(Reg, Reg, FieldRef),
    IgetChar(Reg, Reg, FieldRef),
    IgetShort(Reg, Reg, FieldRef),
    /// Store the value register into the identified instance field of the
    /// given object.
    Iput(Reg, Reg, FieldRef),
    IputWide(Reg, Reg, FieldRef),
    IputObject(Reg, Reg, FieldRef),
    IputBoolean(Reg, Reg, FieldRef),
    IputByte(Reg, Reg, FieldRef),
    IputChar(Reg, Reg, FieldRef),
    IputShort(Reg, Reg, FieldRef),

    /// Load the identified static field into the value register.
    Sget(Reg, FieldRef),
    SgetWide(Reg, FieldRef),
    SgetObject(Reg, FieldRef),
    SgetBoolean(Reg, FieldRef),
    SgetByte(Reg, FieldRef),
    SgetChar(Reg, FieldRef),
    SgetShort(Reg, FieldRef),
    /// Store the value register into the identified static field.
    Sput(Reg, FieldRef),
    SputWide(Reg, FieldRef),
    SputObject(Reg, FieldRef),
    SputBoolean(Reg, FieldRef),
    SputByte(Reg, FieldRef),
    SputChar(Reg, FieldRef),
    SputShort(Reg, FieldRef),

    InvokeVirtual(RegList, MethodRef),
    InvokeSuper(RegList, MethodRef),
    InvokeDirect(RegList, MethodRef),
    InvokeStatic(RegList, MethodRef),
    InvokeInterface(RegList, MethodRef),
    InvokeVirtualRange(RegRange, MethodRef),
    InvokeSuperRange(RegRange, MethodRef),
    InvokeDirectRange(RegRange, MethodRef),
    InvokeStaticRange(RegRange, MethodRef),
    InvokeInterfaceRange(RegRange, MethodRef),

    /// Perform the identified unary operation on the source register, storing
    /// the result in the destination register.
    NegInt(Reg, Reg),
    NotInt(Reg, Reg),
    NegLong(Reg, Reg),
    NotLong(Reg, Reg),
    NegFloat(Reg, Reg),
    NegDouble(Reg, Reg),

    /// Convert the value of the source register, storing the result in the
    /// destination register.
    IntToLong(Reg, Reg),
    IntToFloat(Reg, Reg),
    IntToDouble(Reg, Reg),
    LongToInt(Reg, Reg),
    LongToFloat(Reg, Reg),
    LongToDouble(Reg, Reg),
    FloatToInt(Reg, Reg),
    FloatToLong(Reg, Reg),
    FloatToDouble(Reg, Reg),
    DoubleToInt(Reg, Reg),
    DoubleToLong(Reg, Reg),
    DoubleToFloat(Reg, Reg),
    IntToByte(Reg, Reg),
    IntToChar(Reg, Reg),
    IntToShort(Reg, Reg),

    /// Perform the identified binary operation on the two source registers,
    /// storing the result in the destination register.
    AddInt(Reg, Reg, Reg),
    SubInt(Reg, Reg, Reg),
    MulInt(Reg, Reg, Reg),
    DivInt(Reg, Reg, Reg),
    RemInt(Reg, Reg, Reg),
    AndInt(Reg, Reg, Reg),
    OrInt(Reg, Reg, Reg),
    XorInt(Reg, Reg, Reg),
    ShlInt(Reg, Reg, Reg),
    ShrInt(Reg, Reg, Reg),
    UshrInt(Reg, Reg, Reg),
    AddLong(Reg, Reg, Reg),
    SubLong(Reg, Reg, Reg),
    MulLong(Reg, Reg, Reg),
    DivLong(Reg, Reg, Reg),
    RemLong(Reg, Reg, Reg),
    AndLong(Reg, Reg, Reg),
    OrLong(Reg, Reg, Reg),
    XorLong(Reg, Reg, Reg),
    ShlLong(Reg, Reg, Reg),
    ShrLong(Reg, Reg, Reg),
    UshrLong(Reg, Reg, Reg),
    AddFloat(Reg, Reg, Reg),
    SubFloat(Reg, Reg, Reg),
    MulFloat(Reg, Reg, Reg),
    DivFloat(Reg, Reg, Reg),
    RemFloat(Reg, Reg, Reg),
    AddDouble(Reg, Reg, Reg),
    SubDouble(Reg, Reg, Reg),
    MulDouble(Reg, Reg, Reg),
    DivDouble(Reg, Reg, Reg),
    RemDouble(Reg, Reg, Reg),

    /// Perform the identified binary operation on the two registers, storing
    /// the result in the first one. These encodings are expected to be
    /// lowered to their three-address form before allocation.
    AddInt2addr(Reg, Reg),
    SubInt2addr(Reg, Reg),
    MulInt2addr(Reg, Reg),
    DivInt2addr(Reg, Reg),
    RemInt2addr(Reg, Reg),
    AndInt2addr(Reg, Reg),
    OrInt2addr(Reg, Reg),
    XorInt2addr(Reg, Reg),
    ShlInt2addr(Reg, Reg),
    ShrInt2addr(Reg, Reg),
    UshrInt2addr(Reg, Reg),
    AddLong2addr(Reg, Reg),
    SubLong2addr(Reg, Reg),
    MulLong2addr(Reg, Reg),
    DivLong2addr(Reg, Reg),
    RemLong2addr(Reg, Reg),
    AndLong2addr(Reg, Reg),
    OrLong2addr(Reg, Reg),
    XorLong2addr(Reg, Reg),
    ShlLong2addr(Reg, Reg),
    ShrLong2addr(Reg, Reg),
    UshrLong2addr(Reg, Reg),
    AddFloat2addr(Reg, Reg),
    SubFloat2addr(Reg, Reg),
    MulFloat2addr(Reg, Reg),
    DivFloat2addr(Reg, Reg),
    RemFloat2addr(Reg, Reg),
    AddDouble2addr(Reg, Reg),
    SubDouble2addr(Reg, Reg),
    MulDouble2addr(Reg, Reg),
    DivDouble2addr(Reg, Reg),
    RemDouble2addr(Reg, Reg),

    /// Perform the indicated binary op on the indicated register and literal
    /// value, storing the result in the destination register.
    AddIntLit16(Reg, Reg, i16),
    RsubInt(Reg, Reg, i16),
    MulIntLit16(Reg, Reg, i16),
    DivIntLit16(Reg, Reg, i16),
    RemIntLit16(Reg, Reg, i16),
    AndIntLit16(Reg, Reg, i16),
    OrIntLit16(Reg, Reg, i16),
    XorIntLit16(Reg, Reg, i16),
    AddIntLit8(Reg, Reg, i8),
    RsubIntLit8(Reg, Reg, i8),
    MulIntLit8(Reg, Reg, i8),
    DivIntLit8(Reg, Reg, i8),
    RemIntLit8(Reg, Reg, i8),
    AndIntLit8(Reg, Reg, i8),
    OrIntLit8(Reg, Reg, i8),
    XorIntLit8(Reg, Reg, i8),
    ShlIntLit8(Reg, Reg, i8),
    ShrIntLit8(Reg, Reg, i8),
    UshrIntLit8(Reg, Reg, i8),

    /// Synthetic: bind the next incoming non-wide primitive parameter to the
    /// given register. Emitted at method entry by the normalization pipeline,
    /// never encoded in a dex file.
    LoadParam(Reg),
    /// Synthetic: bind the next incoming reference parameter to the given
    /// register.
    LoadParamObject(Reg),
    /// Synthetic: bind the next incoming wide parameter to the given register
    /// pair.
    LoadParamWide(Reg),
}

impl Instruction for Instr {
    #[allow(clippy::too_many_lines)]
    fn mnemonic(&self) -> &str {
        match self {
            Self::Nop => "nop",
            Self::Move(..) => "move",
            Self::MoveFrom16(..) => "move/from16",
            Self::Move16(..) => "move/16",
            Self::MoveWide(..) => "move-wide",
            Self::MoveWideFrom16(..) => "move-wide/from16",
            Self::MoveWide16(..) => "move-wide/16",
            Self::MoveObject(..) => "move-object",
            Self::MoveObjectFrom16(..) => "move-object/from16",
            Self::MoveObject16(..) => "move-object/16",
            Self::MoveResult(..) => "move-result",
            Self::MoveResultWide(..) => "move-result-wide",
            Self::MoveResultObject(..) => "move-result-object",
            Self::MoveException(..) => "move-exception",
            Self::ReturnVoid => "return-void",
            Self::Return(..) => "return",
            Self::ReturnWide(..) => "return-wide",
            Self::ReturnObject(..) => "return-object",
            Self::Const4(..) => "const/4",
            Self::Const16(..) => "const/16",
            Self::Const(..) => "const",
            Self::ConstHigh16(..) => "const/high16",
            Self::ConstWide16(..) => "const-wide/16",
            Self::ConstWide32(..) => "const-wide/32",
            Self::ConstWide(..) => "const-wide",
            Self::ConstWideHigh16(..) => "const-wide/high16",
            Self::ConstString(..) => "const-string",
            Self::ConstStringJumbo(..) => "const-string/jumbo",
            Self::ConstClass(..) => "const-class",
            Self::MonitorEnter(..) => "monitor-enter",
            Self::MonitorExit(..) => "monitor-exit",
            Self::CheckCast(..) => "check-cast",
            Self::InstanceOf(..) => "instance-of",
            Self::ArrayLength(..) => "array-length",
            Self::NewInstance(..) => "new-instance",
            Self::NewArray(..) => "new-array",
            Self::FilledNewArray(..) => "filled-new-array",
            Self::FilledNewArrayRange(..) => "filled-new-array/range",
            Self::FillArrayData(..) => "fill-array-data",
            Self::Throw(..) => "throw",
            Self::Goto(..) => "goto",
            Self::Goto16(..) => "goto/16",
            Self::Goto32(..) => "goto/32",
            Self::PackedSwitch(..) => "packed-switch",
            Self::SparseSwitch(..) => "sparse-switch",
            Self::CmplFloat(..) => "cmpl-float",
            Self::CmpgFloat(..) => "cmpg-float",
            Self::CmplDouble(..) => "cmpl-double",
            Self::CmpgDouble(..) => "cmpg-double",
            Self::CmpLong(..) => "cmp-long",
            Self::IfEq(..) => "if-eq",
            Self::IfNe(..) => "if-ne",
            Self::IfLt(..) => "if-lt",
            Self::IfGe(..) => "if-ge",
            Self::IfGt(..) => "if-gt",
            Self::IfLe(..) => "if-le",
            Self::IfEqz(..) => "if-eqz",
            Self::IfNez(..) => "if-nez",
            Self::IfLtz(..) => "if-ltz",
            Self::IfGez(..) => "if-gez",
            Self::IfGtz(..) => "if-gtz",
            Self::IfLez(..) => "if-lez",
            Self::Aget(..) => "aget",
            Self::AgetWide(..) => "aget-wide",
            Self::AgetObject(..) => "aget-object",
            Self::AgetBoolean(..) => "aget-boolean",
            Self::AgetByte(..) => "aget-byte",
            Self::AgetChar(..) => "aget-char",
            Self::AgetShort(..) => "aget-short",
            Self::Aput(..) => "aput",
            Self::AputWide(..) => "aput-wide",
            Self::AputObject(..) => "aput-object",
            Self::AputBoolean(..) => "aput-boolean",
            Self::AputByte(..) => "aput-byte",
            Self::AputChar(..) => "aput-char",
            Self::AputShort(..) => "aput-short",
            Self::Iget(..) => "iget",
            Self::IgetWide(..) => "iget-wide",
            Self::IgetObject(..) => "iget-object",
            Self::IgetBoolean(..) => "iget-boolean",
            Self::IgetByte(..) => "iget-byte",
            Self::IgetChar(..) => "iget-char",
            Self::IgetShort(..) => "iget-short",
            Self::Iput(..) => "iput",
            Self::IputWide(..) => "iput-wide",
            Self::IputObject(..) => "iput-object",
            Self::IputBoolean(..) => "iput-boolean",
            Self::IputByte(..) => "iput-byte",
            Self::IputChar(..) => "iput-char",
            Self::IputShort(..) => "iput-short",
            Self::Sget(..) => "sget",
            Self::SgetWide(..) => "sget-wide",
            Self::SgetObject(..) => "sget-object",
            Self::SgetBoolean(..) => "sget-boolean",
            Self::SgetByte(..) => "sget-byte",
            Self::SgetChar(..) => "sget-char",
            Self::SgetShort(..) => "sget-short",
            Self::Sput(..) => "sput",
            Self::SputWide(..) => "sput-wide",
            Self::SputObject(..) => "sput-object",
            Self::SputBoolean(..) => "sput-boolean",
            Self::SputByte(..) => "sput-byte",
            Self::SputChar(..) => "sput-char",
            Self::SputShort(..) => "sput-short",
            Self::InvokeVirtual(..) => "invoke-virtual",
            Self::InvokeSuper(..) => "invoke-super",
            Self::InvokeDirect(..) => "invoke-direct",
            Self::InvokeStatic(..) => "invoke-static",
            Self::InvokeInterface(..) => "invoke-interface",
            Self::InvokeVirtualRange(..) => "invoke-virtual/range",
            Self::InvokeSuperRange(..) => "invoke-super/range",
            Self::InvokeDirectRange(..) => "invoke-direct/range",
            Self::InvokeStaticRange(..) => "invoke-static/range",
            Self::InvokeInterfaceRange(..) => "invoke-interface/range",
            Self::NegInt(..) => "neg-int",
            Self::NotInt(..) => "not-int",
            Self::NegLong(..) => "neg-long",
            Self::NotLong(..) => "not-long",
            Self::NegFloat(..) => "neg-float",
            Self::NegDouble(..) => "neg-double",
            Self::IntToLong(..) => "int-to-long",
            Self::IntToFloat(..) => "int-to-float",
            Self::IntToDouble(..) => "int-to-double",
            Self::LongToInt(..) => "long-to-int",
            Self::LongToFloat(..) => "long-to-float",
            Self::LongToDouble(..) => "long-to-double",
            Self::FloatToInt(..) => "float-to-int",
            Self::FloatToLong(..) => "float-to-long",
            Self::FloatToDouble(..) => "float-to-double",
            Self::DoubleToInt(..) => "double-to-int",
            Self::DoubleToLong(..) => "double-to-long",
            Self::DoubleToFloat(..) => "double-to-float",
            Self::IntToByte(..) => "int-to-byte",
            Self::IntToChar(..) => "int-to-char",
            Self::IntToShort(..) => "int-to-short",
            Self::AddInt(..) => "add-int",
            Self::SubInt(..) => "sub-int",
            Self::MulInt(..) => "mul-int",
            Self::DivInt(..) => "div-int",
            Self::RemInt(..) => "rem-int",
            Self::AndInt(..) => "and-int",
            Self::OrInt(..) => "or-int",
            Self::XorInt(..) => "xor-int",
            Self::ShlInt(..) => "shl-int",
            Self::ShrInt(..) => "shr-int",
            Self::UshrInt(..) => "ushr-int",
            Self::AddLong(..) => "add-long",
            Self::SubLong(..) => "sub-long",
            Self::MulLong(..) => "mul-long",
            Self::DivLong(..) => "div-long",
            Self::RemLong(..) => "rem-long",
            Self::AndLong(..) => "and-long",
            Self::OrLong(..) => "or-long",
            Self::XorLong(..) => "xor-long",
            Self::ShlLong(..) => "shl-long",
            Self::ShrLong(..) => "shr-long",
            Self::UshrLong(..) => "ushr-long",
            Self::AddFloat(..) => "add-float",
            Self::SubFloat(..) => "sub-float",
            Self::MulFloat(..) => "mul-float",
            Self::DivFloat(..) => "div-float",
            Self::RemFloat(..) => "rem-float",
            Self::AddDouble(..) => "add-double",
            Self::SubDouble(..) => "sub-double",
            Self::MulDouble(..) => "mul-double",
            Self::DivDouble(..) => "div-double",
            Self::RemDouble(..) => "rem-double",
            Self::AddInt2addr(..) => "add-int/2addr",
            Self::SubInt2addr(..) => "sub-int/2addr",
            Self::MulInt2addr(..) => "mul-int/2addr",
            Self::DivInt2addr(..) => "div-int/2addr",
            Self::RemInt2addr(..) => "rem-int/2addr",
            Self::AndInt2addr(..) => "and-int/2addr",
            Self::OrInt2addr(..) => "or-int/2addr",
            Self::XorInt2addr(..) => "xor-int/2addr",
            Self::ShlInt2addr(..) => "shl-int/2addr",
            Self::ShrInt2addr(..) => "shr-int/2addr",
            Self::UshrInt2addr(..) => "ushr-int/2addr",
            Self::AddLong2addr(..) => "add-long/2addr",
            Self::SubLong2addr(..) => "sub-long/2addr",
            Self::MulLong2addr(..) => "mul-long/2addr",
            Self::DivLong2addr(..) => "div-long/2addr",
            Self::RemLong2addr(..) => "rem-long/2addr",
            Self::AndLong2addr(..) => "and-long/2addr",
            Self::OrLong2addr(..) => "or-long/2addr",
            Self::XorLong2addr(..) => "xor-long/2addr",
            Self::ShlLong2addr(..) => "shl-long/2addr",
            Self::ShrLong2addr(..) => "shr-long/2addr",
            Self::UshrLong2addr(..) => "ushr-long/2addr",
            Self::AddFloat2addr(..) => "add-float/2addr",
            Self::SubFloat2addr(..) => "sub-float/2addr",
            Self::MulFloat2addr(..) => "mul-float/2addr",
            Self::DivFloat2addr(..) => "div-float/2addr",
            Self::RemFloat2addr(..) => "rem-float/2addr",
            Self::AddDouble2addr(..) => "add-double/2addr",
            Self::SubDouble2addr(..) => "sub-double/2addr",
            Self::MulDouble2addr(..) => "mul-double/2addr",
            Self::DivDouble2addr(..) => "div-double/2addr",
            Self::RemDouble2addr(..) => "rem-double/2addr",
            Self::AddIntLit16(..) => "add-int/lit16",
            Self::RsubInt(..) => "rsub-int",
            Self::MulIntLit16(..) => "mul-int/lit16",
            Self::DivIntLit16(..) => "div-int/lit16",
            Self::RemIntLit16(..) => "rem-int/lit16",
            Self::AndIntLit16(..) => "and-int/lit16",
            Self::OrIntLit16(..) => "or-int/lit16",
            Self::XorIntLit16(..) => "xor-int/lit16",
            Self::AddIntLit8(..) => "add-int/lit8",
            Self::RsubIntLit8(..) => "rsub-int/lit8",
            Self::MulIntLit8(..) => "mul-int/lit8",
            Self::DivIntLit8(..) => "div-int/lit8",
            Self::RemIntLit8(..) => "rem-int/lit8",
            Self::AndIntLit8(..) => "and-int/lit8",
            Self::OrIntLit8(..) => "or-int/lit8",
            Self::XorIntLit8(..) => "xor-int/lit8",
            Self::ShlIntLit8(..) => "shl-int/lit8",
            Self::ShrIntLit8(..) => "shr-int/lit8",
            Self::UshrIntLit8(..) => "ushr-int/lit8",
            Self::LoadParam(..) => "load-param",
            Self::LoadParamObject(..) => "load-param-object",
            Self::LoadParamWide(..) => "load-param-wide",
        }
    }

    /// Size of the encoded instruction, in 16-bit code units. Synthetic
    /// `load-param` pseudo-instructions have no encoding and a size of 0.
    fn size(&self) -> usize {
        match self {
            Self::LoadParam(..) | Self::LoadParamObject(..) | Self::LoadParamWide(..) => 0,

            Self::Nop
            | Self::Move(..)
            | Self::MoveWide(..)
            | Self::MoveObject(..)
            | Self::MoveResult(..)
            | Self::MoveResultWide(..)
            | Self::MoveResultObject(..)
            | Self::MoveException(..)
            | Self::ReturnVoid
            | Self::Return(..)
            | Self::ReturnWide(..)
            | Self::ReturnObject(..)
            | Self::Const4(..)
            | Self::MonitorEnter(..)
            | Self::MonitorExit(..)
            | Self::ArrayLength(..)
            | Self::Throw(..)
            | Self::Goto(..)
            | Self::NegInt(..)
            | Self::NotInt(..)
            | Self::NegLong(..)
            | Self::NotLong(..)
            | Self::NegFloat(..)
            | Self::NegDouble(..)
            | Self::IntToLong(..)
            | Self::IntToFloat(..)
            | Self::IntToDouble(..)
            | Self::LongToInt(..)
            | Self::LongToFloat(..)
            | Self::LongToDouble(..)
            | Self::FloatToInt(..)
            | Self::FloatToLong(..)
            | Self::FloatToDouble(..)
            | Self::DoubleToInt(..)
            | Self::DoubleToLong(..)
            | Self::DoubleToFloat(..)
            | Self::IntToByte(..)
            | Self::IntToChar(..)
            | Self::IntToShort(..)
            | Self::AddInt2addr(..)
            | Self::SubInt2addr(..)
            | Self::MulInt2addr(..)
            | Self::DivInt2addr(..)
            | Self::RemInt2addr(..)
            | Self::AndInt2addr(..)
            | Self::OrInt2addr(..)
            | Self::XorInt2addr(..)
            | Self::ShlInt2addr(..)
            | Self::ShrInt2addr(..)
            | Self::UshrInt2addr(..)
            | Self::AddLong2addr(..)
            | Self::SubLong2addr(..)
            | Self::MulLong2addr(..)
            | Self::DivLong2addr(..)
            | Self::RemLong2addr(..)
            | Self::AndLong2addr(..)
            | Self::OrLong2addr(..)
            | Self::XorLong2addr(..)
            | Self::ShlLong2addr(..)
            | Self::ShrLong2addr(..)
            | Self::UshrLong2addr(..)
            | Self::AddFloat2addr(..)
            | Self::SubFloat2addr(..)
            | Self::MulFloat2addr(..)
            | Self::DivFloat2addr(..)
            | Self::RemFloat2addr(..)
            | Self::AddDouble2addr(..)
            | Self::SubDouble2addr(..)
            | Self::MulDouble2addr(..)
            | Self::DivDouble2addr(..)
            | Self::RemDouble2addr(..) => 1,

            Self::MoveFrom16(..)
            | Self::MoveWideFrom16(..)
            | Self::MoveObjectFrom16(..)
            | Self::Const16(..)
            | Self::ConstHigh16(..)
            | Self::ConstWide16(..)
            | Self::ConstWideHigh16(..)
            | Self::ConstString(..)
            | Self::ConstClass(..)
            | Self::CheckCast(..)
            | Self::InstanceOf(..)
            | Self::NewInstance(..)
            | Self::NewArray(..)
            | Self::Goto16(..)
            | Self::CmplFloat(..)
            | Self::CmpgFloat(..)
            | Self::CmplDouble(..)
            | Self::CmpgDouble(..)
            | Self::CmpLong(..)
            | Self::IfEq(..)
            | Self::IfNe(..)
            | Self::IfLt(..)
            | Self::IfGe(..)
            | Self::IfGt(..)
            | Self::IfLe(..)
            | Self::IfEqz(..)
            | Self::IfNez(..)
            | Self::IfLtz(..)
            | Self::IfGez(..)
            | Self::IfGtz(..)
            | Self::IfLez(..)
            | Self::Aget(..)
            | Self::AgetWide(..)
            | Self::AgetObject(..)
            | Self::AgetBoolean(..)
            | Self::AgetByte(..)
            | Self::AgetChar(..)
            | Self::AgetShort(..)
            | Self::Aput(..)
            | Self::AputWide(..)
            | Self::AputObject(..)
            | Self::AputBoolean(..)
            | Self::AputByte(..)
            | Self::AputChar(..)
            | Self::AputShort(..)
            | Self::Iget(..)
            | Self::IgetWide(..)
            | Self::IgetObject(..)
            | Self::IgetBoolean(..)
            | Self::IgetByte(..)
            | Self::IgetChar(..)
            | Self::IgetShort(..)
            | Self::Iput(..)
            | Self::IputWide(..)
            | Self::IputObject(..)
            | Self::IputBoolean(..)
            | Self::IputByte(..)
            | Self::IputChar(..)
            | Self::IputShort(..)
            | Self::Sget(..)
            | Self::SgetWide(..)
            | Self::SgetObject(..)
            | Self::SgetBoolean(..)
            | Self::SgetByte(..)
            | Self::SgetChar(..)
            | Self::SgetShort(..)
            | Self::Sput(..)
            | Self::SputWide(..)
            | Self::SputObject(..)
            | Self::SputBoolean(..)
            | Self::SputByte(..)
            | Self::SputChar(..)
            | Self::SputShort(..)
            | Self::AddInt(..)
            | Self::SubInt(..)
            | Self::MulInt(..)
            | Self::DivInt(..)
            | Self::RemInt(..)
            | Self::AndInt(..)
            | Self::OrInt(..)
            | Self::XorInt(..)
            | Self::ShlInt(..)
            | Self::ShrInt(..)
            | Self::UshrInt(..)
            | Self::AddLong(..)
            | Self::SubLong(..)
            | Self::MulLong(..)
            | Self::DivLong(..)
            | Self::RemLong(..)
            | Self::AndLong(..)
            | Self::OrLong(..)
            | Self::XorLong(..)
            | Self::ShlLong(..)
            | Self::ShrLong(..)
            | Self::UshrLong(..)
            | Self::AddFloat(..)
            | Self::SubFloat(..)
            | Self::MulFloat(..)
            | Self::DivFloat(..)
            | Self::RemFloat(..)
            | Self::AddDouble(..)
            | Self::SubDouble(..)
            | Self::MulDouble(..)
            | Self::DivDouble(..)
            | Self::RemDouble(..)
            | Self::AddIntLit16(..)
            | Self::RsubInt(..)
            | Self::MulIntLit16(..)
            | Self::DivIntLit16(..)
            | Self::RemIntLit16(..)
            | Self::AndIntLit16(..)
            | Self::OrIntLit16(..)
            | Self::XorIntLit16(..)
            | Self::AddIntLit8(..)
            | Self::RsubIntLit8(..)
            | Self::MulIntLit8(..)
            | Self::DivIntLit8(..)
            | Self::RemIntLit8(..)
            | Self::AndIntLit8(..)
            | Self::OrIntLit8(..)
            | Self::XorIntLit8(..)
            | Self::ShlIntLit8(..)
            | Self::ShrIntLit8(..)
            | Self::UshrIntLit8(..) => 2,

            Self::Move16(..)
            | Self::MoveWide16(..)
            | Self::MoveObject16(..)
            | Self::Const(..)
            | Self::ConstWide32(..)
            | Self::ConstStringJumbo(..)
            | Self::FilledNewArray(..)
            | Self::FilledNewArrayRange(..)
            | Self::FillArrayData(..)
            | Self::Goto32(..)
            | Self::PackedSwitch(..)
            | Self::SparseSwitch(..)
            | Self::InvokeVirtual(..)
            | Self::InvokeSuper(..)
            | Self::InvokeDirect(..)
            | Self::InvokeStatic(..)
            | Self::InvokeInterface(..)
            | Self::InvokeVirtualRange(..)
            | Self::InvokeSuperRange(..)
            | Self::InvokeDirectRange(..)
            | Self::InvokeStaticRange(..)
            | Self::InvokeInterfaceRange(..) => 3,

            Self::ConstWide(..) => 5,
        }
    }
}

impl Instr {
    /// Returns the destination register operand, if the instruction has one.
    ///
    /// Note that `filled-new-array` has no destination register even though
    /// it produces a value: the result materializes through a subsequent
    /// `move-result-object`.
    #[allow(clippy::match_same_arms)]
    #[must_use]
    pub fn dest(&self) -> Option<Reg> {
        match self {
            Self::Move(a, _)
            | Self::MoveFrom16(a, _)
            | Self::Move16(a, _)
            | Self::MoveWide(a, _)
            | Self::MoveWideFrom16(a, _)
            | Self::MoveWide16(a, _)
            | Self::MoveObject(a, _)
            | Self::MoveObjectFrom16(a, _)
            | Self::MoveObject16(a, _)
            | Self::MoveResult(a)
            | Self::MoveResultWide(a)
            | Self::MoveResultObject(a)
            | Self::MoveException(a)
            | Self::Const4(a, _)
            | Self::Const16(a, _)
            | Self::Const(a, _)
            | Self::ConstHigh16(a, _)
            | Self::ConstWide16(a, _)
            | Self::ConstWide32(a, _)
            | Self::ConstWide(a, _)
            | Self::ConstWideHigh16(a, _)
            | Self::ConstString(a, _)
            | Self::ConstStringJumbo(a, _)
            | Self::ConstClass(a, _)
            | Self::CheckCast(a, _)
            | Self::InstanceOf(a, _, _)
            | Self::ArrayLength(a, _)
            | Self::NewInstance(a, _)
            | Self::NewArray(a, _, _)
            | Self::CmplFloat(a, _, _)
            | Self::CmpgFloat(a, _, _)
            | Self::CmplDouble(a, _, _)
            | Self::CmpgDouble(a, _, _)
            | Self::CmpLong(a, _, _)
            | Self::Aget(a, _, _)
            | Self::AgetWide(a, _, _)
            | Self::AgetObject(a, _, _)
            | Self::AgetBoolean(a, _, _)
            | Self::AgetByte(a, _, _)
            | Self::AgetChar(a, _, _)
            | Self::AgetShort(a, _, _)
            | Self::Iget(a, _, _)
            | Self::IgetWide(a, _, _)
            | Self::IgetObject(a, _, _)
            | Self::IgetBoolean(a, _, _)
            | Self::IgetByte(a, _, _)
            | Self::IgetChar(a, _, _)
            | Self::IgetShort(a, _, _)
            | Self::Sget(a, _)
            | Self::SgetWide(a, _)
            | Self::SgetObject(a, _)
            | Self::SgetBoolean(a, _)
            | Self::SgetByte(a, _)
            | Self::SgetChar(a, _)
            | Self::SgetShort(a, _)
            | Self::NegInt(a, _)
            | Self::NotInt(a, _)
            | Self::NegLong(a, _)
            | Self::NotLong(a, _)
            | Self::NegFloat(a, _)
            | Self::NegDouble(a, _)
            | Self::IntToLong(a, _)
            | Self::IntToFloat(a, _)
            | Self::IntToDouble(a, _)
            | Self::LongToInt(a, _)
            | Self::LongToFloat(a, _)
            | Self::LongToDouble(a, _)
            | Self::FloatToInt(a, _)
            | Self::FloatToLong(a, _)
            | Self::FloatToDouble(a, _)
            | Self::DoubleToInt(a, _)
            | Self::DoubleToLong(a, _)
            | Self::DoubleToFloat(a, _)
            | Self::IntToByte(a, _)
            | Self::IntToChar(a, _)
            | Self::IntToShort(a, _)
            | Self::AddInt(a, _, _)
            | Self::SubInt(a, _, _)
            | Self::MulInt(a, _, _)
            | Self::DivInt(a, _, _)
            | Self::RemInt(a, _, _)
            | Self::AndInt(a, _, _)
            | Self::OrInt(a, _, _)
            | Self::XorInt(a, _, _)
            | Self::ShlInt(a, _, _)
            | Self::ShrInt(a, _, _)
            | Self::UshrInt(a, _, _)
            | Self::AddLong(a, _, _)
            | Self::SubLong(a, _, _)
            | Self::MulLong(a, _, _)
            | Self::DivLong(a, _, _)
            | Self::RemLong(a, _, _)
            | Self::AndLong(a, _, _)
            | Self::OrLong(a, _, _)
            | Self::XorLong(a, _, _)
            | Self::ShlLong(a, _, _)
            | Self::ShrLong(a, _, _)
            | Self::UshrLong(a, _, _)
            | Self::AddFloat(a, _, _)
            | Self::SubFloat(a, _, _)
            | Self::MulFloat(a, _, _)
            | Self::DivFloat(a, _, _)
            | Self::RemFloat(a, _, _)
            | Self::AddDouble(a, _, _)
            | Self::SubDouble(a, _, _)
            | Self::MulDouble(a, _, _)
            | Self::DivDouble(a, _, _)
            | Self::RemDouble(a, _, _)
            | Self::AddInt2addr(a, _)
            | Self::SubInt2addr(a, _)
            | Self::MulInt2addr(a, _)
            | Self::DivInt2addr(a, _)
            | Self::RemInt2addr(a, _)
            | Self::AndInt2addr(a, _)
            | Self::OrInt2addr(a, _)
            | Self::XorInt2addr(a, _)
            | Self::ShlInt2addr(a, _)
            | Self::ShrInt2addr(a, _)
            | Self::UshrInt2addr(a, _)
            | Self::AddLong2addr(a, _)
            | Self::SubLong2addr(a, _)
            | Self::MulLong2addr(a, _)
            | Self::DivLong2addr(a, _)
            | Self::RemLong2addr(a, _)
            | Self::AndLong2addr(a, _)
            | Self::OrLong2addr(a, _)
            | Self::XorLong2addr(a, _)
            | Self::ShlLong2addr(a, _)
            | Self::ShrLong2addr(a, _)
            | Self::UshrLong2addr(a, _)
            | Self::AddFloat2addr(a, _)
            | Self::SubFloat2addr(a, _)
            | Self::MulFloat2addr(a, _)
            | Self::DivFloat2addr(a, _)
            | Self::RemFloat2addr(a, _)
            | Self::AddDouble2addr(a, _)
            | Self::SubDouble2addr(a, _)
            | Self::MulDouble2addr(a, _)
            | Self::DivDouble2addr(a, _)
            | Self::RemDouble2addr(a, _)
            | Self::AddIntLit16(a, _, _)
            | Self::RsubInt(a, _, _)
            | Self::MulIntLit16(a, _, _)
            | Self::DivIntLit16(a, _, _)
            | Self::RemIntLit16(a, _, _)
            | Self::AndIntLit16(a, _, _)
            | Self::OrIntLit16(a, _, _)
            | Self::XorIntLit16(a, _, _)
            | Self::AddIntLit8(a, _, _)
            | Self::RsubIntLit8(a, _, _)
            | Self::MulIntLit8(a, _, _)
            | Self::DivIntLit8(a, _, _)
            | Self::RemIntLit8(a, _, _)
            | Self::AndIntLit8(a, _, _)
            | Self::OrIntLit8(a, _, _)
            | Self::XorIntLit8(a, _, _)
            | Self::ShlIntLit8(a, _, _)
            | Self::ShrIntLit8(a, _, _)
            | Self::UshrIntLit8(a, _, _)
            | Self::LoadParam(a)
            | Self::LoadParamObject(a)
            | Self::LoadParamWide(a) => Some(*a),

            Self::Nop
            | Self::ReturnVoid
            | Self::Return(_)
            | Self::ReturnWide(_)
            | Self::ReturnObject(_)
            | Self::MonitorEnter(_)
            | Self::MonitorExit(_)
            | Self::FilledNewArray(..)
            | Self::FilledNewArrayRange(..)
            | Self::FillArrayData(..)
            | Self::Throw(_)
            | Self::Goto(_)
            | Self::Goto16(_)
            | Self::Goto32(_)
            | Self::PackedSwitch(..)
            | Self::SparseSwitch(..)
            | Self::IfEq(..)
            | Self::IfNe(..)
            | Self::IfLt(..)
            | Self::IfGe(..)
            | Self::IfGt(..)
            | Self::IfLe(..)
            | Self::IfEqz(..)
            | Self::IfNez(..)
            | Self::IfLtz(..)
            | Self::IfGez(..)
            | Self::IfGtz(..)
            | Self::IfLez(..)
            | Self::Aput(..)
            | Self::AputWide(..)
            | Self::AputObject(..)
            | Self::AputBoolean(..)
            | Self::AputByte(..)
            | Self::AputChar(..)
            | Self::AputShort(..)
            | Self::Iput(..)
            | Self::IputWide(..)
            | Self::IputObject(..)
            | Self::IputBoolean(..)
            | Self::IputByte(..)
            | Self::IputChar(..)
            | Self::IputShort(..)
            | Self::Sput(..)
            | Self::SputWide(..)
            | Self::SputObject(..)
            | Self::SputBoolean(..)
            | Self::SputByte(..)
            | Self::SputChar(..)
            | Self::SputShort(..)
            | Self::InvokeVirtual(..)
            | Self::InvokeSuper(..)
            | Self::InvokeDirect(..)
            | Self::InvokeStatic(..)
            | Self::InvokeInterface(..)
            | Self::InvokeVirtualRange(..)
            | Self::InvokeSuperRange(..)
            | Self::InvokeDirectRange(..)
            | Self::InvokeStaticRange(..)
            | Self::InvokeInterfaceRange(..) => None,
        }
    }

    /// Returns the source register operands, in the order source
    /// classification indexes them.
    #[allow(clippy::match_same_arms)]
    #[must_use]
    pub fn srcs(&self) -> Vec<Reg> {
        match self {
            Self::Nop
            | Self::MoveResult(_)
            | Self::MoveResultWide(_)
            | Self::MoveResultObject(_)
            | Self::MoveException(_)
            | Self::ReturnVoid
            | Self::Const4(..)
            | Self::Const16(..)
            | Self::Const(..)
            | Self::ConstHigh16(..)
            | Self::ConstWide16(..)
            | Self::ConstWide32(..)
            | Self::ConstWide(..)
            | Self::ConstWideHigh16(..)
            | Self::ConstString(..)
            | Self::ConstStringJumbo(..)
            | Self::ConstClass(..)
            | Self::NewInstance(..)
            | Self::Goto(_)
            | Self::Goto16(_)
            | Self::Goto32(_)
            | Self::Sget(..)
            | Self::SgetWide(..)
            | Self::SgetObject(..)
            | Self::SgetBoolean(..)
            | Self::SgetByte(..)
            | Self::SgetChar(..)
            | Self::SgetShort(..)
            | Self::LoadParam(_)
            | Self::LoadParamObject(_)
            | Self::LoadParamWide(_) => Vec::new(),

            Self::Return(a)
            | Self::ReturnWide(a)
            | Self::ReturnObject(a)
            | Self::MonitorEnter(a)
            | Self::MonitorExit(a)
            | Self::CheckCast(a, _)
            | Self::FillArrayData(a, _)
            | Self::Throw(a)
            | Self::PackedSwitch(a, _)
            | Self::SparseSwitch(a, _)
            | Self::IfEqz(a, _)
            | Self::IfNez(a, _)
            | Self::IfLtz(a, _)
            | Self::IfGez(a, _)
            | Self::IfGtz(a, _)
            | Self::IfLez(a, _)
            | Self::Sput(a, _)
            | Self::SputWide(a, _)
            | Self::SputObject(a, _)
            | Self::SputBoolean(a, _)
            | Self::SputByte(a, _)
            | Self::SputChar(a, _)
            | Self::SputShort(a, _) => vec![*a],

            Self::Move(_, b)
            | Self::MoveFrom16(_, b)
            | Self::Move16(_, b)
            | Self::MoveWide(_, b)
            | Self::MoveWideFrom16(_, b)
            | Self::MoveWide16(_, b)
            | Self::MoveObject(_, b)
            | Self::MoveObjectFrom16(_, b)
            | Self::MoveObject16(_, b)
            | Self::InstanceOf(_, b, _)
            | Self::ArrayLength(_, b)
            | Self::NewArray(_, b, _)
            | Self::Iget(_, b, _)
            | Self::IgetWide(_, b, _)
            | Self::IgetObject(_, b, _)
            | Self::IgetBoolean(_, b, _)
            | Self::IgetByte(_, b, _)
            | Self::IgetChar(_, b, _)
            | Self::IgetShort(_, b, _)
            | Self::NegInt(_, b)
            | Self::NotInt(_, b)
            | Self::NegLong(_, b)
            | Self::NotLong(_, b)
            | Self::NegFloat(_, b)
            | Self::NegDouble(_, b)
            | Self::IntToLong(_, b)
            | Self::IntToFloat(_, b)
            | Self::IntToDouble(_, b)
            | Self::LongToInt(_, b)
            | Self::LongToFloat(_, b)
            | Self::LongToDouble(_, b)
            | Self::FloatToInt(_, b)
            | Self::FloatToLong(_, b)
            | Self::FloatToDouble(_, b)
            | Self::DoubleToInt(_, b)
            | Self::DoubleToLong(_, b)
            | Self::DoubleToFloat(_, b)
            | Self::IntToByte(_, b)
            | Self::IntToChar(_, b)
            | Self::IntToShort(_, b)
            | Self::AddIntLit16(_, b, _)
            | Self::RsubInt(_, b, _)
            | Self::MulIntLit16(_, b, _)
            | Self::DivIntLit16(_, b, _)
            | Self::RemIntLit16(_, b, _)
            | Self::AndIntLit16(_, b, _)
            | Self::OrIntLit16(_, b, _)
            | Self::XorIntLit16(_, b, _)
            | Self::AddIntLit8(_, b, _)
            | Self::RsubIntLit8(_, b, _)
            | Self::MulIntLit8(_, b, _)
            | Self::DivIntLit8(_, b, _)
            | Self::RemIntLit8(_, b, _)
            | Self::AndIntLit8(_, b, _)
            | Self::OrIntLit8(_, b, _)
            | Self::XorIntLit8(_, b, _)
            | Self::ShlIntLit8(_, b, _)
            | Self::ShrIntLit8(_, b, _)
            | Self::UshrIntLit8(_, b, _) => vec![*b],

            Self::CmplFloat(_, b, c)
            | Self::CmpgFloat(_, b, c)
            | Self::CmplDouble(_, b, c)
            | Self::CmpgDouble(_, b, c)
            | Self::CmpLong(_, b, c)
            | Self::Aget(_, b, c)
            | Self::AgetWide(_, b, c)
            | Self::AgetObject(_, b, c)
            | Self::AgetBoolean(_, b, c)
            | Self::AgetByte(_, b, c)
            | Self::AgetChar(_, b, c)
            | Self::AgetShort(_, b, c)
            | Self::AddInt(_, b, c)
            | Self::SubInt(_, b, c)
            | Self::MulInt(_, b, c)
            | Self::DivInt(_, b, c)
            | Self::RemInt(_, b, c)
            | Self::AndInt(_, b, c)
            | Self::OrInt(_, b, c)
            | Self::XorInt(_, b, c)
            | Self::ShlInt(_, b, c)
            | Self::ShrInt(_, b, c)
            | Self::UshrInt(_, b, c)
            | Self::AddLong(_, b, c)
            | Self::SubLong(_, b, c)
            | Self::MulLong(_, b, c)
            | Self::DivLong(_, b, c)
            | Self::RemLong(_, b, c)
            | Self::AndLong(_, b, c)
            | Self::OrLong(_, b, c)
            | Self::XorLong(_, b, c)
            | Self::ShlLong(_, b, c)
            | Self::ShrLong(_, b, c)
            | Self::UshrLong(_, b, c)
            | Self::AddFloat(_, b, c)
            | Self::SubFloat(_, b, c)
            | Self::MulFloat(_, b, c)
            | Self::DivFloat(_, b, c)
            | Self::RemFloat(_, b, c)
            | Self::AddDouble(_, b, c)
            | Self::SubDouble(_, b, c)
            | Self::MulDouble(_, b, c)
            | Self::DivDouble(_, b, c)
            | Self::RemDouble(_, b, c) => vec![*b, *c],

            Self::IfEq(a, b, _)
            | Self::IfNe(a, b, _)
            | Self::IfLt(a, b, _)
            | Self::IfGe(a, b, _)
            | Self::IfGt(a, b, _)
            | Self::IfLe(a, b, _)
            | Self::Iput(a, b, _)
            | Self::IputWide(a, b, _)
            | Self::IputObject(a, b, _)
            | Self::IputBoolean(a, b, _)
            | Self::IputByte(a, b, _)
            | Self::IputChar(a, b, _)
            | Self::IputShort(a, b, _)
            | Self::AddInt2addr(a, b)
            | Self::SubInt2addr(a, b)
            | Self::MulInt2addr(a, b)
            | Self::DivInt2addr(a, b)
            | Self::RemInt2addr(a, b)
            | Self::AndInt2addr(a, b)
            | Self::OrInt2addr(a, b)
            | Self::XorInt2addr(a, b)
            | Self::ShlInt2addr(a, b)
            | Self::ShrInt2addr(a, b)
            | Self::UshrInt2addr(a, b)
            | Self::AddLong2addr(a, b)
            | Self::SubLong2addr(a, b)
            | Self::MulLong2addr(a, b)
            | Self::DivLong2addr(a, b)
            | Self::RemLong2addr(a, b)
            | Self::AndLong2addr(a, b)
            | Self::OrLong2addr(a, b)
            | Self::XorLong2addr(a, b)
            | Self::ShlLong2addr(a, b)
            | Self::ShrLong2addr(a, b)
            | Self::UshrLong2addr(a, b)
            | Self::AddFloat2addr(a, b)
            | Self::SubFloat2addr(a, b)
            | Self::MulFloat2addr(a, b)
            | Self::DivFloat2addr(a, b)
            | Self::RemFloat2addr(a, b)
            | Self::AddDouble2addr(a, b)
            | Self::SubDouble2addr(a, b)
            | Self::MulDouble2addr(a, b)
            | Self::DivDouble2addr(a, b)
            | Self::RemDouble2addr(a, b) => vec![*a, *b],

            Self::Aput(a, b, c)
            | Self::AputWide(a, b, c)
            | Self::AputObject(a, b, c)
            | Self::AputBoolean(a, b, c)
            | Self::AputByte(a, b, c)
            | Self::AputChar(a, b, c)
            | Self::AputShort(a, b, c) => vec![*a, *b, *c],

            Self::FilledNewArray(args, _)
            | Self::InvokeVirtual(args, _)
            | Self::InvokeSuper(args, _)
            | Self::InvokeDirect(args, _)
            | Self::InvokeStatic(args, _)
            | Self::InvokeInterface(args, _) => args.iter().collect(),

            Self::FilledNewArrayRange(range, _)
            | Self::InvokeVirtualRange(range, _)
            | Self::InvokeSuperRange(range, _)
            | Self::InvokeDirectRange(range, _)
            | Self::InvokeStaticRange(range, _)
            | Self::InvokeInterfaceRange(range, _) => range.iter().collect(),
        }
    }

    /// Returns all operands of the instruction, for rendering purposes.
    #[allow(clippy::match_same_arms)]
    #[must_use]
    pub fn operands(&self) -> Vec<Operand> {
        match self {
            Self::Nop | Self::ReturnVoid => Vec::new(),

            Self::Move(a, b)
            | Self::MoveFrom16(a, b)
            | Self::Move16(a, b)
            | Self::MoveWide(a, b)
            | Self::MoveWideFrom16(a, b)
            | Self::MoveWide16(a, b)
            | Self::MoveObject(a, b)
            | Self::MoveObjectFrom16(a, b)
            | Self::MoveObject16(a, b)
            | Self::ArrayLength(a, b)
            | Self::NegInt(a, b)
            | Self::NotInt(a, b)
            | Self::NegLong(a, b)
            | Self::NotLong(a, b)
            | Self::NegFloat(a, b)
            | Self::NegDouble(a, b)
            | Self::IntToLong(a, b)
            | Self::IntToFloat(a, b)
            | Self::IntToDouble(a, b)
            | Self::LongToInt(a, b)
            | Self::LongToFloat(a, b)
            | Self::LongToDouble(a, b)
            | Self::FloatToInt(a, b)
            | Self::FloatToLong(a, b)
            | Self::FloatToDouble(a, b)
            | Self::DoubleToInt(a, b)
            | Self::DoubleToLong(a, b)
            | Self::DoubleToFloat(a, b)
            | Self::IntToByte(a, b)
            | Self::IntToChar(a, b)
            | Self::IntToShort(a, b)
            | Self::AddInt2addr(a, b)
            | Self::SubInt2addr(a, b)
            | Self::MulInt2addr(a, b)
            | Self::DivInt2addr(a, b)
            | Self::RemInt2addr(a, b)
            | Self::AndInt2addr(a, b)
            | Self::OrInt2addr(a, b)
            | Self::XorInt2addr(a, b)
            | Self::ShlInt2addr(a, b)
            | Self::ShrInt2addr(a, b)
            | Self::UshrInt2addr(a, b)
            | Self::AddLong2addr(a, b)
            | Self::SubLong2addr(a, b)
            | Self::MulLong2addr(a, b)
            | Self::DivLong2addr(a, b)
            | Self::RemLong2addr(a, b)
            | Self::AndLong2addr(a, b)
            | Self::OrLong2addr(a, b)
            | Self::XorLong2addr(a, b)
            | Self::ShlLong2addr(a, b)
            | Self::ShrLong2addr(a, b)
            | Self::UshrLong2addr(a, b)
            | Self::AddFloat2addr(a, b)
            | Self::SubFloat2addr(a, b)
            | Self::MulFloat2addr(a, b)
            | Self::DivFloat2addr(a, b)
            | Self::RemFloat2addr(a, b)
            | Self::AddDouble2addr(a, b)
            | Self::SubDouble2addr(a, b)
            | Self::MulDouble2addr(a, b)
            | Self::DivDouble2addr(a, b)
            | Self::RemDouble2addr(a, b) => vec![Operand::Reg(*a), Operand::Reg(*b)],

            Self::MoveResult(a)
            | Self::MoveResultWide(a)
            | Self::MoveResultObject(a)
            | Self::MoveException(a)
            | Self::Return(a)
            | Self::ReturnWide(a)
            | Self::ReturnObject(a)
            | Self::MonitorEnter(a)
            | Self::MonitorExit(a)
            | Self::Throw(a)
            | Self::LoadParam(a)
            | Self::LoadParamObject(a)
            | Self::LoadParamWide(a) => vec![Operand::Reg(*a)],

            Self::Const4(a, lit) => vec![Operand::Reg(*a), Operand::Literal(i64::from(*lit))],
            Self::Const16(a, lit) | Self::ConstWide16(a, lit) => {
                vec![Operand::Reg(*a), Operand::Literal(i64::from(*lit))]
            }
            Self::Const(a, lit) | Self::ConstWide32(a, lit) => {
                vec![Operand::Reg(*a), Operand::Literal(i64::from(*lit))]
            }
            Self::ConstHigh16(a, lit) | Self::ConstWideHigh16(a, lit) => {
                vec![Operand::Reg(*a), Operand::Literal(i64::from(*lit))]
            }
            Self::ConstWide(a, lit) => vec![Operand::Reg(*a), Operand::Literal(*lit)],

            Self::ConstString(a, s) | Self::ConstStringJumbo(a, s) => {
                vec![Operand::Reg(*a), Operand::String(s)]
            }
            Self::ConstClass(a, t) | Self::CheckCast(a, t) | Self::NewInstance(a, t) => {
                vec![Operand::Reg(*a), Operand::Type(t)]
            }

            Self::InstanceOf(a, b, t) | Self::NewArray(a, b, t) => {
                vec![Operand::Reg(*a), Operand::Reg(*b), Operand::Type(t)]
            }
            Self::FilledNewArray(args, t) => vec![Operand::Regs(args), Operand::Type(t)],
            Self::FilledNewArrayRange(range, t) => vec![Operand::Range(range), Operand::Type(t)],

            Self::FillArrayData(a, off) | Self::PackedSwitch(a, off) | Self::SparseSwitch(a, off) => {
                vec![Operand::Reg(*a), Operand::Offset(*off)]
            }

            Self::Goto(off) => vec![Operand::Offset(i32::from(*off))],
            Self::Goto16(off) => vec![Operand::Offset(i32::from(*off))],
            Self::Goto32(off) => vec![Operand::Offset(*off)],

            Self::CmplFloat(a, b, c)
            | Self::CmpgFloat(a, b, c)
            | Self::CmplDouble(a, b, c)
            | Self::CmpgDouble(a, b, c)
            | Self::CmpLong(a, b, c)
            | Self::Aget(a, b, c)
            | Self::AgetWide(a, b, c)
            | Self::AgetObject(a, b, c)
            | Self::AgetBoolean(a, b, c)
            | Self::AgetByte(a, b, c)
            | Self::AgetChar(a, b, c)
            | Self::AgetShort(a, b, c)
            | Self::Aput(a, b, c)
            | Self::AputWide(a, b, c)
            | Self::AputObject(a, b, c)
            | Self::AputBoolean(a, b, c)
            | Self::AputByte(a, b, c)
            | Self::AputChar(a, b, c)
            | Self::AputShort(a, b, c)
            | Self::AddInt(a, b, c)
            | Self::SubInt(a, b, c)
            | Self::MulInt(a, b, c)
            | Self::DivInt(a, b, c)
            | Self::RemInt(a, b, c)
            | Self::AndInt(a, b, c)
            | Self::OrInt(a, b, c)
            | Self::XorInt(a, b, c)
            | Self::ShlInt(a, b, c)
            | Self::ShrInt(a, b, c)
            | Self::UshrInt(a, b, c)
            | Self::AddLong(a, b, c)
            | Self::SubLong(a, b, c)
            | Self::MulLong(a, b, c)
            | Self::DivLong(a, b, c)
            | Self::RemLong(a, b, c)
            | Self::AndLong(a, b, c)
            | Self::OrLong(a, b, c)
            | Self::XorLong(a, b, c)
            | Self::ShlLong(a, b, c)
            | Self::ShrLong(a, b, c)
            | Self::UshrLong(a, b, c)
            | Self::AddFloat(a, b, c)
            | Self::SubFloat(a, b, c)
            | Self::MulFloat(a, b, c)
            | Self::DivFloat(a, b, c)
            | Self::RemFloat(a, b, c)
            | Self::AddDouble(a, b, c)
            | Self::SubDouble(a, b, c)
            | Self::MulDouble(a, b, c)
            | Self::DivDouble(a, b, c)
            | Self::RemDouble(a, b, c) => {
                vec![Operand::Reg(*a), Operand::Reg(*b), Operand::Reg(*c)]
            }

            Self::IfEq(a, b, off)
            | Self::IfNe(a, b, off)
            | Self::IfLt(a, b, off)
            | Self::IfGe(a, b, off)
            | Self::IfGt(a, b, off)
            | Self::IfLe(a, b, off) => vec![
                Operand::Reg(*a),
                Operand::Reg(*b),
                Operand::Offset(i32::from(*off)),
            ],
            Self::IfEqz(a, off)
            | Self::IfNez(a, off)
            | Self::IfLtz(a, off)
            | Self::IfGez(a, off)
            | Self::IfGtz(a, off)
            | Self::IfLez(a, off) => vec![Operand::Reg(*a), Operand::Offset(i32::from(*off))],

            Self::Iget(a, b, fld)
            | Self::IgetWide(a, b, fld)
            | Self::IgetObject(a, b, fld)
            | Self::IgetBoolean(a, b, fld)
            | Self::IgetByte(a, b, fld)
            | Self::IgetChar(a, b, fld)
            | Self::IgetShort(a, b, fld)
            | Self::Iput(a, b, fld)
            | Self::IputWide(a, b, fld)
            | Self::IputObject(a, b, fld)
            | Self::IputBoolean(a, b, fld)
            | Self::IputByte(a, b, fld)
            | Self::IputChar(a, b, fld)
            | Self::IputShort(a, b, fld) => {
                vec![Operand::Reg(*a), Operand::Reg(*b), Operand::Field(fld)]
            }

            Self::Sget(a, fld)
            | Self::SgetWide(a, fld)
            | Self::SgetObject(a, fld)
            | Self::SgetBoolean(a, fld)
            | Self::SgetByte(a, fld)
            | Self::SgetChar(a, fld)
            | Self::SgetShort(a, fld)
            | Self::Sput(a, fld)
            | Self::SputWide(a, fld)
            | Self::SputObject(a, fld)
            | Self::SputBoolean(a, fld)
            | Self::SputByte(a, fld)
            | Self::SputChar(a, fld)
            | Self::SputShort(a, fld) => vec![Operand::Reg(*a), Operand::Field(fld)],

            Self::InvokeVirtual(args, m)
            | Self::InvokeSuper(args, m)
            | Self::InvokeDirect(args, m)
            | Self::InvokeStatic(args, m)
            | Self::InvokeInterface(args, m) => vec![Operand::Regs(args), Operand::Method(m)],

            Self::InvokeVirtualRange(range, m)
            | Self::InvokeSuperRange(range, m)
            | Self::InvokeDirectRange(range, m)
            | Self::InvokeStaticRange(range, m)
            | Self::InvokeInterfaceRange(range, m) => {
                vec![Operand::Range(range), Operand::Method(m)]
            }

            Self::AddIntLit16(a, b, lit)
            | Self::RsubInt(a, b, lit)
            | Self::MulIntLit16(a, b, lit)
            | Self::DivIntLit16(a, b, lit)
            | Self::RemIntLit16(a, b, lit)
            | Self::AndIntLit16(a, b, lit)
            | Self::OrIntLit16(a, b, lit)
            | Self::XorIntLit16(a, b, lit) => vec![
                Operand::Reg(*a),
                Operand::Reg(*b),
                Operand::Literal(i64::from(*lit)),
            ],
            Self::AddIntLit8(a, b, lit)
            | Self::RsubIntLit8(a, b, lit)
            | Self::MulIntLit8(a, b, lit)
            | Self::DivIntLit8(a, b, lit)
            | Self::RemIntLit8(a, b, lit)
            | Self::AndIntLit8(a, b, lit)
            | Self::OrIntLit8(a, b, lit)
            | Self::XorIntLit8(a, b, lit)
            | Self::ShlIntLit8(a, b, lit)
            | Self::ShrIntLit8(a, b, lit)
            | Self::UshrIntLit8(a, b, lit) => vec![
                Operand::Reg(*a),
                Operand::Reg(*b),
                Operand::Literal(i64::from(*lit)),
            ],
        }
    }
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.mnemonic())?;
        for (i, operand) in self.operands().iter().enumerate() {
            if i == 0 {
                write!(f, " {operand}")?;
            } else {
                write!(f, ", {operand}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for Instr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Instr", 2)?;
        state.serialize_field("mnemonic", self.mnemonic())?;
        state.serialize_field("operands", &self.operands())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::Proto;

    fn reg(r: u16) -> Reg {
        Reg::from(r)
    }

    #[test]
    fn mnemonics_and_sizes() {
        assert_eq!(Instr::Nop.mnemonic(), "nop");
        assert_eq!(Instr::Nop.size(), 1);
        assert_eq!(Instr::Move16(reg(0), reg(1)).mnemonic(), "move/16");
        assert_eq!(Instr::Move16(reg(0), reg(1)).size(), 3);
        assert_eq!(Instr::MoveWide16(reg(0), reg(2)).size(), 3);
        assert_eq!(Instr::ConstWide(reg(0), 1).size(), 5);
        assert_eq!(Instr::LoadParamWide(reg(0)).size(), 0);
        assert_eq!(
            Instr::ShlLong2addr(reg(0), reg(2)).mnemonic(),
            "shl-long/2addr"
        );
    }

    #[test]
    fn dest_and_srcs() {
        let aput = Instr::AputWide(reg(0), reg(1), reg(2));
        assert_eq!(aput.dest(), None);
        assert_eq!(aput.srcs(), [reg(0), reg(1), reg(2)]);

        let aget = Instr::Aget(reg(0), reg(1), reg(2));
        assert_eq!(aget.dest(), Some(reg(0)));
        assert_eq!(aget.srcs(), [reg(1), reg(2)]);

        let invoke = Instr::InvokeVirtual(
            RegList::from(vec![1u16, 2, 3]),
            MethodRef::new(
                Type::Class("foo/Bar".to_string()),
                "frob",
                Proto::new(vec![Type::Int, Type::Long], Type::Void),
            ),
        );
        assert_eq!(invoke.dest(), None);
        assert_eq!(invoke.srcs(), [reg(1), reg(2), reg(3)]);

        let filled = Instr::FilledNewArray(
            RegList::from(vec![4u16, 5]),
            Type::Array(1, Box::new(Type::Int)),
        );
        assert_eq!(filled.dest(), None);
        assert_eq!(filled.srcs(), [reg(4), reg(5)]);

        let range = Instr::InvokeStaticRange(
            RegRange::from((2u16, 4u16)),
            MethodRef::new(
                Type::Class("foo/Bar".to_string()),
                "baz",
                Proto::new(vec![Type::Int, Type::Int, Type::Int], Type::Void),
            ),
        );
        assert_eq!(range.srcs(), [reg(2), reg(3), reg(4)]);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Instr::Nop), "nop");
        assert_eq!(
            format!("{}", Instr::Const4(reg(0), 0)),
            "const/4 v0, #+0"
        );
        assert_eq!(
            format!("{}", Instr::IfEqz(reg(3), -4)),
            "if-eqz v3, +-4"
        );
        let invoke = Instr::InvokeStatic(
            RegList::from(vec![0u16, 1]),
            MethodRef::new(
                Type::Class("foo/Bar".to_string()),
                "baz",
                Proto::new(vec![Type::Long], Type::Int),
            ),
        );
        assert_eq!(
            format!("{invoke}"),
            "invoke-static {v0, v1}, Lfoo/Bar;->baz(J)I"
        );
    }

    #[test]
    fn serialization() {
        let instr = Instr::NewArray(reg(0), reg(1), Type::Array(1, Box::new(Type::Int)));
        let json = serde_json::to_value(&instr).unwrap();
        assert_eq!(json["mnemonic"], "new-array");
        assert_eq!(json["operands"][0], 0);
        assert_eq!(json["operands"][1], 1);
        assert_eq!(json["operands"][2], "[I");
    }
}
