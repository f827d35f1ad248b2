//! Per-instruction register kind classification.
//!
//! The classifier answers, for any normalized instruction, which
//! [`RegisterKind`] it writes into its destination register and which kind it
//! expects in each of its source operands, and synthesizes the register to
//! register moves the allocator inserts when splitting or spilling.
//!
//! All three entry points are pure and total over well-formed queries.
//! Queries that violate their contract (asking for the destination of a
//! store, indexing a source out of range, classifying an encoding the
//! normalization pipeline must have lowered away) panic: they denote a bug in
//! an upstream pass, not a recoverable condition. Joins that produce
//! [`RegisterKind::Conflict`] are ordinary values, never errors.

use crate::lattice::RegisterKind;
use da_ir::instrs::{Instr, Instruction};
use da_ir::methods::MethodRef;
use da_ir::registers::Reg;

fn no_dest(insn: &Instr) -> ! {
    panic!("no dest register for {}", insn.mnemonic())
}

fn no_src(insn: &Instr, i: usize) -> ! {
    panic!("no src operand {i} for {}", insn.mnemonic())
}

fn not_lowered(insn: &Instr) -> ! {
    panic!("{} must be lowered before allocation", insn.mnemonic())
}

const fn const_dest_kind(literal: i64) -> RegisterKind {
    // A zero literal is usable both as null reference and as numeric zero;
    // the polymorphism is resolved later by joins.
    if literal == 0 {
        RegisterKind::Zero
    } else {
        RegisterKind::Normal
    }
}

/// Returns the kind the instruction writes into its destination register.
///
/// # Panics
///
/// Panics if the opcode has no destination, or is an encoding that must have
/// been lowered away before allocation (2addr arithmetic, range invokes).
#[allow(clippy::too_many_lines)]
#[allow(clippy::enum_glob_use)]
#[must_use]
pub fn dest_kind(insn: &Instr) -> RegisterKind {
    use RegisterKind::*;

    match insn {
        Instr::Nop
        | Instr::ReturnVoid
        | Instr::Return(_)
        | Instr::ReturnWide(_)
        | Instr::ReturnObject(_)
        | Instr::MonitorEnter(_)
        | Instr::MonitorExit(_)
        | Instr::FillArrayData(..)
        | Instr::Throw(_)
        | Instr::Goto(_)
        | Instr::Goto16(_)
        | Instr::Goto32(_)
        | Instr::PackedSwitch(..)
        | Instr::SparseSwitch(..)
        | Instr::IfEq(..)
        | Instr::IfNe(..)
        | Instr::IfLt(..)
        | Instr::IfGe(..)
        | Instr::IfGt(..)
        | Instr::IfLe(..)
        | Instr::IfEqz(..)
        | Instr::IfNez(..)
        | Instr::IfLtz(..)
        | Instr::IfGez(..)
        | Instr::IfGtz(..)
        | Instr::IfLez(..)
        | Instr::Aput(..)
        | Instr::AputWide(..)
        | Instr::AputObject(..)
        | Instr::AputBoolean(..)
        | Instr::AputByte(..)
        | Instr::AputChar(..)
        | Instr::AputShort(..)
        | Instr::Iput(..)
        | Instr::IputWide(..)
        | Instr::IputObject(..)
        | Instr::IputBoolean(..)
        | Instr::IputByte(..)
        | Instr::IputChar(..)
        | Instr::IputShort(..)
        | Instr::Sput(..)
        | Instr::SputWide(..)
        | Instr::SputObject(..)
        | Instr::SputBoolean(..)
        | Instr::SputByte(..)
        | Instr::SputChar(..)
        | Instr::SputShort(..)
        | Instr::InvokeVirtual(..)
        | Instr::InvokeSuper(..)
        | Instr::InvokeDirect(..)
        | Instr::InvokeStatic(..)
        | Instr::InvokeInterface(..) => no_dest(insn),

        Instr::AddInt2addr(..)
        | Instr::SubInt2addr(..)
        | Instr::MulInt2addr(..)
        | Instr::DivInt2addr(..)
        | Instr::RemInt2addr(..)
        | Instr::AndInt2addr(..)
        | Instr::OrInt2addr(..)
        | Instr::XorInt2addr(..)
        | Instr::ShlInt2addr(..)
        | Instr::ShrInt2addr(..)
        | Instr::UshrInt2addr(..)
        | Instr::AddLong2addr(..)
        | Instr::SubLong2addr(..)
        | Instr::MulLong2addr(..)
        | Instr::DivLong2addr(..)
        | Instr::RemLong2addr(..)
        | Instr::AndLong2addr(..)
        | Instr::OrLong2addr(..)
        | Instr::XorLong2addr(..)
        | Instr::ShlLong2addr(..)
        | Instr::ShrLong2addr(..)
        | Instr::UshrLong2addr(..)
        | Instr::AddFloat2addr(..)
        | Instr::SubFloat2addr(..)
        | Instr::MulFloat2addr(..)
        | Instr::DivFloat2addr(..)
        | Instr::RemFloat2addr(..)
        | Instr::AddDouble2addr(..)
        | Instr::SubDouble2addr(..)
        | Instr::MulDouble2addr(..)
        | Instr::DivDouble2addr(..)
        | Instr::RemDouble2addr(..)
        | Instr::InvokeVirtualRange(..)
        | Instr::InvokeSuperRange(..)
        | Instr::InvokeDirectRange(..)
        | Instr::InvokeStaticRange(..)
        | Instr::InvokeInterfaceRange(..) => not_lowered(insn),

        Instr::Move(..) | Instr::MoveFrom16(..) | Instr::Move16(..) => Normal,
        Instr::MoveWide(..) | Instr::MoveWideFrom16(..) | Instr::MoveWide16(..) => Wide,
        Instr::MoveObject(..) | Instr::MoveObjectFrom16(..) | Instr::MoveObject16(..) => Object,

        Instr::MoveResult(_) => Normal,
        Instr::MoveResultWide(_) => Wide,
        Instr::MoveResultObject(_) | Instr::MoveException(_) => Object,

        Instr::Const4(_, lit) => const_dest_kind(i64::from(*lit)),
        Instr::Const16(_, lit) | Instr::ConstHigh16(_, lit) => const_dest_kind(i64::from(*lit)),
        Instr::Const(_, lit) => const_dest_kind(i64::from(*lit)),

        Instr::ConstWide16(..)
        | Instr::ConstWide32(..)
        | Instr::ConstWide(..)
        | Instr::ConstWideHigh16(..) => Wide,

        Instr::ConstString(..)
        | Instr::ConstStringJumbo(..)
        | Instr::ConstClass(..)
        | Instr::CheckCast(..) => Object,

        Instr::InstanceOf(..) | Instr::ArrayLength(..) => Normal,

        Instr::NewInstance(..)
        | Instr::NewArray(..)
        | Instr::FilledNewArray(..)
        | Instr::FilledNewArrayRange(..) => Object,

        Instr::CmplFloat(..)
        | Instr::CmpgFloat(..)
        | Instr::CmplDouble(..)
        | Instr::CmpgDouble(..)
        | Instr::CmpLong(..) => Normal,

        Instr::Aget(..)
        | Instr::AgetBoolean(..)
        | Instr::AgetByte(..)
        | Instr::AgetChar(..)
        | Instr::AgetShort(..) => Normal,
        Instr::AgetWide(..) => Wide,
        Instr::AgetObject(..) => Object,

        Instr::Iget(..)
        | Instr::IgetBoolean(..)
        | Instr::IgetByte(..)
        | Instr::IgetChar(..)
        | Instr::IgetShort(..) => Normal,
        Instr::IgetWide(..) => Wide,
        Instr::IgetObject(..) => Object,

        Instr::Sget(..)
        | Instr::SgetBoolean(..)
        | Instr::SgetByte(..)
        | Instr::SgetChar(..)
        | Instr::SgetShort(..) => Normal,
        Instr::SgetWide(..) => Wide,
        Instr::SgetObject(..) => Object,

        Instr::NegInt(..) | Instr::NotInt(..) | Instr::NegFloat(..) => Normal,
        Instr::NegLong(..) | Instr::NotLong(..) | Instr::NegDouble(..) => Wide,

        Instr::IntToLong(..)
        | Instr::IntToDouble(..)
        | Instr::LongToDouble(..)
        | Instr::FloatToLong(..)
        | Instr::FloatToDouble(..)
        | Instr::DoubleToLong(..) => Wide,
        Instr::IntToFloat(..)
        | Instr::LongToInt(..)
        | Instr::LongToFloat(..)
        | Instr::FloatToInt(..)
        | Instr::DoubleToInt(..)
        | Instr::DoubleToFloat(..)
        | Instr::IntToByte(..)
        | Instr::IntToChar(..)
        | Instr::IntToShort(..) => Normal,

        Instr::AddInt(..)
        | Instr::SubInt(..)
        | Instr::MulInt(..)
        | Instr::DivInt(..)
        | Instr::RemInt(..)
        | Instr::AndInt(..)
        | Instr::OrInt(..)
        | Instr::XorInt(..)
        | Instr::ShlInt(..)
        | Instr::ShrInt(..)
        | Instr::UshrInt(..) => Normal,

        Instr::AddLong(..)
        | Instr::SubLong(..)
        | Instr::MulLong(..)
        | Instr::DivLong(..)
        | Instr::RemLong(..)
        | Instr::AndLong(..)
        | Instr::OrLong(..)
        | Instr::XorLong(..)
        | Instr::ShlLong(..)
        | Instr::ShrLong(..)
        | Instr::UshrLong(..) => Wide,

        Instr::AddFloat(..)
        | Instr::SubFloat(..)
        | Instr::MulFloat(..)
        | Instr::DivFloat(..)
        | Instr::RemFloat(..) => Normal,

        Instr::AddDouble(..)
        | Instr::SubDouble(..)
        | Instr::MulDouble(..)
        | Instr::DivDouble(..)
        | Instr::RemDouble(..) => Wide,

        Instr::AddIntLit16(..)
        | Instr::RsubInt(..)
        | Instr::MulIntLit16(..)
        | Instr::DivIntLit16(..)
        | Instr::RemIntLit16(..)
        | Instr::AndIntLit16(..)
        | Instr::OrIntLit16(..)
        | Instr::XorIntLit16(..)
        | Instr::AddIntLit8(..)
        | Instr::RsubIntLit8(..)
        | Instr::MulIntLit8(..)
        | Instr::DivIntLit8(..)
        | Instr::RemIntLit8(..)
        | Instr::AndIntLit8(..)
        | Instr::OrIntLit8(..)
        | Instr::XorIntLit8(..)
        | Instr::ShlIntLit8(..)
        | Instr::ShrIntLit8(..)
        | Instr::UshrIntLit8(..) => Normal,

        Instr::LoadParam(_) => Normal,
        Instr::LoadParamObject(_) => Object,
        Instr::LoadParamWide(_) => Wide,
    }
}

fn invoke_src_kind(insn: &Instr, method: &MethodRef, i: usize) -> RegisterKind {
    // non-static invokes have an implicit `this` operand that is not
    // reflected in the method proto
    let arg = if matches!(insn, Instr::InvokeStatic(..)) {
        i
    } else if i == 0 {
        return RegisterKind::Object;
    } else {
        i - 1
    };
    match method.proto().parameters_types().get(arg) {
        Some(typ) if typ.is_wide() => RegisterKind::Wide,
        Some(typ) if typ.is_primitive() => RegisterKind::Normal,
        Some(_) => RegisterKind::Object,
        None => no_src(insn, i),
    }
}

/// Returns the kind the instruction expects in its `i`-th source operand.
///
/// Source operands are indexed in the order [`Instr::srcs`] enumerates them.
///
/// # Panics
///
/// Panics if the opcode has no source at index `i`, or is an encoding that
/// must have been lowered away before allocation.
#[allow(clippy::too_many_lines)]
#[allow(clippy::enum_glob_use)]
#[must_use]
pub fn src_kind(insn: &Instr, i: usize) -> RegisterKind {
    use RegisterKind::*;

    match insn {
        Instr::Nop
        | Instr::MoveResult(_)
        | Instr::MoveResultWide(_)
        | Instr::MoveResultObject(_)
        | Instr::MoveException(_)
        | Instr::ReturnVoid
        | Instr::Const4(..)
        | Instr::Const16(..)
        | Instr::Const(..)
        | Instr::ConstHigh16(..)
        | Instr::ConstWide16(..)
        | Instr::ConstWide32(..)
        | Instr::ConstWide(..)
        | Instr::ConstWideHigh16(..)
        | Instr::ConstString(..)
        | Instr::ConstStringJumbo(..)
        | Instr::ConstClass(..)
        | Instr::NewInstance(..)
        | Instr::Goto(_)
        | Instr::Goto16(_)
        | Instr::Goto32(_)
        | Instr::Sget(..)
        | Instr::SgetWide(..)
        | Instr::SgetObject(..)
        | Instr::SgetBoolean(..)
        | Instr::SgetByte(..)
        | Instr::SgetChar(..)
        | Instr::SgetShort(..)
        | Instr::LoadParam(_)
        | Instr::LoadParamObject(_)
        | Instr::LoadParamWide(_) => no_src(insn, i),

        Instr::AddInt2addr(..)
        | Instr::SubInt2addr(..)
        | Instr::MulInt2addr(..)
        | Instr::DivInt2addr(..)
        | Instr::RemInt2addr(..)
        | Instr::AndInt2addr(..)
        | Instr::OrInt2addr(..)
        | Instr::XorInt2addr(..)
        | Instr::ShlInt2addr(..)
        | Instr::ShrInt2addr(..)
        | Instr::UshrInt2addr(..)
        | Instr::AddLong2addr(..)
        | Instr::SubLong2addr(..)
        | Instr::MulLong2addr(..)
        | Instr::DivLong2addr(..)
        | Instr::RemLong2addr(..)
        | Instr::AndLong2addr(..)
        | Instr::OrLong2addr(..)
        | Instr::XorLong2addr(..)
        | Instr::ShlLong2addr(..)
        | Instr::ShrLong2addr(..)
        | Instr::UshrLong2addr(..)
        | Instr::AddFloat2addr(..)
        | Instr::SubFloat2addr(..)
        | Instr::MulFloat2addr(..)
        | Instr::DivFloat2addr(..)
        | Instr::RemFloat2addr(..)
        | Instr::AddDouble2addr(..)
        | Instr::SubDouble2addr(..)
        | Instr::MulDouble2addr(..)
        | Instr::DivDouble2addr(..)
        | Instr::RemDouble2addr(..)
        | Instr::InvokeVirtualRange(..)
        | Instr::InvokeSuperRange(..)
        | Instr::InvokeDirectRange(..)
        | Instr::InvokeStaticRange(..)
        | Instr::InvokeInterfaceRange(..)
        | Instr::FilledNewArrayRange(..) => not_lowered(insn),

        Instr::Move(..) | Instr::MoveFrom16(..) | Instr::Move16(..) => match i {
            0 => Normal,
            _ => no_src(insn, i),
        },
        Instr::MoveWide(..) | Instr::MoveWideFrom16(..) | Instr::MoveWide16(..) => match i {
            0 => Wide,
            _ => no_src(insn, i),
        },
        Instr::MoveObject(..) | Instr::MoveObjectFrom16(..) | Instr::MoveObject16(..) => match i {
            0 => Object,
            _ => no_src(insn, i),
        },

        Instr::Return(_) => match i {
            0 => Normal,
            _ => no_src(insn, i),
        },
        Instr::ReturnWide(_) => match i {
            0 => Wide,
            _ => no_src(insn, i),
        },
        Instr::ReturnObject(_) => match i {
            0 => Object,
            _ => no_src(insn, i),
        },

        Instr::MonitorEnter(_)
        | Instr::MonitorExit(_)
        | Instr::CheckCast(..)
        | Instr::InstanceOf(..)
        | Instr::ArrayLength(..)
        | Instr::FillArrayData(..)
        | Instr::Throw(_) => match i {
            0 => Object,
            _ => no_src(insn, i),
        },

        Instr::NegInt(..) | Instr::NotInt(..) | Instr::NegFloat(..) => match i {
            0 => Normal,
            _ => no_src(insn, i),
        },
        Instr::NegLong(..) | Instr::NotLong(..) | Instr::NegDouble(..) => match i {
            0 => Wide,
            _ => no_src(insn, i),
        },

        // conversions read the input width
        Instr::IntToLong(..)
        | Instr::IntToFloat(..)
        | Instr::IntToDouble(..)
        | Instr::IntToByte(..)
        | Instr::IntToChar(..)
        | Instr::IntToShort(..)
        | Instr::FloatToInt(..)
        | Instr::FloatToLong(..)
        | Instr::FloatToDouble(..) => match i {
            0 => Normal,
            _ => no_src(insn, i),
        },
        Instr::LongToInt(..)
        | Instr::LongToFloat(..)
        | Instr::LongToDouble(..)
        | Instr::DoubleToInt(..)
        | Instr::DoubleToLong(..)
        | Instr::DoubleToFloat(..) => match i {
            0 => Wide,
            _ => no_src(insn, i),
        },

        Instr::CmplFloat(..) | Instr::CmpgFloat(..) => match i {
            0 | 1 => Normal,
            _ => no_src(insn, i),
        },
        Instr::CmplDouble(..) | Instr::CmpgDouble(..) | Instr::CmpLong(..) => match i {
            0 | 1 => Wide,
            _ => no_src(insn, i),
        },

        // can either be primitive or ref
        Instr::IfEq(..)
        | Instr::IfNe(..)
        | Instr::IfLt(..)
        | Instr::IfGe(..)
        | Instr::IfGt(..)
        | Instr::IfLe(..) => match i {
            0 | 1 => Unknown,
            _ => no_src(insn, i),
        },
        Instr::IfEqz(..)
        | Instr::IfNez(..)
        | Instr::IfLtz(..)
        | Instr::IfGez(..)
        | Instr::IfGtz(..)
        | Instr::IfLez(..) => match i {
            0 => Unknown,
            _ => no_src(insn, i),
        },

        Instr::Aget(..)
        | Instr::AgetWide(..)
        | Instr::AgetObject(..)
        | Instr::AgetBoolean(..)
        | Instr::AgetByte(..)
        | Instr::AgetChar(..)
        | Instr::AgetShort(..) => match i {
            0 => Object,
            1 => Normal,
            _ => no_src(insn, i),
        },

        Instr::Aput(..)
        | Instr::AputBoolean(..)
        | Instr::AputByte(..)
        | Instr::AputChar(..)
        | Instr::AputShort(..) => match i {
            0 => Normal,
            1 => Object,
            2 => Normal,
            _ => no_src(insn, i),
        },
        Instr::AputWide(..) => match i {
            0 => Wide,
            1 => Object,
            2 => Normal,
            _ => no_src(insn, i),
        },
        Instr::AputObject(..) => match i {
            0 | 1 => Object,
            2 => Normal,
            _ => no_src(insn, i),
        },

        Instr::AddInt(..)
        | Instr::SubInt(..)
        | Instr::MulInt(..)
        | Instr::DivInt(..)
        | Instr::RemInt(..)
        | Instr::AndInt(..)
        | Instr::OrInt(..)
        | Instr::XorInt(..)
        | Instr::ShlInt(..)
        | Instr::ShrInt(..)
        | Instr::UshrInt(..) => match i {
            0 | 1 => Normal,
            _ => no_src(insn, i),
        },

        Instr::AddLong(..)
        | Instr::SubLong(..)
        | Instr::MulLong(..)
        | Instr::DivLong(..)
        | Instr::RemLong(..)
        | Instr::AndLong(..)
        | Instr::OrLong(..)
        | Instr::XorLong(..) => match i {
            0 | 1 => Wide,
            _ => no_src(insn, i),
        },
        // long shifts take a 32-bit shift distance
        Instr::ShlLong(..) | Instr::ShrLong(..) | Instr::UshrLong(..) => match i {
            0 => Wide,
            1 => Normal,
            _ => no_src(insn, i),
        },

        Instr::AddFloat(..)
        | Instr::SubFloat(..)
        | Instr::MulFloat(..)
        | Instr::DivFloat(..)
        | Instr::RemFloat(..) => match i {
            0 | 1 => Normal,
            _ => no_src(insn, i),
        },

        Instr::AddDouble(..)
        | Instr::SubDouble(..)
        | Instr::MulDouble(..)
        | Instr::DivDouble(..)
        | Instr::RemDouble(..) => match i {
            0 | 1 => Wide,
            _ => no_src(insn, i),
        },

        Instr::AddIntLit16(..)
        | Instr::RsubInt(..)
        | Instr::MulIntLit16(..)
        | Instr::DivIntLit16(..)
        | Instr::RemIntLit16(..)
        | Instr::AndIntLit16(..)
        | Instr::OrIntLit16(..)
        | Instr::XorIntLit16(..)
        | Instr::AddIntLit8(..)
        | Instr::RsubIntLit8(..)
        | Instr::MulIntLit8(..)
        | Instr::DivIntLit8(..)
        | Instr::RemIntLit8(..)
        | Instr::AndIntLit8(..)
        | Instr::OrIntLit8(..)
        | Instr::XorIntLit8(..)
        | Instr::ShlIntLit8(..)
        | Instr::ShrIntLit8(..)
        | Instr::UshrIntLit8(..) => match i {
            0 => Normal,
            _ => no_src(insn, i),
        },

        // the scrutinee may be any non-wide value; left to dataflow
        Instr::PackedSwitch(..) | Instr::SparseSwitch(..) => match i {
            0 => Unknown,
            _ => no_src(insn, i),
        },

        Instr::Iget(..)
        | Instr::IgetWide(..)
        | Instr::IgetObject(..)
        | Instr::IgetBoolean(..)
        | Instr::IgetByte(..)
        | Instr::IgetChar(..)
        | Instr::IgetShort(..) => match i {
            0 => Object,
            _ => no_src(insn, i),
        },

        Instr::Iput(..)
        | Instr::IputBoolean(..)
        | Instr::IputByte(..)
        | Instr::IputChar(..)
        | Instr::IputShort(..) => match i {
            0 => Normal,
            1 => Object,
            _ => no_src(insn, i),
        },
        Instr::IputWide(..) => match i {
            0 => Wide,
            1 => Object,
            _ => no_src(insn, i),
        },
        Instr::IputObject(..) => match i {
            0 | 1 => Object,
            _ => no_src(insn, i),
        },

        Instr::Sput(..)
        | Instr::SputBoolean(..)
        | Instr::SputByte(..)
        | Instr::SputChar(..)
        | Instr::SputShort(..) => match i {
            0 => Normal,
            _ => no_src(insn, i),
        },
        Instr::SputWide(..) => match i {
            0 => Wide,
            _ => no_src(insn, i),
        },
        Instr::SputObject(..) => match i {
            0 => Object,
            _ => no_src(insn, i),
        },

        Instr::InvokeVirtual(_, method)
        | Instr::InvokeSuper(_, method)
        | Instr::InvokeDirect(_, method)
        | Instr::InvokeStatic(_, method)
        | Instr::InvokeInterface(_, method) => invoke_src_kind(insn, method, i),

        Instr::NewArray(..) => match i {
            0 => Normal,
            _ => no_src(insn, i),
        },

        Instr::FilledNewArray(args, arr) => {
            if i >= args.len() {
                no_src(insn, i);
            }
            let elem = arr
                .array_element_type()
                .unwrap_or_else(|_| panic!("filled-new-array with non-array type {arr}"));
            if elem.is_primitive() {
                Normal
            } else {
                Object
            }
        }
    }
}

/// Builds a register to register move of the given kind.
///
/// The widest (16-bit) encodings are used so that any register number fits;
/// the allocator inserts these when splitting live ranges or spilling.
///
/// # Panics
///
/// Panics for [`RegisterKind::Unknown`] and [`RegisterKind::Conflict`]: moves
/// cannot be materialized for non-ground kinds.
#[must_use]
pub fn make_move(kind: RegisterKind, dest: Reg, src: Reg) -> Instr {
    match kind {
        RegisterKind::Zero | RegisterKind::Normal => Instr::Move16(dest, src),
        RegisterKind::Object => Instr::MoveObject16(dest, src),
        RegisterKind::Wide => Instr::MoveWide16(dest, src),
        RegisterKind::Unknown | RegisterKind::Conflict => {
            panic!("cannot generate move for register kind {kind}")
        }
        RegisterKind::Size => unreachable!("the SIZE sentinel is not a register kind"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use da_ir::methods::Proto;
    use da_ir::registers::RegList;
    use da_ir::types::Type;
    use RegisterKind::{Normal, Object, Unknown, Wide, Zero};

    fn reg(r: u16) -> Reg {
        Reg::from(r)
    }

    fn virtual_call(params: Vec<Type>) -> Instr {
        let nregs = 1 + params.len() as u16;
        Instr::InvokeVirtual(
            RegList::from((1..=nregs).collect::<Vec<u16>>()),
            MethodRef::new(
                Type::Class("foo/Bar".to_string()),
                "bar",
                Proto::new(params, Type::Void),
            ),
        )
    }

    fn static_call(params: Vec<Type>) -> Instr {
        let nregs = params.len() as u16;
        Instr::InvokeStatic(
            RegList::from((1..=nregs).collect::<Vec<u16>>()),
            MethodRef::new(
                Type::Class("foo/Bar".to_string()),
                "baz",
                Proto::new(params, Type::Void),
            ),
        )
    }

    #[test]
    fn const_literals_degrade_to_zero() {
        assert_eq!(dest_kind(&Instr::Const4(reg(0), 0)), Zero);
        assert_eq!(dest_kind(&Instr::Const4(reg(0), 1)), Normal);
        assert_eq!(dest_kind(&Instr::Const16(reg(0), 0)), Zero);
        assert_eq!(dest_kind(&Instr::Const16(reg(0), -42)), Normal);
        assert_eq!(dest_kind(&Instr::ConstHigh16(reg(0), 0x41)), Normal);
        assert_eq!(dest_kind(&Instr::Const(reg(0), 0)), Zero);
        // wide constants never degrade to ZERO
        assert_eq!(dest_kind(&Instr::ConstWide16(reg(0), 0)), Wide);
        assert_eq!(dest_kind(&Instr::ConstWide(reg(0), 0)), Wide);
    }

    #[test]
    fn move_and_load_param_families() {
        assert_eq!(dest_kind(&Instr::Move(reg(0), reg(1))), Normal);
        assert_eq!(dest_kind(&Instr::MoveWide16(reg(0), reg(2))), Wide);
        assert_eq!(dest_kind(&Instr::MoveObjectFrom16(reg(0), reg(9))), Object);
        assert_eq!(dest_kind(&Instr::MoveException(reg(0))), Object);
        assert_eq!(src_kind(&Instr::MoveObject(reg(0), reg(1)), 0), Object);
        assert_eq!(dest_kind(&Instr::LoadParam(reg(0))), Normal);
        assert_eq!(dest_kind(&Instr::LoadParamObject(reg(1))), Object);
        assert_eq!(dest_kind(&Instr::LoadParamWide(reg(2))), Wide);
    }

    #[test]
    fn invoke_receiver_shifts_proto_args() {
        // invoke-virtual {v1, v2, v3}, LFoo;.bar(IJ)V
        let call = virtual_call(vec![Type::Int, Type::Long]);
        assert_eq!(src_kind(&call, 0), Object);
        assert_eq!(src_kind(&call, 1), Normal);
        assert_eq!(src_kind(&call, 2), Wide);
    }

    #[test]
    fn static_invoke_has_no_receiver() {
        let call = static_call(vec![Type::Int]);
        assert_eq!(src_kind(&call, 0), Normal);
        let call = static_call(vec![Type::Class("java/lang/String".to_string()), Type::Long]);
        assert_eq!(src_kind(&call, 0), Object);
        assert_eq!(src_kind(&call, 1), Wide);
    }

    #[test]
    fn array_accesses() {
        let aget = Instr::AgetWide(reg(0), reg(1), reg(2));
        assert_eq!(dest_kind(&aget), Wide);
        assert_eq!(src_kind(&aget, 0), Object);
        assert_eq!(src_kind(&aget, 1), Normal);

        let aput = Instr::AputWide(reg(0), reg(1), reg(2));
        assert_eq!(src_kind(&aput, 0), Wide);
        assert_eq!(src_kind(&aput, 1), Object);
        assert_eq!(src_kind(&aput, 2), Normal);

        let aput = Instr::AputObject(reg(0), reg(1), reg(2));
        assert_eq!(src_kind(&aput, 0), Object);
        assert_eq!(src_kind(&aput, 1), Object);
        assert_eq!(src_kind(&aput, 2), Normal);
    }

    #[test]
    fn field_accesses() {
        let field = da_ir::FieldRef::new(
            Type::Class("foo/Bar".to_string()),
            "baz",
            Type::Long,
        );
        let iput = Instr::IputWide(reg(0), reg(1), field.clone());
        assert_eq!(src_kind(&iput, 0), Wide);
        assert_eq!(src_kind(&iput, 1), Object);
        let iget = Instr::IgetWide(reg(0), reg(1), field.clone());
        assert_eq!(dest_kind(&iget), Wide);
        assert_eq!(src_kind(&iget, 0), Object);
        let sput = Instr::SputObject(reg(0), field.clone());
        assert_eq!(src_kind(&sput, 0), Object);
        assert_eq!(dest_kind(&Instr::SgetWide(reg(0), field)), Wide);
    }

    #[test]
    fn long_shifts_are_asymmetric() {
        let shl = Instr::ShlLong(reg(0), reg(1), reg(2));
        assert_eq!(dest_kind(&shl), Wide);
        assert_eq!(src_kind(&shl, 0), Wide);
        assert_eq!(src_kind(&shl, 1), Normal);
    }

    #[test]
    fn comparisons() {
        let cmp = Instr::CmpLong(reg(0), reg(1), reg(2));
        assert_eq!(dest_kind(&cmp), Normal);
        assert_eq!(src_kind(&cmp, 0), Wide);
        assert_eq!(src_kind(&cmp, 1), Wide);
        let cmp = Instr::CmplFloat(reg(0), reg(1), reg(2));
        assert_eq!(src_kind(&cmp, 0), Normal);
    }

    #[test]
    fn branches_stay_unknown() {
        assert_eq!(src_kind(&Instr::IfEqz(reg(0), 3), 0), Unknown);
        assert_eq!(src_kind(&Instr::IfLt(reg(0), reg(1), 3), 1), Unknown);
        assert_eq!(src_kind(&Instr::PackedSwitch(reg(0), 8), 0), Unknown);
    }

    #[test]
    fn filled_new_array_follows_element_type() {
        let ints = Instr::FilledNewArray(
            RegList::from(vec![0u16, 1]),
            Type::Array(1, Box::new(Type::Int)),
        );
        assert_eq!(dest_kind(&ints), Object);
        assert_eq!(src_kind(&ints, 0), Normal);
        assert_eq!(src_kind(&ints, 1), Normal);

        let strings = Instr::FilledNewArray(
            RegList::from(vec![0u16]),
            Type::Array(1, Box::new(Type::Class("java/lang/String".to_string()))),
        );
        assert_eq!(src_kind(&strings, 0), Object);
    }

    #[test]
    fn conversions_read_the_input_width() {
        assert_eq!(src_kind(&Instr::IntToLong(reg(0), reg(1)), 0), Normal);
        assert_eq!(dest_kind(&Instr::IntToLong(reg(0), reg(1))), Wide);
        assert_eq!(src_kind(&Instr::LongToInt(reg(0), reg(1)), 0), Wide);
        assert_eq!(dest_kind(&Instr::LongToInt(reg(0), reg(1))), Normal);
        assert_eq!(src_kind(&Instr::DoubleToFloat(reg(0), reg(1)), 0), Wide);
        assert_eq!(dest_kind(&Instr::DoubleToFloat(reg(0), reg(1))), Normal);
    }

    #[test]
    fn move_synthesis_round_trips() {
        for kind in [Zero, Normal, Wide, Object] {
            let insn = make_move(kind, reg(7), reg(300));
            assert_eq!(insn.dest(), Some(reg(7)));
            assert_eq!(insn.srcs(), [reg(300)]);
            // 16-bit encodings, so arbitrary register numbers fit
            assert_eq!(insn.size(), 3);
            if kind == Zero {
                assert_eq!(dest_kind(&insn), Normal);
                assert_eq!(src_kind(&insn, 0), Normal);
            } else {
                assert_eq!(dest_kind(&insn), kind);
                assert_eq!(src_kind(&insn, 0), kind);
            }
        }
        assert_eq!(
            make_move(Object, reg(0), reg(1)),
            Instr::MoveObject16(reg(0), reg(1))
        );
    }

    #[test]
    fn sources_and_kinds_agree() {
        let field = da_ir::FieldRef::new(
            Type::Class("foo/Bar".to_string()),
            "baz",
            Type::Int,
        );
        let sample = [
            Instr::Move(reg(0), reg(1)),
            Instr::Return(reg(0)),
            Instr::CheckCast(reg(0), Type::Class("foo/Bar".to_string())),
            Instr::InstanceOf(reg(0), reg(1), Type::Class("foo/Bar".to_string())),
            Instr::ArrayLength(reg(0), reg(1)),
            Instr::NewArray(reg(0), reg(1), Type::Array(1, Box::new(Type::Int))),
            Instr::FillArrayData(reg(0), 16),
            Instr::Throw(reg(0)),
            Instr::PackedSwitch(reg(0), 4),
            Instr::CmpgDouble(reg(0), reg(2), reg(4)),
            Instr::IfGe(reg(0), reg(1), -2),
            Instr::IfNez(reg(0), 2),
            Instr::AgetByte(reg(0), reg(1), reg(2)),
            Instr::AputChar(reg(0), reg(1), reg(2)),
            Instr::Iput(reg(0), reg(1), field.clone()),
            Instr::Sput(reg(0), field),
            Instr::NegDouble(reg(0), reg(2)),
            Instr::FloatToLong(reg(0), reg(2)),
            Instr::XorInt(reg(0), reg(1), reg(2)),
            Instr::RemDouble(reg(0), reg(2), reg(4)),
            Instr::UshrLong(reg(0), reg(2), reg(4)),
            Instr::RsubInt(reg(0), reg(1), 12),
            virtual_call(vec![Type::Long, Type::Int]),
            static_call(vec![Type::Float]),
        ];
        for insn in &sample {
            // every enumerated source has a kind; the classifier is the
            // indexing contract for srcs()
            for i in 0..insn.srcs().len() {
                let _ = src_kind(insn, i);
            }
            if insn.dest().is_some() {
                let _ = dest_kind(insn);
            }
        }
    }

    #[test]
    #[should_panic(expected = "no dest register for nop")]
    fn nop_has_no_dest() {
        let _ = dest_kind(&Instr::Nop);
    }

    #[test]
    #[should_panic(expected = "no dest register for return-void")]
    fn return_void_has_no_dest() {
        let _ = dest_kind(&Instr::ReturnVoid);
    }

    #[test]
    #[should_panic(expected = "no dest register for goto")]
    fn goto_has_no_dest() {
        let _ = dest_kind(&Instr::Goto(-3));
    }

    #[test]
    #[should_panic(expected = "no dest register for if-eqz")]
    fn branches_have_no_dest() {
        let _ = dest_kind(&Instr::IfEqz(Reg::from(0u16), 2));
    }

    #[test]
    #[should_panic(expected = "no dest register for aput")]
    fn stores_have_no_dest() {
        let r = Reg::from(0u16);
        let _ = dest_kind(&Instr::Aput(r, r, r));
    }

    #[test]
    #[should_panic(expected = "add-int/2addr must be lowered")]
    fn two_addr_is_rejected() {
        let r = Reg::from(0u16);
        let _ = dest_kind(&Instr::AddInt2addr(r, r));
    }

    #[test]
    #[should_panic(expected = "invoke-virtual/range must be lowered")]
    fn range_invokes_are_rejected() {
        use da_ir::registers::RegRange;
        let call = Instr::InvokeVirtualRange(
            RegRange::from((0u16, 2u16)),
            MethodRef::new(
                Type::Class("foo/Bar".to_string()),
                "bar",
                Proto::new(vec![Type::Int, Type::Int], Type::Void),
            ),
        );
        let _ = src_kind(&call, 0);
    }

    #[test]
    #[should_panic(expected = "no src operand 0 for const/4")]
    fn consts_have_no_src() {
        let _ = src_kind(&Instr::Const4(Reg::from(0u16), 1), 0);
    }

    #[test]
    #[should_panic(expected = "no src operand 0 for sget")]
    fn static_reads_have_no_src() {
        let field = da_ir::FieldRef::new(
            Type::Class("foo/Bar".to_string()),
            "baz",
            Type::Int,
        );
        let _ = src_kind(&Instr::Sget(Reg::from(0u16), field), 0);
    }

    #[test]
    #[should_panic(expected = "no src operand 0 for new-instance")]
    fn new_instance_has_no_src() {
        let _ = src_kind(
            &Instr::NewInstance(Reg::from(0u16), Type::Class("foo/Bar".to_string())),
            0,
        );
    }

    #[test]
    #[should_panic(expected = "no src operand 0 for load-param")]
    fn load_params_have_no_src() {
        let _ = src_kind(&Instr::LoadParam(Reg::from(0u16)), 0);
    }

    #[test]
    #[should_panic(expected = "no src operand 2 for move")]
    fn src_index_is_bounds_checked() {
        let r = Reg::from(0u16);
        let _ = src_kind(&Instr::Move(r, r), 2);
    }

    #[test]
    #[should_panic(expected = "no src operand 3 for invoke-virtual")]
    fn invoke_src_index_is_bounds_checked() {
        let call = virtual_call(vec![Type::Int, Type::Int]);
        let _ = src_kind(&call, 3);
    }

    #[test]
    #[should_panic(expected = "cannot generate move for register kind UNKNOWN")]
    fn no_move_for_unknown() {
        let r = Reg::from(0u16);
        let _ = make_move(Unknown, r, r);
    }

    #[test]
    #[should_panic(expected = "cannot generate move for register kind CONFLICT")]
    fn no_move_for_conflict() {
        let r = Reg::from(0u16);
        let _ = make_move(RegisterKind::Conflict, r, r);
    }
}
