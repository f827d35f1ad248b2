//! Per-method register kind summary.
//!
//! Folds the classifier's verdicts over a whole method body: the kind of a
//! register is the join of every kind written to it and every kind expected
//! from it. The kind lattice carries no flow sensitivity, so the fold visits
//! instructions in any order and still reaches the same fixpoint.

use crate::classify::{dest_kind, src_kind};
use crate::errors::{AllocError, AllocResult};
use crate::lattice::RegisterKind;
use da_ir::instrs::Instr;
use da_ir::registers::Reg;

/// Computes the kind of every register of a method body.
///
/// Registers start at [`RegisterKind::Unknown`]; a register left at
/// `Unknown` is never defined nor used. A register ending at
/// [`RegisterKind::Conflict`] is used with incompatible kinds and must be
/// split by the allocator; that is a normal outcome, not an error.
///
/// # Errors
///
/// Returns [`AllocError::OutOfBoundsRegister`] if an instruction addresses a
/// register outside `registers_size`.
pub fn method_kinds(body: &[Instr], registers_size: usize) -> AllocResult<Vec<RegisterKind>> {
    let mut kinds = vec![RegisterKind::Unknown; registers_size];
    for insn in body {
        log::trace!("fold( {insn} )");
        if let Some(dest) = insn.dest() {
            join_into(&mut kinds, dest, dest_kind(insn))?;
        }
        for (i, src) in insn.srcs().iter().enumerate() {
            join_into(&mut kinds, *src, src_kind(insn, i))?;
        }
    }
    for (r, kind) in kinds.iter().enumerate() {
        log::debug!("v{r}: {kind}");
    }
    Ok(kinds)
}

fn join_into(kinds: &mut [RegisterKind], r: Reg, kind: RegisterKind) -> AllocResult<()> {
    let slot = kinds
        .get_mut(r.value() as usize)
        .ok_or(AllocError::OutOfBoundsRegister(r))?;
    *slot = slot.join(kind);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use da_ir::methods::{MethodRef, Proto};
    use da_ir::registers::RegList;
    use da_ir::types::Type;
    use RegisterKind::{Conflict, Normal, Object, Unknown, Wide, Zero};

    fn reg(r: u16) -> Reg {
        Reg::from(r)
    }

    #[test]
    fn zero_refines_through_joins() {
        // v0 starts as a zero literal, then flows into a receiver slot: the
        // join refines it to OBJECT.
        let call = Instr::InvokeVirtual(
            RegList::from(vec![0u16]),
            MethodRef::new(
                Type::Class("foo/Bar".to_string()),
                "frob",
                Proto::new(vec![], Type::Void),
            ),
        );
        let body = [Instr::Const4(reg(0), 0), call.clone()];
        let kinds = method_kinds(&body, 1).unwrap();
        assert_eq!(kinds, [Object]);

        // adding a numeric use drives the register to CONFLICT
        let body = [
            Instr::Const4(reg(0), 0),
            call,
            Instr::AddIntLit8(reg(1), reg(0), 3),
        ];
        let kinds = method_kinds(&body, 2).unwrap();
        assert_eq!(kinds, [Conflict, Normal]);
    }

    #[test]
    fn ground_kinds_stick() {
        let body = [
            Instr::LoadParamWide(reg(0)),
            Instr::LoadParamObject(reg(2)),
            Instr::Const4(reg(3), 0),
            Instr::AddLong(reg(4), reg(0), reg(0)),
            Instr::ReturnVoid,
        ];
        let kinds = method_kinds(&body, 6).unwrap();
        assert_eq!(kinds, [Wide, Unknown, Object, Zero, Wide, Unknown]);
    }

    #[test]
    fn branch_scrutinees_stay_unrefined() {
        let body = [Instr::IfEqz(reg(0), 4)];
        let kinds = method_kinds(&body, 1).unwrap();
        assert_eq!(kinds, [Unknown]);
    }

    #[test]
    fn out_of_bounds_register_is_reported() {
        let body = [Instr::Const4(reg(5), 1)];
        let err = method_kinds(&body, 2).unwrap_err();
        assert!(matches!(err, AllocError::OutOfBoundsRegister(r) if r.value() == 5));
    }
}
