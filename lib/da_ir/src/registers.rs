//! Types definitions to address Dalvik registers.
//!
//! Dalvik instructions address registers (or register pairs) on 4, 8 or 16
//! bits depending on the encoding. To ease bytecode manipulation, we define a
//! [register](Reg) wrapper over a 16 bits integer, wide enough for every
//! encoding the allocator emits. Registers groups (lists or ranges), used to
//! pass method invocation arguments, are defined in this module too.

use serde::Serialize;
use std::{fmt, io};

/// The register type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Reg(u16);

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<u8> for Reg {
    fn from(r: u8) -> Self {
        Self(u16::from(r))
    }
}

impl From<u16> for Reg {
    fn from(r: u16) -> Self {
        Self(r)
    }
}

impl TryFrom<Reg> for u8 {
    type Error = io::Error;

    fn try_from(r: Reg) -> Result<Self, Self::Error> {
        if r.0 <= u16::from(Self::MAX) {
            Ok(r.0 as Self)
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "register cannot fit into u8",
            ))
        }
    }
}

impl From<Reg> for u16 {
    fn from(r: Reg) -> Self {
        r.0
    }
}

impl Reg {
    /// Returns the wrapped register slot number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Returns the following register.
    ///
    /// This function is used to address the high slot of a register pair
    /// without manipulating slot numbers directly.
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// An explicit list of registers, used for methods invocation arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegList(Vec<Reg>);

impl fmt::Display for RegList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for i in 0..self.0.len() {
            write!(f, "{}", self.0[i])?;
            if i < self.0.len() - 1 {
                write!(f, ", ")?;
            }
        }
        write!(f, "}}")
    }
}

impl<T> From<Vec<T>> for RegList
where
    Reg: From<T>,
{
    fn from(args: Vec<T>) -> Self {
        Self(args.into_iter().map(Reg::from).collect())
    }
}

impl RegList {
    /// Checks if the list contains no register.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of registers in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the register at the given position in the list, if any.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Reg> {
        self.0.get(i).copied()
    }

    /// Returns a new iterator over the registers list.
    #[must_use]
    pub const fn iter(&self) -> RegListIterator {
        RegListIterator {
            list: self,
            current: 0,
        }
    }
}

/// An [`Iterator`] over registers from a list.
pub struct RegListIterator<'a> {
    list: &'a RegList,
    current: usize,
}

impl<'a> Iterator for RegListIterator<'a> {
    type Item = Reg;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.list.0.len() {
            None
        } else {
            let res = Some(self.list.0[self.current]);
            self.current += 1;
            res
        }
    }
}

/// A range of register addresses, used to pass consecutive register slots as
/// method invocation arguments in the `/range` encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegRange {
    begin: Reg,
    end: Reg,
}

impl fmt::Display for RegRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{} .. {}}}", self.begin, self.end)
    }
}

impl<T> From<(T, T)> for RegRange
where
    Reg: From<T>,
    T: PartialOrd,
{
    fn from(bounds: (T, T)) -> Self {
        assert!(bounds.0 <= bounds.1, "invalid registers range");
        Self {
            begin: Reg::from(bounds.0),
            end: Reg::from(bounds.1),
        }
    }
}

impl RegRange {
    /// Returns the first register of the range.
    #[inline]
    #[must_use]
    pub const fn begin(&self) -> &Reg {
        &self.begin
    }

    /// Returns the last register of the range.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> &Reg {
        &self.end
    }

    /// Returns a new iterator over the register range.
    #[must_use]
    pub const fn iter(&self) -> RegRangeIterator {
        RegRangeIterator {
            range: self,
            current: *self.begin(),
        }
    }
}

/// An [`Iterator`] over registers from a range.
pub struct RegRangeIterator<'a> {
    range: &'a RegRange,
    current: Reg,
}

impl<'a> Iterator for RegRangeIterator<'a> {
    type Item = Reg;

    fn next(&mut self) -> Option<Reg> {
        if self.current.0 > self.range.end().0 {
            None
        } else {
            let res = self.current;
            self.current = self.current.next();
            Some(res)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_addressing() {
        let low = Reg::from(4u16);
        assert_eq!(low.next().value(), 5);
        assert_eq!(format!("{low}"), "v4");
    }

    #[test]
    fn list_iteration() {
        let list = RegList::from(vec![1u16, 2, 3]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1), Some(Reg::from(2u16)));
        assert_eq!(list.iter().map(Reg::value).collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(format!("{list}"), "{v1, v2, v3}");
    }

    #[test]
    fn range_iteration() {
        let range = RegRange::from((2u16, 5u16));
        assert_eq!(
            range.iter().map(Reg::value).collect::<Vec<_>>(),
            [2, 3, 4, 5]
        );
    }
}
