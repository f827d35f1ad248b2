//! Dalvik typing informations data structures.

use crate::errors::{IrError, IrResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Dalvik concrete type descriptor type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
    /// `void` type, only valid for return types.
    Void,
    /// `boolean` type.
    Boolean,
    /// `byte` type.
    Byte,
    /// `short` type.
    Short,
    /// `char` type.
    Char,
    /// `int` type.
    Int,
    /// `long` type.
    Long,
    /// `float` type.
    Float,
    /// `double` type.
    Double,
    /// Array of the given type descriptor, usable recursively for arrays of
    /// arrays, though it is invalid to have more than 255 dimensions.
    Array(usize, Box<Self>),
    /// Type of a fully-qualified class.
    Class(String),
}

impl Type {
    /// Checks if values of this type occupy a Dalvik register pair.
    #[must_use]
    pub const fn is_wide(&self) -> bool {
        matches!(self, Self::Long | Self::Double)
    }

    /// Checks if this is a primitive (non-reference, non-void) type.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Boolean
                | Self::Byte
                | Self::Short
                | Self::Char
                | Self::Int
                | Self::Long
                | Self::Float
                | Self::Double
        )
    }

    /// Checks if this is a reference (class or array) type.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Array(_, _) | Self::Class(_))
    }

    /// Returns the element type of an array type.
    ///
    /// For a multi-dimensional array, the element is the array with one
    /// dimension less.
    ///
    /// # Errors
    ///
    /// Returns [`IrError::InvalidType`] if the type is not an array.
    pub fn array_element_type(&self) -> IrResult<Self> {
        match self {
            Self::Array(1, inner) => Ok(inner.as_ref().clone()),
            Self::Array(n, inner) => Ok(Self::Array(n - 1, inner.clone())),
            _ => Err(IrError::InvalidType),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Void => write!(f, "V"),
            Self::Boolean => write!(f, "Z"),
            Self::Byte => write!(f, "B"),
            Self::Short => write!(f, "S"),
            Self::Char => write!(f, "C"),
            Self::Int => write!(f, "I"),
            Self::Long => write!(f, "J"),
            Self::Float => write!(f, "F"),
            Self::Double => write!(f, "D"),
            Self::Array(n, inner) => {
                for _ in 0..*n {
                    write!(f, "[")?;
                }
                write!(f, "{inner}")
            }
            Self::Class(classname) => write!(f, "L{classname};"),
        }
    }
}

impl TryFrom<&str> for Type {
    type Error = IrError;

    fn try_from(s: &str) -> IrResult<Self> {
        if s.is_empty() {
            return Err(IrError::Conversion {
                from: format!("&str ({s:?})"),
                to: "Type".to_string(),
            });
        }

        if s == "V" {
            return Ok(Self::Void);
        }

        let mut i: usize = 0;
        while i < s.len() && &s[i..=i] == "[" {
            i += 1;
        }
        if i >= s.len() || i >= 255 {
            return Err(IrError::Conversion {
                from: format!("&str ({s:?})"),
                to: "Type".to_string(),
            });
        }

        let t = match &s[i..] {
            "Z" => Ok(Self::Boolean),
            "B" => Ok(Self::Byte),
            "S" => Ok(Self::Short),
            "C" => Ok(Self::Char),
            "I" => Ok(Self::Int),
            "J" => Ok(Self::Long),
            "F" => Ok(Self::Float),
            "D" => Ok(Self::Double),
            sub => {
                let l = sub.len();
                if l < 2 {
                    return Err(IrError::Conversion {
                        from: format!("&str ({s:?})"),
                        to: "Type".to_string(),
                    });
                }
                if &sub[0..1] == "L" && &sub[l - 1..l] == ";" {
                    Ok(Self::Class(sub[1..l - 1].to_string()))
                } else {
                    Err(IrError::Conversion {
                        from: format!("&str: ({s:?})"),
                        to: "Type".to_string(),
                    })
                }
            }
        }?;
        if i == 0 {
            Ok(t)
        } else {
            Ok(Self::Array(i, Box::new(t)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_parsing() {
        assert_eq!(Type::try_from("V").unwrap(), Type::Void);
        assert_eq!(Type::try_from("J").unwrap(), Type::Long);
        assert_eq!(
            Type::try_from("Ljava/lang/String;").unwrap(),
            Type::Class("java/lang/String".to_string())
        );
        assert_eq!(
            Type::try_from("[[I").unwrap(),
            Type::Array(2, Box::new(Type::Int))
        );
        assert!(Type::try_from("").is_err());
        assert!(Type::try_from("Q").is_err());
        assert!(Type::try_from("[").is_err());
    }

    #[test]
    fn descriptor_printing_round_trip() {
        for descr in ["Z", "D", "[J", "[[Lfoo/Bar;", "Ljava/lang/Object;"] {
            let typ = Type::try_from(descr).unwrap();
            assert_eq!(format!("{typ}"), descr);
        }
    }

    #[test]
    fn width_predicates() {
        assert!(Type::Long.is_wide());
        assert!(Type::Double.is_wide());
        assert!(!Type::Int.is_wide());
        assert!(!Type::Class("java/lang/Long".to_string()).is_wide());
        assert!(Type::Boolean.is_primitive());
        assert!(!Type::Void.is_primitive());
        assert!(!Type::Array(1, Box::new(Type::Int)).is_primitive());
        assert!(Type::Array(1, Box::new(Type::Int)).is_reference());
    }

    #[test]
    fn array_elements() {
        let ints = Type::try_from("[I").unwrap();
        assert_eq!(ints.array_element_type().unwrap(), Type::Int);
        let grid = Type::try_from("[[I").unwrap();
        assert_eq!(
            grid.array_element_type().unwrap(),
            Type::Array(1, Box::new(Type::Int))
        );
        assert!(Type::Int.array_element_type().is_err());
    }
}
