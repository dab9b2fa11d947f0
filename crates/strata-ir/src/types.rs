//! IR types
//!
//! Types reference their classifier through a symbol, so two types built from
//! the same classifier id share the same `Symbol` instance.

use crate::expr::Expression;
use crate::symbol::SymbolRef;
use std::rc::Rc;

/// Projection variance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variance {
    In,
    Out,
    #[default]
    Invariant,
}

impl std::fmt::Display for Variance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variance::In => write!(f, "in"),
            Variance::Out => write!(f, "out"),
            Variance::Invariant => Ok(()),
        }
    }
}

/// A type argument of a simple type
#[derive(Debug, Clone)]
pub enum TypeArgument {
    /// `*`
    Star,
    /// A typed projection with its variance
    Projection { ty: Type, variance: Variance },
}

impl TypeArgument {
    pub fn is_star(&self) -> bool {
        matches!(self, TypeArgument::Star)
    }

    pub fn variance(&self) -> Option<Variance> {
        match self {
            TypeArgument::Star => None,
            TypeArgument::Projection { variance, .. } => Some(*variance),
        }
    }
}

/// Classifier type with nullability and arguments
#[derive(Debug, Clone)]
pub struct SimpleType {
    pub classifier: SymbolRef,
    pub nullable: bool,
    pub arguments: Vec<TypeArgument>,
    /// Annotations, each modeled as a call expression
    pub annotations: Vec<Expression>,
}

impl Drop for SimpleType {
    fn drop(&mut self) {
        let arguments = std::mem::take(&mut self.arguments);
        crate::stack::grow(move || drop(arguments));
    }
}

/// Payload of dynamic and error types
#[derive(Debug, Clone, Default)]
pub struct SpecialType {
    pub annotations: Vec<Expression>,
    pub variance: Variance,
}

/// IR type
#[derive(Debug, Clone)]
pub enum Type {
    Simple(SimpleType),
    Dynamic(SpecialType),
    Error(SpecialType),
}

impl Type {
    /// Non-nullable, argument-free type of a classifier
    pub fn simple(classifier: SymbolRef) -> Self {
        Type::Simple(SimpleType {
            classifier,
            nullable: false,
            arguments: Vec::new(),
            annotations: Vec::new(),
        })
    }

    pub fn as_simple(&self) -> Option<&SimpleType> {
        match self {
            Type::Simple(simple) => Some(simple),
            Type::Dynamic(_) | Type::Error(_) => None,
        }
    }

    pub fn classifier(&self) -> Option<&SymbolRef> {
        self.as_simple().map(|simple| &simple.classifier)
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Type::Simple(simple) => simple.nullable,
            // Dynamic admits null; an error type says nothing
            Type::Dynamic(_) => true,
            Type::Error(_) => false,
        }
    }

    pub fn arguments(&self) -> &[TypeArgument] {
        match self {
            Type::Simple(simple) => &simple.arguments,
            Type::Dynamic(_) | Type::Error(_) => &[],
        }
    }

    pub fn annotations(&self) -> &[Expression] {
        match self {
            Type::Simple(SimpleType { annotations, .. })
            | Type::Dynamic(SpecialType { annotations, .. })
            | Type::Error(SpecialType { annotations, .. }) => annotations,
        }
    }

    /// True if both types are simple types over the same classifier instance
    pub fn same_classifier(&self, other: &Type) -> bool {
        match (self.classifier(), other.classifier()) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Type::Error(_))
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Simple(simple) => {
                write!(f, "{}", simple.classifier.name())?;
                if !simple.arguments.is_empty() {
                    write!(f, "<")?;
                    for (i, argument) in simple.arguments.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        match argument {
                            TypeArgument::Star => write!(f, "*")?,
                            TypeArgument::Projection {
                                ty,
                                variance: Variance::Invariant,
                            } => write!(f, "{}", ty)?,
                            TypeArgument::Projection { ty, variance } => {
                                write!(f, "{} {}", variance, ty)?
                            }
                        }
                    }
                    write!(f, ">")?;
                }
                if simple.nullable {
                    write!(f, "?")?;
                }
                Ok(())
            }
            Type::Dynamic(_) => write!(f, "dynamic"),
            Type::Error(_) => write!(f, "<error>"),
        }
    }
}
