//! Symbols
//!
//! Every reference to a declaration goes through a symbol. Within one decoding
//! session there is exactly one `Symbol` per `SymbolId`; all references share it.

use crate::descriptor::{Descriptor, DescriptorKind};
use std::rc::Rc;

/// Session-global numeric symbol identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub u64);

impl SymbolId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sym{:x}", self.0)
    }
}

/// Symbol kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    AnonymousInitializer,
    Class,
    Constructor,
    EnumEntry,
    Field,
    Function,
    TypeParameter,
    ValueParameter,
    Variable,
}

impl SymbolKind {
    /// Kind of placeholder descriptor an unbacked symbol of this kind is bound to
    pub fn placeholder_kind(self) -> DescriptorKind {
        match self {
            SymbolKind::AnonymousInitializer | SymbolKind::Class | SymbolKind::EnumEntry => {
                DescriptorKind::Class
            }
            SymbolKind::Constructor => DescriptorKind::Constructor,
            SymbolKind::Field => DescriptorKind::Property,
            SymbolKind::Function => DescriptorKind::Function,
            SymbolKind::TypeParameter => DescriptorKind::TypeParameter,
            SymbolKind::ValueParameter => DescriptorKind::ValueParameter,
            SymbolKind::Variable => DescriptorKind::Variable,
        }
    }

    /// Whether a descriptor of `kind` may back a symbol of this kind
    pub fn accepts(self, kind: DescriptorKind) -> bool {
        match self {
            SymbolKind::AnonymousInitializer | SymbolKind::Class => kind == DescriptorKind::Class,
            SymbolKind::EnumEntry => {
                matches!(kind, DescriptorKind::EnumEntry | DescriptorKind::Class)
            }
            SymbolKind::Constructor => kind == DescriptorKind::Constructor,
            // Backing fields are described by their property
            SymbolKind::Field => kind == DescriptorKind::Property,
            SymbolKind::Function => kind.is_function(),
            SymbolKind::TypeParameter => kind == DescriptorKind::TypeParameter,
            SymbolKind::ValueParameter => kind == DescriptorKind::ValueParameter,
            SymbolKind::Variable => kind == DescriptorKind::Variable,
        }
    }

    /// Classes and type parameters can classify a type
    pub fn is_classifier(self) -> bool {
        matches!(self, SymbolKind::Class | SymbolKind::TypeParameter)
    }

    /// Anything that can be called or referenced as a function
    pub fn is_function_like(self) -> bool {
        matches!(self, SymbolKind::Function | SymbolKind::Constructor)
    }

    /// Anything a value read can target
    pub fn is_value(self) -> bool {
        matches!(self, SymbolKind::Variable | SymbolKind::ValueParameter)
    }

    pub fn name(self) -> &'static str {
        match self {
            SymbolKind::AnonymousInitializer => "anonymous initializer",
            SymbolKind::Class => "class",
            SymbolKind::Constructor => "constructor",
            SymbolKind::EnumEntry => "enum entry",
            SymbolKind::Field => "field",
            SymbolKind::Function => "function",
            SymbolKind::TypeParameter => "type parameter",
            SymbolKind::ValueParameter => "value parameter",
            SymbolKind::Variable => "variable",
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What backs a symbol
#[derive(Debug, Clone)]
pub enum SymbolBinding {
    /// Resolved from a descriptor reference in the universe (or a builtin)
    Bound(Descriptor),
    /// No reference was recorded; bound to the shared placeholder of its kind
    Placeholder(Descriptor),
}

impl SymbolBinding {
    pub fn descriptor(&self) -> &Descriptor {
        match self {
            SymbolBinding::Bound(descriptor) | SymbolBinding::Placeholder(descriptor) => descriptor,
        }
    }

    /// The real descriptor, if any
    pub fn bound(&self) -> Option<&Descriptor> {
        match self {
            SymbolBinding::Bound(descriptor) => Some(descriptor),
            SymbolBinding::Placeholder(_) => None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, SymbolBinding::Placeholder(_))
    }
}

/// Identity-shared symbol
#[derive(Debug)]
pub struct Symbol {
    id: SymbolId,
    kind: SymbolKind,
    binding: SymbolBinding,
}

/// Shared handle to a symbol
pub type SymbolRef = Rc<Symbol>;

impl Symbol {
    pub fn new(id: SymbolId, kind: SymbolKind, binding: SymbolBinding) -> SymbolRef {
        Rc::new(Self { id, kind, binding })
    }

    pub fn id(&self) -> SymbolId {
        self.id
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn binding(&self) -> &SymbolBinding {
        &self.binding
    }

    pub fn descriptor(&self) -> &Descriptor {
        self.binding.descriptor()
    }

    pub fn is_bound(&self) -> bool {
        !self.binding.is_placeholder()
    }

    /// Display name, taken from the backing descriptor
    pub fn name(&self) -> &str {
        self.descriptor().name()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.kind, self.id, self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Placeholders;

    #[test]
    fn test_symbol_id_display() {
        assert_eq!(format!("{}", SymbolId(255)), "symff");
    }

    #[test]
    fn test_kind_acceptance() {
        assert!(SymbolKind::Function.accepts(DescriptorKind::Getter));
        assert!(SymbolKind::Function.accepts(DescriptorKind::Setter));
        assert!(SymbolKind::Field.accepts(DescriptorKind::Property));
        assert!(SymbolKind::EnumEntry.accepts(DescriptorKind::EnumEntry));
        assert!(!SymbolKind::Class.accepts(DescriptorKind::Function));
        assert!(!SymbolKind::Variable.accepts(DescriptorKind::ValueParameter));
    }

    #[test]
    fn test_placeholder_binding() {
        let placeholders = Placeholders::new();
        let descriptor = placeholders
            .for_kind(SymbolKind::Field.placeholder_kind())
            .clone();
        let symbol = Symbol::new(
            SymbolId(9),
            SymbolKind::Field,
            SymbolBinding::Placeholder(descriptor),
        );
        assert!(!symbol.is_bound());
        assert!(symbol.binding().bound().is_none());
        assert_eq!(symbol.descriptor().kind(), DescriptorKind::Property);
    }
}
