//! Builtins registry
//!
//! Compiler-intrinsic classes and operator functions, seeded into every
//! decoding session before any record is read. Builtin `i` has symbol id `i`.

use crate::attrs::{ClassKind, DeclarationOrigin, Modality, Visibility};
use crate::decl::{Class, Declaration, DeclarationKind, DeclarationRef, Function, FunctionSignature};
use crate::descriptor::{Descriptor, DescriptorKind, Placeholders};
use crate::range::SourceRange;
use crate::symbol::{Symbol, SymbolBinding, SymbolId, SymbolKind, SymbolRef};
use crate::types::Type;
use std::rc::Rc;

const CLASSES: [&str; 13] = [
    "Any", "Nothing", "Unit", "Boolean", "Char", "Byte", "Short", "Int", "Long", "Float",
    "Double", "String", "Array",
];

const UNIT: usize = 2;
const NOTHING: usize = 1;
const BOOLEAN: usize = 3;

/// Operator functions and their result classes (indices into `CLASSES`)
const FUNCTIONS: [(&str, usize); 9] = [
    ("eqeq", BOOLEAN),
    ("eqeqeq", BOOLEAN),
    ("ieee754equals", BOOLEAN),
    ("booleanNot", BOOLEAN),
    ("noWhenBranchMatchedException", UNIT),
    ("less", BOOLEAN),
    ("lessOrEqual", BOOLEAN),
    ("greater", BOOLEAN),
    ("greaterOrEqual", BOOLEAN),
];

/// A seeded symbol and the declaration it stands for
#[derive(Debug, Clone)]
pub struct BuiltinEntry {
    pub symbol: SymbolRef,
    pub declaration: DeclarationRef,
}

#[derive(Debug)]
pub struct Builtins {
    entries: Vec<BuiltinEntry>,
    placeholders: Placeholders,
    unit_type: Type,
    nothing_type: Type,
}

impl Builtins {
    /// The standard intrinsic set
    pub fn standard() -> Self {
        let mut entries = Vec::with_capacity(CLASSES.len() + FUNCTIONS.len());

        for name in CLASSES {
            let id = entries.len() as u64;
            let descriptor = Descriptor::new(DescriptorKind::Class, name, id);
            let binding = SymbolBinding::Bound(descriptor);
            let symbol = Symbol::new(SymbolId(id), SymbolKind::Class, binding);
            let declaration = stub(DeclarationKind::Class(Class {
                symbol: symbol.clone(),
                name: name.to_string(),
                kind: ClassKind::Class,
                visibility: Visibility::Public,
                modality: Modality::Final,
                is_companion: false,
                is_inner: false,
                is_data: false,
                is_external: false,
                is_inline: false,
                members: Vec::new(),
                this_receiver: None,
                type_parameters: Vec::new(),
                super_types: Vec::new(),
            }));
            entries.push(BuiltinEntry { symbol, declaration });
        }

        for (name, result) in FUNCTIONS {
            let id = entries.len() as u64;
            let descriptor = Descriptor::new(DescriptorKind::Function, name, id);
            let binding = SymbolBinding::Bound(descriptor);
            let symbol = Symbol::new(SymbolId(id), SymbolKind::Function, binding);
            let return_type = Type::simple(entries[result].symbol.clone());
            let declaration = stub(DeclarationKind::Function(Function {
                symbol: symbol.clone(),
                name: name.to_string(),
                visibility: Visibility::Public,
                modality: Modality::Final,
                is_inline: false,
                is_external: false,
                is_tailrec: false,
                is_suspend: false,
                signature: FunctionSignature {
                    return_type: Some(return_type),
                    ..Default::default()
                },
                overridden: Vec::new(),
                corresponding_property: None,
            }));
            entries.push(BuiltinEntry { symbol, declaration });
        }

        let unit_type = Type::simple(entries[UNIT].symbol.clone());
        let nothing_type = Type::simple(entries[NOTHING].symbol.clone());

        Self {
            entries,
            placeholders: Placeholders::new(),
            unit_type,
            nothing_type,
        }
    }

    pub fn entries(&self) -> &[BuiltinEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `id` falls in the seeded range
    pub fn contains(&self, id: SymbolId) -> bool {
        (id.as_u64() as usize) < self.entries.len()
    }

    pub fn get(&self, id: SymbolId) -> Option<&BuiltinEntry> {
        self.entries.get(id.as_u64() as usize)
    }

    pub fn by_name(&self, name: &str) -> Option<&BuiltinEntry> {
        self.entries.iter().find(|entry| entry.symbol.name() == name)
    }

    pub fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    pub fn unit_type(&self) -> &Type {
        &self.unit_type
    }

    /// Bottom type
    pub fn nothing_type(&self) -> &Type {
        &self.nothing_type
    }
}

impl Default for Builtins {
    fn default() -> Self {
        Self::standard()
    }
}

fn stub(kind: DeclarationKind) -> DeclarationRef {
    Rc::new(Declaration {
        range: SourceRange::zero(),
        origin: DeclarationOrigin::IrBuiltinsStub,
        parent: None,
        annotations: Vec::new(),
        kind,
    })
}
