//! IR declarations
//!
//! Declarations are shared (`Rc`) so the descriptor-to-declaration cache can
//! hand out the very instance that sits in the tree. Links back up the tree
//! (parents, an accessor's property) are weak.

use crate::attrs::{ClassKind, DeclarationOrigin, Modality, Visibility};
use crate::descriptor::Descriptor;
use crate::expr::Expression;
use crate::range::SourceRange;
use crate::stmt::{BlockBody, Body};
use crate::symbol::SymbolRef;
use crate::types::{Type, Variance};
use std::rc::{Rc, Weak};

pub type DeclarationRef = Rc<Declaration>;

/// Where a declaration lives
#[derive(Debug, Clone)]
pub enum DeclarationParent {
    /// Top-level declaration of the named file
    File(Rc<str>),
    /// Member of a class, body of an enum entry, accessor or backing field
    Declaration(Weak<Declaration>),
}

impl DeclarationParent {
    pub fn declaration(&self) -> Option<DeclarationRef> {
        match self {
            DeclarationParent::File(_) => None,
            DeclarationParent::Declaration(parent) => parent.upgrade(),
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            DeclarationParent::File(name) => Some(name),
            DeclarationParent::Declaration(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct Declaration {
    pub range: SourceRange,
    pub origin: DeclarationOrigin,
    pub parent: Option<DeclarationParent>,
    pub annotations: Vec<Expression>,
    pub kind: DeclarationKind,
}

#[derive(Debug)]
pub enum DeclarationKind {
    Class(Class),
    Function(Function),
    Constructor(Constructor),
    Field(Field),
    Property(Property),
    Variable(Variable),
    EnumEntry(EnumEntry),
    AnonymousInitializer(AnonymousInitializer),
    /// Stand-in for declarations the IR cannot represent yet (type aliases)
    Error(ErrorDeclaration),
}

impl Declaration {
    /// The declaration's own symbol. Properties and error declarations have none.
    pub fn symbol(&self) -> Option<&SymbolRef> {
        match &self.kind {
            DeclarationKind::Class(class) => Some(&class.symbol),
            DeclarationKind::Function(function) => Some(&function.symbol),
            DeclarationKind::Constructor(constructor) => Some(&constructor.symbol),
            DeclarationKind::Field(field) => Some(&field.symbol),
            DeclarationKind::Variable(variable) => Some(&variable.symbol),
            DeclarationKind::EnumEntry(entry) => Some(&entry.symbol),
            DeclarationKind::AnonymousInitializer(init) => Some(&init.symbol),
            DeclarationKind::Property(_) | DeclarationKind::Error(_) => None,
        }
    }

    /// Descriptor backing this declaration, placeholder or not
    pub fn descriptor(&self) -> &Descriptor {
        match &self.kind {
            DeclarationKind::Property(property) => &property.descriptor,
            DeclarationKind::Error(error) => &error.descriptor,
            DeclarationKind::Class(Class { symbol, .. })
            | DeclarationKind::Function(Function { symbol, .. })
            | DeclarationKind::Constructor(Constructor { symbol, .. })
            | DeclarationKind::Field(Field { symbol, .. })
            | DeclarationKind::Variable(Variable { symbol, .. })
            | DeclarationKind::EnumEntry(EnumEntry { symbol, .. })
            | DeclarationKind::AnonymousInitializer(AnonymousInitializer { symbol, .. }) => {
                symbol.descriptor()
            }
        }
    }

    /// The real descriptor backing this declaration, if it is not a placeholder
    pub fn backing_descriptor(&self) -> Option<&Descriptor> {
        let descriptor = self.descriptor();
        (!descriptor.is_placeholder()).then_some(descriptor)
    }

    pub fn name(&self) -> &str {
        match &self.kind {
            DeclarationKind::Class(class) => &class.name,
            DeclarationKind::Function(function) => &function.name,
            DeclarationKind::Constructor(constructor) => &constructor.name,
            DeclarationKind::Field(field) => &field.name,
            DeclarationKind::Property(property) => &property.name,
            DeclarationKind::Variable(variable) => &variable.name,
            DeclarationKind::EnumEntry(entry) => &entry.name,
            DeclarationKind::AnonymousInitializer(_) => "<init>",
            DeclarationKind::Error(_) => "<error>",
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            DeclarationKind::Class(_) => "class",
            DeclarationKind::Function(_) => "function",
            DeclarationKind::Constructor(_) => "constructor",
            DeclarationKind::Field(_) => "field",
            DeclarationKind::Property(_) => "property",
            DeclarationKind::Variable(_) => "variable",
            DeclarationKind::EnumEntry(_) => "enum entry",
            DeclarationKind::AnonymousInitializer(_) => "anonymous initializer",
            DeclarationKind::Error(_) => "error declaration",
        }
    }

    pub fn as_class(&self) -> Option<&Class> {
        match &self.kind {
            DeclarationKind::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match &self.kind {
            DeclarationKind::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_property(&self) -> Option<&Property> {
        match &self.kind {
            DeclarationKind::Property(property) => Some(property),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match &self.kind {
            DeclarationKind::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    /// The parent declaration, if this is not top-level and the parent is alive
    pub fn parent_declaration(&self) -> Option<DeclarationRef> {
        self.parent.as_ref().and_then(DeclarationParent::declaration)
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} [{}] @{}", self.kind_name(), self.name(), self.origin, self.range)
    }
}

#[derive(Debug)]
pub struct Class {
    pub symbol: SymbolRef,
    pub name: String,
    pub kind: ClassKind,
    pub visibility: Visibility,
    pub modality: Modality,
    pub is_companion: bool,
    pub is_inner: bool,
    pub is_data: bool,
    pub is_external: bool,
    pub is_inline: bool,
    pub members: Vec<DeclarationRef>,
    pub this_receiver: Option<ValueParameter>,
    pub type_parameters: Vec<TypeParameter>,
    pub super_types: Vec<Type>,
}

/// Parts shared by functions and constructors
#[derive(Debug, Default)]
pub struct FunctionSignature {
    pub return_type: Option<Type>,
    pub body: Option<Body>,
    pub value_parameters: Vec<ValueParameter>,
    pub dispatch_receiver: Option<ValueParameter>,
    pub extension_receiver: Option<ValueParameter>,
    pub type_parameters: Vec<TypeParameter>,
}

#[derive(Debug)]
pub struct Function {
    pub symbol: SymbolRef,
    pub name: String,
    pub visibility: Visibility,
    pub modality: Modality,
    pub is_inline: bool,
    pub is_external: bool,
    pub is_tailrec: bool,
    pub is_suspend: bool,
    pub signature: FunctionSignature,
    pub overridden: Vec<SymbolRef>,
    /// Set on getters and setters: the property they belong to
    pub corresponding_property: Option<Weak<Declaration>>,
}

impl Function {
    pub fn corresponding_property(&self) -> Option<DeclarationRef> {
        self.corresponding_property.as_ref().and_then(Weak::upgrade)
    }
}

#[derive(Debug)]
pub struct Constructor {
    pub symbol: SymbolRef,
    pub name: String,
    pub visibility: Visibility,
    pub is_inline: bool,
    pub is_external: bool,
    pub is_primary: bool,
    pub signature: FunctionSignature,
}

#[derive(Debug)]
pub struct Field {
    pub symbol: SymbolRef,
    pub name: String,
    pub ty: Type,
    pub visibility: Visibility,
    pub is_final: bool,
    pub is_external: bool,
    pub is_static: bool,
    pub initializer: Option<Expression>,
}

#[derive(Debug)]
pub struct Property {
    /// Properties are always backed by the property placeholder
    pub descriptor: Descriptor,
    pub name: String,
    pub visibility: Visibility,
    pub modality: Modality,
    pub is_var: bool,
    pub is_const: bool,
    pub is_lateinit: bool,
    pub is_delegated: bool,
    pub is_external: bool,
    pub backing_field: Option<DeclarationRef>,
    pub getter: Option<DeclarationRef>,
    pub setter: Option<DeclarationRef>,
}

#[derive(Debug)]
pub struct Variable {
    pub symbol: SymbolRef,
    pub name: String,
    pub ty: Type,
    pub is_var: bool,
    pub is_const: bool,
    pub is_lateinit: bool,
    pub initializer: Option<Expression>,
}

#[derive(Debug)]
pub struct EnumEntry {
    pub symbol: SymbolRef,
    pub name: String,
    pub corresponding_class: Option<DeclarationRef>,
    pub initializer: Option<Expression>,
}

#[derive(Debug)]
pub struct AnonymousInitializer {
    pub symbol: SymbolRef,
    pub body: BlockBody,
}

#[derive(Debug)]
pub struct ErrorDeclaration {
    pub descriptor: Descriptor,
}

#[derive(Debug)]
pub struct ValueParameter {
    pub range: SourceRange,
    pub origin: DeclarationOrigin,
    pub symbol: SymbolRef,
    pub name: String,
    pub index: i32,
    pub ty: Type,
    pub vararg_element_type: Option<Type>,
    pub is_crossinline: bool,
    pub is_noinline: bool,
    pub default_value: Option<Expression>,
}

#[derive(Debug)]
pub struct TypeParameter {
    pub range: SourceRange,
    pub origin: DeclarationOrigin,
    pub symbol: SymbolRef,
    pub name: String,
    pub index: i32,
    pub variance: Variance,
    pub super_types: Vec<Type>,
}
