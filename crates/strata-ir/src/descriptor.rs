//! Descriptors
//!
//! A descriptor is a semantic entity (class, function, property, ...) owned by
//! the external descriptor universe. The IR only refers to descriptors; it never
//! creates real ones except for builtins and the per-kind placeholders.
//!
//! Descriptors compare and hash by identity, so they can key the
//! descriptor-to-declaration cache directly.

use rustc_hash::FxHashSet;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// What kind of entity a descriptor describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptorKind {
    Class,
    EnumEntry,
    Constructor,
    Function,
    /// Property getter (a function)
    Getter,
    /// Property setter (a function)
    Setter,
    Property,
    Variable,
    ValueParameter,
    TypeParameter,
}

impl DescriptorKind {
    /// Functions in the broad sense: plain functions and property accessors
    pub fn is_function(self) -> bool {
        matches!(
            self,
            DescriptorKind::Function | DescriptorKind::Getter | DescriptorKind::Setter
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            DescriptorKind::Class => "class",
            DescriptorKind::EnumEntry => "enum entry",
            DescriptorKind::Constructor => "constructor",
            DescriptorKind::Function => "function",
            DescriptorKind::Getter => "getter",
            DescriptorKind::Setter => "setter",
            DescriptorKind::Property => "property",
            DescriptorKind::Variable => "variable",
            DescriptorKind::ValueParameter => "value parameter",
            DescriptorKind::TypeParameter => "type parameter",
        }
    }
}

impl std::fmt::Display for DescriptorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a callable member is declared or synthesized from an inherited one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MemberKind {
    #[default]
    Declaration,
    /// Inherited but not redeclared; the real members are in `overridden`
    FakeOverride,
}

#[derive(Debug)]
struct DescriptorData {
    kind: DescriptorKind,
    name: String,
    index: Option<u64>,
    member_kind: MemberKind,
    overridden: Vec<Descriptor>,
    getter: Option<Descriptor>,
    setter: Option<Descriptor>,
    placeholder: bool,
}

/// Shared handle to a descriptor
#[derive(Clone)]
pub struct Descriptor(Rc<DescriptorData>);

impl Descriptor {
    /// Start building a descriptor
    pub fn builder(kind: DescriptorKind, name: impl Into<String>) -> DescriptorBuilder {
        DescriptorBuilder {
            data: DescriptorData {
                kind,
                name: name.into(),
                index: None,
                member_kind: MemberKind::Declaration,
                overridden: Vec::new(),
                getter: None,
                setter: None,
                placeholder: false,
            },
        }
    }

    /// Declared descriptor with an original index
    pub fn new(kind: DescriptorKind, name: impl Into<String>, index: u64) -> Self {
        Self::builder(kind, name).index(index).build()
    }

    fn placeholder(kind: DescriptorKind) -> Self {
        let mut builder = Self::builder(kind, format!("<placeholder {}>", kind));
        builder.data.placeholder = true;
        builder.build()
    }

    pub fn kind(&self) -> DescriptorKind {
        self.0.kind
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Original index the encoder assigned to this descriptor, unique within its declaring scope
    pub fn index(&self) -> Option<u64> {
        self.0.index
    }

    pub fn member_kind(&self) -> MemberKind {
        self.0.member_kind
    }

    pub fn is_fake_override(&self) -> bool {
        self.0.member_kind == MemberKind::FakeOverride
    }

    pub fn overridden(&self) -> &[Descriptor] {
        &self.0.overridden
    }

    pub fn getter(&self) -> Option<&Descriptor> {
        self.0.getter.as_ref()
    }

    pub fn setter(&self) -> Option<&Descriptor> {
        self.0.setter.as_ref()
    }

    /// True for the shared stand-ins used when a symbol has no real descriptor
    pub fn is_placeholder(&self) -> bool {
        self.0.placeholder
    }

    /// The real members behind this descriptor.
    ///
    /// A declared member resolves to itself. A fake override resolves to the
    /// declared members reachable through its overridden chain, in discovery
    /// order and without duplicates.
    pub fn resolve_fake_override(&self) -> Vec<Descriptor> {
        let mut seen = FxHashSet::default();
        let mut real = Vec::new();
        self.collect_real_members(&mut seen, &mut real);
        real
    }

    fn collect_real_members(&self, seen: &mut FxHashSet<Descriptor>, real: &mut Vec<Descriptor>) {
        if !seen.insert(self.clone()) {
            return;
        }
        if !self.is_fake_override() {
            real.push(self.clone());
            return;
        }
        for overridden in self.overridden() {
            overridden.collect_real_members(seen, real);
        }
    }

    pub fn ptr_eq(&self, other: &Descriptor) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Descriptor {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Descriptor {}

impl Hash for Descriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.0), state)
    }
}

impl std::fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Descriptor")
            .field("kind", &self.0.kind)
            .field("name", &self.0.name)
            .field("index", &self.0.index)
            .finish()
    }
}

impl std::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0.kind, self.0.name)
    }
}

/// Builder for [`Descriptor`]
pub struct DescriptorBuilder {
    data: DescriptorData,
}

impl DescriptorBuilder {
    pub fn index(mut self, index: u64) -> Self {
        self.data.index = Some(index);
        self
    }

    /// Mark as a fake override of the given members
    pub fn fake_override(mut self, overridden: Vec<Descriptor>) -> Self {
        self.data.member_kind = MemberKind::FakeOverride;
        self.data.overridden = overridden;
        self
    }

    pub fn getter(mut self, getter: Descriptor) -> Self {
        self.data.getter = Some(getter);
        self
    }

    pub fn setter(mut self, setter: Descriptor) -> Self {
        self.data.setter = Some(setter);
        self
    }

    pub fn build(self) -> Descriptor {
        Descriptor(Rc::new(self.data))
    }
}

/// One pre-built placeholder descriptor per kind.
///
/// Symbols whose record carries no descriptor reference are bound to these.
#[derive(Debug, Clone)]
pub struct Placeholders {
    class: Descriptor,
    constructor: Descriptor,
    function: Descriptor,
    property: Descriptor,
    variable: Descriptor,
    value_parameter: Descriptor,
    type_parameter: Descriptor,
}

impl Placeholders {
    pub fn new() -> Self {
        Self {
            class: Descriptor::placeholder(DescriptorKind::Class),
            constructor: Descriptor::placeholder(DescriptorKind::Constructor),
            function: Descriptor::placeholder(DescriptorKind::Function),
            property: Descriptor::placeholder(DescriptorKind::Property),
            variable: Descriptor::placeholder(DescriptorKind::Variable),
            value_parameter: Descriptor::placeholder(DescriptorKind::ValueParameter),
            type_parameter: Descriptor::placeholder(DescriptorKind::TypeParameter),
        }
    }

    /// Placeholder for a descriptor kind. Enum entries share the class
    /// placeholder and accessors share the function placeholder.
    pub fn for_kind(&self, kind: DescriptorKind) -> &Descriptor {
        match kind {
            DescriptorKind::Class | DescriptorKind::EnumEntry => &self.class,
            DescriptorKind::Constructor => &self.constructor,
            DescriptorKind::Function | DescriptorKind::Getter | DescriptorKind::Setter => {
                &self.function
            }
            DescriptorKind::Property => &self.property,
            DescriptorKind::Variable => &self.variable,
            DescriptorKind::ValueParameter => &self.value_parameter,
            DescriptorKind::TypeParameter => &self.type_parameter,
        }
    }

    pub fn class(&self) -> &Descriptor {
        &self.class
    }

    pub fn property(&self) -> &Descriptor {
        &self.property
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self::new()
    }
}
