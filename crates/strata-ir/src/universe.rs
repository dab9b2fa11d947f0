//! Descriptor universe
//!
//! The universe owns the real descriptors: package members and class scopes.
//! Decoding only ever reads from it.

use crate::descriptor::{Descriptor, DescriptorKind};
use rustc_hash::FxHashMap;
use std::rc::Rc;

/// Members of a single class
#[derive(Debug, Clone)]
pub struct ClassScope {
    pub descriptor: Descriptor,
    pub members: Vec<Descriptor>,
    pub constructors: Vec<Descriptor>,
    pub static_functions: Vec<Descriptor>,
}

impl ClassScope {
    pub fn new(descriptor: Descriptor) -> Self {
        Self {
            descriptor,
            members: Vec::new(),
            constructors: Vec::new(),
            static_functions: Vec::new(),
        }
    }

    pub fn with_member(mut self, member: Descriptor) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_constructor(mut self, constructor: Descriptor) -> Self {
        self.constructors.push(constructor);
        self
    }

    pub fn with_static_function(mut self, function: Descriptor) -> Self {
        self.static_functions.push(function);
        self
    }

    /// Classifier (nested class or enum entry) contributed to the member scope
    pub fn contributed_classifier(&self, name: &str) -> Option<&Descriptor> {
        self.members.iter().find(|member| {
            matches!(member.kind(), DescriptorKind::Class | DescriptorKind::EnumEntry)
                && member.name() == name
        })
    }

    pub fn static_functions_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a Descriptor> + 'a {
        self.static_functions
            .iter()
            .filter(move |function| function.name() == name)
    }

    /// Members followed by constructors, in declaration order
    pub fn candidates(&self) -> impl Iterator<Item = &Descriptor> {
        self.members.iter().chain(self.constructors.iter())
    }
}

/// Read-only source of real descriptors
pub trait DescriptorUniverse {
    /// Name of the module this universe describes
    fn name(&self) -> &str;

    /// Top-level members of a package, in declaration order
    fn package_members(&self, package: &str) -> Vec<Descriptor>;

    /// Scope of a class, looked up by package and (possibly nested) class name
    fn find_class(&self, package: &str, class: &str) -> Option<ClassScope>;
}

pub type UniverseRef = Rc<dyn DescriptorUniverse>;

/// Universe held in hash maps, filled up front
#[derive(Debug, Default)]
pub struct InMemoryUniverse {
    name: String,
    packages: FxHashMap<String, Vec<Descriptor>>,
    classes: FxHashMap<(String, String), ClassScope>,
}

impl InMemoryUniverse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn add_package_member(&mut self, package: impl Into<String>, member: Descriptor) {
        self.packages.entry(package.into()).or_default().push(member);
    }

    pub fn add_class(
        &mut self,
        package: impl Into<String>,
        class: impl Into<String>,
        scope: ClassScope,
    ) {
        self.classes.insert((package.into(), class.into()), scope);
    }

    pub fn into_ref(self) -> UniverseRef {
        Rc::new(self)
    }
}

impl DescriptorUniverse for InMemoryUniverse {
    fn name(&self) -> &str {
        &self.name
    }

    fn package_members(&self, package: &str) -> Vec<Descriptor> {
        self.packages.get(package).cloned().unwrap_or_default()
    }

    fn find_class(&self, package: &str, class: &str) -> Option<ClassScope> {
        self.classes
            .get(&(package.to_string(), class.to_string()))
            .cloned()
    }
}
