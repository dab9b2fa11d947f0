//! Decoded files and modules

use crate::decl::DeclarationRef;
use crate::universe::UniverseRef;
use std::rc::Rc;

/// A source file and its top-level declarations, in original order
#[derive(Debug)]
pub struct File {
    pub name: Rc<str>,
    /// Package the file belongs to
    pub fq_name: String,
    pub declarations: Vec<DeclarationRef>,
}

impl File {
    pub fn new(name: impl Into<Rc<str>>, fq_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fq_name: fq_name.into(),
            declarations: Vec::new(),
        }
    }
}

pub struct Module {
    pub universe: UniverseRef,
    pub files: Vec<File>,
}

impl Module {
    pub fn new(universe: UniverseRef) -> Self {
        Self {
            universe,
            files: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.universe.name()
    }

    /// All top-level declarations across files
    pub fn declarations(&self) -> impl Iterator<Item = &DeclarationRef> {
        self.files.iter().flat_map(|file| file.declarations.iter())
    }

    pub fn file(&self, name: &str) -> Option<&File> {
        self.files.iter().find(|file| &*file.name == name)
    }
}

impl std::fmt::Debug for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.universe.name())
            .field("files", &self.files)
            .finish()
    }
}
