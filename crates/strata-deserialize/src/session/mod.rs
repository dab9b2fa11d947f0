//! Decode session
//!
//! All state of one decoding run: the symbol cache, the descriptor to
//! declaration cache and the loop registry. Each is insert-if-absent; no key
//! is ever overwritten, which is what makes identity sharing hold.
//!
//! The builders live in the submodules as `impl DecodeSession` blocks:
//! - `symbols` - symbol and descriptor reference resolution
//! - `loops` - loop registry
//! - `types` - types, type arguments, annotations
//! - `expr` / `stmt` - expressions, statements and bodies
//! - `decl` - declarations

mod decl;
mod expr;
mod loops;
mod stmt;
mod symbols;
mod types;

pub use loops::LoopRegistry;

use crate::config::DecoderConfig;
use crate::error::{DecodeError, DecodeResult};
use rustc_hash::FxHashMap;
use std::rc::Rc;
use strata_ir::stack;
use strata_ir::{
    Builtins, DeclarationRef, Descriptor, SourceRange, SymbolId, SymbolKind, SymbolRef,
    UniverseRef,
};

use crate::record::CoordinatesRecord;

pub struct DecodeSession {
    universe: UniverseRef,
    builtins: Rc<Builtins>,
    config: DecoderConfig,
    symbols: FxHashMap<SymbolId, SymbolRef>,
    declarations: FxHashMap<Descriptor, DeclarationRef>,
    loops: LoopRegistry,
    depth: usize,
}

impl DecodeSession {
    /// Create a session over `universe`, seeded with `builtins`
    pub fn new(universe: UniverseRef, builtins: Rc<Builtins>, config: DecoderConfig) -> Self {
        let mut symbols = FxHashMap::default();
        let mut declarations = FxHashMap::default();
        for entry in builtins.entries() {
            symbols.insert(entry.symbol.id(), entry.symbol.clone());
            declarations.insert(entry.symbol.descriptor().clone(), entry.declaration.clone());
        }

        Self {
            universe,
            builtins,
            config,
            symbols,
            declarations,
            loops: LoopRegistry::new(),
            depth: 0,
        }
    }

    /// Session with the standard builtins and default configuration
    pub fn with_defaults(universe: UniverseRef) -> Self {
        Self::new(universe, Rc::new(Builtins::standard()), DecoderConfig::default())
    }

    pub fn universe(&self) -> &UniverseRef {
        &self.universe
    }

    pub fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn loops(&self) -> &LoopRegistry {
        &self.loops
    }

    /// Symbol already created (or seeded) for `id`
    pub fn cached_symbol(&self, id: SymbolId) -> Option<&SymbolRef> {
        self.symbols.get(&id)
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    pub fn declaration_count(&self) -> usize {
        self.declarations.len()
    }

    /// The decoded (or builtin) declaration backed by `descriptor`
    pub fn find_declaration(&self, descriptor: &Descriptor) -> DecodeResult<DeclarationRef> {
        self.declarations
            .get(descriptor)
            .cloned()
            .ok_or_else(|| DecodeError::UnknownDeclaration {
                descriptor: descriptor.to_string(),
            })
    }

    /// Run `build` one nesting level deeper, on a grown stack if needed
    pub(crate) fn descend<T>(
        &mut self,
        build: impl FnOnce(&mut Self) -> DecodeResult<T>,
    ) -> DecodeResult<T> {
        if self.depth >= self.config.max_depth {
            return Err(DecodeError::DepthLimitExceeded {
                limit: self.config.max_depth,
            });
        }
        self.depth += 1;
        let result = stack::grow(|| build(self));
        self.depth -= 1;
        result
    }

    /// Record `declaration` under its backing descriptor.
    ///
    /// Declarations backed by a placeholder are not cached. A second
    /// declaration for the same real descriptor is an error.
    pub(crate) fn register_declaration(
        &mut self,
        declaration: &DeclarationRef,
    ) -> DecodeResult<()> {
        let Some(descriptor) = declaration.backing_descriptor() else {
            return Ok(());
        };
        if self.declarations.contains_key(descriptor) {
            return Err(DecodeError::DuplicateDeclaration {
                descriptor: descriptor.to_string(),
            });
        }
        self.declarations
            .insert(descriptor.clone(), declaration.clone());
        Ok(())
    }

    /// Fail unless `symbol`'s kind satisfies `accepts` (skipped when kind checks are off)
    pub(crate) fn require_kind(
        &self,
        symbol: &SymbolRef,
        expected: &str,
        accepts: impl Fn(SymbolKind) -> bool,
    ) -> DecodeResult<()> {
        if !self.config.check_symbol_kinds || accepts(symbol.kind()) {
            return Ok(());
        }
        Err(DecodeError::kind_mismatch(symbol.id(), expected, symbol.kind()))
    }
}

impl std::fmt::Debug for DecodeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodeSession")
            .field("module", &self.universe.name())
            .field("symbols", &self.symbols.len())
            .field("declarations", &self.declarations.len())
            .field("loops", &self.loops.len())
            .field("config", &self.config)
            .finish()
    }
}

pub(crate) fn source_range(coordinates: &CoordinatesRecord) -> SourceRange {
    SourceRange::new(coordinates.start_offset, coordinates.end_offset)
}
