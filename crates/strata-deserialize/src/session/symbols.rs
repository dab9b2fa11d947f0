//! Symbol resolution
//!
//! A numeric symbol id maps to exactly one `Symbol` per session. The first
//! reference to an id resolves its descriptor reference (if any) against the
//! universe; later references get the cached instance back. Builtin ids are
//! seeded up front and never touch the universe.

use super::DecodeSession;
use crate::error::{DecodeError, DecodeResult};
use crate::record::{DescriptorReferenceRecord, SymbolKindRecord, SymbolRecord};
use strata_ir::{Descriptor, DescriptorKind, Symbol, SymbolBinding, SymbolId, SymbolKind, SymbolRef};
use tracing::trace;

impl DecodeSession {
    /// Symbol for `record`, created on first sight of its id
    pub fn resolve_symbol(&mut self, record: &SymbolRecord) -> DecodeResult<SymbolRef> {
        let id = SymbolId(record.uniq_id.index);
        let kind = symbol_kind(record.kind)?;

        if let Some(symbol) = self.symbols.get(&id) {
            if self.config.check_symbol_kinds && symbol.kind() != kind {
                return Err(DecodeError::kind_mismatch(id, kind.name(), symbol.kind()));
            }
            return Ok(symbol.clone());
        }

        let binding = match &record.descriptor_reference {
            Some(reference) => {
                let descriptor = self.resolve_descriptor_reference(reference)?;
                if self.config.check_symbol_kinds && !kind.accepts(descriptor.kind()) {
                    return Err(DecodeError::kind_mismatch(id, kind.name(), descriptor.kind()));
                }
                SymbolBinding::Bound(descriptor)
            }
            None => SymbolBinding::Placeholder(
                self.builtins
                    .placeholders()
                    .for_kind(kind.placeholder_kind())
                    .clone(),
            ),
        };

        let symbol = Symbol::new(id, kind, binding);
        trace!(symbol = %id, kind = %kind, name = symbol.name(), "new symbol");
        self.symbols.insert(id, symbol.clone());
        Ok(symbol)
    }

    /// Find the descriptor a reference points at.
    ///
    /// Enum entries and enum special members are looked up by name; an enum
    /// special member must name exactly one static function. Everything
    /// else is a linear scan over the package members (no class name) or the
    /// class members followed by its constructors; the first candidate whose
    /// index matches wins.
    pub fn resolve_descriptor_reference(
        &self,
        reference: &DescriptorReferenceRecord,
    ) -> DecodeResult<Descriptor> {
        let index = reference.uniq_id.index;

        let candidates = if reference.class_fq_name.is_empty() {
            self.universe.package_members(&reference.package_fq_name)
        } else {
            let scope = self
                .universe
                .find_class(&reference.package_fq_name, &reference.class_fq_name)
                .ok_or_else(|| unresolved(reference))?;

            if reference.is_enum_entry {
                return scope
                    .contributed_classifier(&reference.name)
                    .cloned()
                    .ok_or_else(|| unresolved(reference));
            }
            if reference.is_enum_special {
                let mut functions = scope.static_functions_named(&reference.name);
                return match (functions.next(), functions.next()) {
                    (Some(function), None) => Ok(function.clone()),
                    _ => Err(unresolved(reference)),
                };
            }
            scope.candidates().cloned().collect()
        };

        for candidate in candidates {
            if reference.is_default_constructor && candidate.kind() == DescriptorKind::Constructor {
                return Ok(candidate);
            }

            let real_members = if reference.is_fake_override && candidate.is_fake_override() {
                candidate.resolve_fake_override()
            } else {
                vec![candidate.clone()]
            };
            if !real_members.iter().any(|member| member.index() == Some(index)) {
                continue;
            }

            if candidate.kind() == DescriptorKind::Property {
                let accessor = if reference.is_setter {
                    Some(candidate.setter())
                } else if reference.is_getter {
                    Some(candidate.getter())
                } else {
                    None
                };
                return match accessor {
                    Some(Some(accessor)) => Ok(accessor.clone()),
                    Some(None) => Err(unresolved(reference)),
                    None => Ok(candidate),
                };
            }
            return Ok(candidate);
        }

        Err(unresolved(reference))
    }
}

fn symbol_kind(record: SymbolKindRecord) -> DecodeResult<SymbolKind> {
    Ok(match record {
        SymbolKindRecord::AnonymousInitializerSymbol => SymbolKind::AnonymousInitializer,
        SymbolKindRecord::ClassSymbol => SymbolKind::Class,
        SymbolKindRecord::ConstructorSymbol => SymbolKind::Constructor,
        SymbolKindRecord::EnumEntrySymbol => SymbolKind::EnumEntry,
        SymbolKindRecord::FieldSymbol => SymbolKind::Field,
        SymbolKindRecord::FunctionSymbol => SymbolKind::Function,
        SymbolKindRecord::TypeParameterSymbol => SymbolKind::TypeParameter,
        SymbolKindRecord::ValueParameterSymbol => SymbolKind::ValueParameter,
        SymbolKindRecord::VariableSymbol => SymbolKind::Variable,
        SymbolKindRecord::ReturnableBlockSymbol => {
            return Err(DecodeError::unsupported("symbol kind", "ReturnableBlockSymbol"))
        }
    })
}

fn unresolved(reference: &DescriptorReferenceRecord) -> DecodeError {
    DecodeError::UnresolvedReference {
        package: reference.package_fq_name.clone(),
        class: reference.class_fq_name.clone(),
        name: reference.name.clone(),
        index: reference.uniq_id.index,
    }
}
