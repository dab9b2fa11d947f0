//! Module loading
//!
//! Walks a module header file by file, fetching each declaration's raw record
//! through a [`ByteReader`] and building it with the session.

use crate::config::DecoderConfig;
use crate::error::{DecodeError, DecodeResult};
use crate::record::{decode_declaration, decode_module, FileRecord, ModuleRecord};
use crate::session::DecodeSession;
use std::rc::Rc;
use strata_ir::{Builtins, DeclarationParent, DeclarationRef, Descriptor, File, Module, UniverseRef};
use tracing::debug;

/// Source of raw declaration records, addressed by content id.
///
/// Reads are not cached; each declaration id is read exactly once.
pub trait ByteReader {
    fn read(&self, content_id: u64) -> Option<Vec<u8>>;
}

impl<F> ByteReader for F
where
    F: Fn(u64) -> Option<Vec<u8>>,
{
    fn read(&self, content_id: u64) -> Option<Vec<u8>> {
        self(content_id)
    }
}

/// Decodes whole modules against one session.
///
/// Symbols, declarations and loops decoded by one call stay visible to the
/// next, so several modules loaded through the same loader share identity.
#[derive(Debug)]
pub struct ModuleLoader {
    session: DecodeSession,
}

impl ModuleLoader {
    pub fn new(universe: UniverseRef) -> Self {
        Self {
            session: DecodeSession::with_defaults(universe),
        }
    }

    pub fn with_config(universe: UniverseRef, config: DecoderConfig) -> Self {
        Self {
            session: DecodeSession::new(universe, Rc::new(Builtins::standard()), config),
        }
    }

    pub fn with_builtins(
        universe: UniverseRef,
        builtins: Rc<Builtins>,
        config: DecoderConfig,
    ) -> Self {
        Self {
            session: DecodeSession::new(universe, builtins, config),
        }
    }

    pub fn session(&self) -> &DecodeSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut DecodeSession {
        &mut self.session
    }

    pub fn into_session(self) -> DecodeSession {
        self.session
    }

    pub fn find_declaration(&self, descriptor: &Descriptor) -> DecodeResult<DeclarationRef> {
        self.session.find_declaration(descriptor)
    }

    /// Decode the module header in `bytes`, then load it
    pub fn load_module_bytes(
        &mut self,
        bytes: &[u8],
        reader: &impl ByteReader,
    ) -> DecodeResult<Module> {
        let record = decode_module(bytes)?;
        self.load_module(&record, reader)
    }

    /// Load every file of `record`, in order
    pub fn load_module(
        &mut self,
        record: &ModuleRecord,
        reader: &impl ByteReader,
    ) -> DecodeResult<Module> {
        let mut module = Module::new(self.session.universe().clone());
        for file in &record.files {
            module.files.push(self.load_file(file, reader)?);
        }

        debug!(
            module = %record.name,
            files = module.files.len(),
            declarations = self.session.declaration_count(),
            symbols = self.session.symbol_count(),
            "loaded module"
        );
        Ok(module)
    }

    pub fn load_file(
        &mut self,
        record: &FileRecord,
        reader: &impl ByteReader,
    ) -> DecodeResult<File> {
        let mut file = File::new(record.file_entry.name.as_str(), record.fq_name.as_str());

        for id in &record.declaration_ids {
            let bytes = reader
                .read(id.index)
                .ok_or(DecodeError::MissingRecord {
                    content_id: id.index,
                })?;
            let declaration = decode_declaration(&bytes)?;
            let parent = DeclarationParent::File(file.name.clone());
            file.declarations
                .push(self.session.build_declaration(&declaration, Some(parent))?);
        }

        debug!(file = %file.name, declarations = file.declarations.len(), "loaded file");
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{FileEntryRecord, UniqIdRecord};
    use strata_ir::InMemoryUniverse;

    fn no_records(_: u64) -> Option<Vec<u8>> {
        None
    }

    fn loader() -> ModuleLoader {
        ModuleLoader::new(InMemoryUniverse::new("test").into_ref())
    }

    #[test]
    fn test_closure_reader() {
        let reader = |id: u64| (id == 1).then(|| vec![1u8, 2, 3]);
        assert_eq!(reader.read(1), Some(vec![1, 2, 3]));
        assert_eq!(reader.read(2), None);
    }

    #[test]
    fn test_empty_module() {
        let record = ModuleRecord {
            name: "empty".to_string(),
            files: vec![FileRecord {
                file_entry: FileEntryRecord {
                    name: "a.kt".to_string(),
                },
                fq_name: "a".to_string(),
                declaration_ids: Vec::new(),
            }],
        };
        let module = loader().load_module(&record, &no_records).unwrap();
        assert_eq!(module.name(), "test");
        assert_eq!(module.files.len(), 1);
        assert!(module.files[0].declarations.is_empty());
    }

    #[test]
    fn test_missing_record() {
        let record = FileRecord {
            file_entry: FileEntryRecord {
                name: "a.kt".to_string(),
            },
            fq_name: "a".to_string(),
            declaration_ids: vec![UniqIdRecord::new(0x2a)],
        };
        let result = loader().load_file(&record, &no_records);
        assert!(matches!(
            result,
            Err(DecodeError::MissingRecord { content_id: 0x2a })
        ));
    }
}
