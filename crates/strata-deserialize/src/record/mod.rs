//! Typed records
//!
//! The shape the binary-record layer hands to the decoder. Records are plain
//! serde data; raw bytes are turned into records with `bincode`. Every tagged
//! union has an explicit `NotSet` variant standing for an unset discriminant.

#[macro_use]
mod nested;

mod decl;
mod expr;
mod types;

pub use decl::*;
pub use expr::*;
pub use types::*;

use crate::error::DecodeResult;
use serde::{Deserialize, Serialize};

/// Unique id of a symbol or an encoded declaration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UniqIdRecord {
    pub index: u64,
    pub is_local: bool,
}

impl UniqIdRecord {
    pub fn new(index: u64) -> Self {
        Self {
            index,
            is_local: false,
        }
    }
}

/// Pointer into the descriptor universe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptorReferenceRecord {
    pub package_fq_name: String,
    /// Empty for package-level members
    pub class_fq_name: String,
    pub name: String,
    pub uniq_id: UniqIdRecord,
    pub is_getter: bool,
    pub is_setter: bool,
    pub is_fake_override: bool,
    pub is_default_constructor: bool,
    pub is_enum_entry: bool,
    pub is_enum_special: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolKindRecord {
    AnonymousInitializerSymbol,
    ClassSymbol,
    ConstructorSymbol,
    EnumEntrySymbol,
    FieldSymbol,
    FunctionSymbol,
    /// Not representable in the IR
    ReturnableBlockSymbol,
    TypeParameterSymbol,
    ValueParameterSymbol,
    VariableSymbol,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolRecord {
    pub kind: SymbolKindRecord,
    pub uniq_id: UniqIdRecord,
    pub descriptor_reference: Option<DescriptorReferenceRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatesRecord {
    pub start_offset: i32,
    pub end_offset: i32,
}

impl CoordinatesRecord {
    pub fn new(start_offset: i32, end_offset: i32) -> Self {
        Self {
            start_offset,
            end_offset,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginRecord {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntryRecord {
    pub name: String,
}

/// File header: name, package and the content ids of its declarations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub file_entry: FileEntryRecord,
    pub fq_name: String,
    pub declaration_ids: Vec<UniqIdRecord>,
}

/// Module header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub name: String,
    pub files: Vec<FileRecord>,
}

/// Decode a module header from raw bytes
pub fn decode_module(bytes: &[u8]) -> DecodeResult<ModuleRecord> {
    Ok(bincode::deserialize(bytes)?)
}

/// Decode one declaration record from raw bytes
pub fn decode_declaration(bytes: &[u8]) -> DecodeResult<DeclarationRecord> {
    Ok(bincode::deserialize(bytes)?)
}

/// Encode any record into the byte form the decoder reads
pub fn encode<T: Serialize>(record: &T) -> DecodeResult<Vec<u8>> {
    Ok(bincode::serialize(record)?)
}
