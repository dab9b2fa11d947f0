use super::expr::{BlockBodyRecord, CallRecord, ExpressionRecord, StatementRecord};
use super::types::{TypeRecord, VarianceRecord};
use super::{CoordinatesRecord, OriginRecord, SymbolRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclarationRecord {
    pub coordinates: CoordinatesRecord,
    pub origin: OriginRecord,
    pub annotations: Vec<CallRecord>,
    pub file_name: String,
    pub declarator: DeclaratorRecord,
}

nested_record!(DeclarationRecord {
    coordinates: CoordinatesRecord,
    origin: OriginRecord,
    annotations: Vec<CallRecord>,
    file_name: String,
    declarator: DeclaratorRecord,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum DeclaratorRecord {
    #[default]
    NotSet,
    AnonymousInit(AnonymousInitRecord),
    Class(ClassRecord),
    Constructor(ConstructorRecord),
    EnumEntry(EnumEntryRecord),
    Field(FieldRecord),
    Function(FunctionRecord),
    Property(PropertyRecord),
    TypeAlias,
    Variable(VariableRecord),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassKindRecord {
    #[default]
    Class,
    Interface,
    EnumClass,
    EnumEntry,
    AnnotationClass,
    Object,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalityRecord {
    #[default]
    Final,
    Sealed,
    Open,
    Abstract,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub symbol: SymbolRecord,
    pub name: String,
    pub kind: ClassKindRecord,
    pub visibility: String,
    pub modality: ModalityRecord,
    pub is_companion: bool,
    pub is_inner: bool,
    pub is_data: bool,
    pub is_external: bool,
    pub is_inline: bool,
    pub declarations: Vec<DeclarationRecord>,
    pub this_receiver: Option<ValueParameterRecord>,
    pub type_parameters: Vec<TypeParameterRecord>,
    pub super_types: Vec<TypeRecord>,
}

/// Shared by functions and constructors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FunctionBaseRecord {
    pub name: String,
    pub visibility: String,
    pub is_inline: bool,
    pub is_external: bool,
    pub return_type: TypeRecord,
    /// Block body or synthetic body statement
    pub body: Option<Box<StatementRecord>>,
    pub value_parameters: Vec<ValueParameterRecord>,
    pub dispatch_receiver: Option<ValueParameterRecord>,
    pub extension_receiver: Option<ValueParameterRecord>,
    pub type_parameters: Vec<TypeParameterRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub symbol: SymbolRecord,
    pub base: FunctionBaseRecord,
    pub modality: ModalityRecord,
    pub is_tailrec: bool,
    pub is_suspend: bool,
    pub overridden: Vec<SymbolRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorRecord {
    pub symbol: SymbolRecord,
    pub base: FunctionBaseRecord,
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub symbol: SymbolRecord,
    pub name: String,
    pub ty: TypeRecord,
    pub visibility: String,
    pub is_final: bool,
    pub is_external: bool,
    pub is_static: bool,
    pub initializer: Option<ExpressionRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub name: String,
    pub visibility: String,
    pub modality: ModalityRecord,
    pub is_var: bool,
    pub is_const: bool,
    pub is_lateinit: bool,
    pub is_delegated: bool,
    pub is_external: bool,
    pub backing_field: Option<FieldRecord>,
    pub getter: Option<FunctionRecord>,
    pub setter: Option<FunctionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub symbol: SymbolRecord,
    pub name: String,
    pub ty: TypeRecord,
    pub is_var: bool,
    pub is_const: bool,
    pub is_lateinit: bool,
    pub initializer: Option<ExpressionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumEntryRecord {
    pub symbol: SymbolRecord,
    pub name: String,
    pub corresponding_class: Option<Box<DeclarationRecord>>,
    pub initializer: Option<ExpressionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousInitRecord {
    pub symbol: SymbolRecord,
    pub body: BlockBodyRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueParameterRecord {
    pub symbol: SymbolRecord,
    pub name: String,
    pub index: i32,
    pub ty: TypeRecord,
    pub vararg_element_type: Option<TypeRecord>,
    pub is_crossinline: bool,
    pub is_noinline: bool,
    pub default_value: Option<ExpressionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeParameterRecord {
    pub symbol: SymbolRecord,
    pub name: String,
    pub index: i32,
    pub variance: VarianceRecord,
    pub super_types: Vec<TypeRecord>,
}
