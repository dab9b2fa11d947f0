use super::expr::CallRecord;
use super::SymbolRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarianceRecord {
    #[default]
    Invariant,
    In,
    Out,
}

/// Annotations and variance shared by all type records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeBaseRecord {
    pub annotations: Vec<CallRecord>,
    pub variance: VarianceRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleTypeRecord {
    pub base: TypeBaseRecord,
    pub classifier: SymbolRecord,
    pub has_question_mark: bool,
    pub arguments: Vec<TypeArgumentRecord>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeProjectionRecord {
    pub variance: VarianceRecord,
    pub ty: TypeRecord,
}

nested_record!(TypeProjectionRecord {
    variance: VarianceRecord,
    ty: TypeRecord,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum TypeArgumentRecord {
    #[default]
    NotSet,
    Star,
    Type(TypeProjectionRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum TypeRecord {
    #[default]
    NotSet,
    Simple(SimpleTypeRecord),
    Dynamic(TypeBaseRecord),
    Error(TypeBaseRecord),
}
