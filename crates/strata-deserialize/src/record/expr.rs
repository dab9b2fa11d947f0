use super::decl::DeclarationRecord;
use super::types::TypeRecord;
use super::{CoordinatesRecord, SymbolRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionRecord {
    pub coordinates: CoordinatesRecord,
    pub ty: TypeRecord,
    pub operation: OperationRecord,
}

nested_record!(ExpressionRecord {
    coordinates: CoordinatesRecord,
    ty: TypeRecord,
    operation: OperationRecord,
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum OperationRecord {
    #[default]
    NotSet,
    Block(BlockRecord),
    Break(LoopJumpRecord),
    Call(CallRecord),
    ClassReference(ClassReferenceRecord),
    Composite(CompositeRecord),
    Const(ConstRecord),
    Continue(LoopJumpRecord),
    DelegatingConstructorCall(ConstructorCallRecord),
    DoWhile(LoopRecord),
    EnumConstructorCall(ConstructorCallRecord),
    FunctionReference(FunctionReferenceRecord),
    GetClass(GetClassRecord),
    GetEnumValue(GetEnumValueRecord),
    GetField(GetFieldRecord),
    GetObject(GetObjectRecord),
    GetValue(GetValueRecord),
    InstanceInitializerCall(InstanceInitializerCallRecord),
    PropertyReference(PropertyReferenceRecord),
    Return(ReturnRecord),
    SetField(SetFieldRecord),
    SetVariable(SetVariableRecord),
    StringConcat(StringConcatRecord),
    Throw(ThrowRecord),
    Try(TryRecord),
    TypeOp(TypeOpRecord),
    Vararg(VarargRecord),
    When(WhenRecord),
    While(LoopRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockRecord {
    pub statements: Vec<StatementRecord>,
    pub is_lambda_origin: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeRecord {
    pub statements: Vec<StatementRecord>,
}

/// `break` or `continue`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopJumpRecord {
    pub loop_id: i32,
    pub label: Option<String>,
}

/// `while` or `do-while`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopRecord {
    pub loop_id: i32,
    pub label: Option<String>,
    pub condition: Box<ExpressionRecord>,
    pub body: Option<Box<ExpressionRecord>>,
}

/// Receivers and arguments of a call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemberAccessRecord {
    pub dispatch_receiver: Option<Box<ExpressionRecord>>,
    pub extension_receiver: Option<Box<ExpressionRecord>>,
    /// `None` marks an argument left to its default value
    pub value_arguments: Vec<Option<ExpressionRecord>>,
    pub type_arguments: Vec<TypeRecord>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveRecord {
    #[default]
    NotPrimitive,
    Nullary,
    Unary,
    Binary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub symbol: SymbolRecord,
    pub super_symbol: Option<SymbolRecord>,
    pub kind: PrimitiveRecord,
    pub member_access: MemberAccessRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassReferenceRecord {
    pub class_symbol: SymbolRecord,
    pub class_type: TypeRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum ConstRecord {
    #[default]
    NotSet,
    Null,
    Boolean(bool),
    Byte(i32),
    Char(i32),
    Short(i32),
    Int(i32),
    Long(i64),
    String(String),
    Float(f32),
    Double(f64),
}

/// Delegating or enum constructor call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstructorCallRecord {
    pub symbol: SymbolRecord,
    pub member_access: MemberAccessRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionReferenceRecord {
    pub symbol: SymbolRecord,
    pub type_arguments: Vec<TypeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetClassRecord {
    pub argument: Box<ExpressionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetEnumValueRecord {
    pub ty: TypeRecord,
    pub symbol: SymbolRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldAccessRecord {
    pub symbol: SymbolRecord,
    pub super_symbol: Option<SymbolRecord>,
    pub receiver: Option<Box<ExpressionRecord>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetFieldRecord {
    pub field_access: FieldAccessRecord,
    pub ty: TypeRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetObjectRecord {
    pub symbol: SymbolRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetValueRecord {
    pub symbol: SymbolRecord,
    pub ty: TypeRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceInitializerCallRecord {
    pub symbol: SymbolRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyReferenceRecord {
    pub field: Option<SymbolRecord>,
    pub getter: Option<SymbolRecord>,
    pub setter: Option<SymbolRecord>,
    pub type_arguments: Vec<TypeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnRecord {
    pub return_target: SymbolRecord,
    pub value: Box<ExpressionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetFieldRecord {
    pub field_access: FieldAccessRecord,
    pub value: Box<ExpressionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetVariableRecord {
    pub symbol: SymbolRecord,
    pub value: Box<ExpressionRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StringConcatRecord {
    pub arguments: Vec<ExpressionRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThrowRecord {
    pub value: Box<ExpressionRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TryRecord {
    pub result: Box<ExpressionRecord>,
    /// Catch statements
    pub catches: Vec<StatementRecord>,
    pub finally: Option<Box<ExpressionRecord>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeOperatorRecord {
    #[default]
    Cast,
    ImplicitCast,
    ImplicitNotNull,
    ImplicitCoercionToUnit,
    ImplicitIntegerCoercion,
    SafeCast,
    InstanceOf,
    NotInstanceOf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeOpRecord {
    pub operator: TypeOperatorRecord,
    pub operand: TypeRecord,
    pub argument: Box<ExpressionRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpreadElementRecord {
    pub coordinates: CoordinatesRecord,
    pub expression: ExpressionRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum VarargElementRecord {
    #[default]
    NotSet,
    Expression(ExpressionRecord),
    SpreadElement(SpreadElementRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VarargRecord {
    pub element_type: TypeRecord,
    pub elements: Vec<VarargElementRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhenRecord {
    /// Branch statements
    pub branches: Vec<StatementRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementRecord {
    pub coordinates: CoordinatesRecord,
    pub statement: StatementKindRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum StatementKindRecord {
    #[default]
    NotSet,
    BlockBody(BlockBodyRecord),
    Branch(BranchRecord),
    Catch(CatchRecord),
    Declaration(Box<DeclarationRecord>),
    Expression(ExpressionRecord),
    SyntheticBody(SyntheticBodyRecord),
}

impl StatementKindRecord {
    pub fn name(&self) -> &'static str {
        match self {
            StatementKindRecord::NotSet => "NotSet",
            StatementKindRecord::BlockBody(_) => "BlockBody",
            StatementKindRecord::Branch(_) => "Branch",
            StatementKindRecord::Catch(_) => "Catch",
            StatementKindRecord::Declaration(_) => "Declaration",
            StatementKindRecord::Expression(_) => "Expression",
            StatementKindRecord::SyntheticBody(_) => "SyntheticBody",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockBodyRecord {
    pub statements: Vec<StatementRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchRecord {
    pub condition: ExpressionRecord,
    pub result: ExpressionRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatchRecord {
    pub catch_parameter: Box<DeclarationRecord>,
    pub result: ExpressionRecord,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyntheticBodyKindRecord {
    #[default]
    EnumValues,
    EnumValueOf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticBodyRecord {
    pub kind: SyntheticBodyKindRecord,
}
