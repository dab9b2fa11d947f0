//! IR expressions
//!
//! Every expression carries its source range and its resolved type.

use crate::descriptor::Descriptor;
use crate::loops::{LoopJump, LoopRef};
use crate::range::SourceRange;
use crate::stmt::{Branch, Catch, Statement};
use crate::symbol::SymbolRef;
use crate::types::Type;

/// Typed expression node
#[derive(Debug, Clone)]
pub struct Expression {
    pub range: SourceRange,
    pub ty: Type,
    pub kind: ExpressionKind,
}

impl Expression {
    pub fn new(range: SourceRange, ty: Type, kind: ExpressionKind) -> Self {
        Self { range, ty, kind }
    }

    pub fn as_call(&self) -> Option<&Call> {
        match &self.kind {
            ExpressionKind::Call(call) => Some(call),
            _ => None,
        }
    }

    /// The loop node of a `while` or `do-while` expression
    pub fn as_loop(&self) -> Option<&LoopRef> {
        match &self.kind {
            ExpressionKind::While(node) | ExpressionKind::DoWhile(node) => Some(node),
            _ => None,
        }
    }

    /// The jump of a `break` or `continue` expression
    pub fn as_jump(&self) -> Option<&LoopJump> {
        match &self.kind {
            ExpressionKind::Break(jump) | ExpressionKind::Continue(jump) => Some(jump),
            _ => None,
        }
    }
}

// Children are dropped on a grown stack; nesting depth is unbounded.
impl Drop for Expression {
    fn drop(&mut self) {
        let kind = std::mem::replace(&mut self.kind, ExpressionKind::Const(Constant::Null));
        crate::stack::grow(move || drop(kind));
    }
}

/// Receivers and arguments shared by calls and constructor calls.
///
/// Argument counts are the lengths of these lists.
#[derive(Debug, Clone, Default)]
pub struct MemberAccess {
    pub dispatch_receiver: Option<Box<Expression>>,
    pub extension_receiver: Option<Box<Expression>>,
    /// Positional value arguments; `None` marks an argument left to its default
    pub value_arguments: Vec<Option<Expression>>,
    pub type_arguments: Vec<Type>,
}

impl MemberAccess {
    pub fn value_argument_count(&self) -> usize {
        self.value_arguments.len()
    }

    pub fn type_argument_count(&self) -> usize {
        self.type_arguments.len()
    }
}

/// Which call node a call record produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallForm {
    Ordinary,
    /// Intrinsic operator without operands
    Nullary,
    /// Intrinsic operator with one operand
    Unary,
    /// Intrinsic operator with two operands
    Binary,
}

#[derive(Debug, Clone)]
pub struct Call {
    pub symbol: SymbolRef,
    pub super_qualifier: Option<SymbolRef>,
    pub form: CallForm,
    pub access: MemberAccess,
}

/// Field read/write target
#[derive(Debug, Clone)]
pub struct FieldAccess {
    pub symbol: SymbolRef,
    pub super_qualifier: Option<SymbolRef>,
    pub receiver: Option<Box<Expression>>,
}

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Constant {
    Null,
    Boolean(bool),
    Byte(i8),
    /// UTF-16 code unit
    Char(u16),
    Short(i16),
    Int(i32),
    Long(i64),
    String(String),
    Float(f32),
    Double(f64),
}

impl std::fmt::Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constant::Null => write!(f, "null"),
            Constant::Boolean(v) => write!(f, "{}", v),
            Constant::Byte(v) => write!(f, "{}b", v),
            Constant::Char(v) => write!(f, "'\\u{{{:04x}}}'", v),
            Constant::Short(v) => write!(f, "{}s", v),
            Constant::Int(v) => write!(f, "{}", v),
            Constant::Long(v) => write!(f, "{}L", v),
            Constant::String(s) => write!(f, "\"{}\"", s.escape_default()),
            Constant::Float(v) => write!(f, "{}f", v),
            Constant::Double(v) => write!(f, "{}", v),
        }
    }
}

/// Type operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeOperator {
    Cast,
    ImplicitCast,
    ImplicitNotNull,
    ImplicitCoercionToUnit,
    ImplicitIntegerCoercion,
    SafeCast,
    InstanceOf,
    NotInstanceOf,
}

/// `*expr` inside a vararg
#[derive(Debug, Clone)]
pub struct SpreadElement {
    pub range: SourceRange,
    pub expression: Expression,
}

#[derive(Debug, Clone)]
pub enum VarargElement {
    Expression(Expression),
    Spread(SpreadElement),
}

/// Expression variants
#[derive(Debug, Clone)]
pub enum ExpressionKind {
    Block {
        statements: Vec<Statement>,
        /// Block was produced from a lambda
        is_lambda: bool,
    },
    Break(LoopJump),
    Continue(LoopJump),
    Call(Call),
    ClassReference {
        symbol: SymbolRef,
        class_type: Type,
    },
    Composite {
        statements: Vec<Statement>,
    },
    Const(Constant),
    DelegatingConstructorCall {
        symbol: SymbolRef,
        access: MemberAccess,
    },
    EnumConstructorCall {
        symbol: SymbolRef,
        access: MemberAccess,
    },
    FunctionReference {
        symbol: SymbolRef,
        type_arguments: Vec<Type>,
    },
    GetClass {
        argument: Box<Expression>,
    },
    GetEnumValue {
        symbol: SymbolRef,
    },
    GetField(FieldAccess),
    GetObject {
        symbol: SymbolRef,
    },
    GetValue {
        symbol: SymbolRef,
    },
    InstanceInitializerCall {
        class_symbol: SymbolRef,
    },
    PropertyReference {
        /// Always the property placeholder; property references are not
        /// resolved to a real descriptor
        descriptor: Descriptor,
        field: Option<SymbolRef>,
        getter: Option<SymbolRef>,
        setter: Option<SymbolRef>,
        type_arguments: Vec<Type>,
    },
    Return {
        target: SymbolRef,
        value: Box<Expression>,
    },
    SetField {
        access: FieldAccess,
        value: Box<Expression>,
    },
    SetVariable {
        symbol: SymbolRef,
        value: Box<Expression>,
    },
    StringConcat {
        arguments: Vec<Expression>,
    },
    Throw {
        value: Box<Expression>,
    },
    Try {
        result: Box<Expression>,
        catches: Vec<Catch>,
        finally: Option<Box<Expression>>,
    },
    TypeOperator {
        operator: TypeOperator,
        operand: Type,
        operand_classifier: SymbolRef,
        argument: Box<Expression>,
    },
    Vararg {
        element_type: Type,
        elements: Vec<VarargElement>,
    },
    When {
        branches: Vec<Branch>,
    },
    While(LoopRef),
    DoWhile(LoopRef),
}
