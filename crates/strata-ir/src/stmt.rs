//! IR statements and bodies

use crate::decl::DeclarationRef;
use crate::expr::Expression;
use crate::range::SourceRange;

#[derive(Debug, Clone)]
pub struct BlockBody {
    pub range: SourceRange,
    pub statements: Vec<Statement>,
}

/// One arm of a `when`
#[derive(Debug, Clone)]
pub struct Branch {
    pub range: SourceRange,
    pub condition: Expression,
    pub result: Expression,
}

#[derive(Debug, Clone)]
pub struct Catch {
    pub range: SourceRange,
    /// Always a variable declaration
    pub parameter: DeclarationRef,
    pub result: Expression,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticBodyKind {
    EnumValues,
    EnumValueOf,
}

/// Body generated by the back-end rather than written in source
#[derive(Debug, Clone)]
pub struct SyntheticBody {
    pub range: SourceRange,
    pub kind: SyntheticBodyKind,
}

#[derive(Debug, Clone)]
pub enum Statement {
    BlockBody(BlockBody),
    Branch(Branch),
    Catch(Catch),
    Declaration(DeclarationRef),
    Expression(Expression),
    SyntheticBody(SyntheticBody),
}

impl Statement {
    pub fn name(&self) -> &'static str {
        match self {
            Statement::BlockBody(_) => "block body",
            Statement::Branch(_) => "branch",
            Statement::Catch(_) => "catch",
            Statement::Declaration(_) => "declaration",
            Statement::Expression(_) => "expression",
            Statement::SyntheticBody(_) => "synthetic body",
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Statement::Expression(expression) => Some(expression),
            _ => None,
        }
    }
}

/// Function or initializer body
#[derive(Debug, Clone)]
pub enum Body {
    Block(BlockBody),
    Synthetic(SyntheticBody),
}

impl Body {
    pub fn statements(&self) -> &[Statement] {
        match self {
            Body::Block(block) => &block.statements,
            Body::Synthetic(_) => &[],
        }
    }
}
