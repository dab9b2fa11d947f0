//! Strata IR
//!
//! The in-memory intermediate representation handed from the front-end to the
//! back-end: declarations, types, statements and expressions, linked through
//! identity-shared symbols.
//!
//! # Structure
//!
//! - `Symbol` - Identity-stable handle for a declaration, backed by a `Descriptor`
//! - `Descriptor` - Semantic entity owned by the external `DescriptorUniverse`
//! - `Type` - Simple, dynamic and error types
//! - `Expression` / `Statement` - Bodies, with `Loop` nodes shared by break/continue
//! - `Declaration` - Classes, functions, properties and friends
//! - `Module` / `File` - The decoded compilation unit
//! - `Builtins` - Intrinsic symbols available to every decoding session
//! - `stack` - Stack growth for recursion over deep trees

#![warn(rust_2018_idioms)]

pub mod attrs;
pub mod builtins;
pub mod decl;
pub mod descriptor;
pub mod expr;
pub mod loops;
pub mod module;
pub mod range;
pub mod stack;
pub mod stmt;
pub mod symbol;
pub mod types;
pub mod universe;

pub use attrs::{ClassKind, DeclarationOrigin, Modality, Visibility};
pub use builtins::{BuiltinEntry, Builtins};
pub use decl::{
    AnonymousInitializer, Class, Constructor, Declaration, DeclarationKind, DeclarationParent,
    DeclarationRef, EnumEntry, ErrorDeclaration, Field, Function, FunctionSignature, Property,
    TypeParameter, ValueParameter, Variable,
};
pub use descriptor::{Descriptor, DescriptorBuilder, DescriptorKind, MemberKind, Placeholders};
pub use expr::{
    Call, CallForm, Constant, Expression, ExpressionKind, FieldAccess, MemberAccess,
    SpreadElement, TypeOperator, VarargElement,
};
pub use loops::{Loop, LoopContents, LoopId, LoopJump, LoopKind, LoopRef};
pub use module::{File, Module};
pub use range::SourceRange;
pub use stmt::{BlockBody, Body, Branch, Catch, Statement, SyntheticBody, SyntheticBodyKind};
pub use symbol::{Symbol, SymbolBinding, SymbolId, SymbolKind, SymbolRef};
pub use types::{SimpleType, SpecialType, Type, TypeArgument, Variance};
pub use universe::{ClassScope, DescriptorUniverse, InMemoryUniverse, UniverseRef};
