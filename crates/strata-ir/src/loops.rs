//! Loops
//!
//! Loops are built in two phases: the shell is allocated (and registered by the
//! decoder) before its condition and body exist, so `break`/`continue` nodes
//! inside the body can point back at it. The contents are set exactly once.
//!
//! Jumps hold a weak reference; the owning `while`/`do-while` expression holds
//! the strong one, so a loop and its body never form a reference cycle.

use crate::expr::Expression;
use crate::range::SourceRange;
use crate::types::Type;
use once_cell::unsync::OnceCell;
use std::rc::{Rc, Weak};

/// Per-session loop identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoopId(pub i32);

impl std::fmt::Display for LoopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "loop{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    While,
    DoWhile,
}

/// Everything a loop learns after its shell is allocated
#[derive(Debug, Clone)]
pub struct LoopContents {
    pub label: Option<String>,
    pub condition: Expression,
    pub body: Option<Expression>,
}

/// A `while` or `do-while` loop
#[derive(Debug)]
pub struct Loop {
    id: LoopId,
    kind: LoopKind,
    range: SourceRange,
    ty: Type,
    contents: OnceCell<LoopContents>,
}

pub type LoopRef = Rc<Loop>;

impl Loop {
    /// Allocate an empty loop shell
    pub fn allocate(id: LoopId, kind: LoopKind, range: SourceRange, ty: Type) -> LoopRef {
        Rc::new(Self {
            id,
            kind,
            range,
            ty,
            contents: OnceCell::new(),
        })
    }

    /// Fill in the shell. Returns `false` if it was already populated, in which
    /// case the existing contents are kept.
    pub fn populate(&self, contents: LoopContents) -> bool {
        self.contents.set(contents).is_ok()
    }

    pub fn id(&self) -> LoopId {
        self.id
    }

    pub fn kind(&self) -> LoopKind {
        self.kind
    }

    pub fn range(&self) -> SourceRange {
        self.range
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn is_populated(&self) -> bool {
        self.contents.get().is_some()
    }

    pub fn contents(&self) -> Option<&LoopContents> {
        self.contents.get()
    }

    pub fn label(&self) -> Option<&str> {
        self.contents().and_then(|contents| contents.label.as_deref())
    }

    pub fn condition(&self) -> Option<&Expression> {
        self.contents().map(|contents| &contents.condition)
    }

    pub fn body(&self) -> Option<&Expression> {
        self.contents().and_then(|contents| contents.body.as_ref())
    }
}

/// Target of a `break` or `continue`
#[derive(Debug, Clone)]
pub struct LoopJump {
    pub loop_id: LoopId,
    pub label: Option<String>,
    target: Weak<Loop>,
}

impl LoopJump {
    pub fn new(target: &LoopRef, label: Option<String>) -> Self {
        Self {
            loop_id: target.id(),
            label,
            target: Rc::downgrade(target),
        }
    }

    /// The loop this jump leaves or restarts, while the tree that owns it is alive
    pub fn target(&self) -> Option<LoopRef> {
        self.target.upgrade()
    }

    pub fn targets(&self, node: &LoopRef) -> bool {
        Weak::ptr_eq(&self.target, &Rc::downgrade(node))
    }
}
