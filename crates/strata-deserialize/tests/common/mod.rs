//! Record-construction helpers shared by the integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::rc::Rc;
use strata_deserialize::record::*;
use strata_deserialize::{DecodeSession, DecoderConfig};
use strata_ir::{
    Builtins, ClassScope, Descriptor, DescriptorKind, DescriptorUniverse, Expression,
    ExpressionKind, InMemoryUniverse, UniverseRef,
};

pub const ANY: u64 = 0;
pub const NOTHING: u64 = 1;
pub const UNIT: u64 = 2;
pub const BOOLEAN: u64 = 3;
pub const INT: u64 = 7;
pub const STRING: u64 = 11;
pub const EQEQ: u64 = 13;
pub const LESS: u64 = 18;

/// First id past the builtin range
pub const FIRST_USER_ID: u64 = 100;

pub const PACKAGE: &str = "demo";

// Original indices of the sample universe's descriptors
pub const COMPUTE: u64 = 0x10;
pub const POINT: u64 = 0x20;
pub const POINT_X: u64 = 0x21;
pub const POINT_X_GET: u64 = 0x22;
pub const POINT_X_SET: u64 = 0x23;
pub const POINT_LENGTH: u64 = 0x24;
pub const POINT_INIT: u64 = 0x25;
pub const BASE_DESCRIBE: u64 = 0x30;
pub const COLOR: u64 = 0x40;

/// A universe with a few package members and classes:
///
/// - `demo.compute()` function, `demo.Point` and `demo.Color` classes
/// - `Point`: property `x` with accessors, `length()`, a fake override of
///   `Base.describe()`, one constructor
/// - `Color`: enum entries `RED` and `GREEN`, special `valueOf`/`values`
pub fn sample_universe() -> InMemoryUniverse {
    let mut universe = InMemoryUniverse::new("sample");

    let point = Descriptor::new(DescriptorKind::Class, "Point", POINT);
    let color = Descriptor::new(DescriptorKind::Class, "Color", COLOR);
    universe.add_package_member(PACKAGE, Descriptor::new(DescriptorKind::Function, "compute", COMPUTE));
    universe.add_package_member(PACKAGE, point.clone());
    universe.add_package_member(PACKAGE, color.clone());

    let describe = Descriptor::new(DescriptorKind::Function, "describe", BASE_DESCRIBE);
    let x = Descriptor::builder(DescriptorKind::Property, "x")
        .index(POINT_X)
        .getter(Descriptor::new(DescriptorKind::Getter, "<get-x>", POINT_X_GET))
        .setter(Descriptor::new(DescriptorKind::Setter, "<set-x>", POINT_X_SET))
        .build();
    universe.add_class(
        PACKAGE,
        "Point",
        ClassScope::new(point)
            .with_member(x)
            .with_member(Descriptor::new(DescriptorKind::Function, "length", POINT_LENGTH))
            .with_member(
                Descriptor::builder(DescriptorKind::Function, "describe")
                    .fake_override(vec![describe.clone()])
                    .build(),
            )
            .with_constructor(Descriptor::new(DescriptorKind::Constructor, "<init>", POINT_INIT)),
    );
    universe.add_class(PACKAGE, "Base", ClassScope::new(Descriptor::new(DescriptorKind::Class, "Base", 0x2f)).with_member(describe));

    universe.add_class(
        PACKAGE,
        "Color",
        ClassScope::new(color)
            .with_member(Descriptor::new(DescriptorKind::EnumEntry, "RED", 0x41))
            .with_member(Descriptor::new(DescriptorKind::EnumEntry, "GREEN", 0x42))
            .with_static_function(Descriptor::new(DescriptorKind::Function, "valueOf", 0x43))
            .with_static_function(Descriptor::new(DescriptorKind::Function, "values", 0x44)),
    );

    universe
}

pub fn session() -> DecodeSession {
    DecodeSession::with_defaults(sample_universe().into_ref())
}

pub fn session_with(config: DecoderConfig) -> DecodeSession {
    DecodeSession::new(sample_universe().into_ref(), Rc::new(Builtins::standard()), config)
}

/// Universe that fails the test if it is ever consulted
pub struct UntouchableUniverse;

impl DescriptorUniverse for UntouchableUniverse {
    fn name(&self) -> &str {
        "untouchable"
    }

    fn package_members(&self, package: &str) -> Vec<Descriptor> {
        panic!("universe consulted for package {}", package)
    }

    fn find_class(&self, package: &str, class: &str) -> Option<ClassScope> {
        panic!("universe consulted for class {}/{}", package, class)
    }
}

pub fn untouchable_session() -> DecodeSession {
    let universe: UniverseRef = Rc::new(UntouchableUniverse);
    DecodeSession::with_defaults(universe)
}

// Symbols

pub fn symbol(kind: SymbolKindRecord, id: u64) -> SymbolRecord {
    SymbolRecord {
        kind,
        uniq_id: UniqIdRecord::new(id),
        descriptor_reference: None,
    }
}

pub fn bound(kind: SymbolKindRecord, id: u64, reference: DescriptorReferenceRecord) -> SymbolRecord {
    SymbolRecord {
        descriptor_reference: Some(reference),
        ..symbol(kind, id)
    }
}

pub fn reference(class: &str, name: &str, index: u64) -> DescriptorReferenceRecord {
    DescriptorReferenceRecord {
        package_fq_name: PACKAGE.to_string(),
        class_fq_name: class.to_string(),
        name: name.to_string(),
        uniq_id: UniqIdRecord::new(index),
        ..Default::default()
    }
}

pub fn class_symbol(id: u64) -> SymbolRecord {
    symbol(SymbolKindRecord::ClassSymbol, id)
}

pub fn function_symbol(id: u64) -> SymbolRecord {
    symbol(SymbolKindRecord::FunctionSymbol, id)
}

pub fn variable_symbol(id: u64) -> SymbolRecord {
    symbol(SymbolKindRecord::VariableSymbol, id)
}

// Types

pub fn simple_type(classifier: u64, nullable: bool, arguments: Vec<TypeArgumentRecord>) -> TypeRecord {
    TypeRecord::Simple(SimpleTypeRecord {
        base: TypeBaseRecord::default(),
        classifier: class_symbol(classifier),
        has_question_mark: nullable,
        arguments,
    })
}

pub fn class_type(classifier: u64) -> TypeRecord {
    simple_type(classifier, false, Vec::new())
}

pub fn unit_type() -> TypeRecord {
    class_type(UNIT)
}

pub fn int_type() -> TypeRecord {
    class_type(INT)
}

pub fn boolean_type() -> TypeRecord {
    class_type(BOOLEAN)
}

// Expressions and statements

pub fn coordinates(start: i32, end: i32) -> CoordinatesRecord {
    CoordinatesRecord::new(start, end)
}

pub fn expression(ty: TypeRecord, operation: OperationRecord) -> ExpressionRecord {
    ExpressionRecord {
        coordinates: CoordinatesRecord::default(),
        ty,
        operation,
    }
}

pub fn int(value: i32) -> ExpressionRecord {
    expression(int_type(), OperationRecord::Const(ConstRecord::Int(value)))
}

pub fn boolean(value: bool) -> ExpressionRecord {
    expression(boolean_type(), OperationRecord::Const(ConstRecord::Boolean(value)))
}

pub fn string(value: &str) -> ExpressionRecord {
    expression(class_type(STRING), OperationRecord::Const(ConstRecord::String(value.to_string())))
}

/// An int constant wrapped in `depth` class-literal expressions
pub fn nested_get_class(depth: usize) -> ExpressionRecord {
    let mut record = int(0);
    for _ in 0..depth {
        record = expression(
            class_type(ANY),
            OperationRecord::GetClass(GetClassRecord {
                argument: Box::new(record),
            }),
        );
    }
    record
}

/// Number of class-literal expressions wrapped around the innermost one
pub fn get_class_depth(expression: &Expression) -> usize {
    let mut depth = 0;
    let mut current = expression;
    while let ExpressionKind::GetClass { argument } = &current.kind {
        depth += 1;
        current = &**argument;
    }
    depth
}

pub fn get_value(id: u64, ty: TypeRecord) -> ExpressionRecord {
    expression(
        ty.clone(),
        OperationRecord::GetValue(GetValueRecord {
            symbol: variable_symbol(id),
            ty,
        }),
    )
}

pub fn call(symbol: SymbolRecord, arguments: Vec<ExpressionRecord>) -> CallRecord {
    CallRecord {
        symbol,
        super_symbol: None,
        kind: PrimitiveRecord::NotPrimitive,
        member_access: MemberAccessRecord {
            value_arguments: arguments.into_iter().map(Some).collect(),
            ..Default::default()
        },
    }
}

pub fn jump(loop_id: i32) -> LoopJumpRecord {
    LoopJumpRecord {
        loop_id,
        label: None,
    }
}

pub fn break_to(loop_id: i32) -> ExpressionRecord {
    expression(class_type(NOTHING), OperationRecord::Break(jump(loop_id)))
}

pub fn continue_to(loop_id: i32) -> ExpressionRecord {
    expression(class_type(NOTHING), OperationRecord::Continue(jump(loop_id)))
}

pub fn block(statements: Vec<StatementRecord>) -> ExpressionRecord {
    expression(
        unit_type(),
        OperationRecord::Block(BlockRecord {
            statements,
            is_lambda_origin: false,
        }),
    )
}

pub fn while_loop(loop_id: i32, condition: ExpressionRecord, body: ExpressionRecord) -> ExpressionRecord {
    expression(
        unit_type(),
        OperationRecord::While(LoopRecord {
            loop_id,
            label: None,
            condition: Box::new(condition),
            body: Some(Box::new(body)),
        }),
    )
}

pub fn statement(expression: ExpressionRecord) -> StatementRecord {
    StatementRecord {
        coordinates: expression.coordinates,
        statement: StatementKindRecord::Expression(expression),
    }
}

pub fn block_body(statements: Vec<StatementRecord>) -> StatementRecord {
    StatementRecord {
        coordinates: CoordinatesRecord::default(),
        statement: StatementKindRecord::BlockBody(BlockBodyRecord { statements }),
    }
}

// Declarations

pub fn declaration(declarator: DeclaratorRecord) -> DeclarationRecord {
    DeclarationRecord {
        coordinates: coordinates(0, 10),
        origin: OriginRecord {
            name: "DEFINED".to_string(),
        },
        annotations: Vec::new(),
        file_name: "sample.kt".to_string(),
        declarator,
    }
}

pub fn function_base(name: &str, return_type: TypeRecord, body: Option<StatementRecord>) -> FunctionBaseRecord {
    FunctionBaseRecord {
        name: name.to_string(),
        visibility: "public".to_string(),
        return_type,
        body: body.map(Box::new),
        ..Default::default()
    }
}

pub fn function(symbol: SymbolRecord, name: &str, body: Option<StatementRecord>) -> FunctionRecord {
    FunctionRecord {
        symbol,
        base: function_base(name, unit_type(), body),
        modality: ModalityRecord::Final,
        is_tailrec: false,
        is_suspend: false,
        overridden: Vec::new(),
    }
}

pub fn function_declaration(symbol: SymbolRecord, name: &str, body: Option<StatementRecord>) -> DeclarationRecord {
    declaration(DeclaratorRecord::Function(function(symbol, name, body)))
}

pub fn variable(id: u64, name: &str, ty: TypeRecord, initializer: Option<ExpressionRecord>) -> DeclarationRecord {
    declaration(DeclaratorRecord::Variable(VariableRecord {
        symbol: variable_symbol(id),
        name: name.to_string(),
        ty,
        is_var: false,
        is_const: false,
        is_lateinit: false,
        initializer,
    }))
}

pub fn class(symbol: SymbolRecord, name: &str, members: Vec<DeclarationRecord>) -> DeclarationRecord {
    declaration(DeclaratorRecord::Class(ClassRecord {
        symbol,
        name: name.to_string(),
        kind: ClassKindRecord::Class,
        visibility: "public".to_string(),
        modality: ModalityRecord::Final,
        is_companion: false,
        is_inner: false,
        is_data: false,
        is_external: false,
        is_inline: false,
        declarations: members,
        this_receiver: None,
        type_parameters: Vec::new(),
        super_types: vec![class_type(ANY)],
    }))
}

// Byte store

/// Encodes declaration records under consecutive content ids
#[derive(Default)]
pub struct RecordStore {
    records: HashMap<u64, Vec<u8>>,
}

impl RecordStore {
    pub fn insert(&mut self, content_id: u64, record: &DeclarationRecord) {
        self.records.insert(content_id, encode(record).unwrap());
    }

    pub fn read(&self, content_id: u64) -> Option<Vec<u8>> {
        self.records.get(&content_id).cloned()
    }
}

pub fn file(name: &str, ids: &[u64]) -> FileRecord {
    FileRecord {
        file_entry: FileEntryRecord {
            name: name.to_string(),
        },
        fq_name: PACKAGE.to_string(),
        declaration_ids: ids.iter().copied().map(UniqIdRecord::new).collect(),
    }
}
