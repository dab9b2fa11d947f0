//! Loading whole modules through a byte reader

mod common;

use common::*;
use std::cell::RefCell;
use std::rc::Rc;
use strata_deserialize::record::{
    encode, ExpressionRecord, ModuleRecord, OperationRecord, SymbolKindRecord,
};
use strata_deserialize::{DecodeError, ModuleLoader};

fn loader() -> ModuleLoader {
    ModuleLoader::new(sample_universe().into_ref())
}

fn sample_store() -> RecordStore {
    let mut store = RecordStore::default();
    store.insert(
        1,
        &function_declaration(
            bound(SymbolKindRecord::FunctionSymbol, 500, reference("", "compute", COMPUTE)),
            "compute",
            Some(block_body(vec![statement(call_compute())])),
        ),
    );
    store.insert(
        2,
        &class(
            bound(SymbolKindRecord::ClassSymbol, 501, reference("", "Point", POINT)),
            "Point",
            Vec::new(),
        ),
    );
    store.insert(3, &variable(502, "answer", int_type(), Some(int(42))));
    store
}

/// A call to `compute` by id only; the symbol was bound by its declaration
fn call_compute() -> ExpressionRecord {
    expression(
        unit_type(),
        OperationRecord::Call(call(function_symbol(500), Vec::new())),
    )
}

#[test]
fn test_files_keep_declaration_order() {
    let store = sample_store();
    let record = ModuleRecord {
        name: "sample".to_string(),
        files: vec![file("b.kt", &[3, 1]), file("a.kt", &[2])],
    };

    let mut loader = loader();
    let module = loader.load_module(&record, &|id: u64| store.read(id)).unwrap();

    assert_eq!(module.files.len(), 2);
    let names: Vec<_> = module.files[0]
        .declarations
        .iter()
        .map(|declaration| declaration.name().to_string())
        .collect();
    assert_eq!(names, ["answer", "compute"]);
    assert_eq!(module.file("a.kt").unwrap().declarations[0].name(), "Point");
    assert_eq!(module.declarations().count(), 3);
}

#[test]
fn test_top_level_parent_is_the_file() {
    let store = sample_store();
    let mut loader = loader();
    let file = loader.load_file(&file("a.kt", &[2]), &|id: u64| store.read(id)).unwrap();

    let point = &file.declarations[0];
    let parent = point.parent.as_ref().unwrap();
    assert_eq!(parent.file_name(), Some("a.kt"));
    assert!(point.parent_declaration().is_none());
}

#[test]
fn test_symbols_shared_across_files() {
    let store = sample_store();
    let record = ModuleRecord {
        name: "sample".to_string(),
        files: vec![file("a.kt", &[1]), file("b.kt", &[2])],
    };
    let mut loader = loader();
    let module = loader.load_module(&record, &|id: u64| store.read(id)).unwrap();

    let compute = &module.files[0].declarations[0];
    let function = compute.as_function().unwrap();
    let body = function.signature.body.as_ref().unwrap();
    let call = body.statements()[0].as_expression().unwrap().as_call().unwrap();
    assert!(Rc::ptr_eq(&call.symbol, &function.symbol));

    let cached = loader.find_declaration(function.symbol.descriptor()).unwrap();
    assert!(Rc::ptr_eq(&cached, compute));
}

#[test]
fn test_each_id_read_once() {
    let store = sample_store();
    let reads = RefCell::new(Vec::new());
    let reader = |id: u64| {
        reads.borrow_mut().push(id);
        store.read(id)
    };
    let record = ModuleRecord {
        name: "sample".to_string(),
        files: vec![file("a.kt", &[1, 2, 3])],
    };
    loader().load_module(&record, &reader).unwrap();
    assert_eq!(*reads.borrow(), vec![1, 2, 3]);
}

#[test]
fn test_module_from_bytes() {
    let store = sample_store();
    let header = encode(&ModuleRecord {
        name: "sample".to_string(),
        files: vec![file("a.kt", &[2, 3])],
    })
    .unwrap();

    let module = loader()
        .load_module_bytes(&header, &|id: u64| store.read(id))
        .unwrap();
    assert_eq!(module.name(), "sample");
    assert_eq!(module.files[0].declarations.len(), 2);
}

#[test]
fn test_missing_record_aborts_the_load() {
    let store = sample_store();
    let record = ModuleRecord {
        name: "sample".to_string(),
        files: vec![file("a.kt", &[1, 77])],
    };
    let result = loader().load_module(&record, &|id: u64| store.read(id));
    assert!(matches!(
        result,
        Err(DecodeError::MissingRecord { content_id: 77 })
    ));
}

#[test]
fn test_corrupt_record_bytes() {
    let reader = |_: u64| Some(vec![0xffu8; 3]);
    let result = loader().load_file(&file("a.kt", &[1]), &reader);
    assert!(matches!(result, Err(DecodeError::Record(_))));
}

#[test]
fn test_duplicate_across_files_aborts_the_load() {
    let store = sample_store();
    let record = ModuleRecord {
        name: "sample".to_string(),
        files: vec![file("a.kt", &[2]), file("b.kt", &[2])],
    };
    let result = loader().load_module(&record, &|id: u64| store.read(id));
    assert!(matches!(
        result,
        Err(DecodeError::DuplicateDeclaration { .. })
    ));
}

#[test]
fn test_deeply_nested_record_from_bytes() {
    let mut store = RecordStore::default();
    let initializer = nested_get_class(10_000);
    store.insert(4, &variable(503, "deep", class_type(ANY), Some(initializer)));

    let file = loader()
        .load_file(&file("deep.kt", &[4]), &|id: u64| store.read(id))
        .unwrap();
    let variable = file.declarations[0].as_variable().unwrap();
    assert_eq!(variable.name, "deep");
    assert_eq!(get_class_depth(variable.initializer.as_ref().unwrap()), 10_000);
}
