//! Symbol resolution: identity sharing, builtins and descriptor lookup

mod common;

use common::*;
use std::rc::Rc;
use strata_deserialize::record::{DescriptorReferenceRecord, SymbolKindRecord};
use strata_deserialize::{DecodeError, DecodeSession, DecoderConfig};
use strata_ir::{ClassScope, Descriptor, DescriptorKind, InMemoryUniverse, SymbolId, SymbolKind};

#[test]
fn test_same_id_same_instance() {
    let mut session = session();
    let first = session.resolve_symbol(&variable_symbol(FIRST_USER_ID)).unwrap();
    let second = session.resolve_symbol(&variable_symbol(FIRST_USER_ID)).unwrap();
    assert!(Rc::ptr_eq(&first, &second));
    assert_eq!(first.id(), SymbolId(FIRST_USER_ID));
}

#[test]
fn test_identity_survives_different_records() {
    let mut session = session();
    let reference = reference("", "compute", COMPUTE);
    let first = session
        .resolve_symbol(&bound(SymbolKindRecord::FunctionSymbol, 120, reference))
        .unwrap();
    // A later record for the same id without a descriptor reference still
    // gets the bound instance
    let second = session.resolve_symbol(&function_symbol(120)).unwrap();
    assert!(Rc::ptr_eq(&first, &second));
    assert!(second.is_bound());
}

#[test]
fn test_builtins_never_reach_the_universe() {
    let mut session = untouchable_session();
    let record = bound(
        SymbolKindRecord::ClassSymbol,
        BOOLEAN,
        reference("Missing", "Boolean", 0xdead),
    );
    let symbol = session.resolve_symbol(&record).unwrap();
    assert_eq!(symbol.name(), "Boolean");
    assert!(Rc::ptr_eq(
        &symbol,
        &session.builtins().entries()[BOOLEAN as usize].symbol
    ));
}

#[test]
fn test_builtin_function_ids() {
    let mut session = untouchable_session();
    let less = session.resolve_symbol(&function_symbol(LESS)).unwrap();
    assert_eq!(less.name(), "less");
    assert_eq!(less.kind(), SymbolKind::Function);
    let eqeq = session.resolve_symbol(&function_symbol(EQEQ)).unwrap();
    assert_eq!(eqeq.name(), "eqeq");
}

#[test]
fn test_unbacked_symbol_gets_placeholder() {
    let mut session = session();
    let symbol = session.resolve_symbol(&variable_symbol(FIRST_USER_ID)).unwrap();
    assert!(!symbol.is_bound());
    assert!(symbol.descriptor().is_placeholder());
    assert_eq!(symbol.descriptor().kind(), DescriptorKind::Variable);
}

#[test]
fn test_package_member() {
    let session = session();
    let descriptor = session
        .resolve_descriptor_reference(&reference("", "compute", COMPUTE))
        .unwrap();
    assert_eq!(descriptor.name(), "compute");
    assert_eq!(descriptor.index(), Some(COMPUTE));
}

#[test]
fn test_class_member() {
    let session = session();
    let descriptor = session
        .resolve_descriptor_reference(&reference("Point", "length", POINT_LENGTH))
        .unwrap();
    assert_eq!(descriptor.name(), "length");
}

#[test]
fn test_property_accessors() {
    let session = session();

    let getter = session
        .resolve_descriptor_reference(&DescriptorReferenceRecord {
            is_getter: true,
            ..reference("Point", "x", POINT_X)
        })
        .unwrap();
    assert_eq!(getter.kind(), DescriptorKind::Getter);
    assert_eq!(getter.index(), Some(POINT_X_GET));

    let setter = session
        .resolve_descriptor_reference(&DescriptorReferenceRecord {
            is_setter: true,
            ..reference("Point", "x", POINT_X)
        })
        .unwrap();
    assert_eq!(setter.kind(), DescriptorKind::Setter);

    let property = session
        .resolve_descriptor_reference(&reference("Point", "x", POINT_X))
        .unwrap();
    assert_eq!(property.kind(), DescriptorKind::Property);
}

#[test]
fn test_fake_override_matches_through_overridden_member() {
    let session = session();
    let descriptor = session
        .resolve_descriptor_reference(&DescriptorReferenceRecord {
            is_fake_override: true,
            ..reference("Point", "describe", BASE_DESCRIBE)
        })
        .unwrap();
    assert!(descriptor.is_fake_override());
    assert_eq!(descriptor.name(), "describe");

    // Without the flag the fake override has no index of its own
    let result = session.resolve_descriptor_reference(&reference("Point", "describe", BASE_DESCRIBE));
    assert!(matches!(result, Err(DecodeError::UnresolvedReference { .. })));
}

#[test]
fn test_default_constructor() {
    let session = session();
    let descriptor = session
        .resolve_descriptor_reference(&DescriptorReferenceRecord {
            is_default_constructor: true,
            ..reference("Point", "<init>", 0)
        })
        .unwrap();
    assert_eq!(descriptor.kind(), DescriptorKind::Constructor);
    assert_eq!(descriptor.index(), Some(POINT_INIT));
}

#[test]
fn test_enum_entry_by_name() {
    let mut session = session();
    let record = bound(
        SymbolKindRecord::EnumEntrySymbol,
        130,
        DescriptorReferenceRecord {
            is_enum_entry: true,
            ..reference("Color", "GREEN", 0)
        },
    );
    let symbol = session.resolve_symbol(&record).unwrap();
    assert_eq!(symbol.name(), "GREEN");
    assert_eq!(symbol.descriptor().kind(), DescriptorKind::EnumEntry);
}

#[test]
fn test_enum_special_function() {
    let session = session();
    let descriptor = session
        .resolve_descriptor_reference(&DescriptorReferenceRecord {
            is_enum_special: true,
            ..reference("Color", "values", 0)
        })
        .unwrap();
    assert_eq!(descriptor.index(), Some(0x44));
}

#[test]
fn test_overloaded_enum_special_is_unresolved() {
    let mut universe = InMemoryUniverse::new("overloads");
    let shade = Descriptor::new(DescriptorKind::Class, "Shade", 0x50);
    universe.add_class(
        PACKAGE,
        "Shade",
        ClassScope::new(shade)
            .with_static_function(Descriptor::new(DescriptorKind::Function, "valueOf", 0x51))
            .with_static_function(Descriptor::new(DescriptorKind::Function, "valueOf", 0x52)),
    );
    let session = DecodeSession::with_defaults(universe.into_ref());

    let result = session.resolve_descriptor_reference(&DescriptorReferenceRecord {
        is_enum_special: true,
        ..reference("Shade", "valueOf", 0)
    });
    assert!(matches!(result, Err(DecodeError::UnresolvedReference { .. })));
}

#[test]
fn test_unresolved_reference_reports_index() {
    let session = session();
    let result = session.resolve_descriptor_reference(&reference("", "compute", 0x99));
    match result {
        Err(DecodeError::UnresolvedReference { name, index, .. }) => {
            assert_eq!(name, "compute");
            assert_eq!(index, 0x99);
        }
        other => panic!("expected UnresolvedReference, got {:?}", other),
    }
}

#[test]
fn test_unknown_class_is_unresolved() {
    let session = session();
    let result = session.resolve_descriptor_reference(&reference("Nowhere", "x", 1));
    assert!(matches!(result, Err(DecodeError::UnresolvedReference { .. })));
}

#[test]
fn test_descriptor_kind_must_fit_symbol_kind() {
    let record = bound(
        SymbolKindRecord::ClassSymbol,
        140,
        reference("", "compute", COMPUTE),
    );

    let result = session().resolve_symbol(&record);
    assert!(matches!(result, Err(DecodeError::SymbolKindMismatch { .. })));

    let mut lenient = session_with(DecoderConfig::default().with_symbol_kind_checks(false));
    let symbol = lenient.resolve_symbol(&record).unwrap();
    assert_eq!(symbol.kind(), SymbolKind::Class);
}

#[test]
fn test_cached_kind_must_match() {
    let mut session = session();
    session.resolve_symbol(&variable_symbol(150)).unwrap();
    let result = session.resolve_symbol(&function_symbol(150));
    match result {
        Err(DecodeError::SymbolKindMismatch { id, .. }) => assert_eq!(id, SymbolId(150)),
        other => panic!("expected SymbolKindMismatch, got {:?}", other),
    }
}

#[test]
fn test_returnable_block_unsupported() {
    let mut session = session();
    let result = session.resolve_symbol(&symbol(SymbolKindRecord::ReturnableBlockSymbol, 160));
    assert!(matches!(
        result,
        Err(DecodeError::UnsupportedVariant { record: "symbol kind", .. })
    ));
}
