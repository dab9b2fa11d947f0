//! Type reconstruction

mod common;

use common::*;
use std::rc::Rc;
use strata_deserialize::record::{
    TypeArgumentRecord, TypeBaseRecord, TypeProjectionRecord, TypeRecord, VarianceRecord,
};
use strata_deserialize::DecodeError;
use strata_ir::{SymbolId, Type, TypeArgument, Variance};

#[test]
fn test_simple_type_shape() {
    let mut session = session();
    let record = simple_type(
        BOOLEAN,
        true,
        vec![
            TypeArgumentRecord::Star,
            TypeArgumentRecord::Type(TypeProjectionRecord {
                variance: VarianceRecord::Out,
                ty: int_type(),
            }),
        ],
    );

    let ty = session.build_type(&record).unwrap();
    let classifier = ty.classifier().unwrap();
    assert_eq!(classifier.id(), SymbolId(BOOLEAN));
    assert!(Rc::ptr_eq(
        classifier,
        &session.builtins().entries()[BOOLEAN as usize].symbol
    ));
    assert!(ty.is_nullable());

    let arguments = ty.arguments();
    assert_eq!(arguments.len(), 2);
    assert!(arguments[0].is_star());
    match &arguments[1] {
        TypeArgument::Projection { ty, variance } => {
            assert_eq!(*variance, Variance::Out);
            assert_eq!(ty.classifier().unwrap().name(), "Int");
        }
        TypeArgument::Star => panic!("expected a typed projection"),
    }
}

#[test]
fn test_types_share_classifier_instances() {
    let mut session = session();
    let first = session.build_type(&class_type(FIRST_USER_ID)).unwrap();
    let second = session.build_type(&simple_type(FIRST_USER_ID, true, Vec::new())).unwrap();
    assert!(first.same_classifier(&second));
}

#[test]
fn test_dynamic_and_error_types() {
    let mut session = session();
    let dynamic = session
        .build_type(&TypeRecord::Dynamic(TypeBaseRecord {
            annotations: Vec::new(),
            variance: VarianceRecord::In,
        }))
        .unwrap();
    match &dynamic {
        Type::Dynamic(special) => assert_eq!(special.variance, Variance::In),
        other => panic!("expected a dynamic type, got {}", other),
    }
    assert!(dynamic.classifier().is_none());

    let error = session
        .build_type(&TypeRecord::Error(TypeBaseRecord::default()))
        .unwrap();
    assert!(error.is_error());
}

#[test]
fn test_type_annotations_are_unit_calls() {
    let mut session = session();
    let record = TypeRecord::Error(TypeBaseRecord {
        annotations: vec![call(function_symbol(FIRST_USER_ID), vec![string("deprecated")])],
        variance: VarianceRecord::Invariant,
    });

    let ty = session.build_type(&record).unwrap();
    let annotation = &ty.annotations()[0];
    assert!(annotation.ty.same_classifier(session.builtins().unit_type()));
    let call = annotation.as_call().unwrap();
    assert_eq!(call.access.value_argument_count(), 1);
}

#[test]
fn test_classifier_must_be_a_class_or_type_parameter() {
    let mut session = session();
    session.resolve_symbol(&variable_symbol(FIRST_USER_ID)).unwrap();
    // Cached as a variable; the type record says class
    let result = session.build_type(&class_type(FIRST_USER_ID));
    assert!(matches!(result, Err(DecodeError::SymbolKindMismatch { .. })));
}

#[test]
fn test_unset_type() {
    let mut session = session();
    assert!(matches!(
        session.build_type(&TypeRecord::NotSet),
        Err(DecodeError::UnsupportedVariant { record: "type", .. })
    ));
    assert!(matches!(
        session.build_type(&simple_type(INT, false, vec![TypeArgumentRecord::NotSet])),
        Err(DecodeError::UnsupportedVariant {
            record: "type argument",
            ..
        })
    ));
}
