//! Declaration building
//!
//! Declarations are allocated with `Rc::new_cyclic` so that children built
//! inside them (class members, accessors, backing fields, enum entry bodies)
//! can hold a weak link to the declaration under construction.

use super::{source_range, types::variance, DecodeSession};
use crate::error::{DecodeError, DecodeResult};
use crate::record::{
    AnonymousInitRecord, ClassKindRecord, ClassRecord, ConstructorRecord, DeclarationRecord,
    DeclaratorRecord, EnumEntryRecord, FieldRecord, FunctionBaseRecord, FunctionRecord,
    ModalityRecord, PropertyRecord, TypeParameterRecord, ValueParameterRecord, VariableRecord,
};
use std::rc::{Rc, Weak};
use strata_ir::{
    AnonymousInitializer, Class, ClassKind, Constructor, Declaration, DeclarationKind,
    DeclarationOrigin, DeclarationParent, DeclarationRef, EnumEntry, ErrorDeclaration, Expression,
    Field, Function, FunctionSignature, Modality, Property, SourceRange, SymbolKind, TypeParameter,
    ValueParameter, Variable, Visibility,
};
use tracing::debug;

impl DecodeSession {
    /// Build a declaration and register it under its backing descriptor.
    ///
    /// `parent` is `None` for local declarations (statements, catch parameters).
    pub fn build_declaration(
        &mut self,
        record: &DeclarationRecord,
        parent: Option<DeclarationParent>,
    ) -> DecodeResult<DeclarationRef> {
        self.descend(|session| {
            let range = source_range(&record.coordinates);
            let origin = DeclarationOrigin::from_name(&record.origin.name)
                .ok_or_else(|| DecodeError::UnknownOrigin(record.origin.name.clone()))?;
            let placeholder = session.builtins.placeholders().class().clone();

            let mut failure = None;
            let declaration = Rc::new_cyclic(|this| {
                match session.build_parts(record, range, origin, this) {
                    Ok((kind, annotations)) => Declaration {
                        range,
                        origin,
                        parent,
                        annotations,
                        kind,
                    },
                    Err(error) => {
                        failure = Some(error);
                        Declaration {
                            range,
                            origin,
                            parent,
                            annotations: Vec::new(),
                            kind: DeclarationKind::Error(ErrorDeclaration {
                                descriptor: placeholder,
                            }),
                        }
                    }
                }
            });
            if let Some(error) = failure {
                return Err(error);
            }

            session.register_declaration(&declaration)?;
            debug!(declaration = %declaration, "decoded declaration");
            Ok(declaration)
        })
    }

    /// The declarator, then the annotations attached to it
    fn build_parts(
        &mut self,
        record: &DeclarationRecord,
        range: SourceRange,
        origin: DeclarationOrigin,
        this: &Weak<Declaration>,
    ) -> DecodeResult<(DeclarationKind, Vec<Expression>)> {
        let kind = self.build_declarator(&record.declarator, range, origin, this)?;
        let annotations = self.build_annotations(&record.annotations)?;
        Ok((kind, annotations))
    }

    fn build_declarator(
        &mut self,
        record: &DeclaratorRecord,
        range: SourceRange,
        origin: DeclarationOrigin,
        this: &Weak<Declaration>,
    ) -> DecodeResult<DeclarationKind> {
        match record {
            DeclaratorRecord::NotSet => Err(DecodeError::not_set("declarator")),
            DeclaratorRecord::AnonymousInit(init) => self
                .build_anonymous_initializer(init, range)
                .map(DeclarationKind::AnonymousInitializer),
            DeclaratorRecord::Class(class) => self
                .build_class(class, range, origin, this)
                .map(DeclarationKind::Class),
            DeclaratorRecord::Constructor(constructor) => self
                .build_constructor(constructor, range, origin)
                .map(DeclarationKind::Constructor),
            DeclaratorRecord::EnumEntry(entry) => self
                .build_enum_entry(entry, this)
                .map(DeclarationKind::EnumEntry),
            DeclaratorRecord::Field(field) => self.build_field(field).map(DeclarationKind::Field),
            DeclaratorRecord::Function(function) => self
                .build_function(function, range, origin, None)
                .map(DeclarationKind::Function),
            DeclaratorRecord::Property(property) => self
                .build_property(property, range, origin, this)
                .map(DeclarationKind::Property),
            // Type aliases have no IR node yet
            DeclaratorRecord::TypeAlias => Ok(DeclarationKind::Error(ErrorDeclaration {
                descriptor: self.builtins.placeholders().class().clone(),
            })),
            DeclaratorRecord::Variable(variable) => {
                self.build_variable(variable).map(DeclarationKind::Variable)
            }
        }
    }

    fn build_class(
        &mut self,
        record: &ClassRecord,
        range: SourceRange,
        origin: DeclarationOrigin,
        this: &Weak<Declaration>,
    ) -> DecodeResult<Class> {
        let symbol = self.resolve_symbol(&record.symbol)?;
        self.require_kind(&symbol, "class", |kind| kind == SymbolKind::Class)?;

        let mut members = Vec::with_capacity(record.declarations.len());
        for member in &record.declarations {
            let parent = DeclarationParent::Declaration(this.clone());
            members.push(self.build_declaration(member, Some(parent))?);
        }

        let this_receiver =
            self.build_optional_parameter(record.this_receiver.as_ref(), range, origin)?;
        let type_parameters = self.build_type_parameters(&record.type_parameters, range, origin)?;
        let super_types = self.build_types(&record.super_types)?;

        Ok(Class {
            symbol,
            name: record.name.clone(),
            kind: class_kind(record.kind),
            visibility: Visibility::from_name(&record.visibility),
            modality: modality(record.modality),
            is_companion: record.is_companion,
            is_inner: record.is_inner,
            is_data: record.is_data,
            is_external: record.is_external,
            is_inline: record.is_inline,
            members,
            this_receiver,
            type_parameters,
            super_types,
        })
    }

    fn build_signature(
        &mut self,
        record: &FunctionBaseRecord,
        range: SourceRange,
        origin: DeclarationOrigin,
    ) -> DecodeResult<FunctionSignature> {
        let return_type = self.build_type(&record.return_type)?;
        let body = match &record.body {
            Some(body) => Some(self.build_body(body)?),
            None => None,
        };
        let value_parameters = record
            .value_parameters
            .iter()
            .map(|parameter| self.build_value_parameter(parameter, range, origin))
            .collect::<DecodeResult<Vec<_>>>()?;
        let dispatch_receiver =
            self.build_optional_parameter(record.dispatch_receiver.as_ref(), range, origin)?;
        let extension_receiver =
            self.build_optional_parameter(record.extension_receiver.as_ref(), range, origin)?;
        let type_parameters = self.build_type_parameters(&record.type_parameters, range, origin)?;

        Ok(FunctionSignature {
            return_type: Some(return_type),
            body,
            value_parameters,
            dispatch_receiver,
            extension_receiver,
            type_parameters,
        })
    }

    fn build_function(
        &mut self,
        record: &FunctionRecord,
        range: SourceRange,
        origin: DeclarationOrigin,
        property: Option<&Weak<Declaration>>,
    ) -> DecodeResult<Function> {
        let symbol = self.resolve_symbol(&record.symbol)?;
        self.require_kind(&symbol, "function", |kind| kind == SymbolKind::Function)?;
        let signature = self.build_signature(&record.base, range, origin)?;

        let mut overridden = Vec::with_capacity(record.overridden.len());
        for record in &record.overridden {
            let symbol = self.resolve_symbol(record)?;
            self.require_kind(&symbol, "function", |kind| kind == SymbolKind::Function)?;
            overridden.push(symbol);
        }

        Ok(Function {
            symbol,
            name: record.base.name.clone(),
            visibility: Visibility::from_name(&record.base.visibility),
            modality: modality(record.modality),
            is_inline: record.base.is_inline,
            is_external: record.base.is_external,
            is_tailrec: record.is_tailrec,
            is_suspend: record.is_suspend,
            signature,
            overridden,
            corresponding_property: property.cloned(),
        })
    }

    fn build_constructor(
        &mut self,
        record: &ConstructorRecord,
        range: SourceRange,
        origin: DeclarationOrigin,
    ) -> DecodeResult<Constructor> {
        let symbol = self.resolve_symbol(&record.symbol)?;
        self.require_kind(&symbol, "constructor", |kind| kind == SymbolKind::Constructor)?;
        let signature = self.build_signature(&record.base, range, origin)?;

        Ok(Constructor {
            symbol,
            name: record.base.name.clone(),
            visibility: Visibility::from_name(&record.base.visibility),
            is_inline: record.base.is_inline,
            is_external: record.base.is_external,
            is_primary: record.is_primary,
            signature,
        })
    }

    fn build_field(&mut self, record: &FieldRecord) -> DecodeResult<Field> {
        let symbol = self.resolve_symbol(&record.symbol)?;
        self.require_kind(&symbol, "field", |kind| kind == SymbolKind::Field)?;
        let ty = self.build_type(&record.ty)?;
        let initializer = match &record.initializer {
            Some(initializer) => Some(self.build_expression(initializer)?),
            None => None,
        };

        Ok(Field {
            symbol,
            name: record.name.clone(),
            ty,
            visibility: Visibility::from_name(&record.visibility),
            is_final: record.is_final,
            is_external: record.is_external,
            is_static: record.is_static,
            initializer,
        })
    }

    /// Backing field, then getter, then setter. The accessors are registered
    /// as soon as they exist; the property itself is placeholder-backed.
    fn build_property(
        &mut self,
        record: &PropertyRecord,
        range: SourceRange,
        origin: DeclarationOrigin,
        this: &Weak<Declaration>,
    ) -> DecodeResult<Property> {
        let backing_field = match &record.backing_field {
            Some(field) => {
                let field = self.build_field(field)?;
                Some(child(range, origin, this, DeclarationKind::Field(field)))
            }
            None => None,
        };
        let getter = self.build_accessor(record.getter.as_ref(), range, origin, this)?;
        let setter = self.build_accessor(record.setter.as_ref(), range, origin, this)?;

        Ok(Property {
            descriptor: self.builtins.placeholders().property().clone(),
            name: record.name.clone(),
            visibility: Visibility::from_name(&record.visibility),
            modality: modality(record.modality),
            is_var: record.is_var,
            is_const: record.is_const,
            is_lateinit: record.is_lateinit,
            is_delegated: record.is_delegated,
            is_external: record.is_external,
            backing_field,
            getter,
            setter,
        })
    }

    fn build_accessor(
        &mut self,
        record: Option<&FunctionRecord>,
        range: SourceRange,
        origin: DeclarationOrigin,
        property: &Weak<Declaration>,
    ) -> DecodeResult<Option<DeclarationRef>> {
        let Some(record) = record else {
            return Ok(None);
        };
        let function = self.build_function(record, range, origin, Some(property))?;
        let accessor = child(range, origin, property, DeclarationKind::Function(function));
        self.register_declaration(&accessor)?;
        Ok(Some(accessor))
    }

    fn build_variable(&mut self, record: &VariableRecord) -> DecodeResult<Variable> {
        let initializer = match &record.initializer {
            Some(initializer) => Some(self.build_expression(initializer)?),
            None => None,
        };
        let symbol = self.resolve_symbol(&record.symbol)?;
        self.require_kind(&symbol, "variable", |kind| kind == SymbolKind::Variable)?;
        let ty = self.build_type(&record.ty)?;

        Ok(Variable {
            symbol,
            name: record.name.clone(),
            ty,
            is_var: record.is_var,
            is_const: record.is_const,
            is_lateinit: record.is_lateinit,
            initializer,
        })
    }

    fn build_enum_entry(
        &mut self,
        record: &EnumEntryRecord,
        this: &Weak<Declaration>,
    ) -> DecodeResult<EnumEntry> {
        let symbol = self.resolve_symbol(&record.symbol)?;
        self.require_kind(&symbol, "enum entry", |kind| kind == SymbolKind::EnumEntry)?;

        let corresponding_class = match &record.corresponding_class {
            Some(class) => {
                let parent = DeclarationParent::Declaration(this.clone());
                let class = self.build_declaration(class, Some(parent))?;
                if class.as_class().is_none() {
                    return Err(DecodeError::unsupported("enum entry body", class.kind_name()));
                }
                Some(class)
            }
            None => None,
        };
        let initializer = match &record.initializer {
            Some(initializer) => Some(self.build_expression(initializer)?),
            None => None,
        };

        Ok(EnumEntry {
            symbol,
            name: record.name.clone(),
            corresponding_class,
            initializer,
        })
    }

    fn build_anonymous_initializer(
        &mut self,
        record: &AnonymousInitRecord,
        range: SourceRange,
    ) -> DecodeResult<AnonymousInitializer> {
        let symbol = self.resolve_symbol(&record.symbol)?;
        self.require_kind(&symbol, "anonymous initializer", |kind| {
            kind == SymbolKind::AnonymousInitializer
        })?;
        let body = self.build_block_body(&record.body, range)?;
        Ok(AnonymousInitializer { symbol, body })
    }

    fn build_value_parameter(
        &mut self,
        record: &ValueParameterRecord,
        range: SourceRange,
        origin: DeclarationOrigin,
    ) -> DecodeResult<ValueParameter> {
        let vararg_element_type = record
            .vararg_element_type
            .as_ref()
            .map(|ty| self.build_type(ty))
            .transpose()?;
        let symbol = self.resolve_symbol(&record.symbol)?;
        self.require_kind(&symbol, "value parameter", |kind| {
            kind == SymbolKind::ValueParameter
        })?;
        let ty = self.build_type(&record.ty)?;
        let default_value = record
            .default_value
            .as_ref()
            .map(|value| self.build_expression(value))
            .transpose()?;

        Ok(ValueParameter {
            range,
            origin,
            symbol,
            name: record.name.clone(),
            index: record.index,
            ty,
            vararg_element_type,
            is_crossinline: record.is_crossinline,
            is_noinline: record.is_noinline,
            default_value,
        })
    }

    fn build_optional_parameter(
        &mut self,
        record: Option<&ValueParameterRecord>,
        range: SourceRange,
        origin: DeclarationOrigin,
    ) -> DecodeResult<Option<ValueParameter>> {
        record
            .map(|record| self.build_value_parameter(record, range, origin))
            .transpose()
    }

    fn build_type_parameters(
        &mut self,
        records: &[TypeParameterRecord],
        range: SourceRange,
        origin: DeclarationOrigin,
    ) -> DecodeResult<Vec<TypeParameter>> {
        let mut parameters = Vec::with_capacity(records.len());
        for record in records {
            let symbol = self.resolve_symbol(&record.symbol)?;
            self.require_kind(&symbol, "type parameter", |kind| {
                kind == SymbolKind::TypeParameter
            })?;
            let super_types = self.build_types(&record.super_types)?;
            parameters.push(TypeParameter {
                range,
                origin,
                symbol,
                name: record.name.clone(),
                index: record.index,
                variance: variance(record.variance),
                super_types,
            });
        }
        Ok(parameters)
    }
}

/// Declaration owned by the one under construction, sharing its range and origin
fn child(
    range: SourceRange,
    origin: DeclarationOrigin,
    parent: &Weak<Declaration>,
    kind: DeclarationKind,
) -> DeclarationRef {
    Rc::new(Declaration {
        range,
        origin,
        parent: Some(DeclarationParent::Declaration(parent.clone())),
        annotations: Vec::new(),
        kind,
    })
}

fn class_kind(record: ClassKindRecord) -> ClassKind {
    match record {
        ClassKindRecord::Class => ClassKind::Class,
        ClassKindRecord::Interface => ClassKind::Interface,
        ClassKindRecord::EnumClass => ClassKind::EnumClass,
        ClassKindRecord::EnumEntry => ClassKind::EnumEntry,
        ClassKindRecord::AnnotationClass => ClassKind::AnnotationClass,
        ClassKindRecord::Object => ClassKind::Object,
    }
}

fn modality(record: ModalityRecord) -> Modality {
    match record {
        ModalityRecord::Final => Modality::Final,
        ModalityRecord::Sealed => Modality::Sealed,
        ModalityRecord::Open => Modality::Open,
        ModalityRecord::Abstract => Modality::Abstract,
    }
}
