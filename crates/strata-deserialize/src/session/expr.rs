//! Expression building
//!
//! Every expression decodes its own type first, then its operation. A few
//! operations ignore that type: `return` and `throw` are always typed as the
//! bottom type, field/variable writes and constructor delegation as unit.

use super::{source_range, DecodeSession};
use crate::error::{DecodeError, DecodeResult};
use crate::record::{
    CallRecord, ConstRecord, ConstructorCallRecord, ExpressionRecord, FieldAccessRecord,
    LoopJumpRecord, LoopRecord, MemberAccessRecord, OperationRecord, PrimitiveRecord,
    PropertyReferenceRecord, SymbolRecord, TypeOpRecord, TypeOperatorRecord, VarargElementRecord,
};
use strata_ir::{
    Call, CallForm, Constant, Expression, ExpressionKind, FieldAccess, Loop, LoopContents, LoopId,
    LoopJump, LoopKind, MemberAccess, SourceRange, SpreadElement, SymbolKind, SymbolRef, Type,
    TypeOperator, VarargElement,
};
use tracing::trace;

impl DecodeSession {
    pub fn build_expression(&mut self, record: &ExpressionRecord) -> DecodeResult<Expression> {
        self.descend(|session| {
            let range = source_range(&record.coordinates);
            let ty = session.build_type(&record.ty)?;
            let expression = session.build_operation(&record.operation, range, ty)?;
            trace!(range = %range, ty = %expression.ty, "decoded expression");
            Ok(expression)
        })
    }

    pub(crate) fn build_expressions(
        &mut self,
        records: &[ExpressionRecord],
    ) -> DecodeResult<Vec<Expression>> {
        records
            .iter()
            .map(|record| self.build_expression(record))
            .collect()
    }

    fn build_boxed(
        &mut self,
        record: Option<&ExpressionRecord>,
    ) -> DecodeResult<Option<Box<Expression>>> {
        record
            .map(|record| self.build_expression(record).map(Box::new))
            .transpose()
    }

    fn build_operation(
        &mut self,
        record: &OperationRecord,
        range: SourceRange,
        ty: Type,
    ) -> DecodeResult<Expression> {
        let (ty, kind) = match record {
            OperationRecord::NotSet => return Err(DecodeError::not_set("operation")),
            OperationRecord::Block(block) => (
                ty,
                ExpressionKind::Block {
                    statements: self.build_statements(&block.statements)?,
                    is_lambda: block.is_lambda_origin,
                },
            ),
            OperationRecord::Break(jump) => (ty, ExpressionKind::Break(self.build_jump(jump)?)),
            OperationRecord::Call(call) => (ty, ExpressionKind::Call(self.build_call(call)?)),
            OperationRecord::ClassReference(reference) => {
                let symbol = self.resolve_symbol(&reference.class_symbol)?;
                self.require_kind(&symbol, "classifier", SymbolKind::is_classifier)?;
                let class_type = self.build_type(&reference.class_type)?;
                (ty, ExpressionKind::ClassReference { symbol, class_type })
            }
            OperationRecord::Composite(composite) => (
                ty,
                ExpressionKind::Composite {
                    statements: self.build_statements(&composite.statements)?,
                },
            ),
            OperationRecord::Const(constant) => {
                (ty, ExpressionKind::Const(build_constant(constant)?))
            }
            OperationRecord::Continue(jump) => {
                (ty, ExpressionKind::Continue(self.build_jump(jump)?))
            }
            OperationRecord::DelegatingConstructorCall(call) => {
                let (symbol, access) = self.build_constructor_call(call)?;
                let unit = self.builtins.unit_type().clone();
                (unit, ExpressionKind::DelegatingConstructorCall { symbol, access })
            }
            OperationRecord::DoWhile(record) => {
                return self.build_loop(LoopKind::DoWhile, record, range, ty)
            }
            OperationRecord::EnumConstructorCall(call) => {
                let (symbol, access) = self.build_constructor_call(call)?;
                let unit = self.builtins.unit_type().clone();
                (unit, ExpressionKind::EnumConstructorCall { symbol, access })
            }
            OperationRecord::FunctionReference(reference) => {
                let symbol = self.resolve_symbol(&reference.symbol)?;
                self.require_kind(&symbol, "function", SymbolKind::is_function_like)?;
                let type_arguments = self.build_types(&reference.type_arguments)?;
                (ty, ExpressionKind::FunctionReference { symbol, type_arguments })
            }
            OperationRecord::GetClass(get) => (
                ty,
                ExpressionKind::GetClass {
                    argument: Box::new(self.build_expression(&get.argument)?),
                },
            ),
            OperationRecord::GetEnumValue(get) => {
                let ty = self.build_type(&get.ty)?;
                let symbol = self.resolve_symbol(&get.symbol)?;
                self.require_kind(&symbol, "enum entry", |kind| kind == SymbolKind::EnumEntry)?;
                (ty, ExpressionKind::GetEnumValue { symbol })
            }
            OperationRecord::GetField(get) => {
                let symbol = self.resolve_field_symbol(&get.field_access)?;
                let ty = self.build_type(&get.ty)?;
                let access = self.build_field_access(symbol, &get.field_access)?;
                (ty, ExpressionKind::GetField(access))
            }
            OperationRecord::GetObject(get) => {
                let symbol = self.resolve_symbol(&get.symbol)?;
                self.require_kind(&symbol, "class", |kind| kind == SymbolKind::Class)?;
                (ty, ExpressionKind::GetObject { symbol })
            }
            OperationRecord::GetValue(get) => {
                let symbol = self.resolve_symbol(&get.symbol)?;
                self.require_kind(&symbol, "value", SymbolKind::is_value)?;
                let ty = self.build_type(&get.ty)?;
                (ty, ExpressionKind::GetValue { symbol })
            }
            OperationRecord::InstanceInitializerCall(call) => {
                let class_symbol = self.resolve_symbol(&call.symbol)?;
                self.require_kind(&class_symbol, "class", |kind| kind == SymbolKind::Class)?;
                let unit = self.builtins.unit_type().clone();
                (unit, ExpressionKind::InstanceInitializerCall { class_symbol })
            }
            OperationRecord::PropertyReference(reference) => {
                (ty, self.build_property_reference(reference)?)
            }
            OperationRecord::Return(ret) => {
                let target = self.resolve_symbol(&ret.return_target)?;
                self.require_kind(&target, "return target", SymbolKind::is_function_like)?;
                let value = Box::new(self.build_expression(&ret.value)?);
                (self.builtins.nothing_type().clone(), ExpressionKind::Return { target, value })
            }
            OperationRecord::SetField(set) => {
                let symbol = self.resolve_field_symbol(&set.field_access)?;
                let access = self.build_field_access(symbol, &set.field_access)?;
                let value = Box::new(self.build_expression(&set.value)?);
                (self.builtins.unit_type().clone(), ExpressionKind::SetField { access, value })
            }
            OperationRecord::SetVariable(set) => {
                let symbol = self.resolve_symbol(&set.symbol)?;
                self.require_kind(&symbol, "variable", |kind| kind == SymbolKind::Variable)?;
                let value = Box::new(self.build_expression(&set.value)?);
                (self.builtins.unit_type().clone(), ExpressionKind::SetVariable { symbol, value })
            }
            OperationRecord::StringConcat(concat) => (
                ty,
                ExpressionKind::StringConcat {
                    arguments: self.build_expressions(&concat.arguments)?,
                },
            ),
            OperationRecord::Throw(throw) => {
                let value = Box::new(self.build_expression(&throw.value)?);
                (
                    self.builtins.nothing_type().clone(),
                    ExpressionKind::Throw { value },
                )
            }
            OperationRecord::Try(record) => {
                let result = Box::new(self.build_expression(&record.result)?);
                let catches = record
                    .catches
                    .iter()
                    .map(|catch| self.build_expected_catch(catch))
                    .collect::<DecodeResult<Vec<_>>>()?;
                let finally = self.build_boxed(record.finally.as_deref())?;
                (
                    ty,
                    ExpressionKind::Try {
                        result,
                        catches,
                        finally,
                    },
                )
            }
            OperationRecord::TypeOp(op) => (ty, self.build_type_operator(op)?),
            OperationRecord::Vararg(vararg) => {
                let element_type = self.build_type(&vararg.element_type)?;
                let elements = vararg
                    .elements
                    .iter()
                    .map(|element| self.build_vararg_element(element))
                    .collect::<DecodeResult<Vec<_>>>()?;
                (ty, ExpressionKind::Vararg { element_type, elements })
            }
            OperationRecord::When(when) => {
                let branches = when
                    .branches
                    .iter()
                    .map(|branch| self.build_expected_branch(branch))
                    .collect::<DecodeResult<Vec<_>>>()?;
                (ty, ExpressionKind::When { branches })
            }
            OperationRecord::While(record) => {
                return self.build_loop(LoopKind::While, record, range, ty)
            }
        };

        Ok(Expression::new(range, ty, kind))
    }

    pub(crate) fn build_call(&mut self, record: &CallRecord) -> DecodeResult<Call> {
        let symbol = self.resolve_symbol(&record.symbol)?;
        self.require_kind(&symbol, "function", SymbolKind::is_function_like)?;
        let super_qualifier = self.resolve_super_qualifier(record.super_symbol.as_ref())?;
        let form = match record.kind {
            PrimitiveRecord::NotPrimitive => CallForm::Ordinary,
            PrimitiveRecord::Nullary => CallForm::Nullary,
            PrimitiveRecord::Unary => CallForm::Unary,
            PrimitiveRecord::Binary => CallForm::Binary,
        };
        let access = self.build_member_access(&record.member_access)?;

        Ok(Call {
            symbol,
            super_qualifier,
            form,
            access,
        })
    }

    /// Argument and type-argument counts come from the list lengths
    fn build_member_access(&mut self, record: &MemberAccessRecord) -> DecodeResult<MemberAccess> {
        let value_arguments = record
            .value_arguments
            .iter()
            .map(|argument| {
                argument
                    .as_ref()
                    .map(|argument| self.build_expression(argument))
                    .transpose()
            })
            .collect::<DecodeResult<Vec<_>>>()?;
        let type_arguments = self.build_types(&record.type_arguments)?;
        let dispatch_receiver = self.build_boxed(record.dispatch_receiver.as_deref())?;
        let extension_receiver = self.build_boxed(record.extension_receiver.as_deref())?;

        Ok(MemberAccess {
            dispatch_receiver,
            extension_receiver,
            value_arguments,
            type_arguments,
        })
    }

    fn build_constructor_call(
        &mut self,
        record: &ConstructorCallRecord,
    ) -> DecodeResult<(SymbolRef, MemberAccess)> {
        let symbol = self.resolve_symbol(&record.symbol)?;
        self.require_kind(&symbol, "constructor", |kind| kind == SymbolKind::Constructor)?;
        let access = self.build_member_access(&record.member_access)?;
        Ok((symbol, access))
    }

    fn resolve_super_qualifier(
        &mut self,
        record: Option<&SymbolRecord>,
    ) -> DecodeResult<Option<SymbolRef>> {
        let Some(record) = record else {
            return Ok(None);
        };
        let symbol = self.resolve_symbol(record)?;
        self.require_kind(&symbol, "super class", |kind| kind == SymbolKind::Class)?;
        Ok(Some(symbol))
    }

    fn resolve_field_symbol(&mut self, record: &FieldAccessRecord) -> DecodeResult<SymbolRef> {
        let symbol = self.resolve_symbol(&record.symbol)?;
        self.require_kind(&symbol, "field", |kind| kind == SymbolKind::Field)?;
        Ok(symbol)
    }

    fn build_field_access(
        &mut self,
        symbol: SymbolRef,
        record: &FieldAccessRecord,
    ) -> DecodeResult<FieldAccess> {
        let super_qualifier = self.resolve_super_qualifier(record.super_symbol.as_ref())?;
        let receiver = self.build_boxed(record.receiver.as_deref())?;
        Ok(FieldAccess {
            symbol,
            super_qualifier,
            receiver,
        })
    }

    fn build_property_reference(
        &mut self,
        record: &PropertyReferenceRecord,
    ) -> DecodeResult<ExpressionKind> {
        let field = match &record.field {
            Some(field) => Some(self.resolve_symbol(field)?),
            None => None,
        };
        if let Some(field) = &field {
            self.require_kind(field, "field", |kind| kind == SymbolKind::Field)?;
        }
        let getter = self.resolve_accessor(record.getter.as_ref())?;
        let setter = self.resolve_accessor(record.setter.as_ref())?;
        let type_arguments = self.build_types(&record.type_arguments)?;

        Ok(ExpressionKind::PropertyReference {
            descriptor: self.builtins.placeholders().property().clone(),
            field,
            getter,
            setter,
            type_arguments,
        })
    }

    fn resolve_accessor(
        &mut self,
        record: Option<&SymbolRecord>,
    ) -> DecodeResult<Option<SymbolRef>> {
        let Some(record) = record else {
            return Ok(None);
        };
        let symbol = self.resolve_symbol(record)?;
        self.require_kind(&symbol, "accessor", |kind| kind == SymbolKind::Function)?;
        Ok(Some(symbol))
    }

    fn build_type_operator(&mut self, record: &TypeOpRecord) -> DecodeResult<ExpressionKind> {
        let operator = match record.operator {
            TypeOperatorRecord::Cast => TypeOperator::Cast,
            TypeOperatorRecord::ImplicitCast => TypeOperator::ImplicitCast,
            TypeOperatorRecord::ImplicitNotNull => TypeOperator::ImplicitNotNull,
            TypeOperatorRecord::ImplicitCoercionToUnit => TypeOperator::ImplicitCoercionToUnit,
            TypeOperatorRecord::ImplicitIntegerCoercion => TypeOperator::ImplicitIntegerCoercion,
            TypeOperatorRecord::SafeCast => TypeOperator::SafeCast,
            TypeOperatorRecord::InstanceOf => TypeOperator::InstanceOf,
            TypeOperatorRecord::NotInstanceOf => TypeOperator::NotInstanceOf,
        };
        let operand = self.build_type(&record.operand)?;
        let operand_classifier = match operand.classifier() {
            Some(classifier) => classifier.clone(),
            None => {
                return Err(DecodeError::unsupported(
                    "type operand",
                    format!("{} (no classifier)", operand),
                ))
            }
        };
        let argument = Box::new(self.build_expression(&record.argument)?);

        Ok(ExpressionKind::TypeOperator {
            operator,
            operand,
            operand_classifier,
            argument,
        })
    }

    fn build_vararg_element(
        &mut self,
        record: &VarargElementRecord,
    ) -> DecodeResult<VarargElement> {
        match record {
            VarargElementRecord::NotSet => Err(DecodeError::not_set("vararg element")),
            VarargElementRecord::Expression(expression) => {
                Ok(VarargElement::Expression(self.build_expression(expression)?))
            }
            VarargElementRecord::SpreadElement(spread) => Ok(VarargElement::Spread(SpreadElement {
                range: source_range(&spread.coordinates),
                expression: self.build_expression(&spread.expression)?,
            })),
        }
    }

    fn build_jump(&mut self, record: &LoopJumpRecord) -> DecodeResult<LoopJump> {
        let target = self.loops.lookup(LoopId(record.loop_id))?;
        Ok(LoopJump::new(&target, record.label.clone()))
    }

    /// Allocate and register the loop shell before decoding its body, so jumps
    /// inside the body can find it, then fill it in.
    fn build_loop(
        &mut self,
        kind: LoopKind,
        record: &LoopRecord,
        range: SourceRange,
        ty: Type,
    ) -> DecodeResult<Expression> {
        let id = LoopId(record.loop_id);
        let node = Loop::allocate(id, kind, range, ty.clone());
        self.loops.register(id, node.clone());

        let label = record.label.clone();
        let body = match &record.body {
            Some(body) => Some(self.build_expression(body)?),
            None => None,
        };
        let condition = self.build_expression(&record.condition)?;
        node.populate(LoopContents {
            label,
            condition,
            body,
        });

        let kind = match kind {
            LoopKind::While => ExpressionKind::While(node),
            LoopKind::DoWhile => ExpressionKind::DoWhile(node),
        };
        Ok(Expression::new(range, ty, kind))
    }
}

fn build_constant(record: &ConstRecord) -> DecodeResult<Constant> {
    Ok(match record {
        ConstRecord::NotSet => return Err(DecodeError::MalformedConstant),
        ConstRecord::Null => Constant::Null,
        ConstRecord::Boolean(value) => Constant::Boolean(*value),
        ConstRecord::Byte(value) => Constant::Byte(*value as i8),
        ConstRecord::Char(value) => Constant::Char(*value as u16),
        ConstRecord::Short(value) => Constant::Short(*value as i16),
        ConstRecord::Int(value) => Constant::Int(*value),
        ConstRecord::Long(value) => Constant::Long(*value),
        ConstRecord::String(value) => Constant::String(value.clone()),
        ConstRecord::Float(value) => Constant::Float(*value),
        ConstRecord::Double(value) => Constant::Double(*value),
    })
}
