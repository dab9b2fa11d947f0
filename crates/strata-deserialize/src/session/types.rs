use super::DecodeSession;
use crate::error::{DecodeError, DecodeResult};
use crate::record::{
    CallRecord, SimpleTypeRecord, TypeArgumentRecord, TypeBaseRecord, TypeRecord, VarianceRecord,
};
use strata_ir::stack;
use strata_ir::{
    Expression, ExpressionKind, SimpleType, SourceRange, SpecialType, SymbolKind, Type,
    TypeArgument, Variance,
};
use tracing::trace;

impl DecodeSession {
    pub fn build_type(&mut self, record: &TypeRecord) -> DecodeResult<Type> {
        stack::grow(|| -> DecodeResult<Type> {
            let ty = match record {
                TypeRecord::NotSet => return Err(DecodeError::not_set("type")),
                TypeRecord::Simple(simple) => Type::Simple(self.build_simple_type(simple)?),
                TypeRecord::Dynamic(base) => Type::Dynamic(self.build_special_type(base)?),
                TypeRecord::Error(base) => Type::Error(self.build_special_type(base)?),
            };
            trace!(ty = %ty, "decoded type");
            Ok(ty)
        })
    }

    pub(crate) fn build_types(&mut self, records: &[TypeRecord]) -> DecodeResult<Vec<Type>> {
        records.iter().map(|record| self.build_type(record)).collect()
    }

    fn build_simple_type(&mut self, record: &SimpleTypeRecord) -> DecodeResult<SimpleType> {
        let arguments = record
            .arguments
            .iter()
            .map(|argument| self.build_type_argument(argument))
            .collect::<DecodeResult<Vec<_>>>()?;
        let annotations = self.build_annotations(&record.base.annotations)?;
        let classifier = self.resolve_symbol(&record.classifier)?;
        self.require_kind(&classifier, "classifier", SymbolKind::is_classifier)?;

        Ok(SimpleType {
            classifier,
            nullable: record.has_question_mark,
            arguments,
            annotations,
        })
    }

    fn build_special_type(&mut self, record: &TypeBaseRecord) -> DecodeResult<SpecialType> {
        Ok(SpecialType {
            annotations: self.build_annotations(&record.annotations)?,
            variance: variance(record.variance),
        })
    }

    fn build_type_argument(&mut self, record: &TypeArgumentRecord) -> DecodeResult<TypeArgument> {
        stack::grow(|| -> DecodeResult<TypeArgument> {
            match record {
                TypeArgumentRecord::NotSet => Err(DecodeError::not_set("type argument")),
                TypeArgumentRecord::Star => Ok(TypeArgument::Star),
                TypeArgumentRecord::Type(projection) => Ok(TypeArgument::Projection {
                    ty: self.build_type(&projection.ty)?,
                    variance: variance(projection.variance),
                }),
            }
        })
    }

    /// Annotations are unit-typed calls without a source position
    pub(crate) fn build_annotations(
        &mut self,
        records: &[CallRecord],
    ) -> DecodeResult<Vec<Expression>> {
        let unit = self.builtins.unit_type().clone();
        records
            .iter()
            .map(|record| {
                self.build_call(record).map(|call| {
                    Expression::new(SourceRange::zero(), unit.clone(), ExpressionKind::Call(call))
                })
            })
            .collect()
    }
}

pub(crate) fn variance(record: VarianceRecord) -> Variance {
    match record {
        VarianceRecord::In => Variance::In,
        VarianceRecord::Out => Variance::Out,
        VarianceRecord::Invariant => Variance::Invariant,
    }
}
