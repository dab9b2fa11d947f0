use super::{source_range, DecodeSession};
use crate::error::{DecodeError, DecodeResult};
use crate::record::{
    BlockBodyRecord, BranchRecord, CatchRecord, StatementKindRecord, StatementRecord,
    SyntheticBodyKindRecord, SyntheticBodyRecord,
};
use strata_ir::{
    BlockBody, Body, Branch, Catch, DeclarationKind, SourceRange, Statement, SyntheticBody,
    SyntheticBodyKind,
};
use tracing::trace;

impl DecodeSession {
    pub fn build_statement(&mut self, record: &StatementRecord) -> DecodeResult<Statement> {
        self.descend(|session| {
            let range = source_range(&record.coordinates);
            let statement = match &record.statement {
                StatementKindRecord::NotSet => return Err(DecodeError::not_set("statement")),
                StatementKindRecord::BlockBody(body) => {
                    Statement::BlockBody(session.build_block_body(body, range)?)
                }
                StatementKindRecord::Branch(branch) => {
                    Statement::Branch(session.build_branch(branch, range)?)
                }
                StatementKindRecord::Catch(catch) => {
                    Statement::Catch(session.build_catch(catch, range)?)
                }
                // Local declarations get no parent
                StatementKindRecord::Declaration(declaration) => {
                    Statement::Declaration(session.build_declaration(declaration, None)?)
                }
                StatementKindRecord::Expression(expression) => {
                    Statement::Expression(session.build_expression(expression)?)
                }
                StatementKindRecord::SyntheticBody(body) => {
                    Statement::SyntheticBody(build_synthetic_body(body, range))
                }
            };
            trace!(statement = statement.name(), range = %range, "decoded statement");
            Ok(statement)
        })
    }

    pub(crate) fn build_statements(
        &mut self,
        records: &[StatementRecord],
    ) -> DecodeResult<Vec<Statement>> {
        records
            .iter()
            .map(|record| self.build_statement(record))
            .collect()
    }

    pub(crate) fn build_block_body(
        &mut self,
        record: &BlockBodyRecord,
        range: SourceRange,
    ) -> DecodeResult<BlockBody> {
        Ok(BlockBody {
            range,
            statements: self.build_statements(&record.statements)?,
        })
    }

    /// Function body: a block body or a synthetic body statement
    pub(crate) fn build_body(&mut self, record: &StatementRecord) -> DecodeResult<Body> {
        let range = source_range(&record.coordinates);
        match &record.statement {
            StatementKindRecord::BlockBody(body) => self
                .descend(|session| session.build_block_body(body, range))
                .map(Body::Block),
            StatementKindRecord::SyntheticBody(body) => {
                Ok(Body::Synthetic(build_synthetic_body(body, range)))
            }
            other => Err(DecodeError::unsupported("body", other.name())),
        }
    }

    /// A `when` branch; any other statement kind is rejected
    pub(crate) fn build_expected_branch(
        &mut self,
        record: &StatementRecord,
    ) -> DecodeResult<Branch> {
        match &record.statement {
            StatementKindRecord::Branch(branch) => {
                let range = source_range(&record.coordinates);
                self.descend(|session| session.build_branch(branch, range))
            }
            other => Err(DecodeError::unsupported("when branch", other.name())),
        }
    }

    /// A `catch` clause; any other statement kind is rejected
    pub(crate) fn build_expected_catch(&mut self, record: &StatementRecord) -> DecodeResult<Catch> {
        match &record.statement {
            StatementKindRecord::Catch(catch) => {
                let range = source_range(&record.coordinates);
                self.descend(|session| session.build_catch(catch, range))
            }
            other => Err(DecodeError::unsupported("try catch", other.name())),
        }
    }

    fn build_branch(&mut self, record: &BranchRecord, range: SourceRange) -> DecodeResult<Branch> {
        let condition = self.build_expression(&record.condition)?;
        let result = self.build_expression(&record.result)?;
        Ok(Branch {
            range,
            condition,
            result,
        })
    }

    fn build_catch(&mut self, record: &CatchRecord, range: SourceRange) -> DecodeResult<Catch> {
        let parameter = self.build_declaration(&record.catch_parameter, None)?;
        if !matches!(parameter.kind, DeclarationKind::Variable(_)) {
            return Err(DecodeError::unsupported("catch parameter", parameter.kind_name()));
        }
        let result = self.build_expression(&record.result)?;
        Ok(Catch {
            range,
            parameter,
            result,
        })
    }
}

fn build_synthetic_body(record: &SyntheticBodyRecord, range: SourceRange) -> SyntheticBody {
    let kind = match record.kind {
        SyntheticBodyKindRecord::EnumValues => SyntheticBodyKind::EnumValues,
        SyntheticBodyKindRecord::EnumValueOf => SyntheticBodyKind::EnumValueOf,
    };
    SyntheticBody { range, kind }
}
