use std::{
    any::Any,
    slice::{Iter, IterMut},
};

use crate::Span;

use super::ast::{Expr, ExprWrapper, Stmt, StmtType, StmtWrapper};

/// The root of a parsed source unit: an ordered sequence of statements.
///
/// A Program is produced together with the list of diagnostics collected
/// while parsing. It may be partial when the diagnostic list is non-empty.
#[derive(Debug, Clone)]
pub struct Program {
    pub statements: Vec<StmtWrapper>,
    pub span: Span,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.statements.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, StmtWrapper> {
        self.statements.iter_mut()
    }
}

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<StmtWrapper>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.body.iter()
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug)]
pub struct ExpressionStmt {
    pub expression: ExprWrapper,
    pub span: Span,
}

impl Stmt for ExpressionStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ExpressionStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        self.expression.into_cloned_stmt_wrapper()
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug)]
pub struct LetStmt {
    pub identifier: String,
    pub value: ExprWrapper,
    pub span: Span,
}

impl Stmt for LetStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::LetStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(LetStmt {
            identifier: self.identifier.clone(),
            value: self.value.clone_wrapper(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

#[derive(Debug)]
pub struct ReturnStmt {
    pub value: Option<ExprWrapper>,
    pub span: Span,
}

impl Stmt for ReturnStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::ReturnStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(ReturnStmt {
            value: self.value.as_ref().map(|value| value.clone_wrapper()),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
