use std::{any::Any, fmt::Debug, ops::Deref};

use super::statements::ExpressionStmt;

/// Statement Types
#[derive(PartialEq, Debug)]
pub enum StmtType {
    ExpressionStmt,
    BlockStmt,
    LetStmt,
    ReturnStmt,
}

/// Statement Trait
///
/// Defines the behavior of all statement types in the AST.
pub trait Stmt: Debug {
    /// Returns the type of the statement.
    fn get_stmt_type(&self) -> StmtType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the statement into a StmtWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> StmtWrapper;
    /// Returns the span of the statement.
    fn get_span(&self) -> &crate::Span;
}

/// Statement Wrapper
///
/// A wrapper that allows for any statement kind to be stored with helper methods
#[derive(Debug)]
pub struct StmtWrapper(Box<dyn Stmt>);

impl StmtWrapper {
    pub fn new<T: Stmt + 'static>(stmt: T) -> Self {
        StmtWrapper(Box::new(stmt))
    }
}

impl Deref for StmtWrapper {
    type Target = Box<dyn Stmt>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Stmt for StmtWrapper {
    fn get_stmt_type(&self) -> StmtType {
        self.0.get_stmt_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &crate::Span {
        self.0.get_span()
    }
}

impl Clone for StmtWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Clone, Debug)]
pub enum ExprType {
    Number,
    Boolean,
    Symbol,
    Binary,
    Prefix,
    If,
    Function,
    CallExpr,
}

pub trait Expr: Debug {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Returns the span of the expression.
    fn get_span(&self) -> &crate::Span;
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }
    /// Does not consume the wrapper
    pub fn into_cloned_stmt_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(ExpressionStmt {
            expression: self.0.clone_wrapper(),
            span: self.0.get_span().clone(),
        })
    }
}

impl Expr for ExprWrapper {
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &crate::Span {
        self.0.get_span()
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}
