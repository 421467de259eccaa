use std::any::Any;

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expr, ExprType, ExprWrapper},
    statements::BlockStmt,
};

// LITERALS

/// Number Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub value: i64,
    pub span: Span,
}

impl Expr for NumberExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Number
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Boolean Expression
/// Represents a `true` or `false` literal in the AST.
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

impl Expr for BooleanExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Symbol Expression
/// Represents an identifier in the AST. This includes functions.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for SymbolExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

// COMPLEX

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for BinaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(BinaryExpr {
            left: self.left.clone_wrapper(),
            operator: self.operator.clone(),
            right: self.right.clone_wrapper(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Prefix Expression
/// Represents a prefix operation on an expression in the AST.
#[derive(Debug)]
pub struct PrefixExpr {
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for PrefixExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Prefix
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(PrefixExpr {
            operator: self.operator.clone(),
            right: self.right.clone_wrapper(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// If Expression
/// Represents a conditional with an optional alternative in the AST.
///
/// `if` is an expression, not a statement: it may appear anywhere an
/// expression is expected.
#[derive(Debug)]
pub struct IfExpr {
    pub condition: ExprWrapper,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
    pub span: Span,
}

impl Expr for IfExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::If
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(IfExpr {
            condition: self.condition.clone_wrapper(),
            consequence: self.consequence.clone(),
            alternative: self.alternative.clone(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Function Expression
/// Represents an anonymous function literal in the AST.
#[derive(Debug)]
pub struct FnExpr {
    pub parameters: Vec<String>,
    pub body: BlockStmt,
    pub span: Span,
}

impl Expr for FnExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Function
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(FnExpr {
            parameters: self.parameters.clone(),
            body: self.body.clone(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}

/// Call Expression
/// Represents a function call in the AST.
#[derive(Debug)]
pub struct CallExpr {
    pub callee: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
    pub span: Span,
}

impl Expr for CallExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        let cloned_args = self
            .arguments
            .iter()
            .map(|x| x.clone_wrapper())
            .collect::<Vec<ExprWrapper>>();

        ExprWrapper::new(CallExpr {
            callee: self.callee.clone_wrapper(),
            arguments: cloned_args,
            span: self.span.clone(),
        })
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::CallExpr
    }
    fn get_span(&self) -> &crate::Span {
        &self.span
    }
}
