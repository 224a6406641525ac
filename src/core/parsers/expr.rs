use swc_ecma_ast::{ArrayLit, Expr, Lit, MemberExpr, ObjectLit, UnaryOp};

/// The expression shapes the engine distinguishes when reading styles.
///
/// Parentheses are looked through. Literal only covers string, number,
/// boolean and null, plus signed numbers such as `-10`; regex and bigint
/// literals fall into `Other`.
#[derive(Debug, Clone, Copy)]
pub enum StyleExpr<'a> {
    ObjectLiteral(&'a ObjectLit),
    ArrayLiteral(&'a ArrayLit),
    MemberAccess(&'a MemberExpr),
    Literal(&'a Lit),
    Other(&'a Expr),
}

impl<'a> StyleExpr<'a> {
    pub fn classify(expr: &'a Expr) -> Self {
        match expr {
            Expr::Paren(paren) => Self::classify(&paren.expr),
            Expr::Object(object) => StyleExpr::ObjectLiteral(object),
            Expr::Array(array) => StyleExpr::ArrayLiteral(array),
            Expr::Member(member) => StyleExpr::MemberAccess(member),
            Expr::Lit(lit @ (Lit::Str(_) | Lit::Num(_) | Lit::Bool(_) | Lit::Null(_))) => {
                StyleExpr::Literal(lit)
            }
            Expr::Unary(unary) if matches!(unary.op, UnaryOp::Minus | UnaryOp::Plus) => {
                match &*unary.arg {
                    Expr::Lit(lit @ Lit::Num(_)) => StyleExpr::Literal(lit),
                    _ => StyleExpr::Other(expr),
                }
            }
            other => StyleExpr::Other(other),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, StyleExpr::Literal(_))
    }
}
