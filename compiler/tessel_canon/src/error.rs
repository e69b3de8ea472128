//! Internal errors raised while canonicalizing structural types.
//!
//! None of these are source diagnostics. Each one names the statement that
//! was being processed so the report points at the input that exposed the
//! bug.

use tessel_diagnostic::{Diagnostic, ErrorCode};
use tessel_ir::{Program, StmtId, TypeShape};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum CanonError {
    #[error("expected {expected} type, found {found} type")]
    ShapeMismatch {
        stmt: StmtId,
        expected: TypeShape,
        found: TypeShape,
    },
    #[error("{shape} type already resolved to `{name}`")]
    AlreadyResolved {
        stmt: StmtId,
        shape: TypeShape,
        name: String,
    },
    #[error("unsupported structural type: {what}")]
    UnsupportedConstruct { stmt: StmtId, what: Unsupported },
    #[error("{shape} over element `{element}` has no enclosing declaration statement")]
    MissingAnchor {
        stmt: StmtId,
        shape: TypeShape,
        element: String,
    },
    #[error("index variable `{name}` not found in scope")]
    LookupFailure { stmt: StmtId, name: String },
}

/// Structurally valid constructs this pass does not handle.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Unsupported {
    #[error("domain derived from a parent domain (only arithmetic domains are supported)")]
    ParentDomain,
    #[error("array domain expression is not a forall")]
    DomainNotForall,
    #[error("forall over {count} domains in a declaration")]
    MultipleDomains { count: usize },
    #[error("domain expression is not a variable")]
    DomainNotVariable,
    #[error("`{name}` is not a domain")]
    NotDomainTyped { name: String },
    #[error("index expression is neither an integer literal nor a variable")]
    IndexExpression,
    #[error("tuple component {index} is an anonymous type")]
    AnonymousComponent { index: usize },
    #[error("{shape} element is an anonymous {element} type")]
    AnonymousElement {
        shape: TypeShape,
        element: TypeShape,
    },
    #[error("domain has no canonical declaration")]
    UnresolvedDomain,
}

/// Discriminant of [`CanonError`], for matching without the payload.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum CanonErrorKind {
    ShapeMismatch,
    AlreadyResolved,
    UnsupportedConstruct,
    MissingAnchor,
    LookupFailure,
}

impl CanonError {
    pub fn kind(&self) -> CanonErrorKind {
        match self {
            CanonError::ShapeMismatch { .. } => CanonErrorKind::ShapeMismatch,
            CanonError::AlreadyResolved { .. } => CanonErrorKind::AlreadyResolved,
            CanonError::UnsupportedConstruct { .. } => CanonErrorKind::UnsupportedConstruct,
            CanonError::MissingAnchor { .. } => CanonErrorKind::MissingAnchor,
            CanonError::LookupFailure { .. } => CanonErrorKind::LookupFailure,
        }
    }

    /// Statement being processed when the error was raised.
    pub fn stmt(&self) -> StmtId {
        match self {
            CanonError::ShapeMismatch { stmt, .. }
            | CanonError::AlreadyResolved { stmt, .. }
            | CanonError::UnsupportedConstruct { stmt, .. }
            | CanonError::MissingAnchor { stmt, .. }
            | CanonError::LookupFailure { stmt, .. } => *stmt,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind() {
            CanonErrorKind::ShapeMismatch => ErrorCode::E9101,
            CanonErrorKind::AlreadyResolved => ErrorCode::E9102,
            CanonErrorKind::UnsupportedConstruct => ErrorCode::E9103,
            CanonErrorKind::MissingAnchor => ErrorCode::E9104,
            CanonErrorKind::LookupFailure => ErrorCode::E9105,
        }
    }

    /// Convert to a diagnostic naming the offending statement.
    pub fn to_diagnostic(&self, program: &Program) -> Diagnostic {
        let stmt = self.stmt();
        Diagnostic::error(self.code())
            .with_message(format!("internal compiler error: {self}"))
            .with_label(program.stmts.get(stmt).span, "while canonicalizing this statement")
            .with_note(format!("statement: `{}`", program.describe_stmt(stmt)))
    }
}
