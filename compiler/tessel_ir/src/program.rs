//! The program aggregate.
//!
//! A `Program` owns every arena of one compilation unit plus the fixed
//! scaffolding the structural passes rely on:
//!
//! ```text
//! intrinsic scope (built-in primitives, no declaration nodes)
//!   └── shared scope + shared container (canonical declarations)
//!         └── module scopes + containers (user code)
//!               └── block scopes + containers
//! ```
//!
//! The builder methods here are what a front end (or a test) uses to lay
//! out declarations before the passes run.

use std::fmt::Write as _;

use smallvec::SmallVec;

use crate::{
    ContainerId, DefPoint, Expr, ExprArena, ExprId, ExprKind, Name, Primitive, ScopeFlags,
    ScopeId, ScopeTree, Span, Stmt, StmtArena, StmtId, StmtKind, StringInterner, Symbol, SymbolId,
    SymbolKind, SymbolTable, TypeArena, TypeId, TypeKind,
};

pub struct Program {
    pub interner: StringInterner,
    pub types: TypeArena,
    pub exprs: ExprArena,
    pub symbols: SymbolTable,
    pub scopes: ScopeTree,
    pub stmts: StmtArena,
    shared_scope: ScopeId,
    shared_container: ContainerId,
    /// Top-level containers in traversal order. The shared container is
    /// always first.
    roots: Vec<ContainerId>,
    primitives: Vec<TypeId>,
}

impl Program {
    /// Create a program with the intrinsic primitives and an empty shared
    /// declarations container.
    pub fn new() -> Self {
        let mut scopes = ScopeTree::new();
        let intrinsic_scope = scopes.push(None, ScopeFlags::INTRINSIC);
        let shared_scope = scopes.push(Some(intrinsic_scope), ScopeFlags::SHARED);
        let mut stmts = StmtArena::new();
        let shared_container = stmts.new_container(shared_scope);

        let mut program = Program {
            interner: StringInterner::new(),
            types: TypeArena::new(),
            exprs: ExprArena::new(),
            symbols: SymbolTable::new(),
            scopes,
            stmts,
            shared_scope,
            shared_container,
            roots: vec![shared_container],
            primitives: Vec::with_capacity(Primitive::ALL.len()),
        };

        for prim in Primitive::ALL {
            let ty = program.types.alloc(TypeKind::Primitive(prim));
            let name = program.interner.intern(prim.name());
            let sym = program.symbols.alloc(Symbol {
                name,
                kind: SymbolKind::Type,
                ty,
                scope: intrinsic_scope,
                def_point: DefPoint::None,
            });
            program.types.get_mut(ty).symbol = Some(sym);
            program.scopes.bind(intrinsic_scope, name, sym);
            program.primitives.push(ty);
        }
        program
    }

    pub fn shared_scope(&self) -> ScopeId {
        self.shared_scope
    }

    pub fn shared_container(&self) -> ContainerId {
        self.shared_container
    }

    pub fn roots(&self) -> &[ContainerId] {
        &self.roots
    }

    /// Canonical type of a built-in primitive.
    pub fn primitive(&self, prim: Primitive) -> TypeId {
        self.primitives[prim as usize]
    }

    // === Layout ===

    /// Add a top-level module. Its scope nests inside the shared scope.
    pub fn add_module(&mut self) -> ContainerId {
        let scope = self.scopes.push(Some(self.shared_scope), ScopeFlags::empty());
        let container = self.stmts.new_container(scope);
        self.roots.push(container);
        container
    }

    /// Append a nested block to `container` and return the block's own
    /// container.
    pub fn add_block(&mut self, container: ContainerId) -> ContainerId {
        let parent = self.stmts.container(container).scope;
        let scope = self.scopes.push(Some(parent), ScopeFlags::empty());
        let inner = self.stmts.new_container(scope);
        self.push_stmt(container, Stmt::new(StmtKind::Block(inner), Span::DUMMY));
        inner
    }

    /// Allocate `stmt` and append it to `container`.
    pub fn push_stmt(&mut self, container: ContainerId, stmt: Stmt) -> StmtId {
        let id = self.stmts.alloc(stmt);
        self.stmts.push_back(container, id);
        id
    }

    // === Declarations ===

    /// Declare a variable at the end of `container`.
    pub fn declare_var(&mut self, container: ContainerId, name: &str, ty: TypeId) -> SymbolId {
        self.declare(container, name, ty, SymbolKind::Var)
    }

    /// Declare a named type at the end of `container` and attach the symbol
    /// to `ty`.
    pub fn declare_type(&mut self, container: ContainerId, name: &str, ty: TypeId) -> SymbolId {
        let sym = self.declare(container, name, ty, SymbolKind::Type);
        self.types.get_mut(ty).symbol = Some(sym);
        sym
    }

    /// Declare a variable that has no enclosing statement, such as a forall
    /// index or a formal parameter.
    pub fn declare_detached_var(&mut self, scope: ScopeId, name: &str, ty: TypeId) -> SymbolId {
        let name = self.interner.intern(name);
        let sym = self.symbols.alloc(Symbol {
            name,
            kind: SymbolKind::Var,
            ty,
            scope,
            def_point: DefPoint::Detached,
        });
        self.scopes.bind(scope, name, sym);
        sym
    }

    fn declare(
        &mut self,
        container: ContainerId,
        name: &str,
        ty: TypeId,
        kind: SymbolKind,
    ) -> SymbolId {
        let scope = self.stmts.container(container).scope;
        let name = self.interner.intern(name);
        let sym = self.symbols.alloc(Symbol {
            name,
            kind,
            ty,
            scope,
            def_point: DefPoint::None,
        });
        let stmt_kind = match kind {
            SymbolKind::Type => StmtKind::TypeDef(sym),
            SymbolKind::Var => StmtKind::VarDef(sym),
        };
        let stmt = self.push_stmt(container, Stmt::new(stmt_kind, Span::DUMMY));
        self.symbols.get_mut(sym).def_point = DefPoint::Stmt(stmt);
        self.scopes.bind(scope, name, sym);
        sym
    }

    // === Type and expression constructors ===

    pub fn array(&mut self, elem: TypeId, domain_expr: ExprId) -> TypeId {
        self.types.alloc(TypeKind::Array {
            elem,
            domain_expr,
            domain: None,
        })
    }

    /// Arithmetic domain without an index companion.
    pub fn domain(&mut self, rank: u32) -> TypeId {
        self.types.alloc(TypeKind::Domain {
            rank,
            parent: None,
            index: None,
        })
    }

    /// Arithmetic domain whose index companion is an anonymous index type
    /// over the literal `rank`.
    pub fn domain_with_index(&mut self, rank: u32) -> TypeId {
        let lit = self.int_lit(i64::from(rank));
        let index = self.index(lit);
        self.types.alloc(TypeKind::Domain {
            rank,
            parent: None,
            index: Some(index),
        })
    }

    pub fn tuple(&mut self, components: &[TypeId]) -> TypeId {
        self.types
            .alloc(TypeKind::Tuple(SmallVec::from_slice(components)))
    }

    pub fn sequence(&mut self, elem: TypeId) -> TypeId {
        self.types.alloc(TypeKind::Sequence { elem })
    }

    pub fn index(&mut self, expr: ExprId) -> TypeId {
        self.types.alloc(TypeKind::Index { expr })
    }

    pub fn int_lit(&mut self, value: i64) -> ExprId {
        self.exprs.alloc(Expr::new(ExprKind::Int(value), Span::DUMMY))
    }

    pub fn var_ref(&mut self, sym: SymbolId) -> ExprId {
        self.exprs
            .alloc(Expr::new(ExprKind::Variable(sym), Span::DUMMY))
    }

    pub fn forall(&mut self, domains: &[ExprId]) -> ExprId {
        self.exprs.alloc(Expr::new(
            ExprKind::Forall {
                domains: domains.to_vec(),
            },
            Span::DUMMY,
        ))
    }

    // === Queries ===

    pub fn name_str(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    pub fn symbol_name(&self, sym: SymbolId) -> &'static str {
        self.interner.lookup(self.symbols.get(sym).name)
    }

    /// Canonical name of a type, if it has one.
    pub fn type_name(&self, ty: TypeId) -> Option<&'static str> {
        self.types.symbol(ty).map(|sym| self.symbol_name(sym))
    }

    /// Scope a statement's declaration binds into. `None` for statements
    /// that declare nothing.
    pub fn stmt_scope(&self, stmt: StmtId) -> Option<ScopeId> {
        self.stmts
            .get(stmt)
            .declared_symbol()
            .map(|sym| self.symbols.get(sym).scope)
    }

    /// Render a type for diagnostics: its canonical name when it has one,
    /// its structure otherwise.
    pub fn display_type(&self, ty: TypeId) -> String {
        if let Some(name) = self.type_name(ty) {
            return name.to_owned();
        }
        match self.types.kind(ty) {
            TypeKind::Primitive(prim) => prim.name().to_owned(),
            TypeKind::Nominal => "<nominal>".to_owned(),
            TypeKind::Array {
                elem, domain_expr, ..
            } => format!(
                "[{}] {}",
                self.display_expr(*domain_expr),
                self.display_type(*elem)
            ),
            TypeKind::Domain { rank, parent, .. } => match parent {
                Some(parent) => format!("domain({})", self.display_type(*parent)),
                None => format!("domain({rank})"),
            },
            TypeKind::Tuple(components) => {
                let parts: Vec<String> = components.iter().map(|c| self.display_type(*c)).collect();
                format!("({})", parts.join(", "))
            }
            TypeKind::Sequence { elem } => format!("seq({})", self.display_type(*elem)),
            TypeKind::Index { expr } => format!("index({})", self.display_expr(*expr)),
        }
    }

    pub fn display_expr(&self, expr: ExprId) -> String {
        match self.exprs.kind(expr) {
            ExprKind::Int(value) => value.to_string(),
            ExprKind::Variable(sym) => self.symbol_name(*sym).to_owned(),
            ExprKind::Forall { domains } => {
                let parts: Vec<String> = domains.iter().map(|d| self.display_expr(*d)).collect();
                parts.join(", ")
            }
        }
    }

    /// One-line rendering of a statement, e.g. `var x: _array_Int32_1d`.
    pub fn describe_stmt(&self, stmt: StmtId) -> String {
        match self.stmts.get(stmt).kind {
            StmtKind::TypeDef(sym) => format!("type {}", self.symbol_name(sym)),
            StmtKind::VarDef(sym) => format!(
                "var {}: {}",
                self.symbol_name(sym),
                self.display_type(self.symbols.get(sym).ty)
            ),
            StmtKind::Expr(expr) => format!("expr {}", self.display_expr(expr)),
            StmtKind::Block(_) => "block".to_owned(),
        }
    }

    /// Statements of `container`, one rendered line each.
    pub fn dump(&self, container: ContainerId) -> Vec<String> {
        self.stmts
            .iter(container)
            .map(|stmt| self.describe_stmt(stmt))
            .collect()
    }

    /// Whole program as indented text, nested blocks indented by two spaces.
    pub fn dump_all(&self) -> String {
        let mut out = String::new();
        for &root in &self.roots {
            self.dump_into(root, 0, &mut out);
        }
        out
    }

    fn dump_into(&self, container: ContainerId, depth: usize, out: &mut String) {
        for stmt in self.stmts.iter(container) {
            let _ = writeln!(out, "{:indent$}{}", "", self.describe_stmt(stmt), indent = depth * 2);
            if let StmtKind::Block(inner) = self.stmts.get(stmt).kind {
                self.dump_into(inner, depth + 1, out);
            }
        }
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}
