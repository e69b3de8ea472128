//! Whole-pipeline tests: programs laid out the way the front end hands
//! them over, run through `canonicalize`.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tessel_canon::{
    canonicalize, validate, CanonErrorKind, CanonOptions, CanonStats, NoopMaterializer,
    RecordingMaterializer, ValidateMode,
};
use tessel_diagnostic::emitter::render;
use tessel_ir::{ContainerId, Primitive, Program, SymbolId, TypeId, TypeKind};

fn options() -> CanonOptions {
    CanonOptions::default().with_validation(ValidateMode::Always)
}

fn run(program: &mut Program) -> CanonStats {
    tessel_canon::init_tracing();
    match canonicalize(program, &mut NoopMaterializer, &options()) {
        Ok(stats) => stats,
        Err(err) => panic!("{}", render(&err.to_diagnostic(program))),
    }
}

/// `var <name>: domain(rank)` with an index companion.
fn domain_var(program: &mut Program, container: ContainerId, name: &str, rank: u32) -> SymbolId {
    let dom = program.domain_with_index(rank);
    program.declare_var(container, name, dom)
}

/// `[D] elem`.
fn array_over(program: &mut Program, elem: TypeId, domain: SymbolId) -> TypeId {
    let var_ref = program.var_ref(domain);
    let forall = program.forall(&[var_ref]);
    program.array(elem, forall)
}

fn type_of(program: &Program, var: SymbolId) -> TypeId {
    program.symbols.get(var).ty
}

#[test]
fn two_arrays_over_local_domain_share_one_declaration() {
    let mut program = Program::new();
    let module = program.add_module();
    let int = program.primitive(Primitive::Int32);
    let d1 = domain_var(&mut program, module, "D1", 1);
    let xa = array_over(&mut program, int, d1);
    let x = program.declare_var(module, "x", xa);
    let ya = array_over(&mut program, int, d1);
    let y = program.declare_var(module, "y", ya);

    let stats = run(&mut program);

    assert_eq!(type_of(&program, x), type_of(&program, y));
    assert_eq!(program.type_name(type_of(&program, x)), Some("_array_Int32_1d"));
    assert_eq!(stats.arrays, 1);
    // Not right after `var D1`: an intrinsic element puts the array in the
    // shared scope, where it follows D1's canonical domain declaration.
    assert_eq!(
        program.dump_all(),
        "type _index__domain_1d\n\
         type _domain_1d\n\
         type _array_Int32_1d\n\
         var D1: _domain_1d\n\
         var x: _array_Int32_1d\n\
         var y: _array_Int32_1d\n"
    );
}

#[test]
fn array_of_domain_index_elements() {
    let mut program = Program::new();
    let module = program.add_module();
    let d = domain_var(&mut program, module, "D", 1);
    let d_ref = program.var_ref(d);
    let elem = program.index(d_ref);
    let arr = array_over(&mut program, elem, d);
    let ids = program.declare_var(module, "ids", arr);

    let stats = run(&mut program);
    assert_eq!(
        program.type_name(type_of(&program, ids)),
        Some("_array__index__domain_1d_1d")
    );
    assert_eq!(
        (stats.domains, stats.indices, stats.arrays),
        (1, 1, 1)
    );
    assert_eq!(
        program.dump_all(),
        "type _domain_1d\n\
         type _index__domain_1d\n\
         type _array__index__domain_1d_1d\n\
         var D: _domain_1d\n\
         var ids: _array__index__domain_1d_1d\n"
    );
}

#[test]
fn interning_spans_unrelated_modules() {
    let mut program = Program::new();
    let first = program.add_module();
    let second = program.add_module();
    let float = program.primitive(Primitive::Float64);

    let d = domain_var(&mut program, first, "D", 2);
    let a = array_over(&mut program, float, d);
    let a = program.declare_var(first, "a", a);
    let e = domain_var(&mut program, second, "E", 2);
    let b = array_over(&mut program, float, e);
    let b = program.declare_var(second, "b", b);

    let stats = run(&mut program);
    assert_eq!(type_of(&program, a), type_of(&program, b));
    assert_eq!(type_of(&program, d), type_of(&program, e));
    assert_eq!(
        (stats.domains, stats.arrays, stats.indices),
        (1, 1, 1)
    );
}

#[test]
fn second_pipeline_run_is_rejected() {
    let mut program = Program::new();
    let module = program.add_module();
    let d = domain_var(&mut program, module, "D", 1);
    let int = program.primitive(Primitive::Int32);
    let arr = array_over(&mut program, int, d);
    program.declare_var(module, "x", arr);
    run(&mut program);
    let before = program.dump_all();

    let err = canonicalize(&mut program, &mut NoopMaterializer, &options());
    assert_eq!(
        err.map_err(|e| e.kind()),
        Err(CanonErrorKind::AlreadyResolved)
    );
    assert_eq!(program.dump_all(), before);
}

#[test]
fn nested_array_declared_inner_first() {
    let mut program = Program::new();
    let module = program.add_module();
    let int = program.primitive(Primitive::Int32);
    let rows = domain_var(&mut program, module, "Rows", 1);
    let cols = domain_var(&mut program, module, "Cols", 3);
    let inner = array_over(&mut program, int, cols);
    let outer = array_over(&mut program, inner, rows);
    program.declare_var(module, "m", outer);

    run(&mut program);

    let order = program.dump(program.shared_container());
    let position = |name: &str| {
        order
            .iter()
            .position(|line| line == &format!("type {name}"))
            .unwrap_or_else(|| panic!("`{name}` declared"))
    };
    assert!(position("_array_Int32_3d") < position("_array__array_Int32_3d_1d"));
}

#[test]
fn local_element_keeps_array_and_sequence_local() {
    let mut program = Program::new();
    let module = program.add_module();
    let d = domain_var(&mut program, module, "D", 1);
    let block = program.add_block(module);
    let record = program.types.alloc(TypeKind::Nominal);
    program.declare_type(block, "Point", record);
    let int = program.primitive(Primitive::Int32);
    program.declare_var(block, "count", int);
    let arr = array_over(&mut program, record, d);
    program.declare_var(block, "points", arr);
    let seq = program.sequence(record);
    program.declare_var(block, "trail", seq);

    let mut hook = RecordingMaterializer::default();
    let result = canonicalize(&mut program, &mut hook, &options());
    assert!(result.is_ok());

    // Each dependent is spliced directly after the element declaration, so
    // the later one ends up first.
    assert_eq!(
        program.dump(block),
        vec![
            "type Point",
            "type _seq_Point",
            "type _array_Point_1d",
            "var count: Int32",
            "var points: _array_Point_1d",
            "var trail: _seq_Point",
        ]
    );
    let shared = program.shared_scope();
    let array_name = program.interner.intern("_array_Point_1d");
    assert_eq!(program.scopes.lookup_local(shared, array_name), None);
    assert_eq!(hook.names(&program), vec!["_seq_Point"]);
}

#[test]
fn intrinsic_element_sequence_is_shared() {
    let mut program = Program::new();
    let module = program.add_module();
    let block = program.add_block(module);
    let text = program.primitive(Primitive::String);
    let first = program.sequence(text);
    program.declare_var(block, "lines", first);
    let second = program.sequence(text);
    program.declare_var(module, "words", second);

    let mut hook = RecordingMaterializer::default();
    let result = canonicalize(&mut program, &mut hook, &options());
    assert_eq!(result.map(|s| (s.sequences, s.reused)), Ok((1, 1)));
    assert_eq!(
        program.dump(program.shared_container()),
        vec!["type _seq_String"]
    );
    assert_eq!(hook.calls, vec![first]);
}

#[test]
fn rank_zero_domain_matches_rank_one() {
    let mut program = Program::new();
    let module = program.add_module();
    let zero = domain_var(&mut program, module, "Z", 0);
    let one = domain_var(&mut program, module, "O", 1);

    let stats = run(&mut program);
    assert_eq!(type_of(&program, zero), type_of(&program, one));
    assert_eq!(program.type_name(type_of(&program, one)), Some("_domain_1d"));
    assert_eq!(stats.domains, 1);
}

#[test]
fn tuple_component_order_is_significant() {
    let mut program = Program::new();
    let module = program.add_module();
    let int = program.primitive(Primitive::Int32);
    let boolean = program.primitive(Primitive::Bool);
    let ab = program.tuple(&[int, boolean]);
    let ab = program.declare_var(module, "ab", ab);
    let ba = program.tuple(&[boolean, int]);
    let ba = program.declare_var(module, "ba", ba);
    let ab_again = program.tuple(&[int, boolean]);
    let ab_again = program.declare_var(module, "ab2", ab_again);

    run(&mut program);
    assert_ne!(type_of(&program, ab), type_of(&program, ba));
    assert_eq!(type_of(&program, ab), type_of(&program, ab_again));
    assert_eq!(
        program.dump(program.shared_container()),
        vec!["type _tuple_Int32_Bool", "type _tuple_Bool_Int32"]
    );
}

#[test]
fn index_completion_can_be_disabled() {
    let mut program = Program::new();
    let module = program.add_module();
    let d = domain_var(&mut program, module, "D", 1);

    let options = options()
        .with_index_completion(false)
        .with_validation(ValidateMode::Off);
    let stats = canonicalize(&mut program, &mut NoopMaterializer, &options);
    assert_eq!(stats.map(|s| s.indices), Ok(0));
    assert_eq!(
        program.dump(program.shared_container()),
        vec!["type _domain_1d"]
    );
    let index = match program.types.kind(type_of(&program, d)) {
        TypeKind::Domain { index, .. } => *index,
        _ => None,
    };
    assert_eq!(index.and_then(|idx| program.type_name(idx)), None);
}

#[test]
fn multi_domain_forall_reports_statement() {
    let mut program = Program::new();
    let module = program.add_module();
    let d = domain_var(&mut program, module, "D", 1);
    let e = domain_var(&mut program, module, "E", 1);
    let int = program.primitive(Primitive::Int32);
    let (dr, er) = (program.var_ref(d), program.var_ref(e));
    let forall = program.forall(&[dr, er]);
    let arr = program.array(int, forall);
    program.declare_var(module, "grid", arr);

    let err = match canonicalize(&mut program, &mut NoopMaterializer, &options()) {
        Ok(stats) => panic!("expected an internal error, got {stats:?}"),
        Err(err) => err,
    };
    assert_eq!(err.kind(), CanonErrorKind::UnsupportedConstruct);
    assert_eq!(
        render(&err.to_diagnostic(&program)),
        "error[E9103]: internal compiler error: unsupported structural type: \
         forall over 2 domains in a declaration\n\
         \x20 --> 0..0: while canonicalizing this statement\n\
         \x20 = note: statement: `var grid: [D, E] Int32`\n"
    );
}

#[test]
fn canonical_program_validates() {
    let mut program = Program::new();
    let module = program.add_module();
    let d = domain_var(&mut program, module, "D", 2);
    let int = program.primitive(Primitive::Int64);
    let arr = array_over(&mut program, int, d);
    let seq = program.sequence(arr);
    program.declare_var(module, "history", seq);
    let d_ref = program.var_ref(d);
    let idx = program.index(d_ref);
    program.declare_var(module, "cursor", idx);

    let stats = run(&mut program);
    assert_eq!(validate(&program), Vec::new());
    assert_eq!(
        (stats.domains, stats.arrays, stats.sequences, stats.indices),
        (1, 1, 1, 1)
    );
    assert_eq!(stats.created(), 4);
}

proptest! {
    #[test]
    fn one_domain_declaration_per_normalized_rank(ranks in prop::collection::vec(0u32..5, 1..8)) {
        let mut program = Program::new();
        let module = program.add_module();
        for (i, rank) in ranks.iter().enumerate() {
            domain_var(&mut program, module, &format!("D{i}"), *rank);
        }

        let stats = run(&mut program);
        let mut distinct: Vec<u32> = ranks.iter().map(|r| (*r).max(1)).collect();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(stats.domains, distinct.len());
        prop_assert_eq!(stats.indices, distinct.len());
    }
}
