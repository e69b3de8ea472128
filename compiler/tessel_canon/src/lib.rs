//! Structural type canonicalization for the Tessel compiler.
//!
//! Source programs may use array, domain, tuple, sequence and index types
//! without ever naming them. Later phases assume every type is a named
//! declaration with exactly one defining symbol, so this crate gives each
//! anonymous structural type a canonical declaration, shared by every
//! structurally equal occurrence and spliced into the statement order where
//! lexical lookup will find it.
//!
//! # Pipeline Position
//!
//! ```text
//! Parse → Name Resolution → **Canonicalize Structural Types** → Type Resolution
//! ```
//!
//! # Passes
//!
//! 1. **Anonymous-type resolution** (`resolve`): for every variable
//!    declaration, rewrite its type bottom-up to canonical declarations.
//! 2. **Index completion** (`complete`): give every domain reached in the
//!    program a canonical `_index_<domain>` companion type.
//!
//! Both passes share three stateless primitives: name mangling (`mangle`),
//! owner scope selection (`scope`) and declaration splicing (`splice`).
//!
//! # Errors
//!
//! Every failure here is an internal compiler error: the input has already
//! passed parsing and name resolution. There is no recovery. The first
//! error aborts the pipeline and is returned as a [`CanonError`].

pub mod build;
mod complete;
mod context;
mod error;
mod hooks;
pub mod mangle;
mod options;
mod resolve;
mod scope;
mod splice;
mod stats;
mod validate;

use std::sync::Once;

use tessel_diagnostic::emitter::render;
use tessel_ir::{walk_program, Program};

pub use complete::IndexTypeCompleter;
pub use context::CanonCx;
pub use error::{CanonError, CanonErrorKind, Unsupported};
pub use hooks::{NoopMaterializer, RecordingMaterializer, SeqMaterializer};
pub use options::{CanonOptions, ValidateMode};
pub use resolve::AnonymousTypeResolver;
pub use stats::CanonStats;
pub use validate::{validate, Violation};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging canonicalization.
///
/// Set `RUST_LOG=tessel_canon=debug` to see interning hits and splice
/// positions, or `trace` for every visited type.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Run both passes over `program`.
///
/// `hook` is told about every sequence type the first time it is
/// canonicalized. On success the returned statistics count the
/// declarations synthesized and the occurrences that reused one.
///
/// # Errors
///
/// Returns the first internal error either pass hits. The program is left
/// partially canonicalized and must not be handed to later phases.
///
/// # Panics
///
/// Panics if post-pass validation is enabled by `options` and finds a
/// broken invariant, which means a bug in this crate.
#[tracing::instrument(level = "debug", skip_all)]
pub fn canonicalize(
    program: &mut Program,
    hook: &mut dyn SeqMaterializer,
    options: &CanonOptions,
) -> Result<CanonStats, CanonError> {
    let mut stats = CanonStats::default();

    let mut resolver = AnonymousTypeResolver::new(hook, &mut stats);
    if let Err(err) = walk_program(&mut resolver, program) {
        report(&err, program);
        return Err(err);
    }

    if options.complete_index_types {
        let mut completer = IndexTypeCompleter::new(&mut stats);
        if let Err(err) = walk_program(&mut completer, program) {
            report(&err, program);
            return Err(err);
        }
    }

    if options.validate.enabled() {
        let violations = validate(program);
        assert!(
            violations.is_empty(),
            "canonical declaration invariants violated:\n{}",
            violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    tracing::debug!(
        created = stats.created(),
        reused = stats.reused,
        "structural types canonicalized"
    );
    Ok(stats)
}

fn report(err: &CanonError, program: &Program) {
    let rendered = render(&err.to_diagnostic(program));
    tracing::error!(code = %err.code(), "{}", rendered.trim_end());
}
