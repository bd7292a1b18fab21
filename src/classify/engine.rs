//! Pipeline driver
//!
//! Wires scanner, region tracker, classifier, and emitter into the two
//! public entry points. One linear pass: each token is classified against
//! the nesting state before it, then folded into that state.

use smol_str::SmolStr;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::classifier::Classifier;
use super::regions::{RegionKind, RegionTracker};
use super::typenames::{TypeNameTable, STDLIB_TYPEDEFS};
use crate::emit::{Annotation, Emitter};
use crate::errors::{ErrorKind, LexError};
use crate::scanner::{self, eval_condition, parse_directive, DirectiveKind, Token, TokenKind};

/// Engine configuration
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Merge adjacent same-category annotations into one span
    pub compact_spans: bool,
    /// Type names known before scanning starts
    pub known_typedefs: Vec<SmolStr>,
}

impl Options {
    /// Options pre-seeded with common standard-library typedef names
    pub fn with_stdlib_typedefs() -> Self {
        Self {
            compact_spans: false,
            known_typedefs: STDLIB_TYPEDEFS.iter().map(SmolStr::new).collect(),
        }
    }
}

/// Result of classifying one buffer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Classified {
    /// Ordered, contiguous coverage of the whole input
    pub annotations: Vec<Annotation>,
    /// Recoverable problems, ordered by position
    pub errors: Vec<LexError>,
}

impl Classified {
    /// True when the input classified without a single diagnostic
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Classify a buffer with default options
pub fn classify(source: &str) -> Classified {
    classify_with(source, &Options::default())
}

/// Classify a buffer
///
/// Always returns: every error the input provokes is recorded in
/// [`Classified::errors`] while annotation coverage stays total.
pub fn classify_with(source: &str, options: &Options) -> Classified {
    let (tokens, mut errors) = scanner::tokenize(source);

    let mut typenames = TypeNameTable::new();
    typenames.extend(options.known_typedefs.iter().cloned());

    let mut classifier = Classifier::with_typenames(typenames);
    let mut regions = RegionTracker::new();
    let mut emitter = Emitter::new(options.compact_spans);

    for (i, token) in tokens.iter().enumerate() {
        let peek = tokens[i + 1..].iter().find(|t| !t.kind.is_trivia());
        let category = classifier.classify_token(token, peek, &regions);
        emitter.push(token.range, category);
        track_regions(&mut regions, token, &mut errors);
    }

    errors.extend(regions.finish());
    errors.sort_by_key(|e| (e.range.start(), e.range.end()));

    let annotations = emitter.finish();
    debug!(
        tokens = tokens.len(),
        annotations = annotations.len(),
        errors = errors.len(),
        "classification complete"
    );
    Classified { annotations, errors }
}

/// Fold one token into the nesting state
fn track_regions(regions: &mut RegionTracker, token: &Token<'_>, errors: &mut Vec<LexError>) {
    let kind = match token.kind {
        TokenKind::LBrace | TokenKind::RBrace => RegionKind::Brace,
        TokenKind::LParen | TokenKind::RParen => RegionKind::Paren,
        TokenKind::LBracket | TokenKind::RBracket => RegionKind::Bracket,
        TokenKind::Directive => {
            apply_directive(regions, token, errors);
            return;
        }
        _ => return,
    };
    if token.kind.is_opener() {
        regions.push(kind, token.range);
    } else if !regions.pop(kind) {
        errors.push(LexError::new(ErrorKind::UnmatchedCloser, token.range));
    }
}

/// Feed a conditional directive into the tracker; everything else only
/// matters to the annotation, which is already emitted.
fn apply_directive(regions: &mut RegionTracker, token: &Token<'_>, errors: &mut Vec<LexError>) {
    let directive = parse_directive(token.text);
    let matched = match directive.kind {
        DirectiveKind::If => {
            let known = directive.condition.and_then(eval_condition);
            regions.open_conditional(token.range, known);
            true
        }
        DirectiveKind::Ifdef | DirectiveKind::Ifndef => {
            // names are never resolved, so these stay presumed-live
            regions.open_conditional(token.range, None);
            true
        }
        DirectiveKind::Elif => {
            let known = directive.condition.and_then(eval_condition);
            regions.enter_elif(known)
        }
        DirectiveKind::Else => regions.enter_else(),
        DirectiveKind::Endif => regions.pop(RegionKind::Conditional),
        _ => true,
    };
    if !matched {
        errors.push(LexError::new(ErrorKind::UnmatchedCloser, token.range));
    }
}
