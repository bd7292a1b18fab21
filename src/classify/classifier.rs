//! Token-at-a-time syntax classifier
//!
//! Single forward pass, no parse tree. Ambiguity is resolved from three
//! sources of context: a short lookback window of significant tokens, the
//! region tracker's nesting state, and a one-token peek ahead. State that
//! outlives a token (typedef names, a pending `struct` tag, open ternaries)
//! lives on the classifier itself.

use smol_str::SmolStr;
use tracing::trace;

use super::category::Category;
use super::keywords;
use super::regions::{RegionKind, RegionTracker};
use super::rules::{self, PrevKind};
use super::typenames::TypeNameTable;
use crate::scanner::{Token, TokenKind};

/// How many significant tokens of left context the classifier keeps
const LOOKBACK: usize = 3;

/// One remembered token: enough to summarize left context without
/// holding a borrow on the source
#[derive(Debug, Clone)]
struct PrevToken {
    kind: TokenKind,
    category: Category,
    text: SmolStr,
}

/// In-progress `typedef` declaration
#[derive(Debug)]
struct TypedefCapture {
    /// Delimiter depth where the `typedef` keyword appeared; only names
    /// at this depth (or a function-pointer declarator one level in) are
    /// candidates
    depth: usize,
    candidate: Option<SmolStr>,
}

#[derive(Debug)]
pub struct Classifier {
    typenames: TypeNameTable,
    /// Most recent significant tokens, newest first
    lookback: [Option<PrevToken>; LOOKBACK],
    typedef_capture: Option<TypedefCapture>,
    /// Set by `struct`/`enum`/`union`, consumed by the next significant token
    awaiting_tag: bool,
    /// Open `?` counts, one per delimiter level, innermost last
    ternary: Vec<u32>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self::with_typenames(TypeNameTable::new())
    }

    /// Start with a pre-seeded type-name table
    pub fn with_typenames(typenames: TypeNameTable) -> Self {
        Self {
            typenames,
            lookback: [const { None }; LOOKBACK],
            typedef_capture: None,
            awaiting_tag: false,
            ternary: vec![0],
        }
    }

    /// Type names known so far, seeded plus collected
    pub fn typenames(&self) -> &TypeNameTable {
        &self.typenames
    }

    /// Classify one token
    ///
    /// `peek` is the next significant (non-trivia) token, if any. `regions`
    /// must reflect the nesting state just before `token`; the caller feeds
    /// the tracker separately after classifying.
    pub fn classify_token(
        &mut self,
        token: &Token<'_>,
        peek: Option<&Token<'_>>,
        regions: &RegionTracker,
    ) -> Category {
        // trivia never touches classifier state
        match token.kind {
            TokenKind::Whitespace => return Category::Whitespace,
            TokenKind::LineComment | TokenKind::BlockComment => return Category::Comment,
            _ => {}
        }

        // a pending struct/enum/union tag only survives until the next
        // significant token; anonymous forms (`struct {`) drop it here
        if token.kind != TokenKind::Ident {
            self.awaiting_tag = false;
        }

        let category = match token.kind {
            TokenKind::Ident => self.classify_ident(token.text, peek, regions),
            TokenKind::Int | TokenKind::Float | TokenKind::MalformedNumber => {
                Category::NumericLiteral
            }
            TokenKind::Str => Category::StringLiteral,
            TokenKind::Char => Category::CharLiteral,
            TokenKind::Directive => Category::PreprocessorDirective,
            TokenKind::Star => rules::resolve_star(self.prev_kind()),
            TokenKind::Question => {
                if let Some(pending) = self.ternary.last_mut() {
                    *pending += 1;
                }
                Category::Operator
            }
            TokenKind::Colon => match self.ternary.last_mut() {
                Some(pending) if *pending > 0 => {
                    *pending -= 1;
                    rules::resolve_colon(true)
                }
                _ => rules::resolve_colon(false),
            },
            TokenKind::PlusPlus | TokenKind::MinusMinus => {
                let fixity = rules::resolve_increment(self.prev_kind());
                trace!(?fixity, text = token.text, "increment operator");
                Category::Operator
            }
            kind if kind.is_opener() => {
                // a `?` left of the opener cannot be answered inside it
                self.ternary.push(0);
                Category::Punctuation
            }
            kind if kind.is_closer() => {
                if self.ternary.len() > 1 {
                    self.ternary.pop();
                }
                Category::Punctuation
            }
            TokenKind::Semicolon | TokenKind::Comma => {
                self.commit_typedef(token.kind, regions);
                Category::Punctuation
            }
            TokenKind::Ellipsis => Category::Punctuation,
            TokenKind::Unknown => Category::Unknown,
            // arithmetic, comparison, logical, shift, assignment, member access
            _ => Category::Operator,
        };

        self.remember(token, category);
        category
    }

    fn classify_ident(
        &mut self,
        text: &str,
        peek: Option<&Token<'_>>,
        regions: &RegionTracker,
    ) -> Category {
        let awaiting_tag = std::mem::take(&mut self.awaiting_tag);

        if keywords::is_keyword(text) {
            if text == "typedef" {
                self.typedef_capture = Some(TypedefCapture {
                    depth: regions.delimiter_depth(),
                    candidate: None,
                });
            } else if keywords::is_tag_keyword(text) {
                self.awaiting_tag = true;
            }
            return Category::Keyword;
        }

        if awaiting_tag {
            // the tag becomes a known type only when this is a definition;
            // `struct Foo *p;` may be an incomplete forward use
            if peek.map(|t| t.kind) == Some(TokenKind::LBrace) {
                self.typenames.insert(text);
            }
            return Category::TypeName;
        }

        if self.prev_is_goto() {
            return Category::Label;
        }

        if self.typenames.contains(text) {
            return Category::TypeName;
        }

        // typedef declarator: remember the latest plausible name; the
        // one standing when `;` or `,` arrives at typedef depth wins
        let depth = regions.delimiter_depth();
        let fn_ptr_declarator = matches!(
            (self.prev(0), self.prev(1)),
            (Some(p0), Some(p1))
                if p0.kind == TokenKind::Star && p1.kind == TokenKind::LParen
        );
        if let Some(capture) = &mut self.typedef_capture {
            if depth == capture.depth || (depth == capture.depth + 1 && fn_ptr_declarator) {
                capture.candidate = Some(SmolStr::new(text));
            }
        }

        if self.at_label_position(peek, regions) {
            return Category::Label;
        }

        Category::Identifier
    }

    /// `name:` at the start of a statement declares a label. Inside parens
    /// or brackets, or with a `?` pending, a following `:` means something
    /// else entirely.
    fn at_label_position(&self, peek: Option<&Token<'_>>, regions: &RegionTracker) -> bool {
        if peek.map(|t| t.kind) != Some(TokenKind::Colon) {
            return false;
        }
        if self.ternary.last().is_some_and(|&pending| pending > 0) {
            return false;
        }
        if matches!(
            regions.innermost_delimiter(),
            Some(RegionKind::Paren | RegionKind::Bracket)
        ) {
            return false;
        }
        match self.prev(0) {
            None => true,
            Some(prev) => {
                matches!(
                    prev.kind,
                    TokenKind::Semicolon
                        | TokenKind::LBrace
                        | TokenKind::RBrace
                        | TokenKind::Directive
                ) || (prev.kind == TokenKind::Colon
                    && prev.category == Category::Punctuation)
            }
        }
    }

    fn commit_typedef(&mut self, kind: TokenKind, regions: &RegionTracker) {
        let depth = regions.delimiter_depth();
        let Some(capture) = &mut self.typedef_capture else {
            return;
        };
        if depth != capture.depth {
            return;
        }
        if let Some(name) = capture.candidate.take() {
            self.typenames.insert(name);
        }
        // `,` continues the declarator list, `;` ends the declaration
        if kind == TokenKind::Semicolon {
            self.typedef_capture = None;
        }
    }

    fn prev_is_goto(&self) -> bool {
        self.prev(0)
            .is_some_and(|p| p.category == Category::Keyword && p.text == "goto")
    }

    /// Left context summarized for the rule tables
    fn prev_kind(&self) -> PrevKind {
        let Some(prev) = self.prev(0) else {
            return PrevKind::Nothing;
        };
        match prev.category {
            Category::Keyword if keywords::is_type_keyword(&prev.text) => PrevKind::TypeKeyword,
            Category::TypeName => PrevKind::TypeName,
            Category::Punctuation if prev.kind == TokenKind::Star => PrevKind::PointerStar,
            Category::Identifier
            | Category::NumericLiteral
            | Category::CharLiteral
            | Category::StringLiteral => PrevKind::Value,
            _ => match prev.kind {
                // a closed call or index expression is a value too
                TokenKind::RParen | TokenKind::RBracket => PrevKind::Value,
                _ => PrevKind::Other,
            },
        }
    }

    fn prev(&self, n: usize) -> Option<&PrevToken> {
        self.lookback.get(n).and_then(|slot| slot.as_ref())
    }

    fn remember(&mut self, token: &Token<'_>, category: Category) {
        let entry = PrevToken {
            kind: token.kind,
            category,
            text: SmolStr::new(token.text),
        };
        let [a, b, _] = std::mem::take(&mut self.lookback);
        self.lookback = [Some(entry), a, b];
    }
}
