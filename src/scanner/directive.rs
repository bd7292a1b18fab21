//! Preprocessor directive analysis
//!
//! The scanner emits a whole directive line (continuations included) as a
//! single token. This module looks inside that text: which directive it is,
//! the name a `#define`/`#ifdef` introduces, and whether an `#if` condition
//! is decidable without running a real preprocessor.

/// Recognized directive names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Include,
    Define,
    Undef,
    If,
    Ifdef,
    Ifndef,
    Elif,
    Else,
    Endif,
    Pragma,
    ErrorDirective,
    Warning,
    Line,
    /// Anything else after `#`, including the standalone null directive
    Other,
}

impl DirectiveKind {
    /// True for `#if`, `#ifdef`, and `#ifndef`
    pub fn opens_conditional(self) -> bool {
        matches!(self, Self::If | Self::Ifdef | Self::Ifndef)
    }
}

/// Structured view of one directive token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive<'a> {
    pub kind: DirectiveKind,
    /// Name introduced or tested: `#define NAME`, `#undef NAME`,
    /// `#ifdef NAME`, `#ifndef NAME`
    pub name: Option<&'a str>,
    /// Whether a `#define` is function-like (`(` immediately after the name)
    pub function_like: bool,
    /// Raw condition text of an `#if`/`#elif`
    pub condition: Option<&'a str>,
}

/// Parse the text of a directive token (leading `#` included)
pub fn parse_directive(text: &str) -> Directive<'_> {
    let body = text.strip_prefix('#').unwrap_or(text);
    let body = body.trim_start_matches([' ', '\t']);

    let word_end = body
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(body.len());
    let (word, rest) = body.split_at(word_end);

    let kind = match word {
        "include" => DirectiveKind::Include,
        "define" => DirectiveKind::Define,
        "undef" => DirectiveKind::Undef,
        "if" => DirectiveKind::If,
        "ifdef" => DirectiveKind::Ifdef,
        "ifndef" => DirectiveKind::Ifndef,
        "elif" => DirectiveKind::Elif,
        "else" => DirectiveKind::Else,
        "endif" => DirectiveKind::Endif,
        "pragma" => DirectiveKind::Pragma,
        "error" => DirectiveKind::ErrorDirective,
        "warning" => DirectiveKind::Warning,
        "line" => DirectiveKind::Line,
        _ => DirectiveKind::Other,
    };

    let mut directive = Directive {
        kind,
        name: None,
        function_like: false,
        condition: None,
    };

    match kind {
        DirectiveKind::Define
        | DirectiveKind::Undef
        | DirectiveKind::Ifdef
        | DirectiveKind::Ifndef => {
            let after = rest.trim_start_matches([' ', '\t']);
            let name_end = after
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(after.len());
            if name_end > 0 {
                directive.name = Some(&after[..name_end]);
                directive.function_like =
                    kind == DirectiveKind::Define && after[name_end..].starts_with('(');
            }
        }
        DirectiveKind::If | DirectiveKind::Elif => {
            let cond = rest.trim();
            if !cond.is_empty() {
                directive.condition = Some(cond);
            }
        }
        _ => {}
    }

    directive
}

/// Best-effort evaluation of an `#if`/`#elif` condition
///
/// Only literal `0` and `1` (optionally parenthesized, optionally
/// integer-suffixed) are decided. Everything else returns `None` and the
/// region stays presumed-active.
pub fn eval_condition(condition: &str) -> Option<bool> {
    let mut cond = condition.trim();
    while let Some(inner) = cond
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        cond = inner.trim();
    }
    let cond = cond.trim_end_matches(['u', 'U', 'l', 'L']);
    match cond {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}
