//! Primitive verbs, adverbs and reserved system names.
//!
//! Every verb has one glyph and (up to) two meanings: monadic when applied to
//! one argument, dyadic when applied to two. The enum names describe the glyph,
//! not one of its meanings, since `#` is both count and take.

use std::fmt;

/// A primitive verb.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `+` flip / plus
    Plus,
    /// `-` negate / minus
    Minus,
    /// `*` first / times
    Star,
    /// `%` reciprocal / divide
    Percent,
    /// `!` enumerate / mod-rotate
    Bang,
    /// `&` where / min
    Amp,
    /// `|` reverse / max
    Pipe,
    /// `<` grade up / less
    Less,
    /// `>` grade down / more
    More,
    /// `=` group / match
    Equal,
    /// `~` not / match
    Tilde,
    /// `@` atom / at
    At,
    /// `?` unique / find
    Question,
    /// `#` count / take
    Hash,
    /// `_` floor / drop-cut
    Underscore,
    /// `^` shape / power
    Caret,
    /// `,` enlist / join
    Comma,
    /// `$` format / pad
    Dollar,
    /// `.` execute / apply
    Dot,
    /// `:` return (monadic, unsupported) / assign-as-verb
    Colon,
    /// `4:` type code
    TypeCode,
    /// `5:` string representation
    Represent,
}

impl Verb {
    /// All verbs, in glyph-table order.
    pub const ALL: [Verb; 22] = [
        Verb::Plus,
        Verb::Minus,
        Verb::Star,
        Verb::Percent,
        Verb::Bang,
        Verb::Amp,
        Verb::Pipe,
        Verb::Less,
        Verb::More,
        Verb::Equal,
        Verb::Tilde,
        Verb::At,
        Verb::Question,
        Verb::Hash,
        Verb::Underscore,
        Verb::Caret,
        Verb::Comma,
        Verb::Dollar,
        Verb::Dot,
        Verb::Colon,
        Verb::TypeCode,
        Verb::Represent,
    ];

    /// Source glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            Verb::Plus => "+",
            Verb::Minus => "-",
            Verb::Star => "*",
            Verb::Percent => "%",
            Verb::Bang => "!",
            Verb::Amp => "&",
            Verb::Pipe => "|",
            Verb::Less => "<",
            Verb::More => ">",
            Verb::Equal => "=",
            Verb::Tilde => "~",
            Verb::At => "@",
            Verb::Question => "?",
            Verb::Hash => "#",
            Verb::Underscore => "_",
            Verb::Caret => "^",
            Verb::Comma => ",",
            Verb::Dollar => "$",
            Verb::Dot => ".",
            Verb::Colon => ":",
            Verb::TypeCode => "4:",
            Verb::Represent => "5:",
        }
    }

    /// Look up a verb by its glyph.
    pub fn from_glyph(glyph: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|v| v.glyph() == glyph)
    }

    /// Name of the monadic meaning, used in error messages.
    pub const fn monadic_name(self) -> &'static str {
        match self {
            Verb::Plus => "flip",
            Verb::Minus => "negate",
            Verb::Star => "first",
            Verb::Percent => "reciprocal",
            Verb::Bang => "enumerate",
            Verb::Amp => "where",
            Verb::Pipe => "reverse",
            Verb::Less => "grade up",
            Verb::More => "grade down",
            Verb::Equal => "group",
            Verb::Tilde => "not",
            Verb::At => "atom",
            Verb::Question => "unique",
            Verb::Hash => "count",
            Verb::Underscore => "floor",
            Verb::Caret => "shape",
            Verb::Comma => "enlist",
            Verb::Dollar => "format",
            Verb::Dot => "execute",
            Verb::Colon => "return",
            Verb::TypeCode => "type",
            Verb::Represent => "represent",
        }
    }

    /// Name of the dyadic meaning, used in error messages.
    pub const fn dyadic_name(self) -> &'static str {
        match self {
            Verb::Plus => "plus",
            Verb::Minus => "minus",
            Verb::Star => "times",
            Verb::Percent => "divide",
            Verb::Bang => "mod",
            Verb::Amp => "min",
            Verb::Pipe => "max",
            Verb::Less => "less",
            Verb::More => "more",
            Verb::Equal => "equal",
            Verb::Tilde => "match",
            Verb::At => "at",
            Verb::Question => "find",
            Verb::Hash => "take",
            Verb::Underscore => "drop",
            Verb::Caret => "power",
            Verb::Comma => "join",
            Verb::Dollar => "pad",
            Verb::Dot => "apply",
            Verb::Colon => "assign",
            Verb::TypeCode => "type",
            Verb::Represent => "represent",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A higher-order combinator applied to a verb or function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Adverb {
    /// `/` reduce (dyadic operand), converge/do (monadic operand)
    Over,
    /// `\` scan
    Scan,
    /// `'` each
    Each,
    /// `/:` each-right
    EachRight,
    /// `\:` each-left
    EachLeft,
    /// `':` each-prior
    EachPrior,
}

impl Adverb {
    pub const fn glyph(self) -> &'static str {
        match self {
            Adverb::Over => "/",
            Adverb::Scan => "\\",
            Adverb::Each => "'",
            Adverb::EachRight => "/:",
            Adverb::EachLeft => "\\:",
            Adverb::EachPrior => "':",
        }
    }

    pub fn from_glyph(glyph: &str) -> Option<Adverb> {
        [
            Adverb::Over,
            Adverb::Scan,
            Adverb::Each,
            Adverb::EachRight,
            Adverb::EachLeft,
            Adverb::EachPrior,
        ]
        .into_iter()
        .find(|a| a.glyph() == glyph)
    }

    /// Whether the derived verb is normally used with a single argument
    /// (`+/x`) rather than two (`x,'y`).
    pub const fn derives_monadic(self) -> bool {
        matches!(self, Adverb::Over | Adverb::Scan)
    }
}

impl fmt::Display for Adverb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Reserved underscore names resolved by the evaluator.
pub const SYSTEM_NAMES: &[&str] = &[
    "_n", "_d", "_bd", "_db", "_ic", "_ci", "_abs", "_sqrt", "_exp", "_log", "_sin", "_cos",
];

/// Whether `name` is a reserved system name.
pub fn is_system_name(name: &str) -> bool {
    SYSTEM_NAMES.contains(&name)
}
