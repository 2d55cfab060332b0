//! Closed token category taxonomy.
//!
//! Categories form a tree rooted at [`Category::Token`]. Every variant knows
//! its parent, so ancestor tests are a short walk up the tree instead of a
//! string prefix comparison.
//!
//! ```text
//! Token ─┬─ Text ── Whitespace
//!        ├─ Keyword ── {Constant, Declaration, Namespace, Pseudo, Reserved, Type}
//!        ├─ Name ── {Builtin ── Pseudo, Class, Constant, Function, Variable ── …}
//!        ├─ Literal ─┬─ String ── {Double, Single, Symbol, …}
//!        │           └─ Number ── {Integer, Float, Hex, …}
//!        ├─ Operator ── Word
//!        ├─ Punctuation
//!        ├─ Comment ── {Single, Multiline, …}
//!        ├─ Generic ── {…}
//!        ├─ Error
//!        └─ Other
//! ```

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing a dotted category path that does not exist.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown token category `{0}`")]
pub struct UnknownCategory(pub String);

/// A lexical category.
///
/// Rules test both exact identity (`==`) and ancestry ([`Category::is_a`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Token,

    Text,
    Whitespace,

    Error,
    Other,

    Keyword,
    KeywordConstant,
    KeywordDeclaration,
    KeywordNamespace,
    KeywordPseudo,
    KeywordReserved,
    KeywordType,

    Name,
    NameAttribute,
    NameBuiltin,
    NameBuiltinPseudo,
    NameClass,
    NameConstant,
    NameDecorator,
    NameEntity,
    NameException,
    NameFunction,
    NameLabel,
    NameNamespace,
    NameTag,
    NameVariable,
    NameVariableClass,
    NameVariableGlobal,
    NameVariableInstance,

    Literal,
    String,
    StringBacktick,
    StringChar,
    StringDoc,
    StringDouble,
    StringEscape,
    StringHeredoc,
    StringInterpol,
    StringOther,
    StringRegex,
    StringSingle,
    StringSymbol,
    Number,
    NumberBin,
    NumberFloat,
    NumberHex,
    NumberInteger,
    NumberOct,

    Operator,
    OperatorWord,

    Punctuation,

    Comment,
    CommentHashbang,
    CommentMultiline,
    CommentPreproc,
    CommentSingle,
    CommentSpecial,

    Generic,
    GenericDeleted,
    GenericEmph,
    GenericError,
    GenericHeading,
    GenericInserted,
    GenericOutput,
    GenericPrompt,
    GenericStrong,
    GenericSubheading,
    GenericTraceback,
}

impl Category {
    /// Every category, parents before children.
    pub const ALL: [Category; 68] = [
        Category::Token,
        Category::Text,
        Category::Whitespace,
        Category::Error,
        Category::Other,
        Category::Keyword,
        Category::KeywordConstant,
        Category::KeywordDeclaration,
        Category::KeywordNamespace,
        Category::KeywordPseudo,
        Category::KeywordReserved,
        Category::KeywordType,
        Category::Name,
        Category::NameAttribute,
        Category::NameBuiltin,
        Category::NameBuiltinPseudo,
        Category::NameClass,
        Category::NameConstant,
        Category::NameDecorator,
        Category::NameEntity,
        Category::NameException,
        Category::NameFunction,
        Category::NameLabel,
        Category::NameNamespace,
        Category::NameTag,
        Category::NameVariable,
        Category::NameVariableClass,
        Category::NameVariableGlobal,
        Category::NameVariableInstance,
        Category::Literal,
        Category::String,
        Category::StringBacktick,
        Category::StringChar,
        Category::StringDoc,
        Category::StringDouble,
        Category::StringEscape,
        Category::StringHeredoc,
        Category::StringInterpol,
        Category::StringOther,
        Category::StringRegex,
        Category::StringSingle,
        Category::StringSymbol,
        Category::Number,
        Category::NumberBin,
        Category::NumberFloat,
        Category::NumberHex,
        Category::NumberInteger,
        Category::NumberOct,
        Category::Operator,
        Category::OperatorWord,
        Category::Punctuation,
        Category::Comment,
        Category::CommentHashbang,
        Category::CommentMultiline,
        Category::CommentPreproc,
        Category::CommentSingle,
        Category::CommentSpecial,
        Category::Generic,
        Category::GenericDeleted,
        Category::GenericEmph,
        Category::GenericError,
        Category::GenericHeading,
        Category::GenericInserted,
        Category::GenericOutput,
        Category::GenericPrompt,
        Category::GenericStrong,
        Category::GenericSubheading,
        Category::GenericTraceback,
    ];

    /// The direct parent, or `None` for the root.
    pub const fn parent(self) -> Option<Category> {
        use Category as C;
        Some(match self {
            C::Token => return None,

            C::Text | C::Error | C::Other | C::Keyword | C::Name | C::Literal | C::Operator
            | C::Punctuation | C::Comment | C::Generic => C::Token,

            C::Whitespace => C::Text,

            C::KeywordConstant
            | C::KeywordDeclaration
            | C::KeywordNamespace
            | C::KeywordPseudo
            | C::KeywordReserved
            | C::KeywordType => C::Keyword,

            C::NameAttribute
            | C::NameBuiltin
            | C::NameClass
            | C::NameConstant
            | C::NameDecorator
            | C::NameEntity
            | C::NameException
            | C::NameFunction
            | C::NameLabel
            | C::NameNamespace
            | C::NameTag
            | C::NameVariable => C::Name,
            C::NameBuiltinPseudo => C::NameBuiltin,
            C::NameVariableClass | C::NameVariableGlobal | C::NameVariableInstance => {
                C::NameVariable
            }

            C::String | C::Number => C::Literal,
            C::StringBacktick
            | C::StringChar
            | C::StringDoc
            | C::StringDouble
            | C::StringEscape
            | C::StringHeredoc
            | C::StringInterpol
            | C::StringOther
            | C::StringRegex
            | C::StringSingle
            | C::StringSymbol => C::String,
            C::NumberBin | C::NumberFloat | C::NumberHex | C::NumberInteger | C::NumberOct => {
                C::Number
            }

            C::OperatorWord => C::Operator,

            C::CommentHashbang
            | C::CommentMultiline
            | C::CommentPreproc
            | C::CommentSingle
            | C::CommentSpecial => C::Comment,

            C::GenericDeleted
            | C::GenericEmph
            | C::GenericError
            | C::GenericHeading
            | C::GenericInserted
            | C::GenericOutput
            | C::GenericPrompt
            | C::GenericStrong
            | C::GenericSubheading
            | C::GenericTraceback => C::Generic,
        })
    }

    /// Iterate over the strict ancestors, nearest first, ending at the root.
    pub fn ancestors(self) -> impl Iterator<Item = Category> {
        std::iter::successors(self.parent(), |c| c.parent())
    }

    /// `true` if `self` is `other` or a descendant of `other`.
    #[inline]
    pub fn is_a(self, other: Category) -> bool {
        self == other || self.ancestors().any(|c| c == other)
    }

    /// Number of edges between `self` and the root.
    pub fn depth(self) -> usize {
        self.ancestors().count()
    }

    /// Final path segment (`Pseudo` for `Name.Builtin.Pseudo`).
    pub const fn leaf_name(self) -> &'static str {
        use Category as C;
        match self {
            C::Token => "Token",
            C::Text => "Text",
            C::Whitespace => "Whitespace",
            C::Error | C::GenericError => "Error",
            C::Other | C::StringOther => "Other",
            C::Keyword => "Keyword",
            C::KeywordConstant | C::NameConstant => "Constant",
            C::KeywordDeclaration => "Declaration",
            C::KeywordNamespace | C::NameNamespace => "Namespace",
            C::KeywordPseudo | C::NameBuiltinPseudo => "Pseudo",
            C::KeywordReserved => "Reserved",
            C::KeywordType => "Type",
            C::Name => "Name",
            C::NameAttribute => "Attribute",
            C::NameBuiltin => "Builtin",
            C::NameClass | C::NameVariableClass => "Class",
            C::NameDecorator => "Decorator",
            C::NameEntity => "Entity",
            C::NameException => "Exception",
            C::NameFunction => "Function",
            C::NameLabel => "Label",
            C::NameTag => "Tag",
            C::NameVariable => "Variable",
            C::NameVariableGlobal => "Global",
            C::NameVariableInstance => "Instance",
            C::Literal => "Literal",
            C::String => "String",
            C::StringBacktick => "Backtick",
            C::StringChar => "Char",
            C::StringDoc => "Doc",
            C::StringDouble => "Double",
            C::StringEscape => "Escape",
            C::StringHeredoc => "Heredoc",
            C::StringInterpol => "Interpol",
            C::StringRegex => "Regex",
            C::StringSingle => "Single",
            C::StringSymbol => "Symbol",
            C::Number => "Number",
            C::NumberBin => "Bin",
            C::NumberFloat => "Float",
            C::NumberHex => "Hex",
            C::NumberInteger => "Integer",
            C::NumberOct => "Oct",
            C::Operator => "Operator",
            C::OperatorWord => "Word",
            C::Punctuation => "Punctuation",
            C::Comment => "Comment",
            C::CommentHashbang => "Hashbang",
            C::CommentMultiline => "Multiline",
            C::CommentPreproc => "Preproc",
            C::CommentSingle => "Single",
            C::CommentSpecial => "Special",
            C::Generic => "Generic",
            C::GenericDeleted => "Deleted",
            C::GenericEmph => "Emph",
            C::GenericHeading => "Heading",
            C::GenericInserted => "Inserted",
            C::GenericOutput => "Output",
            C::GenericPrompt => "Prompt",
            C::GenericStrong => "Strong",
            C::GenericSubheading => "Subheading",
            C::GenericTraceback => "Traceback",
        }
    }

    /// Dotted path below the root, e.g. `Literal.String.Symbol`.
    ///
    /// The root itself renders as `Token`.
    pub fn path(self) -> String {
        let mut segments: Vec<&'static str> = std::iter::once(self)
            .chain(self.ancestors())
            .filter(|c| *c != Category::Token)
            .map(Category::leaf_name)
            .collect();
        if segments.is_empty() {
            return Category::Token.leaf_name().to_owned();
        }
        segments.reverse();
        segments.join(".")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.path())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parse a dotted path. A leading `Token.` is accepted and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.strip_prefix("Token.").unwrap_or(s);
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.path() == trimmed)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}
