//! Built-in rule sets.
//!
//! ```text
//! RUBY ◄── RED ◄── SUNNY
//!   ▲
//!   └──── ARBY ◄── SLANG
//! ```
//!
//! Each arrow points at the fallback consulted after the derived set's own
//! rules. Word lists are sorted.

use red_ir::Category;

use crate::rule::Rule;
use crate::rule_set::{Analysis, RuleSet};

// === RedRuby ===

/// Ruby with the host lexer's `name:` hash key repaired.
pub static RUBY: RuleSet = RuleSet {
    name: "RedRuby",
    aliases: &["redruby", "ruby"],
    filenames: &["*.rb"],
    mimetypes: &["text/x-ruby"],
    lookahead: 1,
    rules: &[Rule::SymbolKey { words: &["name"] }],
    fallback: None,
    analysis: Analysis {
        shebang: &["ruby"],
        ..Analysis::NONE
    },
};

// === Red ===

pub const RED_EMPHASIZED: &[&str] = &["render"];

/// Keywords whose following constant names a declared class.
pub const RED_CLASS_GENERATORS: &[&str] = &[
    "abstract_machine",
    "abstract_record",
    "event",
    "machine",
    "policy",
    "record",
];

pub const RED_KEYWORDS: &[&str] = &[
    "ensures",
    "fields",
    "from",
    "owns",
    "params",
    "principal",
    "refs",
    "reject",
    "requires",
    "restrict",
    "seq",
    "set",
    "to",
];

pub static RED: RuleSet = RuleSet {
    name: "Red",
    aliases: &["red"],
    filenames: &["*.red"],
    mimetypes: &["text/x-red"],
    lookahead: 1,
    rules: &[
        Rule::Promote {
            from: Category::Name,
            words: RED_EMPHASIZED,
            to: Category::NameBuiltinPseudo,
        },
        Rule::Promote {
            from: Category::Name,
            words: RED_CLASS_GENERATORS,
            to: Category::Keyword,
        },
        Rule::Promote {
            from: Category::Name,
            words: RED_KEYWORDS,
            to: Category::Keyword,
        },
        Rule::AfterKeyword {
            from: Category::NameConstant,
            keywords: RED_CLASS_GENERATORS,
            to: Category::NameClass,
        },
    ],
    fallback: Some(&RUBY),
    analysis: Analysis {
        shebang: &[],
        markers: RED_CLASS_GENERATORS,
        marker_bonus: 0.3,
        offset: -0.01,
    },
};

// === Arby ===

/// Alloy constants emphasized like builtins.
pub const ARBY_EMPHASIZED: &[&str] = &["iden", "none", "univ"];

/// Quantifiers, keywords only when they open a block on the same line.
pub const ARBY_QUANTIFIERS: &[&str] = &["all", "exist", "lone", "no", "one", "some"];

pub const ARBY_CLASS_GENERATORS: &[&str] = &[
    "abstract_sig",
    "alloy",
    "alloy_model",
    "lone_sig",
    "one_sig",
    "sig",
];

/// Keywords whose following name is a function or predicate.
pub const ARBY_FUNCTION_GENERATORS: &[&str] = &[
    "assertion",
    "check",
    "fact",
    "fun",
    "pred",
    "procedure",
    "run",
];

pub const ARBY_KEYWORDS: &[&str] = &[
    "disj",
    "exactly",
    "extends",
    "iff",
    "implies",
    "let",
    "seq",
    "set",
    "solve",
];

pub static ARBY: RuleSet = RuleSet {
    name: "Arby",
    aliases: &["arby", "alloy"],
    filenames: &["*.arby"],
    mimetypes: &["text/x-arby"],
    lookahead: 10,
    rules: &[
        Rule::SymbolList,
        Rule::BlockOpener {
            words: ARBY_QUANTIFIERS,
            openers: &["do", "{"],
            to: Category::Keyword,
        },
        Rule::Promote {
            from: Category::Name,
            words: ARBY_EMPHASIZED,
            to: Category::NameBuiltinPseudo,
        },
        Rule::Promote {
            from: Category::Name,
            words: ARBY_CLASS_GENERATORS,
            to: Category::Keyword,
        },
        Rule::Promote {
            from: Category::Name,
            words: ARBY_FUNCTION_GENERATORS,
            to: Category::Keyword,
        },
        Rule::Promote {
            from: Category::Name,
            words: ARBY_KEYWORDS,
            to: Category::Keyword,
        },
        Rule::AfterKeyword {
            from: Category::NameConstant,
            keywords: ARBY_CLASS_GENERATORS,
            to: Category::NameClass,
        },
        Rule::AfterKeyword {
            from: Category::Name,
            keywords: ARBY_FUNCTION_GENERATORS,
            to: Category::NameFunction,
        },
    ],
    fallback: Some(&RUBY),
    analysis: Analysis {
        shebang: &[],
        markers: ARBY_CLASS_GENERATORS,
        marker_bonus: 0.3,
        offset: -0.02,
    },
};

// === Slang ===

pub const SLANG_CLASS_GENERATORS: &[&str] = &["component", "data", "operation", "protocol"];

pub const SLANG_KEYWORDS: &[&str] = &[
    "creates",
    "effects",
    "ensures",
    "invariant",
    "receives",
    "requires",
    "sends",
];

pub static SLANG: RuleSet = RuleSet {
    name: "Slang",
    aliases: &["slang"],
    filenames: &["*.slang"],
    mimetypes: &["text/x-slang"],
    lookahead: 10,
    rules: &[
        Rule::Promote {
            from: Category::Name,
            words: SLANG_CLASS_GENERATORS,
            to: Category::Keyword,
        },
        Rule::Promote {
            from: Category::Name,
            words: SLANG_KEYWORDS,
            to: Category::Keyword,
        },
        Rule::AfterKeyword {
            from: Category::NameConstant,
            keywords: SLANG_CLASS_GENERATORS,
            to: Category::NameClass,
        },
        Rule::DeclarationBeforeBracket {
            brackets: &["<", "["],
        },
    ],
    fallback: Some(&ARBY),
    analysis: Analysis {
        shebang: &[],
        markers: SLANG_CLASS_GENERATORS,
        marker_bonus: 0.3,
        offset: -0.01,
    },
};

// === Sunny ===

pub const SUNNY_EMPHASIZED: &[&str] = &["broadcast", "emit"];

pub const SUNNY_CLASS_GENERATORS: &[&str] = &["client", "data", "server", "user"];

pub const SUNNY_KEYWORDS: &[&str] = &[
    "creates",
    "deletes",
    "on",
    "reads",
    "reply",
    "trigger",
    "updates",
    "writes",
];

pub static SUNNY: RuleSet = RuleSet {
    name: "Sunny",
    aliases: &["sunny"],
    filenames: &["*.sunny"],
    mimetypes: &["text/x-sunny"],
    lookahead: 1,
    rules: &[
        Rule::Promote {
            from: Category::Name,
            words: SUNNY_EMPHASIZED,
            to: Category::NameBuiltinPseudo,
        },
        Rule::Promote {
            from: Category::Name,
            words: SUNNY_CLASS_GENERATORS,
            to: Category::Keyword,
        },
        Rule::Promote {
            from: Category::Name,
            words: SUNNY_KEYWORDS,
            to: Category::Keyword,
        },
        Rule::AfterKeyword {
            from: Category::NameConstant,
            keywords: SUNNY_CLASS_GENERATORS,
            to: Category::NameClass,
        },
    ],
    fallback: Some(&RED),
    analysis: Analysis {
        shebang: &[],
        markers: SUNNY_CLASS_GENERATORS,
        marker_bonus: 0.3,
        offset: -0.01,
    },
};
