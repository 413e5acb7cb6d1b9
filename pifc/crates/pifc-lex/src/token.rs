//! Token definitions.
//!
//! A [`TokenClass`] is what the classifier decides about a lexeme; a
//! [`Token`] is a class plus, for identifiers and constants, the symbol table
//! reference of the lexeme text.

use std::fmt;

use pifc_util::SymbolRef;

/// Rendering of the "no attribute" sentinel in the PIF
pub const NO_ATTRIBUTE: &str = "0";

/// Broad grouping of token classes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Reserved word
    Reserved,
    /// Operator
    Operator,
    /// Separator
    Separator,
    /// Identifier
    Identifier,
    /// Any constant sub-kind
    Constant,
}

/// Token class
///
/// Fixed classes (reserved words, operators, separators) fully determine
/// their text. [`TokenClass::Identifier`] and the constant classes do not,
/// and their tokens carry a symbol table reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenClass {
    // ===== Identifiers and constants =====
    /// Identifier: letter followed by letters or digits
    Identifier,
    /// Decimal integer, optionally signed
    NumberConstant,
    /// Single character between single quotes
    CharConstant,
    /// Text between double quotes
    StringConstant,
    /// `true` or `false`
    BoolConstant,

    // ===== Reserved words =====
    /// `main`
    Main,
    /// `bool`
    Bool,
    /// `number`
    Number,
    /// `char`
    Char,
    /// `string`
    String,
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `while`
    While,
    /// `read`
    Read,
    /// `write`
    Write,
    /// `const`
    Const,
    /// `void`
    Void,

    // ===== Operators =====
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `=`
    Eq,
    /// `<=`
    LtEq,
    /// `<`
    Lt,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `//`
    SlashSlash,
    /// `&&`
    AndAnd,
    /// `||`
    OrOr,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `%`
    Percent,

    // ===== Separators =====
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
}

impl TokenClass {
    /// Reserved words, in table order
    pub const RESERVED: [TokenClass; 13] = [
        Self::Main,
        Self::Bool,
        Self::Number,
        Self::Char,
        Self::String,
        Self::If,
        Self::Else,
        Self::For,
        Self::While,
        Self::Read,
        Self::Write,
        Self::Const,
        Self::Void,
    ];

    /// Operators, in table order
    pub const OPERATORS: [TokenClass; 17] = [
        Self::Plus,
        Self::Minus,
        Self::Slash,
        Self::Star,
        Self::Eq,
        Self::LtEq,
        Self::Lt,
        Self::EqEq,
        Self::NotEq,
        Self::Gt,
        Self::GtEq,
        Self::SlashSlash,
        Self::AndAnd,
        Self::OrOr,
        Self::PlusPlus,
        Self::MinusMinus,
        Self::Percent,
    ];

    /// Separators, in table order
    pub const SEPARATORS: [TokenClass; 8] = [
        Self::LBracket,
        Self::RBracket,
        Self::LBrace,
        Self::RBrace,
        Self::LParen,
        Self::RParen,
        Self::Semicolon,
        Self::Comma,
    ];

    /// The fixed text of a reserved word, operator or separator
    pub const fn lexeme(self) -> Option<&'static str> {
        use TokenClass::*;
        let text = match self {
            Identifier | NumberConstant | CharConstant | StringConstant | BoolConstant => {
                return None
            },
            Main => "main",
            Bool => "bool",
            Number => "number",
            Char => "char",
            String => "string",
            If => "if",
            Else => "else",
            For => "for",
            While => "while",
            Read => "read",
            Write => "write",
            Const => "const",
            Void => "void",
            Plus => "+",
            Minus => "-",
            Slash => "/",
            Star => "*",
            Eq => "=",
            LtEq => "<=",
            Lt => "<",
            EqEq => "==",
            NotEq => "!=",
            Gt => ">",
            GtEq => ">=",
            SlashSlash => "//",
            AndAnd => "&&",
            OrOr => "||",
            PlusPlus => "++",
            MinusMinus => "--",
            Percent => "%",
            LBracket => "[",
            RBracket => "]",
            LBrace => "{",
            RBrace => "}",
            LParen => "(",
            RParen => ")",
            Semicolon => ";",
            Comma => ",",
        };
        Some(text)
    }

    /// Numeric code of the class in the classic PIF code table
    ///
    /// Identifiers are 0 and every constant sub-kind shares 1.
    pub const fn code(self) -> u32 {
        use TokenClass::*;
        match self {
            Identifier => 0,
            NumberConstant | CharConstant | StringConstant | BoolConstant => 1,
            Main => 2,
            Bool => 3,
            Number => 4,
            Char => 5,
            String => 6,
            If => 7,
            Else => 8,
            For => 9,
            While => 10,
            Read => 11,
            Write => 12,
            Const => 13,
            Plus => 14,
            Minus => 15,
            Slash => 16,
            Star => 17,
            Eq => 18,
            LtEq => 19,
            Lt => 20,
            EqEq => 21,
            NotEq => 22,
            Gt => 23,
            GtEq => 24,
            SlashSlash => 25,
            AndAnd => 26,
            OrOr => 27,
            PlusPlus => 28,
            MinusMinus => 29,
            Percent => 30,
            LBracket => 31,
            RBracket => 32,
            LBrace => 33,
            RBrace => 34,
            LParen => 35,
            RParen => 36,
            Semicolon => 38,
            Comma => 39,
            Void => 40,
        }
    }

    /// Broad category of the class
    pub const fn category(self) -> Category {
        use TokenClass::*;
        match self {
            Identifier => Category::Identifier,
            NumberConstant | CharConstant | StringConstant | BoolConstant => Category::Constant,
            Main | Bool | Number | Char | String | If | Else | For | While | Read | Write
            | Const | Void => Category::Reserved,
            LBracket | RBracket | LBrace | RBrace | LParen | RParen | Semicolon | Comma => {
                Category::Separator
            },
            _ => Category::Operator,
        }
    }

    /// Whether the class is one of the constant sub-kinds
    #[inline]
    pub const fn is_constant(self) -> bool {
        matches!(self.category(), Category::Constant)
    }

    /// Whether tokens of this class carry a symbol table reference
    #[inline]
    pub const fn takes_attribute(self) -> bool {
        matches!(self.category(), Category::Identifier | Category::Constant)
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenClass::Identifier => "IDENTIFIER",
            TokenClass::NumberConstant => "NUMBER_CONSTANT",
            TokenClass::CharConstant => "CHAR_CONSTANT",
            TokenClass::StringConstant => "STRING_CONSTANT",
            TokenClass::BoolConstant => "BOOL_CONSTANT",
            fixed => fixed.lexeme().unwrap_or_default(),
        };
        f.write_str(name)
    }
}

/// A classified token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token class
    pub class: TokenClass,
    /// Symbol table reference, present exactly for identifiers and constants
    pub attribute: Option<SymbolRef>,
}

impl Token {
    /// Token for a reserved word, operator or separator
    #[inline]
    pub const fn fixed(class: TokenClass) -> Self {
        Self {
            class,
            attribute: None,
        }
    }

    /// Token for an identifier or constant
    #[inline]
    pub const fn with_symbol(class: TokenClass, symbol: SymbolRef) -> Self {
        Self {
            class,
            attribute: Some(symbol),
        }
    }
}

/// `(class, attribute)`, with [`NO_ATTRIBUTE`] standing in for no reference
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.attribute {
            Some(symbol) => write!(f, "({}, {})", self.class, symbol),
            None => write!(f, "({}, {})", self.class, NO_ATTRIBUTE),
        }
    }
}
