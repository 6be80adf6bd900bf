//! Symbols used when rendering fractions, each with an ASCII spelling for plain output.

use phf::phf_map;

use crate::markup::Block;

macro_rules! symbol {
    ($name:ident: $ascii:literal, $unicode:literal) => {
        pub const $name: Block = Block::new_symbol($ascii, $unicode);
    };
}

symbol!(FRAC_SLASH: "/", "\u{2044}");
symbol!(MINUS_SIGN: "-", "\u{2212}");
symbol!(LPAREN: "(", "(");
symbol!(RPAREN: ")", ")");

/// Single-character Unicode forms of common positive fractions, keyed by their ASCII form.
pub static VULGAR_FRACTIONS: phf::Map<&'static str, &'static str> = phf_map! {
    "1/2" => "\u{00BD}",
    "1/3" => "\u{2153}",
    "2/3" => "\u{2154}",
    "1/4" => "\u{00BC}",
    "3/4" => "\u{00BE}",
    "1/5" => "\u{2155}",
    "2/5" => "\u{2156}",
    "3/5" => "\u{2157}",
    "4/5" => "\u{2158}",
    "1/6" => "\u{2159}",
    "5/6" => "\u{215A}",
    "1/7" => "\u{2150}",
    "1/8" => "\u{215B}",
    "3/8" => "\u{215C}",
    "5/8" => "\u{215D}",
    "7/8" => "\u{215E}",
    "1/9" => "\u{2151}",
    "1/10" => "\u{2152}",
};
