//! Functionality for displaying fractions to humans. The canonical text form is plain ASCII
//! `numerator/denominator`, which is what gets written to and read back from streams. It is not the
//! nicest form for people, though: Unicode has a fraction slash, a real minus sign, and glyphs like
//! ½, and typesetting systems want their own syntax. Types describe themselves once as [`Block`]s,
//! and each [`RenderMode`] turns those blocks into a string.

use crate::fraction::BaseInt;
use crate::symbols::{FRAC_SLASH, LPAREN, MINUS_SIGN, RPAREN, VULGAR_FRACTIONS};

/// One piece of rendered output. A value that breaks itself into blocks gets every render mode for
/// free.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Literal text, passed through [`RenderMode::render_text`].
    Text(String),
    /// A character with an ASCII fallback, such as the minus sign.
    Symbol(Symbol),
    /// A signed integer.
    Int(BaseInt),
    /// A ratio of a numerator to a positive denominator.
    Ratio(BaseInt, BaseInt),
    /// Several blocks rendered back to back.
    Concatenation(Vec<Block>),
}

/// The two spellings of a symbol: `unicode` when the output can carry it, `ascii` otherwise.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub struct Symbol {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl Block {
    pub fn new_text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub const fn new_symbol(ascii: &'static str, unicode: &'static str) -> Self {
        Self::Symbol(Symbol { ascii, unicode })
    }
}

/// Describes a value as the blocks it renders to.
pub trait RenderBlocks {
    fn components(&self) -> Vec<Block>;
}

/// An output format. Modes override the per-block methods they care about and inherit the rest.
pub trait RenderMode {
    fn render_text(&self, text: &str) -> String {
        text.to_owned()
    }

    /// Uses the Unicode spelling unless overridden.
    fn render_symbol(&self, sym: &Symbol) -> String {
        sym.unicode.to_owned()
    }

    /// Renders an integer, using the mode's minus sign.
    fn render_int(&self, n: BaseInt) -> String {
        let sign = if n < 0 {
            self.render_block(&MINUS_SIGN)
        } else {
            String::new()
        };
        format!("{}{}", sign, n.unsigned_abs())
    }

    /// Renders a ratio as numerator, fraction slash, denominator.
    fn render_ratio(&self, numerator: BaseInt, denominator: BaseInt) -> String {
        format!(
            "{}{}{}",
            self.render_int(numerator),
            self.render_block(&FRAC_SLASH),
            self.render_int(denominator)
        )
    }

    /// Dispatches to the method for the block's kind.
    fn render_block(&self, block: &Block) -> String {
        match block {
            Block::Text(text) => self.render_text(text),
            Block::Symbol(symbol) => self.render_symbol(symbol),
            Block::Int(n) => self.render_int(*n),
            Block::Ratio(n, d) => self.render_ratio(*n, *d),
            Block::Concatenation(blocks) => blocks.iter().map(|b| self.render_block(b)).collect(),
        }
    }

    /// Renders anything made of blocks to a new string.
    fn render_to_string<T: RenderBlocks + ?Sized>(&self, t: &T) -> String {
        t.components().iter().map(|b| self.render_block(b)).collect()
    }
}

/// Plain ASCII. Ratios render as `-3/4`, which is the canonical text form of a fraction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ascii {}

impl RenderMode for Ascii {
    fn render_symbol(&self, sym: &Symbol) -> String {
        sym.ascii.to_owned()
    }
}

/// Unicode for human display: `−3⁄4`, `½`, and whole numbers without a denominator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Unicode {}

impl RenderMode for Unicode {
    fn render_ratio(&self, numerator: BaseInt, denominator: BaseInt) -> String {
        if denominator == 1 {
            return self.render_int(numerator);
        }

        let key = format!("{}/{}", numerator.unsigned_abs(), denominator);
        match VULGAR_FRACTIONS.get(key.as_str()) {
            Some(glyph) if numerator < 0 => format!("{}{}", self.render_block(&MINUS_SIGN), glyph),
            Some(glyph) => glyph.to_string(),
            None => format!(
                "{}{}{}",
                self.render_int(numerator),
                self.render_block(&FRAC_SLASH),
                self.render_int(denominator)
            ),
        }
    }
}

/// Typst math markup, e.g., `(-3)/(4)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Typst {}

impl RenderMode for Typst {
    fn render_symbol(&self, sym: &Symbol) -> String {
        sym.ascii.to_owned()
    }

    fn render_ratio(&self, numerator: BaseInt, denominator: BaseInt) -> String {
        [
            LPAREN,
            Block::Int(numerator),
            RPAREN,
            FRAC_SLASH,
            LPAREN,
            Block::Int(denominator),
            RPAREN,
        ]
        .iter()
        .map(|b| self.render_block(b))
        .collect()
    }
}

pub const ASCII: Ascii = Ascii {};
pub const UNICODE: Unicode = Unicode {};
pub const TYPST: Typst = Typst {};

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::frac;

    #[test]
    fn test_ascii() {
        assert_eq!(ASCII.render_to_string(&frac!(5 / 24)), "5/24");
        assert_eq!(ASCII.render_to_string(&frac!(-9 / 8)), "-9/8");
        assert_eq!(ASCII.render_to_string(&frac!(-4)), "-4/1");
        assert_eq!(ASCII.render_to_string(&frac!(1 / 2)), "1/2");
    }

    #[test]
    fn test_unicode() {
        assert_eq!(UNICODE.render_to_string(&frac!(0)), "0");
        assert_eq!(UNICODE.render_to_string(&frac!(-24)), "\u{2212}24");
        assert_eq!(UNICODE.render_to_string(&frac!(-3 / 8)), "\u{2212}\u{215C}");
        assert_eq!(UNICODE.render_to_string(&frac!(1 / 2)), "\u{00BD}");
        assert_eq!(UNICODE.render_to_string(&frac!(-25 / 24)), "\u{2212}25\u{2044}24");
        assert_eq!(UNICODE.render_to_string(&frac!(11 / 12)), "11\u{2044}12");
    }

    #[test]
    fn test_typst() {
        assert_eq!(TYPST.render_to_string(&frac!(5 / 24)), "(5)/(24)");
        assert_eq!(TYPST.render_to_string(&frac!(-5 / 24)), "(-5)/(24)");
    }

    #[test]
    fn test_blocks() {
        let blocks = Block::Concatenation(vec![
            Block::new_text("x = "),
            Block::Ratio(-1, 3),
        ]);
        assert_eq!(ASCII.render_block(&blocks), "x = -1/3");
        assert_eq!(UNICODE.render_block(&blocks), "x = \u{2212}\u{2153}");
    }
}
