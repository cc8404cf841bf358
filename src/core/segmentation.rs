use std::fmt::{Display, Formatter};

use crate::core::lexeme::Lexeme;

/// 一种完整的切分方式，词元首尾相接覆盖整个句子
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Segmentation {
    lexemes: Vec<Lexeme>,
}

impl Segmentation {
    pub fn new(lexemes: Vec<Lexeme>) -> Self {
        Segmentation { lexemes }
    }

    pub fn lexemes(&self) -> &[Lexeme] {
        &self.lexemes
    }

    pub fn words(&self) -> Vec<&str> {
        self.lexemes.iter().map(Lexeme::get_text).collect()
    }

    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    // 还原原句
    pub fn text(&self) -> String {
        self.lexemes.iter().map(Lexeme::get_text).collect()
    }
}

impl Display for Segmentation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.words().join("/"))
    }
}

impl IntoIterator for Segmentation {
    type Item = Lexeme;
    type IntoIter = std::vec::IntoIter<Lexeme>;

    fn into_iter(self) -> Self::IntoIter {
        self.lexemes.into_iter()
    }
}
