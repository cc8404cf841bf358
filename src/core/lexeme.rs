use std::fmt::{Display, Formatter};

/// 词元
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lexeme {
    // 词元的起始字符位置
    begin: usize,
    // 词元的字符长度
    length: usize,
    text: String,
}

impl Lexeme {
    pub fn new(begin: usize, length: usize, text: String) -> Self {
        Lexeme {
            begin,
            length,
            text,
        }
    }

    pub(crate) fn from_span(chars: &[char], begin: usize, end: usize) -> Self {
        Lexeme::new(begin, end - begin, chars[begin..end].iter().collect())
    }

    pub fn get_begin(&self) -> usize {
        self.begin
    }

    pub fn get_length(&self) -> usize {
        self.length
    }

    /// 结束位置（不含）
    pub fn get_end_position(&self) -> usize {
        self.begin + self.length
    }

    pub fn get_text(&self) -> &str {
        &self.text
    }
}

impl Display for Lexeme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{} : {}",
            self.begin,
            self.get_end_position(),
            self.text
        )
    }
}
