pub mod config;
pub mod core;
pub mod dict;
pub mod error;

use std::sync::{Arc, PoisonError, RwLock};

use tantivy::tokenizer::{BoxTokenStream, Token, TokenStream, Tokenizer};

use crate::core::full_segmenter::FullSegmenter;
use crate::core::segmentation::Segmentation;
use crate::core::segmentor::Segmenter;
use crate::dict::dictionary::{Dictionary, GLOBAL_DICT};

pub use crate::error::{FullCutError, Result};

/// 按词典给出句子的所有切分方式
pub fn segment(sentence: &str, dictionary: &Dictionary) -> Vec<Segmentation> {
    FullSegmenter::new(dictionary).segment(sentence)
}

/// 索引用分词器：输出至少出现在一种完整切分中的所有词
#[derive(Clone)]
pub struct FullCutTokenizer {
    dict: Arc<RwLock<Dictionary>>,
}

pub struct FullCutTokenStream {
    tokens: Vec<Token>,
    index: usize,
}

impl TokenStream for FullCutTokenStream {
    fn advance(&mut self) -> bool {
        if self.index < self.tokens.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    fn token(&self) -> &Token {
        &self.tokens[self.index - 1]
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.tokens[self.index - 1]
    }
}

impl FullCutTokenizer {
    pub fn new(dict: Dictionary) -> Self {
        Self {
            dict: Arc::new(RwLock::new(dict)),
        }
    }

    pub fn with_shared(dict: Arc<RwLock<Dictionary>>) -> Self {
        Self { dict }
    }
}

impl Default for FullCutTokenizer {
    fn default() -> Self {
        Self::with_shared(Arc::clone(&*GLOBAL_DICT))
    }
}

impl Tokenizer for FullCutTokenizer {
    fn token_stream<'a>(&self, text: &'a str) -> BoxTokenStream<'a> {
        let mut indices = text.char_indices().map(|(i, _)| i).collect::<Vec<_>>();
        let chars = text.chars().collect::<Vec<_>>();
        indices.push(text.len());
        let lexemes = {
            let dict = self.dict.read().unwrap_or_else(PoisonError::into_inner);
            FullSegmenter::new(&dict).analyze(&chars)
        };
        if lexemes.is_empty() && !chars.is_empty() {
            log::debug!("no full segmentation for text of {} chars", chars.len());
        }
        let tokens = lexemes
            .iter()
            .map(|lexeme| {
                let offset_from = indices[lexeme.get_begin()];
                let offset_to = indices[lexeme.get_end_position()];
                Token {
                    offset_from,
                    offset_to,
                    position: lexeme.get_begin(),
                    text: String::from(&text[offset_from..offset_to]),
                    position_length: lexeme.get_length(),
                }
            })
            .collect();
        BoxTokenStream::from(FullCutTokenStream { tokens, index: 0 })
    }
}
