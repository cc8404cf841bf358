use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::config::configuration::{Configuration, DefaultConfig};
use crate::dict::hit::Hit;
use crate::dict::trie::Trie;
use crate::error::{FullCutError, Result};

pub static GLOBAL_DICT: Lazy<Arc<RwLock<Dictionary>>> =
    Lazy::new(|| Arc::new(RwLock::new(Dictionary::load_or_empty(DefaultConfig::load()))));

type Dict = Trie;

#[derive(Debug, Default)]
/// Dictionary Manager
pub struct Dictionary {
    // 主词典对象
    main_dict: Dict,
    // 词条数
    size: usize,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    // 加载主词典及扩展词典
    pub fn from_config(cfg: &dyn Configuration) -> Result<Self> {
        let mut dict = Dictionary::default();
        let total = dict.load_file(cfg.get_main_dictionary())?;
        log::info!("load main_dict size = {}", total);
        let mut ext_total = 0;
        for ext_dict_file in cfg.get_ext_dictionaries() {
            ext_total += dict.load_file(ext_dict_file)?;
        }
        log::info!("ext dict total size = {}", ext_total);
        Ok(dict)
    }

    /// 配置或词典加载失败时记录错误并返回空词典
    pub fn load_or_empty(cfg: Result<DefaultConfig>) -> Self {
        cfg.and_then(|cfg| Dictionary::from_config(&cfg))
            .unwrap_or_else(|e| {
                log::error!("load global dictionary failed, fall back to empty: {}", e);
                Dictionary::default()
            })
    }

    /// 插入或更新词条，空词被拒绝
    pub fn insert(&mut self, word: &str, weight: f64) -> bool {
        if word.is_empty() {
            log::warn!("reject empty word");
            return false;
        }
        if self.main_dict.insert(word.chars(), weight) {
            self.size += 1;
        }
        true
    }

    // 批量加载新词条
    pub fn add_words(&mut self, words: Vec<&str>) {
        for word in words {
            self.insert(word, 0.0);
        }
    }

    // 批量移除（屏蔽）词条
    pub fn disable_words(&mut self, words: Vec<&str>) {
        for word in words {
            if self.main_dict.delete(word.chars()) {
                self.size -= 1;
            }
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        !word.is_empty() && self.main_dict.exist(word.chars())
    }

    pub fn weight(&self, word: &str) -> Option<f64> {
        if word.is_empty() {
            return None;
        }
        self.main_dict.weight(word.chars())
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    // 检索匹配主词典
    pub fn match_in_main_dict(&self, word: &str) -> Vec<Hit> {
        self.main_dict.match_word(word.chars())
    }

    // 检索匹配主词典
    pub fn match_in_main_dict_with_offset(
        &self,
        chars: &[char],
        offset: usize,
        length: usize,
    ) -> Vec<Hit> {
        self.main_dict.match_word_with_offset(chars, offset, length)
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| FullCutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&content, &path.display().to_string())
    }

    /// 每行 `词 [词频]`，`#` 开头为注释
    pub fn load_str(&mut self, content: &str, source_name: &str) -> Result<usize> {
        let mut total = 0_usize;
        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut it = line.split_whitespace();
            let word = match it.next() {
                Some(word) => word,
                None => continue,
            };
            let weight = match it.next() {
                Some(value) => value
                    .parse::<f64>()
                    .map_err(|_| FullCutError::InvalidWeight {
                        source_name: source_name.to_string(),
                        line: idx + 1,
                        value: value.to_string(),
                    })?,
                None => 0.0,
            };
            if self.insert(word, weight) {
                total += 1;
            }
        }
        log::debug!("{}: {} entries", source_name, total);
        Ok(total)
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (S, f64)>>(iter: T) -> Self {
        let mut dict = Dictionary::default();
        for (word, weight) in iter {
            dict.insert(word.as_ref(), weight);
        }
        dict
    }
}
