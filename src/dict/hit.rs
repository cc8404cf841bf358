const UNMATCH: u8 = 0b0000_0000;
const MATCH: u8 = 0b0000_0001;
const PREFIX: u8 = 0b0000_0010;

/// 词典匹配结果
///
/// `begin`/`end` 为字符位置，`end` 包含在内。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hit {
    pub begin: usize,
    pub end: usize,
    hit_state: u8,
}

impl Hit {
    pub fn new() -> Self {
        Hit {
            begin: 0,
            end: 0,
            hit_state: UNMATCH,
        }
    }

    // 完全匹配
    pub fn is_match(&self) -> bool {
        self.hit_state & MATCH > 0
    }

    pub fn set_match(&mut self) {
        self.hit_state |= MATCH;
    }

    // 是否是词的前缀
    pub fn is_prefix(&self) -> bool {
        self.hit_state & PREFIX > 0
    }

    pub fn set_prefix(&mut self) {
        self.hit_state |= PREFIX;
    }

    pub fn is_unmatch(&self) -> bool {
        self.hit_state == UNMATCH
    }

    /// 命中的字符数
    pub fn length(&self) -> usize {
        self.end - self.begin + 1
    }
}
