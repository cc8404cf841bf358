use std::collections::HashMap;

use crate::dict::hit::Hit;

#[derive(Debug, Default)]
pub struct TrieNode {
    value: Option<char>,
    // 词尾节点才带有词频
    weight: Option<f64>,
    child_nodes: HashMap<char, TrieNode>,
}

impl TrieNode {
    pub fn new(c: char) -> Self {
        TrieNode {
            value: Some(c),
            weight: None,
            child_nodes: HashMap::new(),
        }
    }

    pub fn has_childs(&self) -> bool {
        !self.child_nodes.is_empty()
    }

    pub fn is_final_state(&self) -> bool {
        self.weight.is_some()
    }

    fn find<C: Iterator<Item = char>>(&self, chars: C) -> Option<&TrieNode> {
        let mut current_node = self;
        for c in chars {
            current_node = current_node.child_nodes.get(&c)?;
        }
        Some(current_node)
    }

    pub fn exist<C: Iterator<Item = char>>(&self, chars: C) -> bool {
        self.find(chars).map_or(false, TrieNode::is_final_state)
    }

    pub fn weight<C: Iterator<Item = char>>(&self, chars: C) -> Option<f64> {
        self.find(chars).and_then(|node| node.weight)
    }

    /// 返回该词此前是否存在
    pub fn delete<C: Iterator<Item = char>>(&mut self, chars: C) -> bool {
        let mut current_node = self;
        for c in chars {
            match current_node.child_nodes.get_mut(&c) {
                Some(node) => current_node = node,
                None => return false,
            }
        }
        current_node.weight.take().is_some()
    }

    /// 返回该词是否为新增
    pub fn insert<C: Iterator<Item = char>>(&mut self, chars: C, weight: f64) -> bool {
        let mut current_node = self;
        for c in chars {
            current_node = current_node
                .child_nodes
                .entry(c)
                .or_insert_with(|| TrieNode::new(c));
        }
        current_node.weight.replace(weight).is_none()
    }

    /// 从 offset 开始，在 length 个字符内匹配所有以 offset 起始的词
    pub fn match_with_offset(&self, char_list: &[char], offset: usize, length: usize) -> Vec<Hit> {
        let mut hits = Vec::new();
        if offset
            .checked_add(length)
            .map_or(true, |end| end > char_list.len())
        {
            return hits;
        }
        let mut current_node = self;
        let mut end = offset;
        let mut exhausted = true;
        for (counter, c) in char_list.iter().enumerate().skip(offset).take(length) {
            match current_node.child_nodes.get(c) {
                Some(node) => current_node = node,
                None => {
                    exhausted = false;
                    break;
                }
            }
            end = counter;
            if current_node.is_final_state() {
                let mut hit = Hit::new();
                hit.begin = offset;
                hit.end = end;
                hit.set_match();
                if current_node.has_childs() {
                    hit.set_prefix();
                }
                hits.push(hit);
            }
        }
        // 输入结束时仍停在某个更长词的中间
        if exhausted && current_node.value.is_some() && !current_node.is_final_state() {
            let mut hit = Hit::new();
            hit.begin = offset;
            hit.end = end;
            hit.set_prefix();
            hits.push(hit);
        }
        hits
    }
}

#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn insert<C: Iterator<Item = char>>(&mut self, chars: C, weight: f64) -> bool {
        self.root.insert(chars, weight)
    }

    pub fn delete<C: Iterator<Item = char>>(&mut self, chars: C) -> bool {
        self.root.delete(chars)
    }

    pub fn exist<C: Iterator<Item = char>>(&self, chars: C) -> bool {
        self.root.exist(chars)
    }

    pub fn weight<C: Iterator<Item = char>>(&self, chars: C) -> Option<f64> {
        self.root.weight(chars)
    }

    pub fn match_word<C: Iterator<Item = char>>(&self, chars: C) -> Vec<Hit> {
        let char_list: Vec<char> = chars.collect();
        self.root.match_with_offset(&char_list, 0, char_list.len())
    }

    pub fn match_word_with_offset(&self, chars: &[char], offset: usize, length: usize) -> Vec<Hit> {
        self.root.match_with_offset(chars, offset, length)
    }
}
