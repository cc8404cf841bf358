//! 词图：句子每个字符位置为一个节点，`sentence[i..j]` 为词典词时有边 `i -> j`。
//!
//! 每个节点记录以它起始的后缀能否被完整切分，枚举时只沿能走到句尾的边前进。

use std::borrow::Cow;

use crate::dict::dictionary::Dictionary;

/// `[begin, end)` 字符区间
pub type Span = (usize, usize);

#[derive(Debug, Clone)]
pub struct SegmentGraph {
    // edges[i]: 以 i 起始的词的结束位置，升序
    edges: Vec<Vec<usize>>,
    // completes[i]: 后缀 sentence[i..] 可被完整切分
    completes: Vec<bool>,
}

impl SegmentGraph {
    pub fn build(chars: &[char], dict: &Dictionary) -> Self {
        let char_count = chars.len();
        let mut edges = Vec::with_capacity(char_count + 1);
        for offset in 0..char_count {
            let ends: Vec<usize> = dict
                .match_in_main_dict_with_offset(chars, offset, char_count - offset)
                .iter()
                .filter(|hit| hit.is_match())
                .map(|hit| hit.end + 1)
                .collect();
            edges.push(ends);
        }
        edges.push(Vec::new());

        let mut completes = vec![false; char_count + 1];
        completes[char_count] = true;
        for i in (0..char_count).rev() {
            completes[i] = edges[i].iter().any(|&j| completes[j]);
        }
        SegmentGraph { edges, completes }
    }

    /// 句子字符数
    pub fn len(&self) -> usize {
        self.edges.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_segmentable(&self) -> bool {
        self.completes[0]
    }

    /// 切分方式总数，溢出时取 `u128::MAX`
    pub fn count(&self) -> u128 {
        let char_count = self.len();
        let mut counts = vec![0_u128; char_count + 1];
        counts[char_count] = 1;
        for i in (0..char_count).rev() {
            counts[i] = self.edges[i]
                .iter()
                .fold(0_u128, |acc, &j| acc.saturating_add(counts[j]));
        }
        counts[0]
    }

    /// 按短词优先的深度优先顺序枚举所有完整路径
    pub fn paths(&self) -> Paths<'_> {
        Paths::new(Cow::Borrowed(self))
    }

    pub fn into_paths(self) -> Paths<'static> {
        Paths::new(Cow::Owned(self))
    }

    /// 至少出现在一条完整路径上的边，按起点、终点升序
    pub fn spans(&self) -> Vec<Span> {
        let char_count = self.len();
        let mut reached = vec![false; char_count + 1];
        reached[0] = true;
        let mut spans = Vec::new();
        for i in 0..char_count {
            if !reached[i] || !self.completes[i] {
                continue;
            }
            for &j in &self.edges[i] {
                if self.completes[j] {
                    reached[j] = true;
                    spans.push((i, j));
                }
            }
        }
        spans
    }
}

/// 显式栈遍历，不依赖递归深度
pub struct Paths<'g> {
    graph: Cow<'g, SegmentGraph>,
    // (节点, 下一条待尝试的边)
    stack: Vec<(usize, usize)>,
}

impl<'g> Paths<'g> {
    fn new(graph: Cow<'g, SegmentGraph>) -> Self {
        let stack = if graph.is_segmentable() {
            vec![(0, 0)]
        } else {
            Vec::new()
        };
        Paths { graph, stack }
    }
}

impl Iterator for Paths<'_> {
    type Item = Vec<Span>;

    fn next(&mut self) -> Option<Self::Item> {
        let graph: &SegmentGraph = &self.graph;
        let char_count = graph.len();
        loop {
            let (node, cursor) = *self.stack.last()?;
            if node == char_count {
                let path = self.stack.windows(2).map(|w| (w[0].0, w[1].0)).collect();
                self.stack.pop();
                return Some(path);
            }
            let edges = &graph.edges[node];
            match edges[cursor..].iter().position(|&j| graph.completes[j]) {
                Some(skip) => {
                    let next = edges[cursor + skip];
                    if let Some(top) = self.stack.last_mut() {
                        top.1 = cursor + skip + 1;
                    }
                    self.stack.push((next, 0));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
