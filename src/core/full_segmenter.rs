use crate::core::lexeme::Lexeme;
use crate::core::segment_graph::SegmentGraph;
use crate::core::segmentation::Segmentation;
use crate::core::segmentor::Segmenter;
use crate::dict::dictionary::Dictionary;

const SEGMENTER_NAME: &str = "FULL_SEGMENTER";

/// 全切分器：给出句子按词典所有可能的切分方式
pub struct FullSegmenter<'d> {
    dict: &'d Dictionary,
}

impl<'d> FullSegmenter<'d> {
    pub fn new(dict: &'d Dictionary) -> Self {
        FullSegmenter { dict }
    }

    pub fn graph(&self, sentence: &str) -> SegmentGraph {
        let chars: Vec<char> = sentence.chars().collect();
        SegmentGraph::build(&chars, self.dict)
    }

    /// 所有切分方式，顺序与“短前缀优先、逐层递归”一致
    pub fn segment(&self, sentence: &str) -> Vec<Segmentation> {
        let segmentations: Vec<Segmentation> = self.segment_iter(sentence).collect();
        log::debug!(
            "{} segmentations for {} chars",
            segmentations.len(),
            sentence.chars().count()
        );
        segmentations
    }

    pub fn segment_iter(&self, sentence: &str) -> impl Iterator<Item = Segmentation> {
        let chars: Vec<char> = sentence.chars().collect();
        let graph = SegmentGraph::build(&chars, self.dict);
        graph.into_paths().map(move |path| {
            Segmentation::new(
                path.into_iter()
                    .map(|(begin, end)| Lexeme::from_span(&chars, begin, end))
                    .collect(),
            )
        })
    }

    pub fn count(&self, sentence: &str) -> u128 {
        self.graph(sentence).count()
    }

    pub fn is_segmentable(&self, sentence: &str) -> bool {
        self.graph(sentence).is_segmentable()
    }
}

impl Segmenter for FullSegmenter<'_> {
    fn analyze(&self, input: &[char]) -> Vec<Lexeme> {
        let graph = SegmentGraph::build(input, self.dict);
        let lexemes: Vec<Lexeme> = graph
            .spans()
            .into_iter()
            .map(|(begin, end)| Lexeme::from_span(input, begin, end))
            .collect();
        log::trace!("{} lexemes from {} chars", lexemes.len(), input.len());
        lexemes
    }

    fn name(&self) -> &str {
        SEGMENTER_NAME
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const SENTENCE: &str = "常经有意见分歧";

    fn fixture_dict() -> Dictionary {
        let _ = env_logger::builder().is_test(true).try_init();
        Dictionary::from_words([
            ("经常", 0.1),
            ("经", 0.05),
            ("有", 0.1),
            ("常", 0.001),
            ("有意见", 0.1),
            ("歧", 0.001),
            ("意见", 0.2),
            ("分歧", 0.2),
            ("见", 0.05),
            ("意", 0.05),
            ("见分歧", 0.05),
            ("分", 0.1),
        ])
    }

    fn words_of(segmentations: &[Segmentation]) -> Vec<Vec<&str>> {
        segmentations.iter().map(Segmentation::words).collect()
    }

    // 枚举句子的全部 2^(n-1) 种划分，保留全部由词典词组成的
    fn brute_force(sentence: &str, dict: &Dictionary) -> HashSet<Vec<String>> {
        let chars: Vec<char> = sentence.chars().collect();
        let mut result = HashSet::new();
        if chars.is_empty() {
            result.insert(Vec::new());
            return result;
        }
        let cuts = chars.len() - 1;
        for mask in 0..(1_u32 << cuts) {
            let mut words = Vec::new();
            let mut begin = 0;
            for i in 0..=cuts {
                if i == cuts || mask & (1 << i) != 0 {
                    words.push(chars[begin..=i].iter().collect::<String>());
                    begin = i + 1;
                }
            }
            if words.iter().all(|w| dict.contains(w)) {
                result.insert(words);
            }
        }
        result
    }

    #[test]
    fn full_cut_fixture() {
        let dict = fixture_dict();
        let segmenter = FullSegmenter::new(&dict);
        let result = segmenter.segment(SENTENCE);
        assert_eq!(
            vec![
                vec!["常", "经", "有", "意", "见", "分", "歧"],
                vec!["常", "经", "有", "意", "见", "分歧"],
                vec!["常", "经", "有", "意", "见分歧"],
                vec!["常", "经", "有", "意见", "分", "歧"],
                vec!["常", "经", "有", "意见", "分歧"],
                vec!["常", "经", "有意见", "分", "歧"],
                vec!["常", "经", "有意见", "分歧"],
            ],
            words_of(&result)
        );
        assert_eq!(7, segmenter.count(SENTENCE));
    }

    #[test]
    fn every_segmentation_rebuilds_sentence() {
        let dict = fixture_dict();
        let segmenter = FullSegmenter::new(&dict);
        for segmentation in segmenter.segment(SENTENCE) {
            assert_eq!(SENTENCE, segmentation.text());
            let mut expected_begin = 0;
            for lexeme in segmentation.lexemes() {
                assert!(dict.contains(lexeme.get_text()));
                assert!(lexeme.get_length() > 0);
                assert_eq!(expected_begin, lexeme.get_begin());
                expected_begin = lexeme.get_end_position();
            }
        }
    }

    #[test]
    fn matches_brute_force_enumeration() {
        let dict = Dictionary::from_words(
            ["a", "b", "ab", "ba", "aba", "bab", "abab"]
                .iter()
                .map(|w| (*w, 1.0)),
        );
        let segmenter = FullSegmenter::new(&dict);
        for sentence in ["", "a", "ab", "abab", "babab", "ababab", "abbaab", "abc", "cab"] {
            let result = segmenter.segment(sentence);
            let got: Vec<Vec<String>> = result
                .iter()
                .map(|s| s.words().into_iter().map(String::from).collect())
                .collect();
            let unique: HashSet<Vec<String>> = got.iter().cloned().collect();
            assert_eq!(got.len(), unique.len(), "duplicates for {}", sentence);
            assert_eq!(brute_force(sentence, &dict), unique, "{}", sentence);
            assert_eq!(got.len() as u128, segmenter.count(sentence));
        }
    }

    #[test]
    fn empty_sentence() {
        let dict = fixture_dict();
        let segmenter = FullSegmenter::new(&dict);
        let result = segmenter.segment("");
        assert_eq!(1, result.len());
        assert!(result[0].is_empty());

        let empty = Dictionary::new();
        let result = FullSegmenter::new(&empty).segment("");
        assert_eq!(vec![Segmentation::default()], result);
    }

    #[test]
    fn empty_dictionary() {
        let dict = Dictionary::new();
        let segmenter = FullSegmenter::new(&dict);
        assert!(segmenter.segment(SENTENCE).is_empty());
        assert!(segmenter.segment("a").is_empty());
        assert!(!segmenter.is_segmentable("a"));
    }

    #[test]
    fn unsegmentable_sentence() {
        let dict = fixture_dict();
        let segmenter = FullSegmenter::new(&dict);
        assert!(segmenter.segment("常经有意见分歧了").is_empty());
        assert_eq!(0, segmenter.count("常经有意见分歧了"));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let dict = fixture_dict();
        let segmenter = FullSegmenter::new(&dict);
        let first = segmenter.segment(SENTENCE);
        let second = segmenter.segment(SENTENCE);
        assert_eq!(first, second);
    }

    #[test]
    fn segment_iter_is_lazy_in_same_order() {
        let dict = fixture_dict();
        let segmenter = FullSegmenter::new(&dict);
        let first = segmenter.segment_iter(SENTENCE).next().unwrap();
        assert_eq!("常/经/有/意/见/分/歧", first.to_string());
    }

    #[test]
    fn analyze_collects_lexemes_of_all_segmentations() {
        let dict = fixture_dict();
        let segmenter = FullSegmenter::new(&dict);
        let chars: Vec<char> = SENTENCE.chars().collect();
        let lexemes = segmenter.analyze(&chars);

        let union: HashSet<Lexeme> = segmenter
            .segment(SENTENCE)
            .into_iter()
            .flat_map(Segmentation::into_iter)
            .collect();
        assert_eq!(union.len(), lexemes.len());
        assert!(lexemes.iter().all(|l| union.contains(l)));

        let texts: Vec<&str> = lexemes.iter().map(Lexeme::get_text).collect();
        assert_eq!(
            vec!["常", "经", "有", "有意见", "意", "意见", "见", "见分歧", "分", "分歧", "歧"],
            texts
        );
        assert_eq!("FULL_SEGMENTER", segmenter.name());
    }
}
