pub mod full_segmenter;
pub mod lexeme;
pub mod segment_graph;
pub mod segmentation;
pub mod segmentor;
