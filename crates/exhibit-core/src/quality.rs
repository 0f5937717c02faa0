pub mod similarity;

pub use similarity::{score_difference, similarity_score};
