pub mod lexicon;
pub mod resume;
