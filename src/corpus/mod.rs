// Corpus construction: tokenization and bag-of-words encoding.

pub mod lexicon;
pub mod preprocess;
pub mod vocabulary;
