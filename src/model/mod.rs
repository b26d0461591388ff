// Topic modeling: LDA fitting and posterior queries.

pub mod lda;
