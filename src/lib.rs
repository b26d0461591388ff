// Gleaner: representative keyword extraction via LDA topic modeling.
//
// This is the library root. Each module corresponds to a stage of the
// extraction pipeline.

pub mod corpus;
pub mod extract;
pub mod model;
pub mod output;
pub mod pipeline;
