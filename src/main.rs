use anyhow::Result;
use tracing::info;

use gleaner::output::terminal;
use gleaner::pipeline::LdaPipeline;

/// The corpus to analyze. Documents and hyperparameters are source-time
/// constants; the tool takes no command-line arguments.
const DOCUMENTS: &[&str] = &[
    "Artem Zymovets chef",
    "Python is a popular programming language for data science and artificial intelligence.",
    "Natural language processing is a subfield of linguistics, computer science, and artificial \
     intelligence.",
    "Deep learning is part of a broader family of machine learning methods based on artificial \
     neural networks.",
    "Data mining is the process of discovering patterns in large data sets involving methods at \
     the intersection of machine learning, statistics, and database systems.",
];

fn main() -> Result<()> {
    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gleaner=info")),
        )
        .init();

    let documents: Vec<String> = DOCUMENTS.iter().map(|doc| doc.to_string()).collect();
    info!(documents = documents.len(), "Running keyword extraction");

    let pipeline = LdaPipeline::default();
    let report = pipeline.run(&documents)?;

    terminal::display_topics(&report);
    terminal::display_document_keywords(&report.documents);

    Ok(())
}
