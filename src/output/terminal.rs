// Colored terminal output for the keyword report.
//
// The per-document line format is the report's one machine-readable
// surface:
//
//   <document text>: [<keyword>, <keyword>, ...]
//
// Everything else here (headers, the topic overview) is decoration
// around those lines.

use colored::Colorize;

use crate::extract::DocumentKeywords;
use crate::pipeline::KeywordReport;

/// Render one document's report line.
pub fn keyword_line(entry: &DocumentKeywords) -> String {
    format!("{}: [{}]", entry.text, entry.keywords.join(", "))
}

/// Display the per-document keyword lines in input order.
pub fn display_document_keywords(documents: &[DocumentKeywords]) {
    if documents.is_empty() {
        return;
    }

    println!(
        "\n{}",
        format!("=== Document Keywords ({} documents) ===", documents.len()).bold()
    );
    println!();

    for entry in documents {
        println!("{}", keyword_line(entry));
    }
    println!();
}

/// Display the discovered-topics overview.
pub fn display_topics(report: &KeywordReport) {
    println!(
        "\n{}",
        format!(
            "=== Discovered Topics ({} topics over {} terms) ===",
            report.num_topics, report.vocabulary_size
        )
        .bold()
    );
    println!();

    for summary in &report.topics {
        let terms = summary
            .terms
            .iter()
            .map(|t| format!("{} ({:.3}, n={})", t.word, t.probability, t.corpus_count))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {:>2}. {}", summary.topic + 1, terms.dimmed());
    }
    println!();
}
