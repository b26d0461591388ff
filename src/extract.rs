// Keyword extraction: thresholded topics mapped back to vocabulary words.
//
// A document's keywords are the top words of every topic whose inferred
// probability strictly exceeds the threshold, concatenated in topic order.
// A document where no topic clears the threshold gets an empty list; that
// is a reportable outcome, not an error.

use anyhow::{bail, Result};

use crate::corpus::vocabulary::Corpus;
use crate::model::lda::LdaModel;

/// Thresholding knobs for keyword extraction.
#[derive(Debug, Clone)]
pub struct ExtractParams {
    /// Minimum topic probability. Strict: a topic sitting exactly at the
    /// threshold is dropped.
    pub probability_threshold: f64,
    /// Words contributed by each retained topic.
    pub words_per_topic: usize,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            probability_threshold: 0.1,
            words_per_topic: 3,
        }
    }
}

/// Keywords extracted for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentKeywords {
    /// The original document text, untouched by preprocessing.
    pub text: String,
    /// Top words of the document's retained topics, in topic order.
    pub keywords: Vec<String>,
}

/// Document list in, per-document keyword lists out.
///
/// The single seam between the report and whatever produces the keywords.
/// Lets the LDA pipeline be swapped for a different topic backend without
/// touching the output layer.
pub trait KeywordExtractor {
    fn extract(&self, documents: &[String]) -> Result<Vec<DocumentKeywords>>;
}

/// One ranked word of a topic overview entry.
#[derive(Debug, Clone)]
pub struct TopicTerm {
    pub word: String,
    /// Probability of the word within the topic.
    pub probability: f64,
    /// Occurrences of the word across the whole corpus.
    pub corpus_count: u64,
}

/// Top words of one topic, for the report's topic overview.
#[derive(Debug, Clone)]
pub struct TopicSummary {
    pub topic: usize,
    /// Ranked terms, highest probability first.
    pub terms: Vec<TopicTerm>,
}

/// Extract the keyword list for one document from a fitted model.
///
/// Walks the document's topic distribution in topic order, keeps topics
/// with probability strictly above the threshold, and resolves each
/// retained topic's top words through the corpus vocabulary.
pub fn document_keywords(
    model: &LdaModel,
    corpus: &Corpus,
    doc: usize,
    params: &ExtractParams,
) -> Result<Vec<String>> {
    let mut keywords = Vec::new();
    for (topic, probability) in model.document_topics(doc)? {
        if probability <= params.probability_threshold {
            continue;
        }
        for (term, _) in model.topic_terms(topic, params.words_per_topic)? {
            let Some(word) = corpus.vocabulary.term(term) else {
                bail!("term id {term} not in the vocabulary: model and corpus do not match");
            };
            keywords.push(word.to_string());
        }
    }
    Ok(keywords)
}

/// Top-word summaries for every topic in the model, with each word's
/// corpus-wide occurrence count alongside its in-topic probability.
pub fn topic_summaries(
    model: &LdaModel,
    corpus: &Corpus,
    words_per_topic: usize,
) -> Result<Vec<TopicSummary>> {
    let mut summaries = Vec::with_capacity(model.num_topics());
    for topic in 0..model.num_topics() {
        let mut terms = Vec::new();
        for (term, probability) in model.topic_terms(topic, words_per_topic)? {
            let Some(word) = corpus.vocabulary.term(term) else {
                bail!("term id {term} not in the vocabulary: model and corpus do not match");
            };
            terms.push(TopicTerm {
                word: word.to_string(),
                probability,
                corpus_count: corpus.vocabulary.count(term),
            });
        }
        summaries.push(TopicSummary { topic, terms });
    }
    Ok(summaries)
}
