// End-to-end keyword extraction pipeline.
//
// One linear sequence per run: preprocess every document, build the
// vocabulary and bag-of-words corpus, fit the LDA model, then pull
// thresholded keywords per document. Degenerate inputs fail fast here,
// before any sampling starts.

use anyhow::{bail, Result};
use tracing::info;

use crate::corpus::lexicon::Lexicon;
use crate::corpus::preprocess::tokenize;
use crate::corpus::vocabulary::Corpus;
use crate::extract::{self, DocumentKeywords, ExtractParams, KeywordExtractor, TopicSummary};
use crate::model::lda::{LdaModel, LdaParams};

/// Everything one run produces: per-document keywords in input order,
/// plus the topic overview and corpus stats the report prints.
#[derive(Debug)]
pub struct KeywordReport {
    pub documents: Vec<DocumentKeywords>,
    pub topics: Vec<TopicSummary>,
    pub vocabulary_size: usize,
    /// Effective topic count, possibly clamped below the requested one.
    pub num_topics: usize,
}

/// The full LDA keyword pipeline with its configuration.
pub struct LdaPipeline {
    pub lexicon: Lexicon,
    pub lda: LdaParams,
    pub extract: ExtractParams,
}

impl Default for LdaPipeline {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::english(),
            lda: LdaParams::default(),
            extract: ExtractParams::default(),
        }
    }
}

impl LdaPipeline {
    /// Run the pipeline over `documents` and collect the full report.
    pub fn run(&self, documents: &[String]) -> Result<KeywordReport> {
        if documents.is_empty() {
            bail!("no documents to analyze: the input list is empty");
        }

        let token_docs: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(doc, &self.lexicon))
            .collect();

        let corpus = Corpus::from_token_docs(&token_docs);
        if corpus.vocabulary.is_empty() {
            bail!(
                "vocabulary is empty: none of the {} documents kept a single \
                 token after stopword and length filtering",
                documents.len()
            );
        }
        info!(
            documents = corpus.len(),
            vocabulary = corpus.vocabulary.len(),
            tokens = corpus.token_total(),
            "Corpus encoded"
        );

        let model = LdaModel::fit(&corpus, &self.lda)?;

        let mut results = Vec::with_capacity(documents.len());
        for (doc, text) in documents.iter().enumerate() {
            let keywords = extract::document_keywords(&model, &corpus, doc, &self.extract)?;
            results.push(DocumentKeywords {
                text: text.clone(),
                keywords,
            });
        }

        let topics = extract::topic_summaries(&model, &corpus, self.extract.words_per_topic)?;

        Ok(KeywordReport {
            documents: results,
            topics,
            vocabulary_size: corpus.vocabulary.len(),
            num_topics: model.num_topics(),
        })
    }
}

impl KeywordExtractor for LdaPipeline {
    fn extract(&self, documents: &[String]) -> Result<Vec<DocumentKeywords>> {
        Ok(self.run(documents)?.documents)
    }
}
