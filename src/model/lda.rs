// Latent Dirichlet Allocation via collapsed Gibbs sampling.
//
// Every token position carries a topic assignment z. One pass resamples
// each position from the conditional
//
//   p(z = k) proportional to (n_dk + alpha) * (n_kw + beta) / (n_k + V*beta)
//
// where n_dk counts tokens of document d assigned to topic k, n_kw counts
// corpus-wide assignments of word w to topic k, and n_k is topic k's total.
// After the final pass the smoothed estimates are
//
//   theta[d][k] = (n_dk + alpha) / (N_d + K*alpha)   document over topics
//   phi[k][w]   = (n_kw + beta)  / (n_k + V*beta)    topic over words
//
// Training is stochastic: with `seed: None` every run starts from fresh OS
// entropy and the discovered topics differ run to run. Tests pass a seed.

use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::corpus::vocabulary::{Corpus, TermId};

/// Hyperparameters for one LDA fit.
#[derive(Debug, Clone)]
pub struct LdaParams {
    /// Number of topics to discover. Clamped to the vocabulary size when
    /// the corpus has fewer distinct terms than requested.
    pub num_topics: usize,
    /// Full Gibbs sweeps over every token in the corpus.
    pub passes: usize,
    /// Symmetric Dirichlet prior on document-topic distributions.
    pub alpha: f64,
    /// Symmetric Dirichlet prior on topic-word distributions.
    pub beta: f64,
    /// Sampler seed. `None` draws from OS entropy, so topics vary run to
    /// run. Supply a value for reproducible fits.
    pub seed: Option<u64>,
}

impl Default for LdaParams {
    fn default() -> Self {
        Self {
            num_topics: 5,
            passes: 15,
            alpha: 0.1,
            beta: 0.01,
            seed: None,
        }
    }
}

/// A fitted LDA model.
///
/// Holds the final assignment counts; the theta and phi estimates are
/// derived on demand from them.
#[derive(Debug)]
pub struct LdaModel {
    num_topics: usize,
    vocab_size: usize,
    alpha: f64,
    beta: f64,
    /// N_d: token total per document.
    doc_totals: Vec<usize>,
    /// n_dk: tokens of document d assigned to topic k.
    doc_topic: Vec<Vec<usize>>,
    /// n_kw: corpus-wide assignments of word w to topic k.
    topic_term: Vec<Vec<usize>>,
    /// n_k: token total per topic.
    topic_totals: Vec<usize>,
}

impl LdaModel {
    /// Fit a model to an encoded corpus.
    ///
    /// Degenerate input fails here, before any sampling: an empty corpus,
    /// an empty vocabulary, or a zero topic count.
    pub fn fit(corpus: &Corpus, params: &LdaParams) -> Result<Self> {
        if corpus.is_empty() {
            bail!("no documents to model: the corpus is empty");
        }
        let vocab_size = corpus.vocabulary.len();
        if vocab_size == 0 {
            bail!(
                "vocabulary is empty: every token was removed by the stopword \
                 and length filters, so there is nothing to model"
            );
        }
        if params.num_topics == 0 {
            bail!("num_topics must be at least 1");
        }

        let mut num_topics = params.num_topics;
        if num_topics > vocab_size {
            warn!(
                requested = num_topics,
                vocabulary = vocab_size,
                "Fewer distinct terms than topics; clamping topic count"
            );
            num_topics = vocab_size;
        }

        // Expand the sparse counts into flat token streams. LDA treats a
        // document as an exchangeable bag, so the synthetic order is fine.
        let docs: Vec<Vec<TermId>> = corpus
            .documents
            .iter()
            .map(|bow| {
                let mut words = Vec::with_capacity(bow.token_total() as usize);
                for &(term, count) in bow.counts() {
                    for _ in 0..count {
                        words.push(term);
                    }
                }
                words
            })
            .collect();

        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        // Random initial assignment for every position.
        let mut doc_topic = vec![vec![0usize; num_topics]; docs.len()];
        let mut topic_term = vec![vec![0usize; vocab_size]; num_topics];
        let mut topic_totals = vec![0usize; num_topics];
        let mut assignments: Vec<Vec<usize>> = Vec::with_capacity(docs.len());

        for (d, words) in docs.iter().enumerate() {
            let mut z = Vec::with_capacity(words.len());
            for &w in words {
                let k = rng.random_range(0..num_topics);
                doc_topic[d][k] += 1;
                topic_term[k][w] += 1;
                topic_totals[k] += 1;
                z.push(k);
            }
            assignments.push(z);
        }

        let beta_total = vocab_size as f64 * params.beta;

        let progress = ProgressBar::new(params.passes as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("  Sampling [{bar:30}] pass {pos}/{len} ({eta})")
                .unwrap(),
        );

        let mut weights = vec![0.0f64; num_topics];
        for pass in 0..params.passes {
            for (d, words) in docs.iter().enumerate() {
                for (i, &w) in words.iter().enumerate() {
                    // Remove the current assignment from the counts, then
                    // resample this position against the remainder.
                    let old = assignments[d][i];
                    doc_topic[d][old] -= 1;
                    topic_term[old][w] -= 1;
                    topic_totals[old] -= 1;

                    for (k, weight) in weights.iter_mut().enumerate() {
                        let doc_part = doc_topic[d][k] as f64 + params.alpha;
                        let term_part = (topic_term[k][w] as f64 + params.beta)
                            / (topic_totals[k] as f64 + beta_total);
                        *weight = doc_part * term_part;
                    }

                    // Positive priors keep the weights valid; the uniform
                    // draw only covers pathological float underflow.
                    let next = match WeightedIndex::new(&weights) {
                        Ok(dist) => dist.sample(&mut rng),
                        Err(_) => rng.random_range(0..num_topics),
                    };

                    assignments[d][i] = next;
                    doc_topic[d][next] += 1;
                    topic_term[next][w] += 1;
                    topic_totals[next] += 1;
                }
            }
            progress.inc(1);
            debug!(pass = pass + 1, total = params.passes, "Gibbs pass complete");
        }
        progress.finish_and_clear();

        info!(
            documents = docs.len(),
            vocabulary = vocab_size,
            topics = num_topics,
            passes = params.passes,
            "LDA model fitted"
        );

        Ok(Self {
            num_topics,
            vocab_size,
            alpha: params.alpha,
            beta: params.beta,
            doc_totals: docs.iter().map(Vec::len).collect(),
            doc_topic,
            topic_term,
            topic_totals,
        })
    }

    /// Effective topic count, after any clamp to the vocabulary size.
    pub fn num_topics(&self) -> usize {
        self.num_topics
    }

    /// Number of documents the model was fitted on.
    pub fn num_documents(&self) -> usize {
        self.doc_topic.len()
    }

    /// Vocabulary size the model was fitted against.
    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// The theta row for one document: (topic, probability) for every
    /// topic, in topic order. Probabilities sum to one.
    pub fn document_topics(&self, doc: usize) -> Result<Vec<(usize, f64)>> {
        let Some(counts) = self.doc_topic.get(doc) else {
            bail!(
                "document index {doc} out of range: the model covers {} documents",
                self.doc_topic.len()
            );
        };
        let denom = self.doc_totals[doc] as f64 + self.num_topics as f64 * self.alpha;
        Ok(counts
            .iter()
            .enumerate()
            .map(|(k, &n)| (k, (n as f64 + self.alpha) / denom))
            .collect())
    }

    /// The `n` highest-phi terms of one topic, best first. Returns fewer
    /// than `n` entries when the vocabulary is smaller than `n`.
    pub fn topic_terms(&self, topic: usize, n: usize) -> Result<Vec<(TermId, f64)>> {
        let Some(counts) = self.topic_term.get(topic) else {
            bail!(
                "topic index {topic} out of range: the model has {} topics",
                self.num_topics
            );
        };
        let denom = self.topic_totals[topic] as f64 + self.vocab_size as f64 * self.beta;
        let mut terms: Vec<(TermId, f64)> = counts
            .iter()
            .enumerate()
            .map(|(w, &count)| (w, (count as f64 + self.beta) / denom))
            .collect();
        terms.sort_by(|a, b| b.1.total_cmp(&a.1));
        terms.truncate(n);
        Ok(terms)
    }
}
