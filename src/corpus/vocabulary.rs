// Vocabulary and bag-of-words encoding.
//
// The vocabulary assigns each distinct token a stable integer id in order
// of first appearance across the corpus. Each document becomes a sparse
// (id, count) vector sorted by id. Both are rebuilt from scratch on every
// run; nothing is persisted.

use std::collections::BTreeMap;

use indexmap::IndexMap;

/// Stable integer id of a vocabulary term.
pub type TermId = usize;

/// Token-to-id mapping in order of first appearance, with corpus-wide
/// occurrence counts. The map index doubles as the term id.
#[derive(Debug, Default)]
pub struct Vocabulary {
    terms: IndexMap<String, u64>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self {
            terms: IndexMap::new(),
        }
    }

    /// Record one occurrence of `token`, assigning a fresh id on first sight.
    fn observe(&mut self, token: &str) -> TermId {
        if let Some((id, _, count)) = self.terms.get_full_mut(token) {
            *count += 1;
            id
        } else {
            self.terms.insert_full(token.to_string(), 1).0
        }
    }

    /// Id of a known term.
    pub fn id_of(&self, token: &str) -> Option<TermId> {
        self.terms.get_index_of(token)
    }

    /// Term text for an id.
    pub fn term(&self, id: TermId) -> Option<&str> {
        self.terms.get_index(id).map(|(term, _)| term.as_str())
    }

    /// Corpus-wide occurrence count of the term with this id.
    pub fn count(&self, id: TermId) -> u64 {
        self.terms.get_index(id).map(|(_, &count)| count).unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate (id, term) pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TermId, &str)> {
        self.terms
            .keys()
            .enumerate()
            .map(|(id, term)| (id, term.as_str()))
    }
}

/// Sparse bag-of-words vector: (term id, occurrence count) pairs sorted
/// by id. Order within the source document is not retained.
#[derive(Debug, Clone)]
pub struct BagOfWords {
    counts: Vec<(TermId, u32)>,
}

impl BagOfWords {
    /// Encode a token sequence, registering unseen tokens in the vocabulary.
    fn encode(tokens: &[String], vocabulary: &mut Vocabulary) -> Self {
        let mut counts: BTreeMap<TermId, u32> = BTreeMap::new();
        for token in tokens {
            let id = vocabulary.observe(token);
            *counts.entry(id).or_insert(0) += 1;
        }
        Self {
            counts: counts.into_iter().collect(),
        }
    }

    /// (id, count) pairs sorted by id.
    pub fn counts(&self) -> &[(TermId, u32)] {
        &self.counts
    }

    /// Total tokens in the document.
    pub fn token_total(&self) -> u64 {
        self.counts.iter().map(|&(_, count)| u64::from(count)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// The encoded corpus: one shared vocabulary plus one bag-of-words vector
/// per input document, in input order.
#[derive(Debug)]
pub struct Corpus {
    pub vocabulary: Vocabulary,
    pub documents: Vec<BagOfWords>,
}

impl Corpus {
    /// Build the vocabulary and bag-of-words vectors from per-document
    /// token sequences. Ids follow first appearance across documents, so
    /// the same token sequences always produce the same assignment.
    pub fn from_token_docs(token_docs: &[Vec<String>]) -> Self {
        let mut vocabulary = Vocabulary::new();
        let documents = token_docs
            .iter()
            .map(|tokens| BagOfWords::encode(tokens, &mut vocabulary))
            .collect();
        Self {
            vocabulary,
            documents,
        }
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total token count across all documents.
    pub fn token_total(&self) -> u64 {
        self.documents.iter().map(BagOfWords::token_total).sum()
    }
}
