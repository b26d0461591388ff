// Unit tests for preprocessing and corpus encoding.
//
// Covers the deterministic half of the pipeline: the tokenizer's
// filtering invariants and repeatability, and vocabulary id stability
// across rebuilds.

use gleaner::corpus::lexicon::Lexicon;
use gleaner::corpus::preprocess::{tokenize, MAX_TOKEN_LEN, MIN_TOKEN_LEN};
use gleaner::corpus::vocabulary::Corpus;

fn fixture_documents() -> Vec<String> {
    vec![
        "Artem Zymovets chef".to_string(),
        "Python is a popular programming language for data science and artificial intelligence."
            .to_string(),
        "Natural language processing is a subfield of linguistics, computer science, and \
         artificial intelligence."
            .to_string(),
        "Deep learning is part of a broader family of machine learning methods based on \
         artificial neural networks."
            .to_string(),
        "Data mining is the process of discovering patterns in large data sets involving \
         methods at the intersection of machine learning, statistics, and database systems."
            .to_string(),
    ]
}

fn tokenized_fixtures(lexicon: &Lexicon) -> Vec<Vec<String>> {
    fixture_documents()
        .iter()
        .map(|doc| tokenize(doc, lexicon))
        .collect()
}

// ============================================================
// tokenize: filtering invariants
// ============================================================

#[test]
fn no_stopwords_survive_preprocessing() {
    let lexicon = Lexicon::english();
    for tokens in tokenized_fixtures(&lexicon) {
        for token in &tokens {
            assert!(
                !lexicon.is_stopword(token),
                "stopword '{token}' leaked through preprocessing"
            );
        }
    }
}

#[test]
fn no_empty_or_out_of_range_tokens() {
    let lexicon = Lexicon::english();
    for tokens in tokenized_fixtures(&lexicon) {
        for token in &tokens {
            let len = token.chars().count();
            assert!(
                (MIN_TOKEN_LEN..=MAX_TOKEN_LEN).contains(&len),
                "token '{token}' has out-of-range length {len}"
            );
        }
    }
}

#[test]
fn tokens_are_lowercase_alphabetic() {
    let lexicon = Lexicon::english();
    for tokens in tokenized_fixtures(&lexicon) {
        for token in &tokens {
            assert!(
                token.chars().all(|c| c.is_alphabetic() && c.is_lowercase()),
                "token '{token}' is not lowercase alphabetic"
            );
        }
    }
}

#[test]
fn preprocessing_is_repeatable() {
    let lexicon = Lexicon::english();
    assert_eq!(tokenized_fixtures(&lexicon), tokenized_fixtures(&lexicon));
}

#[test]
fn digits_act_as_separators() {
    let lexicon = Lexicon::english();
    let tokens = tokenize("Python3 beats python2 at data7science", &lexicon);
    // Every digit-adjacent fragment is split apart; no token carries a digit.
    assert!(tokens.iter().all(|t| !t.chars().any(|c| c.is_ascii_digit())));
    assert!(tokens.contains(&"python".to_string()));
    assert!(tokens.contains(&"science".to_string()));
}

// ============================================================
// Corpus::from_token_docs: vocabulary id stability
// ============================================================

#[test]
fn every_distinct_token_gets_one_stable_id() {
    let lexicon = Lexicon::english();
    let token_docs = tokenized_fixtures(&lexicon);
    let corpus = Corpus::from_token_docs(&token_docs);

    let mut distinct: Vec<&String> = token_docs.iter().flatten().collect();
    distinct.sort();
    distinct.dedup();
    assert_eq!(corpus.vocabulary.len(), distinct.len());

    for token in distinct {
        let id = corpus.vocabulary.id_of(token).expect("token missing from vocabulary");
        assert!(id < corpus.vocabulary.len(), "id {id} out of dense range");
        assert_eq!(corpus.vocabulary.term(id), Some(token.as_str()));
    }
}

#[test]
fn rebuild_assigns_identical_ids() {
    let lexicon = Lexicon::english();
    let token_docs = tokenized_fixtures(&lexicon);
    let first = Corpus::from_token_docs(&token_docs);
    let second = Corpus::from_token_docs(&token_docs);

    assert_eq!(first.vocabulary.len(), second.vocabulary.len());
    for (id, term) in first.vocabulary.iter() {
        assert_eq!(second.vocabulary.id_of(term), Some(id));
    }
}

#[test]
fn corpus_counts_cross_document_occurrences() {
    let lexicon = Lexicon::english();
    let corpus = Corpus::from_token_docs(&tokenized_fixtures(&lexicon));

    // "artificial" appears once in each of three documents.
    let artificial = corpus.vocabulary.id_of("artificial").unwrap();
    assert_eq!(corpus.vocabulary.count(artificial), 3);

    // "language" appears in two documents, "zymovets" in one.
    let language = corpus.vocabulary.id_of("language").unwrap();
    assert_eq!(corpus.vocabulary.count(language), 2);
    let zymovets = corpus.vocabulary.id_of("zymovets").unwrap();
    assert_eq!(corpus.vocabulary.count(zymovets), 1);
}

#[test]
fn term_counts_sum_to_token_total() {
    let lexicon = Lexicon::english();
    let corpus = Corpus::from_token_docs(&tokenized_fixtures(&lexicon));

    let summed: u64 = corpus
        .vocabulary
        .iter()
        .map(|(id, _)| corpus.vocabulary.count(id))
        .sum();
    assert_eq!(summed, corpus.token_total());
}

#[test]
fn bow_vectors_align_with_documents() {
    let lexicon = Lexicon::english();
    let token_docs = tokenized_fixtures(&lexicon);
    let corpus = Corpus::from_token_docs(&token_docs);

    assert_eq!(corpus.len(), token_docs.len());
    for (bow, tokens) in corpus.documents.iter().zip(&token_docs) {
        assert_eq!(bow.token_total(), tokens.len() as u64);
    }
}

#[test]
fn all_stopword_input_produces_empty_corpus() {
    let lexicon = Lexicon::english();
    let token_docs = vec![tokenize("the and of is a", &lexicon)];
    let corpus = Corpus::from_token_docs(&token_docs);
    assert!(corpus.vocabulary.is_empty());
    assert!(corpus.documents[0].is_empty());
}
