// Extractive summarization engine
//
// Picks the highest-scoring sentences from the input and returns them in
// their original order. Scores come from normalized word frequency with a
// small bonus for the lead sentence. Runs entirely in-process.

use super::{EngineError, SummaryEngine, SummaryRecord};
use async_trait::async_trait;
use regex::Regex;
use std::collections::HashMap;

/// Words that carry no topical weight
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "his", "has", "have", "him", "how", "its", "may", "who", "did", "yes",
    "she", "too", "use", "that", "with", "this", "from", "they", "will", "would", "there",
    "their", "what", "about", "which", "when", "were", "been", "also", "into", "than", "then",
    "them", "these", "those", "some", "such", "only", "other", "more", "most", "very", "just",
];

/// Bonus added to the first sentence's score
const LEAD_BONUS: f64 = 0.1;

/// Minimum characters for a word to count towards scoring
const MIN_WORD_LEN: usize = 3;

pub struct ExtractiveEngine {
    max_sentences: usize,
    sentence_re: Regex,
    word_re: Regex,
}

impl ExtractiveEngine {
    pub fn new(max_sentences: usize) -> Self {
        Self {
            max_sentences: max_sentences.max(1),
            sentence_re: Regex::new(r#"[^.!?]+(?:[.!?]+["'\u{201D}\u{2019})\]]*|$)"#)
                .expect("sentence pattern is valid"),
            word_re: Regex::new(r"[\p{L}\p{N}']+").expect("word pattern is valid"),
        }
    }

    fn sentences<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.sentence_re
            .find_iter(text)
            .map(|m| m.as_str().trim())
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn content_words(&self, sentence: &str) -> Vec<String> {
        self.word_re
            .find_iter(sentence)
            .map(|m| m.as_str().trim_matches('\'').to_lowercase())
            .filter(|w| w.chars().count() >= MIN_WORD_LEN && !STOPWORDS.contains(&w.as_str()))
            .collect()
    }

    /// Produce the extractive summary for `text`
    pub fn summarize_text(&self, text: &str) -> Result<String, EngineError> {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let sentences = self.sentences(&normalized);

        if sentences.is_empty() || self.word_re.find(&normalized).is_none() {
            return Err(EngineError::InvalidInput("nothing to summarize".to_string()));
        }

        if sentences.len() <= self.max_sentences {
            return Ok(sentences.join(" "));
        }

        let words: Vec<Vec<String>> = sentences.iter().map(|s| self.content_words(s)).collect();

        let mut freq: HashMap<&str, usize> = HashMap::new();
        for word in words.iter().flatten() {
            *freq.entry(word.as_str()).or_insert(0) += 1;
        }
        let max_freq = freq.values().copied().max().unwrap_or(1) as f64;

        let mut scored: Vec<(usize, f64)> = words
            .iter()
            .enumerate()
            .map(|(idx, sentence_words)| {
                let total: f64 = sentence_words
                    .iter()
                    .map(|w| freq[w.as_str()] as f64 / max_freq)
                    .sum();
                let len = (sentence_words.len().max(1) as f64).sqrt();
                let bonus = if idx == 0 { LEAD_BONUS } else { 0.0 };
                (idx, total / len + bonus)
            })
            .collect();

        // Highest score first, earlier sentence wins ties
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut picked: Vec<usize> = scored
            .into_iter()
            .take(self.max_sentences)
            .map(|(idx, _)| idx)
            .collect();
        picked.sort_unstable();

        Ok(picked
            .into_iter()
            .map(|idx| sentences[idx])
            .collect::<Vec<_>>()
            .join(" "))
    }
}

#[async_trait]
impl SummaryEngine for ExtractiveEngine {
    fn name(&self) -> &'static str {
        "extractive"
    }

    fn is_ready(&self) -> bool {
        true
    }

    async fn summarize(&self, text: &str) -> Result<Vec<SummaryRecord>, EngineError> {
        let summary = self.summarize_text(text)?;
        Ok(vec![SummaryRecord::new(summary)])
    }
}
