//! Keyword extraction for the ATS-optimized output.
//!
//! ATS parsers score résumés on literal keyword hits, so the ATS template
//! appends a section with the dominant terms of the professional summary plus
//! the technical skill names. Extraction is frequency ranking over the
//! summary with a Portuguese stopword filter (the primary data language).

use std::collections::BTreeMap;

const MIN_WORD_LEN: usize = 4;
const TOP_KEYWORDS: usize = 20;

/// Portuguese stopwords: articles, pronouns and the high-frequency forms of
/// ser/estar/ter/haver. Short function words fall out of the length filter
/// anyway; this catches the longer ones.
const STOPWORDS: &[&str] = &[
    "ainda", "alguma", "algumas", "algum", "alguns", "aquela", "aquelas", "aquele", "aqueles",
    "aquilo", "assim", "cada", "como", "depois", "deles", "delas", "dele", "dela", "desde",
    "dessa", "desse", "desta", "deste", "disso", "entre", "eram", "essa", "essas", "esse",
    "esses", "esta", "estas", "estamos", "estao", "estão", "estava", "estavam", "este", "estes",
    "estive", "estivemos", "estiveram", "estou", "foram", "fomos", "fosse", "fossem", "haja",
    "havia", "houve", "isso", "isto", "mais", "muito", "muitos", "nossa", "nossas", "nosso",
    "nossos", "onde", "outra", "outras", "outro", "outros", "para", "pela", "pelas", "pelo",
    "pelos", "porque", "quais", "qual", "quando", "quem", "seja", "sejam", "sendo", "será",
    "serão", "seria", "seriam", "seus", "suas", "também", "tambem", "tem", "temos", "tenha",
    "tenho", "terá", "teria", "tinha", "tinham", "tive", "tivemos", "tiveram", "toda", "todas",
    "todo", "todos", "você", "voce", "vocês", "voces",
];

/// Extracts the top summary keywords: lowercase, strip punctuation, split on
/// whitespace, drop short words and stopwords, rank by frequency.
///
/// Ties sort alphabetically so the output is deterministic.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let mut freq: BTreeMap<&str, u32> = BTreeMap::new();
    for word in cleaned.split_whitespace() {
        if word.chars().count() < MIN_WORD_LEN || STOPWORDS.contains(&word) {
            continue;
        }
        *freq.entry(word).or_insert(0) += 1;
    }

    let mut ranked: Vec<(&str, u32)> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(TOP_KEYWORDS)
        .map(|(word, _)| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_wins_over_alphabetical_order() {
        let keywords =
            extract_keywords("rust rust rust backend backend axum testes de integração");
        assert_eq!(keywords[0], "rust");
        assert_eq!(keywords[1], "backend");
        assert!(keywords.contains(&"axum".to_string()));
    }

    #[test]
    fn drops_short_words_and_stopwords() {
        let keywords = extract_keywords("para todos os sistemas com apis e dados");
        assert!(!keywords.contains(&"para".to_string()));
        assert!(!keywords.contains(&"todos".to_string()));
        assert!(keywords.contains(&"sistemas".to_string()));
        assert!(keywords.contains(&"apis".to_string()));
        assert!(keywords.contains(&"dados".to_string()));
    }

    #[test]
    fn punctuation_does_not_glue_words_together() {
        let keywords = extract_keywords("kubernetes, docker/terraform; observabilidade.");
        assert!(keywords.contains(&"kubernetes".to_string()));
        assert!(keywords.contains(&"docker".to_string()));
        assert!(keywords.contains(&"terraform".to_string()));
    }

    #[test]
    fn caps_at_twenty_keywords() {
        let text = (0..40)
            .map(|i| format!("palavra{i:02}"))
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(extract_keywords(&text).len(), 20);
    }

    #[test]
    fn empty_summary_yields_no_keywords() {
        assert!(extract_keywords("").is_empty());
    }
}
