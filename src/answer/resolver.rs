use crate::answer::synonyms::SYNONYM_TABLE;
use unidecode::unidecode;

/// A quiz's canonical title plus its accepted answer-variation phrases,
/// lowercase-normalized once at construction. The title itself is always
/// the first accepted phrase.
#[derive(Debug, Clone)]
pub struct QuizAnswerSpec {
    title: String,
    accepted: Vec<String>,
}

impl QuizAnswerSpec {
    pub fn new<I, S>(title: &str, variations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted = vec![normalize(title)];
        for variation in variations {
            let phrase = normalize(variation.as_ref());
            if !phrase.is_empty() && !accepted.contains(&phrase) {
                accepted.push(phrase);
            }
        }

        Self {
            title: title.to_string(),
            accepted,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }
}

/// Decides whether a free-text guess names a quiz's subject.
///
/// Pure and stateless apart from the injected synonym table; `is_correct`
/// only ever answers `true` or `false`.
pub struct AnswerResolver {
    synonyms: &'static [(&'static str, &'static [&'static str])],
}

impl AnswerResolver {
    pub fn new() -> Self {
        Self::with_table(SYNONYM_TABLE)
    }

    pub fn with_table(synonyms: &'static [(&'static str, &'static [&'static str])]) -> Self {
        Self { synonyms }
    }

    /// Runs the guess through every accepted phrase, short-circuiting on
    /// the first strategy that accepts. Guesses under three characters are
    /// rejected outright so "a" or "is" cannot match a short phrase.
    pub fn is_correct(&self, guess: &str, spec: &QuizAnswerSpec) -> bool {
        let guess = normalize(guess);
        if guess.len() < 3 {
            return false;
        }

        spec.accepted()
            .iter()
            .any(|phrase| self.phrase_matches(&guess, phrase))
    }

    fn phrase_matches(&self, guess: &str, phrase: &str) -> bool {
        guess == phrase
            || word_overlap_matches(guess, phrase)
            || containment_matches(guess, phrase)
            || acronym_matches(guess, phrase)
            || self.synonym_matches(guess, phrase)
    }

    fn synonym_matches(&self, guess: &str, phrase: &str) -> bool {
        if guess.len() < 4 {
            return false;
        }

        for (concept, synonyms) in self.synonyms {
            if !phrase.contains(concept) {
                continue;
            }

            for synonym in *synonyms {
                if synonym.len() < 4 {
                    continue;
                }

                if guess.contains(synonym) || synonym.contains(guess) {
                    return true;
                }
            }
        }

        false
    }
}

impl Default for AnswerResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(text: &str) -> String {
    unidecode(text).trim().to_lowercase()
}

/// Token-overlap comparison. Tokens under three characters are discarded on
/// both sides; a phrase token counts as hit when it and any qualifying
/// guess token contain one another, and the phrase is accepted at 70% of
/// its qualifying tokens hit (rounded up).
fn word_overlap_matches(guess: &str, phrase: &str) -> bool {
    let guess_tokens: Vec<&str> = guess.split_whitespace().filter(|t| t.len() >= 3).collect();
    if guess_tokens.is_empty() {
        return false;
    }

    let phrase_tokens: Vec<&str> = phrase.split_whitespace().filter(|t| t.len() >= 3).collect();
    if phrase_tokens.is_empty() {
        return false;
    }

    let hits = phrase_tokens
        .iter()
        .filter(|pt| {
            guess_tokens
                .iter()
                .any(|gt| pt.contains(gt) || gt.contains(*pt))
        })
        .count();

    hits >= (0.7 * phrase_tokens.len() as f64).ceil() as usize
}

fn containment_matches(guess: &str, phrase: &str) -> bool {
    guess.len() >= 4 && phrase.len() >= 4 && (guess.contains(phrase) || phrase.contains(guess))
}

fn acronym_matches(guess: &str, phrase: &str) -> bool {
    if guess.len() < 2 {
        return false;
    }

    let acronym: String = phrase
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();

    guess == acronym
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(title: &str, variations: &[&str]) -> QuizAnswerSpec {
        QuizAnswerSpec::new(title, variations.iter().copied())
    }

    #[test]
    fn every_accepted_phrase_matches_itself() {
        let spec = spec(
            "Population Density",
            &["density of population", "people per square km"],
        );
        for phrase in spec.accepted() {
            let resolver = AnswerResolver::new();
            assert!(resolver.is_correct(phrase, &spec), "phrase {:?}", phrase);
        }
    }

    #[test]
    fn short_guesses_are_rejected() {
        let resolver = AnswerResolver::new();
        let spec = spec("GDP", &["gdp"]);
        assert!(!resolver.is_correct("a", &spec));
        assert!(!resolver.is_correct("is", &spec));
        assert!(!resolver.is_correct("  g ", &spec));
        // Three characters clears the gate.
        assert!(resolver.is_correct("gdp", &spec));
    }

    #[test]
    fn exact_match_ignores_case_and_padding() {
        let resolver = AnswerResolver::new();
        let spec = spec("Life Expectancy", &[]);
        assert!(resolver.is_correct("  LIFE EXPECTANCY ", &spec));
    }

    #[test]
    fn word_overlap_tolerates_reordering_and_extra_words() {
        let resolver = AnswerResolver::new();
        let spec = spec("gross domestic product per capita", &[]);
        // 5 qualifying phrase tokens ("per" is long enough), so 4 hits required.
        assert!(resolver.is_correct("domestic product per-capita gross", &spec));
        assert!(!resolver.is_correct("gross something", &spec));
    }

    #[test]
    fn word_overlap_ignores_short_tokens() {
        let resolver = AnswerResolver::new();
        let spec = spec("rate of growth", &[]);
        // "of" drops out on both sides; "rate growth" still hits both
        // qualifying phrase tokens.
        assert!(resolver.is_correct("growth rate", &spec));
    }

    #[test]
    fn containment_needs_four_characters_each_side() {
        let resolver = AnswerResolver::new();
        let unemployment = spec("unemployment rate", &[]);
        assert!(resolver.is_correct("unemployment", &unemployment));
        // "oil" is a substring of the phrase, but the three-character guess
        // stays below the containment gate and hits only one overlap token.
        let oil = spec("oil production", &[]);
        assert!(!resolver.is_correct("oil", &oil));
    }

    #[test]
    fn acronym_matches_phrase_initials() {
        let resolver = AnswerResolver::new();
        let spec = spec("human development index", &[]);
        assert!(resolver.is_correct("hdi", &spec));
        assert!(resolver.is_correct("HDI", &spec));
        assert!(!resolver.is_correct("hdx", &spec)); // wrong initials
        assert!(!resolver.is_correct("hd", &spec)); // below the global length gate
    }

    #[test]
    fn synonym_matches_through_concept_table() {
        let resolver = AnswerResolver::new();
        let spec = spec("total population", &[]);
        assert!(resolver.is_correct("inhabitants", &spec));
        assert!(resolver.is_correct("number of inhabitants", &spec));
        // Synonym strategy requires a four-character guess.
        assert!(!resolver.is_correct("pop", &spec));
    }

    #[test]
    fn no_strategy_accepts_an_unrelated_guess() {
        let resolver = AnswerResolver::new();
        let spec = spec("military expenditure", &["defense budget"]);
        assert!(!resolver.is_correct("banana production", &spec));
    }

    #[test]
    fn all_phrases_are_tried_not_just_the_first() {
        let resolver = AnswerResolver::new();
        let spec = spec("internet penetration", &["share of people online"]);
        // Misses the title on every strategy but lands on the variation.
        assert!(resolver.is_correct("people online", &spec));
    }

    #[test]
    fn spec_normalizes_and_dedupes_variations() {
        let spec = spec("GDP", &["  GDP ", "gross domestic product"]);
        assert_eq!(
            spec.accepted(),
            &["gdp".to_string(), "gross domestic product".to_string()]
        );
        assert_eq!(spec.title(), "GDP");
    }
}
