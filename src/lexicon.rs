//! Fixed lexical tables used by the scorers and the readability engine.
//!
//! A [`Lexicon`] is plain immutable data. The built-in Russian tables are
//! available through [`Lexicon::shared`]; alternate tables can be injected
//! with the `with_*` builders or parsed from word-list files.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::Arc;

const RUSSIAN_STOPWORDS: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до",
    "вас", "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей",
    "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем",
    "была", "сам", "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет",
    "ж", "тогда", "кто", "этот", "того", "потому", "этого", "какой", "совсем", "ним",
    "здесь", "этом", "один", "почти", "мой", "тем", "чтобы", "нее", "сейчас", "были",
    "куда", "зачем", "всех", "никогда", "можно", "при", "наконец", "два", "об", "другой",
    "хоть", "после", "над", "больше", "тот", "через", "эти", "нас", "про", "всего", "них",
    "какая", "много", "разве", "три", "эту", "моя", "впрочем", "хорошо", "свою", "этой",
    "перед", "иногда", "лучше", "чуть", "том", "нельзя", "такой", "им", "более", "всегда",
    "конечно", "всю", "между",
];

const RUSSIAN_KEYWORDS: &[&str] = &[
    "важно",
    "следовательно",
    "итог",
    "вывод",
    "заключение",
    "основной",
    "главный",
    "результат",
    "цель",
    "задача",
    "проблема",
    "решение",
    "метод",
    "способ",
    "алгоритм",
    "анализ",
    "исследование",
    "эксперимент",
    "доказательство",
];

const VOWELS: &str = "аеёиоуыэюяaeiouy";

static SHARED: Lazy<Arc<Lexicon>> = Lazy::new(|| Arc::new(Lexicon::russian()));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    stopwords: HashSet<String>,
    keywords: Vec<String>,
    vowels: HashSet<char>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::russian()
    }
}

impl Lexicon {
    /// Built-in tables: Russian stopwords and topic keywords, Cyrillic and
    /// Latin vowels.
    pub fn russian() -> Self {
        Self {
            stopwords: RUSSIAN_STOPWORDS.iter().map(|w| (*w).to_string()).collect(),
            keywords: RUSSIAN_KEYWORDS.iter().map(|w| (*w).to_string()).collect(),
            vowels: VOWELS.chars().collect(),
        }
    }

    /// Process-wide default lexicon, built on first use.
    pub fn shared() -> Arc<Lexicon> {
        Arc::clone(&SHARED)
    }

    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords = words.into_iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }

    pub fn with_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut keywords: Vec<String> = Vec::new();
        for word in words {
            let word = word.as_ref().to_lowercase();
            if !keywords.contains(&word) {
                keywords.push(word);
            }
        }
        self.keywords = keywords;
        self
    }

    pub fn with_vowels(mut self, vowels: &str) -> Self {
        self.vowels = vowels.chars().flat_map(char::to_lowercase).collect();
        self
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    /// Number of vowel characters in `word`, case-insensitive.
    pub fn count_syllables(&self, word: &str) -> usize {
        word.chars()
            .flat_map(char::to_lowercase)
            .filter(|c| self.is_vowel(*c))
            .count()
    }
}

/// Parse a word list: one entry per line, `#` comments and blank lines skipped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}
