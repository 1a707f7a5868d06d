//! Challenge generators.
//!
//! Each activity builds a pool of candidates from the word list, one per
//! word (or per group of words for stories), and returns one picked
//! uniformly at random. Option lists are shuffled with Fisher-Yates via
//! [`SliceRandom::shuffle`]. An empty word list yields no challenge.

use crate::challenge::{ActivityKind, Challenge, FlashcardBack};
use crate::theme::ThemeIndex;
use crate::word::{WordEntry, DEFAULT_THEME};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Words per story prompt.
pub const STORY_GROUP_SIZE: usize = 5;

/// Maximum distractor words mixed into a themes challenge.
pub const THEME_DISTRACTORS: usize = 2;

/// Maximum inflected distractors in a grammar challenge.
pub const GRAMMAR_DISTRACTORS: usize = 3;

/// Distractors used when the list has fewer than three other words.
pub const MEANING_PLACEHOLDERS: [&str; 3] = ["Option A", "Option B", "Option C"];

pub const STORY_PROMPT: &str = "Write a short story using these words:";

/// Generate a challenge for an activity.
pub fn generate<R: Rng + ?Sized>(
    kind: ActivityKind,
    words: &[WordEntry],
    themes: &ThemeIndex,
    rng: &mut R,
) -> Option<Challenge> {
    if words.is_empty() {
        return None;
    }

    let challenge = match kind {
        ActivityKind::Spelling => pick(spelling_challenges(words, rng), rng),
        ActivityKind::Meaning => pick(meaning_challenges(words, rng), rng),
        ActivityKind::Grammar => pick(grammar_challenges(words, rng), rng),
        ActivityKind::Story => pick(story_challenges(words), rng),
        ActivityKind::Themes => themes_challenge(words, themes, rng),
        ActivityKind::Quiz => pick(quiz_challenges(words, rng), rng),
        ActivityKind::Flashcards => pick(flashcard_challenges(words), rng),
    };

    debug!(activity = %kind, generated = challenge.is_some(), "generated challenge");
    challenge
}

/// Take one element uniformly at random.
fn pick<T, R: Rng + ?Sized>(mut pool: Vec<T>, rng: &mut R) -> Option<T> {
    if pool.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..pool.len());
    Some(pool.swap_remove(index))
}

fn shuffled<T, R: Rng + ?Sized>(mut items: Vec<T>, rng: &mut R) -> Vec<T> {
    items.shuffle(rng);
    items
}

/// Shuffle the characters of a word. May return the original order.
pub fn scramble<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    shuffled(word.chars().collect(), rng).into_iter().collect()
}

pub fn spelling_challenges<R: Rng + ?Sized>(words: &[WordEntry], rng: &mut R) -> Vec<Challenge> {
    words
        .iter()
        .map(|entry| {
            let scrambled = scramble(&entry.word, rng);
            let hint = if entry.definition.is_empty() {
                format!("Think of a word that means: {}", entry.word)
            } else {
                entry.definition.clone()
            };
            Challenge::Spelling {
                question: format!("Unscramble: \"{scrambled}\""),
                hint: format!("Hint: {hint}"),
                pronunciation: entry.pronunciation.clone(),
                scrambled,
                answer: entry.word.clone(),
            }
        })
        .collect()
}

fn meaning_of(entry: &WordEntry) -> String {
    if entry.definition.is_empty() {
        format!("A word related to {}", entry.word)
    } else {
        entry.definition.clone()
    }
}

pub fn meaning_challenges<R: Rng + ?Sized>(words: &[WordEntry], rng: &mut R) -> Vec<Challenge> {
    words
        .iter()
        .map(|entry| {
            let others: Vec<&WordEntry> = words.iter().filter(|w| w.word != entry.word).collect();
            let wrong: Vec<String> = if others.len() >= 3 {
                others
                    .iter()
                    .take(3)
                    .map(|w| {
                        if w.definition.is_empty() {
                            w.word.clone()
                        } else {
                            w.definition.clone()
                        }
                    })
                    .collect()
            } else {
                MEANING_PLACEHOLDERS.iter().map(|s| s.to_string()).collect()
            };

            let answer = meaning_of(entry);
            let mut options = vec![answer.clone()];
            options.extend(wrong);

            Challenge::Meaning {
                question: format!("What does \"{}\" mean?", entry.word),
                word: entry.word.clone(),
                options: shuffled(options, rng),
                answer,
            }
        })
        .collect()
}

/// Inflected distractors for a word, by part of speech.
pub fn word_forms(word: &str, part_of_speech: &str) -> Vec<String> {
    let suffixes: &[&str] = match part_of_speech {
        "noun" => &["s", "es"],
        "verb" => &["s", "ed", "ing"],
        "adjective" => &["er", "est", "ly"],
        _ => &[],
    };
    suffixes
        .iter()
        .take(GRAMMAR_DISTRACTORS)
        .map(|suffix| format!("{word}{suffix}"))
        .collect()
}

pub fn grammar_challenges<R: Rng + ?Sized>(words: &[WordEntry], rng: &mut R) -> Vec<Challenge> {
    words
        .iter()
        .map(|entry| {
            let verb = if entry.part_of_speech == "noun" { "is" } else { "was" };
            let mut options = vec![entry.word.clone()];
            options.extend(word_forms(&entry.word, &entry.part_of_speech));

            Challenge::Grammar {
                question: format!("The _____ {verb} very important."),
                options: shuffled(options, rng),
                answer: entry.word.clone(),
            }
        })
        .collect()
}

pub fn story_challenges(words: &[WordEntry]) -> Vec<Challenge> {
    words
        .chunks(STORY_GROUP_SIZE)
        .map(|group| Challenge::Story {
            prompt: STORY_PROMPT.to_string(),
            words: group.iter().map(|w| w.word.clone()).collect(),
            theme: group
                .first()
                .map(|w| w.theme.clone())
                .unwrap_or_else(|| DEFAULT_THEME.to_string()),
        })
        .collect()
}

/// The themes activity picks a theme directly instead of drawing from a pool.
pub fn themes_challenge<R: Rng + ?Sized>(
    words: &[WordEntry],
    themes: &ThemeIndex,
    rng: &mut R,
) -> Option<Challenge> {
    let names: Vec<&str> = themes.theme_names().collect();
    let theme = *names.choose(rng)?;
    let correct: Vec<String> = themes.words(theme).unwrap_or_default().to_vec();

    let wrong = words
        .iter()
        .filter(|w| !correct.contains(&w.word))
        .take(THEME_DISTRACTORS)
        .map(|w| w.word.clone());
    let all: Vec<String> = correct.iter().cloned().chain(wrong).collect();

    Some(Challenge::Themes {
        question: format!("Select all words related to: {theme}"),
        theme: theme.to_string(),
        words: shuffled(all, rng),
        answer: correct,
    })
}

fn quiz_answer(entry: &WordEntry) -> String {
    if entry.definition.is_empty() {
        format!("A {} related to {}", entry.part_of_speech_or_word(), entry.word)
    } else {
        entry.definition.clone()
    }
}

pub fn quiz_challenges<R: Rng + ?Sized>(words: &[WordEntry], rng: &mut R) -> Vec<Challenge> {
    words
        .iter()
        .map(|entry| {
            let answer = quiz_answer(entry);
            let options = vec![
                answer.clone(),
                format!("The opposite of {}", entry.word),
                format!("A type of {}", entry.word),
                format!("Something similar to {}", entry.word),
            ];
            Challenge::Quiz {
                question: format!("What does \"{}\" mean?", entry.word),
                options: shuffled(options, rng),
                answer,
            }
        })
        .collect()
}

pub fn flashcard_challenges(words: &[WordEntry]) -> Vec<Challenge> {
    words
        .iter()
        .map(|entry| Challenge::Flashcards {
            front: entry.word.clone(),
            back: FlashcardBack {
                definition: if entry.definition.is_empty() {
                    format!("A {}", entry.part_of_speech_or_word())
                } else {
                    entry.definition.clone()
                },
                pronunciation: entry.pronunciation.clone(),
                example: if entry.example.is_empty() {
                    format!("Example: {} is used in sentences.", entry.word)
                } else {
                    entry.example.clone()
                },
                part_of_speech: entry.part_of_speech.clone(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::parse_word_list;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn animals() -> Vec<WordEntry> {
        parse_word_list(
            "cat|noun|a small feline|/kæt/|The cat sleeps.|animals\n\
             dog|noun|a loyal pet|||animals\n\
             run|verb|move quickly|||movement\n\
             happy|adjective||||emotions\n\
             car|noun|a road vehicle|||vehicles\n\
             slowly|adverb|not quickly|||movement",
        )
    }

    fn sorted(mut v: Vec<String>) -> Vec<String> {
        v.sort();
        v
    }

    #[test]
    fn test_empty_list_yields_nothing() {
        let themes = ThemeIndex::default();
        for kind in ActivityKind::ALL {
            assert_eq!(generate(kind, &[], &themes, &mut rng()), None);
        }
    }

    #[test]
    fn test_every_kind_generates_for_nonempty_list() {
        let words = animals();
        let themes = ThemeIndex::from_words(&words);
        for kind in ActivityKind::ALL {
            let challenge = generate(kind, &words, &themes, &mut rng()).unwrap();
            assert_eq!(challenge.kind(), kind);
        }
    }

    #[test]
    fn test_scramble_is_a_permutation() {
        let mut rng = rng();
        for word in ["elephant", "ab", "x", "", "café"] {
            let scrambled = scramble(word, &mut rng);
            let mut a: Vec<char> = word.chars().collect();
            let mut b: Vec<char> = scrambled.chars().collect();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_spelling_hint_and_fallback() {
        let words = animals();
        let pool = spelling_challenges(&words, &mut rng());
        assert_eq!(pool.len(), words.len());

        match &pool[0] {
            Challenge::Spelling { question, hint, pronunciation, scrambled, answer } => {
                assert_eq!(answer, "cat");
                assert_eq!(hint, "Hint: a small feline");
                assert_eq!(pronunciation, "/kæt/");
                assert_eq!(question, &format!("Unscramble: \"{scrambled}\""));
            }
            other => panic!("unexpected challenge {other:?}"),
        }
        match &pool[3] {
            Challenge::Spelling { hint, .. } => {
                assert_eq!(hint, "Hint: Think of a word that means: happy");
            }
            other => panic!("unexpected challenge {other:?}"),
        }
    }

    #[test]
    fn test_meaning_uses_first_three_other_words() {
        let words = animals();
        let pool = meaning_challenges(&words, &mut rng());

        match &pool[0] {
            Challenge::Meaning { word, options, answer, question } => {
                assert_eq!(word, "cat");
                assert_eq!(question, "What does \"cat\" mean?");
                assert_eq!(answer, "a small feline");
                assert_eq!(
                    sorted(options.clone()),
                    sorted(vec![
                        "a small feline".to_string(),
                        "a loyal pet".to_string(),
                        "move quickly".to_string(),
                        "happy".to_string(),
                    ])
                );
            }
            other => panic!("unexpected challenge {other:?}"),
        }
        match &pool[3] {
            Challenge::Meaning { answer, options, .. } => {
                assert_eq!(answer, "A word related to happy");
                assert!(options.contains(answer));
            }
            other => panic!("unexpected challenge {other:?}"),
        }
    }

    #[test]
    fn test_meaning_placeholders_for_short_lists() {
        let words = parse_word_list("cat|noun|a small feline\ndog|noun|a loyal pet");
        let pool = meaning_challenges(&words, &mut rng());
        let options = pool[0].options().to_vec();
        assert_eq!(
            sorted(options),
            sorted(vec![
                "a small feline".to_string(),
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
            ])
        );
    }

    #[test]
    fn test_word_forms_by_part_of_speech() {
        assert_eq!(word_forms("box", "noun"), vec!["boxs", "boxes"]);
        assert_eq!(word_forms("walk", "verb"), vec!["walks", "walked", "walking"]);
        assert_eq!(word_forms("quick", "adjective"), vec!["quicker", "quickest", "quickly"]);
        assert!(word_forms("slowly", "adverb").is_empty());
        assert!(word_forms("Box", "Noun").is_empty());
    }

    #[test]
    fn test_grammar_linking_verb() {
        let words = animals();
        let pool = grammar_challenges(&words, &mut rng());

        match &pool[0] {
            Challenge::Grammar { question, options, answer } => {
                assert_eq!(question, "The _____ is very important.");
                assert_eq!(answer, "cat");
                assert_eq!(options.len(), 3);
                assert!(options.contains(answer));
            }
            other => panic!("unexpected challenge {other:?}"),
        }
        match &pool[2] {
            Challenge::Grammar { question, options, .. } => {
                assert_eq!(question, "The _____ was very important.");
                assert_eq!(options.len(), 4);
            }
            other => panic!("unexpected challenge {other:?}"),
        }
        assert_eq!(pool[5].options(), &["slowly".to_string()]);
    }

    #[test]
    fn test_story_groups_of_five() {
        let words = animals();
        let pool = story_challenges(&words);
        assert_eq!(pool.len(), 2);

        match &pool[0] {
            Challenge::Story { prompt, words, theme } => {
                assert_eq!(prompt, STORY_PROMPT);
                assert_eq!(words, &["cat", "dog", "run", "happy", "car"]);
                assert_eq!(theme, "animals");
            }
            other => panic!("unexpected challenge {other:?}"),
        }
        match &pool[1] {
            Challenge::Story { words, theme, .. } => {
                assert_eq!(words, &["slowly"]);
                assert_eq!(theme, "movement");
            }
            other => panic!("unexpected challenge {other:?}"),
        }
    }

    #[test]
    fn test_themes_mixes_in_two_distractors() {
        let words = animals();
        let themes = ThemeIndex::from_words(&words);

        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let Some(Challenge::Themes { question, theme, words: shown, answer }) =
                themes_challenge(&words, &themes, &mut rng)
            else {
                panic!("expected themes challenge");
            };

            assert_eq!(question, format!("Select all words related to: {theme}"));
            assert_eq!(answer, themes.words(&theme).unwrap());
            let distractors: Vec<&String> = shown.iter().filter(|w| !answer.contains(w)).collect();
            assert_eq!(distractors.len(), THEME_DISTRACTORS);
            assert_eq!(shown.len(), answer.len() + THEME_DISTRACTORS);
        }
    }

    #[test]
    fn test_themes_with_single_theme_has_no_distractors() {
        let words = parse_word_list("cat|noun\ndog|noun");
        let themes = ThemeIndex::from_words(&words);
        let Some(Challenge::Themes { theme, words: shown, answer, .. }) =
            themes_challenge(&words, &themes, &mut rng())
        else {
            panic!("expected themes challenge");
        };
        assert_eq!(theme, DEFAULT_THEME);
        assert_eq!(sorted(shown), sorted(answer));
    }

    #[test]
    fn test_quiz_synthetic_distractors() {
        let words = parse_word_list("zebra|noun\nkind|adjective|friendly and generous");
        let pool = quiz_challenges(&words, &mut rng());

        match &pool[0] {
            Challenge::Quiz { question, options, answer } => {
                assert_eq!(question, "What does \"zebra\" mean?");
                assert_eq!(answer, "A noun related to zebra");
                assert_eq!(
                    sorted(options.clone()),
                    sorted(vec![
                        "A noun related to zebra".to_string(),
                        "The opposite of zebra".to_string(),
                        "A type of zebra".to_string(),
                        "Something similar to zebra".to_string(),
                    ])
                );
            }
            other => panic!("unexpected challenge {other:?}"),
        }
        match &pool[1] {
            Challenge::Quiz { answer, .. } => assert_eq!(answer, "friendly and generous"),
            other => panic!("unexpected challenge {other:?}"),
        }
    }

    #[test]
    fn test_flashcard_fallbacks() {
        let words = parse_word_list("cat|noun|a small feline|/kæt/|The cat sleeps.\nthing");
        let pool = flashcard_challenges(&words);

        let Challenge::Flashcards { front, back } = &pool[1] else {
            panic!("expected flashcard");
        };
        assert_eq!(front, "thing");
        assert_eq!(back.definition, "A word");
        assert_eq!(back.example, "Example: thing is used in sentences.");
        assert_eq!(back.pronunciation, "");
        assert_eq!(back.part_of_speech, "");

        let Challenge::Flashcards { back, .. } = &pool[0] else {
            panic!("expected flashcard");
        };
        assert_eq!(back.definition, "a small feline");
        assert_eq!(back.pronunciation, "/kæt/");
        assert_eq!(back.example, "The cat sleeps.");
    }

    #[test]
    fn test_selection_covers_whole_pool() {
        let words = animals();
        let themes = ThemeIndex::from_words(&words);
        let mut rng = rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            if let Some(Challenge::Flashcards { front, .. }) =
                generate(ActivityKind::Flashcards, &words, &themes, &mut rng)
            {
                seen.insert(front);
            }
        }
        assert_eq!(seen.len(), words.len());
    }
}
