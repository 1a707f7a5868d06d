//! Built-in word list for trying the activities without typing one in.

/// Sample words in the pipe-delimited input format.
pub const SAMPLE_WORDS: &str = "\
happy|adjective|feeling joy|/ˈhæpi/|I am happy today.|emotions
brave|adjective|showing courage|/breɪv/|The brave firefighter saved the cat.|emotions
beautiful|adjective|pleasing to look at|/ˈbjuːtɪfʊl/|She is beautiful.|appearance
elegant|adjective|graceful and stylish|/ˈelɪɡənt/|She wore an elegant dress.|appearance
run|verb|move quickly on foot|/rʌn/|I run every morning.|movement
jump|verb|push oneself off the ground|/dʒʌmp/|Kids jump on the trampoline.|movement
river|noun|a large natural stream of water|/ˈrɪvər/|We swam in the river.|nature
forest|noun|a large area covered with trees|/ˈfɔːrɪst/|Deer live in the forest.|nature
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeIndex;
    use crate::word::parse_word_list;

    #[test]
    fn test_samples_parse_cleanly() {
        let words = parse_word_list(SAMPLE_WORDS);
        assert_eq!(words.len(), 8);
        assert!(words.iter().all(|w| !w.definition.is_empty() && !w.example.is_empty()));

        let themes = ThemeIndex::from_words(&words);
        assert_eq!(themes.len(), 4);
        assert!(themes.iter().all(|(_, bucket)| bucket.len() == 2));
    }
}
