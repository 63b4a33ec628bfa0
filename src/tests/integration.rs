#[cfg(test)]
mod integration_tests {

    use crate::{EmojiData, NoEmoji, Normalizer, default_normalizer, normalize};
    use std::collections::HashMap;
    use std::thread;

    #[test]
    fn noisy_tweet() {
        // visual-order kombuva + aela-pilla, hashtag, trailing URL
        let input = "RT @user: \u{0DD9}\u{0DB8}\u{0DCF}\u{0D9A}\u{0DAF} \u{0DB6}\u{0D82} \u{0DB8}\u{0DDA} 😂😂 #ගෙදරට";
        assert_eq!(
            normalize(input),
            "\u{0DB8}\u{0DDC}\u{0D9A} \u{0DB6}\u{0D82} \u{0DB8}\u{0DD9} ගෙදර"
        );
    }

    #[test]
    fn url_fragments_after_symbol_deletion() {
        // `/` is deleted before the tokenizer looks for URLs, so only the
        // scheme-less pieces survive as ordinary tokens.
        assert_eq!(normalize("බලන්න http://t.co/x"), "බලන්න http t cox");
    }

    #[test]
    fn quoted_input() {
        assert_eq!(normalize("  \"'ආයුබෝවන්'\"  "), "අයුබොවන්");
        assert_eq!(normalize("\"\"nested\"\""), "nested");
    }

    #[test]
    fn mixed_script_and_digits() {
        assert_eq!(normalize("Sri Lanka 2024 ලංකාව!!"), "sri lanka ලංකාව");
        // ZWJ is an emoji component, so a conjunct built with it splits
        assert_eq!(
            normalize("\u{0DC1}\u{0DCA}\u{200D}\u{0DBB}\u{0DD3}"),
            "\u{0DC1}\u{0DCA} \u{0DBB}\u{0DD2}"
        );
    }

    #[test]
    fn emoji_metadata_shapes_are_interchangeable() {
        let emoji = ["😂", "❤", "🙏"];
        let mapping = EmojiData::Mapping(
            emoji
                .iter()
                .map(|e| (e.to_string(), String::from("name")))
                .collect::<HashMap<_, _>>(),
        );
        let keys = EmojiData::Keys(emoji.iter().map(|e| e.to_string()).collect());
        let a = Normalizer::builder().emoji_source(&mapping).build().unwrap();
        let b = Normalizer::builder().emoji_source(&keys).build().unwrap();
        for input in ["ස්තූතියි🙏🙏", "❤❤ ලස්සනයි", "හරි😂", "no emoji"] {
            assert_eq!(a.normalize(input), b.normalize(input));
        }
    }

    #[test]
    fn missing_emoji_data_keeps_pipeline_running() {
        let n = Normalizer::builder().emoji_source(&NoEmoji).build().unwrap();
        assert_eq!(n.normalize("hello @sam 🙏"), "hello person 🙏");
    }

    #[test]
    fn empty_rule_list_disables_stemming() {
        let n = Normalizer::builder()
            .suffix_rules(Vec::<(String, usize)>::new())
            .build()
            .unwrap();
        assert_eq!(n.normalize("ගෙදරට යනවද"), "ගෙදරට යනවද");
    }

    #[test]
    fn default_normalizer_is_built_once() {
        assert!(std::ptr::eq(default_normalizer(), default_normalizer()));
        let explicit = Normalizer::default();
        let input = "hello @sam92ky ගෙදරට 😂";
        assert_eq!(explicit.normalize(input), default_normalizer().normalize(input));
    }

    #[test]
    fn shared_across_threads() {
        let inputs = [
            "hello @sam92ky how are you",
            "RT @a: \u{0DD9}\u{0D9A}\u{0DCF} 😂",
            "check this http://example.com/page now",
            "ගෙදරට යනවද",
            "",
        ];
        let expected: Vec<String> = inputs.iter().map(|s| normalize(s)).collect();
        let owned = Normalizer::default();
        let normalizer = &owned;

        thread::scope(|scope| {
            let mut handles = Vec::new();
            for _ in 0..8 {
                handles.push(scope.spawn(|| {
                    let mut results = Vec::new();
                    for _ in 0..50 {
                        for s in &inputs {
                            results.push(normalizer.normalize(s));
                        }
                    }
                    results
                }));
            }
            for handle in handles {
                let results = handle.join().unwrap();
                for (got, want) in results.iter().zip(expected.iter().cycle()) {
                    assert_eq!(got, want);
                }
            }
        });
    }
}
