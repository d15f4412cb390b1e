#![no_main]

use libfuzzer_sys::fuzz_target;
use rhizome_sprout_automata::Rule;

fuzz_target!(|data: &str| {
    // Parsing never panics, and anything accepted prints back to itself.
    if let Ok(rule) = data.parse::<Rule>() {
        assert_eq!(rule.to_string().parse::<Rule>().ok(), Some(rule));
    }
});
