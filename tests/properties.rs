//! Property tests for the adjusted block set.

use blockadjust::{adjust, Prefix};
use proptest::prelude::*;

fn v4_block() -> impl Strategy<Value = String> {
    (0u8..4, any::<u8>(), 8u8..=24).prop_map(|(a, b, len)| format!("10.{a}.{b}.0/{len}"))
}

fn v6_block() -> impl Strategy<Value = String> {
    (0u16..4, any::<u16>(), 16u8..=48).prop_map(|(a, b, len)| format!("2001:{a:x}:{b:x}::/{len}"))
}

fn blocks() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop_oneof![3 => v4_block(), 1 => v6_block()], 1..8)
}

fn parse(blocks: &[String]) -> Vec<Prefix> {
    let mut prefixes: Vec<Prefix> = blocks.iter().map(|s| s.parse().unwrap()).collect();
    prefixes.sort();
    prefixes.dedup();
    prefixes
}

fn size(prefix: &Prefix) -> u128 {
    1u128 << (prefix.max_length() - prefix.prefix_len())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn output_is_sorted_and_non_overlapping(input in blocks()) {
        let output = parse(&adjust(&input));
        let mut sorted = output.clone();
        sorted.sort();
        prop_assert_eq!(&output, &sorted);

        for (i, x) in output.iter().enumerate() {
            for y in output.iter().skip(i + 1) {
                prop_assert!(!x.overlaps(y), "{} overlaps {}", x, y);
            }
        }
    }

    #[test]
    fn coverage_is_preserved(input in blocks()) {
        let input = parse(&input);
        let output = parse(&adjust(&input.iter().map(|p| p.to_string()).collect::<Vec<_>>()));

        let outermost: Vec<&Prefix> = input
            .iter()
            .filter(|p| !input.iter().any(|q| q.is_strict_supernet_of(p)))
            .collect();

        for block in &output {
            prop_assert!(
                outermost.iter().any(|outer| outer.contains(block)),
                "{} is outside the input",
                block
            );
        }
        let input_size: u128 = outermost.iter().map(|p| size(p)).sum();
        let output_size: u128 = output.iter().map(size).sum();
        prop_assert_eq!(input_size, output_size);
    }

    #[test]
    fn most_specific_blocks_are_kept(input in blocks()) {
        let input = parse(&input);
        let output = parse(&adjust(&input.iter().map(|p| p.to_string()).collect::<Vec<_>>()));

        for block in input.iter().filter(|p| !input.iter().any(|q| p.is_strict_supernet_of(q))) {
            prop_assert!(output.contains(block), "{} was not kept", block);
        }
    }

    #[test]
    fn adjusted_output_is_a_fixed_point(input in blocks()) {
        let once = adjust(&input);
        let twice = adjust(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn input_order_does_not_matter(
        (input, shuffled) in blocks().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(adjust(&input), adjust(&shuffled));
    }
}
