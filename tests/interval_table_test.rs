// Exhaustive Interval Table Test
//
// Builds the full Cartesian product of the seven letters with flat,
// natural, and sharp accidentals (21 pitches, 441 ordered pairs) and
// checks that every pair classifies, that the labels stay within the
// expected shapes, and that swapping operands flips only the direction.

use std::collections::BTreeSet;

use kern_intervals::{interval, Quality};

fn table_pitches() -> Vec<String> {
    let mut pitches = Vec::new();
    for letter in ["a", "b", "c", "d", "e", "f", "g"] {
        for accidental in ["-", "", "#"] {
            pitches.push(format!("{letter}{accidental}"));
        }
    }
    pitches
}

fn quality_magnitude(quality: Quality) -> u32 {
    match quality {
        Quality::Perfect | Quality::Major | Quality::Minor => 0,
        Quality::Augmented(n) | Quality::Diminished(n) => n,
    }
}

#[test]
fn test_every_pair_classifies() {
    let pitches = table_pitches();
    for from in &pitches {
        for to in &pitches {
            let labeled = interval(from, to)
                .unwrap_or_else(|e| panic!("{:?} -> {:?} failed: {}", from, to, e));
            assert!(
                (1..=7).contains(&labeled.size),
                "{:?} -> {:?} sized {}",
                from,
                to,
                labeled.size
            );
            // Single accidentals keep alterations small; the widest case
            // is the tritone respelled across both accidentals (f- to b#
            // is +AAA4).
            assert!(
                quality_magnitude(labeled.quality) <= 3,
                "{:?} -> {:?} labeled {}",
                from,
                to,
                labeled
            );
        }
    }
}

#[test]
fn test_diagonal_is_perfect_unison() {
    for pitch in table_pitches() {
        assert_eq!(interval(&pitch, &pitch).unwrap().to_string(), "+P1");
    }
}

#[test]
fn test_swapping_operands_flips_direction_only() {
    let pitches = table_pitches();
    for from in &pitches {
        for to in &pitches {
            if from == to {
                continue;
            }
            let forward = interval(from, to).unwrap();
            let backward = interval(to, from).unwrap();
            assert_ne!(
                forward.direction, backward.direction,
                "{:?}/{:?}",
                from, to
            );
            assert_eq!(forward.size, backward.size, "{:?}/{:?}", from, to);
            assert_eq!(forward.quality, backward.quality, "{:?}/{:?}", from, to);
        }
    }
}

#[test]
fn test_label_strings_are_well_formed() {
    let pitches = table_pitches();
    let mut labels = BTreeSet::new();
    for from in &pitches {
        for to in &pitches {
            labels.insert(interval(from, to).unwrap().to_string());
        }
    }

    for label in &labels {
        let mut chars = label.chars();
        let sign = chars.next().unwrap();
        assert!(sign == '+' || sign == '-', "label {:?}", label);
        let rest: String = chars.collect();
        let quality: String = rest.chars().take_while(|c| !c.is_ascii_digit()).collect();
        let size: String = rest.chars().skip_while(|c| !c.is_ascii_digit()).collect();
        assert!(
            quality == "P"
                || quality == "M"
                || quality == "m"
                || quality.chars().all(|c| c == 'A')
                || quality.chars().all(|c| c == 'D'),
            "label {:?}",
            label
        );
        assert!(!quality.is_empty(), "label {:?}", label);
        assert!(size.parse::<u32>().is_ok(), "label {:?}", label);
    }

    // Spot entries from the reference table.
    let mut spot = |from: &str, to: &str, expected: &str| {
        assert_eq!(interval(from, to).unwrap().to_string(), expected);
        assert!(labels.contains(expected));
    };
    spot("c", "g", "+P5");
    spot("f", "b", "+A4");
    spot("c#", "d-", "+D2");
    spot("c-", "c#", "+AA1");
    spot("b", "f", "-A4");
    spot("a-", "g#", "-D2");
    spot("f-", "b#", "+AAA4");
}
