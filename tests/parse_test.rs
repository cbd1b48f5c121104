// Pitch Token Parsing Test
//
// Validates the Kern token grammar end to end: octave encoding via letter
// case and repetition, accidental runs, rests, and rejection of malformed
// tokens.

use kern_intervals::{chromatic_value, parse_pitch, KernPitch, Letter, ParseError};

fn note_value(token: &str) -> i32 {
    chromatic_value(&parse_pitch(token).unwrap()).unwrap()
}

#[test]
fn test_octave_ladder() {
    // Each step of the Kern octave ladder moves the same letter by 12
    // semitones.
    let ladder = ["CCC", "CC", "C", "c", "cc", "ccc"];
    let values: Vec<i32> = ladder.iter().map(|t| note_value(t)).collect();
    assert_eq!(values, vec![24, 36, 48, 60, 72, 84]);
}

#[test]
fn test_letters_parse_in_both_cases() {
    for (token, letter) in [
        ("a", Letter::A),
        ("B", Letter::B),
        ("c", Letter::C),
        ("D", Letter::D),
        ("ee", Letter::E),
        ("FF", Letter::F),
        ("g#", Letter::G),
    ] {
        match parse_pitch(token).unwrap() {
            KernPitch::Note(note) => assert_eq!(note.letter, letter, "token {:?}", token),
            KernPitch::Rest => panic!("token {:?} parsed as rest", token),
        }
    }
}

#[test]
fn test_accidentals_stack() {
    assert_eq!(note_value("f#"), 66);
    assert_eq!(note_value("f##"), 67);
    assert_eq!(note_value("f###"), 68);
    assert_eq!(note_value("b-"), 70);
    assert_eq!(note_value("b--"), 69);
}

#[test]
fn test_rest_round_trip_through_serde() {
    let rest = parse_pitch("r").unwrap();
    assert!(rest.is_rest());
    let json = serde_json::to_string(&rest).unwrap();
    let back: KernPitch = serde_json::from_str(&json).unwrap();
    assert_eq!(back, KernPitch::Rest);
}

#[test]
fn test_malformed_tokens_each_get_their_own_error() {
    assert!(matches!(parse_pitch(""), Err(ParseError::EmptyToken)));
    assert!(matches!(parse_pitch("h"), Err(ParseError::InvalidLetter('h'))));
    assert!(matches!(parse_pitch("#c"), Err(ParseError::InvalidLetter('#'))));
    assert!(matches!(parse_pitch("cd"), Err(ParseError::MixedLetters(_))));
    assert!(matches!(parse_pitch("cC"), Err(ParseError::MixedLetters(_))));
    assert!(matches!(
        parse_pitch("c#-"),
        Err(ParseError::MixedAccidentals(_))
    ));
    assert!(matches!(
        parse_pitch("c 4"),
        Err(ParseError::TrailingInput(_))
    ));
}

#[test]
fn test_error_messages_name_the_token() {
    let err = parse_pitch("c#-").unwrap_err();
    assert_eq!(err.to_string(), "token \"c#-\" mixes sharps and flats");
}
