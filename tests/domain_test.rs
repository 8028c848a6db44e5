use parlance::domain::{AudioFormat, ConfidenceTier, Language, TranscriptionOutcome};

#[test]
fn given_known_extensions_when_parsing_format_then_maps_to_specific_decoders() {
    assert_eq!(AudioFormat::from_filename("talk.mp3"), AudioFormat::Mp3);
    assert_eq!(AudioFormat::from_filename("talk.wav"), AudioFormat::Wav);
    assert_eq!(AudioFormat::from_filename("talk.ogg"), AudioFormat::Ogg);
    assert_eq!(AudioFormat::from_filename("talk.flac"), AudioFormat::Flac);
    assert_eq!(AudioFormat::from_filename("talk.m4a"), AudioFormat::M4a);
}

#[test]
fn given_uppercase_extension_when_parsing_format_then_is_case_insensitive() {
    assert_eq!(AudioFormat::from_filename("TALK.MP3"), AudioFormat::Mp3);
}

#[test]
fn given_unknown_or_missing_extension_when_parsing_format_then_falls_through_to_other() {
    assert_eq!(AudioFormat::from_filename("talk.opus"), AudioFormat::Other);
    assert_eq!(AudioFormat::from_filename("no_extension"), AudioFormat::Other);
}

#[test]
fn given_supported_tag_when_parsing_language_then_round_trips() {
    let lang: Language = "en-US".parse().unwrap();
    assert_eq!(lang, Language::EnUs);
    assert_eq!(lang.as_tag(), "en-US");
    assert_eq!(lang.display_name(), "English (US)");
}

#[test]
fn given_mixed_case_tag_when_parsing_language_then_still_matches() {
    let lang: Language = "ja-jp".parse().unwrap();
    assert_eq!(lang, Language::JaJp);
}

#[test]
fn given_unsupported_tag_when_parsing_language_then_errors() {
    assert!("xx-XX".parse::<Language>().is_err());
}

#[test]
fn given_language_enumeration_then_contains_the_twelve_supported_locales() {
    assert_eq!(Language::ALL.len(), 12);
    let tags: Vec<&str> = Language::ALL.iter().map(|l| l.as_tag()).collect();
    for tag in [
        "en-US", "en-GB", "es-ES", "fr-FR", "de-DE", "hi-IN", "zh-CN", "ja-JP", "ko-KR", "pt-BR",
        "ru-RU", "it-IT",
    ] {
        assert!(tags.contains(&tag), "missing {}", tag);
    }
}

#[test]
fn given_outcomes_when_reading_duration_then_accessor_matches_variant() {
    let success = TranscriptionOutcome::Success {
        text: "hi".to_string(),
        duration_secs: 3.2,
        confidence: ConfidenceTier::High,
    };
    assert_eq!(success.duration_secs(), Some(3.2));

    let failure = TranscriptionOutcome::Failure {
        reason: "Could not understand audio".to_string(),
        duration_secs: Some(0.4),
    };
    assert_eq!(failure.duration_secs(), Some(0.4));

    let early_failure = TranscriptionOutcome::Failure {
        reason: "Error: unreadable".to_string(),
        duration_secs: None,
    };
    assert_eq!(early_failure.duration_secs(), None);
}

#[test]
fn given_confidence_tiers_then_render_as_coarse_labels() {
    assert_eq!(ConfidenceTier::High.as_str(), "High");
    assert_eq!(ConfidenceTier::Low.as_str(), "Low");
}
