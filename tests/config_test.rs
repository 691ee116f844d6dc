use std::fs;

use text2id::core::symbols::{arpabet_to_ids, space_id, text_to_ids};
use text2id::persistence::load_from_disk;
use text2id::{EncoderConfig, Text2Id, Text2IdError};

const CMUDICT: &str = ";;; test dictionary\n\
                       HELLO  HH AH0 L OW1\n\
                       READ  R EH1 D\n\
                       READ(1)  R IY1 D\n\
                       WORLD  W ER1 L D\n";

#[test]
fn cmudict_text_is_compiled_into_a_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let cmudict_path = dir.path().join("cmudict-0.7b");
    let snapshot_path = dir.path().join("cache").join("cmudict.bin");
    fs::write(&cmudict_path, CMUDICT).unwrap();

    let config = EncoderConfig {
        cmudict_path: Some(cmudict_path.clone()),
        snapshot_path: Some(snapshot_path.clone()),
        ..EncoderConfig::default()
    };
    let t2i = Text2Id::from_config(&config).unwrap();
    assert!(snapshot_path.exists());
    assert_eq!(load_from_disk(&snapshot_path).unwrap().len(), 3);

    let mut expected = arpabet_to_ids("HH AH0 L OW1");
    expected.push(space_id());
    expected.extend(arpabet_to_ids("W ER1 L D"));
    assert_eq!(t2i.encode("Hello world").unwrap(), expected);

    // The snapshot alone is enough for the next start.
    fs::remove_file(&cmudict_path).unwrap();
    let reloaded = Text2Id::from_config(&config).unwrap();
    assert_eq!(reloaded.encode("Hello world").unwrap(), expected);
}

#[test]
fn ambiguous_words_follow_the_config() {
    let dir = tempfile::tempdir().unwrap();
    let cmudict_path = dir.path().join("cmudict-0.7b");
    fs::write(&cmudict_path, CMUDICT).unwrap();

    let mut config = EncoderConfig {
        cmudict_path: Some(cmudict_path),
        ..EncoderConfig::default()
    };
    let t2i = Text2Id::from_config(&config).unwrap();
    assert_eq!(t2i.arpabet_for("read").unwrap().as_deref(), Some("R EH1 D"));

    config.keep_ambiguous = false;
    let t2i = Text2Id::from_config(&config).unwrap();
    assert_eq!(t2i.arpabet_for("read").unwrap(), None);
    assert_eq!(t2i.encode("read").unwrap(), text_to_ids("read"));
}

#[test]
fn json_config_drives_the_default_pipeline() {
    let config =
        EncoderConfig::from_json_str(r#"{"cleaners": ["basic_cleaners"], "use_dictionary": false}"#)
            .unwrap();
    let t2i = Text2Id::from_config(&config).unwrap();
    assert_eq!(t2i.encode("Über  7").unwrap(), text_to_ids("ber "));
}

#[test]
fn configuration_errors_surface() {
    let config = EncoderConfig {
        cleaners: vec!["english".into(), "pirate".into()],
        ..EncoderConfig::default()
    };
    let err = Text2Id::from_config(&config).unwrap_err();
    assert!(matches!(err, Text2IdError::UnknownStage(ref name) if name == "pirate"));

    let dir = tempfile::tempdir().unwrap();
    let missing = EncoderConfig {
        cmudict_path: Some(dir.path().join("absent.dict")),
        ..EncoderConfig::default()
    };
    assert!(matches!(Text2Id::from_config(&missing), Err(Text2IdError::Io(_))));

    let corrupt_path = dir.path().join("config.json");
    fs::write(&corrupt_path, "{ not json").unwrap();
    assert!(matches!(
        EncoderConfig::from_file(&corrupt_path),
        Err(Text2IdError::Config(_))
    ));
}

#[test]
fn vocabulary_listing_is_stable() {
    let symbols = Text2Id::list_symbols();
    assert_eq!(symbols.len(), 149);
    assert_eq!(symbols[0], "_");
    assert_eq!(symbols[1], "~");
    assert_eq!(symbols[65], "@AA");
    assert_eq!(symbols[148], "@ZH");
}
