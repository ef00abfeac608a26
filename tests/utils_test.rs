use pmcli::catalog::{Album, Artist, CatalogEntity, Track};
use pmcli::utils::*;

// Helper function to create a small listing
fn create_test_listing() -> Vec<CatalogEntity> {
    vec![
        Artist::new("ar1", "Daft Punk").into(),
        Album::new("al1", "Daft Punk", "Discovery", 14).into(),
        Track::new("t1", "Daft Punk", "Discovery", "One More Time").into(),
    ]
}

#[test]
fn test_parse_search() {
    assert_eq!(
        parse_command("search daft punk"),
        ShellCommand::Search("daft punk".to_string())
    );
    assert_eq!(
        parse_command("  s   around the world  "),
        ShellCommand::Search("around the world".to_string())
    );

    // A query is required
    assert!(matches!(parse_command("search"), ShellCommand::Invalid(_)));
}

#[test]
fn test_parse_play_and_shuffle() {
    assert_eq!(
        parse_command("play 3"),
        ShellCommand::Play {
            index: 3,
            shuffle: false
        }
    );
    assert_eq!(
        parse_command("P 1"),
        ShellCommand::Play {
            index: 1,
            shuffle: false
        }
    );
    assert_eq!(
        parse_command("shuffle 2"),
        ShellCommand::Play {
            index: 2,
            shuffle: true
        }
    );

    // Entry numbers start at 1
    assert!(matches!(parse_command("play 0"), ShellCommand::Invalid(_)));
    assert!(matches!(parse_command("play three"), ShellCommand::Invalid(_)));
    assert!(matches!(parse_command("play"), ShellCommand::Invalid(_)));
}

#[test]
fn test_parse_other_commands() {
    assert_eq!(parse_command("show 4"), ShellCommand::Show(4));
    assert_eq!(parse_command("i 4"), ShellCommand::Show(4));
    assert_eq!(parse_command("list"), ShellCommand::List);
    assert_eq!(parse_command("h"), ShellCommand::Help);
    assert_eq!(parse_command("?"), ShellCommand::Help);
    assert_eq!(parse_command("q"), ShellCommand::Quit);
    assert_eq!(parse_command("exit"), ShellCommand::Quit);
    assert_eq!(parse_command(""), ShellCommand::Empty);
    assert_eq!(parse_command("   "), ShellCommand::Empty);

    match parse_command("dance") {
        ShellCommand::Invalid(message) => assert!(message.contains("dance")),
        other => panic!("unexpected command: {:?}", other),
    }
}

#[test]
fn test_parse_index() {
    assert_eq!(parse_index("7"), Ok(7));
    assert_eq!(parse_index(" 12 "), Ok(12));
    assert!(parse_index("0").is_err());
    assert!(parse_index("-1").is_err());
    assert!(parse_index("").is_err());
}

#[test]
fn test_select_is_one_based() {
    let listing = create_test_listing();

    assert_eq!(select(&listing, 1).map(|e| e.id()), Some("ar1"));
    assert_eq!(select(&listing, 2).map(|e| e.id()), Some("al1"));
    assert_eq!(select(&listing, 3).map(|e| e.id()), Some("t1"));

    // Out of range on both ends
    assert!(select(&listing, 0).is_none());
    assert!(select(&listing, 4).is_none());
    assert!(select(&[], 1).is_none());
}

#[test]
fn test_shuffle_is_a_permutation() {
    let original: Vec<u32> = (0..50).collect();
    let mut shuffled = original.clone();

    shuffle(&mut shuffled);

    let mut restored = shuffled.clone();
    restored.sort();
    assert_eq!(restored, original);
}

#[test]
fn test_shuffle_handles_trivial_inputs() {
    let mut empty: Vec<String> = Vec::new();
    shuffle(&mut empty);
    assert!(empty.is_empty());

    let mut single = vec!["https://stream.test/t1".to_string()];
    shuffle(&mut single);
    assert_eq!(single, vec!["https://stream.test/t1".to_string()]);
}

#[test]
fn test_help_mentions_every_command() {
    for command in ["search", "play", "shuffle", "show", "list", "help", "quit"] {
        assert!(SHELL_HELP.contains(command), "missing {}", command);
    }
}
