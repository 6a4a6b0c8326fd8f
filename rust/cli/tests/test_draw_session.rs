//! Interactive `draw` sessions driven through scripted stdin.

use std::io::Cursor;

fn draw(args: &[&str], script: &str) -> (i32, String, String) {
    let mut argv = vec!["tarot", "draw", "--locale", "en"];
    argv.extend_from_slice(args);
    let mut input = Cursor::new(script.to_string());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = tarot_cli::run_with_input(argv, &mut input, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn confirm_prints_result_table_for_each_card() {
    let (code, out, _) = draw(&["--seed", "42"], "count 3\nset 0 1 2\nconfirm\nq\n");
    assert_eq!(code, 0);
    assert!(out.contains("Result:"));
    let cells = out.matches(" -> Upright").count() + out.matches(" -> Reversed").count();
    assert_eq!(cells, 3);
    assert!(out.contains("[card 3]"));
}

#[test]
fn missing_artwork_is_listed_not_fatal() {
    let (code, out, _) = draw(&["--seed", "1"], "confirm\n");
    assert_eq!(code, 0);
    assert!(out.contains("(no image)"));
}

#[test]
fn duplicate_positions_show_warning_and_session_continues() {
    let (code, out, err) = draw(
        &["--seed", "9"],
        "count 3\nset 4 8 4\nconfirm\npick 3 5\nconfirm\nq\n",
    );
    assert_eq!(code, 0);
    assert!(err.is_empty(), "duplicates are shown in the session, got: {}", err);
    assert!(out.contains("Duplicate cards, please check your choice. [4]"));
    assert!(out.contains("Result:"));
}

#[test]
fn rejected_commands_report_errors_and_keep_state() {
    let (code, out, err) = draw(
        &["--seed", "3"],
        "count 0\ncount 79\npick 2 5\npick 1 78\nset 1 2\nshow\nq\n",
    );
    assert_eq!(code, 0);
    assert!(err.contains("Invalid card count: 0"));
    assert!(err.contains("Invalid card count: 79"));
    assert!(err.contains("Card 2 does not exist (1-1)"));
    assert!(err.contains("Position 78 out of range"));
    assert!(err.contains("Expected 1 positions, got 2"));
    // `show` still displays the untouched single slot
    assert!(out.trim_end().ends_with("card 1: 0\nEnter command (count/pick/set/confirm/reshuffle/show/help/q):"));
}

#[test]
fn unknown_input_reprompts() {
    let (code, _, err) = draw(&["--seed", "3"], "shuffle please\nq\n");
    assert_eq!(code, 0);
    assert!(err.contains("Unrecognized command 'shuffle'"));
}

#[test]
fn reshuffle_hides_result_and_keeps_count() {
    let (code, out, _) = draw(
        &["--seed", "11", "--count", "2"],
        "set 10 20\nconfirm\nreshuffle\nshow\nq\n",
    );
    assert_eq!(code, 0);
    let after = out
        .split("Done. The deck has been reshuffled.")
        .nth(1)
        .expect("reshuffle message");
    assert!(after.contains("card 1: 0\n  card 2: 0"));
    assert!(!after.contains("Result:"));
}

#[test]
fn same_seed_same_session_output() {
    let script = "count 5\nset 1 2 3 4 5\nconfirm\nconfirm\nreshuffle\nset 1 2 3 4 5\nconfirm\n";
    let a = draw(&["--seed", "2024"], script);
    let b = draw(&["--seed", "2024"], script);
    assert_eq!(a, b);
}

#[test]
fn count_flag_is_range_checked_by_parser() {
    let (code, _, err) = draw(&["--count", "79"], "");
    assert_eq!(code, 2);
    assert!(err.contains("Commands:"));
}

#[test]
fn chinese_interface_strings() {
    let mut input = Cursor::new("confirm\nq\n");
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let code = tarot_cli::run_with_input(
        ["tarot", "draw", "--locale", "zh", "--seed", "5"],
        &mut input,
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("塔罗选牌\n"));
    assert!(out.contains("结果"));
    assert!(out.contains("[牌1]"));
}

#[test]
fn rejected_reconfirm_keeps_result_on_show() {
    let (code, out, _) = draw(
        &["--seed", "12"],
        "count 2\nset 1 2\nconfirm\npick 2 1\nconfirm\nshow\nq\n",
    );
    assert_eq!(code, 0);
    let shown = out
        .split("Duplicate cards, please check your choice. [1]\n")
        .nth(1)
        .expect("duplicate warning");
    assert!(shown.contains("Duplicate cards, please check your choice. [1]"));
    assert!(shown.contains("Result:"));
    assert!(shown.contains("[card 2]"));
}
