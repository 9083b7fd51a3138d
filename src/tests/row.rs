use super::{
    insertion_index, reconstruct_line, rewrite_row, MidpointGuard, Placement, RowOutcome,
};
use crate::error::ExpandError;

fn fillers() -> Vec<String> {
    vec!["&trans".to_string(), "&trans".to_string()]
}

fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("&kp K{i}")).collect()
}

#[test]
fn test_insertion_index_rounds_down() {
    assert_eq!(insertion_index(0), 0);
    assert_eq!(insertion_index(1), 0);
    assert_eq!(insertion_index(5), 2);
    assert_eq!(insertion_index(10), 5);
}

#[test]
fn test_ten_column_row_gains_fillers_after_fifth() {
    let mut tokens: Vec<String> = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"]
        .iter()
        .map(|k| format!("&kp {k}"))
        .collect();

    let outcome = rewrite_row(&mut tokens, &fillers(), Placement::Midpoint, MidpointGuard::Exact);

    assert_eq!(outcome, RowOutcome::Inserted);
    assert_eq!(
        tokens.join(" "),
        "&kp A &kp B &kp C &kp D &kp E &trans &trans &kp F &kp G &kp H &kp I &kp J"
    );
}

#[test]
fn test_odd_row_inserts_before_middle_token() {
    let mut tokens = keys(5);
    rewrite_row(&mut tokens, &fillers(), Placement::Midpoint, MidpointGuard::Exact);

    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens[1], "&kp K1");
    assert_eq!(tokens[2], "&trans");
    assert_eq!(tokens[3], "&trans");
    assert_eq!(tokens[4], "&kp K2");
}

#[test]
fn test_midpoint_law() {
    for n in 0..12 {
        let mut tokens = keys(n);
        assert_eq!(
            rewrite_row(&mut tokens, &fillers(), Placement::Midpoint, MidpointGuard::Exact),
            RowOutcome::Inserted
        );
        assert_eq!(tokens.len(), n + 2, "row of {n}");
        assert_eq!(tokens[n / 2], "&trans", "row of {n}");
        assert_eq!(tokens[n / 2 + 1], "&trans", "row of {n}");
    }
}

#[test]
fn test_exact_guard_inserts_again_after_midpoint_moves() {
    let mut tokens = keys(10);
    rewrite_row(&mut tokens, &fillers(), Placement::Midpoint, MidpointGuard::Exact);

    let outcome = rewrite_row(&mut tokens, &fillers(), Placement::Midpoint, MidpointGuard::Exact);

    assert_eq!(outcome, RowOutcome::Inserted);
    assert_eq!(tokens.len(), 14);
}

#[test]
fn test_shifted_guard_makes_second_pass_noop() {
    for n in 0..12 {
        let mut tokens = keys(n);
        rewrite_row(&mut tokens, &fillers(), Placement::Midpoint, MidpointGuard::Shifted);

        let once = tokens.clone();
        assert_eq!(
            rewrite_row(&mut tokens, &fillers(), Placement::Midpoint, MidpointGuard::Shifted),
            RowOutcome::AlreadyPresent,
            "row of {n}"
        );
        assert_eq!(tokens, once, "row of {n}");
    }
}

fn number_row() -> Vec<String> {
    [
        "&kp N1", "&kp N2", "&kp N3", "&kp N4", "&trans", "&trans", "&kp N7", "&kp N8",
        "&kp N9", "&kp N0",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

#[test]
fn test_fresh_row_with_fillers_left_of_midpoint_is_widened() {
    let mut tokens = number_row();

    let outcome = rewrite_row(&mut tokens, &fillers(), Placement::Midpoint, MidpointGuard::Exact);

    assert_eq!(outcome, RowOutcome::Inserted);
    assert_eq!(tokens.len(), 12);
    assert_eq!(tokens[4..8], ["&trans", "&trans", "&trans", "&trans"]);
    assert_eq!(tokens[8], "&kp N7");
}

#[test]
fn test_shifted_guard_skips_fresh_row_with_fillers_left_of_midpoint() {
    let mut tokens = number_row();

    let outcome = rewrite_row(&mut tokens, &fillers(), Placement::Midpoint, MidpointGuard::Shifted);

    assert_eq!(outcome, RowOutcome::AlreadyPresent);
    assert_eq!(tokens, number_row());
}

#[test]
fn test_fillers_already_at_insertion_index() {
    let mut tokens: Vec<String> = ["&kp A", "&kp B", "&trans", "&trans"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let before = tokens.clone();

    let outcome = rewrite_row(&mut tokens, &fillers(), Placement::Midpoint, MidpointGuard::Exact);

    assert_eq!(outcome, RowOutcome::AlreadyPresent);
    assert_eq!(tokens, before);
}

#[test]
fn test_lone_filler_at_midpoint_still_inserts() {
    let mut tokens: Vec<String> = ["&kp A", "&kp B", "&trans", "&kp D"]
        .iter()
        .map(ToString::to_string)
        .collect();

    let outcome = rewrite_row(&mut tokens, &fillers(), Placement::Midpoint, MidpointGuard::Exact);

    assert_eq!(outcome, RowOutcome::Inserted);
    assert_eq!(
        tokens,
        vec!["&kp A", "&kp B", "&trans", "&trans", "&trans", "&kp D"]
    );
}

#[test]
fn test_end_placement_appends_once() {
    let mut tokens = keys(3);
    assert_eq!(
        rewrite_row(&mut tokens, &fillers(), Placement::End, MidpointGuard::Exact),
        RowOutcome::Inserted
    );
    assert_eq!(&tokens[3..], fillers().as_slice());

    assert_eq!(
        rewrite_row(&mut tokens, &fillers(), Placement::End, MidpointGuard::Exact),
        RowOutcome::AlreadyPresent
    );
    assert_eq!(tokens.len(), 5);
}

#[test]
fn test_placement_from_str() {
    assert_eq!("midpoint".parse::<Placement>().unwrap(), Placement::Midpoint);
    assert_eq!(" End ".parse::<Placement>().unwrap(), Placement::End);
    assert!(matches!(
        "left".parse::<Placement>(),
        Err(ExpandError::Config(_))
    ));
}

#[test]
fn test_reconstruct_keeps_indentation_only() {
    let tokens = vec!["&kp A".to_string(), "&kp B".to_string()];
    assert_eq!(
        reconstruct_line("        &kp A      &kp B   ", &tokens),
        "        &kp A  &kp B"
    );
    assert_eq!(reconstruct_line("&kp A &kp B", &tokens), "&kp A  &kp B");
}

#[test]
fn test_reconstruct_keeps_carriage_return() {
    let tokens = vec!["&kp A".to_string()];
    assert_eq!(reconstruct_line("\t&kp   A\r", &tokens), "\t&kp A\r");
}
