//! Tests for the resolver module.

use super::*;
use crate::models::{DeliveryInfo, Location, Step, StepStatus, StepType, Tone};
use crate::text::Lexicon;

fn delivery(pickup: Option<&str>, dropoff: Option<&str>, cargo: Option<&str>) -> DeliveryInfo {
    DeliveryInfo {
        pickup_location: pickup.map(|d| Location {
            description: Some(d.to_string()),
        }),
        dropoff_location: dropoff.map(|d| Location {
            description: Some(d.to_string()),
        }),
        cargo_types: cargo.map(str::to_string),
    }
}

#[test]
fn test_status_style_current() {
    let style = status_style(StepStatus::Current, &Lexicon::default());
    assert_eq!(style.indicator, Tone::Accent);
    assert_eq!(style.label, "In progress");
    assert_eq!(style.label_tone, Tone::Accent);
}

#[test]
fn test_status_style_complete() {
    let style = status_style(StepStatus::Complete, &Lexicon::default());
    assert_eq!(style.indicator, Tone::Success);
    assert_eq!(style.label, "Completed");
    assert_eq!(style.label_tone, Tone::Muted);
}

#[test]
fn test_status_style_total_over_all_statuses() {
    // Every status, the unknown fallback included, must yield a
    // non-empty label and a usable tone.
    for status in [
        StepStatus::Created,
        StepStatus::Current,
        StepStatus::Complete,
        StepStatus::Unknown,
    ] {
        let style = status_style(status, &Lexicon::default());
        assert!(!style.label.is_empty());
        assert!(!style.indicator.as_css().is_empty());
    }
}

#[test]
fn test_unknown_status_falls_back_to_created_row() {
    let lexicon = Lexicon::default();
    let unknown = status_style(StepStatus::Unknown, &lexicon);
    let created = status_style(StepStatus::Created, &lexicon);
    assert_eq!(unknown, created);
}

#[test]
fn test_describe_start_depends_on_status() {
    let lexicon = Lexicon::default();
    assert_eq!(
        describe(StepType::Start, StepStatus::Complete, None, &lexicon),
        "Trip started"
    );
    assert_eq!(
        describe(StepType::Start, StepStatus::Created, None, &lexicon),
        "Order received, get ready to start the trip"
    );
    assert_eq!(
        describe(StepType::Start, StepStatus::Current, None, &lexicon),
        "Order received, get ready to start the trip"
    );
}

#[test]
fn test_describe_pickup_without_delivery_is_sentinel() {
    let lexicon = Lexicon::default();
    assert_eq!(
        describe(StepType::GoingToPickup, StepStatus::Current, None, &lexicon),
        "no data"
    );
}

#[test]
fn test_describe_pickup_with_empty_description_is_sentinel() {
    let lexicon = Lexicon::default();
    let d = delivery(Some(""), None, None);
    assert_eq!(
        describe(StepType::GoingToPickup, StepStatus::Current, Some(&d), &lexicon),
        "no data"
    );
}

#[test]
fn test_describe_pickup_and_dropoff_use_their_locations() {
    let lexicon = Lexicon::default();
    let d = delivery(Some("Warehouse 1"), Some("Depot 9"), None);
    assert_eq!(
        describe(StepType::GoingToPickup, StepStatus::Current, Some(&d), &lexicon),
        "Warehouse 1"
    );
    assert_eq!(
        describe(StepType::GoingToDropoff, StepStatus::Current, Some(&d), &lexicon),
        "Depot 9"
    );
}

#[test]
fn test_describe_cargo_line() {
    let lexicon = Lexicon::default();
    let d = delivery(None, None, Some("Fruit"));
    assert_eq!(
        describe(StepType::Loading, StepStatus::Current, Some(&d), &lexicon),
        "Cargo: Fruit"
    );
    assert_eq!(
        describe(StepType::Unloading, StepStatus::Current, Some(&d), &lexicon),
        "Cargo: Fruit"
    );
}

#[test]
fn test_describe_cargo_missing_embeds_placeholder() {
    // Absent cargo_types still formats the cargo line, with the pinned
    // placeholder token after the prefix.
    let lexicon = Lexicon::default();
    let line = describe(StepType::Loading, StepStatus::Current, None, &lexicon);
    assert_eq!(line, format!("Cargo: {}", crate::text::CARGO_MISSING));
}

#[test]
fn test_describe_end_and_unknown() {
    let lexicon = Lexicon::default();
    assert_eq!(
        describe(StepType::End, StepStatus::Current, None, &lexicon),
        "Trip ended"
    );
    assert_eq!(
        describe(StepType::Unknown, StepStatus::Current, None, &lexicon),
        ""
    );
}

#[test]
fn test_additional_descriptions_use_parent_status() {
    // The sub-step is itself complete, but the parent is not; the
    // start branch must follow the parent.
    let mut parent = Step::new("p", StepType::Start, StepStatus::Current);
    parent
        .additional_steps
        .push(Step::new("a", StepType::Start, StepStatus::Complete));

    let lines = additional_descriptions(&parent, &Lexicon::default());
    assert_eq!(lines, vec!["Order received, get ready to start the trip".to_string()]);

    // And the other way around: a completed parent flips the wording
    // even for a sub-step that has not finished.
    let mut parent = Step::new("p", StepType::Start, StepStatus::Complete);
    parent
        .additional_steps
        .push(Step::new("a", StepType::Start, StepStatus::Created));

    let lines = additional_descriptions(&parent, &Lexicon::default());
    assert_eq!(lines, vec!["Trip started".to_string()]);
}

#[test]
fn test_additional_descriptions_use_substep_delivery() {
    let mut parent = Step::new("p", StepType::GoingToPickup, StepStatus::Current);
    parent.delivery = Some(delivery(Some("Parent pickup"), None, None));

    let mut sub = Step::new("a", StepType::GoingToDropoff, StepStatus::Created);
    sub.delivery = Some(delivery(None, Some("Sub dropoff"), None));
    parent.additional_steps.push(sub);

    // The sub-step resolves against its own delivery payload, not the
    // parent's.
    let lines = additional_descriptions(&parent, &Lexicon::default());
    assert_eq!(lines, vec!["Sub dropoff".to_string()]);
}

#[test]
fn test_additional_descriptions_skip_empty_and_ignore_deep_nesting() {
    let mut parent = Step::new("p", StepType::Start, StepStatus::Current);

    let mut sub = Step::new("a", StepType::Unknown, StepStatus::Created);
    // A nested sub-sub-step must not be visited.
    sub.additional_steps
        .push(Step::new("deep", StepType::End, StepStatus::Created));
    parent.additional_steps.push(sub);
    parent
        .additional_steps
        .push(Step::new("b", StepType::End, StepStatus::Created));

    let lines = additional_descriptions(&parent, &Lexicon::default());
    assert_eq!(lines, vec!["Trip ended".to_string()]);
}

#[test]
fn test_dedup_stable_keeps_first_occurrence_order() {
    let input = vec![
        "A".to_string(),
        "B".to_string(),
        "A".to_string(),
        "C".to_string(),
    ];
    assert_eq!(
        dedup_stable(input),
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    );
}

#[test]
fn test_dedup_stable_is_exact_equality() {
    let input = vec!["A".to_string(), "a".to_string(), "A ".to_string()];
    assert_eq!(dedup_stable(input).len(), 3);
}

#[test]
fn test_dedup_stable_drops_empty_strings() {
    let input = vec![String::new(), "A".to_string(), String::new()];
    assert_eq!(dedup_stable(input), vec!["A".to_string()]);
}

#[test]
fn test_format_step_number() {
    assert_eq!(format_step_number(1), "01");
    assert_eq!(format_step_number(5), "05");
    assert_eq!(format_step_number(9), "09");
    assert_eq!(format_step_number(10), "10");
    assert_eq!(format_step_number(12), "12");
}

#[test]
fn test_resolve_is_referentially_idempotent() {
    let mut step = Step::new("s", StepType::Loading, StepStatus::Current);
    step.delivery = Some(delivery(None, None, Some("Steel")));

    let resolver = Resolver::new();
    assert_eq!(resolver.resolve(&step, 2), resolver.resolve(&step, 2));
}

#[test]
fn test_resolve_dims_inactive_rows() {
    let resolver = Resolver::new();
    let current = Step::new("s", StepType::End, StepStatus::Current);
    let done = Step::new("s", StepType::End, StepStatus::Complete);
    assert!(!resolver.resolve(&current, 1).dimmed);
    assert!(resolver.resolve(&done, 1).dimmed);
}

#[test]
fn test_resolve_with_custom_lexicon() {
    let lexicon = Lexicon {
        status_current: "Underway",
        ..Lexicon::default()
    };
    let resolver = Resolver::with_lexicon(lexicon);
    let step = Step::new("s", StepType::End, StepStatus::Current);
    assert_eq!(resolver.resolve(&step, 1).status_label, "Underway");
}
