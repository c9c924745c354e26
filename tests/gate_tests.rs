use checkout_gate::application::engine::{CheckoutEngine, SubmissionOutcome};
use checkout_gate::domain::field::{Control, FieldId, Validity};
use checkout_gate::domain::form::PaymentMethod;
use checkout_gate::infrastructure::observers::{Notification, RecordingObserver};
use checkout_gate::interfaces::csv::event_reader::EventReader;

mod common;

fn engine_from_rows(rows: &[&str]) -> (CheckoutEngine, Vec<SubmissionOutcome>) {
    let mut script = String::from(common::HEADER);
    for row in rows {
        script.push('\n');
        script.push_str(row);
    }

    let mut engine = CheckoutEngine::default();
    let outcomes = EventReader::new(script.as_bytes())
        .events()
        .filter_map(|event| engine.handle(event.unwrap()))
        .collect();
    (engine, outcomes)
}

#[test]
fn test_other_payment_makes_empty_card_fields_irrelevant() {
    let mut rows: Vec<&str> = common::CONTACT_ROWS.to_vec();
    rows.extend(["terms,,true", "submit,,", "payment,,other", "submit,,"]);
    let (engine, outcomes) = engine_from_rows(&rows);

    assert_eq!(
        outcomes,
        vec![
            SubmissionOutcome::Rejected {
                first_error: Control::Field(FieldId::CardName)
            },
            SubmissionOutcome::Accepted,
        ]
    );
    for field in FieldId::CARD_FIELDS {
        assert_eq!(engine.form().marker(field.into()), Validity::Neutral);
    }
}

#[test]
fn test_returning_to_credit_requires_card_fields_again() {
    let mut rows: Vec<&str> = common::CONTACT_ROWS.to_vec();
    rows.extend([
        "terms,,true",
        "payment,,other",
        "submit,,",
        "payment,,credit",
        "submit,,",
    ]);
    rows.extend(common::CARD_ROWS);
    rows.push("submit,,");
    let (_, outcomes) = engine_from_rows(&rows);

    assert_eq!(outcomes[0], SubmissionOutcome::Accepted);
    assert_eq!(outcomes[1].first_error(), Some(Control::Field(FieldId::CardName)));
    assert_eq!(outcomes[2], SubmissionOutcome::Accepted);
}

#[test]
fn test_terms_unchecked_rejects_regardless_of_fields() {
    let recorder = RecordingObserver::new();
    let mut engine = CheckoutEngine::new(PaymentMethod::Other);
    engine.subscribe(Box::new(recorder.clone()));

    engine.input(FieldId::FullName, "Grace Hopper");
    engine.input(FieldId::Email, "grace@navy.mil");
    engine.input(FieldId::Phone, "202-555-0147");
    engine.input(FieldId::Address, "1 Harbor Way");
    engine.input(FieldId::City, "Arlington");
    engine.input(FieldId::Zip, "22201");
    engine.input(FieldId::Country, "US");
    recorder.clear();

    let outcome = engine.attempt_submission();
    assert_eq!(
        outcome,
        SubmissionOutcome::Rejected {
            first_error: Control::Terms
        }
    );
    assert_eq!(recorder.marker(Control::Terms), Some(Validity::Invalid));
    assert_eq!(
        recorder.notifications().last(),
        Some(&Notification::Focus(Control::Terms))
    );
    assert!(!recorder.notifications().contains(&Notification::Accepted));
}

#[test]
fn test_first_error_is_first_in_document_order() {
    let (_, outcomes) = engine_from_rows(&[
        "input,full_name,Grace Hopper",
        "input,email,grace@navy.mil",
        "input,phone,12345",
        "input,zip,1234567",
        "submit,,",
    ]);
    assert_eq!(
        outcomes,
        vec![SubmissionOutcome::Rejected {
            first_error: Control::Field(FieldId::Phone)
        }]
    );
}

#[test]
fn test_accepted_submission_notifies_observers() {
    let recorder = RecordingObserver::new();
    let mut engine = CheckoutEngine::new(PaymentMethod::Other);
    engine.subscribe(Box::new(recorder.clone()));

    let mut rows: Vec<&str> = common::CONTACT_ROWS.to_vec();
    rows.extend(["terms,,true", "submit,,"]);
    let mut script = String::from(common::HEADER);
    for row in rows {
        script.push('\n');
        script.push_str(row);
    }
    for event in EventReader::new(script.as_bytes()).events() {
        engine.handle(event.unwrap());
    }

    assert_eq!(engine.attempts(), 1);
    assert_eq!(
        recorder.notifications().last(),
        Some(&Notification::Accepted)
    );
}

#[test]
fn test_replayed_selection_matches_direct_input() {
    let (replayed, _) = engine_from_rows(&["change,country,\" \""]);

    let mut direct = CheckoutEngine::default();
    direct.input(FieldId::Country, " ");

    assert_eq!(
        replayed.form().marker(FieldId::Country.into()),
        direct.form().marker(FieldId::Country.into())
    );
    assert_eq!(replayed.form().value(FieldId::Country), " ");
    assert_eq!(
        replayed.form().marker(FieldId::Country.into()),
        Validity::Valid
    );
}

#[test]
fn test_replayed_name_keeps_its_original_length() {
    let (engine, _) = engine_from_rows(&["input,full_name,😀😀", "input,city,\"\u{FEFF} \""]);

    assert_eq!(engine.form().marker(FieldId::FullName.into()), Validity::Valid);
    assert_eq!(engine.form().marker(FieldId::City.into()), Validity::Invalid);
}
