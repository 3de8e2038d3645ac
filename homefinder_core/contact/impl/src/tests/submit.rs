use std::time::Duration;

use homefinder_core_contact_contracts::{
    ContactFormFeatureService, ContactFormSubmitError, ContactSendError,
    MockContactTransportService,
};
use homefinder_models::contact::{
    ContactField, ContactFormFields, ContactMessage, SubmissionState::*, SubmitButton,
};
use homefinder_utils::assert_matches;
use pretty_assertions::assert_eq;

use super::{
    drain, fill, sut, valid_fields, BUSY_LABEL, FAILURE_MESSAGE, SUBMIT_LABEL, SUCCESS_DISPLAY,
};

#[tokio::test(start_paused = true)]
async fn ok() {
    // Arrange
    let transport = MockContactTransportService::new()
        .with_send(ContactMessage::from_fields(&valid_fields()), true);
    let sut = sut(transport);
    fill(&sut, &valid_fields()).await;
    let mut transitions = sut.subscribe();

    // Act
    let result = sut.submit().await;
    let after_submit = sut.view().await;
    tokio::time::sleep(SUCCESS_DISPLAY + Duration::from_millis(1)).await;
    let after_reset = sut.view().await;

    // Assert
    result.unwrap();

    assert_eq!(after_submit.state, Succeeded);
    assert!(!after_submit.form_visible);
    assert!(after_submit.success_visible);
    assert_eq!(after_submit.submit_button, SubmitButton::busy(BUSY_LABEL));

    assert_eq!(after_reset.state, Idle);
    assert_eq!(after_reset.fields, ContactFormFields::default());
    assert!(after_reset.errors.is_valid());
    assert_eq!(after_reset.form_error, None);
    assert_eq!(after_reset.submit_button, SubmitButton::ready(SUBMIT_LABEL));
    assert!(after_reset.form_visible);
    assert!(!after_reset.success_visible);
    assert_eq!(after_reset.message_counter.length, 0);

    assert_eq!(
        drain(&mut transitions),
        [
            (Idle, Validating),
            (Validating, Submitting),
            (Submitting, Succeeded),
            (Succeeded, Idle),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn success_panel_stays_until_timeout() {
    // Arrange
    let transport = MockContactTransportService::new()
        .with_send(ContactMessage::from_fields(&valid_fields()), true);
    let sut = sut(transport);
    fill(&sut, &valid_fields()).await;

    // Act
    sut.submit().await.unwrap();
    tokio::time::sleep(SUCCESS_DISPLAY - Duration::from_millis(1)).await;
    let view = sut.view().await;

    // Assert
    assert_eq!(view.state, Succeeded);
    assert_eq!(view.fields, valid_fields());
}

#[tokio::test(start_paused = true)]
async fn busy_while_sending() {
    // Arrange
    let transport = MockContactTransportService::new().with_slow_send(
        ContactMessage::from_fields(&valid_fields()),
        Duration::from_secs(2),
        true,
    );
    let sut = sut(transport);
    fill(&sut, &valid_fields()).await;

    // Act
    let (first, (during, second)) = tokio::join!(sut.submit(), async {
        tokio::task::yield_now().await;
        (sut.view().await, sut.submit().await)
    });

    // Assert
    first.unwrap();
    assert_matches!(second, Err(ContactFormSubmitError::Busy));
    assert_eq!(during.state, Submitting);
    assert_eq!(during.submit_button, SubmitButton::busy(BUSY_LABEL));
    assert!(during.form_visible);
}

#[tokio::test(start_paused = true)]
async fn busy_while_showing_success() {
    // Arrange
    let transport = MockContactTransportService::new()
        .with_send(ContactMessage::from_fields(&valid_fields()), true);
    let sut = sut(transport);
    fill(&sut, &valid_fields()).await;
    sut.submit().await.unwrap();

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, Err(ContactFormSubmitError::Busy));
    assert_eq!(sut.view().await.state, Succeeded);
}

#[tokio::test]
async fn invalid() {
    // Arrange
    let sut = sut(MockContactTransportService::new());
    let fields = [
        (ContactField::Name, "J"),
        (ContactField::Email, "bad"),
        (ContactField::Message, "short"),
    ]
    .into_iter()
    .collect::<ContactFormFields>();
    fill(&sut, &fields).await;
    let mut transitions = sut.subscribe();

    // Act
    let result = sut.submit().await;

    // Assert
    let errors = match result {
        Err(ContactFormSubmitError::Invalid(errors)) => errors,
        other => panic!("unexpected result: {other:?}"),
    };
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
    );

    let view = sut.view().await;
    assert_eq!(view.state, Idle);
    assert_eq!(view.errors, errors);
    assert_eq!(view.fields, fields);
    assert_eq!(view.submit_button, SubmitButton::ready(SUBMIT_LABEL));
    assert_eq!(
        view.error_text(ContactField::Name),
        "Please enter your full name (at least 2 characters)"
    );
    assert!(!view.is_errored(ContactField::Phone));

    assert_eq!(drain(&mut transitions), [(Idle, Validating), (Validating, Idle)]);
}

#[tokio::test]
async fn invalid_then_corrected() {
    // Arrange
    let transport = MockContactTransportService::new()
        .with_send(ContactMessage::from_fields(&valid_fields()), true);
    let sut = sut(transport);
    let mut fields = valid_fields();
    fields.subject.clear();
    fill(&sut, &fields).await;
    sut.submit().await.unwrap_err();

    // Act
    sut.input(ContactField::Subject, "buying".into()).await;
    let result = sut.submit().await;

    // Assert
    result.unwrap();
    let view = sut.view().await;
    assert_eq!(view.state, Succeeded);
    assert!(view.errors.is_valid());
}

#[tokio::test]
async fn transport_failure_keeps_fields() {
    // Arrange
    let transport = MockContactTransportService::new()
        .with_send(ContactMessage::from_fields(&valid_fields()), false);
    let sut = sut(transport);
    fill(&sut, &valid_fields()).await;
    let mut transitions = sut.subscribe();

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, Err(ContactFormSubmitError::Send));

    let view = sut.view().await;
    assert_eq!(view.state, Idle);
    assert_eq!(view.fields, valid_fields());
    assert!(view.errors.is_valid());
    assert_eq!(view.form_error.as_deref(), Some(FAILURE_MESSAGE));
    assert_eq!(view.submit_button, SubmitButton::ready(SUBMIT_LABEL));
    assert!(view.form_visible);
    assert!(!view.success_visible);

    assert_eq!(
        drain(&mut transitions),
        [
            (Idle, Validating),
            (Validating, Submitting),
            (Submitting, Failed),
            (Failed, Idle),
        ]
    );
}

#[tokio::test]
async fn transport_error() {
    // Arrange
    let mut transport = MockContactTransportService::new();
    transport.expect_send().once().return_once(|_| {
        Box::pin(std::future::ready(Err::<(), _>(ContactSendError::Other(
            anyhow::anyhow!("connection refused"),
        ))))
    });
    let sut = sut(transport);
    fill(&sut, &valid_fields()).await;

    // Act
    let result = sut.submit().await;

    // Assert
    assert_matches!(result, Err(ContactFormSubmitError::Other(_)));
    assert_eq!(
        sut.view().await.form_error.as_deref(),
        Some(FAILURE_MESSAGE)
    );
}

#[tokio::test]
async fn retry_after_failure() {
    // Arrange
    let message = ContactMessage::from_fields(&valid_fields());
    let mut transport = MockContactTransportService::new();
    let mut seq = mockall::Sequence::new();
    for ok in [false, true] {
        transport
            .expect_send()
            .once()
            .in_sequence(&mut seq)
            .with(mockall::predicate::eq(message.clone()))
            .return_once(move |_| {
                Box::pin(std::future::ready(
                    ok.then_some(()).ok_or(ContactSendError::Send),
                ))
            });
    }
    let sut = sut(transport);
    fill(&sut, &valid_fields()).await;
    sut.submit().await.unwrap_err();

    // Act
    let result = sut.submit().await;

    // Assert
    result.unwrap();
    let view = sut.view().await;
    assert_eq!(view.state, Succeeded);
    assert_eq!(view.form_error, None);
}

#[tokio::test(start_paused = true)]
async fn abandoned_while_sending() {
    // Arrange
    let transport = MockContactTransportService::new().with_slow_send(
        ContactMessage::from_fields(&valid_fields()),
        Duration::from_secs(2),
        true,
    );
    let sut = sut(transport);
    fill(&sut, &valid_fields()).await;
    let mut transitions = sut.subscribe();

    // Act
    let result = tokio::time::timeout(Duration::from_millis(500), sut.submit()).await;
    tokio::time::sleep(Duration::from_secs(60)).await;

    // Assert
    assert!(result.is_err());

    let view = sut.view().await;
    assert_eq!(view.state, Idle);
    assert_eq!(view.fields, valid_fields());
    assert_eq!(view.submit_button, SubmitButton::ready(SUBMIT_LABEL));
    assert!(view.state.accepts_submit());

    assert_eq!(
        drain(&mut transitions),
        [
            (Idle, Validating),
            (Validating, Submitting),
            (Submitting, Idle),
        ]
    );
}
