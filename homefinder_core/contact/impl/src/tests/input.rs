use homefinder_core_contact_contracts::{
    ContactFormFeatureService, ContactFormSubmitError, MockContactTransportService,
};
use homefinder_models::contact::{ContactField, ContactMessage, FieldError};
use homefinder_utils::assert_matches;
use pretty_assertions::assert_eq;

use super::{fill, sut, valid_fields};

#[tokio::test]
async fn blur_invalid() {
    // Arrange
    let sut = sut(MockContactTransportService::new());
    sut.input(ContactField::Name, "J".into()).await;

    // Act
    let result = sut.blur(ContactField::Name).await;

    // Assert
    assert_eq!(result, Some(FieldError::Name));
    let view = sut.view().await;
    assert!(view.is_errored(ContactField::Name));
    assert_eq!(
        view.error_text(ContactField::Name),
        "Please enter your full name (at least 2 characters)"
    );
    assert_eq!(view.errors.len(), 1);
}

#[tokio::test]
async fn blur_valid_clears_slot() {
    // Arrange
    let sut = sut(MockContactTransportService::new());
    sut.blur(ContactField::Email).await;
    sut.input(ContactField::Email, "jo@x.com".into()).await;

    // Act
    let result = sut.blur(ContactField::Email).await;

    // Assert
    assert_eq!(result, None);
    assert_eq!(sut.view().await.error_text(ContactField::Email), "");
}

#[tokio::test]
async fn blur_empty_phone_is_fine() {
    let sut = sut(MockContactTransportService::new());

    let result = sut.blur(ContactField::Phone).await;

    assert_eq!(result, None);
}

#[tokio::test]
async fn blur_is_repeatable() {
    let sut = sut(MockContactTransportService::new());
    sut.input(ContactField::Message, "short".into()).await;

    let first = sut.blur(ContactField::Message).await;
    let second = sut.blur(ContactField::Message).await;

    assert_eq!(first, Some(FieldError::Message));
    assert_eq!(first, second);
    assert_eq!(sut.view().await.errors.len(), 1);
}

#[tokio::test]
async fn input_clears_error_before_revalidation() {
    // Arrange
    let sut = sut(MockContactTransportService::new());
    sut.input(ContactField::Name, "J".into()).await;
    sut.blur(ContactField::Name).await;
    sut.blur(ContactField::Email).await;

    // Act
    sut.input(ContactField::Name, "J ".into()).await;

    // Assert
    let view = sut.view().await;
    assert!(!view.is_errored(ContactField::Name));
    assert!(view.is_errored(ContactField::Email));
    assert_eq!(view.fields.name, "J ");
}

#[tokio::test]
async fn input_clears_form_error() {
    // Arrange
    let transport = MockContactTransportService::new()
        .with_send(ContactMessage::from_fields(&valid_fields()), false);
    let sut = sut(transport);
    fill(&sut, &valid_fields()).await;
    assert_matches!(sut.submit().await, Err(ContactFormSubmitError::Send));

    // Act
    sut.input(ContactField::Message, "Is it still available?".into())
        .await;

    // Assert
    assert_eq!(sut.view().await.form_error, None);
}

#[tokio::test]
async fn message_counter() {
    // Arrange
    let sut = sut(MockContactTransportService::new());

    // Act
    sut.input(ContactField::Message, "ä".repeat(901)).await;

    // Assert
    let counter = sut.view().await.message_counter;
    assert_eq!(counter.length, 901);
    assert!(counter.warning);
    assert_eq!(counter.to_string(), "901/1000 characters");
}
