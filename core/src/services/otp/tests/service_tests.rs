//! Unit tests for the OTP service

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::challenge::{DeliveryMethod, CODE_LENGTH};
use crate::errors::{AuthError, DomainError};
use crate::services::otp::config::OtpServiceConfig;
use crate::services::otp::service::{mask_identifier, OtpService};

use super::mocks::{ManualClock, MockNotifier};

fn service(
    should_fail: bool,
) -> (OtpService<MockNotifier>, Arc<MockNotifier>, Arc<ManualClock>) {
    let notifier = Arc::new(MockNotifier::new(should_fail));
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let service = OtpService::new(
        notifier.clone(),
        clock.clone(),
        OtpServiceConfig::default(),
    );
    (service, notifier, clock)
}

fn assert_auth_err(result: Result<(), DomainError>, expected: AuthError) {
    match result {
        Err(DomainError::Auth(err)) => assert_eq!(err, expected),
        other => panic!("expected {expected:?}, got {other:?}"),
    }
}

#[tokio::test]
async fn test_send_issues_and_delivers_code() {
    let (service, notifier, _clock) = service(false);

    let outcome = service.send("a@x.com", DeliveryMethod::Email).await.unwrap();

    assert_eq!(outcome.challenge.code.len(), CODE_LENGTH);
    assert!(outcome.challenge.code.chars().all(|c| c.is_ascii_digit()));
    assert!(outcome.delivered);
    assert!(outcome.message_id.is_some());
    assert_eq!(notifier.sent_code("a@x.com"), Some(outcome.challenge.code));
}

#[tokio::test]
async fn test_send_rejects_empty_identifier() {
    let (service, _notifier, _clock) = service(false);

    let result = service.send("", DeliveryMethod::Email).await;
    match result {
        Err(DomainError::Auth(AuthError::MissingIdentifier)) => {}
        other => panic!("expected MissingIdentifier, got {other:?}"),
    }
}

#[tokio::test]
async fn test_phone_method_skips_delivery() {
    let (service, notifier, _clock) = service(false);

    let outcome = service
        .send("+14155550100", DeliveryMethod::Phone)
        .await
        .unwrap();

    assert!(outcome.delivered);
    assert!(outcome.message_id.is_none());
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_send_then_verify_succeeds_exactly_once() {
    let (service, _notifier, _clock) = service(false);

    let outcome = service.send("a@x.com", DeliveryMethod::Email).await.unwrap();
    let code = outcome.challenge.code;

    assert!(service.verify("a@x.com", &code).is_ok());
    // Replaying the consumed code is indistinguishable from never sending one
    assert_auth_err(service.verify("a@x.com", &code), AuthError::OtpNotFound);
}

#[tokio::test]
async fn test_verify_before_any_send_fails_not_found() {
    let (service, _notifier, _clock) = service(false);

    assert_auth_err(
        service.verify("nobody@x.com", "123456"),
        AuthError::OtpNotFound,
    );
}

#[tokio::test]
async fn test_wrong_code_does_not_consume() {
    let (service, _notifier, _clock) = service(false);

    let outcome = service.send("a@x.com", DeliveryMethod::Email).await.unwrap();
    let code = outcome.challenge.code;
    let wrong = if code == "000000" { "111111" } else { "000000" };

    assert_auth_err(service.verify("a@x.com", wrong), AuthError::OtpMismatch);
    // The challenge survived the mismatch
    assert!(service.verify("a@x.com", &code).is_ok());
}

#[tokio::test]
async fn test_resend_invalidates_previous_code() {
    let (service, _notifier, _clock) = service(false);

    let first = service.send("a@x.com", DeliveryMethod::Email).await.unwrap();
    let second = service.send("a@x.com", DeliveryMethod::Email).await.unwrap();

    if first.challenge.code != second.challenge.code {
        assert_auth_err(
            service.verify("a@x.com", &first.challenge.code),
            AuthError::OtpMismatch,
        );
    }
    assert!(service.verify("a@x.com", &second.challenge.code).is_ok());
}

#[tokio::test]
async fn test_expired_code_fails_not_found() {
    let (service, _notifier, clock) = service(false);

    let outcome = service.send("a@x.com", DeliveryMethod::Email).await.unwrap();
    clock.advance(Duration::minutes(10) + Duration::seconds(1));

    assert_auth_err(
        service.verify("a@x.com", &outcome.challenge.code),
        AuthError::OtpNotFound,
    );
}

#[tokio::test]
async fn test_delivery_failure_is_non_fatal() {
    let (service, _notifier, _clock) = service(true);

    let outcome = service.send("a@x.com", DeliveryMethod::Email).await.unwrap();

    assert!(!outcome.delivered);
    assert!(outcome.message_id.is_none());
    // The code is independently valid despite the failed email
    assert!(service.verify("a@x.com", &outcome.challenge.code).is_ok());
}

#[tokio::test]
async fn test_verify_rejects_empty_inputs() {
    let (service, _notifier, _clock) = service(false);

    assert_auth_err(service.verify("", "123456"), AuthError::MissingIdentifier);
    assert_auth_err(service.verify("a@x.com", ""), AuthError::MissingCode);
}

#[tokio::test]
async fn test_test_email_code_is_not_stored() {
    let (service, notifier, _clock) = service(false);

    let (code, delivered, message_id) = service.send_test_email("ops@x.com").await;

    assert!(delivered);
    assert!(message_id.is_some());
    assert_eq!(notifier.sent_code("ops@x.com"), Some(code.clone()));
    assert_eq!(service.outstanding_codes(), 0);
    // A test code never becomes verifiable
    assert_auth_err(service.verify("ops@x.com", &code), AuthError::OtpNotFound);
}

#[tokio::test]
async fn test_sweep_reports_removed_count() {
    let (service, _notifier, clock) = service(false);

    service.send("a@x.com", DeliveryMethod::Email).await.unwrap();
    service.send("b@x.com", DeliveryMethod::Email).await.unwrap();
    assert_eq!(service.sweep_expired(), 0);

    clock.advance(Duration::minutes(10) + Duration::seconds(1));
    assert_eq!(service.sweep_expired(), 2);
    assert_eq!(service.outstanding_codes(), 0);
}

#[test]
fn test_generate_code_format() {
    for _ in 0..100 {
        let code = OtpService::<MockNotifier>::generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_generate_code_varies() {
    let codes: std::collections::HashSet<String> = (0..100)
        .map(|_| OtpService::<MockNotifier>::generate_code())
        .collect();
    assert!(codes.len() > 1);
}

#[test]
fn test_mask_identifier() {
    assert_eq!(mask_identifier("ada@example.com"), "ad***@example.com");
    assert_eq!(mask_identifier("+14155550100"), "+1415***0100");
    assert_eq!(mask_identifier("short"), "***");
}
