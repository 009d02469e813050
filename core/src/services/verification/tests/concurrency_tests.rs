//! Tests for concurrent confirmations racing on the same profile

use std::sync::Arc;

use crate::errors::DomainError;
use crate::repositories::InMemoryProfileRepository;
use crate::services::verification::{
    PhoneVerificationConfig, PhoneVerificationService, ProviderHandle,
};

use super::mocks::{caller, profile, MockVerificationProvider, ProviderCall, RacingProfileRepository};

#[tokio::test]
async fn test_lost_race_with_same_phone_is_success() {
    let inner = InMemoryProfileRepository::new();
    inner.insert(profile("u1", None, false)).await;
    let repo = Arc::new(RacingProfileRepository::new(inner.clone(), "+15551234567"));
    let provider = MockVerificationProvider::new();
    let calls = provider.calls.clone();
    let service = PhoneVerificationService::new(
        ProviderHandle::ready(provider),
        repo,
        PhoneVerificationConfig::default(),
    );

    let result = service
        .confirm_verification(Some(&caller("u1")), Some("+15551234567"), Some("123456"))
        .await
        .unwrap();

    assert!(result.success);
    // Only the competing write landed; the provider was asked once
    assert_eq!(inner.write_count(), 1);
    assert_eq!(calls.lock().unwrap().len(), 1);
    assert!(matches!(
        &calls.lock().unwrap()[0],
        ProviderCall::Check { .. }
    ));
}

#[tokio::test]
async fn test_lost_race_with_other_phone_is_internal() {
    let inner = InMemoryProfileRepository::new();
    inner.insert(profile("u1", None, false)).await;
    let repo = Arc::new(RacingProfileRepository::new(inner.clone(), "+15559999999"));
    let service = PhoneVerificationService::new(
        ProviderHandle::ready(MockVerificationProvider::new()),
        repo,
        PhoneVerificationConfig::default(),
    );

    let result = service
        .confirm_verification(Some(&caller("u1")), Some("+15551234567"), Some("123456"))
        .await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
    let stored = inner.get("u1").await.unwrap();
    assert_eq!(stored.verified_phone(), Some("+15559999999"));
}

#[tokio::test]
async fn test_parallel_confirmations_leave_one_consistent_record() {
    let repo = InMemoryProfileRepository::new();
    repo.insert(profile("u1", None, false)).await;
    let service = Arc::new(PhoneVerificationService::new(
        ProviderHandle::ready(MockVerificationProvider::new()),
        Arc::new(repo.clone()),
        PhoneVerificationConfig::default(),
    ));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            service
                .confirm_verification(Some(&caller("u1")), Some("+15551234567"), Some("123456"))
                .await
        }));
    }
    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert!(result.success);
    }

    let stored = repo.get("u1").await.unwrap();
    assert_eq!(stored.verified_phone(), Some("+15551234567"));
    assert!(repo.write_count() >= 1);
}
