//! Integration tests for the phone verification flow through the public API

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use pv_core::{
        CallerIdentity, DomainError, InMemoryProfileRepository, PhoneVerificationConfig,
        PhoneVerificationService, ProviderError, ProviderHandle, UserProfile,
        VerificationChannel, VerificationOutcome, VerificationProvider, VerificationStatus,
    };

    // Provider that approves only the code it last "sent"
    struct ScriptedProvider {
        issued: Mutex<Option<(String, String)>>,
        sent: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedProvider {
        fn new() -> Self {
            Self {
                issued: Mutex::new(None),
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl VerificationProvider for ScriptedProvider {
        async fn start_verification(
            &self,
            phone: &str,
            _channel: VerificationChannel,
        ) -> Result<VerificationOutcome, ProviderError> {
            *self.issued.lock().unwrap() = Some((phone.to_string(), "424242".to_string()));
            Ok(VerificationOutcome::new(VerificationStatus::Pending))
        }

        async fn check_verification(
            &self,
            phone: &str,
            code: &str,
        ) -> Result<VerificationOutcome, ProviderError> {
            let issued = self.issued.lock().unwrap().clone();
            let status = match issued {
                Some((p, c)) if p == phone && c == code => VerificationStatus::Approved,
                Some(_) => VerificationStatus::Pending,
                None => {
                    return Err(ProviderError::Api {
                        http_status: 404,
                        code: Some(20404),
                        message: "The requested resource was not found".to_string(),
                    })
                }
            };
            Ok(VerificationOutcome::new(status))
        }

        async fn send_message(&self, to: &str, body: &str) -> Result<String, ProviderError> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), body.to_string()));
            Ok("SM123".to_string())
        }

        fn provider_name(&self) -> &str {
            "scripted"
        }
    }

    #[tokio::test]
    async fn test_wrong_code_then_right_code() {
        let repo = InMemoryProfileRepository::new();
        let uid = CallerIdentity::new("u1").unwrap();
        repo.insert(UserProfile::new(uid.clone())).await;

        let provider = Arc::new(ScriptedProvider::new());
        let service = PhoneVerificationService::new(
            ProviderHandle::Ready(provider.clone()),
            Arc::new(repo.clone()),
            PhoneVerificationConfig::default(),
        );

        service
            .request_verification(Some(&uid), Some("+15551234567"))
            .await
            .unwrap();

        let wrong = service
            .confirm_verification(Some(&uid), Some("+15551234567"), Some("000000"))
            .await
            .unwrap();
        assert!(!wrong.success);
        assert_eq!(wrong.status, VerificationStatus::Pending);
        assert!(repo.get("u1").await.unwrap().verified_phone().is_none());

        let right = service
            .confirm_verification(Some(&uid), Some("+15551234567"), Some("424242"))
            .await
            .unwrap();
        assert!(right.success);
        assert_eq!(
            repo.get("u1").await.unwrap().verified_phone(),
            Some("+15551234567")
        );

        let sent = service.send_test_notification(Some(&uid)).await.unwrap();
        assert!(sent.success);
        assert_eq!(provider.sent.lock().unwrap()[0].0, "+15551234567");
    }

    #[tokio::test]
    async fn test_check_without_pending_verification_is_internal() {
        let repo = InMemoryProfileRepository::new();
        let uid = CallerIdentity::new("u2").unwrap();
        repo.insert(UserProfile::new(uid.clone())).await;

        let service = PhoneVerificationService::new(
            ProviderHandle::ready(ScriptedProvider::new()),
            Arc::new(repo),
            PhoneVerificationConfig::default(),
        );

        let result = service
            .confirm_verification(Some(&uid), Some("+15551234567"), Some("424242"))
            .await;

        assert_eq!(
            result,
            Err(DomainError::internal(
                "Twilio Error: The requested resource was not found"
            ))
        );
    }
}
