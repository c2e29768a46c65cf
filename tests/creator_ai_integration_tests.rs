#[cfg(test)]
mod creator_ai_integration_tests {
    use std::sync::Arc;

    use iccap::config::AzureAiConfig;
    use iccap::services::{
        AiError, AzureAiClient, CreatorAiService, MockCompletionTransport, TransportReply,
        UserErrorFormatter,
    };
    use rstest::rstest;

    fn choices_body(content: &str) -> String {
        format!(
            r#"{{"choices":[{{"message":{{"role":"assistant","content":{}}},"finish_reason":"stop"}}],"usage":{{"prompt_tokens":10,"completion_tokens":5,"total_tokens":15}}}}"#,
            serde_json::to_string(content).unwrap()
        )
    }

    fn client_replying(content: &'static str) -> AzureAiClient {
        let mut mock = MockCompletionTransport::new();
        mock.expect_execute().returning(move |_, _, _| {
            Ok(TransportReply {
                status: 200,
                body: choices_body(content),
            })
        });
        AzureAiClient::with_transport(
            AzureAiConfig::with_api_key("test-key-0123456789"),
            Arc::new(mock),
        )
    }

    #[tokio::test]
    async fn test_say_hello_scenario() {
        let client = client_replying("hello");

        let reply = client.complete("Say hello", None).await.unwrap();
        assert_eq!(reply, "hello");
    }

    #[tokio::test]
    async fn test_fitness_fallback_scenario() {
        let service = CreatorAiService::new(client_replying("I cannot produce JSON"));

        let suggestions = service
            .generate_content_suggestions("fitness", "instagram")
            .await
            .unwrap();

        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].title.contains("fitness"));
        assert_eq!(
            suggestions[0].hashtags,
            vec!["#fitness", "#ContentCreation", "#SocialMedia"]
        );
    }

    #[tokio::test]
    async fn test_fallback_records_are_idempotent() {
        let service = CreatorAiService::new(client_replying("Absolutely not JSON"));

        let first = service
            .generate_content_suggestions("cooking", "youtube")
            .await
            .unwrap();
        let second = service
            .generate_content_suggestions("cooking", "youtube")
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[rstest]
    #[case(400, "Bad Request")]
    #[case(401, "Access denied due to invalid subscription key")]
    #[case(429, "Rate limit exceeded")]
    #[case(500, "Internal server error")]
    #[tokio::test]
    async fn test_upstream_status_is_visible_in_message(
        #[case] status: u16,
        #[case] upstream_message: &'static str,
    ) {
        let mut mock = MockCompletionTransport::new();
        mock.expect_execute().returning(move |_, _, _| {
            Ok(TransportReply {
                status,
                body: format!(r#"{{"error":{{"message":"{upstream_message}"}}}}"#),
            })
        });
        let client = AzureAiClient::with_transport(
            AzureAiConfig::with_api_key("test-key-0123456789"),
            Arc::new(mock),
        );

        let err = client.complete("Say hello", None).await.unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains(&status.to_string()));
        assert!(rendered.contains(upstream_message));
        // The formatter keeps upstream details for debugging
        assert!(UserErrorFormatter::format_for_ui(&err).contains(&status.to_string()));
    }

    #[tokio::test]
    async fn test_unset_credential_makes_zero_network_calls() {
        let mut mock = MockCompletionTransport::new();
        mock.expect_execute().times(0);
        let service = CreatorAiService::new(AzureAiClient::with_transport(
            AzureAiConfig::default(),
            Arc::new(mock),
        ));

        let err = service.generate_insights().await.unwrap_err();
        assert!(matches!(err, AiError::Configuration { .. }));
    }

    // Independent invocations share no mutable state, so concurrent calls
    // may interleave freely
    #[tokio::test]
    async fn test_concurrent_invocations_are_independent() {
        let service = CreatorAiService::new(client_replying(r##"["#a", "#b", "#c"]"##));

        let (left, right) = futures::future::join(
            service.generate_hashtag_suggestions("post one", "instagram"),
            service.generate_hashtag_suggestions("post two", "tiktok"),
        )
        .await;

        assert_eq!(left.unwrap(), vec!["#a", "#b", "#c"]);
        assert_eq!(right.unwrap(), vec!["#a", "#b", "#c"]);
    }

    #[tokio::test]
    async fn test_exactly_one_request_per_complete_call() {
        let mut mock = MockCompletionTransport::new();
        mock.expect_execute().times(1).returning(|_, _, _| {
            Ok(TransportReply {
                status: 200,
                body: choices_body("one call only"),
            })
        });
        let client = AzureAiClient::with_transport(
            AzureAiConfig::with_api_key("test-key-0123456789"),
            Arc::new(mock),
        );

        client.complete("ping", None).await.unwrap();
    }

    // No retry even for a retryable-looking failure
    #[tokio::test]
    async fn test_transport_failure_is_not_retried() {
        let mut mock = MockCompletionTransport::new();
        mock.expect_execute()
            .times(1)
            .returning(|_, _, _| Err(AiError::transport("timed out")));
        let client = AzureAiClient::with_transport(
            AzureAiConfig::with_api_key("test-key-0123456789"),
            Arc::new(mock),
        );

        let err = client.complete("ping", None).await.unwrap_err();
        assert!(matches!(err, AiError::Transport { .. }));
    }
}
