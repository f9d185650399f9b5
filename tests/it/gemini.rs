use super::*;
use std::time::Duration;

#[tokio::test]
async fn completion_text_is_extracted() {
    let mut server = Server::new_async().await;
    let mock = mock_text(&mut server, "Latency is the round trip time.").await;

    let backend = backend_for(&server);
    let res = backend
        .completion_request(&CompletionRequest::new("Explain latency"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(res.content, "Latency is the round trip time.");
    assert_eq!(res.finish_reason.as_deref(), Some("STOP"));
    assert_eq!(res.model_version.as_deref(), Some("gemini-1.5-flash-002"));
    assert_eq!(res.token_usage.total_tokens, 160);
}

#[tokio::test]
async fn prompt_text_is_sent_as_a_single_user_part() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_body(Matcher::Json(json!({
            "contents": [{"role": "user", "parts": [{"text": "hello \"monitor\""}]}]
        })))
        .with_status(200)
        .with_body(text_response("hi"))
        .create_async()
        .await;

    let backend = backend_for(&server);
    backend
        .completion_request(&CompletionRequest::new("hello \"monitor\""))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn api_key_is_sent_as_a_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_header("x-goog-api-key", TEST_API_KEY)
        .with_status(200)
        .with_body(text_response("ok"))
        .create_async()
        .await;

    let backend = backend_for(&server);
    backend
        .completion_request(&CompletionRequest::new("ping"))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn generation_config_is_forwarded() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": {"candidateCount": 1, "maxOutputTokens": 300, "temperature": 0.5}
        })))
        .with_status(200)
        .with_body(text_response("ok"))
        .create_async()
        .await;

    let backend = backend_for(&server);
    let request = CompletionRequest::new("ping").with_config(RequestConfig {
        temperature: Some(0.5),
        max_output_tokens: Some(300),
        ..Default::default()
    });
    backend.completion_request(&request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn api_error_object_is_surfaced() {
    let mut server = Server::new_async().await;
    let _mock = mock_status(
        &mut server,
        400,
        r#"{"error": {"code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT"}}"#,
    )
    .await;

    let backend = backend_for(&server);
    let err = backend
        .completion_request(&CompletionRequest::new("ping"))
        .await
        .unwrap_err();
    match err {
        CompletionError::ClientError(ClientError::ApiError(api_error)) => {
            assert_eq!(api_error.code, Some(400));
            assert_eq!(api_error.status.as_deref(), Some("INVALID_ARGUMENT"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn non_json_failures_are_errors() {
    let mut server = Server::new_async().await;
    let _mock = mock_status(&mut server, 503, "upstream overloaded").await;
    let backend = backend_for(&server);
    let err = backend
        .completion_request(&CompletionRequest::new("ping"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CompletionError::ClientError(ClientError::ServiceUnavailable { .. })
    ));

    let mut server = Server::new_async().await;
    let _mock = mock_status(&mut server, 200, "<html>not json</html>").await;
    let backend = backend_for(&server);
    let err = backend
        .completion_request(&CompletionRequest::new("ping"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CompletionError::ClientError(ClientError::JSONDeserialize(_))
    ));
}

#[tokio::test]
async fn blocked_prompt_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = mock_status(
        &mut server,
        200,
        r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#,
    )
    .await;

    let backend = backend_for(&server);
    let err = backend
        .completion_request(&CompletionRequest::new("ping"))
        .await
        .unwrap_err();
    assert!(matches!(err, CompletionError::PromptBlocked(_)));
}

#[tokio::test]
async fn unresponsive_endpoint_times_out() {
    // Accepts TCP connections but never answers.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let backend = PxMonitorLlm::gemini()
        .with_api_key(TEST_API_KEY)
        .with_api_host(format!("http://{}", addr.ip()))
        .with_api_port(addr.port().to_string())
        .with_timeout(Duration::from_millis(200))
        .logging_enabled(false)
        .init()
        .unwrap();

    let err = backend
        .completion_request(&CompletionRequest::new("ping"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        CompletionError::ClientError(ClientError::Reqwest(ref e)) if e.is_timeout()
    ));
    drop(listener);
}

#[tokio::test]
async fn model_override_changes_the_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1beta/models/gemini-1.5-pro:generateContent")
        .with_status(200)
        .with_body(text_response("pro"))
        .create_async()
        .await;

    let backend = PxMonitorLlm::gemini()
        .with_api_key(TEST_API_KEY)
        .with_api_host(server.url())
        .model_id("Gemini-1.5-Pro")
        .logging_enabled(false)
        .init()
        .unwrap();

    let res = backend
        .completion_request(&CompletionRequest::new("ping"))
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(res.content, "pro");
}

#[test]
fn default_backend_leaves_the_global_subscriber_to_the_host() {
    let _backend = PxMonitorLlm::gemini()
        .with_api_key(TEST_API_KEY)
        .init()
        .unwrap();
    assert!(tracing::subscriber::set_global_default(tracing_subscriber::registry()).is_ok());
}
