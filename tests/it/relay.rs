use super::*;

#[tokio::test]
async fn relay_returns_model_text_end_to_end() {
    let mut server = Server::new_async().await;
    let reply = "Owner: Google\nPurpose: Content delivery\nSafety: Safe";
    let mock = mock_text(&mut server, reply).await;

    let relay = InsightRelay::new(backend_for(&server));
    assert_eq!(relay.model_id(), DEFAULT_GEMINI_MODEL);
    assert_eq!(relay.explain_hostname("1e100.net").await, reply);
    mock.assert_async().await;
}

#[tokio::test]
async fn relay_falls_back_on_api_errors() {
    let mut server = Server::new_async().await;
    let _mock = mock_status(
        &mut server,
        500,
        r#"{"error": {"code": 500, "message": "Internal error", "status": "INTERNAL"}}"#,
    )
    .await;

    let relay = InsightRelay::new(backend_for(&server));
    assert_eq!(
        relay.explain_component("Packet Loss").await,
        "Failed to get explanation for Packet Loss. Please try again later."
    );
    assert_eq!(
        relay.analyze_metrics(&NetworkMetrics::default()).await,
        "Failed to analyze network metrics. Please try again later."
    );
    assert_eq!(
        relay
            .ask_system_question("Is my CPU ok?", &SystemContext::default(), &[])
            .await,
        "Failed to analyze your question. Please try again later."
    );
    assert_eq!(
        relay
            .analyze_connections_for_security(&[json!({"remote": "8.8.8.8:53"})])
            .await,
        "Failed to analyze connections due to an error."
    );
    assert_eq!(
        relay.explain_hostname("8.8.8.8").await,
        "Failed to get an explanation for 8.8.8.8."
    );
}

#[tokio::test]
async fn relay_falls_back_when_server_is_gone() {
    let server = Server::new_async().await;
    let backend = backend_for(&server);
    drop(server);

    let relay = InsightRelay::new(backend);
    assert_eq!(
        relay
            .analyze_connections_for_security(&[json!({"remote": "10.0.0.1:22"})])
            .await,
        "Failed to analyze connections due to an error."
    );
}

#[tokio::test]
async fn metrics_from_caller_json_reach_the_prompt() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("Latency: 23.5 ms".to_string()),
            Matcher::Regex("Stability: Unstable".to_string()),
            Matcher::Regex("Jitter: undefined ms".to_string()),
        ]))
        .with_status(200)
        .with_body(text_response("Network is mostly healthy."))
        .create_async()
        .await;

    let metrics: NetworkMetrics = serde_json::from_value(json!({
        "latency": 23.5,
        "packetLoss": 1.2,
        "bandwidth": 48,
        "dnsDelay": 14,
        "healthScore": 81,
        "stability": "Unstable",
        "congestion": "Moderate"
    }))
    .unwrap();

    let relay = InsightRelay::new(backend_for(&server));
    assert_eq!(
        relay.analyze_metrics(&metrics).await,
        "Network is mostly healthy."
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn truncated_connections_reach_the_server() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex(r"conn-29\b".to_string()),
            Matcher::Regex(r"Risk Level: Low\.".to_string()),
        ]))
        .with_status(200)
        .with_body(text_response("Risk Level: Low. Normal browsing traffic."))
        .create_async()
        .await;
    let never = server
        .mock("POST", GENERATE_PATH)
        .match_body(Matcher::Regex(r"conn-30\b".to_string()))
        .expect(0)
        .create_async()
        .await;

    let connections: Vec<_> = (0..45)
        .map(|i| json!({"id": format!("conn-{i}"), "state": "ESTABLISHED"}))
        .collect();
    let relay = InsightRelay::new(backend_for(&server));
    assert_eq!(
        relay.analyze_connections_for_security(&connections).await,
        "Risk Level: Low. Normal browsing traffic."
    );
    mock.assert_async().await;
    never.assert_async().await;
}

#[tokio::test]
async fn concurrent_relays_share_one_backend() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", GENERATE_PATH)
        .with_status(200)
        .with_body(text_response("ok"))
        .expect(5)
        .create_async()
        .await;

    let relay = InsightRelay::new(backend_for(&server));
    let metrics = NetworkMetrics::default();
    let context = SystemContext::default();
    let history = vec![ChatTurn::user("hi")];
    let connections = vec![json!({})];
    let (a, b, c, d, e) = tokio::join!(
        relay.explain_component("Jitter"),
        relay.analyze_metrics(&metrics),
        relay.ask_system_question("Q", &context, &history),
        relay.analyze_connections_for_security(&connections),
        relay.explain_hostname("localhost"),
    );
    for text in [a, b, c, d, e] {
        assert_eq!(text, "ok");
    }
    mock.assert_async().await;
}
