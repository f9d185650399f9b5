use super::telemetry::{or_undefined, ChatRole, ChatTurn, NetworkMetrics, SystemContext};
use crate::requests::completion::error::CompletionError;
use serde::Serialize;

/// Connections beyond this many are left out of the security prompt.
pub const MAX_CONNECTIONS_ANALYZED: usize = 30;

pub fn explain_component(component_name: &str) -> String {
    format!(
        "You are a network monitoring expert. Explain \"{component_name}\" in the context of \
         network and system monitoring. Keep the explanation technical but accessible to someone \
         who is not a network engineer: say what it is, why it matters for network health, and \
         what normal and problematic values or behaviour look like. \
         Keep the answer under 150 words."
    )
}

pub fn analyze_metrics(metrics: &NetworkMetrics) -> String {
    format!(
        "You are a network performance analyst. Analyze the following network metrics:\n\
         - Latency: {} ms\n\
         - Jitter: {} ms\n\
         - Packet Loss: {}%\n\
         - Bandwidth: {} Mbps\n\
         - DNS Delay: {} ms\n\
         - Health Score: {}/100\n\
         - Stability: {}\n\
         - Congestion: {}\n\n\
         Give a brief analysis of the network's health, then 2-3 actionable recommendations \
         to improve it. Keep the response under 150 words.",
        or_undefined(&metrics.latency),
        or_undefined(&metrics.jitter),
        or_undefined(&metrics.packet_loss),
        or_undefined(&metrics.bandwidth),
        or_undefined(&metrics.dns_delay),
        or_undefined(&metrics.health_score),
        or_undefined(&metrics.stability),
        or_undefined(&metrics.congestion),
    )
}

/// `User: ...` / `AI: ...` lines in the order given.
pub fn transcript(history: &[ChatTurn]) -> String {
    history
        .iter()
        .map(|turn| match turn.role {
            ChatRole::User => format!("User: {}", turn.text),
            ChatRole::Assistant => format!("AI: {}", turn.text),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn ask_system_question(
    question: &str,
    context: &SystemContext,
    history: &[ChatTurn],
) -> String {
    format!(
        "You are PXMonitor's AI assistant, an expert in system performance, networking and \
         security who explains things in plain language.\n\n\
         The user asked: \"{question}\"\n\n\
         Previous conversation:\n{}\n\n\
         Current system snapshot:\n\
         - Health Score: {}\n\
         - CPU Load: {}%\n\
         - Memory: {} used of {}\n\
         - Disk: {}\n\
         - Key Services: {}\n\
         - OS: {}, uptime {}\n\
         - GPU: {}, usage {}%, temperature {}°C\n\
         - Top Processes: {}\n\
         - Suspicious Processes: {}\n\n\
         Answer in exactly three short paragraphs:\n\
         1. Diagnosis: answer the question directly using the snapshot.\n\
         2. Context: point to the readings that support the answer.\n\
         3. Recommendation: one concrete next step.\n\
         Keep the whole answer under 150 words.",
        transcript(history),
        or_undefined(&context.health_score),
        or_undefined(&context.cpu_load),
        or_undefined(&context.memory.used),
        or_undefined(&context.memory.total),
        or_undefined(&context.disk_info),
        or_undefined(&context.key_services),
        or_undefined(&context.os),
        or_undefined(&context.uptime),
        or_undefined(&context.gpu.name),
        or_undefined(&context.gpu.usage),
        or_undefined(&context.gpu.temperature),
        or_undefined(&context.top_processes),
        or_undefined(&context.suspicious_processes),
    )
}

/// Serializes at most [`MAX_CONNECTIONS_ANALYZED`] connections into the prompt.
pub fn analyze_connections<T: Serialize>(connections: &[T]) -> Result<String, CompletionError> {
    let analyzed = &connections[..connections.len().min(MAX_CONNECTIONS_ANALYZED)];
    let rendered = serde_json::to_string_pretty(analyzed).map_err(|e| {
        CompletionError::RequestBuilderError(format!("Failed to serialize connections: {e}"))
    })?;
    Ok(format!(
        "You are a security analyst explaining network activity to a non-technical user. \
         Review these active network connections:\n{rendered}\n\n\
         Follow these rules strictly:\n\
         - Begin with exactly one line: \"Risk Level: Low.\", \"Risk Level: Medium.\" or \
         \"Risk Level: High.\"\n\
         - Follow it with 1 to 3 sentences explaining the rating in plain language.\n\
         - Do not suggest fixes or remediation steps.\n\
         - Keep the whole response under 100 words."
    ))
}

pub fn explain_hostname(hostname: &str) -> String {
    format!(
        "Explain the hostname \"{hostname}\" to a user watching their network traffic. \
         Respond in exactly this format:\n\
         Owner: <organization that operates it>\n\
         Purpose: <what the service is used for>\n\
         Safety: <whether traffic to it is generally safe>\n\
         Keep the response under 75 words."
    )
}
