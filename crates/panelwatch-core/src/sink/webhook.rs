//! Sink that posts the status to a chat webhook and edits it in place.
//!
//! Speaks the Discord-compatible webhook API: `POST {url}?wait=true` creates
//! a message and returns its id, `PATCH {url}/messages/{id}` replaces it.
//! Views are sent as a single embed.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::errors::SinkError;
use super::traits::MessageSink;
use super::types::{Message, MessageHandle};
use crate::config::PanelConfig;
use crate::render::types::StatusView;

/// Most fields a single embed may carry.
pub const EMBED_FIELD_LIMIT: usize = 25;

#[derive(Debug, Serialize)]
struct WebhookPayload {
    content: String,
    embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
struct Embed {
    title: String,
    color: u32,
    timestamp: String,
    fields: Vec<EmbedField>,
}

#[derive(Debug, Serialize)]
struct EmbedField {
    name: String,
    value: String,
    inline: bool,
}

#[derive(Debug, Deserialize)]
struct WebhookMessage {
    id: String,
}

fn embed_from_view(view: &StatusView) -> Embed {
    // Two slots are reserved for the summary and owner fields
    let node_slots = EMBED_FIELD_LIMIT - 2;
    if view.node_fields.len() > node_slots {
        warn!(
            event = "core.sink.webhook_fields_truncated",
            nodes = view.node_fields.len(),
            shown = node_slots
        );
    }

    let mut fields: Vec<EmbedField> = view
        .node_fields
        .iter()
        .take(node_slots)
        .map(|field| EmbedField {
            name: field.name.clone(),
            value: field.status.to_string(),
            inline: true,
        })
        .collect();

    for field in [&view.summary_field, &view.owner_field] {
        fields.push(EmbedField {
            name: field.name.clone(),
            value: field.value.clone(),
            inline: field.inline,
        });
    }

    Embed {
        title: view.title.clone(),
        color: view.color,
        timestamp: view.timestamp.to_rfc3339(),
        fields,
    }
}

fn payload(message: &Message) -> WebhookPayload {
    match message {
        Message::Text(text) => WebhookPayload {
            content: text.clone(),
            embeds: Vec::new(),
        },
        Message::View(view) => WebhookPayload {
            content: String::new(),
            embeds: vec![embed_from_view(view)],
        },
    }
}

/// Map a non-success webhook response to a sink error.
///
/// A 404 on edit means the message is gone; on send it means the webhook is.
fn status_error(status: StatusCode, body: &str, handle: Option<&MessageHandle>) -> SinkError {
    let message = format!("HTTP {}: {}", status.as_u16(), body);
    match (status, handle) {
        (StatusCode::NOT_FOUND, Some(handle)) => SinkError::NotEditable {
            handle: handle.id.clone(),
        },
        (StatusCode::TOO_MANY_REQUESTS, _) => SinkError::Unavailable { message },
        (s, _) if s.is_server_error() => SinkError::Unavailable { message },
        _ => SinkError::Rejected { message },
    }
}

fn transport_error(error: reqwest::Error) -> SinkError {
    SinkError::Unavailable {
        message: error.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: reqwest::Client,
    webhook_url: String,
}

impl WebhookSink {
    pub fn new(webhook_url: &str, timeout: Duration) -> Result<Self, SinkError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SinkError::Setup {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            webhook_url: webhook_url.trim_end_matches('/').to_string(),
        })
    }

    /// Webhook sink for the configured URL, or `None` when none is set.
    pub fn from_config(config: &PanelConfig) -> Result<Option<Self>, SinkError> {
        match config.sink.webhook_url.as_deref() {
            Some(url) => Self::new(url, config.panel.request_timeout()).map(Some),
            None => Ok(None),
        }
    }
}

impl MessageSink for WebhookSink {
    async fn send(&mut self, message: &Message) -> Result<MessageHandle, SinkError> {
        let url = format!("{}?wait=true", self.webhook_url);
        let resp = self
            .client
            .post(&url)
            .json(&payload(message))
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(status, &body, None));
        }

        let created: WebhookMessage = resp.json().await.map_err(|e| SinkError::Rejected {
            message: format!("unexpected webhook response: {}", e),
        })?;

        debug!(event = "core.sink.webhook_sent", message_id = %created.id);
        Ok(MessageHandle::new(created.id))
    }

    async fn edit(&mut self, handle: &MessageHandle, message: &Message) -> Result<(), SinkError> {
        let url = format!("{}/messages/{}", self.webhook_url, handle.id);
        let resp = self
            .client
            .patch(&url)
            .json(&payload(message))
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(status, &body, Some(handle)));
        }

        debug!(event = "core.sink.webhook_edited", message_id = %handle.id);
        Ok(())
    }
}
