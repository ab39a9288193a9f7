//! Outbound webhook payload.
//!
//! Every reply closes the conversation: `expectUserResponse` is always false.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    /// Plain-text fallback for surfaces that ignore the rich payload
    pub fulfillment_text: String,
    pub payload: ResponsePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponsePayload {
    pub google: GooglePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayload {
    pub expect_user_response: bool,
    pub rich_response: RichResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichResponse {
    pub items: Vec<RichItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RichItem {
    SimpleResponse(SimpleResponse),
    BasicCard(BasicCard),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimpleResponse {
    pub text_to_speech: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicCard {
    pub title: String,
    /// Markdown-ish body; lines are separated by two spaces and a newline
    pub formatted_text: String,
    pub buttons: Vec<Button>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Button {
    pub title: String,
    pub open_url_action: OpenUrlAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpenUrlAction {
    pub url: String,
}

impl WebhookResponse {
    /// A closing reply that only speaks.
    pub fn speak(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            fulfillment_text: text.clone(),
            payload: ResponsePayload {
                google: GooglePayload {
                    expect_user_response: false,
                    rich_response: RichResponse {
                        items: vec![RichItem::SimpleResponse(SimpleResponse {
                            text_to_speech: text,
                        })],
                    },
                },
            },
        }
    }

    /// Append a card after the spoken text.
    pub fn with_card(mut self, card: BasicCard) -> Self {
        self.payload
            .google
            .rich_response
            .items
            .push(RichItem::BasicCard(card));
        self
    }

    /// The spoken text of the reply.
    pub fn spoken(&self) -> &str {
        &self.fulfillment_text
    }

    /// The card, if the reply carries one.
    pub fn card(&self) -> Option<&BasicCard> {
        self.payload
            .google
            .rich_response
            .items
            .iter()
            .find_map(|item| match item {
                RichItem::BasicCard(card) => Some(card),
                RichItem::SimpleResponse(_) => None,
            })
    }
}
