use serde::{Deserialize, Serialize};

/// Response wrapper for Graph API list endpoints
#[derive(Debug, Deserialize)]
pub struct GraphListResponse<T> {
    pub value: Vec<T>,
}

/// The signed-in user, from /me
#[derive(Debug, Clone, Deserialize)]
pub struct GraphUser {
    #[serde(rename = "userPrincipalName")]
    pub user_principal_name: Option<String>,
    pub mail: Option<String>,
}

impl GraphUser {
    /// Best display identity: UPN, falling back to the mail address
    pub fn display_identity(&self) -> &str {
        self.user_principal_name
            .as_deref()
            .or(self.mail.as_deref())
            .unwrap_or("(unknown account)")
    }
}

/// A mail folder from Graph API
#[derive(Debug, Clone, Deserialize)]
pub struct GraphFolder {
    pub id: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

/// A message envelope from Graph API (lightweight, no body)
#[derive(Debug, Clone, Deserialize)]
pub struct GraphMessageEnvelope {
    pub id: String,
    pub subject: Option<String>,
    pub from: Option<GraphEmailWrapper>,
    #[serde(rename = "receivedDateTime")]
    pub received_date_time: Option<String>,
    #[serde(rename = "hasAttachments", default)]
    pub has_attachments: bool,
    #[serde(rename = "conversationId")]
    pub conversation_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEmailWrapper {
    #[serde(rename = "emailAddress")]
    pub email_address: GraphEmailAddress,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEmailAddress {
    pub name: Option<String>,
    pub address: Option<String>,
}

/// Request body for creating a message in a folder
#[derive(Debug, Serialize)]
pub struct NewMessage {
    pub subject: String,
    pub body: MessageBody,
    pub from: GraphEmailWrapper,
    #[serde(rename = "receivedDateTime")]
    pub received_date_time: String,
    /// False so the created item displays as a received message
    #[serde(rename = "isDraft")]
    pub is_draft: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub content: String,
}

impl NewMessage {
    /// Build a plain-text message that renders as received at the given time
    pub fn received_text(
        subject: impl Into<String>,
        body: impl Into<String>,
        from_address: impl Into<String>,
        from_name: impl Into<String>,
        received_date_time: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            body: MessageBody {
                content_type: "Text".to_string(),
                content: body.into(),
            },
            from: GraphEmailWrapper {
                email_address: GraphEmailAddress {
                    name: Some(from_name.into()),
                    address: Some(from_address.into()),
                },
            },
            received_date_time: received_date_time.into(),
            is_draft: false,
        }
    }
}
