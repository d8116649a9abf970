use crate::error::{GraphError, GraphResult};
use crate::types::*;
use tracing::{debug, info};

const GRAPH_BASE: &str = "https://graph.microsoft.com/v1.0";

/// Message fields to select in list queries (keeps payload small)
const MESSAGE_SELECT: &str = "id,subject,from,receivedDateTime,hasAttachments,conversationId";

/// Folder lookup is filtered by exact display name; 10 is plenty
const FOLDER_LOOKUP_TOP: u32 = 10;

pub struct GraphMailClient {
    client: reqwest::Client,
    access_token: String,
}

impl GraphMailClient {
    pub fn new(access_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token,
        }
    }

    /// Fetch the signed-in user
    pub async fn get_me(&self) -> GraphResult<GraphUser> {
        let url = format!("{}/me", GRAPH_BASE);
        debug!("Graph: fetching /me");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::ApiError { status, body });
        }

        let me: GraphUser = response
            .json()
            .await
            .map_err(|e| GraphError::ParseError(e.to_string()))?;

        Ok(me)
    }

    /// Find a mail folder's id by display name.
    ///
    /// Returns Ok(None) when no folder matches; with multiple matches the
    /// first result as ordered by Graph wins.
    pub async fn find_folder_id(&self, display_name: &str) -> GraphResult<Option<String>> {
        let filter = format!(
            "displayName eq '{}'",
            escape_odata_literal(display_name)
        );
        let top = FOLDER_LOOKUP_TOP.to_string();
        let url = format!("{}/me/mailFolders", GRAPH_BASE);
        debug!("Graph: looking up folder {:?}", display_name);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("$filter", filter.as_str()), ("$top", top.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::ApiError { status, body });
        }

        let list: GraphListResponse<GraphFolder> = response
            .json()
            .await
            .map_err(|e| GraphError::ParseError(e.to_string()))?;

        let id = list.value.into_iter().next().map(|f| f.id);
        debug!("Graph: folder lookup found={}", id.is_some());
        Ok(id)
    }

    /// List messages in a folder, newest first. Single page, capped at 100.
    pub async fn list_messages(
        &self,
        folder_id: &str,
        top: u32,
    ) -> GraphResult<Vec<GraphMessageEnvelope>> {
        let url = format!("{}/me/mailFolders/{}/messages", GRAPH_BASE, folder_id);
        let top = top.min(100).to_string();
        debug!("Graph: listing messages folder={} top={}", folder_id, top);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("$select", MESSAGE_SELECT),
                ("$top", top.as_str()),
                ("$orderby", "receivedDateTime desc"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::ApiError { status, body });
        }

        let list: GraphListResponse<GraphMessageEnvelope> = response
            .json()
            .await
            .map_err(|e| GraphError::ParseError(e.to_string()))?;

        info!("Graph: got {} messages", list.value.len());
        Ok(list.value)
    }

    /// Create a message directly in a folder. Returns the new message id.
    pub async fn create_message(
        &self,
        folder_id: &str,
        message: &NewMessage,
    ) -> GraphResult<String> {
        let url = format!("{}/me/mailFolders/{}/messages", GRAPH_BASE, folder_id);
        debug!("Graph: creating message, subject={:?}", message.subject);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GraphError::ApiError { status, body });
        }

        let created: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GraphError::ParseError(e.to_string()))?;

        let id = created["id"]
            .as_str()
            .ok_or_else(|| GraphError::ParseError("No id in create response".to_string()))?
            .to_string();

        info!("Graph: created message, id={}", id);
        Ok(id)
    }
}

/// Double single quotes for safe inclusion in an OData string literal
fn escape_odata_literal(s: &str) -> String {
    s.replace('\'', "''")
}
