use serde::{Deserialize, Serialize};
use url::Url;

/// Approval policy for remote tool invocations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalPolicy {
    /// Calls execute without prompting.
    Never,

    /// Every call requires approval.
    Always,
}

/// Descriptor for a remote MCP tool server.
///
/// The descriptor names an external endpoint the inference service may call
/// mid-response. The server itself is an opaque collaborator; this client
/// only carries the descriptor on the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpToolParam {
    /// Label identifying the server in responses and traces.
    pub server_label: String,

    /// Endpoint URL of the MCP server.
    pub server_url: Url,

    /// When calls to the server require approval.
    pub require_approval: ApprovalPolicy,
}

impl McpToolParam {
    /// Create a new descriptor with fully automatic approval.
    pub fn new(server_label: impl Into<String>, server_url: Url) -> Self {
        Self {
            server_label: server_label.into(),
            server_url,
            require_approval: ApprovalPolicy::Never,
        }
    }

    /// Set the approval policy.
    pub fn with_approval(mut self, require_approval: ApprovalPolicy) -> Self {
        self.require_approval = require_approval;
        self
    }
}

/// A tool made available to the model for one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolParam {
    /// A remote MCP tool server.
    #[serde(rename = "mcp")]
    Mcp(McpToolParam),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    fn sample_url() -> Url {
        Url::parse("https://tools.example.com/mcp/").unwrap()
    }

    #[test]
    fn mcp_tool_serialization() {
        let tool = ToolParam::Mcp(McpToolParam::new("analytics", sample_url()));
        let json = to_value(&tool).unwrap();

        assert_eq!(
            json,
            json!({
                "type": "mcp",
                "server_label": "analytics",
                "server_url": "https://tools.example.com/mcp/",
                "require_approval": "never"
            })
        );
    }

    #[test]
    fn approval_policy_override() {
        let tool =
            McpToolParam::new("analytics", sample_url()).with_approval(ApprovalPolicy::Always);
        assert_eq!(tool.require_approval, ApprovalPolicy::Always);
    }

    #[test]
    fn mcp_tool_deserialization() {
        let json = json!({
            "type": "mcp",
            "server_label": "analytics",
            "server_url": "https://tools.example.com/mcp/",
            "require_approval": "never"
        });

        let tool: ToolParam = serde_json::from_value(json).unwrap();
        match tool {
            ToolParam::Mcp(inner) => {
                assert_eq!(inner.server_label, "analytics");
                assert_eq!(inner.require_approval, ApprovalPolicy::Never);
            }
        }
    }
}
