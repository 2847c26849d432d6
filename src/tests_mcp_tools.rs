#[cfg(test)]
mod tests {
    use serde_json::Value;

    fn tool(name: &str) -> Value {
        let tools = crate::mcp::build_tools_array();
        tools
            .as_array()
            .expect("tools array")
            .iter()
            .find(|t| t.get("name").and_then(|n| n.as_str()) == Some(name))
            .cloned()
            .unwrap_or_else(|| panic!("{} tool present", name))
    }

    #[test]
    fn both_tools_share_article_schema() {
        let publish = tool("post_note_article");
        let draft = tool("save_note_draft");
        assert_eq!(publish.get("inputSchema"), draft.get("inputSchema"));
    }

    #[test]
    fn schema_does_not_expose_credentials() {
        // Credentials travel as query parameters, never as tool arguments
        let schema = tool("post_note_article")["inputSchema"].to_string();
        assert!(!schema.contains("password"));
        assert!(!schema.contains("email"));
    }

    #[test]
    fn tools_carry_read_only_hint() {
        for name in ["post_note_article", "save_note_draft"] {
            let annotations = &tool(name)["annotations"];
            assert_eq!(annotations["readOnlyHint"], true, "{} annotations", name);
        }
    }

    #[test]
    fn draft_description_mentions_url() {
        let description = tool("save_note_draft")["description"]
            .as_str()
            .expect("description")
            .to_lowercase();
        assert!(description.contains("draft"));
        assert!(description.contains("url"));
    }
}
