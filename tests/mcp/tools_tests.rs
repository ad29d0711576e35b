//! MCP tool integration tests
//!
//! Drive every tool through `tools/call` against an on-disk corpus laid
//! out like the default scopes.

#[cfg(test)]
mod tests {
    use crate::common::{create_test_services, write_numbered, DocsRepo};
    use docscope::mcp::handlers::ProtocolHandlers;
    use docscope::mcp::process_message;
    use docscope::mcp::protocol::*;
    use serde_json::{json, Value};

    async fn call_tool(handlers: &ProtocolHandlers, name: &str, arguments: Value) -> JsonRpcResponse {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": name, "arguments": arguments}
        });
        process_message(handlers, &request.to_string())
            .await
            .unwrap()
    }

    fn text(response: &JsonRpcResponse) -> &str {
        let result = response.result.as_ref().expect("tool returned an error");
        result["content"][0]["text"].as_str().unwrap()
    }

    fn json_text(response: &JsonRpcResponse) -> Value {
        serde_json::from_str(text(response)).unwrap()
    }

    fn setup() -> (ProtocolHandlers, DocsRepo) {
        let repo = DocsRepo::standard();
        let handlers = ProtocolHandlers::new(create_test_services(repo.path()));
        (handlers, repo)
    }

    #[tokio::test]
    async fn test_list_scopes_tool() {
        let (handlers, _repo) = setup();

        let response = call_tool(&handlers, "list_scopes", json!({})).await;

        assert_eq!(
            json_text(&response),
            json!(["unified", "api", "guides", "python", "node", "agents", "cookbook"])
        );
    }

    #[tokio::test]
    async fn test_search_docs_defaults_to_unified() {
        let (handlers, _repo) = setup();

        let response = call_tool(&handlers, "search_docs", json!({"query": "quickstart"})).await;
        let hits = json_text(&response);

        assert_eq!(hits.as_array().unwrap().len(), 1);
        assert_eq!(hits[0]["file"], "openai-docs-unified.md");
        assert_eq!(hits[0]["line"], 7);
        assert_eq!(hits[0]["snippet"], "### Quickstart");
    }

    #[tokio::test]
    async fn test_search_docs_limit_and_scope() {
        let repo = DocsRepo::many_hits(3, 10);
        let handlers = ProtocolHandlers::new(create_test_services(repo.path()));

        let response = call_tool(
            &handlers,
            "search_docs",
            json!({"query": "token", "scope": "guides", "limit": 3}),
        )
        .await;
        assert_eq!(json_text(&response).as_array().unwrap().len(), 3);

        // Non-positive limits fall back to the tool default of 10
        let response = call_tool(
            &handlers,
            "search_docs",
            json!({"query": "token", "scope": "guides", "limit": 0}),
        )
        .await;
        assert_eq!(json_text(&response).as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn test_search_docs_empty_query() {
        let (handlers, _repo) = setup();

        let response = call_tool(&handlers, "search_docs", json!({"query": "   "})).await;

        assert_eq!(json_text(&response), json!([]));
    }

    #[tokio::test]
    async fn test_search_docs_unknown_scope() {
        let (handlers, _repo) = setup();

        let response = call_tool(
            &handlers,
            "search_docs",
            json!({"query": "vision", "scope": "rust"}),
        )
        .await;

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("rust"));
        assert!(error.message.contains("unified"));
    }

    #[tokio::test]
    async fn test_search_docs_missing_query() {
        let (handlers, _repo) = setup();

        let response = call_tool(&handlers, "search_docs", json!({"scope": "api"})).await;

        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_get_doc_section_tool() {
        let (handlers, repo) = setup();
        write_numbered(repo.path(), "numbers.md", 20);

        let response = call_tool(
            &handlers,
            "get_doc_section",
            json!({"file": "numbers.md", "start_line": 5, "end_line": 10}),
        )
        .await;
        let slice = json_text(&response);

        assert_eq!(slice["file"], "numbers.md");
        assert_eq!(slice["start_line"], 5);
        assert_eq!(slice["end_line"], 10);
        assert_eq!(slice["line_count"], 6);
    }

    #[tokio::test]
    async fn test_get_doc_section_window() {
        let (handlers, repo) = setup();
        write_numbered(repo.path(), "numbers.md", 20);

        let response = call_tool(
            &handlers,
            "get_doc_section",
            json!({"file": "numbers.md", "start_line": 18, "max_lines": 5}),
        )
        .await;
        let slice = json_text(&response);

        assert_eq!(slice["end_line"], 20);
        assert_eq!(slice["content"], "line 18\nline 19\nline 20");
    }

    #[tokio::test]
    async fn test_get_doc_section_errors() {
        let (handlers, repo) = setup();
        write_numbered(repo.path(), "numbers.md", 20);

        let response = call_tool(
            &handlers,
            "get_doc_section",
            json!({"file": "numbers.md", "start_line": 25}),
        )
        .await;
        let error = response.error.unwrap();
        assert_eq!(error.code, LINE_OUT_OF_RANGE);
        assert!(error.message.contains("20"));

        let response = call_tool(
            &handlers,
            "get_doc_section",
            json!({"file": "numbers.md", "start_line": 10, "end_line": 3}),
        )
        .await;
        assert_eq!(response.error.unwrap().code, LINE_OUT_OF_RANGE);

        let response = call_tool(
            &handlers,
            "get_doc_section",
            json!({"file": "missing.md", "start_line": 1}),
        )
        .await;
        let error = response.error.unwrap();
        assert_eq!(error.code, DOC_NOT_FOUND);
        assert!(error.message.contains("missing.md"));
    }

    #[tokio::test]
    async fn test_get_doc_section_by_header_tool() {
        let (handlers, _repo) = setup();

        let response = call_tool(
            &handlers,
            "get_doc_section_by_header",
            json!({"header": "Vision", "header_level": 2}),
        )
        .await;
        let slice = json_text(&response);

        assert_eq!(slice["file"], "openai-docs-unified.md");
        assert_eq!(slice["start_line"], 5);
        assert_eq!(slice["end_line"], 8);
    }

    #[tokio::test]
    async fn test_get_doc_section_by_header_not_found() {
        let (handlers, _repo) = setup();

        let response = call_tool(
            &handlers,
            "get_doc_section_by_header",
            json!({"header": "Fine-tuning", "scope": "guides"}),
        )
        .await;
        let error = response.error.unwrap();

        assert_eq!(error.code, HEADER_NOT_FOUND);
        assert!(error.message.contains("Fine-tuning"));
        assert!(error.message.contains("any level"));
    }

    #[tokio::test]
    async fn test_list_doc_files_tool() {
        let (handlers, _repo) = setup();

        let response = call_tool(&handlers, "list_doc_files", json!({"scope": "api"})).await;

        assert_eq!(
            json_text(&response),
            json!([
                "openai-docs-api-reference/chat.md",
                "openai-docs-api-reference/embeddings.md"
            ])
        );
    }

    #[tokio::test]
    async fn test_list_doc_files_requires_scope() {
        let (handlers, _repo) = setup();

        let response = call_tool(&handlers, "list_doc_files", json!({})).await;

        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_get_last_update_metadata_tool() {
        let (handlers, _repo) = setup();

        let response = call_tool(&handlers, "get_last_update_metadata", Value::Null).await;
        let report = json_text(&response);

        assert!(report["repo_root"].as_str().is_some());
        assert!(report["last_modified_unix"].as_f64().unwrap() > 0.0);
        assert!(report["last_modified_iso"]
            .as_str()
            .unwrap()
            .ends_with("+00:00"));
        assert!(report["last_modified_file"]
            .as_str()
            .unwrap()
            .ends_with(".md"));
    }

    #[tokio::test]
    async fn test_get_server_info_tool() {
        let (handlers, _repo) = setup();

        let response = call_tool(&handlers, "get_server_info", json!({})).await;
        let info = text(&response);

        assert!(info.contains("docscope-mcp"));
        assert!(info.contains(env!("CARGO_PKG_VERSION")));
        assert!(info.contains("search_docs"));
    }

    #[tokio::test]
    async fn test_show_docs_config_tool() {
        let (handlers, _repo) = setup();

        let response = call_tool(&handlers, "show_docs_config", json!({"detailed": true})).await;
        let output = text(&response);

        assert!(output.contains("unified"));
        assert!(output.contains("openai-docs-api-reference"));
    }
}
