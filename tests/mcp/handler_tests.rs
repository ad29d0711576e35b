//! MCP handler unit tests

#[cfg(test)]
mod tests {
    use crate::common::{create_test_services, DocsRepo};
    use docscope::mcp::handlers::ProtocolHandlers;
    use docscope::mcp::protocol::*;
    use docscope::mcp::process_message;
    use serde_json::{json, Value};

    fn create_test_handlers() -> (ProtocolHandlers, DocsRepo) {
        let repo = DocsRepo::standard();
        let services = create_test_services(repo.path());
        (ProtocolHandlers::new(services), repo)
    }

    async fn send(handlers: &ProtocolHandlers, message: Value) -> JsonRpcResponse {
        process_message(handlers, &message.to_string())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_initialize_handler() {
        let (handlers, _repo) = create_test_handlers();

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(json!(1)),
            method: "initialize".to_string(),
            params: Some(json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {"tools": {}},
                "clientInfo": {"name": "test", "version": "1.0"}
            })),
        };

        let response = handlers.handle_initialize(request).await.unwrap();

        assert_eq!(response.jsonrpc, "2.0");
        assert!(response.error.is_none());

        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "docscope-mcp");
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    }

    #[tokio::test]
    async fn test_initialize_without_params() {
        let (handlers, _repo) = create_test_handlers();

        let response = send(&handlers, json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"})).await;

        assert!(response.error.is_none());
        assert!(response.result.is_some());
    }

    #[tokio::test]
    async fn test_initialized_handler() {
        let (handlers, _repo) = create_test_handlers();
        assert!(!handlers.is_initialized());

        let request = JsonRpcRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: "initialized".to_string(),
            params: Some(json!({})),
        };

        let response = handlers.handle_initialized(request).await.unwrap();

        assert!(response.id.is_none());
        assert!(response.result.is_none());
        assert!(response.error.is_none());
        assert!(handlers.is_initialized());
    }

    #[tokio::test]
    async fn test_tools_list_has_all_tools() {
        let (handlers, _repo) = create_test_handlers();

        let response = send(&handlers, json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})).await;

        let result = response.result.unwrap();
        let names: Vec<&str> = result["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();

        assert_eq!(
            names,
            vec![
                "get_doc_section",
                "get_doc_section_by_header",
                "get_last_update_metadata",
                "get_server_info",
                "list_doc_files",
                "list_scopes",
                "search_docs",
                "show_docs_config",
            ]
        );
        for tool in result["tools"].as_array().unwrap() {
            assert_eq!(tool["inputSchema"]["type"], "object");
        }
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let (handlers, _repo) = create_test_handlers();

        let response = send(&handlers, json!({"jsonrpc": "2.0", "id": 3, "method": "resources/list"})).await;

        assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);
        assert_eq!(response.id, Some(json!(3)));
    }

    #[tokio::test]
    async fn test_unknown_notification_ignored() {
        let (handlers, _repo) = create_test_handlers();

        let response = send(&handlers, json!({"jsonrpc": "2.0", "method": "notifications/progress"})).await;

        assert!(response.result.is_none());
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_cancelled_notification_is_noop() {
        let (handlers, _repo) = create_test_handlers();

        let response = send(
            &handlers,
            json!({"jsonrpc": "2.0", "method": "notifications/cancelled", "params": {"requestId": 4}}),
        )
        .await;

        assert!(response.id.is_none());
        assert!(response.error.is_none());
    }

    #[tokio::test]
    async fn test_ping() {
        let (handlers, _repo) = create_test_handlers();

        let response = send(&handlers, json!({"jsonrpc": "2.0", "id": "p", "method": "ping"})).await;

        assert_eq!(response.result, Some(json!({})));
        assert_eq!(response.id, Some(json!("p")));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let (handlers, _repo) = create_test_handlers();

        let err = process_message(&handlers, "{not json").await.unwrap_err();

        assert_eq!(err.to_rpc().0, PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_tools_call_missing_params() {
        let (handlers, _repo) = create_test_handlers();

        let response = send(&handlers, json!({"jsonrpc": "2.0", "id": 5, "method": "tools/call"})).await;

        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_tools_call_unknown_tool() {
        let (handlers, _repo) = create_test_handlers();

        let response = send(
            &handlers,
            json!({"jsonrpc": "2.0", "id": 6, "method": "tools/call", "params": {"name": "index_repository"}}),
        )
        .await;

        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_REQUEST);
        assert!(error.message.contains("index_repository"));
    }
}
