//! MCP tool implementations
//!
//! One handler per docscope operation, plus server info and config
//! introspection.

pub mod get_doc_section;
pub mod get_doc_section_by_header;
pub mod get_last_update_metadata;
pub mod get_server_info;
pub mod handler;
pub mod helpers;
pub mod list_doc_files;
pub mod list_scopes;
pub mod registry;
pub mod search_docs;
pub mod show_docs_config;

pub use get_doc_section::GetDocSectionHandler;
pub use get_doc_section_by_header::GetDocSectionByHeaderHandler;
pub use get_last_update_metadata::GetLastUpdateMetadataHandler;
pub use get_server_info::GetServerInfoHandler;
pub use handler::{run_blocking, text_content, McpToolHandler};
pub use helpers::{json_content, parse_args, positive_or};
pub use list_doc_files::ListDocFilesHandler;
pub use list_scopes::ListScopesHandler;
pub use registry::ToolRegistry;
pub use search_docs::SearchDocsHandler;
pub use show_docs_config::ShowDocsConfigHandler;
