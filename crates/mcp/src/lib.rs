// MCP (Model Context Protocol) server for the Bountyhub bounty board.
// Exposes list/get/claim/submit/stats as tools for agent clients.

pub mod format;
pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
