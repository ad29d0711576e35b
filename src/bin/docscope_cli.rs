//! docscope CLI - command-line access to the documentation corpus
//!
//! # Examples
//!
//! ```bash
//! # List scopes
//! docscope list-scopes
//!
//! # Search a scope
//! docscope search-docs "function calling" --scope guides
//!
//! # Read the section under a heading
//! docscope get-doc-section-by-header "Vision" --level 2
//!
//! # Read lines 40-80 of a file as JSON
//! docscope --format json get-doc-section openai-docs-unified.md --start-line 40 --end-line 80
//! ```

use clap::Parser;
use docscope::cli::output::print_error;
use docscope::cli::{run, Cli};
use docscope::core::logging::init_logging;

fn main() {
    init_logging("docscope=warn");

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
