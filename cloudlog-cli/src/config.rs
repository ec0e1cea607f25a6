// cloudlog-cli/src/config.rs
//
// Turns parsed command-line arguments into a CoreConfig.

use crate::cli::Cli;
use cloudlog_core::CoreConfig;
use std::time::Duration;

/// Builds the core configuration. Validation happens in `CloudLog::from_config`.
pub fn build_core_config(cli: &Cli) -> CoreConfig {
    let mut config = CoreConfig::new(cli.root.clone())
        .with_request_timeout(Duration::from_secs(cli.timeout));
    config.dropbox_token = cli.dropbox_token.clone();
    config.telegram_token = cli.telegram_token.clone();
    config.telegram_chat_id = cli.chat_id;
    config
}
