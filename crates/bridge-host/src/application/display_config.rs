//! ConfigPresenter: renders the loaded configuration to the log.
//!
//! Every field is emitted as its own DEBUG event, one per line, in a fixed
//! order.  Nothing is redacted: enabling debug mode writes the bot token to
//! the log sink.

use bridge_core::BridgeConfig;
use tracing::debug;

/// Returns one `"Label: value"` line per field, in display order.
///
/// Integers are formatted with the configuration's own locale.
pub fn config_lines(config: &BridgeConfig) -> Vec<String> {
    let locale = &config.locale;
    vec![
        format!("Locale: {}", config.locale_string),
        format!("Bot Token: {}", config.bot_token),
        format!("Channel ID: {}", locale.format_integer(config.channel_id)),
        format!("Owner ID: {}", locale.format_integer(config.owner_id)),
        format!("Command Prefix: {}", config.command_prefix),
        format!("Relay Commands: {}", config.relay_commands),
        format!("Remote Commands: {}", config.remote_commands),
        format!("Authorized Roles: {}", config.authorized_roles),
        format!("Bot Game: {}", config.bot_game),
        format!("Topic Interval: {}", locale.format_integer(config.topic_interval)),
        format!("Offline Topic: {}", config.offline_topic),
        format!("Broadcast Color: {}", config.broadcast_color),
        format!("Silence Broadcasts: {}", config.silence_broadcasts),
        format!("Silence Chat: {}", config.silence_chat),
        format!("Silence Saves: {}", config.silence_saves),
        format!("Announce Reconnect: {}", config.announce_reconnect),
        format!("Join Prefix: {}", config.join_prefix),
        format!("Leave Prefix: {}", config.leave_prefix),
        format!("Ignore Chat: {}", config.ignore_chat),
        format!("Log Chat: {}", config.log_chat),
        format!("Message Length: {}", locale.format_integer(config.message_length)),
        format!("Debug Mode: {}", config.debug_mode),
        format!("Author Format: {}", config.author_format),
        format!("Timestamp Format: {}", config.timestamp_format),
        format!("Abort On Error: {}", config.abort_on_error),
    ]
}

/// Emits every line of [`config_lines`] at DEBUG level.
pub fn display_config(config: &BridgeConfig) {
    for line in config_lines(config) {
        debug!("{line}");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
