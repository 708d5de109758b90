//! Renders the fully-commented configuration document written on first run.
//!
//! The document is rendered from a [`BridgeConfig`] (normally
//! `BridgeConfig::default()`), so loading a freshly generated file yields
//! exactly the record it was rendered from.

use crate::domain::config::BridgeConfig;

/// Quotes `text` as a TOML string, escaping as needed.
fn quote(text: &str) -> String {
    toml::Value::String(text.to_string()).to_string()
}

/// TOML integers are signed 64-bit; larger ids are written as strings.
fn id_value(id: u64) -> String {
    if i64::try_from(id).is_ok() {
        id.to_string()
    } else {
        quote(&id.to_string())
    }
}

/// Renders `config` as a commented TOML document.
pub fn render_default_document(config: &BridgeConfig) -> String {
    format!(
        r#"# Chat bridge configuration.
#
# Every element below is required.  Edit the bot token and channel id before
# starting the bridge, then restart the server to apply changes.

# Culture used to read numbers and booleans in this file, e.g. en-US or de-DE.
[locale]
string = {locale}

# Messaging-platform bot token.  Keep this secret.
[bot]
token = {token}

# Id of the channel the bridge relays to and from.  Write ids as plain
# digits; an id above 9223372036854775807 must be quoted, e.g. id = "...".
[channel]
id = {channel}

# Id of the platform user allowed to run owner-only commands.
[owner]
id = {owner}

# Single character marking a relayed message as an in-game command.
[command]
prefix = {prefix}

# Relay in-game command output to the channel.
[relay]
commands = {relay}

# Allow authorized channel members to run in-game commands.
[remote]
commands = {remote}

# Space-separated role names allowed to run remote commands.
[authorized]
roles = {roles}

# Status text shown as the bot's current game.
[game]
status = {game}

# Seconds between channel topic updates (0 disables updates), and the topic
# shown while the relay is offline.
[topic]
interval = {interval}
offline = {offline}

# Colour of broadcast messages in-game.  Each component is 0-255.
[broadcast]
red = {red}
green = {green}
blue = {blue}

# Suppress relaying of server broadcasts, chat, and world-save notices.
[silence]
broadcasts = {silence_broadcasts}
chat = {silence_chat}
saves = {silence_saves}

# Announce in the channel when the bridge reconnects to the platform.
[announce]
reconnect = {reconnect}

# Prefix for player-join announcements.
[join]
prefix = {join}

# Prefix for player-leave announcements.
[leave]
prefix = {leave}

# Ignore chat coming from the channel.
[ignore]
chat = {ignore_chat}

# Write relayed chat to the server log.
[log]
chat = {log_chat}

# Maximum relayed message length.  0 means unlimited.
[message]
length = {length}

# Print the loaded configuration at debug level.  This includes the bot token.
[debug]
mode = {debug}

# Author tag of relayed messages.  %u is replaced by the username.
[author]
format = {author}

# Timestamp format for relayed messages.
[timestamp]
format = {timestamp}

# Terminate the server after writing a default configuration file.
[exception]
abort = {abort}
"#,
        locale = quote(&config.locale_string),
        token = quote(&config.bot_token),
        channel = id_value(config.channel_id),
        owner = id_value(config.owner_id),
        prefix = quote(&config.command_prefix.to_string()),
        relay = config.relay_commands,
        remote = config.remote_commands,
        roles = quote(&config.authorized_roles),
        game = quote(&config.bot_game),
        interval = config.topic_interval,
        offline = quote(&config.offline_topic),
        red = config.broadcast_color.red,
        green = config.broadcast_color.green,
        blue = config.broadcast_color.blue,
        silence_broadcasts = config.silence_broadcasts,
        silence_chat = config.silence_chat,
        silence_saves = config.silence_saves,
        reconnect = config.announce_reconnect,
        join = quote(&config.join_prefix),
        leave = quote(&config.leave_prefix),
        ignore_chat = config.ignore_chat,
        log_chat = config.log_chat,
        length = config.message_length,
        debug = config.debug_mode,
        author = quote(&config.author_format),
        timestamp = quote(&config.timestamp_format),
        abort = config.abort_on_error,
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
