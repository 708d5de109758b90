//! The bridge configuration record.
//!
//! [`BridgeConfig`] is the single source of truth for every runtime-tunable
//! behaviour of the bridge.  It is built once at start-up by the loader in
//! `bridge-host` and then passed by reference to each collaborator (relay,
//! platform client, command executor).  There is no global instance.
//!
//! A `BridgeConfig` is only ever constructed whole: the loader converts every
//! field first and assembles the struct last, so collaborators never see a
//! half-populated record.
//!
//! The [`Default`] values are the illustrative values written to a freshly
//! generated configuration document.

use std::fmt;

use super::locale::{Locale, FALLBACK_LOCALE};

/// RGB colour used when relayed messages are broadcast in-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BroadcastColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl BroadcastColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the components in red, green, blue order.
    pub fn as_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Renders the colour as `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for BroadcastColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Complete, validated bridge configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Messaging-platform bot token.  Secret: never share a debug log.
    pub bot_token: String,
    /// Channel the bridge relays to and from.
    pub channel_id: u64,
    /// Platform user allowed to run owner-only commands.
    pub owner_id: u64,
    /// Prefix marking a relayed message as an in-game command.
    pub command_prefix: char,
    pub relay_commands: bool,
    pub remote_commands: bool,
    /// Space-separated role names allowed to run remote commands.
    pub authorized_roles: String,
    /// Status text shown as the bot's current game.
    pub bot_game: String,
    /// Seconds between channel topic updates.  `0` disables updates.
    pub topic_interval: u32,
    /// Topic shown while the relay is offline.
    pub offline_topic: String,
    pub broadcast_color: BroadcastColor,
    pub silence_broadcasts: bool,
    pub silence_chat: bool,
    pub silence_saves: bool,
    pub announce_reconnect: bool,
    /// Prefix for player-join announcements.
    pub join_prefix: String,
    /// Prefix for player-leave announcements.
    pub leave_prefix: String,
    pub ignore_chat: bool,
    pub log_chat: bool,
    /// Maximum relayed message length.  `0` means unlimited.
    pub message_length: i32,
    pub debug_mode: bool,
    /// Locale identifier exactly as written in the document.
    pub locale_string: String,
    /// Culture resolved from `locale_string`.
    pub locale: Locale,
    /// Template for the author tag of relayed messages; `%u` is the username.
    pub author_format: String,
    /// Template for timestamps in relayed messages.
    pub timestamp_format: String,
    /// Terminate the host process after generating a default document.
    pub abort_on_error: bool,
}

impl BridgeConfig {
    /// Splits `authorized_roles` into individual role names.
    pub fn authorized_role_list(&self) -> Vec<&str> {
        self.authorized_roles.split_whitespace().collect()
    }
}

impl Default for BridgeConfig {
    /// Returns the illustrative defaults written to a new configuration file.
    ///
    /// | Field              | Default                        |
    /// |--------------------|--------------------------------|
    /// | bot_token          | `ABC`                          |
    /// | channel_id         | `123`                          |
    /// | owner_id           | `123`                          |
    /// | command_prefix     | `!`                            |
    /// | authorized_roles   | `Administrators Moderators`    |
    /// | topic_interval     | `300`                          |
    /// | broadcast_color    | `(255, 215, 0)`                |
    /// | message_length     | `0` (unlimited)                |
    /// | locale_string      | `en-US`                        |
    /// | timestamp_format   | `MM/dd/yyyy HH:mm:ss zzz`      |
    fn default() -> Self {
        Self {
            bot_token: "ABC".to_string(),
            channel_id: 123,
            owner_id: 123,
            command_prefix: '!',
            relay_commands: true,
            remote_commands: true,
            authorized_roles: "Administrators Moderators".to_string(),
            bot_game: "Terraria".to_string(),
            topic_interval: 300,
            offline_topic: "Relay offline".to_string(),
            broadcast_color: BroadcastColor::new(255, 215, 0),
            silence_broadcasts: false,
            silence_chat: false,
            silence_saves: false,
            announce_reconnect: true,
            join_prefix: ":small_blue_diamond:".to_string(),
            leave_prefix: ":small_orange_diamond:".to_string(),
            ignore_chat: false,
            log_chat: true,
            message_length: 0,
            debug_mode: false,
            locale_string: FALLBACK_LOCALE.to_string(),
            locale: Locale::fallback(),
            author_format: "**<%u>**".to_string(),
            timestamp_format: "MM/dd/yyyy HH:mm:ss zzz".to_string(),
            abort_on_error: false,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
