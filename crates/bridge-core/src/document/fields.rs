//! Element and attribute names of the persisted configuration document.
//!
//! Each setting lives at `[element] attribute = value`.  [`ALL`] lists every
//! attribute in document order, which is also the order the loader reads them.

use std::fmt;

/// Location of one setting inside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath {
    pub element: &'static str,
    pub attribute: &'static str,
}

impl FieldPath {
    pub const fn new(element: &'static str, attribute: &'static str) -> Self {
        Self { element, attribute }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.element, self.attribute)
    }
}

pub const LOCALE: FieldPath = FieldPath::new("locale", "string");
pub const BOT_TOKEN: FieldPath = FieldPath::new("bot", "token");
pub const CHANNEL_ID: FieldPath = FieldPath::new("channel", "id");
pub const OWNER_ID: FieldPath = FieldPath::new("owner", "id");
pub const COMMAND_PREFIX: FieldPath = FieldPath::new("command", "prefix");
pub const RELAY_COMMANDS: FieldPath = FieldPath::new("relay", "commands");
pub const REMOTE_COMMANDS: FieldPath = FieldPath::new("remote", "commands");
pub const AUTHORIZED_ROLES: FieldPath = FieldPath::new("authorized", "roles");
pub const GAME_STATUS: FieldPath = FieldPath::new("game", "status");
pub const TOPIC_INTERVAL: FieldPath = FieldPath::new("topic", "interval");
pub const TOPIC_OFFLINE: FieldPath = FieldPath::new("topic", "offline");
pub const BROADCAST_RED: FieldPath = FieldPath::new("broadcast", "red");
pub const BROADCAST_GREEN: FieldPath = FieldPath::new("broadcast", "green");
pub const BROADCAST_BLUE: FieldPath = FieldPath::new("broadcast", "blue");
pub const SILENCE_BROADCASTS: FieldPath = FieldPath::new("silence", "broadcasts");
pub const SILENCE_CHAT: FieldPath = FieldPath::new("silence", "chat");
pub const SILENCE_SAVES: FieldPath = FieldPath::new("silence", "saves");
pub const ANNOUNCE_RECONNECT: FieldPath = FieldPath::new("announce", "reconnect");
pub const JOIN_PREFIX: FieldPath = FieldPath::new("join", "prefix");
pub const LEAVE_PREFIX: FieldPath = FieldPath::new("leave", "prefix");
pub const IGNORE_CHAT: FieldPath = FieldPath::new("ignore", "chat");
pub const LOG_CHAT: FieldPath = FieldPath::new("log", "chat");
pub const MESSAGE_LENGTH: FieldPath = FieldPath::new("message", "length");
pub const DEBUG_MODE: FieldPath = FieldPath::new("debug", "mode");
pub const AUTHOR_FORMAT: FieldPath = FieldPath::new("author", "format");
pub const TIMESTAMP_FORMAT: FieldPath = FieldPath::new("timestamp", "format");
pub const EXCEPTION_ABORT: FieldPath = FieldPath::new("exception", "abort");

/// Every attribute in document order.
pub const ALL: [FieldPath; 27] = [
    LOCALE,
    BOT_TOKEN,
    CHANNEL_ID,
    OWNER_ID,
    COMMAND_PREFIX,
    RELAY_COMMANDS,
    REMOTE_COMMANDS,
    AUTHORIZED_ROLES,
    GAME_STATUS,
    TOPIC_INTERVAL,
    TOPIC_OFFLINE,
    BROADCAST_RED,
    BROADCAST_GREEN,
    BROADCAST_BLUE,
    SILENCE_BROADCASTS,
    SILENCE_CHAT,
    SILENCE_SAVES,
    ANNOUNCE_RECONNECT,
    JOIN_PREFIX,
    LEAVE_PREFIX,
    IGNORE_CHAT,
    LOG_CHAT,
    MESSAGE_LENGTH,
    DEBUG_MODE,
    AUTHOR_FORMAT,
    TIMESTAMP_FORMAT,
    EXCEPTION_ABORT,
];
