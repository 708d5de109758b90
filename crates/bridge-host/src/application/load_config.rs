//! ConfigLoader: turns the persisted document into a [`BridgeConfig`].
//!
//! # Load sequence
//!
//! 1. Make sure the configuration directory exists.  A failure here is only
//!    logged; the read that follows reports the real problem.
//! 2. Read the document.  If there is none, hand over to
//!    [`DefaultGenerator`] and return [`LoadOutcome::DefaultsGenerated`].
//! 3. Read `locale.string` under the fallback locale and resolve it.  Every
//!    later field is converted under the resolved locale.
//! 4. Convert the remaining fields in document order.  The first failure
//!    aborts the load; no partially converted record is ever returned.
//! 5. Log the result.  In debug mode, print the configuration.
//!
//! Any error other than "document absent" is logged at ERROR level and
//! returned unchanged.  There is no retry.
//!
//! # Why is `DefaultsGenerated` not a configuration? (for beginners)
//!
//! The generated file holds placeholder credentials, so the bridge cannot use
//! it yet.  The operator must edit it and restart; the loader deliberately
//! does not read the file it has just written.

use std::path::Path;
use std::sync::Arc;

use bridge_core::document::fields::{self, FieldPath};
use bridge_core::{BridgeConfig, BroadcastColor, ConfigDocument, DocumentError, Locale};
use tracing::{debug, error, info, warn};

use super::config_error::ConfigError;
use super::display_config::display_config;
use super::document_store::DocumentStore;
use super::generate_defaults::{DefaultGenerator, GenerateOutcome, ProcessExit};

/// Result of a load that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The document was read and every field converted.
    Loaded(BridgeConfig),
    /// No document existed; defaults were written and must be edited before
    /// the bridge can start.
    DefaultsGenerated(GenerateOutcome),
}

/// The configuration load use case.
pub struct ConfigLoader {
    store: Arc<dyn DocumentStore>,
    exit: Arc<dyn ProcessExit>,
}

impl ConfigLoader {
    pub fn new(store: Arc<dyn DocumentStore>, exit: Arc<dyn ProcessExit>) -> Self {
        Self { store, exit }
    }

    /// Loads the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for any failure other than a missing document.
    /// The error has already been logged.
    pub fn load(&self) -> Result<LoadOutcome, ConfigError> {
        let path = self.store.location();

        if let Err(e) = self.store.ensure_container() {
            warn!("could not create configuration directory: {e}");
        }

        let text = match self.store.read() {
            Ok(Some(text)) => text,
            Ok(None) => {
                error!("configuration file {} not found", path.display());
                let generator =
                    DefaultGenerator::new(Arc::clone(&self.store), Arc::clone(&self.exit));
                // The abort flag lives in the missing document, so only its
                // hardcoded default can apply here.
                return generator
                    .generate(BridgeConfig::default().abort_on_error)
                    .map(LoadOutcome::DefaultsGenerated);
            }
            Err(e) => return Err(log_failure(path, e)),
        };

        let config = parse_config(&text, path).map_err(|e| log_failure(path, e))?;

        info!("configuration loaded from {}", path.display());
        if config.debug_mode {
            display_config(&config);
        }
        Ok(LoadOutcome::Loaded(config))
    }
}

fn log_failure(path: &Path, err: ConfigError) -> ConfigError {
    error!("failed to load configuration from {}: {err}", path.display());
    err
}

/// Parses document text into a complete configuration.
///
/// # Errors
///
/// Returns the first conversion failure, in document order.
pub fn parse_config(text: &str, path: &Path) -> Result<BridgeConfig, ConfigError> {
    let document = ConfigDocument::parse(text).map_err(|e| match e {
        DocumentError::Malformed(source) => ConfigError::MalformedDocument {
            path: path.to_path_buf(),
            source,
        },
        DocumentError::MissingField(field) => ConfigError::MissingField { field },
    })?;

    let mut reader = FieldReader::new(&document);

    let locale_string = reader.string(fields::LOCALE)?;
    reader.locale = Locale::resolve(&locale_string)?;
    debug!("configuration locale resolved to {}", reader.locale);

    Ok(BridgeConfig {
        bot_token: reader.non_empty(fields::BOT_TOKEN)?,
        channel_id: reader.integer(fields::CHANNEL_ID, "an unsigned 64-bit integer")?,
        owner_id: reader.integer(fields::OWNER_ID, "an unsigned 64-bit integer")?,
        command_prefix: reader.character(fields::COMMAND_PREFIX)?,
        relay_commands: reader.boolean(fields::RELAY_COMMANDS)?,
        remote_commands: reader.boolean(fields::REMOTE_COMMANDS)?,
        authorized_roles: reader.string(fields::AUTHORIZED_ROLES)?,
        bot_game: reader.string(fields::GAME_STATUS)?,
        topic_interval: reader.integer(fields::TOPIC_INTERVAL, "an unsigned 32-bit integer")?,
        offline_topic: reader.string(fields::TOPIC_OFFLINE)?,
        broadcast_color: BroadcastColor::new(
            reader.byte(fields::BROADCAST_RED)?,
            reader.byte(fields::BROADCAST_GREEN)?,
            reader.byte(fields::BROADCAST_BLUE)?,
        ),
        silence_broadcasts: reader.boolean(fields::SILENCE_BROADCASTS)?,
        silence_chat: reader.boolean(fields::SILENCE_CHAT)?,
        silence_saves: reader.boolean(fields::SILENCE_SAVES)?,
        announce_reconnect: reader.boolean(fields::ANNOUNCE_RECONNECT)?,
        join_prefix: reader.string(fields::JOIN_PREFIX)?,
        leave_prefix: reader.string(fields::LEAVE_PREFIX)?,
        ignore_chat: reader.boolean(fields::IGNORE_CHAT)?,
        log_chat: reader.boolean(fields::LOG_CHAT)?,
        message_length: reader.integer(fields::MESSAGE_LENGTH, "a signed 32-bit integer")?,
        debug_mode: reader.boolean(fields::DEBUG_MODE)?,
        author_format: reader.string(fields::AUTHOR_FORMAT)?,
        timestamp_format: reader.string(fields::TIMESTAMP_FORMAT)?,
        abort_on_error: reader.boolean(fields::EXCEPTION_ABORT)?,
        locale: reader.locale,
        locale_string,
    })
}

/// Converts attributes of one document under the active locale.
struct FieldReader<'a> {
    document: &'a ConfigDocument,
    locale: Locale,
}

impl<'a> FieldReader<'a> {
    fn new(document: &'a ConfigDocument) -> Self {
        Self {
            document,
            locale: Locale::fallback(),
        }
    }

    fn text(&self, field: FieldPath) -> Result<&'a str, ConfigError> {
        self.document
            .attribute(field)
            .map_err(|_| ConfigError::MissingField { field })
    }

    fn malformed(field: FieldPath, value: &str, expected: &'static str) -> ConfigError {
        ConfigError::MalformedValue {
            field,
            value: value.to_string(),
            expected,
        }
    }

    fn string(&self, field: FieldPath) -> Result<String, ConfigError> {
        self.text(field).map(str::to_string)
    }

    fn non_empty(&self, field: FieldPath) -> Result<String, ConfigError> {
        let value = self.text(field)?;
        if value.trim().is_empty() {
            return Err(Self::malformed(field, value, "a non-empty string"));
        }
        Ok(value.to_string())
    }

    fn character(&self, field: FieldPath) -> Result<char, ConfigError> {
        let value = self.text(field)?;
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Self::malformed(field, value, "exactly one character")),
        }
    }

    fn boolean(&self, field: FieldPath) -> Result<bool, ConfigError> {
        let value = self.text(field)?;
        self.locale
            .parse_bool(value)
            .ok_or_else(|| Self::malformed(field, value, "true or false"))
    }

    fn integer<T: TryFrom<i128>>(
        &self,
        field: FieldPath,
        expected: &'static str,
    ) -> Result<T, ConfigError> {
        let value = self.text(field)?;
        self.locale
            .parse_integer(value)
            .ok_or_else(|| Self::malformed(field, value, expected))
    }

    fn byte(&self, field: FieldPath) -> Result<u8, ConfigError> {
        self.integer(field, "an integer from 0 to 255")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
