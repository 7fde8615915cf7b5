use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, collections::VecDeque};

pub const DEFAULT_LOG_CAPACITY: usize = 1_000;

thread_local! {
    static LOG_BUFFER: RefCell<LogBuffer> = RefCell::new(LogBuffer::new(DEFAULT_LOG_CAPACITY));
}

///
/// Level
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Level {
    Debug, // least severe
    Info,
    Ok,
    Warn,
    Error, // most severe
}

///
/// Topic
///

#[derive(Clone, Copy, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum Topic {
    Accounts,
    Config,
    HardwareWallet,
    Neurons,
    Store,
    Sync,
    Toasts,
    Tokens,
    Transactions,
}

#[macro_export]
macro_rules! log {
    // =========================================
    // (1) With topic (normal + trailing comma)
    // =========================================
    ($topic:expr, $level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner Some(&$topic.to_string()), $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // (2) No topic (normal + trailing comma)
    // =========================================
    ($level:ident, $fmt:expr $(, $arg:expr)* $(,)?) => {{
        $crate::log!(@inner None::<&str>, $crate::log::Level::$level, $fmt $(, $arg)*);
    }};

    // =========================================
    // INTERNAL
    // =========================================
    (@inner $topic:expr, $level:expr, $fmt:expr $(, $arg:expr)*) => {{
        let level = $level;
        let topic_opt: Option<&str> = $topic;
        let message = format!($fmt $(, $arg)*);

        let crate_name = env!("CARGO_PKG_NAME");
        $crate::log::LogBuffer::append(crate_name, topic_opt, level, &message);

        let final_msg = if let Some(t) = topic_opt {
            format!("[{t}] {message}")
        } else {
            message
        };

        let (color, reset) = match level {
            $crate::log::Level::Ok    => ("\x1b[32m", "\x1b[0m"),
            $crate::log::Level::Info  => ("\x1b[34m", "\x1b[0m"),
            $crate::log::Level::Warn  => ("\x1b[33m", "\x1b[0m"),
            $crate::log::Level::Error => ("\x1b[31m", "\x1b[0m"),
            $crate::log::Level::Debug => ("", ""),
        };

        let label = format!("{color}{:^5}{reset}", level.to_string().to_uppercase());
        eprintln!("{label}| {final_msg}");
    }};
}

///
/// LogEntry
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct LogEntry {
    pub crate_name: String,
    pub topic: Option<String>,
    pub level: Level,
    pub message: String,
}

///
/// LogBuffer
///
/// Bounded in-process log; oldest entries are dropped first.
///

pub struct LogBuffer {
    capacity: usize,
    entries: VecDeque<LogEntry>,
}

impl LogBuffer {
    const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::new(),
        }
    }

    pub fn append(crate_name: &str, topic: Option<&str>, level: Level, message: &str) {
        LOG_BUFFER.with_borrow_mut(|buf| {
            if buf.capacity == 0 {
                return;
            }
            while buf.entries.len() >= buf.capacity {
                buf.entries.pop_front();
            }
            buf.entries.push_back(LogEntry {
                crate_name: crate_name.to_string(),
                topic: topic.map(ToString::to_string),
                level,
                message: message.to_string(),
            });
        });
    }

    pub fn set_capacity(capacity: usize) {
        LOG_BUFFER.with_borrow_mut(|buf| {
            buf.capacity = capacity;
            while buf.entries.len() > capacity {
                buf.entries.pop_front();
            }
        });
    }

    /// Entries at or above `min_level`, oldest first.
    #[must_use]
    pub fn snapshot(min_level: Option<Level>) -> Vec<LogEntry> {
        LOG_BUFFER.with_borrow(|buf| {
            buf.entries
                .iter()
                .filter(|entry| min_level.is_none_or(|min| entry.level >= min))
                .cloned()
                .collect()
        })
    }

    pub fn clear() {
        LOG_BUFFER.with_borrow_mut(|buf| buf.entries.clear());
    }
}

///
/// TESTS
///
