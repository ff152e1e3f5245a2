//! Connector plugin models and the registry of known plugin kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Plugin entry returned by `GET /connector-plugins`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginInfo {
    pub class: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub plugin_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl PluginInfo {
    /// Source or sink, from the reported type or else the class name
    pub fn role(&self) -> Option<PluginRole> {
        match self.plugin_type.as_deref() {
            Some("source") => Some(PluginRole::Source),
            Some("sink") => Some(PluginRole::Sink),
            _ => PluginRole::from_class(&self.class),
        }
    }
}

/// Direction of data movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginRole {
    Source,
    Sink,
}

impl PluginRole {
    /// Infer the role from the naming convention of a class identifier
    pub fn from_class(class: &str) -> Option<Self> {
        let simple = class.rsplit('.').next().unwrap_or(class);
        if simple.contains("Sink") {
            Some(PluginRole::Sink)
        } else if simple.contains("Source") {
            Some(PluginRole::Source)
        } else {
            None
        }
    }
}

/// A single question asked while building a connector config interactively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    /// Yes/no answer stored as `"true"` / `"false"`
    YesNo {
        key: &'static str,
        prompt: &'static str,
        default: bool,
    },
    /// Free text answer; empty input takes the default when one exists
    Text {
        key: &'static str,
        prompt: &'static str,
        default: Option<&'static str>,
    },
}

impl Question {
    /// Config key the answer is stored under
    pub fn key(&self) -> &'static str {
        match self {
            Question::YesNo { key, .. } | Question::Text { key, .. } => key,
        }
    }
}

const SPLUNK_SINK_CLASSES: &[&str] = &[
    "io.confluent.kafka.connect.splunk.SplunkHttpSinkConnector",
    "SplunkHttpSinkConnector",
];
const SPLUNK_SOURCE_CLASSES: &[&str] = &[
    "io.confluent.kafka.connect.splunk.SplunkHttpSourceConnector",
    "SplunkHttpSourceConnector",
];
const FILE_SINK_CLASSES: &[&str] = &[
    "org.apache.kafka.connect.file.FileStreamSinkConnector",
    "FileStreamSinkConnector",
    "FileStreamSink",
];
const FILE_SOURCE_CLASSES: &[&str] = &[
    "org.apache.kafka.connect.file.FileStreamSourceConnector",
    "FileStreamSourceConnector",
    "FileStreamSource",
];

const SPLUNK_SINK_KEYS: &[&str] = &[
    "splunk.remote.host",
    "splunk.remote.port",
    "splunk.auth.token",
    "splunk.ssl.enabled",
    "splunk.ssl.validate.certs",
    "topics",
    "tasks.max",
    "connector.class",
];
const SPLUNK_SOURCE_KEYS: &[&str] = &["connector.class", "tasks.max", "splunk.port", "kafka.topic"];
const FILE_SINK_KEYS: &[&str] = &["connector.class", "tasks.max", "file", "topics"];
const FILE_SOURCE_KEYS: &[&str] = &["connector.class", "tasks.max", "file", "topic"];

const MAX_TASKS: Question = Question::Text {
    key: "tasks.max",
    prompt: "Max tasks",
    default: Some("5"),
};

const SPLUNK_SINK_QUESTIONS: &[Question] = &[
    Question::YesNo {
        key: "splunk.ssl.enabled",
        prompt: "SSL enabled",
        default: true,
    },
    Question::YesNo {
        key: "splunk.ssl.validate.certs",
        prompt: "Validate SSL certificates",
        default: true,
    },
    Question::Text {
        key: "splunk.remote.host",
        prompt: "Splunk remote host",
        default: Some("localhost"),
    },
    Question::Text {
        key: "splunk.remote.port",
        prompt: "Splunk remote port",
        default: Some("8088"),
    },
    Question::Text {
        key: "splunk.auth.token",
        prompt: "Splunk token",
        default: None,
    },
    MAX_TASKS,
    Question::Text {
        key: "topics",
        prompt: "Topic to consume",
        default: None,
    },
];

const SPLUNK_SOURCE_QUESTIONS: &[Question] = &[
    Question::Text {
        key: "splunk.port",
        prompt: "Port to listen on",
        default: Some("8088"),
    },
    Question::YesNo {
        key: "splunk.ssl.enabled",
        prompt: "SSL enabled",
        default: true,
    },
    Question::Text {
        key: "kafka.topic",
        prompt: "Topic to produce to",
        default: None,
    },
    MAX_TASKS,
];

const FILE_SINK_QUESTIONS: &[Question] = &[
    Question::Text {
        key: "file",
        prompt: "File to write",
        default: None,
    },
    Question::Text {
        key: "topics",
        prompt: "Topic to consume",
        default: None,
    },
    MAX_TASKS,
];

const FILE_SOURCE_QUESTIONS: &[Question] = &[
    Question::Text {
        key: "file",
        prompt: "File to read",
        default: None,
    },
    Question::Text {
        key: "topic",
        prompt: "Topic to produce to",
        default: None,
    },
    MAX_TASKS,
];

/// Plugin kinds this client knows how to validate and configure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginKind {
    SplunkSource,
    SplunkSink,
    FileSource,
    FileSink,
    Unknown(String),
}

impl PluginKind {
    /// All known kinds, in menu order
    pub const KNOWN: [PluginKind; 4] = [
        PluginKind::SplunkSource,
        PluginKind::SplunkSink,
        PluginKind::FileSource,
        PluginKind::FileSink,
    ];

    /// Map a class identifier (fully-qualified or alias) to its kind
    pub fn from_class(class: &str) -> Self {
        let class = class.trim();
        if SPLUNK_SINK_CLASSES.contains(&class) {
            PluginKind::SplunkSink
        } else if SPLUNK_SOURCE_CLASSES.contains(&class) {
            PluginKind::SplunkSource
        } else if FILE_SINK_CLASSES.contains(&class) {
            PluginKind::FileSink
        } else if FILE_SOURCE_CLASSES.contains(&class) {
            PluginKind::FileSource
        } else {
            PluginKind::Unknown(class.to_string())
        }
    }

    /// Whether this is a recognised kind
    pub fn is_known(&self) -> bool {
        !matches!(self, PluginKind::Unknown(_))
    }

    /// Fully-qualified class identifier
    pub fn class(&self) -> &str {
        match self {
            PluginKind::SplunkSource => SPLUNK_SOURCE_CLASSES[0],
            PluginKind::SplunkSink => SPLUNK_SINK_CLASSES[0],
            PluginKind::FileSource => FILE_SOURCE_CLASSES[0],
            PluginKind::FileSink => FILE_SINK_CLASSES[0],
            PluginKind::Unknown(class) => class,
        }
    }

    pub fn role(&self) -> Option<PluginRole> {
        match self {
            PluginKind::SplunkSource | PluginKind::FileSource => Some(PluginRole::Source),
            PluginKind::SplunkSink | PluginKind::FileSink => Some(PluginRole::Sink),
            PluginKind::Unknown(class) => PluginRole::from_class(class),
        }
    }

    /// Config keys a document of this kind must carry, in check order
    pub fn required_keys(&self) -> &'static [&'static str] {
        match self {
            PluginKind::SplunkSource => SPLUNK_SOURCE_KEYS,
            PluginKind::SplunkSink => SPLUNK_SINK_KEYS,
            PluginKind::FileSource => FILE_SOURCE_KEYS,
            PluginKind::FileSink => FILE_SINK_KEYS,
            PluginKind::Unknown(_) => &[],
        }
    }

    /// Questions asked by the interactive builder for this kind
    pub fn questions(&self) -> &'static [Question] {
        match self {
            PluginKind::SplunkSource => SPLUNK_SOURCE_QUESTIONS,
            PluginKind::SplunkSink => SPLUNK_SINK_QUESTIONS,
            PluginKind::FileSource => FILE_SOURCE_QUESTIONS,
            PluginKind::FileSink => FILE_SINK_QUESTIONS,
            PluginKind::Unknown(_) => &[],
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginKind::SplunkSource => write!(f, "Splunk HTTP source"),
            PluginKind::SplunkSink => write!(f, "Splunk HTTP sink"),
            PluginKind::FileSource => write!(f, "File stream source"),
            PluginKind::FileSink => write!(f, "File stream sink"),
            PluginKind::Unknown(class) => write!(f, "{class}"),
        }
    }
}
