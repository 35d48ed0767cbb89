use serde::Serialize;

use crate::values::{MqttVersion, Qos, TraceLevel};

// Defaults shared by both clients; callers may override any of them before parsing
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: &str = "1883";
pub const DEFAULT_KEEPALIVE: i32 = 10;
pub const DEFAULT_MAX_DATA_LEN: i32 = 100;
pub const DEFAULT_DELIMITER: &str = "\n";

pub const PUBLISHER_CLIENT_ID: &str = "paho-c-pub";
pub const SUBSCRIBER_CLIENT_ID: &str = "paho-c-sub";

/// Which client the options are for. Decides the second tier of legal flags.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Publisher,
    Subscriber,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Role::Publisher => "publisher",
            Role::Subscriber => "subscriber",
        }
    }

    pub fn program(self) -> &'static str {
        match self {
            Role::Publisher => "mqtt-pub",
            Role::Subscriber => "mqtt-sub",
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct UserProperty {
    pub name: String,
    pub value: String,
}

/// Where the publisher takes its payload from.
#[derive(Debug, PartialEq, Eq)]
pub enum MessageSource<'a> {
    Null,
    Inline(&'a str),
    File(&'a str),
    /// Each line of stdin is published as its own message
    StdinLines,
    /// All of stdin is published as one message
    Stdin,
}

/// Everything the sample clients can be told on the command line.
///
/// Created with role defaults, filled in by [`crate::parse_args`], then
/// handed to the MQTT client untouched.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct PubSubOpts {
    pub role: Role,
    pub verbose: bool,
    pub trace_level: Option<TraceLevel>,
    pub delimiter: String,
    pub max_data_len: i32,

    // message
    pub message: Option<String>,
    pub filename: Option<String>,
    pub stdin_lines: bool,
    pub null_message: bool,

    // MQTT
    pub mqtt_version: Option<MqttVersion>,
    pub topic: Option<String>,
    pub client_id: String,
    pub qos: Qos,
    pub retained: bool,
    pub username: Option<String>,
    #[serde(skip)]
    pub password: Option<String>,
    pub host: String,
    pub port: String,
    pub connection: Option<String>,
    pub keepalive: i32,

    // will
    pub will_topic: Option<String>,
    pub will_payload: Option<String>,
    pub will_qos: i32,
    pub will_retain: bool,

    // TLS
    pub insecure: bool,
    pub capath: Option<String>,
    pub cert: Option<String>,
    pub cafile: Option<String>,
    pub key: Option<String>,
    #[serde(skip)]
    pub keypass: Option<String>,
    pub ciphers: Option<String>,

    // MQTT V5
    pub message_expiry: i32,
    pub user_property: Option<UserProperty>,
}

impl PubSubOpts {
    pub fn new(role: Role) -> PubSubOpts {
        let client_id = match role {
            Role::Publisher => PUBLISHER_CLIENT_ID,
            Role::Subscriber => SUBSCRIBER_CLIENT_ID,
        };
        PubSubOpts {
            role,
            verbose: false,
            trace_level: None,
            delimiter: String::from(DEFAULT_DELIMITER),
            max_data_len: DEFAULT_MAX_DATA_LEN,
            message: None,
            filename: None,
            stdin_lines: role == Role::Publisher,
            null_message: false,
            mqtt_version: None,
            topic: None,
            client_id: String::from(client_id),
            qos: Qos::AtMostOnce,
            retained: false,
            username: None,
            password: None,
            host: String::from(DEFAULT_HOST),
            port: String::from(DEFAULT_PORT),
            connection: None,
            keepalive: DEFAULT_KEEPALIVE,
            will_topic: None,
            will_payload: None,
            will_qos: 0,
            will_retain: false,
            insecure: false,
            capath: None,
            cert: None,
            cafile: None,
            key: None,
            keypass: None,
            ciphers: None,
            message_expiry: 0,
            user_property: None,
        }
    }

    pub fn publisher() -> PubSubOpts {
        PubSubOpts::new(Role::Publisher)
    }

    pub fn subscriber() -> PubSubOpts {
        PubSubOpts::new(Role::Subscriber)
    }

    pub fn is_publisher(&self) -> bool {
        self.role == Role::Publisher
    }

    pub fn message_source(&self) -> MessageSource<'_> {
        if self.null_message {
            MessageSource::Null
        } else if let Some(message) = &self.message {
            MessageSource::Inline(message)
        } else if let Some(filename) = &self.filename {
            MessageSource::File(filename)
        } else if self.stdin_lines {
            MessageSource::StdinLines
        } else {
            MessageSource::Stdin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults() {
        let publisher = PubSubOpts::publisher();
        assert!(publisher.is_publisher());
        assert_eq!(publisher.client_id, "paho-c-pub");
        assert!(publisher.stdin_lines);
        assert_eq!(publisher.host, "localhost");
        assert_eq!(publisher.port, "1883");
        assert_eq!(publisher.keepalive, 10);
        assert_eq!(publisher.max_data_len, 100);
        assert_eq!(publisher.topic, None);

        let subscriber = PubSubOpts::subscriber();
        assert!(!subscriber.is_publisher());
        assert_eq!(subscriber.client_id, "paho-c-sub");
        assert!(!subscriber.stdin_lines);
    }

    #[test]
    fn message_source_precedence() {
        let mut opts = PubSubOpts::publisher();
        assert_eq!(opts.message_source(), MessageSource::StdinLines);

        opts.stdin_lines = false;
        assert_eq!(opts.message_source(), MessageSource::Stdin);

        opts.filename = Some(String::from("payload.bin"));
        assert_eq!(opts.message_source(), MessageSource::File("payload.bin"));

        opts.message = Some(String::from("hello"));
        assert_eq!(opts.message_source(), MessageSource::Inline("hello"));

        opts.null_message = true;
        assert_eq!(opts.message_source(), MessageSource::Null);
    }

    #[test]
    fn secrets_are_not_serialized() {
        let mut opts = PubSubOpts::publisher();
        opts.password = Some(String::from("hunter2"));
        opts.keypass = Some(String::from("s3cret"));
        let json = serde_json::to_string(&opts).expect("serializes");
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("s3cret"));
        assert!(json.contains("\"client_id\":\"paho-c-pub\""));
    }
}
