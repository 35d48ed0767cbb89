//! The table of recognised flags. The parser and the usage printer both walk
//! this table, so every flag is declared exactly once.

use crate::error::OptsError;
use crate::opts::{PubSubOpts, Role, UserProperty};
use crate::values::{MqttVersion, Qos, TraceLevel, atoi, parse_choice};

/// Which role a flag is legal for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Common,
    Publisher,
    Subscriber,
}

impl Scope {
    pub fn allows(self, role: Role) -> bool {
        match self {
            Scope::Common => true,
            Scope::Publisher => role == Role::Publisher,
            Scope::Subscriber => role == Role::Subscriber,
        }
    }
}

type Apply = fn(&mut PubSubOpts, &[&str]) -> Result<(), OptsError>;
type ShowDefault = fn(&PubSubOpts) -> String;

pub struct Flag {
    pub short: Option<&'static str>,
    pub long: Option<&'static str>,
    /// Placeholder(s) shown in usage for the following tokens
    pub value_name: Option<&'static str>,
    /// Number of following tokens consumed
    pub arity: usize,
    pub scope: Scope,
    pub help: &'static str,
    pub default: Option<ShowDefault>,
    pub apply: Apply,
}

impl Flag {
    pub fn matches(&self, token: &str) -> bool {
        self.short == Some(token) || self.long == Some(token)
    }

    /// The long form when there is one, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.long.or(self.short).unwrap_or_default()
    }
}

/// Finds the flag `token` names, provided it is legal for `role`.
pub fn lookup(token: &str, role: Role) -> Option<&'static Flag> {
    FLAGS
        .iter()
        .find(|flag| flag.matches(token) && flag.scope.allows(role))
}

fn owned(value: &str) -> Option<String> {
    Some(String::from(value))
}

fn choice<T: clap::ValueEnum>(flag: &str, value: &str) -> Result<T, OptsError> {
    parse_choice(value).ok_or_else(|| OptsError::InvalidValue {
        flag: String::from(flag),
        value: String::from(value),
    })
}

fn on_off(value: bool) -> String {
    String::from(if value { "on" } else { "off" })
}

pub static FLAGS: &[Flag] = &[
    Flag {
        short: Some("-t"),
        long: Some("--topic"),
        value_name: Some("<topic>"),
        arity: 1,
        scope: Scope::Common,
        help: "MQTT topic to publish or subscribe to",
        default: None,
        apply: |opts, values| {
            opts.topic = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: Some("-h"),
        long: Some("--host"),
        value_name: Some("<host>"),
        arity: 1,
        scope: Scope::Common,
        help: "host to connect to",
        default: Some(|opts| opts.host.clone()),
        apply: |opts, values| {
            opts.host = String::from(values[0]);
            Ok(())
        },
    },
    Flag {
        short: Some("-p"),
        long: Some("--port"),
        value_name: Some("<port>"),
        arity: 1,
        scope: Scope::Common,
        help: "network port to connect to",
        default: Some(|opts| opts.port.clone()),
        apply: |opts, values| {
            opts.port = String::from(values[0]);
            Ok(())
        },
    },
    Flag {
        short: Some("-c"),
        long: Some("--connection"),
        value_name: Some("<uri>"),
        arity: 1,
        scope: Scope::Common,
        help: "connection string, overrides host/port e.g wss://hostname:port/ws",
        default: None,
        apply: |opts, values| {
            opts.connection = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: Some("-q"),
        long: Some("--qos"),
        value_name: Some("<0|1|2>"),
        arity: 1,
        scope: Scope::Common,
        help: "MQTT QoS",
        default: Some(|opts| opts.qos.to_string()),
        apply: |opts, values| {
            opts.qos = choice::<Qos>("--qos", values[0])?;
            Ok(())
        },
    },
    Flag {
        short: Some("-r"),
        long: Some("--retained"),
        value_name: None,
        arity: 0,
        scope: Scope::Publisher,
        help: "use MQTT retain option",
        default: Some(|opts| on_off(opts.retained)),
        apply: |opts, _| {
            opts.retained = true;
            Ok(())
        },
    },
    Flag {
        short: Some("-R"),
        long: Some("--no-print-retained"),
        value_name: None,
        arity: 0,
        scope: Scope::Subscriber,
        help: "do not print retained messages",
        default: Some(|opts| on_off(opts.retained)),
        apply: |opts, _| {
            opts.retained = true;
            Ok(())
        },
    },
    Flag {
        short: Some("-i"),
        long: Some("--clientid"),
        value_name: Some("<clientid>"),
        arity: 1,
        scope: Scope::Common,
        help: "MQTT client id",
        default: Some(|opts| opts.client_id.clone()),
        apply: |opts, values| {
            opts.client_id = String::from(values[0]);
            Ok(())
        },
    },
    Flag {
        short: Some("-u"),
        long: Some("--username"),
        value_name: Some("<username>"),
        arity: 1,
        scope: Scope::Common,
        help: "MQTT username",
        default: Some(|_| String::from("none")),
        apply: |opts, values| {
            opts.username = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: Some("-P"),
        long: Some("--password"),
        value_name: Some("<password>"),
        arity: 1,
        scope: Scope::Common,
        help: "MQTT password",
        default: Some(|_| String::from("none")),
        apply: |opts, values| {
            opts.password = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: Some("-k"),
        long: Some("--keepalive"),
        value_name: Some("<seconds>"),
        arity: 1,
        scope: Scope::Common,
        help: "MQTT keepalive timeout value",
        default: Some(|opts| format!("{} seconds", opts.keepalive)),
        apply: |opts, values| {
            opts.keepalive = atoi(values[0]);
            Ok(())
        },
    },
    Flag {
        short: Some("-v"),
        long: Some("--verbose"),
        value_name: None,
        arity: 0,
        scope: Scope::Common,
        help: "verbose output",
        default: None,
        apply: |opts, _| {
            opts.verbose = true;
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--delimiter"),
        value_name: Some("<delim>"),
        arity: 1,
        scope: Scope::Common,
        help: "message delimiter",
        default: Some(|opts| opts.delimiter.escape_default().to_string()),
        apply: |opts, values| {
            opts.delimiter = String::from(values[0]);
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--maxdatalen"),
        value_name: Some("<bytes>"),
        arity: 1,
        scope: Scope::Common,
        help: "maximum message length",
        default: Some(|opts| opts.max_data_len.to_string()),
        apply: |opts, values| {
            opts.max_data_len = atoi(values[0]);
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--will-topic"),
        value_name: Some("<topic>"),
        arity: 1,
        scope: Scope::Common,
        help: "topic of the will message",
        default: None,
        apply: |opts, values| {
            opts.will_topic = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--will-payload"),
        value_name: Some("<payload>"),
        arity: 1,
        scope: Scope::Common,
        help: "payload of the will message",
        default: None,
        apply: |opts, values| {
            opts.will_payload = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--will-qos"),
        value_name: Some("<qos>"),
        arity: 1,
        scope: Scope::Common,
        help: "QoS of the will message",
        default: None,
        apply: |opts, values| {
            opts.will_qos = atoi(values[0]);
            Ok(())
        },
    },
    // --will-retain and --insecure are switches that still take a (discarded) token
    Flag {
        short: None,
        long: Some("--will-retain"),
        value_name: Some("<any>"),
        arity: 1,
        scope: Scope::Common,
        help: "retain the will message",
        default: None,
        apply: |opts, _| {
            opts.will_retain = true;
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--insecure"),
        value_name: Some("<any>"),
        arity: 1,
        scope: Scope::Common,
        help: "skip TLS server certificate verification",
        default: None,
        apply: |opts, _| {
            opts.insecure = true;
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--capath"),
        value_name: Some("<dir>"),
        arity: 1,
        scope: Scope::Common,
        help: "directory of trusted CA certificates",
        default: None,
        apply: |opts, values| {
            opts.capath = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--cafile"),
        value_name: Some("<file>"),
        arity: 1,
        scope: Scope::Common,
        help: "file of trusted CA certificates",
        default: None,
        apply: |opts, values| {
            opts.cafile = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--cert"),
        value_name: Some("<file>"),
        arity: 1,
        scope: Scope::Common,
        help: "client certificate",
        default: None,
        apply: |opts, values| {
            opts.cert = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--key"),
        value_name: Some("<file>"),
        arity: 1,
        scope: Scope::Common,
        help: "client private key",
        default: None,
        apply: |opts, values| {
            opts.key = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--keypass"),
        value_name: Some("<password>"),
        arity: 1,
        scope: Scope::Common,
        help: "password for the client private key",
        default: None,
        apply: |opts, values| {
            opts.keypass = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--ciphers"),
        value_name: Some("<list>"),
        arity: 1,
        scope: Scope::Common,
        help: "allowed TLS cipher suites",
        default: None,
        apply: |opts, values| {
            opts.ciphers = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: Some("-V"),
        long: None,
        value_name: Some("<31|311|5>"),
        arity: 1,
        scope: Scope::Common,
        help: "MQTT protocol version",
        default: None,
        apply: |opts, values| {
            opts.mqtt_version = Some(choice::<MqttVersion>("-V", values[0])?);
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--trace"),
        value_name: Some("<error|protocol|min|on|max>"),
        arity: 1,
        scope: Scope::Common,
        help: "client library trace level",
        default: None,
        apply: |opts, values| {
            opts.trace_level = Some(choice::<TraceLevel>("--trace", values[0])?);
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--user-property"),
        value_name: Some("<name> <value>"),
        arity: 2,
        scope: Scope::Publisher,
        help: "MQTT V5 user property",
        default: None,
        apply: |opts, values| {
            opts.user_property = Some(UserProperty {
                name: String::from(values[0]),
                value: String::from(values[1]),
            });
            Ok(())
        },
    },
    Flag {
        short: None,
        long: Some("--message-expiry"),
        value_name: Some("<seconds>"),
        arity: 1,
        scope: Scope::Publisher,
        help: "MQTT V5 message expiry interval",
        default: None,
        apply: |opts, values| {
            opts.message_expiry = atoi(values[0]);
            Ok(())
        },
    },
    Flag {
        short: Some("-m"),
        long: Some("--message"),
        value_name: Some("<message>"),
        arity: 1,
        scope: Scope::Publisher,
        help: "message payload to publish",
        default: None,
        apply: |opts, values| {
            opts.stdin_lines = false;
            opts.message = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: Some("-f"),
        long: Some("--filename"),
        value_name: Some("<file>"),
        arity: 1,
        scope: Scope::Publisher,
        help: "publish the contents of a file",
        default: None,
        apply: |opts, values| {
            opts.stdin_lines = false;
            opts.filename = owned(values[0]);
            Ok(())
        },
    },
    Flag {
        short: Some("-n"),
        long: Some("--null-message"),
        value_name: None,
        arity: 0,
        scope: Scope::Publisher,
        help: "publish a zero-length message",
        default: None,
        apply: |opts, _| {
            opts.stdin_lines = false;
            opts.null_message = true;
            Ok(())
        },
    },
];
