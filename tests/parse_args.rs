use mqtt_pubsub_opts::values::{MqttVersion, Qos, TraceLevel};
use mqtt_pubsub_opts::{OptsError, PubSubOpts, UserProperty, parse_args};

fn parse_pub(args: &[&str]) -> (Result<(), OptsError>, PubSubOpts) {
    let mut opts = PubSubOpts::publisher();
    let result = parse_args(args, &mut opts);
    (result, opts)
}

fn parse_sub(args: &[&str]) -> (Result<(), OptsError>, PubSubOpts) {
    let mut opts = PubSubOpts::subscriber();
    let result = parse_args(args, &mut opts);
    (result, opts)
}

#[test]
fn positional_topic_with_qos_and_retained() {
    let (result, opts) = parse_pub(&["pub_client", "some/topic", "--qos", "2", "--retained"]);
    assert_eq!(result, Ok(()));
    assert_eq!(opts.topic.as_deref(), Some("some/topic"));
    assert_eq!(opts.qos, Qos::ExactlyOnce);
    assert!(opts.retained);
}

#[test]
fn every_common_flag_is_applied() {
    let (result, opts) = parse_sub(&[
        "sub_client",
        "-t",
        "a/b",
        "-h",
        "broker.local",
        "-p",
        "8883",
        "-c",
        "ssl://broker.local:8883",
        "-q",
        "1",
        "-i",
        "me",
        "-u",
        "user",
        "-P",
        "pass",
        "-k",
        "60",
        "-v",
        "--delimiter",
        ";",
        "--maxdatalen",
        "2048",
        "--will-topic",
        "gone",
        "--will-payload",
        "bye",
        "--will-qos",
        "7",
        "--will-retain",
        "yes",
        "--insecure",
        "yes",
        "--capath",
        "/etc/ssl/certs",
        "--cafile",
        "ca.pem",
        "--cert",
        "client.pem",
        "--key",
        "client.key",
        "--keypass",
        "kp",
        "--ciphers",
        "HIGH",
        "-V",
        "mqttv5",
        "--trace",
        "protocol",
        "-R",
    ]);
    assert_eq!(result, Ok(()));
    assert_eq!(opts.topic.as_deref(), Some("a/b"));
    assert_eq!(opts.host, "broker.local");
    assert_eq!(opts.port, "8883");
    assert_eq!(opts.connection.as_deref(), Some("ssl://broker.local:8883"));
    assert_eq!(opts.qos, Qos::AtLeastOnce);
    assert_eq!(opts.client_id, "me");
    assert_eq!(opts.username.as_deref(), Some("user"));
    assert_eq!(opts.password.as_deref(), Some("pass"));
    assert_eq!(opts.keepalive, 60);
    assert!(opts.verbose);
    assert_eq!(opts.delimiter, ";");
    assert_eq!(opts.max_data_len, 2048);
    assert_eq!(opts.will_topic.as_deref(), Some("gone"));
    assert_eq!(opts.will_payload.as_deref(), Some("bye"));
    assert_eq!(opts.will_qos, 7);
    assert!(opts.will_retain);
    assert!(opts.insecure);
    assert_eq!(opts.capath.as_deref(), Some("/etc/ssl/certs"));
    assert_eq!(opts.cafile.as_deref(), Some("ca.pem"));
    assert_eq!(opts.cert.as_deref(), Some("client.pem"));
    assert_eq!(opts.key.as_deref(), Some("client.key"));
    assert_eq!(opts.keypass.as_deref(), Some("kp"));
    assert_eq!(opts.ciphers.as_deref(), Some("HIGH"));
    assert_eq!(opts.mqtt_version, Some(MqttVersion::V5));
    assert_eq!(opts.trace_level, Some(TraceLevel::Protocol));
    assert!(opts.retained);
}

#[test]
fn publisher_message_flags() {
    let (result, opts) = parse_pub(&[
        "pub",
        "t",
        "-m",
        "hello",
        "--message-expiry",
        "30",
        "--user-property",
        "origin",
        "sensor-1",
    ]);
    assert_eq!(result, Ok(()));
    assert_eq!(opts.message.as_deref(), Some("hello"));
    assert!(!opts.stdin_lines);
    assert_eq!(opts.message_expiry, 30);
    assert_eq!(
        opts.user_property,
        Some(UserProperty {
            name: String::from("origin"),
            value: String::from("sensor-1"),
        })
    );

    let (result, opts) = parse_pub(&["pub", "t", "--filename", "data.bin"]);
    assert_eq!(result, Ok(()));
    assert_eq!(opts.filename.as_deref(), Some("data.bin"));
    assert_eq!(opts.message, None);
    assert!(!opts.stdin_lines);

    let (result, opts) = parse_pub(&["pub", "t", "-n"]);
    assert_eq!(result, Ok(()));
    assert!(opts.null_message);
    assert!(!opts.stdin_lines);
}

#[test]
fn unset_fields_keep_caller_defaults() {
    let mut opts = PubSubOpts::publisher();
    opts.host = String::from("preset.example");
    opts.keepalive = 99;
    parse_args(&["pub", "-t", "x"], &mut opts).expect("parses");
    assert_eq!(opts.host, "preset.example");
    assert_eq!(opts.keepalive, 99);
    assert_eq!(opts.client_id, "paho-c-pub");
}

#[test]
fn later_flags_override_earlier_ones() {
    let (result, opts) = parse_pub(&["pub", "first", "-t", "second", "-q", "1", "-q", "0"]);
    assert_eq!(result, Ok(()));
    assert_eq!(opts.topic.as_deref(), Some("second"));
    assert_eq!(opts.qos, Qos::AtMostOnce);
}

#[test]
fn numeric_flags_do_not_validate_range() {
    let (result, opts) = parse_pub(&["pub", "t", "-k", "-5", "--maxdatalen", "12abc"]);
    assert_eq!(result, Ok(()));
    assert_eq!(opts.keepalive, -5);
    assert_eq!(opts.max_data_len, 12);

    let (result, opts) = parse_pub(&["pub", "t", "--will-qos", "nope"]);
    assert_eq!(result, Ok(()));
    assert_eq!(opts.will_qos, 0);
}

#[test]
fn missing_topic_fails() {
    let (result, _) = parse_pub(&["pub", "-q", "1", "--retained", "-h", "broker"]);
    assert_eq!(result, Err(OptsError::MissingTopic));
    assert_eq!(OptsError::MissingTopic.exit_code(), 1);
}

#[test]
fn qos_outside_closed_set_fails() {
    let (result, _) = parse_pub(&["pub", "t", "--qos", "3"]);
    assert_eq!(
        result,
        Err(OptsError::InvalidValue {
            flag: String::from("--qos"),
            value: String::from("3"),
        })
    );

    let (result, _) = parse_pub(&["pub", "t", "--trace", "verbose"]);
    assert!(matches!(result, Err(OptsError::InvalidValue { .. })));
}

#[test]
fn trailing_flag_without_value_fails() {
    let (result, _) = parse_pub(&["pub", "t", "--host"]);
    assert_eq!(
        result,
        Err(OptsError::MissingValue {
            flag: String::from("--host"),
        })
    );

    // Boolean-looking flags that still take a token
    let (result, _) = parse_sub(&["sub", "t", "--insecure"]);
    assert!(matches!(result, Err(OptsError::MissingValue { .. })));
    let (result, _) = parse_sub(&["sub", "t", "--will-retain"]);
    assert!(matches!(result, Err(OptsError::MissingValue { .. })));
}

#[test]
fn publisher_only_flag_is_unknown_to_subscriber() {
    let (result, _) = parse_sub(&["sub", "t", "--message", "foo"]);
    assert_eq!(
        result,
        Err(OptsError::UnknownOption(String::from("--message")))
    );

    let (result, _) = parse_pub(&["pub", "t", "-R"]);
    assert_eq!(result, Err(OptsError::UnknownOption(String::from("-R"))));
}

#[test]
fn user_property_needs_two_values() {
    let (result, _) = parse_pub(&["pub", "t", "--user-property", "name"]);
    assert_eq!(
        result,
        Err(OptsError::MissingValue {
            flag: String::from("--user-property"),
        })
    );
}

#[test]
fn failed_parse_leaves_options_untouched() {
    let mut opts = PubSubOpts::publisher();
    let before = opts.clone();
    let result = parse_args(&["pub", "t", "-h", "elsewhere", "--bogus"], &mut opts);
    assert_eq!(result, Err(OptsError::UnknownOption(String::from("--bogus"))));
    assert_eq!(opts, before);
}

#[test]
fn owned_arguments_are_accepted() {
    let args: Vec<String> = ["pub", "t", "-q", "2"].iter().map(|s| s.to_string()).collect();
    let mut opts = PubSubOpts::publisher();
    parse_args(&args, &mut opts).expect("parses");
    assert_eq!(opts.qos, Qos::ExactlyOnce);
}
