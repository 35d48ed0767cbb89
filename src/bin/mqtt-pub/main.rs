use log::{debug, info};
use mqtt_pubsub_opts::logging::init_logging;
use mqtt_pubsub_opts::{LIBRARY_VERSION, MessageSource, PubSubOpts, parse_args, usage};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut opts = PubSubOpts::publisher();
    if parse_args(&args, &mut opts).is_err() {
        usage(&opts, LIBRARY_VERSION);
    }

    init_logging(&opts);

    let summary = serde_json::to_string_pretty(&opts)?;
    debug!("Started; opts: {}", summary);

    match opts.message_source() {
        MessageSource::Null => info!("Will publish a zero-length message"),
        MessageSource::Inline(message) => info!("Will publish {} bytes", message.len()),
        MessageSource::File(path) => info!("Will publish the contents of \"{}\"", path),
        MessageSource::StdinLines => info!("Will publish each line read from stdin"),
        MessageSource::Stdin => info!("Will publish all of stdin as one message"),
    }

    println!("{}", summary);

    Ok(())
}
