use log::debug;
use mqtt_pubsub_opts::logging::init_logging;
use mqtt_pubsub_opts::{LIBRARY_VERSION, PubSubOpts, parse_args, usage};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let mut opts = PubSubOpts::subscriber();
    if parse_args(&args, &mut opts).is_err() {
        usage(&opts, LIBRARY_VERSION);
    }

    init_logging(&opts);

    let summary = serde_json::to_string_pretty(&opts)?;
    debug!("Started; opts: {}", summary);

    println!("{}", summary);

    Ok(())
}
