use std::io::{self, Write};

use crate::flags::FLAGS;
use crate::opts::PubSubOpts;

/// Writes the usage summary for `opts.role`, showing the current value of
/// each defaulted option.
pub fn write_usage<W: Write>(out: &mut W, opts: &PubSubOpts, version: &str) -> io::Result<()> {
    writeln!(out, "MQTT {}", opts.role.name())?;
    writeln!(out, "MQTT client library version {}", version)?;
    writeln!(
        out,
        "Usage: {} <topicname> <options>, where options are:",
        opts.role.program()
    )?;

    for flag in FLAGS.iter().filter(|flag| flag.scope.allows(opts.role)) {
        let mut line = String::from("  ");
        match (flag.short, flag.long) {
            (Some(short), Some(long)) => line.push_str(&format!("{} ({})", short, long)),
            (Some(name), None) | (None, Some(name)) => line.push_str(name),
            (None, None) => continue,
        }
        if let Some(value_name) = flag.value_name {
            line.push(' ');
            line.push_str(value_name);
        }
        line.push(' ');
        line.push_str(flag.help);
        if let Some(default) = flag.default {
            line.push_str(&format!(" (default is {})", default(opts)));
        }
        writeln!(out, "{}", line)?;
    }

    out.flush()
}

/// Prints usage to stdout and exits with a failure status.
pub fn usage(opts: &PubSubOpts, version: &str) -> ! {
    // Nothing useful can be done if stdout is gone; exit regardless
    let _ = write_usage(&mut io::stdout().lock(), opts, version);
    std::process::exit(1)
}
