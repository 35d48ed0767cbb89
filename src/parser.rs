use log::debug;

use crate::error::OptsError;
use crate::flags;
use crate::opts::PubSubOpts;

/// Parses `args` (including the program name at index 0) into `opts`.
///
/// `opts` must already hold the defaults for its role. A leading argument
/// that is not a flag is taken as the topic; after that every token must be
/// a flag legal for `opts.role`, followed by the number of values it takes.
/// On error `opts` is left exactly as it was.
pub fn parse_args<S: AsRef<str>>(args: &[S], opts: &mut PubSubOpts) -> Result<(), OptsError> {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    let mut staged = opts.clone();
    let mut count = 1;

    if let Some(first) = args.get(1) {
        if !first.starts_with('-') {
            staged.topic = Some(String::from(*first));
            count = 2;
        }
    }

    while count < args.len() {
        let token = args[count];
        let Some(flag) = flags::lookup(token, staged.role) else {
            eprintln!("Unknown option {}", token);
            return Err(OptsError::UnknownOption(String::from(token)));
        };

        let values = args
            .get(count + 1..count + 1 + flag.arity)
            .ok_or_else(|| OptsError::MissingValue {
                flag: String::from(token),
            })?;
        (flag.apply)(&mut staged, values)?;
        debug!("Accepted option {}", flag.name());

        count += 1 + flag.arity;
    }

    if staged.topic.is_none() {
        return Err(OptsError::MissingTopic);
    }

    *opts = staged;
    Ok(())
}
