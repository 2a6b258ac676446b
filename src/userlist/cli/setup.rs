use clap::Parser;
use std::ffi::OsString;
use userlist::api::{Arguments, ARG_FILE_NAME, ARG_ID, ARG_ITEM, ARG_OPERATION};

/// Long flags that may also be spelled with a single dash.
const LONG_FLAGS: &[&str] = &[
    ARG_OPERATION,
    ARG_ITEM,
    ARG_ID,
    ARG_FILE_NAME,
    "verbose",
    "help",
    "version",
];

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "userlist", bin_name = "userlist", version = get_version())]
#[command(about = "Manage user records stored as a JSON array in a file", long_about = None)]
pub struct Cli {
    /// allowed values: add, list, findById, remove
    #[arg(long = "operation", value_name = "OPERATION", allow_hyphen_values = true)]
    pub operation: Option<String>,

    /// value json format: {"id":"value","email":"value","age":age}
    #[arg(long = "item", value_name = "JSON", allow_hyphen_values = true)]
    pub item: Option<String>,

    /// id of the record, used by findById and remove
    #[arg(long = "id", value_name = "ID", allow_hyphen_values = true)]
    pub id: Option<String>,

    /// file whose content is a json array: [{"id":"value","email":"value","age":value}, ...]
    #[arg(long = "fileName", value_name = "PATH", allow_hyphen_values = true)]
    pub file_name: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Fold the parsed flags into the neutral argument map.
    pub fn to_arguments(&self) -> Arguments {
        let mut args = Arguments::new();
        let pairs = [
            (ARG_OPERATION, &self.operation),
            (ARG_ITEM, &self.item),
            (ARG_ID, &self.id),
            (ARG_FILE_NAME, &self.file_name),
        ];
        for (key, value) in pairs {
            if let Some(value) = value {
                args.insert(key, value.as_str());
            }
        }
        args
    }
}

/// Rewrite `-name` / `-name=value` into `--name` / `--name=value` for known
/// long flags. Everything after a bare `--` is left alone, as are short flags
/// and values such as `-5`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut expects_value = false;

    for (position, arg) in args.into_iter().enumerate() {
        if position == 0 || passthrough || expects_value {
            expects_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let normalized = match text.strip_prefix('-') {
            Some(rest) if !rest.starts_with('-') => {
                let name = rest.split('=').next().unwrap_or(rest);
                if LONG_FLAGS.contains(&name) {
                    expects_value = !rest.contains('=') && takes_value(name);
                    Some(format!("--{}", rest))
                } else {
                    None
                }
            }
            Some(rest) => {
                let name = rest[1..].split('=').next().unwrap_or("");
                expects_value = !rest.contains('=') && takes_value(name);
                None
            }
            None => None,
        };

        out.push(normalized.map(OsString::from).unwrap_or(arg));
    }

    out
}

fn takes_value(name: &str) -> bool {
    matches!(name, ARG_OPERATION | ARG_ITEM | ARG_ID | ARG_FILE_NAME)
}
