use std::ffi::OsString;

use clap::Parser;

use crate::{config::Config, indexer::IndexerAuth};

const LONG_FLAGS: [&str; 5] = ["url", "token", "header", "asset", "top"];

#[derive(Parser, Debug)]
#[clap(author, version, about = "List the largest holders of an asset", long_about = None)]
pub struct Cli {
    /// Indexer url.
    #[clap(long, allow_hyphen_values = true)]
    pub url: Option<String>,
    /// Indexer access token.
    #[clap(long, allow_hyphen_values = true)]
    pub token: Option<String>,
    /// Indexer authentication header, sends the token under this header instead.
    #[clap(long, allow_hyphen_values = true)]
    pub header: Option<String>,
    /// Asset index to list.
    #[clap(long, default_value_t = 0)]
    pub asset: u64,
    /// Maximum number of accounts to list, 0 lists all.
    #[clap(long, default_value_t = 0, allow_negative_numbers = true)]
    pub top: i64,
}

struct KnownFlag {
    single_dash: bool,
    inline_value: bool,
}

fn parse_known_flag(arg: &str) -> Option<KnownFlag> {
    let (single_dash, rest) = match arg.strip_prefix("--") {
        Some(rest) => (false, rest),
        None => (true, arg.strip_prefix('-')?),
    };

    let (name, inline_value) = match rest.split_once('=') {
        Some((name, _)) => (name, true),
        None => (rest, false),
    };

    LONG_FLAGS.contains(&name).then_some(KnownFlag {
        single_dash,
        inline_value,
    })
}

/// Rewrites single-dash long flags such as `-url` into `--url` so both spellings parse. The
/// argument after a flag without `=value` is its value and is passed through untouched, even when
/// it starts with a dash.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut value_pending = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if std::mem::take(&mut value_pending) {
                return arg;
            }

            let Some(flag) = arg.to_str().and_then(parse_known_flag) else {
                return arg;
            };

            value_pending = !flag.inline_value;

            if flag.single_dash {
                let mut long = OsString::from("-");
                long.push(arg);
                long
            } else {
                arg
            }
        })
        .collect()
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let token = cli.token.unwrap_or_default();
        let header = cli.header.unwrap_or_default();

        Config {
            indexer_url: cli.url.unwrap_or_default(),
            auth: IndexerAuth::from_flags(&token, &header),
            asset_id: cli.asset,
            top: cli.top,
        }
    }
}
