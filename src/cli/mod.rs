use clap::Parser;

use crate::demo::Scenario;

#[derive(Parser, Debug)]
#[command(name = "generic_list")]
#[command(version, about = "Walks a DynamicArray through insert, remove and search", long_about = None)]
pub struct Cli {
    /// Items pushed before anything else happens
    #[arg(value_name = "ITEMS", default_values = ["aaa", "bbb", "ccc", "ddd"])]
    pub items: Vec<String>,

    /// Value inserted into the middle of the list
    #[arg(long, default_value = "qqq")]
    pub insert: String,

    /// Index the inserted value goes to
    #[arg(long, default_value_t = 2)]
    pub at: usize,

    /// Value removed after the insertion
    #[arg(long, default_value = "ccc")]
    pub remove: String,

    /// Value appended at the end and then searched for from the back
    #[arg(long, default_value = "aaa")]
    pub append: String,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn scenario(&self) -> Scenario {
        Scenario {
            items: self.items.clone(),
            insert: self.insert.clone(),
            at: self.at,
            remove: self.remove.clone(),
            append: self.append.clone(),
        }
    }
}
