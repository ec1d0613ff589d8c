use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.production)
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Load environment variables from the selected .env file.
    ///
    /// Returns the path that was loaded, or None when the file does not
    /// exist. A missing file is not an error since all variables have
    /// defaults. Values already present in the process environment take
    /// precedence over file values.
    pub fn load_env_file(&self) -> Option<PathBuf> {
        dotenv::from_filename(&self.env_file).ok()
    }
}
