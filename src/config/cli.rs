use crate::domain::model::GraduateLevel;
use clap::{Parser, Subcommand};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, Parser)]
#[command(name = "enroll-assist")]
#[command(about = "Course registry service and client")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP service
    Serve {
        /// Path to TOML configuration file
        #[arg(short, long)]
        config: Option<String>,

        /// Override server.bind_address from the config
        #[arg(long)]
        bind: Option<String>,
    },

    /// List all courses
    List {
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server: String,
    },

    /// Fetch one course by id
    Get {
        id: u64,

        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server: String,
    },

    /// Register a new course
    Add {
        #[arg(long)]
        number: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        credits: i64,

        #[arg(long, default_value = "Undergraduate")]
        level: GraduateLevel,

        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server: String,
    },
}
