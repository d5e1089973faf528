use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Inspect the storefront category catalog, translations and RTL styling")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.storefront)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query the category hierarchy
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Resolve a translation through the locale fallback chain
    Resolve {
        /// Requested locale (e.g., he, he-IL, fr)
        locale: String,

        /// Translations as locale=text, in priority order for the last resort
        #[arg(required = true, value_name = "LOCALE=TEXT")]
        entries: Vec<String>,

        /// Locale tried after the requested language (default: config locale.fallback)
        #[arg(long)]
        fallback: Option<String>,
    },

    /// Map physical CSS to logical CSS
    Style {
        #[command(subcommand)]
        action: StyleAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum CategoryAction {
    /// List every category in tree order
    List {
        /// Only categories reachable through active ancestors
        #[arg(long)]
        active: bool,

        /// Locale for names (default: config locale.default)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Print the hierarchy as a tree
    Tree {
        /// Locale for names (default: config locale.default)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Show a single category by slug
    Show {
        /// Category slug (e.g., bags-packs)
        slug: String,

        /// Locale for names (default: config locale.default)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// List the direct children of a category
    Children {
        /// Parent category id
        id: String,

        /// Only active children
        #[arg(long)]
        active: bool,

        /// Locale for names (default: config locale.default)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Print the root-to-category path
    Breadcrumbs {
        /// Category id (e.g., 1-1-1)
        id: String,

        /// Locale for names (default: config locale.default)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Validate a catalog file (default: the configured catalog)
    Validate {
        /// Catalog file to check
        file: Option<PathBuf>,
    },

    /// Write the loaded hierarchy to a catalog file
    Export {
        /// Destination file
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum StyleAction {
    /// Logical name of a physical property (e.g., marginLeft)
    Property {
        /// Physical property name
        name: String,
    },

    /// Logical value of a side-valued property (e.g., textAlign left)
    Value {
        /// Property name
        property: String,

        /// Physical value
        value: String,
    },

    /// Writing direction and physical sides for a locale
    Direction {
        /// Locale (e.g., he, en-US)
        locale: String,
    },

    /// Rewrite a list of property:value declarations for a locale
    Map {
        /// Locale whose direction applies
        #[arg(short, long)]
        locale: String,

        /// Declarations as property:value (e.g., marginLeft:8px)
        #[arg(required = true, value_name = "PROPERTY:VALUE")]
        declarations: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., locale.default)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., locale.default)
        key: String,

        /// Value to set (e.g., "he" or "categories.toml")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Create config file with a commented template
    Init,
}
