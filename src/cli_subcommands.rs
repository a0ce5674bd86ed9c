use std::path::PathBuf;

use clap::Subcommand;

/// Brands and models share the same `{id, name}` surface.
#[derive(Subcommand)]
pub(crate) enum NamedCommands {
    /// List entries
    List {
        /// Case-insensitive substring filter
        #[arg(long)]
        query: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Create an entry
    Add {
        name: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete an entry by id
    Delete {
        id: i64,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum CarCommands {
    /// List car listings
    List {
        /// Filter on brand, model and year
        #[arg(long)]
        query: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a car listing with a photo
    Add {
        #[arg(long)]
        year: String,
        /// Brand id
        #[arg(long)]
        brand: i64,
        /// Model id
        #[arg(long)]
        model: i64,
        #[arg(long)]
        description: String,
        /// Image file to upload
        #[arg(long)]
        image: PathBuf,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one car listing with its image URL
    Show {
        id: i64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a car listing
    Delete {
        id: i64,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}
