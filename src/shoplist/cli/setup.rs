use clap::{CommandFactory, Parser, Subcommand};
use shoplist::filter::StatusFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shoplist", bin_name = "shoplist", version)]
#[command(about = "Interactive in-memory shopping list", long_about = None)]
pub struct Cli {
    /// Shop and category catalog (JSON)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read session commands from a file instead of stdin
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// One line of session input.
#[derive(Parser, Debug)]
#[command(
    name = "shoplist",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: Commands,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Draft,
    Product,
    Filter,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Draft => "New Product:",
            CommandGroup::Product => "Products:",
            CommandGroup::Filter => "Filters:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "name" | "shop" | "category" | "draft" | "add" => Some(CommandGroup::Draft),
            "toggle" | "delete" | "list" => Some(CommandGroup::Product),
            "filter" | "reset" => Some(CommandGroup::Filter),
            "shops" | "categories" | "help" | "quit" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Draft,
            CommandGroup::Product,
            CommandGroup::Filter,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the grouped help for session commands
pub fn get_grouped_help() -> String {
    let cmd = SessionLine::command();

    let mut output = String::new();
    output.push_str("Shopping list commands. Rows are selected by number (1, 2) or id prefix.\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", name, about));
            }
        }
    }

    output
}

/// Returns clap's help for one session command, or `None` if there is no such command
pub fn get_command_help(name: &str) -> Option<String> {
    let mut cmd = SessionLine::command();
    cmd.find_subcommand_mut(name)
        .map(|subcmd| subcmd.render_help().to_string())
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Draft(DraftCommands),

    #[command(flatten)]
    Product(ProductCommands),

    #[command(flatten)]
    Filter(FilterCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum DraftCommands {
    /// Set the name of the new product
    #[command(display_order = 1)]
    Name {
        /// Name words (joined with spaces; none clears the name)
        #[arg(num_args = 0..)]
        words: Vec<String>,
    },

    /// Select the shop of the new product
    #[command(display_order = 2)]
    Shop {
        /// One of the configured shops (none clears the selection)
        #[arg(num_args = 0..)]
        words: Vec<String>,
    },

    /// Select the category of the new product
    #[command(alias = "cat", display_order = 3)]
    Category {
        /// One of the configured categories (none clears the selection)
        #[arg(num_args = 0..)]
        words: Vec<String>,
    },

    /// Show the new product as entered so far
    #[command(display_order = 4)]
    Draft,

    /// Add the new product to the list
    #[command(alias = "a", display_order = 5)]
    Add {
        /// Shop for this product (overrides the draft)
        #[arg(short, long)]
        shop: Option<String>,

        /// Category for this product (overrides the draft)
        #[arg(short, long)]
        category: Option<String>,

        /// Name words (override the draft name)
        #[arg(num_args = 0..)]
        name: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// Mark products as bought, or back to not bought
    #[command(visible_alias = "t", alias = "buy", display_order = 10)]
    Toggle {
        /// Row numbers or id prefixes (e.g. 1 3 4f2a)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Delete products
    #[command(alias = "rm", display_order = 11)]
    Delete {
        /// Row numbers or id prefixes (e.g. 1 3 4f2a)
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Show the filtered list
    #[command(alias = "ls", display_order = 12)]
    List {
        /// Print visible products as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum FilterCommands {
    /// Change one filter
    #[command(alias = "f", display_order = 20)]
    Filter {
        #[command(subcommand)]
        target: FilterTarget,
    },

    /// Clear the name, shop and category filters
    #[command(display_order = 21)]
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum FilterTarget {
    /// Show products whose name contains this text
    Name {
        #[arg(num_args = 0..)]
        words: Vec<String>,
    },

    /// Show products from one shop ("any" or nothing for all)
    Shop {
        #[arg(num_args = 0..)]
        words: Vec<String>,
    },

    /// Show products of one category ("any" or nothing for all)
    #[command(alias = "cat")]
    Category {
        #[arg(num_args = 0..)]
        words: Vec<String>,
    },

    /// Show all, bought or not-bought products
    Status { status: StatusFilter },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// List the configured shops
    #[command(display_order = 30)]
    Shops,

    /// List the configured categories
    #[command(display_order = 31)]
    Categories,

    /// Print help for all commands or one command
    #[command(display_order = 32)]
    Help {
        /// Command to get help for
        command: Option<String>,
    },

    /// End the session
    #[command(alias = "exit", display_order = 33)]
    Quit,
}

/// Joins free-text words with single spaces. No words means no value.
pub fn join_words(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
