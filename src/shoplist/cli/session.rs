//! # Session Loop
//!
//! The interactive surface of the app. Each input line is one user event: it is split into
//! words, parsed with clap into a session command, dispatched to the API, and answered with
//! freshly rendered output. Nothing is processed concurrently; a line is fully handled before
//! the next one is read.
//!
//! Errors coming from the API (a rejected add, an unknown shop) are reported on the error
//! stream and the session carries on. Only I/O failures on the session's own streams end it.

use super::render::{render_catalog, render_draft, render_json, render_messages, render_view};
use super::setup::{
    get_command_help, get_grouped_help, join_words, Commands, DraftCommands, FilterCommands,
    FilterTarget, MiscCommands, ProductCommands, SessionLine,
};
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use shoplist::api::{CmdResult, ShoplistApi};
use shoplist::error::{Result, ShoplistError};
use shoplist::store::DataStore;
use std::io::{BufRead, Write};
use tracing::debug;

pub const PROMPT: &str = "shoplist> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<S: DataStore, O: Write, E: Write> {
    api: ShoplistApi<S>,
    out: O,
    err: E,
}

impl<S: DataStore, O: Write, E: Write> Session<S, O, E> {
    pub fn new(api: ShoplistApi<S>, out: O, err: E) -> Self {
        Self { api, out, err }
    }

    /// Reads lines until `quit` or end of input. The prompt is only shown to terminals.
    pub fn run<R: BufRead>(&mut self, mut input: R, interactive: bool) -> Result<()> {
        if interactive {
            writeln!(
                self.out,
                "{} (type 'help' for commands)",
                "Shopping List".bold()
            )?;
        }

        loop {
            if interactive {
                write!(self.out, "{}", PROMPT)?;
                self.out.flush()?;
            }

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }

        self.out.flush()?;
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let words = match split_line(line) {
            Ok(words) => words,
            Err(msg) => {
                self.report(&msg)?;
                return Ok(Flow::Continue);
            }
        };

        let command = match SessionLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                self.report_parse_error(&e)?;
                return Ok(Flow::Continue);
            }
        };

        debug!(?command, "dispatching");
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: Commands) -> Result<Flow> {
        match command {
            Commands::Draft(cmd) => match cmd {
                DraftCommands::Name { words } => {
                    self.api.set_draft_name(&words.join(" "));
                    self.show_draft()?;
                }
                DraftCommands::Shop { words } => {
                    let shop = join_words(&words);
                    let selected = self.api.select_draft_shop(shop.as_deref());
                    if self.attempt(selected)?.is_some() {
                        self.show_draft()?;
                    }
                }
                DraftCommands::Category { words } => {
                    let category = join_words(&words);
                    let selected = self.api.select_draft_category(category.as_deref());
                    if self.attempt(selected)?.is_some() {
                        self.show_draft()?;
                    }
                }
                DraftCommands::Draft => self.show_draft()?,
                DraftCommands::Add {
                    shop,
                    category,
                    name,
                } => {
                    let name = join_words(&name);
                    let added = self.api.add_product(
                        name.as_deref(),
                        shop.as_deref(),
                        category.as_deref(),
                    );
                    self.show_outcome(added)?;
                }
            },
            Commands::Product(cmd) => match cmd {
                ProductCommands::Toggle { selectors } => {
                    let toggled = self.api.toggle_products(&selectors);
                    self.show_outcome(toggled)?;
                }
                ProductCommands::Delete { selectors } => {
                    let deleted = self.api.delete_products(&selectors);
                    self.show_outcome(deleted)?;
                }
                ProductCommands::List { json } => {
                    if json {
                        let view = self.api.view();
                        if let Some(view) = self.attempt(view)? {
                            let rendered = render_json(&view.listed_products);
                            if let Some(text) = self.attempt(rendered)? {
                                self.out.write_all(text.as_bytes())?;
                            }
                        }
                    } else {
                        self.show_view()?;
                    }
                }
            },
            Commands::Filter(cmd) => match cmd {
                FilterCommands::Filter { target } => {
                    let changed = match target {
                        FilterTarget::Name { words } => {
                            self.api.set_name_filter(&words.join(" "));
                            Ok(())
                        }
                        FilterTarget::Shop { words } => {
                            self.api.set_shop_filter(join_words(&words).as_deref())
                        }
                        FilterTarget::Category { words } => {
                            self.api.set_category_filter(join_words(&words).as_deref())
                        }
                        FilterTarget::Status { status } => {
                            self.api.set_status_filter(status);
                            Ok(())
                        }
                    };
                    if self.attempt(changed)?.is_some() {
                        self.show_view()?;
                    }
                }
                FilterCommands::Reset => {
                    let result = self.api.reset_filters();
                    self.show_outcome(Ok(result))?;
                }
            },
            Commands::Misc(cmd) => match cmd {
                MiscCommands::Shops => {
                    let text = render_catalog("Shops", &self.api.config().shops);
                    self.out.write_all(text.as_bytes())?;
                }
                MiscCommands::Categories => {
                    let text = render_catalog("Categories", &self.api.config().categories);
                    self.out.write_all(text.as_bytes())?;
                }
                MiscCommands::Help { command } => match command {
                    None => self.out.write_all(get_grouped_help().as_bytes())?,
                    Some(name) => match get_command_help(&name) {
                        Some(help) => self.out.write_all(help.as_bytes())?,
                        None => self.report(&format!("Unknown command: {}", name))?,
                    },
                },
                MiscCommands::Quit => return Ok(Flow::Quit),
            },
        }

        Ok(Flow::Continue)
    }

    /// Messages of a state change followed by the re-derived view.
    fn show_outcome(&mut self, outcome: Result<CmdResult>) -> Result<()> {
        if let Some(result) = self.attempt(outcome)? {
            let text = render_messages(&result.messages);
            self.out.write_all(text.as_bytes())?;
            self.show_view()?;
        }
        Ok(())
    }

    fn show_view(&mut self) -> Result<()> {
        let view = self.api.view();
        if let Some(view) = self.attempt(view)? {
            let text = render_view(&view.listed_products, self.api.criteria(), view.all_bought);
            self.out.write_all(text.as_bytes())?;
        }
        Ok(())
    }

    fn show_draft(&mut self) -> Result<()> {
        let text = render_draft(self.api.draft());
        self.out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Reports an API error and turns it into `None`; I/O errors still propagate.
    fn attempt<T>(&mut self, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(ShoplistError::Io(e)) => Err(ShoplistError::Io(e)),
            Err(e) => {
                debug!(error = %e, "command rejected");
                self.report(&e.to_string())?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, message: &str) -> Result<()> {
        writeln!(self.err, "{}", message.red())?;
        Ok(())
    }

    fn report_parse_error(&mut self, e: &clap::Error) -> Result<()> {
        if matches!(
            e.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        ) {
            self.out.write_all(e.to_string().as_bytes())?;
            return Ok(());
        }

        let rendered = e.to_string();
        let first = rendered
            .lines()
            .next()
            .unwrap_or_default()
            .trim_start_matches("error: ");
        self.report(&format!("{} (type 'help' for commands)", first))
    }
}

/// Splits a line into words. Single or double quotes group words containing spaces.
pub fn split_line(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unterminated {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoplist::config::ShoplistConfig;
    use shoplist::store::memory::InMemoryStore;

    type TestSession = Session<InMemoryStore, Vec<u8>, Vec<u8>>;

    fn session() -> TestSession {
        colored::control::set_override(false);
        console::set_colors_enabled(false);
        let api = ShoplistApi::new(InMemoryStore::new(), ShoplistConfig::default());
        Session::new(api, Vec::new(), Vec::new())
    }

    fn feed(session: &mut TestSession, lines: &[&str]) {
        for line in lines {
            session.handle_line(line).unwrap();
        }
    }

    fn take_out(session: &mut TestSession) -> String {
        String::from_utf8(std::mem::take(&mut session.out)).unwrap()
    }

    fn take_err(session: &mut TestSession) -> String {
        String::from_utf8(std::mem::take(&mut session.err)).unwrap()
    }

    #[test]
    fn splits_words_and_quotes() {
        assert_eq!(
            split_line(r#"add "Whole milk" -s 'Albert Heijn'"#).unwrap(),
            vec!["add", "Whole milk", "-s", "Albert Heijn"]
        );
        assert_eq!(split_line("  toggle   1  2 ").unwrap(), vec!["toggle", "1", "2"]);
        assert_eq!(split_line(r#"name """#).unwrap(), vec!["name", ""]);
        assert!(split_line(r#"name "open"#).is_err());
    }

    #[test]
    fn draft_then_add_renders_the_list() {
        let mut s = session();
        feed(&mut s, &["name Milk", "shop lidl", "category fruit", "add"]);
        let out = take_out(&mut s);
        assert!(out.contains("New product name: Milk  shop: Lidl  category: Fruit"));
        assert!(out.contains("Added Milk (Lidl, Fruit)"));
        assert!(out.contains("[ ]"));
        assert!(s.api.draft().is_empty());
    }

    #[test]
    fn incomplete_add_is_reported_and_keeps_draft() {
        let mut s = session();
        feed(&mut s, &["name Bread", "add"]);
        let err = take_err(&mut s);
        assert!(err.contains("Please fill in all fields!"));
        assert_eq!(s.api.draft().name, "Bread");
        assert!(!s.api.all_bought().unwrap());
    }

    #[test]
    fn banner_follows_bought_state() {
        let mut s = session();
        feed(&mut s, &["add Milk -s Lidl -c Fruit"]);
        take_out(&mut s);

        feed(&mut s, &["toggle 1"]);
        assert!(take_out(&mut s).contains("Shopping Completed!"));

        feed(&mut s, &["toggle 1"]);
        assert!(!take_out(&mut s).contains("Shopping Completed!"));
    }

    #[test]
    fn filters_and_reset() {
        let mut s = session();
        feed(
            &mut s,
            &[
                "add Milk -s Lidl -c Fruit",
                "add Bread -s Jumbo -c Bakery",
                "filter status bought",
            ],
        );
        take_out(&mut s);

        feed(&mut s, &["filter name br"]);
        let out = take_out(&mut s);
        assert!(out.contains("No products found."));
        assert!(out.contains("Filters: name contains \"br\", status = bought"));

        feed(&mut s, &["toggle 2", "reset"]);
        let out = take_out(&mut s);
        assert!(out.contains("Filters reset"));
        assert!(out.contains("Filters: status = bought"));
    }

    #[test]
    fn unknown_input_does_not_end_the_session() {
        let mut s = session();
        assert_eq!(s.handle_line("fly away").unwrap(), Flow::Continue);
        assert!(take_err(&mut s).contains("type 'help' for commands"));

        assert_eq!(s.handle_line("shop Aldi").unwrap(), Flow::Continue);
        assert!(take_err(&mut s).contains("Unknown shop: Aldi"));

        assert_eq!(s.handle_line("toggle milk").unwrap(), Flow::Continue);
        assert!(take_err(&mut s).contains("Invalid product selector"));
    }

    #[test]
    fn quit_and_comments() {
        let mut s = session();
        assert_eq!(s.handle_line("# just a note").unwrap(), Flow::Continue);
        assert_eq!(s.handle_line("").unwrap(), Flow::Continue);
        assert_eq!(s.handle_line("quit").unwrap(), Flow::Quit);
        assert_eq!(s.handle_line("exit").unwrap(), Flow::Quit);
    }

    #[test]
    fn run_stops_at_quit() {
        let mut s = session();
        let input = "add Milk -s Lidl -c Fruit\nquit\nadd Bread -s Jumbo -c Bakery\n";
        s.run(input.as_bytes(), false).unwrap();
        let out = take_out(&mut s);
        assert!(out.contains("Milk"));
        assert!(!out.contains("Bread"));
        assert!(!out.contains(PROMPT));
    }

    #[test]
    fn list_json() {
        let mut s = session();
        feed(&mut s, &["add Milk -s Lidl -c Fruit"]);
        take_out(&mut s);
        feed(&mut s, &["list --json"]);
        let out = take_out(&mut s);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["name"], "Milk");
        assert_eq!(parsed[0]["is_bought"], false);
    }

    #[test]
    fn help_output() {
        let mut s = session();
        feed(&mut s, &["help"]);
        assert!(take_out(&mut s).contains("Filters:"));
        feed(&mut s, &["help add"]);
        assert!(take_out(&mut s).contains("--shop"));
        feed(&mut s, &["help nothing"]);
        assert!(take_err(&mut s).contains("Unknown command: nothing"));
    }
}
