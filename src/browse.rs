use crate::cli::Args;
use crate::navigation::{NavigationEntry, NavigationStack};
use crate::render::{render_country, render_not_found};
use crate::services::detail::{CountryDetail, CountryDetailController};
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Open(usize),
    Back,
    Quit,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseOutcome {
    /// The current screen changed and must be shown again.
    Navigated,
    AtFirstCountry,
    Quit,
    Invalid,
}

/// Parses one line of input at the browse prompt. Border numbers are 1-based.
pub fn parse_command(input: &str, border_count: usize) -> BrowseCommand {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "b" | "back" => BrowseCommand::Back,
        "q" | "quit" | "" => BrowseCommand::Quit,
        _ => match input.parse::<usize>() {
            Ok(n) if n >= 1 && n <= border_count => BrowseCommand::Open(n - 1),
            _ => BrowseCommand::Invalid,
        },
    }
}

/// Walks between a country and its neighbours, remembering every record it
/// loads so going back does not fetch it again.
pub struct BrowseSession<'a> {
    controller: &'a CountryDetailController,
    navigation: NavigationStack,
    borders: Vec<String>,
}

impl<'a> BrowseSession<'a> {
    pub fn new(controller: &'a CountryDetailController, country: &str) -> Self {
        let mut navigation = NavigationStack::new();
        navigation.push(NavigationEntry::new(country));
        Self {
            controller,
            navigation,
            borders: Vec::new(),
        }
    }

    /// Shows the current screen, reusing its stored record when there is one.
    pub async fn open_current(&mut self) -> Option<CountryDetail> {
        let entry = self.navigation.current().cloned()?;

        let (detail, record) = self
            .controller
            .show_with_record(&entry.country, entry.state)
            .await;

        if let Some(record) = record {
            self.navigation.remember_state(record);
        }
        self.borders = match &detail {
            CountryDetail::Loaded(view) => view.borders.clone(),
            _ => Vec::new(),
        };

        Some(detail)
    }

    pub fn apply(&mut self, command: BrowseCommand) -> BrowseOutcome {
        match command {
            BrowseCommand::Open(index) => match self.borders.get(index) {
                Some(border) => {
                    self.navigation.push(NavigationEntry::new(border.clone()));
                    BrowseOutcome::Navigated
                }
                None => BrowseOutcome::Invalid,
            },
            BrowseCommand::Back => match self.navigation.back() {
                Some(_) => BrowseOutcome::Navigated,
                None => BrowseOutcome::AtFirstCountry,
            },
            BrowseCommand::Quit => BrowseOutcome::Quit,
            BrowseCommand::Invalid => BrowseOutcome::Invalid,
        }
    }

    pub fn borders(&self) -> &[String] {
        &self.borders
    }

    pub fn can_go_back(&self) -> bool {
        self.navigation.can_go_back()
    }
}

/// Shows `country`, then lets the user walk to neighbouring countries and
/// back until they quit. In non-interactive mode the first screen is printed
/// and the function returns.
pub async fn browse(
    controller: &CountryDetailController,
    country: &str,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = BrowseSession::new(controller, country);

    while let Some(detail) = session.open_current().await {
        match &detail {
            CountryDetail::Loaded(view) => println!("{}", render_country(view)),
            _ => println!("{}", render_not_found()),
        }

        if !args.is_interactive_mode() {
            return Ok(());
        }

        loop {
            for (i, border) in session.borders().iter().enumerate() {
                println!("  [{}] {}", i + 1, border);
            }
            if session.can_go_back() {
                print!("Open a border country by number, 'b' to go back, 'q' to quit: ");
            } else {
                print!("Open a border country by number, 'q' to quit: ");
            }
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                return Ok(());
            }

            let command = parse_command(&input, session.borders().len());
            match session.apply(command) {
                BrowseOutcome::Navigated => break,
                BrowseOutcome::AtFirstCountry => println!("Already at the first country."),
                BrowseOutcome::Quit => return Ok(()),
                BrowseOutcome::Invalid => println!("Unrecognised choice."),
            }
        }
    }

    Ok(())
}
