use clap::Parser;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::process;
use tvscout::{Controller, PageView, TvMazeDirectory};

/// Search the TVMaze show directory and browse episode lists.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Search term to run immediately on startup
    term: Option<String>,

    /// Directory service endpoint
    #[arg(long, default_value = "https://api.tvmaze.com")]
    base_url: String,
}

/// Prints the current page: the show list, and the episode list when visible.
fn print_page(view: &PageView) {
    println!("\n=== Shows ===");
    if view.show_lines().is_empty() {
        println!("No shows to display.");
    }
    for line in view.show_lines() {
        println!("{line}");
    }

    if let Some(lines) = view.episode_lines() {
        println!("\n=== Episodes ===");
        if lines.is_empty() {
            println!("No episodes listed.");
        }
        for line in lines {
            println!("{line}");
        }
    }
    println!();
}

/// Asks for a search term. Empty terms are allowed and passed through.
fn prompt_term(theme: &ColorfulTheme) -> dialoguer::Result<String> {
    Input::with_theme(theme)
        .with_prompt("Search shows")
        .allow_empty(true)
        .interact_text()
}

fn run(cli: Cli) -> dialoguer::Result<()> {
    let theme = ColorfulTheme::default();
    let directory = TvMazeDirectory::with_base_url(cli.base_url);
    let mut controller = Controller::new(directory);

    let mut term = match cli.term {
        Some(term) => term,
        None => prompt_term(&theme)?,
    };

    loop {
        controller.search(&term);
        print_page(controller.view());

        // Offer each rendered show's "Episodes" action until the user
        // starts a new search or quits.
        loop {
            let actions = controller.view().show_actions().to_vec();
            let mut items: Vec<String> = actions
                .iter()
                .map(|action| format!("Episodes: {}", action.name))
                .collect();
            items.push("New search".to_string());
            items.push("Quit".to_string());

            let choice = Select::with_theme(&theme)
                .with_prompt("Pick an action")
                .items(&items)
                .default(0)
                .interact()?;

            if choice < actions.len() {
                controller.open_episodes(actions[choice].id);
                print_page(controller.view());
            } else if choice == actions.len() {
                term = prompt_term(&theme)?;
                break;
            } else {
                return Ok(());
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
