//! Page preview binary - renders the site HTML to stdout without serving it.
//!
//! Usage:
//!   cargo run --bin preview                  # Blank form, canonical language
//!   cargo run --bin preview -- --lang fr     # Render with a language selected
//!   cargo run --bin preview > page.html      # Open the result in a browser

use anyhow::Result;

use trochlear_site::contact::{Inquiry, SubmissionState};
use trochlear_site::i18n::Language;
use trochlear_site::site;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let lang = match args.iter().position(|arg| arg == "--lang") {
        Some(index) => {
            let code = args.get(index + 1).map(String::as_str).unwrap_or("en");
            Language::from_code(code)?
        }
        None => Language::canonical(),
    };

    let page = site::render_home(lang, SubmissionState::Idle, &Inquiry::default());
    println!("{page}");

    Ok(())
}
