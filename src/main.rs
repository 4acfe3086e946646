use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use kabul_cards::{ContentSet, FontSet, Language, PrintLayout};
use kabul_cards::{generate_compact_deck, generate_rule_deck, generate_title_card};

/// Print-ready KABUL rule cards (poker size, A4, duplex)
#[derive(Parser, Debug)]
#[command(
    name = "kabul-cards",
    version,
    about = "Generate print-ready KABUL rule card PDFs (63×88mm on A4)"
)]
struct Cli {
    /// Content language
    #[arg(long, value_enum, default_value_t = Lang::De)]
    lang: Lang,

    /// Directory the PDFs are written to
    #[arg(long, default_value = "./cards")]
    output_dir: PathBuf,

    /// Generate only one edition instead of all three
    #[arg(long, value_enum)]
    only: Option<Edition>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Lang {
    De,
    En,
}

impl From<Lang> for Language {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::De => Language::De,
            Lang::En => Language::En,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Edition {
    /// 4-card deck with decorative backs
    #[value(name = "4card")]
    FourCard,
    /// Compact 2-card deck, rules on both faces
    #[value(name = "2card")]
    TwoCard,
    /// Single title/info card with QR code
    Title,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let language = Language::from(cli.lang);

    println!("{}", "=".repeat(50));
    println!(
        "KABUL Card Generator (Language: {})",
        language.suffix().to_uppercase()
    );
    println!("{}", "=".repeat(50));

    if let Err(err) = fs::create_dir_all(&cli.output_dir) {
        eprintln!(
            "error: could not create {}: {err}",
            cli.output_dir.display()
        );
        return ExitCode::FAILURE;
    }

    let layout = PrintLayout::poker_a4();
    let content = ContentSet::for_language(language);
    let fonts = FontSet::resolve();
    let suffix = language.suffix();
    let wanted = |edition: Edition| cli.only.is_none() || cli.only == Some(edition);

    // Editions run independently; one failure does not stop the others, but
    // any failure fails the run.
    let mut failed = false;

    if wanted(Edition::FourCard) {
        let path = cli
            .output_dir
            .join(format!("kabul_cards_4card_{suffix}.pdf"));
        match generate_rule_deck(&layout, &content, fonts.clone(), &path) {
            Ok(()) => println!(
                "✓ 4-Card Edition ({}): {}",
                suffix.to_uppercase(),
                path.display()
            ),
            Err(err) => {
                eprintln!("error: {err:#}");
                failed = true;
            }
        }
    }

    if wanted(Edition::TwoCard) {
        let path = cli
            .output_dir
            .join(format!("kabul_cards_2card_{suffix}.pdf"));
        match generate_compact_deck(&layout, &content, fonts.clone(), &path) {
            Ok(()) => println!(
                "✓ 2-Card Edition ({}): {}",
                suffix.to_uppercase(),
                path.display()
            ),
            Err(err) => {
                eprintln!("error: {err:#}");
                failed = true;
            }
        }
    }

    if wanted(Edition::Title) {
        let path = cli
            .output_dir
            .join(format!("kabul_cards_title_{suffix}.pdf"));
        match generate_title_card(&layout, &content, fonts, &path) {
            Ok(()) => println!(
                "✓ Title Card ({}): {}",
                suffix.to_uppercase(),
                path.display()
            ),
            Err(err) => {
                eprintln!("error: {err:#}");
                failed = true;
            }
        }
    }

    println!();
    match language {
        Language::De => {
            println!("Druckeinstellungen:");
            println!("  • Duplex: Lange Kante spiegeln");
            println!("  • Skalierung: 100% (nicht skalieren)");
            println!("  • Entlang Schnittmarken schneiden");
        }
        Language::En => {
            println!("Print settings:");
            println!("  • Duplex: Long edge flip");
            println!("  • Scale: 100% (do not fit to page)");
            println!("  • Cut along crop marks");
        }
    }
    println!();
    println!("Output: {}/", cli.output_dir.display());

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
