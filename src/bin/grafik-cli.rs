#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::{Datelike, Local};
use clap::{Parser, Subcommand};
use grafik::{
    io,
    picker::{year_range, Selection},
    preference::{Confirm, ShiftPreference, SWAP_QUESTION},
    render::{AnsiColor, GridRenderer, MonthView, PlainText},
    schedule::ShiftCalendar,
    storage::JsonStorage,
    AssumeYes,
};
use std::io::{BufRead, IsTerminal, Write};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Grafik zmian : ranek / popołudnie, święta, zamiana kolorów
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON des préférences
    #[arg(long, global = true, default_value = "grafik.json")]
    store: String,

    /// Désactive les couleurs ANSI
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Afficher un mois
    Show {
        #[arg(long)]
        year: Option<i32>,
        /// 1..=12
        #[arg(long)]
        month: Option<u32>,
    },

    /// Zamienić kolory (inverser les zmiany), après confirmation
    Swap {
        /// Ne pas demander de confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Afficher l'état de l'inversion
    Status,

    /// Exporter un mois en CSV et/ou JSON
    Export {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
        #[arg(long)]
        out_csv: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
    },

    /// Lister les années proposées
    Years,
}

/// Invite TAK/NIE sur l'entrée standard.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, question: &str) -> bool {
        print!("{question} [TAK/NIE] ");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        if std::io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_lowercase().as_str(), "tak" | "t" | "yes" | "y")
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let today = Local::now().date_naive();
    let calendar = ShiftCalendar::new();
    let mut preference = ShiftPreference::load(JsonStorage::open(&cli.store));

    let renderer: Box<dyn GridRenderer> = if cli.no_color || !std::io::stdout().is_terminal() {
        Box::new(PlainText)
    } else {
        Box::new(AnsiColor)
    };

    let code = match cli.cmd {
        Commands::Show { year, month } => {
            let sel = Selection::resolve(year, month, today)?;
            let inverted = preference.is_inverted();
            let view = MonthView::build(&calendar, sel.year, sel.month, inverted)?;
            print!("{}", renderer.render(&view));
            0
        }
        Commands::Swap { yes } => {
            let outcome = if yes {
                preference.confirm_and_toggle(&AssumeYes)
            } else {
                preference.confirm_and_toggle(&StdinConfirm)
            };
            match outcome {
                Some(true) => {
                    println!("Kolory zamienione");
                    0
                }
                Some(false) => {
                    println!("Kolory przywrócone");
                    0
                }
                None => {
                    println!("Anulowano: {SWAP_QUESTION} NIE");
                    // Code 2 = rien n'a changé
                    2
                }
            }
        }
        Commands::Status => {
            println!(
                "isShiftSwapped = {}",
                if preference.is_inverted() { "true" } else { "false" }
            );
            0
        }
        Commands::Export {
            year,
            month,
            out_csv,
            out_json,
        } => {
            if out_csv.is_none() && out_json.is_none() {
                bail!("nothing to export: pass --out-csv and/or --out-json");
            }
            let sel = Selection::resolve(year, month, today)?;
            let inverted = preference.is_inverted();
            let records = io::month_records(&calendar, sel.year, sel.month, inverted)?;
            if let Some(path) = out_csv {
                io::export_month_csv(path, &records)?;
            }
            if let Some(path) = out_json {
                io::export_month_json(path, &records)?;
            }
            println!("{}: {} jours exportés", sel.title(), records.len());
            0
        }
        Commands::Years => {
            let years: Vec<String> = year_range(today.year()).map(|y| y.to_string()).collect();
            println!("{}", years.join(" "));
            0
        }
    };

    std::process::exit(code);
}
