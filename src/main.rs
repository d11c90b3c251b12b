use anyhow::{Context, bail};
use clap::Parser;
use cli::{Cli, Command};
use history::Action;
use notify::DesktopNotifier;
use std::io::{self, Write};
use store::Store;

mod checker;
mod cli;
mod export;
mod history;
mod notify;
mod render;
mod schedule;
mod store;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let store = Store::open(&cli.store)?;

    match cli.command {
        Command::Add {
            name,
            time,
            dose,
            repeat,
        } => {
            let med = schedule::Medicine::new(&name, &dose, &time, repeat, checker::local_now())?;
            let mut meds = store.load_schedule();
            meds.add(med.clone());
            store.save_schedule(&meds)?;

            println!("Agendado: {} às {}", med.name, med.time);
        }
        Command::List => {
            let meds = store.load_schedule();
            for line in render::schedule_lines(&meds) {
                println!("{line}");
            }
        }
        Command::Take { position } => mark(&store, position, Action::Taken)?,
        Command::Skip { position } => mark(&store, position, Action::Skipped)?,
        Command::Clear { yes } => {
            if !yes && !confirm("Apagar todos os medicamentos salvos?")? {
                println!("Nada apagado.");
                return Ok(());
            }

            let mut meds = store.load_schedule();
            meds.clear();
            store.save_schedule(&meds)?;

            println!("Agenda limpa.");
        }
        Command::History => {
            let hist = store.load_history();
            for line in render::history_lines(hist.events()) {
                println!("{line}");
            }
        }
        Command::Export { out } => {
            let hist = store.load_history();
            let path = out.unwrap_or_else(|| export::default_filename(checker::local_now()));
            export::export(hist.events(), &path)?;

            println!("Exportado(s) {} evento(s) para {}", hist.len(), path.display());
        }
        Command::Watch => {
            let mut notifier = DesktopNotifier;
            checker::watch(&store, &mut notifier)?;
        }
    }

    Ok(())
}

fn mark(store: &Store, position: usize, action: Action) -> anyhow::Result<()> {
    let mut meds = store.load_schedule();
    let mut hist = store.load_history();

    match schedule::mark(&mut meds, &mut hist, position, action, checker::local_now()) {
        Some(med) => {
            store.save_schedule(&meds)?;
            store.save_history(&hist)?;

            let verb = match action {
                Action::Taken => "tomou",
                Action::Skipped => "pulou",
                Action::Reminded => "lembrete",
            };
            println!("Registrado: {verb} {}", med.name);
            Ok(())
        }
        None => bail!("No medicine at position {position}, run `medcontrol list`"),
    }
}

fn confirm(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "s" | "S"))
}
