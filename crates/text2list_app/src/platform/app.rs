use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use form_logging::{form_info, form_warn};
use text2list_core::Text2ListController;

use super::ui::commands::{self, Command};
use super::{config, logging, ui};

pub fn run_app() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let app_config = config::load(config_path.as_deref())?;
    logging::initialize(app_config.log_destination, app_config.verbose);
    let form_config = config::build_form_config(&app_config)?;
    form_info!(
        "text2list started: separators={:?} max_items={:?} async_validation={}",
        form_config.pipeline.separators.as_str(),
        form_config.pipeline.max_items,
        form_config.async_validation
    );

    // Set by the validation hook; the loop answers by raising the pending flag.
    let validation_requested = Rc::new(Cell::new(false));
    let hook_flag = validation_requested.clone();

    let mut controller = Text2ListController::new(form_config, |entries: &[String]| {
        form_info!("consumer received {} entries", entries.len());
        println!("onAdd -> [{}]", entries.join(", "));
    })
    .with_validation_hook(move |entries: &[String]| {
        hook_flag.set(true);
        println!(
            "validating {} entries out of band; type :release when done",
            entries.len()
        );
    });

    let mut out = io::stdout();
    write_lines(&mut out, &ui::render::render(&controller.view()))?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;
        match commands::parse(&line) {
            Command::Submit(text) => {
                controller.on_text_change(text);
                controller.on_commit();
                if validation_requested.replace(false) {
                    controller.set_pending(true);
                }
            }
            Command::Remove(entry) => controller.on_remove_one(&entry),
            Command::RemoveAll => controller.on_remove_all(),
            Command::Release => controller.set_pending(false),
            Command::Help => writeln!(out, "{}", commands::HELP)?,
            Command::Quit => break,
            Command::Unknown(text) => {
                form_warn!("unknown command {:?}", text);
                writeln!(out, "unknown command {text:?}; type :help")?;
            }
            Command::Empty => {}
        }

        if controller.consume_dirty() {
            write_lines(&mut out, &ui::render::render(&controller.view()))?;
        }
    }

    form_info!("text2list finished with {} entries", controller.entries().len());
    Ok(())
}

fn write_lines(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
