mod logging;
mod render;
mod ticker;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};

use eventcal::calendar::holidays::{HolidayCalendar, StaticHolidayTable};
use eventcal::event::store::load_events;
use eventcal::event::validation::time_error_message;
use eventcal::{
    CalendarView, Event, EventForm, NotificationScheduler, filtered_events, find_overlaps,
};

use crate::ticker::{TickerConfig, run_ticker};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliView {
    Week,
    Month,
}

impl From<CliView> for CalendarView {
    fn from(value: CliView) -> Self {
        match value {
            CliView::Week => CalendarView::Week,
            CliView::Month => CalendarView::Month,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "eventcal",
    version,
    about = "Calendar grids, event search, overlap checks and reminders"
)]
struct Cli {
    /// JSON file holding `{ "events": [...] }`.
    #[arg(long, global = true, default_value = "events.json")]
    events: PathBuf,

    /// Log filter used when RUST_LOG is unset (e.g. `info`, `eventcal=debug`).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Month grid with holidays and the month's events.
    Month {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// The Sunday-to-Saturday week around a date.
    Week {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Events visible in a view, optionally narrowed by a search term.
    List {
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, value_enum, default_value_t = CliView::Month)]
        view: CliView,

        #[arg(long, default_value = "")]
        search: String,
    },
    /// Existing events that clash with a proposed time slot.
    Overlaps {
        #[arg(long)]
        date: String,

        #[arg(long)]
        start: String,

        #[arg(long)]
        end: String,

        /// Id of the event being edited; it is not compared with itself.
        #[arg(long)]
        id: Option<String>,
    },
    /// Run the reminder ticker and print notifications as they fire.
    Watch {
        #[arg(long, default_value_t = 1_000)]
        tick_ms: u64,

        #[arg(long)]
        max_ticks: Option<u64>,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref())?;

    let events = load_events(&cli.events)
        .with_context(|| format!("failed to load {}", cli.events.display()))?;
    let today = Local::now().date_naive();
    let holidays = StaticHolidayTable::default();

    match cli.command {
        Command::Month { date } => {
            let anchor = date.unwrap_or(today);
            let visible = filtered_events(&events, "", anchor, CalendarView::Month);
            print!(
                "{}",
                render::render_month(anchor, &visible, &holidays.holidays_in_month(anchor))
            );
        }
        Command::Week { date } => {
            let anchor = date.unwrap_or(today);
            let visible = filtered_events(&events, "", anchor, CalendarView::Week);
            let week_holidays = holidays.holidays_in_week(anchor);
            print!("{}", render::render_week(anchor, &visible, &week_holidays));
        }
        Command::List { date, view, search } => {
            let anchor = date.unwrap_or(today);
            let visible = filtered_events(&events, &search, anchor, view.into());
            print!("{}", render::render_event_list(&visible));
        }
        Command::Overlaps {
            date,
            start,
            end,
            id,
        } => {
            let validation = time_error_message(&start, &end);
            if let (Some(start_error), Some(end_error)) =
                (validation.start_time_error, validation.end_time_error)
            {
                bail!("{start_error} {end_error}");
            }

            let form = EventForm {
                date,
                start_time: start,
                end_time: end,
                ..EventForm::default()
            };
            let overlapping: Vec<&Event> = match id {
                Some(id) => find_overlaps(&form.into_event(id), &events),
                None => find_overlaps(&form, &events),
            };
            print!("{}", render::render_overlaps(&overlapping));
        }
        Command::Watch { tick_ms, max_ticks } => {
            if tick_ms == 0 {
                bail!("--tick-ms must be greater than zero");
            }
            let mut scheduler = NotificationScheduler::new();
            let config = TickerConfig {
                interval: Duration::from_millis(tick_ms),
                max_ticks,
            };
            run_ticker(&events, &mut scheduler, config, |notification| {
                println!("{}", notification.message);
            });
        }
    }

    Ok(())
}
