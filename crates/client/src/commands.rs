//! Command execution.
//!
//! Every command writes its result to `out`; logs and the loading notice go
//! to stderr.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use rallycal_core::calendar::format::format_month_day;
use rallycal_core::calendar::{
    compose_share, days_in_month, events_on_date, ics_file_name, sample_document, share_event,
    to_ics, EventId, IcsContext, RegionFilter, ShareOutcome,
};
use rallycal_core::view::{LoadState, ScrollTarget, ViewState};

use crate::cli::{Cli, Commands, OutputFormat, YearMonth};
use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::loader::load_schedule;
use crate::output::json::{CalendarView, ListView, TodayView};
use crate::output::{format_document, json, pretty, render};
use crate::share::WriterShare;
use crate::source::source_for;

/// Runs the parsed command against the configured schedule source.
pub async fn run<W: Write>(
    cli: &Cli,
    config: &Config,
    today: NaiveDate,
    out: &mut W,
) -> Result<()> {
    match &cli.command {
        Commands::Regions => {
            let options = RegionFilter::options();
            let labels: Vec<&str> = options.iter().map(RegionFilter::label).collect();
            writeln!(
                out,
                "{}",
                render(&labels, cli.format, |_| pretty::format_regions(
                    &options,
                    &cli.region
                ))
            )?;
        }
        Commands::Sample { count, center } => {
            let document = sample_document(center.unwrap_or(today), *count);
            writeln!(out, "{}", format_document(&document, cli.format))?;
        }
        command => {
            let (mut state, target) = load_view(cli, config, today).await?;
            match command {
                Commands::List => list(cli, &state, target, out)?,
                Commands::Calendar { month, day } => {
                    calendar(cli, &mut state, *month, *day, out)?
                }
                Commands::Show { id } => show(cli, &mut state, *id, out)?,
                Commands::Export { id, output } => {
                    export(cli, config, &mut state, *id, output.clone(), out).await?
                }
                Commands::Share { id } => share(cli, config, &mut state, *id, out)?,
                Commands::Today => today_ticker(cli, &state, out)?,
                Commands::Regions | Commands::Sample { .. } => {}
            }
        }
    }
    Ok(())
}

/// Loads the schedule into a fresh view state with the region applied.
async fn load_view(
    cli: &Cli,
    config: &Config,
    today: NaiveDate,
) -> Result<(ViewState, Option<ScrollTarget>)> {
    let source = source_for(&cli.source);
    let options = cli.load_options(config.strict);

    let mut state = ViewState::new(today);
    state.choose_region(cli.region.clone());

    let loaded = load_schedule(source.as_ref(), &options)
        .await
        .map(|prepared| prepared.events);
    let target = state.finish_loading(loaded);

    if let LoadState::Failed { message, detail } = state.load_state() {
        return Err(ClientError::LoadFailed {
            message: message.clone(),
            detail: detail.clone(),
        });
    }
    Ok((state, target))
}

fn list<W: Write>(
    cli: &Cli,
    state: &ViewState,
    target: Option<ScrollTarget>,
    out: &mut W,
) -> Result<()> {
    let view = ListView {
        region: state.region().label(),
        today: state.today(),
        scroll_to: target.map(|target| target.event_id),
        events: state.visible_events(),
    };
    writeln!(
        out,
        "{}",
        render(&view, cli.format, |view| pretty::format_events(
            &view.events,
            state.region(),
            view.scroll_to
        ))
    )?;
    Ok(())
}

fn calendar<W: Write>(
    cli: &Cli,
    state: &mut ViewState,
    month: Option<YearMonth>,
    day: Option<u32>,
    out: &mut W,
) -> Result<()> {
    if let Some(month) = month {
        let first = month
            .first_day()
            .ok_or_else(|| ClientError::InvalidInput(format!("invalid month {month}")))?;
        state.show_month(first);
    }

    let first_event_of_day = match day {
        Some(day) if day == 0 || day > days_in_month(state.current_month()) => {
            return Err(ClientError::InvalidInput(format!(
                "day {day} is not in {}",
                state.current_month().format("%Y-%m")
            )));
        }
        Some(day) => state.select_day(day),
        None => state.select_day(state.selected_day()),
    };

    let view = CalendarView {
        region: state.region().label(),
        grid: state.grid(),
        selected_day: state.selected_day(),
        first_event_of_day: first_event_of_day.map(|target| target.event_id),
        events: state.month_events(),
    };
    writeln!(
        out,
        "{}",
        render(&view, cli.format, |view| format!(
            "{}\n\n{}",
            pretty::format_grid(&view.grid),
            pretty::format_events(&view.events, state.region(), view.first_event_of_day)
        ))
    )?;
    Ok(())
}

/// Opens the detail view of `id`, or fails with `NotFound`.
fn open_event(state: &mut ViewState, id: EventId) -> Result<()> {
    if state.select_event(id) {
        Ok(())
    } else {
        Err(ClientError::NotFound { id: id.to_string() })
    }
}

fn show<W: Write>(cli: &Cli, state: &mut ViewState, id: EventId, out: &mut W) -> Result<()> {
    open_event(state, id)?;
    if let Some(event) = state.selected_event() {
        writeln!(out, "{}", render(event, cli.format, pretty::format_event))?;
    }
    Ok(())
}

async fn export<W: Write>(
    cli: &Cli,
    config: &Config,
    state: &mut ViewState,
    id: EventId,
    output: Option<PathBuf>,
    out: &mut W,
) -> Result<()> {
    open_event(state, id)?;
    let Some(event) = state.selected_event() else {
        return Ok(());
    };

    let ctx = IcsContext::new(config.timezone, &config.app_name, &config.uid_domain);
    let document = to_ics(event, &ctx)?;

    let path = output.unwrap_or_else(|| PathBuf::from(ics_file_name(event)));
    if path.as_os_str() == "-" {
        out.write_all(document.as_bytes())?;
        return Ok(());
    }

    tokio::fs::write(&path, document.as_bytes()).await?;
    tracing::info!(id = %id, path = %path.display(), "Exported event");

    if !cli.quiet {
        let summary = serde_json::json!({ "id": id, "path": path.display().to_string() });
        writeln!(
            out,
            "{}",
            render(&summary, cli.format, |_| format!(
                "Exported {} to {}",
                id,
                path.display()
            ))
        )?;
    }
    Ok(())
}

fn share<W: Write>(
    cli: &Cli,
    config: &Config,
    state: &mut ViewState,
    id: EventId,
    out: &mut W,
) -> Result<()> {
    open_event(state, id)?;
    let Some(event) = state.selected_event() else {
        return Ok(());
    };
    let payload = compose_share(event, &config.app_name, config.share_url.clone());

    if cli.format == OutputFormat::Json {
        writeln!(out, "{}", json::format_json(&payload))?;
        return Ok(());
    }

    let outcome = {
        let capability = WriterShare::new(&mut *out);
        share_event(Some(&capability), &payload)?
    };
    if let ShareOutcome::Unsupported(notice) = outcome {
        writeln!(out, "{notice}")?;
    }
    state.dismiss_modal();
    Ok(())
}

fn today_ticker<W: Write>(cli: &Cli, state: &ViewState, out: &mut W) -> Result<()> {
    let view = TodayView {
        today: state.today(),
        date_label: format_month_day(&state.today()),
        days_since: state.days_since_base(),
        banner: state.banner(),
        ticker: state.today_ticker(),
        events: events_on_date(state.events(), state.today()),
    };
    writeln!(
        out,
        "{}",
        render(&view, cli.format, |view| {
            pretty::format_today(&view.banner, &view.ticker)
        })
    )?;
    Ok(())
}
