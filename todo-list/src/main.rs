//! Terminal front end for the todo list.
//!
//! Reads commands from stdin, sends them to the store and redraws the lists
//! whenever an event changes them.

use anyhow::Context;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use todo_list::view::{self, ViewCommand};
use todo_list::{TodoAction, TodoConfig, TodoEnvironment, TodoListState, TodoReducer};
use todo_list_core::environment::SystemClock;
use todo_list_runtime::{metrics::describe_store_metrics, Store};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_list=info,todo_list_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    describe_store_metrics();

    let config = TodoConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(max_dispatch_depth = config.max_dispatch_depth, "Starting todo list");

    let env = TodoEnvironment::new(Arc::new(SystemClock));
    let mut store = Store::with_config(
        TodoListState::new(),
        TodoReducer::new(),
        env,
        config.store_config(),
    );

    let view_config = config.view.clone();
    store.subscribe(move |action: &TodoAction, state: &TodoListState| {
        match action {
            TodoAction::ValidationFailed { error } => println!("! {error}"),
            action if action.is_event() => print!("{}", view::render(state, &view_config)),
            _ => {},
        }
    });

    println!("{}", view::HELP);
    println!();
    print!("{}", view::render(store.state_ref(), &config.view));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("\n$ ");
        stdout.flush().context("Failed to flush stdout")?;

        line.clear();
        if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
            break;
        }

        let command = match view::parse_command(&line) {
            Ok(command) => command,
            Err(view::ParseError::Empty) => continue,
            Err(e) => {
                println!("! {e}");
                continue;
            },
        };

        match command {
            ViewCommand::Send(actions) => {
                for action in actions {
                    tracing::debug!(action = action.name(), "Sending action");
                    store.send(action).context("Store rejected action")?;
                }
            },
            ViewCommand::Show => print!("{}", view::render(store.state_ref(), &config.view)),
            ViewCommand::Json => {
                let json = serde_json::to_string_pretty(store.state_ref())
                    .context("Failed to serialize state")?;
                println!("{json}");
            },
            ViewCommand::Help => println!("{}", view::HELP),
            ViewCommand::Quit => break,
        }
    }

    let state = store.into_state();
    tracing::info!(
        incomplete = state.incomplete_items().len(),
        complete = state.complete_items().len(),
        "Exiting todo list"
    );

    Ok(())
}
