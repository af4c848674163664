use crate::config::Config;
use crate::error::AppError;
use crate::session::{IntervalTicks, SessionMachine, TickSink};
use crate::source::QuizSource;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const COMMAND_QUEUE: usize = 8;

pub fn run(config: Config) -> Result<(), AppError> {
    let source = QuizSource::from_config(&config.source)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("quizterm-worker")
        .enable_all()
        .build()
        .map_err(|err| AppError::Runtime(err.to_string()))?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let countdown_tx = events.sender();
    let sink: TickSink =
        Arc::new(move |generation| countdown_tx.send(AppEvent::CountdownTick { generation }).is_ok());
    let ticks = IntervalTicks::new(runtime.handle().clone(), sink);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(serve_commands(command_rx, source.clone(), events.sender()));

    let mut app = App::new(SessionMachine::new(Box::new(ticks)), source.describe());
    app.set_command_sender(command_tx);
    tracing::info!(source = %source.describe(), "Starting quiz UI");

    let (mut terminal, guard) = setup_terminal()?;
    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::CountdownTick { generation }) => app.on_countdown_tick(generation),
            Ok(AppEvent::QuizFetched { ticket, result }) => app.on_quiz_fetched(ticket, result),
            Ok(AppEvent::Shutdown) => {
                tracing::info!("Received SIGTERM, shutting down");
                app.request_quit();
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Stops the countdown before the runtime goes away
    drop(app);
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(500));
    Ok(())
}

/// Runs each fetch request as its own task and posts the outcome back to
/// the UI thread.
async fn serve_commands(
    mut commands: mpsc::Receiver<UiCommand>,
    source: QuizSource,
    events: Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::FetchQuiz { ticket } => {
                let source = source.clone();
                let events = events.clone();
                tokio::spawn(async move {
                    let result = source.fetch().await.map_err(|err| err.to_string());
                    if events.send(AppEvent::QuizFetched { ticket, result }).is_err() {
                        tracing::debug!(ticket = ticket.0, "UI gone before quiz fetch finished");
                    }
                });
            }
        }
    }
}
