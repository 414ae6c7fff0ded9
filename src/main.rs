use async_trait::async_trait;
use campus_pay::application::session::CheckoutSession;
use campus_pay::config::SimulationConfig;
use campus_pay::domain::notification::Notification;
use campus_pay::domain::ports::{NavigatorBox, Notifier, NotifierBox};
use campus_pay::error::Result as CheckoutResult;
use campus_pay::infrastructure::console::{ConsoleNotifier, LoggingNavigator};
use campus_pay::infrastructure::in_memory::InMemoryNotifier;
use campus_pay::interfaces::csv::script_reader::{ScriptReader, ScriptStep};
use campus_pay::interfaces::json::report_writer::{ReportWriter, SessionReport};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Checkout script CSV file (action, target, value)
    script: PathBuf,

    /// Delay before the STK push reaches the phone
    #[arg(long, env = "CAMPUS_PAY_STK_PUSH_DELAY_MS", default_value_t = 3000)]
    stk_push_delay_ms: u64,

    /// Spinner delay between the two M-Pesa PIN dialogs
    #[arg(long, env = "CAMPUS_PAY_PIN_PROCESSING_DELAY_MS", default_value_t = 2000)]
    pin_processing_delay_ms: u64,

    /// Delay after confirming a bank transfer
    #[arg(long, env = "CAMPUS_PAY_BANK_SETTLEMENT_DELAY_MS", default_value_t = 1000)]
    bank_settlement_delay_ms: u64,

    /// Skip all simulated delays
    #[arg(long)]
    instant: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn simulation_config(&self) -> SimulationConfig {
        if self.instant {
            return SimulationConfig::instant();
        }
        SimulationConfig {
            stk_push_delay_ms: self.stk_push_delay_ms,
            pin_processing_delay_ms: self.pin_processing_delay_ms,
            bank_settlement_delay_ms: self.bank_settlement_delay_ms,
        }
    }
}

/// Prints every toast and keeps a copy for the final report.
struct TeeNotifier {
    console: ConsoleNotifier,
    log: InMemoryNotifier,
}

#[async_trait]
impl Notifier for TeeNotifier {
    async fn notify(&self, notification: Notification) -> CheckoutResult<()> {
        self.console.notify(notification.clone()).await?;
        self.log.notify(notification).await
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let log = InMemoryNotifier::new();
    let notifier: NotifierBox = Box::new(TeeNotifier {
        console: ConsoleNotifier::new(),
        log: log.clone(),
    });
    let navigator: NavigatorBox = Box::new(LoggingNavigator);
    let mut session = CheckoutSession::new(cli.simulation_config(), notifier, navigator);

    // Replay the script
    let file = File::open(&cli.script).into_diagnostic()?;
    let reader = ScriptReader::new(file);
    for step in reader.steps() {
        match step {
            Ok(ScriptStep::Dispatch(event)) => {
                if let Err(e) = session.dispatch(event).await {
                    eprintln!("Error processing step: {}", e);
                }
            }
            Ok(ScriptStep::Wait) => {
                if let Err(e) = session.wait_for_timer().await {
                    eprintln!("Error processing step: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading step: {}", e);
            }
        }
    }

    // Output final state
    let report = SessionReport::new(session.state(), log.notifications().await);
    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    writer.write_report(&report).into_diagnostic()?;

    Ok(())
}
