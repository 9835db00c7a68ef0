//! UniClubs CLI
//!
//! Drives the portal from a terminal:
//! - `demo`: scripted session through every section
//! - `shell`: line commands from stdin
//! - `config`: print or write the default config

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use uniclubs::config::{generate_default_config, LoggingConfig};
use uniclubs::{Action, Config, LatencyConfig, MemberDraft, Portal, TeamDraft, ToastEvent};

#[derive(Parser)]
#[command(name = "uniclubs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Campus clubs portal, driven from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip the simulated backend latency
    #[arg(long, global = true)]
    pub instant: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a scripted session
    Demo,

    /// Read commands from stdin
    Shell,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_deref());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };
    if cli.instant {
        config.latency = LatencyConfig::instant();
    }

    init_logging(&config.logging);
    tracing::info!("UniClubs portal v{}", env!("CARGO_PKG_VERSION"));

    let json = match cli.format.as_str() {
        "text" => false,
        "json" => true,
        other => bail!("Unknown output format: {}", other),
    };

    let portal = Portal::with_store(config);
    let printer = spawn_toast_printer(&portal, json);

    let result = match cli.command {
        Commands::Demo => run_demo(&portal, json).await,
        Commands::Shell => run_shell(&portal, json).await,
        Commands::Config { .. } => Ok(()),
    };

    printer.abort();
    result
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("uniclubs={}", logging.level)));

    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn write_default_config(output: Option<&Path>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }
    Ok(())
}

/// Print toasts as they appear
fn spawn_toast_printer(portal: &Portal, json: bool) -> tokio::task::JoinHandle<()> {
    let mut rx = portal.subscribe_toasts();

    tokio::spawn(async move {
        while let Ok(event) = rx.recv().await {
            if json {
                if let Ok(line) = serde_json::to_string(&event) {
                    println!("{}", line);
                }
            } else if let ToastEvent::Shown { toast } = event {
                println!("{} {}", toast.kind.icon(), toast.message.replace('\n', "\n  "));
            }
        }
    })
}

fn print_render(portal: &Portal, json: bool) -> anyhow::Result<()> {
    for fragment in portal.render() {
        if json {
            println!("{}", serde_json::to_string(&fragment)?);
        } else {
            println!("--- {} ---", fragment.name());
            print!("{}", fragment);
        }
    }
    Ok(())
}

async fn run_demo(portal: &Portal, json: bool) -> anyhow::Result<()> {
    portal.init().await;

    let script = vec![
        Action::navigate("#clubs"),
        Action::ToggleClub { club_id: 4 },
        Action::JoinClub { club_id: 1 },
        Action::navigate("#events"),
        Action::ToggleRsvp { event_id: 1 },
        Action::MarkAttendance { event_id: 1 },
        Action::navigate("#teams"),
        Action::OpenAddTeam,
        Action::CreateTeam {
            draft: TeamDraft::named("Quiz Crew")
                .stream("Science")
                .year("2nd Year")
                .member(MemberDraft::new("Ana").specialty("Trivia")),
        },
        Action::OpenChat { team_id: 1 },
        Action::SendChat {
            text: "Meeting at 5?".to_string(),
        },
        Action::CloseModal,
        Action::navigate("#login"),
        Action::Login {
            email: "student@uniclubs.edu".to_string(),
            password: "demo".to_string(),
        },
        Action::navigate("#profile"),
    ];

    for action in script {
        if !json {
            println!("> {}", action.name());
        }
        portal.dispatch(action).await;
    }

    print_render(portal, json)?;

    portal.dispatch(Action::Logout).await;
    Ok(())
}

enum ShellCommand {
    Act(Action),
    Dismiss(usize),
    Toasts,
    Render,
    Stats,
    Help,
    Quit,
}

const HELP: &str = "\
commands:
  nav <section>              home, clubs, events, teams, profile, attendance, login
  login <email> [password]   sign in
  logout | menu | dropdown   account actions
  club <id>                  join/unjoin a club card
  join <id>                  join through the backend
  rsvp <id> | attend <id>    event actions
  addteam                    open the add-team form
  team <name> [stream] [year]
  member <team> <name> [specialty]
  chat <team> | say <text>   team chat
  close                      close the open modal
  esc                        close the modal and return home
  scroll <px>
  dismiss <n>                dismiss the n-th visible toast
  toasts | render | stats
  json <action>              raw action, e.g. {\"type\":\"logout\"}
  quit";

fn parse_id(arg: Option<&str>) -> Result<u32, String> {
    let arg = arg.ok_or("missing id")?;
    arg.parse().map_err(|_| format!("invalid id: {}", arg))
}

fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let line = line.trim();
    let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    let mut args = rest.split_whitespace();

    let command = match cmd {
        "nav" | "go" => ShellCommand::Act(Action::navigate(rest)),
        "login" => {
            let email = args.next().ok_or("missing email")?;
            ShellCommand::Act(Action::Login {
                email: email.to_string(),
                password: args.next().unwrap_or_default().to_string(),
            })
        }
        "logout" => ShellCommand::Act(Action::Logout),
        "menu" => ShellCommand::Act(Action::AccountMenu),
        "dropdown" => ShellCommand::Act(Action::ToggleDropdown),
        "club" => ShellCommand::Act(Action::ToggleClub {
            club_id: parse_id(args.next())?,
        }),
        "join" => ShellCommand::Act(Action::JoinClub {
            club_id: parse_id(args.next())?,
        }),
        "rsvp" => ShellCommand::Act(Action::ToggleRsvp {
            event_id: parse_id(args.next())?,
        }),
        "attend" => ShellCommand::Act(Action::MarkAttendance {
            event_id: parse_id(args.next())?,
        }),
        "addteam" => ShellCommand::Act(Action::OpenAddTeam),
        "team" => {
            let mut draft = TeamDraft::new();
            draft.name = args.next().map(str::to_string);
            draft.stream = args.next().map(str::to_string);
            draft.year = args.next().map(str::to_string);
            ShellCommand::Act(Action::CreateTeam { draft })
        }
        "member" => {
            let team_id = parse_id(args.next())?;
            let member = MemberDraft {
                name: args.next().map(str::to_string),
                specialty: args.next().map(str::to_string),
            };
            ShellCommand::Act(Action::AddTeamMember { team_id, member })
        }
        "chat" => ShellCommand::Act(Action::OpenChat {
            team_id: parse_id(args.next())?,
        }),
        "say" => ShellCommand::Act(Action::SendChat {
            text: rest.to_string(),
        }),
        "close" => ShellCommand::Act(Action::CloseModal),
        "esc" => ShellCommand::Act(Action::Escape),
        "scroll" => ShellCommand::Act(Action::Scroll {
            offset: parse_id(args.next())?,
        }),
        "dismiss" => {
            let n = args.next().unwrap_or("1");
            let index = n.parse::<usize>().map_err(|_| format!("invalid index: {}", n))?;
            ShellCommand::Dismiss(index.saturating_sub(1))
        }
        "json" => {
            let action = serde_json::from_str(rest).map_err(|e| e.to_string())?;
            ShellCommand::Act(action)
        }
        "toasts" => ShellCommand::Toasts,
        "render" => ShellCommand::Render,
        "stats" => ShellCommand::Stats,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(format!("unknown command: {}", other)),
    };

    Ok(command)
}

async fn run_shell(portal: &Portal, json: bool) -> anyhow::Result<()> {
    portal.init().await;
    println!("UniClubs shell. Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("error: {}", e);
                continue;
            }
        };

        match command {
            ShellCommand::Act(action) => portal.dispatch(action).await,
            ShellCommand::Dismiss(index) => {
                match portal.notifications().active().get(index) {
                    Some(toast) => portal.dispatch(Action::DismissToast { id: toast.id }).await,
                    None => eprintln!("error: no toast #{}", index + 1),
                }
            }
            ShellCommand::Toasts => {
                for (i, toast) in portal.notifications().active().iter().enumerate() {
                    println!("{}. {} {}", i + 1, toast.kind.icon(), toast.message);
                }
            }
            ShellCommand::Render => print_render(portal, json)?,
            ShellCommand::Stats => {
                let stats = portal.stats();
                println!(
                    "{} clubs, {} events, {} teams; member of {}; section {}",
                    stats.clubs,
                    stats.events,
                    stats.teams,
                    stats.joined_clubs,
                    portal.current_section()
                );
            }
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::Quit => break,
        }
    }

    Ok(())
}
