use clap::Parser;
use route_planner::sdk::{
    app::{Field, LayerId, MapView, MarkerKind, Planner, PlannerSettings, UiEvent},
    config::OrsConfig,
    routing::{Bounds, Coordinate, RemoteOrsProvider},
    util::{log::init_logging, rate_limit::ors_limiter},
};
use std::io::{self, BufRead, Write};

/// Driving directions between two addresses, with address suggestions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start address (e.g., "東京駅")
    #[arg(short, long)]
    start: Option<String>,

    /// Destination address (e.g., "新宿駅")
    #[arg(short, long)]
    destination: Option<String>,
}

/// Prints everything a map page would display.
#[derive(Default)]
struct TerminalView {
    next_layer: u64,
}

impl TerminalView {
    fn layer(&mut self) -> LayerId {
        self.next_layer += 1;
        LayerId(self.next_layer)
    }
}

impl MapView for TerminalView {
    fn set_viewport(&mut self, center: Coordinate, zoom: u8) {
        println!("地図の中心: {} (ズーム {})", center, zoom);
    }

    fn add_marker(&mut self, kind: MarkerKind, at: Coordinate) -> LayerId {
        println!("📍 {}: {}", kind.popup(), at);
        self.layer()
    }

    fn add_route(&mut self, geometry: &[Coordinate]) -> LayerId {
        println!("ルートを描画しました ({} 点)", geometry.len());
        self.layer()
    }

    fn remove_layer(&mut self, _id: LayerId) {}

    fn fit_bounds(&mut self, bounds: Bounds, _padding_px: u32) {
        println!("表示範囲: {} .. {}", bounds.south_west, bounds.north_east);
    }

    fn show_summary(&mut self, distance: &str, duration: &str) {
        println!("距離: {}", distance);
        println!("所要時間: {}", duration);
    }

    fn show_instructions(&mut self, steps: &[String]) {
        for (i, step) in steps.iter().enumerate() {
            println!("{:>3}. {}", i + 1, step);
        }
    }

    fn show_suggestions(&mut self, field: Field, labels: &[String]) {
        println!("{}の候補:", field.label());
        for (i, label) in labels.iter().enumerate() {
            println!("  [{}] {}", i, label);
        }
    }

    fn hide_suggestions(&mut self, _field: Field) {}

    fn set_input_text(&mut self, field: Field, text: &str) {
        println!("{}: {}", field.label(), text);
    }

    fn notify(&mut self, message: &str) {
        eprintln!("⚠ {}", message);
    }
}

fn parse_field(word: &str) -> Option<Field> {
    match word {
        "start" | "s" => Some(Field::Start),
        "dest" | "destination" | "d" => Some(Field::Destination),
        _ => None,
    }
}

/// Maps one input line to an event. `None` means the line wasn't understood.
fn parse_command(line: &str) -> Option<UiEvent> {
    let (command, rest) = line.trim().split_once(' ').unwrap_or((line.trim(), ""));
    match command {
        "go" => Some(UiEvent::SubmitClicked),
        "enter" => parse_field(rest.trim()).map(UiEvent::EnterPressed),
        "close" => parse_field(rest.trim()).map(|field| UiEvent::ClickedOutside { field }),
        "pick" => {
            let (field, index) = rest.trim().split_once(' ')?;
            Some(UiEvent::SuggestionClicked {
                field: parse_field(field)?,
                index: index.trim().parse().ok()?,
            })
        }
        other => parse_field(other).map(|field| UiEvent::InputChanged {
            field,
            text: rest.to_string(),
        }),
    }
}

const HELP: &str = "コマンド: start <住所> | dest <住所> | pick <start|dest> <番号> | \
                    close <start|dest> | enter <start|dest> | go | quit";

fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = OrsConfig::from_env()?;
    let provider = RemoteOrsProvider::new(&config, ors_limiter())?;
    let settings = PlannerSettings::from(&config);
    let mut planner = Planner::new(provider, TerminalView::default(), settings);

    if let (Some(start), Some(destination)) = (&cli.start, &cli.destination) {
        planner.set_input(Field::Start, start);
        planner.set_input(Field::Destination, destination);
        planner.submit()?;
        if let (Some(from), Some(to)) = planner.session().endpoints() {
            log::info!("Planned route {} -> {}", from, to);
        }
        return Ok(());
    }

    if let Some(start) = &cli.start {
        planner.set_input(Field::Start, start);
    }
    if let Some(destination) = &cli.destination {
        planner.set_input(Field::Destination, destination);
    }

    println!("{}", HELP);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => {}
            "quit" | "exit" => break,
            _ => match parse_command(&line) {
                Some(event) => planner.handle(event),
                None => println!("{}", HELP),
            },
        }
        io::stdout().flush()?;
    }

    Ok(())
}
