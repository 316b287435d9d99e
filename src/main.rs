use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use gopher_jump::cli::{self, Command, RunOptions};
use gopher_jump::core::config::load_tuning;
use gopher_jump::core::{FixedStep, INPUT_POLL_MS};
use gopher_jump::game::{advance, GopherJumpGame};
use gopher_jump::input::{map_key, TickInput};
use gopher_jump::ui::draw_ui;
use gopher_jump::utils::{build_info, logging, persistence};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    let options = match cli::parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            println!("{}", cli::usage());
            std::process::exit(0);
        }
        Ok(Command::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'gopher-jump --help' for usage.");
            std::process::exit(1);
        }
    };

    if let Some(path) = &options.log_path {
        logging::init_file_logger(path)?;
    }

    // Configuration problems are reported before the terminal is taken over
    let tuning_path = match &options.tuning_path {
        Some(path) => path.clone(),
        None => persistence::default_tuning_path()?,
    };
    let tuning = load_tuning(&tuning_path).map_err(|e| {
        eprintln!("Invalid tuning file {}: {}", tuning_path.display(), e);
        e
    })?;
    log::info!("starting with tuning {:?}", tuning);

    let mut rng = match options.seed {
        Some(seed) => {
            log::info!("spawn rng seeded with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut game = GopherJumpGame::new(tuning);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_game(&mut terminal, &mut game, &mut rng, &options);

    // Cleanup terminal, even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("game loop failed: {}", e);
    }
    log::info!("exiting, high score {}", game.high_score);
    result
}

/// Draw, collect input and step the game at a fixed cadence until quit.
fn run_game(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    game: &mut GopherJumpGame,
    rng: &mut StdRng,
    options: &RunOptions,
) -> io::Result<()> {
    let mut input = TickInput::default();
    let mut clock = FixedStep::default();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, game, options.debug))?;

        // Drain pending key events without blocking the tick cadence
        while event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                input.record(map_key(key));
            }
        }
        if input.quit {
            return Ok(());
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;

        for _ in 0..clock.ticks_due(dt_ms) {
            let confirm = input.take_confirm();
            advance(game, confirm, rng);
        }
    }
}
