//! Main TUI application state and logic

use crate::config::Config;
use crate::dataset::Dataset;
use crate::driver::{Driver, Frame as DriverFrame, FrameClock};
use crate::sorting::{Algorithm, Highlight};
use crate::ui::panes::{self, ButtonRegions, StatusRenderData};
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

/// The main application state
pub struct App {
    /// Dataset plus the active sort
    pub driver: Driver,

    config: Config,

    /// Source of new datasets
    rng: StdRng,

    /// Button hit regions from the last draw
    buttons: ButtonRegions,

    /// Highlight produced by the last tick
    highlight: Highlight,

    clock: FrameClock,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app with a random dataset drawn according to `config`
    pub fn new(config: Config) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let dataset = Dataset::random(config.element_count, config.value_range(), &mut rng);
        debug!(?config, "starting visualizer");

        App {
            driver: Driver::new(dataset, config.step_delay),
            clock: FrameClock::new(config.fps),
            config,
            rng,
            buttons: ButtonRegions::default(),
            highlight: Highlight::none(),
            should_quit: false,
            status_message: String::from("Ready! Click a button to start sorting"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.clock.tick();

            // Drain input without blocking; the clock already paced this frame
            while event::poll(Duration::ZERO)? {
                let event = event::read()?;
                self.handle_event(event);
            }

            if self.should_quit {
                break;
            }

            let frame = self.advance();
            if !frame.delay.is_zero() {
                thread::sleep(frame.delay);
            }

            terminal.draw(|f| self.render(f))?;
        }

        Ok(())
    }

    /// Resume the driver once and record what to highlight
    pub fn advance(&mut self) -> DriverFrame {
        let was_running = self.driver.is_running();
        let frame = self.driver.tick();
        self.highlight = frame.highlight;

        if was_running && !self.driver.is_running() {
            if let Some(algorithm) = self.driver.selected() {
                self.status_message = format!("{} finished", algorithm);
            }
        }
        frame
    }

    /// Split the terminal into the canvas and the status line
    fn layout(&self, area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let canvas = Rect {
            width: chunks[0].width.min(self.config.width),
            height: chunks[0].height.min(self.config.height),
            ..chunks[0]
        };
        (canvas, chunks[1])
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let (canvas, status_area) = self.layout(frame.area());

        frame.render_widget(
            Block::default().style(Style::default().bg(DEFAULT_THEME.bg)),
            canvas,
        );

        self.buttons = panes::button_regions(canvas);
        panes::render_buttons(frame, &self.buttons, self.driver.selected());

        let top_pad = self.config.top_pad.min(canvas.height);
        let plot = Rect {
            y: canvas.y + top_pad,
            height: canvas.height - top_pad,
            ..canvas
        };
        frame.render_widget(
            panes::BarsWidget::new(self.driver.dataset(), self.highlight, self.config.side_pad),
            plot,
        );

        panes::render_status_bar(
            frame,
            status_area,
            &StatusRenderData {
                message: &self.status_message,
                algorithm: self.driver.selected(),
                stats: self.driver.stats(),
                is_running: self.driver.is_running(),
            },
        );
    }

    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('1') => self.select(Algorithm::Bubble),
            KeyCode::Char('2') => self.select(Algorithm::Quick),
            KeyCode::Char('r') | KeyCode::Char('R') => self.regenerate(),
            _ => {}
        }
    }

    /// Left clicks inside a button start that algorithm
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(algorithm) = panes::hit_test(&self.buttons, mouse.column, mouse.row) {
            self.select(algorithm);
        }
    }

    /// Start `algorithm`, replacing any sort already running
    pub fn select(&mut self, algorithm: Algorithm) {
        self.driver.select(algorithm);
        self.highlight = Highlight::none();
        self.status_message = format!("Running {}...", algorithm);
    }

    /// Draw a fresh random dataset and go back to idle
    pub fn regenerate(&mut self) {
        let dataset = Dataset::random(
            self.config.element_count,
            self.config.value_range(),
            &mut self.rng,
        );
        info!("regenerated dataset");
        self.driver.reset(dataset);
        self.highlight = Highlight::none();
        self.status_message = String::from("New dataset");
    }

    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
