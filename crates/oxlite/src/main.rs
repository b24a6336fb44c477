//! oxlite entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_actions::io_ops::open_file;
use core_actions::{Clipboard, KeyTranslator, dispatch};
use core_config::Config;
use core_events::{InputEvent, KeyEvent};
use core_render::Layout;
use core_state::EditorState;
use core_terminal::{CrosstermBackend, TerminalBackend};
use core_text::Buffer;
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{info, trace};
use tracing_appender::non_blocking::WorkerGuard;

mod clipboard;

const LOG_FILE: &str = "oxlite.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "oxlite", version, about = "Small modal text editor")]
struct Args {
    /// File to edit; created empty at startup if missing. Defaults to `default_file` from config.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `oxlite.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        if tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
            .is_ok()
        {
            self.log_guard = Some(guard);
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                core_terminal::restore_best_effort();
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }

    fn load_editor_state(args: &Args, config: &Config) -> Result<EditorState> {
        let path = args.path.clone().unwrap_or_else(|| config.default_file());
        let buffer =
            open_file(&path).with_context(|| format!("cannot open {}", path.display()))?;
        log_buffer_loaded(&path, &buffer);

        let mut state = EditorState::with_undo_capacity(buffer, config.undo_capacity());
        state.tab_width = config.tab_width();
        state.page_divisor = config.page_divisor();
        state.file_name = Some(path);
        Ok(state)
    }
}

fn log_buffer_loaded(path: &Path, buffer: &Buffer) {
    info!(
        target: "runtime.startup",
        path = %path.display(),
        lines = buffer.line_count(),
        chars = buffer.char_count(),
        "buffer_loaded"
    );
}

struct EditorRuntime {
    state: EditorState,
    config: Config,
    translator: KeyTranslator,
    clipboard: Box<dyn Clipboard>,
    /// Terminal size as (columns, rows).
    size: (u16, u16),
    layout: Layout,
}

impl EditorRuntime {
    fn new(
        state: EditorState,
        config: Config,
        clipboard: Box<dyn Clipboard>,
        size: (u16, u16),
    ) -> Self {
        let layout = Layout::new(size.0, size.1, config.gutter_width());
        let mut rt = Self {
            state,
            config,
            translator: KeyTranslator::new(),
            clipboard,
            size,
            layout,
        };
        rt.handle_resize(size.0, size.1);
        rt
    }

    fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        loop {
            core_render::render(&self.state, &self.layout, self.size.0, out)?;
            match core_input::read_event()? {
                InputEvent::Resize(w, h) => self.handle_resize(w, h),
                InputEvent::Key(key) => {
                    if self.handle_key(&key) {
                        info!(target: "runtime", "quit");
                        return Ok(());
                    }
                }
            }
        }
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        let columns = self.config.layout_columns(width);
        self.layout = Layout::new(columns, height, self.config.gutter_width());
        self.state.viewport.resize(
            usize::from(self.layout.text_rows()),
            usize::from(self.layout.text_cols()),
        );
        self.state.follow_cursor();
        trace!(target: "runtime", width, height, columns, "resize");
    }

    /// Returns true when the editor should exit.
    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let Some(action) = self.translator.translate(self.state.mode, key) else {
            trace!(target: "runtime.input", key = %key.code, mode = self.state.mode.label(), "unbound");
            return false;
        };
        dispatch(action, &mut self.state, self.clipboard.as_mut()).quit
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.configure_logging()?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", "startup");

    let config = core_config::load_from(args.config.clone())?;
    let state = AppStartup::load_editor_state(&args, &config)?;
    let clipboard = clipboard::open();

    let mut backend = CrosstermBackend::new();
    let size = backend.size()?;
    let title = state
        .file_name
        .as_deref()
        .and_then(Path::file_name)
        .map(|n| format!("oxlite - {}", n.to_string_lossy()))
        .unwrap_or_else(|| "oxlite".to_string());
    let _ = backend.set_title(&title);

    // The guard is dropped before a runtime error propagates out of main.
    let result = {
        let _guard = backend.enter_guard()?;
        let mut runtime = EditorRuntime::new(state, config, clipboard, size);
        let mut out = stdout().lock();
        runtime.run(&mut out)
    };
    drop(startup);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_actions::MemoryClipboard;
    use core_state::Mode;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Dispatch, Subscriber};
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Clone, Default)]
    struct Capture {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    #[derive(Clone, Debug)]
    struct CapturedEvent {
        target: String,
        fields: Vec<(String, String)>,
    }

    #[derive(Default)]
    struct FieldCollector {
        fields: Vec<(String, String)>,
    }

    impl Visit for FieldCollector {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.fields
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }

    impl<S> Layer<S> for Capture
    where
        S: Subscriber,
    {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut collector = FieldCollector::default();
            event.record(&mut collector);
            let meta = event.metadata();
            self.events.lock().unwrap().push(CapturedEvent {
                target: meta.target().to_string(),
                fields: collector.fields,
            });
        }
    }

    fn runtime(lines: &[&str]) -> EditorRuntime {
        let state = EditorState::new(Buffer::from_lines(lines.iter().copied()));
        EditorRuntime::new(
            state,
            Config::default(),
            Box::new(MemoryClipboard::new()),
            (100, 30),
        )
    }

    #[test]
    fn buffer_loaded_log_redacts_content() {
        let capture = Capture::default();
        let events = capture.events.clone();
        let dispatcher = Dispatch::new(Registry::default().with(capture));

        tracing::dispatcher::with_default(&dispatcher, || {
            let buffer = Buffer::from_lines(["classified buffer ✂️", "second"]);
            log_buffer_loaded(Path::new("secret.txt"), &buffer);
        });

        let events = events.lock().unwrap();
        let event = events
            .iter()
            .find(|e| e.target == "runtime.startup")
            .expect("missing runtime.startup event");
        assert!(event.fields.iter().any(|(n, v)| n == "lines" && v == "2"));
        for (_, value) in &event.fields {
            assert!(!value.contains("classified"), "event leaked content: {value}");
        }
    }

    #[test]
    fn resize_applies_column_floor_and_status_row() {
        let mut rt = runtime(&["a"]);
        assert_eq!(rt.state.viewport.rows(), 29);
        assert_eq!(rt.state.viewport.cols(), 95);
        rt.handle_resize(40, 10);
        assert_eq!(rt.layout.width, 78);
        assert_eq!(rt.state.viewport.rows(), 9);
        assert_eq!(rt.state.viewport.cols(), 73);
    }

    #[test]
    fn keys_flow_through_translator_and_dispatch() {
        let mut rt = runtime(&["abc"]);
        assert!(!rt.handle_key(&KeyEvent::from('i')));
        assert_eq!(rt.state.mode, Mode::Insert);
        assert!(!rt.handle_key(&KeyEvent::from('x')));
        assert_eq!(rt.state.buffer().line_string(0).as_deref(), Some("xabc"));
        assert!(!rt.handle_key(&KeyEvent::plain(core_events::KeyCode::Esc)));
        assert!(!rt.handle_key(&KeyEvent::from('q')));
        assert_eq!(rt.state.mode, Mode::QuitConfirm);
        assert!(rt.handle_key(&KeyEvent::from('n')));
    }

    #[test]
    fn unbound_key_is_ignored() {
        let mut rt = runtime(&["abc"]);
        assert!(!rt.handle_key(&KeyEvent::from('Z')));
        assert_eq!(rt.state.buffer().to_strings(), vec!["abc".to_string()]);
    }

    #[test]
    fn load_uses_config_defaults_and_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");
        let args = Args {
            path: Some(path.clone()),
            config: None,
        };
        let state = AppStartup::load_editor_state(&args, &Config::default()).unwrap();
        assert!(path.exists(), "missing file is created at startup");
        assert_eq!(state.file_name.as_deref(), Some(path.as_path()));
        assert_eq!(state.undo_capacity(), 500);
        assert_eq!(state.buffer().line_count(), 1);
    }
}
