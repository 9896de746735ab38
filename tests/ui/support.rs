use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, layout::Rect, Frame, Terminal};
use uuid::Uuid;
use viewhost::ui::core::{
    CompletionSignal, Dialog, DialogHost, DialogShell, DrawerDirection, DrawerRequest, DrawerSubscriber, View,
};

/// Shared, ordered record of what happened during a test
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn events(log: &EventLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[derive(Debug, Default)]
pub struct BlankView;

impl View for BlankView {
    fn render(&mut self, _f: &mut Frame, _rect: Rect) {}
}

/// Dialog that completes with a fixed value on Enter and records when its result is read
pub struct RecordingDialog {
    pub value: u32,
    pub log: EventLog,
    completion: Option<CompletionSignal>,
    result: Option<u32>,
}

impl RecordingDialog {
    pub fn new(value: u32, log: EventLog) -> Self {
        Self {
            value,
            log,
            completion: None,
            result: None,
        }
    }
}

impl View for RecordingDialog {
    fn handle_key_events(&mut self, key: KeyEvent) -> viewhost::ui::core::ViewAction {
        if key.code == KeyCode::Enter {
            self.result = Some(self.value);
            self.log.lock().unwrap().push("complete".to_string());
            if let Some(signal) = self.completion.take() {
                signal.complete();
            }
            return viewhost::ui::core::ViewAction::Close;
        }
        viewhost::ui::core::ViewAction::None
    }

    fn render(&mut self, _f: &mut Frame, _rect: Rect) {}
}

impl Dialog for RecordingDialog {
    type Output = Option<u32>;

    fn bind_completion(&mut self, signal: CompletionSignal) {
        self.completion = Some(signal);
    }

    fn take_result(&mut self) -> Option<u32> {
        self.log.lock().unwrap().push("result".to_string());
        self.result.take()
    }
}

/// Dialog host that draws every shell it opens once, then presses a sequence of keys on it
pub struct ScriptedHost {
    pub log: EventLog,
    pub keys: Vec<KeyEvent>,
    pub shells: Mutex<Vec<(Uuid, String, String)>>,
    pub screens: Mutex<Vec<String>>,
}

impl ScriptedHost {
    pub fn new(log: EventLog, keys: Vec<KeyEvent>) -> Arc<Self> {
        Arc::new(Self {
            log,
            keys,
            shells: Mutex::new(Vec::new()),
            screens: Mutex::new(Vec::new()),
        })
    }

    pub fn screens(&self) -> Vec<String> {
        self.screens.lock().unwrap().clone()
    }
}

/// Draw a view on a 60x20 test terminal and return the screen as one string
pub fn draw_screen(view: &mut dyn View) -> String {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            view.render(f, area);
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

impl DialogHost for ScriptedHost {
    fn open(&self, shell: DialogShell) {
        self.log.lock().unwrap().push("open".to_string());
        self.shells
            .lock()
            .unwrap()
            .push((shell.id, shell.title.clone(), shell.owner.clone()));

        let screen = draw_screen(&mut *shell.content.lock().unwrap());
        self.screens.lock().unwrap().push(screen);

        let keys = self.keys.clone();
        tokio::spawn(async move {
            for key in keys {
                tokio::task::yield_now().await;
                let mut content = shell.content.lock().unwrap();
                content.handle_key_events(key);
            }
        });
    }

    fn dismiss(&self, shell_id: Uuid) {
        let opened = self.shells.lock().unwrap().iter().any(|(id, _, _)| *id == shell_id);
        assert!(opened, "dismissed a shell that was never opened");
        self.log.lock().unwrap().push("dismiss".to_string());
    }
}

/// Drawer subscriber that records every request it receives
#[derive(Default)]
pub struct RecordingSubscriber {
    pub requests: Mutex<Vec<(Option<String>, DrawerDirection)>>,
}

impl RecordingSubscriber {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn requests(&self) -> Vec<(Option<String>, DrawerDirection)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DrawerSubscriber for RecordingSubscriber {
    async fn show_drawer(&self, request: DrawerRequest) {
        self.requests.lock().unwrap().push((request.title, request.direction));
    }
}
