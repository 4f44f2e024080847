use std::{
    io::{self, stdout, Write},
    net::SocketAddr,
    thread::sleep,
    time::Duration,
};

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use server::GreetingServer;
use tracing::{info, warn};

use crate::{input::is_ctrl_c, tcp_client::TcpClient};

/// how long the menu waits for a key before checking on the server again.
const POLL_INTERVAL: Duration = Duration::from_millis(50);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
const SELF_CONNECT_POLLS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuExit {
    Play,
    Quit,
}

/// the screen shown before a game. besides starting the game it can run the greeting server and
/// client, to check that two machines can reach each other.
pub struct StartMenu {
    listen_addr: SocketAddr,
    server_addr: SocketAddr,
    server: Option<GreetingServer>,
    status: String,
}

impl StartMenu {
    pub fn new(listen_addr: SocketAddr, server_addr: SocketAddr) -> Self {
        Self {
            listen_addr,
            server_addr,
            server: None,
            status: String::new(),
        }
    }

    pub fn run(mut self) -> io::Result<MenuExit> {
        let mut stdout = stdout();
        self.draw(&mut stdout)?;
        loop {
            let mut redraw = self.poll_server();
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if let Some(exit) = self.handle_key(key) {
                            return Ok(exit);
                        }
                        redraw = true;
                    }
                    Event::Resize(..) => redraw = true,
                    _ => {}
                }
            }
            if redraw {
                self.draw(&mut stdout)?;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<MenuExit> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if is_ctrl_c(key) {
            return Some(MenuExit::Quit);
        }
        match key.code {
            KeyCode::Char('p') | KeyCode::Char('q') | KeyCode::Enter => {
                return Some(MenuExit::Play)
            }
            KeyCode::Char('s') => self.start_server(),
            KeyCode::Char('c') => self.fetch_greeting(),
            _ => {}
        }
        None
    }

    /// greets a waiting client, if the server is running and there is one. returns true if the
    /// status line changed.
    pub fn poll_server(&mut self) -> bool {
        match self.server.as_ref().and_then(|server| server.poll_accept()) {
            Some(peer_addr) => {
                self.status = format!("greeted {peer_addr}");
                true
            }
            None => false,
        }
    }

    fn start_server(&mut self) {
        if let Some(addr) = self.server.as_ref().and_then(|server| server.local_addr().ok()) {
            self.status = format!("already serving on {addr}");
            return;
        }
        let server = GreetingServer::bind(self.listen_addr)
            .and_then(|server| server.set_nonblocking().map(|_| server));
        match server {
            Ok(server) => {
                let addr = server.local_addr().unwrap_or(self.listen_addr);
                info!("started server on {addr}");
                self.status = format!("serving on {addr}");
                self.server = Some(server);
            }
            Err(err) => {
                warn!("{err}");
                self.status = err.to_string();
            }
        }
    }

    fn fetch_greeting(&mut self) {
        let client = match TcpClient::connect(self.server_addr, CONNECT_TIMEOUT) {
            Ok(client) => client,
            Err(err) => {
                warn!("{err}");
                self.status = err.to_string();
                return;
            }
        };
        // the menu may be running the server we just connected to. it has to answer before
        // anything can be read.
        if self.server.is_some() {
            for _ in 0..SELF_CONNECT_POLLS {
                if self.poll_server() {
                    break;
                }
                sleep(POLL_INTERVAL / 5);
            }
        }
        self.status = match client.read_greeting() {
            Ok(greeting) => {
                info!("server {} says {greeting:?}", self.server_addr);
                format!("server says: {greeting}")
            }
            Err(err) => {
                warn!("{err}");
                err.to_string()
            }
        };
    }

    pub fn draw<W: Write>(&self, w: &mut W) -> io::Result<()> {
        queue!(
            w,
            Clear(ClearType::All),
            MoveTo(0, 0),
            SetAttribute(Attribute::Bold),
            Print("START MENU"),
            SetAttribute(Attribute::Reset),
        )?;
        let lines = [
            "p, q, enter  play against the computer".to_owned(),
            format!("s            start the server on {}", self.listen_addr),
            format!("c            connect to the server on {}", self.server_addr),
            "ctrl-c       quit".to_owned(),
        ];
        for (row, line) in lines.iter().enumerate() {
            queue!(w, MoveTo(0, row as u16 + 2), Print(line))?;
        }
        queue!(w, MoveTo(0, lines.len() as u16 + 3), Print(&self.status))?;
        w.flush()
    }
}

#[cfg(test)]
mod tests {
    use std::net::{SocketAddr, TcpListener};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use shared::net::GREETING;

    use crate::menu::{MenuExit, StartMenu};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loopback() -> SocketAddr {
        "127.0.0.1:0".parse().unwrap()
    }

    #[test]
    fn play_and_quit_keys() {
        let mut menu = StartMenu::new(loopback(), loopback());
        for code in [KeyCode::Char('p'), KeyCode::Char('q'), KeyCode::Enter] {
            assert_eq!(menu.handle_key(press(code)), Some(MenuExit::Play));
        }
        assert_eq!(
            menu.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(MenuExit::Quit)
        );
        assert_eq!(menu.handle_key(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn starts_server_once() {
        let mut menu = StartMenu::new(loopback(), loopback());
        assert_eq!(menu.handle_key(press(KeyCode::Char('s'))), None);
        let addr = menu.server.as_ref().unwrap().local_addr().unwrap();
        assert_eq!(menu.status, format!("serving on {addr}"));
        menu.handle_key(press(KeyCode::Char('s')));
        assert_eq!(menu.status, format!("already serving on {addr}"));
    }

    #[test]
    fn server_bind_failure_is_shown() {
        let taken = TcpListener::bind(loopback()).unwrap();
        let mut menu = StartMenu::new(taken.local_addr().unwrap(), loopback());
        menu.handle_key(press(KeyCode::Char('s')));
        assert!(menu.server.is_none());
        assert!(menu.status.starts_with("failed to bind socket"));
    }

    #[test]
    fn client_reaches_own_server() {
        let mut menu = StartMenu::new(loopback(), loopback());
        menu.handle_key(press(KeyCode::Char('s')));
        menu.server_addr = menu.server.as_ref().unwrap().local_addr().unwrap();
        menu.handle_key(press(KeyCode::Char('c')));
        assert_eq!(menu.status, format!("server says: {GREETING}"));
    }

    #[test]
    fn client_failure_is_shown() {
        let closed = TcpListener::bind(loopback()).unwrap().local_addr().unwrap();
        let mut menu = StartMenu::new(loopback(), closed);
        menu.handle_key(press(KeyCode::Char('c')));
        assert!(menu.status.starts_with(&format!("failed to connect to {closed}")));
    }

    #[test]
    fn draw_shows_title_and_status() {
        let mut menu = StartMenu::new(loopback(), loopback());
        menu.status = "serving on 127.0.0.1:8080".to_owned();
        let mut out = Vec::new();
        menu.draw(&mut out).unwrap();
        let screen = String::from_utf8(out).unwrap();
        assert!(screen.contains("START MENU"));
        assert!(screen.contains("serving on 127.0.0.1:8080"));
    }
}
