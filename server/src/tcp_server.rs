use std::{
    io::{self, ErrorKind, Write},
    net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs},
};

use shared::net::GREETING;
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind socket: {0}")]
    Bind(#[source] io::Error),
    #[error("failed to make socket non-blocking: {0}")]
    NonBlocking(#[source] io::Error),
}

/// answers every connection with [`GREETING`] and hangs up. nothing is read from clients.
pub struct GreetingServer {
    inner: TcpListener,
}

impl GreetingServer {
    pub fn bind<A: ToSocketAddrs>(addr: A) -> Result<Self, ServerError> {
        let inner = TcpListener::bind(addr).map_err(ServerError::Bind)?;
        Ok(Self { inner })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.inner.local_addr()
    }

    /// makes [`GreetingServer::poll_accept`] return immediately when nobody is waiting.
    pub fn set_nonblocking(&self) -> Result<(), ServerError> {
        self.inner
            .set_nonblocking(true)
            .map_err(ServerError::NonBlocking)
    }

    /// waits for one client, greets it and closes the connection. returns the client's address,
    /// or `None` if the accept failed.
    pub fn accept_one(&self) -> Option<SocketAddr> {
        match self.inner.accept() {
            Ok((stream, peer_addr)) => {
                greet(stream, peer_addr);
                Some(peer_addr)
            }
            Err(err) => {
                error!("failed to accept: {err}");
                None
            }
        }
    }

    /// like [`GreetingServer::accept_one`], but for a non-blocking listener. returns `None` straight
    /// away if no client is waiting.
    pub fn poll_accept(&self) -> Option<SocketAddr> {
        match self.inner.accept() {
            Ok((stream, peer_addr)) => {
                // some platforms hand out accepted sockets that inherit the listener's mode.
                if let Err(err) = stream.set_nonblocking(false) {
                    warn!("failed to make connection from {peer_addr} blocking: {err}");
                }
                greet(stream, peer_addr);
                Some(peer_addr)
            }
            Err(err) if err.kind() == ErrorKind::WouldBlock => None,
            Err(err) => {
                error!("failed to accept: {err}");
                None
            }
        }
    }

    pub fn serve_forever(&self) -> ! {
        info!("listening for incoming connections");
        loop {
            self.accept_one();
        }
    }
}

fn greet(mut stream: TcpStream, peer_addr: SocketAddr) {
    info!("connection established from {peer_addr}");
    match stream.write_all(GREETING.as_bytes()) {
        Ok(_) => info!("greeted {peer_addr}"),
        Err(err) => warn!("did not successfully send full greeting to {peer_addr}: {err}"),
    }
    // dropping the stream closes the connection.
}
