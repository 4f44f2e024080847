use std::{
    io::{self, Read},
    net::{SocketAddr, TcpStream},
    string::FromUtf8Error,
    time::Duration,
};

use shared::net::MAX_GREETING_SIZE;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("failed to read from server: {0}")]
    Read(#[from] io::Error),
    #[error("server reply is not valid utf-8: {0}")]
    Utf8(#[from] FromUtf8Error),
    #[error("server reply is longer than {0} bytes")]
    TooLong(usize),
}

/// a connection to a greeting server, waiting to be read.
pub struct TcpClient {
    stream: TcpStream,
}

impl TcpClient {
    pub fn connect(addr: SocketAddr, timeout: Duration) -> Result<Self, ClientError> {
        let stream = TcpStream::connect_timeout(&addr, timeout)
            .map_err(|source| ClientError::Connect { addr, source })?;
        stream.set_read_timeout(Some(timeout))?;
        info!("connected to {addr}");
        Ok(Self { stream })
    }

    /// reads until the server hangs up.
    pub fn read_greeting(self) -> Result<String, ClientError> {
        let mut reply = Vec::with_capacity(MAX_GREETING_SIZE);
        self.stream
            .take(MAX_GREETING_SIZE as u64 + 1)
            .read_to_end(&mut reply)?;
        if reply.len() > MAX_GREETING_SIZE {
            return Err(ClientError::TooLong(MAX_GREETING_SIZE));
        }
        Ok(String::from_utf8(reply)?)
    }
}
