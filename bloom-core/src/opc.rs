use std::io::Write;
use std::net::TcpStream;

use crate::color::Color;
use crate::foundation::error::{BloomError, BloomResult};
use crate::sink::PixelSink;

/// Open Pixel Control command code for "set pixel colors".
const SET_PIXEL_COLORS: u8 = 0;

/// Strips addressable by the controller, whether populated or not.
const STRIPS: usize = 8;

/// Pixels addressable along each strip.
const PIXELS_PER_STRIP: usize = 64;

/// Client for one Open Pixel Control server.
///
/// The TCP connection is opened lazily on the first send and dropped on
/// any write failure, so the next frame retries from scratch. A flapping
/// server costs frames, not the whole run.
#[derive(Debug)]
pub struct OpcClient {
    address: String,
    stream: Option<TcpStream>,
}

impl OpcClient {
    /// Client for the server at `address` (`host:port`), not yet connected.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            stream: None,
        }
    }

    /// The server address this client talks to.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Send one set-pixel-colors message for `channel`.
    ///
    /// Each pixel is an RGB triple; the payload carries them in order.
    pub fn send(&mut self, channel: u8, pixels: &[[u8; 3]]) -> BloomResult<()> {
        let payload_len = pixels.len() * 3;
        if payload_len > usize::from(u16::MAX) {
            return Err(BloomError::validation(format!(
                "OPC payload of {} pixels exceeds the u16 length field",
                pixels.len()
            )));
        }
        let mut stream = match self.stream.take() {
            Some(stream) => stream,
            None => {
                let fresh = TcpStream::connect(&self.address)?;
                fresh.set_nodelay(true)?;
                tracing::debug!(address = %self.address, "connected to OPC server");
                fresh
            }
        };
        let mut message = Vec::with_capacity(4 + payload_len);
        message.push(channel);
        message.push(SET_PIXEL_COLORS);
        message.extend_from_slice(&(payload_len as u16).to_be_bytes());
        for rgb in pixels {
            message.extend_from_slice(rgb);
        }
        // A failed write leaves the stream dropped; the next send reconnects.
        if let Err(err) = stream.write_all(&message) {
            tracing::warn!(address = %self.address, error = %err, "dropped OPC connection");
            return Err(err.into());
        }
        self.stream = Some(stream);
        Ok(())
    }
}

/// Pixel buffer shaped like the controller's full address space.
///
/// A conceptual matrix of 8 strips with 64 pixels each. The reference
/// hardware populates only 7 strips of 8 pixels; the rest stay black and
/// drive nothing. Renders accumulate in the buffer until [`blit`] pushes
/// the whole matrix to the server in one message.
///
/// [`blit`]: OpcDisplay::blit
#[derive(Debug)]
pub struct OpcDisplay {
    client: OpcClient,
    pixels: Vec<[u8; 3]>,
}

impl OpcDisplay {
    /// An all-black display backed by `client`.
    pub fn new(client: OpcClient) -> Self {
        Self {
            client,
            pixels: vec![[0, 0, 0]; STRIPS * PIXELS_PER_STRIP],
        }
    }

    /// The address of the server behind this display.
    pub fn address(&self) -> &str {
        self.client.address()
    }

    /// Push the buffered matrix to the server on channel 0.
    pub fn blit(&mut self) -> BloomResult<()> {
        self.client.send(0, &self.pixels)
    }
}

impl PixelSink for OpcDisplay {
    // Writes beyond the address space are dropped.
    fn set(&mut self, ring: u32, position: u32, color: Color) {
        let (ring, position) = (ring as usize, position as usize);
        if ring < STRIPS && position < PIXELS_PER_STRIP {
            self.pixels[ring * PIXELS_PER_STRIP + position] = color.rgb();
        }
    }
}

/// Black out every pixel the server at `client` drives.
pub fn clear(client: &mut OpcClient) -> BloomResult<()> {
    client.send(0, &[[0, 0, 0]; STRIPS * PIXELS_PER_STRIP])
}

#[cfg(test)]
#[path = "../tests/unit/opc.rs"]
mod tests;
