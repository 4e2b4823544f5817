use std::io::Write;

use super::layer::Figure;

/// Downstream consumer of assembled figures.
pub trait FigureSink {
    type Error;

    fn draw(&mut self, figure: &Figure) -> Result<(), Self::Error>;
}

/// Writes one JSON document per figure, newline separated.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FigureSink for JsonLinesSink<W> {
    type Error = serde_json::Error;

    fn draw(&mut self, figure: &Figure) -> Result<(), Self::Error> {
        serde_json::to_writer(&mut self.writer, figure)?;
        self.writer.write_all(b"\n").map_err(serde_json::Error::io)
    }
}

/// Keeps figures in memory.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub figures: Vec<Figure>,
}

impl FigureSink for CollectSink {
    type Error = std::convert::Infallible;

    fn draw(&mut self, figure: &Figure) -> Result<(), Self::Error> {
        self.figures.push(figure.clone());
        Ok(())
    }
}
