//! Character-grid renderer for terminal previews.

use std::io::Write;

use crate::error::Result;
use crate::geometry::{ColorRgba, Point2D};
use crate::scene::{DrawCall, PrimitiveKind};

use super::{Frame, Renderer};

/// Glyphs from darkest to brightest
const RAMP: &[u8] = b" .:-=+*#%@";

/// Draws frames as text, later shapes painting over earlier ones
pub struct AsciiRenderer<W: Write> {
    out: W,
    cols: usize,
    rows: usize,
    grid: Vec<u8>,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            out,
            cols,
            rows,
            grid: vec![b' '; cols * rows],
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// The last rasterized grid, one string per row
    pub fn lines(&self) -> Vec<String> {
        self.grid
            .chunks(self.cols)
            .map(|row| String::from_utf8_lossy(row).into_owned())
            .collect()
    }

    fn clear(&mut self) {
        self.grid.iter_mut().for_each(|cell| *cell = b' ');
    }

    fn glyph(color: ColorRgba) -> u8 {
        let lum = color.luminance().clamp(0.0, 1.0);
        // Anything drawn stays visible, however dark.
        let index = ((lum * (RAMP.len() - 1) as f64).round() as usize).max(1);
        RAMP[index.min(RAMP.len() - 1)]
    }

    fn cell_of(&self, p: Point2D) -> Option<(usize, usize)> {
        let col = ((p.x + 1.0) / 2.0 * self.cols as f64).floor();
        let row = ((1.0 - p.y) / 2.0 * self.rows as f64).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f64 || row >= self.rows as f64 {
            return None;
        }
        Some((col as usize, row as usize))
    }

    /// Clip-space center of a cell
    fn center_of(&self, col: usize, row: usize) -> Point2D {
        Point2D::new(
            (col as f64 + 0.5) / self.cols as f64 * 2.0 - 1.0,
            1.0 - (row as f64 + 0.5) / self.rows as f64 * 2.0,
        )
    }

    fn plot(&mut self, p: Point2D, glyph: u8) {
        if let Some((col, row)) = self.cell_of(p) {
            self.grid[row * self.cols + col] = glyph;
        }
    }

    fn line(&mut self, a: Point2D, b: Point2D, glyph: u8) {
        let span_x = (b.x - a.x).abs() / 2.0 * self.cols as f64;
        let span_y = (b.y - a.y).abs() / 2.0 * self.rows as f64;
        let steps = span_x.max(span_y).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            self.plot(
                Point2D::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t),
                glyph,
            );
        }
    }

    fn fill_triangle(&mut self, a: Point2D, b: Point2D, c: Point2D, glyph: u8) {
        let edge = |p: Point2D, q: Point2D, r: Point2D| {
            (q.x - p.x) * (r.y - p.y) - (q.y - p.y) * (r.x - p.x)
        };
        let area = edge(a, b, c);
        if area == 0.0 {
            self.line(a, b, glyph);
            self.line(b, c, glyph);
            return;
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                let p = self.center_of(col, row);
                let w0 = edge(b, c, p) / area;
                let w1 = edge(c, a, p) / area;
                let w2 = edge(a, b, p) / area;
                if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                    self.grid[row * self.cols + col] = glyph;
                }
            }
        }
    }

    fn draw_call(&mut self, frame: &Frame<'_>, call: &DrawCall) {
        let vertices = frame.resolve_vertices(call);
        let Some(&first) = vertices.first() else {
            return;
        };

        match call.kind {
            PrimitiveKind::PointCloud => {
                for (i, &p) in vertices.iter().enumerate() {
                    let glyph = Self::glyph(frame.resolve_color(call, i, p));
                    self.plot(p, glyph);
                }
            }
            PrimitiveKind::PolygonOutline => {
                let glyph = Self::glyph(frame.resolve_color(call, 0, first));
                if vertices.len() == 1 {
                    self.plot(first, glyph);
                }
                for (i, &a) in vertices.iter().enumerate() {
                    let b = vertices[(i + 1) % vertices.len()];
                    self.line(a, b, glyph);
                }
            }
            PrimitiveKind::FilledFan => {
                let glyph = Self::glyph(frame.resolve_color(call, 0, first));
                if vertices.len() < 3 {
                    for &p in &vertices {
                        self.plot(p, glyph);
                    }
                }
                for pair in vertices[1..].windows(2) {
                    self.fill_triangle(first, pair[0], pair[1], glyph);
                }
            }
        }
    }
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.clear();
        for call in &frame.calls {
            self.draw_call(frame, call);
        }

        writeln!(
            self.out,
            "+{:-<width$}+ {} | shapes: {} | vertices: {}",
            "",
            frame.stage,
            frame.calls.len(),
            frame.vertex_count(),
            width = self.cols
        )?;
        for row in self.grid.chunks(self.cols) {
            self.out.write_all(b"|")?;
            self.out.write_all(row)?;
            self.out.write_all(b"|\n")?;
        }
        writeln!(self.out, "+{:-<width$}+", "", width = self.cols)?;
        self.out.flush()?;
        Ok(())
    }
}
