use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::CanvasError;
use crate::geometry::Taxel;

const DEFAULT_FILENAME: &str = "symbol.svg";
const FOOTER: &str = "</svg>\n";

/// An SVG document under construction. Width and height are in millimeters
/// and the view box uses the same numbers, so one user unit is one millimeter.
///
/// Fragments are painted in the order they were appended.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: f64,
    height: f64,
    filename: PathBuf,
    header: String,
    fragments: Vec<String>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_filename(width, height, DEFAULT_FILENAME)
    }

    pub fn with_filename<T>(width: f64, height: f64, filename: T) -> Self
    where
        T: AsRef<Path>,
    {
        let header = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\"\n     width=\"{width}mm\"\n     \
             height=\"{height}mm\"\n     viewBox=\"0 0 {width} {height}\">\n"
        );
        Self {
            width,
            height,
            filename: filename.as_ref().to_path_buf(),
            header,
            fragments: Vec::new(),
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn set_filename<T: AsRef<Path>>(&mut self, filename: T) {
        self.filename = filename.as_ref().to_path_buf();
    }

    pub fn append<T: Into<String>>(&mut self, fragment: T) {
        self.fragments.push(fragment.into());
    }

    /// Appends the taxel's markup. A taxel with no drawable bar adds nothing.
    pub fn add(&mut self, taxel: &Taxel) {
        match taxel.render() {
            Some(src) => self.append(src),
            None => debug!("skipping empty taxel at ({}, {}) for {}", taxel.x, taxel.y, taxel.color),
        }
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The complete document. Does not consume or change the canvas.
    pub fn finalize(&self) -> String {
        let body: usize = self.fragments.iter().map(|f| f.len() + 1).sum();
        let mut out = String::with_capacity(self.header.len() + body + FOOTER.len());
        out.push_str(&self.header);
        for fragment in &self.fragments {
            out.push_str(fragment);
            out.push('\n');
        }
        out.push_str(FOOTER);
        out
    }

    /// Writes the document to `filename`, replacing whatever is there.
    pub fn persist(&self) -> Result<(), CanvasError> {
        std::fs::write(&self.filename, self.finalize()).map_err(|source| CanvasError::Write {
            path: self.filename.clone(),
            source,
        })?;
        info!("{} file generated.", self.filename.display());
        Ok(())
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::taxel;
    use svg::node::element::tag;
    use svg::parser::Event;
    use taco_color::Hsv;

    fn rect_count(src: &str) -> usize {
        svg::read(src)
            .unwrap()
            .filter(|e| matches!(e, Event::Tag(tag::Rectangle, _, _)))
            .count()
    }

    #[test]
    fn test_empty_document() {
        let canvas = Canvas::new(50.0, 50.0);
        let src = canvas.finalize();
        assert_eq!(
            src,
            "<svg xmlns=\"http://www.w3.org/2000/svg\"\n     width=\"50mm\"\n     height=\"50mm\"\n     \
             viewBox=\"0 0 50 50\">\n</svg>\n"
        );
        assert!(!src.contains("<rect"));
        assert!(canvas.is_empty());
        assert_eq!(canvas.filename(), Path::new("symbol.svg"));
    }

    #[test]
    fn test_fractional_size() {
        let src = Canvas::new(104.0, 154.5).finalize();
        assert!(src.contains("width=\"104mm\""));
        assert!(src.contains("height=\"154.5mm\""));
        assert!(src.contains("viewBox=\"0 0 104 154.5\""));
    }

    #[test]
    fn test_append_keeps_order() {
        let mut canvas = Canvas::new(10.0, 10.0);
        canvas.append("<!-- a -->");
        canvas.append(String::from("<!-- b -->"));
        canvas.append("<!-- c -->");
        let src = canvas.finalize();
        let a = src.find("a -->").unwrap();
        let b = src.find("b -->").unwrap();
        let c = src.find("c -->").unwrap();
        assert!(a < b && b < c);
        assert!(src.ends_with("<!-- c -->\n</svg>\n"));
        assert_eq!(canvas.len(), 3);
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let mut canvas = Canvas::new(20.0, 20.0);
        canvas.add(&taxel(2.0, 5.5, Hsv { h: 40.0, s: 80.0, v: 60.0 }));
        assert_eq!(canvas.finalize(), canvas.finalize());
        assert_eq!(canvas.to_string(), canvas.finalize());
    }

    #[test]
    fn test_add_taxels() {
        let mut canvas = Canvas::new(50.0, 50.0);
        canvas.add(&taxel(2.0, 5.5, Hsv { h: 0.0, s: 100.0, v: 100.0 }));
        canvas.add(&taxel(12.0, 5.5, Hsv { h: 0.0, s: 0.0, v: 50.0 }));
        canvas.add(&taxel(22.0, 5.5, Hsv { h: 0.0, s: 0.0, v: 400.0 }));
        assert_eq!(canvas.len(), 2);

        let src = canvas.finalize();
        assert_eq!(rect_count(&src), 3);
        assert!(svg::read(&src).unwrap().all(|e| !matches!(e, Event::Error(_))));
    }

    #[test]
    fn test_persist_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.svg");
        std::fs::write(&path, "stale").unwrap();

        let mut canvas = Canvas::with_filename(50.0, 50.0, &path);
        canvas.add(&taxel(2.0, 5.5, Hsv { h: 90.0, s: 40.0, v: 70.0 }));
        canvas.persist().unwrap();
        canvas.persist().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, canvas.finalize());
        assert_eq!(rect_count(&written), 2);
    }

    #[test]
    fn test_persist_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut canvas = Canvas::new(50.0, 50.0);
        canvas.set_filename(dir.path().join("missing").join("card.svg"));

        match canvas.persist() {
            Err(CanvasError::Write { path, .. }) => assert_eq!(path, canvas.filename()),
            other => panic!("expected write failure, got {other:?}"),
        }
    }
}
