use std::panic::{self, AssertUnwindSafe};

use pulldown_cmark::{Options, Parser, html};
use pulldown_cmark_escape::escape_html;

use super::error::{AppError, Result};

const SHELL_OPEN: &str = "<html><body><font face=\"sans-serif\">";
const SHELL_CLOSE: &str = "</font></body></html>";

/// Converts markdown source into an HTML fragment.
pub trait MarkdownConverter {
    fn to_html(&self, markdown: &str) -> Result<String>;
}

/// pulldown-cmark backed converter.
pub struct CmarkConverter {
    options: Options,
}

impl Default for CmarkConverter {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        Self { options }
    }
}

impl MarkdownConverter for CmarkConverter {
    fn to_html(&self, markdown: &str) -> Result<String> {
        let parser = Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        Ok(html_output)
    }
}

/// Display target for a rendered preview document.
pub trait PreviewSurface {
    fn show_html(&mut self, html: &str);
}

/// Turns document text into a complete, displayable HTML document.
pub struct PreviewRenderer {
    converter: Box<dyn MarkdownConverter>,
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new(Box::new(CmarkConverter::default()))
    }
}

impl PreviewRenderer {
    pub fn new(converter: Box<dyn MarkdownConverter>) -> Self {
        Self { converter }
    }

    /// Render `markdown` into a full preview document.
    ///
    /// Never fails: a converter error or panic yields a placeholder document.
    pub fn render(&self, markdown: &str) -> String {
        let converted = panic::catch_unwind(AssertUnwindSafe(|| self.converter.to_html(markdown)))
            .unwrap_or_else(|payload| Err(AppError::Render(panic_message(&*payload))));

        match converted {
            Ok(fragment) => wrap_preview_shell(&fragment),
            Err(e) => {
                log::error!("Markdown conversion failed: {}", e);
                placeholder_html(&e.to_string())
            }
        }
    }
}

/// Holds the live Preview HTML and pushes every render to its surface.
pub struct PreviewController {
    renderer: PreviewRenderer,
    surface: Box<dyn PreviewSurface>,
    current_html: String,
    render_count: u64,
}

impl PreviewController {
    pub fn new(renderer: PreviewRenderer, surface: Box<dyn PreviewSurface>) -> Self {
        Self {
            renderer,
            surface,
            current_html: String::new(),
            render_count: 0,
        }
    }

    /// Re-render from the full document text, replacing the previous preview.
    pub fn refresh(&mut self, text: &str) {
        let html = self.renderer.render(text);
        self.surface.show_html(&html);
        self.current_html = html;
        self.render_count += 1;
        log::debug!("Preview render #{} ({} bytes of source)", self.render_count, text.len());
    }

    pub fn current_html(&self) -> &str {
        &self.current_html
    }

    pub fn render_count(&self) -> u64 {
        self.render_count
    }
}

/// Wrap an HTML fragment in the preview's sans-serif document shell.
pub fn wrap_preview_shell(fragment: &str) -> String {
    let mut out = String::with_capacity(SHELL_OPEN.len() + fragment.len() + SHELL_CLOSE.len());
    out.push_str(SHELL_OPEN);
    out.push_str(fragment);
    out.push_str(SHELL_CLOSE);
    out
}

/// The fragment inside a document produced by `wrap_preview_shell`.
pub fn shell_body(document: &str) -> Option<&str> {
    document.strip_prefix(SHELL_OPEN)?.strip_suffix(SHELL_CLOSE)
}

fn placeholder_html(cause: &str) -> String {
    let mut fragment = String::from("<h3>Preview unavailable</h3><p>");
    // Writing into a String cannot fail.
    let _ = escape_html(&mut fragment, cause);
    fragment.push_str("</p>");
    wrap_preview_shell(&fragment)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("converter panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("converter panicked: {}", s)
    } else {
        "converter panicked".to_string()
    }
}
